use chrono::{DateTime, Utc};
use folio_types::api::NewMessage;
use folio_types::models::{CanonicalProject, Message, Project};
use folio_types::time;
use rusqlite::{Connection, OptionalExtension, Row};

use crate::Database;
use crate::models::{MessageRow, ProjectRow};
use anyhow::Result;

const PROJECT_COLUMNS: &str =
    "id, title, description, tech_stack, image_url, project_url, github_url, created_at";

impl Database {
    // -- Projects --

    /// All projects, newest first.
    pub fn list_projects(&self) -> Result<Vec<Project>> {
        self.with_conn(|conn| {
            let rows = query_projects(conn)?;
            Ok(rows.into_iter().map(Project::from).collect())
        })
    }

    pub fn find_project_by_title(&self, title: &str) -> Result<Option<ProjectRow>> {
        self.with_conn(|conn| query_project_by_title(conn, title))
    }

    // -- Messages --

    /// Appends one message. The write runs in its own transaction, so a
    /// failure leaves nothing behind.
    pub fn insert_message(&self, msg: &NewMessage, created_at: DateTime<Utc>) -> Result<i64> {
        self.with_conn_mut(|conn| {
            let tx = conn.transaction()?;
            tx.execute(
                "INSERT INTO messages (name, email, message, created_at) VALUES (?1, ?2, ?3, ?4)",
                (&msg.name, &msg.email, &msg.message, time::to_storage(&created_at)),
            )?;
            let id = tx.last_insert_rowid();
            tx.commit()?;
            Ok(id)
        })
    }

    /// All messages, newest first.
    pub fn list_messages(&self) -> Result<Vec<Message>> {
        self.with_conn(|conn| {
            let rows = query_messages(conn)?;
            Ok(rows.into_iter().map(Message::from).collect())
        })
    }

    pub fn count_messages(&self) -> Result<usize> {
        self.with_conn(|conn| {
            let count: i64 = conn.query_row("SELECT COUNT(*) FROM messages", [], |row| row.get(0))?;
            Ok(count as usize)
        })
    }
}

fn project_from_row(row: &Row<'_>) -> rusqlite::Result<ProjectRow> {
    Ok(ProjectRow {
        id: row.get(0)?,
        title: row.get(1)?,
        description: row.get(2)?,
        tech_stack: row.get(3)?,
        image_url: row.get(4)?,
        project_url: row.get(5)?,
        github_url: row.get(6)?,
        created_at: row.get(7)?,
    })
}

// Rows may come from other writers using `T` or a space as the date/time
// separator, so ordering goes through julianday() rather than text order.
fn query_projects(conn: &Connection) -> Result<Vec<ProjectRow>> {
    let mut stmt = conn.prepare(&format!(
        "SELECT {PROJECT_COLUMNS} FROM projects ORDER BY julianday(created_at) DESC, id DESC"
    ))?;

    let rows = stmt
        .query_map([], project_from_row)?
        .collect::<std::result::Result<Vec<_>, _>>()?;

    Ok(rows)
}

/// Exact, case-sensitive title match. When duplicates already exist the
/// oldest row wins.
pub(crate) fn query_project_by_title(conn: &Connection, title: &str) -> Result<Option<ProjectRow>> {
    let mut stmt = conn.prepare(&format!(
        "SELECT {PROJECT_COLUMNS} FROM projects WHERE title = ?1 ORDER BY id ASC LIMIT 1"
    ))?;

    let row = stmt.query_row([title], project_from_row).optional()?;

    Ok(row)
}

pub(crate) fn insert_project(
    conn: &Connection,
    project: &CanonicalProject,
    created_at: DateTime<Utc>,
) -> Result<i64> {
    conn.execute(
        "INSERT INTO projects (title, description, tech_stack, image_url, project_url, github_url, created_at)
         VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7)",
        rusqlite::params![
            project.title,
            project.description,
            project.tech_stack,
            project.image_url,
            project.project_url,
            project.github_url,
            time::to_storage(&created_at),
        ],
    )?;
    Ok(conn.last_insert_rowid())
}

/// Writes back every mutable column. `title` and `created_at` never change.
pub(crate) fn update_project(conn: &Connection, row: &ProjectRow) -> Result<()> {
    conn.execute(
        "UPDATE projects
         SET description = ?1, tech_stack = ?2, image_url = ?3, project_url = ?4, github_url = ?5
         WHERE id = ?6",
        rusqlite::params![
            row.description,
            row.tech_stack,
            row.image_url,
            row.project_url,
            row.github_url,
            row.id,
        ],
    )?;
    Ok(())
}

fn query_messages(conn: &Connection) -> Result<Vec<MessageRow>> {
    let mut stmt = conn.prepare(
        "SELECT id, name, email, message, created_at
         FROM messages
         ORDER BY julianday(created_at) DESC, id DESC",
    )?;

    let rows = stmt
        .query_map([], |row| {
            Ok(MessageRow {
                id: row.get(0)?,
                name: row.get(1)?,
                email: row.get(2)?,
                message: row.get(3)?,
                created_at: row.get(4)?,
            })
        })?
        .collect::<std::result::Result<Vec<_>, _>>()?;

    Ok(rows)
}
