//! Database row types, mapped directly from SQLite rows.
//! Distinct from folio-types models so a corrupt timestamp only costs a
//! warning at conversion time.

use chrono::{DateTime, Utc};
use folio_types::models::{Message, Project};
use folio_types::time;
use tracing::warn;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProjectRow {
    pub id: i64,
    pub title: String,
    pub description: Option<String>,
    pub tech_stack: Option<String>,
    pub image_url: Option<String>,
    pub project_url: Option<String>,
    pub github_url: Option<String>,
    pub created_at: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MessageRow {
    pub id: i64,
    pub name: String,
    pub email: String,
    pub message: String,
    pub created_at: String,
}

fn parse_created_at(table: &str, id: i64, raw: &str) -> DateTime<Utc> {
    time::from_storage(raw).unwrap_or_else(|| {
        warn!("Corrupt created_at '{}' on {} row {}", raw, table, id);
        DateTime::default()
    })
}

impl From<ProjectRow> for Project {
    fn from(row: ProjectRow) -> Self {
        let created_at = parse_created_at("projects", row.id, &row.created_at);
        Project {
            id: row.id,
            title: row.title,
            description: row.description.unwrap_or_default(),
            tech_stack: row.tech_stack,
            image_url: row.image_url,
            project_url: row.project_url,
            github_url: row.github_url,
            created_at,
        }
    }
}

impl From<MessageRow> for Message {
    fn from(row: MessageRow) -> Self {
        let created_at = parse_created_at("messages", row.id, &row.created_at);
        Message {
            id: row.id,
            name: row.name,
            email: row.email,
            message: row.message,
            created_at,
        }
    }
}
