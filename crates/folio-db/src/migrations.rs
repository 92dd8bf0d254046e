use anyhow::Result;
use rusqlite::Connection;
use tracing::info;

/// Creates the tables if absent. An existing schema is assumed compatible.
pub fn run(conn: &Connection) -> Result<()> {
    conn.execute_batch(
        "
        CREATE TABLE IF NOT EXISTS projects (
            id          INTEGER PRIMARY KEY AUTOINCREMENT,
            title       VARCHAR(200) NOT NULL,
            description TEXT NOT NULL,
            tech_stack  VARCHAR(300),
            image_url   VARCHAR(500),
            project_url VARCHAR(500),
            github_url  VARCHAR(500),
            created_at  TEXT NOT NULL
        );

        CREATE INDEX IF NOT EXISTS idx_projects_title
            ON projects(title);

        CREATE TABLE IF NOT EXISTS messages (
            id          INTEGER PRIMARY KEY AUTOINCREMENT,
            name        VARCHAR(200) NOT NULL,
            email       VARCHAR(200) NOT NULL,
            message     TEXT NOT NULL,
            created_at  TEXT NOT NULL
        );

        CREATE INDEX IF NOT EXISTS idx_messages_created
            ON messages(created_at);
        ",
    )?;

    info!("Database schema ready");
    Ok(())
}
