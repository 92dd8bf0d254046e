//! Startup reconciliation of the canonical project list against the
//! `projects` table.
//!
//! Matching is by exact title. Existing rows keep non-empty descriptions,
//! tech stacks and locally hosted images; the repository and live links are
//! always reset to the canonical values. Missing titles are inserted in list
//! order. The whole pass is a single transaction.

use anyhow::Result;
use chrono::Utc;
use folio_types::models::CanonicalProject;
use tracing::{debug, info};

use crate::Database;
use crate::models::ProjectRow;
use crate::queries::{insert_project, query_project_by_title, update_project};

pub const CANONICAL_PROJECTS: &[CanonicalProject] = &[
    CanonicalProject {
        title: "Connectify",
        description: "A modern social platform prototype with real\u{2011}time interactions.",
        tech_stack: "Flask, JS, Tailwind, Socket.io",
        image_url: "images/Connectify.png",
        project_url: "https://github.com/Rashik8606/Connectify",
        github_url: "https://github.com/Rashik8606/Connectify",
    },
    CanonicalProject {
        title: "OnlineMov",
        description: "Movie discovery app with search, filters, and watchlists.",
        tech_stack: "Flask, TMDB API, Tailwind, SQLite",
        image_url: "images/OnlineMov.png",
        project_url: "https://github.com/Rashik8606/Express-basics",
        github_url: "https://github.com/Rashik8606/Express-basics",
    },
    CanonicalProject {
        title: "Taskizo",
        description: "Task management app with drag\u{2011}and\u{2011}drop and reminders.",
        tech_stack: "Flask, JS, Tailwind, SQLAlchemy",
        image_url: "images/Taskizo.png",
        project_url: "https://github.com/Rashik8606/Job-Indeed",
        github_url: "https://github.com/Rashik8606/Job-Indeed",
    },
    CanonicalProject {
        title: "Vegstore",
        description: "E\u{2011}commerce demo focused on fresh produce with cart and checkout.",
        tech_stack: "Flask, Tailwind, SQLAlchemy",
        image_url: "images/Vegstore.png",
        project_url: "https://github.com/Rashik8606/vegstore",
        github_url: "https://github.com/Rashik8606/vegstore",
    },
];

/// Outcome counts of one reconciliation pass.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SeedReport {
    pub inserted: usize,
    pub updated: usize,
    pub unchanged: usize,
}

fn is_blank(value: &Option<String>) -> bool {
    value.as_deref().is_none_or(str::is_empty)
}

/// Empty, the `#` placeholder, or anything hosted elsewhere.
fn needs_local_image(value: &Option<String>) -> bool {
    match value.as_deref() {
        None | Some("") | Some("#") => true,
        Some(url) => url.starts_with("http"),
    }
}

/// Applies the merge rules to an existing row. Returns whether any column
/// changed.
pub fn merge(row: &mut ProjectRow, canonical: &CanonicalProject) -> bool {
    let before = row.clone();

    if is_blank(&row.description) {
        row.description = Some(canonical.description.to_string());
    }
    if is_blank(&row.tech_stack) {
        row.tech_stack = Some(canonical.tech_stack.to_string());
    }
    if needs_local_image(&row.image_url) {
        row.image_url = Some(canonical.image_url.to_string());
    }
    row.project_url = Some(canonical.project_url.to_string());
    row.github_url = Some(canonical.github_url.to_string());

    *row != before
}

impl Database {
    /// Merges `canonical` into the project table. Idempotent: a second run
    /// over the same list changes nothing. Any storage error rolls back the
    /// whole pass.
    pub fn reconcile_projects(&self, canonical: &[CanonicalProject]) -> Result<SeedReport> {
        self.with_conn_mut(|conn| {
            let tx = conn.transaction()?;
            let mut report = SeedReport::default();

            for def in canonical {
                match query_project_by_title(&tx, def.title)? {
                    Some(mut row) => {
                        if merge(&mut row, def) {
                            update_project(&tx, &row)?;
                            debug!("Seed: updated project '{}' (id {})", def.title, row.id);
                            report.updated += 1;
                        } else {
                            report.unchanged += 1;
                        }
                    }
                    None => {
                        let id = insert_project(&tx, def, Utc::now())?;
                        debug!("Seed: inserted project '{}' (id {})", def.title, id);
                        report.inserted += 1;
                    }
                }
            }

            tx.commit()?;

            info!(
                "Project seed complete: {} inserted, {} updated, {} unchanged",
                report.inserted, report.updated, report.unchanged
            );
            Ok(report)
        })
    }

    /// Reconciles the built-in project list.
    pub fn seed_projects(&self) -> Result<SeedReport> {
        self.reconcile_projects(CANONICAL_PROJECTS)
    }
}
