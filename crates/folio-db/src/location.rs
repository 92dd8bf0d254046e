use std::path::PathBuf;

use anyhow::{Result, bail};

/// Same file Flask-SQLAlchemy resolves `sqlite:///portfolio.db` to, so an
/// existing deployment's database is picked up.
pub const DEFAULT_DATABASE_URL: &str = "sqlite:///instance/portfolio.db";

/// Picks the database URL from `DATABASE_URL`, then `SQLALCHEMY_DATABASE_URI`,
/// then the default. Blank values count as unset.
pub fn database_url<F>(lookup: F) -> String
where
    F: Fn(&str) -> Option<String>,
{
    let get = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());
    get("DATABASE_URL")
        .or_else(|| get("SQLALCHEMY_DATABASE_URI"))
        .unwrap_or_else(|| DEFAULT_DATABASE_URL.into())
}

/// Where the SQLite database lives, parsed from a connection string.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StorageLocation {
    File(PathBuf),
    Memory,
}

impl StorageLocation {
    /// Accepts SQLAlchemy-style URLs (`sqlite:///relative.db`,
    /// `sqlite:////abs/path.db`), `sqlite://relative.db`, `sqlite::memory:`
    /// and bare file paths.
    pub fn parse(url: &str) -> Result<Self> {
        let url = url.trim();
        if url.is_empty() {
            bail!("empty database URL");
        }
        if url == "sqlite::memory:" || url == "sqlite://:memory:" || url == ":memory:" {
            return Ok(Self::Memory);
        }

        if let Some(rest) = url.strip_prefix("sqlite:") {
            let path = rest
                .strip_prefix("///")
                .or_else(|| rest.strip_prefix("//"))
                .unwrap_or(rest);
            if path.is_empty() {
                bail!("database URL '{}' has no path", url);
            }
            return Ok(Self::File(PathBuf::from(path)));
        }

        if let Some((scheme, _)) = url.split_once("://") {
            bail!("unsupported database scheme '{}': only sqlite is available", scheme);
        }

        Ok(Self::File(PathBuf::from(url)))
    }
}
