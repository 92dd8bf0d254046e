use std::path::PathBuf;

use anyhow::{Context, Result};
use folio_db::StorageLocation;
use folio_db::location;

/// Signing key used when `SECRET_KEY` is unset. Fine for local work only.
pub const DEV_SECRET_KEY: &str = "dev-secret-key";

#[derive(Debug, Clone)]
pub struct Config {
    pub database: StorageLocation,
    pub secret_key: String,
    pub host: String,
    pub port: u16,
    pub static_dir: PathBuf,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Builds the config from any key lookup; empty values count as unset.
    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());

        let database = StorageLocation::parse(&location::database_url(&lookup))?;

        let port = match get("PORT") {
            Some(raw) => raw
                .trim()
                .parse()
                .with_context(|| format!("PORT must be a port number, got '{}'", raw))?,
            None => 5000,
        };

        Ok(Self {
            database,
            secret_key: get("SECRET_KEY").unwrap_or_else(|| DEV_SECRET_KEY.into()),
            host: get("HOST").unwrap_or_else(|| "0.0.0.0".into()),
            port,
            static_dir: get("STATIC_DIR").unwrap_or_else(|| "static".into()).into(),
        })
    }

    pub fn uses_dev_secret(&self) -> bool {
        self.secret_key == DEV_SECRET_KEY
    }
}
