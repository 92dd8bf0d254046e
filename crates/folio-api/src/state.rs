use std::sync::Arc;

use folio_db::Database;

pub type AppState = Arc<AppStateInner>;

pub struct AppStateInner {
    pub db: Database,
    /// Signs the one-shot notice cookie.
    pub secret_key: String,
}

impl AppStateInner {
    pub fn new(db: Database, secret_key: impl Into<String>) -> AppState {
        Arc::new(Self {
            db,
            secret_key: secret_key.into(),
        })
    }
}
