use axum::{
    Form,
    extract::{State, rejection::FormRejection},
    http::header,
    response::{IntoResponse, Redirect},
};
use chrono::{DateTime, Utc};
use thiserror::Error;
use tracing::{error, info};

use folio_db::Database;
use folio_types::api::ContactForm;

use crate::notice::Notice;
use crate::state::AppState;

#[derive(Debug, Error)]
pub enum ContactError {
    #[error("required field '{0}' is empty")]
    Validation(&'static str),
    #[error("failed to store message")]
    Storage(#[source] anyhow::Error),
}

impl ContactError {
    /// What the visitor gets told. Storage detail stays in the logs.
    pub fn notice(&self) -> Notice {
        match self {
            ContactError::Validation(_) => Notice::MissingFields,
            ContactError::Storage(_) => Notice::Failed,
        }
    }
}

/// Validates and appends one contact message, returning its id. Nothing is
/// written when validation fails.
pub fn record_message(
    db: &Database,
    form: &ContactForm,
    created_at: DateTime<Utc>,
) -> Result<i64, ContactError> {
    let msg = form.validate().map_err(ContactError::Validation)?;
    db.insert_message(&msg, created_at).map_err(ContactError::Storage)
}

/// `POST /contact`: always redirects home with a signed notice cookie.
pub async fn submit_contact(
    State(state): State<AppState>,
    form: Result<Form<ContactForm>, FormRejection>,
) -> impl IntoResponse {
    // An unreadable body carries no fields, so it fails validation like an empty form
    let form = form.map(|Form(form)| form).unwrap_or_else(|rejection| {
        info!("Unreadable contact form body: {}", rejection);
        ContactForm::default()
    });

    let db = state.clone();
    let outcome = tokio::task::spawn_blocking(move || record_message(&db.db, &form, Utc::now())).await;

    let notice = match outcome {
        Ok(Ok(id)) => {
            info!("Stored contact message {}", id);
            Notice::Sent
        }
        Ok(Err(e)) => {
            match &e {
                ContactError::Validation(field) => info!("Rejected contact form: empty {}", field),
                ContactError::Storage(source) => error!("Failed to store contact message: {:#}", source),
            }
            e.notice()
        }
        Err(e) => {
            error!("spawn_blocking join error: {}", e);
            Notice::Failed
        }
    };

    (
        [(header::SET_COOKIE, notice.to_cookie(&state.secret_key))],
        Redirect::to("/"),
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Duration;

    fn form(name: &str, email: &str, message: &str) -> ContactForm {
        ContactForm {
            name: name.into(),
            email: email.into(),
            message: message.into(),
        }
    }

    #[test]
    fn empty_email_writes_nothing() {
        let db = Database::open_in_memory().unwrap();
        let err = record_message(&db, &form("Ada", "  ", "Hi"), Utc::now()).unwrap_err();

        assert!(matches!(err, ContactError::Validation("email")));
        assert_eq!(err.notice(), Notice::MissingFields);
        assert_eq!(db.count_messages().unwrap(), 0);
    }

    #[test]
    fn valid_submission_appends_one_newer_row() {
        let db = Database::open_in_memory().unwrap();
        let earlier = Utc::now() - Duration::minutes(5);
        record_message(&db, &form("Grace", "grace@example.com", "First"), earlier).unwrap();

        let id = record_message(&db, &form(" Ada ", "ada@example.com", " Hello "), Utc::now()).unwrap();

        assert_eq!(db.count_messages().unwrap(), 2);
        let msgs = db.list_messages().unwrap();
        assert_eq!(msgs[0].id, id);
        assert_eq!(msgs[0].name, "Ada");
        assert_eq!(msgs[0].message, "Hello");
        assert!(msgs[0].created_at > msgs[1].created_at);
    }

    #[test]
    fn storage_failure_maps_to_generic_notice() {
        let db = Database::open_in_memory().unwrap();
        db.with_conn(|conn| {
            conn.execute_batch("DROP TABLE messages;")?;
            Ok(())
        })
        .unwrap();

        let err = record_message(&db, &form("Ada", "ada@example.com", "Hi"), Utc::now()).unwrap_err();
        assert!(matches!(err, ContactError::Storage(_)));
        assert_eq!(err.notice(), Notice::Failed);
        assert_eq!(err.to_string(), "failed to store message");
    }
}
