pub mod contact;
pub mod messages;
pub mod notice;
pub mod pages;
pub mod projects;
pub mod render;
pub mod state;

use axum::{
    Router,
    routing::{get, post},
};

use crate::state::AppState;

/// Every page and API route. Static files and tower layers are added by the
/// server binary.
pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/", get(projects::home))
        .route("/contact", post(contact::submit_contact))
        .route("/admin/messages", get(messages::admin_messages))
        .route("/api/messages", get(messages::api_messages))
        .route("/messages", get(pages::messages_page))
        .with_state(state)
}
