use axum::{
    Json,
    extract::State,
    http::StatusCode,
    response::{Html, IntoResponse},
};
use tracing::error;

use folio_types::api::MessagesResponse;
use folio_types::models::Message;

use crate::render;
use crate::state::AppState;

async fn load_messages(state: &AppState) -> Result<Vec<Message>, StatusCode> {
    let db = state.clone();
    tokio::task::spawn_blocking(move || db.db.list_messages())
        .await
        .map_err(|e| { error!("spawn_blocking join error: {}", e); StatusCode::INTERNAL_SERVER_ERROR })?
        .map_err(|e| { error!("Failed to list messages: {:#}", e); StatusCode::INTERNAL_SERVER_ERROR })
}

/// `GET /admin/messages`
pub async fn admin_messages(State(state): State<AppState>) -> Result<impl IntoResponse, StatusCode> {
    let messages = load_messages(&state).await?;
    Ok(Html(render::admin_messages_page(&messages)))
}

/// `GET /api/messages`
pub async fn api_messages(State(state): State<AppState>) -> Result<impl IntoResponse, StatusCode> {
    let messages = load_messages(&state).await?;
    Ok(Json(MessagesResponse::new(&messages)))
}
