use axum::{
    extract::State,
    http::{HeaderMap, HeaderValue, StatusCode, header},
    response::{Html, IntoResponse, Response},
};
use tracing::error;

use crate::notice::{self, Notice};
use crate::render;
use crate::state::AppState;

/// `GET /`: project listing, contact form and any pending notice.
pub async fn home(State(state): State<AppState>, headers: HeaderMap) -> Result<Response, StatusCode> {
    let db = state.clone();
    let projects = tokio::task::spawn_blocking(move || db.db.list_projects())
        .await
        .map_err(|e| { error!("spawn_blocking join error: {}", e); StatusCode::INTERNAL_SERVER_ERROR })?
        .map_err(|e| { error!("Failed to list projects: {:#}", e); StatusCode::INTERNAL_SERVER_ERROR })?;

    let notice = Notice::from_headers(&headers, &state.secret_key);
    let mut response = Html(render::home_page(&projects, notice)).into_response();

    // Shown once, then dropped
    if notice::cookie_value(&headers).is_some() {
        response
            .headers_mut()
            .insert(header::SET_COOKIE, HeaderValue::from_static(notice::CLEAR_COOKIE));
    }

    Ok(response)
}
