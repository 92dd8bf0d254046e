//! End-to-end checks of the HTTP surface against an in-memory database.

use axum::{
    Router,
    body::Body,
    http::{Request, StatusCode, header},
    response::Response,
};
use http_body_util::BodyExt;
use tower::ServiceExt;

use folio_api::state::{AppState, AppStateInner};
use folio_db::Database;

const SECRET: &str = "test-secret";

fn app() -> (Router, AppState) {
    let db = Database::open_in_memory().unwrap();
    db.seed_projects().unwrap();
    let state = AppStateInner::new(db, SECRET);
    (folio_api::router(state.clone()), state)
}

async fn body_text(resp: Response) -> String {
    let bytes = resp.into_body().collect().await.unwrap().to_bytes();
    String::from_utf8(bytes.to_vec()).unwrap()
}

fn get(uri: &str) -> Request<Body> {
    Request::builder().uri(uri).body(Body::empty()).unwrap()
}

fn post_contact(body: &str) -> Request<Body> {
    Request::builder()
        .method("POST")
        .uri("/contact")
        .header(header::CONTENT_TYPE, "application/x-www-form-urlencoded")
        .body(Body::from(body.to_string()))
        .unwrap()
}

fn set_cookie(resp: &Response) -> String {
    resp.headers()
        .get(header::SET_COOKIE)
        .and_then(|v| v.to_str().ok())
        .unwrap_or_default()
        .to_string()
}

#[tokio::test]
async fn home_lists_seeded_projects() {
    let (app, _) = app();
    let resp = app.oneshot(get("/")).await.unwrap();
    assert_eq!(resp.status(), StatusCode::OK);

    let html = body_text(resp).await;
    for def in folio_db::CANONICAL_PROJECTS {
        assert!(html.contains(def.title), "missing {}", def.title);
    }
    assert!(html.contains(r#"action="/contact""#));
}

#[tokio::test]
async fn missing_email_redirects_with_error_and_stores_nothing() {
    let (app, state) = app();
    let resp = app
        .clone()
        .oneshot(post_contact("name=Ada&email=++&message=Hello"))
        .await
        .unwrap();

    assert_eq!(resp.status(), StatusCode::SEE_OTHER);
    assert_eq!(resp.headers()[header::LOCATION], "/");
    let cookie = set_cookie(&resp);
    assert!(cookie.starts_with("folio_notice=missing."));
    assert_eq!(state.db.count_messages().unwrap(), 0);

    // The notice is rendered once and the cookie cleared.
    let pair = cookie.split(';').next().unwrap().to_string();
    let resp = app
        .oneshot(
            Request::builder()
                .uri("/")
                .header(header::COOKIE, pair)
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();
    assert!(set_cookie(&resp).contains("Max-Age=0"));
    assert!(body_text(resp).await.contains("Please fill in all fields."));
}

#[tokio::test]
async fn absent_fields_count_as_empty() {
    let (app, state) = app();
    let resp = app.oneshot(post_contact("name=Ada")).await.unwrap();

    assert_eq!(resp.status(), StatusCode::SEE_OTHER);
    assert!(set_cookie(&resp).starts_with("folio_notice=missing."));
    assert_eq!(state.db.count_messages().unwrap(), 0);
}

#[tokio::test]
async fn unreadable_bodies_still_redirect_with_missing_fields() {
    let (app, state) = app();

    let no_content_type = Request::builder()
        .method("POST")
        .uri("/contact")
        .body(Body::from("name=Ada&email=ada%40example.com&message=Hi"))
        .unwrap();
    let multipart = Request::builder()
        .method("POST")
        .uri("/contact")
        .header(header::CONTENT_TYPE, "multipart/form-data; boundary=XyZ")
        .body(Body::from(
            "--XyZ\r\nContent-Disposition: form-data; name=\"name\"\r\n\r\nAda\r\n--XyZ--\r\n",
        ))
        .unwrap();

    for req in [no_content_type, multipart] {
        let resp = app.clone().oneshot(req).await.unwrap();
        assert_eq!(resp.status(), StatusCode::SEE_OTHER);
        assert_eq!(resp.headers()[header::LOCATION], "/");
        assert!(set_cookie(&resp).starts_with("folio_notice=missing."));
    }
    assert_eq!(state.db.count_messages().unwrap(), 0);
}

#[tokio::test]
async fn valid_submission_is_stored_and_listed() {
    let (app, state) = app();
    let resp = app
        .clone()
        .oneshot(post_contact("name=Ada+Lovelace&email=ada%40example.com&message=Loved+Taskizo"))
        .await
        .unwrap();

    assert_eq!(resp.status(), StatusCode::SEE_OTHER);
    assert!(set_cookie(&resp).starts_with("folio_notice=sent."));
    assert_eq!(state.db.count_messages().unwrap(), 1);

    let resp = app.clone().oneshot(get("/api/messages")).await.unwrap();
    assert_eq!(resp.status(), StatusCode::OK);
    let json: serde_json::Value = serde_json::from_str(&body_text(resp).await).unwrap();
    assert_eq!(json["total"], 1);
    let msg = &json["messages"][0];
    assert_eq!(msg["name"], "Ada Lovelace");
    assert_eq!(msg["email"], "ada@example.com");
    assert_eq!(msg["message"], "Loved Taskizo");
    assert!(msg["created_at"].as_str().unwrap().ends_with('Z'));
    assert!(msg["formatted_date"].as_str().unwrap().contains(" at "));

    let html = body_text(app.oneshot(get("/admin/messages")).await.unwrap()).await;
    assert!(html.contains("Ada Lovelace"));
    assert!(html.contains("mailto:ada@example.com"));
}

#[tokio::test]
async fn forged_notice_cookie_is_ignored() {
    let (app, _) = app();
    let resp = app
        .oneshot(
            Request::builder()
                .uri("/")
                .header(header::COOKIE, "folio_notice=sent.00ff")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert!(!body_text(resp).await.contains("Thanks!"));
}

#[tokio::test]
async fn info_page_and_empty_api() {
    let (app, _) = app();

    let resp = app.clone().oneshot(get("/messages")).await.unwrap();
    assert_eq!(resp.status(), StatusCode::OK);
    assert!(body_text(resp).await.contains("read-messages"));

    let resp = app.oneshot(get("/api/messages")).await.unwrap();
    let json: serde_json::Value = serde_json::from_str(&body_text(resp).await).unwrap();
    assert_eq!(json, serde_json::json!({ "messages": [], "total": 0 }));
}
