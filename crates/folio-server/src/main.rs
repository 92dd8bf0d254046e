mod config;

use std::net::SocketAddr;

use axum::Router;
use tower_http::services::ServeDir;
use tower_http::trace::TraceLayer;
use tracing::{info, warn};

use folio_api::state::AppStateInner;
use folio_db::Database;

use crate::config::Config;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load .env if present
    let _ = dotenvy::dotenv();

    // Init logging
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "folio_server=debug,folio_api=debug,folio_db=debug,tower_http=debug".into()),
        )
        .init();

    let config = Config::from_env()?;
    if config.uses_dev_secret() {
        warn!("SECRET_KEY is unset; using the insecure development key");
    }

    // Init database and reconcile the project list before serving anything
    let db = tokio::task::spawn_blocking({
        let location = config.database.clone();
        move || -> anyhow::Result<Database> {
            let db = Database::connect(&location)?;
            db.seed_projects()?;
            Ok(db)
        }
    })
    .await??;

    let state = AppStateInner::new(db, config.secret_key.clone());

    let app = Router::new()
        .merge(folio_api::router(state))
        .nest_service("/static", ServeDir::new(&config.static_dir))
        .layer(TraceLayer::new_for_http());

    let addr: SocketAddr = format!("{}:{}", config.host, config.port).parse()?;
    info!("Folio listening on {}", addr);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
