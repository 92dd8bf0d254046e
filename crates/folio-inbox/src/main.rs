//! Prints every stored contact message, newest first, straight from the
//! database file. Takes no arguments; honours `DATABASE_URL` like the server.

mod report;

use folio_db::StorageLocation;
use folio_db::location;
use tracing::debug;

fn main() -> anyhow::Result<()> {
    let _ = dotenvy::dotenv();

    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "folio_inbox=warn,folio_db=warn".into()),
        )
        .init();

    let url = location::database_url(|key| std::env::var(key).ok());
    debug!("Reading messages from {}", url);

    let output = match StorageLocation::parse(&url) {
        Ok(StorageLocation::File(path)) => report::run(&path),
        Ok(StorageLocation::Memory) => report::NO_DATABASE.to_string(),
        Err(e) => format!("\u{274c} Error: {}", e),
    };
    println!("{}", output);

    Ok(())
}
