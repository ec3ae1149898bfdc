use anyhow::Result;
use asides_core::{Credentials, SiteUrls};
use asides_http::{AppState, serve};
use asides_service::{AsideService, AuthGate};
use asides_storage::SqliteStorage;
use std::sync::Arc;

use crate::{ensure_db_dir, get_db_path};

const DATABASE_URL_ENV: &str = "ASIDES_DATABASE_URL";

/// Flag wins over `ASIDES_DATABASE_URL`, which wins over the per-user data directory.
fn resolve_database_url(flag: Option<String>) -> Result<String> {
    if let Some(url) = flag.or_else(|| std::env::var(DATABASE_URL_ENV).ok()) {
        return Ok(url);
    }
    let db_path = get_db_path();
    ensure_db_dir(&db_path)?;
    Ok(format!("sqlite://{}", db_path.display()))
}

pub(crate) async fn run(host: &str, port: u16, database_url: Option<String>) -> Result<()> {
    let database_url = resolve_database_url(database_url)?;
    tracing::info!("Opening asides database at {}", database_url);
    let storage = SqliteStorage::new(&database_url).await?;

    let credentials = Credentials::from_env();
    tracing::info!(username = credentials.username(), "Bulk delete guarded by basic auth");

    let state = Arc::new(AppState {
        service: Arc::new(AsideService::new(Arc::new(storage))),
        auth: AuthGate::new(credentials),
        urls: SiteUrls::new(host, port),
    });

    serve(&format!("{host}:{port}"), state).await?;
    tracing::info!("Server stopped");

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn explicit_database_url_is_used_verbatim() {
        let url = resolve_database_url(Some("sqlite::memory:".to_owned())).unwrap();
        assert_eq!(url, "sqlite::memory:");
    }
}
