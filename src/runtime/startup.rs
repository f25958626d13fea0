use std::io;
use std::sync::Arc;

use tokio::net::TcpListener;
use tracing::{info, warn};

use crate::config::{ServerSettings, Settings};
use crate::library;
use crate::server::{self, AppState};
use crate::tags::LoftyTagReader;

#[derive(Debug, thiserror::Error)]
pub enum StartupError {
    #[error("no scan root given; pass a directory with -d/--dir or as an argument, or set library.roots")]
    NoRoots,
    #[error("failed to start the async runtime: {0}")]
    Runtime(#[source] io::Error),
    #[error("failed to listen on {addr}: {source}")]
    Bind {
        addr: String,
        #[source]
        source: io::Error,
    },
    #[error("server error: {0}")]
    Serve(#[source] io::Error),
}

/// Scan the configured roots and assemble the router state.
pub fn build_state(settings: &Settings) -> Result<AppState, StartupError> {
    if settings.library.roots.is_empty() {
        return Err(StartupError::NoRoots);
    }

    let reader = LoftyTagReader;
    let (catalog, report) = library::scan(&settings.library.roots, &settings.library, &reader);
    if catalog.is_empty() {
        warn!(
            skipped = report.open_failures + report.tag_failures,
            missing_roots = report.missing_roots.len(),
            "no playable tracks found; serving an empty catalog"
        );
    }

    Ok(AppState::new(
        catalog,
        Arc::new(reader),
        settings.server.fallback_host(),
    )
    .with_cover_cache(settings.cover.cache_capacity))
}

/// Bind the listener and serve until Ctrl-C / SIGTERM.
pub async fn serve(state: AppState, settings: &ServerSettings) -> Result<(), StartupError> {
    let addr = format!("{}:{}", settings.bind, settings.port);
    let listener = TcpListener::bind((settings.bind.as_str(), settings.port))
        .await
        .map_err(|source| StartupError::Bind {
            addr: addr.clone(),
            source,
        })?;

    info!(addr = %addr, tracks = state.catalog.len(), "listening");

    axum::serve(listener, server::router(state))
        .with_graceful_shutdown(shutdown_signal())
        .await
        .map_err(StartupError::Serve)
}

async fn shutdown_signal() {
    let ctrl_c = async {
        let _ = tokio::signal::ctrl_c().await;
    };

    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut sig) => {
                sig.recv().await;
            }
            Err(_) => std::future::pending::<()>().await,
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }
    info!("shutting down");
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::tempdir;

    #[test]
    fn build_state_without_roots_is_fatal() {
        let settings = Settings::default();
        assert!(matches!(build_state(&settings), Err(StartupError::NoRoots)));
    }

    #[test]
    fn build_state_scans_roots_with_lofty() {
        let dir = tempdir().unwrap();
        fs::write(dir.path().join("noise.mp3"), b"not a real mp3").unwrap();

        let mut settings = Settings::default();
        settings.library.roots = vec![dir.path().to_path_buf()];
        settings.cover.cache_capacity = 8;

        let state = build_state(&settings).unwrap();
        assert!(state.catalog.is_empty());
        assert!(state.covers.is_some());
        assert_eq!(state.fallback_host, "localhost:8080");
    }

    #[tokio::test]
    async fn serve_reports_bind_failure() {
        let taken = std::net::TcpListener::bind("127.0.0.1:0").unwrap();
        let port = taken.local_addr().unwrap().port();

        let dir = tempdir().unwrap();
        let mut settings = Settings::default();
        settings.library.roots = vec![dir.path().to_path_buf()];
        settings.server.bind = "127.0.0.1".to_string();
        settings.server.port = port;

        let state = build_state(&settings).unwrap();
        let err = serve(state, &settings.server).await.unwrap_err();
        assert!(matches!(err, StartupError::Bind { .. }));
    }
}
