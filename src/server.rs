//! HTTP surface over the catalog.
//!
//! The router owns an immutable [`Catalog`] behind an `Arc`; handlers only
//! read it. Streaming and byte ranges are handled by `tower-http`'s
//! `ServeFile`, with headers adjusted per endpoint.

mod cover_cache;
mod error;
mod handlers;
mod media;
mod response;

use std::sync::Arc;

use axum::{Router, routing::get};

use crate::library::Catalog;
use crate::tags::TagReader;

pub use cover_cache::CoverCache;

/// Shared state handed to every handler.
#[derive(Clone)]
pub struct AppState {
    pub catalog: Arc<Catalog>,
    pub tags: Arc<dyn TagReader>,
    pub covers: Option<Arc<CoverCache>>,
    /// Host used for derived URIs when the request has no `Host` header.
    pub fallback_host: String,
}

impl AppState {
    pub fn new(catalog: Catalog, tags: Arc<dyn TagReader>, fallback_host: String) -> Self {
        Self {
            catalog: Arc::new(catalog),
            tags,
            covers: None,
            fallback_host,
        }
    }

    /// Enable the cover cache; a capacity of 0 leaves it disabled.
    pub fn with_cover_cache(mut self, capacity: usize) -> Self {
        self.covers = CoverCache::new(capacity).map(Arc::new);
        self
    }
}

pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/music", get(handlers::list_tracks))
        .route("/music/file/{id}", get(handlers::stream_audio))
        .route("/music/file/download/{id}", get(handlers::download_audio))
        .route("/music/lyric/{id}", get(handlers::fetch_lyric))
        .route("/music/cover/{id}", get(handlers::fetch_cover))
        .with_state(state)
}
