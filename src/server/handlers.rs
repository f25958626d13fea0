use std::path::Path as FsPath;
use std::sync::Arc;

use axum::Json;
use axum::body::Body;
use axum::extract::{Path, Request, State};
use axum::http::header::{self, HeaderMap, HeaderValue};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use tower::ServiceExt;
use tower_http::services::ServeFile;
use tracing::debug;

use crate::library::Track;
use crate::tags::{self, EmbeddedPicture};

use super::error::ApiError;
use super::media::{Disposition, set_content_type, set_disposition, set_no_cache};
use super::response::{ApiResponse, TrackDto};
use super::AppState;

fn request_host<'a>(headers: &'a HeaderMap, fallback: &'a str) -> &'a str {
    headers
        .get(header::HOST)
        .and_then(|v| v.to_str().ok())
        .filter(|h| !h.is_empty())
        .unwrap_or(fallback)
}

fn lookup<'a>(state: &'a AppState, id: &str) -> Result<&'a Track, ApiError> {
    state.catalog.lookup(id).ok_or_else(|| {
        debug!(id = %id, "unknown track id");
        ApiError::NotFound
    })
}

/// Serve `path` through `ServeFile`, which handles ranges and conditional
/// requests. A 404 from the file service is surfaced as [`ApiError::NotFound`].
async fn serve_file(path: &FsPath, request: Request) -> Result<Response, ApiError> {
    let response = match ServeFile::new(path).oneshot(request).await {
        Ok(res) => res.map(Body::new),
        Err(never) => match never {},
    };
    if response.status() == StatusCode::NOT_FOUND {
        debug!(path = %path.display(), "file vanished before it could be served");
        return Err(ApiError::NotFound);
    }
    Ok(response)
}

/// `GET /music`
pub async fn list_tracks(State(state): State<AppState>, headers: HeaderMap) -> impl IntoResponse {
    let host = request_host(&headers, &state.fallback_host);
    let data: Vec<TrackDto> = state
        .catalog
        .list()
        .iter()
        .map(|track| TrackDto::new(track, host))
        .collect();

    (
        [(header::ACCESS_CONTROL_ALLOW_ORIGIN, HeaderValue::from_static("*"))],
        Json(ApiResponse::ok(data)),
    )
}

/// `GET /music/file/{id}`: inline playback, range-capable.
pub async fn stream_audio(
    State(state): State<AppState>,
    Path(id): Path<String>,
    request: Request,
) -> Result<Response, ApiError> {
    let track = lookup(&state, &id)?;

    if let Err(err) = tokio::fs::File::open(&track.source_path).await {
        debug!(path = %track.source_path.display(), error = %err, "cannot open audio file");
        return Err(ApiError::NotFound);
    }

    let mut response = serve_file(&track.source_path, request).await?;
    let headers = response.headers_mut();
    set_no_cache(headers);
    set_content_type(headers, track.media_type.content_type());
    set_disposition(headers, Disposition::Inline, &track.file_name());
    Ok(response)
}

/// `GET /music/file/download/{id}`: same bytes, forced download.
pub async fn download_audio(
    State(state): State<AppState>,
    Path(id): Path<String>,
    request: Request,
) -> Result<Response, ApiError> {
    let track = lookup(&state, &id)?;

    let mut response = serve_file(&track.source_path, request).await?;
    set_disposition(
        response.headers_mut(),
        Disposition::Attachment,
        &track.file_name(),
    );
    Ok(response)
}

/// `GET /music/lyric/{id}`: the `.lrc` sibling of the audio file.
pub async fn fetch_lyric(
    State(state): State<AppState>,
    Path(id): Path<String>,
    request: Request,
) -> Result<Response, ApiError> {
    let track = lookup(&state, &id)?;
    let lyric_path = track.lyric_path();

    if !tokio::fs::try_exists(&lyric_path).await.unwrap_or(false) {
        debug!(id = %id, path = %lyric_path.display(), "no lyric file");
        return Err(ApiError::NotFound);
    }

    let mut response = serve_file(&lyric_path, request).await?;
    let headers = response.headers_mut();
    set_content_type(headers, "text/plain; charset=utf-8");
    set_no_cache(headers);
    Ok(response)
}

/// `GET /music/cover/{id}`: first embedded picture, re-read from the file
/// unless the cover cache already holds it.
pub async fn fetch_cover(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Response, ApiError> {
    let track = lookup(&state, &id)?;

    if let Some(picture) = state.covers.as_ref().and_then(|c| c.get(&id)) {
        return Ok(cover_response(&picture));
    }

    let reader = Arc::clone(&state.tags);
    let path = track.source_path.clone();
    let extracted =
        tokio::task::spawn_blocking(move || tags::extract_cover(reader.as_ref(), &path)).await;

    let picture = match extracted {
        Ok(Ok(picture)) => Arc::new(picture),
        Ok(Err(err)) => {
            debug!(id = %id, error = %err, "cover extraction failed");
            return Err(ApiError::CoverNotFound);
        }
        Err(err) => {
            debug!(id = %id, error = %err, "cover extraction task failed");
            return Err(ApiError::CoverNotFound);
        }
    };

    if let Some(cache) = &state.covers {
        cache.insert(&id, Arc::clone(&picture));
    }
    Ok(cover_response(&picture))
}

fn cover_response(picture: &EmbeddedPicture) -> Response {
    let content_type = HeaderValue::from_str(&picture.mime_type)
        .unwrap_or_else(|_| HeaderValue::from_static("application/octet-stream"));
    ([(header::CONTENT_TYPE, content_type)], picture.data.clone()).into_response()
}
