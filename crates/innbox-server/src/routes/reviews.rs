//! Review extraction routes — /api/data, /api/upload, /api/keywords.

use std::collections::HashMap;
use std::io::Write;
use std::path::Path;
use std::sync::Arc;

use axum::extract::{Multipart, Query, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::routing::{get, post};
use axum::{Json, Router};

use innbox_core::Error;

use crate::pipeline;
use crate::state::AppState;

pub fn routes() -> Router<Arc<AppState>> {
    Router::new()
        .route("/data", get(get_data))
        .route("/upload", post(upload_archive))
        .route("/keywords", get(get_keywords))
}

/// GET /api/data?file=path — extract records from an archive on disk.
async fn get_data(
    State(state): State<Arc<AppState>>,
    Query(params): Query<HashMap<String, String>>,
) -> impl IntoResponse {
    let Some(file) = params.get("file") else {
        return (
            StatusCode::BAD_REQUEST,
            Json(serde_json::json!({
                "error": "No file path provided. Use ?file=archive.mbox"
            })),
        );
    };

    let path = Path::new(file);
    if !path.exists() {
        return (
            StatusCode::NOT_FOUND,
            Json(serde_json::json!({ "error": format!("File not found: {}", file) })),
        );
    }

    match pipeline::process_archive(path, state.ranker.as_ref()) {
        Ok(records) => (StatusCode::OK, Json(serde_json::json!(records))),
        Err(e) => error_response(&e),
    }
}

/// POST /api/upload — extract records from an uploaded archive (multipart).
async fn upload_archive(
    State(state): State<Arc<AppState>>,
    mut multipart: Multipart,
) -> impl IntoResponse {
    while let Ok(Some(field)) = multipart.next_field().await {
        if field.name() != Some("file") {
            continue;
        }

        let filename = field.file_name().unwrap_or("").to_string();
        if filename.is_empty() {
            return (
                StatusCode::BAD_REQUEST,
                Json(serde_json::json!({ "error": "No selected file" })),
            );
        }

        // Format is decided from the client's filename, not the temp path.
        if !filename.to_lowercase().ends_with(".mbox") {
            return error_response(&Error::Unsupported(format!(
                "not an mbox archive: {}",
                filename
            )));
        }

        let bytes = match field.bytes().await {
            Ok(bytes) => bytes,
            Err(e) => {
                return (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    Json(serde_json::json!({ "error": format!("Read failed: {}", e) })),
                );
            }
        };

        // The temp file is removed on drop, success or failure.
        let result = write_temp_file(&bytes)
            .and_then(|tmp| pipeline::process_mbox(tmp.path(), state.ranker.as_ref()));
        return match result {
            Ok(records) => (StatusCode::OK, Json(serde_json::json!(records))),
            Err(e) => error_response(&e),
        };
    }

    (
        StatusCode::BAD_REQUEST,
        Json(serde_json::json!({ "error": "No file part" })),
    )
}

/// GET /api/keywords?file=path — corpus-level keywords over an archive.
async fn get_keywords(
    State(state): State<Arc<AppState>>,
    Query(params): Query<HashMap<String, String>>,
) -> impl IntoResponse {
    let Some(file) = params.get("file") else {
        return (
            StatusCode::BAD_REQUEST,
            Json(serde_json::json!({
                "error": "No file path provided. Use ?file=archive.mbox"
            })),
        );
    };

    let path = Path::new(file);
    if !path.exists() {
        return (
            StatusCode::NOT_FOUND,
            Json(serde_json::json!({ "error": format!("File not found: {}", file) })),
        );
    }

    match pipeline::archive_keywords(path, state.ranker.as_ref()) {
        Ok(keywords) => (
            StatusCode::OK,
            Json(serde_json::json!({ "keywords": keywords })),
        ),
        Err(e) => error_response(&e),
    }
}

fn write_temp_file(bytes: &[u8]) -> innbox_core::Result<tempfile::NamedTempFile> {
    let mut tmp = tempfile::NamedTempFile::new()?;
    tmp.write_all(bytes)?;
    Ok(tmp)
}

/// Map a pipeline error onto the single structured error payload.
fn error_response(error: &Error) -> (StatusCode, Json<serde_json::Value>) {
    let status = match error {
        Error::Unsupported(_) => StatusCode::UNSUPPORTED_MEDIA_TYPE,
        Error::NotFound(_) => StatusCode::NOT_FOUND,
        _ => StatusCode::INTERNAL_SERVER_ERROR,
    };
    (status, Json(serde_json::json!({ "error": error.to_string() })))
}
