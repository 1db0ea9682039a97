//! Image conversion handler.
//!
//! One request, two temp files: the uploaded input and the converted output.
//! Both are Drop-guarded, so every exit path below (validation failure,
//! conversion failure, success) leaves the scratch directory clean. The
//! converted bytes are read fully into the response body before the guards
//! drop; a client that disconnects mid-transfer cannot leak files.

use std::sync::Arc;

use axum::{
    body::Body,
    extract::{Multipart, Query, State},
    http::{header, StatusCode},
    response::Response,
};
use pixport_core::{AppError, TargetFormat};
use pixport_processing::{intake, ImageConverter, TempArtifact};
use serde::Deserialize;

use crate::error::HttpAppError;
use crate::state::AppState;
use crate::utils::upload::extract_multipart_file;

#[derive(Debug, Deserialize)]
pub struct ConvertQuery {
    #[serde(default)]
    format: String,
}

#[tracing::instrument(skip(state, multipart), fields(format = %query.format))]
pub async fn convert_image(
    State(state): State<Arc<AppState>>,
    Query(query): Query<ConvertQuery>,
    multipart: Multipart,
) -> Result<Response, HttpAppError> {
    // Validated before the body is consumed; a bad format never writes a file.
    let format = TargetFormat::parse(&query.format)?;

    let file = extract_multipart_file(multipart)
        .await?
        .ok_or_else(|| AppError::InvalidInput("No file uploaded.".to_string()))?;

    let uploaded = intake::accept(
        &state.upload_policy,
        &state.scratch_dir,
        file.data,
        file.original_filename,
        file.content_type,
    )
    .await?;

    tracing::debug!(
        filename = %uploaded.original_filename,
        size = uploaded.file_size,
        "Converting upload"
    );

    let output = TempArtifact::allocate(&state.scratch_dir, format.display_extension());
    ImageConverter::convert_file(
        uploaded.path().to_path_buf(),
        output.path().to_path_buf(),
        format,
    )
    .await?;

    let body = tokio::fs::read(output.path())
        .await
        .map_err(|e| AppError::Internal(format!("Failed to read converted file: {}", e)))?;

    let response = Response::builder()
        .status(StatusCode::OK)
        .header(header::CONTENT_TYPE, format.mime_type())
        .header(
            header::CONTENT_DISPOSITION,
            format!("attachment; filename=\"converted.{}\"", format.display_extension()),
        )
        .body(Body::from(body))
        .map_err(|e| AppError::Internal(format!("Failed to build response: {}", e)))?;

    Ok(response)
}
