use axum::{
    extract::{Multipart, Path, State},
    http::header,
    response::IntoResponse,
    Json,
};
use uuid::Uuid;

use crate::documents::Document;
use crate::errors::AppError;
use crate::parser::ResumeRecord;
use crate::resumes::ingest::{process_upload, UploadResponse};
use crate::state::AppState;
use crate::storage::artifacts::artifact_file_name;

/// Multipart field carrying the résumé file.
const FILE_FIELD: &str = "file";

/// POST /api/v1/resumes
pub async fn handle_upload(
    State(state): State<AppState>,
    mut multipart: Multipart,
) -> Result<Json<UploadResponse>, AppError> {
    let mut document = None;

    while let Some(field) = multipart
        .next_field()
        .await
        .map_err(|e| AppError::Validation(format!("Malformed multipart body: {e}")))?
    {
        if field.name() != Some(FILE_FIELD) {
            continue;
        }
        let file_name = field
            .file_name()
            .map(str::to_string)
            .ok_or_else(|| AppError::Validation("Uploaded file has no file name".to_string()))?;
        let bytes = field
            .bytes()
            .await
            .map_err(|e| AppError::Validation(format!("Failed to read uploaded file: {e}")))?;
        document = Some(Document::new(file_name, bytes)?);
        break;
    }

    let document =
        document.ok_or_else(|| AppError::Validation("No file uploaded".to_string()))?;
    let response = process_upload(&state, document).await?;
    Ok(Json(response))
}

/// GET /api/v1/resumes/:id
pub async fn handle_get_resume(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<ResumeRecord>, AppError> {
    let sink = state
        .records
        .as_ref()
        .ok_or_else(|| AppError::NotFound(format!("Resume {id} not found")))?;

    let record = sink
        .fetch(id)
        .await?
        .ok_or_else(|| AppError::NotFound(format!("Resume {id} not found")))?;
    Ok(Json(record))
}

/// GET /api/v1/resumes/:id/download
pub async fn handle_download(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<impl IntoResponse, AppError> {
    let bytes = state
        .artifacts
        .get(id)
        .await
        .map_err(|e| AppError::Storage(format!("{e:#}")))?
        .ok_or_else(|| AppError::NotFound(format!("Artifact for resume {id} not found")))?;

    let disposition = format!("attachment; filename=\"{}\"", artifact_file_name(id));
    Ok((
        [
            (header::CONTENT_TYPE, "application/json".to_string()),
            (header::CONTENT_DISPOSITION, disposition),
        ],
        bytes,
    ))
}
