use serde::Serialize;
use tracing::{info, warn};
use uuid::Uuid;

use crate::documents::{extract_text_blocking, Document};
use crate::errors::AppError;
use crate::parser::{parse_resume, ResumeRecord};
use crate::state::AppState;

/// Which persistence targets accepted the record.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct PersistStatus {
    pub database: bool,
    pub artifact: bool,
}

#[derive(Debug, Serialize)]
pub struct UploadResponse {
    pub id: Uuid,
    pub data: ResumeRecord,
    pub download_url: String,
    pub persisted: PersistStatus,
}

pub fn download_url(id: Uuid) -> String {
    format!("/api/v1/resumes/{id}/download")
}

/// Extracts text, runs the parser, then persists best-effort.
///
/// Unsupported or undecodable documents fail before parsing starts. Once a
/// record exists it is always returned, even if every store write failed.
pub async fn process_upload(
    state: &AppState,
    document: Document,
) -> Result<UploadResponse, AppError> {
    let file_name = document.file_name.clone();
    let text = extract_text_blocking(document).await?;

    let record = parse_resume(&text, state.recognizer.as_ref()).await;
    let id = Uuid::new_v4();
    info!("Parsed upload '{file_name}' as resume {id}");

    let persisted = persist(state, id, &file_name, &record).await;

    Ok(UploadResponse {
        id,
        data: record,
        download_url: download_url(id),
        persisted,
    })
}

async fn persist(
    state: &AppState,
    id: Uuid,
    file_name: &str,
    record: &ResumeRecord,
) -> PersistStatus {
    let database = match &state.records {
        Some(sink) => match sink.store(id, file_name, record).await {
            Ok(()) => true,
            Err(e) => {
                warn!("Failed to store resume {id} in database: {e:#}");
                false
            }
        },
        None => false,
    };

    let artifact = match serde_json::to_vec_pretty(record) {
        Ok(json) => match state.artifacts.put(id, json).await {
            Ok(()) => true,
            Err(e) => {
                warn!("Failed to write JSON artifact for resume {id}: {e:#}");
                false
            }
        },
        Err(e) => {
            warn!("Failed to serialize resume {id}: {e}");
            false
        }
    };

    PersistStatus { database, artifact }
}
