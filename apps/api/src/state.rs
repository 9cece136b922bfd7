use std::sync::Arc;

use crate::ner_client::EntityRecognizer;
use crate::storage::{ArtifactStore, RecordSink};

/// Shared application state injected into all route handlers via Axum extractors.
#[derive(Clone)]
pub struct AppState {
    /// Pluggable name recognizer. Default: RuleBasedRecognizer. Swap via NER_SERVICE_URL.
    pub recognizer: Arc<dyn EntityRecognizer>,
    /// Relational record sink; `None` when DATABASE_URL is not configured.
    pub records: Option<Arc<dyn RecordSink>>,
    /// Downloadable JSON artifacts (local directory or S3).
    pub artifacts: Arc<dyn ArtifactStore>,
    pub max_upload_bytes: usize,
}
