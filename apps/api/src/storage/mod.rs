//! Where parsed records go once the pipeline is done.
//!
//! Two independent, best-effort targets:
//! - a [`RecordSink`] (PostgreSQL) keyed by upload id, and
//! - an [`ArtifactStore`] holding the downloadable JSON file.
//!
//! Handles are built by the caller at startup and passed in through
//! `AppState`; nothing here owns a global connection.

pub mod artifacts;

use anyhow::{Context, Result};
use async_trait::async_trait;
use sqlx::PgPool;
use tracing::info;
use uuid::Uuid;

use crate::models::resume::ResumeRow;
use crate::parser::ResumeRecord;

pub use artifacts::{ArtifactStore, FsArtifactStore, S3ArtifactStore};

#[async_trait]
pub trait RecordSink: Send + Sync {
    async fn store(&self, id: Uuid, file_name: &str, record: &ResumeRecord) -> Result<()>;

    async fn fetch(&self, id: Uuid) -> Result<Option<ResumeRecord>>;
}

/// Stores records in the `resumes` table. Each store is one INSERT, so
/// concurrent uploads are serialized by the database.
#[derive(Clone)]
pub struct PgRecordSink {
    pool: PgPool,
}

impl PgRecordSink {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl RecordSink for PgRecordSink {
    async fn store(&self, id: Uuid, file_name: &str, record: &ResumeRecord) -> Result<()> {
        let json = serde_json::to_value(record).context("Failed to serialize resume record")?;

        sqlx::query(
            r#"
            INSERT INTO resumes (id, file_name, name, email, phone, record, created_at)
            VALUES ($1, $2, $3, $4, $5, $6, $7)
            "#,
        )
        .bind(id)
        .bind(file_name)
        .bind(record.name.as_deref())
        .bind(record.contact.email.as_deref())
        .bind(record.contact.phone.as_deref())
        .bind(json)
        .bind(record.created_at)
        .execute(&self.pool)
        .await
        .context("Failed to insert resume record")?;

        info!("Stored resume {id} ({file_name})");
        Ok(())
    }

    async fn fetch(&self, id: Uuid) -> Result<Option<ResumeRecord>> {
        let row: Option<ResumeRow> = sqlx::query_as("SELECT * FROM resumes WHERE id = $1")
            .bind(id)
            .fetch_optional(&self.pool)
            .await
            .context("Failed to load resume record")?;

        row.map(|r| serde_json::from_value(r.record).context("Stored resume record is malformed"))
            .transpose()
    }
}
