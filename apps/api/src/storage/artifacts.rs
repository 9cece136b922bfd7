use std::path::PathBuf;

use anyhow::{Context, Result};
use async_trait::async_trait;
use aws_sdk_s3::primitives::ByteStream;
use tracing::info;
use uuid::Uuid;

/// Stores the downloadable JSON file for each parsed upload.
#[async_trait]
pub trait ArtifactStore: Send + Sync {
    async fn put(&self, id: Uuid, json: Vec<u8>) -> Result<()>;

    /// `None` when nothing was stored under `id`.
    async fn get(&self, id: Uuid) -> Result<Option<Vec<u8>>>;
}

pub fn artifact_file_name(id: Uuid) -> String {
    format!("{id}.json")
}

/// Writes `<dir>/<id>.json` on local disk.
#[derive(Debug, Clone)]
pub struct FsArtifactStore {
    dir: PathBuf,
}

impl FsArtifactStore {
    /// Creates the directory if it does not exist yet.
    pub async fn new(dir: impl Into<PathBuf>) -> Result<Self> {
        let dir = dir.into();
        tokio::fs::create_dir_all(&dir)
            .await
            .with_context(|| format!("Failed to create artifact directory {}", dir.display()))?;
        Ok(Self { dir })
    }

    fn path_for(&self, id: Uuid) -> PathBuf {
        self.dir.join(artifact_file_name(id))
    }
}

#[async_trait]
impl ArtifactStore for FsArtifactStore {
    async fn put(&self, id: Uuid, json: Vec<u8>) -> Result<()> {
        let path = self.path_for(id);
        tokio::fs::write(&path, json)
            .await
            .with_context(|| format!("Failed to write artifact {}", path.display()))?;
        info!("Wrote JSON artifact {}", path.display());
        Ok(())
    }

    async fn get(&self, id: Uuid) -> Result<Option<Vec<u8>>> {
        let path = self.path_for(id);
        match tokio::fs::read(&path).await {
            Ok(bytes) => Ok(Some(bytes)),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(None),
            Err(e) => {
                Err(e).with_context(|| format!("Failed to read artifact {}", path.display()))
            }
        }
    }
}

/// Stores artifacts as `resumes/<id>.json` in an S3 (or MinIO) bucket.
#[derive(Clone)]
pub struct S3ArtifactStore {
    client: aws_sdk_s3::Client,
    bucket: String,
}

impl S3ArtifactStore {
    pub fn new(client: aws_sdk_s3::Client, bucket: String) -> Self {
        Self { client, bucket }
    }

    fn key_for(id: Uuid) -> String {
        format!("resumes/{}", artifact_file_name(id))
    }
}

#[async_trait]
impl ArtifactStore for S3ArtifactStore {
    async fn put(&self, id: Uuid, json: Vec<u8>) -> Result<()> {
        let key = Self::key_for(id);
        self.client
            .put_object()
            .bucket(&self.bucket)
            .key(&key)
            .body(ByteStream::from(json))
            .content_type("application/json")
            .send()
            .await
            .map_err(|e| anyhow::anyhow!("S3 upload failed: {e}"))?;

        info!("Uploaded JSON artifact to s3://{}/{}", self.bucket, key);
        Ok(())
    }

    async fn get(&self, id: Uuid) -> Result<Option<Vec<u8>>> {
        let key = Self::key_for(id);
        let output = match self
            .client
            .get_object()
            .bucket(&self.bucket)
            .key(&key)
            .send()
            .await
        {
            Ok(output) => output,
            Err(e) => {
                let missing = e
                    .as_service_error()
                    .map(|se| se.is_no_such_key())
                    .unwrap_or(false);
                if missing {
                    return Ok(None);
                }
                return Err(anyhow::anyhow!("S3 download failed: {e}"));
            }
        };

        let body = output
            .body
            .collect()
            .await
            .map_err(|e| anyhow::anyhow!("S3 body read failed: {e}"))?;
        Ok(Some(body.into_bytes().to_vec()))
    }
}
