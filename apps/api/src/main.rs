mod config;
mod db;
mod documents;
mod errors;
mod models;
mod ner_client;
mod parser;
mod resumes;
mod routes;
mod state;
mod storage;

use anyhow::Result;
use aws_config::Region;
use aws_sdk_s3::config::Credentials;
use std::net::SocketAddr;
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use tracing::{info, warn};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use std::sync::Arc;

use crate::config::{Config, S3Config};
use crate::db::{create_pool, ensure_schema};
use crate::ner_client::{EntityRecognizer, HttpRecognizer, RuleBasedRecognizer};
use crate::routes::build_router;
use crate::state::AppState;
use crate::storage::{ArtifactStore, FsArtifactStore, PgRecordSink, RecordSink, S3ArtifactStore};

#[tokio::main]
async fn main() -> Result<()> {
    let config = Config::from_env()?;

    // Initialize structured logging
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| {
            EnvFilter::new(format!("{}={}", env!("CARGO_PKG_NAME"), &config.rust_log))
        }))
        .with(tracing_subscriber::fmt::layer())
        .init();

    info!("Starting Resume API v{}", env!("CARGO_PKG_VERSION"));

    // PostgreSQL is optional; without it records are only written as artifacts
    let records: Option<Arc<dyn RecordSink>> = match &config.database_url {
        Some(url) => {
            let pool = create_pool(url).await?;
            ensure_schema(&pool).await?;
            Some(Arc::new(PgRecordSink::new(pool)))
        }
        None => {
            warn!("DATABASE_URL not set; records will not be stored in a database");
            None
        }
    };

    let artifacts: Arc<dyn ArtifactStore> = match &config.s3 {
        Some(s3) => {
            let client = build_s3_client(s3).await;
            info!("S3 artifact store initialized (bucket: {})", s3.bucket);
            Arc::new(S3ArtifactStore::new(client, s3.bucket.clone()))
        }
        None => {
            info!("Writing JSON artifacts to '{}'", config.artifact_dir);
            Arc::new(FsArtifactStore::new(&config.artifact_dir).await?)
        }
    };

    // RuleBasedRecognizer by default; swap via NER_SERVICE_URL
    let recognizer: Arc<dyn EntityRecognizer> = match &config.ner_service_url {
        Some(url) => Arc::new(HttpRecognizer::new(url.clone())?),
        None => Arc::new(RuleBasedRecognizer),
    };
    info!("Name recognizer: {}", recognizer.backend());

    let state = AppState {
        recognizer,
        records,
        artifacts,
        max_upload_bytes: config.max_upload_bytes,
    };

    let app = build_router(state)
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive()); // TODO: restrict origins once the UI is served from a fixed host

    let addr: SocketAddr = format!("0.0.0.0:{}", config.port).parse()?;
    info!("Listening on {addr}");

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}

/// Constructs an S3 client configured for MinIO (local) or AWS (production).
async fn build_s3_client(s3: &S3Config) -> aws_sdk_s3::Client {
    let credentials = Credentials::new(
        &s3.access_key_id,
        &s3.secret_access_key,
        None,
        None,
        "resume-api-static",
    );

    let sdk_config = aws_config::defaults(aws_config::BehaviorVersion::latest())
        .region(Region::new("us-east-1"))
        .credentials_provider(credentials)
        .endpoint_url(&s3.endpoint)
        .load()
        .await;

    aws_sdk_s3::Client::new(&sdk_config)
}
