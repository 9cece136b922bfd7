//! Entity recognition backends used to find the candidate's name.
//!
//! `AppState` carries an `Arc<dyn EntityRecognizer>`: the rule-based backend by
//! default, or `HttpRecognizer` when `NER_SERVICE_URL` points at an external
//! NER service (e.g. a spaCy `en_core_web_sm` wrapper).
use async_trait::async_trait;
use reqwest::Client;
use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::{debug, warn};

pub mod rule_based;

pub use rule_based::RuleBasedRecognizer;

/// Label the name resolver looks for.
pub const PERSON_LABEL: &str = "PERSON";

const REQUEST_TIMEOUT_SECS: u64 = 120;
const MAX_RETRIES: u32 = 3;

#[derive(Debug, Error)]
pub enum RecognizerError {
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("NER service error (status {status}): {message}")]
    Api { status: u16, message: String },

    #[error("JSON parse error: {0}")]
    Parse(#[from] serde_json::Error),
}

/// One labelled span returned by a recognizer.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Entity {
    pub text: String,
    pub label: String,
}

impl Entity {
    pub fn person(text: impl Into<String>) -> Self {
        Entity {
            text: text.into(),
            label: PERSON_LABEL.to_string(),
        }
    }
}

#[async_trait]
pub trait EntityRecognizer: Send + Sync {
    async fn find_entities(&self, span: &str) -> Result<Vec<Entity>, RecognizerError>;

    /// Short backend name for logs.
    fn backend(&self) -> &'static str;
}

#[derive(Debug, Serialize)]
struct NerRequest<'a> {
    text: &'a str,
}

/// Accepts both a bare entity array and an `{"entities": [...]}` envelope.
#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum NerResponse {
    Bare(Vec<Entity>),
    Wrapped { entities: Vec<Entity> },
}

impl From<NerResponse> for Vec<Entity> {
    fn from(response: NerResponse) -> Self {
        match response {
            NerResponse::Bare(entities) | NerResponse::Wrapped { entities } => entities,
        }
    }
}

/// Calls an external NER service over HTTP.
/// Retries on 429 and 5xx with exponential backoff.
#[derive(Clone)]
pub struct HttpRecognizer {
    client: Client,
    url: String,
}

impl HttpRecognizer {
    pub fn new(url: String) -> Result<Self, RecognizerError> {
        let client = Client::builder()
            .timeout(std::time::Duration::from_secs(REQUEST_TIMEOUT_SECS))
            .build()?;
        Ok(Self { client, url })
    }
}

#[async_trait]
impl EntityRecognizer for HttpRecognizer {
    async fn find_entities(&self, span: &str) -> Result<Vec<Entity>, RecognizerError> {
        let body = NerRequest { text: span };
        let mut last_error: Option<RecognizerError> = None;

        for attempt in 0..MAX_RETRIES {
            if attempt > 0 {
                // 500ms, 1s
                let delay = std::time::Duration::from_millis(500 * (1 << (attempt - 1)));
                warn!(
                    "NER call attempt {} failed, retrying after {}ms...",
                    attempt,
                    delay.as_millis()
                );
                tokio::time::sleep(delay).await;
            }

            let response = match self.client.post(&self.url).json(&body).send().await {
                Ok(r) => r,
                Err(e) => {
                    last_error = Some(RecognizerError::Http(e));
                    continue;
                }
            };

            let status = response.status();
            if status.as_u16() == 429 || status.is_server_error() {
                let message = response.text().await.unwrap_or_default();
                warn!("NER service returned {}: {}", status, message);
                last_error = Some(RecognizerError::Api {
                    status: status.as_u16(),
                    message,
                });
                continue;
            }

            if !status.is_success() {
                return Err(RecognizerError::Api {
                    status: status.as_u16(),
                    message: response.text().await.unwrap_or_default(),
                });
            }

            let text = response.text().await?;
            let entities: Vec<Entity> = parse_response(&text)?;
            debug!("NER call returned {} entities", entities.len());
            return Ok(entities);
        }

        Err(last_error.unwrap_or(RecognizerError::Api {
            status: 0,
            message: format!("no response after {MAX_RETRIES} attempts"),
        }))
    }

    fn backend(&self) -> &'static str {
        "http"
    }
}

fn parse_response(body: &str) -> Result<Vec<Entity>, RecognizerError> {
    let response: NerResponse = serde_json::from_str(body)?;
    Ok(response.into())
}
