//! Turns an uploaded PDF or DOCX into plain text.
//!
//! Both decoders are CPU-bound; async callers go through
//! [`extract_text_blocking`], which runs them on the blocking pool.

pub mod docx;

use bytes::Bytes;
use thiserror::Error;
use tracing::debug;

#[derive(Debug, Error)]
pub enum DocumentError {
    #[error("Unsupported file format: {0}")]
    UnsupportedFormat(String),

    #[error("Failed to extract text from PDF: {0}")]
    Pdf(String),

    #[error("Failed to extract text from DOCX: {0}")]
    Docx(String),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DocumentFormat {
    Pdf,
    Docx,
}

impl DocumentFormat {
    /// Picks the format from the file extension, ignoring case.
    pub fn from_file_name(file_name: &str) -> Result<Self, DocumentError> {
        let extension = std::path::Path::new(file_name)
            .extension()
            .and_then(|e| e.to_str())
            .map(str::to_ascii_lowercase);

        match extension.as_deref() {
            Some("pdf") => Ok(DocumentFormat::Pdf),
            Some("docx") => Ok(DocumentFormat::Docx),
            _ => Err(DocumentError::UnsupportedFormat(format!(
                "'{file_name}' is not a .pdf or .docx file"
            ))),
        }
    }
}

/// An uploaded file. Lives only for the duration of one extraction.
#[derive(Debug, Clone)]
pub struct Document {
    pub file_name: String,
    pub format: DocumentFormat,
    pub bytes: Bytes,
}

impl Document {
    pub fn new(file_name: impl Into<String>, bytes: Bytes) -> Result<Self, DocumentError> {
        let file_name = file_name.into();
        let format = DocumentFormat::from_file_name(&file_name)?;
        Ok(Document {
            file_name,
            format,
            bytes,
        })
    }
}

pub fn extract_text(document: &Document) -> Result<String, DocumentError> {
    let text = match document.format {
        DocumentFormat::Pdf => pdf_extract::extract_text_from_mem(&document.bytes)
            .map_err(|e| DocumentError::Pdf(e.to_string()))?,
        DocumentFormat::Docx => docx::extract_docx_text(&document.bytes)?,
    };
    debug!(
        "Extracted {} chars from {:?} '{}'",
        text.len(),
        document.format,
        document.file_name
    );
    Ok(text)
}

/// Runs [`extract_text`] on tokio's blocking pool. A decoder panic is
/// reported as an extraction failure for the document's format.
pub async fn extract_text_blocking(document: Document) -> Result<String, DocumentError> {
    let format = document.format;
    match tokio::task::spawn_blocking(move || extract_text(&document)).await {
        Ok(result) => result,
        Err(e) => {
            let message = format!("decoder aborted: {e}");
            Err(match format {
                DocumentFormat::Pdf => DocumentError::Pdf(message),
                DocumentFormat::Docx => DocumentError::Docx(message),
            })
        }
    }
}
