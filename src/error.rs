// Error taxonomy for the scoring pipeline.
//
// Each stage fails in exactly one way from the caller's point of view:
// extraction, embedding, or the (optional) advice service. Nothing is
// retried; the binary decides how to surface each one.

use std::path::PathBuf;

use thiserror::Error;

/// The document could not be read or parsed as a PDF.
#[derive(Debug, Error)]
pub enum ExtractionError {
    #[error("Failed to read {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to parse PDF: {0}")]
    Malformed(String),

    #[error("Failed to decode text on page {page}: {message}")]
    PageDecode { page: u32, message: String },
}

/// The embedding backend is unavailable or rejected the input.
#[derive(Debug, Error)]
pub enum EmbeddingError {
    #[error("{what} not found: {}\nRun `resume-match download-model` to download it.", .path.display())]
    ModelNotFound { what: &'static str, path: PathBuf },

    #[error("Failed to load embedding model: {0}")]
    Load(String),

    #[error("Tokenization failed: {0}")]
    Tokenization(String),

    #[error("Embedding inference failed: {0}")]
    Inference(String),
}

/// The hosted advice model could not produce feedback.
#[derive(Debug, Error)]
pub enum AdviceServiceError {
    #[error("HF_TOKEN not set. Add it to your .env file to enable AI advice.")]
    MissingToken,

    #[error("request failed: {0}")]
    Request(#[from] reqwest::Error),

    #[error("advice service returned {status}: {body}")]
    Status {
        status: reqwest::StatusCode,
        body: String,
    },

    #[error("advice service returned no choices")]
    EmptyResponse,
}

/// Failure of the end-to-end resume-vs-job pipeline.
#[derive(Debug, Error)]
pub enum MatchError {
    #[error(transparent)]
    Extraction(#[from] ExtractionError),

    #[error(transparent)]
    Embedding(#[from] EmbeddingError),
}
