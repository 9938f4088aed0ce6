// resume-match: score a resume against a job description.
//
// This is the library root. The core pipeline is text -> embedding ->
// cosine -> percentage; advice and output sit around it.

pub mod advice;
pub mod config;
pub mod embedding;
pub mod error;
pub mod output;
pub mod scoring;
pub mod status;
pub mod text;

pub use error::{AdviceServiceError, EmbeddingError, ExtractionError, MatchError};
pub use scoring::{cosine_similarity, MatchScorer};
pub use text::{extract_text, normalize, NormalizedText};
