// Embedder trait: the seam between the scorer and the model runtime.
//
// The scorer only needs "text in, fixed-length vector out". The default
// implementation is the local ONNX sentence transformer; tests plug in
// deterministic fakes.

use crate::error::EmbeddingError;

/// Maps a string to a dense vector. Implementations must be deterministic
/// for a given model and input, and shareable across threads once loaded.
pub trait Embedder: Send + Sync {
    /// Embed a single text.
    fn embed(&self, text: &str) -> Result<Vec<f64>, EmbeddingError>;
}
