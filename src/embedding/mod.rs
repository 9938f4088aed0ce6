// Sentence embeddings: trait, local ONNX implementation, model download.

pub mod download;
pub mod onnx;
pub mod traits;

pub use onnx::SentenceEmbedder;
pub use traits::Embedder;

/// Embedding dimension for all-MiniLM-L6-v2.
pub const EMBEDDING_DIM: usize = 384;
