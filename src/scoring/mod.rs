// Similarity scoring: cosine over sentence embeddings, scaled to a percentage.

pub mod scorer;
pub mod similarity;

pub use scorer::{MatchOutcome, MatchScorer};
pub use similarity::{cosine_similarity, to_percentage, MatchTier};
