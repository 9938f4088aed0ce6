// Cosine similarity and percentage scaling.

use serde::Serialize;

/// Cosine similarity between two embedding vectors.
///
/// Returns a value in 0.0..=1.0. Opposite directions clamp to 0.0, and a
/// zero-magnitude, empty, or mismatched-length input yields 0.0 instead of
/// NaN.
pub fn cosine_similarity(a: &[f64], b: &[f64]) -> f64 {
    if a.len() != b.len() || a.is_empty() {
        return 0.0;
    }

    let dot: f64 = a.iter().zip(b.iter()).map(|(x, y)| x * y).sum();
    let mag_a: f64 = a.iter().map(|x| x * x).sum::<f64>().sqrt();
    let mag_b: f64 = b.iter().map(|x| x * x).sum::<f64>().sqrt();

    let denom = mag_a * mag_b;
    if denom == 0.0 || !denom.is_finite() {
        return 0.0;
    }

    (dot / denom).clamp(0.0, 1.0)
}

/// Scale a similarity to a percentage rounded to two decimal places.
///
/// Rounds the exact decimal value of `similarity * 100` once, so 0.00015
/// (stored as 0.0149999...) becomes 0.01 rather than 0.02.
pub fn to_percentage(similarity: f64) -> f64 {
    format!("{:.2}", similarity * 100.0).parse().unwrap_or(0.0)
}

/// Coarse verdict shown next to the percentage.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum MatchTier {
    /// 75% and up
    Great,
    /// 50% up to 75%
    Good,
    /// Below 50%
    Low,
}

impl MatchTier {
    pub fn from_percentage(percentage: f64) -> Self {
        if percentage >= 75.0 {
            MatchTier::Great
        } else if percentage >= 50.0 {
            MatchTier::Good
        } else {
            MatchTier::Low
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            MatchTier::Great => "Great Match!",
            MatchTier::Good => "Good, but needs work.",
            MatchTier::Low => "Low match.",
        }
    }
}
