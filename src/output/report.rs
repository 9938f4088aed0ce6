// Machine-readable match report (for `score --json`).

use serde::Serialize;

use crate::scoring::{MatchOutcome, MatchTier};

/// Serializable summary of one scoring run.
#[derive(Debug, Serialize)]
pub struct MatchReport {
    pub match_percentage: f64,
    pub tier: MatchTier,
    pub verdict: &'static str,
    pub resume_chars: usize,
    pub job_chars: usize,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub advice: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub advice_error: Option<String>,
}

impl MatchReport {
    pub fn from_outcome(outcome: &MatchOutcome) -> Self {
        Self {
            match_percentage: outcome.percentage,
            tier: outcome.tier,
            verdict: outcome.tier.label(),
            resume_chars: outcome.resume.char_count(),
            job_chars: outcome.job.char_count(),
            advice: None,
            advice_error: None,
        }
    }

    /// Attach the advice result, success or failure.
    pub fn with_advice(mut self, advice: Result<String, String>) -> Self {
        match advice {
            Ok(text) => self.advice = Some(text),
            Err(e) => self.advice_error = Some(e),
        }
        self
    }
}
