// Resume-vs-job scoring pipeline.
//
// normalize -> embed (each side on its own, batch size 1) -> cosine -> percent.
// The scorer owns its embedder; construct it once per process and reuse it
// for every request.

use tracing::debug;

use super::similarity::{cosine_similarity, to_percentage, MatchTier};
use crate::embedding::Embedder;
use crate::error::{EmbeddingError, MatchError};
use crate::text::{extract_text, normalize, NormalizedText};

/// Result of scoring a resume document against a job description.
#[derive(Debug, Clone)]
pub struct MatchOutcome {
    pub resume: NormalizedText,
    pub job: NormalizedText,
    /// Similarity as a percentage, 0.0 to 100.0, two decimal places.
    pub percentage: f64,
    pub tier: MatchTier,
}

/// Scores text pairs with a loaded embedding model.
pub struct MatchScorer<E> {
    embedder: E,
}

impl<E: Embedder> MatchScorer<E> {
    pub fn new(embedder: E) -> Self {
        Self { embedder }
    }

    /// Cosine similarity (0.0 to 1.0) between two normalized texts.
    pub fn similarity(
        &self,
        resume: &NormalizedText,
        job: &NormalizedText,
    ) -> Result<f64, EmbeddingError> {
        let resume_embedding = self.embedder.embed(resume.as_str())?;
        let job_embedding = self.embedder.embed(job.as_str())?;
        Ok(cosine_similarity(&resume_embedding, &job_embedding))
    }

    /// Match percentage between a resume and a job description.
    ///
    /// Both inputs are normalized first; already-normalized text passes
    /// through unchanged.
    pub fn score(&self, resume_text: &str, job_text: &str) -> Result<f64, EmbeddingError> {
        let resume = normalize(resume_text);
        let job = normalize(job_text);
        let similarity = self.similarity(&resume, &job)?;
        Ok(to_percentage(similarity))
    }

    /// Full pipeline from PDF bytes: extract, normalize, score, classify.
    pub fn score_document(
        &self,
        document: &[u8],
        job_text: &str,
    ) -> Result<MatchOutcome, MatchError> {
        let resume = normalize(&extract_text(document)?);
        let job = normalize(job_text);

        let similarity = self.similarity(&resume, &job)?;
        let percentage = to_percentage(similarity);
        let tier = MatchTier::from_percentage(percentage);

        debug!(
            resume_chars = resume.char_count(),
            job_chars = job.char_count(),
            similarity = similarity,
            percentage = percentage,
            "Scored resume against job description"
        );

        Ok(MatchOutcome {
            resume,
            job,
            percentage,
            tier,
        })
    }
}
