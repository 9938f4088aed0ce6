// Advice service trait: the swap-ready abstraction.
//
// The default implementation calls a hosted chat-completion model on the
// HuggingFace Inference API. The service is an opaque collaborator: text in,
// free-form feedback out, or an error the caller displays verbatim.

use async_trait::async_trait;

use crate::error::AdviceServiceError;
use crate::text::NormalizedText;

/// Trait for generating improvement advice for a resume against a job.
#[async_trait]
pub trait AdviceService: Send + Sync {
    /// Produce free-text feedback on gaps between the resume and the job.
    async fn advise(
        &self,
        resume: &NormalizedText,
        job: &NormalizedText,
    ) -> Result<String, AdviceServiceError>;
}
