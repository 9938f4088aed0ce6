// HuggingFace Inference API implementation.
//
// Sends the gap-analysis prompt as a single user message to an
// OpenAI-compatible chat-completions route and returns the first choice.
// No retries: a failure is reported once and the caller shows it as-is.

use async_trait::async_trait;
use reqwest::Client;
use serde::{Deserialize, Serialize};
use tracing::debug;

use super::prompt::{gap_analysis_prompt, preview, GapPromptInput};
use super::traits::AdviceService;
use crate::error::AdviceServiceError;
use crate::text::NormalizedText;

/// Default hosted model used for advice.
pub const DEFAULT_ADVICE_MODEL: &str = "HuggingFaceH4/zephyr-7b-beta";

/// Default Inference Providers base URL, routed to HF Inference.
pub const DEFAULT_INFERENCE_URL: &str = "https://router.huggingface.co/hf-inference";

/// Upper bound on generated tokens per request.
const MAX_TOKENS: u32 = 500;

/// Chat-completion advisor backed by the HuggingFace Inference API.
pub struct HuggingFaceAdvisor {
    client: Client,
    token: String,
    base_url: String,
    model: String,
}

impl HuggingFaceAdvisor {
    /// Create an advisor for `model` at `base_url`, authenticated with `token`.
    pub fn new(token: String, base_url: &str, model: &str) -> Result<Self, AdviceServiceError> {
        if token.is_empty() {
            return Err(AdviceServiceError::MissingToken);
        }
        Ok(Self {
            client: Client::new(),
            token,
            base_url: base_url.trim_end_matches('/').to_string(),
            model: model.to_string(),
        })
    }

    /// Full chat-completions URL for the configured model.
    pub fn endpoint(&self) -> String {
        format!("{}/models/{}/v1/chat/completions", self.base_url, self.model)
    }
}

#[async_trait]
impl AdviceService for HuggingFaceAdvisor {
    async fn advise(
        &self,
        resume: &NormalizedText,
        job: &NormalizedText,
    ) -> Result<String, AdviceServiceError> {
        let prompt = gap_analysis_prompt(&GapPromptInput::new(resume.as_str(), job.as_str()));

        let request = ChatRequest {
            model: &self.model,
            messages: vec![ChatMessage {
                role: "user".to_string(),
                content: prompt,
            }],
            max_tokens: MAX_TOKENS,
            stream: false,
        };

        debug!(
            model = %self.model,
            prompt_preview = %preview(&request.messages[0].content),
            "Requesting advice"
        );

        let response = self
            .client
            .post(self.endpoint())
            .bearer_auth(&self.token)
            .json(&request)
            .send()
            .await?;

        if !response.status().is_success() {
            let status = response.status();
            let body = response.text().await.unwrap_or_default();
            return Err(AdviceServiceError::Status { status, body });
        }

        let body: ChatResponse = response.json().await?;
        first_choice(body)
    }
}

/// Pull the content of the first choice out of a chat-completion response.
pub fn first_choice(response: ChatResponse) -> Result<String, AdviceServiceError> {
    response
        .choices
        .into_iter()
        .next()
        .map(|choice| choice.message.content)
        .ok_or(AdviceServiceError::EmptyResponse)
}

// --- Chat-completions request/response types ---

#[derive(Serialize)]
struct ChatRequest<'a> {
    model: &'a str,
    messages: Vec<ChatMessage>,
    max_tokens: u32,
    stream: bool,
}

#[derive(Serialize, Deserialize)]
pub struct ChatMessage {
    pub role: String,
    pub content: String,
}

#[derive(Deserialize)]
pub struct ChatResponse {
    pub choices: Vec<ChatChoice>,
}

#[derive(Deserialize)]
pub struct ChatChoice {
    pub message: ChatMessage,
}
