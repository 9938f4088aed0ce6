use std::env;
use std::path::PathBuf;

use anyhow::Result;

use crate::advice::huggingface::{DEFAULT_ADVICE_MODEL, DEFAULT_INFERENCE_URL};
use crate::embedding::download;

/// Central configuration loaded from environment variables.
///
/// Secrets come from env vars (never hardcoded). The .env file is loaded
/// automatically at startup via dotenvy.
pub struct Config {
    /// HuggingFace access token for the advice service (HF_TOKEN).
    /// Empty when unset; only `--advice` needs it.
    pub hf_token: String,
    /// Directory containing `model.onnx` and `tokenizer.json`
    pub model_dir: PathBuf,
    /// Hosted chat model used for advice
    pub advice_model: String,
    /// Inference API base URL
    pub advice_url: String,
}

impl Config {
    /// Load configuration from environment variables.
    ///
    /// Everything has a default except the HF token.
    pub fn load() -> Result<Self> {
        let model_dir = env::var("RESUME_MATCH_MODEL_DIR")
            .map(PathBuf::from)
            .unwrap_or_else(|_| download::default_model_dir());

        Ok(Self {
            hf_token: env::var("HF_TOKEN").unwrap_or_default(),
            model_dir,
            advice_model: env::var("RESUME_MATCH_ADVICE_MODEL")
                .unwrap_or_else(|_| DEFAULT_ADVICE_MODEL.to_string()),
            advice_url: env::var("RESUME_MATCH_ADVICE_URL")
                .unwrap_or_else(|_| DEFAULT_INFERENCE_URL.to_string()),
        })
    }

    /// Check that the HuggingFace token is configured.
    /// Call this before requesting advice.
    pub fn require_hf_token(&self) -> Result<()> {
        if self.hf_token.is_empty() {
            anyhow::bail!(
                "HF_TOKEN not set. Add it to your .env file to enable AI advice.\n\
                 Create a token at https://huggingface.co/settings/tokens"
            );
        }
        Ok(())
    }

    /// Check that the embedding model files are on disk.
    pub fn require_model(&self) -> Result<()> {
        if !download::model_files_present(&self.model_dir) {
            anyhow::bail!(
                "Embedding model files not found in {}\n\
                 Run `resume-match download-model` to download them.",
                self.model_dir.display()
            );
        }
        Ok(())
    }
}
