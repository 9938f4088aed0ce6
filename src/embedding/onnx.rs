// Sentence embeddings using all-MiniLM-L6-v2 via ONNX Runtime.
//
// Each text is tokenized, run through the BERT encoder, and mean-pooled over
// the attention mask into one 384-dimensional vector. This is the same
// pipeline sentence-transformers applies for this model, including its
// 256-token input window: longer text is truncated rather than rejected.
//
// The model runs locally, with no API calls.

use std::path::Path;
use std::sync::Mutex;

use ort::session::Session;
use ort::value::Tensor;
use tokenizers::{Tokenizer, TruncationParams};
use tracing::debug;

use super::traits::Embedder;
use super::EMBEDDING_DIM;
use crate::error::EmbeddingError;

/// Maximum number of word pieces the model sees per text.
pub const MAX_SEQ_LEN: usize = 256;

/// Sentence embedder backed by a local ONNX model.
///
/// Load it once per process and share it: `Session::run` needs `&mut`, so
/// the session sits behind a Mutex, which also makes the embedder
/// `Send + Sync` for use from `spawn_blocking`.
pub struct SentenceEmbedder {
    session: Mutex<Session>,
    tokenizer: Tokenizer,
}

impl SentenceEmbedder {
    /// Load the sentence embedding model and tokenizer from the given directory.
    ///
    /// Expects `model.onnx` and `tokenizer.json` in the directory.
    /// Call `download_model()` first if they don't exist.
    pub fn load(model_dir: &Path) -> Result<Self, EmbeddingError> {
        let model_path = model_dir.join(super::download::MODEL_FILE);
        let tokenizer_path = model_dir.join(super::download::TOKENIZER_FILE);

        if !model_path.exists() {
            return Err(EmbeddingError::ModelNotFound {
                what: "Embedding model",
                path: model_path,
            });
        }
        if !tokenizer_path.exists() {
            return Err(EmbeddingError::ModelNotFound {
                what: "Embedding tokenizer",
                path: tokenizer_path,
            });
        }

        let session = Session::builder()
            .map_err(|e| EmbeddingError::Load(format!("ONNX session builder: {e}")))?
            .commit_from_file(&model_path)
            .map_err(|e| EmbeddingError::Load(format!("{}: {e}", model_path.display())))?;

        let mut tokenizer = Tokenizer::from_file(&tokenizer_path)
            .map_err(|e| EmbeddingError::Load(format!("tokenizer: {e}")))?;
        tokenizer
            .with_truncation(Some(TruncationParams {
                max_length: MAX_SEQ_LEN,
                ..Default::default()
            }))
            .map_err(|e| EmbeddingError::Load(format!("tokenizer truncation: {e}")))?;

        debug!(
            "Loaded sentence embedding model from {}",
            model_dir.display()
        );

        Ok(Self {
            session: Mutex::new(session),
            tokenizer,
        })
    }
}

impl Embedder for SentenceEmbedder {
    fn embed(&self, text: &str) -> Result<Vec<f64>, EmbeddingError> {
        embed_sync(&self.session, &self.tokenizer, text)
    }
}

/// Tokenize, run inference, and mean-pool a single text.
fn embed_sync(
    session: &Mutex<Session>,
    tokenizer: &Tokenizer,
    text: &str,
) -> Result<Vec<f64>, EmbeddingError> {
    let encoding = tokenizer
        .encode(text, true)
        .map_err(|e| EmbeddingError::Tokenization(e.to_string()))?;

    let seq_len = encoding.get_ids().len();
    if seq_len == 0 {
        return Ok(vec![0.0; EMBEDDING_DIM]);
    }

    // BERT inputs for a single sentence:
    //   input_ids: token IDs
    //   attention_mask: 1 for real tokens, 0 for any padding the tokenizer added
    //   token_type_ids: all zeros
    let input_ids: Vec<i64> = encoding.get_ids().iter().map(|&id| id as i64).collect();
    let attention_mask: Vec<i64> = encoding
        .get_attention_mask()
        .iter()
        .map(|&m| m as i64)
        .collect();
    let token_type_ids = vec![0i64; seq_len];

    let shape = [1i64, seq_len as i64];

    let input_ids_tensor = Tensor::from_array((shape, input_ids))
        .map_err(|e| EmbeddingError::Inference(format!("input_ids tensor: {e}")))?;
    let attention_mask_tensor = Tensor::from_array((shape, attention_mask.clone()))
        .map_err(|e| EmbeddingError::Inference(format!("attention_mask tensor: {e}")))?;
    let token_type_ids_tensor = Tensor::from_array((shape, token_type_ids))
        .map_err(|e| EmbeddingError::Inference(format!("token_type_ids tensor: {e}")))?;

    // Output is last_hidden_state: [1, seq_len, 384]
    let hidden_states = {
        let mut session = session
            .lock()
            .map_err(|e| EmbeddingError::Inference(format!("session lock poisoned: {e}")))?;

        let outputs = session
            .run(ort::inputs! {
                "input_ids" => input_ids_tensor,
                "attention_mask" => attention_mask_tensor,
                "token_type_ids" => token_type_ids_tensor
            })
            .map_err(|e| EmbeddingError::Inference(e.to_string()))?;

        let (_shape, data) = outputs[0]
            .try_extract_tensor::<f32>()
            .map_err(|e| EmbeddingError::Inference(format!("output tensor: {e}")))?;

        data.to_vec()
    };

    if hidden_states.len() != seq_len * EMBEDDING_DIM {
        return Err(EmbeddingError::Inference(format!(
            "unexpected output size {} for {} tokens",
            hidden_states.len(),
            seq_len
        )));
    }

    let embedding = mean_pool(&hidden_states, &attention_mask);

    debug!(
        tokens = seq_len,
        dim = EMBEDDING_DIM,
        "Computed sentence embedding"
    );

    Ok(embedding)
}

/// Average token embeddings, weighted by the attention mask.
///
/// `hidden_states` is row-major `[tokens, EMBEDDING_DIM]`.
pub fn mean_pool(hidden_states: &[f32], attention_mask: &[i64]) -> Vec<f64> {
    let mut sum = vec![0.0_f64; EMBEDDING_DIM];
    let mut mask_sum = 0.0_f64;

    for (token, row) in hidden_states.chunks_exact(EMBEDDING_DIM).enumerate() {
        let mask_val = attention_mask.get(token).copied().unwrap_or(0) as f64;
        if mask_val > 0.0 {
            mask_sum += mask_val;
            for (acc, &v) in sum.iter_mut().zip(row) {
                *acc += v as f64 * mask_val;
            }
        }
    }

    if mask_sum > 0.0 {
        for val in &mut sum {
            *val /= mask_sum;
        }
    }

    sum
}
