// Environment status: checks the token and model files and loads the model.

use anyhow::Result;
use colored::Colorize;
use tracing::warn;

use crate::config::Config;
use crate::embedding::download::{MODEL_FILE, TOKENIZER_FILE};
use crate::embedding::{Embedder, SentenceEmbedder, EMBEDDING_DIM};

/// Display setup status to the terminal.
pub fn show(config: &Config) -> Result<()> {
    if config.hf_token.is_empty() {
        println!("HF_TOKEN: {} (AI advice disabled)", "not set".yellow());
    } else {
        println!("HF_TOKEN: {}", "found".green());
    }
    println!("Advice model: {}", config.advice_model);

    println!("Model directory: {}", config.model_dir.display());
    for file in [MODEL_FILE, TOKENIZER_FILE] {
        let path = config.model_dir.join(file);
        match std::fs::metadata(&path) {
            Ok(meta) => println!("  {file}: {}", format_bytes(meta.len())),
            Err(_) => println!("  {file}: {}", "missing".red()),
        }
    }

    if config.require_model().is_err() {
        println!("\nRun `resume-match download-model` to fetch the embedding model.");
        return Ok(());
    }

    match SentenceEmbedder::load(&config.model_dir).and_then(|e| e.embed("status check")) {
        Ok(v) if v.len() == EMBEDDING_DIM => {
            println!("Embedding model: {} ({}-dim)", "loaded".green(), v.len());
        }
        Ok(v) => {
            warn!(dim = v.len(), expected = EMBEDDING_DIM, "Unexpected embedding size");
            println!(
                "Embedding model: {} ({} dims, expected {})",
                "wrong shape".red(),
                v.len(),
                EMBEDDING_DIM
            );
        }
        Err(e) => {
            println!("Embedding model: {} ({e})", "failed to load".red());
        }
    }

    Ok(())
}

fn format_bytes(bytes: u64) -> String {
    if bytes < 1024 {
        format!("{} B", bytes)
    } else if bytes < 1024 * 1024 {
        format!("{:.1} KB", bytes as f64 / 1024.0)
    } else {
        format!("{:.1} MB", bytes as f64 / (1024.0 * 1024.0))
    }
}
