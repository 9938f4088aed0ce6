use std::path::{Path, PathBuf};
use std::time::Duration;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use colored::Colorize;
use indicatif::ProgressBar;
use tracing::info;

use resume_match::advice::huggingface::HuggingFaceAdvisor;
use resume_match::advice::traits::AdviceService;
use resume_match::config::Config;
use resume_match::embedding::SentenceEmbedder;
use resume_match::output::report::MatchReport;
use resume_match::scoring::{MatchOutcome, MatchScorer};
use resume_match::text::{extract_text_from_file, normalize};

/// resume-match: score a resume against a job description.
///
/// Embeds both texts with a local sentence-transformer model and reports
/// their cosine similarity as a match percentage, with optional AI advice
/// on what the resume is missing.
#[derive(Parser)]
#[command(name = "resume-match", version, about)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Score a resume PDF against a job description
    Score {
        /// Path to the resume PDF
        resume: PathBuf,

        /// Job description file (PDF or plain text)
        #[arg(long, conflicts_with = "job_text", required_unless_present = "job_text")]
        job: Option<PathBuf>,

        /// Job description given inline
        #[arg(long)]
        job_text: Option<String>,

        /// Ask the hosted model for improvement advice (needs HF_TOKEN)
        #[arg(long)]
        advice: bool,

        /// Print the first 500 characters of the normalized resume text
        #[arg(long)]
        show_text: bool,

        /// Emit a JSON report instead of terminal output
        #[arg(long)]
        json: bool,
    },

    /// Print the normalized text of a PDF or plain-text file
    Normalize {
        /// File to normalize
        file: PathBuf,
    },

    /// Download the sentence embedding model (~90 MB)
    DownloadModel,

    /// Check the token, the model files, and that the model loads
    Status,
}

#[tokio::main]
async fn main() -> Result<()> {
    // Load .env file if present (silently ignore if missing)
    let _ = dotenvy::dotenv();

    // Logs go to stderr so `score --json` output stays parseable.
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("resume_match=info")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Score {
            resume,
            job,
            job_text,
            advice,
            show_text,
            json,
        } => {
            let config = Config::load()?;
            config.require_model()?;

            let job_text = match (job, job_text) {
                (_, Some(text)) => text,
                (Some(path), None) => read_text_file(&path)?,
                (None, None) => anyhow::bail!("Provide a job description with --job or --job-text"),
            };

            let document = std::fs::read(&resume)
                .with_context(|| format!("Failed to read resume {}", resume.display()))?;

            if !json {
                println!("Loading embedding model...");
            }
            let embedder = SentenceEmbedder::load(&config.model_dir)?;
            let scorer = MatchScorer::new(embedder);
            info!(resume = %resume.display(), "Scoring resume");

            // Inference is CPU-bound; keep it off the async runtime.
            let outcome = tokio::task::spawn_blocking(move || {
                scorer.score_document(&document, &job_text)
            })
            .await
            .context("Scoring task panicked")??;

            let advice_result = if advice {
                Some(request_advice(&config, &outcome, !json).await)
            } else {
                None
            };

            if json {
                let mut report = MatchReport::from_outcome(&outcome);
                if let Some(result) = advice_result {
                    report = report.with_advice(result);
                }
                println!("{}", serde_json::to_string_pretty(&report)?);
                return Ok(());
            }

            resume_match::output::terminal::display_match(&outcome);

            if show_text {
                resume_match::output::terminal::display_text_preview(outcome.resume.as_str());
            }

            match advice_result {
                Some(result) => resume_match::output::terminal::display_advice(&result),
                None => println!(
                    "\n{}",
                    "Tip: pass --advice to ask the AI for specific improvement tips.".dimmed()
                ),
            }
        }

        Commands::Normalize { file } => {
            let raw = read_text_file(&file)?;
            println!("{}", normalize(&raw));
        }

        Commands::DownloadModel => {
            let config = Config::load()?;
            let model_dir = &config.model_dir;

            println!("Downloading embedding model...");
            println!("  Destination: {}", model_dir.display());

            resume_match::embedding::download::download_model(model_dir).await?;

            println!("\n{}", "Model downloaded successfully.".bold());
            println!("You can now run `resume-match score <resume.pdf> --job <job.txt>`.");
        }

        Commands::Status => {
            let config = Config::load()?;
            resume_match::status::show(&config)?;
        }
    }

    Ok(())
}

/// Read a PDF (via text extraction) or a UTF-8 text file.
fn read_text_file(path: &Path) -> Result<String> {
    let is_pdf = path
        .extension()
        .and_then(|ext| ext.to_str())
        .is_some_and(|ext| ext.eq_ignore_ascii_case("pdf"));

    if is_pdf {
        Ok(extract_text_from_file(path)?)
    } else {
        std::fs::read_to_string(path).with_context(|| format!("Failed to read {}", path.display()))
    }
}

/// Ask the advice service for feedback. Any failure comes back as a message
/// for display; it never aborts the run.
async fn request_advice(
    config: &Config,
    outcome: &MatchOutcome,
    show_spinner: bool,
) -> std::result::Result<String, String> {
    config.require_hf_token().map_err(|e| e.to_string())?;
    let advisor =
        HuggingFaceAdvisor::new(config.hf_token.clone(), &config.advice_url, &config.advice_model)
            .map_err(|e| e.to_string())?;

    let spinner = show_spinner.then(|| {
        let pb = ProgressBar::new_spinner();
        pb.set_message("Analyzing your resume against the job description...");
        pb.enable_steady_tick(Duration::from_millis(120));
        pb
    });

    let result = advisor
        .advise(&outcome.resume, &outcome.job)
        .await
        .map_err(|e| e.to_string());

    if let Some(pb) = spinner {
        pb.finish_and_clear();
    }

    result
}
