// Colored terminal output for match results and advice.

use colored::Colorize;

use crate::scoring::{MatchOutcome, MatchTier};

/// Width of the text progress bar, in cells.
const BAR_WIDTH: usize = 40;

/// How much normalized resume text `--show-text` prints.
pub const PREVIEW_CHARS: usize = 500;

/// Display the match score, a progress bar, and the tier verdict.
pub fn display_match(outcome: &MatchOutcome) {
    println!("\n{}", "=== Analysis Results ===".bold());
    println!();
    println!(
        "  Match Score: {}",
        colorize_tier(outcome.tier, &format!("{:.2}%", outcome.percentage)).bold()
    );
    println!(
        "  [{}] {}",
        progress_bar(outcome.percentage, BAR_WIDTH),
        colorize_tier(outcome.tier, outcome.tier.label())
    );
    println!();
    println!(
        "  {}",
        "Cosine similarity between sentence embeddings of your resume and the job \
         description: how conceptually close the two texts are."
            .dimmed()
    );
}

/// Display the start of the normalized resume text.
pub fn display_text_preview(resume_text: &str) {
    println!("\n{}", "=== Extracted Text ===".bold());
    let head: String = resume_text.chars().take(PREVIEW_CHARS).collect();
    println!("{head}...");
}

/// Display the advice service result. Errors are printed, not propagated.
pub fn display_advice(advice: &Result<String, String>) {
    println!("\n{}", "=== AI Improvement Advice ===".bold());
    println!();
    match advice {
        Ok(text) => println!("{text}"),
        Err(e) => println!("{} {e}", "Error connecting to AI:".red()),
    }
}

/// Render a fixed-width bar filled in proportion to `percentage`.
pub fn progress_bar(percentage: f64, width: usize) -> String {
    let filled = ((percentage.clamp(0.0, 100.0) / 100.0) * width as f64).round() as usize;
    format!("{}{}", "=".repeat(filled), " ".repeat(width - filled))
}

fn colorize_tier(tier: MatchTier, text: &str) -> colored::ColoredString {
    match tier {
        MatchTier::Great => text.green(),
        MatchTier::Good => text.yellow(),
        MatchTier::Low => text.red(),
    }
}
