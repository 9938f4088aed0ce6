// Prompt template for the gap-analysis request.

use crate::output::truncate_chars;

/// Resume and job text are cut to this many characters before templating,
/// which keeps the request inside free-tier context limits.
pub const SNIPPET_CHARS: usize = 3000;

/// Structured input for [`gap_analysis_prompt`].
#[derive(Debug, Clone, Copy)]
pub struct GapPromptInput<'a> {
    pub resume: &'a str,
    pub job: &'a str,
    /// How many gaps to ask for.
    pub gap_count: usize,
}

impl<'a> GapPromptInput<'a> {
    pub fn new(resume: &'a str, job: &'a str) -> Self {
        Self {
            resume,
            job,
            gap_count: 3,
        }
    }
}

/// Build the recruiter-style prompt asking for specific gaps and fixes.
pub fn gap_analysis_prompt(input: &GapPromptInput<'_>) -> String {
    let resume_snippet = snippet(input.resume);
    let job_snippet = snippet(input.job);

    let format_lines: Vec<String> = (1..=input.gap_count)
        .map(|i| format!("{i}. [Gap/Weakness]: [Brief advice on how to fix it]"))
        .collect();

    format!(
        "You are an expert technical recruiter. I will give you a Resume and a Job Description.\n\
         Your task is to identify {count} specific GAPS or WEAKNESSES in the resume compared to the job description.\n\
         \n\
         Resume Content:\n\
         {resume_snippet}\n\
         \n\
         Job Description:\n\
         {job_snippet}\n\
         \n\
         Output strictly in this format:\n\
         {format}\n",
        count = input.gap_count,
        format = format_lines.join("\n"),
    )
}

/// First SNIPPET_CHARS characters, with no ellipsis marker.
fn snippet(text: &str) -> &str {
    match text.char_indices().nth(SNIPPET_CHARS) {
        Some((byte_idx, _)) => &text[..byte_idx],
        None => text,
    }
}

/// Short preview of the prompt for debug logging.
pub fn preview(prompt: &str) -> String {
    truncate_chars(prompt, 80)
}
