// Text normalization: strips extracted text down to a comparable form.
//
// Keeps ASCII letters, ASCII digits, whitespace, and the three punctuation
// marks that carry meaning in a resume header: `@` and `.` for emails, `+`
// for phone numbers. Everything else is deleted outright (not replaced by a
// space), then whitespace runs collapse to a single space.
//
// Non-ASCII letters are deleted too. Accented names and non-English resumes
// lose characters; that is the current contract.

use std::fmt;

use serde::Serialize;

/// Punctuation that survives normalization.
const KEPT_PUNCTUATION: [char; 3] = ['@', '.', '+'];

/// Text that has been through [`normalize`]. Normalizing it again is a no-op.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
#[serde(transparent)]
pub struct NormalizedText(String);

impl NormalizedText {
    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Length in characters (not bytes). Normalized text is pure ASCII, so
    /// the two agree, but callers shouldn't have to know that.
    pub fn char_count(&self) -> usize {
        self.0.chars().count()
    }
}

impl AsRef<str> for NormalizedText {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for NormalizedText {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Whitespace as a resume text source understands it: Unicode White_Space
/// plus the ASCII information separators U+001C..=U+001F, which some PDF
/// producers emit between words.
fn is_space(c: char) -> bool {
    c.is_whitespace() || ('\u{1c}'..='\u{1f}').contains(&c)
}

fn is_kept(c: char) -> bool {
    c.is_ascii_alphanumeric() || is_space(c) || KEPT_PUNCTUATION.contains(&c)
}

/// Normalize raw text: drop disallowed characters, collapse whitespace, trim.
pub fn normalize(text: &str) -> NormalizedText {
    let filtered: String = text.chars().filter(|&c| is_kept(c)).collect();
    let collapsed = filtered
        .split(is_space)
        .filter(|word| !word.is_empty())
        .collect::<Vec<_>>()
        .join(" ");
    NormalizedText(collapsed)
}
