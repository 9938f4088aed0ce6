// Text normalizer: PDF extraction and canonicalization.

pub mod extract;
pub mod normalize;

pub use extract::{extract_text, extract_text_from_file};
pub use normalize::{normalize, NormalizedText};
