// PDF text extraction using lopdf.
//
// Pages are visited in page-number order. Each page that yields text
// contributes that text plus a trailing newline; blank pages contribute
// nothing. A document that fails to parse, or any page whose content
// stream cannot be decoded, is an error.

use std::fmt::Display;
use std::path::Path;

use lopdf::Document;
use tracing::{debug, warn};

use crate::error::ExtractionError;

/// Extract the text of every page of a PDF, in page order.
pub fn extract_text(document: &[u8]) -> Result<String, ExtractionError> {
    let doc =
        Document::load_mem(document).map_err(|e| ExtractionError::Malformed(e.to_string()))?;

    // get_pages() is a BTreeMap keyed by page number, so iteration is in order.
    let pages = doc.get_pages();
    let page_texts = collect_pages(
        pages
            .keys()
            .map(|&page_num| (page_num, doc.extract_text(&[page_num]))),
    )?;

    let text = join_pages(page_texts);

    debug!(
        pages = pages.len(),
        chars = text.len(),
        "Extracted PDF text"
    );

    Ok(text)
}

/// Read a PDF from disk and extract its text.
pub fn extract_text_from_file(path: &Path) -> Result<String, ExtractionError> {
    let bytes = std::fs::read(path).map_err(|source| ExtractionError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    extract_text(&bytes)
}

/// Gather decoded page text, failing on the first page that could not be decoded.
pub fn collect_pages<I, E>(pages: I) -> Result<Vec<String>, ExtractionError>
where
    I: IntoIterator<Item = (u32, Result<String, E>)>,
    E: Display,
{
    pages
        .into_iter()
        .map(|(page, decoded)| {
            decoded.map_err(|e| {
                warn!(page, error = %e, "Could not decode page text");
                ExtractionError::PageDecode {
                    page,
                    message: e.to_string(),
                }
            })
        })
        .collect()
}

/// Concatenate per-page text, one newline after each non-empty page.
pub fn join_pages<I>(pages: I) -> String
where
    I: IntoIterator<Item = String>,
{
    let mut text = String::new();
    for page_text in pages {
        if !page_text.is_empty() {
            text.push_str(&page_text);
            text.push('\n');
        }
    }
    text
}
