// Shared test helpers: a deterministic stand-in for the ONNX embedder and a
// small PDF builder.

#![allow(dead_code)]

use lopdf::content::{Content, Operation};
use lopdf::{dictionary, Document, Object, Stream};

use resume_match::embedding::{Embedder, EMBEDDING_DIM};
use resume_match::EmbeddingError;

/// Bag-of-words embedder: each lowercase word adds 1.0 to a hashed bucket.
/// Texts that share words get high cosine similarity, like a real model
/// would give for overlapping vocabulary.
pub struct BagOfWordsEmbedder;

impl Embedder for BagOfWordsEmbedder {
    fn embed(&self, text: &str) -> Result<Vec<f64>, EmbeddingError> {
        let mut v = vec![0.0; EMBEDDING_DIM];
        for word in text.split_whitespace() {
            v[bucket(&word.to_lowercase())] += 1.0;
        }
        Ok(v)
    }
}

/// Embedder whose backend is always down.
pub struct UnavailableEmbedder;

impl Embedder for UnavailableEmbedder {
    fn embed(&self, _text: &str) -> Result<Vec<f64>, EmbeddingError> {
        Err(EmbeddingError::Inference("backend unavailable".to_string()))
    }
}

/// FNV-1a, reduced to an embedding index.
fn bucket(word: &str) -> usize {
    let mut hash: u64 = 0xcbf2_9ce4_8422_2325;
    for byte in word.bytes() {
        hash ^= byte as u64;
        hash = hash.wrapping_mul(0x0100_0000_01b3);
    }
    (hash % EMBEDDING_DIM as u64) as usize
}

/// Build a PDF with one page per entry. `Some(text)` draws the text,
/// `None` leaves the page blank.
pub fn build_pdf(pages: &[Option<&str>]) -> Vec<u8> {
    let pages: Vec<Vec<Operation>> = pages
        .iter()
        .map(|page| page.map(text_page).unwrap_or_default())
        .collect();
    build_pdf_from_operations(&pages)
}

/// A content stream that draws `text` in font `F1`.
pub fn text_page(text: &str) -> Vec<Operation> {
    vec![
        Operation::new("BT", vec![]),
        Operation::new("Tf", vec!["F1".into(), 24.into()]),
        Operation::new("Td", vec![72.into(), 700.into()]),
        Operation::new("Tj", vec![Object::string_literal(text)]),
        Operation::new("ET", vec![]),
    ]
}

/// A content stream whose font selection names no font, so text on the
/// page cannot be decoded.
pub fn undecodable_page() -> Vec<Operation> {
    vec![
        Operation::new("BT", vec![]),
        Operation::new("Tf", vec![24.into(), 24.into()]),
        Operation::new("Tj", vec![Object::string_literal("lost")]),
        Operation::new("ET", vec![]),
    ]
}

/// Build a PDF with one page per content stream, all sharing font `F1`.
pub fn build_pdf_from_operations(pages: &[Vec<Operation>]) -> Vec<u8> {
    let mut doc = Document::with_version("1.5");
    let pages_id = doc.new_object_id();

    let font_id = doc.add_object(dictionary! {
        "Type" => "Font",
        "Subtype" => "Type1",
        "BaseFont" => "Courier",
    });
    let resources_id = doc.add_object(dictionary! {
        "Font" => dictionary! {
            "F1" => font_id,
        },
    });

    let mut kids: Vec<Object> = Vec::new();
    for operations in pages {
        let content = Content {
            operations: operations.clone(),
        };
        let content_id = doc.add_object(Stream::new(
            dictionary! {},
            content.encode().expect("encode content stream"),
        ));
        let page_id = doc.add_object(dictionary! {
            "Type" => "Page",
            "Parent" => pages_id,
            "Contents" => content_id,
            "Resources" => resources_id,
            "MediaBox" => vec![0.into(), 0.into(), 612.into(), 792.into()],
        });
        kids.push(page_id.into());
    }

    let count = kids.len() as i64;
    doc.objects.insert(
        pages_id,
        Object::Dictionary(dictionary! {
            "Type" => "Pages",
            "Kids" => kids,
            "Count" => count,
        }),
    );

    let catalog_id = doc.add_object(dictionary! {
        "Type" => "Catalog",
        "Pages" => pages_id,
    });
    doc.trailer.set("Root", catalog_id);

    let mut buf = Vec::new();
    doc.save_to(&mut buf).expect("serialize pdf");
    buf
}
