// Unit tests for the scoring pipeline.
//
// Uses a deterministic bag-of-words embedder so the properties of the
// pipeline (bounds, symmetry, self-similarity, rounding) can be checked
// without the ONNX model. One ignored test runs against the real model.

mod common;

use common::{BagOfWordsEmbedder, UnavailableEmbedder};
use resume_match::scoring::{to_percentage, MatchScorer, MatchTier};
use resume_match::{cosine_similarity, normalize, EmbeddingError};

const JOB: &str = "Looking for a Python developer familiar with cloud deployment";
const PYTHON_RESUME: &str = "Experienced Python developer with AWS and Docker skills";
const PASTRY_RESUME: &str = "Pastry chef with 5 years experience in French cuisine";

// ============================================================
// score: properties
// ============================================================

#[test]
fn identical_inputs_score_one_hundred() {
    let scorer = MatchScorer::new(BagOfWordsEmbedder);
    for text in [PYTHON_RESUME, PASTRY_RESUME, JOB, "a"] {
        assert_eq!(scorer.score(text, text).unwrap(), 100.0, "for {text:?}");
    }
}

#[test]
fn score_is_symmetric() {
    let scorer = MatchScorer::new(BagOfWordsEmbedder);
    let ab = scorer.score(PYTHON_RESUME, JOB).unwrap();
    let ba = scorer.score(JOB, PYTHON_RESUME).unwrap();
    assert_eq!(ab, ba);
}

#[test]
fn score_stays_within_bounds() {
    let scorer = MatchScorer::new(BagOfWordsEmbedder);
    let texts = [PYTHON_RESUME, PASTRY_RESUME, JOB, "", "!!!", "zzz qqq"];
    for a in texts {
        for b in texts {
            let s = scorer.score(a, b).unwrap();
            assert!((0.0..=100.0).contains(&s), "{a:?} vs {b:?} gave {s}");
        }
    }
}

#[test]
fn score_has_at_most_two_decimals() {
    let scorer = MatchScorer::new(BagOfWordsEmbedder);
    let s = scorer.score(PYTHON_RESUME, JOB).unwrap();
    assert!(((s * 100.0).round() - s * 100.0).abs() < 1e-9, "got {s}");
}

#[test]
fn relevant_resume_outscores_unrelated_resume() {
    let scorer = MatchScorer::new(BagOfWordsEmbedder);
    let python = scorer.score(PYTHON_RESUME, JOB).unwrap();
    let pastry = scorer.score(PASTRY_RESUME, JOB).unwrap();
    assert!(
        python > pastry + 10.0,
        "python={python} should clearly beat pastry={pastry}"
    );
}

#[test]
fn score_normalizes_before_embedding() {
    let scorer = MatchScorer::new(BagOfWordsEmbedder);
    let raw = scorer.score("Python, developer!!", "python developer").unwrap();
    assert_eq!(raw, 100.0);
}

#[test]
fn empty_text_scores_zero() {
    // Zero vector on one side: defined as 0.0 similarity, not NaN.
    let scorer = MatchScorer::new(BagOfWordsEmbedder);
    assert_eq!(scorer.score("", JOB).unwrap(), 0.0);
    assert_eq!(scorer.score("!!!", "???").unwrap(), 0.0);
}

#[test]
fn embedding_failure_propagates() {
    let scorer = MatchScorer::new(UnavailableEmbedder);
    let err = scorer.score(PYTHON_RESUME, JOB).unwrap_err();
    assert!(matches!(err, EmbeddingError::Inference(_)));
}

#[test]
fn similarity_takes_normalized_text() {
    let scorer = MatchScorer::new(BagOfWordsEmbedder);
    let sim = scorer
        .similarity(&normalize(PYTHON_RESUME), &normalize(PYTHON_RESUME))
        .unwrap();
    assert!((sim - 1.0).abs() < 1e-10);
}

// ============================================================
// cosine_similarity: numerical edge cases
// ============================================================

#[test]
fn cosine_is_symmetric() {
    let a = vec![1.0, 3.0, -2.0, 0.5];
    let b = vec![2.0, -1.0, 4.0, 0.0];
    assert!((cosine_similarity(&a, &b) - cosine_similarity(&b, &a)).abs() < 1e-12);
}

#[test]
fn cosine_underflowing_magnitudes_are_zero() {
    let a = vec![1e-200, 0.0];
    let b = vec![1e-200, 0.0];
    assert_eq!(cosine_similarity(&a, &b), 0.0);
}

#[test]
fn cosine_small_but_nonzero_magnitudes_still_compare() {
    // Magnitude products near 1e-18 sit below f64::EPSILON but are real vectors
    let a = vec![1e-9, 0.0, 1e-9];
    let b = vec![1e-9, 0.0, 0.0];
    let expected = 1.0 / 2.0_f64.sqrt();
    assert!((cosine_similarity(&a, &b) - expected).abs() < 1e-12);
}

#[test]
fn cosine_partial_overlap() {
    let a = vec![1.0, 1.0, 0.0];
    let b = vec![1.0, 0.0, 0.0];
    let expected = 1.0 / 2.0_f64.sqrt();
    assert!((cosine_similarity(&a, &b) - expected).abs() < 1e-12);
}

// ============================================================
// Percentage and tiers
// ============================================================

#[test]
fn percentage_of_partial_overlap() {
    let sim = cosine_similarity(&[1.0, 1.0, 0.0], &[1.0, 0.0, 0.0]);
    assert_eq!(to_percentage(sim), 70.71);
    assert_eq!(MatchTier::from_percentage(70.71), MatchTier::Good);
}

#[test]
fn tier_labels() {
    assert_eq!(MatchTier::Great.label(), "Great Match!");
    assert_eq!(MatchTier::Good.label(), "Good, but needs work.");
    assert_eq!(MatchTier::Low.label(), "Low match.");
}

// ============================================================
// Real model (run with `--ignored` after `resume-match download-model`)
// ============================================================

#[test]
#[ignore = "requires the downloaded all-MiniLM-L6-v2 model"]
fn real_model_ranks_python_resume_above_pastry_chef() {
    use resume_match::embedding::download::default_model_dir;
    use resume_match::embedding::SentenceEmbedder;

    let embedder = SentenceEmbedder::load(&default_model_dir()).unwrap();
    let scorer = MatchScorer::new(embedder);

    let python = scorer.score(PYTHON_RESUME, JOB).unwrap();
    let pastry = scorer.score(PASTRY_RESUME, JOB).unwrap();
    assert!(python > pastry, "python={python} pastry={pastry}");
    assert_eq!(scorer.score(JOB, JOB).unwrap(), 100.0);
}
