//! BM25 ranking behavior through the public `score` entry point.

use design_intel::{score, tokenize, Collection};

use crate::common::collection_from_texts;

#[test]
fn test_more_occurrences_rank_higher() {
    let collection = collection_from_texts(&[
        "dashboard layout",
        "dashboard dashboard layout",
        "landing page layout",
    ]);
    let ranked = score(&tokenize("dashboard"), &collection);

    assert_eq!(ranked[0].document.get("text"), Some("dashboard dashboard layout"));
    assert_eq!(ranked[1].document.get("text"), Some("dashboard layout"));
    assert_eq!(ranked[2].score, 0.0);
}

#[test]
fn test_shorter_document_wins_at_equal_tf() {
    let collection = collection_from_texts(&[
        "glass effect with many other unrelated words around it",
        "glass effect",
    ]);
    let ranked = score(&tokenize("glass"), &collection);

    assert_eq!(ranked[0].document.get("text"), Some("glass effect"));
    assert!(ranked[0].score > ranked[1].score);
}

#[test]
fn test_rare_terms_outweigh_common_ones() {
    let collection = collection_from_texts(&[
        "modern clean",
        "modern bold",
        "modern fintech",
        "modern calm",
    ]);
    let ranked = score(&tokenize("modern fintech"), &collection);

    assert_eq!(ranked[0].document.get("text"), Some("modern fintech"));
}

#[test]
fn test_every_document_is_scored() {
    let collection = collection_from_texts(&["alpha", "beta", "gamma"]);
    let ranked = score(&tokenize("alpha"), &collection);
    assert_eq!(ranked.len(), 3);
}

#[test]
fn test_unknown_terms_score_zero() {
    let collection = collection_from_texts(&["alpha", "beta"]);
    let ranked = score(&tokenize("zeta omega"), &collection);
    assert!(ranked.iter().all(|hit| hit.score == 0.0));
}

#[test]
fn test_ties_keep_collection_order() {
    let collection = Collection::from_rows(vec![
        vec![("Name", "first"), ("Keywords", "dark")],
        vec![("Name", "second"), ("Keywords", "dark")],
        vec![("Name", "third"), ("Keywords", "dark")],
    ]);
    let ranked = score(&tokenize("dark"), &collection);
    let names: Vec<_> = ranked.iter().map(|h| h.document.get("Name")).collect();
    assert_eq!(names, vec![Some("first"), Some("second"), Some("third")]);
}

#[test]
fn test_case_and_punctuation_are_ignored() {
    let collection = collection_from_texts(&["Dark-Mode, OLED!", "light theme"]);
    let ranked = score(&tokenize("DARK oled"), &collection);
    assert_eq!(ranked[0].document.get("text"), Some("Dark-Mode, OLED!"));
    assert!(ranked[0].score > 0.0);
}

#[test]
fn test_empty_collection() {
    assert!(score(&tokenize("anything"), &Collection::empty()).is_empty());
}
