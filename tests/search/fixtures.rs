//! Searches against the bundled sample tables in `data/`.

use design_intel::search::format::{format_json, format_text};
use design_intel::{SearchOptions, STACK_KEY};

use crate::common::fixture_searcher;

#[test]
fn test_fintech_query_hits_fintech_rows() {
    let searcher = fixture_searcher();
    let response = searcher.search("fintech dashboard", &SearchOptions::new());

    let color = response.get("color").expect("color section");
    assert_eq!(color[0].document.get("Product Type"), Some("Fintech"));

    let product = response.get("product").expect("product section");
    assert_eq!(product[0].document.get("Product Type"), Some("Fintech"));
}

#[test]
fn test_stack_fixture() {
    let searcher = fixture_searcher();
    let response = searcher.search(
        "image optimization",
        &SearchOptions::new().stack("nextjs").domain("web"),
    );
    let stack = response.get(STACK_KEY).expect("stack section");
    assert_eq!(stack[0].document.get("Category"), Some("Images"));
}

#[test]
fn test_text_and_json_render_every_section() {
    let searcher = fixture_searcher();
    let response = searcher.search("dark", &SearchOptions::new());
    assert!(!response.is_empty());

    let text = format_text(&response);
    let json: serde_json::Value = serde_json::from_str(&format_json(&response).unwrap()).unwrap();
    for key in response.keys() {
        assert!(text.contains(&format!("{} RESULTS", key.to_uppercase())));
        assert!(json.get(key).is_some());
    }
}
