//! Multi-domain search: section order, budgets and filtering.

use design_intel::{Domain, SearchOptions, STACK_KEY};

use crate::common::{temp_searcher, write_stack};

#[test]
fn test_sections_follow_domain_order() {
    let (_dir, searcher) = temp_searcher(&[
        (Domain::Web, &["focus outline dark"]),
        (Domain::Style, &["dark mode", "light mode"]),
        (Domain::Ux, &["dark patterns"]),
    ]);
    let response = searcher.search("dark", &SearchOptions::new());

    let keys: Vec<_> = response.keys().collect();
    assert_eq!(keys, vec!["style", "ux", "web"]);
}

#[test]
fn test_max_results_per_section() {
    let (_dir, searcher) = temp_searcher(&[(
        Domain::Color,
        &["blue one", "blue two", "blue three", "blue four", "red"],
    )]);
    let response = searcher.search("blue", &SearchOptions::new().max_results(2));
    assert_eq!(response.get("color").map(<[_]>::len), Some(2));
}

#[test]
fn test_only_positive_scores_are_returned() {
    let (_dir, searcher) = temp_searcher(&[(Domain::Chart, &["line chart", "pie", "bar", "donut"])]);
    let response = searcher.search("line", &SearchOptions::new().max_results(10));

    let hits = response.get("chart").unwrap();
    assert_eq!(hits.len(), 1);
    assert!(hits.iter().all(|h| h.score > 0.0));
}

#[test]
fn test_no_matches_gives_empty_response() {
    let (_dir, searcher) = temp_searcher(&[(Domain::Style, &["minimal"])]);
    let response = searcher.search("baroque", &SearchOptions::new());
    assert!(response.is_empty());
    assert_eq!(response.total_hits(), 0);
}

#[test]
fn test_empty_query_gives_empty_response() {
    let (_dir, searcher) = temp_searcher(&[(Domain::Style, &["minimal"])]);
    assert!(searcher.search("", &SearchOptions::new()).is_empty());
    assert!(searcher.search("  ,;  ", &SearchOptions::new()).is_empty());
}

#[test]
fn test_domain_filter() {
    let (_dir, searcher) = temp_searcher(&[
        (Domain::Style, &["dark mode"]),
        (Domain::Color, &["dark palette"]),
    ]);
    let response = searcher.search("dark", &SearchOptions::new().domain("color"));
    assert_eq!(response.keys().collect::<Vec<_>>(), vec!["color"]);
}

#[test]
fn test_unknown_domain_searches_everything() {
    let (_dir, searcher) = temp_searcher(&[
        (Domain::Style, &["dark mode"]),
        (Domain::Color, &["dark palette"]),
    ]);
    let response = searcher.search("dark", &SearchOptions::new().domain("colour"));
    assert_eq!(response.keys().collect::<Vec<_>>(), vec!["style", "color"]);
}

#[test]
fn test_stack_section_comes_first() {
    let (dir, searcher) = temp_searcher(&[(Domain::Style, &["server rendering style"])]);
    write_stack(dir.path(), "nextjs", &["server components", "client hooks"]);

    let response = searcher.search("server", &SearchOptions::new().stack("nextjs"));
    assert_eq!(response.keys().collect::<Vec<_>>(), vec![STACK_KEY, "style"]);
    assert_eq!(response.get(STACK_KEY).map(<[_]>::len), Some(1));
}

#[test]
fn test_stack_name_is_case_insensitive() {
    let (dir, searcher) = temp_searcher(&[]);
    write_stack(dir.path(), "nextjs", &["image optimization"]);

    let hits = searcher.search_stack("image", "NextJS", 3);
    assert_eq!(hits.len(), 1);
}

#[test]
fn test_unknown_stack_has_no_section() {
    let (_dir, searcher) = temp_searcher(&[(Domain::Style, &["svelte style"])]);
    let response = searcher.search("svelte", &SearchOptions::new().stack("svelte"));
    assert!(!response.contains(STACK_KEY));
    assert!(response.contains("style"));
}

#[test]
fn test_sequential_matches_default() {
    let (_dir, searcher) = temp_searcher(&[
        (Domain::Style, &["glass dark", "flat light", "dark neon"]),
        (Domain::Color, &["dark navy", "pastel"]),
        (Domain::Typography, &["dark serif"]),
        (Domain::Landing, &["hero dark"]),
    ]);
    let parallel = searcher.search("dark neon", &SearchOptions::new());
    let sequential = searcher.search("dark neon", &SearchOptions::new().sequential());

    assert_eq!(
        serde_json::to_value(&parallel).unwrap(),
        serde_json::to_value(&sequential).unwrap()
    );
}

#[test]
fn test_stack_name_cannot_leave_stacks_dir() {
    let (dir, searcher) = temp_searcher(&[
        (Domain::Style, &["glassmorphism frosted panels"]),
        (Domain::Color, &["glassmorphism tint"]),
    ]);
    write_stack(dir.path(), "react", &["glassmorphism card component"]);

    for name in ["../styles", "../stacks/react", "/etc/hosts", "..", "react/../../styles"] {
        let options = SearchOptions::new().stack(name).domain("color");
        let response = searcher.search("glassmorphism", &options);
        assert!(!response.contains(STACK_KEY), "{name:?} escaped the stack namespace");
        assert_eq!(response.keys().collect::<Vec<_>>(), vec!["color"]);
        assert!(searcher.search_stack("glassmorphism", name, 3).is_empty());
    }

    // rejected names are not cached as empty entries
    assert_eq!(searcher.cache().len(), 1);
}
