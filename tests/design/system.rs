//! Design-system generation over the bundled sample tables.

use design_intel::design::system::{format_css, format_json, format_text};
use design_intel::design::{Rgb, SystemGenerator};
use design_intel::{Domain, SystemConfig, STACK_KEY};

use crate::common::{fixture_searcher, temp_searcher};

#[test]
fn test_fintech_system_uses_fintech_primary() {
    let searcher = fixture_searcher();
    let system = SystemGenerator::new(&searcher)
        .generate("fintech dashboard", Some("nextjs"))
        .unwrap();

    assert_eq!(system.style.primary_color, "#0F766E");
    assert_eq!(system.palette[0].hex, "#0F766E");
    assert_eq!(system.palette.len(), 5);
    assert_eq!(system.type_scale.len(), 8);
    assert!(!system.reasoning.is_empty());
    assert!(!system.ux_guidelines.is_empty());
    assert_eq!(system.meta.stack.as_deref(), Some("nextjs"));
    assert_eq!(system.meta.version, env!("CARGO_PKG_VERSION"));
}

#[test]
fn test_search_sources_list_budgets_then_stack() {
    let searcher = fixture_searcher();
    let system = SystemGenerator::new(&searcher)
        .generate("fintech dashboard", Some("nextjs"))
        .unwrap();

    let sections: Vec<&str> = system.search_sources.iter().map(|(s, _)| s.as_str()).collect();
    assert_eq!(sections.last(), Some(&STACK_KEY));
    assert_eq!(sections.first(), Some(&"product"));

    let (_, product) = &system.search_sources[0];
    assert_eq!(product.len(), 1);
    for (_, scores) in &system.search_sources {
        for source in scores {
            assert!(source.score > 0.0);
            assert_eq!(source.score, (source.score * 1000.0).round() / 1000.0);
        }
    }
}

#[test]
fn test_no_matches_falls_back_to_defaults() {
    let (_dir, searcher) = temp_searcher(&[(Domain::Style, &["minimal"])]);
    let system = SystemGenerator::new(&searcher).generate("baroque", None).unwrap();

    let defaults = SystemConfig::default();
    assert_eq!(system.style.primary_color, defaults.primary_color.default);
    assert_eq!(system.style.font_family, defaults.font.default);
    assert_eq!(system.style.name, defaults.style.default);
    assert!(system.search_sources.is_empty());
    assert!(system.reasoning.is_empty());
}

#[test]
fn test_custom_config_changes_defaults() {
    let (_dir, searcher) = temp_searcher(&[]);
    let config = SystemConfig::from_json(
        r##"{"primary_color": {"domains": ["color"], "fields": ["Primary"], "default": "#FF0000", "require_prefix": "#"}}"##,
    )
    .unwrap();
    let system = SystemGenerator::with_config(&searcher, config)
        .generate("anything", None)
        .unwrap();
    assert_eq!(system.style.primary_color, "#FF0000");
}

#[test]
fn test_json_shape() {
    let searcher = fixture_searcher();
    let system = SystemGenerator::new(&searcher)
        .generate("saas landing", None)
        .unwrap();
    let json: serde_json::Value = serde_json::from_str(&format_json(&system).unwrap()).unwrap();

    for key in [
        "meta",
        "style",
        "tokens",
        "palette",
        "type_scale",
        "reasoning",
        "ux_guidelines",
        "search_sources",
    ] {
        assert!(json.get(key).is_some(), "missing {key}");
    }
    assert!(json["meta"]["stack"].is_null());
    let primary = json["style"]["primary_color"].as_str().unwrap();
    assert!(Rgb::from_hex(primary).is_ok());
}

#[test]
fn test_css_and_text_renderings() {
    let searcher = fixture_searcher();
    let system = SystemGenerator::new(&searcher).generate("gaming", None).unwrap();

    let css = format_css(&system);
    assert!(css.contains("--color-primary-500"));
    let text = format_text(&system);
    assert!(text.contains(&format!("Primary: {}", system.style.primary_color)));
    assert!(text.contains("Stack: any"));
}
