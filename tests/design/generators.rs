//! Generators working together: palettes, tokens and contrast.

use design_intel::design::{
    check_contrast, generate_palette, generate_scale, generate_tokens, Harmony, Preset, Rgb,
    WcagLevel,
};

#[test]
fn test_every_preset_generates_a_full_token_set() {
    use clap::ValueEnum;

    for preset in Preset::value_variants() {
        let tokens = generate_tokens(&preset.options()).unwrap();
        assert_eq!(tokens.len(), 83, "{preset:?}");
        assert!(tokens.get("--font-family-body").is_some_and(|v| v.contains("system-ui")));
    }
}

#[test]
fn test_palette_colors_are_valid_hex() {
    for harmony in Harmony::ALL {
        for color in generate_palette("#7C3AED", harmony, 6).unwrap() {
            assert!(Rgb::from_hex(&color.hex).is_ok(), "{}", color.hex);
            assert_eq!(color.hex.len(), 7);
        }
    }
}

#[test]
fn test_black_on_white_passes_aaa() {
    let report = check_contrast("#000000", "#FFFFFF", WcagLevel::AAA).unwrap();
    assert_eq!(report.wcag_ratio, 21.0);
    assert!(report.pass_normal);
    assert!(report.pass_large);
}

#[test]
fn test_invalid_color_is_rejected() {
    assert!(check_contrast("#GGGGGG", "#FFFFFF", WcagLevel::AA).is_err());
    assert!(generate_palette("blue", Harmony::Triadic, 5).is_err());
}

#[test]
fn test_type_scale_grows_by_ratio() {
    let scale = generate_scale(16.0, 1.5, 6);
    for pair in scale.windows(2) {
        assert!(pair[1].px > pair[0].px);
    }
}
