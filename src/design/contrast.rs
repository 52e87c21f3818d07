// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! WCAG 2 contrast ratio and a simplified APCA lightness contrast.
//!
//! WCAG: relative luminance with the sRGB transfer curve, then
//! `(L_light + 0.05) / (L_dark + 0.05)`, from 1 to 21.
//!
//! APCA here is the compact form: plain `c^2.4` linearization, fixed
//! exponents per polarity, no soft clamp. Positive for dark text on a light
//! background, negative for light on dark.

use serde::Serialize;

use super::color::Rgb;
use crate::error::Result;
use crate::search::format::round_to;

const APCA_SCALE: f64 = 1.14;
const APCA_OFFSET: f64 = 0.027;

/// WCAG 2 relative luminance, 0 (black) to 1 (white).
pub fn relative_luminance(color: Rgb) -> f64 {
    fn linearize(c: f64) -> f64 {
        if c <= 0.04045 {
            c / 12.92
        } else {
            ((c + 0.055) / 1.055).powf(2.4)
        }
    }
    let (r, g, b) = color.unit();
    0.2126 * linearize(r) + 0.7152 * linearize(g) + 0.0722 * linearize(b)
}

/// WCAG contrast ratio. Symmetric in its arguments.
pub fn wcag_ratio(fg: Rgb, bg: Rgb) -> f64 {
    let a = relative_luminance(fg);
    let b = relative_luminance(bg);
    (a.max(b) + 0.05) / (a.min(b) + 0.05)
}

/// Simplified APCA `Lc` for `text` on `background`.
pub fn apca(text: Rgb, background: Rgb) -> f64 {
    fn screen_y(color: Rgb) -> f64 {
        let (r, g, b) = color.unit();
        0.212_672_9 * r.powf(2.4) + 0.715_152_2 * g.powf(2.4) + 0.072_175 * b.powf(2.4)
    }
    let y_text = screen_y(text);
    let y_bg = screen_y(background);

    if y_bg > y_text {
        let sapc = (y_bg.powf(0.56) - y_text.powf(0.57)) * APCA_SCALE;
        if sapc < APCA_OFFSET {
            0.0
        } else {
            (sapc - APCA_OFFSET) * 100.0
        }
    } else {
        let sapc = (y_bg.powf(0.65) - y_text.powf(0.62)) * APCA_SCALE;
        if sapc.abs() < APCA_OFFSET {
            0.0
        } else {
            (sapc + APCA_OFFSET) * 100.0
        }
    }
}

/// WCAG conformance level.
#[allow(clippy::upper_case_acronyms)]
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, clap::ValueEnum)]
pub enum WcagLevel {
    #[default]
    #[value(name = "AA")]
    AA,
    #[value(name = "AAA")]
    AAA,
}

impl WcagLevel {
    /// Minimum ratio for normal-size text.
    pub fn normal_threshold(self) -> f64 {
        match self {
            WcagLevel::AA => 4.5,
            WcagLevel::AAA => 7.0,
        }
    }

    /// Minimum ratio for large text (18pt, or 14pt bold).
    pub fn large_threshold(self) -> f64 {
        match self {
            WcagLevel::AA => 3.0,
            WcagLevel::AAA => 4.5,
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            WcagLevel::AA => "AA",
            WcagLevel::AAA => "AAA",
        }
    }
}

/// Result of checking one color pair.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ContrastReport {
    /// Inputs as given.
    pub foreground: String,
    pub background: String,
    /// Rounded to 2 decimals.
    pub wcag_ratio: f64,
    /// Rounded to 1 decimal.
    pub apca_score: f64,
    pub pass_normal: bool,
    pub pass_large: bool,
    pub level: WcagLevel,
    pub recommendation: String,
}

/// Check `fg` on `bg`. Pass/fail uses the unrounded ratio.
pub fn check(fg: &str, bg: &str, level: WcagLevel) -> Result<ContrastReport> {
    let fg_rgb = Rgb::from_hex(fg)?;
    let bg_rgb = Rgb::from_hex(bg)?;
    let ratio = wcag_ratio(fg_rgb, bg_rgb);
    let lc = apca(fg_rgb, bg_rgb);

    Ok(ContrastReport {
        foreground: fg.to_string(),
        background: bg.to_string(),
        wcag_ratio: round_to(ratio, 2),
        apca_score: round_to(lc, 1),
        pass_normal: ratio >= level.normal_threshold(),
        pass_large: ratio >= level.large_threshold(),
        level,
        recommendation: recommend(ratio).to_string(),
    })
}

/// Advice for a ratio, by band.
pub fn recommend(ratio: f64) -> &'static str {
    if ratio >= 7.0 {
        "Excellent contrast: passes AAA for all text sizes"
    } else if ratio >= 4.5 {
        "Good contrast: passes AA for normal text, AAA for large text"
    } else if ratio >= 3.0 {
        "Moderate: passes AA for large text only, consider darkening or lightening"
    } else {
        "Poor contrast: fails all WCAG levels, colors must be adjusted"
    }
}

pub fn format_json(report: &ContrastReport) -> Result<String> {
    Ok(serde_json::to_string_pretty(report)?)
}

const BOX_INNER: usize = 54;
const LABEL_WIDTH: usize = 14;

/// Plain double-line box, as printed when stdout is not a terminal.
pub fn format_text(report: &ContrastReport) -> String {
    let pass = |ok: bool| if ok { "PASS" } else { "FAIL" };
    let rule = |left: char, right: char| format!("{left}{}{right}", "═".repeat(BOX_INNER));
    let line = |content: &str| {
        let pad = BOX_INNER.saturating_sub(content.chars().count() + 2);
        format!("║  {content}{}║", " ".repeat(pad))
    };
    let field = |label: &str, value: &str| line(&format!("{label:<width$}{value}", width = LABEL_WIDTH));

    let mut out = vec![
        String::new(),
        rule('╔', '╗'),
        line("CONTRAST CHECK RESULTS"),
        rule('╠', '╣'),
        field("Foreground:", &report.foreground),
        field("Background:", &report.background),
        rule('╠', '╣'),
        field("WCAG Ratio:", &format!("{:.2}", report.wcag_ratio)),
        field("APCA Score:", &format!("{:.1}", report.apca_score)),
        field("Level:", report.level.name()),
        rule('╠', '╣'),
        field("Normal Text:", pass(report.pass_normal)),
        field("Large Text:", pass(report.pass_large)),
        rule('╠', '╣'),
    ];
    for chunk in wrap(&report.recommendation, BOX_INNER - 4) {
        out.push(line(&chunk));
    }
    out.push(rule('╚', '╝'));
    out.join("\n")
}

/// Greedy word wrap to `width` characters.
pub(crate) fn wrap(text: &str, width: usize) -> Vec<String> {
    let mut lines = Vec::new();
    let mut current = String::new();
    for word in text.split_whitespace() {
        if !current.is_empty() && current.chars().count() + 1 + word.chars().count() > width {
            lines.push(std::mem::take(&mut current));
        }
        if !current.is_empty() {
            current.push(' ');
        }
        current.push_str(word);
    }
    if !current.is_empty() {
        lines.push(current);
    }
    lines
}
