// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Modular type scales.

use serde::Serialize;
use serde_json::json;

use crate::error::Result;
use crate::search::format::round_to;

/// Classic musical ratios.
#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub enum NamedScale {
    MinorSecond,
    MajorSecond,
    MinorThird,
    MajorThird,
    PerfectFourth,
    AugmentedFourth,
    PerfectFifth,
    Golden,
}

impl NamedScale {
    pub fn ratio(self) -> f64 {
        match self {
            NamedScale::MinorSecond => 1.067,
            NamedScale::MajorSecond => 1.125,
            NamedScale::MinorThird => 1.2,
            NamedScale::MajorThird => 1.25,
            NamedScale::PerfectFourth => 1.333,
            NamedScale::AugmentedFourth => 1.414,
            NamedScale::PerfectFifth => 1.5,
            NamedScale::Golden => 1.618,
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            NamedScale::MinorSecond => "minor-second",
            NamedScale::MajorSecond => "major-second",
            NamedScale::MinorThird => "minor-third",
            NamedScale::MajorThird => "major-third",
            NamedScale::PerfectFourth => "perfect-fourth",
            NamedScale::AugmentedFourth => "augmented-fourth",
            NamedScale::PerfectFifth => "perfect-fifth",
            NamedScale::Golden => "golden",
        }
    }
}

/// Label for a scale: the preset name, or `custom (<ratio>)`.
pub fn ratio_label(named: Option<NamedScale>, ratio: f64) -> String {
    match named {
        Some(scale) => scale.name().to_string(),
        None => format!("custom ({ratio})"),
    }
}

const STEP_NAMES: [&str; 10] = ["xs", "sm", "base", "lg", "xl", "2xl", "3xl", "4xl", "5xl", "6xl"];

/// One size in the scale.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TypeStep {
    pub name: String,
    /// Rounded to 2 decimals.
    pub px: f64,
    /// `px / 16`, rounded to 4 decimals.
    pub rem: f64,
    pub line_height: f64,
    /// Exponent applied to the ratio; `base` is 0.
    pub ratio_step: i32,
}

/// `steps` sizes starting two below the base.
///
/// Sizes are `base_px · ratio^i` for `i` in `-2 .. steps - 2`. Line height
/// tightens by 0.05 per step above the base down to 1.1; sizes below the base
/// get 1.6.
pub fn generate_scale(base_px: f64, ratio: f64, steps: usize) -> Vec<TypeStep> {
    let steps = i32::try_from(steps).unwrap_or(i32::MAX);
    (-2..steps.saturating_sub(2))
        .map(|i| {
            let size = base_px * ratio.powi(i);
            let index = (i + 2) as usize;
            let name = STEP_NAMES
                .get(index)
                .map_or_else(|| format!("step-{index}"), |n| (*n).to_string());
            let line_height = if i >= 0 {
                (1.5 - f64::from(i) * 0.05).max(1.1)
            } else {
                1.6
            };
            TypeStep {
                name,
                px: round_to(size, 2),
                rem: round_to(size / 16.0, 4),
                line_height: round_to(line_height, 2),
                ratio_step: i,
            }
        })
        .collect()
}

pub fn format_css(scale: &[TypeStep], label: &str) -> String {
    let mut lines = vec![format!("/* Type Scale: {label} */"), ":root {".to_string()];
    for step in scale {
        lines.push(format!("  --text-{}: {}rem; /* {}px */", step.name, step.rem, step.px));
    }
    lines.push(String::new());
    for step in scale {
        lines.push(format!("  --leading-{}: {};", step.name, step.line_height));
    }
    lines.push("}".to_string());
    lines.join("\n")
}

pub fn format_json(scale: &[TypeStep], label: &str) -> Result<String> {
    Ok(serde_json::to_string_pretty(&json!({ "ratio": label, "scale": scale }))?)
}

pub fn format_text(scale: &[TypeStep], label: &str) -> String {
    let mut lines = vec![
        format!("\n  Scale: {label}"),
        String::new(),
        format!("  {:<8} {:<10} {:<10} {:<12}", "Name", "px", "rem", "Line Height"),
        format!("  {} {} {} {}", "─".repeat(8), "─".repeat(10), "─".repeat(10), "─".repeat(12)),
    ];
    for step in scale {
        lines.push(format!(
            "  {:<8} {:<10} {:<10} {:<12}",
            step.name,
            step.px.to_string(),
            step.rem.to_string(),
            step.line_height.to_string()
        ));
    }
    lines.join("\n")
}
