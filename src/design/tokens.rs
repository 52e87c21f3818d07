// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Design tokens as CSS custom properties.
//!
//! A token set is generated in a fixed category order: primary color scale,
//! neutral color scale, spacing, typography, radius, shadow, animation. The
//! order is part of the output contract, so [`TokenSet`] keeps insertion order
//! rather than sorting.

use serde::ser::{Serialize, SerializeMap, Serializer};

use super::color::Rgb;
use crate::error::Result;

/// Ordered `--name: value` pairs.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TokenSet {
    tokens: Vec<(String, String)>,
}

impl TokenSet {
    pub fn new() -> Self {
        TokenSet::default()
    }

    /// Append a token. Later duplicates replace the earlier value in place.
    pub fn insert(&mut self, name: impl Into<String>, value: impl Into<String>) {
        let name = name.into();
        let value = value.into();
        match self.tokens.iter_mut().find(|(n, _)| *n == name) {
            Some((_, existing)) => *existing = value,
            None => self.tokens.push((name, value)),
        }
    }

    pub fn extend(&mut self, other: TokenSet) {
        for (name, value) in other.tokens {
            self.insert(name, value);
        }
    }

    pub fn get(&self, name: &str) -> Option<&str> {
        self.tokens
            .iter()
            .find(|(n, _)| n == name)
            .map(|(_, v)| v.as_str())
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> + '_ {
        self.tokens.iter().map(|(n, v)| (n.as_str(), v.as_str()))
    }

    pub fn len(&self) -> usize {
        self.tokens.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tokens.is_empty()
    }
}

impl<N: Into<String>, V: Into<String>> FromIterator<(N, V)> for TokenSet {
    fn from_iter<I: IntoIterator<Item = (N, V)>>(iter: I) -> Self {
        let mut set = TokenSet::new();
        for (name, value) in iter {
            set.insert(name, value);
        }
        set
    }
}

impl Serialize for TokenSet {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.tokens.len()))?;
        for (name, value) in &self.tokens {
            map.serialize_entry(name, value)?;
        }
        map.end()
    }
}

/// Inputs to [`generate_all`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TokenOptions {
    pub primary: String,
    pub neutral: String,
    pub radius: u32,
    pub font: String,
}

impl Default for TokenOptions {
    fn default() -> Self {
        TokenOptions {
            primary: "#2563EB".to_string(),
            neutral: "#64748B".to_string(),
            radius: 12,
            font: "Inter".to_string(),
        }
    }
}

/// Industry starting points for [`TokenOptions`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub enum Preset {
    Fintech,
    Healthcare,
    Ecommerce,
    Saas,
    Education,
    Gaming,
    Luxury,
    Startup,
}

impl Preset {
    pub fn options(self) -> TokenOptions {
        let (primary, neutral, radius, font) = match self {
            Preset::Fintech => ("#2563EB", "#64748B", 8, "Inter"),
            Preset::Healthcare => ("#059669", "#6B7280", 12, "Source Sans Pro"),
            Preset::Ecommerce => ("#DC2626", "#78716C", 8, "Poppins"),
            Preset::Saas => ("#7C3AED", "#6B7280", 12, "Inter"),
            Preset::Education => ("#2563EB", "#9CA3AF", 16, "Nunito"),
            Preset::Gaming => ("#EF4444", "#374151", 4, "Orbitron"),
            Preset::Luxury => ("#1E293B", "#94A3B8", 0, "Playfair Display"),
            Preset::Startup => ("#8B5CF6", "#6B7280", 12, "DM Sans"),
        };
        TokenOptions {
            primary: primary.to_string(),
            neutral: neutral.to_string(),
            radius,
            font: font.to_string(),
        }
    }
}

/// Scale step → lightness percent.
const LIGHTNESS_STEPS: [(u32, u32); 11] = [
    (50, 97),
    (100, 94),
    (200, 86),
    (300, 77),
    (400, 66),
    (500, 50),
    (600, 41),
    (700, 35),
    (800, 27),
    (900, 20),
    (950, 12),
];

/// Eleven-step scale `--color-<name>-<step>` at the hue and saturation of
/// `hex`, both rounded to integers.
pub fn color_scale(hex: &str, name: &str) -> Result<TokenSet> {
    let hsl = Rgb::from_hex(hex)?.to_hsl();
    let (h, s) = (hsl.h.round(), hsl.s.round());
    Ok(LIGHTNESS_STEPS
        .iter()
        .map(|(step, l)| (format!("--color-{name}-{step}"), format!("hsl({h}, {s}%, {l}%)")))
        .collect())
}

const SPACING_BASE: f64 = 4.0;

/// 4px-based spacing scale, plus `0` and `px`.
pub fn spacing() -> TokenSet {
    let mut set = TokenSet::new();
    set.insert("--spacing-0", "0px");
    set.insert("--spacing-px", "1px");
    for step in [
        "0.5", "1", "1.5", "2", "2.5", "3", "4", "5", "6", "8", "10", "12", "16", "20", "24", "32",
        "40", "48", "64",
    ] {
        let multiplier: f64 = step.parse().unwrap_or(0.0);
        set.insert(format!("--spacing-{step}"), px(SPACING_BASE * multiplier));
    }
    set
}

fn px(value: f64) -> String {
    if value.fract() == 0.0 {
        format!("{}px", value as i64)
    } else {
        format!("{value}px")
    }
}

pub fn typography(font: &str) -> TokenSet {
    let family = format!("'{font}', system-ui, sans-serif");
    let mut set = TokenSet::new();
    set.insert("--font-family-heading", family.clone());
    set.insert("--font-family-body", family);
    set.insert("--font-family-mono", "'JetBrains Mono', 'Fira Code', monospace");
    for (name, size) in [
        ("xs", "0.75rem"),
        ("sm", "0.875rem"),
        ("base", "1rem"),
        ("lg", "1.125rem"),
        ("xl", "1.25rem"),
        ("2xl", "1.5rem"),
        ("3xl", "1.875rem"),
        ("4xl", "2.25rem"),
        ("5xl", "3rem"),
        ("6xl", "3.75rem"),
    ] {
        set.insert(format!("--font-size-{name}"), size);
    }
    set.insert("--line-height-tight", "1.25");
    set.insert("--line-height-normal", "1.5");
    set.insert("--line-height-relaxed", "1.75");
    set.insert("--font-weight-normal", "400");
    set.insert("--font-weight-medium", "500");
    set.insert("--font-weight-semibold", "600");
    set.insert("--font-weight-bold", "700");
    set
}

pub fn radius(base: u32) -> TokenSet {
    [
        ("--radius-none", "0px".to_string()),
        ("--radius-sm", format!("{}px", base.saturating_sub(4).max(2))),
        ("--radius-md", format!("{base}px")),
        ("--radius-lg", format!("{}px", base + 4)),
        ("--radius-xl", format!("{}px", base + 8)),
        ("--radius-2xl", format!("{}px", base + 16)),
        ("--radius-full", "9999px".to_string()),
    ]
    .into_iter()
    .collect()
}

pub fn shadow() -> TokenSet {
    [
        ("--shadow-xs", "0 1px 2px 0 rgb(0 0 0 / 0.05)"),
        ("--shadow-sm", "0 1px 3px 0 rgb(0 0 0 / 0.1), 0 1px 2px -1px rgb(0 0 0 / 0.1)"),
        ("--shadow-md", "0 4px 6px -1px rgb(0 0 0 / 0.1), 0 2px 4px -2px rgb(0 0 0 / 0.1)"),
        ("--shadow-lg", "0 10px 15px -3px rgb(0 0 0 / 0.1), 0 4px 6px -4px rgb(0 0 0 / 0.1)"),
        ("--shadow-xl", "0 20px 25px -5px rgb(0 0 0 / 0.1), 0 8px 10px -6px rgb(0 0 0 / 0.1)"),
        ("--shadow-2xl", "0 25px 50px -12px rgb(0 0 0 / 0.25)"),
    ]
    .into_iter()
    .collect()
}

pub fn animation() -> TokenSet {
    [
        ("--duration-fast", "150ms"),
        ("--duration-normal", "300ms"),
        ("--duration-slow", "500ms"),
        ("--easing-default", "cubic-bezier(0.4, 0, 0.2, 1)"),
        ("--easing-in", "cubic-bezier(0.4, 0, 1, 1)"),
        ("--easing-out", "cubic-bezier(0, 0, 0.2, 1)"),
        ("--easing-bounce", "cubic-bezier(0.68, -0.55, 0.265, 1.55)"),
    ]
    .into_iter()
    .collect()
}

/// Every category, in output order.
pub fn generate_all(options: &TokenOptions) -> Result<TokenSet> {
    let mut set = color_scale(&options.primary, "primary")?;
    set.extend(color_scale(&options.neutral, "neutral")?);
    set.extend(spacing());
    set.extend(typography(&options.font));
    set.extend(radius(options.radius));
    set.extend(shadow());
    set.extend(animation());
    Ok(set)
}

/// First word of a token name: `--color-primary-50` → `color`.
pub fn category(name: &str) -> &str {
    let bare = name.trim_start_matches('-');
    bare.split('-').next().unwrap_or(bare)
}

/// `:root { ... }` with a blank line wherever [`category`] changes.
///
/// Grouping keys on the first word after `--`, so all `--color-*` tokens form
/// one block. The output is never a single flat list.
pub fn format_css(tokens: &TokenSet) -> String {
    let mut lines = vec![":root {".to_string()];
    let mut current: Option<&str> = None;
    for (name, value) in tokens.iter() {
        let group = category(name);
        if current.is_some_and(|c| c != group) {
            lines.push(String::new());
        }
        current = Some(group);
        lines.push(format!("  {name}: {value};"));
    }
    lines.push("}".to_string());
    lines.join("\n")
}

pub fn format_json(tokens: &TokenSet) -> Result<String> {
    Ok(serde_json::to_string_pretty(tokens)?)
}
