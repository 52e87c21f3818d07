// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Color-harmony palettes built around one base color.
//!
//! Each harmony rotates the base hue by fixed offsets, keeping saturation and
//! lightness. Monochromatic instead steps lightness around the base. If the
//! harmony yields fewer colors than asked for, the palette is topped up with
//! lighter variants of the last hue; if it yields more, it is cut.

use serde::Serialize;
use serde_json::json;

use super::color::{Hsl, Rgb};
use crate::error::Result;

/// Hue relationship between the base and the generated colors.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, clap::ValueEnum)]
#[serde(rename_all = "kebab-case")]
pub enum Harmony {
    Complementary,
    Analogous,
    #[default]
    Triadic,
    Tetradic,
    SplitComplementary,
    Monochromatic,
}

impl Harmony {
    pub const ALL: [Harmony; 6] = [
        Harmony::Complementary,
        Harmony::Analogous,
        Harmony::Triadic,
        Harmony::Tetradic,
        Harmony::SplitComplementary,
        Harmony::Monochromatic,
    ];

    /// Hue offsets in degrees, relative to the base.
    pub fn offsets(self) -> &'static [i32] {
        match self {
            Harmony::Complementary => &[180],
            Harmony::Analogous => &[-30, 30],
            Harmony::Triadic => &[120, 240],
            Harmony::Tetradic => &[90, 180, 270],
            Harmony::SplitComplementary => &[150, 210],
            Harmony::Monochromatic => &[],
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            Harmony::Complementary => "complementary",
            Harmony::Analogous => "analogous",
            Harmony::Triadic => "triadic",
            Harmony::Tetradic => "tetradic",
            Harmony::SplitComplementary => "split-complementary",
            Harmony::Monochromatic => "monochromatic",
        }
    }
}

/// One palette entry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PaletteColor {
    /// Uppercase `#RRGGBB`.
    pub hex: String,
    /// `base`, a signed hue offset, a lightness like `L65`, or
    /// `light variant`.
    ///
    /// Offsets carry exactly one sign: `+120°`, `-30°`. A negative offset is
    /// never written as `+-30°`.
    pub role: String,
    /// CSS `hsl()` of the color before 8-bit truncation.
    pub hsl: String,
}

impl PaletteColor {
    fn from_hsl(hsl: Hsl, role: impl Into<String>) -> Self {
        PaletteColor {
            hex: Rgb::from_hsl(hsl).to_hex(),
            role: role.into(),
            hsl: hsl.to_string(),
        }
    }

    /// Parsed color, for rendering swatches.
    pub fn rgb(&self) -> Option<Rgb> {
        Rgb::from_hex(&self.hex).ok()
    }
}

/// Build `count` colors around `base`.
///
/// ```
/// use design_intel::design::{generate_palette, Harmony};
///
/// let palette = generate_palette("#2563EB", Harmony::Triadic, 5).unwrap();
/// assert_eq!(palette.len(), 5);
/// assert_eq!(palette[0].role, "base");
/// assert_eq!(palette[1].role, "+120°");
/// ```
pub fn generate_palette(base: &str, harmony: Harmony, count: usize) -> Result<Vec<PaletteColor>> {
    let base_rgb = Rgb::from_hex(base)?;
    let base_hsl = base_rgb.to_hsl();
    let Hsl { h, s, l } = base_hsl;

    let mut colors = vec![PaletteColor {
        hex: base_rgb.to_hex(),
        role: "base".to_string(),
        hsl: base_hsl.to_string(),
    }];

    for &offset in harmony.offsets() {
        let hue = (h + f64::from(offset)).rem_euclid(360.0);
        colors.push(PaletteColor::from_hsl(Hsl::new(hue, s, l), format!("{offset:+}°")));
    }

    if harmony == Harmony::Monochromatic {
        let center = (count / 2) as f64;
        for i in 1..count {
            let lightness = (l + (i as f64 - center) * 12.0).clamp(10.0, 95.0);
            colors.push(PaletteColor::from_hsl(
                Hsl::new(h, s, lightness),
                format!("L{lightness:.0}"),
            ));
        }
    }

    let lighter = (l + 20.0).min(95.0);
    while colors.len() < count {
        let last_hue = colors
            .last()
            .and_then(PaletteColor::rgb)
            .map_or(h, |rgb| rgb.to_hsl().h);
        colors.push(PaletteColor::from_hsl(
            Hsl::new(last_hue, s, lighter),
            "light variant",
        ));
    }

    colors.truncate(count);
    Ok(colors)
}

/// `{"harmony": ..., "palette": [...]}`, pretty-printed.
pub fn format_json(colors: &[PaletteColor], harmony: Harmony) -> Result<String> {
    Ok(serde_json::to_string_pretty(
        &json!({ "harmony": harmony.name(), "palette": colors }),
    )?)
}

/// `:root { --palette-N: #RRGGBB; }`.
pub fn format_css(colors: &[PaletteColor]) -> String {
    let mut lines = vec![":root {".to_string()];
    for (i, color) in colors.iter().enumerate() {
        lines.push(format!("  --palette-{i}: {};", color.hex));
    }
    lines.push("}".to_string());
    lines.join("\n")
}

const SWATCH: &str = "██████";

/// Listing with a swatch per color. With `colorize`, swatches are painted in
/// their own color using 24-bit escapes.
pub fn format_text(colors: &[PaletteColor], harmony: Harmony, colorize: bool) -> String {
    let mut lines = vec![
        format!("\n  Harmony: {}", harmony.name()),
        format!("  Colors: {}", colors.len()),
        String::new(),
    ];
    for color in colors {
        let swatch = match color.rgb() {
            Some(Rgb { r, g, b }) if colorize => format!("\x1b[38;2;{r};{g};{b}m{SWATCH}\x1b[0m"),
            _ => SWATCH.to_string(),
        };
        lines.push(format!("  {swatch}  {}  ({})  {}", color.hex, color.role, color.hsl));
    }
    lines.join("\n")
}
