// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Design tooling around the search engine: color math, contrast checks,
//! palettes, tokens, type scales, the code auditor, icon lookups and the
//! design-system generator that ties them together.

pub mod audit;
pub mod color;
pub mod contrast;
pub mod icons;
pub mod palette;
pub mod system;
pub mod tokens;
pub mod typography;

pub use audit::{audit_file, audit_source, AuditReport, Finding, Severity};
pub use color::{Hsl, Rgb};
pub use contrast::{check as check_contrast, wcag_ratio, ContrastReport, WcagLevel};
pub use palette::{generate_palette, Harmony, PaletteColor};
pub use system::{DesignSystem, SystemGenerator};
pub use tokens::{generate_all as generate_tokens, Preset, TokenOptions, TokenSet};
pub use typography::{generate_scale, NamedScale, TypeStep};
