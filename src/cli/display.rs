// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Terminal display utilities for the design-intel CLI.
//!
//! Pretty terminal output that respects your color scheme. OneDark for dark
//! terminals, One Light for light ones. The detection tries
//! `DESIGN_INTEL_THEME` first (for explicit control), then `COLORFGBG` (set by
//! some terminals), then macOS system appearance, then defaults to dark.
//!
//! Everything here is only used when stdout is a terminal. Piped output goes
//! through the plain formatters in the library so scripts see stable text.
//! Respects `NO_COLOR` and `--no-color`.
//!
//! # Theme detection order
//!
//! 1. `DESIGN_INTEL_THEME` env var ("dark" or "light")
//! 2. `COLORFGBG` env var (terminal background hint)
//! 3. macOS appearance (via defaults read)
//! 4. Default to dark theme

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::OnceLock;

use design_intel::design::audit::{AuditReport, Severity};
use design_intel::design::{ContrastReport, Rgb};
use design_intel::SearchResponse;

// Box drawing constants - width between │ and │ (excluding border chars)
pub const BOX_WIDTH: usize = 80;

// ═══════════════════════════════════════════════════════════════════════════
// THEME DETECTION
// ═══════════════════════════════════════════════════════════════════════════

/// Terminal color theme
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Theme {
    Dark,
    Light,
}

static THEME: OnceLock<Theme> = OnceLock::new();

/// Set by `--no-color`.
static COLORS_DISABLED: AtomicBool = AtomicBool::new(false);

fn detect_theme() -> Theme {
    if let Ok(theme) = std::env::var("DESIGN_INTEL_THEME") {
        match theme.to_lowercase().as_str() {
            "light" | "l" => return Theme::Light,
            "dark" | "d" => return Theme::Dark,
            _ => {}
        }
    }

    // COLORFGBG is "fg;bg"; background 7 and up (except 8) is light
    if let Ok(colorfgbg) = std::env::var("COLORFGBG") {
        if let Some(bg) = colorfgbg.split(';').next_back() {
            if let Ok(bg_num) = bg.parse::<u8>() {
                if bg_num >= 7 && bg_num != 8 {
                    return Theme::Light;
                }
            }
        }
    }

    #[cfg(target_os = "macos")]
    {
        if let Ok(output) = std::process::Command::new("defaults")
            .args(["read", "-g", "AppleInterfaceStyle"])
            .output()
        {
            let stdout = String::from_utf8_lossy(&output.stdout);
            if !stdout.contains("Dark") && output.status.success() {
                return Theme::Light;
            }
        }
    }

    Theme::Dark
}

/// Get the current theme (cached)
pub fn theme() -> Theme {
    *THEME.get_or_init(detect_theme)
}

// ═══════════════════════════════════════════════════════════════════════════
// ONEDARK / ONE LIGHT COLOR PALETTES (True Color)
// ═══════════════════════════════════════════════════════════════════════════

fn rgb(r: u8, g: u8, b: u8) -> String {
    format!("\x1b[38;2;{};{};{}m", r, g, b)
}

fn rgb_bg(r: u8, g: u8, b: u8) -> String {
    format!("\x1b[48;2;{};{};{}m", r, g, b)
}

pub mod colors {
    pub const RESET: &str = "\x1b[0m";
    pub const BOLD: &str = "\x1b[1m";
    pub const DIM: &str = "\x1b[2m";
}

pub use colors::*;

mod onedark {
    pub const RED: (u8, u8, u8) = (224, 108, 117); // #e06c75
    pub const GREEN: (u8, u8, u8) = (152, 195, 121); // #98c379
    pub const YELLOW: (u8, u8, u8) = (229, 192, 123); // #e5c07b
    pub const BLUE: (u8, u8, u8) = (97, 175, 239); // #61afef
    pub const CYAN: (u8, u8, u8) = (86, 182, 194); // #56b6c2
    pub const GRAY: (u8, u8, u8) = (92, 99, 112); // #5c6370
    pub const BRIGHT_GREEN: (u8, u8, u8) = (166, 226, 46);
    pub const BRIGHT_CYAN: (u8, u8, u8) = (102, 217, 239);
}

mod onelight {
    pub const RED: (u8, u8, u8) = (228, 86, 73); // #e45649
    pub const GREEN: (u8, u8, u8) = (80, 161, 79); // #50a14f
    pub const YELLOW: (u8, u8, u8) = (193, 132, 1); // #c18401
    pub const BLUE: (u8, u8, u8) = (64, 120, 242); // #4078f2
    pub const CYAN: (u8, u8, u8) = (1, 132, 188); // #0184bc
    pub const GRAY: (u8, u8, u8) = (160, 161, 167); // #a0a1a7
    pub const BRIGHT_GREEN: (u8, u8, u8) = (68, 140, 39);
    pub const BRIGHT_CYAN: (u8, u8, u8) = (1, 112, 158);
}

// ═══════════════════════════════════════════════════════════════════════════
// THEME-AWARE COLOR ACCESSORS
// ═══════════════════════════════════════════════════════════════════════════

macro_rules! theme_color {
    ($name:ident) => {
        #[allow(non_snake_case)]
        pub fn $name() -> String {
            let (r, g, b) = match theme() {
                Theme::Dark => onedark::$name,
                Theme::Light => onelight::$name,
            };
            rgb(r, g, b)
        }
    };
}

theme_color!(RED);
theme_color!(GREEN);
theme_color!(YELLOW);
theme_color!(BLUE);
theme_color!(CYAN);
theme_color!(GRAY);
theme_color!(BRIGHT_GREEN);
theme_color!(BRIGHT_CYAN);

// ═══════════════════════════════════════════════════════════════════════════
// CORE UTILITIES
// ═══════════════════════════════════════════════════════════════════════════

pub fn disable_colors() {
    COLORS_DISABLED.store(true, Ordering::Relaxed);
}

/// Colors only on a TTY, and never with `NO_COLOR` or `--no-color`.
pub fn use_colors() -> bool {
    if COLORS_DISABLED.load(Ordering::Relaxed) || std::env::var_os("NO_COLOR").is_some() {
        return false;
    }
    atty::is(atty::Stream::Stdout)
}

/// Apply theme color with optional modifiers
pub fn themed(color_fn: fn() -> String, modifiers: &[&str], text: &str) -> String {
    if use_colors() {
        format!("{}{}{}{}", modifiers.join(""), color_fn(), text, RESET)
    } else {
        text.to_string()
    }
}

/// Calculate visible length (excluding ANSI codes)
pub fn visible_len(s: &str) -> usize {
    let mut in_escape = false;
    let mut len = 0;
    for c in s.chars() {
        if c == '\x1b' {
            in_escape = true;
        } else if in_escape && c == 'm' {
            in_escape = false;
        } else if !in_escape {
            len += 1;
        }
    }
    len
}

/// Cut plain text to `max` characters, ending in `…` if anything was dropped.
pub fn truncate(text: &str, max: usize) -> String {
    if text.chars().count() <= max {
        return text.to_string();
    }
    let kept: String = text.chars().take(max.saturating_sub(1)).collect();
    format!("{kept}…")
}

// ═══════════════════════════════════════════════════════════════════════════
// BOX DRAWING
// ═══════════════════════════════════════════════════════════════════════════

/// Print a content line: │ content          │
pub fn row(content: &str) {
    let border = GRAY();
    let pad = BOX_WIDTH.saturating_sub(visible_len(content));
    println!("{}│{}{}{}{}│{}", border, RESET, content, " ".repeat(pad), border, RESET);
}

/// Print section header: ┌─ LABEL ──────────┐
pub fn section_top(label: &str) {
    let border = GRAY();
    let label_part = format!("─ {} ", themed(CYAN, &[BOLD], label));
    let remaining = BOX_WIDTH.saturating_sub(visible_len(&label_part));
    println!("{}┌{}{}{}{}┐{}", border, RESET, label_part, border, "─".repeat(remaining), RESET);
}

/// Print section footer: └──────────────────┘
pub fn section_bot() {
    println!("{}└{}┘{}", GRAY(), "─".repeat(BOX_WIDTH), RESET);
}

pub fn double_header() {
    println!("{}╔{}╗{}", BLUE(), "═".repeat(BOX_WIDTH), RESET);
}

pub fn double_divider() {
    println!("{}╠{}╣{}", BLUE(), "═".repeat(BOX_WIDTH), RESET);
}

pub fn double_footer() {
    println!("{}╚{}╝{}", BLUE(), "═".repeat(BOX_WIDTH), RESET);
}

/// Print content line: ║ TEXT             ║
pub fn row_double(content: &str) {
    let border = BLUE();
    let pad = BOX_WIDTH.saturating_sub(visible_len(content));
    println!("{}║{}{}{}{}║{}", border, RESET, content, " ".repeat(pad), border, RESET);
}

/// Print centered bold title: ║      TEXT        ║
pub fn title(text: &str) {
    let border = BLUE();
    let colored = themed(BRIGHT_CYAN, &[BOLD], text);
    let total_pad = BOX_WIDTH.saturating_sub(visible_len(&colored));
    let left_pad = total_pad / 2;
    let right_pad = total_pad - left_pad;
    println!(
        "{}║{}{}{}{}{}║{}",
        border,
        RESET,
        " ".repeat(left_pad),
        colored,
        " ".repeat(right_pad),
        border,
        RESET
    );
}

// ═══════════════════════════════════════════════════════════════════════════
// SEMANTIC FORMATTERS
// ═══════════════════════════════════════════════════════════════════════════

/// BM25 score colored by strength.
pub fn score_value(score: f64) -> String {
    let text = format!("{:.3}", score);
    let color_fn: fn() -> String = if score >= 5.0 {
        BRIGHT_GREEN
    } else if score >= 2.0 {
        GREEN
    } else if score >= 1.0 {
        YELLOW
    } else {
        GRAY
    };
    themed(color_fn, &[BOLD], &text)
}

pub fn pass_badge(pass: bool) -> String {
    if pass {
        themed(GREEN, &[BOLD], "PASS")
    } else {
        themed(RED, &[BOLD], "FAIL")
    }
}

pub fn severity_badge(severity: Severity) -> String {
    let color_fn: fn() -> String = match severity {
        Severity::Critical => RED,
        Severity::Warning => YELLOW,
        Severity::Info => BLUE,
    };
    themed(color_fn, &[BOLD], severity.name())
}

/// A short block painted in `color`, or nothing without colors.
pub fn swatch(color: Rgb) -> String {
    if use_colors() {
        format!("{}   {}", rgb_bg(color.r, color.g, color.b), RESET)
    } else {
        String::new()
    }
}

/// Sample text drawn in `fg` on `bg`.
pub fn sample(fg: Rgb, bg: Rgb, text: &str) -> String {
    if use_colors() {
        format!(
            "{}{} {} {}",
            rgb(fg.r, fg.g, fg.b),
            rgb_bg(bg.r, bg.g, bg.b),
            text,
            RESET
        )
    } else {
        text.to_string()
    }
}

// ═══════════════════════════════════════════════════════════════════════════
// COMMAND RENDERERS
// ═══════════════════════════════════════════════════════════════════════════

const FIELD_INDENT: &str = "    ";

/// Boxed search results, one section per domain.
pub fn print_search(response: &SearchResponse) {
    for (section, hits) in response.iter() {
        println!();
        section_top(&format!("{} RESULTS", section.to_uppercase()));
        for (i, hit) in hits.iter().enumerate() {
            row(&format!(" #{} {}", i + 1, score_value(hit.score)));
            for (field, value) in hit.document.fields() {
                let value = value.trim();
                if value.is_empty() {
                    continue;
                }
                let label = themed(GRAY, &[DIM], &format!("{field}:"));
                let room = BOX_WIDTH.saturating_sub(FIELD_INDENT.len() + field.chars().count() + 2);
                row(&format!("{FIELD_INDENT}{label} {}", truncate(value, room)));
            }
            if i + 1 < hits.len() {
                row("");
            }
        }
        section_bot();
    }
}

/// Double-line contrast report with a live preview of the pair.
pub fn print_contrast(report: &ContrastReport) {
    let label = |text: &str| themed(GRAY, &[], &format!("  {text:<14}"));

    double_header();
    title("CONTRAST CHECK");
    double_divider();
    for (name, hex) in [("Foreground:", &report.foreground), ("Background:", &report.background)] {
        let chip = Rgb::from_hex(hex).map(swatch).unwrap_or_default();
        row_double(&format!("{}{} {}", label(name), hex, chip));
    }
    if let (Ok(fg), Ok(bg)) = (Rgb::from_hex(&report.foreground), Rgb::from_hex(&report.background)) {
        row_double(&format!("{}{}", label("Preview:"), sample(fg, bg, "The quick brown fox")));
    }
    double_divider();
    row_double(&format!("{}{:.2}:1", label("WCAG Ratio:"), report.wcag_ratio));
    row_double(&format!("{}{:.1}", label("APCA Lc:"), report.apca_score));
    row_double(&format!("{}{}", label("Level:"), report.level.name()));
    double_divider();
    row_double(&format!("{}{}", label("Normal Text:"), pass_badge(report.pass_normal)));
    row_double(&format!("{}{}", label("Large Text:"), pass_badge(report.pass_large)));
    double_divider();
    row_double(&format!("  {}", report.recommendation));
    double_footer();
}

/// Audit findings, criticals first, with colored severities.
pub fn print_audit(report: &AuditReport) {
    println!();
    println!("  {} {}", themed(CYAN, &[BOLD], "UI AUDIT:"), report.file);
    println!(
        "  {} critical | {} warnings | {} info",
        themed(RED, &[BOLD], &report.count_by(Severity::Critical).to_string()),
        themed(YELLOW, &[BOLD], &report.count_by(Severity::Warning).to_string()),
        themed(BLUE, &[BOLD], &report.count_by(Severity::Info).to_string())
    );
    println!();

    let mut ordered: Vec<_> = report.findings.iter().collect();
    ordered.sort_by_key(|f| (f.severity != Severity::Critical, f.line));
    for finding in ordered {
        println!(
            "  {} L{} [{}] {}",
            severity_badge(finding.severity),
            finding.line,
            finding.rule_id,
            finding.message
        );
        println!("     {} {}", themed(GRAY, &[], "Code:"), finding.code);
        println!("     {} {}", themed(GRAY, &[], "Fix: "), finding.fix);
        println!();
    }
}

// ═══════════════════════════════════════════════════════════════════════════
// TESTS
// ═══════════════════════════════════════════════════════════════════════════
