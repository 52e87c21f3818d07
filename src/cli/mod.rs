// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! CLI definitions for the design-intel command-line interface.
//!
//! `search` is the core: BM25 across the design tables. The other commands are
//! generators and checkers that work on colors, tokens and source files, and
//! `system` combines search with all of them into one design-system
//! recommendation.

pub mod display;
pub mod logging;

use std::path::{Path, PathBuf};

use clap::{Parser, Subcommand, ValueEnum};

use design_intel::design::{Harmony, NamedScale, Preset, WcagLevel};
use design_intel::{Domain, DATA_DIR_ENV};

#[derive(Parser)]
#[command(
    name = "design-intel",
    about = "Design intelligence CLI: BM25 search over UI/UX databases, plus color, token and audit tools",
    version
)]
pub struct Cli {
    /// Directory holding the design CSV tables
    #[arg(long, global = true, env = DATA_DIR_ENV)]
    pub data_dir: Option<PathBuf>,

    /// Debug logging to stderr
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Only log errors
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Disable colored output
    #[arg(long, global = true)]
    pub no_color: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum ResultFormat {
    Text,
    Json,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum PaletteFormat {
    Text,
    Json,
    Css,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum TokenFormat {
    Css,
    Json,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum ScaleFormat {
    Css,
    Json,
    Text,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum AuditFormat {
    Text,
    Json,
    Markdown,
}

impl AuditFormat {
    /// The format actually written: a `.json` or `.md` output file decides it,
    /// anything else keeps `requested`.
    pub fn for_output(requested: AuditFormat, output: Option<&Path>) -> AuditFormat {
        match output.and_then(Path::extension).and_then(|ext| ext.to_str()) {
            Some("json") => AuditFormat::Json,
            Some("md") => AuditFormat::Markdown,
            _ => requested,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum SystemFormat {
    Json,
    Css,
    Text,
}

#[derive(Subcommand)]
pub enum Commands {
    /// BM25 search across all design databases
    Search {
        /// Search query
        query: String,

        /// Restrict to one domain
        #[arg(short, long, value_enum)]
        domain: Option<Domain>,

        /// Also search a tech-stack table (e.g. nextjs, react)
        #[arg(short, long)]
        stack: Option<String>,

        /// Maximum results per domain
        #[arg(short = 'n', long, default_value_t = design_intel::DEFAULT_MAX_RESULTS)]
        max_results: usize,

        #[arg(short, long, value_enum, default_value_t = ResultFormat::Text)]
        format: ResultFormat,
    },

    /// WCAG/APCA contrast checker for a color pair
    Contrast {
        /// Foreground color (hex)
        foreground: String,

        /// Background color (hex)
        background: String,

        #[arg(short, long, value_enum, default_value_t = WcagLevel::AA)]
        level: WcagLevel,

        #[arg(short, long, value_enum, default_value_t = ResultFormat::Text)]
        format: ResultFormat,
    },

    /// Color harmony palette generator
    Palette {
        /// Base color (hex)
        color: String,

        #[arg(short = 'H', long, value_enum, default_value_t = Harmony::Triadic)]
        harmony: Harmony,

        /// Number of colors
        #[arg(short, long, default_value_t = 5)]
        count: usize,

        #[arg(short, long, value_enum, default_value_t = PaletteFormat::Text)]
        format: PaletteFormat,
    },

    /// CSS custom property / design token generator
    Tokens {
        /// Primary color hex
        #[arg(short, long, default_value = "#2563EB")]
        primary: String,

        /// Neutral color hex
        #[arg(short, long, default_value = "#64748B")]
        neutral: String,

        /// Base border radius in px
        #[arg(short, long, default_value_t = 12)]
        radius: u32,

        /// Base font family
        #[arg(short = 't', long, default_value = "Inter")]
        font: String,

        /// Use an industry preset (overrides the other options)
        #[arg(long, value_enum)]
        preset: Option<Preset>,

        #[arg(short, long, value_enum, default_value_t = TokenFormat::Css)]
        format: TokenFormat,
    },

    /// Modular type scale calculator
    Typography {
        /// Base font size in px
        #[arg(short, long, default_value_t = 16.0)]
        base: f64,

        /// Scale ratio
        #[arg(short, long, default_value_t = 1.25)]
        ratio: f64,

        /// Named scale (overrides --ratio)
        #[arg(short, long, value_enum)]
        scale: Option<NamedScale>,

        /// Number of steps
        #[arg(short = 'n', long, default_value_t = 8)]
        steps: usize,

        #[arg(short, long, value_enum, default_value_t = ScaleFormat::Css)]
        format: ScaleFormat,
    },

    /// Full design system generator backed by search
    System {
        /// Design context query
        query: String,

        /// Tech stack (e.g. nextjs, react)
        #[arg(short, long)]
        stack: Option<String>,

        #[arg(short, long, value_enum, default_value_t = SystemFormat::Json)]
        format: SystemFormat,

        /// Write to this file instead of stdout
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// JSON file overriding search budgets and field priorities
        #[arg(long)]
        config: Option<PathBuf>,
    },

    /// UI code quality and accessibility auditor
    Audit {
        /// Files or glob patterns to audit (e.g. "src/**/*.tsx")
        #[arg(required = true)]
        files: Vec<PathBuf>,

        #[arg(short, long, value_enum, default_value_t = AuditFormat::Text)]
        format: AuditFormat,

        /// Write the report here; a .json or .md extension picks the format
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// List icon libraries, optionally filtered by name
    Icons {
        /// Name substring
        query: Option<String>,
    },
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_definition_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_search_defaults() {
        let cli = Cli::try_parse_from(["design-intel", "search", "dark mode"]).unwrap();
        match cli.command {
            Commands::Search {
                query,
                domain,
                max_results,
                format,
                ..
            } => {
                assert_eq!(query, "dark mode");
                assert_eq!(domain, None);
                assert_eq!(max_results, 3);
                assert_eq!(format, ResultFormat::Text);
            }
            _ => panic!("expected search"),
        }
    }

    #[test]
    fn test_unknown_domain_is_rejected() {
        assert!(Cli::try_parse_from(["design-intel", "search", "x", "-d", "colour"]).is_err());
        assert!(Cli::try_parse_from(["design-intel", "search", "x", "-d", "ux"]).is_ok());
    }

    #[test]
    fn test_global_flags_after_subcommand() {
        let cli = Cli::try_parse_from([
            "design-intel",
            "contrast",
            "#000",
            "#fff",
            "--level",
            "AAA",
            "--data-dir",
            "/tmp/db",
            "-q",
        ])
        .unwrap();
        assert!(cli.quiet);
        assert_eq!(cli.data_dir, Some(PathBuf::from("/tmp/db")));
        match cli.command {
            Commands::Contrast { level, .. } => assert_eq!(level, WcagLevel::AAA),
            _ => panic!("expected contrast"),
        }
    }

    #[test]
    fn test_palette_harmony_spelling() {
        let cli = Cli::try_parse_from(["design-intel", "palette", "#2563EB", "-H", "split-complementary"])
            .unwrap();
        match cli.command {
            Commands::Palette { harmony, count, .. } => {
                assert_eq!(harmony, Harmony::SplitComplementary);
                assert_eq!(count, 5);
            }
            _ => panic!("expected palette"),
        }
    }

    #[test]
    fn test_audit_requires_files() {
        assert!(Cli::try_parse_from(["design-intel", "audit"]).is_err());
    }

    #[test]
    fn test_audit_output_extension_picks_format() {
        let pick = |requested, output: Option<&str>| {
            AuditFormat::for_output(requested, output.map(Path::new))
        };
        assert_eq!(pick(AuditFormat::Text, Some("report.json")), AuditFormat::Json);
        assert_eq!(pick(AuditFormat::Json, Some("out/report.md")), AuditFormat::Markdown);
        assert_eq!(pick(AuditFormat::Markdown, Some("report.txt")), AuditFormat::Markdown);
        assert_eq!(pick(AuditFormat::Json, None), AuditFormat::Json);
    }

    #[test]
    fn test_audit_markdown_flag() {
        let cli = Cli::try_parse_from([
            "design-intel", "audit", "src/*.tsx", "-f", "markdown", "-o", "audit.md",
        ])
        .unwrap();
        match cli.command {
            Commands::Audit { files, format, output } => {
                assert_eq!(files, vec![PathBuf::from("src/*.tsx")]);
                assert_eq!(format, AuditFormat::Markdown);
                assert_eq!(output, Some(PathBuf::from("audit.md")));
            }
            _ => panic!("expected audit"),
        }
    }
}
