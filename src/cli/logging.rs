// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Tracing subscriber setup for the design-intel binary.
//!
//! Logs go to stderr so stdout stays clean for JSON and CSS output.
//!
//! # Priority (highest to lowest)
//!
//! 1. `DESIGN_INTEL_LOG` env var (directives, e.g. `design_intel=debug`)
//! 2. `RUST_LOG`
//! 3. CLI flags (`-v` → debug for this crate, `-q` → errors only)
//! 4. Default level: `warn`

use std::io::IsTerminal;

use tracing::Level;
use tracing_subscriber::fmt;
use tracing_subscriber::prelude::*;
use tracing_subscriber::EnvFilter;

pub const LOG_ENV: &str = "DESIGN_INTEL_LOG";

const CRATE_TARGET: &str = "design_intel";

/// Verbosity level derived from CLI flags.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Verbosity {
    Quiet,
    Normal,
    Verbose,
}

impl Verbosity {
    /// `-v` wins over `-q` when both are given.
    pub const fn from_flags(verbose: bool, quiet: bool) -> Self {
        if verbose {
            Verbosity::Verbose
        } else if quiet {
            Verbosity::Quiet
        } else {
            Verbosity::Normal
        }
    }

    pub const fn default_level(self) -> Level {
        match self {
            Verbosity::Quiet => Level::ERROR,
            Verbosity::Normal => Level::WARN,
            Verbosity::Verbose => Level::DEBUG,
        }
    }
}

/// Install the global subscriber. Call once, first thing in `main`.
pub fn init(verbosity: Verbosity, no_color: bool) {
    let use_ansi = !no_color && std::io::stderr().is_terminal();

    let layer = fmt::layer()
        .with_writer(std::io::stderr)
        .with_ansi(use_ansi)
        .with_target(verbosity == Verbosity::Verbose);

    // Ignore a second init (tests may have installed one already).
    let _ = tracing_subscriber::registry()
        .with(build_filter(verbosity))
        .with(layer.without_time().compact())
        .try_init();
}

fn build_filter(verbosity: Verbosity) -> EnvFilter {
    if let Ok(directives) = std::env::var(LOG_ENV) {
        if let Ok(filter) = EnvFilter::try_new(&directives) {
            return filter;
        }
    }

    if let Ok(filter) = EnvFilter::try_from_default_env() {
        return filter;
    }

    let level = verbosity.default_level();
    let directive = match verbosity {
        Verbosity::Verbose => format!("{},{CRATE_TARGET}=debug", Level::WARN),
        _ => level.to_string(),
    };
    EnvFilter::try_new(&directive).unwrap_or_else(|_| EnvFilter::new(level.as_str()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_verbosity_from_flags() {
        assert_eq!(Verbosity::from_flags(false, false), Verbosity::Normal);
        assert_eq!(Verbosity::from_flags(true, false), Verbosity::Verbose);
        assert_eq!(Verbosity::from_flags(false, true), Verbosity::Quiet);
        assert_eq!(Verbosity::from_flags(true, true), Verbosity::Verbose);
    }

    #[test]
    fn test_default_levels() {
        assert_eq!(Verbosity::Quiet.default_level(), Level::ERROR);
        assert_eq!(Verbosity::Normal.default_level(), Level::WARN);
        assert_eq!(Verbosity::Verbose.default_level(), Level::DEBUG);
    }
}
