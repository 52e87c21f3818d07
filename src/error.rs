// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Error type for the collaborators around the search engine.
//!
//! The engine itself never fails: missing or broken data sources degrade to
//! empty collections. Errors only surface from user input (bad colors, bad
//! config files) and from file I/O in the auditor and output writers.

use std::path::PathBuf;

/// Everything that can go wrong outside the ranking core.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// A color string was not `#RGB` or `#RRGGBB` hex.
    #[error("invalid color '{input}': expected #RGB or #RRGGBB hex")]
    InvalidColor {
        /// The rejected input, verbatim.
        input: String,
    },

    /// A file could not be read or written.
    #[error("{path}: {source}")]
    Io {
        /// Path that was attempted.
        path: PathBuf,
        /// The underlying error.
        #[source]
        source: std::io::Error,
    },

    /// A system config file was not valid JSON for [`crate::SystemConfig`].
    #[error("invalid config {path}: {source}")]
    InvalidConfig {
        /// Path of the config file.
        path: PathBuf,
        /// The parse error.
        #[source]
        source: serde_json::Error,
    },

    /// Serializing a report to JSON failed.
    #[error("failed to serialize output: {0}")]
    Serialize(#[from] serde_json::Error),
}

impl Error {
    pub(crate) fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Error::Io {
            path: path.into(),
            source,
        }
    }
}

/// Result alias used throughout the crate.
pub type Result<T> = std::result::Result<T, Error>;
