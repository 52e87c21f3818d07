// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Which CSV file backs which collection.
//!
//! Domains are a fixed set, each bound to one table under the data root.
//! Stacks live in their own namespace (`stacks/<name>.csv`) and are resolved by
//! lowercased identifier. Anything else is a plain named table.
//!
//! Stack and table names are single path components. A name with a separator,
//! a `..`, or any character outside word characters, `-` and `.` resolves to
//! nothing, and the searcher treats it like a missing file.

use std::fmt;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::tokenize::is_word_char;

/// A searchable design domain.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum Domain {
    Style,
    Color,
    Chart,
    Typography,
    Reasoning,
    Ux,
    Product,
    Icon,
    Landing,
    Performance,
    Web,
}

impl Domain {
    /// Every domain, in the order an unfiltered search visits them.
    pub const ALL: [Domain; 11] = [
        Domain::Style,
        Domain::Color,
        Domain::Chart,
        Domain::Typography,
        Domain::Reasoning,
        Domain::Ux,
        Domain::Product,
        Domain::Icon,
        Domain::Landing,
        Domain::Performance,
        Domain::Web,
    ];

    /// Response key and CLI spelling.
    pub fn name(self) -> &'static str {
        match self {
            Domain::Style => "style",
            Domain::Color => "color",
            Domain::Chart => "chart",
            Domain::Typography => "typography",
            Domain::Reasoning => "reasoning",
            Domain::Ux => "ux",
            Domain::Product => "product",
            Domain::Icon => "icon",
            Domain::Landing => "landing",
            Domain::Performance => "performance",
            Domain::Web => "web",
        }
    }

    /// Backing table, relative to the data root.
    pub fn file_name(self) -> &'static str {
        match self {
            Domain::Style => "styles.csv",
            Domain::Color => "colors.csv",
            Domain::Chart => "charts.csv",
            Domain::Typography => "typography.csv",
            Domain::Reasoning => "ui-reasoning.csv",
            Domain::Ux => "ux-guidelines.csv",
            Domain::Product => "products.csv",
            Domain::Icon => "icons.csv",
            Domain::Landing => "landing.csv",
            Domain::Performance => "react-performance.csv",
            Domain::Web => "web-interface.csv",
        }
    }

    /// Exact-name lookup. Returns `None` for anything not in [`Domain::ALL`].
    pub fn from_name(name: &str) -> Option<Domain> {
        Domain::ALL.into_iter().find(|d| d.name() == name)
    }
}

impl fmt::Display for Domain {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Logical identity of a data source, before it is resolved to a path.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Source {
    /// One of the fixed domains.
    Domain(Domain),
    /// A per-stack table (`stacks/<name>.csv`).
    Stack(String),
    /// Any other table under the data root, by file name.
    Table(String),
}

/// Directory holding per-stack tables, relative to the data root.
pub const STACKS_DIR: &str = "stacks";

/// True if `name` can only ever name a file directly inside its directory.
pub fn is_plain_name(name: &str) -> bool {
    !name.is_empty()
        && !name.contains("..")
        && name
            .chars()
            .all(|c| is_word_char(c) || c == '-' || c == '.')
}

impl Source {
    /// Resolve to the concrete file under `data_dir`, or `None` for a stack or
    /// table name that is not a plain file name.
    ///
    /// Stack names are lowercased, so `NextJS` and `nextjs` share a file and
    /// therefore a cache entry.
    pub fn resolve(&self, data_dir: &Path) -> Option<PathBuf> {
        match self {
            Source::Domain(domain) => Some(data_dir.join(domain.file_name())),
            Source::Stack(name) => is_plain_name(name).then(|| {
                data_dir
                    .join(STACKS_DIR)
                    .join(format!("{}.csv", name.to_lowercase()))
            }),
            Source::Table(file) => is_plain_name(file).then(|| data_dir.join(file)),
        }
    }
}

impl From<Domain> for Source {
    fn from(domain: Domain) -> Self {
        Source::Domain(domain)
    }
}
