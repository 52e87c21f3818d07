// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Configuration: where the data lives and how the design-system generator
//! spends its search budget.
//!
//! The generator's behavior is data, not code. A [`SystemConfig`] lists which
//! domains to query and how many hits to keep from each, and for every concept
//! (primary color, heading font, style name) an ordered list of domains and
//! candidate field names to pull it from. The defaults reproduce the stock
//! behavior; a JSON file can override any part of it:
//!
//! ```json
//! {
//!   "budgets": [{ "domain": "color", "max_results": 5 }],
//!   "font": { "domains": ["typography"], "fields": ["Body Font"], "default": "Roboto" }
//! }
//! ```

use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::corpus::Domain;
use crate::error::{Error, Result};

/// Environment variable naming the data root.
pub const DATA_DIR_ENV: &str = "DESIGN_INTEL_DATA";

/// Data root used when neither the flag nor the environment names one.
pub const DEFAULT_DATA_DIR: &str = "data";

/// Hits kept per section when the caller does not say.
pub const DEFAULT_MAX_RESULTS: usize = 3;

/// Resolve the data root: explicit value, then `DESIGN_INTEL_DATA`, then `data`.
pub fn data_dir(explicit: Option<&Path>) -> PathBuf {
    if let Some(dir) = explicit {
        return dir.to_path_buf();
    }
    std::env::var_os(DATA_DIR_ENV)
        .map(PathBuf::from)
        .unwrap_or_else(|| PathBuf::from(DEFAULT_DATA_DIR))
}

/// How many hits to keep from one domain.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct DomainBudget {
    pub domain: Domain,
    pub max_results: usize,
}

impl DomainBudget {
    pub const fn new(domain: Domain, max_results: usize) -> Self {
        DomainBudget {
            domain,
            max_results,
        }
    }
}

/// Where to look for one concept, in priority order.
///
/// Domains are visited in order, hits within a domain in rank order, and
/// fields within a hit in order. The first non-empty value wins (after
/// trimming whitespace and `"`), provided it starts with `require_prefix`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FieldPriority {
    pub domains: Vec<Domain>,
    pub fields: Vec<String>,
    pub default: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub require_prefix: Option<String>,
}

impl FieldPriority {
    fn new(domains: &[Domain], fields: &[&str], default: &str) -> Self {
        FieldPriority {
            domains: domains.to_vec(),
            fields: fields.iter().map(|f| (*f).to_string()).collect(),
            default: default.to_string(),
            require_prefix: None,
        }
    }

    fn with_prefix(mut self, prefix: &str) -> Self {
        self.require_prefix = Some(prefix.to_string());
        self
    }
}

/// Search budgets and extraction rules for the design-system generator.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SystemConfig {
    /// One search per entry, in this order.
    pub budgets: Vec<DomainBudget>,
    /// Hits kept from the stack table, if a stack is given.
    pub stack_budget: usize,
    pub primary_color: FieldPriority,
    pub font: FieldPriority,
    pub style: FieldPriority,
}

impl Default for SystemConfig {
    fn default() -> Self {
        SystemConfig {
            budgets: vec![
                DomainBudget::new(Domain::Product, 1),
                DomainBudget::new(Domain::Style, 3),
                DomainBudget::new(Domain::Color, 2),
                DomainBudget::new(Domain::Landing, 2),
                DomainBudget::new(Domain::Typography, 2),
                DomainBudget::new(Domain::Reasoning, 2),
                DomainBudget::new(Domain::Ux, 3),
                DomainBudget::new(Domain::Chart, 2),
            ],
            stack_budget: DEFAULT_MAX_RESULTS,
            primary_color: FieldPriority::new(
                &[Domain::Color, Domain::Style, Domain::Product],
                &["Primary", "Primary (Hex)", "Primary Colors", "primary"],
                "#2563EB",
            )
            .with_prefix("#"),
            font: FieldPriority::new(
                &[Domain::Typography],
                &["Heading Font", "heading", "Font Pairing Name"],
                "Inter",
            ),
            style: FieldPriority::new(
                &[Domain::Style],
                &["Style Category", "style_category", "name"],
                "Modern Minimal",
            ),
        }
    }
}

impl SystemConfig {
    /// Parse a JSON config. Omitted keys keep their defaults.
    pub fn from_json(json: &str) -> serde_json::Result<Self> {
        serde_json::from_str(json)
    }

    pub fn from_file(path: &Path) -> Result<Self> {
        let text = fs::read_to_string(path).map_err(|e| Error::io(path, e))?;
        SystemConfig::from_json(&text).map_err(|source| Error::InvalidConfig {
            path: path.to_path_buf(),
            source,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_budgets() {
        let config = SystemConfig::default();
        let budgets: Vec<(Domain, usize)> = config
            .budgets
            .iter()
            .map(|b| (b.domain, b.max_results))
            .collect();
        assert_eq!(
            budgets,
            vec![
                (Domain::Product, 1),
                (Domain::Style, 3),
                (Domain::Color, 2),
                (Domain::Landing, 2),
                (Domain::Typography, 2),
                (Domain::Reasoning, 2),
                (Domain::Ux, 3),
                (Domain::Chart, 2),
            ]
        );
        assert_eq!(config.stack_budget, 3);
        assert_eq!(config.primary_color.require_prefix.as_deref(), Some("#"));
    }

    #[test]
    fn test_partial_json_keeps_defaults() {
        let config = SystemConfig::from_json(
            r#"{ "font": { "domains": ["typography"], "fields": ["Body Font"], "default": "Roboto" } }"#,
        )
        .unwrap();
        assert_eq!(config.font.default, "Roboto");
        assert_eq!(config.font.require_prefix, None);
        assert_eq!(config.budgets, SystemConfig::default().budgets);
        assert_eq!(config.style, SystemConfig::default().style);
    }

    #[test]
    fn test_from_file_reports_bad_json() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("system.json");
        fs::write(&path, "{ not json").unwrap();

        match SystemConfig::from_file(&path) {
            Err(Error::InvalidConfig { path: p, .. }) => assert_eq!(p, path),
            other => panic!("expected InvalidConfig, got {other:?}"),
        }
    }

    #[test]
    fn test_from_file_missing_is_io_error() {
        let dir = tempfile::tempdir().unwrap();
        assert!(matches!(
            SystemConfig::from_file(&dir.path().join("absent.json")),
            Err(Error::Io { .. })
        ));
    }

    #[test]
    fn test_explicit_data_dir_wins() {
        assert_eq!(data_dir(Some(Path::new("/srv/db"))), PathBuf::from("/srv/db"));
    }
}
