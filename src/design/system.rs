// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Design-system generator: many small searches folded into one recommendation.
//!
//! One search per configured domain budget (plus the stack, if given) yields a
//! merged [`SearchResponse`]. Concepts are then read out of it through the
//! [`FieldPriority`] lists in [`SystemConfig`], and the derived artifacts
//! (tokens, palette, type scale) are generated from what was found.

use chrono::Local;
use serde::Serialize;
use tracing::{debug, warn};

use super::color::Rgb;
use super::palette::{self, Harmony, PaletteColor};
use super::tokens::{self, TokenOptions, TokenSet};
use super::typography::{self, TypeStep};
use crate::config::{FieldPriority, SystemConfig};
use crate::corpus::Domain;
use crate::error::Result;
use crate::search::format::round_to;
use crate::search::{SearchOptions, SearchResponse, Searcher, STACK_KEY};

const PALETTE_SIZE: usize = 5;
const TYPE_BASE_PX: f64 = 16.0;
const TYPE_RATIO: f64 = 1.25;
const TYPE_STEPS: usize = 8;

#[derive(Debug, Clone, Serialize)]
pub struct Meta {
    pub query: String,
    pub stack: Option<String>,
    /// RFC 3339, local time.
    pub generated_at: String,
    pub version: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct StyleSummary {
    pub name: String,
    pub primary_color: String,
    pub font_family: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ReasoningRule {
    pub category: String,
    pub pattern: String,
    pub anti_patterns: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct UxGuideline {
    pub category: String,
    pub issue: String,
    #[serde(rename = "do")]
    pub do_: String,
    pub dont: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct SourceScore {
    pub score: f64,
}

/// The generated recommendation.
#[derive(Debug, Clone, Serialize)]
pub struct DesignSystem {
    pub meta: Meta,
    pub style: StyleSummary,
    pub tokens: TokenSet,
    pub palette: Vec<PaletteColor>,
    pub type_scale: Vec<TypeStep>,
    pub reasoning: Vec<ReasoningRule>,
    pub ux_guidelines: Vec<UxGuideline>,
    /// Section → rounded hit scores, in merge order.
    #[serde(serialize_with = "ordered_sources::serialize")]
    pub search_sources: Vec<(String, Vec<SourceScore>)>,
}

// `search_sources` is an ordered map on the wire.
mod ordered_sources {
    use serde::ser::{SerializeMap, Serializer};

    use super::SourceScore;

    pub fn serialize<S: Serializer>(
        sources: &[(String, Vec<SourceScore>)],
        serializer: S,
    ) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(sources.len()))?;
        for (section, scores) in sources {
            map.serialize_entry(section, scores)?;
        }
        map.end()
    }
}

/// Builds [`DesignSystem`]s from a searcher and a config.
#[derive(Debug)]
pub struct SystemGenerator<'a> {
    searcher: &'a Searcher,
    config: SystemConfig,
}

impl<'a> SystemGenerator<'a> {
    pub fn new(searcher: &'a Searcher) -> Self {
        SystemGenerator::with_config(searcher, SystemConfig::default())
    }

    pub fn with_config(searcher: &'a Searcher, config: SystemConfig) -> Self {
        SystemGenerator { searcher, config }
    }

    pub fn config(&self) -> &SystemConfig {
        &self.config
    }

    /// Run every budgeted search and merge the hits: domains in budget order,
    /// then `stack`.
    pub fn gather(&self, query: &str, stack: Option<&str>) -> SearchResponse {
        let mut merged = SearchResponse::new();
        for budget in &self.config.budgets {
            let name = budget.domain.name();
            let options = SearchOptions::new()
                .domain(name)
                .max_results(budget.max_results);
            if let Some(hits) = self.searcher.search(query, &options).get(name) {
                merged.insert(name, hits.to_vec());
            }
        }
        if let Some(stack) = stack {
            merged.insert(
                STACK_KEY,
                self.searcher
                    .search_stack(query, stack, self.config.stack_budget),
            );
        }
        debug!(query, sections = merged.len(), "gathered design sources");
        merged
    }

    pub fn generate(&self, query: &str, stack: Option<&str>) -> Result<DesignSystem> {
        let results = self.gather(query, stack);

        let primary = self.primary_color(&results);
        let font = extract(&self.config.font, &results);
        let style_name = extract(&self.config.style, &results);

        let tokens = tokens::generate_all(&TokenOptions {
            primary: primary.clone(),
            font: font.clone(),
            ..TokenOptions::default()
        })?;
        let palette = palette::generate_palette(&primary, Harmony::Triadic, PALETTE_SIZE)?;
        let type_scale = typography::generate_scale(TYPE_BASE_PX, TYPE_RATIO, TYPE_STEPS);

        let search_sources = results
            .iter()
            .map(|(section, hits)| {
                let scores = hits
                    .iter()
                    .map(|hit| SourceScore {
                        score: round_to(hit.score, 3),
                    })
                    .collect();
                (section.to_string(), scores)
            })
            .collect();

        Ok(DesignSystem {
            meta: Meta {
                query: query.to_string(),
                stack: stack.map(str::to_string),
                generated_at: Local::now().to_rfc3339(),
                version: env!("CARGO_PKG_VERSION").to_string(),
            },
            style: StyleSummary {
                name: style_name,
                primary_color: primary,
                font_family: font,
            },
            tokens,
            palette,
            type_scale,
            reasoning: reasoning_rules(&results),
            ux_guidelines: ux_guidelines(&results),
            search_sources,
        })
    }

    /// The extracted primary, or the configured default if what was found does
    /// not parse as a color.
    fn primary_color(&self, results: &SearchResponse) -> String {
        let priority = &self.config.primary_color;
        let found = extract(priority, results);
        if Rgb::from_hex(&found).is_ok() {
            return found;
        }
        warn!(value = %found, "extracted primary color is not valid hex; using default");
        priority.default.clone()
    }
}

/// First matching value for `priority`, or its default.
pub fn extract(priority: &FieldPriority, results: &SearchResponse) -> String {
    priority
        .domains
        .iter()
        .filter_map(|domain| results.get(domain.name()))
        .flatten()
        .find_map(|hit| {
            priority.fields.iter().find_map(|field| {
                let raw = hit.document.get(field).filter(|v| !v.is_empty())?;
                let value = raw.trim().trim_matches('"');
                let accepted = !value.is_empty()
                    && priority
                        .require_prefix
                        .as_deref()
                        .map_or(true, |prefix| value.starts_with(prefix));
                accepted.then(|| value.to_string())
            })
        })
        .unwrap_or_else(|| priority.default.clone())
}

fn reasoning_rules(results: &SearchResponse) -> Vec<ReasoningRule> {
    results
        .get(Domain::Reasoning.name())
        .unwrap_or_default()
        .iter()
        .map(|hit| {
            let doc = &hit.document;
            ReasoningRule {
                category: doc.get("UI_Category").unwrap_or("General").to_string(),
                pattern: doc.get("Recommended_Pattern").unwrap_or_default().to_string(),
                anti_patterns: doc.get("Anti_Patterns").unwrap_or_default().to_string(),
            }
        })
        .collect()
}

fn ux_guidelines(results: &SearchResponse) -> Vec<UxGuideline> {
    results
        .get(Domain::Ux.name())
        .unwrap_or_default()
        .iter()
        .map(|hit| {
            let doc = &hit.document;
            UxGuideline {
                category: doc.get("Category").unwrap_or_default().to_string(),
                issue: doc.get("Issue").unwrap_or_default().to_string(),
                do_: doc.get("Do").unwrap_or_default().to_string(),
                dont: doc
                    .get("Don't")
                    .or_else(|| doc.get("Dont"))
                    .unwrap_or_default()
                    .to_string(),
            }
        })
        .collect()
}

pub fn format_json(system: &DesignSystem) -> Result<String> {
    Ok(serde_json::to_string_pretty(system)?)
}

/// Just the tokens, as CSS custom properties.
pub fn format_css(system: &DesignSystem) -> String {
    tokens::format_css(&system.tokens)
}

/// Short human summary.
pub fn format_text(system: &DesignSystem) -> String {
    [
        format!("  Design System: {}", system.style.name),
        format!("  Query: {}", system.meta.query),
        format!("  Stack: {}", system.meta.stack.as_deref().unwrap_or("any")),
        format!("  Primary: {}", system.style.primary_color),
        format!("  Font: {}", system.style.font_family),
        String::new(),
        format!("  Tokens: {} custom properties", system.tokens.len()),
        format!("  Palette: {} colors", system.palette.len()),
        format!("  Type Scale: {} steps", system.type_scale.len()),
        format!("  Reasoning Rules: {}", system.reasoning.len()),
        format!("  UX Guidelines: {}", system.ux_guidelines.len()),
    ]
    .join("\n")
}
