// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Plain renderings of a [`SearchResponse`].
//!
//! Scores are rounded here and nowhere else. JSON puts `"score"` first and then
//! the document's fields in column order; a field literally named `score`
//! overwrites the rounded score in place.

use serde_json::{Map, Value};

use super::SearchResponse;
use crate::error::Result;

const RULE_WIDTH: usize = 60;

/// Round to `places` decimal digits, half away from zero.
pub fn round_to(value: f64, places: i32) -> f64 {
    let factor = 10f64.powi(places);
    (value * factor).round() / factor
}

/// `{ section: [ { "score": 0.123, <fields...> } ] }`, pretty-printed.
pub fn to_json_value(response: &SearchResponse) -> Value {
    let mut out = Map::new();
    for (section, hits) in response.iter() {
        let rows = hits
            .iter()
            .map(|hit| {
                let mut row = Map::new();
                row.insert("score".to_string(), Value::from(round_to(hit.score, 3)));
                for (field, value) in hit.document.fields() {
                    row.insert(field.clone(), Value::String(value.clone()));
                }
                Value::Object(row)
            })
            .collect();
        out.insert(section.to_string(), Value::Array(rows));
    }
    Value::Object(out)
}

pub fn format_json(response: &SearchResponse) -> Result<String> {
    Ok(serde_json::to_string_pretty(&to_json_value(response))?)
}

/// Human-readable listing: a ruled header per section, then each hit with its
/// non-blank fields.
pub fn format_text(response: &SearchResponse) -> String {
    let rule = "=".repeat(RULE_WIDTH);
    let mut lines: Vec<String> = Vec::new();

    for (section, hits) in response.iter() {
        lines.push(format!("\n{rule}"));
        lines.push(format!("  {} RESULTS", section.to_uppercase()));
        lines.push(rule.clone());
        for (i, hit) in hits.iter().enumerate() {
            lines.push(format!("\n  #{} (score: {:.3})", i + 1, hit.score));
            for (field, value) in hit.document.fields() {
                if !value.trim().is_empty() {
                    lines.push(format!("    {field}: {value}"));
                }
            }
        }
    }
    lines.join("\n")
}
