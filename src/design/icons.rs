// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Icon-library catalog lookups.
//!
//! The catalog is an ordinary table (`icon-libraries.csv`) read through the
//! same loader and cache as the search domains, but filtered by name rather
//! than ranked.

use std::sync::Arc;

use crate::corpus::{Document, Source};
use crate::search::Searcher;

pub const ICON_LIBRARIES_TABLE: &str = "icon-libraries.csv";

/// Catalog rows whose `name` contains `query` (case-insensitive), or every row
/// when `query` is `None`.
pub fn find_libraries(searcher: &Searcher, query: Option<&str>) -> Vec<Arc<Document>> {
    let catalog = searcher.collection(&Source::Table(ICON_LIBRARIES_TABLE.to_string()));
    let needle = query.map(str::to_lowercase);
    catalog
        .documents()
        .iter()
        .filter(|doc| match &needle {
            None => true,
            Some(needle) => doc
                .get("name")
                .is_some_and(|name| name.to_lowercase().contains(needle.as_str())),
        })
        .cloned()
        .collect()
}

fn field<'a>(doc: &'a Document, name: &str) -> &'a str {
    doc.get(name).unwrap_or_default()
}

/// Markdown overview table of every library.
pub fn format_table(libraries: &[Arc<Document>]) -> String {
    let mut lines = vec![
        "\n# Top Icon Libraries\n".to_string(),
        "| Name | Count | Type | Best For |".to_string(),
        "|---|---|---|---|".to_string(),
    ];
    for doc in libraries {
        lines.push(format!(
            "| {} | {} | {} | {} |",
            field(doc, "name"),
            field(doc, "count"),
            field(doc, "implementation_type"),
            field(doc, "best_for")
        ));
    }
    lines.push("\nRun `design-intel icons <name>` for details.\n".to_string());
    lines.join("\n")
}

/// Markdown detail sections for libraries matching `query`.
pub fn format_details(libraries: &[Arc<Document>], query: &str) -> String {
    let mut lines = vec![format!("\n# Icon Libraries Matching \"{query}\"\n")];
    for doc in libraries {
        lines.push(format!("## {}", field(doc, "name")));
        lines.push(format!("- **Count**: {}", field(doc, "count")));
        lines.push(format!("- **Type**: {}", field(doc, "implementation_type")));
        lines.push(format!("- **Best For**: {}", field(doc, "best_for")));
        lines.push(format!("- **Docs**: {}", field(doc, "docs_url")));
        lines.push(format!("- **CDN**: `{}`", field(doc, "cdn_url")));
        lines.push(String::new());
    }
    lines.join("\n")
}
