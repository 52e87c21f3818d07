// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Line-oriented UI code auditor.
//!
//! Each rule is a regex run against every line of a file. The accessibility
//! rules (`A0xx`) ignore case; the Tailwind/JSX rules (`AI0xx`) match utility
//! class names exactly.
//!
//! Some rules are about an attribute being *absent* from a tag ("`<img>`
//! without `alt=`"). Those capture the tag's attribute text and name a needle
//! that must not appear in it; a line fires if any match on it lacks the
//! needle. A rule that only needs "not followed by one character" consumes
//! that character with a negated class instead, e.g. `(?:\D|$)`.
//!
//! Findings come out rule-major, line-minor. The text and Markdown renderings
//! re-sort them critical-first for reading.

use std::fmt;
use std::fs;
use std::path::{Path, PathBuf};
use std::sync::LazyLock;

use chrono::Local;
use regex::{Regex, RegexBuilder};
use serde::Serialize;
use tracing::{debug, warn};

use crate::error::{Error, Result};

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Severity {
    Critical,
    Warning,
    Info,
}

impl Severity {
    pub fn name(self) -> &'static str {
        match self {
            Severity::Critical => "CRITICAL",
            Severity::Warning => "WARNING",
            Severity::Info => "INFO",
        }
    }

    pub fn icon(self) -> &'static str {
        match self {
            Severity::Critical => "🔴",
            Severity::Warning => "🟡",
            Severity::Info => "🔵",
        }
    }
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Static description of an audit rule.
#[derive(Debug, Clone, Copy)]
pub struct RuleSpec {
    pub id: &'static str,
    pub name: &'static str,
    pub pattern: &'static str,
    /// If set, the first capture group must NOT contain this.
    pub unless: Option<&'static str>,
    /// Applies to both `pattern` and `unless`.
    pub ignore_case: bool,
    pub severity: Severity,
    pub message: &'static str,
    pub fix: &'static str,
}

pub const RULE_SPECS: [RuleSpec; 18] = [
    RuleSpec {
        id: "A001",
        name: "missing-alt-text",
        pattern: r"<img([^>]*)>",
        unless: Some("alt="),
        ignore_case: true,
        severity: Severity::Critical,
        message: "Image missing alt attribute (WCAG 1.1.1)",
        fix: r#"Add alt="" for decorative images or descriptive alt text for informational images"#,
    },
    RuleSpec {
        id: "A002",
        name: "missing-aria-label",
        pattern: r"<button([^>]*)>\s*<(?:svg|img|i|span)",
        unless: Some("aria-label"),
        ignore_case: true,
        severity: Severity::Warning,
        message: "Icon-only button without aria-label",
        fix: "Add aria-label describing the button action",
    },
    RuleSpec {
        id: "A003",
        name: "hardcoded-color",
        pattern: r"(?:color|background|border):\s*#[0-9a-f]{3,8}",
        unless: None,
        ignore_case: true,
        severity: Severity::Info,
        message: "Hardcoded color value; use design tokens instead",
        fix: "Replace with CSS custom property: var(--color-primary-500)",
    },
    RuleSpec {
        id: "A004",
        name: "px-font-size",
        pattern: r"font-size:\s*\d+px",
        unless: None,
        ignore_case: true,
        severity: Severity::Warning,
        message: "Font size in px; use rem for accessibility",
        fix: "Convert to rem: 16px = 1rem",
    },
    RuleSpec {
        id: "A005",
        name: "magic-z-index",
        pattern: r"z-index:\s*(?:999|9999|99999)",
        unless: None,
        ignore_case: true,
        severity: Severity::Warning,
        message: "Magic z-index value; use a token scale",
        fix: "Define z-index tokens: --z-dropdown: 100, --z-modal: 200, --z-toast: 300",
    },
    RuleSpec {
        id: "A006",
        name: "important-override",
        pattern: r"!important",
        unless: None,
        ignore_case: true,
        severity: Severity::Warning,
        message: "!important override detected; indicates specificity issues",
        fix: "Refactor CSS specificity instead of using !important",
    },
    RuleSpec {
        id: "A007",
        name: "inline-style",
        pattern: r#"style=\{?\{[^}]+\}\}?|style="[^"]*""#,
        unless: None,
        ignore_case: true,
        severity: Severity::Info,
        message: "Inline style detected; extract to a CSS module or styled component",
        fix: "Move styles to an external stylesheet or CSS-in-JS",
    },
    RuleSpec {
        id: "A008",
        name: "missing-focus-visible",
        pattern: r":focus\s*\{[^}]*outline:\s*(?:none|0)",
        unless: None,
        ignore_case: true,
        severity: Severity::Critical,
        message: "Focus outline removed (WCAG 2.4.7)",
        fix: "Use :focus-visible instead and provide a visible focus indicator",
    },
    RuleSpec {
        id: "A009",
        name: "low-tap-target",
        pattern: r"(?:width|height|min-width|min-height):\s*(?:[1-3][0-9]|[0-9])px",
        unless: None,
        ignore_case: true,
        severity: Severity::Warning,
        message: "Potential low tap target; minimum 44px recommended",
        fix: "Ensure interactive elements are at least 44x44px",
    },
    RuleSpec {
        id: "A010",
        name: "missing-lang",
        pattern: r"<html([^>]*)",
        unless: Some("lang="),
        ignore_case: true,
        severity: Severity::Critical,
        message: "HTML element missing lang attribute",
        fix: r#"Add lang="en" (or the appropriate language) to <html>"#,
    },
    RuleSpec {
        id: "A011",
        name: "autoplaying-media",
        pattern: r"<(?:video|audio)[^>]*autoplay",
        unless: None,
        ignore_case: true,
        severity: Severity::Warning,
        message: "Autoplaying media may cause accessibility issues",
        fix: "Add the muted attribute or provide pause controls",
    },
    RuleSpec {
        id: "A012",
        name: "color-only-indicator",
        pattern: r"(?:color|background-color):\s*(?:red|green|#(?:f00|0f0|ff0000|00ff00))",
        unless: None,
        ignore_case: true,
        severity: Severity::Warning,
        message: "Color-only status indicator; add an icon or text for colorblind users",
        fix: "Add a supporting icon, text, or pattern to convey meaning",
    },
    RuleSpec {
        id: "AI001",
        name: "dynamic-class-interpolation",
        pattern: r"className=\{`[^`]*\$\{[^}]*\}[^`]*`\}",
        unless: None,
        ignore_case: false,
        severity: Severity::Critical,
        message: "Tailwind class interpolation; the JIT compiler cannot extract these classes",
        fix: "Use a safelist map object: className={colorMap[props.color]}",
    },
    RuleSpec {
        id: "AI005",
        name: "non-existent-utility",
        pattern: r"text-shadow-(?:sm|md|lg|xl)",
        unless: None,
        ignore_case: false,
        severity: Severity::Warning,
        message: r#"Utility "text-shadow" does not exist in Tailwind defaults"#,
        fix: "Use drop-shadow-md or a custom plugin",
    },
    RuleSpec {
        id: "AI008",
        name: "pseudo-transparency-contrast",
        pattern: r"bg-(?:black|white|slate-\d{3})/(?:10|20|30|40|50)(?:\D|$)",
        unless: None,
        ignore_case: false,
        severity: Severity::Warning,
        message: "Low contrast pseudo-transparency used on potential text background",
        fix: "Use glassmorphism: backdrop-filter: blur(4px) brightness(0.5)",
    },
    RuleSpec {
        id: "AI010",
        name: "arbitrary-calc-spacing",
        // an operator followed by anything but `_` inside w-[calc(...)]
        pattern: r"w-\[calc\([^\]]*[-+*/][^_\]][^\]]*\)\]",
        unless: None,
        ignore_case: false,
        severity: Severity::Critical,
        message: "Tailwind arbitrary value missing underscores in calc()",
        fix: "Replace spaces with underscores: w-[calc(100%_-_20px)]",
    },
    RuleSpec {
        id: "AI013",
        name: "vh-mobile-bug",
        pattern: r"(?:h|min-h)-screen",
        unless: None,
        ignore_case: false,
        severity: Severity::Warning,
        message: "h-screen causes layout shifts on mobile browsers (address bar resize)",
        fix: "Use dynamic viewport height: h-[100dvh]",
    },
    RuleSpec {
        id: "AI015",
        name: "target-blank-vuln",
        pattern: r#"target="_blank"([^>]*)"#,
        unless: Some("rel="),
        ignore_case: false,
        severity: Severity::Warning,
        message: r#"target="_blank" without rel="noopener noreferrer""#,
        fix: r#"Add rel="noopener noreferrer" to prevent tabnabbing"#,
    },
];

struct Rule {
    spec: RuleSpec,
    regex: Regex,
    unless: Option<String>,
}

impl Rule {
    fn compile(spec: RuleSpec) -> std::result::Result<Self, regex::Error> {
        let regex = RegexBuilder::new(spec.pattern)
            .case_insensitive(spec.ignore_case)
            .build()?;
        Ok(Rule {
            spec,
            regex,
            unless: spec.unless.map(|needle| spec.fold(needle)),
        })
    }

    fn fires_on(&self, line: &str) -> bool {
        match &self.unless {
            None => self.regex.is_match(line),
            Some(needle) => self.regex.captures_iter(line).any(|caps| {
                let attrs = caps.get(1).map_or("", |m| m.as_str());
                !self.spec.fold(attrs).contains(needle.as_str())
            }),
        }
    }
}

impl RuleSpec {
    fn fold(&self, text: &str) -> String {
        if self.ignore_case {
            text.to_lowercase()
        } else {
            text.to_string()
        }
    }
}

static RULES: LazyLock<Vec<Rule>> = LazyLock::new(|| {
    RULE_SPECS
        .iter()
        .filter_map(|spec| match Rule::compile(*spec) {
            Ok(rule) => Some(rule),
            Err(err) => {
                tracing::error!(rule = spec.id, error = %err, "audit rule failed to compile");
                None
            }
        })
        .collect()
});

const CODE_EXCERPT_CHARS: usize = 80;

/// One rule firing on one line.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Finding {
    pub rule_id: &'static str,
    pub rule_name: &'static str,
    pub severity: Severity,
    /// 1-based.
    pub line: usize,
    /// The trimmed line, cut to 80 characters.
    pub code: String,
    pub message: &'static str,
    pub fix: &'static str,
}

/// Run every rule over `source`.
pub fn audit_source(source: &str) -> Vec<Finding> {
    let lines: Vec<&str> = source.split('\n').collect();
    let mut findings = Vec::new();
    for rule in RULES.iter() {
        for (i, line) in lines.iter().enumerate() {
            if rule.fires_on(line) {
                findings.push(Finding {
                    rule_id: rule.spec.id,
                    rule_name: rule.spec.name,
                    severity: rule.spec.severity,
                    line: i + 1,
                    code: line.trim().chars().take(CODE_EXCERPT_CHARS).collect(),
                    message: rule.spec.message,
                    fix: rule.spec.fix,
                });
            }
        }
    }
    findings
}

/// Findings for one file.
#[derive(Debug, Clone, Serialize)]
pub struct AuditReport {
    pub file: String,
    pub findings: Vec<Finding>,
    pub count: usize,
}

impl AuditReport {
    pub fn new(file: impl Into<String>, findings: Vec<Finding>) -> Self {
        let count = findings.len();
        AuditReport {
            file: file.into(),
            findings,
            count,
        }
    }

    pub fn count_by(&self, severity: Severity) -> usize {
        self.findings
            .iter()
            .filter(|f| f.severity == severity)
            .count()
    }
}

pub fn audit_file(path: &Path) -> Result<AuditReport> {
    let source = fs::read_to_string(path).map_err(|e| Error::io(path, e))?;
    let findings = audit_source(&source);
    debug!(file = %path.display(), findings = findings.len(), "audited");
    Ok(AuditReport::new(path.display().to_string(), findings))
}

/// Expand shell-style globs (`src/**/*.tsx`).
///
/// A pattern that matches nothing, or is not a valid glob, is kept as a
/// literal path so the caller can report it as missing. Matches come back in
/// the order the glob walk yields them.
pub fn expand_patterns<P: AsRef<Path>>(patterns: &[P]) -> Vec<PathBuf> {
    let mut files = Vec::new();
    for pattern in patterns {
        let pattern = pattern.as_ref();
        let matches: Vec<PathBuf> = match glob::glob(&pattern.to_string_lossy()) {
            Ok(paths) => paths
                .filter_map(|entry| match entry {
                    Ok(path) => Some(path),
                    Err(err) => {
                        warn!(error = %err, "unreadable glob match");
                        None
                    }
                })
                .collect(),
            Err(err) => {
                debug!(pattern = %pattern.display(), error = %err, "not a glob; using literally");
                Vec::new()
            }
        };
        if matches.is_empty() {
            files.push(pattern.to_path_buf());
        } else {
            files.extend(matches);
        }
    }
    files
}

/// Reports for every file audited in one run.
#[derive(Debug, Clone, Default)]
pub struct AuditRun {
    pub reports: Vec<AuditReport>,
}

impl AuditRun {
    pub fn new() -> Self {
        AuditRun::default()
    }

    pub fn push(&mut self, report: AuditReport) {
        self.reports.push(report);
    }

    pub fn files_scanned(&self) -> usize {
        self.reports.len()
    }

    /// Findings across all files.
    pub fn total(&self) -> usize {
        self.reports.iter().map(|r| r.count).sum()
    }

    /// Reports with at least one finding.
    pub fn flagged(&self) -> impl Iterator<Item = &AuditReport> + '_ {
        self.reports.iter().filter(|r| r.count > 0)
    }
}

#[derive(Serialize)]
struct RunSummary {
    files: usize,
    issues: usize,
}

#[derive(Serialize)]
struct RunDocument<'a> {
    summary: RunSummary,
    details: Vec<&'a AuditReport>,
}

pub fn format_json(report: &AuditReport) -> Result<String> {
    Ok(serde_json::to_string_pretty(report)?)
}

/// `{summary: {files, issues}, details: [report...]}`; clean files are left
/// out of `details`.
pub fn format_run_json(run: &AuditRun) -> Result<String> {
    let document = RunDocument {
        summary: RunSummary {
            files: run.files_scanned(),
            issues: run.total(),
        },
        details: run.flagged().collect(),
    };
    Ok(serde_json::to_string_pretty(&document)?)
}

/// Text reports for every flagged file, or the all-clear line.
pub fn format_run_text(run: &AuditRun) -> String {
    if run.total() == 0 {
        return "\n  No issues found!".to_string();
    }
    run.flagged().map(format_text).collect::<Vec<_>>().join("\n")
}

fn critical_first(report: &AuditReport) -> Vec<&Finding> {
    let mut ordered: Vec<&Finding> = report.findings.iter().collect();
    ordered.sort_by_key(|f| (f.severity != Severity::Critical, f.line));
    ordered
}

/// Markdown report: a header block, then one table per flagged file.
pub fn format_markdown(run: &AuditRun) -> String {
    let mut out = String::from("# UI Design System Audit Report\n\n");
    out.push_str(&format!(
        "**Date:** {}\n",
        Local::now().format("%Y-%m-%d %H:%M:%S")
    ));
    out.push_str(&format!("**Files Scanned:** {}\n", run.files_scanned()));
    out.push_str(&format!("**Total Issues:** {}\n\n", run.total()));

    if run.total() == 0 {
        out.push_str("✅ **No issues found.**\n");
        return out;
    }

    for report in run.flagged() {
        out.push_str(&format!("## 📄 `{}`\n", report.file));
        out.push_str(&format!(
            "Summary: {} {} Critical | {} {} Warnings | {} {} Info\n\n",
            Severity::Critical.icon(),
            report.count_by(Severity::Critical),
            Severity::Warning.icon(),
            report.count_by(Severity::Warning),
            Severity::Info.icon(),
            report.count_by(Severity::Info)
        ));
        out.push_str("| Line | Severity | Rule | Message | Fix |\n");
        out.push_str("| :--- | :--- | :--- | :--- | :--- |\n");
        for finding in critical_first(report) {
            out.push_str(&format!(
                "| {} | {} {} | `{}` | {} <br> _Code:_ `{}` | {} |\n",
                finding.line,
                finding.severity.icon(),
                finding.severity,
                finding.rule_id,
                finding.message,
                finding.code.replace('|', "\\|"),
                finding.fix
            ));
        }
        out.push('\n');
    }
    out
}

/// Summary line, then findings with criticals first and by line within
/// each group.
pub fn format_text(report: &AuditReport) -> String {
    let mut lines = vec![
        format!("\n  UI AUDIT: {}", report.file),
        format!(
            "  {} critical | {} warnings | {} info",
            report.count_by(Severity::Critical),
            report.count_by(Severity::Warning),
            report.count_by(Severity::Info)
        ),
        String::new(),
    ];

    for finding in critical_first(report) {
        lines.push(format!(
            "  {} L{} [{}] {}",
            finding.severity.icon(),
            finding.line,
            finding.rule_id,
            finding.message
        ));
        lines.push(format!("     Code: {}", finding.code));
        lines.push(format!("     Fix:  {}", finding.fix));
        lines.push(String::new());
    }
    lines.join("\n")
}
