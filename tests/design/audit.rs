//! Auditing files on disk.

use std::fs;

use design_intel::design::audit::{
    expand_patterns, format_markdown, format_run_json, format_text, AuditRun,
};
use design_intel::design::{audit_file, Severity};
use design_intel::Error;

use crate::common::audit_fixture;

const FAILING: &str = r#"<html>
<body>
  <img src="hero.png">
  <button><svg viewBox="0 0 24 24"></svg></button>
  <div style="color: #ff0000; z-index: 9999">Alert</div>
</body>
</html>
"#;

const PASSING: &str = r#"<html lang="en">
<body>
  <img src="hero.png" alt="Team photo">
  <button aria-label="Close"><svg viewBox="0 0 24 24"></svg></button>
  <div class="alert">Alert</div>
</body>
</html>
"#;

#[test]
fn test_failing_file_reports_findings() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("page.html");
    fs::write(&path, FAILING).unwrap();

    let report = audit_file(&path).unwrap();
    let ids: Vec<&str> = report.findings.iter().map(|f| f.rule_id).collect();
    for id in ["A001", "A002", "A003", "A005", "A007", "A010"] {
        assert!(ids.contains(&id), "expected {id} in {ids:?}");
    }
    assert_eq!(report.count, report.findings.len());
    assert!(report.count_by(Severity::Critical) >= 2);

    let img = report.findings.iter().find(|f| f.rule_id == "A001").unwrap();
    assert_eq!(img.line, 3);
}

#[test]
fn test_passing_file_is_clean() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("page.html");
    fs::write(&path, PASSING).unwrap();

    let report = audit_file(&path).unwrap();
    assert!(report.findings.is_empty(), "{:?}", report.findings);
}

#[test]
fn test_text_lists_criticals_first() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("page.html");
    fs::write(&path, FAILING).unwrap();

    let text = format_text(&audit_file(&path).unwrap());
    let critical = text.find("[A010]").unwrap();
    let warning = text.find("[A002]").unwrap();
    assert!(critical < warning);
}

#[test]
fn test_missing_file_is_io_error() {
    let dir = tempfile::tempdir().unwrap();
    let err = audit_file(&dir.path().join("nope.tsx")).unwrap_err();
    assert!(matches!(err, Error::Io { .. }));
}

#[test]
fn test_tailwind_fixture_hits_every_rule_once() {
    let report = audit_file(&audit_fixture("failing.tsx")).unwrap();
    let found: Vec<(&str, usize)> = report.findings.iter().map(|f| (f.rule_id, f.line)).collect();
    assert_eq!(
        found,
        vec![
            ("AI001", 5),
            ("AI005", 9),
            ("AI008", 12),
            ("AI010", 15),
            ("AI013", 18),
            ("AI015", 21),
        ]
    );
    assert_eq!(report.count_by(Severity::Critical), 2);
    assert_eq!(report.count_by(Severity::Warning), 4);
}

#[test]
fn test_tailwind_fixture_fixed_is_clean() {
    let report = audit_file(&audit_fixture("passing.tsx")).unwrap();
    assert!(report.findings.is_empty(), "{:?}", report.findings);
}

#[test]
fn test_glob_run_over_fixtures() {
    let mut run = AuditRun::new();
    for path in expand_patterns(&[audit_fixture("*.tsx")]) {
        run.push(audit_file(&path).unwrap());
    }
    assert_eq!(run.files_scanned(), 2);
    assert_eq!(run.total(), 6);

    let value: serde_json::Value = serde_json::from_str(&format_run_json(&run).unwrap()).unwrap();
    assert_eq!(value["summary"]["issues"], 6);
    let flagged = value["details"].as_array().unwrap();
    assert_eq!(flagged.len(), 1);
    assert!(flagged[0]["file"].as_str().unwrap().ends_with("failing.tsx"));

    let md = format_markdown(&run);
    assert!(md.contains("**Files Scanned:** 2"));
    assert!(md.contains("Summary: 🔴 2 Critical | 🟡 4 Warnings | 🔵 0 Info"));
    assert!(!md.contains("passing.tsx"));
    // criticals lead the table
    assert!(md.find("`AI010`").unwrap() < md.find("`AI005`").unwrap());
}

