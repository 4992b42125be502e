use serde_json::Value;

use crate::ext::serde_json::JsonFetch;
use crate::model::{NormalizedReport, ReportShape, RunSummary};
use crate::shapes::records::explicit_failures;
use crate::shapes::{has_any_key, suite_tree};

const SUMMARY_KEYS: &[&str] = &["total", "passed", "failed", "tests", "passes", "failures"];

/// A `summary` object that states its own counts.
pub fn detect(doc: &Value) -> Option<NormalizedReport> {
  let summary = doc.get("summary").filter(|s| has_any_key(s, SUMMARY_KEYS))?;

  let failures = explicit_failures(doc).unwrap_or_else(|| suite_tree::walk_suites(doc).failures);

  Some(NormalizedReport {
    shape: ReportShape::ExplicitSummary,
    summary: RunSummary {
      total: summary.fetch_any(&["total", "tests"]).count(),
      passed: summary.fetch_any(&["passed", "passes"]).count(),
      failed: summary.fetch_any(&["failed", "failures"]).count(),
      skipped: summary.fetch_any(&["skipped", "pending"]).count(),
      flaky: summary.fetch("flaky").count(),
    },
    failures,
  })
}
