// === Module Header (agents-tooling) START ===
// header: Parsed by scripts/check_module_headers.sh for purpose/role presence; keep keys on single-line entries.
// purpose: Read counter-style reports: Mocha `stats` (tests/passes/failures/pending) and Jest top-level num* counters
// role: shapes/counter-stats
// invariants: Counters are taken verbatim; flaky is always 0; failures from an explicit `failures` list, else Jest assertion results
// tie_breakers: contracts > orchestration > correctness > performance > minimal_diffs
// === Module Header END ===

use serde_json::Value;

use crate::ext::serde_json::JsonFetch;
use crate::model::{FailureRecord, NormalizedReport, ReportShape, RunSummary};
use crate::shapes::has_any_key;
use crate::shapes::records::{explicit_failures, record_from_loose};

const MOCHA_KEYS: &[&str] = &["tests", "passes", "failures"];
const JEST_KEYS: &[&str] = &["numTotalTests", "numPassedTests", "numFailedTests"];

pub fn detect(doc: &Value) -> Option<NormalizedReport> {
  let summary = if let Some(stats) = doc.get("stats").filter(|s| has_any_key(s, MOCHA_KEYS)) {
    RunSummary {
      total: stats.fetch("tests").count(),
      passed: stats.fetch("passes").count(),
      failed: stats.fetch("failures").count(),
      skipped: stats.fetch("pending").count(),
      flaky: 0,
    }
  } else if has_any_key(doc, JEST_KEYS) {
    RunSummary {
      total: doc.fetch("numTotalTests").count(),
      passed: doc.fetch("numPassedTests").count(),
      failed: doc.fetch("numFailedTests").count(),
      skipped: doc.fetch("numPendingTests").count(),
      flaky: 0,
    }
  } else {
    return None;
  };

  let failures = explicit_failures(doc).unwrap_or_else(|| jest_failures(doc));

  Some(NormalizedReport {
    shape: ReportShape::CounterStats,
    summary,
    failures,
  })
}

/// Failed assertions from Jest's `testResults`; the suite path stands in for a missing file.
fn jest_failures(doc: &Value) -> Vec<FailureRecord> {
  let mut out = Vec::new();

  for suite in doc.fetch("testResults").list() {
    let suite_file = suite.text_any(&["name", "testFilePath"]);

    for assertion in suite.fetch("assertionResults").list() {
      let failed = assertion
        .fetch("status")
        .text()
        .is_some_and(|s| s.eq_ignore_ascii_case("failed"));
      if !failed {
        continue;
      }

      let mut rec = record_from_loose(assertion);
      if rec.file.is_none() {
        rec.file = suite_file.clone();
      }
      out.push(rec);
    }
  }

  out
}
