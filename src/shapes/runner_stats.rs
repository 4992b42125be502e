// === Module Header (agents-tooling) START ===
// header: Parsed by scripts/check_module_headers.sh for purpose/role presence; keep keys on single-line entries.
// purpose: Read Playwright-style `stats` counters (expected/unexpected/flaky/skipped) plus suite-tree failures
// role: shapes/runner-stats
// invariants:
// - passed = expected; failed = unexpected
// - total = expected + unexpected + flaky + skipped (approximate; flaky/skipped may overlap expected, kept as-is)
// - failures come from the suite tree, not from the counters
// tie_breakers: contracts > orchestration > correctness > performance > minimal_diffs
// === Module Header END ===

use serde_json::Value;

use crate::ext::serde_json::JsonFetch;
use crate::model::{NormalizedReport, ReportShape, RunSummary};
use crate::shapes::{has_any_key, suite_tree};

const COUNTER_KEYS: &[&str] = &["expected", "unexpected", "flaky", "skipped"];

pub fn detect(doc: &Value) -> Option<NormalizedReport> {
  let stats = doc.get("stats").filter(|s| has_any_key(s, COUNTER_KEYS))?;

  let expected = stats.fetch("expected").count();
  let unexpected = stats.fetch("unexpected").count();
  let flaky = stats.fetch("flaky").count();
  let skipped = stats.fetch("skipped").count();

  Some(NormalizedReport {
    shape: ReportShape::RunnerStats,
    summary: RunSummary {
      total: expected.saturating_add(unexpected).saturating_add(flaky).saturating_add(skipped),
      passed: expected,
      failed: unexpected,
      skipped,
      flaky,
    },
    failures: suite_tree::walk_suites(doc).failures,
  })
}
