// === Module Header (agents-tooling) START ===
// header: Parsed by scripts/check_module_headers.sh for purpose/role presence; keep keys on single-line entries.
// purpose: Detect which known test-report shape a JSON document follows and normalize it into summary + failures
// role: shapes/namespace
// inputs: One decoded serde_json::Value (parsing bytes is the caller's job)
// outputs: NormalizedReport { shape, summary, failures }
// invariants:
// - Detection order is fixed: explicit summary, runner stats, counter stats, flat list, suite tree
// - First match wins; a document matching nothing is a ShapeDetection error, never a zero summary
// - Pure: the same input always yields the same output
// errors: ReportError::ShapeDetection carrying sorted top-level keys
// tie_breakers: contracts > orchestration > correctness > performance > minimal_diffs
// === Module Header END ===

pub mod counter_stats;
pub mod explicit_summary;
pub mod flat_list;
pub mod records;
pub mod runner_stats;
pub mod suite_tree;

use serde_json::Value;

use crate::error::ReportError;
use crate::model::NormalizedReport;

type Detector = fn(&Value) -> Option<NormalizedReport>;

/// Shape matchers in priority order.
const DETECTORS: &[Detector] = &[
  explicit_summary::detect,
  runner_stats::detect,
  counter_stats::detect,
  flat_list::detect,
  suite_tree::detect,
];

pub fn normalize(doc: &Value) -> Result<NormalizedReport, ReportError> {
  for detect in DETECTORS {
    if let Some(report) = detect(doc) {
      tracing::debug!(
        shape = report.shape.label(),
        total = report.summary.total,
        failures = report.failures.len(),
        "detected report shape"
      );
      return Ok(report);
    }
  }

  Err(ReportError::shape_detection(doc))
}

pub(crate) fn has_any_key(v: &Value, keys: &[&str]) -> bool {
  v.as_object().is_some_and(|m| keys.iter().any(|k| m.contains_key(*k)))
}
