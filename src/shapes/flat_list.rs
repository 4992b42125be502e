// === Module Header (agents-tooling) START ===
// header: Parsed by scripts/check_module_headers.sh for purpose/role presence; keep keys on single-line entries.
// purpose: Bucket flat lists of test records by a status-like field into passed/failed counts
// role: shapes/flat-list
// inputs: Top-level array, or an object with a `tests`/`results`/`cases` array
// outputs: NormalizedReport with FlatList shape
// invariants:
// - Every object record counts toward total
// - Statuses outside both vocabularies count toward total only (never passed, never failed)
// - Explicit `failures` list wins over records synthesized from FAIL statuses
// tie_breakers: contracts > orchestration > correctness > performance > minimal_diffs
// === Module Header END ===

use serde_json::Value;

use crate::ext::serde_json::JsonFetch;
use crate::model::{NormalizedReport, ReportShape, RunSummary};
use crate::shapes::records::{explicit_failures, record_from_loose};

const STATUS_KEYS: &[&str] = &["status", "outcome", "state", "result"];
const LIST_KEYS: &[&str] = &["tests", "results", "cases"];

const PASS: &[&str] = &["passed", "ok", "success", "succeeded", "expected"];
const FAIL: &[&str] = &["failed", "fail", "broken", "error", "unexpected"];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StatusBucket {
  Pass,
  Fail,
  Other,
}

pub fn bucket(status: &str) -> StatusBucket {
  let s = status.trim().to_lowercase();
  if PASS.contains(&s.as_str()) {
    StatusBucket::Pass
  } else if FAIL.contains(&s.as_str()) {
    StatusBucket::Fail
  } else {
    StatusBucket::Other
  }
}

fn status_of(record: &Value) -> Option<String> {
  record.text_any(STATUS_KEYS)
}

fn has_status(items: &[Value]) -> bool {
  items.iter().any(|r| r.is_object() && status_of(r).is_some())
}

/// A top-level array, or the first keyed list whose records carry a status.
fn records(doc: &Value) -> Option<&[Value]> {
  if let Value::Array(items) = doc {
    return has_status(items).then_some(items.as_slice());
  }
  LIST_KEYS
    .iter()
    .filter_map(|k| doc.get(*k).and_then(Value::as_array))
    .map(Vec::as_slice)
    .find(|items| has_status(items))
}

pub fn detect(doc: &Value) -> Option<NormalizedReport> {
  let items = records(doc)?;

  let mut summary = RunSummary::default();
  let mut synthesized = Vec::new();

  for rec in items.iter().filter(|r| r.is_object()) {
    summary.total += 1;
    match status_of(rec).map(|s| bucket(&s)) {
      Some(StatusBucket::Pass) => summary.passed += 1,
      Some(StatusBucket::Fail) => {
        summary.failed += 1;
        synthesized.push(record_from_loose(rec));
      }
      _ => {}
    }
  }

  Some(NormalizedReport {
    shape: ReportShape::FlatList,
    summary,
    failures: explicit_failures(doc).unwrap_or(synthesized),
  })
}
