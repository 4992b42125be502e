// === Module Header (agents-tooling) START ===
// header: Parsed by scripts/check_module_headers.sh for purpose/role presence; keep keys on single-line entries.
// purpose: Walk Playwright-style suite trees (suites → specs → tests → results) into spec outcomes and failure records
// role: shapes/suite-tree
// inputs: Top-level `suites` array of a report document
// outputs: SuiteTally (spec counts plus failures) and the SuiteTree shape matcher
// invariants:
// - Every nested suite is visited regardless of depth, parents before children
// - Spec outcome: explicit `ok` wins; else any failed result → failed; else any passed → passed; else failed
// - Unknown status is never counted as passing
// errors: None; missing fields are empty
// tie_breakers: contracts > orchestration > correctness > performance > minimal_diffs
// === Module Header END ===

use serde_json::Value;

use crate::ext::serde_json::JsonFetch;
use crate::model::{FailureRecord, NormalizedReport, ReportShape, RunSummary};
use crate::shapes::records::message_of;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SpecOutcome {
  Passed,
  /// Marked ok by the runner after at least one failed attempt.
  Flaky,
  Failed,
}

#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct SuiteTally {
  pub specs: u64,
  pub passed: u64,
  pub failed: u64,
  pub flaky: u64,
  pub failures: Vec<FailureRecord>,
}

/// Tally every spec reachable from the document's top-level `suites`.
pub fn walk_suites(doc: &Value) -> SuiteTally {
  let mut tally = SuiteTally::default();
  for suite in doc.fetch("suites").list() {
    walk(suite, &mut tally);
  }
  tally
}

fn walk(node: &Value, tally: &mut SuiteTally) {
  for spec in node.fetch("specs").list() {
    tally.specs += 1;
    match spec_outcome(spec) {
      SpecOutcome::Passed => tally.passed += 1,
      SpecOutcome::Flaky => {
        tally.passed += 1;
        tally.flaky += 1;
      }
      SpecOutcome::Failed => {
        tally.failed += 1;
        tally.failures.push(FailureRecord {
          title: spec.fetch("title").text().unwrap_or_default(),
          file: spec.fetch("file").text(),
          line: spec.fetch("line").line(),
          messages: failed_result_messages(spec),
        });
      }
    }
  }

  for child in node.fetch("suites").list() {
    walk(child, tally);
  }
}

pub fn spec_outcome(spec: &Value) -> SpecOutcome {
  let mut any_failed = false;
  let mut any_passed = false;

  for result in results(spec) {
    match result_status(result).as_deref() {
      Some("failed") => any_failed = true,
      Some("passed") => any_passed = true,
      _ => {}
    }
  }

  match spec.get("ok").and_then(Value::as_bool) {
    Some(true) if any_failed => SpecOutcome::Flaky,
    Some(true) => SpecOutcome::Passed,
    Some(false) => SpecOutcome::Failed,
    None if any_failed => SpecOutcome::Failed,
    None if any_passed => SpecOutcome::Passed,
    None => SpecOutcome::Failed,
  }
}

/// One message per failed result: `error.message`, else `error.stack`, else `errors[0].message`.
fn failed_result_messages(spec: &Value) -> Vec<String> {
  results(spec)
    .filter(|r| result_status(r).as_deref() == Some("failed"))
    .filter_map(|r| {
      let from_error = r.get("error").filter(|e| e.is_object()).and_then(message_of);
      from_error.or_else(|| r.fetch("errors").list().first().and_then(|e| e.fetch("message").text()))
    })
    .collect()
}

fn results(spec: &Value) -> impl Iterator<Item = &Value> {
  spec
    .fetch("tests")
    .list()
    .iter()
    .flat_map(|t| t.fetch("results").list().iter())
}

fn result_status(result: &Value) -> Option<String> {
  result.fetch("status").text().map(|s| s.to_lowercase())
}

/// Bare suite tree: counts come from the specs themselves.
pub fn detect(doc: &Value) -> Option<NormalizedReport> {
  if !doc.get("suites").is_some_and(Value::is_array) {
    return None;
  }

  let tally = walk_suites(doc);

  Some(NormalizedReport {
    shape: ReportShape::SuiteTree,
    summary: RunSummary {
      total: tally.specs,
      passed: tally.passed,
      failed: tally.failed,
      skipped: 0,
      flaky: tally.flaky,
    },
    failures: tally.failures,
  })
}
