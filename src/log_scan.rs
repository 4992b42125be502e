// === Module Header (agents-tooling) START ===
// header: Parsed by scripts/check_module_headers.sh for purpose/role presence; keep keys on single-line entries.
// purpose: Best-effort run summary from a plain-text build log when no JSON report is available
// role: fallback/text-log
// inputs: Raw log text
// outputs: Option<RunSummary>; None when no count pattern matched
// invariants:
// - Only counts that were matched are reported; unmatched fields stay 0
// - total = "Running N tests" when present, else passed + failed
// - The last occurrence of each pattern wins (final reporter line)
// tie_breakers: contracts > orchestration > correctness > performance > minimal_diffs
// === Module Header END ===

use once_cell::sync::Lazy;
use regex::Regex;

use crate::model::RunSummary;

static RE_FAILED: Lazy<Regex> = Lazy::new(|| Regex::new(r"(?i)\b(\d+)\s+failed\b").unwrap());
static RE_PASSED: Lazy<Regex> = Lazy::new(|| Regex::new(r"(?i)\b(\d+)\s+passed\b").unwrap());
static RE_RUNNING: Lazy<Regex> = Lazy::new(|| Regex::new(r"(?i)\brunning\s+(\d+)\s+tests?\b").unwrap());

fn last_count(re: &Regex, text: &str) -> Option<u64> {
  re.captures_iter(text)
    .filter_map(|c| c.get(1).and_then(|m| m.as_str().parse::<u64>().ok()))
    .last()
}

pub fn scan_text_log(text: &str) -> Option<RunSummary> {
  let failed = last_count(&RE_FAILED, text);
  let passed = last_count(&RE_PASSED, text);
  let running = last_count(&RE_RUNNING, text);

  if failed.is_none() && passed.is_none() && running.is_none() {
    return None;
  }

  let failed = failed.unwrap_or(0);
  let passed = passed.unwrap_or(0);

  Some(RunSummary {
    total: running.unwrap_or(passed.saturating_add(failed)),
    passed,
    failed,
    skipped: 0,
    flaky: 0,
  })
}
