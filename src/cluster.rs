// === Module Header (agents-tooling) START ===
// header: Parsed by scripts/check_module_headers.sh for purpose/role presence; keep keys on single-line entries.
// purpose: Fingerprint failures into normalized signatures, group them into ranked clusters, and derive remediation hints
// role: clustering
// inputs: Ordered FailureRecords from the normalizer; example limit
// outputs: FailureClusters (descending count) and sorted, de-duplicated hint strings
// invariants:
// - signature() is pure: messages (or title) → path placeholder → strip :<digits> → lowercase → bracket keywords
// - Grouping is exact string equality on signatures
// - Ties keep first-seen order (stable sort); examples keep arrival order, bounded by the limit
// tie_breakers: contracts > orchestration > correctness > performance > minimal_diffs
// === Module Header END ===

use std::collections::{BTreeSet, HashMap};

use once_cell::sync::Lazy;
use regex::Regex;

use crate::model::{ClusterExample, FailureCluster, FailureRecord};

pub const DEFAULT_EXAMPLE_LIMIT: usize = 2;
pub const UNKNOWN_SIGNATURE: &str = "[unknown]";
const WORKDIR_TOKEN: &str = "<WORKDIR>";

/// Failure-mode vocabulary, bracketed in this order.
pub const KEYWORDS: &[&str] = &[
  "timeout",
  "tocontaintext",
  "element(s) not found",
  "waiting for locator",
  "click",
  "authentication",
  "401",
];

pub const HINT_VISIBILITY_WAITS: &str =
  "Add explicit visibility waits before interacting with elements (e.g. await expect(locator).toBeVisible()).";
pub const HINT_SELECTORS: &str = "Verify selectors and ensure the target element renders before asserting on it.";
pub const HINT_CREDENTIALS: &str = "Check test credentials and session state (tokens, cookies, stored auth).";

// Absolute POSIX or drive-letter paths with at least one directory, starting at a token boundary.
static RE_ABS_PATH: Lazy<Regex> = Lazy::new(|| {
  Regex::new(r#"(^|[\s(\[{'"`=@])(?:[A-Za-z]:)?[/\\](?:[^\s/\\:()'"`<>]+[/\\])+[^\s/\\:()'"`<>]*"#).unwrap()
});
static RE_LINE_SUFFIX: Lazy<Regex> = Lazy::new(|| Regex::new(r":\d+").unwrap());

/// Normalized fingerprint of one failure.
pub fn signature(failure: &FailureRecord) -> String {
  let joined = failure
    .messages
    .iter()
    .map(|m| m.as_str())
    .filter(|m| !m.is_empty())
    .collect::<Vec<_>>()
    .join("\n");

  let base = if joined.trim().is_empty() { failure.title.as_str() } else { joined.as_str() };
  if base.trim().is_empty() {
    return UNKNOWN_SIGNATURE.to_string();
  }

  normalize_text(base)
}

fn normalize_text(text: &str) -> String {
  let replacement = format!("${{1}}{}", WORKDIR_TOKEN);
  let t = RE_ABS_PATH.replace_all(text, replacement.as_str());
  let t = RE_LINE_SUFFIX.replace_all(&t, "");
  let mut t = t.to_lowercase();

  for k in KEYWORDS {
    t = t.replace(k, &format!("[{}]", k));
  }

  let t = t.trim();
  if t.is_empty() {
    UNKNOWN_SIGNATURE.to_string()
  } else {
    t.to_string()
  }
}

/// Group failures by signature, largest cluster first.
pub fn cluster_failures(failures: &[FailureRecord], example_limit: usize) -> Vec<FailureCluster> {
  let mut slots: HashMap<String, usize> = HashMap::new();
  let mut clusters: Vec<FailureCluster> = Vec::new();

  for failure in failures {
    let sig = signature(failure);
    let slot = match slots.get(&sig) {
      Some(&i) => i,
      None => {
        slots.insert(sig.clone(), clusters.len());
        clusters.push(FailureCluster {
          signature: sig,
          count: 0,
          examples: Vec::new(),
        });
        clusters.len() - 1
      }
    };

    let cluster = &mut clusters[slot];
    cluster.count += 1;
    if cluster.examples.len() < example_limit {
      cluster.examples.push(ClusterExample {
        file: failure.file.clone(),
        line: failure.line,
        title: failure.title.clone(),
      });
    }
  }

  // Vec::sort_by is stable, so equal counts stay in first-seen order.
  clusters.sort_by(|a, b| b.count.cmp(&a.count));
  clusters
}

/// Remediation suggestions keyed by signature content, sorted and de-duplicated.
pub fn remediation_hints(clusters: &[FailureCluster]) -> Vec<String> {
  let mut hints: BTreeSet<&'static str> = BTreeSet::new();

  for sig in clusters.iter().map(|c| c.signature.as_str()) {
    let timeout = sig.contains("[timeout]");
    let click = sig.contains("[click]");
    let locator = sig.contains("[waiting for locator]");

    if timeout && (click || locator) {
      hints.insert(HINT_VISIBILITY_WAITS);
    }
    if sig.contains("[tocontaintext]") || sig.contains("element(s) not found") || locator {
      hints.insert(HINT_SELECTORS);
    }
    if sig.contains("[authentication]") || sig.contains("401") {
      hints.insert(HINT_CREDENTIALS);
    }
  }

  hints.into_iter().map(String::from).collect()
}
