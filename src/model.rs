// === Module Header (agents-tooling) START ===
// header: Parsed by scripts/check_module_headers.sh for purpose/role presence; keep keys on single-line entries.
// purpose: Define the digest model (run summary, failure records, clusters) shared by normalization, clustering and rendering
// role: model/types
// outputs: Serializable structs with stable field names; optional fields skipped when absent
// invariants: RunSummary fields are non-negative; FailureCluster.count > 0; examples bounded by the caller's limit
// tie_breakers: contracts > orchestration > correctness > performance > minimal_diffs
// === Module Header END ===

use serde::{Deserialize, Serialize};

/// Canonical counts for one test run.
///
/// `total` follows the arithmetic of whichever shape was detected and is not
/// reconciled against the other fields.
#[derive(Debug, Serialize, Deserialize, Clone, Copy, Default, PartialEq, Eq)]
pub struct RunSummary {
  pub total: u64,
  pub passed: u64,
  pub failed: u64,
  pub skipped: u64,
  pub flaky: u64,
}

/// One failed test occurrence.
#[derive(Debug, Serialize, Deserialize, Clone, Default, PartialEq, Eq)]
pub struct FailureRecord {
  pub title: String,
  #[serde(skip_serializing_if = "Option::is_none")]
  pub file: Option<String>,
  #[serde(skip_serializing_if = "Option::is_none")]
  pub line: Option<u64>,
  #[serde(default, skip_serializing_if = "Vec::is_empty")]
  pub messages: Vec<String>,
}

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq)]
pub struct ClusterExample {
  #[serde(skip_serializing_if = "Option::is_none")]
  pub file: Option<String>,
  #[serde(skip_serializing_if = "Option::is_none")]
  pub line: Option<u64>,
  pub title: String,
}

/// Failures sharing one signature.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq)]
pub struct FailureCluster {
  pub signature: String,
  pub count: usize,
  pub examples: Vec<ClusterExample>,
}

/// Which known report layout a document was read as.
#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum ReportShape {
  ExplicitSummary,
  RunnerStats,
  CounterStats,
  FlatList,
  SuiteTree,
  TextLog,
}

impl ReportShape {
  pub fn label(self) -> &'static str {
    match self {
      ReportShape::ExplicitSummary => "explicit summary",
      ReportShape::RunnerStats => "runner stats",
      ReportShape::CounterStats => "counter stats",
      ReportShape::FlatList => "flat list",
      ReportShape::SuiteTree => "suite tree",
      ReportShape::TextLog => "text log",
    }
  }
}

/// Output of the normalizer.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq)]
pub struct NormalizedReport {
  pub shape: ReportShape,
  pub summary: RunSummary,
  pub failures: Vec<FailureRecord>,
}

/// The document emitted by `--format json`.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq)]
pub struct Digest {
  pub shape: ReportShape,
  pub summary: RunSummary,
  pub clusters: Vec<FailureCluster>,
  pub hints: Vec<String>,
}
