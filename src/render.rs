// === Module Header (agents-tooling) START ===
// header: Parsed by scripts/check_module_headers.sh for purpose/role presence; keep keys on single-line entries.
// purpose: Render a digest (summary + clusters + hints) as chat-friendly text or JSON, and derive ticket/prompt text
// role: rendering
// inputs: RunSummary, ranked FailureClusters, hint strings
// outputs: Text digest, pretty JSON digest, Jira title/description, text-generation prompt
// invariants:
// - Output is deterministic for identical inputs
// - Signature heads are single-line and cut on char boundaries
// - Unknown file/line render as "?"
// tie_breakers: contracts > orchestration > correctness > performance > minimal_diffs
// === Module Header END ===

use anyhow::Result;

use crate::model::{ClusterExample, Digest, FailureCluster, RunSummary};

const SIGNATURE_HEAD_CHARS: usize = 100;
const TICKET_TITLE_CHARS: usize = 80;

#[derive(Debug, Clone, Copy)]
pub struct RenderParams {
  /// Examples shown per cluster.
  pub max_examples: usize,
}

pub fn render_text(summary: &RunSummary, clusters: &[FailureCluster], hints: &[String], p: &RenderParams) -> String {
  let mut lines: Vec<String> = Vec::new();

  lines.push(format!(
    "✅ {}/{} passed • {} failed",
    summary.passed, summary.total, summary.failed
  ));
  if summary.skipped > 0 || summary.flaky > 0 {
    lines.push(format!("{} skipped • {} flaky", summary.skipped, summary.flaky));
  }

  if !clusters.is_empty() {
    lines.push(String::new());
    lines.push("Top issues".to_string());

    for (i, c) in clusters.iter().enumerate() {
      lines.push(format!("{}) {} (x{})", i + 1, one_line_head(&c.signature, SIGNATURE_HEAD_CHARS), c.count));
      for ex in c.examples.iter().take(p.max_examples) {
        lines.push(format!("   - {}  {}", location(ex), ex.title));
      }
    }
  }

  if !hints.is_empty() {
    lines.push(String::new());
    lines.push("Suggestions".to_string());
    for h in hints {
      lines.push(format!("- {}", h));
    }
  }

  lines.join("\n").trim().to_string()
}

pub fn render_json(digest: &Digest) -> Result<String> {
  Ok(serde_json::to_string_pretty(digest)?)
}

fn location(ex: &ClusterExample) -> String {
  let file = ex.file.as_deref().unwrap_or("?");
  match ex.line {
    Some(l) => format!("{}:{}", file, l),
    None => format!("{}:?", file),
  }
}

fn one_line_head(text: &str, max_chars: usize) -> String {
  text
    .split_whitespace()
    .collect::<Vec<_>>()
    .join(" ")
    .chars()
    .take(max_chars)
    .collect()
}

/// Issue title naming the largest cluster.
pub fn ticket_title(clusters: &[FailureCluster]) -> String {
  let head = clusters
    .first()
    .map(|c| one_line_head(&c.signature, TICKET_TITLE_CHARS))
    .unwrap_or_default();
  format!("[Automation Failure] {}", head).trim_end().to_string()
}

pub fn ticket_description(digest_text: &str) -> String {
  format!("{}\n\nDetected in latest test run.", digest_text)
}

/// Prompt handed to the text-generation collaborator.
pub fn summary_prompt(digest_text: &str) -> String {
  format!(
    "You are a QA assistant. Summarize this automated test run for the team in 3-5 sentences. \
     Name the most likely root causes and concrete next steps. Do not invent failures.\n\n{}",
    digest_text
  )
}
