// === Module Header (agents-tooling) START ===
// header: Parsed by scripts/check_module_headers.sh for purpose/role presence; keep keys on single-line entries.
// purpose: Orchestrate one run: read report → normalize (JSON or text-log fallback) → cluster → render → step summary → sinks
// role: processing/orchestrator
// inputs: EffectiveConfig, IntegrationSettings
// outputs: Digest printed to stdout (text or JSON); RunOutcome with the failed count for exit-code decisions
// side_effects: Reads report/log files; appends step summary; network calls through sinks
// invariants:
// - A JSON report that matches no shape is an error; the text-log fallback only applies to non-JSON input
// - Step-summary and sink failures are logged, never fatal
// - The digest is printed before any sink is contacted
// errors: Input read errors and shape-detection errors propagate with context
// tie_breakers: contracts > orchestration > correctness > performance > minimal_diffs
// === Module Header END ===

use anyhow::{Context, Result};
use serde_json::Value;

use crate::cli::{EffectiveConfig, OutputFormat};
use crate::cluster::{cluster_failures, remediation_hints};
use crate::integrations::{dispatch, DispatchOutcome, Sinks};
use crate::log_scan::scan_text_log;
use crate::model::{Digest, NormalizedReport, ReportShape};
use crate::params::{build_render_params, IntegrationSettings};
use crate::render;
use crate::shapes;
use crate::util;

/// Normalize raw report text; non-JSON input falls back to scanning the build log (or the report itself).
///
/// `load_log` is only called on the fallback path, so a JSON report never touches the log.
pub fn normalize_input<F>(report_text: &str, load_log: F) -> Result<NormalizedReport>
where
  F: FnOnce() -> Result<Option<String>>,
{
  match serde_json::from_str::<Value>(report_text) {
    Ok(doc) => Ok(shapes::normalize(&doc)?),
    Err(parse_err) => {
      tracing::warn!(error = %parse_err, "report is not valid JSON; scanning build log for counts");
      let log_text = load_log()?;
      let text = log_text.as_deref().unwrap_or(report_text);

      match scan_text_log(text) {
        Some(summary) => Ok(NormalizedReport {
          shape: ReportShape::TextLog,
          summary,
          failures: Vec::new(),
        }),
        None => Err(
          anyhow::Error::new(parse_err)
            .context("report is not valid JSON and the build log has no recognizable test counts"),
        ),
      }
    }
  }
}

pub fn build_digest(report: &NormalizedReport, example_limit: usize) -> Digest {
  let clusters = cluster_failures(&report.failures, example_limit);
  let hints = remediation_hints(&clusters);

  Digest {
    shape: report.shape,
    summary: report.summary,
    clusters,
    hints,
  }
}

#[derive(Debug)]
pub struct RunOutcome {
  pub digest: Digest,
  pub dispatched: DispatchOutcome,
}

impl RunOutcome {
  pub fn has_failures(&self) -> bool {
    self.digest.summary.failed > 0
  }
}

pub fn run(cfg: &EffectiveConfig, settings: &IntegrationSettings) -> Result<RunOutcome> {
  // Phase 1: read inputs
  tracing::info!(report = %cfg.report, "reading test results");
  let report_text = util::read_input(&cfg.report)?;
  let load_log = || cfg.log.as_deref().map(util::read_input).transpose();

  // Phase 2: normalize and cluster
  let normalized = normalize_input(&report_text, load_log).with_context(|| format!("normalizing {}", cfg.report))?;
  let digest = build_digest(&normalized, cfg.max_examples);

  // Phase 3: render and print
  let text = render::render_text(&digest.summary, &digest.clusters, &digest.hints, &build_render_params(cfg));
  match cfg.format {
    OutputFormat::Text => println!("{}", text),
    OutputFormat::Json => println!("{}", render::render_json(&digest)?),
  }

  if let Some(path) = &cfg.step_summary {
    if let Err(e) = util::append_step_summary(path, &text) {
      tracing::warn!(error = %format!("{:#}", e), "could not write step summary");
    }
  }

  // Phase 4: external sinks (best-effort)
  let sinks = Sinks::from_settings(settings, cfg.sink_selection());
  let dispatched = dispatch(&sinks, &digest.summary, &digest.clusters, &text);

  Ok(RunOutcome { digest, dispatched })
}
