use anyhow::{bail, Result};
use clap::{Parser, ValueEnum};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

use crate::cluster::DEFAULT_EXAMPLE_LIMIT;
use crate::integrations::SinkSelection;
use crate::util;

#[derive(Parser, Debug)]
#[command(
    name = "test-report-digest",
    version,
    about = "Digest a test-runner JSON report into failure clusters and forward it to Slack/Jira",
    long_about = None
)]
pub struct Cli {
  /// Path to the test report (Playwright/Jest/Mocha JSON); "-" reads stdin
  #[arg(required_unless_present = "gen_man")]
  pub report: Option<String>,

  /// Plain-text build log scanned for counts when the report is not valid JSON
  #[arg(long)]
  pub log: Option<PathBuf>,

  /// Examples listed per failure cluster
  #[arg(long, default_value_t = DEFAULT_EXAMPLE_LIMIT)]
  pub max_examples: usize,

  /// Output format for stdout
  #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
  pub format: OutputFormat,

  /// Post the digest to the Slack webhook in SLACK_WEBHOOK_URL
  #[arg(long)]
  pub notify: bool,

  /// File a Jira issue for failing runs (JIRA_BASE_URL, JIRA_USER_EMAIL, JIRA_API_TOKEN, JIRA_PROJECT_KEY)
  #[arg(long)]
  pub jira: bool,

  /// Prepend an AI-written summary to the Slack message (OPENAI_API_KEY)
  #[arg(long)]
  pub ai_summary: bool,

  /// Convenience: turn on --notify, --jira and --ai-summary.
  #[arg(long)]
  pub all_sinks: bool,

  /// Append the text digest to this file (default: $GITHUB_STEP_SUMMARY when set)
  #[arg(long)]
  pub step_summary: Option<PathBuf>,

  /// Exit 0 even when the report has failed tests
  #[arg(long)]
  pub no_fail_on_failures: bool,

  /// Emit a troff man page to stdout (internal; for packaging)
  #[arg(long, hide = true)]
  pub gen_man: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
  Text,
  Json,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct EffectiveConfig {
  pub report: String, // "-" or absolute path
  pub log: Option<String>,
  pub max_examples: usize,
  pub format: OutputFormat,
  pub notify: bool,
  pub jira: bool,
  pub ai_summary: bool,
  pub step_summary: Option<String>,
  pub fail_on_failures: bool,
}

impl EffectiveConfig {
  pub fn sink_selection(&self) -> SinkSelection {
    SinkSelection {
      ai_summary: self.ai_summary,
      notify: self.notify,
      jira: self.jira,
    }
  }
}

/// `step_summary_env` is the value of GITHUB_STEP_SUMMARY, passed in by the caller.
pub fn normalize(cli: Cli, step_summary_env: Option<String>) -> Result<EffectiveConfig> {
  let report = match cli.report.as_deref() {
    Some("-") => "-".to_string(),
    Some(p) if !p.trim().is_empty() => util::canonicalize_lossy(p),
    _ => bail!("Provide the path to a test report (or \"-\" for stdin)"),
  };

  let step_summary = cli
    .step_summary
    .as_deref()
    .map(util::canonicalize_lossy)
    .or_else(|| step_summary_env.filter(|s| !s.trim().is_empty()));

  Ok(EffectiveConfig {
    report,
    log: cli.log.as_deref().map(util::canonicalize_lossy),
    max_examples: cli.max_examples,
    format: cli.format,
    notify: cli.notify || cli.all_sinks,
    jira: cli.jira || cli.all_sinks,
    ai_summary: cli.ai_summary || cli.all_sinks,
    step_summary,
    fail_on_failures: !cli.no_fail_on_failures,
  })
}
