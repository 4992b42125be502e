// === Module Header (agents-tooling) START ===
// header: Parsed by scripts/check_module_headers.sh for purpose/role presence; keep keys on single-line entries.
// purpose: Trait seams and dispatch for external sinks (text generation, chat webhook, issue tracker)
// role: integrations/namespace
// inputs: IntegrationSettings built at the process boundary; digest text, summary and clusters
// outputs: DispatchOutcome recording what each sink returned
// side_effects: Network calls through the HTTP implementations
// invariants:
// - Sink failures are logged and swallowed; they never abort the run or change the digest
// - An issue is only filed when the run has failures
// - Each HTTP call has a bounded timeout
// errors: anyhow errors from sinks, surfaced only as tracing warnings
// tie_breakers: contracts > orchestration > correctness > performance > minimal_diffs
// === Module Header END ===

pub mod jira;
pub mod openai;
pub mod slack;

use std::time::Duration;

use anyhow::Result;

use crate::model::{FailureCluster, RunSummary};
use crate::params::IntegrationSettings;
use crate::render;

const HTTP_TIMEOUT: Duration = Duration::from_secs(30);

// --- Trait seams for external sinks ---
pub trait TextGenerator {
  fn generate(&self, prompt: &str) -> Result<String>;
}

pub trait ChatNotifier {
  /// Post `text`; returns the HTTP status on success.
  fn notify(&self, text: &str) -> Result<u16>;
}

pub trait IssueTracker {
  /// File an issue; returns the created issue key.
  fn create_issue(&self, title: &str, description: &str) -> Result<String>;
}

/// Agent that hands non-2xx responses back to the caller instead of erroring.
pub(crate) fn http_agent() -> ureq::Agent {
  ureq::Agent::config_builder()
    .timeout_global(Some(HTTP_TIMEOUT))
    .http_status_as_error(false)
    .build()
    .into()
}

/// Which sinks the caller asked for.
#[derive(Debug, Clone, Copy, Default)]
pub struct SinkSelection {
  pub ai_summary: bool,
  pub notify: bool,
  pub jira: bool,
}

#[derive(Default)]
pub struct Sinks {
  pub generator: Option<Box<dyn TextGenerator>>,
  pub notifier: Option<Box<dyn ChatNotifier>>,
  pub tracker: Option<Box<dyn IssueTracker>>,
}

impl Sinks {
  /// HTTP-backed sinks for every selected and configured collaborator.
  pub fn from_settings(settings: &IntegrationSettings, selection: SinkSelection) -> Self {
    let mut sinks = Sinks::default();

    if selection.ai_summary {
      match &settings.openai {
        Some(s) => sinks.generator = Some(Box::new(openai::OpenAiGenerator::new(s.clone()))),
        None => tracing::warn!("OPENAI_API_KEY missing; skipping AI summary"),
      }
    }
    if selection.notify {
      match &settings.slack {
        Some(s) => sinks.notifier = Some(Box::new(slack::SlackWebhook::new(s.clone()))),
        None => tracing::warn!("SLACK_WEBHOOK_URL missing; skipping Slack notification"),
      }
    }
    if selection.jira {
      match &settings.jira {
        Some(s) => sinks.tracker = Some(Box::new(jira::JiraClient::new(s.clone()))),
        None => tracing::warn!("Jira credentials missing; skipping ticket creation"),
      }
    }

    sinks
  }
}

#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct DispatchOutcome {
  pub ai_summary: Option<String>,
  pub notified_status: Option<u16>,
  pub issue_key: Option<String>,
}

/// Fan the rendered digest out to the configured sinks, best-effort.
pub fn dispatch(sinks: &Sinks, summary: &RunSummary, clusters: &[FailureCluster], digest_text: &str) -> DispatchOutcome {
  let mut outcome = DispatchOutcome::default();

  if let Some(generator) = &sinks.generator {
    match generator.generate(&render::summary_prompt(digest_text)) {
      Ok(text) if !text.trim().is_empty() => outcome.ai_summary = Some(text.trim().to_string()),
      Ok(_) => tracing::warn!("text generation returned an empty summary"),
      Err(e) => tracing::warn!(error = %format!("{:#}", e), "text generation failed"),
    }
  }

  if let Some(notifier) = &sinks.notifier {
    let message = match &outcome.ai_summary {
      Some(ai) => format!("{}\n\n{}", ai, digest_text),
      None => digest_text.to_string(),
    };
    match notifier.notify(&message) {
      Ok(status) => {
        tracing::info!(status, "Slack notification sent");
        outcome.notified_status = Some(status);
      }
      Err(e) => tracing::warn!(error = %format!("{:#}", e), "Slack notification failed"),
    }
  }

  if let Some(tracker) = &sinks.tracker {
    if summary.failed > 0 {
      let title = render::ticket_title(clusters);
      match tracker.create_issue(&title, &render::ticket_description(digest_text)) {
        Ok(key) => {
          tracing::info!(key = %key, "Jira issue created");
          outcome.issue_key = Some(key);
        }
        Err(e) => tracing::warn!(error = %format!("{:#}", e), "Jira issue creation failed"),
      }
    } else {
      tracing::info!("no failures; skipping Jira issue");
    }
  }

  outcome
}
