use anyhow::{bail, Context, Result};

use crate::integrations::{http_agent, ChatNotifier};
use crate::params::SlackSettings;

/// Slack incoming webhook.
pub struct SlackWebhook {
  settings: SlackSettings,
}

impl SlackWebhook {
  pub fn new(settings: SlackSettings) -> Self {
    Self { settings }
  }
}

impl ChatNotifier for SlackWebhook {
  fn notify(&self, text: &str) -> Result<u16> {
    let payload = serde_json::json!({ "text": text });

    let mut resp = http_agent()
      .post(&self.settings.webhook_url)
      .header("Content-Type", "application/json")
      .send_json(&payload)
      .context("posting to Slack webhook")?;

    let status = resp.status().as_u16();
    if (200..300).contains(&status) {
      return Ok(status);
    }

    let body = resp.body_mut().read_to_string().unwrap_or_default();
    bail!("Slack webhook returned HTTP {}: {}", status, body.trim())
  }
}
