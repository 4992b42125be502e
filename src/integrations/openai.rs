use anyhow::{bail, Context, Result};
use serde_json::Value;

use crate::ext::serde_json::JsonFetch;
use crate::integrations::{http_agent, TextGenerator};
use crate::params::OpenAiSettings;

const OPENAI_CHAT_URL: &str = "https://api.openai.com/v1/chat/completions";

/// OpenAI chat completions, single user turn.
pub struct OpenAiGenerator {
  settings: OpenAiSettings,
  endpoint: String,
}

impl OpenAiGenerator {
  pub fn new(settings: OpenAiSettings) -> Self {
    Self {
      settings,
      endpoint: OPENAI_CHAT_URL.to_string(),
    }
  }

  /// Point at an OpenAI-compatible endpoint instead of api.openai.com.
  #[must_use]
  pub fn with_endpoint(mut self, endpoint: impl Into<String>) -> Self {
    self.endpoint = endpoint.into();
    self
  }

  fn request_body(&self, prompt: &str) -> Value {
    serde_json::json!({
      "model": self.settings.model,
      "temperature": self.settings.temperature,
      "messages": [{ "role": "user", "content": prompt }]
    })
  }
}

impl TextGenerator for OpenAiGenerator {
  fn generate(&self, prompt: &str) -> Result<String> {
    let mut resp = http_agent()
      .post(&self.endpoint)
      .header("Content-Type", "application/json")
      .header("Authorization", &format!("Bearer {}", self.settings.api_key))
      .send_json(&self.request_body(prompt))
      .context("calling chat completions")?;

    let status = resp.status().as_u16();
    if !(200..300).contains(&status) {
      let body = resp.body_mut().read_to_string().unwrap_or_default();
      bail!("chat completions returned HTTP {}: {}", status, body.trim());
    }

    let v: Value = resp.body_mut().read_json().context("decoding chat completions response")?;
    first_choice_text(&v).context("chat completions response carried no message content")
  }
}

fn first_choice_text(v: &Value) -> Option<String> {
  v.fetch("choices")
    .list()
    .first()
    .and_then(|c| c.fetch("message.content").text())
}
