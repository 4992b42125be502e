// === Module Header (agents-tooling) START ===
// header: Parsed by scripts/check_module_headers.sh for purpose/role presence; keep keys on single-line entries.
// purpose: Create Jira Cloud issues (REST v3) for failing runs
// role: integrations/jira
// inputs: JiraSettings (base URL, user email, API token, project key); title; plain-text description
// outputs: Created issue key
// side_effects: POST {base}/rest/api/3/issue with basic auth
// invariants: Description is wrapped in a single ADF paragraph; issue type is Bug; only HTTP 201 counts as created
// errors: Transport errors and non-201 statuses as anyhow errors carrying status and body
// tie_breakers: contracts > orchestration > correctness > performance > minimal_diffs
// === Module Header END ===

use anyhow::{bail, Context, Result};
use base64::Engine;
use serde_json::Value;

use crate::ext::serde_json::JsonFetch;
use crate::integrations::{http_agent, IssueTracker};
use crate::params::JiraSettings;

pub struct JiraClient {
  settings: JiraSettings,
}

impl JiraClient {
  pub fn new(settings: JiraSettings) -> Self {
    Self { settings }
  }

  fn basic_auth(&self) -> String {
    let raw = format!("{}:{}", self.settings.user_email, self.settings.api_token);
    format!("Basic {}", base64::engine::general_purpose::STANDARD.encode(raw))
  }
}

pub fn issue_payload(project_key: &str, title: &str, description: &str) -> Value {
  serde_json::json!({
    "fields": {
      "project": { "key": project_key },
      "summary": title,
      "description": {
        "type": "doc",
        "version": 1,
        "content": [
          {
            "type": "paragraph",
            "content": [{ "type": "text", "text": description }]
          }
        ]
      },
      "issuetype": { "name": "Bug" }
    }
  })
}

impl IssueTracker for JiraClient {
  fn create_issue(&self, title: &str, description: &str) -> Result<String> {
    let url = format!("{}/rest/api/3/issue", self.settings.base_url);
    let payload = issue_payload(&self.settings.project_key, title, description);

    let mut resp = http_agent()
      .post(&url)
      .header("Accept", "application/json")
      .header("Content-Type", "application/json")
      .header("Authorization", &self.basic_auth())
      .send_json(&payload)
      .with_context(|| format!("creating Jira issue at {}", url))?;

    let status = resp.status().as_u16();
    if status != 201 {
      let body = resp.body_mut().read_to_string().unwrap_or_default();
      bail!("Jira creation failed: HTTP {} {}", status, body.trim());
    }

    let created: Value = resp.body_mut().read_json().context("decoding Jira response")?;
    match created.fetch("key").text() {
      Some(key) => Ok(key),
      None => bail!("Jira response carried no issue key"),
    }
  }
}
