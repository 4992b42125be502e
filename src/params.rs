// === Module Header (agents-tooling) START ===
// header: Parsed by scripts/check_module_headers.sh for purpose/role presence; keep keys on single-line entries.
// purpose: Build render parameters from the effective CLI config and load collaborator settings once at the process boundary
// role: configuration/params
// inputs: EffectiveConfig; an environment lookup function
// outputs: RenderParams; IntegrationSettings with optional Slack/Jira/OpenAI sections
// invariants: Blank values count as unset; a section is present only when all of its required values are
// side_effects: from_env reads process environment (only there)
// tie_breakers: contracts > orchestration > correctness > performance > minimal_diffs
// === Module Header END ===

use crate::cli::EffectiveConfig;
use crate::render::RenderParams;

pub const DEFAULT_OPENAI_MODEL: &str = "gpt-4o-mini";
pub const DEFAULT_OPENAI_TEMPERATURE: f32 = 0.2;

pub fn build_render_params(cfg: &EffectiveConfig) -> RenderParams {
  RenderParams {
    max_examples: cfg.max_examples,
  }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SlackSettings {
  pub webhook_url: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct JiraSettings {
  pub base_url: String,
  pub user_email: String,
  pub api_token: String,
  pub project_key: String,
}

#[derive(Debug, Clone, PartialEq)]
pub struct OpenAiSettings {
  pub api_key: String,
  pub model: String,
  pub temperature: f32,
}

/// Collaborator configuration, constructed once and passed to constructors.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct IntegrationSettings {
  pub slack: Option<SlackSettings>,
  pub jira: Option<JiraSettings>,
  pub openai: Option<OpenAiSettings>,
}

impl IntegrationSettings {
  pub fn from_env() -> Self {
    Self::from_lookup(|k| std::env::var(k).ok())
  }

  pub fn from_lookup<F>(lookup: F) -> Self
  where
    F: Fn(&str) -> Option<String>,
  {
    let get = |k: &str| lookup(k).map(|v| v.trim().to_string()).filter(|v| !v.is_empty());

    let slack = get("SLACK_WEBHOOK_URL").map(|webhook_url| SlackSettings { webhook_url });

    let jira = match (
      get("JIRA_BASE_URL"),
      get("JIRA_USER_EMAIL"),
      get("JIRA_API_TOKEN"),
      get("JIRA_PROJECT_KEY"),
    ) {
      (Some(base_url), Some(user_email), Some(api_token), Some(project_key)) => Some(JiraSettings {
        base_url: base_url.trim_end_matches('/').to_string(),
        user_email,
        api_token,
        project_key,
      }),
      _ => None,
    };

    let openai = get("OPENAI_API_KEY").map(|api_key| OpenAiSettings {
      api_key,
      model: get("OPENAI_MODEL").unwrap_or_else(|| DEFAULT_OPENAI_MODEL.to_string()),
      temperature: get("OPENAI_TEMPERATURE")
        .and_then(|t| t.parse::<f32>().ok())
        .filter(|t| (0.0..=2.0).contains(t))
        .unwrap_or(DEFAULT_OPENAI_TEMPERATURE),
    });

    Self { slack, jira, openai }
  }
}
