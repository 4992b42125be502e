use std::process::ExitCode;

use anyhow::Result;
use clap::Parser;
use tracing_subscriber::EnvFilter;

use test_report_digest::cli::{normalize, Cli};
use test_report_digest::digest;
use test_report_digest::params::IntegrationSettings;
use test_report_digest::util;

/// Logs go to stderr so stdout stays a clean digest; `RUST_LOG` overrides the `warn` default.
fn init_tracing() {
  let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
  let _ = tracing_subscriber::fmt()
    .with_env_filter(filter)
    .with_writer(std::io::stderr)
    .with_target(false)
    .try_init();
}

fn main() -> Result<ExitCode> {
  let cli = Cli::parse();

  if cli.gen_man {
    let page = util::render_man_page::<Cli>()?;
    print!("{}", page);
    return Ok(ExitCode::SUCCESS);
  }

  init_tracing();

  // Phase 1: normalize CLI and load collaborator settings once
  let cfg = normalize(cli, std::env::var("GITHUB_STEP_SUMMARY").ok())?;
  let settings = IntegrationSettings::from_env();

  // Phase 2: digest the report and fan out to sinks
  let outcome = digest::run(&cfg, &settings)?;

  if outcome.has_failures() && cfg.fail_on_failures {
    return Ok(ExitCode::FAILURE);
  }
  Ok(ExitCode::SUCCESS)
}
