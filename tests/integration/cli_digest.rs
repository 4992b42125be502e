use predicates::prelude::*;
use test_support::{cmd_bin, fixture_path, read_fixture_text};

const BIN: &str = "test-report-digest";

#[test]
fn failing_report_prints_digest_and_exits_nonzero() {
  cmd_bin(BIN)
    .arg(fixture_path("playwright.json"))
    .assert()
    .code(1)
    .stdout(predicate::str::starts_with("✅ 5/10 passed • 3 failed\n1 skipped • 1 flaky\n"))
    .stdout(predicate::str::contains("Top issues"))
    .stdout(predicate::str::contains("(x2)"));
}

#[test]
fn no_fail_on_failures_keeps_exit_zero() {
  cmd_bin(BIN)
    .args([fixture_path("playwright.json").as_str(), "--no-fail-on-failures"])
    .assert()
    .success()
    .stdout(predicate::str::contains("3 failed"));
}

#[test]
fn green_run_is_a_single_line() {
  cmd_bin(BIN)
    .arg(fixture_path("all_green.json"))
    .assert()
    .success()
    .stdout(predicate::str::diff("✅ 3/3 passed • 0 failed\n"));
}

#[test]
fn report_can_come_from_stdin() {
  cmd_bin(BIN)
    .arg("-")
    .write_stdin(read_fixture_text("all_green.json"))
    .assert()
    .success()
    .stdout(predicate::str::starts_with("✅ 3/3 passed"));
}

#[test]
fn json_format_emits_digest_document() {
  let out = cmd_bin(BIN)
    .args([fixture_path("jest.json").as_str(), "--format", "json", "--max-examples", "1"])
    .output()
    .unwrap();
  assert_eq!(out.status.code(), Some(1));

  let v: serde_json::Value = serde_json::from_slice(&out.stdout).unwrap();
  assert_eq!(v["shape"], "counter_stats");
  assert_eq!(v["summary"]["failed"], 2);
  assert_eq!(v["clusters"][0]["count"], 2);
  assert_eq!(v["clusters"][0]["examples"].as_array().map(Vec::len), Some(1));
}

#[test]
fn unknown_shape_fails_with_keys_on_stderr() {
  cmd_bin(BIN)
    .arg(fixture_path("unknown.json"))
    .assert()
    .failure()
    .stdout(predicate::str::is_empty())
    .stderr(predicate::str::contains("top-level keys: bar, foo"));
}

#[test]
fn non_json_report_falls_back_to_build_log() {
  cmd_bin(BIN)
    .args([fixture_path("not_json.txt").as_str(), "--log", fixture_path("build.log").as_str()])
    .assert()
    .code(1)
    .stdout(predicate::str::diff("✅ 10/12 passed • 2 failed\n"));
}

#[test]
fn unreadable_log_is_ignored_for_json_reports() {
  cmd_bin(BIN)
    .args([fixture_path("all_green.json").as_str(), "--log", "/definitely/not/build.log"])
    .assert()
    .success()
    .stdout(predicate::str::diff("✅ 3/3 passed • 0 failed\n"));
}

#[test]
fn non_json_report_without_counts_is_an_error() {
  cmd_bin(BIN)
    .arg(fixture_path("not_json.txt"))
    .assert()
    .failure()
    .stderr(predicate::str::contains("no recognizable test counts"));
}

#[test]
fn missing_report_file_names_the_path() {
  cmd_bin(BIN)
    .arg("/definitely/not/here.json")
    .assert()
    .failure()
    .stderr(predicate::str::contains("/definitely/not/here.json"));
}

#[test]
fn step_summary_is_appended() {
  let td = test_support::tempdir();
  let summary = td.path().join("step_summary.md");
  std::fs::write(&summary, "## earlier step\n").unwrap();

  cmd_bin(BIN)
    .arg(fixture_path("all_green.json"))
    .env("GITHUB_STEP_SUMMARY", &summary)
    .assert()
    .success();

  let text = std::fs::read_to_string(&summary).unwrap();
  assert_eq!(text, "## earlier step\n✅ 3/3 passed • 0 failed\n");
}

#[test]
fn explicit_step_summary_flag_wins_over_env() {
  let td = test_support::tempdir();
  let from_env = td.path().join("env.md");
  let from_flag = td.path().join("flag.md");

  cmd_bin(BIN)
    .arg(fixture_path("all_green.json"))
    .arg("--step-summary")
    .arg(&from_flag)
    .env("GITHUB_STEP_SUMMARY", &from_env)
    .assert()
    .success();

  assert!(from_flag.exists());
  assert!(!from_env.exists());
}
