use assert_cmd::Command;
use test_support;

#[test]
fn gen_man_outputs_troff() {
  test_support::init_tracing();
  let mut cmd = test_support::cmd_bin("test-report-digest");
  let out = cmd.args(["--gen-man"]).output().unwrap();
  assert!(out.status.success());
  let text = String::from_utf8_lossy(&out.stdout);
  assert!(text.starts_with(".TH"), "expected troff man header");
  assert!(text.contains("examples"), "expected flags in man page");
}

#[test]
fn report_argument_is_required_without_gen_man() {
  Command::cargo_bin("test-report-digest")
    .unwrap()
    .assert()
    .code(2)
    .stderr(predicates::str::contains("<REPORT>"));
}
