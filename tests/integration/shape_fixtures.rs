use serde_json::Value;
use test_report_digest::cluster::{HINT_CREDENTIALS, HINT_SELECTORS, HINT_VISIBILITY_WAITS};
use test_report_digest::digest::{build_digest, normalize_input};
use test_report_digest::{normalize, ReportError, ReportShape, RunSummary};
use test_support::{read_fixture_json, read_fixture_text};

fn fixture(name: &str) -> Value {
  test_support::init_tracing();
  read_fixture_json(name)
}

#[test]
fn playwright_runner_stats_and_clusters() {
  let report = normalize(&fixture("playwright.json")).unwrap();
  assert_eq!(report.shape, ReportShape::RunnerStats);
  assert_eq!(
    report.summary,
    RunSummary { total: 10, passed: 5, failed: 3, skipped: 1, flaky: 1 }
  );

  let titles: Vec<&str> = report.failures.iter().map(|f| f.title.as_str()).collect();
  assert_eq!(
    titles,
    vec!["checkout > pays with card", "cart > removes item", "auth > rejects expired session"]
  );

  let digest = build_digest(&report, 2);
  assert_eq!(digest.clusters.len(), 2);
  assert_eq!(
    digest.clusters[0].signature,
    "[timeout] 30000ms exceeded [waiting for locator]('#submit') at <workdir>"
  );
  assert_eq!(digest.clusters[0].count, 2);
  assert_eq!(digest.clusters[1].signature, "request failed with status [401] unauthorized");
  assert_eq!(digest.hints, vec![HINT_VISIBILITY_WAITS, HINT_CREDENTIALS, HINT_SELECTORS]);
}

// Three levels of nesting with a single locator timeout.
#[test]
fn nested_suite_tree_yields_one_cluster() {
  let report = normalize(&fixture("suite_tree.json")).unwrap();
  assert_eq!(report.shape, ReportShape::SuiteTree);
  assert_eq!(
    report.summary,
    RunSummary { total: 2, passed: 1, failed: 1, skipped: 0, flaky: 0 }
  );

  let digest = build_digest(&report, 2);
  assert_eq!(digest.clusters.len(), 1);
  let cluster = &digest.clusters[0];
  assert!(cluster.signature.contains("[timeout]"));
  assert!(cluster.signature.contains("[waiting for locator]"));
  assert_eq!(cluster.examples[0].file.as_deref(), Some("login.spec.ts"));
  assert_eq!(cluster.examples[0].line, Some(21));
  assert_eq!(digest.hints, vec![HINT_VISIBILITY_WAITS, HINT_SELECTORS]);
}

#[test]
fn mocha_counters_with_failure_list() {
  let report = normalize(&fixture("mocha.json")).unwrap();
  assert_eq!(report.shape, ReportShape::CounterStats);
  assert_eq!(
    report.summary,
    RunSummary { total: 6, passed: 4, failed: 1, skipped: 1, flaky: 0 }
  );

  let digest = build_digest(&report, 2);
  assert_eq!(digest.clusters[0].signature, "expected 200 to equal [401]");
  assert_eq!(digest.hints, vec![HINT_CREDENTIALS]);
}

#[test]
fn jest_assertions_cluster_across_files() {
  let report = normalize(&fixture("jest.json")).unwrap();
  assert_eq!(report.shape, ReportShape::CounterStats);
  assert_eq!(report.summary.failed, 2);
  assert_eq!(report.failures[0].file.as_deref(), Some("/app/src/cart.test.ts"));
  assert_eq!(report.failures[0].line, Some(42));

  let digest = build_digest(&report, 1);
  assert_eq!(digest.clusters.len(), 1);
  assert_eq!(digest.clusters[0].count, 2);
  assert_eq!(digest.clusters[0].examples.len(), 1);
  assert!(digest.clusters[0].signature.contains("[tocontaintext]"));
}

#[test]
fn flat_list_buckets_statuses() {
  let report = normalize(&fixture("flat_list.json")).unwrap();
  assert_eq!(report.shape, ReportShape::FlatList);
  assert_eq!(
    report.summary,
    RunSummary { total: 5, passed: 2, failed: 2, skipped: 0, flaky: 0 }
  );

  let digest = build_digest(&report, 2);
  let sigs: Vec<&str> = digest.clusters.iter().map(|c| c.signature.as_str()).collect();
  assert_eq!(sigs, vec!["locator.[click]: [timeout] 10000ms exceeded", "[authentication] required"]);
  assert_eq!(digest.hints, vec![HINT_VISIBILITY_WAITS, HINT_CREDENTIALS]);
}

#[test]
fn explicit_summary_is_taken_verbatim() {
  let report = normalize(&fixture("explicit_summary.json")).unwrap();
  assert_eq!(report.shape, ReportShape::ExplicitSummary);
  assert_eq!(
    report.summary,
    RunSummary { total: 4, passed: 3, failed: 1, skipped: 0, flaky: 0 }
  );
  let digest = build_digest(&report, 2);
  assert_eq!(digest.hints, vec![HINT_SELECTORS]);
}

#[test]
fn unknown_shape_lists_sorted_keys() {
  let err = normalize(&fixture("unknown.json")).unwrap_err();
  assert_eq!(err, ReportError::ShapeDetection { keys: vec!["bar".into(), "foo".into()] });
}

#[test]
fn normalizing_twice_gives_identical_results() {
  for name in ["playwright.json", "suite_tree.json", "mocha.json", "jest.json", "flat_list.json"] {
    let doc = fixture(name);
    assert_eq!(normalize(&doc).unwrap(), normalize(&doc).unwrap(), "{name}");
  }
}

#[test]
fn build_log_fallback_reads_counts() {
  let report = normalize_input(&read_fixture_text("not_json.txt"), || Ok(Some(read_fixture_text("build.log")))).unwrap();
  assert_eq!(report.shape, ReportShape::TextLog);
  assert_eq!(
    report.summary,
    RunSummary { total: 12, passed: 10, failed: 2, skipped: 0, flaky: 0 }
  );
}
