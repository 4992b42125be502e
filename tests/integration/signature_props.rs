use proptest::prelude::*;
use test_report_digest::{cluster_failures, signature, FailureRecord};

fn record(title: &str, message: String) -> FailureRecord {
  FailureRecord {
    title: title.to_string(),
    file: None,
    line: None,
    messages: vec![message],
  }
}

proptest! {
  // Failures that differ only in checkout path and line:column land in one cluster.
  #[test]
  fn path_and_line_do_not_split_clusters(
    dirs in prop::collection::vec("[a-z_]{1,8}", 1..4),
    line in 1u32..5000,
    col in 1u32..200,
  ) {
    let msg = format!("Error: boom at /{}/login.spec.ts:{}:{}", dirs.join("/"), line, col);
    prop_assert_eq!(signature(&record("t", msg)), "error: boom at <workdir>");
  }

  #[test]
  fn signatures_are_lowercase_trimmed_and_free_of_line_suffixes(msg in "[ -~]{0,80}") {
    let sig = signature(&record("fallback", msg));
    prop_assert!(!sig.is_empty());
    prop_assert_eq!(sig.trim(), sig.as_str());
    prop_assert_eq!(sig.to_lowercase(), sig.clone());
    let bytes = sig.as_bytes();
    for w in bytes.windows(2) {
      prop_assert!(!(w[0] == b':' && w[1].is_ascii_digit()), "line suffix left in {:?}", sig);
    }
  }

  #[test]
  fn clusters_account_for_every_failure(
    picks in prop::collection::vec(0usize..4, 0..40),
    limit in 0usize..4,
  ) {
    const MESSAGES: [&str; 4] = [
      "Timeout 30000ms exceeded",
      "401 Unauthorized",
      "expect(locator).toContainText(\"x\")",
      "boom",
    ];
    let failures: Vec<FailureRecord> = picks
      .iter()
      .enumerate()
      .map(|(i, p)| record(&format!("t{i}"), MESSAGES[*p].to_string()))
      .collect();

    let clusters = cluster_failures(&failures, limit);
    prop_assert_eq!(clusters.iter().map(|c| c.count).sum::<usize>(), failures.len());
    prop_assert!(clusters.windows(2).all(|w| w[0].count >= w[1].count));
    prop_assert!(clusters.iter().all(|c| c.examples.len() == c.count.min(limit)));
  }
}
