use test_report_digest::digest::build_digest;
use test_report_digest::normalize;
use test_report_digest::render::{render_text, ticket_title, RenderParams};

fn playwright_digest() -> test_report_digest::Digest {
  let doc: serde_json::Value = test_support::read_fixture_json("playwright.json");
  build_digest(&normalize(&doc).unwrap(), 2)
}

#[test]
fn playwright_text_snapshot() {
  test_support::init_tracing();
  test_support::init_insta();

  let d = playwright_digest();
  let text = render_text(&d.summary, &d.clusters, &d.hints, &RenderParams { max_examples: 2 });

  insta::assert_snapshot!(text, @r"
  ✅ 5/10 passed • 3 failed
  1 skipped • 1 flaky

  Top issues
  1) [timeout] 30000ms exceeded [waiting for locator]('#submit') at <workdir> (x2)
     - checkout.spec.ts:40  checkout > pays with card
     - cart.spec.ts:17  cart > removes item
  2) request failed with status [401] unauthorized (x1)
     - auth.spec.ts:8  auth > rejects expired session

  Suggestions
  - Add explicit visibility waits before interacting with elements (e.g. await expect(locator).toBeVisible()).
  - Check test credentials and session state (tokens, cookies, stored auth).
  - Verify selectors and ensure the target element renders before asserting on it.
  ");
}

#[test]
fn playwright_json_snapshot() {
  test_support::init_insta();

  let d = playwright_digest();
  insta::assert_json_snapshot!(d.summary, @r#"
  {
    "total": 10,
    "passed": 5,
    "failed": 3,
    "skipped": 1,
    "flaky": 1
  }
  "#);
  let auth_cluster = &d.clusters[1];
  insta::assert_json_snapshot!(auth_cluster, @r#"
  {
    "signature": "request failed with status [401] unauthorized",
    "count": 1,
    "examples": [
      {
        "file": "auth.spec.ts",
        "line": 8,
        "title": "auth > rejects expired session"
      }
    ]
  }
  "#);
}

#[test]
fn ticket_title_names_the_largest_cluster() {
  let d = playwright_digest();
  assert_eq!(
    ticket_title(&d.clusters),
    "[Automation Failure] [timeout] 30000ms exceeded [waiting for locator]('#submit') at <workdir>"
  );
}
