// === Module Header (agents-tooling) START ===
// header: Parsed by scripts/check_module_headers.sh for purpose/role presence; keep keys on single-line entries.
// purpose: Build FailureRecords from loosely-shaped test objects shared by several report shapes
// role: shapes/records
// inputs: serde_json::Value test entries (flat list items, Mocha failures, explicit failures lists)
// outputs: FailureRecord with title/file/line/messages filled best-effort
// invariants: Never fails; messages are trimmed, non-empty and de-duplicated in first-seen order
// tie_breakers: contracts > orchestration > correctness > performance > minimal_diffs
// === Module Header END ===

use serde_json::Value;

use crate::ext::serde_json::{JsonCoerce, JsonFetch};
use crate::model::FailureRecord;

const TITLE_KEYS: &[&str] = &["fullTitle", "fullName", "title", "name"];
const FILE_KEYS: &[&str] = &["file", "location.file", "filePath"];
const LINE_KEYS: &[&str] = &["line", "location.line"];

/// Record for one entry of a loosely-typed test list.
///
/// Non-object entries become a record whose only message is the entry's text.
pub fn record_from_loose(entry: &Value) -> FailureRecord {
  if !entry.is_object() {
    return FailureRecord {
      title: String::new(),
      file: None,
      line: None,
      messages: entry.as_text().into_iter().collect(),
    };
  }

  FailureRecord {
    title: entry.text_any(TITLE_KEYS).unwrap_or_default(),
    file: entry.text_any(FILE_KEYS),
    line: entry.fetch_any(LINE_KEYS).line(),
    messages: loose_messages(entry),
  }
}

/// The top-level `failures` list, when the document carries one as an array.
pub fn explicit_failures(doc: &Value) -> Option<Vec<FailureRecord>> {
  match doc.get("failures") {
    Some(Value::Array(items)) => Some(items.iter().map(record_from_loose).collect()),
    _ => None,
  }
}

fn loose_messages(entry: &Value) -> Vec<String> {
  let mut out: Vec<String> = Vec::new();

  for m in entry.fetch("messages").list() {
    push_unique(&mut out, message_of(m));
  }
  push_unique(&mut out, entry.fetch("message").text());
  if let Some(err) = entry.get("error") {
    push_unique(&mut out, message_of(err));
  }
  if let Some(err) = entry.get("err") {
    push_unique(&mut out, message_of(err));
  }
  for e in entry.fetch("errors").list() {
    push_unique(&mut out, message_of(e));
  }
  for m in entry.fetch("failureMessages").list() {
    push_unique(&mut out, m.as_text());
  }

  out
}

/// Text of an error-ish value: a plain string, or an object's `message`, falling back to `stack`.
pub fn message_of(v: &Value) -> Option<String> {
  if v.is_object() {
    v.text_any(&["message", "stack"])
  } else {
    v.as_text()
  }
}

fn push_unique(out: &mut Vec<String>, msg: Option<String>) {
  if let Some(m) = msg {
    if !out.contains(&m) {
      out.push(m);
    }
  }
}
