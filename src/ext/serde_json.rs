// === Module Header (agents-tooling) START ===
// header: Parsed by scripts/check_module_headers.sh for purpose/role presence; keep keys on single-line entries.
// purpose: Dotted-path lookup and lenient scalar coercion for loosely-typed report JSON
// role: extension/serde_json
// outputs: JsonFetch trait (path lookup) and JsonCoerce trait (count/text/list coercion)
// invariants: No panics; missing or mistyped values coerce to zero/empty, never to errors
// tie_breakers: contracts > orchestration > correctness > performance > minimal_diffs
// === Module Header END ===

use serde_json::Value;

/// Wrapper around a JSON location so coercion reads as a clear second step.
pub struct JsonFetched<'a> {
  inner: Option<&'a Value>,
}

impl<'a> JsonFetched<'a> {
  /// The raw value, when the path resolved.
  pub fn value(&self) -> Option<&'a Value> {
    self.inner
  }

  /// Coerced count; absent or non-numeric values yield 0.
  pub fn count(&self) -> u64 {
    self.inner.map(|v| v.as_count()).unwrap_or(0)
  }

  /// Non-empty text, when present.
  pub fn text(&self) -> Option<String> {
    self.inner.and_then(|v| v.as_text())
  }

  /// Positive line number, when present.
  pub fn line(&self) -> Option<u64> {
    self.inner.and_then(|v| v.as_line())
  }

  /// Array elements; anything that is not an array yields an empty slice.
  pub fn list(&self) -> &'a [Value] {
    self.inner.map(|v| v.as_list()).unwrap_or(&[])
  }
}

/// Extension to fetch nested values via dotted paths like "location.file".
pub trait JsonFetch {
  fn fetch(&self, path: &str) -> JsonFetched<'_>;

  /// First path in `paths` that resolves to a non-null value.
  fn fetch_any(&self, paths: &[&str]) -> JsonFetched<'_>;

  /// First path in `paths` holding non-blank text; blank strings fall through to the next path.
  fn text_any(&self, paths: &[&str]) -> Option<String>;
}

impl JsonFetch for Value {
  fn fetch(&self, path: &str) -> JsonFetched<'_> {
    if path.is_empty() {
      return JsonFetched { inner: Some(self) };
    }

    let mut cur = self;

    for key in path.split('.') {
      match cur.get(key) {
        Some(next) => cur = next,
        None => return JsonFetched { inner: None },
      }
    }

    JsonFetched { inner: Some(cur) }
  }

  fn fetch_any(&self, paths: &[&str]) -> JsonFetched<'_> {
    for path in paths {
      let found = self.fetch(path);
      if found.inner.is_some_and(|v| !v.is_null()) {
        return found;
      }
    }
    JsonFetched { inner: None }
  }

  fn text_any(&self, paths: &[&str]) -> Option<String> {
    paths.iter().find_map(|path| self.fetch(path).text())
  }
}

/// The single place where report fields are coerced into counts and text.
pub trait JsonCoerce {
  /// Counts: integers as-is, floats truncated, numeric strings parsed,
  /// `true` as 1; negatives, null and everything else as 0.
  fn as_count(&self) -> u64;

  /// Strings trimmed (empty → None); numbers and booleans rendered.
  fn as_text(&self) -> Option<String>;

  /// Like `as_count` but 0 means "no line".
  fn as_line(&self) -> Option<u64>;

  fn as_list(&self) -> &[Value];
}

impl JsonCoerce for Value {
  fn as_count(&self) -> u64 {
    match self {
      Value::Number(n) => {
        if let Some(u) = n.as_u64() {
          u
        } else if let Some(f) = n.as_f64() {
          if f.is_finite() && f > 0.0 {
            f.trunc() as u64
          } else {
            0
          }
        } else {
          0
        }
      }
      Value::String(s) => {
        let t = s.trim();
        t.parse::<u64>()
          .ok()
          .or_else(|| t.parse::<f64>().ok().filter(|f| f.is_finite() && *f > 0.0).map(|f| f.trunc() as u64))
          .unwrap_or(0)
      }
      Value::Bool(true) => 1,
      _ => 0,
    }
  }

  fn as_text(&self) -> Option<String> {
    match self {
      Value::String(s) => {
        let t = s.trim();
        if t.is_empty() {
          None
        } else {
          Some(t.to_string())
        }
      }
      Value::Number(n) => Some(n.to_string()),
      Value::Bool(b) => Some(b.to_string()),
      _ => None,
    }
  }

  fn as_line(&self) -> Option<u64> {
    match self.as_count() {
      0 => None,
      n => Some(n),
    }
  }

  fn as_list(&self) -> &[Value] {
    match self {
      Value::Array(items) => items.as_slice(),
      _ => &[],
    }
  }
}
