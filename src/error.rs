use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ReportError {
  /// No known report shape matched. `keys` are the document's top-level keys, sorted.
  #[error("unrecognized test report shape (top-level keys: {})", display_keys(.keys))]
  ShapeDetection { keys: Vec<String> },
}

fn display_keys(keys: &[String]) -> String {
  if keys.is_empty() {
    "(none)".to_string()
  } else {
    keys.join(", ")
  }
}

impl ReportError {
  pub fn shape_detection(doc: &serde_json::Value) -> Self {
    let mut keys: Vec<String> = doc
      .as_object()
      .map(|m| m.keys().cloned().collect())
      .unwrap_or_default();
    keys.sort();
    ReportError::ShapeDetection { keys }
  }
}
