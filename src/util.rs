// === Module Header (agents-tooling) START ===
// header: Parsed by scripts/check_module_headers.sh for purpose/role presence; keep keys on single-line entries.
// purpose: Utilities for paths, input reading, step-summary appends, and man page rendering
// role: utilities/helpers
// inputs: Paths ("-" for stdin); text; clap CommandFactory
// outputs: Canonicalized paths, input text, appended summary files, man page text
// side_effects: read_input reads files/stdin; append_step_summary appends to a file (creating it)
// invariants:
// - canonicalize_lossy always returns an absolute-looking path, even for missing files
// - append_step_summary never truncates existing content
// errors: IO errors bubble with path context
// tie_breakers: contracts > orchestration > correctness > performance > minimal_diffs
// === Module Header END ===

use std::io::{Read, Write};
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::CommandFactory;

pub fn canonicalize_lossy<P: AsRef<Path>>(p: P) -> String {
  let p = p.as_ref();
  let pb: PathBuf = match std::fs::canonicalize(p) {
    Ok(x) => x,
    Err(_) => match std::env::current_dir() {
      Ok(cwd) => cwd.join(p),
      Err(_) => PathBuf::from(p),
    },
  };
  pb.to_string_lossy().to_string()
}

/// Read a whole input as text; "-" means stdin.
pub fn read_input(path: &str) -> Result<String> {
  if path == "-" {
    let mut buf = String::new();
    std::io::stdin().read_to_string(&mut buf).context("reading report from stdin")?;
    return Ok(buf);
  }
  std::fs::read_to_string(path).with_context(|| format!("reading {}", path))
}

/// Append `text` plus a newline, as GitHub's step summary expects.
pub fn append_step_summary(path: &str, text: &str) -> Result<()> {
  let mut fh = std::fs::OpenOptions::new()
    .create(true)
    .append(true)
    .open(path)
    .with_context(|| format!("opening step summary {}", path))?;
  writeln!(fh, "{}", text).with_context(|| format!("writing step summary {}", path))?;
  Ok(())
}

/// Render a section-1 man page for a clap `CommandFactory` implementor.
/// Returns the troff content as a UTF-8 string.
pub fn render_man_page<T: CommandFactory>() -> anyhow::Result<String> {
  let cmd = T::command();
  let man = clap_mangen::Man::new(cmd);
  let mut buf: Vec<u8> = Vec::new();

  man.render(&mut buf)?;

  Ok(String::from_utf8_lossy(&buf).to_string())
}
