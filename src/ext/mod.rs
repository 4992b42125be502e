// === Module Header (agents-tooling) START ===
// header: Parsed by scripts/check_module_headers.sh for purpose/role presence; keep keys on single-line entries.
// purpose: Extension traits that let shape detectors read loosely-typed report JSON without ad-hoc matching
// role: module/aggregation
// outputs: `serde_json` submodule with JsonFetch (dotted-path lookup) and JsonCoerce (count/text coercion)
// invariants: Lookups never panic and never allocate unless text is produced
// tie_breakers: contracts > orchestration > correctness > performance > minimal_diffs
// === Module Header END ===

pub mod serde_json;
