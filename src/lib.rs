//! Reduce test-runner JSON reports (Playwright, Jest, Mocha and loose flat lists)
//! to pass/fail counts and ranked failure clusters, then hand a digest to
//! chat and issue-tracker sinks.

pub mod cli;
pub mod cluster;
pub mod digest;
pub mod error;
pub mod ext;
pub mod integrations;
pub mod log_scan;
pub mod model;
pub mod params;
pub mod render;
pub mod shapes;
pub mod util;

pub use cluster::{cluster_failures, remediation_hints, signature};
pub use error::ReportError;
pub use log_scan::scan_text_log;
pub use model::{ClusterExample, Digest, FailureCluster, FailureRecord, NormalizedReport, ReportShape, RunSummary};
pub use shapes::normalize;
