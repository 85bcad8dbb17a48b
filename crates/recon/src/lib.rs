//! `tiercheck-recon` — membership tier reconciliation engine.
//!
//! Pure engine crate: receives pre-loaded CSV text, returns structured
//! results. No file writes, no printing, no process exit handling.

pub mod engine;
pub mod error;
pub mod ingest;
pub mod model;
pub mod report;
pub mod tiers;
pub mod token;

pub use engine::run;
pub use error::ReconError;
pub use model::{Discrepancy, Member, ReconResult, ReconSummary, UpgradeTx};
