//! Unused PersistentVolumeClaim detection for unused-pvcs
//!
//! This crate turns the two cluster snapshots into a report: collecting the
//! claim names pods reference, finding the claims nobody references, and
//! writing them out.

mod detect;
mod report;
mod scan;
mod usage;

pub use detect::find_unused;
pub use report::Reporter;
pub use scan::{ScanError, ScanSummary, scan};
pub use usage::collect_used_claim_names;

// Re-export types used in our public API
pub use unused_pvcs_types::{ClaimInfo, PodInfo, UsedClaimNames};
