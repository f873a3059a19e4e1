//! PCI scoring and cost rollups.
//!
//! # Responsibility
//! - Compute PCI units and accuracy scores from task factors.
//! - Roll task collections up into project-level cost summaries.
//!
//! # Invariants
//! - Every function here is pure: no I/O, no shared state, no panics.
//! - PCI units are never negative.
//! - The accuracy score is exactly 0 when PCI units are 0.

pub mod formula;
pub mod rollup;
