//! Core domain logic for the PCI Engine.
//! This crate is the single source of truth for estimation invariants.

pub mod logging;
pub mod model;
pub mod repo;
pub mod scoring;
pub mod service;

pub use logging::{default_log_level, init_logging, logging_status};
pub use model::settings::{EstimateSettings, SettingsValidationError};
pub use model::task::{FactorSet, Task, TaskId, TaskOrigin, TaskValidationError};
pub use repo::task_repo::{
    MemoryTaskRepository, RepoError, RepoResult, TaskListQuery, TaskRepository,
};
pub use scoring::formula::{accuracy_audit_score, pci_units, verified_units};
pub use scoring::rollup::{aggregate_cost, summarize, ProjectSummary};
pub use service::estimate_service::{AuditReport, EstimateService, TaskAudit};

/// Minimal health-check API for early integration.
pub fn ping() -> &'static str {
    "pong"
}

/// Returns the core crate version.
pub fn core_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}
