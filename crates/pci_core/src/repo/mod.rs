//! Repository layer abstractions and the in-memory working set.
//!
//! # Responsibility
//! - Define use-case oriented data access contracts for tasks.
//! - Keep collection bookkeeping out of service/business orchestration.
//!
//! # Invariants
//! - Repository writes must enforce `Task::validate()` before mutating state.
//! - Repository APIs return semantic errors (`NotFound`, `DuplicateId`) in
//!   addition to validation failures.

pub mod task_repo;
