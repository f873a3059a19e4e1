//! Estimation use-case service.
//!
//! # Responsibility
//! - Provide stable task CRUD entry points for core callers.
//! - Build the audit report every summary screen renders from one snapshot.
//!
//! # Invariants
//! - Service APIs never bypass repository validation contracts.
//! - Report rows and project totals come from the same task snapshot.

use crate::model::settings::EstimateSettings;
use crate::model::task::{Task, TaskId};
use crate::repo::task_repo::{RepoError, RepoResult, TaskListQuery, TaskRepository};
use crate::scoring::formula::{accuracy_audit_score, pci_units, verified_units};
use crate::scoring::rollup::{summarize, ProjectSummary};
use log::info;
use serde::Serialize;
use std::collections::BTreeSet;
use std::time::Instant;

/// Per-task derived row rendered by audit, proposal and portal screens.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TaskAudit {
    pub task_id: TaskId,
    pub task_name: String,
    pub reference_number: Option<String>,
    pub pci_units: f64,
    pub accuracy_audit_score: f64,
    pub verified_units: f64,
    pub cost: f64,
}

/// Audit report envelope: one row per task plus project totals.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AuditReport {
    pub rows: Vec<TaskAudit>,
    pub summary: ProjectSummary,
}

/// Use-case service wrapper for task management and reporting.
pub struct EstimateService<R: TaskRepository> {
    repo: R,
}

impl<R: TaskRepository> EstimateService<R> {
    /// Creates a service using the provided repository implementation.
    pub fn new(repo: R) -> Self {
        Self { repo }
    }

    /// Creates a new task through repository persistence.
    pub fn create_task(&mut self, task: &Task) -> RepoResult<TaskId> {
        self.repo.create_task(task)
    }

    /// Bulk-creates tasks arriving from upstream import flows.
    ///
    /// # Contract
    /// - Every task is validated and checked for id collisions (against the
    ///   working set and within the batch) before any write happens.
    /// - Returns created ids in input order.
    /// - On error, nothing has been created.
    pub fn import_tasks(&mut self, tasks: &[Task]) -> RepoResult<Vec<TaskId>> {
        let mut batch_ids = BTreeSet::new();
        for task in tasks {
            task.validate()?;
            if !batch_ids.insert(task.id) || self.repo.get_task(task.id)?.is_some() {
                return Err(RepoError::DuplicateId(task.id));
            }
        }

        let mut created = Vec::with_capacity(tasks.len());
        for task in tasks {
            created.push(self.repo.create_task(task)?);
        }

        info!(
            "event=task_import module=service status=ok task_count={}",
            created.len()
        );
        Ok(created)
    }

    /// Updates an existing task by stable ID.
    ///
    /// Returns repository-level not-found or validation errors unchanged.
    pub fn update_task(&mut self, task: &Task) -> RepoResult<()> {
        self.repo.update_task(task)
    }

    /// Gets one task by ID.
    pub fn get_task(&self, id: TaskId) -> RepoResult<Option<Task>> {
        self.repo.get_task(id)
    }

    /// Lists tasks using filter and pagination options.
    pub fn list_tasks(&self, query: &TaskListQuery) -> RepoResult<Vec<Task>> {
        self.repo.list_tasks(query)
    }

    /// Removes a task by ID.
    pub fn remove_task(&mut self, id: TaskId) -> RepoResult<()> {
        self.repo.remove_task(id)
    }

    /// Builds the audit report for the selected tasks.
    ///
    /// Rows and totals are derived from one listing snapshot, so a row-level
    /// sum always reconciles with the summary it ships with.
    pub fn audit_report(
        &self,
        query: &TaskListQuery,
        settings: &EstimateSettings,
    ) -> RepoResult<AuditReport> {
        let started_at = Instant::now();
        let tasks = self.repo.list_tasks(query)?;

        let rows = tasks
            .iter()
            .map(|task| audit_row(task, settings.hourly_rate))
            .collect();
        let summary = summarize(&tasks, settings);

        info!(
            "event=audit_report module=service status=ok task_count={} duration_ms={}",
            summary.task_count,
            started_at.elapsed().as_millis()
        );
        Ok(AuditReport { rows, summary })
    }
}

fn audit_row(task: &Task, hourly_rate: f64) -> TaskAudit {
    let pci = pci_units(&task.factors);
    let aas = accuracy_audit_score(task.ai_verified_units, pci);
    let units = verified_units(aas, pci);

    TaskAudit {
        task_id: task.id,
        task_name: task.task_name.clone(),
        reference_number: task.reference_number.clone(),
        pci_units: pci,
        accuracy_audit_score: aas,
        verified_units: units,
        cost: units * hourly_rate,
    }
}
