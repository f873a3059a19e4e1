//! Project-level rollups over task collections.
//!
//! # Responsibility
//! - Sum per-task derived values into the totals every summary view renders.
//! - Keep rate parameters explicit arguments, never ambient state.
//!
//! # Invariants
//! - Rollups are order-independent up to floating-point rounding.
//! - An empty collection rolls up to zeroed totals, not an error.

use super::formula::{accuracy_audit_score, pci_units, verified_units};
use crate::model::settings::EstimateSettings;
use crate::model::task::Task;
use serde::{Deserialize, Serialize};

/// Totals for one task collection.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProjectSummary {
    pub task_count: usize,
    pub total_pci_units: f64,
    pub total_verified_units: f64,
    /// Project accuracy: ratio of verified to PCI totals, in percent, with
    /// the same zero guard as the per-task score.
    pub accuracy_score: f64,
    pub total_cost: f64,
    pub total_hours: f64,
}

/// Sums the verified cost of a task collection at the given hourly rate.
///
/// Per task, billable units are recovered from the accuracy score applied
/// back onto PCI units. Negative rates are passed through unguarded; rate
/// validation belongs to the settings boundary.
pub fn aggregate_cost(tasks: &[Task], hourly_rate: f64) -> f64 {
    let mut total = 0.0;
    for task in tasks {
        let pci = pci_units(&task.factors);
        let aas = accuracy_audit_score(task.ai_verified_units, pci);
        total += verified_units(aas, pci) * hourly_rate;
    }
    total
}

/// Rolls a task collection up into the totals shown by summary views.
pub fn summarize(tasks: &[Task], settings: &EstimateSettings) -> ProjectSummary {
    let mut total_pci = 0.0;
    let mut total_verified = 0.0;
    let mut total_cost = 0.0;

    for task in tasks {
        let pci = pci_units(&task.factors);
        let aas = accuracy_audit_score(task.ai_verified_units, pci);
        let units = verified_units(aas, pci);
        total_pci += pci;
        total_verified += units;
        total_cost += units * settings.hourly_rate;
    }

    ProjectSummary {
        task_count: tasks.len(),
        total_pci_units: total_pci,
        total_verified_units: total_verified,
        accuracy_score: accuracy_audit_score(total_verified, total_pci),
        total_cost,
        total_hours: total_verified * settings.unit_hour_ratio,
    }
}
