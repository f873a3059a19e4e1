//! Task domain model.
//!
//! # Responsibility
//! - Define the canonical task record shared by audit, proposal and portal
//!   projections.
//! - Group the eleven estimation factors in one value type.
//! - Provide write-boundary validation for upstream data-entry flows.
//!
//! # Invariants
//! - `id` is stable and never reused for another task.
//! - Factor values carry no enforced bounds; negatives are legal input.
//! - Scored values are computed from factors on demand, never stored.

use crate::scoring::formula;
use serde::{Deserialize, Serialize};
use std::error::Error;
use std::fmt::{Display, Formatter};
use uuid::Uuid;

/// Stable identifier for every task managed by the core.
///
/// Kept as a type alias to make semantic intent explicit in signatures.
pub type TaskId = Uuid;

/// How a task entered the working set.
///
/// The surrounding application feeds tasks in through several entry flows;
/// audit views distinguish them, so provenance is recorded on the record.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TaskOrigin {
    /// Entered by hand in the task editor.
    Manual,
    /// Arrived through the spreadsheet import flow.
    CsvImport,
    /// Instantiated from a saved estimate template.
    Template,
    /// Produced by the assistant's task-generation flow.
    AiGenerated,
}

/// The eleven estimation factors feeding the PCI formula.
///
/// Each value is a plain score, semantically scaled roughly 0-10. Bounds are
/// not enforced here: out-of-range values are a data-quality concern for the
/// entry flows, not for the model.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct FactorSet {
    /// Implementation Scope Rating.
    pub isr: f64,
    /// Complexity Factor.
    pub cf: f64,
    /// User Experience Impact.
    pub uxi: f64,
    /// Resource Consumption Factor.
    pub rcf: f64,
    /// Architectural Effort Points.
    pub aep: f64,
    /// Learning Curve. Discounts effort; see the formula module.
    pub l: f64,
    /// Maintenance Workload.
    pub mlw: f64,
    /// Code Generation Weight.
    pub cgw: f64,
    /// Risk Factor.
    pub rf: f64,
    /// Skill Level.
    pub s: f64,
    /// Global Resource Index.
    pub glri: f64,
}

impl FactorSet {
    /// Checks that every factor holds a finite value.
    ///
    /// Returns the first offending factor by name so entry flows can point
    /// the user at the broken field.
    pub fn validate(&self) -> Result<(), TaskValidationError> {
        let named = [
            ("isr", self.isr),
            ("cf", self.cf),
            ("uxi", self.uxi),
            ("rcf", self.rcf),
            ("aep", self.aep),
            ("l", self.l),
            ("mlw", self.mlw),
            ("cgw", self.cgw),
            ("rf", self.rf),
            ("s", self.s),
            ("glri", self.glri),
        ];
        for (factor, value) in named {
            if !value.is_finite() {
                return Err(TaskValidationError::NonFiniteFactor { factor, value });
            }
        }
        Ok(())
    }
}

/// Validation failures raised at the repository write boundary.
///
/// The scoring layer itself never validates: it is total over `f64` input.
/// These checks exist so broken records from entry flows are rejected before
/// they enter the working set.
#[derive(Debug, Clone, PartialEq)]
pub enum TaskValidationError {
    /// Task id is the nil UUID.
    NilId,
    /// Task name is empty after trimming.
    BlankTaskName,
    /// A factor holds NaN or an infinity.
    NonFiniteFactor { factor: &'static str, value: f64 },
    /// Verified units hold NaN or an infinity.
    NonFiniteVerifiedUnits { value: f64 },
}

impl Display for TaskValidationError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::NilId => write!(f, "task id must not be nil"),
            Self::BlankTaskName => write!(f, "task name must not be blank"),
            Self::NonFiniteFactor { factor, value } => {
                write!(f, "factor `{factor}` must be finite, got {value}")
            }
            Self::NonFiniteVerifiedUnits { value } => {
                write!(f, "ai verified units must be finite, got {value}")
            }
        }
    }
}

impl Error for TaskValidationError {}

/// Canonical record for one estimated task.
///
/// Serialized with the surrounding application's camelCase wire keys; the
/// factor block is flattened so factor names stay top-level on the record.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Task {
    /// Stable global ID used for linking and auditing.
    pub id: TaskId,
    /// Human-readable label shown in every view.
    pub task_name: String,
    /// Optional human-assigned reference string.
    #[serde(default)]
    pub reference_number: Option<String>,
    /// Which entry flow produced this task.
    pub origin: TaskOrigin,
    /// The eleven formula inputs.
    #[serde(flatten)]
    pub factors: FactorSet,
    /// Externally verified effort units, supplied independently of the
    /// formula inputs.
    pub ai_verified_units: f64,
}

impl Task {
    /// Creates a new task with a generated stable ID.
    ///
    /// Factors and verified units start at zero; entry flows fill them in
    /// before the task is persisted.
    pub fn new(origin: TaskOrigin, task_name: impl Into<String>) -> Self {
        Self::with_id(Uuid::new_v4(), origin, task_name)
    }

    /// Creates a new task with a caller-provided stable ID.
    ///
    /// Used by import paths where identity already exists externally. The
    /// provided `id` must remain stable for this task's lifetime; nil ids are
    /// rejected by [`Task::validate`] at the write boundary.
    pub fn with_id(id: TaskId, origin: TaskOrigin, task_name: impl Into<String>) -> Self {
        Self {
            id,
            task_name: task_name.into(),
            reference_number: None,
            origin,
            factors: FactorSet::default(),
            ai_verified_units: 0.0,
        }
    }

    /// Checks identity, label and numeric-quality invariants.
    ///
    /// # Errors
    /// - [`TaskValidationError::NilId`] for the nil UUID.
    /// - [`TaskValidationError::BlankTaskName`] for a name that trims empty.
    /// - [`TaskValidationError::NonFiniteFactor`] for NaN/infinite factors.
    /// - [`TaskValidationError::NonFiniteVerifiedUnits`] likewise for the
    ///   verified-units field.
    pub fn validate(&self) -> Result<(), TaskValidationError> {
        if self.id.is_nil() {
            return Err(TaskValidationError::NilId);
        }
        if self.task_name.trim().is_empty() {
            return Err(TaskValidationError::BlankTaskName);
        }
        self.factors.validate()?;
        if !self.ai_verified_units.is_finite() {
            return Err(TaskValidationError::NonFiniteVerifiedUnits {
                value: self.ai_verified_units,
            });
        }
        Ok(())
    }

    /// PCI units scored from this task's factors.
    pub fn pci_units(&self) -> f64 {
        formula::pci_units(&self.factors)
    }

    /// Accuracy audit score derived from verified units and PCI units.
    pub fn accuracy_audit_score(&self) -> f64 {
        formula::accuracy_audit_score(self.ai_verified_units, self.pci_units())
    }

    /// Effort units implied by the accuracy score applied back onto PCI.
    pub fn verified_units(&self) -> f64 {
        let pci = self.pci_units();
        formula::verified_units(formula::accuracy_audit_score(self.ai_verified_units, pci), pci)
    }

    /// Billable cost for this task at the given hourly rate.
    pub fn cost(&self, hourly_rate: f64) -> f64 {
        self.verified_units() * hourly_rate
    }
}
