//! The PCI formula.
//!
//! # Responsibility
//! - Map one task's eleven estimation factors to a single PCI unit score.
//! - Derive the accuracy audit score from externally verified units.
//!
//! # Invariants
//! - All functions are pure, deterministic and total over `f64` input.
//! - `pci_units` is floored at zero.
//! - `accuracy_audit_score` returns 0 instead of dividing by zero, and is
//!   otherwise unclamped in both directions.
//!
//! Input quality is owned by callers: NaN or infinite values flow through
//! the arithmetic unchecked. Entry flows gate them out via
//! `Task::validate()` before records reach this layer.

use crate::model::task::FactorSet;

/// Scope cluster: implementation scope x complexity x UX impact.
pub fn scope_term(factors: &FactorSet) -> f64 {
    factors.isr * factors.cf * factors.uxi
}

/// Resource cluster: resource consumption x architectural effort, discounted
/// by the learning curve.
///
/// The learning-curve value is subtracted, not multiplied: a steeper curve
/// offsets effort in this model rather than scaling it. A large enough `l`
/// can drive the whole raw score negative, which [`pci_units`] then floors.
pub fn resource_term(factors: &FactorSet) -> f64 {
    factors.rcf * factors.aep - factors.l
}

/// Maintenance cluster: maintenance workload x code generation x risk.
pub fn maintenance_term(factors: &FactorSet) -> f64 {
    factors.mlw * factors.cgw * factors.rf
}

/// Rate cluster: skill level x global resource index.
pub fn rate_term(factors: &FactorSet) -> f64 {
    factors.s * factors.glri
}

/// Computes PCI units for one set of factors.
///
/// The four cluster terms are summed, unweighted, and the result is floored
/// at zero: a raw score driven negative by the learning-curve discount reads
/// as "no billable effort", not negative effort.
pub fn pci_units(factors: &FactorSet) -> f64 {
    let raw =
        scope_term(factors) + resource_term(factors) + maintenance_term(factors) + rate_term(factors);
    raw.max(0.0)
}

/// Computes the accuracy audit score as a percentage.
///
/// Returns 0 when `pci` is 0 so an unscored task never divides by zero.
/// There is no upper clamp: verified units exceeding PCI legitimately score
/// above 100, signalling over-delivery. For fractional PCI values the true
/// mathematical ratio is kept; the denominator is never floored.
pub fn accuracy_audit_score(verified: f64, pci: f64) -> f64 {
    if pci == 0.0 {
        0.0
    } else {
        verified / pci * 100.0
    }
}

/// Recovers effort units from an accuracy score applied back onto PCI.
///
/// Every consumer derives billable units through this recomputation rather
/// than reading the verified field directly; for positive PCI the result is
/// algebraically the verified input again, and for zero PCI it is 0.
pub fn verified_units(aas: f64, pci: f64) -> f64 {
    (aas / 100.0) * pci
}
