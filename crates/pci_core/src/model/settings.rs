//! Project estimate settings.
//!
//! # Responsibility
//! - Carry the rate parameters cost rollups depend on.
//! - Keep those parameters explicit in every signature instead of ambient.
//!
//! # Invariants
//! - Rollup functions never read settings from global state.
//! - `validate()` is a boundary check for settings forms; the rollup layer
//!   itself passes values through unguarded.

use serde::{Deserialize, Serialize};
use std::error::Error;
use std::fmt::{Display, Formatter};

/// Rate parameters applied when rolling tasks up into money and hours.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EstimateSettings {
    /// Billing rate applied per verified unit-hour.
    pub hourly_rate: f64,
    /// Hours represented by one verified unit.
    pub unit_hour_ratio: f64,
}

impl Default for EstimateSettings {
    fn default() -> Self {
        Self {
            hourly_rate: 50.0,
            unit_hour_ratio: 1.0,
        }
    }
}

/// Validation failures for settings-form input.
#[derive(Debug, Clone, PartialEq)]
pub enum SettingsValidationError {
    /// Hourly rate is NaN, infinite, zero or negative.
    InvalidHourlyRate(f64),
    /// Unit-to-hour ratio is NaN, infinite, zero or negative.
    InvalidUnitHourRatio(f64),
}

impl Display for SettingsValidationError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::InvalidHourlyRate(value) => {
                write!(f, "hourly rate must be a positive finite number, got {value}")
            }
            Self::InvalidUnitHourRatio(value) => {
                write!(
                    f,
                    "unit-to-hour ratio must be a positive finite number, got {value}"
                )
            }
        }
    }
}

impl Error for SettingsValidationError {}

impl EstimateSettings {
    /// Checks that both rates are positive finite numbers.
    pub fn validate(&self) -> Result<(), SettingsValidationError> {
        if !self.hourly_rate.is_finite() || self.hourly_rate <= 0.0 {
            return Err(SettingsValidationError::InvalidHourlyRate(self.hourly_rate));
        }
        if !self.unit_hour_ratio.is_finite() || self.unit_hour_ratio <= 0.0 {
            return Err(SettingsValidationError::InvalidUnitHourRatio(
                self.unit_hour_ratio,
            ));
        }
        Ok(())
    }
}
