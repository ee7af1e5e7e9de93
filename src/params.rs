use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

/// Smallest value the input boundary accepts for any parameter.
pub const MIN_VALUE: f64 = 1.0;

/// The four user-supplied inputs of a production plan.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct OptimizationParameters {
    /// Profit per unit of product A.
    pub profit_a: f64,
    /// Profit per unit of product B.
    pub profit_b: f64,
    /// Machine hours available.
    pub hours_available: f64,
    /// Raw material available (kg).
    pub material_available: f64,
}

impl Default for OptimizationParameters {
    fn default() -> Self {
        Self {
            profit_a: 30.0,
            profit_b: 40.0,
            hours_available: 100.0,
            material_available: 200.0,
        }
    }
}

impl OptimizationParameters {
    pub fn new(profit_a: f64, profit_b: f64, hours_available: f64, material_available: f64) -> Self {
        Self {
            profit_a,
            profit_b,
            hours_available,
            material_available,
        }
    }

    /// Checks the input-boundary invariant: every value finite and at least [`MIN_VALUE`].
    ///
    /// [`crate::solve`] does not call this; the model itself accepts any value.
    pub fn validate(&self) -> Result<()> {
        let fields = [
            ("profit_a", self.profit_a),
            ("profit_b", self.profit_b),
            ("hours_available", self.hours_available),
            ("material_available", self.material_available),
        ];
        for (field, value) in fields {
            if !value.is_finite() {
                return Err(Error::InvalidParameter {
                    field,
                    reason: format!("{value} is not a finite number"),
                });
            }
            if value < MIN_VALUE {
                return Err(Error::InvalidParameter {
                    field,
                    reason: format!("{value} is below the minimum of {MIN_VALUE}"),
                });
            }
        }
        Ok(())
    }
}
