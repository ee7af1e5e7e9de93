//! Linear program representation and the production planning model built on it.

use serde::Serialize;

use crate::params::OptimizationParameters;

/// Machine hours needed per unit of product A and product B.
pub const HOURS_PER_UNIT: [f64; 2] = [2.0, 4.0];
/// Raw material needed per unit of product A and product B.
pub const MATERIAL_PER_UNIT: [f64; 2] = [3.0, 2.0];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Sense {
    Maximize,
    Minimize,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum VarKind {
    Integer,
    Continuous,
}

/// A decision variable bounded below by zero.
#[derive(Debug, Clone, PartialEq)]
pub struct DecisionVariable {
    pub name: String,
    pub objective: f64,
    pub kind: VarKind,
}

/// `sum(coefficients[i] * x[i]) <= upper_bound`, one coefficient per variable.
#[derive(Debug, Clone, PartialEq)]
pub struct Constraint {
    pub name: String,
    pub coefficients: Vec<f64>,
    pub upper_bound: f64,
}

impl Constraint {
    /// Left-hand side evaluated at `values`.
    pub fn lhs(&self, values: &[f64]) -> f64 {
        self.coefficients
            .iter()
            .zip(values)
            .map(|(coef, value)| coef * value)
            .sum()
    }
}

/// An objective plus a set of `<=` constraints over non-negative variables.
#[derive(Debug, Clone, PartialEq)]
pub struct LinearProgram {
    pub name: String,
    pub sense: Sense,
    pub variables: Vec<DecisionVariable>,
    pub constraints: Vec<Constraint>,
}

impl LinearProgram {
    pub fn new(name: impl Into<String>, sense: Sense) -> Self {
        Self {
            name: name.into(),
            sense,
            variables: Vec::new(),
            constraints: Vec::new(),
        }
    }

    /// Adds a variable and returns its index.
    pub fn add_var(&mut self, name: impl Into<String>, objective: f64, kind: VarKind) -> usize {
        self.variables.push(DecisionVariable {
            name: name.into(),
            objective,
            kind,
        });
        self.variables.len() - 1
    }

    pub fn add_cons(&mut self, name: impl Into<String>, coefficients: &[f64], upper_bound: f64) {
        debug_assert_eq!(coefficients.len(), self.variables.len());
        self.constraints.push(Constraint {
            name: name.into(),
            coefficients: coefficients.to_vec(),
            upper_bound,
        });
    }

    pub fn objective_value(&self, values: &[f64]) -> f64 {
        self.variables
            .iter()
            .zip(values)
            .map(|(var, value)| var.objective * value)
            .sum()
    }
}

/// Builds the two-product program: maximize profit under the hours and material limits.
pub fn production_program(params: &OptimizationParameters) -> LinearProgram {
    let mut program = LinearProgram::new("maximize_profit", Sense::Maximize);
    program.add_var("product_a", params.profit_a, VarKind::Integer);
    program.add_var("product_b", params.profit_b, VarKind::Integer);
    program.add_cons("hours", &HOURS_PER_UNIT, params.hours_available);
    program.add_cons("material", &MATERIAL_PER_UNIT, params.material_available);
    program
}

/// How much of one resource a plan consumes.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ResourceUsage {
    pub used: f64,
    pub available: f64,
}

impl ResourceUsage {
    /// `2 * qty_a + 4 * qty_b` against the machine hours available.
    pub fn hours(params: &OptimizationParameters, qty_a: u64, qty_b: u64) -> Self {
        Self::new(HOURS_PER_UNIT, params.hours_available, qty_a, qty_b)
    }

    /// `3 * qty_a + 2 * qty_b` against the material available.
    pub fn material(params: &OptimizationParameters, qty_a: u64, qty_b: u64) -> Self {
        Self::new(MATERIAL_PER_UNIT, params.material_available, qty_a, qty_b)
    }

    fn new(per_unit: [f64; 2], available: f64, qty_a: u64, qty_b: u64) -> Self {
        Self {
            used: per_unit[0] * qty_a as f64 + per_unit[1] * qty_b as f64,
            available,
        }
    }

    /// What is left over, never negative.
    pub fn remaining(&self) -> f64 {
        (self.available - self.used).max(0.0)
    }

    /// `used / available`, or `None` when nothing is available.
    pub fn utilization(&self) -> Option<f64> {
        if self.available > 0.0 {
            Some(self.used / self.available)
        } else {
            None
        }
    }
}
