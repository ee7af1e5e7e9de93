//! Production planning with integer programming.
//!
//! Two products compete for machine hours and raw material. Given the profit
//! of each product and the capacity of each resource, [`solve`] finds the
//! integer quantities that maximize total profit:
//!
//! ```text
//! maximize   profit_a * qty_a + profit_b * qty_b
//! subject to 2 * qty_a + 4 * qty_b <= hours_available
//!            3 * qty_a + 2 * qty_b <= material_available
//!            qty_a, qty_b >= 0, integer
//! ```
//!
//! The program is handed to SCIP; any other solver can be plugged in through
//! [`IntegerSolver`] and [`solve_with`].

pub mod chart;
pub mod config;
pub mod error;
pub mod form;
pub mod model;
pub mod params;
pub mod planner;
pub mod report;
pub mod solver;

pub use error::{Error, Result};
pub use params::OptimizationParameters;
pub use planner::{ProductionPlan, SolveResult, solve, solve_with};
pub use report::Report;
pub use solver::{IntegerSolver, ScipSolver, SolveStatus, SolverOutcome};
