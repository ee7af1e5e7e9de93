use serde::Serialize;
use tracing::{debug, info, warn};

use crate::error::Result;
use crate::model::production_program;
use crate::params::OptimizationParameters;
use crate::solver::{IntegerSolver, ScipSolver, SolveStatus};

/// Quantities and profit of an optimal plan.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ProductionPlan {
    pub qty_a: u64,
    pub qty_b: u64,
    /// Objective value as reported by the solver.
    pub profit: f64,
}

/// Outcome of one planning request. `plan` is present iff `status` is optimal.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SolveResult {
    pub status: SolveStatus,
    pub plan: Option<ProductionPlan>,
}

impl SolveResult {
    pub fn plan(&self) -> Option<&ProductionPlan> {
        self.plan.as_ref()
    }
}

/// Builds the production program for `params` and solves it with SCIP.
pub fn solve(params: &OptimizationParameters) -> Result<SolveResult> {
    solve_with(&ScipSolver, params)
}

/// Same as [`solve`], with any [`IntegerSolver`].
pub fn solve_with<S: IntegerSolver + ?Sized>(
    solver: &S,
    params: &OptimizationParameters,
) -> Result<SolveResult> {
    let program = production_program(params);
    debug!(?params, solver = solver.name(), "solving production program");

    let outcome = solver.solve(&program)?;
    if !outcome.status.is_optimal() {
        warn!(status = %outcome.status, "no optimal production plan");
        return Ok(SolveResult {
            status: outcome.status,
            plan: None,
        });
    }

    let qty_a = to_quantity(outcome.values.first().copied());
    let qty_b = to_quantity(outcome.values.get(1).copied());
    let profit = outcome
        .objective
        .unwrap_or_else(|| program.objective_value(&[qty_a as f64, qty_b as f64]));
    info!(qty_a, qty_b, profit, "found optimal production plan");

    Ok(SolveResult {
        status: outcome.status,
        plan: Some(ProductionPlan {
            qty_a,
            qty_b,
            profit,
        }),
    })
}

// Solver values sit within tolerance of an integer, e.g. 2.9999999 for 3.
fn to_quantity(value: Option<f64>) -> u64 {
    value.map_or(0, |v| v.round().max(0.) as u64)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::LinearProgram;
    use crate::solver::SolverOutcome;
    use float_eq::assert_float_eq;

    struct Fixed(SolverOutcome);

    impl IntegerSolver for Fixed {
        fn name(&self) -> &'static str {
            "fixed"
        }

        fn solve(&self, _program: &LinearProgram) -> Result<SolverOutcome> {
            Ok(self.0.clone())
        }
    }

    #[test]
    fn rounds_near_integer_values() {
        let solver = Fixed(SolverOutcome {
            status: SolveStatus::Optimal,
            values: vec![2.999_999_9, 4.000_000_2],
            objective: Some(250.),
        });
        let result = solve_with(&solver, &OptimizationParameters::new(30., 40., 100., 200.)).unwrap();
        let plan = result.plan().unwrap();
        assert_eq!((plan.qty_a, plan.qty_b), (3, 4));
        assert_eq!(plan.profit, 250.);
    }

    #[test]
    fn clamps_negative_zero() {
        let solver = Fixed(SolverOutcome {
            status: SolveStatus::Optimal,
            values: vec![-1e-9, 5.],
            objective: None,
        });
        let result = solve_with(&solver, &OptimizationParameters::default()).unwrap();
        let plan = result.plan().unwrap();
        assert_eq!((plan.qty_a, plan.qty_b), (0, 5));
        // falls back to evaluating the objective
        assert_float_eq!(plan.profit, 200., abs <= 1e-9);
    }

    #[test]
    fn non_optimal_status_carries_no_plan() {
        for status in [
            SolveStatus::Infeasible,
            SolveStatus::Unbounded,
            SolveStatus::NotSolved,
            SolveStatus::Undefined,
        ] {
            let solver = Fixed(SolverOutcome::without_solution(status));
            let result = solve_with(&solver, &OptimizationParameters::default()).unwrap();
            assert_eq!(result.status, status);
            assert!(result.plan().is_none());
        }
    }

    #[test]
    fn solver_errors_propagate() {
        struct Broken;
        impl IntegerSolver for Broken {
            fn name(&self) -> &'static str {
                "broken"
            }
            fn solve(&self, _program: &LinearProgram) -> Result<SolverOutcome> {
                Err(crate::Error::Solver {
                    solver: "broken",
                    reason: "crashed".to_string(),
                })
            }
        }
        assert!(solve_with(&Broken, &OptimizationParameters::default()).is_err());
    }

    #[test]
    fn scip_plan_for_defaults() {
        let result = solve(&OptimizationParameters::default()).unwrap();
        assert_eq!(result.status, SolveStatus::Optimal);
        let plan = result.plan().unwrap();
        // hours bind first; product A earns more per machine hour
        assert_eq!((plan.qty_a, plan.qty_b), (50, 0));
        assert_float_eq!(plan.profit, 1500., abs <= 1e-6);
    }
}
