//! The seam between a [`LinearProgram`] and whatever solves it.

use russcip::prelude::*;
use serde::Serialize;
use tracing::debug;

use crate::error::{Error, Result};
use crate::model::{LinearProgram, Sense, VarKind};

/// How a solve ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum SolveStatus {
    Optimal,
    Infeasible,
    Unbounded,
    /// The solver stopped on a limit before proving anything.
    NotSolved,
    /// The solver could not classify the problem.
    Undefined,
}

impl SolveStatus {
    pub fn is_optimal(self) -> bool {
        self == SolveStatus::Optimal
    }
}

impl std::fmt::Display for SolveStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            SolveStatus::Optimal => "Optimal",
            SolveStatus::Infeasible => "Infeasible",
            SolveStatus::Unbounded => "Unbounded",
            SolveStatus::NotSolved => "Not Solved",
            SolveStatus::Undefined => "Undefined",
        };
        f.write_str(name)
    }
}

/// Raw answer from a solver. `values` and `objective` are only filled when optimal.
#[derive(Debug, Clone, PartialEq)]
pub struct SolverOutcome {
    pub status: SolveStatus,
    pub values: Vec<f64>,
    pub objective: Option<f64>,
}

impl SolverOutcome {
    pub fn without_solution(status: SolveStatus) -> Self {
        Self {
            status,
            values: Vec::new(),
            objective: None,
        }
    }
}

/// Anything that can solve a mixed-integer [`LinearProgram`].
///
/// Implementations block until the solve finishes. An `Err` means the solver
/// itself broke down; infeasible or unbounded programs are reported through
/// [`SolverOutcome::status`].
pub trait IntegerSolver {
    fn name(&self) -> &'static str;

    fn solve(&self, program: &LinearProgram) -> Result<SolverOutcome>;
}

/// [SCIP](https://scipopt.org) through `russcip`, with default plugins and no console output.
#[derive(Debug, Clone, Copy, Default)]
pub struct ScipSolver;

impl IntegerSolver for ScipSolver {
    fn name(&self) -> &'static str {
        "SCIP"
    }

    fn solve(&self, program: &LinearProgram) -> Result<SolverOutcome> {
        let mut model = Model::new()
            .hide_output()
            .include_default_plugins()
            .create_prob(program.name.as_str())
            .set_obj_sense(match program.sense {
                Sense::Maximize => ObjSense::Maximize,
                Sense::Minimize => ObjSense::Minimize,
            });

        let vars: Vec<_> = program
            .variables
            .iter()
            .map(|var| {
                let var_type = match var.kind {
                    VarKind::Integer => VarType::Integer,
                    VarKind::Continuous => VarType::Continuous,
                };
                model.add_var(0., f64::INFINITY, var.objective, var.name.as_str(), var_type)
            })
            .collect();

        for cons in &program.constraints {
            model.add_cons(
                vars.iter().collect(),
                &cons.coefficients,
                -f64::INFINITY,
                cons.upper_bound,
                cons.name.as_str(),
            );
        }

        debug!(
            program = %program.name,
            vars = vars.len(),
            conss = program.constraints.len(),
            "handing program to SCIP"
        );
        let solved_model = model.solve();

        let status = match solved_model.status() {
            Status::Optimal => SolveStatus::Optimal,
            Status::Infeasible => SolveStatus::Infeasible,
            Status::Unbounded => SolveStatus::Unbounded,
            Status::TimeLimit | Status::GapLimit => SolveStatus::NotSolved,
            other => {
                debug!(status = ?other, "unclassified SCIP status");
                SolveStatus::Undefined
            }
        };
        if !status.is_optimal() {
            return Ok(SolverOutcome::without_solution(status));
        }

        let sol = solved_model.best_sol().ok_or_else(|| Error::Solver {
            solver: self.name(),
            reason: "reported optimal but holds no solution".to_string(),
        })?;
        Ok(SolverOutcome {
            status,
            values: vars.iter().map(|var| sol.val(var)).collect(),
            objective: Some(solved_model.obj_val()),
        })
    }
}
