//! Text and JSON rendering of a [`SolveResult`].

use std::fmt;

use serde::Serialize;

use crate::model::ResourceUsage;
use crate::params::OptimizationParameters;
use crate::planner::{ProductionPlan, SolveResult};
use crate::solver::SolveStatus;

pub const NO_SOLUTION: &str = "No optimal solution found for the given parameters.";

/// Everything the presentation layer shows for one solve.
#[derive(Debug, Clone, Serialize)]
pub struct Report {
    pub parameters: OptimizationParameters,
    pub status: SolveStatus,
    pub plan: Option<ProductionPlan>,
    pub usage: Option<Usage>,
}

#[derive(Debug, Clone, Serialize)]
pub struct Usage {
    pub hours: ResourceUsage,
    pub material: ResourceUsage,
}

impl Report {
    pub fn new(parameters: OptimizationParameters, result: &SolveResult) -> Self {
        let usage = result.plan().map(|plan| Usage {
            hours: ResourceUsage::hours(&parameters, plan.qty_a, plan.qty_b),
            material: ResourceUsage::material(&parameters, plan.qty_a, plan.qty_b),
        });
        Self {
            parameters,
            status: result.status,
            plan: result.plan.clone(),
            usage,
        }
    }
}

impl fmt::Display for Report {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Status: {}", self.status)?;
        let (Some(plan), Some(usage)) = (&self.plan, &self.usage) else {
            return writeln!(f, "{NO_SOLUTION}");
        };
        writeln!(f, "Product A: {} units", plan.qty_a)?;
        writeln!(f, "Product B: {} units", plan.qty_b)?;
        writeln!(f, "Total profit: {:.2}", plan.profit)?;
        writeln!(f, "Hours used: {}", Utilization(&usage.hours))?;
        writeln!(f, "Material used: {}", Utilization(&usage.material))
    }
}

/// `used/available (pct%)`.
pub struct Utilization<'a>(pub &'a ResourceUsage);

impl fmt::Display for Utilization<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let usage = self.0;
        match usage.utilization() {
            Some(ratio) => write!(f, "{}/{} ({:.1}%)", usage.used, usage.available, ratio * 100.),
            None => write!(f, "{}/{} (n/a)", usage.used, usage.available),
        }
    }
}
