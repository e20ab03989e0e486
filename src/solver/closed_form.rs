// Closed-form solver adapter
// Implements MassBalanceSolver by solving the two balance equations algebraically

use crate::domain::{
    models::{MassBalanceProblem, Solution},
    solver_service::{MassBalanceSolver, Result, SolverError},
    value_objects::{DegeneratePolicy, ADDITIVE_PURITY},
};
use tracing::debug;

/// Solve the two-component balance for `(final_mass, additive_mass)`.
///
/// From `M1*X1 + M2*X2 = M3*X3` and `M1 + M2 = M3` with `X2 = 1.0`:
/// `M3 = M1 * (X1 - X2) / (X3 - X2)` and `M2 = M3 - M1`.
///
/// Inputs are not checked. When `final_solute_fraction` is exactly the
/// additive purity the division is skipped and `(0.0, 0.0)` is returned.
pub fn solve_mass_balance(
    initial_mass: f64,
    initial_solute_fraction: f64,
    final_solute_fraction: f64,
) -> (f64, f64) {
    let denominator = final_solute_fraction - ADDITIVE_PURITY;
    if denominator == 0.0 {
        return (0.0, 0.0);
    }

    let final_mass = initial_mass * (initial_solute_fraction - ADDITIVE_PURITY) / denominator;
    let additive_mass = final_mass - initial_mass;

    (final_mass, additive_mass)
}

pub struct ClosedFormSolver;

impl ClosedFormSolver {
    pub fn new() -> Self {
        Self
    }
}

impl Default for ClosedFormSolver {
    fn default() -> Self {
        Self::new()
    }
}

impl MassBalanceSolver for ClosedFormSolver {
    fn solve(&self, problem: &MassBalanceProblem) -> Result<Solution> {
        if problem.is_degenerate() {
            debug!(
                name = %problem.name,
                policy = %problem.solver_config.degenerate_policy,
                "target fraction equals additive purity"
            );
            return match problem.solver_config.degenerate_policy {
                DegeneratePolicy::Sentinel => Ok(Solution::no_finite_solution()),
                DegeneratePolicy::Reject => Err(SolverError::NoFiniteSolution {
                    final_solute_fraction: problem.final_solute_fraction,
                }),
            };
        }

        let (final_mass, additive_mass) = solve_mass_balance(
            problem.initial_mass,
            problem.initial_solute_fraction,
            problem.final_solute_fraction,
        );
        debug!(name = %problem.name, final_mass, additive_mass, "mass balance solved");

        let mut solution = Solution::solved(final_mass, additive_mass);

        // Overflow or rounding can leave a result that no longer satisfies the balances
        let tolerance = problem.solver_config.tolerance;
        let residuals = solution.residuals(problem);
        if !residuals.closes(tolerance) {
            return Err(SolverError::ExecutionFailed(format!(
                "balance does not close within {:e} (solute residual {:e}, mass residual {:e})",
                tolerance, residuals.solute, residuals.total
            )));
        }

        if !problem.name.is_empty() {
            solution = solution.with_message(format!("Mass balance solved for '{}'", problem.name));
        }

        Ok(solution)
    }

    fn name(&self) -> &str {
        "Closed-form two-component balance"
    }
}
