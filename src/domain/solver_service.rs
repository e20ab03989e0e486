// Domain service interface for solving mass balance problems
// Any solver implementation plugs in behind this trait

use super::models::{MassBalanceProblem, Solution};
use super::value_objects::ADDITIVE_PURITY;

/// Additive mass above this multiple of the initial mass triggers a warning
const LARGE_ADDITIVE_RATIO: f64 = 10.0;

/// Error types for the solver service
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum SolverError {
    #[error("Invalid problem: {0}")]
    InvalidProblem(String),

    #[error("No finite solution: final solute fraction {final_solute_fraction} equals the additive purity")]
    NoFiniteSolution { final_solute_fraction: f64 },

    #[error("Solver execution failed: {0}")]
    ExecutionFailed(String),
}

pub type Result<T> = std::result::Result<T, SolverError>;

/// Domain service interface for mass balance solvers
///
/// `solve` does not check its inputs. Callers run `validate` first and only
/// solve problems that pass; the solver itself only guards the division at
/// a target fraction equal to the additive purity.
pub trait MassBalanceSolver: Send + Sync {
    /// Solve a mass balance problem
    fn solve(&self, problem: &MassBalanceProblem) -> Result<Solution>;

    /// Check the input rules without solving
    ///
    /// Every violated rule is reported in a single `InvalidProblem`. A valid
    /// problem yields the (possibly empty) list of warnings.
    fn validate(&self, problem: &MassBalanceProblem) -> Result<Vec<String>> {
        let mut errors = Vec::new();

        let m1 = problem.initial_mass;
        let x1 = problem.initial_solute_fraction;
        let x3 = problem.final_solute_fraction;

        let inputs = [
            ("Initial mass", m1),
            ("Initial solute fraction", x1),
            ("Final solute fraction", x3),
        ];
        for (label, value) in inputs {
            if !value.is_finite() {
                errors.push(format!("{} must be a finite number (got {})", label, value));
            }
        }

        if m1.is_finite() && m1 <= 0.0 {
            errors.push(format!("Initial mass must be positive (got {})", m1));
        }

        for (label, value) in &inputs[1..] {
            if value.is_finite() && !(0.0..=1.0).contains(value) {
                errors.push(format!("{} must be between 0 and 1 (got {})", label, value));
            }
        }

        if x1.is_finite() && x3.is_finite() && x1 >= x3 {
            errors.push(format!(
                "Initial solute fraction ({}) must be lower than the final solute fraction ({})",
                x1, x3
            ));
        }

        if !errors.is_empty() {
            return Err(SolverError::InvalidProblem(errors.join("; ")));
        }

        let mut warnings = Vec::new();
        if problem.is_degenerate() {
            warnings.push(format!(
                "Final solute fraction equals the additive purity ({}); no finite additive mass reaches it",
                ADDITIVE_PURITY
            ));
        } else {
            let ratio = (x3 - x1) / (ADDITIVE_PURITY - x3);
            if ratio > LARGE_ADDITIVE_RATIO {
                warnings.push(format!("Additive mass is {:.1} times the initial mass", ratio));
            }
        }

        Ok(warnings)
    }

    /// Get the name of this solver
    fn name(&self) -> &str;
}

#[cfg(test)]
mod tests {
    use super::*;

    struct NullSolver;

    impl MassBalanceSolver for NullSolver {
        fn solve(&self, _problem: &MassBalanceProblem) -> Result<Solution> {
            Err(SolverError::ExecutionFailed("not implemented".to_string()))
        }

        fn name(&self) -> &str {
            "null"
        }
    }

    fn invalid_message(problem: MassBalanceProblem) -> String {
        match NullSolver.validate(&problem) {
            Err(SolverError::InvalidProblem(message)) => message,
            other => panic!("expected InvalidProblem, got {:?}", other),
        }
    }

    #[test]
    fn valid_problem_has_no_warnings() {
        let warnings = NullSolver.validate(&MassBalanceProblem::default()).unwrap();
        assert!(warnings.is_empty());
    }

    #[test]
    fn rejects_non_positive_mass() {
        let message = invalid_message(MassBalanceProblem::new(0.0, 0.07, 0.10));
        assert!(message.contains("Initial mass must be positive"));

        let message = invalid_message(MassBalanceProblem::new(-5.0, 0.07, 0.10));
        assert!(message.contains("Initial mass must be positive"));
    }

    #[test]
    fn rejects_initial_fraction_not_below_final() {
        let message = invalid_message(MassBalanceProblem::new(50.0, 0.10, 0.10));
        assert!(message.contains("must be lower than the final solute fraction"));

        let message = invalid_message(MassBalanceProblem::new(50.0, 0.3, 0.10));
        assert!(message.contains("must be lower than the final solute fraction"));
    }

    #[test]
    fn reports_every_violation() {
        let message = invalid_message(MassBalanceProblem::new(-1.0, 1.5, 1.2));
        let parts: Vec<_> = message.split("; ").collect();

        assert_eq!(parts.len(), 4);
        assert!(parts[0].starts_with("Initial mass"));
        assert!(parts[1].starts_with("Initial solute fraction must be between 0 and 1"));
        assert!(parts[2].starts_with("Final solute fraction must be between 0 and 1"));
    }

    #[test]
    fn rejects_non_finite_inputs() {
        let message = invalid_message(MassBalanceProblem::new(f64::NAN, 0.07, f64::INFINITY));
        assert!(message.contains("Initial mass must be a finite number"));
        assert!(message.contains("Final solute fraction must be a finite number"));
        assert!(!message.contains("must be lower than"));
    }

    #[test]
    fn warns_on_degenerate_target() {
        let warnings = NullSolver
            .validate(&MassBalanceProblem::new(10.0, 0.2, 1.0))
            .unwrap();
        assert_eq!(warnings.len(), 1);
        assert!(warnings[0].contains("no finite additive mass"));
    }

    #[test]
    fn warns_on_large_additive_mass() {
        // M2 / M1 = (0.95 - 0.05) / 0.05 = 18
        let warnings = NullSolver
            .validate(&MassBalanceProblem::new(10.0, 0.05, 0.95))
            .unwrap();
        assert_eq!(warnings, vec!["Additive mass is 18.0 times the initial mass".to_string()]);
    }
}
