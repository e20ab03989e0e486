// Presentation of a solved balance: two-decimal figures plus the worked derivation

use crate::domain::{
    models::{MassBalanceProblem, Solution},
    value_objects::{SolutionStatus, ADDITIVE_PURITY},
};
use std::fmt;

/// User-facing message for inputs that fail validation
pub const INPUT_ERROR_MESSAGE: &str = "Check the input values. The mass must be positive and the \
     initial solute fraction must be lower than the final one.";

pub const SOLUTE_BALANCE: &str = "Solute balance: M1 * X1 + M2 * X2 = M3 * X3";
pub const MASS_BALANCE: &str = "Mass balance: M1 + M2 = M3";

/// Rendered view of a solution, rounded for display
#[derive(Debug, Clone, PartialEq)]
pub struct BalanceReport {
    pub final_mass: String,
    pub additive_mass: String,
    pub equations: Vec<String>,
    pub steps: Vec<String>,
}

impl BalanceReport {
    pub fn new(problem: &MassBalanceProblem, solution: &Solution) -> Self {
        let m1 = problem.initial_mass;
        let x1 = problem.initial_solute_fraction;
        let x3 = problem.final_solute_fraction;
        let (m3, m2) = solution.as_pair();

        let mut steps = vec![format!(
            "X2 (solute fraction of the pure additive) = {:.1}",
            ADDITIVE_PURITY
        )];

        match solution.status {
            SolutionStatus::Solved => {
                steps.push(format!(
                    "M3 = M1 * (X1 - X2) / (X3 - X2) = {:.2} * ({:.2} - {:.1}) / ({:.2} - {:.1}) = {:.2} kg",
                    m1, x1, ADDITIVE_PURITY, x3, ADDITIVE_PURITY, m3
                ));
                steps.push(format!("M2 = M3 - M1 = {:.2} - {:.2} = {:.2} kg", m3, m1, m2));
            }
            SolutionStatus::NoFiniteSolution => {
                steps.push(format!(
                    "X3 - X2 = {:.2} - {:.1} = 0: no finite amount of additive reaches the target",
                    x3, ADDITIVE_PURITY
                ));
            }
        }

        Self {
            final_mass: format_kg(m3),
            additive_mass: format_kg(m2),
            equations: vec![SOLUTE_BALANCE.to_string(), MASS_BALANCE.to_string()],
            steps,
        }
    }

    /// Plain-text block with results, equations and derivation
    pub fn render(&self) -> String {
        self.to_string()
    }
}

impl fmt::Display for BalanceReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Final mass (M3): {}", self.final_mass)?;
        writeln!(f, "Additive mass (M2): {}", self.additive_mass)?;
        writeln!(f)?;
        for equation in &self.equations {
            writeln!(f, "{}", equation)?;
        }
        writeln!(f)?;
        for step in &self.steps {
            writeln!(f, "{}", step)?;
        }
        Ok(())
    }
}

pub fn format_kg(mass: f64) -> String {
    format!("{:.2} kg", mass)
}
