use super::value_objects::{DegeneratePolicy, SolutionStatus, ADDITIVE_PURITY};

/// Configuration for the solver
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SolverConfig {
    pub degenerate_policy: DegeneratePolicy,
    /// Relative tolerance used when checking that a solution closes both balances
    pub tolerance: f64,
}

impl Default for SolverConfig {
    fn default() -> Self {
        Self {
            degenerate_policy: DegeneratePolicy::Sentinel,
            tolerance: 1e-9,
        }
    }
}

/// A dilution/concentration problem: reach `final_solute_fraction` by adding pure additive
#[derive(Debug, Clone, PartialEq)]
pub struct MassBalanceProblem {
    pub name: String,
    /// M1, kg of the original mixture
    pub initial_mass: f64,
    /// X1
    pub initial_solute_fraction: f64,
    /// X3
    pub final_solute_fraction: f64,
    pub solver_config: SolverConfig,
}

impl MassBalanceProblem {
    pub fn new(
        initial_mass: f64,
        initial_solute_fraction: f64,
        final_solute_fraction: f64,
    ) -> Self {
        Self {
            name: String::new(),
            initial_mass,
            initial_solute_fraction,
            final_solute_fraction,
            solver_config: SolverConfig::default(),
        }
    }

    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    pub fn with_config(mut self, config: SolverConfig) -> Self {
        self.solver_config = config;
        self
    }

    pub fn with_policy(mut self, policy: DegeneratePolicy) -> Self {
        self.solver_config.degenerate_policy = policy;
        self
    }

    /// X2, fixed for every problem
    pub fn additive_purity(&self) -> f64 {
        ADDITIVE_PURITY
    }

    /// True when the target fraction equals the additive purity exactly
    pub fn is_degenerate(&self) -> bool {
        self.final_solute_fraction - ADDITIVE_PURITY == 0.0
    }

    /// Solute mass carried in by the initial mixture (M1 * X1)
    pub fn initial_solute_mass(&self) -> f64 {
        self.initial_mass * self.initial_solute_fraction
    }
}

impl Default for MassBalanceProblem {
    fn default() -> Self {
        Self::new(50.0, 0.07, 0.10)
    }
}

/// Absolute residuals of the two balance equations
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct BalanceResiduals {
    /// |M1*X1 + M2*X2 - M3*X3|
    pub solute: f64,
    /// |M1 + M2 - M3|
    pub total: f64,
    scale: f64,
}

impl BalanceResiduals {
    /// Both residuals are within `tolerance` relative to the largest mass involved
    pub fn closes(&self, tolerance: f64) -> bool {
        let bound = tolerance * self.scale;
        self.solute <= bound && self.total <= bound
    }
}

/// Result of solving a mass balance problem
#[derive(Debug, Clone, PartialEq)]
pub struct Solution {
    pub status: SolutionStatus,
    /// M3, kg
    pub final_mass: f64,
    /// M2, kg
    pub additive_mass: f64,
    pub message: String,
}

impl Solution {
    pub fn solved(final_mass: f64, additive_mass: f64) -> Self {
        Self {
            status: SolutionStatus::Solved,
            final_mass,
            additive_mass,
            message: "Mass balance solved".to_string(),
        }
    }

    pub fn no_finite_solution() -> Self {
        Self {
            status: SolutionStatus::NoFiniteSolution,
            final_mass: 0.0,
            additive_mass: 0.0,
            message: "Target fraction equals the additive purity: \
                      no finite amount of additive reaches it"
                .to_string(),
        }
    }

    pub fn with_message(mut self, message: impl Into<String>) -> Self {
        self.message = message.into();
        self
    }

    pub fn is_solved(&self) -> bool {
        self.status == SolutionStatus::Solved
    }

    /// (M3, M2)
    pub fn as_pair(&self) -> (f64, f64) {
        (self.final_mass, self.additive_mass)
    }

    pub fn residuals(&self, problem: &MassBalanceProblem) -> BalanceResiduals {
        let solute_in = problem.initial_solute_mass() + self.additive_mass * ADDITIVE_PURITY;
        let solute_out = self.final_mass * problem.final_solute_fraction;

        BalanceResiduals {
            solute: (solute_in - solute_out).abs(),
            total: (problem.initial_mass + self.additive_mass - self.final_mass).abs(),
            scale: problem
                .initial_mass
                .abs()
                .max(self.final_mass.abs())
                .max(1.0),
        }
    }
}
