// Domain layer: Mass balance model, solver contract and input rules
pub mod domain;

// Application layer: gRPC service, wire mapping and result presentation
pub mod application;

// Infrastructure layer: Configuration, logging and server
#[cfg(feature = "server")]
pub mod infrastructure;

// Solver adapters: Concrete implementations of MassBalanceSolver
pub mod solver;

// Re-export commonly used types
pub use domain::{
    BalanceResiduals, DegeneratePolicy, MassBalanceProblem, MassBalanceSolver, Solution,
    SolutionStatus, SolverConfig, SolverError, ADDITIVE_PURITY,
};

pub use application::{BalanceReport, GrpcMassBalanceService};

#[cfg(feature = "server")]
pub use infrastructure::{start_server, Config, ConfigError, ServerConfig};

pub use solver::{solve_mass_balance, ClosedFormSolver};
