// Solver adapters module

pub mod closed_form;

pub use closed_form::{solve_mass_balance, ClosedFormSolver};
