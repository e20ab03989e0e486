// Domain value objects representing core business concepts

use std::fmt;

/// Solute fraction of the additive. The additive is always the pure substance.
pub const ADDITIVE_PURITY: f64 = 1.0;

/// Outcome of a mass balance calculation
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SolutionStatus {
    /// Final and additive masses were computed
    Solved,
    /// Target fraction equals the additive purity; the masses are the (0, 0) sentinel
    NoFiniteSolution,
}

impl fmt::Display for SolutionStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SolutionStatus::Solved => write!(f, "Solved"),
            SolutionStatus::NoFiniteSolution => write!(f, "No Finite Solution"),
        }
    }
}

/// What the solver does when the target fraction equals the additive purity
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DegeneratePolicy {
    /// Return (0, 0) flagged as `SolutionStatus::NoFiniteSolution`
    #[default]
    Sentinel,
    /// Fail with `SolverError::NoFiniteSolution`
    Reject,
}

impl fmt::Display for DegeneratePolicy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DegeneratePolicy::Sentinel => write!(f, "sentinel"),
            DegeneratePolicy::Reject => write!(f, "reject"),
        }
    }
}

impl std::str::FromStr for DegeneratePolicy {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "sentinel" => Ok(DegeneratePolicy::Sentinel),
            "reject" => Ok(DegeneratePolicy::Reject),
            other => Err(format!(
                "unknown degenerate policy '{}' (expected 'sentinel' or 'reject')",
                other
            )),
        }
    }
}
