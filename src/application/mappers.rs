// Mappers: Convert between gRPC protobuf types and domain models
// Keeps protobuf types out of the domain and solver layers

use crate::domain::{
    models::{MassBalanceProblem, Solution, SolverConfig},
    value_objects::{DegeneratePolicy, SolutionStatus, ADDITIVE_PURITY},
};
use tonic::Status;

use super::report::BalanceReport;

pub mod mass_balance {
    tonic::include_proto!("mass_balance");
}

use mass_balance as proto;

/// Convert a wire policy, falling back to `default` when unspecified
pub fn proto_to_domain_policy(
    value: i32,
    default: DegeneratePolicy,
) -> std::result::Result<DegeneratePolicy, Box<Status>> {
    match proto::DegeneratePolicy::try_from(value) {
        Ok(proto::DegeneratePolicy::Unspecified) => Ok(default),
        Ok(proto::DegeneratePolicy::Sentinel) => Ok(DegeneratePolicy::Sentinel),
        Ok(proto::DegeneratePolicy::Reject) => Ok(DegeneratePolicy::Reject),
        Err(_) => Err(Box::new(Status::invalid_argument(format!(
            "Invalid degenerate policy: {}",
            value
        )))),
    }
}

/// Convert protobuf MassBalanceProblem to domain MassBalanceProblem
pub fn proto_to_domain_problem(
    proto_prob: proto::MassBalanceProblem,
    defaults: &SolverConfig,
) -> std::result::Result<MassBalanceProblem, Box<Status>> {
    let degenerate_policy =
        proto_to_domain_policy(proto_prob.degenerate_policy, defaults.degenerate_policy)?;

    let problem = MassBalanceProblem::new(
        proto_prob.initial_mass,
        proto_prob.initial_solute_fraction,
        proto_prob.final_solute_fraction,
    )
    .with_name(proto_prob.name)
    .with_config(SolverConfig {
        degenerate_policy,
        tolerance: defaults.tolerance,
    });

    Ok(problem)
}

fn domain_to_proto_status(status: SolutionStatus) -> i32 {
    match status {
        SolutionStatus::Solved => proto::SolutionStatus::Solved as i32,
        SolutionStatus::NoFiniteSolution => proto::SolutionStatus::NoFiniteSolution as i32,
    }
}

pub fn domain_to_proto_report(report: BalanceReport) -> proto::BalanceReport {
    proto::BalanceReport {
        final_mass: report.final_mass,
        additive_mass: report.additive_mass,
        equations: report.equations,
        steps: report.steps,
    }
}

/// Convert a domain Solution to protobuf MassBalanceResult, attaching the rendered report
pub fn domain_to_proto_result(
    problem: &MassBalanceProblem,
    solution: Solution,
) -> proto::MassBalanceResult {
    let report = BalanceReport::new(problem, &solution);

    proto::MassBalanceResult {
        status: domain_to_proto_status(solution.status),
        final_mass: solution.final_mass,
        additive_mass: solution.additive_mass,
        additive_purity: ADDITIVE_PURITY,
        message: solution.message,
        report: Some(domain_to_proto_report(report)),
        name: problem.name.clone(),
    }
}

/// Result entry for a problem that was not solved
pub fn invalid_result(
    name: impl Into<String>,
    message: impl Into<String>,
) -> proto::MassBalanceResult {
    proto::MassBalanceResult {
        status: proto::SolutionStatus::Invalid as i32,
        final_mass: 0.0,
        additive_mass: 0.0,
        additive_purity: ADDITIVE_PURITY,
        message: message.into(),
        report: None,
        name: name.into(),
    }
}
