use std::sync::Arc;

use tokio_stream::StreamExt;
use tonic::{Request, Response, Status};
use tracing::{debug, info, warn};

use super::mappers::{self, mass_balance};
use super::report::INPUT_ERROR_MESSAGE;
use crate::domain::{
    models::SolverConfig,
    solver_service::{MassBalanceSolver, SolverError},
    value_objects::ADDITIVE_PURITY,
};

/// gRPC service implementation
pub struct GrpcMassBalanceService {
    solver: Arc<dyn MassBalanceSolver>,
    defaults: SolverConfig,
}

impl GrpcMassBalanceService {
    pub fn new(solver: Arc<dyn MassBalanceSolver>) -> Self {
        Self {
            solver,
            defaults: SolverConfig::default(),
        }
    }

    /// Solver options applied when a request leaves them unspecified
    pub fn with_defaults(mut self, defaults: SolverConfig) -> Self {
        self.defaults = defaults;
        self
    }

    /// Validate, then solve a single wire problem
    fn solve_one(
        &self,
        proto_problem: mass_balance::MassBalanceProblem,
    ) -> Result<mass_balance::MassBalanceResult, Status> {
        // Convert protobuf to domain model
        let domain_problem =
            mappers::proto_to_domain_problem(proto_problem, &self.defaults).map_err(|e| *e)?;

        // Reject out-of-range input before the solver sees it
        let warnings = self.solver.validate(&domain_problem).map_err(|e| {
            warn!(name = %domain_problem.name, error = %e, "rejected problem");
            solver_error_to_status(e)
        })?;
        for warning in &warnings {
            info!(name = %domain_problem.name, "{}", warning);
        }

        let solution = self
            .solver
            .solve(&domain_problem)
            .map_err(solver_error_to_status)?;

        debug!(name = %domain_problem.name, status = %solution.status, "solved");

        Ok(mappers::domain_to_proto_result(&domain_problem, solution))
    }

    /// Solve every problem independently; failures become in-line `INVALID` entries
    pub fn solve_batch(
        &self,
        problems: Vec<mass_balance::MassBalanceProblem>,
    ) -> mass_balance::BatchResult {
        let mut results = Vec::with_capacity(problems.len());
        let mut solved = 0;
        let mut rejected = 0;

        for problem in problems {
            let name = problem.name.clone();
            match self.solve_one(problem) {
                Ok(result) => {
                    solved += 1;
                    results.push(result);
                }
                Err(status) => {
                    rejected += 1;
                    results.push(mappers::invalid_result(name, status.message()));
                }
            }
        }

        mass_balance::BatchResult {
            results,
            solved,
            rejected,
        }
    }
}

fn solver_error_to_status(error: SolverError) -> Status {
    match error {
        SolverError::InvalidProblem(detail) => {
            Status::invalid_argument(format!("{} {}", INPUT_ERROR_MESSAGE, detail))
        }
        e @ SolverError::NoFiniteSolution { .. } => Status::failed_precondition(e.to_string()),
        e @ SolverError::ExecutionFailed(_) => Status::internal(e.to_string()),
    }
}

#[tonic::async_trait]
impl mass_balance::mass_balance_service_server::MassBalanceService for GrpcMassBalanceService {
    async fn solve(
        &self,
        request: Request<mass_balance::MassBalanceProblem>,
    ) -> Result<Response<mass_balance::MassBalanceResult>, Status> {
        let proto_problem = request.into_inner();

        info!(
            name = %proto_problem.name,
            initial_mass = proto_problem.initial_mass,
            initial_solute_fraction = proto_problem.initial_solute_fraction,
            final_solute_fraction = proto_problem.final_solute_fraction,
            "solving mass balance"
        );

        let result = self.solve_one(proto_problem)?;
        Ok(Response::new(result))
    }

    async fn solve_stream(
        &self,
        request: Request<tonic::Streaming<mass_balance::MassBalanceProblem>>,
    ) -> Result<Response<mass_balance::BatchResult>, Status> {
        let mut stream = request.into_inner();

        // Collect all problems
        let mut problems = Vec::new();
        while let Some(problem) = stream.next().await {
            problems.push(problem?);
        }

        info!(count = problems.len(), "solving mass balance batch");

        let batch = self.solve_batch(problems);
        info!(solved = batch.solved, rejected = batch.rejected, "batch finished");

        Ok(Response::new(batch))
    }

    async fn validate(
        &self,
        request: Request<mass_balance::MassBalanceProblem>,
    ) -> Result<Response<mass_balance::ValidationResult>, Status> {
        let proto_problem = request.into_inner();
        let domain_problem =
            mappers::proto_to_domain_problem(proto_problem, &self.defaults).map_err(|e| *e)?;

        let mut errors = Vec::new();
        let mut warnings = Vec::new();

        match self.solver.validate(&domain_problem) {
            Ok(found) => warnings = found,
            Err(SolverError::InvalidProblem(detail)) => {
                errors.extend(detail.split("; ").map(str::to_string));
            }
            Err(e) => errors.push(e.to_string()),
        }

        Ok(Response::new(mass_balance::ValidationResult {
            is_valid: errors.is_empty(),
            errors,
            warnings,
        }))
    }

    async fn get_solver_info(
        &self,
        _request: Request<mass_balance::Empty>,
    ) -> Result<Response<mass_balance::SolverInfo>, Status> {
        Ok(Response::new(mass_balance::SolverInfo {
            name: self.solver.name().to_string(),
            version: env!("CARGO_PKG_VERSION").to_string(),
            additive_purity: ADDITIVE_PURITY,
            capabilities: vec![
                "Two-component mass balance".to_string(),
                "Closed-form solution".to_string(),
                "Degenerate target detection".to_string(),
                "Batch streaming".to_string(),
            ],
        }))
    }
}
