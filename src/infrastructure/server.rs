// Infrastructure: Server setup and configuration
// Single Responsibility: Manage server lifecycle and configuration

use std::net::SocketAddr;
use std::sync::Arc;
use tonic::transport::Server;
use tracing::info;

use crate::application::mappers::mass_balance::mass_balance_service_server::MassBalanceServiceServer;
use crate::application::GrpcMassBalanceService;
use crate::domain::{models::SolverConfig, solver_service::MassBalanceSolver};

pub struct ServerConfig {
    pub address: SocketAddr,
    pub solver: Arc<dyn MassBalanceSolver>,
    pub defaults: SolverConfig,
}

impl ServerConfig {
    pub fn new(address: SocketAddr, solver: Arc<dyn MassBalanceSolver>) -> Self {
        Self {
            address,
            solver,
            defaults: SolverConfig::default(),
        }
    }

    pub fn with_defaults(mut self, defaults: SolverConfig) -> Self {
        self.defaults = defaults;
        self
    }
}

pub async fn start_server(config: ServerConfig) -> Result<(), Box<dyn std::error::Error>> {
    info!(
        address = %config.address,
        solver = config.solver.name(),
        degenerate_policy = %config.defaults.degenerate_policy,
        tolerance = config.defaults.tolerance,
        "massbal server listening"
    );

    let service = GrpcMassBalanceService::new(config.solver).with_defaults(config.defaults);

    Server::builder()
        .add_service(MassBalanceServiceServer::new(service))
        .serve(config.address)
        .await?;

    Ok(())
}
