use massbal::{start_server, ClosedFormSolver, Config, ServerConfig};
use std::sync::Arc;
use tracing::info;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Load configuration ($MASSBAL_CONFIG, config.toml or built-in defaults)
    let config = Config::from_env()?;
    config.logging.init()?;

    let address = config.address()?;
    let defaults = config.solver_config()?;

    // Create solver instance
    let solver = Arc::new(ClosedFormSolver::new());
    info!("massbal {} starting", env!("CARGO_PKG_VERSION"));

    // Configure and start server
    let server_config = ServerConfig::new(address, solver).with_defaults(defaults);
    start_server(server_config).await?;

    Ok(())
}
