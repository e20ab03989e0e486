// Example client demonstrating how to use the mass balance gRPC service
//
// Pulp dilution problem:
// 50 kg of fruit pulp holds 7% dissolved solids. How much sugar must be
// added to raise the solids fraction to 10%?
//
// Solute balance: M1*X1 + M2*X2 = M3*X3
// Mass balance:   M1 + M2 = M3
// Sugar is pure solute, so X2 = 1.0.

use tonic::Request;

pub mod mass_balance {
    tonic::include_proto!("mass_balance");
}

use mass_balance::{
    mass_balance_service_client::MassBalanceServiceClient, DegeneratePolicy, Empty,
    MassBalanceProblem, SolutionStatus,
};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Connect to the gRPC server
    let mut client = MassBalanceServiceClient::connect("http://127.0.0.1:50051").await?;

    let info = client.get_solver_info(Request::new(Empty {})).await?.into_inner();
    println!("Connected to {} (v{})\n", info.name, info.version);

    let problem = MassBalanceProblem {
        initial_mass: 50.0,
        initial_solute_fraction: 0.07,
        final_solute_fraction: 0.10,
        name: "Pulp dilution".to_string(),
        degenerate_policy: DegeneratePolicy::Unspecified as i32,
    };

    println!("=== {} ===\n", problem.name);
    println!("  M1 = {:.2} kg", problem.initial_mass);
    println!("  X1 = {:.2}", problem.initial_solute_fraction);
    println!("  X3 = {:.2}\n", problem.final_solute_fraction);

    let result = match client.solve(Request::new(problem)).await {
        Ok(response) => response.into_inner(),
        Err(status) => {
            println!("✗ {}", status.message());
            return Ok(());
        }
    };

    match SolutionStatus::try_from(result.status) {
        Ok(SolutionStatus::Solved) => {
            if let Some(report) = result.report {
                println!("✓ Final pulp mass (M3): {}", report.final_mass);
                println!("✓ Sugar to add (M2):    {}", report.additive_mass);

                println!("\nDerivation:");
                for equation in &report.equations {
                    println!("  {}", equation);
                }
                for step in &report.steps {
                    println!("  {}", step);
                }
            }
        }
        Ok(SolutionStatus::NoFiniteSolution) => {
            println!("⚠ No finite amount of sugar reaches the target");
        }
        _ => {
            println!("✗ Solver error");
        }
    }

    println!("\nMessage: {}", result.message);

    Ok(())
}
