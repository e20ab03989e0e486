// Example: solving a batch of mass balance problems over a client stream
//
// Each problem is validated and solved independently. Invalid entries come
// back in-line with status INVALID instead of failing the whole batch.

use futures::stream;
use tonic::Request;

pub mod mass_balance {
    tonic::include_proto!("mass_balance");
}

use mass_balance::{
    mass_balance_service_client::MassBalanceServiceClient, DegeneratePolicy, MassBalanceProblem,
    SolutionStatus,
};

fn problem(name: &str, m1: f64, x1: f64, x3: f64) -> MassBalanceProblem {
    MassBalanceProblem {
        initial_mass: m1,
        initial_solute_fraction: x1,
        final_solute_fraction: x3,
        name: name.to_string(),
        degenerate_policy: DegeneratePolicy::Sentinel as i32,
    }
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let mut client = MassBalanceServiceClient::connect("http://127.0.0.1:50051").await?;

    let problems = vec![
        problem("Pulp dilution", 50.0, 0.07, 0.10),
        problem("Syrup from water", 100.0, 0.0, 0.5),
        problem("Jam base", 250.0, 0.12, 0.65),
        problem("Pure target", 10.0, 0.2, 1.0),
        problem("Already sweeter", 40.0, 0.3, 0.2),
        problem("No mass", 0.0, 0.05, 0.1),
    ];

    println!("=== Mass Balance Batch (gRPC Streaming) ===\n");
    println!("Streaming {} problems...\n", problems.len());

    let response = client.solve_stream(Request::new(stream::iter(problems))).await?;
    let batch = response.into_inner();

    println!("{:<18} {:>12} {:>12}  Status", "Problem", "M3", "M2");
    println!("{}", "─".repeat(60));

    for result in &batch.results {
        match SolutionStatus::try_from(result.status) {
            Ok(SolutionStatus::Solved) => {
                println!(
                    "{:<18} {:>9.2} kg {:>9.2} kg  ✓",
                    result.name, result.final_mass, result.additive_mass
                );
            }
            Ok(SolutionStatus::NoFiniteSolution) => {
                println!("{:<18} {:>12} {:>12}  ⚠ no finite solution", result.name, "-", "-");
            }
            _ => {
                println!("{:<18} {:>12} {:>12}  ✗ {}", result.name, "-", "-", result.message);
            }
        }
    }

    println!("\nSolved: {}  Rejected: {}", batch.solved, batch.rejected);

    Ok(())
}
