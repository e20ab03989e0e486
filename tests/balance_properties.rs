use massbal::{
    solve_mass_balance, ClosedFormSolver, DegeneratePolicy, MassBalanceProblem, MassBalanceSolver,
    SolutionStatus, SolverError,
};

const TOLERANCE: f64 = 1e-9;

fn close(actual: f64, expected: f64) -> bool {
    (actual - expected).abs() <= TOLERANCE * expected.abs().max(1.0)
}

/// (M1, X1, X3) with M1 > 0 and 0 <= X1 < X3 < 1
fn valid_inputs() -> Vec<(f64, f64, f64)> {
    let masses = [0.001, 1.0, 50.0, 1234.5, 1e6];
    let fractions = [0.0, 0.01, 0.07, 0.1, 0.25, 0.5, 0.8, 0.99, 0.999];

    let mut inputs = Vec::new();
    for &m1 in &masses {
        for (i, &x1) in fractions.iter().enumerate() {
            for &x3 in &fractions[i + 1..] {
                inputs.push((m1, x1, x3));
            }
        }
    }
    inputs
}

#[test]
fn solutions_close_both_balances() {
    for (m1, x1, x3) in valid_inputs() {
        let (m3, m2) = solve_mass_balance(m1, x1, x3);

        assert!(close(m3 * x3, m1 * x1 + m2 * 1.0), "solute balance for {m1}, {x1}, {x3}");
        assert!(close(m3, m1 + m2), "mass balance for {m1}, {x1}, {x3}");
        assert!(m3 >= 0.0);
    }
}

#[test]
fn typed_solutions_pass_residual_check() {
    let solver = ClosedFormSolver::new();
    for (m1, x1, x3) in valid_inputs() {
        let problem = MassBalanceProblem::new(m1, x1, x3);
        assert!(solver.validate(&problem).is_ok());

        let solution = solver.solve(&problem).unwrap();
        assert_eq!(solution.status, SolutionStatus::Solved);
        assert!(solution
            .residuals(&problem)
            .closes(problem.solver_config.tolerance));
    }
}

#[test]
fn pure_target_is_exact_sentinel() {
    for m1 in [0.5, 10.0, 1e9] {
        for x1 in [0.0, 0.2, 0.9999] {
            assert_eq!(solve_mass_balance(m1, x1, 1.0), (0.0, 0.0));
        }
    }
}

#[test]
fn raising_target_needs_more_additive() {
    let targets = [0.1, 0.2, 0.4, 0.6, 0.8, 0.9, 0.99, 0.999];
    let results: Vec<_> = targets
        .iter()
        .map(|&x3| solve_mass_balance(50.0, 0.07, x3))
        .collect();

    for pair in results.windows(2) {
        let (m3_lo, m2_lo) = pair[0];
        let (m3_hi, m2_hi) = pair[1];
        assert!(m3_hi > m3_lo);
        assert!(m2_hi > m2_lo);
    }
}

#[test]
fn scaling_initial_mass_scales_result() {
    for (m1, x1, x3) in valid_inputs() {
        let (m3, m2) = solve_mass_balance(m1, x1, x3);
        for k in [0.5, 3.0, 1000.0] {
            let (km3, km2) = solve_mass_balance(k * m1, x1, x3);
            assert!(close(km3, k * m3));
            assert!((km2 - k * m2).abs() <= TOLERANCE * (k * m3).max(1.0));
        }
    }
}

#[test]
fn equal_fractions_keep_mass() {
    for x in [0.0, 0.07, 0.5, 0.93] {
        let (m3, m2) = solve_mass_balance(50.0, x, x);
        assert!(close(m3, 50.0));
        assert!(m2.abs() <= TOLERANCE * 50.0);
    }
}

#[test]
fn worked_scenarios() {
    let (m3, m2) = solve_mass_balance(50.0, 0.07, 0.10);
    assert_eq!(format!("{m3:.2}"), "51.67");
    assert_eq!(format!("{m2:.2}"), "1.67");

    let (m3, m2) = solve_mass_balance(100.0, 0.0, 0.5);
    assert!(close(m3, 200.0));
    assert!(close(m2, 100.0));

    assert_eq!(solve_mass_balance(10.0, 0.2, 1.0), (0.0, 0.0));
}

#[test]
fn reject_policy_surfaces_error() {
    let problem = MassBalanceProblem::new(10.0, 0.2, 1.0).with_policy(DegeneratePolicy::Reject);

    match ClosedFormSolver::new().solve(&problem) {
        Err(SolverError::NoFiniteSolution {
            final_solute_fraction,
        }) => assert_eq!(final_solute_fraction, 1.0),
        other => panic!("expected NoFiniteSolution, got {other:?}"),
    }
}
