use std::convert::Infallible;

use lunar_integrator::{IntegrationError, integrate, time_grid};

fn ok(rate: Vec<f64>) -> Result<Vec<f64>, Infallible> {
    Ok(rate)
}

#[test]
fn first_row_is_the_initial_state_verbatim() {
    let initial = [1.0, -2.5, 0.25];
    let t = time_grid(0.0, 1.0, 11);
    let out = integrate(|s, _| ok(s.to_vec()), &initial, 0.1, &t).unwrap();
    assert_eq!(out[0], initial.to_vec());
}

#[test]
fn equilibrium_state_stays_fixed() {
    let initial = [3.0, 4.0];
    let t = time_grid(0.0, 5.0, 51);
    let out = integrate(|s, _| ok(vec![0.0; s.len()]), &initial, 0.1, &t).unwrap();
    for row in &out {
        assert_eq!(row, &initial.to_vec());
    }
}

#[test]
fn output_shape_matches_grid_and_state() {
    let t = time_grid(0.0, 2.0, 21);
    let out = integrate(|s, _| ok(vec![1.0; s.len()]), &[0.0; 6], 0.1, &t).unwrap();
    assert_eq!(out.len(), 21);
    assert!(out.iter().all(|row| row.len() == 6));
}

#[test]
fn four_derivative_calls_per_step() {
    let mut calls = 0usize;
    let t = time_grid(0.0, 1.0, 26);
    integrate(
        |s, _| {
            calls += 1;
            ok(vec![0.0; s.len()])
        },
        &[1.0],
        0.04,
        &t,
    )
    .unwrap();
    assert_eq!(calls, 4 * 25);
}

#[test]
fn exponential_decay_matches_analytic_solution() {
    // dy/dt = -y, y(0) = 1: y(1) = e^-1 to within RK4 truncation error.
    let t = time_grid(0.0, 1.0, 101);
    let out = integrate(|s, _| ok(vec![-s[0]]), &[1.0], 0.01, &t).unwrap();
    let y_final = out.last().unwrap()[0];
    assert!((y_final - (-1.0f64).exp()).abs() < 1e-6);
}

#[test]
fn negative_step_integrates_backward() {
    // Run dy/dt = -y backward from y(1) = e^-1; y(0) recovers 1.
    let t = time_grid(1.0, 0.0, 101);
    let out = integrate(|s, _| ok(vec![-s[0]]), &[(-1.0f64).exp()], -0.01, &t).unwrap();
    let y_final = out.last().unwrap()[0];
    assert!((y_final - 1.0).abs() < 1e-6);
}

#[test]
fn empty_grid_is_rejected() {
    let err = integrate(|s, _| ok(s.to_vec()), &[1.0], 0.1, &[]).unwrap_err();
    assert_eq!(err, IntegrationError::EmptyTimeGrid);
}

#[test]
fn dimension_mismatch_is_reported_with_position() {
    let err = integrate(|_, _| ok(vec![0.0; 3]), &[1.0, 2.0], 0.1, &[0.0, 0.1]).unwrap_err();
    assert_eq!(
        err,
        IntegrationError::DimensionMismatch {
            step: 1,
            stage: 1,
            expected: 2,
            found: 3,
        }
    );
}

#[test]
fn derivative_failure_aborts_with_step_context() {
    #[derive(Debug, PartialEq)]
    struct Boom;
    impl std::fmt::Display for Boom {
        fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
            write!(f, "boom")
        }
    }
    impl std::error::Error for Boom {}

    let t = time_grid(0.0, 1.0, 11);
    let err = integrate(
        |_, stage_t| {
            if stage_t >= 0.3 {
                Err(Boom)
            } else {
                Ok(vec![1.0])
            }
        },
        &[0.0],
        0.1,
        &t,
    )
    .unwrap_err();
    match err {
        IntegrationError::Step { step, source, .. } => {
            assert_eq!(step, 3);
            assert_eq!(source, Boom);
        }
        other => panic!("expected step error, got {other:?}"),
    }
}

#[test]
fn time_grid_is_uniform_and_inclusive() {
    let t = time_grid(0.0, 1.0, 5);
    assert_eq!(t, vec![0.0, 0.25, 0.5, 0.75, 1.0]);
    assert_eq!(time_grid(2.0, 2.0, 1), vec![2.0]);
    assert!(time_grid(0.0, 1.0, 0).is_empty());

    let back = time_grid(1.0, 0.0, 3);
    assert_eq!(back, vec![1.0, 0.5, 0.0]);
}
