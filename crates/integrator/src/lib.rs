//! Fixed-step classical fourth-order Runge-Kutta integration.
//!
//! The integrator is dimension-agnostic: it advances any derivative function
//! of signature `(state, t) -> rate` with matching input and output lengths,
//! four stage evaluations per step.

use thiserror::Error;

/// Errors raised by [`integrate`].
///
/// `E` is whatever error type the supplied derivative function produces;
/// derivative failures are wrapped, never swallowed.
#[derive(Debug, Error, PartialEq)]
pub enum IntegrationError<E> {
    /// The time grid has no entries; a trajectory needs at least the initial point.
    #[error("time grid is empty")]
    EmptyTimeGrid,
    /// The derivative function returned a vector of the wrong length.
    #[error("derivative returned {found} components, expected {expected} (step {step}, stage {stage})")]
    DimensionMismatch {
        step: usize,
        stage: usize,
        expected: usize,
        found: usize,
    },
    /// The derivative function itself failed.
    #[error("derivative failed at step {step} (t = {t}): {source}")]
    Step {
        step: usize,
        t: f64,
        source: E,
    },
}

/// Advance `derivative` from `initial` across `t_values` with the fixed step `h`.
///
/// Classical RK4: per step, stages are evaluated at `t`, `t + h/2` (twice),
/// and `t + h`, then combined as `(k1 + 2k2 + 2k3 + k4) / 6`. The returned
/// trajectory has one row per time point; row 0 is `initial` copied verbatim
/// and costs no derivative call, so a clean run makes exactly
/// `4 * (t_values.len() - 1)` derivative calls.
///
/// The step is `h` regardless of the spacing of `t_values`: entry `i - 1` is
/// only the time reference handed to the stage evaluations of step `i`. When
/// the grid is uniform with spacing `h` (see [`time_grid`]) the reported and
/// integrated times agree; otherwise they diverge and the grid is merely a
/// row count. `h` may be negative for backward integration.
///
/// On any failure only the error is returned; partially computed rows are
/// discarded rather than handed back alongside it.
pub fn integrate<F, E>(
    mut derivative: F,
    initial: &[f64],
    h: f64,
    t_values: &[f64],
) -> Result<Vec<Vec<f64>>, IntegrationError<E>>
where
    F: FnMut(&[f64], f64) -> Result<Vec<f64>, E>,
{
    if t_values.is_empty() {
        return Err(IntegrationError::EmptyTimeGrid);
    }

    let dim = initial.len();
    let mut trajectory = Vec::with_capacity(t_values.len());
    trajectory.push(initial.to_vec());

    for step in 1..t_values.len() {
        let t = t_values[step - 1];
        let variables = &trajectory[step - 1];

        let mut stage = |stage_idx: usize, state: &[f64], stage_t: f64| {
            let rate = derivative(state, stage_t).map_err(|source| IntegrationError::Step {
                step,
                t: stage_t,
                source,
            })?;
            if rate.len() != dim {
                return Err(IntegrationError::DimensionMismatch {
                    step,
                    stage: stage_idx,
                    expected: dim,
                    found: rate.len(),
                });
            }
            Ok(scale(&rate, h))
        };

        let k1 = stage(1, variables, t)?;
        let k2 = stage(2, &add_scaled(variables, &k1, 0.5), t + 0.5 * h)?;
        let k3 = stage(3, &add_scaled(variables, &k2, 0.5), t + 0.5 * h)?;
        let k4 = stage(4, &add_scaled(variables, &k3, 1.0), t + h)?;

        let mut next = variables.clone();
        for i in 0..dim {
            next[i] += (k1[i] + 2.0 * k2[i] + 2.0 * k3[i] + k4[i]) / 6.0;
        }
        trajectory.push(next);
    }

    Ok(trajectory)
}

/// Uniform time grid from `start` to `end` inclusive, `samples` points.
///
/// The spacing equals `(end - start) / (samples - 1)`; pass that same value
/// as `h` to [`integrate`] to keep reported and integrated times aligned.
pub fn time_grid(start: f64, end: f64, samples: usize) -> Vec<f64> {
    match samples {
        0 => Vec::new(),
        1 => vec![start],
        _ => {
            let dt = (end - start) / (samples - 1) as f64;
            (0..samples).map(|i| start + i as f64 * dt).collect()
        }
    }
}

fn scale(v: &[f64], s: f64) -> Vec<f64> {
    v.iter().map(|x| x * s).collect()
}

fn add_scaled(a: &[f64], b: &[f64], s: f64) -> Vec<f64> {
    a.iter().zip(b).map(|(a, b)| a + s * b).collect()
}
