//! Finite-difference verification of backward rules.

use crate::autograd::BackwardOptions;
use crate::error::ScalarNetError;
use crate::ops::traits::Scalar;
use crate::value::Value;
use approx::relative_eq;
use log::debug;
use thiserror::Error;

/// Errors produced by [`check_grad`].
#[derive(Error, Debug, PartialEq)]
pub enum GradCheckError {
    #[error("Gradient check failed for input {input_index}: analytical grad {analytical_grad:?} != numerical grad {numerical_grad:?}. Difference: {difference:?}")]
    GradientMismatch {
        input_index: usize,
        analytical_grad: f64,
        numerical_grad: f64,
        difference: f64,
    },

    #[error("Forward function execution failed during gradient check: {0}")]
    ForwardPassError(ScalarNetError),

    #[error("Backward pass execution failed during gradient check: {0}")]
    BackwardPassError(ScalarNetError),

    #[error("Non-finite value for input {input_index}: analytical {analytical_grad:?}, numerical {numerical_grad:?}")]
    NonFinite {
        input_index: usize,
        analytical_grad: f64,
        numerical_grad: f64,
    },
}

impl From<ScalarNetError> for GradCheckError {
    fn from(err: ScalarNetError) -> Self {
        GradCheckError::ForwardPassError(err)
    }
}

/// Compares the gradients from a backward pass against central differences.
///
/// `func` builds a scalar output from tracked leaves holding `inputs`. For
/// every input `i` the analytical gradient is compared with
/// `(f(x + eps e_i) - f(x - eps e_i)) / (2 eps)`, using `tolerance` both as
/// absolute and relative bound.
///
/// # Arguments
/// * `func`: Builds the output; called once for the backward pass and twice
///   per input for the perturbed evaluations.
/// * `inputs`: Point at which to check.
/// * `epsilon`: Perturbation size.
/// * `tolerance`: Allowed absolute/relative difference.
pub fn check_grad<T, F>(
    func: F,
    inputs: &[T],
    epsilon: f64,
    tolerance: f64,
) -> Result<(), GradCheckError>
where
    T: Scalar,
    F: Fn(&[Value<T>]) -> Result<Value<T>, ScalarNetError>,
{
    // --- Analytical gradients ---
    let leaves: Vec<Value<T>> = inputs.iter().map(|&x| Value::new(x)).collect();
    let output = func(&leaves)?;
    output
        .backward_with(&BackwardOptions::unclipped())
        .map_err(GradCheckError::BackwardPassError)?;
    let analytical: Vec<f64> = leaves.iter().map(|l| l.grad().as_f64()).collect();

    // --- Numerical gradients ---
    let eps = T::from_f64(epsilon)?;
    let two_eps = 2.0 * epsilon;
    for (i, &analytical_grad) in analytical.iter().enumerate() {
        let loss_plus = evaluate_perturbed(&func, inputs, i, eps)?;
        let loss_minus = evaluate_perturbed(&func, inputs, i, -eps)?;
        let numerical_grad = (loss_plus - loss_minus) / two_eps;

        debug!(
            "grad check input {}: analytical={} numerical={}",
            i, analytical_grad, numerical_grad
        );

        if !analytical_grad.is_finite() || !numerical_grad.is_finite() {
            return Err(GradCheckError::NonFinite {
                input_index: i,
                analytical_grad,
                numerical_grad,
            });
        }
        if !relative_eq!(
            analytical_grad,
            numerical_grad,
            epsilon = tolerance,
            max_relative = tolerance
        ) {
            return Err(GradCheckError::GradientMismatch {
                input_index: i,
                analytical_grad,
                numerical_grad,
                difference: (analytical_grad - numerical_grad).abs(),
            });
        }
    }
    Ok(())
}

fn evaluate_perturbed<T, F>(func: &F, inputs: &[T], index: usize, delta: T) -> Result<f64, GradCheckError>
where
    T: Scalar,
    F: Fn(&[Value<T>]) -> Result<Value<T>, ScalarNetError>,
{
    let perturbed: Vec<Value<T>> = inputs
        .iter()
        .enumerate()
        .map(|(j, &x)| Value::new(if j == index { x + delta } else { x }))
        .collect();
    Ok(func(&perturbed)?.data().as_f64())
}

#[cfg(test)]
#[path = "grad_check_test.rs"]
mod tests;
