use crate::error::ScalarNetError;
use crate::nn::ParameterVector;
use crate::ops::traits::Scalar;
use log::debug;

/// Clips every gradient in place into `[-clip_value, clip_value]`.
///
/// # Errors
///
/// `ConfigurationError` if `clip_value` is negative or NaN.
pub fn clip_grad_value<T: Scalar>(
    parameters: &ParameterVector<T>,
    clip_value: T,
) -> Result<(), ScalarNetError> {
    if !(clip_value >= T::zero()) {
        return Err(ScalarNetError::ConfigurationError(format!(
            "clip_value must be non-negative, got {}",
            clip_value
        )));
    }
    for p in parameters {
        p.set_grad(p.grad().max(-clip_value).min(clip_value));
    }
    Ok(())
}

/// Rescales the gradients in place so that their combined L2 norm is at most
/// `max_norm`.
///
/// The gradients are viewed as one vector; when its norm exceeds `max_norm`
/// every gradient is multiplied by `max_norm / norm`.
///
/// # Returns
///
/// The total norm before clipping.
///
/// # Errors
///
/// `ConfigurationError` if `max_norm` is negative or NaN.
pub fn clip_grad_norm<T: Scalar>(
    parameters: &ParameterVector<T>,
    max_norm: T,
) -> Result<T, ScalarNetError> {
    if !(max_norm >= T::zero()) {
        return Err(ScalarNetError::ConfigurationError(format!(
            "max_norm must be non-negative, got {}",
            max_norm
        )));
    }
    let total_norm = parameters
        .iter()
        .fold(T::zero(), |acc, p| acc + p.grad() * p.grad())
        .sqrt();
    if total_norm > max_norm {
        let scale = max_norm / total_norm;
        debug!("Clipping gradient norm {} to {}", total_norm, max_norm);
        for p in parameters {
            p.set_grad(p.grad() * scale);
        }
    }
    Ok(total_norm)
}

#[cfg(test)]
#[path = "grad_clipping_test.rs"]
mod tests;
