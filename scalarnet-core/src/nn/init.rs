//! Random initialisation of neuron weights.

use crate::error::ScalarNetError;
use crate::nn::Activation;
use crate::ops::traits::Scalar;
use rand::Rng;
use rand_distr::{Distribution, Normal};

/// Constant every bias starts from. Non-zero so ReLU units do not start dead.
pub const BIAS_INIT: f64 = 1e-5;

/// Draws `count` samples from `N(0, std^2)`.
fn normal_samples<T, R>(std: f64, count: usize, rng: &mut R) -> Result<Vec<T>, ScalarNetError>
where
    T: Scalar,
    R: Rng + ?Sized,
{
    let normal = Normal::new(0.0, std).map_err(|e| {
        ScalarNetError::ConfigurationError(format!("invalid init std {}: {}", std, e))
    })?;
    (0..count)
        .map(|_| T::from_f64(normal.sample(&mut *rng)))
        .collect()
}

/// He-normal: std = sqrt(2 / nin).
pub fn he_normal<T, R>(nin: usize, count: usize, rng: &mut R) -> Result<Vec<T>, ScalarNetError>
where
    T: Scalar,
    R: Rng + ?Sized,
{
    if nin == 0 {
        return Err(ScalarNetError::ConfigurationError(
            "He initialisation needs at least one input".to_string(),
        ));
    }
    normal_samples((2.0 / nin as f64).sqrt(), count, rng)
}

/// Xavier-normal: std = sqrt(2 / (nin + nout)).
pub fn xavier_normal<T, R>(
    nin: usize,
    nout: usize,
    count: usize,
    rng: &mut R,
) -> Result<Vec<T>, ScalarNetError>
where
    T: Scalar,
    R: Rng + ?Sized,
{
    if nin + nout == 0 {
        return Err(ScalarNetError::ConfigurationError(
            "Xavier initialisation needs a non-empty fan".to_string(),
        ));
    }
    normal_samples((2.0 / (nin + nout) as f64).sqrt(), count, rng)
}

/// `nin` initial weights for a neuron with the given activation: He-normal
/// for ReLU, Xavier-normal otherwise.
pub fn init_weights<T, R>(
    activation: Activation,
    nin: usize,
    nout: usize,
    rng: &mut R,
) -> Result<Vec<T>, ScalarNetError>
where
    T: Scalar,
    R: Rng + ?Sized,
{
    match activation {
        Activation::Relu => he_normal(nin, nin, rng),
        Activation::Softmax | Activation::Identity | Activation::Tanh => {
            xavier_normal(nin, nout, nin, rng)
        }
    }
}

#[cfg(test)]
#[path = "init_test.rs"]
mod tests;
