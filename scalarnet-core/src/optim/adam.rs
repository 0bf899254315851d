use crate::error::ScalarNetError;
use crate::nn::ParameterVector;
use crate::ops::traits::Scalar;
use crate::optim::Optimizer;
use log::{debug, warn};

/// Hyperparameters of [`Adam`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AdamConfig<T: Scalar = f64> {
    pub step_size: T,
    pub beta1: T,
    pub beta2: T,
    pub eps: T,
    /// Raw gradients are clamped into `[-clip_val, clip_val]` before the
    /// moment update.
    pub clip_val: T,
}

impl<T: Scalar> Default for AdamConfig<T> {
    /// `step_size = 1e-3, beta1 = 0.9, beta2 = 0.999, eps = 1e-8, clip_val = 1`.
    fn default() -> Self {
        AdamConfig {
            step_size: hyperparameter(1e-3),
            beta1: hyperparameter(0.9),
            beta2: hyperparameter(0.999),
            eps: hyperparameter(1e-8),
            clip_val: T::one(),
        }
    }
}

/// Unrepresentable constants become NaN and are rejected by `validate`.
fn hyperparameter<T: Scalar>(value: f64) -> T {
    T::from_f64(value).unwrap_or_else(|_| T::nan())
}

impl<T: Scalar> AdamConfig<T> {
    pub fn step_size(mut self, step_size: T) -> Self {
        self.step_size = step_size;
        self
    }

    pub fn betas(mut self, beta1: T, beta2: T) -> Self {
        self.beta1 = beta1;
        self.beta2 = beta2;
        self
    }

    pub fn eps(mut self, eps: T) -> Self {
        self.eps = eps;
        self
    }

    pub fn clip_val(mut self, clip_val: T) -> Self {
        self.clip_val = clip_val;
        self
    }

    pub fn validate(&self) -> Result<(), ScalarNetError> {
        if !(self.step_size > T::zero()) {
            return Err(ScalarNetError::ConfigurationError(
                "Step size must be positive".to_string(),
            ));
        }
        if !(self.beta1 >= T::zero() && self.beta1 < T::one()) {
            return Err(ScalarNetError::ConfigurationError(
                "Beta1 must be in [0, 1)".to_string(),
            ));
        }
        if !(self.beta2 >= T::zero() && self.beta2 < T::one()) {
            return Err(ScalarNetError::ConfigurationError(
                "Beta2 must be in [0, 1)".to_string(),
            ));
        }
        if !(self.eps > T::zero()) {
            return Err(ScalarNetError::ConfigurationError(
                "Epsilon must be positive".to_string(),
            ));
        }
        if !(self.clip_val > T::zero()) {
            return Err(ScalarNetError::ConfigurationError(
                "Gradient clip value must be positive".to_string(),
            ));
        }
        Ok(())
    }
}

/// Adam with bias correction folded into the step size.
///
/// Moment estimates are stored per parameter, aligned by position with the
/// `ParameterVector` given at construction.
#[derive(Debug)]
pub struct Adam<T: Scalar = f64> {
    parameters: ParameterVector<T>,
    config: AdamConfig<T>,
    m: Vec<T>,
    v: Vec<T>,
    t: u64,
}

impl<T: Scalar> Adam<T> {
    pub fn new(parameters: ParameterVector<T>, config: AdamConfig<T>) -> Result<Self, ScalarNetError> {
        config.validate()?;
        let n = parameters.len();
        Ok(Adam {
            parameters,
            config,
            m: vec![T::zero(); n],
            v: vec![T::zero(); n],
            t: 0,
        })
    }

    /// Adam with the default hyperparameters.
    pub fn with_defaults(parameters: ParameterVector<T>) -> Result<Self, ScalarNetError> {
        Self::new(parameters, AdamConfig::default())
    }

    pub fn config(&self) -> &AdamConfig<T> {
        &self.config
    }

    /// Number of steps taken so far.
    pub fn step_count(&self) -> u64 {
        self.t
    }

    pub fn first_moments(&self) -> &[T] {
        &self.m
    }

    pub fn second_moments(&self) -> &[T] {
        &self.v
    }
}

impl<T: Scalar> Optimizer<T> for Adam<T> {
    /// One Adam update:
    ///
    /// 1. `t += 1`, and every gradient is clamped in place into
    ///    `[-clip_val, clip_val]`.
    /// 2. `m = beta1 m + (1 - beta1) g`, `v = beta2 v + (1 - beta2) g^2`.
    /// 3. `alpha_t = step_size sqrt(1 - beta2^t) / (1 - beta1^t)` and
    ///    `eps_t = eps sqrt(1 - beta2^t)`.
    /// 4. `data -= alpha_t m / (sqrt(v) + eps_t)`.
    fn step(&mut self) -> Result<(), ScalarNetError> {
        self.t += 1;
        if self.parameters.is_empty() {
            warn!("Adam step {} with an empty parameter vector", self.t);
            return Ok(());
        }

        let AdamConfig {
            step_size,
            beta1,
            beta2,
            eps,
            clip_val,
        } = self.config;
        let exponent = i32::try_from(self.t).unwrap_or(i32::MAX);
        let correction2 = (T::one() - beta2.powi(exponent)).sqrt();
        let alpha_t = step_size * correction2 / (T::one() - beta1.powi(exponent));
        let eps_t = eps * correction2;
        debug!("Adam step {}: alpha_t={}", self.t, alpha_t);

        for (i, param) in self.parameters.iter().enumerate() {
            let g = param.grad().max(-clip_val).min(clip_val);
            param.set_grad(g);

            self.m[i] = beta1 * self.m[i] + (T::one() - beta1) * g;
            self.v[i] = beta2 * self.v[i] + (T::one() - beta2) * g * g;

            let update = alpha_t * self.m[i] / (self.v[i].sqrt() + eps_t);
            param.set_data(param.data() - update);
        }
        Ok(())
    }

    fn parameters(&self) -> &ParameterVector<T> {
        &self.parameters
    }
}

#[cfg(test)]
#[path = "adam_test.rs"]
mod tests;
