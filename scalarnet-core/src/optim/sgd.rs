use crate::error::ScalarNetError;
use crate::nn::ParameterVector;
use crate::ops::traits::Scalar;
use crate::optim::Optimizer;
use log::{debug, warn};

/// Plain gradient descent: `data -= lr * grad` for every parameter.
#[derive(Debug)]
pub struct Sgd<T: Scalar = f64> {
    parameters: ParameterVector<T>,
    lr: T,
}

impl<T: Scalar> Sgd<T> {
    pub fn new(parameters: ParameterVector<T>, lr: T) -> Result<Self, ScalarNetError> {
        if !(lr > T::zero()) {
            return Err(ScalarNetError::ConfigurationError(
                "Learning rate must be positive".to_string(),
            ));
        }
        Ok(Sgd { parameters, lr })
    }

    pub fn lr(&self) -> T {
        self.lr
    }
}

impl<T: Scalar> Optimizer<T> for Sgd<T> {
    fn step(&mut self) -> Result<(), ScalarNetError> {
        if self.parameters.is_empty() {
            warn!("SGD step with an empty parameter vector");
            return Ok(());
        }
        debug!("SGD step over {} parameters, lr={}", self.parameters.len(), self.lr);
        for param in &self.parameters {
            param.step(self.lr);
        }
        Ok(())
    }

    fn parameters(&self) -> &ParameterVector<T> {
        &self.parameters
    }
}

#[cfg(test)]
#[path = "sgd_test.rs"]
mod tests;
