use crate::error::ScalarNetError;
use crate::nn::init::{init_weights, BIAS_INIT};
use crate::nn::{Activation, Module, ParameterVector};
use crate::ops::arithmetic::{add_op, mul_op};
use crate::ops::traits::Scalar;
use crate::value::Value;

/// One affine unit: `bias + sum(x_i * w_i)`, followed by ReLU or tanh when
/// declared. Softmax neurons stay affine; their layer applies softmax.
#[derive(Debug)]
pub struct Neuron<T: Scalar = f64> {
    weights: Vec<Value<T>>,
    bias: Value<T>,
    activation: Activation,
}

impl<T: Scalar> Neuron<T> {
    /// Creates a neuron with `nin` randomly initialised weights.
    ///
    /// `nout` is the width of the layer the neuron belongs to; it only
    /// enters the Xavier scale.
    pub fn new(nin: usize, nout: usize, activation: Activation) -> Result<Self, ScalarNetError> {
        Self::with_rng(nin, nout, activation, &mut rand::thread_rng())
    }

    /// Like [`Neuron::new`] with an explicit random source.
    pub fn with_rng<R: rand::Rng + ?Sized>(
        nin: usize,
        nout: usize,
        activation: Activation,
        rng: &mut R,
    ) -> Result<Self, ScalarNetError> {
        if nin == 0 {
            return Err(ScalarNetError::ConfigurationError(
                "a neuron needs at least one input".to_string(),
            ));
        }
        let weights: Vec<T> = init_weights(activation, nin, nout, rng)?;
        Ok(Self::from_parts(&weights, T::from_f64(BIAS_INIT)?, activation))
    }

    /// Creates a neuron with the given parameter values.
    pub fn from_parts(weights: &[T], bias: T, activation: Activation) -> Self {
        Neuron {
            weights: weights.iter().map(|&w| Value::new(w)).collect(),
            bias: Value::new(bias),
            activation,
        }
    }

    pub fn weights(&self) -> &[Value<T>] {
        &self.weights
    }

    pub fn bias(&self) -> &Value<T> {
        &self.bias
    }

    pub fn activation(&self) -> Activation {
        self.activation
    }

    pub fn nin(&self) -> usize {
        self.weights.len()
    }

    fn check_input_len(&self, actual: usize) -> Result<(), ScalarNetError> {
        if actual != self.weights.len() {
            return Err(ScalarNetError::DimensionMismatch {
                expected: self.weights.len(),
                actual,
            });
        }
        Ok(())
    }

    /// Graph-free evaluation with the same arithmetic as [`Module::forward`].
    pub fn predict(&self, input: &[T]) -> Result<T, ScalarNetError> {
        self.check_input_len(input.len())?;
        let mut rval = self.bias.data();
        for (x, w) in input.iter().zip(self.weights.iter()) {
            rval = rval + *x * w.data();
        }
        Ok(match self.activation {
            Activation::Relu => {
                if rval > T::zero() {
                    rval
                } else {
                    T::zero()
                }
            }
            Activation::Tanh => rval.tanh(),
            Activation::Softmax | Activation::Identity => rval,
        })
    }
}

impl<T: Scalar> Module<T> for Neuron<T> {
    type Output = Value<T>;

    fn forward(&self, input: &[Value<T>]) -> Result<Value<T>, ScalarNetError> {
        self.check_input_len(input.len())?;
        let mut rval = self.bias.clone();
        for (x, w) in input.iter().zip(self.weights.iter()) {
            rval = add_op(&rval, &mul_op(x, w));
        }
        Ok(match self.activation {
            Activation::Relu => rval.relu(),
            Activation::Tanh => rval.tanh(),
            Activation::Softmax | Activation::Identity => rval,
        })
    }

    /// Weights in index order, then the bias.
    fn parameters(&self) -> ParameterVector<T> {
        self.weights
            .iter()
            .chain(std::iter::once(&self.bias))
            .cloned()
            .collect()
    }

    fn named_parameters(&self) -> Vec<(String, Value<T>)> {
        let mut named: Vec<(String, Value<T>)> = self
            .weights
            .iter()
            .enumerate()
            .map(|(i, w)| (format!("weight.{}", i), w.clone()))
            .collect();
        named.push(("bias".to_string(), self.bias.clone()));
        named
    }
}

#[cfg(test)]
#[path = "neuron_test.rs"]
mod tests;
