use crate::error::ScalarNetError;
use crate::nn::layers::Neuron;
use crate::nn::{Activation, Module, ParameterVector};
use crate::ops::activation::softmax::softmax_numeric;
use crate::ops::activation::softmax_op;
use crate::ops::traits::Scalar;
use crate::value::Value;
use log::debug;

/// `nout` neurons reading the same `nin` inputs, sharing one activation.
///
/// With `Activation::Softmax` the layer normalises its neurons' affine
/// outputs with a softmax across the whole output vector.
#[derive(Debug)]
pub struct Layer<T: Scalar = f64> {
    neurons: Vec<Neuron<T>>,
    activation: Activation,
    nin: usize,
}

impl<T: Scalar> Layer<T> {
    pub fn new(nin: usize, nout: usize, activation: Activation) -> Result<Self, ScalarNetError> {
        Self::with_rng(nin, nout, activation, &mut rand::thread_rng())
    }

    pub fn with_rng<R: rand::Rng + ?Sized>(
        nin: usize,
        nout: usize,
        activation: Activation,
        rng: &mut R,
    ) -> Result<Self, ScalarNetError> {
        if nout == 0 {
            return Err(ScalarNetError::ConfigurationError(
                "a layer needs at least one neuron".to_string(),
            ));
        }
        let mut neurons = Vec::with_capacity(nout);
        for _ in 0..nout {
            neurons.push(Neuron::with_rng(nin, nout, activation, &mut *rng)?);
        }
        debug!("Created {:?} layer {} -> {}", activation, nin, nout);
        Ok(Layer {
            neurons,
            activation,
            nin,
        })
    }

    /// Assembles a layer from existing neurons.
    ///
    /// # Errors
    /// `ConfigurationError` if `neurons` is empty, or if the neurons differ
    /// in input width or activation from each other or from `activation`.
    pub fn from_neurons(neurons: Vec<Neuron<T>>, activation: Activation) -> Result<Self, ScalarNetError> {
        let nin = match neurons.first() {
            Some(first) => first.nin(),
            None => {
                return Err(ScalarNetError::ConfigurationError(
                    "a layer needs at least one neuron".to_string(),
                ))
            }
        };
        for (i, neuron) in neurons.iter().enumerate() {
            if neuron.nin() != nin {
                return Err(ScalarNetError::ConfigurationError(format!(
                    "neuron {} has {} inputs, expected {}",
                    i,
                    neuron.nin(),
                    nin
                )));
            }
            if neuron.activation() != activation {
                return Err(ScalarNetError::ConfigurationError(format!(
                    "neuron {} has activation {:?}, layer declares {:?}",
                    i,
                    neuron.activation(),
                    activation
                )));
            }
        }
        Ok(Layer {
            neurons,
            activation,
            nin,
        })
    }

    pub fn nin(&self) -> usize {
        self.nin
    }

    pub fn nout(&self) -> usize {
        self.neurons.len()
    }

    pub fn activation(&self) -> Activation {
        self.activation
    }

    pub fn neurons(&self) -> &[Neuron<T>] {
        &self.neurons
    }

    /// Graph-free evaluation with the same arithmetic as [`Module::forward`].
    pub fn predict(&self, input: &[T]) -> Result<Vec<T>, ScalarNetError> {
        let outputs = self
            .neurons
            .iter()
            .map(|n| n.predict(input))
            .collect::<Result<Vec<_>, _>>()?;
        Ok(match self.activation {
            Activation::Softmax => softmax_numeric(&outputs),
            _ => outputs,
        })
    }
}

impl<T: Scalar> Module<T> for Layer<T> {
    type Output = Vec<Value<T>>;

    fn forward(&self, input: &[Value<T>]) -> Result<Vec<Value<T>>, ScalarNetError> {
        let outputs = self
            .neurons
            .iter()
            .map(|n| n.forward(input))
            .collect::<Result<Vec<_>, _>>()?;
        Ok(match self.activation {
            Activation::Softmax => softmax_op(&outputs),
            _ => outputs,
        })
    }

    fn parameters(&self) -> ParameterVector<T> {
        let mut params = ParameterVector::default();
        for neuron in &self.neurons {
            params.extend(neuron.parameters());
        }
        params
    }

    fn named_parameters(&self) -> Vec<(String, Value<T>)> {
        self.neurons
            .iter()
            .enumerate()
            .flat_map(|(i, n)| {
                n.named_parameters()
                    .into_iter()
                    .map(move |(name, p)| (format!("neurons.{}.{}", i, name), p))
            })
            .collect()
    }
}

#[cfg(test)]
#[path = "layer_test.rs"]
mod tests;
