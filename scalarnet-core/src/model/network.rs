use crate::error::ScalarNetError;
use crate::nn::{Activation, Layer, Module, ParameterVector};
use crate::ops::traits::Scalar;
use crate::value::Value;
use log::debug;

/// A multilayer perceptron: layers applied in sequence.
///
/// The shape is fixed at construction; training only mutates the parameter
/// values in place.
#[derive(Debug)]
pub struct Network<T: Scalar = f64> {
    layers: Vec<Layer<T>>,
}

impl<T: Scalar> Network<T> {
    /// Chains `layers`.
    ///
    /// # Errors
    /// `ConfigurationError` when `layers` is empty or when a layer's output
    /// width differs from the next layer's input width.
    pub fn new(layers: Vec<Layer<T>>) -> Result<Self, ScalarNetError> {
        if layers.is_empty() {
            return Err(ScalarNetError::ConfigurationError(
                "a network needs at least one layer".to_string(),
            ));
        }
        for (i, pair) in layers.windows(2).enumerate() {
            if pair[0].nout() != pair[1].nin() {
                return Err(ScalarNetError::ConfigurationError(format!(
                    "layer {} outputs {} values but layer {} expects {}",
                    i,
                    pair[0].nout(),
                    i + 1,
                    pair[1].nin()
                )));
            }
        }
        let network = Network { layers };
        debug!(
            "Created network {} -> {} with {} layers and {} parameters",
            network.nin(),
            network.nout(),
            network.layers.len(),
            network.num_parameters()
        );
        Ok(network)
    }

    /// Builds an MLP from a list of widths: `sizes[0]` inputs, then one layer
    /// per following entry. Every layer uses `hidden` except the last, which
    /// uses `output`.
    pub fn from_sizes(
        sizes: &[usize],
        hidden: Activation,
        output: Activation,
    ) -> Result<Self, ScalarNetError> {
        Self::from_sizes_with_rng(sizes, hidden, output, &mut rand::thread_rng())
    }

    pub fn from_sizes_with_rng<R: rand::Rng + ?Sized>(
        sizes: &[usize],
        hidden: Activation,
        output: Activation,
        rng: &mut R,
    ) -> Result<Self, ScalarNetError> {
        if sizes.len() < 2 {
            return Err(ScalarNetError::ConfigurationError(format!(
                "need an input width and at least one layer width, got {:?}",
                sizes
            )));
        }
        let last = sizes.len() - 2;
        let mut layers = Vec::with_capacity(sizes.len() - 1);
        for (i, pair) in sizes.windows(2).enumerate() {
            let activation = if i == last { output } else { hidden };
            layers.push(Layer::with_rng(pair[0], pair[1], activation, &mut *rng)?);
        }
        Self::new(layers)
    }

    pub fn layers(&self) -> &[Layer<T>] {
        &self.layers
    }

    pub fn nin(&self) -> usize {
        self.layers.first().map_or(0, |l| l.nin())
    }

    pub fn nout(&self) -> usize {
        self.layers.last().map_or(0, |l| l.nout())
    }

    /// The full parameter vector, in layer, neuron, weight, bias order.
    pub fn get_parameters(&self) -> ParameterVector<T> {
        self.parameters()
    }

    /// Forward pass building a graph, with the inputs fed as untracked
    /// constants.
    pub fn forward_graph(&self, input: &[T]) -> Result<Vec<Value<T>>, ScalarNetError> {
        let inputs: Vec<Value<T>> = input.iter().map(|&x| Value::constant(x)).collect();
        self.forward(&inputs)
    }

    /// Graph-free forward pass returning the output layer's values.
    pub fn forward_values(&self, input: &[T]) -> Result<Vec<T>, ScalarNetError> {
        let mut current = input.to_vec();
        for layer in &self.layers {
            current = layer.predict(&current)?;
        }
        Ok(current)
    }

    /// Index of the largest output (the first one on ties), computed without
    /// building a graph.
    ///
    /// Agrees with the argmax of [`Network::forward_graph`] for the same
    /// parameters and input.
    pub fn predict(&self, input: &[T]) -> Result<usize, ScalarNetError> {
        let outputs = self.forward_values(input)?;
        argmax(&outputs).ok_or_else(|| {
            ScalarNetError::InternalError("network produced no outputs".to_string())
        })
    }
}

/// Index of the first maximal element.
pub fn argmax<T: Scalar>(values: &[T]) -> Option<usize> {
    let mut best: Option<(usize, T)> = None;
    for (i, &v) in values.iter().enumerate() {
        match best {
            None => best = Some((i, v)),
            Some((_, b)) if v > b => best = Some((i, v)),
            _ => {}
        }
    }
    best.map(|(i, _)| i)
}

impl<T: Scalar> Module<T> for Network<T> {
    type Output = Vec<Value<T>>;

    fn forward(&self, input: &[Value<T>]) -> Result<Vec<Value<T>>, ScalarNetError> {
        let mut current = input.to_vec();
        for layer in &self.layers {
            current = layer.forward(&current)?;
        }
        Ok(current)
    }

    fn parameters(&self) -> ParameterVector<T> {
        let mut params = ParameterVector::default();
        for layer in &self.layers {
            params.extend(layer.parameters());
        }
        params
    }

    fn named_parameters(&self) -> Vec<(String, Value<T>)> {
        self.layers
            .iter()
            .enumerate()
            .flat_map(|(i, layer)| {
                layer
                    .named_parameters()
                    .into_iter()
                    .map(move |(name, p)| (format!("layers.{}.{}", i, name), p))
            })
            .collect()
    }
}

#[cfg(test)]
#[path = "network_test.rs"]
mod tests;
