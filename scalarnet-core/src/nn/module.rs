use crate::error::ScalarNetError;
use crate::nn::ParameterVector;
use crate::ops::traits::Scalar;
use crate::value::Value;
use std::fmt::Debug;

/// The base trait for the network building blocks (neurons, layers, networks).
///
/// A module maps input handles to output handles, building graph nodes as it
/// goes, and owns trainable parameters that persist across forward passes.
pub trait Module<T: Scalar = f64>: Debug {
    /// What one forward pass produces (one value for a neuron, a vector for
    /// a layer or a network).
    type Output;

    /// Performs a forward pass of the module.
    ///
    /// # Errors
    /// `DimensionMismatch` when the input length differs from the module's
    /// input width.
    fn forward(&self, input: &[Value<T>]) -> Result<Self::Output, ScalarNetError>;

    /// All learnable parameters, in a deterministic order that stays the same
    /// across calls.
    fn parameters(&self) -> ParameterVector<T>;

    /// Parameters paired with hierarchical names such as
    /// `layers.0.neurons.2.weight.1`.
    fn named_parameters(&self) -> Vec<(String, Value<T>)>;

    fn num_parameters(&self) -> usize {
        self.parameters().len()
    }

    /// Resets every parameter's gradient to zero.
    fn zero_grad(&self) {
        self.parameters().zero_grad();
    }
}
