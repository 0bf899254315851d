use crate::error::ScalarNetError;
use crate::model::Network;
use crate::nn::{Activation, Layer, Neuron};
use crate::value::Value;

/// Checks that the handles' forward values match `expected` within `tolerance`.
/// Panics with the first offending index otherwise.
pub fn check_values_near(actual: &[Value<f64>], expected: &[f64], tolerance: f64) {
    assert_eq!(actual.len(), expected.len(), "Length mismatch");
    for (i, (a, e)) in actual.iter().zip(expected.iter()).enumerate() {
        let diff = (a.data() - e).abs();
        if diff > tolerance {
            panic!(
                "Data mismatch at index {}: actual={:?}, expected={:?}, diff={:?}, tolerance={:?}",
                i,
                a.data(),
                e,
                diff,
                tolerance
            );
        }
    }
}

/// Builds a single-layer network with explicit parameters: one row of
/// `weights` and one entry of `biases` per output neuron.
pub fn single_layer_network(
    weights: &[Vec<f64>],
    biases: &[f64],
    activation: Activation,
) -> Result<Network<f64>, ScalarNetError> {
    let neurons = weights
        .iter()
        .zip(biases.iter())
        .map(|(w, &b)| Neuron::from_parts(w, b, activation))
        .collect();
    Network::new(vec![Layer::from_neurons(neurons, activation)?])
}
