/// Activation attached to a neuron and its layer.
///
/// `Relu` and `Tanh` are applied per neuron. `Softmax` is applied by the
/// layer across all neuron outputs, so the neurons themselves stay affine.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Activation {
    Relu,
    Softmax,
    Identity,
    Tanh,
}
