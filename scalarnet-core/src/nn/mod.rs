// src/nn/mod.rs
// Neurons, layers, parameters and losses built on `Value`.

pub mod activation;
pub mod init;
pub mod layers;
pub mod losses;
pub mod module;
pub mod parameter;

pub use activation::Activation;
pub use layers::{Layer, Neuron};
pub use module::Module;
pub use parameter::ParameterVector;
