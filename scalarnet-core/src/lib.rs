//! Scalar reverse-mode automatic differentiation with a small neural
//! network stack on top: neurons, layers, networks, losses and optimizers.
//!
//! ```
//! use scalarnet_core::Value;
//!
//! let a = Value::new(0.5);
//! let b = Value::new(-0.25);
//! let c = &a * &b;
//! c.backward().unwrap();
//! assert_eq!(a.grad(), -0.25);
//! assert_eq!(b.grad(), 0.5);
//! ```
//!
//! `backward` clamps every node's gradient into `[-1, 1]`;
//! `backward_with(&BackwardOptions::unclipped())` gives exact gradients.

pub mod autograd;
pub mod error;
pub mod ops;
pub mod value;
pub mod value_data;

pub mod model;
pub mod nn;
pub mod optim;
pub mod utils;

pub use autograd::BackwardOptions;
pub use error::ScalarNetError;
pub use model::Network;
pub use nn::losses;
pub use nn::{Activation, Layer, Module, Neuron, ParameterVector};
pub use ops::activation::softmax_op as softmax;
pub use ops::traits::Scalar;
pub use optim::{Adam, AdamConfig, Optimizer, Sgd};
pub use value::Value;
pub use value_data::Operation;

// Re-export traits required by public functions/structs
pub use num_traits;
