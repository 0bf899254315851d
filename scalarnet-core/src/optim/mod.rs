// scalarnet-core/src/optim/mod.rs

//! Optimizers for training networks.
//!
//! This module provides the `Optimizer` trait, `Adam` with its `AdamConfig`,
//! plain gradient descent (`Sgd`), and gradient clipping utilities. All of
//! them operate on a `ParameterVector`, whose handles share the network's
//! parameter nodes, so updates land directly in the network.

pub mod adam;
pub mod grad_clipping;
pub mod optimizer_trait;
pub mod sgd;

pub use adam::{Adam, AdamConfig};
pub use grad_clipping::{clip_grad_norm, clip_grad_value};
pub use optimizer_trait::Optimizer;
pub use sgd::Sgd;
