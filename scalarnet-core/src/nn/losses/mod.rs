// src/nn/losses/mod.rs
//! Loss accumulators over network outputs.
//!
//! A [`Loss`] borrows a [`Network`](crate::model::Network), runs it on each
//! example and folds the example's contribution into one scalar graph node.
//! The per-example formula is supplied by a [`Criterion`].

pub mod cce;
pub mod loss;
pub mod mse;
pub mod sparse_cce;

pub use cce::CategoricalCrossEntropy;
pub use loss::{Criterion, Loss, DEFAULT_LOG_EPSILON};
pub use mse::MeanSquaredError;
pub use sparse_cce::SparseCategoricalCrossEntropy;

/// Cross-entropy against a class index.
pub type SparseCategoricalCrossEntropyLoss<'n, T = f64> = Loss<'n, SparseCategoricalCrossEntropy, T>;

/// Cross-entropy against a one-hot vector.
pub type CategoricalCrossEntropyLoss<'n, T = f64> = Loss<'n, CategoricalCrossEntropy, T>;

/// Squared error against the one-hot encoding of a class index.
pub type MeanSquaredErrorLoss<'n, T = f64> = Loss<'n, MeanSquaredError, T>;
