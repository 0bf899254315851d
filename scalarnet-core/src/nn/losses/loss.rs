use crate::autograd::BackwardOptions;
use crate::error::ScalarNetError;
use crate::model::Network;
use crate::ops::traits::Scalar;
use crate::value::Value;
use log::{debug, trace};
use std::fmt::Debug;

/// Lower clamp applied to probabilities before taking their logarithm
/// (the upper clamp is `1 - epsilon`).
pub const DEFAULT_LOG_EPSILON: f64 = 1e-7;

/// Per-example loss formula.
pub trait Criterion<T: Scalar>: Debug {
    /// What one example is labelled with.
    type Target;

    /// Returns `accumulator` with this example's contribution folded in.
    ///
    /// `epsilon` is the clamp applied to outputs before any logarithm.
    ///
    /// # Errors
    /// `InvalidTarget` when `target` does not describe a class of `outputs`.
    fn accumulate(
        &self,
        accumulator: &Value<T>,
        outputs: &[Value<T>],
        target: &Self::Target,
        epsilon: T,
    ) -> Result<Value<T>, ScalarNetError>;
}

/// A scalar loss accumulator bound to one network.
///
/// `compute_loss` and `compute_batch_loss` grow the accumulator's graph;
/// `backward` propagates from it into the network's parameters; `zero`
/// swaps in a fresh accumulator so that the next pass shares nothing with
/// the previous graph.
#[derive(Debug)]
pub struct Loss<'n, C, T = f64>
where
    C: Criterion<T>,
    T: Scalar,
{
    network: &'n Network<T>,
    criterion: C,
    accumulator: Value<T>,
    epsilon: T,
    backward_options: BackwardOptions<T>,
}

impl<'n, C, T> Loss<'n, C, T>
where
    C: Criterion<T>,
    T: Scalar,
{
    pub fn new(network: &'n Network<T>, criterion: C) -> Result<Self, ScalarNetError> {
        Ok(Loss {
            network,
            criterion,
            accumulator: Value::constant(T::zero()),
            epsilon: T::from_f64(DEFAULT_LOG_EPSILON)?,
            backward_options: BackwardOptions::default(),
        })
    }

    /// Uses `epsilon` instead of [`DEFAULT_LOG_EPSILON`] for the log clamp.
    ///
    /// # Errors
    /// `ConfigurationError` unless `0 < epsilon < 0.5`.
    pub fn with_epsilon(mut self, epsilon: T) -> Result<Self, ScalarNetError> {
        let half = T::from_f64(0.5)?;
        if !(epsilon > T::zero() && epsilon < half) {
            return Err(ScalarNetError::ConfigurationError(format!(
                "log clamp epsilon must lie in (0, 0.5), got {}",
                epsilon
            )));
        }
        self.epsilon = epsilon;
        Ok(self)
    }

    /// Options used by [`Loss::backward`].
    pub fn with_backward_options(
        mut self,
        options: BackwardOptions<T>,
    ) -> Result<Self, ScalarNetError> {
        options.validate()?;
        self.backward_options = options;
        Ok(self)
    }

    pub fn network(&self) -> &'n Network<T> {
        self.network
    }

    pub fn criterion(&self) -> &C {
        &self.criterion
    }

    pub fn epsilon(&self) -> T {
        self.epsilon
    }

    /// The current root node.
    pub fn accumulator(&self) -> &Value<T> {
        &self.accumulator
    }

    /// The accumulated loss value.
    pub fn get(&self) -> T {
        self.accumulator.data()
    }

    /// Replaces the accumulator with a fresh zero node. The previous graph is
    /// released once nothing else holds it.
    pub fn zero(&mut self) {
        self.accumulator = Value::constant(T::zero());
    }

    /// Runs the network on one example and adds its loss to the accumulator.
    ///
    /// Returns the accumulator after the update.
    pub fn compute_loss(
        &mut self,
        input: &[T],
        target: &C::Target,
    ) -> Result<Value<T>, ScalarNetError> {
        let outputs = self.network.forward_graph(input)?;
        self.accumulator =
            self.criterion
                .accumulate(&self.accumulator, &outputs, target, self.epsilon)?;
        trace!("{:?}: accumulated loss {}", self.criterion, self.accumulator.data());
        Ok(self.accumulator.clone())
    }

    /// Adds every example of the batch, then divides the accumulator by the
    /// batch size.
    ///
    /// The division applies to the whole accumulator, including anything left
    /// from earlier calls that was not cleared with [`Loss::zero`].
    ///
    /// # Errors
    /// `BatchSizeMismatch` when the slices differ in length, `EmptyBatch`
    /// when they are empty, and any error of [`Loss::compute_loss`]. On error
    /// the accumulator is left as it was before the call.
    pub fn compute_batch_loss(
        &mut self,
        inputs: &[Vec<T>],
        targets: &[C::Target],
    ) -> Result<Value<T>, ScalarNetError> {
        if inputs.len() != targets.len() {
            return Err(ScalarNetError::BatchSizeMismatch {
                inputs: inputs.len(),
                targets: targets.len(),
            });
        }
        if inputs.is_empty() {
            return Err(ScalarNetError::EmptyBatch);
        }
        let previous = self.accumulator.clone();
        for (input, target) in inputs.iter().zip(targets.iter()) {
            if let Err(e) = self.compute_loss(input, target) {
                self.accumulator = previous;
                return Err(e);
            }
        }
        let batch_size = T::from_usize(inputs.len())?;
        self.accumulator = &self.accumulator / batch_size;
        debug!(
            "{:?}: batch of {} examples, loss {}",
            self.criterion,
            inputs.len(),
            self.accumulator.data()
        );
        Ok(self.accumulator.clone())
    }

    /// Backpropagates from the accumulator.
    pub fn backward(&self) -> Result<(), ScalarNetError> {
        self.accumulator.backward_with(&self.backward_options)
    }
}

impl<'n, C, T> Loss<'n, C, T>
where
    C: Criterion<T> + Default,
    T: Scalar,
{
    /// A loss with the criterion's default configuration.
    pub fn from_network(network: &'n Network<T>) -> Result<Self, ScalarNetError> {
        Self::new(network, C::default())
    }
}

/// Clamps a probability into `[epsilon, 1 - epsilon]` and takes its log.
pub(crate) fn clamped_log<T: Scalar>(probability: &Value<T>, epsilon: T) -> Value<T> {
    probability.clamp(epsilon, T::one() - epsilon).log()
}

/// Checks a class index against the output width.
pub(crate) fn check_class_index(index: usize, num_classes: usize) -> Result<(), ScalarNetError> {
    if index >= num_classes {
        return Err(ScalarNetError::InvalidTarget {
            reason: format!(
                "class index {} out of range for {} outputs",
                index, num_classes
            ),
        });
    }
    Ok(())
}

#[cfg(test)]
#[path = "loss_test.rs"]
mod tests;
