use crate::error::ScalarNetError;
use crate::nn::ParameterVector;
use crate::ops::traits::Scalar;

/// Trait defining the common interface for all optimizers.
///
/// Optimizers are responsible for updating model parameters based on their gradients.
pub trait Optimizer<T: Scalar = f64> {
    /// Performs a single optimization step.
    ///
    /// Reads the gradients accumulated on the parameters and updates their
    /// data in place. Gradients are not cleared: call `zero_grad` before the
    /// next backward pass.
    fn step(&mut self) -> Result<(), ScalarNetError>;

    /// Clears the gradients of all parameters managed by the optimizer.
    fn zero_grad(&mut self) {
        self.parameters().zero_grad();
    }

    /// The parameters this optimizer updates, in the order its state is
    /// aligned with.
    fn parameters(&self) -> &ParameterVector<T>;
}
