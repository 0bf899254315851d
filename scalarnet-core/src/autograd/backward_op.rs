use crate::error::ScalarNetError;
use crate::ops::traits::Scalar;
use std::fmt::Debug;

/// Gradient rule attached to a node produced by an operation.
///
/// Each operation (add, mul, exp, ...) has a struct implementing this trait
/// that stores weak references to its operands. The rule never references
/// the node it is attached to: the backward pass hands it that node's
/// accumulated gradient and cached forward value instead, so no node can
/// keep itself alive through its own rule.
pub trait BackwardOp<T: Scalar>: Debug {
    /// Adds `d(output)/d(operand) * grad_output` into each tracked operand.
    ///
    /// # Arguments
    /// * `grad_output`: the gradient accumulated so far on the output node.
    /// * `output_data`: the output node's forward value (reused by rules such
    ///   as `exp` and `tanh` whose derivative is expressed through it).
    fn backward(&self, grad_output: T, output_data: T) -> Result<(), ScalarNetError>;
}
