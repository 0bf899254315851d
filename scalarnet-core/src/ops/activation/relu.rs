use crate::autograd::{accumulate_grad, operand_data, BackwardOp, WeakNodeRef};
use crate::error::ScalarNetError;
use crate::ops::apply_unary_op;
use crate::ops::traits::Scalar;
use crate::value::Value;
use crate::value_data::Operation;

/// Backward pass structure for the ReLU operation.
#[derive(Debug)]
struct ReluBackward<T: Scalar> {
    a: WeakNodeRef<T>,
}

impl<T: Scalar> BackwardOp<T> for ReluBackward<T> {
    fn backward(&self, grad_output: T, _output_data: T) -> Result<(), ScalarNetError> {
        // Zero derivative at x == 0.
        if operand_data(&self.a, "relu")? > T::zero() {
            accumulate_grad(&self.a, grad_output, "relu")?;
        }
        Ok(())
    }
}

/// `max(0, a)`.
pub fn relu_op<T: Scalar>(a: &Value<T>) -> Value<T> {
    apply_unary_op(
        a,
        |x| if x > T::zero() { x } else { T::zero() },
        Operation::Relu,
        |a| Box::new(ReluBackward { a }),
    )
}

#[cfg(test)]
#[path = "relu_test.rs"]
mod tests;
