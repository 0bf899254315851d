use crate::autograd::{accumulate_grad, operand_data, BackwardOp, WeakNodeRef};
use crate::error::ScalarNetError;
use crate::ops::apply_binary_op;
use crate::ops::traits::Scalar;
use crate::value::Value;
use crate::value_data::Operation;

// --- Backward Operation Structure ---

/// Backward context for multiplication.
#[derive(Debug)]
struct MulBackward<T: Scalar> {
    a: WeakNodeRef<T>,
    b: WeakNodeRef<T>,
}

impl<T: Scalar> BackwardOp<T> for MulBackward<T> {
    fn backward(&self, grad_output: T, _output_data: T) -> Result<(), ScalarNetError> {
        // Read both before writing: `a` and `b` may be the same node.
        let a_data = operand_data(&self.a, "mul")?;
        let b_data = operand_data(&self.b, "mul")?;
        // grad_a = grad_output * b
        accumulate_grad(&self.a, b_data * grad_output, "mul")?;
        // grad_b = grad_output * a
        accumulate_grad(&self.b, a_data * grad_output, "mul")
    }
}

/// `a * b`.
pub fn mul_op<T: Scalar>(a: &Value<T>, b: &Value<T>) -> Value<T> {
    apply_binary_op(a, b, |x, y| x * y, Operation::Multiply, |a, b| {
        Box::new(MulBackward { a, b })
    })
}

#[cfg(test)]
#[path = "mul_test.rs"]
mod tests;
