use crate::autograd::{accumulate_grad, BackwardOp, WeakNodeRef};
use crate::error::ScalarNetError;
use crate::ops::apply_binary_op;
use crate::ops::traits::Scalar;
use crate::value::Value;
use crate::value_data::Operation;

// --- Backward Operation Structure ---

/// Backward context for addition: both operands receive the output gradient.
#[derive(Debug)]
struct AddBackward<T: Scalar> {
    a: WeakNodeRef<T>,
    b: WeakNodeRef<T>,
}

impl<T: Scalar> BackwardOp<T> for AddBackward<T> {
    fn backward(&self, grad_output: T, _output_data: T) -> Result<(), ScalarNetError> {
        accumulate_grad(&self.a, grad_output, "add")?;
        accumulate_grad(&self.b, grad_output, "add")
    }
}

/// `a + b`.
///
/// `x + x` records `x` as a single parent and accumulates twice into it.
pub fn add_op<T: Scalar>(a: &Value<T>, b: &Value<T>) -> Value<T> {
    apply_binary_op(a, b, |x, y| x + y, Operation::Add, |a, b| {
        Box::new(AddBackward { a, b })
    })
}

#[cfg(test)]
#[path = "add_test.rs"]
mod tests;
