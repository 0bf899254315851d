use crate::autograd::{accumulate_grad, BackwardOp, WeakNodeRef};
use crate::error::ScalarNetError;
use crate::ops::apply_binary_op;
use crate::ops::traits::Scalar;
use crate::value::Value;
use crate::value_data::Operation;

#[derive(Debug)]
struct SubBackward<T: Scalar> {
    a: WeakNodeRef<T>,
    b: WeakNodeRef<T>,
}

impl<T: Scalar> BackwardOp<T> for SubBackward<T> {
    fn backward(&self, grad_output: T, _output_data: T) -> Result<(), ScalarNetError> {
        accumulate_grad(&self.a, grad_output, "sub")?;
        accumulate_grad(&self.b, -grad_output, "sub")
    }
}

/// `a - b`.
pub fn sub_op<T: Scalar>(a: &Value<T>, b: &Value<T>) -> Value<T> {
    apply_binary_op(a, b, |x, y| x - y, Operation::Subtract, |a, b| {
        Box::new(SubBackward { a, b })
    })
}

#[cfg(test)]
#[path = "sub_test.rs"]
mod tests;
