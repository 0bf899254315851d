use crate::autograd::{accumulate_grad, BackwardOp, WeakNodeRef};
use crate::error::ScalarNetError;
use crate::ops::apply_unary_op;
use crate::ops::traits::Scalar;
use crate::value::Value;
use crate::value_data::Operation;

/// Backward context for `exp`. The derivative is the output itself.
#[derive(Debug)]
struct ExpBackward<T: Scalar> {
    a: WeakNodeRef<T>,
}

impl<T: Scalar> BackwardOp<T> for ExpBackward<T> {
    fn backward(&self, grad_output: T, output_data: T) -> Result<(), ScalarNetError> {
        accumulate_grad(&self.a, output_data * grad_output, "exp")
    }
}

/// `e ^ a`.
pub fn exp_op<T: Scalar>(a: &Value<T>) -> Value<T> {
    apply_unary_op(a, |x| x.exp(), Operation::Exp, |a| {
        Box::new(ExpBackward { a })
    })
}

#[cfg(test)]
#[path = "exp_test.rs"]
mod tests;
