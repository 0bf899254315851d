use crate::autograd::{accumulate_grad, BackwardOp, WeakNodeRef};
use crate::error::ScalarNetError;
use crate::ops::apply_unary_op;
use crate::ops::traits::Scalar;
use crate::value::Value;
use crate::value_data::Operation;

#[derive(Debug)]
struct TanhBackward<T: Scalar> {
    a: WeakNodeRef<T>,
}

impl<T: Scalar> BackwardOp<T> for TanhBackward<T> {
    fn backward(&self, grad_output: T, output_data: T) -> Result<(), ScalarNetError> {
        let local = T::one() - output_data * output_data;
        accumulate_grad(&self.a, local * grad_output, "tanh")
    }
}

/// Hyperbolic tangent.
pub fn tanh_op<T: Scalar>(a: &Value<T>) -> Value<T> {
    apply_unary_op(a, |x| x.tanh(), Operation::Tanh, |a| {
        Box::new(TanhBackward { a })
    })
}

#[cfg(test)]
#[path = "tanh_test.rs"]
mod tests;
