use crate::autograd::{accumulate_grad, operand_data, BackwardOp, WeakNodeRef};
use crate::error::ScalarNetError;
use crate::ops::apply_unary_op;
use crate::ops::traits::Scalar;
use crate::value::Value;
use crate::value_data::Operation;

#[derive(Debug)]
struct ClampBackward<T: Scalar> {
    a: WeakNodeRef<T>,
    lo: T,
    hi: T,
}

impl<T: Scalar> BackwardOp<T> for ClampBackward<T> {
    fn backward(&self, grad_output: T, _output_data: T) -> Result<(), ScalarNetError> {
        let x = operand_data(&self.a, "clamp")?;
        if x >= self.lo && x <= self.hi {
            accumulate_grad(&self.a, grad_output, "clamp")?;
        }
        Ok(())
    }
}

/// Clamps `a` into `[lo, hi]`.
///
/// The gradient is passed through when `lo <= a <= hi` and blocked when the
/// input was clamped.
pub fn clamp_op<T: Scalar>(a: &Value<T>, lo: T, hi: T) -> Value<T> {
    apply_unary_op(
        a,
        |x| x.max(lo).min(hi),
        Operation::Clamp,
        |a| Box::new(ClampBackward { a, lo, hi }),
    )
}

#[cfg(test)]
#[path = "clamp_test.rs"]
mod tests;
