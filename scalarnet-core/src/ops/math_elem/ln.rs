use crate::autograd::{accumulate_grad, operand_data, BackwardOp, WeakNodeRef};
use crate::error::ScalarNetError;
use crate::ops::apply_unary_op;
use crate::ops::traits::Scalar;
use crate::value::Value;
use crate::value_data::Operation;

// --- LnBackward Definition ---

/// Backward context for the natural logarithm.
#[derive(Debug)]
struct LnBackward<T: Scalar> {
    a: WeakNodeRef<T>,
}

impl<T: Scalar> BackwardOp<T> for LnBackward<T> {
    fn backward(&self, grad_output: T, _output_data: T) -> Result<(), ScalarNetError> {
        let x = operand_data(&self.a, "ln")?;
        accumulate_grad(&self.a, grad_output / x, "ln")
    }
}

// --- ln_op Implementation ---

/// Natural logarithm.
///
/// Follows IEEE semantics: `ln(0) = -inf`, `ln(x < 0) = NaN`. Callers that
/// need finite results (the cross-entropy losses) clamp first.
pub fn ln_op<T: Scalar>(a: &Value<T>) -> Value<T> {
    apply_unary_op(a, |x| x.ln(), Operation::Ln, |a| Box::new(LnBackward { a }))
}

#[cfg(test)]
#[path = "ln_test.rs"]
mod tests;
