use crate::autograd::{accumulate_grad, operand_data, BackwardOp, WeakNodeRef};
use crate::error::ScalarNetError;
use crate::ops::apply_unary_op;
use crate::ops::traits::Scalar;
use crate::value::Value;
use crate::value_data::Operation;

/// Backward context for a power with constant exponent.
#[derive(Debug)]
struct PowBackward<T: Scalar> {
    base: WeakNodeRef<T>,
    exponent: T,
}

impl<T: Scalar> BackwardOp<T> for PowBackward<T> {
    fn backward(&self, grad_output: T, _output_data: T) -> Result<(), ScalarNetError> {
        let x = operand_data(&self.base, "pow")?;
        let local = self.exponent * x.powf(self.exponent - T::one());
        accumulate_grad(&self.base, local * grad_output, "pow")
    }
}

/// `a ^ exponent`, with the exponent treated as a constant.
pub fn pow_op<T: Scalar>(a: &Value<T>, exponent: T) -> Value<T> {
    apply_unary_op(a, |x| x.powf(exponent), Operation::Power, |base| {
        Box::new(PowBackward { base, exponent })
    })
}

#[cfg(test)]
#[path = "pow_test.rs"]
mod tests;
