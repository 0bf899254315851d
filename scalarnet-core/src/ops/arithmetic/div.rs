use crate::ops::arithmetic::{mul_op, pow_op};
use crate::ops::traits::Scalar;
use crate::value::Value;

/// `a / b`, built as `a * b^-1`.
///
/// The graph therefore contains a `Power` node for the reciprocal and a
/// `Multiply` node for the product; gradients follow from those rules.
pub fn div_op<T: Scalar>(a: &Value<T>, b: &Value<T>) -> Value<T> {
    let reciprocal = pow_op(b, -T::one());
    mul_op(a, &reciprocal)
}

#[cfg(test)]
#[path = "div_test.rs"]
mod tests;
