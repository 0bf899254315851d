use crate::ops::activation::{relu_op, tanh_op};
use crate::ops::arithmetic::pow_op;
use crate::ops::math_elem::{clamp_op, exp_op, ln_op};
use crate::ops::traits::Scalar;
use crate::value::Value;

/// Element-wise operations as methods, so expressions read left to right:
/// `(x * w + b).tanh()`.
impl<T: Scalar> Value<T> {
    /// `self ^ exponent` for a constant exponent.
    pub fn pow(&self, exponent: T) -> Value<T> {
        pow_op(self, exponent)
    }

    pub fn exp(&self) -> Value<T> {
        exp_op(self)
    }

    /// Natural logarithm.
    pub fn log(&self) -> Value<T> {
        ln_op(self)
    }

    /// Clamps into `[lo, hi]`. The gradient passes through only where the
    /// input was not clamped.
    pub fn clamp(&self, lo: T, hi: T) -> Value<T> {
        clamp_op(self, lo, hi)
    }

    pub fn relu(&self) -> Value<T> {
        relu_op(self)
    }

    pub fn tanh(&self) -> Value<T> {
        tanh_op(self)
    }
}
