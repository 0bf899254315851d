use crate::ops::arithmetic::mul_op;
use crate::ops::traits::Scalar;
use crate::value::Value;

/// `-a`, built as `a * (-1)` with a constant `-1`.
pub fn neg_op<T: Scalar>(a: &Value<T>) -> Value<T> {
    mul_op(a, &Value::constant(-T::one()))
}
