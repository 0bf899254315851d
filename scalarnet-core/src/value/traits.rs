use crate::ops::arithmetic::{add_op, div_op, mul_op, neg_op, sub_op};
use crate::ops::traits::Scalar;
use crate::value::Value;
use std::iter::Sum;
use std::ops::{Add, AddAssign, Div, DivAssign, Mul, MulAssign, Neg, Sub, SubAssign};

// --- Value (op) Value / scalar ---
// Every combination of owned and borrowed handles builds the same node;
// a bare scalar operand is lifted into an untracked constant.
macro_rules! impl_binary_operator {
    ($trait:ident, $method:ident, $op_fn:ident) => {
        impl<T: Scalar> $trait<Value<T>> for Value<T> {
            type Output = Value<T>;
            fn $method(self, rhs: Value<T>) -> Value<T> {
                $op_fn(&self, &rhs)
            }
        }

        impl<'a, T: Scalar> $trait<&'a Value<T>> for Value<T> {
            type Output = Value<T>;
            fn $method(self, rhs: &'a Value<T>) -> Value<T> {
                $op_fn(&self, rhs)
            }
        }

        impl<'a, T: Scalar> $trait<Value<T>> for &'a Value<T> {
            type Output = Value<T>;
            fn $method(self, rhs: Value<T>) -> Value<T> {
                $op_fn(self, &rhs)
            }
        }

        impl<'a, 'b, T: Scalar> $trait<&'b Value<T>> for &'a Value<T> {
            type Output = Value<T>;
            fn $method(self, rhs: &'b Value<T>) -> Value<T> {
                $op_fn(self, rhs)
            }
        }

        impl<T: Scalar> $trait<T> for Value<T> {
            type Output = Value<T>;
            fn $method(self, rhs: T) -> Value<T> {
                $op_fn(&self, &Value::constant(rhs))
            }
        }

        impl<'a, T: Scalar> $trait<T> for &'a Value<T> {
            type Output = Value<T>;
            fn $method(self, rhs: T) -> Value<T> {
                $op_fn(self, &Value::constant(rhs))
            }
        }
    };
}

impl_binary_operator!(Add, add, add_op);
impl_binary_operator!(Sub, sub, sub_op);
impl_binary_operator!(Mul, mul, mul_op);
impl_binary_operator!(Div, div, div_op);

// --- scalar (op) Value ---
// Generic `impl<T> Add<Value<T>> for T` is not allowed, so the left-scalar
// forms are spelled out for the supported float types.
macro_rules! impl_scalar_lhs_operator {
    ($scalar:ty, $trait:ident, $method:ident, $op_fn:ident) => {
        impl $trait<Value<$scalar>> for $scalar {
            type Output = Value<$scalar>;
            fn $method(self, rhs: Value<$scalar>) -> Value<$scalar> {
                $op_fn(&Value::constant(self), &rhs)
            }
        }

        impl<'a> $trait<&'a Value<$scalar>> for $scalar {
            type Output = Value<$scalar>;
            fn $method(self, rhs: &'a Value<$scalar>) -> Value<$scalar> {
                $op_fn(&Value::constant(self), rhs)
            }
        }
    };
}

macro_rules! impl_scalar_lhs_operators {
    ($($scalar:ty),*) => {
        $(
            impl_scalar_lhs_operator!($scalar, Add, add, add_op);
            impl_scalar_lhs_operator!($scalar, Sub, sub, sub_op);
            impl_scalar_lhs_operator!($scalar, Mul, mul, mul_op);
            impl_scalar_lhs_operator!($scalar, Div, div, div_op);
        )*
    };
}

impl_scalar_lhs_operators!(f32, f64);

// --- Compound assignment ---
// `acc += x` rebinds `acc` to a new node; the previous node stays in the
// graph as an operand.
macro_rules! impl_assign_operator {
    ($trait:ident, $method:ident, $op_fn:ident) => {
        impl<T: Scalar> $trait<Value<T>> for Value<T> {
            fn $method(&mut self, rhs: Value<T>) {
                *self = $op_fn(self, &rhs);
            }
        }

        impl<'a, T: Scalar> $trait<&'a Value<T>> for Value<T> {
            fn $method(&mut self, rhs: &'a Value<T>) {
                *self = $op_fn(self, rhs);
            }
        }

        impl<T: Scalar> $trait<T> for Value<T> {
            fn $method(&mut self, rhs: T) {
                *self = $op_fn(self, &Value::constant(rhs));
            }
        }
    };
}

impl_assign_operator!(AddAssign, add_assign, add_op);
impl_assign_operator!(SubAssign, sub_assign, sub_op);
impl_assign_operator!(MulAssign, mul_assign, mul_op);
impl_assign_operator!(DivAssign, div_assign, div_op);

impl<T: Scalar> Neg for Value<T> {
    type Output = Value<T>;
    fn neg(self) -> Value<T> {
        neg_op(&self)
    }
}

impl<'a, T: Scalar> Neg for &'a Value<T> {
    type Output = Value<T>;
    fn neg(self) -> Value<T> {
        neg_op(self)
    }
}

/// Sums left to right starting from a constant zero, so an empty iterator
/// yields an untracked zero.
impl<T: Scalar> Sum for Value<T> {
    fn sum<I: Iterator<Item = Value<T>>>(iter: I) -> Value<T> {
        iter.fold(Value::constant(T::zero()), |acc, x| add_op(&acc, &x))
    }
}

impl<'a, T: Scalar> Sum<&'a Value<T>> for Value<T> {
    fn sum<I: Iterator<Item = &'a Value<T>>>(iter: I) -> Value<T> {
        iter.fold(Value::constant(T::zero()), |acc, x| add_op(&acc, x))
    }
}
