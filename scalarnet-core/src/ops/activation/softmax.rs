use crate::ops::arithmetic::{div_op, sub_op};
use crate::ops::math_elem::exp_op;
use crate::ops::traits::Scalar;
use crate::value::Value;

/// Numerically stable softmax over a list of values.
///
/// Composed entirely from primitive operations, so its gradient flows
/// through `sub`, `exp`, `add` and `div` with no dedicated rule:
///
/// 1. `m` is the element with the largest forward value (the first one on
///    ties). It is subtracted as a graph node, so gradients also flow into it.
/// 2. `e_i = exp(x_i - m)`.
/// 3. `s = 0 + e_0 + e_1 + ...`, summed in element order.
/// 4. `y_i = e_i / s`.
///
/// Returns an empty vector for an empty input.
pub fn softmax_op<T: Scalar>(inputs: &[Value<T>]) -> Vec<Value<T>> {
    let max_value = match first_max(inputs) {
        Some(m) => m,
        None => return Vec::new(),
    };

    let exps: Vec<Value<T>> = inputs
        .iter()
        .map(|x| exp_op(&sub_op(x, max_value)))
        .collect();
    let sum: Value<T> = exps.iter().sum();

    exps.iter().map(|e| div_op(e, &sum)).collect()
}

/// The element holding the largest forward value; the first on ties.
fn first_max<T: Scalar>(inputs: &[Value<T>]) -> Option<&Value<T>> {
    let mut best: Option<&Value<T>> = None;
    for x in inputs {
        match best {
            None => best = Some(x),
            Some(b) if x.data() > b.data() => best = Some(x),
            _ => {}
        }
    }
    best
}

/// Plain-number softmax with the exact operation sequence of [`softmax_op`],
/// so both paths agree bit for bit.
pub(crate) fn softmax_numeric<T: Scalar>(inputs: &[T]) -> Vec<T> {
    let mut max_value = match inputs.first() {
        Some(&first) => first,
        None => return Vec::new(),
    };
    for &x in &inputs[1..] {
        if x > max_value {
            max_value = x;
        }
    }

    let exps: Vec<T> = inputs.iter().map(|&x| (x - max_value).exp()).collect();
    let sum = exps.iter().fold(T::zero(), |acc, &e| acc + e);
    let reciprocal = sum.powf(-T::one());
    exps.iter().map(|&e| e * reciprocal).collect()
}

#[cfg(test)]
#[path = "softmax_test.rs"]
mod tests;
