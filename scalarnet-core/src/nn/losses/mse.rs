use crate::error::ScalarNetError;
use crate::nn::losses::loss::{check_class_index, Criterion};
use crate::ops::traits::Scalar;
use crate::value::Value;

/// Squared error between the outputs and the one-hot encoding of a class
/// index, averaged over the classes:
/// `loss += sum_i (output[i] - [i == target])^2 / num_classes`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct MeanSquaredError;

impl<T: Scalar> Criterion<T> for MeanSquaredError {
    type Target = usize;

    fn accumulate(
        &self,
        accumulator: &Value<T>,
        outputs: &[Value<T>],
        target: &usize,
        _epsilon: T,
    ) -> Result<Value<T>, ScalarNetError> {
        check_class_index(*target, outputs.len())?;
        let two = T::one() + T::one();
        let mut squared_error = Value::constant(T::zero());
        for (i, output) in outputs.iter().enumerate() {
            let term = if i == *target {
                (output - T::one()).pow(two)
            } else {
                output.pow(two)
            };
            squared_error = &squared_error + &term;
        }
        let num_classes = T::from_usize(outputs.len())?;
        Ok(accumulator + &squared_error / num_classes)
    }
}

#[cfg(test)]
#[path = "mse_test.rs"]
mod tests;
