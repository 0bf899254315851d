use crate::error::ScalarNetError;
use crate::nn::losses::loss::{check_class_index, clamped_log, Criterion};
use crate::ops::traits::Scalar;
use crate::value::Value;

/// Cross-entropy with the target given as a class index:
/// `loss -= log(clamp(output[target]))`.
///
/// Expects the network to end in a softmax layer.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SparseCategoricalCrossEntropy;

impl<T: Scalar> Criterion<T> for SparseCategoricalCrossEntropy {
    type Target = usize;

    fn accumulate(
        &self,
        accumulator: &Value<T>,
        outputs: &[Value<T>],
        target: &usize,
        epsilon: T,
    ) -> Result<Value<T>, ScalarNetError> {
        check_class_index(*target, outputs.len())?;
        Ok(accumulator - clamped_log(&outputs[*target], epsilon))
    }
}

#[cfg(test)]
#[path = "sparse_cce_test.rs"]
mod tests;
