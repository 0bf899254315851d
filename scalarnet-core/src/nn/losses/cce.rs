use crate::error::ScalarNetError;
use crate::nn::losses::loss::{clamped_log, Criterion};
use crate::ops::traits::Scalar;
use crate::value::Value;

/// Cross-entropy with the target given as a one-hot vector.
///
/// Decodes the position of the `1` entry and then behaves like
/// [`SparseCategoricalCrossEntropy`](super::SparseCategoricalCrossEntropy).
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct CategoricalCrossEntropy;

impl CategoricalCrossEntropy {
    /// Index of the single `1` in `target`.
    ///
    /// # Errors
    /// `InvalidTarget` if the vector's length differs from `num_classes`,
    /// if it contains no `1`, or if it contains anything other than exactly
    /// one `1` and zeros. Use the sparse loss for class-index labels.
    pub fn decode_one_hot(target: &[u8], num_classes: usize) -> Result<usize, ScalarNetError> {
        if target.len() != num_classes {
            return Err(ScalarNetError::InvalidTarget {
                reason: format!(
                    "one-hot target has {} entries for {} outputs",
                    target.len(),
                    num_classes
                ),
            });
        }
        let mut hot: Option<usize> = None;
        for (i, &v) in target.iter().enumerate() {
            match (v, hot) {
                (0, _) => {}
                (1, None) => hot = Some(i),
                _ => {
                    return Err(ScalarNetError::InvalidTarget {
                        reason: format!("target {:?} is not one-hot", target),
                    })
                }
            }
        }
        hot.ok_or_else(|| ScalarNetError::InvalidTarget {
            reason: format!(
                "target {:?} has no entry equal to 1; use sparse categorical cross-entropy for class indices",
                target
            ),
        })
    }
}

impl<T: Scalar> Criterion<T> for CategoricalCrossEntropy {
    type Target = Vec<u8>;

    fn accumulate(
        &self,
        accumulator: &Value<T>,
        outputs: &[Value<T>],
        target: &Vec<u8>,
        epsilon: T,
    ) -> Result<Value<T>, ScalarNetError> {
        let index = Self::decode_one_hot(target, outputs.len())?;
        Ok(accumulator - clamped_log(&outputs[index], epsilon))
    }
}

#[cfg(test)]
#[path = "cce_test.rs"]
mod tests;
