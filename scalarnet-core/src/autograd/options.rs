use crate::error::ScalarNetError;
use crate::ops::traits::Scalar;

/// Options for a backward traversal.
///
/// The default clamps each node's gradient into `[-1, 1]`, leaves included.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BackwardOptions<T: Scalar = f64> {
    /// When set, every node's gradient is clamped into `[-clip, clip]`
    /// right before its backward rule runs.
    pub grad_clip: Option<T>,
}

impl<T: Scalar> Default for BackwardOptions<T> {
    fn default() -> Self {
        BackwardOptions {
            grad_clip: Some(T::one()),
        }
    }
}

impl<T: Scalar> BackwardOptions<T> {
    /// Traversal with the default clip.
    pub fn new() -> Self {
        Self::default()
    }

    /// Traversal without clipping: every node keeps its exact gradient.
    pub fn unclipped() -> Self {
        BackwardOptions { grad_clip: None }
    }

    /// Traversal clamping each node's gradient into `[-clip, clip]`.
    pub fn clipped(clip: T) -> Self {
        BackwardOptions {
            grad_clip: Some(clip),
        }
    }

    pub fn validate(&self) -> Result<(), ScalarNetError> {
        match self.grad_clip {
            Some(clip) if clip.is_nan() || clip < T::zero() => Err(ScalarNetError::ConfigurationError(
                format!("gradient clip must be non-negative, got {}", clip),
            )),
            _ => Ok(()),
        }
    }

    pub(crate) fn apply(&self, grad: T) -> T {
        match self.grad_clip {
            Some(clip) => grad.max(-clip).min(clip),
            None => grad,
        }
    }
}
