use crate::error::ScalarNetError;
use num_traits::{Float, NumAssignOps, NumCast};
use std::fmt::{Debug, Display};

/// A trait representing the floating-point types a `Value` can carry.
///
/// This bounds the types (`f32`, `f64`) usable as node data and gradients.
/// `Float` already provides `zero()`, `one()`, `exp()`, `ln()`, `powf()`, `tanh()`.
pub trait Scalar:
    Float // Includes Num + Copy + NumCast + PartialOrd
    + NumAssignOps // AddAssign, SubAssign, MulAssign, DivAssign
    + Debug
    + Display
    + Default
    + 'static
{
    /// Converts an `f64` constant into `Self`.
    fn from_f64(value: f64) -> Result<Self, ScalarNetError> {
        <Self as NumCast>::from(value).ok_or_else(|| {
            ScalarNetError::InternalError(format!("cannot represent {} in the scalar type", value))
        })
    }

    /// Converts a count (batch size, class count) into `Self`.
    fn from_usize(value: usize) -> Result<Self, ScalarNetError> {
        <Self as NumCast>::from(value).ok_or_else(|| {
            ScalarNetError::InternalError(format!("cannot represent {} in the scalar type", value))
        })
    }

    /// Lossy conversion used for logging and finite-difference checks.
    fn as_f64(self) -> f64 {
        self.to_f64().unwrap_or(f64::NAN)
    }
}

impl Scalar for f32 {}
impl Scalar for f64 {}
