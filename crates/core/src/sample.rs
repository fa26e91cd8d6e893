use serde::{Deserialize, Serialize};
use std::fmt;

/// A single percentage reading in `[0, 100]`.
///
/// Every constructor clamps, so an out-of-range reading from the sampler is
/// never an error.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(from = "i64", into = "u8")]
pub struct Sample(u8);

impl Sample {
    pub const MIN: Sample = Sample(0);
    pub const MAX: Sample = Sample(100);

    /// Clamp any integer into range.
    pub fn clamped(value: i64) -> Self {
        Self(value.clamp(0, 100) as u8)
    }

    /// Truncate a float reading toward zero, then clamp.  NaN reads as 0.
    pub fn from_percent(value: f32) -> Self {
        if value.is_nan() {
            return Self::MIN;
        }
        Self::clamped(value.trunc() as i64)
    }

    pub fn value(self) -> u8 {
        self.0
    }
}

impl From<i64> for Sample {
    fn from(value: i64) -> Self {
        Self::clamped(value)
    }
}

impl From<i32> for Sample {
    fn from(value: i32) -> Self {
        Self::clamped(value.into())
    }
}

impl From<u8> for Sample {
    fn from(value: u8) -> Self {
        Self::clamped(value.into())
    }
}

impl From<f32> for Sample {
    fn from(value: f32) -> Self {
        Self::from_percent(value)
    }
}

impl From<Sample> for u8 {
    fn from(sample: Sample) -> Self {
        sample.0
    }
}

impl fmt::Display for Sample {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}%", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn negative_clamps_to_zero() {
        assert_eq!(Sample::from(-5), Sample::MIN);
    }

    #[test]
    fn overflow_clamps_to_hundred() {
        assert_eq!(Sample::from(250_i64).value(), 100);
        assert_eq!(Sample::from(255_u8).value(), 100);
    }

    #[test]
    fn float_reading_truncates() {
        assert_eq!(Sample::from(42.9_f32).value(), 42);
        assert_eq!(Sample::from(f32::NAN), Sample::MIN);
        assert_eq!(Sample::from(130.0_f32), Sample::MAX);
    }
}
