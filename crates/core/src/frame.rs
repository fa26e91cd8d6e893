use crate::error::LedError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Physical display topologies the encoders know about.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum DisplayKind {
    /// HT16K33 single 8×8 LED matrix.
    #[default]
    Matrix,
    /// Pimoroni LTP305 pair of 5×7 matrices on an IS31FL3730.
    Ltp305,
    /// HT16K33 4-digit 7-segment display.
    Segment,
}

impl DisplayKind {
    /// Number of history columns the display renders.
    pub fn columns(self) -> usize {
        match self {
            Self::Matrix => 8,
            Self::Ltp305 => 10,
            Self::Segment => 1,
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            Self::Matrix => "matrix",
            Self::Ltp305 => "ltp305",
            Self::Segment => "segment",
        }
    }
}

impl fmt::Display for DisplayKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for DisplayKind {
    type Err = LedError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "matrix" => Ok(Self::Matrix),
            "ltp305" => Ok(Self::Ltp305),
            "segment" => Ok(Self::Segment),
            other => Err(LedError::Config(format!(
                "unknown display '{other}' (expected matrix, ltp305 or segment)"
            ))),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Power {
    On,
    Off,
}

/// One rendered display update.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Frame {
    /// One byte per column, bit 0 at the bottom.
    Matrix([u8; 8]),
    /// Register payloads for the two LTP305 chips; byte 0 of each is the
    /// data register address.
    DualMatrix { left: [u8; 9], right: [u8; 9] },
    Segment(SegmentReading),
}

/// A reading scaled for a 4-digit display with one decimal place.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SegmentReading {
    tenths: u16,
}

impl SegmentReading {
    /// Digit (0-3, left to right) whose decimal point is lit.
    pub const DECIMAL_DIGIT: u8 = 2;

    pub fn from_tenths(tenths: u16) -> Self {
        Self { tenths }
    }

    /// Integer sent to the display, i.e. the reading times ten.
    pub fn value(&self) -> u16 {
        self.tenths
    }

    pub fn decimal_digit(&self) -> u8 {
        Self::DECIMAL_DIGIT
    }
}

/// Renders the reading the way the lit display shows it, e.g. `42.0`.
impl fmt::Display for SegmentReading {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}.{}", self.tenths / 10, self.tenths % 10)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn columns_per_display() {
        assert_eq!(DisplayKind::Matrix.columns(), 8);
        assert_eq!(DisplayKind::Ltp305.columns(), 10);
        assert_eq!(DisplayKind::Segment.columns(), 1);
    }

    #[test]
    fn kind_from_str() {
        assert_eq!("LTP305".parse::<DisplayKind>().unwrap(), DisplayKind::Ltp305);
        assert_eq!("segment".parse::<DisplayKind>().unwrap(), DisplayKind::Segment);
        assert!("oled".parse::<DisplayKind>().is_err());
    }

    #[test]
    fn segment_reading_formats_one_decimal() {
        assert_eq!(SegmentReading::from_tenths(420).to_string(), "42.0");
        assert_eq!(SegmentReading::from_tenths(5).to_string(), "0.5");
        assert_eq!(SegmentReading::from_tenths(1000).to_string(), "100.0");
    }
}
