use crate::error::{LedError, Result};
use crate::sample::Sample;
use serde::{Deserialize, Serialize};

/// Monotonic cut points that turn a [`Sample`] into a bar height.
///
/// The level of a sample is the number of breakpoints it strictly exceeds, so
/// a table with `n` breakpoints quantizes to `0..=n`.  Breakpoints must be
/// strictly increasing and below 100; a sample of 0 can never exceed one, so
/// it always maps to level 0.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "Vec<u8>", into = "Vec<u8>")]
pub struct ThresholdTable {
    breakpoints: Vec<u8>,
}

impl ThresholdTable {
    /// Reference cut points for the HT16K33 8×8 matrix.
    pub const MATRIX_8X8: [u8; 7] = [12, 25, 36, 49, 62, 75, 87];
    /// Reference cut points for the LTP305 dual 5×7 matrix.
    pub const LTP305: [u8; 6] = [14, 29, 44, 59, 74, 89];

    pub fn new(breakpoints: impl Into<Vec<u8>>) -> Result<Self> {
        let breakpoints = breakpoints.into();
        if let Some(&bad) = breakpoints.iter().find(|&&b| b >= 100) {
            return Err(LedError::Config(format!(
                "threshold {bad} out of range (must be below 100)"
            )));
        }
        if breakpoints.windows(2).any(|w| w[0] >= w[1]) {
            return Err(LedError::Config(format!(
                "thresholds must be strictly increasing: {breakpoints:?}"
            )));
        }
        Ok(Self { breakpoints })
    }

    pub fn matrix_8x8() -> Self {
        Self { breakpoints: Self::MATRIX_8X8.to_vec() }
    }

    pub fn ltp305() -> Self {
        Self { breakpoints: Self::LTP305.to_vec() }
    }

    /// Highest level this table can produce.
    pub fn resolution(&self) -> u8 {
        self.breakpoints.len() as u8
    }

    pub fn breakpoints(&self) -> &[u8] {
        &self.breakpoints
    }

    /// Bar height for `sample`, in `0..=resolution()`.
    pub fn level_for(&self, sample: Sample) -> u8 {
        let value = sample.value();
        // Sorted, so the count of exceeded breakpoints is a partition point.
        self.breakpoints.partition_point(|&b| value > b) as u8
    }
}

impl TryFrom<Vec<u8>> for ThresholdTable {
    type Error = LedError;

    fn try_from(breakpoints: Vec<u8>) -> Result<Self> {
        Self::new(breakpoints)
    }
}

impl From<ThresholdTable> for Vec<u8> {
    fn from(table: ThresholdTable) -> Self {
        table.breakpoints
    }
}

/// Bottom-aligned bar: bits `0..level` set.  Levels above 8 saturate.
pub fn bar_mask(level: u8) -> u8 {
    ((1u16 << level.min(8)) - 1) as u8
}

#[cfg(test)]
mod tests {
    use super::*;

    fn level(table: &ThresholdTable, v: i64) -> u8 {
        table.level_for(Sample::from(v))
    }

    #[test]
    fn matrix_reference_table() {
        let t = ThresholdTable::matrix_8x8();
        let cases = [
            (0, 0), (12, 0), (13, 1), (25, 1), (26, 2), (36, 2), (37, 3),
            (49, 3), (50, 4), (62, 4), (63, 5), (75, 5), (76, 6), (87, 6),
            (88, 7), (100, 7),
        ];
        for (sample, expected) in cases {
            assert_eq!(level(&t, sample), expected, "sample {sample}");
        }
        assert_eq!(t.resolution(), 7);
    }

    #[test]
    fn ltp305_reference_table() {
        let t = ThresholdTable::ltp305();
        let cases = [(0, 0), (14, 0), (15, 1), (30, 2), (45, 3), (50, 3), (60, 4), (75, 5), (89, 5), (90, 6), (100, 6)];
        for (sample, expected) in cases {
            assert_eq!(level(&t, sample), expected, "sample {sample}");
        }
    }

    #[test]
    fn levels_are_monotonic() {
        for t in [ThresholdTable::matrix_8x8(), ThresholdTable::ltp305()] {
            let levels: Vec<u8> = (0..=100).map(|v| level(&t, v)).collect();
            assert!(levels.windows(2).all(|w| w[0] <= w[1]));
            assert_eq!(levels[0], 0);
            assert_eq!(levels[100], t.resolution());
        }
    }

    #[test]
    fn rejects_unsorted_or_duplicate() {
        assert!(ThresholdTable::new(vec![10, 5]).is_err());
        assert!(ThresholdTable::new(vec![10, 10]).is_err());
        assert!(ThresholdTable::new(vec![10, 100]).is_err());
        assert!(ThresholdTable::new(Vec::new()).is_ok());
    }

    #[test]
    fn bar_mask_is_bottom_aligned() {
        assert_eq!(bar_mask(0), 0x00);
        assert_eq!(bar_mask(1), 0x01);
        assert_eq!(bar_mask(3), 0x07);
        assert_eq!(bar_mask(7), 0x7F);
        assert_eq!(bar_mask(8), 0xFF);
        assert_eq!(bar_mask(12), 0xFF);
    }
}
