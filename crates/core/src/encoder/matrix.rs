use super::{window, PanelEncoder};
use crate::error::{LedError, Result};
use crate::frame::{DisplayKind, Frame};
use crate::history::History;
use crate::quantizer::{bar_mask, ThresholdTable};

const COLUMNS: usize = 8;

/// Filled-bar columns for an HT16K33 8×8 matrix.
///
/// Byte `i` is column `i` (oldest on the left); bit `y` is lit when the
/// column's level exceeds `y`.
#[derive(Debug, Clone)]
pub struct MatrixEncoder {
    table: ThresholdTable,
}

impl MatrixEncoder {
    pub const COLUMNS: usize = COLUMNS;
    pub const ROWS: u8 = 8;

    pub fn new(table: ThresholdTable) -> Result<Self> {
        if table.resolution() > Self::ROWS {
            return Err(LedError::Config(format!(
                "matrix threshold table has {} levels; the panel has {} rows",
                table.resolution(),
                Self::ROWS
            )));
        }
        Ok(Self { table })
    }

    pub fn encode_columns(&self, history: &History) -> [u8; COLUMNS] {
        window::<COLUMNS>(history).map(|s| bar_mask(self.table.level_for(s)))
    }
}

impl Default for MatrixEncoder {
    fn default() -> Self {
        Self { table: ThresholdTable::matrix_8x8() }
    }
}

impl PanelEncoder for MatrixEncoder {
    fn kind(&self) -> DisplayKind {
        DisplayKind::Matrix
    }

    fn encode(&self, history: &History) -> Frame {
        Frame::Matrix(self.encode_columns(history))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sample::Sample;

    fn history(values: &[i64]) -> History {
        let mut h = History::new(values.len());
        for &v in values {
            h.append(v);
        }
        h
    }

    #[test]
    fn full_reading_fills_last_column() {
        let cols = MatrixEncoder::default().encode_columns(&history(&[0, 0, 0, 0, 0, 0, 0, 100]));
        assert_eq!(cols[7], 0x7F);
        assert_eq!(cols[..7], [0u8; 7]);
    }

    #[test]
    fn column_heights_follow_levels() {
        let cols = MatrixEncoder::default()
            .encode_columns(&history(&[5, 13, 26, 40, 50, 70, 80, 90]));
        assert_eq!(cols, [0x00, 0x01, 0x03, 0x07, 0x0F, 0x1F, 0x3F, 0x7F]);
    }

    #[test]
    fn bit_y_set_iff_level_exceeds_y() {
        let encoder = MatrixEncoder::default();
        let table = ThresholdTable::matrix_8x8();
        for v in 0..=100 {
            let cols = encoder.encode_columns(&history(&[v; 8]));
            let level = table.level_for(Sample::from(v));
            for y in 0..8 {
                assert_eq!(cols[0] & (1 << y) != 0, level > y, "sample {v} row {y}");
            }
        }
    }

    #[test]
    fn eight_level_table_lights_top_row() {
        let encoder = MatrixEncoder::new(
            ThresholdTable::new(vec![0, 12, 25, 36, 49, 62, 75, 87]).unwrap(),
        )
        .unwrap();
        assert_eq!(encoder.encode_columns(&history(&[1, 100]))[6..], [0x01u8, 0xFF]);
    }

    #[test]
    fn rejects_table_taller_than_panel() {
        let table = ThresholdTable::new(vec![1, 2, 3, 4, 5, 6, 7, 8, 9]).unwrap();
        assert!(MatrixEncoder::new(table).is_err());
    }

    #[test]
    fn encode_wraps_columns_in_frame() {
        let frame = MatrixEncoder::default().encode(&history(&[100; 8]));
        assert_eq!(frame, Frame::Matrix([0x7F; 8]));
    }
}
