//! LTP305 dual 5×7 matrix behind an IS31FL3730 driver.
//!
//! Ten history columns span two chips.  The left chip takes one byte per
//! column (bit = row); the right chip is wired rotated, taking one byte per
//! row (bit = column).  The [`WIRING`] table records where every cell lands
//! so the encoder itself never does the transpose arithmetic.

use super::{window, PanelEncoder};
use crate::error::{LedError, Result};
use crate::frame::{DisplayKind, Frame};
use crate::history::History;
use crate::quantizer::{bar_mask, ThresholdTable};

/// Columns per chip.
pub const CHIP_COLUMNS: usize = 5;
/// LEDs per column.
pub const ROWS: usize = 7;
/// Register payload length, including the leading register address.
pub const PAYLOAD_LEN: usize = 9;

const COLUMNS: usize = CHIP_COLUMNS * 2;

// ── IS31FL3730 registers ──────────────────────────────────────────────────────

/// Matrix 1 data register; starts the left payload.
pub const LEFT_DATA_REGISTER: u8 = 0x0E;
/// Matrix 2 data register; starts the right payload.
pub const RIGHT_DATA_REGISTER: u8 = 0x01;
/// Configuration, lighting effect and PWM setup sent once at power-on.
pub const INIT_SEQUENCE: [u8; 8] = [0x00, 0x18, 0x0D, 0x0E, 0x19, 0x40, 0x0C, 0x00];
/// Latches the data registers onto the LEDs.
pub const UPDATE_COMMAND: [u8; 2] = [0x0C, 0x01];
pub const BRIGHTNESS_REGISTER: u8 = 0x19;
/// Configuration register with the software-shutdown bit set.
pub const SHUTDOWN_COMMAND: [u8; 2] = [0x00, 0x80];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Chip {
    Left,
    Right,
}

impl Chip {
    fn index(self) -> usize {
        match self {
            Self::Left => 0,
            Self::Right => 1,
        }
    }
}

/// Position of one LED inside a chip payload.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Cell {
    /// Payload byte (1-based; byte 0 is the register address).
    pub byte: usize,
    pub bit: u8,
}

/// `WIRING[chip][column][row]`.
pub const WIRING: [[[Cell; ROWS]; CHIP_COLUMNS]; 2] = build_wiring();

const fn build_wiring() -> [[[Cell; ROWS]; CHIP_COLUMNS]; 2] {
    let mut table = [[[Cell { byte: 0, bit: 0 }; ROWS]; CHIP_COLUMNS]; 2];
    let mut column = 0;
    while column < CHIP_COLUMNS {
        let mut row = 0;
        while row < ROWS {
            table[0][column][row] = Cell { byte: 1 + column, bit: row as u8 };
            table[1][column][row] = Cell { byte: 1 + row, bit: column as u8 };
            row += 1;
        }
        column += 1;
    }
    table
}

/// Where the LED at (`column`, `row`) of `chip` lives.
pub fn cell(chip: Chip, column: usize, row: usize) -> Cell {
    WIRING[chip.index()][column][row]
}

#[derive(Debug, Clone)]
pub struct Ltp305Encoder {
    table: ThresholdTable,
}

impl Ltp305Encoder {
    pub fn new(table: ThresholdTable) -> Result<Self> {
        if usize::from(table.resolution()) > ROWS {
            return Err(LedError::Config(format!(
                "ltp305 threshold table has {} levels; the panel has {ROWS} rows",
                table.resolution()
            )));
        }
        Ok(Self { table })
    }

    /// Left and right register payloads for the newest ten samples.
    pub fn encode_payloads(&self, history: &History) -> ([u8; PAYLOAD_LEN], [u8; PAYLOAD_LEN]) {
        let mut left = [0u8; PAYLOAD_LEN];
        let mut right = [0u8; PAYLOAD_LEN];
        left[0] = LEFT_DATA_REGISTER;
        right[0] = RIGHT_DATA_REGISTER;

        for (i, sample) in window::<COLUMNS>(history).into_iter().enumerate() {
            let mask = bar_mask(self.table.level_for(sample));
            let (chip, payload) = if i < CHIP_COLUMNS {
                (Chip::Left, &mut left)
            } else {
                (Chip::Right, &mut right)
            };
            let column = i % CHIP_COLUMNS;

            for row in (0..ROWS).filter(|&row| mask & (1 << row) != 0) {
                let Cell { byte, bit } = cell(chip, column, row);
                payload[byte] |= 1 << bit;
            }
        }

        (left, right)
    }
}

impl Default for Ltp305Encoder {
    fn default() -> Self {
        Self { table: ThresholdTable::ltp305() }
    }
}

impl PanelEncoder for Ltp305Encoder {
    fn kind(&self) -> DisplayKind {
        DisplayKind::Ltp305
    }

    fn encode(&self, history: &History) -> Frame {
        let (left, right) = self.encode_payloads(history);
        Frame::DualMatrix { left, right }
    }
}
