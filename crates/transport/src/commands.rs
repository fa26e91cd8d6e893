//! Argument lists for the display-control utilities.
//!
//! The HT16K33 tools (`matrix`, `segment`) take `<device> <address>` followed
//! by single-letter commands.  `cli2c` is a raw bus tool: `<device> w
//! <address> <bytes>` writes register data and `p` issues an I2C stop.

use ledbar_core::encoder::ltp305;
use ledbar_core::{DisplayKind, Frame, LedError, Power, Result};

/// Highest HT16K33 dimming step.
pub const HT16K33_MAX_BRIGHTNESS: u8 = 15;

/// One utility invocation, minus the program name.
pub type Invocation = Vec<String>;

/// Format bytes the way the utilities expect: `0x01,0x1f,…`.
pub fn hex_list(bytes: &[u8]) -> String {
    bytes
        .iter()
        .map(|b| format!("0x{b:02x}"))
        .collect::<Vec<_>>()
        .join(",")
}

/// Which display sits where on the bus.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DisplayTarget {
    pub kind: DisplayKind,
    pub device: String,
    pub address: u8,
}

impl DisplayTarget {
    pub fn new(kind: DisplayKind, device: impl Into<String>, address: u8) -> Self {
        Self {
            kind,
            device: device.into(),
            address,
        }
    }

    fn address_arg(&self) -> String {
        format!("0x{:02x}", self.address)
    }

    /// `<device> <address> cmd…` for the HT16K33 tools.
    fn ht16k33(&self, cmd: &[&str]) -> Invocation {
        let mut args = vec![self.device.clone(), self.address_arg()];
        args.extend(cmd.iter().map(|s| s.to_string()));
        args
    }

    /// `<device> w <address> <bytes> [extra…]` for `cli2c`.
    fn cli2c_write(&self, bytes: &[u8], extra: &[&str]) -> Invocation {
        let mut args = vec![
            self.device.clone(),
            "w".to_string(),
            self.address_arg(),
            hex_list(bytes),
        ];
        args.extend(extra.iter().map(|s| s.to_string()));
        args
    }

    pub fn reset(&self) -> Invocation {
        match self.kind {
            DisplayKind::Matrix | DisplayKind::Segment => self.ht16k33(&["w"]),
            DisplayKind::Ltp305 => vec![self.device.clone(), "z".to_string()],
        }
    }

    pub fn power(&self, power: Power) -> Invocation {
        match (self.kind, power) {
            (DisplayKind::Ltp305, Power::On) => self.cli2c_write(&ltp305::INIT_SEQUENCE, &[]),
            (DisplayKind::Ltp305, Power::Off) => self.cli2c_write(&ltp305::SHUTDOWN_COMMAND, &[]),
            (_, Power::On) => self.ht16k33(&["a", "on"]),
            (_, Power::Off) => self.ht16k33(&["a", "off"]),
        }
    }

    /// HT16K33 levels above 15 are capped.
    pub fn brightness(&self, level: u8) -> Invocation {
        match self.kind {
            DisplayKind::Ltp305 => self.cli2c_write(&[ltp305::BRIGHTNESS_REGISTER, level], &[]),
            _ => {
                let level = level.min(HT16K33_MAX_BRIGHTNESS).to_string();
                self.ht16k33(&["b", &level])
            }
        }
    }

    /// Invocations that put `frame` on the display, in order.
    pub fn frame(&self, frame: &Frame) -> Result<Vec<Invocation>> {
        match (self.kind, frame) {
            (DisplayKind::Matrix, Frame::Matrix(columns)) => {
                Ok(vec![self.ht16k33(&["g", &hex_list(columns)])])
            }
            (DisplayKind::Segment, Frame::Segment(reading)) => {
                let value = reading.value().to_string();
                let digit = reading.decimal_digit().to_string();
                Ok(vec![self.ht16k33(&["n", &value, "d", &digit])])
            }
            (DisplayKind::Ltp305, Frame::DualMatrix { left, right }) => Ok(vec![
                self.cli2c_write(left, &[]),
                self.cli2c_write(right, &[]),
                self.cli2c_write(&ltp305::UPDATE_COMMAND, &["p"]),
            ]),
            (kind, frame) => Err(LedError::Transport(format!(
                "cannot send {frame:?} to a {kind} display"
            ))),
        }
    }
}
