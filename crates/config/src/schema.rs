use ledbar_core::{DisplayKind, ThresholdTable};
use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Root configuration structure parsed from `ledbar.toml`.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct LedConfig {
    pub display: DisplayConfig,
    pub timing: TimingConfig,
    pub thresholds: ThresholdConfig,
}

/// Which display to drive and how to reach it.
///
/// Unset optional fields fall back to per-display defaults.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct DisplayConfig {
    pub kind: DisplayKind,
    /// Serial device of the I2C host adapter, e.g. `/dev/cu.usbmodem101`.
    pub device: Option<String>,
    /// 7-bit I2C address of the display, as an integer or a `"0x.."` string.
    #[serde(deserialize_with = "crate::address::deserialize_address")]
    pub address: Option<u8>,
    /// Brightness on the driver's scale (HT16K33: 0–15, IS31FL3730: 0–255).
    pub brightness: Option<u8>,
    /// Display-control utility to invoke.
    pub program: Option<String>,
}

impl DisplayConfig {
    pub fn address(&self) -> u8 {
        self.address.unwrap_or(match self.kind {
            DisplayKind::Matrix | DisplayKind::Segment => 0x70,
            DisplayKind::Ltp305 => 0x61,
        })
    }

    pub fn brightness(&self) -> u8 {
        self.brightness.unwrap_or(match self.kind {
            DisplayKind::Matrix => 2,
            DisplayKind::Segment => 4,
            DisplayKind::Ltp305 => 0x40,
        })
    }

    pub fn program(&self) -> &str {
        self.program.as_deref().unwrap_or(match self.kind {
            DisplayKind::Matrix => "matrix",
            DisplayKind::Segment => "segment",
            DisplayKind::Ltp305 => "cli2c",
        })
    }
}

/// Tick rate and write-timeout handling.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct TimingConfig {
    /// Delay between ticks; defaults to 1 s for matrices, 0.5 s for the segment display.
    pub interval_ms: Option<u64>,
    /// Upper bound on one display write.
    pub write_timeout_secs: u64,
    pub on_timeout: TimeoutPolicy,
    /// Extra attempts when `on_timeout = "retry"`.
    pub retries: u32,
    /// First retry delay; doubles on each further attempt.
    pub backoff_ms: u64,
}

impl Default for TimingConfig {
    fn default() -> Self {
        Self {
            interval_ms: None,
            write_timeout_secs: 90,
            on_timeout: TimeoutPolicy::Continue,
            retries: 3,
            backoff_ms: 500,
        }
    }
}

impl TimingConfig {
    pub fn interval(&self, kind: DisplayKind) -> Duration {
        let ms = self.interval_ms.unwrap_or(match kind {
            DisplayKind::Segment => 500,
            DisplayKind::Matrix | DisplayKind::Ltp305 => 1000,
        });
        Duration::from_millis(ms.max(1))
    }

    pub fn write_timeout(&self) -> Duration {
        Duration::from_secs(self.write_timeout_secs)
    }

    pub fn backoff(&self) -> Duration {
        Duration::from_millis(self.backoff_ms)
    }
}

/// What the scheduler does when a display write times out.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum TimeoutPolicy {
    /// Drop the frame and carry on with the next tick.
    #[default]
    Continue,
    /// Retry with exponential backoff, then carry on.
    Retry,
    /// Stop producing frames.
    Exit,
}

/// Quantizer cut points per display.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ThresholdConfig {
    pub matrix: ThresholdTable,
    pub ltp305: ThresholdTable,
}

impl Default for ThresholdConfig {
    fn default() -> Self {
        Self {
            matrix: ThresholdTable::matrix_8x8(),
            ltp305: ThresholdTable::ltp305(),
        }
    }
}

impl ThresholdConfig {
    /// Table for `kind`; the segment display does not quantize and gets an
    /// empty table.
    pub fn for_kind(&self, kind: DisplayKind) -> ThresholdTable {
        match kind {
            DisplayKind::Matrix => self.matrix.clone(),
            DisplayKind::Ltp305 => self.ltp305.clone(),
            DisplayKind::Segment => ThresholdTable::default(),
        }
    }
}
