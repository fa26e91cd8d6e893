use crate::error::Result;
use crate::frame::{Frame, Power};
use crate::sample::Sample;
use std::future::Future;
use std::time::Duration;

/// Source of one percentage reading per tick.
pub trait Sampler {
    fn read(&mut self) -> Sample;
}

/// Delivers frames and control commands to a physical display.
///
/// Implementations own all hardware fault handling; the scheduler only
/// distinguishes [`LedError::WriteTimeout`](crate::LedError::WriteTimeout)
/// from every other failure.
pub trait Transport {
    /// Write one frame, giving up after `timeout`.
    fn write_frame(&mut self, frame: &Frame, timeout: Duration) -> impl Future<Output = Result<()>>;

    fn set_power(&mut self, power: Power) -> impl Future<Output = Result<()>>;

    /// Brightness on the driver's own scale.
    fn set_brightness(&mut self, level: u8) -> impl Future<Output = Result<()>>;

    /// Bring the bus up and clear the display.
    fn reset(&mut self) -> impl Future<Output = Result<()>>;
}
