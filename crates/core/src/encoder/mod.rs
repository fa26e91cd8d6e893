//! Panel encoders: render a [`History`] into the byte layout of one display.

pub mod ltp305;
pub mod matrix;
pub mod segment;

pub use ltp305::Ltp305Encoder;
pub use matrix::MatrixEncoder;
pub use segment::SegmentEncoder;

use crate::error::Result;
use crate::frame::{DisplayKind, Frame};
use crate::history::History;
use crate::quantizer::ThresholdTable;
use crate::sample::Sample;

/// Every display topology implements this trait.
///
/// Encoders are pure: they read the history and return a fresh [`Frame`],
/// holding no state between ticks beyond their threshold table.
pub trait PanelEncoder: Send + Sync + std::fmt::Debug {
    fn kind(&self) -> DisplayKind;

    /// History length the encoder renders.
    fn columns(&self) -> usize {
        self.kind().columns()
    }

    fn encode(&self, history: &History) -> Frame;
}

/// Build the encoder for `kind`.  `table` is ignored by the segment display.
pub fn for_display(kind: DisplayKind, table: ThresholdTable) -> Result<Box<dyn PanelEncoder>> {
    Ok(match kind {
        DisplayKind::Matrix => Box::new(MatrixEncoder::new(table)?),
        DisplayKind::Ltp305 => Box::new(Ltp305Encoder::new(table)?),
        DisplayKind::Segment => Box::new(SegmentEncoder),
    })
}

/// The newest `N` samples, oldest first.  A shorter history is padded with
/// blank columns on the left.
fn window<const N: usize>(history: &History) -> [Sample; N] {
    let mut out = [Sample::MIN; N];
    let samples = history.snapshot();
    let take = samples.len().min(N);
    out[N - take..].copy_from_slice(&samples[samples.len() - take..]);
    out
}
