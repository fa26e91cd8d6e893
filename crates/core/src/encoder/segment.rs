use super::PanelEncoder;
use crate::frame::{DisplayKind, Frame, SegmentReading};
use crate::history::History;
use crate::sample::Sample;

/// Shows the latest reading at one decimal place on a 4-digit display.
///
/// No quantization and no history: only [`History::latest`] is rendered.
#[derive(Debug, Clone, Copy, Default)]
pub struct SegmentEncoder;

impl SegmentEncoder {
    pub fn reading(sample: Sample) -> SegmentReading {
        SegmentReading::from_tenths(u16::from(sample.value()) * 10)
    }
}

impl PanelEncoder for SegmentEncoder {
    fn kind(&self) -> DisplayKind {
        DisplayKind::Segment
    }

    fn encode(&self, history: &History) -> Frame {
        Frame::Segment(Self::reading(history.latest()))
    }
}
