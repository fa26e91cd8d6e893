pub mod encoder;
pub mod error;
pub mod frame;
pub mod history;
pub mod quantizer;
pub mod sample;
pub mod traits;

pub use encoder::PanelEncoder;
pub use error::{LedError, Result};
pub use frame::{DisplayKind, Frame, Power, SegmentReading};
pub use history::History;
pub use quantizer::{bar_mask, ThresholdTable};
pub use sample::Sample;
pub use traits::{Sampler, Transport};
