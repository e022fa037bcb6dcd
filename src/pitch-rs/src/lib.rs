pub mod cents;
pub mod parser;
pub mod pipeline;
pub mod series;
pub mod ticks;
pub mod window;
pub use cents::to_cents;
pub use parser::{parse, parse_with_stats, ParseStats};
pub use pipeline::{
    parse_field, AxisMode, DisplayFrame, DisplayRequest, DisplayStatus, PitchPipeline, Unit,
    ValueRange,
};
pub use series::{DisplayPoint, Sample, Series};
pub use ticks::{numeric_ticks, swara_ticks, TickLabel, SWARA_DEGREES};
pub use window::{filter, TimeWindow, WindowSlice};
