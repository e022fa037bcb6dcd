use serde::{Deserialize, Serialize};
use super::{
    cents::to_cents,
    series::{DisplayPoint, Series},
    ticks::{numeric_labels, numeric_ticks, swara_ticks, TickLabel},
    window::{filter, TimeWindow},
};
/// How the value axis is expressed.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AxisMode {
    /// Raw pitch with numeric ticks.
    #[default]
    Hertz,
    /// Cents above the tonic with numeric ticks.
    Cents,
    /// Cents above the tonic labelled with scale degrees.
    Swara,
}
impl AxisMode {
    pub const ALL: [AxisMode; 3] = [AxisMode::Hertz, AxisMode::Cents, AxisMode::Swara];
    pub fn unit(self) -> Unit {
        match self {
            AxisMode::Hertz => Unit::Hertz,
            AxisMode::Cents | AxisMode::Swara => Unit::Cents,
        }
    }
    pub fn needs_tonic(self) -> bool {
        self.unit() == Unit::Cents
    }
    pub fn label(self) -> &'static str {
        match self {
            AxisMode::Hertz => "Hz",
            AxisMode::Cents => "Cents",
            AxisMode::Swara => "Swara",
        }
    }
}
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Unit {
    Hertz,
    Cents,
}
impl Unit {
    pub fn suffix(self) -> &'static str {
        match self {
            Unit::Hertz => "Hz",
            Unit::Cents => "cents",
        }
    }
    fn decimals(self) -> usize {
        match self {
            Unit::Hertz => 1,
            Unit::Cents => 0,
        }
    }
}
/// Inclusive value-axis bounds.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ValueRange {
    pub min: f64,
    pub max: f64,
}
impl ValueRange {
    pub fn from_values(values: impl IntoIterator<Item = f64>) -> Option<Self> {
        let mut range: Option<ValueRange> = None;
        for v in values.into_iter().filter(|v| v.is_finite()) {
            range = Some(match range {
                None => ValueRange { min: v, max: v },
                Some(r) => ValueRange {
                    min: r.min.min(v),
                    max: r.max.max(v),
                },
            });
        }
        range
    }
    /// Widens the range so an axis never has zero height.
    ///
    /// A flat range grows by 1 on each side; otherwise by 10% of the span,
    /// at least 1.
    pub fn padded(&self) -> Self {
        let span = self.max - self.min;
        let pad = if span == 0.0 { 1.0 } else { (span * 0.1).max(1.0) };
        ValueRange {
            min: self.min - pad,
            max: self.max + pad,
        }
    }
}
/// Everything the pipeline needs besides the series.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct DisplayRequest {
    pub window: TimeWindow,
    pub tonic: Option<f64>,
    pub axis: AxisMode,
    /// Intervals between numeric ticks.
    pub tick_count: usize,
    pub min_label_spacing_px: f64,
    pub plot_height_px: f64,
}
impl Default for DisplayRequest {
    fn default() -> Self {
        Self {
            window: TimeWindow::default(),
            tonic: None,
            axis: AxisMode::Hertz,
            tick_count: 5,
            min_label_spacing_px: 18.0,
            plot_height_px: 260.0,
        }
    }
}
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum DisplayStatus {
    Ready,
    /// Window fell between samples; points were snapped to the nearest ones.
    Snapped,
    NoSeries,
    InvalidWindow,
    InvalidTonic,
    /// Every sample in the window lacked a defined pitch in cents.
    NoPitchedSamples,
}
impl DisplayStatus {
    /// User-facing hint for states that show nothing or need a warning.
    pub fn hint(self) -> Option<&'static str> {
        match self {
            DisplayStatus::Ready => None,
            DisplayStatus::Snapped => {
                Some("no samples in range; showing the nearest samples instead")
            }
            DisplayStatus::NoSeries => Some("load a .txt or .csv pitch file"),
            DisplayStatus::InvalidWindow => Some("enter a valid range"),
            DisplayStatus::InvalidTonic => Some("enter a valid tonic"),
            DisplayStatus::NoPitchedSamples => Some("no pitched samples in this range"),
        }
    }
}
/// Output consumed by chart adapters.
#[derive(Clone, Debug, PartialEq)]
pub struct DisplayFrame {
    pub window: TimeWindow,
    pub unit: Unit,
    pub points: Vec<DisplayPoint>,
    pub ticks: Vec<TickLabel>,
    /// Padded value-axis bounds; `None` when there is nothing to draw.
    pub value_range: Option<ValueRange>,
    pub status: DisplayStatus,
}
impl DisplayFrame {
    fn neutral(request: &DisplayRequest, status: DisplayStatus) -> Self {
        Self {
            window: request.window,
            unit: request.axis.unit(),
            points: Vec::new(),
            ticks: Vec::new(),
            value_range: None,
            status,
        }
    }
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }
    /// Time span covered by the points, which may exceed the window when snapped.
    pub fn time_range(&self) -> (f64, f64) {
        match (self.points.first(), self.points.last()) {
            (Some(first), Some(last)) if self.status == DisplayStatus::Snapped => (
                first.time.min(self.window.start),
                last.time.max(self.window.end),
            ),
            _ => (self.window.start, self.window.end),
        }
    }
}
/// Derives display frames from one loaded series.
///
/// The series is fixed for the lifetime of the pipeline; a new upload builds
/// a new pipeline.
#[derive(Clone, Debug, Default)]
pub struct PitchPipeline {
    series: Series,
}
impl PitchPipeline {
    pub fn new(series: Series) -> Self {
        Self { series }
    }
    pub fn series(&self) -> &Series {
        &self.series
    }
    pub fn derive(&self, request: &DisplayRequest) -> DisplayFrame {
        if self.series.is_empty() {
            return DisplayFrame::neutral(request, DisplayStatus::NoSeries);
        }
        if !request.window.is_valid() {
            return DisplayFrame::neutral(request, DisplayStatus::InvalidWindow);
        }
        let tonic = match (request.axis.needs_tonic(), request.tonic) {
            (false, _) => None,
            (true, Some(t)) if t.is_finite() && t > 0.0 => Some(t),
            (true, _) => return DisplayFrame::neutral(request, DisplayStatus::InvalidTonic),
        };
        let slice = filter(&self.series, &request.window);
        let points: Vec<DisplayPoint> = match tonic {
            None => slice
                .samples
                .iter()
                .map(|s| DisplayPoint {
                    time: s.time,
                    value: s.value,
                })
                .collect(),
            Some(tonic) => slice
                .samples
                .iter()
                .filter_map(|s| {
                    to_cents(s.value, tonic).map(|value| DisplayPoint {
                        time: s.time,
                        value,
                    })
                })
                .collect(),
        };
        let Some(range) = ValueRange::from_values(points.iter().map(|p| p.value)) else {
            return DisplayFrame::neutral(request, DisplayStatus::NoPitchedSamples);
        };
        let range = range.padded();
        let ticks = match request.axis {
            AxisMode::Swara => swara_ticks(
                range.min,
                range.max,
                request.min_label_spacing_px,
                request.plot_height_px,
            ),
            AxisMode::Hertz | AxisMode::Cents => numeric_labels(
                &numeric_ticks(range.min, range.max, request.tick_count),
                request.axis.unit().decimals(),
            ),
        };
        DisplayFrame {
            window: request.window,
            unit: request.axis.unit(),
            points,
            ticks,
            value_range: Some(range),
            status: if slice.snapped {
                DisplayStatus::Snapped
            } else {
                DisplayStatus::Ready
            },
        }
    }
}
/// Reads a numeric text field; blank, non-numeric and non-finite input is `None`.
pub fn parse_field(text: &str) -> Option<f64> {
    text.trim().parse::<f64>().ok().filter(|v| v.is_finite())
}
