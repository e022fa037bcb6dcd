use serde::{Deserialize, Serialize};
use super::series::{Sample, Series};
/// Visible time range in seconds, inclusive on both ends.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct TimeWindow {
    pub start: f64,
    pub end: f64,
}
impl TimeWindow {
    pub fn new(start: f64, end: f64) -> Self {
        Self { start, end }
    }
    pub fn is_valid(&self) -> bool {
        self.start.is_finite() && self.end.is_finite() && self.start < self.end
    }
    pub fn contains(&self, time: f64) -> bool {
        self.start <= time && time <= self.end
    }
}
impl Default for TimeWindow {
    fn default() -> Self {
        TimeWindow {
            start: 0.0,
            end: 5.0,
        }
    }
}
/// Borrowed, contiguous result of [`filter`].
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct WindowSlice<'a> {
    pub samples: &'a [Sample],
    /// The window held no samples and the slice was snapped to the samples
    /// nearest its bounds.
    pub snapped: bool,
}
impl<'a> WindowSlice<'a> {
    fn empty() -> Self {
        Self {
            samples: &[],
            snapped: false,
        }
    }
    pub fn is_empty(&self) -> bool {
        self.samples.is_empty()
    }
    pub fn to_series(&self) -> Series {
        Series::from(self.samples)
    }
}
/// Returns the samples inside `window`.
///
/// An invalid window gives an empty slice. When a valid window falls between
/// samples, the result snaps to the range between the sample nearest
/// `window.start` and the sample nearest `window.end`.
pub fn filter<'a>(series: &'a Series, window: &TimeWindow) -> WindowSlice<'a> {
    if !window.is_valid() || series.is_empty() {
        return WindowSlice::empty();
    }
    let samples = series.samples();
    // Series is sorted, so the matching samples form one run.
    let first = samples.partition_point(|s| s.time < window.start);
    let last = samples.partition_point(|s| s.time <= window.end);
    if first < last {
        return WindowSlice {
            samples: &samples[first..last],
            snapped: false,
        };
    }
    let a = nearest_index(samples, window.start);
    let b = nearest_index(samples, window.end);
    let (lo, hi) = if a <= b { (a, b) } else { (b, a) };
    log::trace!(
        "window {}..{} empty, snapped to samples {lo}..={hi}",
        window.start,
        window.end
    );
    WindowSlice {
        samples: &samples[lo..=hi],
        snapped: true,
    }
}
/// Index of the sample closest to `time`; ties go to the first one seen.
fn nearest_index(samples: &[Sample], time: f64) -> usize {
    let mut best = 0;
    let mut best_dist = f64::INFINITY;
    for (idx, sample) in samples.iter().enumerate() {
        let dist = (sample.time - time).abs();
        if dist < best_dist {
            best = idx;
            best_dist = dist;
        }
    }
    best
}
