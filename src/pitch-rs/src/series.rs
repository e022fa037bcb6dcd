use std::cmp::Ordering;
use std::ops::Deref;
use std::sync::Arc;
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Sample {
    /// Time in seconds.
    pub time: f64,
    /// Pitch in Hz as read from the file. Not range checked.
    pub value: f64,
}
impl Sample {
    pub fn new(time: f64, value: f64) -> Self {
        Self { time, value }
    }
}
/// A point ready for drawing: `value` is either Hz or cents.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct DisplayPoint {
    pub time: f64,
    pub value: f64,
}
impl DisplayPoint {
    pub fn as_pair(&self) -> (f64, f64) {
        (self.time, self.value)
    }
}
/// Time-ordered, immutable pitch series.
///
/// Samples are shared behind an `Arc`, so cloning a `Series` is cheap and a
/// loaded file can be handed to several consumers without copying.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Series {
    samples: Arc<[Sample]>,
}
impl Series {
    /// Builds a series from samples, stably sorting them by time.
    pub fn from_samples(mut samples: Vec<Sample>) -> Self {
        // numerically equal times, including 0.0 and -0.0, keep input order
        samples.sort_by(|a, b| a.time.partial_cmp(&b.time).unwrap_or(Ordering::Equal));
        Self {
            samples: samples.into(),
        }
    }
    pub fn empty() -> Self {
        Self::default()
    }
    pub fn samples(&self) -> &[Sample] {
        &self.samples
    }
    /// First and last timestamps, if any.
    pub fn time_span(&self) -> Option<(f64, f64)> {
        match (self.samples.first(), self.samples.last()) {
            (Some(first), Some(last)) => Some((first.time, last.time)),
            _ => None,
        }
    }
}
impl Deref for Series {
    type Target = [Sample];
    fn deref(&self) -> &[Sample] {
        &self.samples
    }
}
impl From<&[Sample]> for Series {
    /// Copies an already ordered slice, e.g. a window result.
    fn from(slice: &[Sample]) -> Self {
        Self {
            samples: slice.into(),
        }
    }
}
