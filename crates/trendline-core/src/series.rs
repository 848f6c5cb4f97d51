// File: crates/trendline-core/src/series.rs
// Summary: Immutable series of (value, timestamp) samples with derived range statistics.
// Notes:
// - Sample order is the x axis; timestamps only feed the date labels.
// - A flat range (low == high) is accepted and maps every value to the mid-line.

use chrono::{DateTime, Utc};

use crate::error::{ChartError, Result};

/// One data point.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Sample {
    pub value: i32,
    pub timestamp: DateTime<Utc>,
}

impl Sample {
    pub const fn new(value: i32, timestamp: DateTime<Utc>) -> Self {
        Self { value, timestamp }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct Series {
    items: Vec<Sample>,
    low: i32,
    high: i32,
    start_at: DateTime<Utc>,
    end_at: DateTime<Utc>,
    last: i32,
}

impl Series {
    /// Build a series whose visible range is the data range.
    pub fn new(items: Vec<Sample>) -> Result<Self> {
        check_len(&items)?;
        let low = items.iter().map(|s| s.value).min().unwrap_or_default();
        let high = items.iter().map(|s| s.value).max().unwrap_or_default();
        Ok(Self::build(items, low, high))
    }

    /// Build a series with an explicit visible range, e.g. to leave headroom
    /// above the data or to keep a threshold line on the surface.
    pub fn with_range(items: Vec<Sample>, low: i32, high: i32) -> Result<Self> {
        check_len(&items)?;
        if high < low {
            return Err(ChartError::InvertedRange { low, high });
        }
        Ok(Self::build(items, low, high))
    }

    fn build(items: Vec<Sample>, low: i32, high: i32) -> Self {
        let start_at = items.iter().map(|s| s.timestamp).min().unwrap_or_default();
        let end_at = items.iter().map(|s| s.timestamp).max().unwrap_or_default();
        let last = items.last().map(|s| s.value).unwrap_or_default();
        Self { items, low, high, start_at, end_at, last }
    }

    /// Position of `value` within `[low, high]`, 0 at low and 1 at high.
    /// Values outside the range extrapolate linearly. A flat range yields 0.5.
    pub fn fraction_of(&self, value: i32) -> f32 {
        let span = self.high as i64 - self.low as i64;
        if span == 0 {
            return 0.5;
        }
        ((value as i64 - self.low as i64) as f64 / span as f64) as f32
    }

    pub fn get(&self, index: usize) -> Result<&Sample> {
        self.items
            .get(index)
            .ok_or(ChartError::IndexOutOfRange { index, len: self.items.len() })
    }

    pub fn items(&self) -> &[Sample] { &self.items }
    pub fn iter(&self) -> std::slice::Iter<'_, Sample> { self.items.iter() }
    pub fn len(&self) -> usize { self.items.len() }
    /// Always false: construction rejects short series.
    pub fn is_empty(&self) -> bool { self.items.is_empty() }
    pub fn low(&self) -> i32 { self.low }
    pub fn high(&self) -> i32 { self.high }
    pub fn start_at(&self) -> DateTime<Utc> { self.start_at }
    pub fn end_at(&self) -> DateTime<Utc> { self.end_at }
    /// Value of the chronologically last sample, not necessarily the max.
    pub fn last(&self) -> i32 { self.last }
    pub fn first(&self) -> i32 { self.items[0].value }
}

impl<'a> IntoIterator for &'a Series {
    type Item = &'a Sample;
    type IntoIter = std::slice::Iter<'a, Sample>;
    fn into_iter(self) -> Self::IntoIter { self.items.iter() }
}

fn check_len(items: &[Sample]) -> Result<()> {
    if items.len() < 2 {
        return Err(ChartError::TooFewSamples { len: items.len() });
    }
    Ok(())
}
