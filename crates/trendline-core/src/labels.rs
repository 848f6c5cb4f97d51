// File: crates/trendline-core/src/labels.rs
// Summary: Layout of the value side panel (high/low/last) and the date row under the chart.

use std::fmt::Write;

use chrono::{DateTime, Utc};

use crate::geometry::Offset;
use crate::selection::Selection;
use crate::series::Series;

pub const DEFAULT_DATE_PATTERN: &str = "%Y/%m/%d";

/// Format a timestamp with a chrono pattern. Invalid patterns fall back to
/// `DEFAULT_DATE_PATTERN` instead of panicking.
pub fn format_date(ts: DateTime<Utc>, pattern: &str) -> String {
    let mut out = String::new();
    if write!(out, "{}", ts.format(pattern)).is_ok() {
        return out;
    }
    ts.format(DEFAULT_DATE_PATTERN).to_string()
}

/// Text vertically centred on `center_y` within the side panel.
#[derive(Clone, Debug, PartialEq)]
pub struct ValueLabel {
    pub text: String,
    pub center_y: f32,
}

#[derive(Clone, Debug, PartialEq)]
pub struct ValueLabels {
    pub high: ValueLabel,
    pub low: ValueLabel,
    /// Follows the last point; absent until the chart has been laid out.
    pub last: Option<ValueLabel>,
}

impl ValueLabels {
    pub fn layout(series: &Series, last_point: Option<Offset>, panel_height: f32) -> Self {
        Self {
            high: ValueLabel { text: series.high().to_string(), center_y: 0.0 },
            low: ValueLabel { text: series.low().to_string(), center_y: panel_height },
            last: last_point.map(|p| ValueLabel { text: series.last().to_string(), center_y: p.y }),
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub enum DateLabels {
    /// First and last dates at the two ends of the row.
    Range { start: String, end: String },
    /// Selected sample's date anchored at its x position.
    Selected { text: String, x: f32 },
}

impl DateLabels {
    pub fn layout(series: &Series, selection: Option<&Selection>, pattern: &str) -> Self {
        match selection {
            Some(sel) => DateLabels::Selected {
                text: format_date(sel.sample.timestamp, pattern),
                x: sel.offset.x,
            },
            None => DateLabels::Range {
                start: format_date(series.start_at(), pattern),
                end: format_date(series.end_at(), pattern),
            },
        }
    }
}

/// Left edge for a label centred on `anchor_x`, shifted no further left than x = 0.
pub fn centered_left(anchor_x: f32, label_width: f32) -> f32 {
    anchor_x - (label_width / 2.0).min(anchor_x.max(0.0))
}
