// File: crates/trendline-core/tests/common/mod.rs
// Purpose: Shared fixtures for integration tests.

#![allow(dead_code)]

use chrono::{DateTime, Duration, TimeZone, Utc};
use trendline_core::{Sample, Series};

pub fn day(n: i64) -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2024, 1, 1, 0, 0, 0).unwrap() + Duration::days(n)
}

pub fn samples(values: &[i32]) -> Vec<Sample> {
    values.iter().enumerate().map(|(i, v)| Sample::new(*v, day(i as i64))).collect()
}

pub fn series(values: &[i32]) -> Series {
    Series::new(samples(values)).expect("valid series")
}

/// The three-point series used throughout: low 100, high 1000.
pub fn example_series() -> Series {
    series(&[100, 500, 1000])
}

pub fn approx(a: f32, b: f32) -> bool {
    (a - b).abs() < 1e-3
}
