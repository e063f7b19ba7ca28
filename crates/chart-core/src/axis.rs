// File: crates/chart-core/src/axis.rs
// Summary: Axis model with labels, ranges, ticks, and date/number tick formatting.

use std::fmt::Write as _;

use chrono::format::{Item, StrftimeItems};
use chrono::DateTime;

/// Default pattern for date ticks (short day/month/year).
pub const DEFAULT_DATE_FORMAT: &str = "%d/%m/%Y";

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum AxisFormat {
    Number,
    /// Values are epoch milliseconds.
    Date,
}

#[derive(Clone, Debug)]
pub struct Axis {
    pub label: String,
    pub min: f64,
    pub max: f64,
    pub format: AxisFormat,
}

impl Axis {
    pub fn new(label: impl Into<String>, min: f64, max: f64) -> Self {
        Self { label: label.into(), min, max, format: AxisFormat::Number }
    }

    pub fn with_format(mut self, format: AxisFormat) -> Self {
        self.format = format;
        self
    }

    pub fn default_x() -> Self {
        Self::new("", 0.0, 1.0).with_format(AxisFormat::Date)
    }

    pub fn default_y() -> Self {
        Self::new("", 0.0, 1.0)
    }

    /// `count` evenly spaced tick values from min to max, inclusive.
    pub fn ticks(&self, count: usize) -> Vec<f64> {
        linspace(self.min, self.max, count)
    }

    pub fn format_tick(&self, value: f64, date_format: &str) -> String {
        match self.format {
            AxisFormat::Number => format_number(value),
            AxisFormat::Date => format_date_ms(value as i64, date_format),
        }
    }
}

pub fn linspace(start: f64, end: f64, steps: usize) -> Vec<f64> {
    if steps < 2 { return vec![start, end]; }
    let step = (end - start) / (steps as f64 - 1.0);
    (0..steps).map(|i| start + step * i as f64).collect()
}

/// True when every specifier in `pattern` is one chrono understands.
pub fn is_valid_date_format(pattern: &str) -> bool {
    StrftimeItems::new(pattern).all(|item| !matches!(item, Item::Error))
}

/// Render epoch milliseconds as a calendar date (UTC). Falls back to the raw
/// millisecond count when the instant is out of range or `pattern` is invalid.
pub fn format_date_ms(ms: i64, pattern: &str) -> String {
    let Some(dt) = DateTime::from_timestamp_millis(ms) else {
        return ms.to_string();
    };
    let mut out = String::new();
    match write!(out, "{}", dt.format(pattern)) {
        Ok(()) => out,
        Err(_) => ms.to_string(),
    }
}

fn format_number(v: f64) -> String {
    let a = v.abs();
    if a >= 100.0 || v == v.trunc() {
        format!("{:.0}", v)
    } else if a >= 1.0 {
        format!("{:.1}", v)
    } else {
        format!("{:.2}", v)
    }
}
