// File: crates/chart-core/src/align.rs
// Summary: Series alignment; merges per-device readings into one date-keyed table.
// Notes:
// - Rows are keyed by epoch milliseconds and sorted ascending.
// - A device without a reading at a row's timestamp has no field in that row.
// - Duplicate timestamps within one device: the last reading in input order wins.

use std::collections::{BTreeMap, HashMap};

use chrono::{DateTime, NaiveDate, NaiveDateTime};
use serde::ser::{Serialize, SerializeMap, Serializer};
use tracing::debug;

use crate::error::AlignError;

/// Key under which a row's timestamp is serialized.
pub const TIMESTAMP_KEY: &str = "DataConsumo";

const NAIVE_DATETIME_FORMATS: &[&str] = &[
    "%Y-%m-%dT%H:%M:%S%.f",
    "%Y-%m-%d %H:%M:%S%.f",
    "%Y-%m-%dT%H:%M",
    "%Y-%m-%d %H:%M",
];

/// One timestamped measurement.
#[derive(Clone, Debug, PartialEq)]
pub struct Reading {
    pub date: String,
    pub value: f64,
}

impl Reading {
    pub fn new(date: impl Into<String>, value: f64) -> Self {
        Self { date: date.into(), value }
    }
}

/// All readings reported by one device. Reading order is not significant
/// except as the tie-break for duplicate timestamps.
#[derive(Clone, Debug, PartialEq)]
pub struct DeviceSeries {
    pub id: String,
    pub readings: Vec<Reading>,
}

impl DeviceSeries {
    pub fn new(id: impl Into<String>, readings: Vec<Reading>) -> Self {
        Self { id: id.into(), readings }
    }
}

/// One row of the aligned table.
#[derive(Clone, Debug, PartialEq)]
pub struct AlignedRow {
    pub timestamp_ms: i64,
    /// Present only for devices that reported at exactly `timestamp_ms`.
    pub values: BTreeMap<String, f64>,
}

impl AlignedRow {
    pub fn value(&self, device: &str) -> Option<f64> {
        self.values.get(device).copied()
    }
}

impl Serialize for AlignedRow {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.values.len() + 1))?;
        map.serialize_entry(TIMESTAMP_KEY, &self.timestamp_ms)?;
        for (device, value) in &self.values {
            map.serialize_entry(device, value)?;
        }
        map.end()
    }
}

/// Date-aligned table plus the device ids in input order.
#[derive(Clone, Debug, Default, PartialEq, serde::Serialize)]
pub struct AlignedTable {
    #[serde(rename = "data")]
    pub rows: Vec<AlignedRow>,
    #[serde(rename = "devices")]
    pub device_ids: Vec<String>,
}

impl AlignedTable {
    pub fn len(&self) -> usize { self.rows.len() }

    pub fn is_empty(&self) -> bool { self.rows.is_empty() }

    pub fn timestamps(&self) -> impl Iterator<Item = i64> + '_ {
        self.rows.iter().map(|r| r.timestamp_ms)
    }

    /// Column for one device: `(x, y)` per row, `None` where the device is absent.
    pub fn series_for(&self, device: &str) -> Vec<(f64, Option<f64>)> {
        self.rows
            .iter()
            .map(|r| (r.timestamp_ms as f64, r.value(device)))
            .collect()
    }

    /// Min/max over every present value, or `None` when the table holds no values.
    pub fn value_range(&self) -> Option<(f64, f64)> {
        self.rows
            .iter()
            .flat_map(|r| r.values.values().copied())
            .fold(None, |acc, v| match acc {
                None => Some((v, v)),
                Some((lo, hi)) => Some((lo.min(v), hi.max(v))),
            })
    }
}

/// Parse a calendar date-time into epoch milliseconds.
///
/// Accepts RFC 3339 (offset or `Z`), offset-less ISO-8601 date-times (read as UTC),
/// and plain `YYYY-MM-DD` dates (UTC midnight).
pub fn parse_timestamp_ms(raw: &str) -> Option<i64> {
    let s = raw.trim();
    if let Ok(dt) = DateTime::parse_from_rfc3339(s) {
        return Some(dt.timestamp_millis());
    }
    for fmt in NAIVE_DATETIME_FORMATS {
        if let Ok(naive) = NaiveDateTime::parse_from_str(s, fmt) {
            return Some(naive.and_utc().timestamp_millis());
        }
    }
    NaiveDate::parse_from_str(s, "%Y-%m-%d")
        .ok()
        .and_then(|d| d.and_hms_opt(0, 0, 0))
        .map(|naive| naive.and_utc().timestamp_millis())
}

/// Align independent device series onto the union of their timestamps.
///
/// Fails with [`AlignError::MalformedDate`] on the first unparsable date; an
/// empty input yields an empty table.
pub fn align_series(devices: &[DeviceSeries]) -> Result<AlignedTable, AlignError> {
    let device_ids: Vec<String> = devices.iter().map(|d| d.id.clone()).collect();

    // Per-device index; later readings overwrite earlier ones at the same instant.
    let mut indexed: Vec<HashMap<i64, f64>> = Vec::with_capacity(devices.len());
    let mut timestamps: Vec<i64> = Vec::new();
    for device in devices {
        let mut by_ts = HashMap::with_capacity(device.readings.len());
        for (index, reading) in device.readings.iter().enumerate() {
            let ts = parse_timestamp_ms(&reading.date).ok_or_else(|| AlignError::MalformedDate {
                device: device.id.clone(),
                index,
                value: reading.date.clone(),
            })?;
            by_ts.insert(ts, reading.value);
            timestamps.push(ts);
        }
        indexed.push(by_ts);
    }

    timestamps.sort_unstable();
    timestamps.dedup();

    let rows: Vec<AlignedRow> = timestamps
        .into_iter()
        .map(|ts| {
            let mut values = BTreeMap::new();
            for (device, by_ts) in devices.iter().zip(&indexed) {
                if let Some(&v) = by_ts.get(&ts) {
                    values.insert(device.id.clone(), v);
                }
            }
            AlignedRow { timestamp_ms: ts, values }
        })
        .collect();

    debug!(devices = device_ids.len(), rows = rows.len(), "aligned device series");
    Ok(AlignedTable { rows, device_ids })
}
