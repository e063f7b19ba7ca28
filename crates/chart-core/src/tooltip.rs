// File: crates/chart-core/src/tooltip.rs
// Summary: Hover lookup; what the tooltip shows for an x position over the aligned table.

use crate::align::AlignedTable;
use crate::axis::format_date_ms;

#[derive(Clone, Debug, PartialEq)]
pub struct Tooltip {
    pub timestamp_ms: i64,
    /// Row date formatted for display.
    pub label: String,
    /// One entry per device id, in legend order.
    pub entries: Vec<(String, Option<f64>)>,
}

/// Tooltip for the row nearest to `x_ms`. Ties go to the earlier row.
/// Returns `None` for an empty table.
pub fn tooltip_at(table: &AlignedTable, x_ms: f64, date_format: &str) -> Option<Tooltip> {
    let rows = &table.rows;
    if rows.is_empty() {
        return None;
    }
    let i = rows.partition_point(|r| (r.timestamp_ms as f64) < x_ms);
    let idx = if i == 0 {
        0
    } else if i == rows.len() {
        rows.len() - 1
    } else {
        let before = x_ms - rows[i - 1].timestamp_ms as f64;
        let after = rows[i].timestamp_ms as f64 - x_ms;
        if before <= after { i - 1 } else { i }
    };
    let row = &rows[idx];
    let entries = table
        .device_ids
        .iter()
        .map(|id| (id.clone(), row.value(id)))
        .collect();
    Some(Tooltip {
        timestamp_ms: row.timestamp_ms,
        label: format_date_ms(row.timestamp_ms, date_format),
        entries,
    })
}

impl Tooltip {
    /// Display lines: the date, then `device: value` (or `-` when absent).
    pub fn lines(&self) -> Vec<String> {
        let mut out = Vec::with_capacity(self.entries.len() + 1);
        out.push(self.label.clone());
        for (id, v) in &self.entries {
            match v {
                Some(v) => out.push(format!("{id}: {v}")),
                None => out.push(format!("{id}: -")),
            }
        }
        out
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::align::{align_series, DeviceSeries, Reading};

    fn table() -> AlignedTable {
        align_series(&[
            DeviceSeries::new("A", vec![Reading::new("1970-01-01T00:00:00Z", 1.0), Reading::new("1970-01-01T00:00:10Z", 2.0)]),
            DeviceSeries::new("B", vec![Reading::new("1970-01-01T00:00:10Z", 7.5)]),
        ])
        .unwrap()
    }

    #[test]
    fn snaps_to_nearest_row() {
        let t = table();
        assert_eq!(tooltip_at(&t, -500.0, "%S").unwrap().timestamp_ms, 0);
        assert_eq!(tooltip_at(&t, 4_000.0, "%S").unwrap().timestamp_ms, 0);
        assert_eq!(tooltip_at(&t, 5_000.0, "%S").unwrap().timestamp_ms, 0);
        assert_eq!(tooltip_at(&t, 6_000.0, "%S").unwrap().timestamp_ms, 10_000);
        assert_eq!(tooltip_at(&t, 99_000.0, "%S").unwrap().timestamp_ms, 10_000);
    }

    #[test]
    fn lists_every_device_in_order() {
        let tip = tooltip_at(&table(), 0.0, "%H:%M:%S").unwrap();
        assert_eq!(tip.entries, vec![("A".to_string(), Some(1.0)), ("B".to_string(), None)]);
        assert_eq!(tip.lines(), vec!["00:00:00", "A: 1", "B: -"]);
    }

    #[test]
    fn empty_table_has_no_tooltip() {
        assert!(tooltip_at(&AlignedTable::default(), 0.0, "%S").is_none());
    }
}
