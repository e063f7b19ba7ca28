// File: crates/chart-core/src/series.rs
// Summary: Line series model; one series per device, with gaps where a device has no reading.

use skia_safe as skia;

use crate::align::AlignedTable;
use crate::palette;

/// Default stroke width for device lines, in pixels.
pub const DEFAULT_STROKE_WIDTH: f32 = 1.5;

#[derive(Clone, Debug)]
pub struct Series {
    pub label: String,
    pub color: skia::Color,
    pub stroke_width: f32,
    /// `(x, y)` points; `None` marks a gap.
    pub points: Vec<(f64, Option<f64>)>,
    /// Draw straight through gaps instead of breaking the line.
    pub connect_nulls: bool,
}

impl Series {
    pub fn new(label: impl Into<String>, color: skia::Color) -> Self {
        Self {
            label: label.into(),
            color,
            stroke_width: DEFAULT_STROKE_WIDTH,
            points: Vec::new(),
            connect_nulls: true,
        }
    }

    pub fn with_points(mut self, points: Vec<(f64, Option<f64>)>) -> Self {
        self.points = points;
        self
    }

    /// Convenience for dense data with no gaps.
    pub fn with_data(label: impl Into<String>, color: skia::Color, data: Vec<(f64, f64)>) -> Self {
        Self::new(label, color).with_points(data.into_iter().map(|(x, y)| (x, Some(y))).collect())
    }

    pub fn with_connect_nulls(mut self, connect: bool) -> Self {
        self.connect_nulls = connect;
        self
    }

    /// One series per device id, colored by position.
    pub fn lines_from_table(table: &AlignedTable) -> Vec<Series> {
        table
            .device_ids
            .iter()
            .enumerate()
            .map(|(i, id)| Series::new(id.clone(), palette::color_for(i)).with_points(table.series_for(id)))
            .collect()
    }

    /// Present points only.
    pub fn present(&self) -> impl Iterator<Item = (f64, f64)> + '_ {
        self.points.iter().filter_map(|&(x, y)| y.map(|y| (x, y)))
    }

    /// Split into drawable runs. With `connect_nulls` every present point forms one run;
    /// otherwise each gap starts a new run.
    pub fn segments(&self) -> Vec<Vec<(f64, f64)>> {
        if self.connect_nulls {
            let run: Vec<_> = self.present().collect();
            return if run.is_empty() { Vec::new() } else { vec![run] };
        }
        let mut out = Vec::new();
        let mut run = Vec::new();
        for &(x, y) in &self.points {
            match y {
                Some(y) => run.push((x, y)),
                None => {
                    if !run.is_empty() { out.push(std::mem::take(&mut run)); }
                }
            }
        }
        if !run.is_empty() { out.push(run); }
        out
    }
}
