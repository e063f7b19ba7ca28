// File: crates/chart-core/src/chart.rs
// Summary: Chart struct and headless PNG rendering pipeline using Skia CPU raster surfaces.

use skia_safe as skia;
use tracing::debug;

use crate::align::AlignedTable;
use crate::axis::{Axis, DEFAULT_DATE_FORMAT};
use crate::error::RenderError;
use crate::series::Series;
use crate::text::{Anchor, TextShaper};
use crate::theme::Theme;
use crate::types::{Insets, HEIGHT, LEGEND_HEIGHT, WIDTH};
use crate::view::ViewState;

#[derive(Clone, Debug)]
pub struct RenderOptions {
    pub width: i32,
    pub height: i32,
    pub insets: Insets,
    pub theme: Theme,
    /// Draw tick labels, axis labels, and legend text. Off for pixel-stable snapshots.
    pub draw_labels: bool,
    /// chrono pattern for date ticks.
    pub date_format: String,
    pub x_ticks: usize,
    pub y_ticks: usize,
}

impl Default for RenderOptions {
    fn default() -> Self {
        Self {
            width: WIDTH,
            height: HEIGHT,
            insets: Insets::default(),
            theme: Theme::default(),
            draw_labels: true,
            date_format: DEFAULT_DATE_FORMAT.to_string(),
            x_ticks: 6,
            y_ticks: 6,
        }
    }
}

#[derive(Clone, Debug)]
pub struct Chart {
    pub series: Vec<Series>,
    pub x_axis: Axis,
    pub y_axis: Axis,
}

impl Default for Chart {
    fn default() -> Self { Self::new() }
}

impl Chart {
    pub fn new() -> Self {
        Self {
            series: Vec::new(),
            x_axis: Axis::default_x(),
            y_axis: Axis::default_y(),
        }
    }

    /// One line per device with auto-scaled axes.
    pub fn from_table(table: &AlignedTable) -> Self {
        let mut chart = Self::new();
        chart.series = Series::lines_from_table(table);
        chart.autoscale_axes();
        chart
    }

    pub fn add_series(&mut self, series: Series) {
        self.series.push(series);
    }

    /// Fit both axes to the data.
    pub fn autoscale_axes(&mut self) {
        ViewState::from_chart(self).apply_to_chart(self);
    }

    /// Render and encode as PNG bytes.
    pub fn render_to_png_bytes(&self, opts: &RenderOptions) -> Result<Vec<u8>, RenderError> {
        let mut surface = self.render_surface(opts)?;
        let image = surface.image_snapshot();
        #[allow(deprecated)]
        let data = image
            .encode_to_data(skia::EncodedImageFormat::PNG)
            .ok_or(RenderError::Encode)?;
        Ok(data.as_bytes().to_vec())
    }

    /// Render the chart to a PNG at `output_png_path` using a CPU raster surface.
    pub fn render_to_png(
        &self,
        opts: &RenderOptions,
        output_png_path: impl AsRef<std::path::Path>,
    ) -> Result<(), RenderError> {
        let path = output_png_path.as_ref();
        let bytes = self.render_to_png_bytes(opts)?;
        let io_err = |source| RenderError::Io { path: path.display().to_string(), source };
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent).map_err(io_err)?;
        }
        std::fs::write(path, &bytes).map_err(io_err)?;
        debug!(path = %path.display(), bytes = bytes.len(), "wrote chart PNG");
        Ok(())
    }

    /// Render to unpremultiplied RGBA8. Returns (pixels, width, height, stride).
    pub fn render_to_rgba8(&self, opts: &RenderOptions) -> Result<(Vec<u8>, i32, i32, usize), RenderError> {
        let mut surface = self.render_surface(opts)?;
        let info = skia::ImageInfo::new(
            (opts.width, opts.height),
            skia::ColorType::RGBA8888,
            skia::AlphaType::Unpremul,
            None,
        );
        let stride = opts.width as usize * 4;
        let mut pixels = vec![0u8; stride * opts.height as usize];
        if !surface.read_pixels(&info, &mut pixels, stride, (0, 0)) {
            return Err(RenderError::ReadPixels);
        }
        Ok((pixels, opts.width, opts.height, stride))
    }

    fn render_surface(&self, opts: &RenderOptions) -> Result<skia::Surface, RenderError> {
        let mut surface = skia::surfaces::raster_n32_premul((opts.width, opts.height))
            .ok_or(RenderError::Surface { width: opts.width, height: opts.height })?;
        let canvas = surface.canvas();
        let theme = &opts.theme;

        canvas.clear(theme.background);

        let plot = PlotRect {
            l: opts.insets.left as f32,
            t: opts.insets.top as f32,
            r: (opts.width - opts.insets.right as i32) as f32,
            b: (opts.height - opts.insets.bottom as i32) as f32,
        };

        let shaper = opts.draw_labels.then(TextShaper::new);
        let text = shaper.as_ref();

        draw_grid(canvas, &plot, &self.x_axis, &self.y_axis, opts);
        draw_axes(canvas, text, &plot, &self.x_axis, &self.y_axis, opts);

        canvas.save();
        canvas.clip_rect(skia::Rect::from_ltrb(plot.l, plot.t, plot.r, plot.b), skia::ClipOp::Intersect, true);
        for s in &self.series {
            draw_line_series(canvas, &plot, &self.x_axis, &self.y_axis, s);
        }
        canvas.restore();

        draw_legend(canvas, text, &self.series, opts);
        Ok(surface)
    }
}

// ---- helpers ----------------------------------------------------------------

struct PlotRect {
    l: f32,
    t: f32,
    r: f32,
    b: f32,
}

impl PlotRect {
    fn sx(&self, axis: &Axis, x: f64) -> f32 {
        let span = (axis.max - axis.min).max(1e-9);
        self.l + ((x - axis.min) / span) as f32 * (self.r - self.l)
    }
    fn sy(&self, axis: &Axis, y: f64) -> f32 {
        let span = (axis.max - axis.min).max(1e-9);
        self.b - ((y - axis.min) / span) as f32 * (self.b - self.t)
    }
}

fn draw_grid(canvas: &skia::Canvas, p: &PlotRect, x: &Axis, y: &Axis, opts: &RenderOptions) {
    let mut paint = skia::Paint::default();
    paint.set_color(opts.theme.grid);
    paint.set_anti_alias(true);
    paint.set_style(skia::paint::Style::Stroke);
    paint.set_stroke_width(1.0);
    paint.set_path_effect(skia::PathEffect::dash(&[3.0, 3.0], 0.0));

    for v in x.ticks(opts.x_ticks) {
        let px = p.sx(x, v);
        canvas.draw_line((px, p.t), (px, p.b), &paint);
    }
    for v in y.ticks(opts.y_ticks) {
        let py = p.sy(y, v);
        canvas.draw_line((p.l, py), (p.r, py), &paint);
    }
}

fn draw_axes(
    canvas: &skia::Canvas,
    text: Option<&TextShaper>,
    p: &PlotRect,
    x: &Axis,
    y: &Axis,
    opts: &RenderOptions,
) {
    let theme = &opts.theme;
    let mut axis_paint = skia::Paint::default();
    axis_paint.set_color(theme.axis_line);
    axis_paint.set_anti_alias(true);
    axis_paint.set_stroke_width(1.0);

    canvas.draw_line((p.l, p.b), (p.r, p.b), &axis_paint);
    canvas.draw_line((p.l, p.t), (p.l, p.b), &axis_paint);

    // tick marks
    for v in x.ticks(opts.x_ticks) {
        let px = p.sx(x, v);
        canvas.draw_line((px, p.b), (px, p.b + 6.0), &axis_paint);
    }
    for v in y.ticks(opts.y_ticks) {
        let py = p.sy(y, v);
        canvas.draw_line((p.l - 6.0, py), (p.l, py), &axis_paint);
    }

    let Some(text) = text else { return };

    for v in x.ticks(opts.x_ticks) {
        let label = x.format_tick(v, &opts.date_format);
        text.draw(canvas, &label, p.sx(x, v), p.b + 22.0, 12.0, theme.tick, Anchor::Center);
    }
    for v in y.ticks(opts.y_ticks) {
        let label = y.format_tick(v, &opts.date_format);
        text.draw(canvas, &label, p.l - 10.0, p.sy(y, v) + 4.0, 12.0, theme.tick, Anchor::Right);
    }

    if !x.label.is_empty() {
        text.draw(canvas, &x.label, p.r, p.b + 40.0, 14.0, theme.axis_label, Anchor::Right);
    }
    if !y.label.is_empty() {
        text.draw(canvas, &y.label, p.l - 56.0, p.t - 2.0, 14.0, theme.axis_label, Anchor::Left);
    }
}

fn draw_line_series(canvas: &skia::Canvas, p: &PlotRect, x_axis: &Axis, y_axis: &Axis, series: &Series) {
    let mut stroke = skia::Paint::default();
    stroke.set_anti_alias(true);
    stroke.set_style(skia::paint::Style::Stroke);
    stroke.set_stroke_width(series.stroke_width);
    stroke.set_color(series.color);

    for run in series.segments() {
        let (x0, y0) = run[0];
        if run.len() == 1 {
            let mut dot = stroke.clone();
            dot.set_style(skia::paint::Style::Fill);
            canvas.draw_circle((p.sx(x_axis, x0), p.sy(y_axis, y0)), series.stroke_width * 1.5, &dot);
            continue;
        }
        let mut path = skia::Path::new();
        path.move_to((p.sx(x_axis, x0), p.sy(y_axis, y0)));
        for &(x, y) in run.iter().skip(1) {
            path.line_to((p.sx(x_axis, x), p.sy(y_axis, y)));
        }
        canvas.draw_path(&path, &stroke);
    }
}

/// Centered legend row under the plot: a colored swatch and the series label per entry.
fn draw_legend(canvas: &skia::Canvas, text: Option<&TextShaper>, series: &[Series], opts: &RenderOptions) {
    if series.is_empty() {
        return;
    }
    const SWATCH: f32 = 14.0;
    const GAP: f32 = 4.0;
    const SPACING: f32 = 12.0;
    const FONT_SIZE: f32 = 12.0;

    // Without labels, reserve an approximate width so swatch spacing stays stable.
    let label_width = |label: &str| -> f32 {
        match text {
            Some(t) => t.measure_width(label, FONT_SIZE),
            None => label.chars().count() as f32 * 7.0,
        }
    };
    let widths: Vec<f32> = series.iter().map(|s| SWATCH + GAP + label_width(&s.label)).collect();
    let total = widths.iter().sum::<f32>() + SPACING * (widths.len() - 1) as f32;

    let mut x = ((opts.width as f32 - total) * 0.5).max(4.0);
    let y = opts.height as f32 - LEGEND_HEIGHT as f32 * 0.5;

    let mut swatch = skia::Paint::default();
    swatch.set_anti_alias(true);
    swatch.set_style(skia::paint::Style::Stroke);
    swatch.set_stroke_width(2.0);

    for (s, w) in series.iter().zip(&widths) {
        swatch.set_color(s.color);
        canvas.draw_line((x, y), (x + SWATCH, y), &swatch);
        if let Some(t) = text {
            t.draw(canvas, &s.label, x + SWATCH + GAP, y + 4.0, FONT_SIZE, opts.theme.legend_text, Anchor::Left);
        }
        x += w + SPACING;
    }
}
