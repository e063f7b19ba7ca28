// File: crates/chart-core/src/lib.rs
// Summary: Core library entry point; series alignment, dataset loading, and chart rendering.

pub mod align;
pub mod axis;
pub mod chart;
pub mod dataset;
pub mod error;
pub mod palette;
pub mod series;
pub mod text;
pub mod theme;
pub mod tooltip;
pub mod types;
pub mod view;

pub use align::{align_series, parse_timestamp_ms, AlignedRow, AlignedTable, DeviceSeries, Reading};
pub use axis::{Axis, AxisFormat};
pub use chart::{Chart, RenderOptions};
pub use dataset::ConsumptionDocument;
pub use error::{AlignError, DatasetError, RenderError};
pub use series::Series;
pub use text::TextShaper;
pub use theme::Theme;
pub use tooltip::{tooltip_at, Tooltip};
pub use view::ViewState;
