// File: crates/demo/src/main.rs
// Summary: Loads the consumption dataset, aligns device series by date, and renders a line chart PNG.

use std::path::PathBuf;

use anyhow::{bail, Context, Result};
use chart_core::axis::is_valid_date_format;
use chart_core::{align_series, theme, Chart, ConsumptionDocument, RenderOptions};
use clap::Parser;
use tracing::{info, level_filters::LevelFilter};
use tracing_subscriber::EnvFilter;

/// Render device consumption readings as one line per device.
#[derive(Debug, Parser)]
#[command(name = "consumption-chart", version)]
struct Args {
    /// Consumption JSON document; the bundled dataset is used when omitted.
    input: Option<PathBuf>,

    /// Output PNG path.
    #[arg(short, long, default_value = "target/out/consumption.png")]
    output: PathBuf,

    #[arg(long, default_value_t = chart_core::types::WIDTH)]
    width: i32,

    #[arg(long, default_value_t = chart_core::types::HEIGHT)]
    height: i32,

    /// Theme preset (light, dark).
    #[arg(long, default_value = "light")]
    theme: String,

    /// chrono pattern for date ticks.
    #[arg(long, default_value = chart_core::axis::DEFAULT_DATE_FORMAT)]
    date_format: String,

    /// Skip text (ticks and legend labels).
    #[arg(long)]
    no_labels: bool,

    /// Print the aligned table as JSON to stdout.
    #[arg(long)]
    dump_table: bool,
}

fn main() -> Result<()> {
    let args = Args::parse();
    init_tracing();
    run(args)
}

/// Load, align, and render. Nothing is written unless every step before rendering succeeds.
fn run(args: Args) -> Result<()> {
    if !is_valid_date_format(&args.date_format) {
        bail!("invalid date format '{}'", args.date_format);
    }

    let doc = match &args.input {
        Some(path) => {
            info!(path = %path.display(), "loading dataset");
            ConsumptionDocument::from_path(path)
                .with_context(|| format!("failed to load dataset '{}'", path.display()))?
        }
        None => {
            info!("loading bundled dataset");
            ConsumptionDocument::bundled().context("bundled dataset is invalid")?
        }
    };

    // Any malformed date aborts here, before an image is written.
    let table = align_series(&doc.into_device_series()).context("failed to align device series")?;
    info!(devices = table.device_ids.len(), rows = table.len(), "aligned consumption table");

    if args.dump_table {
        let json = serde_json::to_string_pretty(&table).context("failed to serialize table")?;
        println!("{json}");
    }

    let opts = RenderOptions {
        width: args.width,
        height: args.height,
        theme: theme::find(&args.theme),
        draw_labels: !args.no_labels,
        date_format: args.date_format,
        ..RenderOptions::default()
    };

    let chart = Chart::from_table(&table);
    chart
        .render_to_png(&opts, &args.output)
        .with_context(|| format!("failed to render '{}'", args.output.display()))?;
    println!("Wrote {}", args.output.display());
    Ok(())
}

/// Log to stderr; `RUST_LOG` overrides the default `info` level.
fn init_tracing() {
    let filter = EnvFilter::builder()
        .with_default_directive(LevelFilter::INFO.into())
        .from_env_lossy();
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_use_bundled_dataset() {
        let args = Args::try_parse_from(["consumption-chart"]).unwrap();
        assert!(args.input.is_none());
        assert_eq!(args.output, PathBuf::from("target/out/consumption.png"));
        assert_eq!((args.width, args.height), (800, 600));
        assert!(!args.dump_table);
    }

    #[test]
    fn flags_parse() {
        let args = Args::try_parse_from([
            "consumption-chart", "data.json", "-o", "out.png", "--theme", "dark", "--dump-table", "--no-labels",
        ])
        .unwrap();
        assert_eq!(args.input, Some(PathBuf::from("data.json")));
        assert_eq!(args.output, PathBuf::from("out.png"));
        assert_eq!(args.theme, "dark");
        assert!(args.dump_table && args.no_labels);
    }

    fn scratch_dir(name: &str) -> PathBuf {
        let dir = std::env::temp_dir().join(format!("consumption-chart-{}-{name}", std::process::id()));
        let _ = std::fs::remove_dir_all(&dir);
        std::fs::create_dir_all(&dir).unwrap();
        dir
    }

    #[test]
    fn malformed_date_aborts_before_writing_png() {
        let dir = scratch_dir("bad-date");
        let input = dir.join("consumos.json");
        std::fs::write(
            &input,
            r#"{ "Consumos": [ { "CodigoDispositivo": "A", "Medicoes": [
                { "DataConsumo": "2024-01-01T00:00:00Z", "QtdConsumo": 1 },
                { "DataConsumo": "31/02/2024", "QtdConsumo": 2 } ] } ] }"#,
        )
        .unwrap();
        let output = dir.join("out").join("chart.png");

        let args = Args::try_parse_from([
            "consumption-chart",
            input.to_str().unwrap(),
            "-o",
            output.to_str().unwrap(),
            "--no-labels",
        ])
        .unwrap();
        let err = run(args).unwrap_err();

        assert!(format!("{err:#}").contains("31/02/2024"), "{err:#}");
        assert!(!output.exists());
    }

    #[test]
    fn invalid_date_format_is_an_error() {
        let dir = scratch_dir("bad-format");
        let output = dir.join("chart.png");
        let args = Args::try_parse_from([
            "consumption-chart",
            "-o",
            output.to_str().unwrap(),
            "--date-format",
            "%Q",
        ])
        .unwrap();

        let err = run(args).unwrap_err();
        assert!(err.to_string().contains("%Q"));
        assert!(!output.exists());
    }
}
