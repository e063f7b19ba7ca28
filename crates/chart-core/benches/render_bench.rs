use chart_core::{align_series, Chart, DeviceSeries, Reading, RenderError, RenderOptions};
use criterion::{criterion_group, criterion_main, Criterion, black_box};

fn build_chart(devices: usize, n: usize) -> Chart {
    let series: Vec<DeviceSeries> = (0..devices)
        .map(|d| {
            let readings = (0..n)
                .filter(|i| (i + d) % 3 != 0)
                .map(|i| {
                    let ts = chrono::DateTime::from_timestamp_millis(i as i64 * 3_600_000)
                        .expect("in range")
                        .to_rfc3339();
                    Reading::new(ts, (i as f64 * 0.01).sin() * 10.0 + d as f64)
                })
                .collect();
            DeviceSeries::new(format!("dev-{d}"), readings)
        })
        .collect();
    let table = align_series(&series).expect("generated dates are valid");
    Chart::from_table(&table)
}

fn bench_render(c: &mut Criterion) {
    let mut group = c.benchmark_group("render_png_bytes");
    for &n in &[1_000usize, 10_000usize] {
        group.bench_function(format!("devices4_{n}"), |b| {
            let ch = build_chart(4, n);
            let mut opts = RenderOptions::default();
            opts.draw_labels = false;
            b.iter(|| -> Result<(), RenderError> {
                let bytes = ch.render_to_png_bytes(&opts)?;
                black_box(bytes);
                Ok(())
            });
        });
    }
    group.finish();
}

criterion_group!(benches, bench_render);
criterion_main!(benches);
