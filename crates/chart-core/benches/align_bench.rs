use chart_core::{align_series, DeviceSeries, Reading};
use criterion::{criterion_group, criterion_main, BatchSize, BenchmarkId, Criterion, black_box};

const DAY_MS: i64 = 86_400_000;

/// `devices` series of `readings` each; every device skips a different subset of days.
fn gen_devices(devices: usize, readings: usize) -> Vec<DeviceSeries> {
    (0..devices)
        .map(|d| {
            let data = (0..readings)
                .filter(|i| (i + d) % 4 != 0)
                .map(|i| {
                    let ts = chrono::DateTime::from_timestamp_millis(1_700_000_000_000 + i as i64 * DAY_MS)
                        .expect("in range")
                        .to_rfc3339();
                    Reading::new(ts, (i as f64 * 0.1).sin() * 10.0 + d as f64)
                })
                .collect();
            DeviceSeries::new(format!("dev-{d}"), data)
        })
        .collect()
}

fn bench_align(c: &mut Criterion) {
    let mut group = c.benchmark_group("align_series");
    for &(devices, readings) in &[(4usize, 1_000usize), (12, 5_000), (50, 2_000)] {
        let input = gen_devices(devices, readings);
        group.bench_with_input(BenchmarkId::from_parameter(format!("d{devices}_r{readings}")), &input, |b, input| {
            b.iter_batched(
                || input.clone(),
                |d| { let _ = black_box(align_series(&d)); },
                BatchSize::SmallInput,
            );
        });
    }
    group.finish();
}

criterion_group!(benches, bench_align);
criterion_main!(benches);
