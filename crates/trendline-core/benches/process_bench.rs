use chrono::{Duration, TimeZone, Utc};
use criterion::{criterion_group, criterion_main, BatchSize, BenchmarkId, Criterion, black_box};
use trendline_core::{LineChartProcessor, Padding, Sample, Series, Size};

fn gen_series(n: usize) -> Series {
    let t0 = Utc.with_ymd_and_hms(2020, 1, 1, 0, 0, 0).unwrap();
    let items = (0..n)
        .map(|i| {
            // simple waveform with drift
            let v = (i as f64 * 0.01).sin() * 400.0 + 500.0 + i as f64 * 0.001;
            Sample::new(v as i32, t0 + Duration::days(i as i64))
        })
        .collect();
    Series::new(items).expect("valid series")
}

fn bench_process(c: &mut Criterion) {
    let mut group = c.benchmark_group("process");
    for &n in &[1_000usize, 100_000usize] {
        let series = gen_series(n);
        group.bench_with_input(BenchmarkId::from_parameter(format!("relayout_n{n}")), &n, |b, _| {
            b.iter_batched(
                || LineChartProcessor::new(series.clone(), Padding::horizontal(8.0)),
                |mut p| { black_box(p.process(Size::new(1280.0, 320.0), 2.0)); },
                BatchSize::SmallInput,
            );
        });
        // Steady-state frames hit the size-keyed cache.
        group.bench_with_input(BenchmarkId::from_parameter(format!("cached_n{n}")), &n, |b, _| {
            let mut p = LineChartProcessor::new(series.clone(), Padding::horizontal(8.0));
            p.process(Size::new(1280.0, 320.0), 2.0);
            b.iter(|| black_box(p.process(Size::new(1280.0, 320.0), 2.0)));
        });
    }
    group.finish();
}

criterion_group!(benches, bench_process);
criterion_main!(benches);
