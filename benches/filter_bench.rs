use criterion::{criterion_group, criterion_main, Criterion};

use iir_cascade::filter::{
    apply_to_buffer, design_cascade, design_single_filter, FilterBandType, FilterDefinition,
    LinearFilterDescription,
};

fn bandpass() -> LinearFilterDescription {
    LinearFilterDescription::butterworth(FilterBandType::Bandpass, 0.5, 8.0, 100.0, 4)
}

fn design_benchmark(c: &mut Criterion) {
    c.bench_function("design bandpass order 4", |b| {
        b.iter(|| design_single_filter(bandpass()))
    });
    c.bench_function("design cascade", |b| {
        b.iter(|| {
            let def = FilterDefinition::new(
                "bench",
                vec![
                    bandpass(),
                    LinearFilterDescription::butterworth(FilterBandType::Bandreject, 45.0, 49.0, 1000.0, 6),
                ],
            );
            design_cascade(def)
        })
    });
}

fn apply_benchmark(c: &mut Criterion) {
    let desc = match design_single_filter(bandpass()) {
        Ok(desc) => desc,
        Err(err) => panic!("design failed: {}", err),
    };
    let signal: Vec<f64> = (0..10_000).map(|i| (i as f64 * 0.37).sin()).collect();
    c.bench_function("apply 10k samples", move |b| {
        b.iter(|| {
            let mut data = signal.clone();
            apply_to_buffer(desc.parameters(), &mut data, 10_000, 0, 1, true)
        })
    });
}

criterion_group!(benches, design_benchmark, apply_benchmark);
criterion_main!(benches);
