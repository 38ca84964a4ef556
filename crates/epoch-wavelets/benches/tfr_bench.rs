use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use epoch_wavelets::{EngineConfig, Epochs, EpochsWavelet, FrequencyAxis, Morlet, MorletConfig};
use ndarray::Array3;
use std::f64::consts::PI;

const FS: f64 = 250.0;

fn epochs(n_trials: usize) -> Epochs {
    // 1 s trials of a 10 Hz burst with a per-trial phase drift
    let data = Array3::from_shape_fn((n_trials, 1, 250), |(trial, _, s)| {
        let t = s as f64 / FS;
        (2.0 * PI * 10.0 * t + 0.1 * trial as f64).sin() + 0.3 * (2.0 * PI * 37.0 * t).cos()
    });
    Epochs::new(data, ["Cz"], FS).expect("valid epochs")
}

fn benchmark_power_and_itc(c: &mut Criterion) {
    let freqs = FrequencyAxis::arange(4.0, 40.0, 1.0).expect("valid axis");
    let wavelet = Morlet::new(MorletConfig::default(), FS).expect("valid wavelet");
    let mut group = c.benchmark_group("epochs_wavelet");

    for n_trials in [10usize, 60] {
        let epochs = epochs(n_trials);
        let engine = EpochsWavelet::new(&epochs, &wavelet).expect("matching sample rate");

        group.bench_with_input(BenchmarkId::new("power", n_trials), &n_trials, |b, _| {
            b.iter(|| engine.power(black_box("Cz"), black_box(&freqs)))
        });
        group.bench_with_input(BenchmarkId::new("itc", n_trials), &n_trials, |b, _| {
            b.iter(|| engine.itc(black_box("Cz"), black_box(&freqs)))
        });

        let parallel =
            EpochsWavelet::with_config(&epochs, &wavelet, EngineConfig { parallel: true })
                .expect("matching sample rate");
        group.bench_with_input(
            BenchmarkId::new("power_parallel", n_trials),
            &n_trials,
            |b, _| b.iter(|| parallel.power(black_box("Cz"), black_box(&freqs))),
        );
    }

    group.finish();
}

criterion_group!(benches, benchmark_power_and_itc);
criterion_main!(benches);
