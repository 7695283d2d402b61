#![cfg(test)]
use qnoise_common::error::NoiseError;
use qnoise_common::params::{OrnsteinUhlenbeckParams, QNoiseParams};
use qnoise_core::Generator;
use qnoise_core::series;

/// Streaming a series and collecting it must give the same samples as
/// `generate`, for every noise regime.
#[test]
fn series_matches_generate() {
    for q in [0.5, 1.0, 1.4] {
        let params = QNoiseParams::new(1.0, q, 500).with_step(0.01);

        let generated = Generator::with_seed(99).generate(&params).unwrap();
        let mut generator = Generator::with_seed(99);
        let streamed: Vec<f64> = generator.series(&params).unwrap().collect();

        assert_eq!(generated, streamed, "q = {q}: streamed series differs");
    }
}

/// The transient only shifts where the recorded window starts.
#[test]
fn transient_skips_leading_steps() {
    let base = QNoiseParams::new(1.0, 1.0, 100).with_step(0.01);

    let long = Generator::with_seed(5)
        .generate(&QNoiseParams { n: 150, ..base.with_transient(0) })
        .unwrap();
    let skipped = Generator::with_seed(5)
        .generate(&base.with_transient(50))
        .unwrap();

    assert_eq!(&long[50..], &skipped[..]);
}

/// Negative tau behaves exactly like its absolute value.
#[test]
fn negative_tau_is_mirrored() {
    let positive = QNoiseParams::new(2.0, 0.8, 200).with_step(0.02);
    let negative = QNoiseParams { tau: -2.0, ..positive };

    assert_eq!(
        Generator::with_seed(1).generate(&positive).unwrap(),
        Generator::with_seed(1).generate(&negative).unwrap()
    );

    let ou = OrnsteinUhlenbeckParams::new(2.0, 200).with_step(0.02);
    assert_eq!(
        Generator::with_seed(1).generate_ornstein_uhlenbeck(&ou).unwrap(),
        Generator::with_seed(1)
            .generate_ornstein_uhlenbeck(&OrnsteinUhlenbeckParams { tau: -2.0, ..ou })
            .unwrap()
    );
}

/// Bounded q-noise never leaves its support, even over long runs.
#[test]
fn bounded_series_stays_in_support() {
    for (tau, q) in [(1.0, 0.1), (0.5, 0.5), (10.0, 0.9)] {
        let eta_cut = 1.0 / f64::sqrt(tau * (1.0 - q));
        let noise = Generator::with_seed(2022)
            .generate(&QNoiseParams::new(tau, q, 20_000))
            .unwrap();

        let max = noise.iter().fold(0.0_f64, |m, x| m.max(x.abs()));
        assert!(max <= eta_cut, "tau = {tau}, q = {q}: {max} > {eta_cut}");
    }
}

#[test]
fn invalid_parameters_are_rejected() {
    let mut generator = Generator::with_seed(0);

    let result = generator.generate(&QNoiseParams::new(1.0, 1.7, 10).normalized(true));
    assert_eq!(result, Err(NoiseError::NormalizedQOutOfRange(1.7)));

    let result = generator
        .generate_ornstein_uhlenbeck(&OrnsteinUhlenbeckParams::new(1.0, 10).with_step(0.0));
    assert_eq!(result, Err(NoiseError::InvalidStep(0.0)));
}

/// Writing a generated series and reading it back gives the same values.
#[test]
fn saved_series_reads_back() {
    let dir = tempfile::tempdir().unwrap();
    let params = QNoiseParams::new(1.0, 1.2, 1000);
    let path = dir
        .path()
        .join(series::default_file_name(params.tau, params.h, params.q, params.n));

    let mut generator = Generator::with_seed(8);
    let written = series::save_series(&path, generator.series(&params).unwrap()).unwrap();
    assert_eq!(written, 1000);

    let content = std::fs::read_to_string(&path).unwrap();
    let read: Vec<f64> = content.lines().map(|l| l.parse().unwrap()).collect();
    let expected = Generator::with_seed(8).generate(&params).unwrap();
    assert_eq!(read, expected);
    assert!(path.ends_with("qNoise_1_0.01_1.2_1000.txt"));
}
