#![cfg(test)]
use qnoise_common::params::{OrnsteinUhlenbeckParams, QNoiseParams};
use qnoise_core::Generator;
use qnoise_core::generator::normalized_tau;
use qnoise_core::stats::{self, DEFAULT_BINS};

const LIMIT: f64 = 10.0;

/// Ornstein-Uhlenbeck noise has stationary variance 1 / (2 tau).
#[test]
fn ornstein_uhlenbeck_variance() {
    for tau in [0.5, 2.0] {
        let params = OrnsteinUhlenbeckParams::new(tau, 400_000).with_step(0.1 * tau);
        let noise = Generator::with_seed(31)
            .generate_ornstein_uhlenbeck(&params)
            .unwrap();

        let (mean, variance) = stats::mean_variance(&noise).unwrap();
        let expected = 1.0 / (2.0 * tau);
        assert!(mean.abs() < 0.05 * expected.sqrt(), "tau = {tau}: mean {mean}");
        assert!(
            (variance - expected).abs() < 0.1 * expected,
            "tau = {tau}: variance {variance}, expected {expected}"
        );
    }
}

/// With q = 1 the Heun integration reproduces the Gaussian density.
#[test]
fn gaussian_qnoise_matches_density() {
    let params = QNoiseParams::new(1.0, 1.0, 1_000_000).with_step(0.02);
    let noise = Generator::with_seed(2021).generate(&params).unwrap();

    let distance = stats::compare(&noise, DEFAULT_BINS, 1.0, 1.0).unwrap();
    assert!(distance < LIMIT, "distance {distance}%");
}

/// Bounded q-noise follows the compact-support density.
#[test]
fn bounded_qnoise_matches_density() {
    let params = QNoiseParams::new(1.0, 0.5, 1_000_000).with_step(0.01);
    let noise = Generator::with_seed(2021).generate(&params).unwrap();

    let distance = stats::compare(&noise, DEFAULT_BINS, 1.0, 0.5).unwrap();
    assert!(distance < LIMIT, "distance {distance}%");
}

/// The normalized variant follows the density of the rescaled tau.
#[test]
fn normalized_qnoise_matches_rescaled_density() {
    let (tau, q) = (1.0, 0.7);
    let params = QNoiseParams::new(tau, q, 1_000_000)
        .with_step(0.01)
        .normalized(true);
    let noise = Generator::with_seed(77).generate(&params).unwrap();

    let distance = stats::compare(&noise, DEFAULT_BINS, normalized_tau(tau, q), q).unwrap();
    assert!(distance < LIMIT, "distance {distance}%");
}
