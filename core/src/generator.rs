//! The q-noise engine.
//!
//! A [`Generator`] owns the random source; every function advancing the noise
//! draws from it, so two generators built with the same seed produce the same
//! series. The per-step functions (`ors_uhl`, `qnoise`, `qnoise_norm`) take
//! the current value and return the next one, leaving the caller in charge of
//! the state. [`Generator::series`] wraps them in an iterator that handles
//! the initial value and the transient.
//!
//! With `q = 1` the process is an Ornstein-Uhlenbeck (colored Gaussian) noise
//! with autocorrelation time `tau`. For `q < 1` it is bounded by
//! `1 / sqrt(tau * (1 - q))`, for `q > 1` it is heavy-tailed.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use rand_distr::StandardNormal;
use tracing::{debug, trace};

use qnoise_common::error::NoiseError;
use qnoise_common::params::{OrnsteinUhlenbeckParams, QNoiseParams};

mod global;

pub use global::{generate, generate_ornstein_uhlenbeck, set_seed};

/// Rejected Heun steps before the state is pulled back towards the origin.
const PULLBACK_AFTER: u32 = 10;
/// Rejected Heun steps before the step is clamped just inside the cutoff.
const CLAMP_AFTER: u32 = 20;

pub struct Generator {
    rng: StdRng,
}

impl Default for Generator {
    fn default() -> Self {
        Self::new()
    }
}

impl Generator {
    /// Creates a generator seeded from OS entropy.
    pub fn new() -> Self {
        Self {
            rng: StdRng::from_os_rng(),
        }
    }

    /// Creates a generator with a fixed seed, for reproducible series.
    pub fn with_seed(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
        }
    }

    /// One sample of Gaussian white noise, mean 0 and variance 1.
    pub fn gauss_wn(&mut self) -> f64 {
        self.rng.sample(StandardNormal)
    }

    fn uniform(&mut self) -> f64 {
        self.rng.random::<f64>()
    }

    /// One exact step of an Ornstein-Uhlenbeck process.
    ///
    /// * `eta`: current value
    /// * `tau`: autocorrelation time
    /// * `h`: integration step
    ///
    /// The stationary variance is `1 / (2 * tau)`.
    pub fn ors_uhl(&mut self, eta: f64, tau: f64, h: f64) -> f64 {
        let decay = (-h / tau).exp();
        let amplitude = ((1.0 - (-2.0 * h / tau).exp()) / (2.0 * tau)).sqrt();
        eta * decay + amplitude * self.gauss_wn()
    }

    /// One Heun step of the q-noise equation.
    ///
    /// * `eta`: current value
    /// * `tau`: autocorrelation time
    /// * `q`: statistics parameter
    /// * `h`: integration step
    /// * `sqrt_h`: precomputed `sqrt(h)`, computed here when `None`
    ///
    /// Steps that would leave the support (`|eta| > 1 / sqrt(tau * (1 - q))`)
    /// or produce NaN are redrawn. A run of rejections first pulls the state
    /// back with an Ornstein-Uhlenbeck step, then clamps it inside the cutoff.
    pub fn qnoise(&mut self, eta: f64, tau: f64, q: f64, h: f64, sqrt_h: Option<f64>) -> f64 {
        let sqrt_h = sqrt_h.unwrap_or_else(|| h.sqrt());
        // NaN for q > 1, the comparison below is then always false.
        let eta_cut = 1.0 / (tau * (1.0 - q)).sqrt();

        let mut eta = eta;
        let mut rejected: u32 = 0;

        loop {
            let drift = potential_prime(eta, tau, q);
            let k = h * drift;
            let l = sqrt_h * self.gauss_wn() / tau;
            let differential = -h / 2.0 * (drift + potential_prime(eta + k + l, tau, q)) + l;
            let next = eta + differential;

            if !(next.abs() > eta_cut || next.is_nan()) {
                return next;
            }

            rejected += 1;
            if rejected > CLAMP_AFTER {
                trace!(eta, eta_cut, "q-noise step clamped at cutoff");
                let sign = if eta < 0.0 { -1.0 } else { 1.0 };
                return sign * eta_cut * (0.9 + 0.1 * self.uniform());
            }
            if rejected > PULLBACK_AFTER {
                eta = eta_cut * self.ors_uhl(eta, tau, h);
            }
        }
    }

    /// q-noise with `tau` rescaled by `(5 - 3q) / 2`.
    ///
    /// Correlation time and variance of the output no longer depend on `q`.
    pub fn qnoise_norm(&mut self, eta: f64, tau: f64, q: f64, h: f64, sqrt_h: Option<f64>) -> f64 {
        self.qnoise(eta, normalized_tau(tau, q), q, h, sqrt_h)
    }

    /// Iterator over a q-noise series, transient already discarded.
    pub fn series(&mut self, params: &QNoiseParams) -> Result<Series<'_>, NoiseError> {
        params.validate()?;

        let tau = params.effective_tau();
        let transient = params.transient_steps();
        debug!(tau, q = params.q, h = params.h, transient, "starting q-noise series");

        let mut series = Series {
            eta: self.gauss_wn() / 100.0,
            generator: self,
            tau,
            q: params.q,
            h: params.h,
            sqrt_h: params.h.sqrt(),
            normalized: params.normalized,
            remaining: params.n,
        };
        for _ in 0..transient {
            series.advance();
        }

        Ok(series)
    }

    /// Generates `params.n` samples of q-noise.
    pub fn generate(&mut self, params: &QNoiseParams) -> Result<Vec<f64>, NoiseError> {
        Ok(self.series(params)?.collect())
    }

    /// Generates `params.n` samples of Ornstein-Uhlenbeck noise, or white
    /// noise when `tau` is zero or `white_noise` is set.
    pub fn generate_ornstein_uhlenbeck(
        &mut self,
        params: &OrnsteinUhlenbeckParams,
    ) -> Result<Vec<f64>, NoiseError> {
        params.validate()?;

        if params.is_white() {
            return Ok((0..params.n).map(|_| self.gauss_wn()).collect());
        }

        let tau = params.effective_tau();
        let h = params.h;
        let transient = params.transient_steps();
        debug!(tau, h, transient, "starting Ornstein-Uhlenbeck series");

        let mut eta = self.gauss_wn() / 100.0;
        for _ in 0..transient {
            eta = self.ors_uhl(eta, tau, h);
        }

        Ok((0..params.n)
            .map(|_| {
                eta = self.ors_uhl(eta, tau, h);
                eta
            })
            .collect())
    }
}

/// A q-noise series in progress. Yields exactly `n` samples.
pub struct Series<'a> {
    generator: &'a mut Generator,
    eta: f64,
    tau: f64,
    q: f64,
    h: f64,
    sqrt_h: f64,
    normalized: bool,
    remaining: usize,
}

impl Series<'_> {
    fn advance(&mut self) -> f64 {
        let sqrt_h = Some(self.sqrt_h);
        self.eta = if self.normalized {
            self.generator.qnoise_norm(self.eta, self.tau, self.q, self.h, sqrt_h)
        } else {
            self.generator.qnoise(self.eta, self.tau, self.q, self.h, sqrt_h)
        };
        self.eta
    }
}

impl Iterator for Series<'_> {
    type Item = f64;

    fn next(&mut self) -> Option<f64> {
        if self.remaining == 0 {
            return None;
        }
        self.remaining -= 1;
        Some(self.advance())
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl ExactSizeIterator for Series<'_> {}

/// Derivative of the q-noise potential.
fn potential_prime(eta: f64, tau: f64, q: f64) -> f64 {
    (eta / (1.0 + eta * eta * tau * (q - 1.0))) / tau
}

/// `tau` used by the normalized variant.
pub fn normalized_tau(tau: f64, q: f64) -> f64 {
    tau * (5.0 - 3.0 * q) / 2.0
}

// ╔════════════════════════════════════════════╗
// ║ ████████╗███████╗███████╗████████╗███████╗ ║
// ║ ╚══██╔══╝██╔════╝██╔════╝╚══██╔══╝██╔════╝ ║
// ║    ██║   █████╗  ███████╗   ██║   ███████╗ ║
// ║    ██║   ██╔══╝  ╚════██║   ██║   ╚════██║ ║
// ║    ██║   ███████╗███████║   ██║   ███████║ ║
// ║    ╚═╝   ╚══════╝╚══════╝   ╚═╝   ╚══════╝ ║
// ╚════════════════════════════════════════════╝

#[cfg(test)]
mod tests {
    use super::*;

    fn assert_finite(values: &[f64], what: &str) {
        for (i, v) in values.iter().enumerate() {
            assert!(v.is_finite(), "{what} returned invalid value at index {i}: {v}");
        }
    }

    #[test]
    fn test_gauss_wn_is_finite() {
        let mut generator = Generator::with_seed(42);
        let values: Vec<f64> = (0..1000).map(|_| generator.gauss_wn()).collect();
        assert_finite(&values, "gauss_wn");
    }

    #[test]
    fn test_ors_uhl_is_finite() {
        let mut generator = Generator::with_seed(42);
        let mut x = 0.0;
        for i in 0..100 {
            x = generator.ors_uhl(x, 1.0, 0.01);
            assert!(x.is_finite(), "ors_uhl returned invalid value at iteration {i}: {x}");
        }
    }

    #[test]
    fn test_qnoise_heavy_tailed_is_finite() {
        let mut generator = Generator::with_seed(42);
        let h: f64 = 0.01;
        let mut x = 0.0;
        for i in 0..100 {
            x = generator.qnoise(x, 1.0, 1.5, h, Some(h.sqrt()));
            assert!(x.is_finite(), "qnoise returned invalid value at iteration {i}: {x}");
        }
    }

    #[test]
    fn test_qnoise_sub_gaussian_is_bounded() {
        let mut generator = Generator::with_seed(42);
        let (tau, q, h): (f64, f64, f64) = (1.0, 0.5, 0.01);
        let eta_cut = 1.0 / (tau * (1.0 - q)).sqrt();

        let mut x = 0.0;
        for i in 0..1000 {
            x = generator.qnoise(x, tau, q, h, None);
            assert!(x.is_finite(), "qnoise returned invalid value at iteration {i}: {x}");
            assert!(
                x.abs() <= eta_cut,
                "qnoise exceeded bounds at iteration {i}: {x} (cut: {eta_cut})"
            );
        }
    }

    #[test]
    fn test_qnoise_clamps_from_outside_support() {
        // Starting far outside the support every Heun step is rejected, so the
        // step ends up clamped just inside the cutoff with the sign of eta.
        let mut generator = Generator::with_seed(7);
        let (tau, q, h): (f64, f64, f64) = (1.0, 0.5, 0.01);
        let eta_cut = 1.0 / (tau * (1.0 - q)).sqrt();

        let x = generator.qnoise(-50.0, tau, q, h, None);
        assert!(x.abs() <= eta_cut, "{x} outside cut {eta_cut}");
        assert!(x < 0.0);
    }

    #[test]
    fn test_qnoise_with_unit_q_matches_sqrt_h_shortcut() {
        let h: f64 = 0.25;
        let mut a = Generator::with_seed(3);
        let mut b = Generator::with_seed(3);
        for _ in 0..50 {
            assert_eq!(a.qnoise(0.1, 1.0, 1.0, h, None), b.qnoise(0.1, 1.0, 1.0, h, Some(0.5)));
        }
    }

    #[test]
    fn test_qnoise_norm_uses_rescaled_tau() {
        let mut a = Generator::with_seed(11);
        let mut b = Generator::with_seed(11);
        let (tau, q, h) = (2.0, 0.7, 0.01);
        for _ in 0..50 {
            let normalized = a.qnoise_norm(0.2, tau, q, h, None);
            let plain = b.qnoise(0.2, normalized_tau(tau, q), q, h, None);
            assert_eq!(normalized, plain);
        }
        assert_eq!(normalized_tau(1.0, 1.0), 1.0);
    }

    #[test]
    fn test_generate_length_and_values() {
        let mut generator = Generator::with_seed(42);
        let params = QNoiseParams::new(1.0, 1.5, 1000).with_step(0.01);
        let noise = generator.generate(&params).unwrap();

        assert_eq!(noise.len(), 1000, "generate returned wrong length");
        assert_finite(&noise, "generate");
    }

    #[test]
    fn test_series_starts_near_zero() {
        let (tau, q, h): (f64, f64, f64) = (1.0, 0.8, 0.01);
        let params = QNoiseParams::new(tau, q, 1).with_step(h).with_transient(0);
        let noise = Generator::with_seed(17).generate(&params).unwrap();

        // Initial state is one Gaussian draw scaled down by 100
        let mut reference = Generator::with_seed(17);
        let eta0 = reference.gauss_wn() / 100.0;
        let expected = reference.qnoise(eta0, tau, q, h, Some(h.sqrt()));
        assert_eq!(noise, vec![expected]);

        let params = OrnsteinUhlenbeckParams::new(tau, 1).with_step(h).with_transient(0);
        let noise = Generator::with_seed(17).generate_ornstein_uhlenbeck(&params).unwrap();

        let mut reference = Generator::with_seed(17);
        let eta0 = reference.gauss_wn() / 100.0;
        assert_eq!(noise, vec![reference.ors_uhl(eta0, tau, h)]);
    }

    #[test]
    fn test_generate_zero_samples() {
        let mut generator = Generator::with_seed(1);
        let noise = generator.generate(&QNoiseParams::new(1.0, 1.0, 0)).unwrap();
        assert!(noise.is_empty());
    }

    #[test]
    fn test_generate_rejects_invalid_step() {
        let mut generator = Generator::with_seed(1);
        let params = QNoiseParams::new(1.0, 1.0, 10).with_step(-0.1);
        assert_eq!(generator.generate(&params), Err(NoiseError::InvalidStep(-0.1)));
    }

    #[test]
    fn test_series_reports_exact_size() {
        let mut generator = Generator::with_seed(1);
        let params = QNoiseParams::new(1.0, 0.8, 25).with_transient(0);
        let series = generator.series(&params).unwrap();
        assert_eq!(series.len(), 25);
        assert_eq!(series.count(), 25);
    }

    #[test]
    fn test_generate_ornstein_uhlenbeck() {
        let mut generator = Generator::with_seed(42);
        let params = OrnsteinUhlenbeckParams::new(1.0, 1000).with_step(0.01);
        let noise = generator.generate_ornstein_uhlenbeck(&params).unwrap();

        assert_eq!(noise.len(), 1000);
        assert_finite(&noise, "generate_ornstein_uhlenbeck");
    }

    #[test]
    fn test_generate_white_noise() {
        let mut generator = Generator::with_seed(42);
        let noise = generator
            .generate_ornstein_uhlenbeck(&OrnsteinUhlenbeckParams::white(1000))
            .unwrap();

        assert_eq!(noise.len(), 1000);
        assert_finite(&noise, "white noise");

        // White noise is a plain sequence of gauss_wn draws
        let mut reference = Generator::with_seed(42);
        let expected: Vec<f64> = (0..1000).map(|_| reference.gauss_wn()).collect();
        assert_eq!(noise, expected);
    }

    #[test]
    fn test_reproducibility() {
        let params = QNoiseParams::new(1.0, 1.5, 100).with_step(0.01);
        let noise1 = Generator::with_seed(42).generate(&params).unwrap();
        let noise2 = Generator::with_seed(42).generate(&params).unwrap();
        assert_eq!(noise1, noise2);

        let noise3 = Generator::with_seed(43).generate(&params).unwrap();
        assert_ne!(noise1, noise3);
    }
}
