//! Statistical self-check of the generator.
//!
//! A [`ValidationPlan`] expands into one [`ValidationCase`] per combination of
//! noise kind, `tau`, `q` and sample size. Cases run in parallel, each with
//! its own generator, and are compared to their stationary density with
//! [`super::compare`].

use std::fmt;

use rayon::prelude::*;
use thiserror::Error;
use tracing::debug;

use qnoise_common::error::NoiseError;
use qnoise_common::params::{OrnsteinUhlenbeckParams, QNoiseParams};

use super::{DEFAULT_BINS, StatsError, compare};
use crate::generator::{Generator, normalized_tau};

/// Largest accepted distance, in percent, when none is given.
pub const DEFAULT_LIMIT: f64 = 10.0;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum NoiseKind {
    WhiteNoise,
    OrnsteinUhlenbeck,
    QNoise,
    NormalizedQNoise,
}

impl fmt::Display for NoiseKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            NoiseKind::WhiteNoise => "Gaussian white noise",
            NoiseKind::OrnsteinUhlenbeck => "Ornstein-Uhlenbeck",
            NoiseKind::QNoise => "q-noise",
            NoiseKind::NormalizedQNoise => "normalized q-noise",
        };
        f.write_str(name)
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ValidationCase {
    pub kind: NoiseKind,
    pub tau: f64,
    pub q: f64,
    pub n: usize,
    /// Integration step. Ignored for white noise.
    pub h: f64,
}

impl ValidationCase {
    fn ou_params(&self) -> OrnsteinUhlenbeckParams {
        match self.kind {
            NoiseKind::WhiteNoise => OrnsteinUhlenbeckParams::white(self.n),
            _ => OrnsteinUhlenbeckParams::new(self.tau, self.n).with_step(self.h),
        }
    }

    fn qnoise_params(&self) -> QNoiseParams {
        QNoiseParams::new(self.tau, self.q, self.n)
            .with_step(self.h)
            .normalized(self.kind == NoiseKind::NormalizedQNoise)
    }

    /// `(tau, q)` of the density this case should follow.
    ///
    /// Uses the same sign and zero handling of `tau` as the generator, so an
    /// Ornstein-Uhlenbeck case with `tau = 0` expects white noise.
    pub fn expected_density(&self) -> (f64, f64) {
        match self.kind {
            NoiseKind::WhiteNoise | NoiseKind::OrnsteinUhlenbeck => {
                let params = self.ou_params();
                if params.is_white() {
                    (0.5, 1.0)
                } else {
                    (params.effective_tau(), 1.0)
                }
            }
            NoiseKind::QNoise => (self.qnoise_params().effective_tau(), self.q),
            NoiseKind::NormalizedQNoise => {
                let tau = self.qnoise_params().effective_tau();
                (normalized_tau(tau, self.q), self.q)
            }
        }
    }

    pub fn sample(&self, generator: &mut Generator) -> Result<Vec<f64>, NoiseError> {
        match self.kind {
            NoiseKind::WhiteNoise | NoiseKind::OrnsteinUhlenbeck => {
                generator.generate_ornstein_uhlenbeck(&self.ou_params())
            }
            NoiseKind::QNoise | NoiseKind::NormalizedQNoise => {
                generator.generate(&self.qnoise_params())
            }
        }
    }
}

#[derive(Debug, Error, Clone, PartialEq)]
pub enum CaseError {
    #[error(transparent)]
    Noise(#[from] NoiseError),
    #[error(transparent)]
    Stats(#[from] StatsError),
}

#[derive(Debug, Clone, PartialEq)]
pub struct CaseOutcome {
    pub case: ValidationCase,
    pub limit: f64,
    /// Distance to the stationary density, in percent.
    pub distance: Result<f64, CaseError>,
}

impl CaseOutcome {
    pub fn passed(&self) -> bool {
        matches!(self.distance, Ok(d) if d <= self.limit)
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct ValidationPlan {
    pub kinds: Vec<NoiseKind>,
    pub taus: Vec<f64>,
    pub qs: Vec<f64>,
    pub sizes: Vec<usize>,
    /// Integration step. `None` uses a fixed fraction of each case's `tau`.
    pub step: Option<f64>,
    pub bins: usize,
    pub limit: f64,
    /// Base seed, case `i` uses `seed + i`. `None` seeds every case from entropy.
    pub seed: Option<u64>,
}

impl Default for ValidationPlan {
    fn default() -> Self {
        Self {
            kinds: vec![
                NoiseKind::WhiteNoise,
                NoiseKind::OrnsteinUhlenbeck,
                NoiseKind::QNoise,
                NoiseKind::NormalizedQNoise,
            ],
            taus: vec![0.1, 1.0, 10.0],
            qs: vec![0.5, 0.8, 1.0, 1.2],
            sizes: vec![100_000],
            step: None,
            bins: DEFAULT_BINS,
            limit: DEFAULT_LIMIT,
            seed: None,
        }
    }
}

impl ValidationPlan {
    /// Expands the plan. White noise ignores `tau` and `q`, Ornstein-Uhlenbeck
    /// ignores `q`, so those kinds contribute fewer cases.
    pub fn cases(&self) -> Vec<ValidationCase> {
        let mut cases = Vec::new();

        for &kind in &self.kinds {
            for &n in &self.sizes {
                match kind {
                    NoiseKind::WhiteNoise => cases.push(ValidationCase {
                        kind,
                        tau: 0.0,
                        q: 1.0,
                        n,
                        h: self.step_for(1.0),
                    }),
                    NoiseKind::OrnsteinUhlenbeck => {
                        for &tau in &self.taus {
                            cases.push(ValidationCase {
                                kind,
                                tau,
                                q: 1.0,
                                n,
                                h: self.step_for(tau),
                            });
                        }
                    }
                    NoiseKind::QNoise | NoiseKind::NormalizedQNoise => {
                        for &tau in &self.taus {
                            for &q in &self.qs {
                                cases.push(ValidationCase {
                                    kind,
                                    tau,
                                    q,
                                    n,
                                    h: self.step_for(tau),
                                });
                            }
                        }
                    }
                }
            }
        }

        cases
    }

    fn step_for(&self, tau: f64) -> f64 {
        self.step
            .unwrap_or_else(|| QNoiseParams::new(tau, 1.0, 0).h)
    }

    fn generator_for(&self, index: usize) -> Generator {
        match self.seed {
            Some(seed) => Generator::with_seed(seed.wrapping_add(index as u64)),
            None => Generator::new(),
        }
    }

    /// Runs one case with a given generator.
    pub fn run_case(&self, case: ValidationCase, generator: &mut Generator) -> CaseOutcome {
        let (tau, q) = case.expected_density();
        let distance = case
            .sample(generator)
            .map_err(CaseError::from)
            .and_then(|data| compare(&data, self.bins, tau, q).map_err(CaseError::from));

        debug!(kind = %case.kind, tau = case.tau, q = case.q, n = case.n, ?distance, "validation case done");

        CaseOutcome {
            case,
            limit: self.limit,
            distance,
        }
    }

    /// Runs every case in parallel. `on_done` is called as each case finishes,
    /// from whichever worker ran it. Outcomes come back in case order.
    pub fn run<F>(&self, on_done: F) -> Vec<CaseOutcome>
    where
        F: Fn(&CaseOutcome) + Sync,
    {
        self.cases()
            .into_par_iter()
            .enumerate()
            .map(|(index, case)| {
                let mut generator = self.generator_for(index);
                let outcome = self.run_case(case, &mut generator);
                on_done(&outcome);
                outcome
            })
            .collect()
    }
}

// ╔════════════════════════════════════════════╗
// ║ ████████╗███████╗███████╗████████╗███████╗ ║
// ║ ╚══██╔══╝██╔════╝██╔════╝╚══██╔══╝██╔════╝ ║
// ║    ██║   █████╗  ███████╗   ██║   ███████╗ ║
// ║    ██║   ██╔══╝  ╚════██║   ██║   ╚════██║ ║
// ║    ██║   ███████╗███████║   ██║   ███████║ ║
// ║    ╚═╝   ╚══════╝╚══════╝   ╚═╝   ╚══════╝ ║
// ╚════════════════════════════════════════════╝
