//! # Generator Parameters
//!
//! Inputs for a full series generation. The per-step functions of the engine
//! take raw `f64`s, these structs describe a whole run: how many samples, how
//! long a transient to discard and which variant of the noise to integrate.

use crate::error::NoiseError;

/// Fraction of `tau` used as integration step when none is given.
pub const DEFAULT_STEP_FRACTION: f64 = 0.01;

/// Upper bound (exclusive) on `q` for the normalized variant.
pub const NORMALIZED_Q_LIMIT: f64 = 5.0 / 3.0;

/// Parameters for a q-noise series.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct QNoiseParams {
    /// Autocorrelation time. Negative values are taken in absolute value.
    pub tau: f64,
    /// Statistics parameter: `1` Gaussian, `< 1` bounded, `> 1` heavy-tailed.
    pub q: f64,
    /// Number of samples returned.
    pub n: usize,
    /// Integration step.
    pub h: f64,
    /// Steps discarded before recording. `None` uses `2 * tau / h`.
    pub transient: Option<usize>,
    /// Rescale `tau` so that correlation time and variance do not depend on `q`.
    pub normalized: bool,
}

impl QNoiseParams {
    pub fn new(tau: f64, q: f64, n: usize) -> Self {
        Self {
            tau,
            q,
            n,
            h: default_step(tau),
            transient: None,
            normalized: false,
        }
    }

    pub fn with_step(mut self, h: f64) -> Self {
        self.h = h;
        self
    }

    pub fn with_transient(mut self, transient: usize) -> Self {
        self.transient = Some(transient);
        self
    }

    pub fn normalized(mut self, normalized: bool) -> Self {
        self.normalized = normalized;
        self
    }

    pub fn validate(&self) -> Result<(), NoiseError> {
        validate_step(self.h)?;
        validate_tau(self.tau)?;
        if !self.q.is_finite() {
            return Err(NoiseError::InvalidQ(self.q));
        }
        if self.normalized && self.q >= NORMALIZED_Q_LIMIT {
            return Err(NoiseError::NormalizedQOutOfRange(self.q));
        }
        Ok(())
    }

    /// `tau` after sign and zero handling.
    pub fn effective_tau(&self) -> f64 {
        effective_tau(self.tau, self.h)
    }

    pub fn transient_steps(&self) -> usize {
        self.transient
            .unwrap_or_else(|| auto_transient(self.effective_tau(), self.h))
    }
}

/// Parameters for an Ornstein-Uhlenbeck (or white noise) series.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct OrnsteinUhlenbeckParams {
    pub tau: f64,
    pub n: usize,
    pub h: f64,
    pub transient: Option<usize>,
    /// Ignore `tau` and return uncorrelated Gaussian samples.
    pub white_noise: bool,
}

impl OrnsteinUhlenbeckParams {
    pub fn new(tau: f64, n: usize) -> Self {
        Self {
            tau,
            n,
            h: default_step(tau),
            transient: None,
            white_noise: false,
        }
    }

    pub fn white(n: usize) -> Self {
        Self {
            white_noise: true,
            ..Self::new(0.0, n)
        }
    }

    pub fn with_step(mut self, h: f64) -> Self {
        self.h = h;
        self
    }

    pub fn with_transient(mut self, transient: usize) -> Self {
        self.transient = Some(transient);
        self
    }

    pub fn validate(&self) -> Result<(), NoiseError> {
        validate_step(self.h)?;
        validate_tau(self.tau)
    }

    /// True when the run degenerates to white noise.
    pub fn is_white(&self) -> bool {
        self.white_noise || self.tau == 0.0
    }

    pub fn effective_tau(&self) -> f64 {
        self.tau.abs()
    }

    pub fn transient_steps(&self) -> usize {
        self.transient
            .unwrap_or_else(|| auto_transient(self.effective_tau(), self.h))
    }
}

fn default_step(tau: f64) -> f64 {
    let tau = tau.abs();
    if tau > 0.0 && tau.is_finite() {
        DEFAULT_STEP_FRACTION * tau
    } else {
        DEFAULT_STEP_FRACTION
    }
}

fn effective_tau(tau: f64, h: f64) -> f64 {
    let tau = tau.abs();
    if tau == 0.0 { h } else { tau }
}

fn auto_transient(tau: f64, h: f64) -> usize {
    (2.0 * tau / h) as usize
}

fn validate_step(h: f64) -> Result<(), NoiseError> {
    if h.is_finite() && h > 0.0 {
        Ok(())
    } else {
        Err(NoiseError::InvalidStep(h))
    }
}

fn validate_tau(tau: f64) -> Result<(), NoiseError> {
    if tau.is_finite() {
        Ok(())
    } else {
        Err(NoiseError::InvalidTau(tau))
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
