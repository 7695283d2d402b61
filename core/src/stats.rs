//! Comparison of generated series against the stationary density of the
//! process that produced them.
//!
//! The check is deliberately coarse: bin the samples, evaluate the
//! theoretical density at the bin centres and report the mean absolute
//! difference as a percentage of the histogram's own range.

use thiserror::Error;

pub mod validation;

/// Bins used when none is given.
pub const DEFAULT_BINS: usize = 50;

#[derive(Debug, Error, Clone, PartialEq)]
pub enum StatsError {
    #[error("cannot build a histogram from an empty sample")]
    EmptySample,
    #[error("sample contains non-finite values")]
    NonFiniteSample,
    #[error("all samples are equal to {0}, histogram has no width")]
    DegenerateSample(f64),
    #[error("histogram needs at least one bin")]
    NoBins,
    #[error("histogram has {histogram} bins but the density has {density}")]
    LengthMismatch { histogram: usize, density: usize },
    #[error("density vanishes on every bin")]
    EmptyDensity,
    #[error("histogram is flat, distance is undefined")]
    FlatHistogram,
}

/// Equal width histogram normalized to unit mass.
#[derive(Debug, Clone, PartialEq)]
pub struct Histogram {
    /// Bin centres.
    pub keys: Vec<f64>,
    /// Fraction of samples falling in each bin.
    pub values: Vec<f64>,
}

impl Histogram {
    pub fn from_samples(data: &[f64], bins: usize) -> Result<Self, StatsError> {
        if bins == 0 {
            return Err(StatsError::NoBins);
        }
        if data.is_empty() {
            return Err(StatsError::EmptySample);
        }
        if data.iter().any(|x| !x.is_finite()) {
            return Err(StatsError::NonFiniteSample);
        }

        let (min, max) = min_max(data);
        if max == min {
            return Err(StatsError::DegenerateSample(min));
        }

        let width = (max - min) / bins as f64;
        let keys = (0..bins).map(|i| min + (i as f64 + 0.5) * width).collect();

        let mut counts = vec![0usize; bins];
        for x in data {
            // The maximum lands exactly on the upper edge
            let idx = (((x - min) / width).floor() as usize).min(bins - 1);
            counts[idx] += 1;
        }

        let total = data.len() as f64;
        let values = counts.into_iter().map(|c| c as f64 / total).collect();

        Ok(Self { keys, values })
    }

    pub fn bins(&self) -> usize {
        self.keys.len()
    }
}

/// Stationary density of q-noise with parameters `tau` and `q` evaluated at
/// `keys`, normalized to unit mass across them.
///
/// `q = 1` is the Gaussian `exp(-tau x^2)`. Below 1 the density has compact
/// support `|x| < 1 / sqrt((1 - q) tau)`, above 1 it has power law tails.
pub fn theoretical_pdf(keys: &[f64], tau: f64, q: f64) -> Result<Vec<f64>, StatsError> {
    let density: Vec<f64> = keys.iter().map(|&x| unnormalized_density(x, tau, q)).collect();

    let total: f64 = density.iter().sum();
    if !total.is_finite() || total <= 0.0 {
        return Err(StatsError::EmptyDensity);
    }

    Ok(density.into_iter().map(|v| v / total).collect())
}

fn unnormalized_density(x: f64, tau: f64, q: f64) -> f64 {
    if q == 1.0 {
        (-tau * x * x).exp()
    } else if q < 1.0 {
        let w = ((1.0 - q) * tau).powf(-0.5);
        let base = 1.0 - (x / w) * (x / w);
        if base <= 0.0 {
            0.0
        } else {
            base.powf(1.0 / (1.0 - q))
        }
    } else {
        (1.0 + tau * (q - 1.0) * x * x).powf(1.0 / (1.0 - q))
    }
}

/// Mean absolute difference between histogram and density, as a percentage
/// of the histogram's value range.
pub fn distance(histogram: &[f64], density: &[f64]) -> Result<f64, StatsError> {
    if histogram.len() != density.len() {
        return Err(StatsError::LengthMismatch {
            histogram: histogram.len(),
            density: density.len(),
        });
    }
    if histogram.is_empty() {
        return Err(StatsError::NoBins);
    }

    let (min, max) = min_max(histogram);
    if max == min {
        return Err(StatsError::FlatHistogram);
    }

    let total: f64 = histogram
        .iter()
        .zip(density)
        .map(|(h, d)| (h - d).abs())
        .sum();

    Ok(total / histogram.len() as f64 / (max - min) * 100.0)
}

/// Bins `data` and returns its distance to the q-noise density for `tau`, `q`.
pub fn compare(data: &[f64], bins: usize, tau: f64, q: f64) -> Result<f64, StatsError> {
    let histogram = Histogram::from_samples(data, bins)?;
    let density = theoretical_pdf(&histogram.keys, tau, q)?;
    distance(&histogram.values, &density)
}

/// Sample mean and (population) variance.
pub fn mean_variance(data: &[f64]) -> Option<(f64, f64)> {
    if data.is_empty() {
        return None;
    }
    let n = data.len() as f64;
    let mean = data.iter().sum::<f64>() / n;
    let variance = data.iter().map(|x| (x - mean) * (x - mean)).sum::<f64>() / n;
    Some((mean, variance))
}

fn min_max(data: &[f64]) -> (f64, f64) {
    data.iter()
        .fold((f64::INFINITY, f64::NEG_INFINITY), |(lo, hi), &x| (lo.min(x), hi.max(x)))
}

// ╔════════════════════════════════════════════╗
// ║ ████████╗███████╗███████╗████████╗███████╗ ║
// ║ ╚══██╔══╝██╔════╝██╔════╝╚══██╔══╝██╔════╝ ║
// ║    ██║   █████╗  ███████╗   ██║   ███████╗ ║
// ║    ██║   ██╔══╝  ╚════██║   ██║   ╚════██║ ║
// ║    ██║   ███████╗███████║   ██║   ███████║ ║
// ║    ╚═╝   ╚══════╝╚══════╝   ╚═╝   ╚══════╝ ║
// ╚════════════════════════════════════════════╝
