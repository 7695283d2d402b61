use thiserror::Error;

/// Rejected generator parameters.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum NoiseError {
    #[error("integration step must be finite and positive, got {0}")]
    InvalidStep(f64),
    #[error("autocorrelation time must be finite, got {0}")]
    InvalidTau(f64),
    #[error("q must be finite, got {0}")]
    InvalidQ(f64),
    #[error("normalized q-noise needs q < 5/3, got {0}")]
    NormalizedQOutOfRange(f64),
}
