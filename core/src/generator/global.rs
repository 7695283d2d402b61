//! Process-wide generator for callers that do not want to carry one around.

use std::sync::{Mutex, MutexGuard, OnceLock, PoisonError};

use qnoise_common::error::NoiseError;
use qnoise_common::params::{OrnsteinUhlenbeckParams, QNoiseParams};

use super::Generator;

static DEFAULT_GENERATOR: OnceLock<Mutex<Generator>> = OnceLock::new();

fn default_generator() -> MutexGuard<'static, Generator> {
    DEFAULT_GENERATOR
        .get_or_init(|| Mutex::new(Generator::new()))
        .lock()
        .unwrap_or_else(PoisonError::into_inner)
}

/// Reseeds the default generator.
pub fn set_seed(seed: u64) {
    *default_generator() = Generator::with_seed(seed);
}

/// [`Generator::generate`] on the default generator.
pub fn generate(params: &QNoiseParams) -> Result<Vec<f64>, NoiseError> {
    default_generator().generate(params)
}

/// [`Generator::generate_ornstein_uhlenbeck`] on the default generator.
pub fn generate_ornstein_uhlenbeck(
    params: &OrnsteinUhlenbeckParams,
) -> Result<Vec<f64>, NoiseError> {
    default_generator().generate_ornstein_uhlenbeck(params)
}
