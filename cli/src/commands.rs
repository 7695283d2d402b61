pub mod extension;
pub mod generate;
pub mod ou;
pub mod validate;

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};
use qnoise_common::config::Config;
use qnoise_core::Generator;

#[derive(Parser)]
#[command(name = "qnoise")]
#[command(about = "A generator of non-Gaussian colored noise.")]
#[command(version)]
pub struct CommandLine {
    #[command(subcommand)]
    pub command: Commands,

    /// Seed the generator for reproducible output
    #[arg(long, global = true)]
    pub seed: Option<u64>,

    /// Reduce output (-q hides decorations, -qq also hides per-case details)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub quiet: u8,

    /// Do not print the banner
    #[arg(long, global = true)]
    pub no_banner: bool,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Generate a q-noise time series
    #[command(alias = "g")]
    Generate(GenerateArgs),
    /// Generate Ornstein-Uhlenbeck (or white) Gaussian noise
    #[command(alias = "o")]
    Ou(OuArgs),
    /// Compare generated series against their stationary densities
    #[command(alias = "v")]
    Validate(ValidateArgs),
    /// Show the build descriptor of the native extension module
    #[command(alias = "e")]
    Extension {
        /// Platform identifier, e.g. "linux" or "win32" (defaults to this host)
        #[arg(long)]
        platform: Option<String>,
    },
}

/// Where a generated series goes.
#[derive(Args, Debug, Clone)]
pub struct OutputArgs {
    /// Output file (defaults to a name built from the parameters)
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Write samples to standard output instead of a file
    #[arg(long, conflicts_with = "output")]
    pub stdout: bool,
}

#[derive(Args, Debug, Clone)]
pub struct GenerateArgs {
    /// Autocorrelation time
    #[arg(allow_negative_numbers = true)]
    pub tau: f64,
    /// Integration time step
    pub h: f64,
    /// Statistics parameter (1 Gaussian, < 1 bounded, > 1 heavy-tailed)
    #[arg(allow_negative_numbers = true)]
    pub q: f64,
    /// Number of samples
    pub n: usize,

    /// Rescale tau so that correlation time and variance do not depend on q
    #[arg(long)]
    pub norm: bool,

    /// Steps discarded before recording (defaults to 2 * tau / h)
    #[arg(long)]
    pub transient: Option<usize>,

    #[command(flatten)]
    pub output: OutputArgs,
}

#[derive(Args, Debug, Clone)]
pub struct OuArgs {
    /// Autocorrelation time (0 gives white noise)
    #[arg(allow_negative_numbers = true)]
    pub tau: f64,
    /// Integration time step
    pub h: f64,
    /// Number of samples
    pub n: usize,

    /// Ignore tau and generate Gaussian white noise
    #[arg(long)]
    pub white: bool,

    /// Steps discarded before recording (defaults to 2 * tau / h)
    #[arg(long)]
    pub transient: Option<usize>,

    #[command(flatten)]
    pub output: OutputArgs,
}

#[derive(Args, Debug, Clone)]
pub struct ValidateArgs {
    /// Sample sizes to test (repeatable)
    #[arg(short = 'n', long = "samples")]
    pub samples: Vec<usize>,

    /// Autocorrelation times to test (repeatable)
    #[arg(long, allow_negative_numbers = true)]
    pub tau: Vec<f64>,

    /// q values to test (repeatable)
    #[arg(long = "q-value")]
    pub q: Vec<f64>,

    /// Integration step (defaults to tau / 100 for each case)
    #[arg(long)]
    pub step: Option<f64>,

    /// Histogram bins
    #[arg(long, default_value_t = qnoise_core::stats::DEFAULT_BINS)]
    pub bins: usize,

    /// Largest accepted distance, in percent
    #[arg(long, default_value_t = qnoise_core::stats::validation::DEFAULT_LIMIT)]
    pub limit: f64,
}

impl CommandLine {
    pub fn parse_args() -> Self {
        Self::parse()
    }

    pub fn config(&self) -> Config {
        Config {
            no_banner: self.no_banner,
            quiet: self.quiet,
            seed: self.seed,
        }
    }
}

/// A fresh generator honoring `--seed`.
pub fn new_generator(cfg: &Config) -> Generator {
    match cfg.seed {
        Some(seed) => Generator::with_seed(seed),
        None => Generator::new(),
    }
}
