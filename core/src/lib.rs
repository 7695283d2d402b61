//! Non-Gaussian colored noise.
//!
//! The [`generator`] integrates the q-noise stochastic differential equation
//! with a Heun scheme, [`stats`] checks generated series against their
//! stationary densities, [`series`] writes them out and [`extension`] carries
//! the descriptor used to build the native extension module.

pub mod extension;
pub mod generator;
pub mod series;
pub mod stats;

pub use generator::{Generator, generate, generate_ornstein_uhlenbeck, set_seed};
