//! Types shared between the `qnoise` engine and its command line front end.

pub mod config;
pub mod error;
pub mod log;
pub mod params;

#[doc(hidden)]
pub use tracing as __tracing;
