//! Status macros on top of `tracing`.
//!
//! The CLI formatter renders each target with its own prefix, so library code
//! can report progress without knowing how it ends up on the terminal.

pub const STATUS_TARGET: &str = "qnoise::status";
pub const SUCCESS_TARGET: &str = "qnoise::success";
pub const PRINT_TARGET: &str = "qnoise::print";

#[macro_export]
macro_rules! info {
    ($($arg:tt)*) => {
        $crate::__tracing::info!(target: $crate::log::STATUS_TARGET, $($arg)*)
    };
}

#[macro_export]
macro_rules! success {
    ($($arg:tt)*) => {
        $crate::__tracing::info!(target: $crate::log::SUCCESS_TARGET, $($arg)*)
    };
}

#[macro_export]
macro_rules! warn {
    ($($arg:tt)*) => {
        $crate::__tracing::warn!(target: $crate::log::STATUS_TARGET, $($arg)*)
    };
}
