use std::io::{self, Write};
use std::sync::OnceLock;
use std::time::Duration;

use colored::*;
use indicatif::{ProgressBar, ProgressDrawTarget, ProgressStyle};

/// Samples between two progress updates while streaming a series.
pub const UPDATE_EVERY: usize = 4096;

pub(crate) static PROGRESS: OnceLock<ProgressBar> = OnceLock::new();

pub fn get_progress() -> &'static ProgressBar {
    PROGRESS.get_or_init(ProgressBar::hidden)
}

const TICKS: &[&str] = &[
    "▁▁▁▁▁",
    "▁▂▂▂▁",
    "▁▄▂▄▁",
    "▂▄▆▄▂",
    "▄▆█▆▄",
    "▂▄▆▄▂",
    "▁▄▂▄▁",
    "▁▂▂▂▁",
];

fn bar_style() -> ProgressStyle {
    ProgressStyle::with_template("{spinner:.blue} {msg} [{bar:32.cyan/blue}] {pos}/{len} ({eta})")
        .unwrap_or_else(|_| ProgressStyle::default_bar())
        .progress_chars("█▆▁")
        .tick_strings(TICKS)
}

fn spinner_style() -> ProgressStyle {
    ProgressStyle::with_template("{spinner:.blue} {msg} ({elapsed})")
        .unwrap_or_else(|_| ProgressStyle::default_spinner())
        .tick_strings(TICKS)
}

/// Shows the progress bar on stderr, unless `quiet` is set.
pub fn start(len: u64, message: &str, quiet: u8) -> &'static ProgressBar {
    let pb = get_progress();
    if quiet > 0 {
        return pb;
    }

    pb.set_draw_target(ProgressDrawTarget::stderr());
    pb.set_style(bar_style());
    pb.set_length(len);
    pb.set_position(0);
    pb.set_message(format!("{}", message.italic().white()));
    pb.enable_steady_tick(Duration::from_millis(100));
    pb
}

/// Shows an indeterminate spinner, for work that cannot report a position.
pub fn start_spinner(message: &str, quiet: u8) -> &'static ProgressBar {
    let pb = get_progress();
    if quiet == 0 {
        pb.set_draw_target(ProgressDrawTarget::stderr());
        configure_spinner(pb, message);
    }
    pb
}

fn configure_spinner(pb: &ProgressBar, message: &str) {
    pb.set_style(spinner_style());
    pb.set_message(format!("{}", message.italic().white()));
    pb.enable_steady_tick(Duration::from_millis(100));
}

pub fn finish() {
    get_progress().finish_and_clear();
}

/// Log writer that keeps lines from tearing through the progress bar.
pub struct ProgressWriter;

impl Write for ProgressWriter {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        get_progress().suspend(|| io::stderr().write_all(buf))?;
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        io::stderr().flush()
    }
}
