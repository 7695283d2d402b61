//! Plain text output of generated series: one sample per line.

use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::{Path, PathBuf};

use anyhow::Context;
use tracing::debug;

/// File name used when the caller does not pick one, e.g. `qNoise_1_0.01_1.5_1000.txt`.
pub fn default_file_name(tau: f64, h: f64, q: f64, n: usize) -> PathBuf {
    PathBuf::from(format!("qNoise_{tau}_{h}_{q}_{n}.txt"))
}

/// Writes one sample per line and returns how many were written.
///
/// Samples use the shortest representation that parses back to the same `f64`.
pub fn write_series<W, I>(writer: W, samples: I) -> io::Result<usize>
where
    W: Write,
    I: IntoIterator<Item = f64>,
{
    let mut writer = BufWriter::new(writer);
    let mut written = 0;
    for sample in samples {
        writeln!(writer, "{sample}")?;
        written += 1;
    }
    writer.flush()?;
    Ok(written)
}

/// Creates (or truncates) `path` and writes the series to it.
pub fn save_series<I>(path: &Path, samples: I) -> anyhow::Result<usize>
where
    I: IntoIterator<Item = f64>,
{
    let file = File::create(path)
        .with_context(|| format!("failed to create {}", path.display()))?;
    let written = write_series(file, samples)
        .with_context(|| format!("failed to write {}", path.display()))?;

    debug!(path = %path.display(), written, "series saved");
    Ok(written)
}

// ╔════════════════════════════════════════════╗
// ║ ████████╗███████╗███████╗████████╗███████╗ ║
// ║ ╚══██╔══╝██╔════╝██╔════╝╚══██╔══╝██╔════╝ ║
// ║    ██║   █████╗  ███████╗   ██║   ███████╗ ║
// ║    ██║   ██╔══╝  ╚════██║   ██║   ╚════██║ ║
// ║    ██║   ███████╗███████║   ██║   ███████║ ║
// ║    ╚═╝   ╚══════╝╚══════╝   ╚═╝   ╚══════╝ ║
// ╚════════════════════════════════════════════╝
