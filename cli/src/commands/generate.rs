use std::io;
use std::path::PathBuf;
use std::time::Instant;

use colored::*;
use tracing::info_span;

use crate::commands::{GenerateArgs, OutputArgs, new_generator};
use crate::terminal::{format, print, spinner};
use qnoise_common::config::Config;
use qnoise_common::params::QNoiseParams;
use qnoise_common::success;
use qnoise_core::series;

pub fn generate(args: GenerateArgs, cfg: &Config) -> anyhow::Result<()> {
    let params = QNoiseParams {
        tau: args.tau,
        q: args.q,
        n: args.n,
        h: args.h,
        transient: args.transient,
        normalized: args.norm,
    };
    params.validate()?;

    let _span = info_span!("generate", tau = params.tau, q = params.q).entered();

    print::header("q-noise", cfg.quiet);
    print_parameters(&params, cfg);

    let default_path = series::default_file_name(params.tau, params.h, params.q, params.n);
    let mut generator = new_generator(cfg);

    let start_time = Instant::now();
    let samples = generator.series(&params)?;
    let progress = spinner::start(params.n as u64, "Integrating q-noise", cfg.quiet);
    let samples = samples.enumerate().map(|(i, x)| {
        if i % spinner::UPDATE_EVERY == 0 {
            progress.set_position(i as u64);
        }
        x
    });

    let result = write_output(samples, &args.output, default_path);
    spinner::finish();
    let (written, path) = result?;

    report_written(written, path, start_time);
    print::end_of_program(cfg.quiet);
    Ok(())
}

fn print_parameters(params: &QNoiseParams, cfg: &Config) {
    if cfg.quiet > 0 {
        return;
    }

    print::set_key_width(["Tau", "Step", "q", "Samples", "Transient", "Normalized"]);
    print::aligned_line("Tau", format::number(params.effective_tau()));
    print::aligned_line("Step", format::number(params.h));
    print::aligned_line("q", format!("{} ({})", params.q, format::q_regime(params.q)));
    print::aligned_line("Samples", params.n.to_string());
    print::aligned_line("Transient", params.transient_steps().to_string());
    print::aligned_line("Normalized", if params.normalized { "yes" } else { "no" });
}

/// Streams `samples` to stdout or to a file. Returns the count and the file used.
pub(super) fn write_output<I>(
    samples: I,
    output: &OutputArgs,
    default_path: PathBuf,
) -> anyhow::Result<(usize, Option<PathBuf>)>
where
    I: IntoIterator<Item = f64>,
{
    if output.stdout {
        let written = series::write_series(io::stdout().lock(), samples)?;
        return Ok((written, None));
    }

    let path = output.output.clone().unwrap_or(default_path);
    let written = series::save_series(&path, samples)?;
    Ok((written, Some(path)))
}

pub(super) fn report_written(written: usize, path: Option<PathBuf>, start_time: Instant) {
    let elapsed: ColoredString = format!("{:.2}s", start_time.elapsed().as_secs_f64()).bold().yellow();
    let count: ColoredString = written.to_string().bold().green();
    match path {
        Some(path) => success!("{count} samples saved in {} ({elapsed})", path.display()),
        None => success!("{count} samples written to stdout ({elapsed})"),
    }
}
