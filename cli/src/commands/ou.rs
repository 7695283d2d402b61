use std::path::PathBuf;
use std::time::Instant;

use crate::commands::generate::{report_written, write_output};
use crate::commands::{OuArgs, new_generator};
use crate::terminal::{format, print, spinner};
use qnoise_common::config::Config;
use qnoise_common::params::OrnsteinUhlenbeckParams;
use qnoise_common::{info, warn};

pub fn ou(args: OuArgs, cfg: &Config) -> anyhow::Result<()> {
    let params = OrnsteinUhlenbeckParams {
        tau: args.tau,
        n: args.n,
        h: args.h,
        transient: args.transient,
        white_noise: args.white,
    };
    params.validate()?;

    let white = params.is_white();
    if white {
        print::header("white noise", cfg.quiet);
        if args.white && params.tau != 0.0 {
            warn!("--white given, tau = {} is ignored", params.tau);
        }
    } else {
        print::header("ornstein-uhlenbeck", cfg.quiet);
    }

    if cfg.quiet == 0 && !white {
        print::set_key_width(["Tau", "Step", "Samples", "Transient"]);
        print::aligned_line("Tau", format::number(params.effective_tau()));
        print::aligned_line("Step", format::number(params.h));
        print::aligned_line("Samples", params.n.to_string());
        print::aligned_line("Transient", params.transient_steps().to_string());
    }

    let start_time = Instant::now();
    spinner::start_spinner("Generating samples", cfg.quiet);
    let mut generator = new_generator(cfg);
    let samples = generator.generate_ornstein_uhlenbeck(&params);
    spinner::finish();
    let samples = samples?;
    info!("generated {} samples", samples.len());

    let (written, path) = write_output(samples, &args.output, default_path(&params))?;
    report_written(written, path, start_time);
    print::end_of_program(cfg.quiet);
    Ok(())
}

fn default_path(params: &OrnsteinUhlenbeckParams) -> PathBuf {
    if params.is_white() {
        PathBuf::from(format!("whiteNoise_{}.txt", params.n))
    } else {
        PathBuf::from(format!(
            "ornsteinUhlenbeck_{}_{}_{}.txt",
            params.tau, params.h, params.n
        ))
    }
}
