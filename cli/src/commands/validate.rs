use std::time::Instant;

use colored::*;

use crate::commands::ValidateArgs;
use crate::qprint;
use crate::terminal::{colors, format, print, spinner};
use qnoise_common::config::Config;
use qnoise_common::{info, success};
use qnoise_core::stats::validation::{CaseOutcome, NoiseKind, ValidationPlan};

pub fn validate(args: ValidateArgs, cfg: &Config) -> anyhow::Result<()> {
    let plan = build_plan(args, cfg);
    let cases = plan.cases().len();

    print::header("statistical validation", cfg.quiet);
    info!(
        "Comparing {cases} series against their stationary densities ({} bins, limit {}%)",
        plan.bins, plan.limit
    );

    let start_time = Instant::now();
    let progress = spinner::start(cases as u64, "Running validation cases", cfg.quiet);
    let outcomes: Vec<CaseOutcome> = plan.run(|_| progress.inc(1));
    spinner::finish();

    print_outcomes(&outcomes, cfg);

    let failed = outcomes.iter().filter(|o| !o.passed()).count();
    print_summary(outcomes.len(), failed, start_time, cfg);

    if failed > 0 {
        anyhow::bail!("{failed} of {} validation cases failed", outcomes.len());
    }
    Ok(())
}

fn build_plan(args: ValidateArgs, cfg: &Config) -> ValidationPlan {
    let defaults = ValidationPlan::default();
    ValidationPlan {
        kinds: defaults.kinds,
        taus: non_empty_or(args.tau, defaults.taus),
        qs: non_empty_or(args.q, defaults.qs),
        sizes: non_empty_or(args.samples, defaults.sizes),
        step: args.step,
        bins: args.bins,
        limit: args.limit,
        seed: cfg.seed,
    }
}

fn non_empty_or<T>(values: Vec<T>, default: Vec<T>) -> Vec<T> {
    if values.is_empty() { default } else { values }
}

fn print_outcomes(outcomes: &[CaseOutcome], cfg: &Config) {
    let mut current_kind: Option<NoiseKind> = None;

    for (idx, outcome) in outcomes.iter().enumerate() {
        match cfg.quiet {
            0 => {
                if current_kind != Some(outcome.case.kind) {
                    current_kind = Some(outcome.case.kind);
                    qprint!();
                    print::header(&outcome.case.kind.to_string(), cfg.quiet);
                }
                let label = format!("tau = {}, q = {}", outcome.case.tau, outcome.case.q);
                print::tree_head(idx, &label);
                print::as_tree_one_level(format::outcome_to_details(outcome));
            }
            1 => print::print_status(format::outcome_to_line(outcome)),
            _ if !outcome.passed() => print::print_status(format::outcome_to_line(outcome)),
            _ => {}
        }
    }
}

fn print_summary(total: usize, failed: usize, start_time: Instant, cfg: &Config) {
    let passed: ColoredString = format!("{} passed", total - failed).bold().color(colors::PASSED);
    let failed: ColoredString = if failed > 0 {
        format!("{failed} failed").bold().color(colors::FAILED)
    } else {
        "0 failed".normal()
    };
    let total_time: ColoredString = format!("{:.2}s", start_time.elapsed().as_secs_f64()).bold().yellow();
    let output: ColoredString = format!("Validation Complete: {passed}, {failed} in {total_time}")
        .color(colors::TEXT_DEFAULT);

    match cfg.quiet {
        0 => {
            print::fat_separator();
            print::centerln(&output.to_string());
        }
        _ => success!("{}", output),
    }
}
