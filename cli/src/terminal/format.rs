use crate::terminal::colors;
use colored::*;
use qnoise_core::stats::validation::CaseOutcome;

pub type Detail = (String, ColoredString);

pub fn number(value: f64) -> ColoredString {
    value.to_string().color(colors::VALUE)
}

/// Short label for the statistics selected by `q`.
pub fn q_regime(q: f64) -> &'static str {
    if q < 1.0 {
        "bounded"
    } else if q > 1.0 {
        "heavy-tailed"
    } else {
        "Gaussian"
    }
}

pub fn outcome_to_details(outcome: &CaseOutcome) -> Vec<Detail> {
    let case = &outcome.case;
    let mut details: Vec<Detail> = vec![
        ("Samples".to_string(), case.n.to_string().color(colors::VALUE)),
        ("Tau".to_string(), number(case.tau)),
        ("q".to_string(), format!("{} ({})", case.q, q_regime(case.q)).color(colors::VALUE)),
    ];

    let result: ColoredString = match &outcome.distance {
        Ok(distance) if outcome.passed() => {
            format!("{distance:.3}% <= {}% PASSED", outcome.limit).color(colors::PASSED)
        }
        Ok(distance) => {
            format!("{distance:.3}% > {}% FAILED", outcome.limit).color(colors::FAILED).bold()
        }
        Err(e) => format!("{e}").color(colors::FAILED).bold(),
    };
    details.push(("Distance".to_string(), result));

    details
}

/// One line summary used when per-case trees are suppressed.
pub fn outcome_to_line(outcome: &CaseOutcome) -> String {
    let case = &outcome.case;
    let verdict: ColoredString = if outcome.passed() {
        "PASSED".color(colors::PASSED)
    } else {
        "FAILED".color(colors::FAILED).bold()
    };
    let distance: String = match &outcome.distance {
        Ok(d) => format!("{d:.3}%"),
        Err(e) => e.to_string(),
    };
    format!(
        "{}, N={}, tau={}, q={}: {} {}",
        case.kind, case.n, case.tau, case.q, distance, verdict
    )
}
