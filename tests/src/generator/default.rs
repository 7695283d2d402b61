#![cfg(test)]
use qnoise_common::params::{OrnsteinUhlenbeckParams, QNoiseParams};
use qnoise_core::{Generator, generate, generate_ornstein_uhlenbeck, set_seed};

/// The free functions share one generator; reseeding it restarts the sequence.
///
/// Everything touching the default generator lives in this single test so
/// that parallel test threads cannot interleave draws.
#[test]
fn default_generator_follows_seed() {
    let params = QNoiseParams::new(1.0, 1.5, 100).with_step(0.01);
    let ou = OrnsteinUhlenbeckParams::new(1.0, 100).with_step(0.01);

    set_seed(42);
    let first = generate(&params).unwrap();
    let gaussian = generate_ornstein_uhlenbeck(&ou).unwrap();
    assert_eq!(first.len(), 100);
    assert_eq!(gaussian.len(), 100);

    set_seed(42);
    assert_eq!(generate(&params).unwrap(), first);
    assert_eq!(generate_ornstein_uhlenbeck(&ou).unwrap(), gaussian);

    // Same stream as an explicitly seeded generator
    let mut generator = Generator::with_seed(42);
    assert_eq!(generator.generate(&params).unwrap(), first);
    assert_eq!(generator.generate_ornstein_uhlenbeck(&ou).unwrap(), gaussian);
}
