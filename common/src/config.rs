#[derive(Debug, Clone, Default)]
pub struct Config {
    /// Skips the banner printed at startup.
    pub no_banner: bool,
    /// Verbosity reduction. `1` hides decorations, `2` also hides per-case details.
    pub quiet: u8,
    /// Seed for every generator created by a command.
    ///
    /// `None` seeds from OS entropy, so runs are not reproducible.
    pub seed: Option<u64>,
}
