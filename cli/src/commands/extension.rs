use crate::terminal::{print, spinner};
use qnoise_common::config::Config;
use qnoise_common::info;
use qnoise_core::extension::{ExtensionDescriptor, Platform};

pub fn extension(platform: Option<String>, cfg: &Config) -> anyhow::Result<()> {
    let platform = match platform.as_deref() {
        Some(id) => Platform::from_identifier(id),
        None => Platform::host(),
    };

    print::header("extension module", cfg.quiet);
    info!("Compiler flags selected for {platform}");

    let descriptor = ExtensionDescriptor::for_platform(platform);
    // The manifest goes to stdout so it can be piped, logs stay on stderr
    spinner::get_progress().suspend(|| print!("{}", descriptor.render()));

    print::end_of_program(cfg.quiet);
    Ok(())
}
