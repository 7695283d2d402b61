mod commands;
mod terminal;

use commands::{CommandLine, Commands, extension, generate, ou, validate};
use terminal::{logging, print};

fn main() -> anyhow::Result<()> {
    let commands = CommandLine::parse_args();

    logging::init_logging();
    let cfg = commands.config();
    print::banner(cfg.no_banner, cfg.quiet);

    match commands.command {
        Commands::Generate(args) => generate::generate(args, &cfg),
        Commands::Ou(args) => ou::ou(args, &cfg),
        Commands::Validate(args) => validate::validate(args, &cfg),
        Commands::Extension { platform } => extension::extension(platform, &cfg),
    }
}
