use anyhow::Result;
use clap::Parser;
use tracing::debug;
use tracing_subscriber::filter::LevelFilter;

use wireway_cli::{
    cli::{Cli, Commands, LogLevel},
    commands, config, logging,
};

fn main() -> Result<()> {
    let cli = Cli::parse();
    let config = config::WireConfig::load(cli.config.as_deref())?;

    // Flags beat the config file; warnings by default.
    let level: LevelFilter = cli
        .level_override()
        .or(config.logging.level)
        .unwrap_or(LogLevel::Warn)
        .into();

    match cli.command {
        Commands::Preview {
            file,
            screen,
            width,
            no_watch,
        } => {
            logging::init_file(level, config.logging.file.as_deref())?;
            debug!(?config, "configuration");
            commands::preview::execute(
                &config,
                commands::preview::PreviewArgs {
                    file,
                    screen,
                    width,
                    no_watch,
                },
            )
        }
        Commands::Render {
            file,
            screen,
            width,
            plain,
        } => {
            logging::init_stderr(level)?;
            commands::render::execute(&config, &file, screen.as_deref(), width, plain)
        }
        Commands::Validate { file, strict } => {
            logging::init_stderr(level)?;
            commands::validate::execute(&file, strict)
        }
        Commands::Screens { file, json } => {
            logging::init_stderr(level)?;
            commands::screens::execute(&file, json)
        }
    }
}
