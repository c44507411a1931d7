use clap::{Parser, Subcommand, ValueEnum};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;
use tracing_subscriber::filter::LevelFilter;

/// Log level options for CLI
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LogLevel {
    /// No logging output
    Off,
    /// Error messages only
    Error,
    /// Warnings and errors
    Warn,
    /// Informational messages
    Info,
    /// Debug messages
    Debug,
    /// Trace-level messages (most verbose)
    Trace,
}

impl From<LogLevel> for LevelFilter {
    fn from(level: LogLevel) -> Self {
        match level {
            LogLevel::Off => LevelFilter::OFF,
            LogLevel::Error => LevelFilter::ERROR,
            LogLevel::Warn => LevelFilter::WARN,
            LogLevel::Info => LevelFilter::INFO,
            LogLevel::Debug => LevelFilter::DEBUG,
            LogLevel::Trace => LevelFilter::TRACE,
        }
    }
}

#[derive(Parser)]
#[command(name = "wire")]
#[command(about = "wire - click through JSON wireframe schemas in the terminal")]
#[command(version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Set log level (off, error, warn, info, debug, trace)
    /// If not specified, uses config file value or defaults to 'warn'
    #[arg(short = 'l', long, global = true, value_enum)]
    pub log_level: Option<LogLevel>,

    /// Enable verbose logging (shortcut for --log-level=debug)
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Config file path (defaults to ~/.config/wireway/config.toml)
    #[arg(short = 'C', long, global = true, env = "WIREWAY_CONFIG")]
    pub config: Option<PathBuf>,
}

impl Cli {
    /// Level from flags, `--verbose` winning over `--log-level`.
    pub fn level_override(&self) -> Option<LogLevel> {
        if self.verbose {
            Some(LogLevel::Debug)
        } else {
            self.log_level
        }
    }
}

#[derive(Subcommand)]
pub enum Commands {
    /// Interactive preview with live reload
    ///
    /// Tab/Shift-Tab move focus, Enter activates, Ctrl+S saves the last
    /// valid schema, q quits.
    Preview {
        /// Schema file (JSON)
        file: PathBuf,

        /// Screen to start on (defaults to the first declared screen)
        #[arg(short, long)]
        screen: Option<String>,

        /// Render width (0 = terminal width)
        #[arg(short, long)]
        width: Option<usize>,

        /// Do not watch the file for changes
        #[arg(long)]
        no_watch: bool,
    },

    /// Print one screen to stdout
    Render {
        /// Schema file (JSON)
        file: PathBuf,

        /// Screen to render (defaults to the first declared screen)
        #[arg(short, long)]
        screen: Option<String>,

        /// Output width (defaults to config, then 80)
        #[arg(short, long)]
        width: Option<usize>,

        /// Strip colors and attributes
        #[arg(long)]
        plain: bool,
    },

    /// Check a schema and report lint findings
    Validate {
        /// Schema file (JSON)
        file: PathBuf,

        /// Treat lint findings as errors
        #[arg(long)]
        strict: bool,
    },

    /// List screen ids and names
    Screens {
        /// Schema file (JSON)
        file: PathBuf,

        /// Print as JSON
        #[arg(long)]
        json: bool,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn verbose_overrides_log_level() {
        let cli = Cli::parse_from(["wire", "-l", "error", "-v", "screens", "a.json"]);
        assert_eq!(cli.level_override(), Some(LogLevel::Debug));
    }

    #[test]
    fn render_flags_parse() {
        let cli = Cli::parse_from(["wire", "render", "a.json", "-s", "home", "-w", "60", "--plain"]);
        match cli.command {
            Commands::Render {
                screen,
                width,
                plain,
                ..
            } => {
                assert_eq!(screen.as_deref(), Some("home"));
                assert_eq!(width, Some(60));
                assert!(plain);
            }
            _ => panic!("expected render"),
        }
    }

    #[test]
    fn cli_definition_is_consistent() {
        use clap::CommandFactory;
        Cli::command().debug_assert();
    }
}
