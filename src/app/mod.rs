//! CLI entry and dispatch.

use anyhow::{Context, Result};
use clap::Parser;

use crate::{config, logging};

mod commands;

#[derive(Parser)]
#[command(name = "lyrsync")]
#[command(version = "0.1")]
#[command(about = "Time-synced lyrics in your terminal")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

/// Display and timing overrides shared by playback.
#[derive(clap::Args, Debug, Clone, Default)]
pub(crate) struct PlayArgs {
    /// Title shown above the lyrics (wins over file metadata)
    #[arg(long)]
    pub title: Option<String>,

    /// Artist shown above the lyrics (wins over file metadata)
    #[arg(long)]
    pub artist: Option<String>,

    /// Override the display width from config
    #[arg(long)]
    pub width: Option<usize>,

    /// Override the display height from config
    #[arg(long)]
    pub height: Option<usize>,

    /// Seconds of playback kept after the last line starts
    #[arg(long)]
    pub buffer: Option<f64>,

    /// Total playback duration in seconds (default: last line + buffer)
    #[arg(long)]
    pub duration: Option<f64>,
}

#[derive(clap::Subcommand)]
enum Commands {
    /// Plays a timed-text file in the terminal
    Play {
        /// Path to the lyrics JSON file
        file: String,

        #[command(flatten)]
        args: PlayArgs,
    },
    /// Prints a summary of a timed-text file
    Info {
        /// Path to the lyrics JSON file
        file: String,

        /// Seconds of playback kept after the last line starts
        #[arg(long)]
        buffer: Option<f64>,
    },
    /// Manage configuration
    Config {
        #[command(subcommand)]
        command: ConfigCommands,
    },
}

#[derive(clap::Subcommand)]
enum ConfigCommands {
    /// Show the path to the config file
    Path,
    /// Initialize a default config file (if not present)
    Init,
}

pub fn run() -> Result<()> {
    let cli = Cli::parse();
    let config = config::Config::load().context("load config")?;

    // Logs go to a file; losing them never blocks playback.
    let _log_guard = logging::init().ok();

    match cli.command {
        Commands::Play { file, args } => commands::play(&config, &file, &args),
        Commands::Info { file, buffer } => commands::info(&config, &file, buffer),
        Commands::Config { command } => match command {
            ConfigCommands::Path => commands::config_path(),
            ConfigCommands::Init => commands::config_init(),
        },
    }
}
