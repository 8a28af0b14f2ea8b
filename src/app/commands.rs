//! Command handlers.

use std::io::IsTerminal;
use std::path::Path;

use anyhow::{Context, Result};

use super::PlayArgs;
use crate::config::{self, Config};
use crate::ui::screen::{Screen, ScreenSession};
use crate::ui::view::{Geometry, Header};
use crate::{interrupt, loader, player};

pub fn play(config: &Config, file: &str, args: &PlayArgs) -> Result<()> {
    // Playback paints a full-screen frame; refuse early without a terminal
    if !std::io::stdout().is_terminal() {
        anyhow::bail!(
            "play requires a terminal.\n\
             Use `lyrsync info <FILE>` to inspect a file non-interactively."
        );
    }

    let loaded = loader::load_file(
        Path::new(file),
        args.title.as_deref(),
        args.artist.as_deref(),
    )?;

    let buffer = args.buffer.unwrap_or(config.buffer_seconds);
    let total_duration = args
        .duration
        .unwrap_or_else(|| loaded.timeline.total_duration(buffer));

    let geometry = Geometry {
        start_row: 0,
        start_col: 1,
        text_width: args.width.unwrap_or(config.text_width),
        text_height: args.height.unwrap_or(config.text_height),
    };
    anyhow::ensure!(
        geometry.text_width > 0 && geometry.text_height > 0,
        "display width and height must be positive"
    );

    let header = Header::new(&loaded.title, &loaded.artist);
    tracing::info!(
        title = %loaded.title,
        artist = %loaded.artist,
        total_duration,
        "starting playback"
    );

    // Reset the interrupt flag in case it was set from a previous run
    interrupt::reset();
    interrupt::init();
    let screen = Screen::new();
    let _session = ScreenSession::enter(screen.clone()).context("failed to set up terminal")?;
    player::play(&screen, &loaded.timeline, &header, &geometry, total_duration)
}

pub fn info(config: &Config, file: &str, buffer: Option<f64>) -> Result<()> {
    let loaded = loader::load_file(Path::new(file), None, None)?;
    let buffer = buffer.unwrap_or(config.buffer_seconds);
    let timeline = &loaded.timeline;

    println!("{} - {}", loaded.artist, loaded.title);
    println!("lines: {}", timeline.len());
    if let (Some(first), Some(last)) = (timeline.lines().first(), timeline.lines().last()) {
        println!("first line: {:.2}s", first.time);
        println!("last line: {:.2}s", last.time);
    }
    println!("duration: {:.2}s", timeline.total_duration(buffer));
    Ok(())
}

pub fn config_path() -> Result<()> {
    println!("{}", config::paths::config_path().display());
    Ok(())
}

pub fn config_init() -> Result<()> {
    let config_path = config::paths::config_path();
    Config::init(&config_path)
        .with_context(|| format!("init config at {}", config_path.display()))?;
    println!("Created config at {}", config_path.display());
    Ok(())
}
