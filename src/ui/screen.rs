//! Terminal session lifecycle and frame painting.
//!
//! Every write to the terminal — frames, the end screen, restoration —
//! goes through the screen lock here, so a restore never interleaves
//! mid-frame with a scheduled paint.
//!
//! Terminal state is restored (frame cleared, cursor visible) on:
//! - Normal exit (via `ScreenSession` drop)
//! - Ctrl+C (the player returns `InterruptedError`, the guard drops)
//! - Panic (hook installed before the session starts)

use std::io::{self, Write, stdout};
use std::panic;
use std::sync::{Arc, Mutex, PoisonError};

use anyhow::{Context, Result};
use crossterm::cursor::{Hide, MoveTo, Show};
use crossterm::style::{Attribute, Color, Print, ResetColor, SetAttribute, SetForegroundColor};
use crossterm::terminal::{Clear, ClearType};
use crossterm::{execute, queue};

use super::view::{FrameRow, RowStyle};

/// Soft dark gray for upcoming lines.
const UPCOMING_COLOR: Color = Color::AnsiValue(239);
/// Color for highlighted active lines.
const HIGHLIGHT_COLOR: Color = Color::Cyan;

/// Smallest terminal the end-screen layout assumes.
const MIN_COLS: u16 = 80;
const MIN_ROWS: u16 = 20;

/// Shared handle to the terminal output stream.
///
/// Clones refer to the same lock, making the painter and the restoration
/// paths mutually exclusive.
#[derive(Clone, Default)]
pub struct Screen {
    lock: Arc<Mutex<()>>,
}

impl Screen {
    pub fn new() -> Self {
        Self::default()
    }

    /// Paints one full frame: clear, draw every row, flush.
    ///
    /// Holds the screen lock for the whole write so no other screen write
    /// can interleave. Always clears and redraws; there is no diffing.
    /// A write failure is fatal to the caller — nothing here retries.
    pub fn paint(&self, rows: &[FrameRow]) -> Result<()> {
        let _guard = self.lock.lock().unwrap_or_else(PoisonError::into_inner);
        paint_rows(&mut stdout(), rows).context("failed to write frame")
    }

    fn restore_now(&self) {
        // A paint that panicked mid-frame may still hold the lock.
        let _guard = self.lock.try_lock();
        let _ = execute!(stdout(), Clear(ClearType::All), MoveTo(0, 0), Show);
    }
}

/// Scoped terminal session.
///
/// Entering hides the cursor and clears the screen; dropping clears the
/// frame and makes the cursor visible again. Restoration is idempotent —
/// the panic hook and the drop may both run.
pub struct ScreenSession {
    screen: Screen,
}

impl ScreenSession {
    /// Hides the cursor, clears the screen, and installs the panic hook.
    pub fn enter(screen: Screen) -> Result<Self> {
        install_panic_hook(screen.clone());
        {
            let _guard = screen.lock.lock().unwrap_or_else(PoisonError::into_inner);
            execute!(stdout(), Hide, Clear(ClearType::All), MoveTo(0, 0))
                .context("failed to prepare terminal")?;
        }
        Ok(Self { screen })
    }
}

impl Drop for ScreenSession {
    fn drop(&mut self) {
        self.screen.restore_now();
    }
}

/// Installs a panic hook that restores the terminal before the panic
/// message prints. Call before `ScreenSession::enter`.
fn install_panic_hook(screen: Screen) {
    let original_hook = panic::take_hook();
    panic::set_hook(Box::new(move |panic_info| {
        screen.restore_now();
        original_hook(panic_info);
    }));
}

/// Current terminal size, clamped to the minimum the layout assumes.
pub fn terminal_size() -> (u16, u16) {
    let (cols, rows) = crossterm::terminal::size().unwrap_or((MIN_COLS, MIN_ROWS));
    (cols.max(MIN_COLS), rows.max(MIN_ROWS))
}

fn paint_rows(out: &mut impl Write, rows: &[FrameRow]) -> io::Result<()> {
    queue!(out, Clear(ClearType::All), MoveTo(0, 0))?;
    for row in rows {
        queue!(out, MoveTo(row.col, row.row))?;
        match row.style {
            RowStyle::Info | RowStyle::Active => queue!(
                out,
                SetAttribute(Attribute::Bold),
                Print(&row.text),
                SetAttribute(Attribute::Reset)
            )?,
            RowStyle::ActiveHighlight => queue!(
                out,
                SetAttribute(Attribute::Bold),
                SetForegroundColor(HIGHLIGHT_COLOR),
                Print(&row.text),
                ResetColor,
                SetAttribute(Attribute::Reset)
            )?,
            RowStyle::Upcoming => queue!(
                out,
                SetForegroundColor(UPCOMING_COLOR),
                Print(&row.text),
                ResetColor
            )?,
        }
    }
    out.flush()
}
