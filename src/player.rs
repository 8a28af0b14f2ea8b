//! The playback tick loop.
//!
//! Single-threaded and cooperative: read the clock, advance the cursor,
//! paint, then sleep until the next line's start time. The sleep is the
//! only blocking operation and is taken in short slices so a Ctrl+C is
//! noticed promptly and unwinds through the normal restoration path.

use std::time::{Duration, Instant};

use anyhow::Result;

use crate::interrupt::{self, InterruptedError};
use crate::timeline::Timeline;
use crate::ui::screen::{self, Screen};
use crate::ui::view::{self, Geometry, Header};

/// Floor on the inter-tick sleep; bounds busy-looping when the next
/// target time has already passed.
const MIN_TICK: Duration = Duration::from_millis(10);
/// Upper bound on one uninterruptible sleep slice.
const SLEEP_SLICE: Duration = Duration::from_millis(50);
/// How long the end screen stays up before the terminal is restored.
const END_HOLD: Duration = Duration::from_secs(3);

/// Plays the timeline to completion, cancellation, or render failure.
///
/// The cursor only moves forward: ticks observe strictly increasing
/// elapsed time, and a tick that lands past several lines shows only the
/// last one whose time has passed. A render IO failure is fatal and
/// returns immediately; the caller's screen guard still restores the
/// terminal.
pub fn play(
    screen: &Screen,
    timeline: &Timeline,
    header: &Header,
    geometry: &Geometry,
    total_duration: f64,
) -> Result<()> {
    let start = Instant::now();
    let mut cursor = 0usize;

    loop {
        let elapsed = start.elapsed().as_secs_f64();
        if elapsed >= total_duration {
            break;
        }

        cursor = timeline.advance(cursor, elapsed);

        if let Some(index) = timeline.display_index(cursor) {
            let rows = view::layout_frame(index, timeline.lines(), header, geometry);
            screen.paint(&rows)?;
        }

        let next_target = timeline.next_target(cursor, total_duration);
        let remaining = next_target - start.elapsed().as_secs_f64();
        let sleep_for = Duration::from_secs_f64(remaining.max(0.0)).max(MIN_TICK);
        sleep_interruptible(sleep_for)?;
    }

    tracing::debug!(lines = timeline.len(), "playback finished");

    // Final screen, held briefly. Ctrl+C here still restores cleanly.
    let (cols, rows) = screen::terminal_size();
    screen.paint(&view::layout_end_screen(header, cols, rows))?;
    sleep_interruptible(END_HOLD)?;

    Ok(())
}

/// Sleeps for `total`, waking every slice to honor a pending interrupt.
fn sleep_interruptible(total: Duration) -> Result<()> {
    let deadline = Instant::now() + total;
    loop {
        check_interrupted()?;
        let now = Instant::now();
        if now >= deadline {
            return Ok(());
        }
        std::thread::sleep((deadline - now).min(SLEEP_SLICE));
    }
}

fn check_interrupted() -> Result<()> {
    if interrupt::is_interrupted() {
        return Err(InterruptedError.into());
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    // The loop itself needs a real TTY to be worth exercising; what it
    // computes each tick (cursor advancement, display translation, next
    // wake target, total duration) is covered by the timeline tests, and
    // frame construction by the view tests.
}
