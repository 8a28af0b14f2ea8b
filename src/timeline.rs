//! Timed-line sequence and clock-to-line resolution.
//!
//! A [`Timeline`] owns the normalized lyric lines in chronological order.
//! Playback keeps a raw cursor pointing at the next not-yet-reached line;
//! the helpers here advance it against elapsed wall-clock time and
//! translate it into the line to display.

/// One lyric or text unit with its start time.
#[derive(Debug, Clone, PartialEq)]
pub struct TimedLine {
    /// Seconds from playback start; non-decreasing across the sequence.
    pub time: f64,
    /// Display text. May contain interior hard line breaks.
    pub text: String,
    /// Marks the line for distinct active-state styling.
    pub highlight: bool,
}

/// Ordered sequence of timed lines, insertion order = chronological order.
///
/// Nothing here sorts: the loader preserves input order and cursor
/// advancement assumes the times are non-decreasing.
#[derive(Debug, Clone, Default)]
pub struct Timeline {
    lines: Vec<TimedLine>,
}

impl Timeline {
    pub fn new(lines: Vec<TimedLine>) -> Self {
        Self { lines }
    }

    pub fn lines(&self) -> &[TimedLine] {
        &self.lines
    }

    pub fn len(&self) -> usize {
        self.lines.len()
    }

    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    /// Advances the cursor past every line whose time has elapsed.
    ///
    /// Never moves backward. After a long sleep this may advance several
    /// steps at once; the last qualifying line wins and the superseded
    /// ones are never displayed.
    pub fn advance(&self, cursor: usize, elapsed: f64) -> usize {
        let mut cursor = cursor;
        while cursor < self.lines.len() && elapsed >= self.lines[cursor].time {
            cursor += 1;
        }
        cursor
    }

    /// Translates the raw cursor into the index of the line to display.
    ///
    /// The cursor points at the next not-yet-reached line, so the shown
    /// line is the one before it. `None` means nothing has started yet.
    /// A first line timed at exactly 0.0 displays immediately, without a
    /// one-tick lag. A cursor past the end clamps to the last line.
    pub fn display_index(&self, cursor: usize) -> Option<usize> {
        if self.lines.is_empty() {
            return None;
        }
        if cursor == 0 {
            return (self.lines[0].time == 0.0).then_some(0);
        }
        Some((cursor - 1).min(self.lines.len() - 1))
    }

    /// Time of the next schedule event: the entry at the cursor if one
    /// remains, else the total duration.
    pub fn next_target(&self, cursor: usize, total_duration: f64) -> f64 {
        self.lines.get(cursor).map_or(total_duration, |l| l.time)
    }

    /// Total playback duration: the last line's time plus a trailing
    /// buffer, or the buffer alone for an empty sequence.
    pub fn total_duration(&self, buffer_seconds: f64) -> f64 {
        self.lines
            .last()
            .map_or(buffer_seconds, |l| l.time + buffer_seconds)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn line(time: f64) -> TimedLine {
        TimedLine {
            time,
            text: format!("line at {time}"),
            highlight: false,
        }
    }

    fn timeline(times: &[f64]) -> Timeline {
        Timeline::new(times.iter().copied().map(line).collect())
    }

    #[test]
    fn test_advance_steps_past_elapsed_lines() {
        let tl = timeline(&[0.0, 4.5, 9.0]);
        assert_eq!(tl.advance(0, 6.0), 2);
    }

    #[test]
    fn test_advance_never_moves_backward() {
        let tl = timeline(&[0.0, 4.5, 9.0]);
        let cursor = tl.advance(0, 10.0);
        assert_eq!(cursor, 3);
        // A stale elapsed sample cannot rewind the cursor.
        assert_eq!(tl.advance(cursor, 1.0), 3);
    }

    #[test]
    fn test_display_index_mid_sequence() {
        let tl = timeline(&[0.0, 4.5, 9.0]);
        let cursor = tl.advance(0, 6.0);
        assert_eq!(tl.display_index(cursor), Some(1));
    }

    #[test]
    fn test_display_index_time_zero_first_line_is_immediate() {
        let tl = timeline(&[0.0, 4.5]);
        assert_eq!(tl.display_index(0), Some(0));
    }

    #[test]
    fn test_display_index_before_first_line() {
        let tl = timeline(&[2.0, 4.5]);
        assert_eq!(tl.display_index(0), None);
    }

    #[test]
    fn test_display_index_clamps_past_end() {
        let tl = timeline(&[0.0, 4.5, 9.0]);
        let cursor = tl.advance(0, 100.0);
        assert_eq!(tl.display_index(cursor), Some(2));
    }

    #[test]
    fn test_display_index_empty_sequence() {
        let tl = Timeline::default();
        assert_eq!(tl.display_index(0), None);
    }

    #[test]
    fn test_display_index_monotonic_over_increasing_samples() {
        let tl = timeline(&[0.5, 2.0, 2.0, 7.25, 11.0]);
        let mut cursor = 0;
        let mut last = None;
        for tick in 0..200 {
            let elapsed = f64::from(tick) * 0.1;
            cursor = tl.advance(cursor, elapsed);
            let shown = tl.display_index(cursor);
            if let (Some(prev), Some(cur)) = (last, shown) {
                assert!(cur >= prev, "display index went backward at {elapsed}");
            }
            if shown.is_some() {
                last = shown;
            }
        }
        assert_eq!(last, Some(4));
    }

    #[test]
    fn test_next_target_is_cursor_entry_or_total() {
        let tl = timeline(&[0.0, 4.5, 9.0]);
        assert_eq!(tl.next_target(1, 12.0), 4.5);
        assert_eq!(tl.next_target(3, 12.0), 12.0);
    }

    #[test]
    fn test_total_duration_adds_buffer() {
        let tl = timeline(&[0.0, 7.5, 15.24]);
        assert!((tl.total_duration(3.0) - 18.24).abs() < 1e-9);
    }

    #[test]
    fn test_total_duration_empty_is_buffer() {
        let tl = Timeline::default();
        assert!((tl.total_duration(3.0) - 3.0).abs() < 1e-9);
    }
}
