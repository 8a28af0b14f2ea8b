//! Pure frame layout.
//!
//! Converts (active line index, timeline, header, geometry) into
//! positioned, styled rows. No terminal IO happens here; `ui::screen`
//! paints the rows. Keeping this pure makes the viewport math testable
//! without a TTY.

use unicode_width::UnicodeWidthStr;

use crate::timeline::TimedLine;
use crate::wrap::wrap;

/// Message shown when playback reaches the end of the timeline.
const END_MESSAGE: &str = "End of playback";

/// Style classes the painter maps to terminal attributes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RowStyle {
    /// Bold header rows (title and artist).
    Info,
    /// The active lyric line.
    Active,
    /// The active lyric line, highlight variant.
    ActiveHighlight,
    /// Lines after the active one, dimmed.
    Upcoming,
}

/// One positioned row of a frame.
#[derive(Debug, Clone, PartialEq)]
pub struct FrameRow {
    pub row: u16,
    pub col: u16,
    pub style: RowStyle,
    pub text: String,
}

/// The fixed region content is painted into. Set once per session.
#[derive(Debug, Clone)]
pub struct Geometry {
    pub start_row: u16,
    pub start_col: u16,
    /// Wrap width for header and lyric text, in columns.
    pub text_width: usize,
    /// Row budget for the whole region (header + separator + lyrics).
    pub text_height: usize,
}

/// Title and artist lines rendered above the scrolling lyric window.
///
/// Re-read every frame, so a metadata update takes effect on the next
/// paint without invalidating anything.
#[derive(Debug, Clone, Default)]
pub struct Header {
    pub title_lines: Vec<String>,
    pub artist_lines: Vec<String>,
}

impl Header {
    pub fn new(title: &str, artist: &str) -> Self {
        Self {
            title_lines: vec![title.to_string()],
            artist_lines: vec![artist.to_string()],
        }
    }

    /// Updates title and/or artist. Empty values leave the current content.
    pub fn set_metadata(&mut self, title: &str, artist: &str) {
        if !title.is_empty() {
            self.title_lines = vec![title.to_string()];
        }
        if !artist.is_empty() {
            self.artist_lines = vec![artist.to_string()];
        }
    }

    fn byline(&self) -> String {
        let title = self.title_lines.first().map_or("", String::as_str);
        let artist = self.artist_lines.first().map_or("", String::as_str);
        format!("{artist} - {title}")
    }
}

/// Lays out one full frame anchored at the active line.
///
/// The window shows the active line first, then upcoming lines — lines
/// before the active one are never shown. Rows past the height budget are
/// counted but not emitted, which keeps every later row's position stable
/// when content near the boundary grows or shrinks.
pub fn layout_frame(
    active: usize,
    lines: &[TimedLine],
    header: &Header,
    geometry: &Geometry,
) -> Vec<FrameRow> {
    let mut rows = Vec::new();
    let mut row_cursor = 0usize;

    for part in header.title_lines.iter().chain(&header.artist_lines) {
        for piece in wrap(part, geometry.text_width) {
            push_row(&mut rows, geometry, &mut row_cursor, RowStyle::Info, piece);
        }
    }

    // Blank separator between header and lyrics, only while under budget.
    if row_cursor < geometry.text_height {
        row_cursor += 1;
    }

    let visible_rows = geometry.text_height.saturating_sub(row_cursor);
    for i in active..active + visible_rows {
        let Some(line) = lines.get(i) else {
            // Dead rows at the tail stay blank but keep their position.
            row_cursor += 1;
            continue;
        };

        let style = if i == active {
            if line.highlight || line.time == 0.0 {
                RowStyle::ActiveHighlight
            } else {
                RowStyle::Active
            }
        } else {
            RowStyle::Upcoming
        };

        for piece in wrap(&line.text, geometry.text_width) {
            push_row(&mut rows, geometry, &mut row_cursor, style, piece);
        }
    }

    rows
}

/// Lays out the centered end-of-playback screen for the given terminal size.
pub fn layout_end_screen(header: &Header, term_cols: u16, term_rows: u16) -> Vec<FrameRow> {
    let byline = header.byline();
    let mid = term_rows / 2;
    vec![
        FrameRow {
            row: mid,
            col: centered_col(END_MESSAGE, term_cols),
            style: RowStyle::Info,
            text: END_MESSAGE.to_string(),
        },
        FrameRow {
            row: mid + 1,
            col: centered_col(&byline, term_cols),
            style: RowStyle::Info,
            text: byline,
        },
    ]
}

fn centered_col(text: &str, term_cols: u16) -> u16 {
    (usize::from(term_cols).saturating_sub(text.width()) / 2) as u16
}

fn push_row(
    rows: &mut Vec<FrameRow>,
    geometry: &Geometry,
    row_cursor: &mut usize,
    style: RowStyle,
    text: String,
) {
    if *row_cursor < geometry.text_height {
        rows.push(FrameRow {
            row: geometry.start_row + *row_cursor as u16,
            col: geometry.start_col,
            style,
            text,
        });
    }
    *row_cursor += 1;
}

#[cfg(test)]
mod tests {
    use super::*;

    fn line(time: f64, text: &str) -> TimedLine {
        TimedLine {
            time,
            text: text.to_string(),
            highlight: false,
        }
    }

    fn geometry(width: usize, height: usize) -> Geometry {
        Geometry {
            start_row: 0,
            start_col: 1,
            text_width: width,
            text_height: height,
        }
    }

    fn lyric_rows(rows: &[FrameRow]) -> Vec<&FrameRow> {
        rows.iter().filter(|r| r.style != RowStyle::Info).collect()
    }

    #[test]
    fn test_lyric_window_bounded_by_height_budget() {
        // Header consumes 3 rows (2 header lines + separator), leaving a
        // lyric window of 2 in a height-5 region.
        let header = Header::new("Title", "Artist");
        let lines: Vec<TimedLine> = (0..40).map(|i| line(f64::from(i) + 1.0, "la la la")).collect();

        let rows = layout_frame(0, &lines, &header, &geometry(60, 5));
        assert_eq!(lyric_rows(&rows).len(), 2);
        assert!(rows.iter().all(|r| r.row < 5));
    }

    #[test]
    fn test_active_line_is_first_lyric_row() {
        let header = Header::new("Title", "Artist");
        let lines = vec![line(1.0, "one"), line(2.0, "two"), line(3.0, "three")];

        let rows = layout_frame(1, &lines, &header, &geometry(60, 10));
        let lyrics = lyric_rows(&rows);
        assert_eq!(lyrics[0].text, "two");
        assert_eq!(lyrics[0].style, RowStyle::Active);
        // Lines before the active one never appear.
        assert!(rows.iter().all(|r| r.text != "one"));
    }

    #[test]
    fn test_upcoming_lines_are_dimmed() {
        let header = Header::new("Title", "Artist");
        let lines = vec![line(1.0, "one"), line(2.0, "two")];

        let rows = layout_frame(0, &lines, &header, &geometry(60, 10));
        let lyrics = lyric_rows(&rows);
        assert_eq!(lyrics[1].text, "two");
        assert_eq!(lyrics[1].style, RowStyle::Upcoming);
    }

    #[test]
    fn test_highlight_and_time_zero_use_highlight_style() {
        let header = Header::new("Title", "Artist");
        let mut marked = line(5.0, "marked");
        marked.highlight = true;

        let rows = layout_frame(0, &[marked], &header, &geometry(60, 10));
        assert_eq!(lyric_rows(&rows)[0].style, RowStyle::ActiveHighlight);

        let opening = vec![line(0.0, "opening")];
        let rows = layout_frame(0, &opening, &header, &geometry(60, 10));
        assert_eq!(lyric_rows(&rows)[0].style, RowStyle::ActiveHighlight);
    }

    #[test]
    fn test_tail_rows_stay_blank_without_shifting() {
        // Active on the last line: the rest of the window is out of range
        // and must not emit rows, only keep counting.
        let header = Header::new("Title", "Artist");
        let lines = vec![line(1.0, "only")];

        let rows = layout_frame(0, &lines, &header, &geometry(60, 10));
        let lyrics = lyric_rows(&rows);
        assert_eq!(lyrics.len(), 1);
        assert_eq!(lyrics[0].text, "only");
    }

    #[test]
    fn test_wrapped_active_line_keeps_style_on_every_piece() {
        let header = Header::new("T", "A");
        let lines = vec![line(1.0, "a long lyric line that will wrap across rows")];

        let rows = layout_frame(0, &lines, &header, &geometry(12, 15));
        let lyrics = lyric_rows(&rows);
        assert!(lyrics.len() > 1);
        assert!(lyrics.iter().all(|r| r.style == RowStyle::Active));
    }

    #[test]
    fn test_header_overflow_is_counted_but_not_painted() {
        // A header taller than the whole region leaves no room for lyrics
        // and emits no rows past the budget.
        let header = Header {
            title_lines: (0..8).map(|i| format!("t{i}")).collect(),
            artist_lines: vec!["artist".to_string()],
        };
        let lines = vec![line(1.0, "lyric")];

        let rows = layout_frame(0, &lines, &header, &geometry(60, 4));
        assert_eq!(rows.len(), 4);
        assert!(rows.iter().all(|r| r.style == RowStyle::Info));
    }

    #[test]
    fn test_rows_are_offset_by_geometry_origin() {
        let header = Header::new("Title", "Artist");
        let lines = vec![line(1.0, "one")];

        let rows = layout_frame(0, &lines, &header, &geometry(60, 10));
        assert_eq!(rows[0].row, 0);
        assert!(rows.iter().all(|r| r.col == 1));
    }

    #[test]
    fn test_end_screen_is_centered() {
        let header = Header::new("Song", "Band");
        let rows = layout_end_screen(&header, 80, 20);

        assert_eq!(rows.len(), 2);
        assert_eq!(rows[0].row, 10);
        assert_eq!(rows[1].row, 11);
        assert_eq!(rows[1].text, "Band - Song");
        let expected = (80 - rows[1].text.len()) / 2;
        assert_eq!(usize::from(rows[1].col), expected);
    }

    #[test]
    fn test_set_metadata_ignores_empty_values() {
        let mut header = Header::new("Song", "Band");
        header.set_metadata("New Song", "");
        assert_eq!(header.title_lines, vec!["New Song".to_string()]);
        assert_eq!(header.artist_lines, vec!["Band".to_string()]);
    }
}
