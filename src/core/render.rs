//! # Grid Renderer
//!
//! Projects a `NavigationEngine` into a `GridFrame`: lines of text segments,
//! each tagged with a semantic [`Tone`]. Adapters decide what a tone looks
//! like (ANSI colour, ratatui style, nothing at all), so layout never sees a
//! style escape and label widths are always measured on plain text.
//!
//! ```text
//! ? Rearrange cells (Use arrow keys to move. Hold down Shift to move item.)
//! ┌────────────┬────────────┬────────────┐
//! │❯    1      │     2      │     3      │
//! ├────────────┼────────────┼────────────┤
//! │     4      │     5      │     6      │
//! └────────────┴────────────┴────────────┘
//! ```
//!
//! Every cell is `marker + centered label + pad`, so a column is always
//! `content_width + 2` wide and borders line up with the cells beneath them.

use clap::ValueEnum;
use serde::{Deserialize, Serialize};
use unicode_width::UnicodeWidthStr;

use crate::core::choices::Choice;
use crate::core::navigation::{NavigationEngine, PromptStatus};

pub const HINT: &str = "(Use arrow keys to move. Hold down Shift to move item.)";
pub const SEPARATOR_SUMMARY: &str = "<Separator>";
pub const DEFAULT_MIN_CELL_WIDTH: usize = 10;

/// Semantic styling of a segment.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tone {
    Plain,
    /// Question prefix and message.
    Question,
    /// Usage hint after the message.
    Hint,
    /// The selected cell.
    Selected,
    /// The selected cell while it is being moved.
    Moving,
    /// An answered cell that no longer holds its original choice.
    Changed,
    /// The answered summary line.
    Answer,
    /// One-frame notice, e.g. a refused move.
    Notice,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Segment {
    pub text: String,
    pub tone: Tone,
}

impl Segment {
    fn new(text: impl Into<String>, tone: Tone) -> Self {
        Self {
            text: text.into(),
            tone,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FrameLine {
    pub segments: Vec<Segment>,
}

impl FrameLine {
    fn push(&mut self, text: impl Into<String>, tone: Tone) {
        let text = text.into();
        // Merge runs of the same tone to keep adapters' span counts low
        match self.segments.last_mut() {
            Some(last) if last.tone == tone => last.text.push_str(&text),
            _ => self.segments.push(Segment::new(text, tone)),
        }
    }

    pub fn plain_text(&self) -> String {
        self.segments.iter().map(|s| s.text.as_str()).collect()
    }
}

/// One complete rendered prompt.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct GridFrame {
    pub lines: Vec<FrameLine>,
}

impl GridFrame {
    /// The frame as unstyled text, without a trailing newline.
    pub fn to_plain_string(&self) -> String {
        self.lines
            .iter()
            .map(FrameLine::plain_text)
            .collect::<Vec<_>>()
            .join("\n")
    }

    pub fn height(&self) -> usize {
        self.lines.len()
    }
}

/// How an answered prompt is shown.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize, Serialize, ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum SummaryStyle {
    /// The full grid, with moved cells marked.
    #[default]
    Grid,
    /// One line of short labels.
    Minimal,
}

impl std::str::FromStr for SummaryStyle {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "grid" => Ok(SummaryStyle::Grid),
            "minimal" => Ok(SummaryStyle::Minimal),
            other => Err(format!("unknown summary style '{other}' (expected grid or minimal)")),
        }
    }
}

/// Markers and sizing used by the renderer. Markers must be one column wide.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Theme {
    pub pointer: String,
    pub moving_pointer: String,
    pub changed_marker: String,
    pub min_cell_width: usize,
}

impl Default for Theme {
    fn default() -> Self {
        Self {
            pointer: "❯".to_string(),
            moving_pointer: "»".to_string(),
            changed_marker: "✓".to_string(),
            min_cell_width: DEFAULT_MIN_CELL_WIDTH,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RenderMode {
    Pending,
    Answered,
    /// Answered, collapsed to a single summary line.
    AnsweredSummary,
}

impl RenderMode {
    pub fn for_status(status: PromptStatus, summary: SummaryStyle) -> Self {
        match (status, summary) {
            (PromptStatus::Pending, _) => RenderMode::Pending,
            (PromptStatus::Answered, SummaryStyle::Grid) => RenderMode::Answered,
            (PromptStatus::Answered, SummaryStyle::Minimal) => RenderMode::AnsweredSummary,
        }
    }
}

#[derive(Debug, Clone, Default)]
pub struct GridRenderer {
    pub theme: Theme,
    pub summary: SummaryStyle,
}

impl GridRenderer {
    pub fn new(theme: Theme, summary: SummaryStyle) -> Self {
        Self { theme, summary }
    }

    /// Render the grid alone as plain text, without a trailing newline.
    pub fn render(&self, engine: &NavigationEngine, mode: RenderMode) -> String {
        self.grid_lines(engine, mode)
            .iter()
            .map(FrameLine::plain_text)
            .collect::<Vec<_>>()
            .join("\n")
    }

    /// Render the full prompt: question header, grid (or summary), notice.
    pub fn render_prompt(&self, message: &str, engine: &NavigationEngine) -> GridFrame {
        let mode = RenderMode::for_status(engine.status(), self.summary);

        let mut header = FrameLine::default();
        header.push(format!("? {message} "), Tone::Question);

        let mut lines = Vec::new();
        match mode {
            RenderMode::Pending => {
                header.push(HINT, Tone::Hint);
                lines.push(header);
                lines.extend(self.grid_lines(engine, mode));
            }
            RenderMode::Answered => {
                lines.push(header);
                lines.extend(self.grid_lines(engine, mode));
            }
            RenderMode::AnsweredSummary => {
                header.push(summary_text(engine), Tone::Answer);
                lines.push(header);
            }
        }

        if let Some(notice) = engine.notice() {
            let mut line = FrameLine::default();
            line.push(notice, Tone::Notice);
            lines.push(line);
        }

        GridFrame { lines }
    }

    /// Width of the label area of every cell.
    pub fn content_width(&self, engine: &NavigationEngine) -> usize {
        engine
            .sequence()
            .iter()
            .map(|cell| display_width(cell.choice.label()))
            .max()
            .unwrap_or(0)
            .max(self.theme.min_cell_width)
    }

    fn grid_lines(&self, engine: &NavigationEngine, mode: RenderMode) -> Vec<FrameLine> {
        if mode == RenderMode::AnsweredSummary {
            let mut line = FrameLine::default();
            line.push(summary_text(engine), Tone::Answer);
            return vec![line];
        }

        let geometry = engine.geometry();
        let width = self.content_width(engine);
        let border = |left: &str, mid: &str, right: &str| {
            let mut line = FrameLine::default();
            let segment = "─".repeat(width + 2);
            let body = vec![segment; geometry.cols].join(mid);
            line.push(format!("{left}{body}{right}"), Tone::Plain);
            line
        };

        let mut lines = vec![border("┌", "┬", "┐")];
        for row in 0..geometry.rows {
            if row > 0 {
                lines.push(border("├", "┼", "┤"));
            }
            let mut line = FrameLine::default();
            line.push("│", Tone::Plain);
            for col in 0..geometry.cols {
                let index = row * geometry.cols + col;
                match engine.sequence().get(index) {
                    Some(cell) => {
                        let (marker, tone) = self.decoration(engine, index, mode);
                        let label = center(cell.choice.label(), width);
                        line.push(format!("{marker}{label} "), tone);
                    }
                    None => line.push(" ".repeat(width + 2), Tone::Plain),
                }
                line.push("│", Tone::Plain);
            }
            lines.push(line);
        }
        lines.push(border("└", "┴", "┘"));
        lines
    }

    fn decoration<'a>(
        &'a self,
        engine: &NavigationEngine,
        index: usize,
        mode: RenderMode,
    ) -> (&'a str, Tone) {
        match mode {
            RenderMode::Pending if index == engine.selected_index() => {
                if engine.is_moving() {
                    (self.theme.moving_pointer.as_str(), Tone::Moving)
                } else {
                    (self.theme.pointer.as_str(), Tone::Selected)
                }
            }
            RenderMode::Answered if engine.sequence().is_changed(index) => {
                (self.theme.changed_marker.as_str(), Tone::Changed)
            }
            _ => (" ", Tone::Plain),
        }
    }
}

/// Columns `label` occupies on screen. Escape sequences in pre-styled labels
/// take no columns.
fn display_width(label: &str) -> usize {
    strip_ansi_escapes::strip_str(label).width()
}

/// Center `label` in `width` columns. The label is embedded unchanged.
fn center(label: &str, width: usize) -> String {
    let gap = width.saturating_sub(display_width(label));
    let left = gap / 2;
    let right = gap - left;
    format!("{}{}{}", " ".repeat(left), label, " ".repeat(right))
}

fn summary_text(engine: &NavigationEngine) -> String {
    engine
        .sequence()
        .iter()
        .map(|cell| match &cell.choice {
            Choice::Item(item) => item.short.as_str(),
            Choice::Separator => SEPARATOR_SUMMARY,
        })
        .collect::<Vec<_>>()
        .join(", ")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::action::Action;
    use crate::core::choices::{ChoiceItem, ChoiceSequence};
    use crate::core::geometry::Direction;
    use crate::core::navigation::SEPARATOR_MOVE_NOTICE;
    use crate::core::question::DefaultValue;
    use crate::test_support::letters;

    fn digits_engine() -> NavigationEngine {
        let choices = (1..=9).map(|i| Choice::from(i.to_string())).collect();
        NavigationEngine::new(ChoiceSequence::new(choices).unwrap(), Some(3), None)
    }

    fn count(haystack: &str, needle: char) -> usize {
        haystack.chars().filter(|&c| c == needle).count()
    }

    #[test]
    fn test_center_uses_display_width() {
        assert_eq!(center("ab", 6), "  ab  ");
        assert_eq!(center("abc", 6), " abc  ");
        assert_eq!(center("日本", 6), " 日本 ");
        assert_eq!(center("", 4), "    ");
    }

    #[test]
    fn test_three_by_three_layout() {
        let mut engine = digits_engine();
        engine.update(Action::Jump(5));
        assert_eq!(engine.selected_index(), 4);

        let out = GridRenderer::default().render(&engine, RenderMode::Pending);
        let lines: Vec<&str> = out.lines().collect();

        assert_eq!(lines.len(), 7);
        assert!(lines[0].starts_with('┌') && lines[0].ends_with('┐'));
        assert!(lines[6].starts_with('└') && lines[6].ends_with('┘'));

        let body: Vec<&&str> = lines.iter().filter(|l| l.starts_with('│')).collect();
        let separators: Vec<&&str> = lines.iter().filter(|l| l.starts_with('├')).collect();
        assert_eq!(body.len(), 3);
        assert_eq!(separators.len(), 2);
        for row in &body {
            assert_eq!(count(row, '│'), 4);
        }
        assert_eq!(count(lines[0], '┬'), 2);

        // All lines share one display width
        let widths: Vec<usize> = lines.iter().map(|l| l.width()).collect();
        assert!(widths.iter().all(|w| *w == widths[0]));
        assert_eq!(widths[0], 3 * (DEFAULT_MIN_CELL_WIDTH + 2) + 4);

        // Pointer sits on the middle cell only
        assert_eq!(count(&out, '❯'), 1);
        assert!(lines[3].contains("❯    5"));
        assert!(!out.ends_with('\n'));
    }

    #[test]
    fn test_content_width_grows_with_labels() {
        let seq = ChoiceSequence::new(vec![
            Choice::from("short"),
            Choice::from("a much longer label"),
        ])
        .unwrap();
        let engine = NavigationEngine::new(seq, Some(2), None);
        let renderer = GridRenderer::default();
        assert_eq!(renderer.content_width(&engine), 19);

        let engine = digits_engine();
        assert_eq!(renderer.content_width(&engine), DEFAULT_MIN_CELL_WIDTH);
    }

    #[test]
    fn test_styled_label_centers_like_plain_label() {
        let styled = "\x1b[31mred\x1b[0m";
        let renderer = GridRenderer::default();

        let plain_engine = NavigationEngine::new(
            ChoiceSequence::new(vec![Choice::from("red"), Choice::from("blu")]).unwrap(),
            Some(2),
            None,
        );
        let styled_engine = NavigationEngine::new(
            ChoiceSequence::new(vec![Choice::from(styled), Choice::from("blu")]).unwrap(),
            Some(2),
            None,
        );
        assert_eq!(renderer.content_width(&styled_engine), DEFAULT_MIN_CELL_WIDTH);

        let plain = renderer.render(&plain_engine, RenderMode::Pending);
        let out = renderer.render(&styled_engine, RenderMode::Pending);
        // Same layout once the escapes are swapped back for the bare text
        assert_eq!(out.replace(styled, "red"), plain);
        assert!(out.contains(&format!("❯   {styled}    ")));

        let wide = NavigationEngine::new(
            ChoiceSequence::new(vec![Choice::from("\x1b[1mtwelve chars\x1b[0m")]).unwrap(),
            None,
            None,
        );
        assert_eq!(renderer.content_width(&wide), 12);
    }

    #[test]
    fn test_refused_move_keeps_plain_pointer() {
        let seq = ChoiceSequence::new(vec![
            Choice::from("a"),
            Choice::Separator,
            Choice::from("b"),
        ])
        .unwrap();
        let mut engine = NavigationEngine::new(seq, Some(3), None);
        engine.update(Action::Move {
            direction: Direction::Right,
            shift: true,
        });

        let out = GridRenderer::default()
            .render_prompt("q", &engine)
            .to_plain_string();
        assert!(out.contains('❯'));
        assert!(!out.contains('»'));
        assert!(out.ends_with(SEPARATOR_MOVE_NOTICE));
    }

    #[test]
    fn test_moving_marker_after_shift() {
        let mut engine = NavigationEngine::new(letters(6), Some(3), None);
        let renderer = GridRenderer::default();

        engine.update(Action::Move {
            direction: Direction::Right,
            shift: true,
        });
        let frame = renderer.render_prompt("q", &engine);
        let moving: Vec<&Segment> = frame
            .lines
            .iter()
            .flat_map(|l| &l.segments)
            .filter(|s| s.tone == Tone::Moving)
            .collect();
        assert_eq!(moving.len(), 1);
        assert!(moving[0].text.starts_with('»'));
        assert!(moving[0].text.contains('A'));

        engine.update(Action::Move {
            direction: Direction::Down,
            shift: false,
        });
        let out = renderer.render(&engine, RenderMode::Pending);
        assert!(!out.contains('»'));
        assert_eq!(count(&out, '❯'), 1);
    }

    #[test]
    fn test_answered_grid_marks_changed_cells() {
        let mut engine = NavigationEngine::new(letters(6), Some(3), None);
        engine.update(Action::Move {
            direction: Direction::Right,
            shift: true,
        });
        engine.update(Action::Submit);

        let renderer = GridRenderer::default();
        let frame = renderer.render_prompt("q", &engine);
        let changed: Vec<&Segment> = frame
            .lines
            .iter()
            .flat_map(|l| &l.segments)
            .filter(|s| s.tone == Tone::Changed)
            .collect();
        assert_eq!(changed.len(), 2);

        let text = frame.to_plain_string();
        assert!(text.starts_with("? q "));
        assert!(!text.contains(HINT));
        assert!(!text.contains('❯'));
        assert_eq!(count(&text, '✓'), 2);
        assert_eq!(count(&text, '┌'), 1);
    }

    #[test]
    fn test_minimal_summary() {
        let seq = ChoiceSequence::new(vec![
            Choice::Item(ChoiceItem {
                name: "Alpha".to_string(),
                value: serde_json::Value::from(1),
                short: "A".to_string(),
            }),
            Choice::Separator,
            Choice::from("Beta"),
        ])
        .unwrap();
        let mut engine = NavigationEngine::new(seq, Some(3), None);
        engine.update(Action::Submit);

        let renderer = GridRenderer::new(Theme::default(), SummaryStyle::Minimal);
        let frame = renderer.render_prompt("Pick", &engine);
        assert_eq!(frame.height(), 1);
        assert_eq!(frame.to_plain_string(), "? Pick A, <Separator>, Beta");
    }

    #[test]
    fn test_separator_renders_blank_cell() {
        let seq = ChoiceSequence::new(vec![
            Choice::from("a"),
            Choice::from("b"),
            Choice::Separator,
            Choice::from("c"),
            Choice::from("d"),
        ])
        .unwrap();
        let engine = NavigationEngine::new(seq, Some(5), None);
        let out = GridRenderer::default().render(&engine, RenderMode::Pending);
        let row = out.lines().nth(1).unwrap();
        let cells: Vec<&str> = row.trim_matches('│').split('│').collect();
        assert_eq!(cells.len(), 5);
        assert_eq!(cells[2], " ".repeat(DEFAULT_MIN_CELL_WIDTH + 2));
    }

    #[test]
    fn test_short_last_row_is_padded() {
        let engine = NavigationEngine::new(letters(5), Some(3), Some(&DefaultValue::Index(0)));
        let out = GridRenderer::default().render(&engine, RenderMode::Pending);
        let lines: Vec<&str> = out.lines().collect();
        assert_eq!(lines.len(), 5);
        assert_eq!(lines[3].width(), lines[0].width());
        assert_eq!(count(lines[3], '│'), 4);
    }

    #[test]
    fn test_pending_header_and_notice() {
        let seq = ChoiceSequence::new(vec![Choice::from("a"), Choice::Separator]).unwrap();
        let mut engine = NavigationEngine::new(seq, Some(2), None);
        engine.update(Action::Move {
            direction: Direction::Right,
            shift: true,
        });
        let frame = GridRenderer::default().render_prompt("Order", &engine);
        let first = &frame.lines[0];
        assert_eq!(first.segments[0], Segment::new("? Order ", Tone::Question));
        assert_eq!(first.segments[1], Segment::new(HINT, Tone::Hint));
        let last = frame.lines.last().unwrap();
        assert_eq!(last.segments[0].tone, Tone::Notice);
    }

    #[test]
    fn test_summary_style_from_str() {
        assert_eq!("grid".parse::<SummaryStyle>(), Ok(SummaryStyle::Grid));
        assert_eq!("Minimal".parse::<SummaryStyle>(), Ok(SummaryStyle::Minimal));
        assert!("list".parse::<SummaryStyle>().is_err());
    }
}
