//! # PromptView Component
//!
//! Draws the latest `GridFrame` handed to the terminal host: the question
//! line, the grid (or answered summary), and any notice.
//!
//! ## Stateless Component
//!
//! PromptView is purely presentational. Both props are borrowed for one draw:
//!
//! ```rust,ignore
//! let mut view = PromptView::new(&host.frame, &palette);
//! view.render(frame, frame.area());
//! ```
//!
//! Tones are resolved to styles here, at the last moment, so the frame's text
//! is exactly what the core laid out.

use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;

use crate::core::render::GridFrame;
use crate::tui::component::Component;
use crate::tui::palette::Palette;

pub struct PromptView<'a> {
    pub grid: &'a GridFrame,
    pub palette: &'a Palette,
}

impl<'a> PromptView<'a> {
    pub fn new(grid: &'a GridFrame, palette: &'a Palette) -> Self {
        Self { grid, palette }
    }

    fn lines(&self) -> Vec<Line<'a>> {
        self.grid
            .lines
            .iter()
            .map(|line| {
                Line::from(
                    line.segments
                        .iter()
                        .map(|s| Span::styled(s.text.as_str(), self.palette.style(s.tone)))
                        .collect::<Vec<_>>(),
                )
            })
            .collect()
    }
}

impl Component for PromptView<'_> {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        frame.render_widget(Paragraph::new(self.lines()), area);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::action::Action;
    use crate::core::geometry::Direction;
    use crate::core::navigation::NavigationEngine;
    use crate::core::render::GridRenderer;
    use crate::test_support::letters;
    use ratatui::Terminal;
    use ratatui::backend::TestBackend;
    use ratatui::style::Color;

    fn buffer_text(terminal: &Terminal<TestBackend>) -> String {
        terminal
            .backend()
            .buffer()
            .content()
            .iter()
            .map(|c| c.symbol())
            .collect()
    }

    #[test]
    fn test_renders_grid_text() {
        let engine = NavigationEngine::new(letters(4), Some(2), None);
        let grid = GridRenderer::default().render_prompt("Order", &engine);
        let palette = Palette::default();

        let backend = TestBackend::new(80, 8);
        let mut terminal = Terminal::new(backend).unwrap();
        terminal
            .draw(|f| PromptView::new(&grid, &palette).render(f, f.area()))
            .unwrap();

        let text = buffer_text(&terminal);
        assert!(text.contains("? Order"));
        assert!(text.contains("┌"));
        assert!(text.contains("❯"));
        assert!(text.contains('D'));
    }

    #[test]
    fn test_moving_cell_uses_moving_colour() {
        let mut engine = NavigationEngine::new(letters(4), Some(2), None);
        engine.update(Action::Move {
            direction: Direction::Right,
            shift: true,
        });
        let grid = GridRenderer::default().render_prompt("Order", &engine);
        let palette = Palette::default();

        let backend = TestBackend::new(80, 8);
        let mut terminal = Terminal::new(backend).unwrap();
        terminal
            .draw(|f| PromptView::new(&grid, &palette).render(f, f.area()))
            .unwrap();

        let buffer = terminal.backend().buffer();
        let marker = buffer
            .content()
            .iter()
            .find(|c| c.symbol() == "»")
            .expect("moving marker drawn");
        assert_eq!(marker.fg, Color::Yellow);
    }
}
