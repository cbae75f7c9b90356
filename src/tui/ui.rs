use ratatui::Frame;

use crate::core::render::GridFrame;
use crate::tui::component::Component;
use crate::tui::components::PromptView;
use crate::tui::palette::Palette;

pub fn draw_ui(frame: &mut Frame, grid: &GridFrame, palette: &Palette) {
    let area = frame.area();
    PromptView::new(grid, palette).render(frame, area);
}
