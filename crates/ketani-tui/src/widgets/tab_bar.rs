//! Tab bar widget — renders the strip of site pages at the top of the screen.

use crate::theme::Theme;
use ketani_core::pages::Page;
use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::Modifier,
    text::Line,
    widgets::{Tabs, Widget},
};

/// Renders the 1-line strip of site pages at the top of the screen.
///
/// The current page is highlighted. Keybinding hints (`/:search  ?:help`)
/// are right-aligned in the same row.
pub struct TabBar<'a> {
    current: Page,
    theme: &'a Theme,
}

impl<'a> TabBar<'a> {
    pub fn new(current: Page, theme: &'a Theme) -> Self {
        Self { current, theme }
    }
}

impl Widget for TabBar<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let labels: Vec<Line> = Page::ALL
            .iter()
            .map(|page| Line::from(format!(" {} ", page.title())))
            .collect();
        let selected = Page::ALL.iter().position(|p| *p == self.current);

        Tabs::new(labels)
            .select(selected)
            .highlight_style(self.theme.accent.add_modifier(Modifier::BOLD | Modifier::REVERSED))
            .divider("")
            .render(area, buf);

        // Keybinding hints at the right edge
        let hint = " /:search  ?:help ";
        let hint_x = area.right().saturating_sub(hint.len() as u16);
        buf.set_string(hint_x, area.y, hint, self.theme.dim);
    }
}
