//! Help popup — centred floating overlay listing all keybindings.
//!
//! Toggle with `?`; close with `?` or `Escape`.

use crate::theme::Theme;
use ratatui::{
    buffer::Buffer,
    layout::Rect,
    text::{Line, Span},
    widgets::{Block, Clear, Paragraph, Widget},
};

const BINDINGS: &[(&str, &str)] = &[
    ("q  /  Ctrl+c", "Quit"),
    ("Tab", "Cycle focus: menu → page"),
    ("/", "Open search"),
    ("Escape", "Close search / policy / help"),
    ("↑ k  /  ↓ j", "Move in menu, results, or scroll page"),
    ("Enter", "Open highlighted page or result"),
    ("Ctrl+u", "Clear the search input (while searching)"),
    ("[  /  ]", "Previous / next page"),
    ("PageUp  /  PageDown", "Scroll the page view"),
    ("p", "Privacy and cookie policies (← → to switch)"),
    (":", "Command line (q, help, theme, page, policy, search)"),
    ("?", "Toggle this help popup"),
];

pub struct HelpPopup<'a> {
    theme: &'a Theme,
}

impl<'a> HelpPopup<'a> {
    pub fn new(theme: &'a Theme) -> Self {
        Self { theme }
    }
}

impl Widget for HelpPopup<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let popup = centered_rect(76, BINDINGS.len() as u16 + 2, area);
        Clear.render(popup, buf);

        let block = Block::bordered()
            .title(" ketani — keybindings (? to close) ")
            .border_style(self.theme.border_focused);

        let inner = block.inner(popup);
        block.render(popup, buf);

        let lines: Vec<Line> = BINDINGS
            .iter()
            .map(|(key, desc)| {
                Line::from(vec![
                    Span::styled(format!("  {:<22}", key), self.theme.heading),
                    Span::raw(*desc),
                ])
            })
            .collect();

        Paragraph::new(lines).render(inner, buf);
    }
}

pub(crate) fn centered_rect(width: u16, height: u16, area: Rect) -> Rect {
    let x = area.x + area.width.saturating_sub(width) / 2;
    let y = area.y + area.height.saturating_sub(height) / 2;
    Rect {
        x,
        y,
        width: width.min(area.width),
        height: height.min(area.height),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn centered_rect_is_clamped_to_area() {
        let area = Rect::new(0, 0, 40, 10);
        let r = centered_rect(80, 20, area);
        assert_eq!(r, Rect::new(0, 0, 40, 10));
    }

    #[test]
    fn centered_rect_centres() {
        let area = Rect::new(0, 0, 100, 40);
        let r = centered_rect(50, 20, area);
        assert_eq!((r.x, r.y), (25, 10));
    }
}
