//! Navigation menu — the list of site pages in the left pane.
//!
//! # Navigation
//! - `↑`/`k` and `↓`/`j` move the cursor.
//! - `Enter` or `→`/`l` opens the page under the cursor.

use crate::event::{AppEvent, Direction};
use crate::theme::Theme;
use ketani_core::pages::Page;
use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, List, ListItem, ListState, StatefulWidget, Widget},
};

// ---------------------------------------------------------------------------
// State
// ---------------------------------------------------------------------------

#[derive(Debug, Default)]
pub struct NavMenuState {
    /// Index into [`Page::ALL`].
    pub cursor: usize,
}

impl NavMenuState {
    /// Move the cursor onto `page`, e.g. after navigating from search.
    pub fn select(&mut self, page: Page) {
        if let Some(i) = Page::ALL.iter().position(|p| *p == page) {
            self.cursor = i;
        }
    }

    /// Handle an [`AppEvent`]. Returns the page to open when the user
    /// activates an item.
    pub fn handle(&mut self, event: &AppEvent) -> Option<Page> {
        match event {
            AppEvent::Nav(Direction::Up) => {
                self.cursor = self.cursor.saturating_sub(1);
                tracing::debug!(cursor = self.cursor, "menu: cursor up");
            }
            AppEvent::Nav(Direction::Down) => {
                if self.cursor + 1 < Page::ALL.len() {
                    self.cursor += 1;
                }
                tracing::debug!(cursor = self.cursor, "menu: cursor down");
            }
            AppEvent::Enter | AppEvent::Nav(Direction::Right) => {
                return Page::ALL.get(self.cursor).copied();
            }
            _ => {}
        }
        None
    }
}

// ---------------------------------------------------------------------------
// Widget
// ---------------------------------------------------------------------------

pub struct NavMenu<'a> {
    state: &'a NavMenuState,
    current: Page,
    focused: bool,
    theme: &'a Theme,
}

impl<'a> NavMenu<'a> {
    pub fn new(state: &'a NavMenuState, current: Page, focused: bool, theme: &'a Theme) -> Self {
        Self {
            state,
            current,
            focused,
            theme,
        }
    }
}

impl Widget for NavMenu<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let block = Block::bordered()
            .title("Ketani Logistics")
            .border_style(self.theme.border(self.focused));

        let inner = block.inner(area);
        block.render(area, buf);

        let items: Vec<ListItem> = Page::ALL
            .iter()
            .map(|page| {
                let marker = if *page == self.current { "● " } else { "  " };
                ListItem::new(Line::from(vec![
                    Span::styled(marker, self.theme.accent),
                    Span::raw(page.title()),
                ]))
            })
            .collect();

        let highlight = if self.focused {
            Style::default().add_modifier(Modifier::REVERSED)
        } else {
            Style::default()
        };
        let list = List::new(items).highlight_style(highlight);

        let mut list_state = ListState::default().with_selected(Some(self.state.cursor));
        StatefulWidget::render(list, inner, buf, &mut list_state);
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cursor_stays_in_bounds() {
        let mut s = NavMenuState::default();
        s.handle(&AppEvent::Nav(Direction::Up));
        assert_eq!(s.cursor, 0);
        for _ in 0..20 {
            s.handle(&AppEvent::Nav(Direction::Down));
        }
        assert_eq!(s.cursor, Page::ALL.len() - 1);
    }

    #[test]
    fn enter_opens_page_under_cursor() {
        let mut s = NavMenuState::default();
        s.handle(&AppEvent::Nav(Direction::Down));
        assert_eq!(s.handle(&AppEvent::Enter), Some(Page::Logistics));
    }

    #[test]
    fn select_moves_cursor() {
        let mut s = NavMenuState::default();
        s.select(Page::Contact);
        assert_eq!(Page::ALL[s.cursor], Page::Contact);
    }
}
