//! Page view — the scrollable content pane on the right.
//!
//! # Navigation (when pane is focused)
//!
//! | Key | Action |
//! |-----|--------|
//! | `↑` / `k` | Scroll up one line |
//! | `↓` / `j` | Scroll down one line |
//! | `PageUp` / `Ctrl+u` | Scroll up one page |
//! | `PageDown` / `Ctrl+d` | Scroll down one page |
//!
//! The home page additionally shows the current hero carousel slide above
//! its copy.

use std::cell::Cell;

use crate::event::{AppEvent, Direction};
use crate::theme::Theme;
use ketani_core::{
    carousel::{Carousel, Transition},
    pages::Page,
};
use ratatui::{
    buffer::Buffer,
    layout::Rect,
    text::{Line, Span},
    widgets::{Block, Paragraph, Widget, Wrap},
};

const PAGE_STEP: u16 = 10;

// ---------------------------------------------------------------------------
// State
// ---------------------------------------------------------------------------

#[derive(Debug, Default)]
pub struct PageViewState {
    /// Rows scrolled off the top.
    pub scroll: u16,
    /// Cached from the last render so `handle()` can clamp scrolling.
    max_scroll: Cell<u16>,
}

impl PageViewState {
    pub fn reset(&mut self) {
        self.scroll = 0;
    }

    pub fn handle(&mut self, event: &AppEvent) {
        let max = self.max_scroll.get();
        match event {
            AppEvent::Nav(Direction::Up) => {
                self.scroll = self.scroll.saturating_sub(1);
            }
            AppEvent::Nav(Direction::Down) => {
                self.scroll = (self.scroll + 1).min(max);
            }
            AppEvent::ScrollUp => {
                self.scroll = self.scroll.saturating_sub(PAGE_STEP);
            }
            AppEvent::ScrollDown => {
                self.scroll = (self.scroll + PAGE_STEP).min(max);
            }
            _ => return,
        }
        tracing::debug!(scroll = self.scroll, "page: scrolled");
    }
}

// ---------------------------------------------------------------------------
// Widget
// ---------------------------------------------------------------------------

pub struct PageView<'a> {
    page: Page,
    state: &'a PageViewState,
    carousel: &'a Carousel,
    focused: bool,
    theme: &'a Theme,
}

impl<'a> PageView<'a> {
    pub fn new(
        page: Page,
        state: &'a PageViewState,
        carousel: &'a Carousel,
        focused: bool,
        theme: &'a Theme,
    ) -> Self {
        Self {
            page,
            state,
            carousel,
            focused,
            theme,
        }
    }

    fn lines(&self) -> Vec<Line<'static>> {
        let content = self.page.content();
        let mut lines = Vec::new();

        if self.page == Page::Home {
            lines.extend(carousel_lines(self.carousel, self.theme));
            lines.push(Line::default());
        }

        lines.push(Line::from(Span::styled(content.headline, self.theme.heading)));
        for (heading, body) in content.sections {
            lines.push(Line::default());
            lines.push(Line::from(Span::styled(*heading, self.theme.accent)));
            lines.push(Line::from(*body));
        }
        lines
    }
}

impl Widget for PageView<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let block = Block::bordered()
            .title(format!(" {} · {} ", self.page.title(), self.page.path()))
            .border_style(self.theme.border(self.focused));
        let inner = block.inner(area);
        block.render(area, buf);

        let lines = self.lines();
        let max = (lines.len() as u16).saturating_sub(1);
        // Cache for handle() — safe because draw always runs before handle()
        self.state.max_scroll.set(max);

        Paragraph::new(lines)
            .wrap(Wrap { trim: true })
            .scroll((self.state.scroll.min(max), 0))
            .render(inner, buf);
    }
}

// ---------------------------------------------------------------------------
// Carousel rendering
// ---------------------------------------------------------------------------

fn carousel_lines(carousel: &Carousel, theme: &Theme) -> Vec<Line<'static>> {
    let Some(slide) = carousel.current() else {
        return Vec::new();
    };

    let dots: String = (0..carousel.len())
        .map(|i| if i == carousel.index() { '■' } else { '□' })
        .collect();
    let arrow = match carousel.transition() {
        Transition::Vertical => "↓",
        Transition::Horizontal => "→",
    };

    vec![
        Line::from(vec![
            Span::styled(format!("{dots} {arrow} "), theme.accent),
            Span::styled(slide.caption.clone(), theme.heading),
        ]),
        Line::from(Span::styled(format!("    {}", slide.image), theme.dim)),
    ]
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;
    use ketani_core::carousel::DEFAULT_INTERVAL;
    use std::time::Instant;

    fn render_text(page: Page, state: &PageViewState, carousel: &Carousel) -> String {
        let theme = Theme::load_default();
        let area = Rect::new(0, 0, 100, 30);
        let mut buf = Buffer::empty(area);
        PageView::new(page, state, carousel, true, &theme).render(area, &mut buf);
        buf.content.iter().map(|c| c.symbol()).collect()
    }

    #[test]
    fn home_shows_current_slide() {
        let t0 = Instant::now();
        let mut carousel = Carousel::builtin(DEFAULT_INTERVAL, t0);
        let state = PageViewState::default();
        assert!(render_text(Page::Home, &state, &carousel).contains("Container port"));

        carousel.tick(t0 + DEFAULT_INTERVAL);
        assert!(render_text(Page::Home, &state, &carousel).contains("Rail transport"));
    }

    #[test]
    fn other_pages_have_no_carousel() {
        let carousel = Carousel::builtin(DEFAULT_INTERVAL, Instant::now());
        let text = render_text(Page::Careers, &PageViewState::default(), &carousel);
        assert!(!text.contains("Container port"));
        assert!(text.contains("/careers"));
    }

    #[test]
    fn scrolling_is_clamped_after_render() {
        let carousel = Carousel::builtin(DEFAULT_INTERVAL, Instant::now());
        let mut state = PageViewState::default();
        render_text(Page::About, &state, &carousel);
        for _ in 0..10 {
            state.handle(&AppEvent::ScrollDown);
        }
        assert_eq!(state.scroll, state.max_scroll.get());
        state.handle(&AppEvent::ScrollUp);
        state.handle(&AppEvent::ScrollUp);
        state.handle(&AppEvent::ScrollUp);
        assert_eq!(state.scroll, 0);
    }
}
