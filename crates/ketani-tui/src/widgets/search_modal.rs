//! Search modal — floating query input plus live results list.
//!
//! Opening the modal creates a [`SearchSession`]; closing it drops the state
//! and with it the session, which cancels any pending debounce.
//!
//! # Editing
//!
//! - `Char(c)` inserts at the cursor and re-arms the debounce.
//! - `Backspace` deletes the character before the cursor.
//! - `ClearInput` (Ctrl+u) empties the input and returns to the idle hint.
//! - `Nav(Left)` / `Nav(Right)` move the text cursor.
//! - `Nav(Up)` / `Nav(Down)` move the result selection.
//! - `Enter` evaluates a pending query immediately and selects the
//!   highlighted result.

use std::{sync::Arc, time::Duration};

use crate::event::{AppEvent, Direction};
use crate::theme::Theme;
use crate::widgets::help::centered_rect;
use ketani_core::{
    session::QueryState, EntryAction, SearchCatalog, SearchEntry, SearchSession,
};
use ratatui::{
    buffer::Buffer,
    layout::{Constraint, Direction as LayoutDir, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Clear, List, ListItem, ListState, Paragraph, StatefulWidget, Widget},
};
use tokio::runtime::Handle;

const IDLE_HINT: &str = "Start typing to search pages, services and resources";
const PENDING_HINT: &str = "Searching…";

// ---------------------------------------------------------------------------
// State
// ---------------------------------------------------------------------------

pub struct SearchModalState {
    /// The text typed by the user.
    pub input: String,
    /// Byte offset of the cursor within `input`.
    pub cursor: usize,
    /// Index of the highlighted result.
    pub selected: usize,
    session: SearchSession,
}

impl SearchModalState {
    pub fn open(catalog: Arc<SearchCatalog>, debounce: Duration, runtime: Handle) -> Self {
        Self {
            input: String::new(),
            cursor: 0,
            selected: 0,
            session: SearchSession::with_runtime(catalog, debounce, runtime),
        }
    }

    /// Replace the input wholesale, e.g. from the `:search` command.
    pub fn set_input(&mut self, text: &str) {
        self.input = text.to_string();
        self.cursor = self.input.len();
        self.query_changed();
    }

    /// Latest published query state.
    pub fn snapshot(&self) -> QueryState {
        self.session.snapshot()
    }

    /// Handle a key event from the app shell.
    ///
    /// Returns the selected entry's action when `Enter` lands on a result.
    pub fn handle(&mut self, event: &AppEvent) -> Option<EntryAction> {
        match event {
            AppEvent::Char(c) => {
                self.input.insert(self.cursor, *c);
                self.cursor += c.len_utf8();
                self.query_changed();
            }
            AppEvent::Backspace => {
                if self.cursor > 0 {
                    let prev = self.input[..self.cursor]
                        .char_indices()
                        .last()
                        .map(|(i, _)| i)
                        .unwrap_or(0);
                    self.input.remove(prev);
                    self.cursor = prev;
                    self.query_changed();
                }
            }
            AppEvent::ClearInput => {
                self.input.clear();
                self.cursor = 0;
                self.selected = 0;
                self.session.clear();
                tracing::debug!("search: cleared");
            }
            AppEvent::Nav(Direction::Left) => {
                if self.cursor > 0 {
                    self.cursor = self.input[..self.cursor]
                        .char_indices()
                        .last()
                        .map(|(i, _)| i)
                        .unwrap_or(0);
                }
            }
            AppEvent::Nav(Direction::Right) => {
                if self.cursor < self.input.len() {
                    self.cursor = self.input[self.cursor..]
                        .char_indices()
                        .nth(1)
                        .map(|(i, _)| self.cursor + i)
                        .unwrap_or(self.input.len());
                }
            }
            AppEvent::Nav(Direction::Up) => {
                self.selected = self.selected.saturating_sub(1);
            }
            AppEvent::Nav(Direction::Down) => {
                let count = self.session.snapshot().results().len();
                if self.selected + 1 < count {
                    self.selected += 1;
                }
            }
            AppEvent::Enter => {
                self.session.flush();
                let state = self.session.snapshot();
                let entry = selected_entry(state.results(), self.selected)?;
                tracing::debug!(title = %entry.title, path = %entry.path, "search: selected");
                return Some(entry.action());
            }
            _ => {}
        }
        None
    }

    fn query_changed(&mut self) {
        self.selected = 0;
        self.session.set_query(self.input.clone());
    }
}

fn selected_entry(results: &[SearchEntry], selected: usize) -> Option<&SearchEntry> {
    results.get(selected.min(results.len().saturating_sub(1)))
}

// ---------------------------------------------------------------------------
// Widget
// ---------------------------------------------------------------------------

pub struct SearchModal<'a> {
    state: &'a SearchModalState,
    show_descriptions: bool,
    theme: &'a Theme,
}

impl<'a> SearchModal<'a> {
    pub fn new(state: &'a SearchModalState, show_descriptions: bool, theme: &'a Theme) -> Self {
        Self { state, show_descriptions, theme }
    }

    /// Screen rect of the modal inside the full terminal `area`.
    pub fn popup_area(area: Rect) -> Rect {
        let width = area.width.saturating_sub(8).clamp(20, 90);
        let height = area.height.saturating_sub(4).clamp(8, 24);
        centered_rect(width, height, area)
    }

    /// Absolute terminal position of the text cursor when rendered into the
    /// full terminal `area`.
    pub fn cursor_position(&self, area: Rect) -> (u16, u16) {
        let popup = Self::popup_area(area);
        // Outer border, then the input block's border.
        let col = self.state.input[..self.state.cursor].chars().count() as u16;
        let x = (popup.x + 2 + col).min(popup.right().saturating_sub(2));
        (x, popup.y + 2)
    }
}

impl Widget for SearchModal<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let popup = Self::popup_area(area);
        Clear.render(popup, buf);

        let snapshot = self.state.snapshot();

        let title = if snapshot.pending {
            " Search · searching… ".to_string()
        } else {
            match snapshot.outcome.query() {
                Some(_) => match snapshot.results().len() {
                    1 => " Search · 1 result ".to_string(),
                    n => format!(" Search · {n} results "),
                },
                None => " Search ".to_string(),
            }
        };

        let block = Block::bordered()
            .title(title)
            .title_bottom(" ↑↓ select · Enter open · Ctrl+u clear · Esc close ")
            .border_style(self.theme.border_focused);
        let inner = block.inner(popup);
        block.render(popup, buf);

        let chunks = Layout::default()
            .direction(LayoutDir::Vertical)
            .constraints([Constraint::Length(3), Constraint::Fill(1)])
            .split(inner);

        let input = Block::bordered().border_style(self.theme.border_unfocused);
        let input_inner = input.inner(chunks[0]);
        input.render(chunks[0], buf);
        Paragraph::new(Line::from(self.state.input.as_str())).render(input_inner, buf);

        let body = chunks[1];
        if snapshot.results().is_empty() {
            let hint = if snapshot.pending {
                PENDING_HINT.to_string()
            } else if let Some(query) = snapshot.outcome.query() {
                format!("No results found for \"{query}\"")
            } else {
                IDLE_HINT.to_string()
            };
            Paragraph::new(Line::from(Span::styled(hint, self.theme.search_hint)))
                .render(body, buf);
            return;
        }

        let items: Vec<ListItem> = snapshot
            .results()
            .iter()
            .map(|entry| {
                let mut lines = vec![Line::from(vec![
                    Span::styled(
                        format!("{:<9}", entry.category.to_string()),
                        self.theme.category_style(entry.category),
                    ),
                    Span::styled(entry.title.clone(), self.theme.heading),
                    Span::styled(format!("  {}", entry.path), self.theme.dim),
                ])];
                if self.show_descriptions {
                    lines.push(Line::from(Span::styled(
                        format!("         {}", entry.description),
                        self.theme.dim,
                    )));
                }
                ListItem::new(lines)
            })
            .collect();

        let selected = self.state.selected.min(items.len().saturating_sub(1));
        let list = List::new(items)
            .highlight_style(self.theme.search_highlight)
            .highlight_symbol("› ");
        let mut list_state = ListState::default().with_selected(Some(selected));
        StatefulWidget::render(list, body, buf, &mut list_state);

        if snapshot.pending {
            let note = Span::styled(PENDING_HINT, Style::default().add_modifier(Modifier::DIM));
            let x = body.right().saturating_sub(note.width() as u16 + 1);
            buf.set_span(x, body.bottom().saturating_sub(1), &note, body.width);
        }
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
