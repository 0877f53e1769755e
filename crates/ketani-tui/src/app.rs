//! Top-level application state and the main event loop.
//!
//! [`App::run`] sets up the terminal, drives the crossterm event loop, and
//! tears everything down cleanly on exit or panic.

use crate::{
    commands::{execute_command, Command},
    event::{self, AppEvent, Direction},
    theme::Theme,
    widgets::{
        command_bar::{CommandBar, CommandBarState},
        help::HelpPopup,
        nav_menu::{NavMenu, NavMenuState},
        page_view::{PageView, PageViewState},
        policy_popup::PolicyPopup,
        search_modal::{SearchModal, SearchModalState},
        tab_bar::TabBar,
    },
};
use crossterm::{
    event::{self as ct_event, Event},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ketani_core::{
    carousel::Carousel, config::Config, pages::Page, policy::PolicyKind, EntryAction,
    SearchCatalog,
};
use ratatui::{
    backend::CrosstermBackend,
    layout::{Constraint, Direction as LayoutDir, Layout, Rect},
    text::{Line, Span},
    Frame, Terminal,
};
use std::{
    io,
    sync::Arc,
    time::{Duration, Instant},
};
use tokio::runtime::Handle;

// ---------------------------------------------------------------------------
// Focus
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Focus {
    Nav,
    Page,
    /// The search modal is open and owns the keyboard.
    Search,
    /// Vim-style `:` command line is active.
    Command,
}

// ---------------------------------------------------------------------------
// AppState
// ---------------------------------------------------------------------------

pub struct AppState {
    pub page: Page,
    pub focus: Focus,
    /// Focus state before entering command mode or search, restored on exit.
    pub prev_focus: Focus,
    pub nav: NavMenuState,
    pub view: PageViewState,
    /// Present while the search modal is open.
    pub search: Option<SearchModalState>,
    /// Present while the policy modal is open.
    pub policy: Option<PolicyKind>,
    pub carousel: Carousel,
    /// One-line message in the status row, e.g. a started download.
    pub status: Option<String>,
    pub theme: Theme,
    pub config: Config,
    pub show_help: bool,
    pub command_bar: CommandBarState,
    pub quit: bool,
    catalog: Arc<SearchCatalog>,
    runtime: Handle,
}

impl AppState {
    pub fn new(catalog: Arc<SearchCatalog>, config: Config, theme: Theme, runtime: Handle) -> Self {
        let carousel = Carousel::builtin(config.ui.carousel_interval(), Instant::now());
        Self {
            page: Page::Home,
            focus: Focus::Nav,
            prev_focus: Focus::Nav,
            nav: NavMenuState::default(),
            view: PageViewState::default(),
            search: None,
            policy: None,
            carousel,
            status: None,
            theme,
            config,
            show_help: false,
            command_bar: CommandBarState::default(),
            quit: false,
            catalog,
            runtime,
        }
    }

    /// Open the search modal with a fresh session. A no-op if already open.
    pub fn open_search(&mut self) {
        if self.search.is_some() {
            return;
        }
        tracing::debug!(prev_focus = ?self.focus, "search opened");
        if !matches!(self.focus, Focus::Search | Focus::Command) {
            self.prev_focus = self.focus;
        }
        self.search = Some(SearchModalState::open(
            Arc::clone(&self.catalog),
            self.config.search.debounce(),
            self.runtime.clone(),
        ));
        self.focus = Focus::Search;
    }

    /// Close the search modal, dropping its session.
    pub fn close_search(&mut self) {
        if self.search.take().is_some() {
            tracing::debug!("search closed");
        }
        if self.focus == Focus::Search {
            self.focus = self.prev_focus;
        }
    }

    pub fn navigate(&mut self, page: Page) {
        tracing::debug!(from = %self.page, to = %page, "navigate");
        self.page = page;
        self.nav.select(page);
        self.view.reset();
        self.status = None;
    }

    /// Carry out what a selected search result asks for.
    fn apply_action(&mut self, action: EntryAction) {
        match action {
            EntryAction::Navigate(path) => match Page::resolve(&path) {
                Some(page) => self.navigate(page),
                None => {
                    tracing::debug!(%path, "no page for route");
                    self.status = Some(format!("No page at {path}"));
                }
            },
            EntryAction::Download(path) => {
                tracing::debug!(%path, "download requested");
                self.status = Some(format!("Downloading {path}"));
            }
        }
    }

    /// Advance time-driven state. Called once per frame.
    pub fn tick(&mut self, now: Instant) {
        self.carousel.tick(now);
    }

    pub fn handle(&mut self, event: AppEvent) {
        // Help popup intercepts all events; only close keys pass through.
        if self.show_help {
            match event {
                AppEvent::Char('?') | AppEvent::Escape | AppEvent::Quit => {
                    tracing::debug!("help popup closed");
                    self.show_help = false;
                }
                _ => {}
            }
            return;
        }

        // Policy modal intercepts all events.
        if let Some(kind) = self.policy {
            match event {
                AppEvent::Escape | AppEvent::Quit | AppEvent::PolicyOpen => {
                    tracing::debug!("policy closed");
                    self.policy = None;
                }
                AppEvent::Nav(Direction::Left | Direction::Right) | AppEvent::FocusNext => {
                    self.policy = Some(kind.next());
                }
                _ => {}
            }
            return;
        }

        // Command mode intercepts all events.
        if self.focus == Focus::Command {
            match event {
                AppEvent::Escape => {
                    tracing::debug!("command bar cancelled");
                    self.command_bar.clear();
                    self.focus = self.prev_focus;
                }
                AppEvent::Enter => {
                    let input = self.command_bar.input.clone();
                    match Command::parse(&input) {
                        Ok(cmd) => {
                            tracing::debug!(command = ?cmd, "executing command");
                            self.command_bar.clear();
                            self.focus = self.prev_focus;
                            execute_command(self, cmd);
                        }
                        Err(msg) if msg.is_empty() => {
                            // Empty input — just close
                            self.command_bar.clear();
                            self.focus = self.prev_focus;
                        }
                        Err(msg) => {
                            // Show the error; bar stays open
                            self.command_bar.error = Some(msg);
                        }
                    }
                }
                AppEvent::Quit => self.quit = true,
                other => self.command_bar.handle(&other),
            }
            return;
        }

        // Search modal intercepts all events.
        if let Some(search) = self.search.as_mut() {
            match event {
                AppEvent::Escape => self.close_search(),
                AppEvent::Quit => self.quit = true,
                AppEvent::Enter => {
                    if let Some(action) = search.handle(&AppEvent::Enter) {
                        self.close_search();
                        self.apply_action(action);
                    }
                }
                other => {
                    search.handle(&other);
                }
            }
            return;
        }

        match event {
            AppEvent::Char('?') => {
                tracing::debug!("help popup opened");
                self.show_help = true;
            }

            AppEvent::Char(':') => {
                tracing::debug!(prev_focus = ?self.focus, "entering command mode");
                self.prev_focus = self.focus;
                self.command_bar.clear();
                self.focus = Focus::Command;
            }

            AppEvent::Quit => {
                tracing::debug!("quit");
                self.quit = true;
            }

            AppEvent::SearchOpen => self.open_search(),

            AppEvent::PolicyOpen => {
                tracing::debug!("policy opened");
                self.policy = Some(PolicyKind::Privacy);
            }

            // Tab-cycle focus: Nav → Page → Nav
            AppEvent::FocusNext => {
                let next = match self.focus {
                    Focus::Nav => Focus::Page,
                    _ => Focus::Nav,
                };
                tracing::debug!(from = ?self.focus, to = ?next, "focus cycle");
                self.focus = next;
            }

            AppEvent::NextPage | AppEvent::PrevPage => {
                let len = Page::ALL.len();
                let i = Page::ALL.iter().position(|p| *p == self.page).unwrap_or(0);
                let next = if event == AppEvent::NextPage {
                    (i + 1) % len
                } else {
                    (i + len - 1) % len
                };
                self.navigate(Page::ALL[next]);
            }

            AppEvent::Escape => self.status = None,

            // Terminal resize is handled automatically by ratatui
            AppEvent::Resize(_, _) => {}

            other => self.dispatch_to_focused(other),
        }
    }

    /// Route an event to the pane that owns the current focus.
    fn dispatch_to_focused(&mut self, event: AppEvent) {
        match self.focus {
            Focus::Nav => {
                if let Some(page) = self.nav.handle(&event) {
                    self.navigate(page);
                }
            }
            Focus::Page => self.view.handle(&event),
            // handled before dispatch, should not reach here
            Focus::Search | Focus::Command => {}
        }
    }
}

// ---------------------------------------------------------------------------
// App
// ---------------------------------------------------------------------------

pub struct App {
    state: AppState,
}

impl App {
    pub fn new(catalog: Arc<SearchCatalog>, config: Config, theme: Theme, runtime: Handle) -> Self {
        App {
            state: AppState::new(catalog, config, theme, runtime),
        }
    }

    /// Set up the terminal, run the event loop, and restore the terminal on exit.
    pub fn run(mut self) -> anyhow::Result<()> {
        install_panic_hook();

        enable_raw_mode()?;
        execute!(io::stdout(), EnterAlternateScreen)?;
        let backend = CrosstermBackend::new(io::stdout());
        let mut terminal = Terminal::new(backend)?;

        let result = self.event_loop(&mut terminal);

        // Always restore terminal, even if the loop returned an error
        let _ = disable_raw_mode();
        let _ = execute!(io::stdout(), LeaveAlternateScreen);
        let _ = terminal.show_cursor();

        result
    }

    fn event_loop(
        &mut self,
        terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    ) -> anyhow::Result<()> {
        loop {
            self.state.tick(Instant::now());
            {
                let s = &self.state;
                terminal.draw(|frame| draw(frame, s))?;
            }

            if self.state.quit {
                break;
            }

            // Debounced results land on the session's watch channel; the
            // 16ms poll timeout keeps redraws frequent enough to show them.
            if ct_event::poll(Duration::from_millis(16))? {
                match ct_event::read()? {
                    Event::Key(key) if key.kind == crossterm::event::KeyEventKind::Press => {
                        let raw = Event::Key(key);
                        // Use insert-mode mapping when a text widget is focused
                        let app_event = if is_insert_mode(self.state.focus) {
                            event::to_app_event_insert(raw)
                        } else {
                            event::to_app_event(raw)
                        };
                        if let Some(ev) = app_event {
                            tracing::debug!(
                                focus = ?self.state.focus,
                                event = ?ev,
                                "key event"
                            );
                            self.state.handle(ev);
                        }
                    }
                    other => {
                        if let Some(ev) = event::to_app_event(other) {
                            self.state.handle(ev);
                        }
                    }
                }
            }
        }
        Ok(())
    }
}

/// Returns true when the current focus is on a text-input widget, meaning
/// alphabetic keys should produce characters rather than trigger shortcuts.
fn is_insert_mode(focus: Focus) -> bool {
    matches!(focus, Focus::Search | Focus::Command)
}

// ---------------------------------------------------------------------------
// Rendering
// ---------------------------------------------------------------------------

fn draw(frame: &mut Frame, state: &AppState) {
    let area = frame.area();
    if area.is_empty() {
        return;
    }

    // Vertical: 1-line tab bar | body | 1-line status row
    let vert = Layout::default()
        .direction(LayoutDir::Vertical)
        .constraints([
            Constraint::Length(1),
            Constraint::Fill(1),
            Constraint::Length(1),
        ])
        .split(area);

    // Horizontal body split
    let pct = state.config.ui.nav_pane_width_pct.min(80);
    let horiz = Layout::default()
        .direction(LayoutDir::Horizontal)
        .constraints([Constraint::Percentage(pct), Constraint::Fill(1)])
        .split(vert[1]);

    frame.render_widget(TabBar::new(state.page, &state.theme), vert[0]);
    frame.render_widget(
        NavMenu::new(&state.nav, state.page, state.focus == Focus::Nav, &state.theme),
        horiz[0],
    );
    frame.render_widget(
        PageView::new(
            state.page,
            &state.view,
            &state.carousel,
            state.focus == Focus::Page,
            &state.theme,
        ),
        horiz[1],
    );
    frame.render_widget(status_line(state), vert[2]);

    if let Some(ref search) = state.search {
        let modal = SearchModal::new(search, state.config.ui.show_descriptions, &state.theme);
        let cursor = modal.cursor_position(area);
        frame.render_widget(modal, area);
        if state.focus == Focus::Search {
            frame.set_cursor_position(cursor);
        }
    }

    if let Some(kind) = state.policy {
        frame.render_widget(PolicyPopup::new(kind, &state.theme), area);
    }

    if state.show_help {
        frame.render_widget(HelpPopup::new(&state.theme), area);
    }

    // Command bar overlays the bottom row of the screen
    if state.focus == Focus::Command {
        let cmd_area = Rect { y: area.bottom().saturating_sub(1), height: 1, ..area };
        frame.render_widget(CommandBar::new(&state.command_bar, &state.theme), cmd_area);
        let col = state.command_bar.cursor_col(cmd_area);
        frame.set_cursor_position((col, cmd_area.y));
    }
}

fn status_line(state: &AppState) -> Line<'_> {
    match state.status {
        Some(ref msg) => Line::from(Span::styled(format!(" {msg}"), state.theme.accent)),
        None => Line::from(vec![
            Span::styled(format!(" {} ", state.page.path()), state.theme.dim),
            Span::styled(" p:policies  :command  q:quit", state.theme.dim),
        ]),
    }
}

// ---------------------------------------------------------------------------
// Terminal helpers
// ---------------------------------------------------------------------------

fn install_panic_hook() {
    let original = std::panic::take_hook();
    std::panic::set_hook(Box::new(move |info| {
        let _ = disable_raw_mode();
        let _ = execute!(io::stdout(), LeaveAlternateScreen);
        original(info);
    }));
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
