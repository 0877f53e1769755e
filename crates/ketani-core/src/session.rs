//! Search session — debounced query state for one open search surface.
//!
//! A [`SearchSession`] owns the [`QueryState`] of a single search surface and
//! publishes every change through a `tokio::sync::watch` channel. Typing calls
//! [`SearchSession::set_query`], which records the text and (re)starts the
//! debounce timer. Only when the input has been quiet for the full debounce
//! window is the query evaluated and the results published.
//!
//! # Staleness
//!
//! Every `set_query`/`clear` bumps a generation counter and cancels the
//! previous timer. A timer carries the generation it was started for and
//! publishes only if that is still the current generation, so a timer that
//! slipped past cancellation cannot overwrite newer state. Dropping the
//! session cancels its timer and retires the current generation.

use crate::{
    catalog::SearchCatalog,
    error::SessionError,
    search::{self, SearchOutcome},
    timer::{start_timer, CancelHandle},
    types::SearchEntry,
};
use std::{sync::Arc, time::Duration};
use tokio::{runtime::Handle, sync::watch};

/// Debounce window used when the config does not override it.
pub const DEFAULT_DEBOUNCE: Duration = Duration::from_millis(300);

// ---------------------------------------------------------------------------
// State
// ---------------------------------------------------------------------------

/// Per-session query state, observed through [`SearchSession::subscribe`].
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct QueryState {
    /// Latest raw input.
    pub query_text: String,
    /// Outcome of the last completed evaluation. May lag `query_text` while
    /// `pending` is set.
    pub outcome: SearchOutcome,
    /// A debounce window is open and `outcome` is stale.
    pub pending: bool,
    /// Number of debounced evaluations published by this session.
    pub evaluations: u64,
    generation: u64,
}

impl QueryState {
    pub fn results(&self) -> &[SearchEntry] {
        self.outcome.entries()
    }

    /// No search is active and none is scheduled.
    pub fn is_idle(&self) -> bool {
        self.outcome.is_idle() && !self.pending
    }

    pub fn to_result(&self) -> QueryResult {
        QueryResult {
            pending: self.pending,
            outcome: self.outcome.clone(),
        }
    }
}

/// Snapshot delivered to the presentation surface.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct QueryResult {
    pub pending: bool,
    pub outcome: SearchOutcome,
}

impl QueryResult {
    pub fn results(&self) -> &[SearchEntry] {
        self.outcome.entries()
    }
}

// ---------------------------------------------------------------------------
// Session
// ---------------------------------------------------------------------------

pub struct SearchSession {
    catalog: Arc<SearchCatalog>,
    debounce: Duration,
    runtime: Handle,
    state: Arc<watch::Sender<QueryState>>,
    timer: Option<CancelHandle>,
}

impl SearchSession {
    /// Open a session on the tokio runtime the caller is running in.
    pub fn new(catalog: Arc<SearchCatalog>, debounce: Duration) -> Result<Self, SessionError> {
        let runtime = Handle::try_current()?;
        Ok(Self::with_runtime(catalog, debounce, runtime))
    }

    /// Open a session whose timers run on `runtime`. Use this from threads
    /// that are not themselves inside a runtime, such as a UI loop.
    pub fn with_runtime(catalog: Arc<SearchCatalog>, debounce: Duration, runtime: Handle) -> Self {
        let (state, _) = watch::channel(QueryState::default());
        tracing::debug!(debounce_ms = debounce.as_millis() as u64, "session: opened");
        Self {
            catalog,
            debounce,
            runtime,
            state: Arc::new(state),
            timer: None,
        }
    }

    /// Record the latest input and restart the debounce window.
    ///
    /// Blank input cancels any pending evaluation and returns the session to
    /// the idle state at once; there is nothing to debounce.
    pub fn set_query(&mut self, text: impl Into<String>) {
        let text = text.into();
        self.cancel_timer();

        if text.trim().is_empty() {
            self.state.send_modify(|state| {
                state.generation += 1;
                state.query_text = text;
                state.outcome = SearchOutcome::Idle;
                state.pending = false;
            });
            tracing::debug!("session: blank query, idle");
            return;
        }

        let mut generation = 0;
        self.state.send_modify(|state| {
            state.generation += 1;
            generation = state.generation;
            state.query_text = text;
            state.pending = true;
        });

        let state = Arc::clone(&self.state);
        let catalog = Arc::clone(&self.catalog);
        self.timer = Some(start_timer(&self.runtime, self.debounce, move || {
            on_debounce_elapsed(&state, &catalog, generation);
        }));
        tracing::debug!(generation, "session: debounce timer started");
    }

    /// Reset query and results immediately, cancelling any pending timer.
    pub fn clear(&mut self) {
        self.cancel_timer();
        self.state.send_modify(|state| {
            state.generation += 1;
            state.query_text.clear();
            state.outcome = SearchOutcome::Idle;
            state.pending = false;
        });
        tracing::debug!("session: cleared");
    }

    /// Evaluate a pending query now instead of waiting out the window.
    ///
    /// Returns `None` when nothing is pending.
    pub fn flush(&mut self) -> Option<QueryResult> {
        if !self.state.borrow().pending {
            return None;
        }
        self.cancel_timer();
        let generation = self.state.borrow().generation;
        on_debounce_elapsed(&self.state, &self.catalog, generation)
    }

    /// Receive every state change of this session.
    pub fn subscribe(&self) -> watch::Receiver<QueryState> {
        self.state.subscribe()
    }

    /// Current state.
    pub fn snapshot(&self) -> QueryState {
        self.state.borrow().clone()
    }

    pub fn result(&self) -> QueryResult {
        self.state.borrow().to_result()
    }

    pub fn catalog(&self) -> &SearchCatalog {
        &self.catalog
    }

    pub fn debounce(&self) -> Duration {
        self.debounce
    }

    fn cancel_timer(&mut self) {
        if let Some(timer) = self.timer.take() {
            if !timer.is_finished() {
                tracing::debug!("session: pending timer cancelled");
            }
            timer.cancel();
        }
    }
}

impl Drop for SearchSession {
    fn drop(&mut self) {
        self.cancel_timer();
        // Retire the generation so a timer racing its abort cannot publish.
        self.state.send_if_modified(|state| {
            state.generation += 1;
            false
        });
        tracing::debug!("session: closed");
    }
}

/// Evaluate the latest query text and publish it, unless `generation` has
/// been superseded since the timer was started.
fn on_debounce_elapsed(
    state: &watch::Sender<QueryState>,
    catalog: &SearchCatalog,
    generation: u64,
) -> Option<QueryResult> {
    let mut published = None;
    state.send_if_modified(|current| {
        if current.generation != generation {
            tracing::debug!(
                stale = generation,
                current = current.generation,
                "session: stale timer dropped"
            );
            return false;
        }
        current.outcome = search::evaluate(catalog, &current.query_text);
        current.pending = false;
        current.evaluations += 1;
        published = Some(current.to_result());
        true
    });
    published
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
