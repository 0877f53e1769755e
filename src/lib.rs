//! ketani — site search and terminal shell for Ketani Logistics.
//!
//! This crate re-exports the engine from `ketani-core` so that integration
//! tests and benches can import one crate, and hosts the headless query
//! mode used by the binary.
//!
//! # Architecture
//!
//! ```text
//! Catalog ──► Search ──► Session ──► TUI
//!    │
//!    └──► Headless (--query)
//! ```
//!
//! The TUI drives the main thread; debounce timers run on a small tokio
//! runtime in the background.

pub mod headless;

pub use ketani_core::{
    carousel, catalog, config, error, pages, policy, search, session, timer, types, Category,
    EntryAction, QueryResult, QueryState, SearchCatalog, SearchEntry, SearchOutcome,
    SearchSession,
};
