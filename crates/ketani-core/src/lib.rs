//! ketani-core — catalog search engine and site model for ketani.
//!
//! This crate holds everything that is not presentation: the searchable
//! catalog, the matching rules, the debounced per-session query engine, and
//! the static site model (pages, policies, hero carousel).
//!
//! # Architecture
//!
//! ```text
//! Catalog ──► Search ──► Session ──► UI
//!                          │
//!                        Timer
//! ```
//!
//! The catalog is built once and shared read-only. Each open search surface
//! owns one [`SearchSession`]; its debounce timers run on a tokio runtime and
//! results reach the UI through a `watch` channel.

pub mod carousel;
pub mod catalog;
pub mod config;
pub mod error;
pub mod pages;
pub mod policy;
pub mod search;
pub mod session;
pub mod timer;
pub mod types;

pub use catalog::SearchCatalog;
pub use search::SearchOutcome;
pub use session::{QueryResult, QueryState, SearchSession};
pub use types::{Category, EntryAction, SearchEntry};
