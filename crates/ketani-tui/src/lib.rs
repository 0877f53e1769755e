//! ketani TUI — ratatui shell for the Ketani Logistics site.

pub mod app;
pub mod commands;
pub mod event;
pub mod theme;
pub mod widgets;

use std::sync::Arc;

pub use app::App;
use ketani_core::{config::Config, SearchCatalog};

/// Start the TUI.
///
/// Debounce timers run on a small dedicated tokio runtime so the draw loop
/// itself stays synchronous.
pub fn run(config: Config) -> anyhow::Result<()> {
    let catalog = SearchCatalog::from_config(&config.search)?;
    let theme = theme::Theme::by_name(&config.ui.theme);

    let runtime = tokio::runtime::Builder::new_multi_thread()
        .worker_threads(1)
        .thread_name("ketani-timers")
        .enable_time()
        .build()?;

    tracing::debug!(entries = catalog.len(), theme = %config.ui.theme, "tui: starting");
    App::new(Arc::new(catalog), config, theme, runtime.handle().clone()).run()
}
