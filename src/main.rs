use std::path::PathBuf;

use clap::Parser;
use ketani::headless::{self, OutputFormat};
use ketani_core::{config::Config, SearchCatalog};

#[derive(Parser)]
#[command(name = "ketani", about = "Ketani Logistics — site search and terminal shell")]
struct Cli {
    /// Write debug logs to /tmp/ketani-debug.log (tail -f to inspect).
    #[arg(long)]
    debug: bool,

    /// Extra config file layered over ~/.config/ketani/config.toml.
    #[arg(long, value_name = "PATH")]
    config: Option<PathBuf>,

    /// Print the matches for this query and exit instead of starting the UI.
    #[arg(long, value_name = "TEXT")]
    query: Option<String>,

    /// Output encoding for --query.
    #[arg(long, value_enum, default_value_t = OutputFormat::Raw)]
    format: OutputFormat,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    if cli.debug {
        let file = std::fs::OpenOptions::new()
            .create(true)
            .append(true)
            .open("/tmp/ketani-debug.log")?;
        tracing_subscriber::fmt()
            .with_writer(std::sync::Mutex::new(file))
            .with_ansi(false)
            .with_env_filter(
                tracing_subscriber::EnvFilter::try_from_env("RUST_LOG")
                    .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("debug")),
            )
            .init();
        tracing::info!("ketani debug log started — tail -f /tmp/ketani-debug.log");
    }

    let config = Config::load(cli.config.as_deref())?;

    if let Some(query) = cli.query {
        let catalog = SearchCatalog::from_config(&config.search)?;
        let stdout = std::io::stdout();
        headless::run_query(&catalog, &query, cli.format, &mut stdout.lock())?;
        return Ok(());
    }

    ketani_tui::run(config)
}
