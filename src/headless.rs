//! Headless mode — evaluate one query against the catalog and print the
//! matches, without starting the terminal UI.
//!
//! There is no typing to debounce here, so the query is evaluated directly.

use std::io::Write;

use clap::ValueEnum;
use ketani_core::{SearchCatalog, SearchEntry};

/// Output encoding for headless results.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// `title<TAB>path`, one match per line.
    #[default]
    Raw,
    /// One JSON object per line.
    Jsonl,
}

/// Evaluate `query` and write every match to `out`. Returns the number of
/// matches written; the idle state writes nothing.
pub fn run_query<W: Write>(
    catalog: &SearchCatalog,
    query: &str,
    format: OutputFormat,
    out: &mut W,
) -> anyhow::Result<usize> {
    let outcome = catalog.search(query);
    if outcome.is_idle() {
        tracing::debug!("headless: blank query");
        return Ok(0);
    }

    for entry in outcome.entries() {
        write_entry(entry, format, out)?;
    }
    out.flush()?;

    tracing::debug!(query, matches = outcome.entries().len(), "headless: done");
    Ok(outcome.entries().len())
}

fn write_entry<W: Write>(entry: &SearchEntry, format: OutputFormat, out: &mut W) -> anyhow::Result<()> {
    match format {
        OutputFormat::Raw => writeln!(out, "{}\t{}", entry.title, entry.path)?,
        OutputFormat::Jsonl => {
            serde_json::to_writer(&mut *out, entry)?;
            writeln!(out)?;
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn render(query: &str, format: OutputFormat) -> (usize, String) {
        let catalog = SearchCatalog::builtin();
        let mut out = Vec::new();
        let n = run_query(&catalog, query, format, &mut out).unwrap();
        (n, String::from_utf8(out).unwrap())
    }

    #[test]
    fn raw_is_tab_separated() {
        let (n, text) = render("jobs", OutputFormat::Raw);
        assert_eq!(n, 1);
        assert_eq!(text, "Careers\t/careers\n");
    }

    #[test]
    fn jsonl_round_trips_entries() {
        let (n, text) = render("freight", OutputFormat::Jsonl);
        assert_eq!(n, 2);
        let entries: Vec<SearchEntry> = text
            .lines()
            .map(|l| serde_json::from_str(l).unwrap())
            .collect();
        assert_eq!(entries[1].title, "Freight Transportation");
    }

    #[test]
    fn blank_query_prints_nothing() {
        assert_eq!(render("   ", OutputFormat::Raw), (0, String::new()));
    }

    #[test]
    fn no_match_prints_nothing() {
        assert_eq!(render("zzz", OutputFormat::Jsonl), (0, String::new()));
    }
}
