//! Catalog — the fixed, ordered set of searchable entries.
//!
//! The built-in catalog is embedded in the binary as TOML via
//! [`include_str!`] and parsed once at startup. An override file with the same
//! shape can be loaded with [`SearchCatalog::load`].
//!
//! A catalog never changes after construction. Share it between sessions
//! behind an `Arc`; no synchronisation is needed because nothing writes to it.

use crate::{
    config::SearchConfig,
    error::CatalogError,
    search::{self, MatchSurface, SearchOutcome},
    types::SearchEntry,
};
use config::{Config, File, FileFormat};
use serde::Deserialize;
use std::path::Path;

const BUILTIN_CATALOG_SRC: &str = include_str!("catalogs/ketani.toml");

#[derive(Debug, Deserialize)]
struct RawCatalog {
    #[serde(default)]
    entries: Vec<SearchEntry>,
}

/// An entry paired with its precomputed match surface.
#[derive(Debug, Clone)]
pub(crate) struct IndexedEntry {
    pub(crate) entry: SearchEntry,
    pub(crate) surface: MatchSurface,
}

/// Ordered, immutable collection of [`SearchEntry`] values.
#[derive(Debug, Clone, Default)]
pub struct SearchCatalog {
    entries: Vec<IndexedEntry>,
}

impl SearchCatalog {
    /// Build a catalog from entries in the given order.
    ///
    /// Fails if any entry has a blank title.
    pub fn new(entries: Vec<SearchEntry>) -> Result<Self, CatalogError> {
        let entries = entries
            .into_iter()
            .enumerate()
            .map(|(index, entry)| {
                if entry.title.trim().is_empty() {
                    return Err(CatalogError::EmptyTitle { index });
                }
                let surface = MatchSurface::new(&entry);
                Ok(IndexedEntry { entry, surface })
            })
            .collect::<Result<Vec<_>, _>>()?;
        tracing::debug!(entries = entries.len(), "catalog: built");
        Ok(Self { entries })
    }

    /// The site's built-in catalog.
    ///
    /// # Panics
    ///
    /// Panics if the embedded TOML is malformed. It ships with the crate and
    /// is covered by the tests below, so this does not happen in practice.
    pub fn builtin() -> Self {
        Self::from_toml_str(BUILTIN_CATALOG_SRC).expect("embedded catalog must be valid")
    }

    /// Parse a catalog from a TOML string of `[[entries]]` tables.
    pub fn from_toml_str(src: &str) -> Result<Self, CatalogError> {
        let raw: RawCatalog = Config::builder()
            .add_source(File::from_str(src, FileFormat::Toml))
            .build()?
            .try_deserialize()?;
        Self::new(raw.entries)
    }

    /// Read and parse a catalog file.
    pub fn load(path: &Path) -> Result<Self, CatalogError> {
        let src = std::fs::read_to_string(path).map_err(|source| CatalogError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_toml_str(&src)
    }

    /// The catalog named by `[search] catalog`, or the built-in one.
    pub fn from_config(config: &SearchConfig) -> Result<Self, CatalogError> {
        match config.catalog {
            Some(ref path) => {
                tracing::debug!(path = %path.display(), "catalog: loading override");
                Self::load(path)
            }
            None => Ok(Self::builtin()),
        }
    }

    /// Entries in catalog order.
    pub fn entries(&self) -> impl Iterator<Item = &SearchEntry> {
        self.entries.iter().map(|indexed| &indexed.entry)
    }

    pub fn get(&self, index: usize) -> Option<&SearchEntry> {
        self.entries.get(index).map(|indexed| &indexed.entry)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Evaluate `query` immediately, without debouncing.
    pub fn search(&self, query: &str) -> SearchOutcome {
        search::evaluate(self, query)
    }

    pub(crate) fn indexed(&self) -> impl Iterator<Item = &IndexedEntry> {
        self.entries.iter()
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
