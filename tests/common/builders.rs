//! Test builders — ergonomic constructors for `SearchEntry` and catalogs.
//!
//! These builders are designed for readability in test assertions, not for
//! production use. They panic on invalid input rather than returning `Result`.

use ketani::{Category, SearchCatalog, SearchEntry};
use std::sync::Arc;

// ---------------------------------------------------------------------------
// SearchEntryBuilder
// ---------------------------------------------------------------------------

/// Fluent builder for [`SearchEntry`] test fixtures.
///
/// # Example
///
/// ```rust
/// let entry = SearchEntryBuilder::new("Ocean Services")
///     .description("international shipping")
///     .keywords(&["freight"])
///     .build();
/// ```
pub struct SearchEntryBuilder {
    title: String,
    path: String,
    description: String,
    keywords: Vec<String>,
    category: Category,
    is_download: bool,
}

impl SearchEntryBuilder {
    pub fn new(title: impl Into<String>) -> Self {
        let title = title.into();
        let path = format!("/{}", title.to_ascii_lowercase().replace(' ', "-"));
        Self {
            title,
            path,
            description: String::new(),
            keywords: Vec::new(),
            category: Category::Page,
            is_download: false,
        }
    }

    pub fn path(mut self, path: impl Into<String>) -> Self {
        self.path = path.into();
        self
    }

    pub fn description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    pub fn keywords(mut self, keywords: &[&str]) -> Self {
        self.keywords = keywords.iter().map(|k| k.to_string()).collect();
        self
    }

    pub fn category(mut self, category: Category) -> Self {
        self.category = category;
        self
    }

    pub fn download(mut self) -> Self {
        self.is_download = true;
        self
    }

    pub fn build(self) -> SearchEntry {
        SearchEntry {
            title: self.title,
            path: self.path,
            description: self.description,
            keywords: self.keywords,
            category: self.category,
            is_download: self.is_download,
        }
    }
}

// ---------------------------------------------------------------------------
// Catalog helpers
// ---------------------------------------------------------------------------

/// Build a catalog from entries, panicking on validation failure.
pub fn catalog_of(entries: Vec<SearchEntry>) -> SearchCatalog {
    SearchCatalog::new(entries).expect("test catalog must be valid")
}

/// Shared catalog for sessions.
pub fn shared(catalog: SearchCatalog) -> Arc<SearchCatalog> {
    Arc::new(catalog)
}

/// Titles of `entries`, in order.
pub fn titles<'a>(entries: impl IntoIterator<Item = &'a SearchEntry>) -> Vec<String> {
    entries.into_iter().map(|e| e.title.clone()).collect()
}
