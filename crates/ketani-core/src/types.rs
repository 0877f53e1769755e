//! Core types for ketani-core.
//!
//! This module defines the searchable record shared across every layer: the
//! [`SearchEntry`], its [`Category`], and the [`EntryAction`] a host surface
//! performs when the entry is selected.

use serde::{Deserialize, Serialize};

/// One searchable record in the site catalog.
///
/// Entries are built once when the catalog is constructed and never mutated
/// afterwards.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SearchEntry {
    /// Display name. Never empty; the catalog rejects entries without one.
    pub title: String,
    /// Route of a navigable page, or location of a downloadable resource.
    pub path: String,
    /// One-line summary shown beneath the title.
    pub description: String,
    /// Extra match surface. Compared case-insensitively.
    #[serde(default)]
    pub keywords: Vec<String>,
    pub category: Category,
    /// `true` when selecting the entry fetches `path` instead of navigating to it.
    #[serde(default, rename = "download")]
    pub is_download: bool,
}

impl SearchEntry {
    /// What the host surface should do when this entry is selected.
    pub fn action(&self) -> EntryAction {
        if self.is_download {
            EntryAction::Download(self.path.clone())
        } else {
            EntryAction::Navigate(self.path.clone())
        }
    }
}

/// Closed set of entry kinds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    Page,
    Service,
    Resource,
    Action,
}

impl std::fmt::Display for Category {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Category::Page => write!(f, "Page"),
            Category::Service => write!(f, "Service"),
            Category::Resource => write!(f, "Resource"),
            Category::Action => write!(f, "Action"),
        }
    }
}

/// Selection side effect, decided solely by [`SearchEntry::is_download`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EntryAction {
    /// Switch the current view to the page at this path.
    Navigate(String),
    /// Fetch the resource at this path.
    Download(String),
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
