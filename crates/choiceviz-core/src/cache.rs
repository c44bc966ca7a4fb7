//! In-memory cache of the last successful fetch, with the current filtered view.

use crate::bundle::GameRecord;

/// Last fetched bundle plus the view derived from it by searching.
///
/// `original_data` is only replaced by [`BundleCache::store`] and emptied by
/// [`BundleCache::clear`]; filtering only rewrites `data`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BundleCache {
    data: Vec<GameRecord>,
    original_data: Vec<GameRecord>,
    last_query: String,
    is_filtered: bool,
}

impl BundleCache {
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace the cache with a fresh fetch result.
    pub fn store(&mut self, records: Vec<GameRecord>, query: impl Into<String>) {
        self.data = records.clone();
        self.original_data = records;
        self.last_query = query.into();
        self.is_filtered = false;
        tracing::debug!(
            "cache stored {} records for {}",
            self.original_data.len(),
            self.last_query
        );
    }

    pub fn clear(&mut self) {
        *self = Self::default();
        tracing::debug!("cache cleared");
    }

    /// Narrow `data` to titles containing `term` (case-insensitive substring).
    /// A blank term restores the full set.
    pub fn filter(&mut self, term: &str) {
        let term = term.trim();
        if term.is_empty() {
            self.data = self.original_data.clone();
            self.is_filtered = false;
            return;
        }
        let needle = term.to_lowercase();
        self.data = self
            .original_data
            .iter()
            .filter(|g| g.title.to_lowercase().contains(&needle))
            .cloned()
            .collect();
        self.is_filtered = true;
        tracing::debug!(
            "filter {:?}: {} of {} records",
            term,
            self.data.len(),
            self.original_data.len()
        );
    }

    /// Current view.
    pub fn data(&self) -> &[GameRecord] {
        &self.data
    }

    pub fn original_data(&self) -> &[GameRecord] {
        &self.original_data
    }

    pub fn last_query(&self) -> &str {
        &self.last_query
    }

    pub fn is_filtered(&self) -> bool {
        self.is_filtered
    }

    /// The search UI is shown only once something has been fetched.
    pub fn search_visible(&self) -> bool {
        !self.original_data.is_empty()
    }
}
