//! In-memory listing cache
//!
//! The name/URL directory is fetched once per listing view and shared
//! read-only (behind an `Arc`) with every batch the view issues. Nothing is
//! persisted across runs.

use crate::api::PokeApi;
use crate::error::Result;
use crate::search;
use pokedex_common::DirectoryEntry;
use std::sync::Arc;

/// Immutable, upstream-ordered directory
#[derive(Debug, Clone)]
pub struct ListingCache {
    entries: Arc<[DirectoryEntry]>,
}

impl Default for ListingCache {
    fn default() -> Self {
        Self::from_entries(Vec::new())
    }
}

impl ListingCache {
    /// Fetch the directory from upstream. No retry: a network failure is
    /// returned to the caller as-is.
    pub async fn load(api: &PokeApi, limit: usize) -> Result<Self> {
        log::info!("Loading Pokémon directory (limit {})...", limit);

        let entries = api.fetch_directory(limit).await?;
        log::info!("Loaded directory with {} entries", entries.len());

        Ok(Self::from_entries(entries))
    }

    pub fn from_entries(entries: Vec<DirectoryEntry>) -> Self {
        Self {
            entries: entries.into(),
        }
    }

    pub fn entries(&self) -> &[DirectoryEntry] {
        &self.entries
    }

    /// Slice of the directory, clamped to its bounds
    pub fn page(&self, start: usize, len: usize) -> &[DirectoryEntry] {
        let start = start.min(self.entries.len());
        let end = start.saturating_add(len).min(self.entries.len());
        &self.entries[start..end]
    }

    /// Case-insensitive substring search, first `limit` matches in order
    pub fn filter(&self, query: &str, limit: usize) -> Vec<DirectoryEntry> {
        search::filter(query, &self.entries, limit)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::{api_for, entries, mount_directory, numbered_entries};
    use wiremock::matchers::{method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    #[tokio::test]
    async fn test_load_fetches_directory_once() {
        let mock_server = MockServer::start().await;
        let listing = entries(&["bulbasaur", "ivysaur"]);

        Mock::given(method("GET"))
            .and(path("/pokemon/"))
            .respond_with(
                ResponseTemplate::new(200)
                    .set_body_json(crate::test_support::directory_json(&listing)),
            )
            .expect(1)
            .mount(&mock_server)
            .await;

        let cache = ListingCache::load(&api_for(&mock_server), 1200).await.unwrap();
        let shared = cache.clone();

        assert_eq!(cache.len(), 2);
        assert_eq!(shared.entries()[1].name, "ivysaur");
    }

    #[tokio::test]
    async fn test_load_preserves_upstream_order() {
        let mock_server = MockServer::start().await;
        let listing = numbered_entries(40);
        mount_directory(&mock_server, &listing, 40).await;

        let cache = ListingCache::load(&api_for(&mock_server), 40).await.unwrap();

        assert_eq!(cache.entries(), listing.as_slice());
    }

    #[test]
    fn test_page_clamps_to_bounds() {
        let cache = ListingCache::from_entries(numbered_entries(40));

        assert_eq!(cache.page(0, 15).len(), 15);
        assert_eq!(cache.page(30, 15).len(), 10);
        assert!(cache.page(40, 15).is_empty());
        assert!(cache.page(usize::MAX, 15).is_empty());
    }

    #[test]
    fn test_empty_cache() {
        let cache = ListingCache::default();
        assert!(cache.is_empty());
        assert!(cache.filter("saur", 12).is_empty());
    }
}
