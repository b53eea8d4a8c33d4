//! Runtime settings for the directory client and listing session

use std::time::Duration;

/// Public PokeAPI v2 endpoint
pub const DEFAULT_API_URL: &str = "https://pokeapi.co/api/v2";

/// Number of directory entries requested by the one-shot listing load
pub const DEFAULT_DIRECTORY_LIMIT: usize = 1200;

/// Entries revealed per scroll extension (and on the initial listing)
pub const DEFAULT_PAGE_SIZE: usize = 15;

/// Maximum search matches enriched per query
pub const DEFAULT_SEARCH_LIMIT: usize = 12;

/// How a listing batch reacts when some of its detail fetches fail
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum BatchPolicy {
    /// Any single failure rejects the whole batch
    Atomic,
    /// Successful items are applied, failures are reported alongside
    #[default]
    Partial,
}

#[derive(Debug, Clone)]
pub struct PokedexConfig {
    pub api_url: String,
    pub user_agent: String,
    pub directory_limit: usize,
    pub page_size: usize,
    pub search_limit: usize,
    /// Per-request timeout; `None` waits indefinitely
    pub timeout: Option<Duration>,
    pub batch_policy: BatchPolicy,
    /// When set, clearing the query restores the first listing page
    /// instead of leaving the last results on screen
    pub restore_on_empty_query: bool,
}

impl Default for PokedexConfig {
    fn default() -> Self {
        Self {
            api_url: DEFAULT_API_URL.to_string(),
            user_agent: format!("pokedex/{}", env!("CARGO_PKG_VERSION")),
            directory_limit: DEFAULT_DIRECTORY_LIMIT,
            page_size: DEFAULT_PAGE_SIZE,
            search_limit: DEFAULT_SEARCH_LIMIT,
            timeout: None,
            batch_policy: BatchPolicy::default(),
            restore_on_empty_query: false,
        }
    }
}

impl PokedexConfig {
    /// Default settings pointed at a different upstream (mock servers, mirrors)
    pub fn with_api_url(api_url: impl Into<String>) -> Self {
        Self {
            api_url: api_url.into(),
            ..Self::default()
        }
    }
}
