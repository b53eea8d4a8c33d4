//! Pokédex - searchable, paginated creature listing over PokeAPI
//!
//! Loads the name directory once, searches it client-side, reveals it page by
//! page as the listing is scrolled, and enriches the visible entries with
//! detail records fetched concurrently.

pub mod api;
pub mod config;
pub mod cursor;
pub mod detail;
pub mod directory;
pub mod enrich;
pub mod error;
pub mod format;
pub mod search;
pub mod session;

#[cfg(test)]
mod test_support;

pub use api::PokeApi;
pub use config::{BatchPolicy, PokedexConfig};
pub use cursor::{ScrollCursor, ScrollMetrics};
pub use detail::{fetch_profile, PokemonProfile, StatBlock};
pub use directory::ListingCache;
pub use enrich::{enrich, enrich_partial, EnrichFailure, EnrichReport};
pub use error::{Error, Result};
pub use session::{BatchKind, BatchTicket, BrowseSession, SearchState};
pub use pokedex_common::{DirectoryEntry, DisplayItem};
