//! Shared types for the Pokédex client
//!
//! Upstream response records, the directory/display models and the unified
//! error type used by the `pokedex` crate.

pub mod error;
pub mod models;

pub use error::{PokedexError, Result};
pub use models::{
    capitalize_first, padded_id, DirectoryEntry, DirectoryPage, DisplayItem, PokemonRecord,
    SpeciesRecord,
};
