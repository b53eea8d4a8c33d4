//! Error types for pokedex
//!
//! The error enum lives in `pokedex_common` so the model helpers and the
//! client report failures through the same type.

pub use pokedex_common::error::{PokedexError, Result};

/// Short alias used throughout the crate
pub type Error = PokedexError;
