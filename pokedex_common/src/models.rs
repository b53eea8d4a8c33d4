//! Directory, display and upstream record types

use crate::error::{PokedexError, Result};
use serde::{Deserialize, Serialize};

/// One row of the upstream name/URL listing
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct DirectoryEntry {
    pub name: String,
    pub url: String,
}

impl DirectoryEntry {
    pub fn new(name: impl Into<String>, url: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            url: url.into(),
        }
    }
}

/// Listing response for `GET /pokemon/?limit=N`
#[derive(Debug, Deserialize)]
pub struct DirectoryPage {
    #[serde(default)]
    pub count: Option<u32>,
    pub results: Vec<DirectoryEntry>,
}

/// Card-sized view of a single entry
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DisplayItem {
    /// Zero-padded dex number ("001", "025", "150")
    pub id: String,
    /// Capitalized name
    pub name: String,
    /// Artwork URL, empty when the record has no image at all
    pub picture: String,
}

impl DisplayItem {
    /// Build the card for a directory entry from its detail record
    pub fn from_record(entry: &DirectoryEntry, record: &PokemonRecord) -> Self {
        Self {
            id: padded_id(record.id),
            name: capitalize_first(&entry.name),
            picture: record.picture().to_string(),
        }
    }
}

/// Generic `{ name, url }` reference used throughout the upstream API
#[derive(Debug, Clone, Deserialize, Serialize, PartialEq, Eq)]
pub struct NamedResource {
    pub name: String,
    #[serde(default)]
    pub url: String,
}

/// Detail response for `GET /pokemon/{name}`
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct PokemonRecord {
    pub id: u32,
    pub name: String,
    #[serde(default)]
    pub sprites: Sprites,
    #[serde(default)]
    pub types: Vec<TypeSlot>,
    #[serde(default)]
    pub stats: Vec<StatSlot>,
    #[serde(default)]
    pub abilities: Vec<AbilitySlot>,
    /// Decimetres
    #[serde(default)]
    pub height: u32,
    /// Hectograms
    #[serde(default)]
    pub weight: u32,
}

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct Sprites {
    #[serde(default)]
    pub front_default: Option<String>,
    #[serde(default)]
    pub other: Option<OtherSprites>,
}

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct OtherSprites {
    #[serde(rename = "official-artwork", default)]
    pub official_artwork: Option<Artwork>,
}

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct Artwork {
    #[serde(default)]
    pub front_default: Option<String>,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct TypeSlot {
    #[serde(rename = "type")]
    pub kind: NamedResource,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct StatSlot {
    pub base_stat: u32,
    pub stat: NamedResource,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct AbilitySlot {
    pub ability: NamedResource,
}

impl PokemonRecord {
    /// Get the best picture URL: official artwork, then the default sprite
    pub fn picture(&self) -> &str {
        let artwork = self
            .sprites
            .other
            .as_ref()
            .and_then(|other| other.official_artwork.as_ref())
            .and_then(|art| art.front_default.as_deref())
            .filter(|url| !url.is_empty());

        artwork
            .or_else(|| {
                self.sprites
                    .front_default
                    .as_deref()
                    .filter(|url| !url.is_empty())
            })
            .unwrap_or("")
    }

    /// Base stat by upstream stat name ("hp", "special-attack", ...)
    pub fn base_stat(&self, stat_name: &str) -> Option<u32> {
        self.stats
            .iter()
            .find(|slot| slot.stat.name == stat_name)
            .map(|slot| slot.base_stat)
    }
}

/// Species response for `GET /pokemon-species/{name}`
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct SpeciesRecord {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub flavor_text_entries: Vec<FlavorText>,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct FlavorText {
    pub flavor_text: String,
    pub language: NamedResource,
}

impl SpeciesRecord {
    /// The last English flavor text entry, with line breaks and form feeds
    /// collapsed to single spaces
    pub fn english_description(&self) -> Result<String> {
        self.flavor_text_entries
            .iter()
            .rev()
            .find(|entry| entry.language.name == "en")
            .map(|entry| collapse_whitespace(&entry.flavor_text))
            .filter(|text| !text.is_empty())
            .ok_or_else(|| PokedexError::DescriptionNotFound(self.name.clone()))
    }
}

/// Zero-pad a dex number to at least three digits
pub fn padded_id(id: u32) -> String {
    format!("{:03}", id)
}

/// Upper-case the first character, leave the rest untouched
pub fn capitalize_first(s: &str) -> String {
    let mut chars = s.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

fn collapse_whitespace(text: &str) -> String {
    text.split_whitespace().collect::<Vec<_>>().join(" ")
}

#[cfg(test)]
#[path = "models_tests.rs"]
mod tests;
