//! Detail view model: one Pokémon's full profile
//!
//! Combines the detail record and the species record, which are fetched
//! concurrently. Either fetch failing fails the whole profile.

use crate::api::PokeApi;
use crate::error::{Error, Result};
use pokedex_common::{capitalize_first, padded_id, PokemonRecord, SpeciesRecord};
use serde::Serialize;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TypeBadge {
    /// Upstream type name, e.g. "grass"
    pub name: String,
    /// Display label, e.g. "Grass"
    pub cap_name: String,
}

/// Base stats flattened from the upstream stats array
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct StatBlock {
    pub hp: u32,
    pub atk: u32,
    pub def: u32,
    pub satk: u32,
    pub sdef: u32,
    pub spd: u32,
}

impl StatBlock {
    pub fn from_record(record: &PokemonRecord) -> Self {
        let stat = |name: &str| {
            record.base_stat(name).unwrap_or_else(|| {
                log::debug!("{} has no '{}' stat, using 0", record.name, name);
                0
            })
        };

        Self {
            hp: stat("hp"),
            atk: stat("attack"),
            def: stat("defense"),
            satk: stat("special-attack"),
            sdef: stat("special-defense"),
            spd: stat("speed"),
        }
    }

    /// Labelled stats in display order
    pub fn rows(&self) -> [(&'static str, u32); 6] {
        [
            ("HP", self.hp),
            ("ATK", self.atk),
            ("DEF", self.def),
            ("SATK", self.satk),
            ("SDEF", self.sdef),
            ("SPD", self.spd),
        ]
    }

    /// Stat bar fill: half the base stat, as a percentage capped at 100
    pub fn bar_percent(value: u32) -> u32 {
        (value / 2).min(100)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PokemonProfile {
    pub name: String,
    pub number: String,
    pub picture: String,
    pub types: Vec<TypeBadge>,
    pub height_m: f64,
    pub weight_kg: f64,
    pub abilities: Vec<String>,
    pub description: String,
    pub stats: StatBlock,
}

impl PokemonProfile {
    /// Build the profile from both upstream records
    pub fn from_records(record: &PokemonRecord, species: &SpeciesRecord) -> Self {
        let description = match species.english_description() {
            Ok(text) => text,
            Err(Error::DescriptionNotFound(name)) => {
                log::debug!("No English description for {}", name);
                String::new()
            }
            Err(e) => {
                log::warn!("Unexpected description error: {}", e);
                String::new()
            }
        };

        Self {
            name: capitalize_first(&record.name),
            number: padded_id(record.id),
            picture: record.picture().to_string(),
            types: record
                .types
                .iter()
                .map(|slot| TypeBadge {
                    name: slot.kind.name.clone(),
                    cap_name: capitalize_first(&slot.kind.name),
                })
                .collect(),
            height_m: f64::from(record.height) / 10.0,
            weight_kg: f64::from(record.weight) / 10.0,
            abilities: record
                .abilities
                .iter()
                .map(|slot| capitalize_first(&slot.ability.name))
                .collect(),
            description,
            stats: StatBlock::from_record(record),
        }
    }

    /// Type that themes the view; "normal" when the record lists none
    pub fn primary_type(&self) -> &str {
        self.types
            .first()
            .map(|badge| badge.name.as_str())
            .unwrap_or("normal")
    }
}

/// Fetch detail and species records concurrently and build the profile
pub async fn fetch_profile(api: &PokeApi, name: &str) -> Result<PokemonProfile> {
    log::info!("Loading profile for {}", name);

    let (record, species) = tokio::try_join!(api.fetch_pokemon(name), api.fetch_species(name))?;
    Ok(PokemonProfile::from_records(&record, &species))
}
