//! Mock upstream fixtures shared by the unit tests

use crate::api::PokeApi;
use crate::config::PokedexConfig;
use pokedex_common::DirectoryEntry;
use wiremock::matchers::{method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

/// The first twenty dex entries, bulbasaur through raticate
pub const KANTO_20: [&str; 20] = [
    "bulbasaur",
    "ivysaur",
    "venusaur",
    "charmander",
    "charmeleon",
    "charizard",
    "squirtle",
    "wartortle",
    "blastoise",
    "caterpie",
    "metapod",
    "butterfree",
    "weedle",
    "kakuna",
    "beedrill",
    "pidgey",
    "pidgeotto",
    "pidgeot",
    "rattata",
    "raticate",
];

pub fn api_for(server: &MockServer) -> PokeApi {
    PokeApi::new(&PokedexConfig::with_api_url(server.uri())).unwrap()
}

pub fn entry(name: &str, id: usize) -> DirectoryEntry {
    DirectoryEntry::new(name, format!("https://pokeapi.co/api/v2/pokemon/{id}/"))
}

/// Directory entries numbered from 1 in slice order
pub fn entries(names: &[&str]) -> Vec<DirectoryEntry> {
    names
        .iter()
        .enumerate()
        .map(|(i, name)| entry(name, i + 1))
        .collect()
}

/// `count` synthetic entries named `mon-001`, `mon-002`, ...
pub fn numbered_entries(count: usize) -> Vec<DirectoryEntry> {
    (1..=count)
        .map(|id| entry(&format!("mon-{id:03}"), id))
        .collect()
}

pub fn directory_json(entries: &[DirectoryEntry]) -> serde_json::Value {
    serde_json::json!({
        "count": entries.len(),
        "next": null,
        "previous": null,
        "results": entries,
    })
}

pub fn pokemon_json(id: u32, name: &str) -> serde_json::Value {
    serde_json::json!({
        "id": id,
        "name": name,
        "height": 7,
        "weight": 69,
        "sprites": {
            "front_default": format!("https://example.com/sprite/{id}.png"),
            "other": {
                "official-artwork": {
                    "front_default": format!("https://example.com/artwork/{id}.png")
                }
            }
        },
        "types": [
            { "slot": 1, "type": { "name": "grass", "url": "" } },
            { "slot": 2, "type": { "name": "poison", "url": "" } }
        ],
        "stats": [
            { "base_stat": 45, "stat": { "name": "hp" } },
            { "base_stat": 49, "stat": { "name": "attack" } },
            { "base_stat": 49, "stat": { "name": "defense" } },
            { "base_stat": 65, "stat": { "name": "special-attack" } },
            { "base_stat": 65, "stat": { "name": "special-defense" } },
            { "base_stat": 45, "stat": { "name": "speed" } }
        ],
        "abilities": [
            { "ability": { "name": "overgrow" } },
            { "ability": { "name": "chlorophyll" } }
        ]
    })
}

pub async fn mount_directory(server: &MockServer, entries: &[DirectoryEntry], limit: usize) {
    Mock::given(method("GET"))
        .and(path("/pokemon/"))
        .and(query_param("limit", limit.to_string()))
        .respond_with(ResponseTemplate::new(200).set_body_json(directory_json(entries)))
        .mount(server)
        .await;
}

pub async fn mount_pokemon(server: &MockServer, id: u32, name: &str) {
    Mock::given(method("GET"))
        .and(path(format!("/pokemon/{name}")))
        .respond_with(ResponseTemplate::new(200).set_body_json(pokemon_json(id, name)))
        .mount(server)
        .await;
}

/// Mount detail records for every entry, ids following slice order
pub async fn mount_all_pokemon(server: &MockServer, entries: &[DirectoryEntry]) {
    for (i, entry) in entries.iter().enumerate() {
        mount_pokemon(server, (i + 1) as u32, &entry.name).await;
    }
}

pub async fn mount_failure(server: &MockServer, name: &str, status: u16) {
    Mock::given(method("GET"))
        .and(path(format!("/pokemon/{name}")))
        .respond_with(ResponseTemplate::new(status))
        .mount(server)
        .await;
}
