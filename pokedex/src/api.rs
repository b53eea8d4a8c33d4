//! PokeAPI client for the name directory, detail and species records
//!
//! Uses async reqwest for non-blocking HTTP requests. One `reqwest::Client` is
//! shared by every request issued through a `PokeApi` handle (clones share
//! the connection pool).

use crate::config::PokedexConfig;
use crate::error::{Error, Result};
use pokedex_common::{DirectoryEntry, DirectoryPage, PokemonRecord, SpeciesRecord};
use serde::de::DeserializeOwned;

#[derive(Debug, Clone)]
pub struct PokeApi {
    client: reqwest::Client,
    base_url: String,
}

impl PokeApi {
    /// Build a client from the runtime settings
    pub fn new(config: &PokedexConfig) -> Result<Self> {
        let mut builder = reqwest::Client::builder().user_agent(config.user_agent.as_str());
        if let Some(timeout) = config.timeout {
            builder = builder.timeout(timeout);
        }

        Ok(Self {
            client: builder.build()?,
            base_url: config.api_url.trim_end_matches('/').to_string(),
        })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Fetch the full name/URL listing (`GET /pokemon/?limit=N`)
    pub async fn fetch_directory(&self, limit: usize) -> Result<Vec<DirectoryEntry>> {
        let url = format!("{}/pokemon/?limit={}", self.base_url, limit);
        let page: DirectoryPage = self.get_json(&url, "directory").await?;

        log::debug!(
            "Directory page: {} entries (upstream count: {:?})",
            page.results.len(),
            page.count
        );
        Ok(page.results)
    }

    /// Fetch a detail record by name (`GET /pokemon/{name}`)
    pub async fn fetch_pokemon(&self, name: &str) -> Result<PokemonRecord> {
        let url = format!("{}/pokemon/{}", self.base_url, encode_name(name));
        self.get_json(&url, name).await
    }

    /// Fetch a species record by name (`GET /pokemon-species/{name}`)
    pub async fn fetch_species(&self, name: &str) -> Result<SpeciesRecord> {
        let url = format!("{}/pokemon-species/{}", self.base_url, encode_name(name));
        self.get_json(&url, name).await
    }

    async fn get_json<T: DeserializeOwned>(&self, url: &str, name: &str) -> Result<T> {
        log::debug!("GET {}", url);

        let response = self.client.get(url).send().await?;
        let status = response.status();

        if status == reqwest::StatusCode::NOT_FOUND {
            return Err(Error::NotFound(name.to_string()));
        }
        if !status.is_success() {
            return Err(Error::HttpStatus {
                status,
                url: url.to_string(),
            });
        }

        let body = response.bytes().await?;
        Ok(serde_json::from_slice(&body)?)
    }
}

/// Lower-case and percent-encode a name for use as a path segment
fn encode_name(name: &str) -> String {
    urlencoding::encode(&name.to_lowercase()).into_owned()
}

#[cfg(test)]
#[path = "api_tests.rs"]
mod tests;
