//! reqwest-backed PokeAPI client.

use reqwest::Client;
use serde::de::DeserializeOwned;

use super::error::ApiError;
use super::models::{EvolutionChain, Pokemon, RosterPage, Species, TypeInfo};
use super::PokeApi;

pub const DEFAULT_BASE_URL: &str = "https://pokeapi.co/api/v2";

/// Client for the public PokeAPI REST service
#[derive(Debug, Clone)]
pub struct HttpClient {
    client: Client,
    base_url: String,
}

impl Default for HttpClient {
    fn default() -> Self {
        Self::new()
    }
}

impl HttpClient {
    pub fn new() -> Self {
        Self::with_base_url(DEFAULT_BASE_URL)
    }

    pub fn with_base_url(base_url: &str) -> Self {
        Self {
            client: Client::new(),
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn endpoint(&self, path: &str) -> String {
        format!("{}/{}", self.base_url, path.trim_start_matches('/'))
    }

    async fn get_json<T: DeserializeOwned>(&self, url: String) -> Result<T, ApiError> {
        tracing::debug!(%url, "GET");

        let response = self
            .client
            .get(&url)
            .send()
            .await
            .map_err(|e| ApiError::Transport {
                url: url.clone(),
                message: e.to_string(),
            })?;

        let status = response.status();
        if !status.is_success() {
            return Err(ApiError::Status {
                url,
                status: status.as_u16(),
            });
        }

        let body = response.bytes().await.map_err(|e| ApiError::Transport {
            url: url.clone(),
            message: e.to_string(),
        })?;

        serde_json::from_slice(&body).map_err(|e| ApiError::Decode {
            url,
            message: e.to_string(),
        })
    }
}

impl PokeApi for HttpClient {
    async fn fetch_roster(&self, limit: u32, offset: u32) -> Result<RosterPage, ApiError> {
        self.get_json(self.endpoint(&format!("pokemon?limit={limit}&offset={offset}")))
            .await
    }

    async fn fetch_pokemon(&self, id: u32) -> Result<Pokemon, ApiError> {
        self.get_json(self.endpoint(&format!("pokemon/{id}"))).await
    }

    async fn fetch_species(&self, id: u32) -> Result<Species, ApiError> {
        self.get_json(self.endpoint(&format!("pokemon-species/{id}")))
            .await
    }

    async fn fetch_evolution_chain(&self, url: &str) -> Result<EvolutionChain, ApiError> {
        let url = if url.starts_with("http://") || url.starts_with("https://") {
            url.to_string()
        } else {
            self.endpoint(url)
        };
        self.get_json(url).await
    }

    async fn fetch_type(&self, name: &str) -> Result<TypeInfo, ApiError> {
        self.get_json(self.endpoint(&format!("type/{}", name.to_lowercase())))
            .await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn endpoints_join_cleanly() {
        let client = HttpClient::with_base_url("http://localhost:8080/api/v2/");
        assert_eq!(client.base_url(), "http://localhost:8080/api/v2");
        assert_eq!(
            client.endpoint("/pokemon/25"),
            "http://localhost:8080/api/v2/pokemon/25"
        );
        assert_eq!(HttpClient::new().endpoint("type/fire"), "https://pokeapi.co/api/v2/type/fire");
    }
}
