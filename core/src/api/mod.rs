//! PokeAPI access: response models, the [`PokeApi`] seam and its HTTP implementation.

mod client;
mod error;
pub mod models;

pub use client::{DEFAULT_BASE_URL, HttpClient};
pub use error::ApiError;
pub use models::{
    ChainLink, EvolutionChain, NamedResource, Pokemon, RosterPage, Species, TypeInfo, artwork_url,
};

/// Read-only PokeAPI operations.
///
/// Futures are not required to be `Send`; in the browser they run on the single wasm
/// event loop.
#[allow(async_fn_in_trait)]
pub trait PokeApi {
    async fn fetch_roster(&self, limit: u32, offset: u32) -> Result<RosterPage, ApiError>;
    async fn fetch_pokemon(&self, id: u32) -> Result<Pokemon, ApiError>;
    async fn fetch_species(&self, id: u32) -> Result<Species, ApiError>;
    async fn fetch_evolution_chain(&self, url: &str) -> Result<EvolutionChain, ApiError>;
    async fn fetch_type(&self, name: &str) -> Result<TypeInfo, ApiError>;
}
