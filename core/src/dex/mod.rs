//! [`Pokedex`]: a PokeAPI client plus per-resource read-through caches.

use std::sync::Arc;

use futures_util::future::join_all;

use crate::api::{ApiError, EvolutionChain, PokeApi, Pokemon, Species, TypeInfo};
use crate::cache::ReadThroughCache;
use crate::filter::{TypeLookup, TypeMatch};
use crate::pokemon::MaxStats;
use crate::roster::{GEN1_COUNT, Roster};

pub struct Pokedex<C> {
    api: C,
    rosters: ReadThroughCache<(u32, u32), Roster>,
    pokemon: ReadThroughCache<u32, Pokemon>,
    species: ReadThroughCache<u32, Species>,
    chains: ReadThroughCache<String, EvolutionChain>,
    types: ReadThroughCache<String, TypeInfo>,
}

impl<C: PokeApi> Pokedex<C> {
    pub fn new(api: C) -> Self {
        Self {
            api,
            rosters: ReadThroughCache::new("roster"),
            pokemon: ReadThroughCache::new("pokemon"),
            species: ReadThroughCache::new("species"),
            chains: ReadThroughCache::new("evolution-chain"),
            types: ReadThroughCache::new("type"),
        }
    }

    pub fn api(&self) -> &C {
        &self.api
    }

    /// The Generation 1 roster.
    pub async fn gen1_roster(&self) -> Result<Arc<Roster>, ApiError> {
        self.roster(GEN1_COUNT, 0).await
    }

    pub async fn roster(&self, limit: u32, offset: u32) -> Result<Arc<Roster>, ApiError> {
        self.rosters
            .get_or_fetch((limit, offset), || async {
                let page = self.api.fetch_roster(limit, offset).await?;
                Ok(Roster::new(page.results))
            })
            .await
    }

    pub async fn pokemon(&self, id: u32) -> Result<Arc<Pokemon>, ApiError> {
        self.pokemon
            .get_or_fetch(id, || self.api.fetch_pokemon(id))
            .await
    }

    pub async fn species(&self, id: u32) -> Result<Arc<Species>, ApiError> {
        self.species
            .get_or_fetch(id, || self.api.fetch_species(id))
            .await
    }

    pub async fn evolution_chain(&self, url: &str) -> Result<Arc<EvolutionChain>, ApiError> {
        self.chains
            .get_or_fetch(url.to_string(), || self.api.fetch_evolution_chain(url))
            .await
    }

    /// The evolution chain of species `id`, `None` when the species has none.
    pub async fn evolution_for(&self, id: u32) -> Result<Option<Arc<EvolutionChain>>, ApiError> {
        let species = self.species(id).await?;
        match &species.evolution_chain {
            Some(chain) => self.evolution_chain(&chain.url).await.map(Some),
            None => Ok(None),
        }
    }

    pub async fn type_info(&self, name: &str) -> Result<Arc<TypeInfo>, ApiError> {
        let name = name.to_lowercase();
        self.types
            .get_or_fetch(name.clone(), || self.api.fetch_type(&name))
            .await
    }

    /// Already-loaded entity, without fetching.
    pub fn cached_pokemon(&self, id: u32) -> Option<Arc<Pokemon>> {
        self.pokemon.get(&id)
    }

    pub fn cached_roster(&self, limit: u32, offset: u32) -> Option<Arc<Roster>> {
        self.rosters.get(&(limit, offset))
    }

    pub fn cached_type(&self, name: &str) -> Option<Arc<TypeInfo>> {
        self.types.get(&name.to_lowercase())
    }

    /// Per-stat maxima over Pokémon `1..=count`, fetched concurrently.
    ///
    /// Entities that fail to load are skipped.
    pub async fn max_stats(&self, count: u32) -> MaxStats {
        let results = join_all((1..=count).map(|id| self.pokemon(id))).await;

        let mut failed = 0;
        let loaded: Vec<Arc<Pokemon>> = results
            .into_iter()
            .filter_map(|r| {
                r.map_err(|e| {
                    failed += 1;
                    tracing::debug!(error = %e, "skipping Pokémon in max stats");
                })
                .ok()
            })
            .collect();
        if failed > 0 {
            tracing::warn!(failed, loaded = loaded.len(), "max stats computed from partial data");
        }

        MaxStats::from_pokemon(loaded.iter().map(Arc::as_ref))
    }
}

impl<C> TypeLookup for Pokedex<C> {
    fn has_type(&self, id: u32, type_name: &str) -> TypeMatch {
        match self.pokemon.get(&id) {
            Some(p) => TypeMatch::from_types(&p.type_names(), type_name),
            None => TypeMatch::Pending,
        }
    }
}
