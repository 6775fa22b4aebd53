//! PokeAPI response bodies.
//!
//! Only the fields the app reads are modelled; serde ignores the rest. Collections default
//! to empty so sparse bodies still decode.

use serde::{Deserialize, Serialize};

use crate::roster::{RosterEntry, id_from_url};

/// Official artwork for a Pokémon, addressable without fetching it first.
pub fn artwork_url(id: u32) -> String {
    format!(
        "https://raw.githubusercontent.com/PokeAPI/sprites/master/sprites/pokemon/other/official-artwork/{id}.png"
    )
}

/// A `{name, url}` reference to another resource.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NamedResource {
    pub name: String,
    #[serde(default)]
    pub url: String,
}

impl NamedResource {
    pub fn id(&self) -> u32 {
        id_from_url(&self.url)
    }
}

/// `GET /pokemon?limit=&offset=`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RosterPage {
    #[serde(default)]
    pub count: u32,
    #[serde(default)]
    pub next: Option<String>,
    #[serde(default)]
    pub previous: Option<String>,
    #[serde(default)]
    pub results: Vec<RosterEntry>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Artwork {
    #[serde(default)]
    pub front_default: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct OtherSprites {
    #[serde(rename = "official-artwork", default)]
    pub official_artwork: Artwork,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Sprites {
    #[serde(default)]
    pub front_default: Option<String>,
    #[serde(default)]
    pub other: OtherSprites,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TypeSlot {
    pub slot: u8,
    #[serde(rename = "type")]
    pub kind: NamedResource,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StatValue {
    pub base_stat: u32,
    #[serde(default)]
    pub effort: u32,
    pub stat: NamedResource,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AbilitySlot {
    #[serde(default)]
    pub is_hidden: bool,
    #[serde(default)]
    pub slot: u8,
    pub ability: NamedResource,
}

/// `GET /pokemon/{id}`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Pokemon {
    pub id: u32,
    pub name: String,
    /// Decimetres
    #[serde(default)]
    pub height: u32,
    /// Hectograms
    #[serde(default)]
    pub weight: u32,
    #[serde(default)]
    pub sprites: Sprites,
    #[serde(default)]
    pub types: Vec<TypeSlot>,
    #[serde(default)]
    pub stats: Vec<StatValue>,
    #[serde(default)]
    pub abilities: Vec<AbilitySlot>,
    pub species: NamedResource,
}

impl Pokemon {
    /// Type names in slot order.
    pub fn type_names(&self) -> Vec<String> {
        let mut slots: Vec<&TypeSlot> = self.types.iter().collect();
        slots.sort_by_key(|s| s.slot);
        slots.into_iter().map(|s| s.kind.name.clone()).collect()
    }

    pub fn stat(&self, name: &str) -> Option<u32> {
        self.stats
            .iter()
            .find(|s| s.stat.name == name)
            .map(|s| s.base_stat)
    }

    /// Official artwork, then the small sprite, then the well-known artwork URL.
    pub fn image_url(&self) -> String {
        self.sprites
            .other
            .official_artwork
            .front_default
            .clone()
            .or_else(|| self.sprites.front_default.clone())
            .unwrap_or_else(|| artwork_url(self.id))
    }

    pub fn ability_names(&self) -> Vec<&str> {
        self.abilities.iter().map(|a| a.ability.name.as_str()).collect()
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FlavorTextEntry {
    pub flavor_text: String,
    pub language: NamedResource,
    #[serde(default)]
    pub version: Option<NamedResource>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Genus {
    pub genus: String,
    pub language: NamedResource,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LocalizedName {
    pub name: String,
    pub language: NamedResource,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UrlRef {
    pub url: String,
}

/// `GET /pokemon-species/{id}`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Species {
    pub id: u32,
    pub name: String,
    #[serde(default)]
    pub evolution_chain: Option<UrlRef>,
    #[serde(default)]
    pub flavor_text_entries: Vec<FlavorTextEntry>,
    #[serde(default)]
    pub genera: Vec<Genus>,
    #[serde(default)]
    pub names: Vec<LocalizedName>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChainLink {
    #[serde(default)]
    pub is_baby: bool,
    pub species: NamedResource,
    #[serde(default)]
    pub evolves_to: Vec<ChainLink>,
}

/// `GET {evolution_chain.url}`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EvolutionChain {
    pub id: u32,
    pub chain: ChainLink,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct DamageRelations {
    pub double_damage_from: Vec<NamedResource>,
    pub double_damage_to: Vec<NamedResource>,
    pub half_damage_from: Vec<NamedResource>,
    pub half_damage_to: Vec<NamedResource>,
    pub no_damage_from: Vec<NamedResource>,
    pub no_damage_to: Vec<NamedResource>,
}

/// `GET /type/{name}`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TypeInfo {
    pub id: u32,
    pub name: String,
    #[serde(default)]
    pub names: Vec<LocalizedName>,
    #[serde(default)]
    pub damage_relations: DamageRelations,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn decodes_sparse_pokemon() {
        let json = r#"{
            "id": 25,
            "name": "pikachu",
            "height": 4,
            "weight": 60,
            "base_experience": 112,
            "types": [{"slot": 1, "type": {"name": "electric", "url": "https://pokeapi.co/api/v2/type/13/"}}],
            "stats": [{"base_stat": 35, "effort": 0, "stat": {"name": "hp", "url": ""}}],
            "species": {"name": "pikachu", "url": "https://pokeapi.co/api/v2/pokemon-species/25/"}
        }"#;

        let p: Pokemon = serde_json::from_str(json).unwrap();
        assert_eq!(p.type_names(), vec!["electric"]);
        assert_eq!(p.stat("hp"), Some(35));
        assert_eq!(p.stat("speed"), None);
        assert!(p.abilities.is_empty());
        assert_eq!(p.species.id(), 25);
        assert_eq!(p.image_url(), artwork_url(25));
    }

    #[test]
    fn type_names_follow_slot_order() {
        let json = r#"{
            "id": 1, "name": "bulbasaur",
            "types": [
                {"slot": 2, "type": {"name": "poison", "url": ""}},
                {"slot": 1, "type": {"name": "grass", "url": ""}}
            ],
            "sprites": {"front_default": "small.png", "other": {"official-artwork": {"front_default": "big.png"}}},
            "species": {"name": "bulbasaur", "url": ""}
        }"#;

        let p: Pokemon = serde_json::from_str(json).unwrap();
        assert_eq!(p.type_names(), vec!["grass", "poison"]);
        assert_eq!(p.image_url(), "big.png");
    }
}
