//! Values derived from PokeAPI resources for display.

use phf::phf_map;
use pokedex_types::Language;
use pokedex_types::formatting::display_name;

use crate::api::models::{ChainLink, EvolutionChain, NamedResource, Pokemon, Species, TypeInfo};

/// The 18 elemental types, in type-select order.
pub const POKEMON_TYPES: [&str; 18] = [
    "normal", "fire", "water", "grass", "electric", "ice", "fighting", "poison", "ground",
    "flying", "psychic", "bug", "rock", "ghost", "dragon", "dark", "steel", "fairy",
];

/// PokeAPI stat names in display order.
pub const STAT_NAMES: [&str; 6] = [
    "hp",
    "attack",
    "defense",
    "special-attack",
    "special-defense",
    "speed",
];

/// Upper bound of any base stat, used when no better maximum is known.
pub const STAT_CEILING: u32 = 255;

// ─────────────────────────────────────────────────────────────────────────────
// Species text
// ─────────────────────────────────────────────────────────────────────────────

fn normalize_flavor(text: &str) -> String {
    text.chars()
        .map(|c| match c {
            '\u{000C}' | '\n' | '\r' | '\u{00AD}' => ' ',
            c => c,
        })
        .collect::<String>()
        .split_whitespace()
        .collect::<Vec<_>>()
        .join(" ")
}

/// Pokédex entry text in `lang`, else English, else `None`.
pub fn flavor_text(species: &Species, lang: Language) -> Option<String> {
    let pick = |code: &str| {
        species
            .flavor_text_entries
            .iter()
            .find(|e| e.language.name == code)
    };
    pick(lang.code())
        .or_else(|| pick("en"))
        .map(|e| normalize_flavor(&e.flavor_text))
}

/// Category ("Seed Pokémon") in `lang`, else English, else `None`.
pub fn genus(species: &Species, lang: Language) -> Option<String> {
    let pick = |code: &str| species.genera.iter().find(|g| g.language.name == code);
    pick(lang.code())
        .or_else(|| pick("en"))
        .map(|g| g.genus.clone())
}

/// Species name in `lang`, else English, else the capitalized slug.
pub fn species_name(species: &Species, lang: Language) -> String {
    let pick = |code: &str| species.names.iter().find(|n| n.language.name == code);
    pick(lang.code())
        .or_else(|| pick("en"))
        .map(|n| n.name.clone())
        .unwrap_or_else(|| display_name(&species.name))
}

// ─────────────────────────────────────────────────────────────────────────────
// Evolution
// ─────────────────────────────────────────────────────────────────────────────

fn collect_ids(link: &ChainLink, out: &mut Vec<u32>) {
    let id = link.species.id();
    if id != 0 {
        out.push(id);
    }
    for next in &link.evolves_to {
        collect_ids(next, out);
    }
}

/// Species IDs of a chain, depth-first in pre-order.
pub fn evolution_ids(chain: &EvolutionChain) -> Vec<u32> {
    let mut ids = Vec::new();
    collect_ids(&chain.chain, &mut ids);
    ids
}

// ─────────────────────────────────────────────────────────────────────────────
// Detail navigation
// ─────────────────────────────────────────────────────────────────────────────

/// Next ID, wrapping from `max` back to 1.
pub fn next_id(id: u32, max: u32) -> u32 {
    if id >= max { 1 } else { id + 1 }
}

/// Previous ID, wrapping from 1 to `max`.
pub fn prev_id(id: u32, max: u32) -> u32 {
    if id <= 1 { max } else { id - 1 }
}

// ─────────────────────────────────────────────────────────────────────────────
// Stats
// ─────────────────────────────────────────────────────────────────────────────

/// Highest value of each base stat across a set of Pokémon.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MaxStats([u32; 6]);

impl Default for MaxStats {
    fn default() -> Self {
        Self([STAT_CEILING; 6])
    }
}

impl MaxStats {
    /// Per-stat maximum; a stat no Pokémon reported falls back to [`STAT_CEILING`].
    pub fn from_pokemon<'a>(pokemon: impl IntoIterator<Item = &'a Pokemon>) -> Self {
        let mut max = [0u32; 6];
        for p in pokemon {
            for stat in &p.stats {
                if let Some(i) = STAT_NAMES.iter().position(|n| *n == stat.stat.name) {
                    max[i] = max[i].max(stat.base_stat);
                }
            }
        }
        for value in &mut max {
            if *value == 0 {
                *value = STAT_CEILING;
            }
        }
        Self(max)
    }

    pub fn get(&self, stat: &str) -> u32 {
        STAT_NAMES
            .iter()
            .position(|n| *n == stat)
            .map(|i| self.0[i])
            .unwrap_or(STAT_CEILING)
    }
}

/// Ten-step red → yellow → green color band for a stat bar.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StatBand {
    DarkRed,
    Red,
    DarkOrange,
    Orange,
    LightOrange,
    Yellow,
    LimeGreen,
    YellowGreen,
    LightGreen,
    Green,
}

impl StatBand {
    /// Band for `value` as a share of `max` (a `max` of 0 uses [`STAT_CEILING`]).
    pub fn for_ratio(value: u32, max: u32) -> StatBand {
        let max = if max == 0 { STAT_CEILING } else { max };
        let pct = value as f64 / max as f64 * 100.0;
        match pct {
            p if p >= 90.0 => StatBand::Green,
            p if p >= 80.0 => StatBand::LightGreen,
            p if p >= 70.0 => StatBand::YellowGreen,
            p if p >= 60.0 => StatBand::LimeGreen,
            p if p >= 50.0 => StatBand::Yellow,
            p if p >= 40.0 => StatBand::LightOrange,
            p if p >= 30.0 => StatBand::Orange,
            p if p >= 20.0 => StatBand::DarkOrange,
            p if p >= 10.0 => StatBand::Red,
            _ => StatBand::DarkRed,
        }
    }

    pub fn color(self) -> &'static str {
        match self {
            StatBand::Green => "#57BB8A",
            StatBand::LightGreen => "#6FC77F",
            StatBand::YellowGreen => "#87D374",
            StatBand::LimeGreen => "#A0DF6A",
            StatBand::Yellow => "#FFD666",
            StatBand::LightOrange => "#F5C166",
            StatBand::Orange => "#EBAC67",
            StatBand::DarkOrange => "#E1976A",
            StatBand::Red => "#E67C73",
            StatBand::DarkRed => "#DB6B62",
        }
    }
}

/// Bar width in percent, clamped to 0..=100.
pub fn stat_percent(value: u32, max: u32) -> f64 {
    let max = if max == 0 { STAT_CEILING } else { max };
    (value as f64 / max as f64 * 100.0).clamp(0.0, 100.0)
}

// ─────────────────────────────────────────────────────────────────────────────
// Types
// ─────────────────────────────────────────────────────────────────────────────

/// Badge colors for an elemental type.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TypeColor {
    pub background: &'static str,
    pub text: &'static str,
    pub border: &'static str,
}

static TYPE_COLORS: phf::Map<&'static str, TypeColor> = phf_map! {
    "normal" => TypeColor { background: "#94a3b8", text: "#0f172a", border: "#64748b" },
    "fire" => TypeColor { background: "#f97316", text: "#ffffff", border: "#ea580c" },
    "water" => TypeColor { background: "#3b82f6", text: "#ffffff", border: "#2563eb" },
    "grass" => TypeColor { background: "#22c55e", text: "#ffffff", border: "#16a34a" },
    "electric" => TypeColor { background: "#facc15", text: "#713f12", border: "#eab308" },
    "ice" => TypeColor { background: "#22d3ee", text: "#164e63", border: "#06b6d4" },
    "fighting" => TypeColor { background: "#dc2626", text: "#ffffff", border: "#b91c1c" },
    "poison" => TypeColor { background: "#a855f7", text: "#ffffff", border: "#9333ea" },
    "ground" => TypeColor { background: "#d97706", text: "#ffffff", border: "#b45309" },
    "flying" => TypeColor { background: "#818cf8", text: "#ffffff", border: "#6366f1" },
    "psychic" => TypeColor { background: "#ec4899", text: "#ffffff", border: "#db2777" },
    "bug" => TypeColor { background: "#84cc16", text: "#365314", border: "#65a30d" },
    "rock" => TypeColor { background: "#57534e", text: "#ffffff", border: "#44403c" },
    "ghost" => TypeColor { background: "#7e22ce", text: "#ffffff", border: "#6b21a8" },
    "dragon" => TypeColor { background: "#7c3aed", text: "#ffffff", border: "#6d28d9" },
    "dark" => TypeColor { background: "#1f2937", text: "#ffffff", border: "#111827" },
    "steel" => TypeColor { background: "#64748b", text: "#ffffff", border: "#475569" },
    "fairy" => TypeColor { background: "#f472b6", text: "#831843", border: "#ec4899" },
};

/// Palette entry for `type_name`; unknown types use the `normal` colors.
pub fn type_color(type_name: &str) -> TypeColor {
    let key = type_name.to_lowercase();
    TYPE_COLORS
        .get(key.as_str())
        .or_else(|| TYPE_COLORS.get("normal"))
        .copied()
        .unwrap_or(TypeColor {
            background: "#94a3b8",
            text: "#0f172a",
            border: "#64748b",
        })
}

impl TypeInfo {
    /// Type name in `lang`, else English, else the capitalized slug.
    pub fn localized_name(&self, lang: Language) -> String {
        let pick = |code: &str| self.names.iter().find(|n| n.language.name == code);
        pick(lang.code())
            .or_else(|| pick("en"))
            .map(|n| n.name.clone())
            .unwrap_or_else(|| display_name(&self.name))
    }

    /// Types that deal double damage to this one.
    pub fn weaknesses(&self) -> Vec<&str> {
        self.damage_relations
            .double_damage_from
            .iter()
            .map(|r| r.name.as_str())
            .collect()
    }

    /// Damage multiplier of an attack of `attacking` type against this type.
    pub fn multiplier_from(&self, attacking: &str) -> f32 {
        let rel = &self.damage_relations;
        if lists(&rel.no_damage_from, attacking) {
            0.0
        } else if lists(&rel.double_damage_from, attacking) {
            2.0
        } else if lists(&rel.half_damage_from, attacking) {
            0.5
        } else {
            1.0
        }
    }
}

fn lists(list: &[NamedResource], name: &str) -> bool {
    list.iter().any(|r| r.name == name)
}

/// Attacking types that deal more than normal damage to a Pokémon with all of `defending`.
///
/// Multipliers of dual types combine, so a 2× and a 0.5× cancel out. Sorted by
/// multiplier (highest first), then by type order.
pub fn combined_weaknesses(defending: &[&TypeInfo]) -> Vec<(&'static str, f32)> {
    let mut out: Vec<(&'static str, f32)> = POKEMON_TYPES
        .iter()
        .map(|&attacking| {
            let m = defending
                .iter()
                .map(|t| t.multiplier_from(attacking))
                .product::<f32>();
            (attacking, m)
        })
        .filter(|(_, m)| *m > 1.0)
        .collect();
    out.sort_by(|a, b| b.1.total_cmp(&a.1));
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::models::{
        DamageRelations, FlavorTextEntry, Genus, LocalizedName, StatValue,
    };

    fn res(name: &str) -> NamedResource {
        NamedResource {
            name: name.to_string(),
            url: String::new(),
        }
    }

    fn species() -> Species {
        Species {
            id: 1,
            name: "bulbasaur".into(),
            evolution_chain: None,
            flavor_text_entries: vec![
                FlavorTextEntry {
                    flavor_text: "A strange seed was\nplanted on its\u{c}back at birth.".into(),
                    language: res("en"),
                    version: Some(res("red")),
                },
                FlavorTextEntry {
                    flavor_text: "Second english entry".into(),
                    language: res("en"),
                    version: Some(res("blue")),
                },
            ],
            genera: vec![
                Genus {
                    genus: "Seed Pokémon".into(),
                    language: res("en"),
                },
                Genus {
                    genus: "Pokémon Nasiono".into(),
                    language: res("pl"),
                },
            ],
            names: vec![LocalizedName {
                name: "Bulbasaur".into(),
                language: res("en"),
            }],
        }
    }

    #[test]
    fn flavor_text_falls_back_to_english_and_is_normalized() {
        let s = species();
        let expected = "A strange seed was planted on its back at birth.";
        assert_eq!(flavor_text(&s, Language::En).as_deref(), Some(expected));
        assert_eq!(flavor_text(&s, Language::Pl).as_deref(), Some(expected));

        let mut empty = s.clone();
        empty.flavor_text_entries.clear();
        assert_eq!(flavor_text(&empty, Language::En), None);
    }

    #[test]
    fn genus_prefers_requested_language() {
        let s = species();
        assert_eq!(genus(&s, Language::Pl).as_deref(), Some("Pokémon Nasiono"));
        assert_eq!(genus(&s, Language::En).as_deref(), Some("Seed Pokémon"));

        let mut only_pl = s.clone();
        only_pl.genera.retain(|g| g.language.name == "pl");
        assert_eq!(genus(&only_pl, Language::En), None);
    }

    #[test]
    fn species_name_falls_back_to_slug() {
        let mut s = species();
        assert_eq!(species_name(&s, Language::Pl), "Bulbasaur");
        s.names.clear();
        s.name = "mr-mime".into();
        assert_eq!(species_name(&s, Language::En), "Mr Mime");
    }

    fn link(id: u32, evolves_to: Vec<ChainLink>) -> ChainLink {
        ChainLink {
            is_baby: false,
            species: NamedResource {
                name: format!("species-{id}"),
                url: format!("https://pokeapi.co/api/v2/pokemon-species/{id}/"),
            },
            evolves_to,
        }
    }

    #[test]
    fn evolution_ids_are_preorder() {
        // Eevee-like branching: 133 → {134, 135, 136}
        let chain = EvolutionChain {
            id: 67,
            chain: link(133, vec![link(134, vec![]), link(135, vec![]), link(136, vec![])]),
        };
        assert_eq!(evolution_ids(&chain), vec![133, 134, 135, 136]);

        let linear = EvolutionChain {
            id: 1,
            chain: link(1, vec![link(2, vec![link(3, vec![])])]),
        };
        assert_eq!(evolution_ids(&linear), vec![1, 2, 3]);
    }

    #[test]
    fn navigation_wraps() {
        assert_eq!(next_id(151, 151), 1);
        assert_eq!(next_id(1, 151), 2);
        assert_eq!(prev_id(1, 151), 151);
        assert_eq!(prev_id(100, 151), 99);
    }

    #[test]
    fn stat_bands() {
        assert_eq!(StatBand::for_ratio(255, 255), StatBand::Green);
        assert_eq!(StatBand::for_ratio(50, 100), StatBand::Yellow);
        assert_eq!(StatBand::for_ratio(49, 100), StatBand::LightOrange);
        assert_eq!(StatBand::for_ratio(5, 100), StatBand::DarkRed);
        assert_eq!(StatBand::for_ratio(10, 0), StatBand::DarkRed);
        assert_eq!(StatBand::Yellow.color(), "#FFD666");
        assert_eq!(stat_percent(300, 255), 100.0);
    }

    fn pokemon_with(stats: &[(&str, u32)]) -> Pokemon {
        Pokemon {
            id: 1,
            name: "test".into(),
            height: 0,
            weight: 0,
            sprites: Default::default(),
            types: vec![],
            stats: stats
                .iter()
                .map(|(name, value)| StatValue {
                    base_stat: *value,
                    effort: 0,
                    stat: res(name),
                })
                .collect(),
            abilities: vec![],
            species: res("test"),
        }
    }

    #[test]
    fn max_stats_take_per_stat_maximum() {
        let a = pokemon_with(&[("hp", 250), ("attack", 50)]);
        let b = pokemon_with(&[("hp", 40), ("attack", 134)]);
        let max = MaxStats::from_pokemon([&a, &b]);
        assert_eq!(max.get("hp"), 250);
        assert_eq!(max.get("attack"), 134);
        // Nobody reported speed
        assert_eq!(max.get("speed"), STAT_CEILING);
        assert_eq!(MaxStats::from_pokemon([]), MaxStats::default());
    }

    #[test]
    fn unknown_type_uses_normal_colors() {
        assert_eq!(type_color("shadow"), type_color("normal"));
        assert_eq!(type_color("FIRE").background, "#f97316");
    }

    fn type_info(name: &str, double: &[&str], half: &[&str], none: &[&str]) -> TypeInfo {
        TypeInfo {
            id: 0,
            name: name.into(),
            names: vec![LocalizedName {
                name: "Ognisty".into(),
                language: res("pl"),
            }],
            damage_relations: DamageRelations {
                double_damage_from: double.iter().map(|n| res(n)).collect(),
                half_damage_from: half.iter().map(|n| res(n)).collect(),
                no_damage_from: none.iter().map(|n| res(n)).collect(),
                ..Default::default()
            },
        }
    }

    #[test]
    fn type_names_and_weaknesses() {
        let fire = type_info("fire", &["water", "ground", "rock"], &["fire", "grass"], &[]);
        assert_eq!(fire.localized_name(Language::Pl), "Ognisty");
        assert_eq!(fire.localized_name(Language::En), "Fire");
        assert_eq!(fire.weaknesses(), vec!["water", "ground", "rock"]);
    }

    #[test]
    fn dual_type_multipliers_combine() {
        // Charizard: fire/flying
        let fire = type_info(
            "fire",
            &["water", "ground", "rock"],
            &["fire", "grass", "bug", "ice", "steel", "fairy"],
            &[],
        );
        let flying = type_info("flying", &["electric", "ice", "rock"], &["grass", "bug"], &["ground"]);
        let weak = combined_weaknesses(&[&fire, &flying]);

        assert_eq!(weak.first(), Some(&("rock", 4.0)));
        assert!(weak.contains(&("water", 2.0)));
        assert!(weak.contains(&("electric", 2.0)));
        // ground is 2× against fire but flying is immune
        assert!(!weak.iter().any(|(name, _)| *name == "ground"));
        assert!(!weak.iter().any(|(name, _)| *name == "ice"));
    }
}
