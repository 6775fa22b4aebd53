//! Catalog filter pipeline: fuzzy name query, elemental type and favorites-only.
//!
//! Filtering is a pure function of the roster, the [`FilterState`], a [`TypeLookup`]
//! and the favorites set. Callers recompute it whenever any of those change.

use std::collections::HashMap;

use pokedex_types::{IdSet, Language};

use crate::i18n::{t, type_label};
use crate::roster::{Roster, RosterEntry};
use crate::search::FuzzyMatcher;

/// Type criterion of the filter.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum TypeFilter {
    #[default]
    All,
    Only(String),
}

impl TypeFilter {
    /// Parse a select value; `"all"` (or empty) means no type filter.
    pub fn parse(value: &str) -> TypeFilter {
        let value = value.trim();
        if value.is_empty() || value.eq_ignore_ascii_case("all") {
            TypeFilter::All
        } else {
            TypeFilter::Only(value.to_lowercase())
        }
    }

    /// Value used by the type select control.
    pub fn as_value(&self) -> &str {
        match self {
            TypeFilter::All => "all",
            TypeFilter::Only(name) => name,
        }
    }
}

/// User-controlled filter criteria. Never persisted.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FilterState {
    pub query: String,
    pub selected_type: TypeFilter,
    pub favorites_only: bool,
}

impl FilterState {
    /// The query with surrounding whitespace removed.
    pub fn trimmed_query(&self) -> &str {
        self.query.trim()
    }

    pub fn is_active(&self) -> bool {
        !self.trimmed_query().is_empty()
            || self.selected_type != TypeFilter::All
            || self.favorites_only
    }

    /// Reset every criterion.
    pub fn clear(&mut self) {
        *self = FilterState::default();
    }

    /// Turn favorites-only off when there are no favorites left to show.
    ///
    /// Returns true when the toggle was cleared.
    pub fn reconcile_favorites(&mut self, favorites: &IdSet) -> bool {
        if self.favorites_only && favorites.is_empty() {
            self.favorites_only = false;
            return true;
        }
        false
    }
}

/// Answer of a type lookup for one entity.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TypeMatch {
    Pass,
    Fail,
    /// Type data for the entity has not loaded yet.
    Pending,
}

impl TypeMatch {
    /// Pending counts as a pass until the data arrives.
    pub fn passes(self) -> bool {
        !matches!(self, TypeMatch::Fail)
    }

    pub fn from_types<S: AsRef<str>>(types: &[S], wanted: &str) -> TypeMatch {
        if types.iter().any(|ty| ty.as_ref().eq_ignore_ascii_case(wanted)) {
            TypeMatch::Pass
        } else {
            TypeMatch::Fail
        }
    }
}

/// Answers "does entity `id` have type `type_name`".
pub trait TypeLookup {
    fn has_type(&self, id: u32, type_name: &str) -> TypeMatch;
}

impl TypeLookup for HashMap<u32, Vec<String>> {
    fn has_type(&self, id: u32, type_name: &str) -> TypeMatch {
        match self.get(&id) {
            Some(types) => TypeMatch::from_types(types, type_name),
            None => TypeMatch::Pending,
        }
    }
}

impl<L: TypeLookup + ?Sized> TypeLookup for &L {
    fn has_type(&self, id: u32, type_name: &str) -> TypeMatch {
        (**self).has_type(id, type_name)
    }
}

/// Roster entries that pass every active criterion, in roster order.
pub fn visible_entries<'r, L: TypeLookup + ?Sized>(
    roster: &'r Roster,
    filter: &FilterState,
    types: &L,
    favorites: &IdSet,
) -> Vec<&'r RosterEntry> {
    let query = filter.trimmed_query();
    let matcher = (!query.is_empty()).then(|| FuzzyMatcher::new(query));

    roster
        .entries()
        .iter()
        .filter(|entry| matcher.as_ref().is_none_or(|m| m.is_match(&entry.name)))
        .filter(|entry| !filter.favorites_only || favorites.contains(entry.id()))
        .filter(|entry| match &filter.selected_type {
            TypeFilter::All => true,
            TypeFilter::Only(name) => types.has_type(entry.id(), name).passes(),
        })
        .collect()
}

/// One run of no-results text; emphasized runs carry the user's own criteria.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Segment {
    pub text: String,
    pub emphasized: bool,
}

impl Segment {
    fn plain(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            emphasized: false,
        }
    }

    fn emphasized(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            emphasized: true,
        }
    }
}

/// Which criteria produced an empty result.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NoResultsReason {
    pub query: Option<String>,
    pub type_name: Option<String>,
    pub favorites_only: bool,
}

/// Describe the active criteria, or `None` when no filter is active.
pub fn explain_no_results(filter: &FilterState) -> Option<NoResultsReason> {
    if !filter.is_active() {
        return None;
    }
    let query = filter.trimmed_query();
    Some(NoResultsReason {
        query: (!query.is_empty()).then(|| query.to_string()),
        type_name: match &filter.selected_type {
            TypeFilter::All => None,
            TypeFilter::Only(name) => Some(name.clone()),
        },
        favorites_only: filter.favorites_only,
    })
}

fn split_placeholder<'a>(template: &'a str, name: &str) -> (&'a str, &'a str) {
    template
        .split_once(&format!("{{{{{name}}}}}"))
        .unwrap_or((template, ""))
}

impl NoResultsReason {
    /// Render as text runs in `lang`.
    pub fn segments(&self, lang: Language) -> Vec<Segment> {
        let mut out = Vec::new();
        let prefix = t(lang, "pokedex.noResultsFavoritesPrefix");

        match &self.query {
            Some(query) => {
                let (before, after) = split_placeholder(t(lang, "pokedex.noResultsWithName"), "query");
                if self.favorites_only {
                    out.push(Segment::plain(format!("{prefix} {}", before.to_lowercase())));
                } else {
                    out.push(Segment::plain(before));
                }
                out.push(Segment::emphasized(query.clone()));
                if !after.is_empty() {
                    out.push(Segment::plain(after));
                }
            }
            None => {
                let base = t(lang, "pokedex.noResultsBase");
                if self.favorites_only {
                    out.push(Segment::plain(format!("{prefix} {}", base.to_lowercase())));
                } else {
                    out.push(Segment::plain(base));
                }
            }
        }

        if let Some(type_name) = &self.type_name {
            let (before, after) = split_placeholder(t(lang, "pokedex.noResultsTypeCondition"), "type");
            out.push(Segment::plain(format!(" {before}")));
            out.push(Segment::emphasized(type_label(lang, type_name).to_lowercase()));
            if !after.is_empty() {
                out.push(Segment::plain(after));
            }
        }

        out.push(Segment::plain("."));
        out
    }

    /// The sentence without emphasis markup.
    pub fn to_text(&self, lang: Language) -> String {
        self.segments(lang).into_iter().map(|s| s.text).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn roster() -> Roster {
        ["bulbasaur", "ivysaur", "charmander", "squirtle", "pikachu"]
            .iter()
            .enumerate()
            .map(|(i, name)| {
                RosterEntry::new(*name, format!("https://pokeapi.co/api/v2/pokemon/{}/", i + 1))
            })
            .collect()
    }

    fn types() -> HashMap<u32, Vec<String>> {
        HashMap::from([
            (1, vec!["grass".to_string(), "poison".to_string()]),
            (2, vec!["grass".to_string(), "poison".to_string()]),
            (3, vec!["fire".to_string()]),
            (4, vec!["water".to_string()]),
        ])
    }

    fn names(entries: &[&RosterEntry]) -> Vec<String> {
        entries.iter().map(|e| e.name.clone()).collect()
    }

    #[test]
    fn unfiltered_keeps_roster_order() {
        let r = roster();
        let visible = visible_entries(&r, &FilterState::default(), &types(), &IdSet::new());
        assert_eq!(visible.len(), r.len());
        assert_eq!(
            names(&visible),
            vec!["bulbasaur", "ivysaur", "charmander", "squirtle", "pikachu"]
        );
    }

    #[test]
    fn whitespace_query_is_no_query() {
        let r = roster();
        let filter = FilterState {
            query: "   ".into(),
            ..Default::default()
        };
        assert!(!filter.is_active());
        assert_eq!(visible_entries(&r, &filter, &types(), &IdSet::new()).len(), 5);
    }

    #[test]
    fn favorites_only_shows_members() {
        let r = roster();
        let favorites: IdSet = [4, 2].into_iter().collect();
        let filter = FilterState {
            favorites_only: true,
            ..Default::default()
        };
        let visible = visible_entries(&r, &filter, &types(), &favorites);
        // Roster order, not favorites order
        assert_eq!(names(&visible), vec!["ivysaur", "squirtle"]);
    }

    #[test]
    fn type_filter_treats_pending_as_pass() {
        let r = roster();
        let filter = FilterState {
            selected_type: TypeFilter::Only("grass".into()),
            ..Default::default()
        };
        // pikachu (5) has no type data yet
        let visible = visible_entries(&r, &filter, &types(), &IdSet::new());
        assert_eq!(names(&visible), vec!["bulbasaur", "ivysaur", "pikachu"]);
    }

    #[test]
    fn unknown_type_matches_only_pending() {
        let r = roster();
        let filter = FilterState {
            selected_type: TypeFilter::parse("shadow"),
            ..Default::default()
        };
        let visible = visible_entries(&r, &filter, &types(), &IdSet::new());
        assert_eq!(names(&visible), vec!["pikachu"]);
    }

    #[test]
    fn criteria_combine_with_and() {
        let r = roster();
        let favorites: IdSet = [1, 3].into_iter().collect();
        let filter = FilterState {
            query: "char".into(),
            selected_type: TypeFilter::Only("fire".into()),
            favorites_only: true,
        };
        let visible = visible_entries(&r, &filter, &types(), &favorites);
        assert_eq!(names(&visible), vec!["charmander"]);
    }

    #[test]
    fn filtering_is_idempotent() {
        let r = roster();
        let filter = FilterState {
            query: "saur".into(),
            ..Default::default()
        };
        let once: Roster = visible_entries(&r, &filter, &types(), &IdSet::new())
            .into_iter()
            .cloned()
            .collect();
        let twice = visible_entries(&once, &filter, &types(), &IdSet::new());
        assert_eq!(names(&twice), once.entries().iter().map(|e| e.name.clone()).collect::<Vec<_>>());
    }

    #[test]
    fn clear_restores_full_roster() {
        let r = roster();
        let mut filter = FilterState {
            query: "zzz".into(),
            selected_type: TypeFilter::Only("water".into()),
            favorites_only: true,
        };
        assert!(visible_entries(&r, &filter, &types(), &IdSet::new()).is_empty());
        filter.clear();
        assert!(!filter.is_active());
        assert_eq!(visible_entries(&r, &filter, &types(), &IdSet::new()).len(), r.len());
    }

    #[test]
    fn reconcile_clears_toggle_without_favorites() {
        let mut filter = FilterState {
            favorites_only: true,
            ..Default::default()
        };
        assert!(!filter.reconcile_favorites(&[7].into_iter().collect()));
        assert!(filter.favorites_only);
        assert!(filter.reconcile_favorites(&IdSet::new()));
        assert!(!filter.favorites_only);
    }

    #[test]
    fn type_filter_parse() {
        assert_eq!(TypeFilter::parse("all"), TypeFilter::All);
        assert_eq!(TypeFilter::parse(""), TypeFilter::All);
        assert_eq!(TypeFilter::parse("Fire"), TypeFilter::Only("fire".into()));
        assert_eq!(TypeFilter::Only("water".into()).as_value(), "water");
    }

    fn explain(query: &str, ty: Option<&str>, favorites_only: bool, lang: Language) -> String {
        let filter = FilterState {
            query: query.into(),
            selected_type: ty.map(TypeFilter::parse).unwrap_or_default(),
            favorites_only,
        };
        explain_no_results(&filter)
            .map(|r| r.to_text(lang))
            .unwrap_or_default()
    }

    #[test]
    fn no_results_needs_an_active_filter() {
        assert!(explain_no_results(&FilterState::default()).is_none());
    }

    #[test]
    fn no_results_text_english() {
        let en = Language::En;
        assert_eq!(
            explain("pika", None, false, en),
            "I couldn't find any Pokémon named pika."
        );
        assert_eq!(
            explain("pika", None, true, en),
            "In your favorites i couldn't find any pokémon named pika."
        );
        assert_eq!(explain("", None, true, en), "In your favorites i couldn't find any pokémon.");
        assert_eq!(
            explain("", Some("fire"), false, en),
            "I couldn't find any Pokémon of type fire."
        );
        assert_eq!(
            explain("mew", Some("water"), true, en),
            "In your favorites i couldn't find any pokémon named mew of type water."
        );
    }

    #[test]
    fn no_results_text_polish() {
        let pl = Language::Pl;
        assert_eq!(
            explain("pika", None, false, pl),
            "Nie znalazłem Pokémona o nazwie pika."
        );
        assert_eq!(
            explain("", Some("fire"), true, pl),
            "W ulubionych nie znalazłem żadnego pokémona typu ognisty."
        );
    }

    #[test]
    fn no_results_emphasizes_user_input() {
        let filter = FilterState {
            query: "pika".into(),
            selected_type: TypeFilter::Only("electric".into()),
            favorites_only: false,
        };
        let segments = explain_no_results(&filter)
            .map(|r| r.segments(Language::En))
            .unwrap_or_default();
        let emphasized: Vec<_> = segments
            .iter()
            .filter(|s| s.emphasized)
            .map(|s| s.text.as_str())
            .collect();
        assert_eq!(emphasized, vec!["pika", "electric"]);
    }
}
