use std::sync::Arc;

use futures_util::future::join_all;
use pokedex_core::filter::explain_no_results;
use pokedex_core::i18n::{stat_label, t, t_args, type_label};
use pokedex_core::pokemon::{
    STAT_NAMES, combined_weaknesses, evolution_ids, flavor_text, genus, species_name,
    stat_percent,
};
use pokedex_core::{
    ConfyBackend, FilterState, GEN1_COUNT, Roster, TypeFilter, TypeLookup, TypeMatch,
    visible_entries,
};
use pokedex_types::formatting::{
    display_name, format_dex_number, format_height, format_pct_ratio, format_weight,
};
use pokedex_types::{Language, Theme};
use tokio::sync::RwLock;

use crate::state::AppState;

const STAT_BAR_WIDTH: usize = 20;

/// Display name of `id` from the loaded roster, or its dex number.
pub fn name_of(roster: Option<&Roster>, id: u32) -> String {
    roster
        .and_then(|r| r.name_of(id))
        .map(display_name)
        .unwrap_or_else(|| format_dex_number(id))
}

pub async fn list(
    state: Arc<RwLock<AppState>>,
    query: Option<String>,
    kind: Option<String>,
    favorites_only: bool,
) -> Result<(), String> {
    let (dex, lang, favorites) = {
        let s = state.read().await;
        (Arc::clone(&s.dex), s.lang(), s.prefs.favorites().clone())
    };
    let roster = dex
        .gen1_roster()
        .await
        .map_err(|e| format!("{}: {e}\n", t(lang, "pokedex.error")))?;

    let mut filter = FilterState {
        query: query.unwrap_or_default(),
        selected_type: TypeFilter::parse(kind.as_deref().unwrap_or("all")),
        favorites_only,
    };
    if filter.reconcile_favorites(&favorites) {
        println!("{}", t(lang, "pokedex.noFavorites"));
    }

    // Types are only known once each Pokémon is loaded; unloaded ones stay visible
    if let TypeFilter::Only(_) = filter.selected_type {
        let failed = join_all(roster.ids().into_iter().map(|id| dex.pokemon(id)))
            .await
            .into_iter()
            .filter(Result::is_err)
            .count();
        if failed > 0 {
            tracing::warn!(failed, "type data incomplete, showing unresolved entries");
        }
    }

    let visible = visible_entries(&roster, &filter, dex.as_ref(), &favorites);
    if visible.is_empty() {
        if let Some(reason) = explain_no_results(&filter) {
            println!("{}", reason.to_text(lang));
            return Ok(());
        }
    }

    let caught = state.read().await.prefs.caught().clone();
    for entry in &visible {
        let id = entry.id();
        let mut marks = String::new();
        if favorites.contains(id) {
            marks.push_str(" ★");
        }
        if caught.contains(id) {
            marks.push_str(" ✓");
        }
        println!("{} {}{}", format_dex_number(id), display_name(&entry.name), marks);
    }
    let count = visible.len().to_string();
    println!("{}", t_args(lang, "pokedex.found", &[("count", &count)]));
    Ok(())
}

pub async fn show(state: Arc<RwLock<AppState>>, id: u32) -> Result<(), String> {
    let (dex, lang, favorite, caught) = {
        let s = state.read().await;
        (
            Arc::clone(&s.dex),
            s.lang(),
            s.prefs.is_favorite(id),
            s.prefs.is_caught(id),
        )
    };
    let comma = lang.decimal_comma();

    let pokemon = dex
        .pokemon(id)
        .await
        .map_err(|e| format!("{}: {e}\n", t(lang, "pokedex.error")))?;
    // The rest of the entry degrades to omitted sections
    let species = dex.species(id).await.ok();
    let roster = dex.gen1_roster().await.ok();

    let name = species
        .as_deref()
        .map(|s| species_name(s, lang))
        .unwrap_or_else(|| display_name(&pokemon.name));
    let mut marks = String::new();
    if favorite {
        marks.push_str(" ★");
    }
    if caught {
        marks.push_str(" ✓");
    }
    println!("{} {name}{marks}", format_dex_number(pokemon.id));

    let types = pokemon.type_names();
    let labels: Vec<String> = types.iter().map(|t| type_label(lang, t)).collect();
    println!("  {}: {}", t(lang, "detail.type"), labels.join(" / "));
    if let Some(category) = species.as_deref().and_then(|s| genus(s, lang)) {
        println!("  {}: {category}", t(lang, "detail.genus"));
    }
    println!(
        "  {}: {}  {}: {}",
        t(lang, "detail.height"),
        format_height(pokemon.height, comma),
        t(lang, "detail.weight"),
        format_weight(pokemon.weight, comma)
    );
    let abilities: Vec<String> = pokemon
        .ability_names()
        .into_iter()
        .map(display_name)
        .collect();
    println!("  {}: {}", t(lang, "detail.abilities"), abilities.join(", "));
    if let Some(text) = species.as_deref().and_then(|s| flavor_text(s, lang)) {
        println!("\n  {text}\n");
    }

    println!("  {}", t(lang, "detail.baseStats"));
    let max = dex.max_stats(GEN1_COUNT).await;
    for stat in STAT_NAMES {
        let value = pokemon.stat(stat).unwrap_or(0);
        let filled = (stat_percent(value, max.get(stat)) / 100.0 * STAT_BAR_WIDTH as f64)
            .round() as usize;
        println!(
            "  {:<10} {:>3} {}{}",
            stat_label(lang, stat),
            value,
            "█".repeat(filled),
            "░".repeat(STAT_BAR_WIDTH.saturating_sub(filled))
        );
    }

    let type_infos: Vec<_> = join_all(types.iter().map(|t| dex.type_info(t)))
        .await
        .into_iter()
        .filter_map(Result::ok)
        .collect();
    if type_infos.len() == types.len() {
        let refs: Vec<_> = type_infos.iter().map(Arc::as_ref).collect();
        let weaknesses: Vec<String> = combined_weaknesses(&refs)
            .into_iter()
            .map(|(kind, mult)| format!("{} ×{mult}", type_label(lang, kind)))
            .collect();
        println!("  {}: {}", t(lang, "detail.weaknesses"), weaknesses.join(", "));
    }

    if let Ok(Some(chain)) = dex.evolution_for(id).await {
        let stages: Vec<String> = evolution_ids(&chain)
            .into_iter()
            .map(|id| name_of(roster.as_deref(), id))
            .collect();
        if stages.len() > 1 {
            println!("  {}: {}", t(lang, "detail.evolution"), stages.join(" → "));
        }
    }
    Ok(())
}

#[derive(Debug, Clone, Copy)]
enum Mark {
    Favorite,
    Caught,
}

/// Confirmation for a toggle that left the mark `now` set or cleared.
fn toggle_message(mark: Mark, now: bool) -> &'static str {
    match (mark, now) {
        (Mark::Favorite, true) => "pokedex.favoriteAdded",
        (Mark::Favorite, false) => "pokedex.favoriteRemoved",
        (Mark::Caught, true) => "pokedex.caughtMarked",
        (Mark::Caught, false) => "pokedex.caughtUnmarked",
    }
}

pub async fn toggle_favorite(state: Arc<RwLock<AppState>>, id: u32) -> Result<(), String> {
    let mut s = state.write().await;
    let now = s.prefs.toggle_favorite(id);
    let lang = s.lang();
    let name = name_of(s.dex.cached_roster(GEN1_COUNT, 0).as_deref(), id);
    println!("{} {name}: {}", if now { "★" } else { "☆" }, t(lang, toggle_message(Mark::Favorite, now)));
    Ok(())
}

pub async fn toggle_caught(state: Arc<RwLock<AppState>>, id: u32) -> Result<(), String> {
    let mut s = state.write().await;
    let now = s.prefs.toggle_caught(id);
    let lang = s.lang();
    let name = name_of(s.dex.cached_roster(GEN1_COUNT, 0).as_deref(), id);
    println!("{} {name}: {}", if now { "✓" } else { "·" }, t(lang, toggle_message(Mark::Caught, now)));
    Ok(())
}

pub async fn show_type(state: Arc<RwLock<AppState>>, name: &str) -> Result<(), String> {
    let (dex, lang) = {
        let s = state.read().await;
        (Arc::clone(&s.dex), s.lang())
    };
    let info = dex
        .type_info(name)
        .await
        .map_err(|e| format!("{}: {e}\n", t(lang, "common.error")))?;

    println!("{}", info.localized_name(lang));
    let weaknesses: Vec<String> = info
        .weaknesses()
        .into_iter()
        .map(|w| type_label(lang, w))
        .collect();
    println!("  {}: {}", t(lang, "detail.weaknesses"), weaknesses.join(", "));

    // Members among the already-loaded roster
    if let Some(roster) = dex.cached_roster(GEN1_COUNT, 0) {
        let members: Vec<String> = roster
            .entries()
            .iter()
            .filter(|e| dex.has_type(e.id(), &info.name) == TypeMatch::Pass)
            .map(|e| display_name(&e.name))
            .collect();
        if !members.is_empty() {
            println!("  {}", members.join(", "));
        }
    }
    Ok(())
}

pub async fn set_theme(state: Arc<RwLock<AppState>>, theme: Theme) -> Result<(), String> {
    let mut s = state.write().await;
    s.prefs.set_theme(theme);
    let key = format!("theme.{}", theme_slug(theme));
    println!("{} {}", theme.icon(), t(s.lang(), &key));
    Ok(())
}

fn theme_slug(theme: Theme) -> &'static str {
    match theme {
        Theme::Light => "light",
        Theme::Dark => "dark",
        Theme::Auto => "auto",
    }
}

pub async fn set_language(state: Arc<RwLock<AppState>>, lang: Language) -> Result<(), String> {
    let mut s = state.write().await;
    s.prefs.set_language(lang);
    println!("{} {}", lang.flag(), lang.code());
    Ok(())
}

pub async fn show_stats(state: Arc<RwLock<AppState>>) -> Result<(), String> {
    let s = state.read().await;
    let lang = s.lang();
    let stats = s.prefs.quiz_stats();

    if let Some(quiz) = &s.quiz {
        println!("{}: {}", t(lang, "quiz.score"), quiz.score());
        println!("{}: {}", t(lang, "quiz.streak"), quiz.streak());
    }
    println!("{}: {}", t(lang, "quiz.highScore"), stats.high_score);
    println!("{}: {}", t(lang, "quiz.totalCorrect"), stats.total_correct);
    println!("{}: {}", t(lang, "quiz.totalAttempts"), stats.total_attempts);
    println!(
        "{}: {}",
        t(lang, "quiz.accuracy"),
        format_pct_ratio(stats.total_correct, stats.total_attempts)
    );
    Ok(())
}

pub async fn reset_stats(state: Arc<RwLock<AppState>>) -> Result<(), String> {
    let mut s = state.write().await;
    s.prefs.reset_quiz_stats();
    println!("{}", t(s.lang(), "quiz.statsReset"));
    Ok(())
}

pub async fn show_settings(state: Arc<RwLock<AppState>>) -> Result<(), String> {
    let s = state.read().await;
    let rendered = ConfyBackend::render(s.prefs.settings()).map_err(|e| e.to_string())?;
    println!("# {}", s.prefs.backend().path().display());
    println!("{rendered}");
    Ok(())
}

pub async fn exit(state: Arc<RwLock<AppState>>) {
    state.write().await.stop_countdown_task();
}

#[cfg(test)]
mod tests {
    use pokedex_core::RosterEntry;

    use super::*;

    #[test]
    fn name_of_falls_back_to_dex_number() {
        let roster: Roster = [RosterEntry::new("mr-mime", "https://pokeapi.co/api/v2/pokemon/122/")]
            .into_iter()
            .collect();
        assert_eq!(name_of(Some(&roster), 122), "Mr Mime");
        assert_eq!(name_of(Some(&roster), 25), "#025");
        assert_eq!(name_of(None, 7), "#007");
    }

    #[test]
    fn toggles_confirm_the_new_state() {
        assert_eq!(
            t(Language::En, toggle_message(Mark::Favorite, true)),
            "Added to favorites"
        );
        assert_eq!(
            t(Language::En, toggle_message(Mark::Favorite, false)),
            "Removed from favorites"
        );
        assert_eq!(t(Language::En, toggle_message(Mark::Caught, true)), "Marked as caught");
        for mark in [Mark::Favorite, Mark::Caught] {
            for now in [true, false] {
                assert!(pokedex_core::i18n::has_key(Language::Pl, toggle_message(mark, now)));
            }
        }
    }

    #[test]
    fn every_theme_has_a_label() {
        for theme in [Theme::Light, Theme::Dark, Theme::Auto] {
            let key = format!("theme.{}", theme_slug(theme));
            assert!(pokedex_core::i18n::has_key(Language::En, &key));
            assert!(pokedex_core::i18n::has_key(Language::Pl, &key));
        }
    }
}
