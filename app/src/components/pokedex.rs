//! Searchable, filterable grid of the roster.

use std::sync::Arc;

use dioxus::prelude::*;
use pokedex_core::i18n::{t, t_args, type_label};
use pokedex_core::pokemon::POKEMON_TYPES;
use pokedex_core::{FilterState, Roster, TypeFilter, visible_entries};

use super::{DetailOverlay, NoResults, PokemonCard, ToastSeverity, use_toast};
use crate::state::{use_app, use_dex};

#[component]
pub fn PokedexView() -> Element {
    let app = use_app();
    let dex = use_dex();
    let mut toast = use_toast();
    let prefs = app.prefs;
    let revision = app.dex_revision;
    let lang = app.lang();

    let mut roster = use_signal(|| None::<Arc<Roster>>);
    let mut load_failed = use_signal(|| false);
    let mut filter = use_signal(FilterState::default);
    let selected = use_signal(|| None::<u32>);

    let roster_dex = dex.clone();
    use_future(move || {
        let dex = roster_dex.clone();
        async move {
            match dex.gen1_roster().await {
                Ok(r) => roster.set(Some(r)),
                Err(e) => {
                    tracing::error!(error = %e, "failed to load roster");
                    load_failed.set(true);
                    toast.show(t(lang, "pokedex.error"), ToastSeverity::Error);
                }
            }
        }
    });

    // Favorites-only with nothing favorited turns itself off
    use_effect(move || {
        let favorites = prefs.read().favorites().clone();
        if filter.peek().favorites_only && favorites.is_empty() {
            filter.write().reconcile_favorites(&favorites);
        }
    });

    let memo_dex = dex.clone();
    let visible = use_memo(move || {
        // Re-evaluate as type data arrives
        let _ = revision();
        let Some(roster) = roster() else {
            return Vec::new();
        };
        let prefs = prefs.read();
        visible_entries(&roster, &filter.read(), memo_dex.as_ref(), prefs.favorites())
            .into_iter()
            .map(|e| (e.id(), e.name.clone()))
            .collect::<Vec<_>>()
    });

    let current = filter();
    let has_favorites = !prefs.read().favorites().is_empty();
    let max_id = roster().map(|r| r.max_id()).unwrap_or(0);
    let entries = visible();
    let count = entries.len().to_string();

    rsx! {
        section { class: "pokedex",
            h1 { class: "view-title", {t(lang, "pokedex.title")} }

            div { class: "pokedex-toolbar",
                input {
                    class: "search-input",
                    r#type: "search",
                    placeholder: t(lang, "pokedex.search"),
                    value: "{current.query}",
                    oninput: move |e| filter.write().query = e.value(),
                }
                select {
                    class: "type-select",
                    aria_label: t(lang, "pokedex.filterByType"),
                    value: current.selected_type.as_value(),
                    onchange: move |e| filter.write().selected_type = TypeFilter::parse(&e.value()),
                    option { value: "all", {t(lang, "pokedex.allTypes")} }
                    for kind in POKEMON_TYPES {
                        option { key: "{kind}", value: kind, {type_label(lang, kind)} }
                    }
                }
                button {
                    class: if current.favorites_only { "button toggle active" } else { "button toggle" },
                    disabled: !has_favorites,
                    title: if has_favorites { "" } else { t(lang, "pokedex.noFavorites") },
                    onclick: move |_| {
                        let mut f = filter.write();
                        f.favorites_only = !f.favorites_only;
                    },
                    "★ "
                    {t(lang, "pokedex.favorites")}
                }
                if current.is_active() {
                    button {
                        class: "button subtle",
                        onclick: move |_| filter.write().clear(),
                        {t(lang, "pokedex.clearFilters")}
                    }
                }
            }

            if roster().is_none() {
                if load_failed() {
                    p { class: "pokedex-error", {t(lang, "pokedex.error")} }
                } else {
                    p { class: "pokedex-loading", {t(lang, "pokedex.loading")} }
                }
            } else if entries.is_empty() && current.is_active() {
                NoResults {
                    filter: current.clone(),
                    on_clear: move |_| filter.write().clear(),
                }
            } else {
                p { class: "pokedex-count", {t_args(lang, "pokedex.found", &[("count", &count)])} }
                div { class: "pokemon-grid",
                    for (id, name) in entries {
                        PokemonCard {
                            key: "{id}",
                            id,
                            name,
                            on_select: move |id| {
                                let mut selected = selected;
                                selected.set(Some(id));
                            },
                        }
                    }
                }
            }

            if selected().is_some() {
                DetailOverlay { selected, max_id }
            }
        }
    }
}
