//! Detail overlay for one Pokémon: artwork, bio, stats, weaknesses and evolutions.
//!
//! Follows the `selected` signal, so prev/next and the arrow keys reload in place.

use std::sync::Arc;

use dioxus::prelude::*;
use futures_util::future::join_all;
use pokedex_core::GEN1_COUNT;
use pokedex_core::api::{Pokemon, Species, TypeInfo, artwork_url};
use pokedex_core::i18n::{t, type_label};
use pokedex_core::pokemon::{
    MaxStats, STAT_NAMES, combined_weaknesses, evolution_ids, flavor_text, genus, next_id,
    prev_id, species_name,
};
use pokedex_types::formatting::{display_name, format_dex_number, format_height, format_weight};

use super::{StatBar, ToastSeverity, TypeBadge, use_toast};
use crate::state::{load_pokemon, use_app, use_dex};

#[derive(Clone)]
struct DetailData {
    pokemon: Arc<Pokemon>,
    species: Option<Arc<Species>>,
    evolution: Vec<u32>,
    types: Vec<Arc<TypeInfo>>,
}

#[component]
pub fn DetailOverlay(selected: Signal<Option<u32>>, max_id: u32) -> Element {
    let app = use_app();
    let dex = use_dex();
    let mut toast = use_toast();
    let mut prefs = app.prefs;
    let lang = app.lang();
    let comma = lang.decimal_comma();

    let mut data = use_signal(|| None::<DetailData>);
    let mut failed = use_signal(|| false);
    let mut max_stats = use_signal(|| None::<MaxStats>);

    // Roster-wide maxima scale the stat bars; computed once
    let stats_dex = dex.clone();
    use_future(move || {
        let dex = stats_dex.clone();
        let mut revision = app.dex_revision;
        async move {
            let max = dex.max_stats(GEN1_COUNT).await;
            max_stats.set(Some(max));
            *revision.write() += 1;
        }
    });

    let load_dex = dex.clone();
    use_effect(move || {
        let Some(id) = selected() else {
            return;
        };
        let dex = load_dex.clone();
        let revision = app.dex_revision;
        failed.set(false);
        spawn(async move {
            let pokemon = match load_pokemon(dex.clone(), revision, id).await {
                Ok(p) => p,
                Err(e) => {
                    tracing::warn!(id, error = %e, "failed to load Pokémon detail");
                    if *selected.peek() == Some(id) {
                        failed.set(true);
                        toast.show(t(lang, "pokedex.error"), ToastSeverity::Error);
                    }
                    return;
                }
            };

            // Secondary data degrades to omitted sections
            let species = dex.species(id).await.ok();
            let evolution = match dex.evolution_for(id).await {
                Ok(Some(chain)) => evolution_ids(&chain),
                _ => Vec::new(),
            };
            let types = join_all(pokemon.type_names().iter().map(|name| dex.type_info(name)))
                .await
                .into_iter()
                .filter_map(Result::ok)
                .collect();

            if *selected.peek() == Some(id) {
                data.set(Some(DetailData {
                    pokemon,
                    species,
                    evolution,
                    types,
                }));
            }
        });
    });

    let mut close = move || selected.set(None);
    let mut go = move |forward: bool| {
        if let Some(id) = selected() {
            let target = if forward { next_id(id, max_id) } else { prev_id(id, max_id) };
            selected.set(Some(target));
        }
    };

    let current = selected();
    // Drop data that belongs to the previous selection
    let shown = data().filter(|d| Some(d.pokemon.id) == current);
    let roster = dex.cached_roster(GEN1_COUNT, 0);
    let name_of = move |id: u32| {
        roster
            .as_deref()
            .and_then(|r| r.name_of(id))
            .map(display_name)
            .unwrap_or_else(|| format_dex_number(id))
    };
    let maxima = max_stats().unwrap_or_default();

    rsx! {
        div {
            class: "modal-overlay detail-overlay",
            tabindex: "0",
            onmounted: move |e| async move {
                let _ = e.set_focus(true).await;
            },
            onclick: move |_| close(),
            onkeydown: move |e| match e.key() {
                Key::ArrowLeft => go(false),
                Key::ArrowRight => go(true),
                Key::Escape => close(),
                _ => {}
            },
            div { class: "modal-content detail", onclick: move |e| e.stop_propagation(),
                div { class: "detail-nav",
                    button {
                        class: "icon-button",
                        title: t(lang, "detail.previous"),
                        onclick: move |_| go(false),
                        "‹"
                    }
                    button {
                        class: "icon-button",
                        title: t(lang, "detail.next"),
                        onclick: move |_| go(true),
                        "›"
                    }
                    button {
                        class: "icon-button close",
                        title: t(lang, "detail.close"),
                        onclick: move |_| close(),
                        "×"
                    }
                }

                match shown {
                    None if failed() => rsx! {
                        p { class: "detail-error", {t(lang, "pokedex.error")} }
                    },
                    None => rsx! {
                        div { class: "detail-loading", {t(lang, "common.loading")} }
                    },
                    Some(d) => {
                        let p = &d.pokemon;
                        let id = p.id;
                        let title = d
                            .species
                            .as_deref()
                            .map(|s| species_name(s, lang))
                            .unwrap_or_else(|| display_name(&p.name));
                        let category = d.species.as_deref().and_then(|s| genus(s, lang));
                        let about = d.species.as_deref().and_then(|s| flavor_text(s, lang));
                        let refs: Vec<&TypeInfo> = d.types.iter().map(Arc::as_ref).collect();
                        let weaknesses = if refs.len() == p.types.len() {
                            combined_weaknesses(&refs)
                        } else {
                            Vec::new()
                        };
                        let abilities: Vec<String> =
                            p.ability_names().into_iter().map(display_name).collect();
                        let favorite = prefs.read().is_favorite(id);
                        let caught = prefs.read().is_caught(id);
                        let stats: Vec<(String, u32, u32)> = STAT_NAMES
                            .iter()
                            .map(|s| (s.to_string(), p.stat(s).unwrap_or(0), maxima.get(s)))
                            .collect();

                        rsx! {
                            div { class: "detail-hero",
                                img { class: "detail-image", src: p.image_url(), alt: "{title}" }
                                div { class: "detail-heading",
                                    span { class: "detail-number", {format_dex_number(id)} }
                                    h2 { "{title}" }
                                    if let Some(category) = category {
                                        p { class: "detail-genus", "{category}" }
                                    }
                                    div { class: "detail-types",
                                        for kind in p.type_names() {
                                            TypeBadge { key: "{kind}", name: kind.clone() }
                                        }
                                    }
                                    div { class: "detail-toggles",
                                        button {
                                            class: if favorite { "button toggle active" } else { "button toggle" },
                                            onclick: move |_| {
                                                prefs.write().toggle_favorite(id);
                                            },
                                            if favorite { {t(lang, "pokedex.removeFavorite")} } else { {t(lang, "pokedex.addFavorite")} }
                                        }
                                        button {
                                            class: if caught { "button toggle active" } else { "button toggle" },
                                            onclick: move |_| {
                                                prefs.write().toggle_caught(id);
                                            },
                                            if caught { {t(lang, "pokedex.unmarkCaught")} } else { {t(lang, "pokedex.markCaught")} }
                                        }
                                    }
                                }
                            }

                            if let Some(text) = about {
                                section { class: "detail-section",
                                    h3 { {t(lang, "detail.about")} }
                                    p { class: "detail-flavor", "{text}" }
                                }
                            }

                            section { class: "detail-section detail-facts",
                                div {
                                    span { class: "fact-label", {t(lang, "detail.height")} }
                                    span { {format_height(p.height, comma)} }
                                }
                                div {
                                    span { class: "fact-label", {t(lang, "detail.weight")} }
                                    span { {format_weight(p.weight, comma)} }
                                }
                                div {
                                    span { class: "fact-label", {t(lang, "detail.abilities")} }
                                    span { {abilities.join(", ")} }
                                }
                            }

                            section { class: "detail-section",
                                h3 { {t(lang, "detail.baseStats")} }
                                for (stat, value, max) in stats {
                                    StatBar { key: "{stat}", stat: stat.clone(), value, max }
                                }
                            }

                            if !weaknesses.is_empty() {
                                section { class: "detail-section",
                                    h3 { {t(lang, "detail.weaknesses")} }
                                    div { class: "detail-weaknesses",
                                        for (kind, multiplier) in weaknesses {
                                            span { key: "{kind}", class: "weakness",
                                                title: type_label(lang, kind),
                                                TypeBadge { name: kind.to_string(), small: true }
                                                span { class: "multiplier", "×{multiplier}" }
                                            }
                                        }
                                    }
                                }
                            }

                            if d.evolution.len() > 1 {
                                section { class: "detail-section",
                                    h3 { {t(lang, "detail.evolution")} }
                                    div { class: "evolution-chain",
                                        for stage in d.evolution.iter().copied() {
                                            button {
                                                key: "{stage}",
                                                class: if stage == id { "evolution-stage current" } else { "evolution-stage" },
                                                disabled: stage > max_id,
                                                onclick: move |_| selected.set(Some(stage)),
                                                img { src: artwork_url(stage), alt: "", loading: "lazy" }
                                                span { {name_of(stage)} }
                                            }
                                        }
                                    }
                                }
                            }
                        }
                    }
                }
            }
        }
    }
}
