use dioxus::prelude::*;
use pokedex_core::api::artwork_url;
use pokedex_core::i18n::t;
use pokedex_types::formatting::{display_name, format_dex_number};

use super::TypeBadge;
use crate::state::{load_pokemon, use_app, use_dex};

/// Grid cell for one roster entry. Loads its own detail so the type badges appear
/// and the type filter can resolve it.
#[component]
pub fn PokemonCard(id: u32, name: String, on_select: EventHandler<u32>) -> Element {
    let app = use_app();
    let dex = use_dex();
    let mut prefs = app.prefs;
    let lang = app.lang();
    let mut types = use_signal(Vec::<String>::new);

    use_hook(move || {
        let revision = app.dex_revision;
        spawn(async move {
            match load_pokemon(dex, revision, id).await {
                Ok(pokemon) => types.set(pokemon.type_names()),
                Err(e) => tracing::debug!(id, error = %e, "card detail unavailable"),
            }
        });
    });

    let favorite = prefs.read().is_favorite(id);
    let caught = prefs.read().is_caught(id);
    let fav_label = t(lang, if favorite { "pokedex.removeFavorite" } else { "pokedex.addFavorite" });
    let caught_label = t(lang, if caught { "pokedex.unmarkCaught" } else { "pokedex.markCaught" });
    let title = display_name(&name);

    rsx! {
        div {
            class: if caught { "pokemon-card caught" } else { "pokemon-card" },
            onclick: move |_| on_select.call(id),
            div { class: "card-actions",
                button {
                    class: if favorite { "card-toggle favorite active" } else { "card-toggle favorite" },
                    title: fav_label,
                    aria_label: fav_label,
                    onclick: move |e| {
                        e.stop_propagation();
                        prefs.write().toggle_favorite(id);
                    },
                    if favorite { "★" } else { "☆" }
                }
                button {
                    class: if caught { "card-toggle caught active" } else { "card-toggle caught" },
                    title: caught_label,
                    aria_label: caught_label,
                    onclick: move |e| {
                        e.stop_propagation();
                        prefs.write().toggle_caught(id);
                    },
                    "◓"
                }
            }
            img {
                class: "card-image",
                src: artwork_url(id),
                alt: "{title}",
                loading: "lazy",
            }
            span { class: "card-number", {format_dex_number(id)} }
            h3 { class: "card-name", "{title}" }
            div { class: "card-types",
                for kind in types() {
                    TypeBadge { key: "{kind}", name: kind.clone(), small: true }
                }
            }
        }
    }
}
