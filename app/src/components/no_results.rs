use dioxus::prelude::*;
use pokedex_core::filter::explain_no_results;
use pokedex_core::i18n::t;
use pokedex_core::FilterState;

use crate::state::use_app;

/// Shown when active filters hide every entry.
#[component]
pub fn NoResults(filter: FilterState, on_clear: EventHandler<()>) -> Element {
    let lang = use_app().lang();
    let segments = explain_no_results(&filter)
        .map(|reason| reason.segments(lang))
        .unwrap_or_default();

    rsx! {
        div { class: "no-results",
            div { class: "no-results-icon", "?" }
            h3 { {t(lang, "pokedex.noResults")} }
            p { class: "no-results-text",
                for (i, segment) in segments.iter().enumerate() {
                    if segment.emphasized {
                        strong { key: "{i}", "{segment.text}" }
                    } else {
                        span { key: "{i}", "{segment.text}" }
                    }
                }
            }
            button {
                class: "button primary",
                onclick: move |_| on_clear.call(()),
                {t(lang, "pokedex.browseAll")}
            }
        }
    }
}
