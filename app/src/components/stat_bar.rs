use dioxus::prelude::*;
use pokedex_core::i18n::{stat_description, stat_label};
use pokedex_core::pokemon::{StatBand, stat_percent};

use crate::state::use_app;

/// One base stat scaled against the highest value of that stat in the roster.
#[component]
pub fn StatBar(stat: String, value: u32, max: u32) -> Element {
    let lang = use_app().lang();
    let label = stat_label(lang, &stat);
    let description = stat_description(lang, &stat).unwrap_or_default();
    let width = stat_percent(value, max);
    let color = StatBand::for_ratio(value, max).color();

    rsx! {
        div { class: "stat-row", title: "{description}",
            span { class: "stat-label", "{label}" }
            span { class: "stat-value", "{value}" }
            div { class: "stat-track",
                div {
                    class: "stat-fill",
                    style: "width: {width:.1}%; background: {color};",
                }
            }
        }
    }
}
