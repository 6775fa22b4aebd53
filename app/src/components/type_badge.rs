use dioxus::prelude::*;
use pokedex_core::i18n::type_label;
use pokedex_core::pokemon::type_color;

use crate::state::use_app;

#[component]
pub fn TypeBadge(name: String, #[props(default = false)] small: bool) -> Element {
    let lang = use_app().lang();
    let color = type_color(&name);
    let label = type_label(lang, &name);

    rsx! {
        span {
            class: if small { "type-badge small" } else { "type-badge" },
            style: "background: {color.background}; color: {color.text}; border-color: {color.border};",
            "{label}"
        }
    }
}
