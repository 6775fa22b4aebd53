use dioxus::prelude::*;
use pokedex_core::i18n::t;

use crate::state::use_app;

/// (icon, title key, description key)
const FEATURES: [(&str, &str, &str); 5] = [
    ("🔍", "about.feature1Title", "about.feature1Desc"),
    ("🎯", "about.feature2Title", "about.feature2Desc"),
    ("❤️", "about.feature3Title", "about.feature3Desc"),
    ("🌙", "about.feature4Title", "about.feature4Desc"),
    ("🌍", "about.feature5Title", "about.feature5Desc"),
];

const TECH: [&str; 7] = [
    "Rust",
    "Dioxus",
    "WebAssembly",
    "reqwest",
    "serde",
    "tracing",
    "phf",
];

const POKEAPI_URL: &str = "https://pokeapi.co";

#[component]
pub fn AboutView() -> Element {
    let lang = use_app().lang();

    rsx! {
        section { class: "about",
            div { class: "about-header",
                h1 { {t(lang, "about.title")} }
                p { {t(lang, "about.subtitle")} }
            }

            div { class: "about-card",
                h2 { {t(lang, "about.features")} }
                p { class: "about-card-description", {t(lang, "about.featuresDescription")} }
                div { class: "about-features",
                    for (icon, title, desc) in FEATURES {
                        div { key: "{title}", class: "about-feature",
                            span { class: "about-feature-icon", "{icon}" }
                            div {
                                h3 { {t(lang, title)} }
                                p { {t(lang, desc)} }
                            }
                        }
                    }
                }
            }

            div { class: "about-card",
                h2 { {t(lang, "about.techTitle")} }
                p { class: "about-card-description", {t(lang, "about.techDescription")} }
                div { class: "tech-badges",
                    for name in TECH {
                        span { key: "{name}", class: "tech-badge", "{name}" }
                    }
                }
            }

            div { class: "about-card",
                h2 { {t(lang, "about.creditsTitle")} }
                dl { class: "about-credits",
                    dt { {t(lang, "about.dataSource")} }
                    dd {
                        {t(lang, "about.dataSourceDesc")}
                        " "
                        a { href: POKEAPI_URL, target: "_blank", rel: "noopener noreferrer", "PokeAPI" }
                    }
                    dt { {t(lang, "about.pokemon")} }
                    dd { {t(lang, "about.pokemonDesc")} }
                    dt { {t(lang, "about.builtBy")} }
                    dd { {t(lang, "about.builtByDesc")} }
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pokedex_core::i18n::has_key;
    use pokedex_types::Language;

    #[test]
    fn every_about_string_is_translated() {
        let fixed = [
            "nav.about",
            "about.title",
            "about.subtitle",
            "about.features",
            "about.featuresDescription",
            "about.techTitle",
            "about.techDescription",
            "about.creditsTitle",
            "about.dataSource",
            "about.dataSourceDesc",
            "about.pokemon",
            "about.pokemonDesc",
            "about.builtBy",
            "about.builtByDesc",
        ];
        let feature_keys = FEATURES.iter().flat_map(|(_, title, desc)| [*title, *desc]);
        for key in fixed.into_iter().chain(feature_keys) {
            for lang in [Language::En, Language::Pl] {
                assert!(has_key(lang, key), "{key} missing for {lang:?}");
            }
        }
    }
}
