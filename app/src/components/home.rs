use dioxus::prelude::*;
use pokedex_core::i18n::t;

use crate::state::{View, use_app};

#[component]
pub fn HomeView() -> Element {
    let app = use_app();
    let mut view = app.view;
    let lang = app.lang();

    rsx! {
        section { class: "home",
            h1 { class: "home-title", {t(lang, "home.title")} }
            p { class: "home-subtitle", {t(lang, "home.subtitle")} }
            p { class: "home-generation", {t(lang, "home.generation")} }

            div { class: "home-cards",
                div { class: "home-card",
                    h2 { {t(lang, "home.exploreTitle")} }
                    p { {t(lang, "home.exploreDescription")} }
                    button {
                        class: "button primary",
                        onclick: move |_| view.set(View::Pokedex),
                        {t(lang, "home.exploreButton")}
                    }
                }
                div { class: "home-card",
                    h2 { {t(lang, "home.quizTitle")} }
                    p { {t(lang, "home.quizDescription")} }
                    button {
                        class: "button primary",
                        onclick: move |_| view.set(View::Quiz),
                        {t(lang, "home.quizButton")}
                    }
                }
            }
            p { class: "home-powered-by", {t(lang, "home.poweredBy")} }
        }
    }
}
