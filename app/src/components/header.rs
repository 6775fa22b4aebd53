use dioxus::prelude::*;
use pokedex_core::i18n::t;

use crate::state::{View, use_app};

#[component]
pub fn Header() -> Element {
    let app = use_app();
    let mut view = app.view;
    let mut prefs = app.prefs;
    let lang = app.lang();
    let theme = prefs.read().theme();
    let current = view();

    let nav = [
        (View::Home, "nav.home"),
        (View::Pokedex, "nav.pokedex"),
        (View::Quiz, "nav.quiz"),
        (View::About, "nav.about"),
    ];

    rsx! {
        header { class: "app-header",
            button {
                class: "brand",
                onclick: move |_| view.set(View::Home),
                "Pokédex"
            }
            nav { class: "app-nav",
                for (target, key) in nav {
                    button {
                        key: "{key}",
                        class: if current == target { "nav-link active" } else { "nav-link" },
                        onclick: move |_| view.set(target),
                        {t(lang, key)}
                    }
                }
            }
            div { class: "header-actions",
                button {
                    class: "icon-button",
                    title: t(lang, "nav.themeToggle"),
                    onclick: move |_| {
                        let next = prefs.read().theme().cycle();
                        prefs.write().set_theme(next);
                    },
                    {theme.icon()}
                }
                button {
                    class: "icon-button",
                    title: t(lang, "nav.languageToggle"),
                    onclick: move |_| {
                        let next = prefs.read().language().toggle();
                        prefs.write().set_language(next);
                    },
                    "{lang.flag()} {lang.code()}"
                }
            }
        }
    }
}
