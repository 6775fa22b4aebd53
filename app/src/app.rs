use dioxus::prelude::*;
use wasm_bindgen::JsCast;
use wasm_bindgen::closure::Closure;

use crate::components::{
    AboutView, Header, HomeView, PokedexView, QuizView, ToastFrame, use_toast_provider,
};
use crate::state::{View, use_app_provider};

const MAIN_CSS: Asset = asset!("/assets/main.css");

#[component]
pub fn App() -> Element {
    let app = use_app_provider();
    use_toast_provider();
    let system_dark = app.system_dark;

    // Follow OS color scheme changes while the theme is `auto`
    use_future(move || async move {
        let Some(query) = web_sys::window()
            .and_then(|w| w.match_media("(prefers-color-scheme: dark)").ok().flatten())
        else {
            return;
        };
        let watched = query.clone();
        let closure = Closure::<dyn Fn(web_sys::Event)>::new(move |_event: web_sys::Event| {
            let mut dark = system_dark;
            let _ = dark.try_write().map(|mut w| *w = watched.matches());
        });
        let _ = query.add_event_listener_with_callback("change", closure.as_ref().unchecked_ref());
        closure.forget();
    });

    // Mirror the effective theme and language onto <html>
    use_effect(move || {
        let theme = app.effective_theme();
        let lang = app.lang();
        if let Some(root) = web_sys::window()
            .and_then(|w| w.document())
            .and_then(|d| d.document_element())
        {
            let classes = root.class_list();
            let _ = classes.remove_2("light", "dark");
            let _ = classes.add_1(theme.css_class());
            let _ = root.set_attribute("lang", lang.code());
        }
    });

    rsx! {
        document::Stylesheet { href: MAIN_CSS }
        div { class: "app",
            Header {}
            main { class: "app-main",
                match (app.view)() {
                    View::Home => rsx! { HomeView {} },
                    View::Pokedex => rsx! { PokedexView {} },
                    View::Quiz => rsx! { QuizView {} },
                    View::About => rsx! { AboutView {} },
                }
            }
            ToastFrame {}
        }
    }
}
