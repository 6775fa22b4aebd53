//! Shared application state, provided through context at the app root.

use std::rc::Rc;
use std::sync::Arc;

use dioxus::prelude::*;
use pokedex_core::api::{ApiError, Pokemon};
use pokedex_core::{HttpClient, Pokedex, Preferences};
use pokedex_types::{EffectiveTheme, Language};

use crate::storage::{LocalStorageBackend, browser_locale, system_prefers_dark};

pub type Dex = Pokedex<HttpClient>;
pub type Prefs = Preferences<LocalStorageBackend>;

/// Top-level screens.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum View {
    Home,
    Pokedex,
    Quiz,
    About,
}

#[derive(Clone, Copy)]
pub struct AppState {
    pub prefs: Signal<Prefs>,
    pub view: Signal<View>,
    pub system_dark: Signal<bool>,
    /// Bumped whenever a Pokémon lands in the cache, so type filters re-evaluate.
    pub dex_revision: Signal<u64>,
}

impl AppState {
    fn new() -> Self {
        Self {
            prefs: Signal::new(Preferences::load(
                LocalStorageBackend,
                browser_locale().as_deref(),
            )),
            view: Signal::new(View::Home),
            system_dark: Signal::new(system_prefers_dark()),
            dex_revision: Signal::new(0),
        }
    }

    pub fn lang(&self) -> Language {
        self.prefs.read().language()
    }

    pub fn effective_theme(&self) -> EffectiveTheme {
        self.prefs.read().theme().effective(*self.system_dark.read())
    }
}

/// Provide the app state and the shared Pokédex. Call once in the root component.
pub fn use_app_provider() -> AppState {
    use_context_provider(|| Rc::new(Pokedex::new(HttpClient::new())));
    use_context_provider(AppState::new)
}

pub fn use_app() -> AppState {
    use_context::<AppState>()
}

pub fn use_dex() -> Rc<Dex> {
    use_context::<Rc<Dex>>()
}

/// Fetch a Pokémon through the cache and announce new arrivals.
pub async fn load_pokemon(
    dex: Rc<Dex>,
    mut revision: Signal<u64>,
    id: u32,
) -> Result<Arc<Pokemon>, ApiError> {
    let was_cached = dex.cached_pokemon(id).is_some();
    let result = dex.pokemon(id).await;
    if result.is_ok() && !was_cached {
        if let Ok(mut rev) = revision.try_write() {
            *rev += 1;
        }
    }
    result
}
