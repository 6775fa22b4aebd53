use std::sync::Arc;

use pokedex_core::api::DEFAULT_BASE_URL;
use pokedex_core::{ConfyBackend, HttpClient, Pokedex, Preferences, QuizSession};
use pokedex_types::{Language, SETTINGS_RECORD_NAME};
use tokio::task::JoinHandle;

pub type Dex = Pokedex<HttpClient>;

/// Everything the shell keeps between commands.
pub struct AppState {
    pub dex: Arc<Dex>,
    pub prefs: Preferences<ConfyBackend>,
    pub quiz: Option<QuizSession>,
    pub countdown_task: Option<JoinHandle<()>>,
}

impl AppState {
    pub fn new() -> Self {
        let base_url =
            std::env::var("POKEDEX_API_URL").unwrap_or_else(|_| DEFAULT_BASE_URL.to_string());
        let dex = Arc::new(Pokedex::new(HttpClient::with_base_url(&base_url)));

        let backend = ConfyBackend::new().unwrap_or_else(|e| {
            tracing::warn!(error = %e, "no config directory, using the working directory");
            ConfyBackend::at_path(format!("{SETTINGS_RECORD_NAME}.toml"))
        });
        let locale = system_locale(std::env::var("LC_ALL").ok(), std::env::var("LANG").ok());
        let prefs = Preferences::load(backend, locale.as_deref());

        Self {
            dex,
            prefs,
            quiz: None,
            countdown_task: None,
        }
    }

    pub fn lang(&self) -> Language {
        self.prefs.language()
    }

    /// Abort the countdown task, if one is running.
    pub fn stop_countdown_task(&mut self) {
        if let Some(handle) = self.countdown_task.take() {
            handle.abort();
        }
    }
}

/// First non-empty locale variable, in POSIX precedence order.
fn system_locale(lc_all: Option<String>, lang: Option<String>) -> Option<String> {
    [lc_all, lang]
        .into_iter()
        .flatten()
        .find(|value| !value.trim().is_empty())
}

impl Default for AppState {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_lc_all_falls_through_to_lang() {
        let some = |s: &str| Some(s.to_string());
        assert_eq!(system_locale(some(""), some("pl_PL.UTF-8")), some("pl_PL.UTF-8"));
        assert_eq!(system_locale(some("  "), some("pl_PL")), some("pl_PL"));
        assert_eq!(system_locale(some("en_US"), some("pl_PL")), some("en_US"));
        assert_eq!(system_locale(None, some("pl")), some("pl"));
        assert_eq!(system_locale(some(""), None), None);
        assert_eq!(system_locale(None, None), None);
    }
}
