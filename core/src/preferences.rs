//! User preferences: an injectable store over a persistence backend.
//!
//! [`Preferences`] owns the in-memory [`Settings`] and writes the whole record back to its
//! [`SettingsBackend`] after every mutation. Persistence failures are logged and never
//! undo or block the change the user just made.

use std::sync::{Arc, Mutex, PoisonError};

use pokedex_types::{IdSet, Language, QuizStats, Settings, Theme};
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::i18n::detect_language;

#[derive(Debug, Error)]
pub enum StoreError {
    #[error("settings storage is unavailable: {0}")]
    Unavailable(String),

    #[error("failed to read settings: {0}")]
    Read(String),

    #[error("failed to write settings: {0}")]
    Write(String),

    #[error("stored settings are malformed: {0}")]
    Malformed(String),
}

/// Where the settings record lives.
pub trait SettingsBackend {
    /// The stored record, or `None` on first run.
    fn load(&self) -> Result<Option<Settings>, StoreError>;
    fn save(&self, settings: &Settings) -> Result<(), StoreError>;
}

// ─────────────────────────────────────────────────────────────────────────────
// Record encoding
// ─────────────────────────────────────────────────────────────────────────────

/// Versioned envelope the browser record is stored in.
#[derive(Debug, Serialize, Deserialize)]
struct PersistedRecord {
    state: Settings,
    #[serde(default)]
    version: u32,
}

#[derive(Deserialize)]
#[serde(untagged)]
enum StoredShape {
    Enveloped(PersistedRecord),
    Bare(Settings),
}

/// Encode settings as the JSON string kept in key-value storage.
pub fn encode_record(settings: &Settings) -> Result<String, StoreError> {
    let record = PersistedRecord {
        state: settings.clone(),
        version: 0,
    };
    serde_json::to_string(&record).map_err(|e| StoreError::Write(e.to_string()))
}

/// Decode a stored JSON record. Both the enveloped and the bare form are accepted.
pub fn decode_record(raw: &str) -> Result<Settings, StoreError> {
    match serde_json::from_str::<StoredShape>(raw) {
        Ok(StoredShape::Enveloped(record)) => Ok(record.state),
        Ok(StoredShape::Bare(settings)) => Ok(settings),
        Err(e) => Err(StoreError::Malformed(e.to_string())),
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Backends
// ─────────────────────────────────────────────────────────────────────────────

/// In-process backend. Clones share one record, so a second [`Preferences`] over a
/// clone sees everything the first one wrote.
#[derive(Debug, Clone, Default)]
pub struct MemoryBackend {
    record: Arc<Mutex<Option<Settings>>>,
    fail_writes: bool,
}

impl MemoryBackend {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_record(settings: Settings) -> Self {
        Self {
            record: Arc::new(Mutex::new(Some(settings))),
            fail_writes: false,
        }
    }

    /// A backend whose every save fails, for exercising the failure path.
    pub fn failing() -> Self {
        Self {
            record: Arc::default(),
            fail_writes: true,
        }
    }

    /// The record as last saved.
    pub fn stored(&self) -> Option<Settings> {
        self.record
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }
}

impl SettingsBackend for MemoryBackend {
    fn load(&self) -> Result<Option<Settings>, StoreError> {
        Ok(self.stored())
    }

    fn save(&self, settings: &Settings) -> Result<(), StoreError> {
        if self.fail_writes {
            return Err(StoreError::Write("memory backend is read-only".to_string()));
        }
        *self.record.lock().unwrap_or_else(PoisonError::into_inner) = Some(settings.clone());
        Ok(())
    }
}

#[cfg(not(target_arch = "wasm32"))]
pub use confy_backend::{APP_NAME, ConfyBackend};

#[cfg(not(target_arch = "wasm32"))]
mod confy_backend {
    use std::path::{Path, PathBuf};

    use pokedex_types::{SETTINGS_RECORD_NAME, Settings};

    use super::{SettingsBackend, StoreError};

    /// Directory name under the user config dir.
    pub const APP_NAME: &str = "pokedex";

    /// TOML file under the user config directory, managed by confy.
    #[derive(Debug, Clone)]
    pub struct ConfyBackend {
        path: PathBuf,
    }

    impl ConfyBackend {
        /// Backend at confy's default location for this app.
        pub fn new() -> Result<Self, StoreError> {
            confy::get_configuration_file_path(APP_NAME, SETTINGS_RECORD_NAME)
                .map(|path| Self { path })
                .map_err(|e| StoreError::Unavailable(e.to_string()))
        }

        pub fn at_path(path: impl Into<PathBuf>) -> Self {
            Self { path: path.into() }
        }

        pub fn path(&self) -> &Path {
            &self.path
        }

        /// The record as it appears in the file.
        pub fn render(settings: &Settings) -> Result<String, StoreError> {
            toml::to_string_pretty(settings).map_err(|e| StoreError::Write(e.to_string()))
        }
    }

    impl SettingsBackend for ConfyBackend {
        fn load(&self) -> Result<Option<Settings>, StoreError> {
            // confy would write defaults for a missing file; first run must stay visible
            if !self.path.exists() {
                return Ok(None);
            }
            confy::load_path(&self.path)
                .map(Some)
                .map_err(|e| StoreError::Read(e.to_string()))
        }

        fn save(&self, settings: &Settings) -> Result<(), StoreError> {
            confy::store_path(&self.path, settings.clone())
                .map_err(|e| StoreError::Write(e.to_string()))
        }
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Store
// ─────────────────────────────────────────────────────────────────────────────

/// Loaded settings plus the backend they are written through to.
#[derive(Debug)]
pub struct Preferences<B> {
    backend: B,
    settings: Settings,
}

impl<B: SettingsBackend> Preferences<B> {
    /// Load the stored record, or start from defaults.
    ///
    /// On first run the language is detected from `locale` and the defaults are saved
    /// right away. A record that cannot be read is replaced by defaults in memory only.
    pub fn load(backend: B, locale: Option<&str>) -> Self {
        let settings = match backend.load() {
            Ok(Some(settings)) => settings,
            Ok(None) => {
                let settings = Settings {
                    language: detect_language(locale),
                    ..Settings::default()
                };
                tracing::info!(language = settings.language.code(), "first run, saving default settings");
                if let Err(e) = backend.save(&settings) {
                    tracing::warn!(error = %e, "failed to save default settings");
                }
                settings
            }
            Err(e) => {
                tracing::warn!(error = %e, "failed to load settings, using defaults");
                Settings {
                    language: detect_language(locale),
                    ..Settings::default()
                }
            }
        };
        Self { backend, settings }
    }

    pub fn settings(&self) -> &Settings {
        &self.settings
    }

    pub fn backend(&self) -> &B {
        &self.backend
    }

    pub fn theme(&self) -> Theme {
        self.settings.theme
    }

    pub fn language(&self) -> Language {
        self.settings.language
    }

    pub fn auto_next(&self) -> bool {
        self.settings.auto_next
    }

    pub fn quiz_stats(&self) -> QuizStats {
        self.settings.quiz_stats
    }

    pub fn favorites(&self) -> &IdSet {
        &self.settings.favorites
    }

    pub fn caught(&self) -> &IdSet {
        &self.settings.caught
    }

    pub fn is_favorite(&self, id: u32) -> bool {
        self.settings.favorites.contains(id)
    }

    pub fn is_caught(&self, id: u32) -> bool {
        self.settings.caught.contains(id)
    }

    pub fn set_theme(&mut self, theme: Theme) {
        self.settings.theme = theme;
        self.persist();
    }

    pub fn set_language(&mut self, language: Language) {
        self.settings.language = language;
        self.persist();
    }

    pub fn set_auto_next(&mut self, enabled: bool) {
        self.settings.auto_next = enabled;
        self.persist();
    }

    /// Returns whether `id` is a favorite afterwards.
    pub fn toggle_favorite(&mut self, id: u32) -> bool {
        let now = self.settings.favorites.toggle(id);
        self.persist();
        now
    }

    /// Returns whether `id` is caught afterwards.
    pub fn toggle_caught(&mut self, id: u32) -> bool {
        let now = self.settings.caught.toggle(id);
        self.persist();
        now
    }

    pub fn update_quiz_stats(&mut self, update: impl FnOnce(&mut QuizStats)) {
        update(&mut self.settings.quiz_stats);
        self.persist();
    }

    pub fn reset_quiz_stats(&mut self) {
        self.settings.quiz_stats = QuizStats::default();
        self.persist();
    }

    fn persist(&self) {
        if let Err(e) = self.backend.save(&self.settings) {
            tracing::warn!(error = %e, "failed to persist settings");
        }
    }
}
