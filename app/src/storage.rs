//! `window.localStorage` persistence for the settings record.

use pokedex_core::preferences::{decode_record, encode_record};
use pokedex_core::{SettingsBackend, StoreError};
use pokedex_types::{SETTINGS_RECORD_NAME, Settings};

/// Settings stored as a JSON envelope under the `pokemon-settings` key.
#[derive(Debug, Clone, Copy, Default)]
pub struct LocalStorageBackend;

fn storage() -> Result<web_sys::Storage, StoreError> {
    web_sys::window()
        .ok_or_else(|| StoreError::Unavailable("no window".to_string()))?
        .local_storage()
        .map_err(|e| StoreError::Unavailable(format!("{e:?}")))?
        .ok_or_else(|| StoreError::Unavailable("localStorage is disabled".to_string()))
}

impl SettingsBackend for LocalStorageBackend {
    fn load(&self) -> Result<Option<Settings>, StoreError> {
        let raw = storage()?
            .get_item(SETTINGS_RECORD_NAME)
            .map_err(|e| StoreError::Read(format!("{e:?}")))?;
        raw.as_deref().map(decode_record).transpose()
    }

    fn save(&self, settings: &Settings) -> Result<(), StoreError> {
        let raw = encode_record(settings)?;
        storage()?
            .set_item(SETTINGS_RECORD_NAME, &raw)
            .map_err(|e| StoreError::Write(format!("{e:?}")))
    }
}

/// Browser UI language, e.g. `pl-PL`.
pub fn browser_locale() -> Option<String> {
    web_sys::window()?.navigator().language()
}

/// Whether the OS asks for a dark color scheme.
pub fn system_prefers_dark() -> bool {
    web_sys::window()
        .and_then(|w| w.match_media("(prefers-color-scheme: dark)").ok().flatten())
        .is_some_and(|m| m.matches())
}
