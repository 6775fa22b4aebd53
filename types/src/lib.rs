//! Shared types for the Pokédex workspace.
//!
//! Everything here is plain data: the persisted settings record, the small enums it is
//! made of, and the formatting helpers used by both the browser app and the CLI.

pub mod formatting;
mod id_set;
mod settings;

pub use id_set::IdSet;
pub use settings::{EffectiveTheme, Language, QuizStats, SETTINGS_RECORD_NAME, Settings, Theme};
