pub mod api;
pub mod cache;
pub mod dex;
pub mod filter;
pub mod i18n;
pub mod pokemon;
pub mod preferences;
pub mod quiz;
pub mod roster;
pub mod search;

// Re-exports for convenience
pub use api::{ApiError, HttpClient, PokeApi};
pub use dex::Pokedex;
pub use filter::{FilterState, TypeFilter, TypeLookup, TypeMatch, visible_entries};
pub use preferences::{MemoryBackend, Preferences, SettingsBackend, StoreError};
pub use quiz::{QuizError, QuizPhase, QuizRound, QuizSession};
pub use roster::{GEN1_COUNT, Roster, RosterEntry};
pub use search::FuzzyMatcher;

#[cfg(not(target_arch = "wasm32"))]
pub use preferences::ConfyBackend;
