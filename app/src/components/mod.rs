//! UI Components

pub mod about;
pub mod detail;
pub mod header;
pub mod home;
pub mod no_results;
pub mod pokedex;
pub mod pokemon_card;
pub mod quiz;
pub mod stat_bar;
pub mod toast;
pub mod type_badge;

pub use about::AboutView;
pub use detail::DetailOverlay;
pub use header::Header;
pub use home::HomeView;
pub use no_results::NoResults;
pub use pokedex::PokedexView;
pub use pokemon_card::PokemonCard;
pub use quiz::QuizView;
pub use stat_bar::StatBar;
pub use toast::{ToastFrame, ToastSeverity, use_toast, use_toast_provider};
pub use type_badge::TypeBadge;
