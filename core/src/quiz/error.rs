use thiserror::Error;

use super::round::OPTION_COUNT;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum QuizError {
    #[error("a quiz needs at least {OPTION_COUNT} distinct Pokémon, the roster has {len}")]
    RosterTooSmall { len: usize },
}
