//! "Who's that Pokémon?" silhouette quiz.

mod countdown;
mod error;
mod round;
mod session;

pub use countdown::{AUTO_NEXT_DELAY_MS, Clock, Countdown, ManualClock, SystemClock, TICK_INTERVAL_MS};
pub use error::QuizError;
pub use round::{OPTION_COUNT, QuizRound, generate_round};
pub use session::{AnswerEffect, AnswerOutcome, QuizPhase, QuizSession, SHAKE_DURATION_MS, Tick};
