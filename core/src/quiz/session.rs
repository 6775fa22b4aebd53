//! Round-based quiz state machine.
//!
//! ```text
//! Idle ──start──▶ AwaitingAnswer ──submit_answer──▶ Answered ──next / countdown──▶ AwaitingAnswer
//! ```
//!
//! Score and streak live only in the session. The lifetime statistics are written to
//! [`Preferences`] on every answer.

use hashbrown::HashSet;
use rand::SeedableRng;
use rand::rngs::StdRng;

use super::countdown::Countdown;
use super::error::QuizError;
use super::round::{OPTION_COUNT, QuizRound, generate_round};
use crate::preferences::{Preferences, SettingsBackend};

/// How long the wrong-answer shake lasts.
pub const SHAKE_DURATION_MS: u32 = 500;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum QuizPhase {
    /// No round generated yet.
    Idle,
    AwaitingAnswer,
    Answered,
}

/// Feedback the view plays after an answer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AnswerEffect {
    Celebrate,
    /// Transient; the view clears it after `duration_ms`.
    Shake { duration_ms: u32 },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AnswerOutcome {
    pub correct: bool,
    pub target_id: u32,
    pub effect: AnswerEffect,
    pub countdown_started: bool,
}

/// Result of a countdown tick.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tick {
    /// No countdown is running.
    Idle,
    /// The tick belongs to a round that has been replaced.
    Stale,
    Running { remaining_ms: i64 },
    /// The countdown ran out and a new round started.
    Advanced,
}

pub struct QuizSession<R = StdRng> {
    ids: Vec<u32>,
    rng: R,
    round: Option<QuizRound>,
    rounds_started: u64,
    score: u32,
    streak: u32,
    countdown: Option<Countdown>,
}

impl QuizSession<StdRng> {
    /// Session over `ids` with an OS-seeded RNG.
    pub fn new(ids: impl IntoIterator<Item = u32>) -> Result<Self, QuizError> {
        Self::with_rng(ids, StdRng::from_os_rng())
    }
}

impl<R: rand::Rng> QuizSession<R> {
    /// Session over the distinct, valid (non-zero) IDs in `ids`.
    pub fn with_rng(ids: impl IntoIterator<Item = u32>, rng: R) -> Result<Self, QuizError> {
        let mut seen = HashSet::new();
        let ids: Vec<u32> = ids
            .into_iter()
            .filter(|&id| id != 0 && seen.insert(id))
            .collect();
        if ids.len() < OPTION_COUNT {
            return Err(QuizError::RosterTooSmall { len: ids.len() });
        }
        Ok(Self {
            ids,
            rng,
            round: None,
            rounds_started: 0,
            score: 0,
            streak: 0,
            countdown: None,
        })
    }

    pub fn phase(&self) -> QuizPhase {
        match &self.round {
            None => QuizPhase::Idle,
            Some(round) if round.is_answered() => QuizPhase::Answered,
            Some(_) => QuizPhase::AwaitingAnswer,
        }
    }

    pub fn round(&self) -> Option<&QuizRound> {
        self.round.as_ref()
    }

    pub fn score(&self) -> u32 {
        self.score
    }

    pub fn streak(&self) -> u32 {
        self.streak
    }

    pub fn countdown(&self) -> Option<Countdown> {
        self.countdown
    }

    /// Remaining countdown time, `None` when no countdown runs.
    pub fn remaining_ms(&self, now_ms: i64) -> Option<i64> {
        self.countdown.map(|c| c.remaining_ms(now_ms))
    }

    /// Generate the first round. Returns the current round once the quiz has started.
    pub fn start(&mut self) -> Result<&QuizRound, QuizError> {
        let round = match self.round.take() {
            Some(round) => round,
            None => self.generate()?,
        };
        Ok(self.round.insert(round))
    }

    fn generate(&mut self) -> Result<QuizRound, QuizError> {
        let round = generate_round(&self.ids, self.rounds_started, &mut self.rng)?;
        self.rounds_started += 1;
        self.countdown = None;
        tracing::info!(round_id = round.round_id, target = round.target_id, "new quiz round");
        Ok(round)
    }

    /// Answer the current round.
    ///
    /// Returns `None` without changing anything when there is no round, the round is
    /// already answered, or `id` is not one of its options.
    pub fn submit_answer<B: SettingsBackend>(
        &mut self,
        id: u32,
        prefs: &mut Preferences<B>,
        now_ms: i64,
    ) -> Option<AnswerOutcome> {
        let round = self.round.as_mut()?;
        if round.is_answered() || !round.has_option(id) {
            return None;
        }
        round.answered_id = Some(id);
        let round_id = round.round_id;
        let target_id = round.target_id;
        let correct = id == target_id;

        let effect = if correct {
            self.score += 1;
            self.streak += 1;
            AnswerEffect::Celebrate
        } else {
            self.streak = 0;
            AnswerEffect::Shake {
                duration_ms: SHAKE_DURATION_MS,
            }
        };

        let streak = self.streak;
        prefs.update_quiz_stats(|stats| {
            stats.total_attempts += 1;
            if correct {
                stats.total_correct += 1;
                stats.high_score = stats.high_score.max(streak);
            }
        });

        let countdown_started = prefs.auto_next();
        if countdown_started {
            self.countdown = Some(Countdown::start(round_id, now_ms));
        }

        tracing::info!(round_id, answer = id, target = target_id, correct, streak, "quiz answer");

        Some(AnswerOutcome {
            correct,
            target_id,
            effect,
            countdown_started,
        })
    }

    /// Move on to a fresh round. Only valid once the current round is answered.
    pub fn next(&mut self) -> Option<&QuizRound> {
        if self.phase() != QuizPhase::Answered {
            return None;
        }
        match self.generate() {
            Ok(round) => Some(self.round.insert(round)),
            Err(e) => {
                tracing::error!(error = %e, "quiz round generation failed");
                None
            }
        }
    }

    /// Drive the countdown of round `round_id` at `now_ms`.
    ///
    /// Advances exactly once when time runs out. Ticks from a replaced round are ignored.
    pub fn tick(&mut self, round_id: u64, now_ms: i64) -> Tick {
        let Some(countdown) = self.countdown else {
            return Tick::Idle;
        };
        if countdown.round_id() != round_id {
            return Tick::Stale;
        }
        if countdown.is_expired(now_ms) {
            self.countdown = None;
            self.next();
            return Tick::Advanced;
        }
        Tick::Running {
            remaining_ms: countdown.remaining_ms(now_ms),
        }
    }

    /// Stop the countdown without advancing. Returns whether one was running.
    pub fn cancel_countdown(&mut self) -> bool {
        self.countdown.take().is_some()
    }

    /// Persist the auto-next preference; turning it off cancels a running countdown.
    pub fn set_auto_next<B: SettingsBackend>(&mut self, enabled: bool, prefs: &mut Preferences<B>) {
        prefs.set_auto_next(enabled);
        if !enabled && self.cancel_countdown() {
            tracing::debug!("auto-next disabled, countdown cancelled");
        }
    }
}

#[cfg(test)]
mod tests {
    use rand::SeedableRng;

    use super::*;
    use crate::preferences::MemoryBackend;

    fn session() -> QuizSession<StdRng> {
        QuizSession::with_rng(1..=151, StdRng::seed_from_u64(9)).unwrap()
    }

    fn prefs(auto_next: bool) -> Preferences<MemoryBackend> {
        let mut prefs = Preferences::load(MemoryBackend::new(), None);
        prefs.set_auto_next(auto_next);
        prefs
    }

    fn wrong_option(round: &QuizRound) -> u32 {
        round
            .option_ids
            .iter()
            .copied()
            .find(|&id| id != round.target_id)
            .unwrap()
    }

    #[test]
    fn starts_idle_then_awaits_answer() {
        let mut s = session();
        assert_eq!(s.phase(), QuizPhase::Idle);
        assert!(s.round().is_none());
        let first = *s.start().unwrap();
        assert_eq!(s.phase(), QuizPhase::AwaitingAnswer);
        // start is idempotent
        assert_eq!(s.start().unwrap(), &first);
    }

    #[test]
    fn roster_too_small() {
        let result = QuizSession::with_rng([1, 2, 0, 2, 3], StdRng::seed_from_u64(0));
        assert_eq!(result.err(), Some(QuizError::RosterTooSmall { len: 3 }));
    }

    #[test]
    fn correct_first_answer_updates_everything() {
        let mut s = session();
        let mut p = prefs(false);
        let target = s.start().unwrap().target_id;

        let outcome = s.submit_answer(target, &mut p, 0).unwrap();
        assert!(outcome.correct);
        assert_eq!(outcome.effect, AnswerEffect::Celebrate);
        assert!(!outcome.countdown_started);
        assert_eq!(s.score(), 1);
        assert_eq!(s.streak(), 1);
        let stats = p.quiz_stats();
        assert_eq!(stats.total_attempts, 1);
        assert_eq!(stats.total_correct, 1);
        assert!(stats.high_score >= 1);
        assert_eq!(s.phase(), QuizPhase::Answered);
    }

    #[test]
    fn only_the_first_answer_counts() {
        let mut s = session();
        let mut p = prefs(false);
        let round = *s.start().unwrap();

        assert!(s.submit_answer(wrong_option(&round), &mut p, 0).is_some());
        assert!(s.submit_answer(round.target_id, &mut p, 0).is_none());
        assert_eq!(s.round().and_then(|r| r.answered_id), Some(wrong_option(&round)));
        assert_eq!(p.quiz_stats().total_attempts, 1);
        assert_eq!(s.score(), 0);
    }

    #[test]
    fn answer_outside_options_is_ignored() {
        let mut s = session();
        let mut p = prefs(false);
        let round = *s.start().unwrap();
        let outsider = (1..=151).find(|id| !round.has_option(*id)).unwrap();
        assert!(s.submit_answer(outsider, &mut p, 0).is_none());
        assert_eq!(s.phase(), QuizPhase::AwaitingAnswer);
    }

    #[test]
    fn wrong_answer_resets_streak_and_keeps_high_score() {
        let mut s = session();
        let mut p = prefs(false);

        s.start().unwrap();
        for _ in 0..3 {
            let target = s.round().unwrap().target_id;
            s.submit_answer(target, &mut p, 0);
            s.next();
        }
        assert_eq!(s.streak(), 3);
        assert_eq!(p.quiz_stats().high_score, 3);

        let round = s.round().copied().unwrap();
        let outcome = s.submit_answer(wrong_option(&round), &mut p, 0).unwrap();
        assert!(!outcome.correct);
        assert_eq!(
            outcome.effect,
            AnswerEffect::Shake {
                duration_ms: SHAKE_DURATION_MS
            }
        );
        assert_eq!(s.streak(), 0);
        assert_eq!(s.score(), 3);
        assert_eq!(p.quiz_stats().high_score, 3);
        assert_eq!(p.quiz_stats().total_attempts, 4);
        assert_eq!(p.quiz_stats().total_correct, 3);
    }

    #[test]
    fn next_requires_an_answer() {
        let mut s = session();
        let mut p = prefs(false);
        assert!(s.next().is_none());

        let first = *s.start().unwrap();
        assert!(s.next().is_none());
        assert_eq!(s.round(), Some(&first));

        s.submit_answer(first.target_id, &mut p, 0);
        let second = s.next().copied().unwrap();
        assert_ne!(second.round_id, first.round_id);
        assert!(!second.is_answered());
    }

    #[test]
    fn countdown_advances_exactly_once() {
        let mut s = session();
        let mut p = prefs(true);
        let round = *s.start().unwrap();

        let outcome = s.submit_answer(round.target_id, &mut p, 10_000).unwrap();
        assert!(outcome.countdown_started);

        let mut advanced = 0;
        let mut advanced_at = None;
        let mut now = 10_000;
        while now <= 10_000 + 6_000 {
            if s.tick(round.round_id, now) == Tick::Advanced {
                advanced += 1;
                advanced_at.get_or_insert(now);
            }
            now += 50;
        }
        assert_eq!(advanced, 1);
        let at = advanced_at.unwrap();
        assert!((at - 10_000 - 5_000).abs() <= 50);
        assert_eq!(s.phase(), QuizPhase::AwaitingAnswer);
        assert_ne!(s.round().map(|r| r.round_id), Some(round.round_id));
    }

    #[test]
    fn running_tick_reports_remaining_time() {
        let mut s = session();
        let mut p = prefs(true);
        let round = *s.start().unwrap();
        s.submit_answer(round.target_id, &mut p, 0);

        assert_eq!(s.tick(round.round_id, 1_500), Tick::Running { remaining_ms: 3_500 });
        assert_eq!(s.remaining_ms(4_990), Some(10));
    }

    #[test]
    fn disabling_auto_next_cancels_without_advancing() {
        let mut s = session();
        let mut p = prefs(true);
        let round = *s.start().unwrap();
        s.submit_answer(round.target_id, &mut p, 0);

        assert!(matches!(s.tick(round.round_id, 2_000), Tick::Running { .. }));
        s.set_auto_next(false, &mut p);
        assert!(!p.auto_next());
        assert_eq!(s.tick(round.round_id, 9_000), Tick::Idle);
        assert_eq!(s.phase(), QuizPhase::Answered);
        assert_eq!(s.round().map(|r| r.round_id), Some(round.round_id));

        // idempotent
        assert!(!s.cancel_countdown());
    }

    #[test]
    fn manual_next_makes_old_ticks_stale() {
        let mut s = session();
        let mut p = prefs(true);
        let first = *s.start().unwrap();
        s.submit_answer(first.target_id, &mut p, 0);
        let second = s.next().copied().unwrap();
        s.submit_answer(second.target_id, &mut p, 100);

        // A leftover tick from the first round must not skip the second
        assert_eq!(s.tick(first.round_id, 6_000), Tick::Stale);
        assert_eq!(s.round().map(|r| r.round_id), Some(second.round_id));
        assert_eq!(s.tick(second.round_id, 5_100), Tick::Advanced);
    }

    #[test]
    fn no_countdown_when_auto_next_off() {
        let mut s = session();
        let mut p = prefs(false);
        let round = *s.start().unwrap();
        s.submit_answer(round.target_id, &mut p, 0);
        assert_eq!(s.countdown(), None);
        assert_eq!(s.tick(round.round_id, 10_000), Tick::Idle);
        assert_eq!(s.phase(), QuizPhase::Answered);
    }
}
