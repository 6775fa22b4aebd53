//! Quiz commands and the auto-next countdown task.

use std::io::Write;
use std::sync::Arc;
use std::time::Duration;

use pokedex_core::i18n::{t, t_args};
use pokedex_core::quiz::{AUTO_NEXT_DELAY_MS, Clock, SystemClock, TICK_INTERVAL_MS, Tick};
use pokedex_core::{GEN1_COUNT, QuizPhase, QuizRound, QuizSession, Roster};
use pokedex_types::Language;
use pokedex_types::formatting::format_countdown_ms;
use tokio::sync::RwLock;
use tokio::task::JoinHandle;

use crate::commands::name_of;
use crate::state::AppState;

fn print_round(round: &QuizRound, roster: Option<&Roster>, lang: Language) {
    println!("{}", t(lang, "quiz.question"));
    for (i, id) in round.option_ids.iter().enumerate() {
        println!("  {}) {}", i + 1, name_of(roster, *id));
    }
}

/// Start a session, or show the current round of the running one.
pub async fn start(state: Arc<RwLock<AppState>>) -> Result<(), String> {
    let dex = Arc::clone(&state.read().await.dex);
    let roster = dex.gen1_roster().await.map_err(|e| format!("{e}\n"))?;

    let mut s = state.write().await;
    let lang = s.lang();
    let quiz = match s.quiz.take() {
        Some(quiz) => quiz,
        None => QuizSession::new(roster.ids())
            .map_err(|e| format!("{} ({e})\n", t(lang, "quiz.tooFew")))?,
    };
    let quiz = s.quiz.insert(quiz);
    let round = quiz.start().map_err(|e| format!("{e}\n"))?;
    print_round(round, Some(roster.as_ref()), lang);
    Ok(())
}

/// End the session. The persisted statistics are kept.
pub async fn quit(state: Arc<RwLock<AppState>>) -> Result<(), String> {
    let mut s = state.write().await;
    s.stop_countdown_task();
    if s.quiz.take().is_some() {
        println!("{}", t(s.lang(), "quiz.quitMessage"));
    }
    Ok(())
}

/// Answer with option `choice` (1-based).
pub async fn answer(state: Arc<RwLock<AppState>>, choice: u8) -> Result<(), String> {
    let mut s = state.write().await;
    let lang = s.lang();
    let roster = s.dex.cached_roster(GEN1_COUNT, 0);
    let AppState { quiz, prefs, .. } = &mut *s;
    let quiz = quiz.as_mut().ok_or("error: no quiz running, start one with `quiz`\n")?;

    let id = quiz
        .round()
        .and_then(|r| r.option_ids.get(usize::from(choice).saturating_sub(1)).copied())
        .ok_or("error: no such option\n")?;
    let Some(outcome) = quiz.submit_answer(id, prefs, SystemClock.now_ms()) else {
        println!("error: this round is already answered, use `next`");
        return Ok(());
    };

    let name = name_of(roster.as_deref(), outcome.target_id);
    let key = if outcome.correct { "quiz.correct" } else { "quiz.incorrect" };
    println!("{}", t_args(lang, key, &[("name", &name)]));
    println!(
        "{}: {}  {}: {}  {}: {}",
        t(lang, "quiz.score"),
        quiz.score(),
        t(lang, "quiz.streak"),
        quiz.streak(),
        t(lang, "quiz.highScore"),
        prefs.quiz_stats().high_score
    );

    if outcome.countdown_started {
        let round_id = quiz.round().map(|r| r.round_id).unwrap_or_default();
        println!(
            "{} {} {}",
            t(lang, "quiz.nextIn"),
            format_countdown_ms(AUTO_NEXT_DELAY_MS, lang.decimal_comma()),
            t(lang, "quiz.seconds")
        );
        s.stop_countdown_task();
        s.countdown_task = Some(spawn_countdown(Arc::clone(&state), round_id));
    }
    Ok(())
}

pub async fn next(state: Arc<RwLock<AppState>>) -> Result<(), String> {
    let mut s = state.write().await;
    s.stop_countdown_task();
    let lang = s.lang();
    let roster = s.dex.cached_roster(GEN1_COUNT, 0);
    let quiz = s.quiz.as_mut().ok_or("error: no quiz running, start one with `quiz`\n")?;

    if quiz.phase() != QuizPhase::Answered {
        return Err("error: answer the current round first\n".to_string());
    }
    match quiz.next() {
        Some(round) => print_round(round, roster.as_deref(), lang),
        None => return Err(format!("{}\n", t(lang, "common.error"))),
    }
    Ok(())
}

pub async fn set_auto_next(state: Arc<RwLock<AppState>>, enabled: bool) -> Result<(), String> {
    let mut s = state.write().await;
    let AppState { quiz, prefs, .. } = &mut *s;
    match quiz.as_mut() {
        Some(quiz) => quiz.set_auto_next(enabled, prefs),
        None => prefs.set_auto_next(enabled),
    }
    if !enabled {
        s.stop_countdown_task();
    }
    println!("{}: {}", t(s.lang(), "quiz.autoNext"), if enabled { "on" } else { "off" });
    Ok(())
}

/// Print the shell prompt again after output from a background task.
fn redraw_prompt(out: &mut impl Write) -> std::io::Result<()> {
    write!(out, "$ ")?;
    out.flush()
}

/// Drive the countdown of `round_id` until the session advances.
///
/// The session decides expiry from the wall clock; a tick for a replaced round ends
/// the task without touching the session.
pub fn spawn_countdown(state: Arc<RwLock<AppState>>, round_id: u64) -> JoinHandle<()> {
    tokio::spawn(async move {
        let period = Duration::from_millis(u64::from(TICK_INTERVAL_MS));
        let mut interval = tokio::time::interval(period);
        loop {
            interval.tick().await;
            let mut s = state.write().await;
            let lang = s.lang();
            let roster = s.dex.cached_roster(GEN1_COUNT, 0);
            let Some(quiz) = s.quiz.as_mut() else {
                break;
            };
            match quiz.tick(round_id, SystemClock.now_ms()) {
                Tick::Running { .. } => {}
                Tick::Advanced => {
                    println!();
                    if let Some(round) = quiz.round() {
                        print_round(round, roster.as_deref(), lang);
                    }
                    if let Err(e) = redraw_prompt(&mut std::io::stdout()) {
                        tracing::debug!(error = %e, "failed to redraw the prompt");
                    }
                    break;
                }
                Tick::Idle | Tick::Stale => break,
            }
        }
    })
}

#[cfg(test)]
mod tests {
    use std::io;

    use super::*;

    struct BrokenPipe;

    impl Write for BrokenPipe {
        fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
            Ok(buf.len())
        }

        fn flush(&mut self) -> io::Result<()> {
            Err(io::Error::new(io::ErrorKind::BrokenPipe, "closed"))
        }
    }

    #[test]
    fn prompt_is_redrawn() {
        let mut out = Vec::new();
        redraw_prompt(&mut out).unwrap();
        assert_eq!(out, b"$ ");
    }

    #[test]
    fn flush_failure_is_reported() {
        let err = redraw_prompt(&mut BrokenPipe).unwrap_err();
        assert_eq!(err.kind(), io::ErrorKind::BrokenPipe);
    }
}
