//! "Who's that Pokémon?" view.
//!
//! The session lives in a signal owned by this view, so leaving the view ends it.
//! The auto-next countdown is a spawned task polling the session every
//! [`TICK_INTERVAL_MS`]; it is cancelled on manual next, on disabling auto-next and
//! when the view is dropped.

use std::sync::Arc;

use dioxus::core::Task;
use dioxus::prelude::*;
use gloo_timers::future::TimeoutFuture;
use pokedex_core::api::artwork_url;
use pokedex_core::i18n::{t, t_args};
use pokedex_core::quiz::{AnswerEffect, Clock, SystemClock, TICK_INTERVAL_MS, Tick};
use pokedex_core::{QuizPhase, QuizSession, Roster};
use pokedex_types::formatting::{display_name, format_countdown_ms, format_pct_ratio};

use super::{ToastSeverity, use_toast};
use crate::state::{View, use_app, use_dex};

#[derive(Clone, Copy, PartialEq, Eq)]
enum Feedback {
    Idle,
    Celebrate,
    Shake,
}

#[component]
pub fn QuizView() -> Element {
    let app = use_app();
    let dex = use_dex();
    let mut toast = use_toast();
    let mut prefs = app.prefs;
    let mut view = app.view;
    let lang = app.lang();

    let mut roster = use_signal(|| None::<Arc<Roster>>);
    let mut session = use_signal(|| None::<QuizSession>);
    let mut too_few = use_signal(|| false);
    let mut feedback = use_signal(|| Feedback::Idle);
    let mut remaining = use_signal(|| None::<i64>);
    let mut countdown_task = use_signal(|| None::<Task>);
    let mut confirm_quit = use_signal(|| false);

    use_future(move || {
        let dex = dex.clone();
        async move {
            let loaded = match dex.gen1_roster().await {
                Ok(r) => r,
                Err(e) => {
                    tracing::error!(error = %e, "failed to load roster for quiz");
                    toast.show(t(lang, "pokedex.error"), ToastSeverity::Error);
                    return;
                }
            };
            match QuizSession::new(loaded.ids()) {
                Ok(mut quiz) => {
                    if quiz.start().is_ok() {
                        session.set(Some(quiz));
                    }
                }
                Err(e) => {
                    tracing::warn!(error = %e, "quiz unavailable");
                    too_few.set(true);
                }
            }
            roster.set(Some(loaded));
        }
    });

    let mut stop_countdown = move || {
        let task = countdown_task.write().take();
        if let Some(task) = task {
            task.cancel();
        }
        remaining.set(None);
    };

    use_drop(move || {
        if let Ok(Some(task)) = countdown_task.try_peek().map(|t| *t) {
            task.cancel();
        }
    });

    let mut start_countdown = move |round_id: u64| {
        stop_countdown();
        let task = spawn(async move {
            loop {
                TimeoutFuture::new(TICK_INTERVAL_MS).await;
                let tick = match session.write().as_mut() {
                    Some(quiz) => quiz.tick(round_id, SystemClock.now_ms()),
                    None => Tick::Idle,
                };
                match tick {
                    Tick::Running { remaining_ms } => remaining.set(Some(remaining_ms)),
                    Tick::Advanced => {
                        remaining.set(None);
                        feedback.set(Feedback::Idle);
                        break;
                    }
                    Tick::Idle | Tick::Stale => {
                        remaining.set(None);
                        break;
                    }
                }
            }
        });
        countdown_task.set(Some(task));
    };

    let mut answer = move |id: u32| {
        let outcome = {
            let mut quiz = session.write();
            let Some(quiz) = quiz.as_mut() else {
                return;
            };
            let mut prefs = prefs.write();
            quiz.submit_answer(id, &mut *prefs, SystemClock.now_ms())
        };
        let Some(outcome) = outcome else {
            return;
        };

        match outcome.effect {
            AnswerEffect::Celebrate => feedback.set(Feedback::Celebrate),
            AnswerEffect::Shake { duration_ms } => {
                feedback.set(Feedback::Shake);
                spawn(async move {
                    TimeoutFuture::new(duration_ms).await;
                    if *feedback.peek() == Feedback::Shake {
                        feedback.set(Feedback::Idle);
                    }
                });
            }
        }

        if outcome.countdown_started {
            let round_id = session
                .read()
                .as_ref()
                .and_then(|q| q.round().map(|r| r.round_id));
            if let Some(round_id) = round_id {
                start_countdown(round_id);
            }
        }
    };

    let mut next = move || {
        stop_countdown();
        feedback.set(Feedback::Idle);
        if let Some(quiz) = session.write().as_mut() {
            quiz.next();
        }
    };

    let stats = prefs.read().quiz_stats();
    let auto_next = prefs.read().auto_next();

    if too_few() {
        return rsx! {
            section { class: "quiz",
                p { class: "quiz-message", {t(lang, "quiz.tooFew")} }
            }
        };
    }

    let guard = session.read();
    let Some(quiz) = guard.as_ref() else {
        return rsx! {
            section { class: "quiz",
                p { class: "quiz-message", {t(lang, "common.loading")} }
            }
        };
    };
    let Some(round) = quiz.round().copied() else {
        return rsx! {};
    };
    let score = quiz.score();
    let streak = quiz.streak();
    let answered = quiz.phase() == QuizPhase::Answered;
    drop(guard);

    let roster_now = roster();
    let name_of = move |id: u32| {
        roster_now
            .as_deref()
            .and_then(|r| r.name_of(id))
            .map(display_name)
            .unwrap_or_default()
    };
    let target_name = name_of(round.target_id);
    let result_text = match round.is_correct() {
        Some(true) => t_args(lang, "quiz.correct", &[("name", &target_name)]),
        Some(false) => t_args(lang, "quiz.incorrect", &[("name", &target_name)]),
        None => String::new(),
    };
    let stage_class = match feedback() {
        Feedback::Idle => "quiz-stage",
        Feedback::Celebrate => "quiz-stage celebrate",
        Feedback::Shake => "quiz-stage shake",
    };
    let countdown_text = remaining().map(|ms| {
        format!(
            "{} {} {}",
            t(lang, "quiz.nextIn"),
            format_countdown_ms(ms, lang.decimal_comma()),
            t(lang, "quiz.seconds")
        )
    });

    rsx! {
        section { class: "quiz",
            div { class: "quiz-header",
                h1 { class: "view-title", {t(lang, "quiz.question")} }
                button {
                    class: "button subtle",
                    onclick: move |_| confirm_quit.set(true),
                    {t(lang, "quiz.quit")}
                }
            }

            div { class: "quiz-scoreboard",
                div { class: "score-card",
                    span { class: "score-label", {t(lang, "quiz.score")} }
                    span { class: "score-value", "{score}" }
                }
                div { class: "score-card",
                    span { class: "score-label", {t(lang, "quiz.streak")} }
                    span { class: "score-value", "{streak}" }
                }
                div { class: "score-card",
                    span { class: "score-label", {t(lang, "quiz.highScore")} }
                    span { class: "score-value", "{stats.high_score}" }
                }
                div { class: "score-card",
                    span { class: "score-label", {t(lang, "quiz.accuracy")} }
                    span { class: "score-value", {format_pct_ratio(stats.total_correct, stats.total_attempts)} }
                }
            }

            div { class: "{stage_class}",
                img {
                    class: if answered { "quiz-image revealed" } else { "quiz-image silhouette" },
                    src: artwork_url(round.target_id),
                    alt: if answered { target_name.clone() } else { "?".to_string() },
                    draggable: "false",
                }
                if answered {
                    p { class: "quiz-result", "{result_text}" }
                }
            }

            div { class: "quiz-options",
                for option in round.option_ids {
                    button {
                        key: "{round.round_id}-{option}",
                        class: option_class(option, round.target_id, round.answered_id),
                        disabled: answered,
                        onclick: move |_| answer(option),
                        {name_of(option)}
                    }
                }
            }

            div { class: "quiz-controls",
                label { class: "switch",
                    input {
                        r#type: "checkbox",
                        checked: auto_next,
                        onchange: move |e| {
                            let enabled = e.checked();
                            {
                                let mut prefs = prefs.write();
                                if let Some(quiz) = session.write().as_mut() {
                                    quiz.set_auto_next(enabled, &mut *prefs);
                                } else {
                                    prefs.set_auto_next(enabled);
                                }
                            }
                            if !enabled {
                                stop_countdown();
                            }
                        },
                    }
                    span { {t(lang, "quiz.autoNext")} }
                }
                button {
                    class: "button primary",
                    disabled: !answered,
                    onclick: move |_| next(),
                    match countdown_text {
                        Some(text) => rsx! { "{text}" },
                        None => rsx! { {t(lang, "quiz.next")} },
                    }
                }
                button {
                    class: "button subtle",
                    onclick: move |_| {
                        prefs.write().reset_quiz_stats();
                        toast.show(t(lang, "quiz.statsReset"), ToastSeverity::Info);
                    },
                    {t(lang, "quiz.resetStats")}
                }
            }

            if confirm_quit() {
                div { class: "modal-overlay", onclick: move |_| confirm_quit.set(false),
                    div { class: "modal-content", onclick: move |e| e.stop_propagation(),
                        div { class: "modal-header",
                            h3 { {t(lang, "quiz.quitTitle")} }
                        }
                        div { class: "modal-body",
                            p { {t(lang, "quiz.quitMessage")} }
                        }
                        div { class: "modal-footer",
                            button {
                                class: "button subtle",
                                onclick: move |_| confirm_quit.set(false),
                                {t(lang, "common.cancel")}
                            }
                            button {
                                class: "button danger",
                                onclick: move |_| {
                                    stop_countdown();
                                    view.set(View::Home);
                                },
                                {t(lang, "quiz.quitConfirm")}
                            }
                        }
                    }
                }
            }
        }
    }
}

fn option_class(option: u32, target: u32, answered: Option<u32>) -> &'static str {
    match answered {
        None => "quiz-option",
        Some(_) if option == target => "quiz-option correct",
        Some(picked) if option == picked => "quiz-option incorrect",
        Some(_) => "quiz-option dimmed",
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn option_classes_before_and_after_answer() {
        assert_eq!(option_class(4, 4, None), "quiz-option");
        assert_eq!(option_class(7, 4, None), "quiz-option");

        // Wrong pick: target highlighted, pick marked, the rest dimmed
        assert_eq!(option_class(4, 4, Some(7)), "quiz-option correct");
        assert_eq!(option_class(7, 4, Some(7)), "quiz-option incorrect");
        assert_eq!(option_class(9, 4, Some(7)), "quiz-option dimmed");

        assert_eq!(option_class(4, 4, Some(4)), "quiz-option correct");
        assert_eq!(option_class(9, 4, Some(4)), "quiz-option dimmed");
    }
}
