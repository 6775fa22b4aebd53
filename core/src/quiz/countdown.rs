//! Auto-advance countdown and the wall clock behind it.

use std::sync::atomic::{AtomicI64, Ordering};

/// Delay between answering and the automatic next round.
pub const AUTO_NEXT_DELAY_MS: i64 = 5_000;

/// How often a running countdown is redrawn.
pub const TICK_INTERVAL_MS: u32 = 50;

/// Source of wall-clock milliseconds.
pub trait Clock {
    fn now_ms(&self) -> i64;
}

/// Real time via chrono (JS `Date` on wasm).
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now_ms(&self) -> i64 {
        chrono::Utc::now().timestamp_millis()
    }
}

/// Hand-driven clock for tests and simulations.
#[derive(Debug, Default)]
pub struct ManualClock {
    now: AtomicI64,
}

impl ManualClock {
    pub fn new(start_ms: i64) -> Self {
        Self {
            now: AtomicI64::new(start_ms),
        }
    }

    pub fn set(&self, ms: i64) {
        self.now.store(ms, Ordering::SeqCst);
    }

    pub fn advance(&self, ms: i64) {
        self.now.fetch_add(ms, Ordering::SeqCst);
    }
}

impl Clock for ManualClock {
    fn now_ms(&self) -> i64 {
        self.now.load(Ordering::SeqCst)
    }
}

impl<C: Clock + ?Sized> Clock for &C {
    fn now_ms(&self) -> i64 {
        (**self).now_ms()
    }
}

/// A countdown bound to one round.
///
/// Remaining time is always `deadline - now`, so missed or late ticks never drift.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Countdown {
    round_id: u64,
    deadline_ms: i64,
}

impl Countdown {
    pub fn start(round_id: u64, now_ms: i64) -> Self {
        Self {
            round_id,
            deadline_ms: now_ms + AUTO_NEXT_DELAY_MS,
        }
    }

    pub fn round_id(&self) -> u64 {
        self.round_id
    }

    pub fn deadline_ms(&self) -> i64 {
        self.deadline_ms
    }

    /// Milliseconds left, never negative.
    pub fn remaining_ms(&self, now_ms: i64) -> i64 {
        (self.deadline_ms - now_ms).max(0)
    }

    pub fn is_expired(&self, now_ms: i64) -> bool {
        now_ms >= self.deadline_ms
    }
}
