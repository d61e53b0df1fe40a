//! Request nonces: `unix_second * 1_000_000 + per-second counter`.

use std::sync::Mutex;

use chrono::Utc;

const COUNTER_SPAN: u64 = 1_000_000;

#[derive(Debug, Default)]
struct NonceState {
    last_second: u64,
    counter: u64,
}

/// Generates strictly increasing nonces for calls issued from one generator.
///
/// Uniqueness only holds per instance; clients that share a key across
/// processes must pass their own nonces.
#[derive(Debug, Default)]
pub struct NonceGenerator {
    state: Mutex<NonceState>,
}

impl NonceGenerator {
    pub fn new() -> Self {
        Self::default()
    }

    /// Next nonce for the current wall-clock time.
    pub fn next(&self) -> u64 {
        let now_ms = Utc::now().timestamp_millis().max(0) as u64;
        self.next_at(now_ms)
    }

    /// Next nonce for an explicit clock reading in unix milliseconds.
    pub fn next_at(&self, unix_millis: u64) -> u64 {
        let now_second = unix_millis / 1000;
        let mut state = self.state.lock().unwrap_or_else(|e| e.into_inner());

        if now_second == state.last_second {
            state.counter += 1;
        } else {
            state.last_second = now_second;
            state.counter = 0;
        }

        now_second * COUNTER_SPAN + state.counter
    }
}
