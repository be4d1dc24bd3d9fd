// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! External cancellation signals for timers.
//!
//! A signal may be raised from any thread; timers only poll it during their
//! own tick, so cancellation takes effect on the next tick.

pub use tokio_util::sync::CancellationToken;

/// Anything a timer can poll for "cancel me now".
pub trait CancelSignal: Send + Sync {
    fn is_cancelled(&self) -> bool;
}

impl CancelSignal for CancellationToken {
    fn is_cancelled(&self) -> bool {
        CancellationToken::is_cancelled(self)
    }
}

/// Signal raised when any of its tokens is cancelled.
#[derive(Clone, Debug, Default)]
pub struct LinkedCancellation {
    tokens: Vec<CancellationToken>,
}

impl LinkedCancellation {
    pub fn new(tokens: impl IntoIterator<Item = CancellationToken>) -> Self {
        Self {
            tokens: tokens.into_iter().collect(),
        }
    }
}

impl CancelSignal for LinkedCancellation {
    fn is_cancelled(&self) -> bool {
        self.tokens.iter().any(CancellationToken::is_cancelled)
    }
}

/// Link `token` with `others` so the result fires when any of them does.
pub fn link_tokens(token: &CancellationToken, others: &[CancellationToken]) -> LinkedCancellation {
    LinkedCancellation::new(std::iter::once(token.clone()).chain(others.iter().cloned()))
}

#[cfg(test)]
#[path = "cancel_tests.rs"]
mod tests;
