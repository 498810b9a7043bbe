//! Cancel-and-reschedule bookkeeping for the window-resize debounce.
//!
//! The host owns the real timer. Every `schedule` hands out a fresh token and
//! the host replaces (and so cancels) any timer it already holds; when a timer
//! elapses the host reports its token back and only the most recent,
//! still-pending token is honoured.

#[cfg(test)]
#[path = "debounce_test.rs"]
mod debounce_test;

/// Token identifying one scheduled debounce timer.
pub type DebounceToken = u64;

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Debounce {
    token: DebounceToken,
    pending: bool,
}

impl Debounce {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Start (or restart) the quiet period and return the token for the new timer.
    pub fn schedule(&mut self) -> DebounceToken {
        self.token = self.token.wrapping_add(1);
        self.pending = true;
        self.token
    }

    /// Drop the pending timer, if any. Returns whether one was pending.
    pub fn cancel(&mut self) -> bool {
        std::mem::replace(&mut self.pending, false)
    }

    /// Report that the timer for `token` elapsed.
    ///
    /// Returns `true` exactly once for the latest scheduled token; stale or
    /// cancelled tokens return `false`.
    pub fn fire(&mut self, token: DebounceToken) -> bool {
        if self.pending && token == self.token {
            self.pending = false;
            return true;
        }
        false
    }

    #[must_use]
    pub fn is_pending(&self) -> bool {
        self.pending
    }
}
