// Copyright 2026 the Festoon Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Scroll event coalescing.
//!
//! Scroll events arrive far faster than scroll-linked work needs to run.
//! [`ThrottleGate`] coalesces a burst into at most one scheduled follow-up
//! per [`SCROLL_COALESCE`] window: the handler calls
//! [`try_arm`](ThrottleGate::try_arm) and schedules the follow-up only when
//! it returns `true`; the follow-up calls [`release`](ThrottleGate::release)
//! when it runs.
//!
//! The gate is a plain field owned by whoever installs the scroll handler —
//! never an ambient global.

use crate::time::Duration;

/// Coalescing window for scroll-linked work (one frame at 60 Hz).
pub const SCROLL_COALESCE: Duration = Duration::from_millis(16);

/// Single-flag gate coalescing rapid events.
#[derive(Clone, Copy, Debug, Default)]
pub struct ThrottleGate {
    armed: bool,
}

impl ThrottleGate {
    /// Creates an open gate.
    #[must_use]
    pub const fn new() -> Self {
        Self { armed: false }
    }

    /// Attempts to arm the gate.
    ///
    /// Returns `true` when the caller should schedule the follow-up; `false`
    /// while one is already pending.
    pub fn try_arm(&mut self) -> bool {
        if self.armed {
            return false;
        }
        self.armed = true;
        true
    }

    /// Re-opens the gate; called by the follow-up when it runs.
    pub fn release(&mut self) {
        self.armed = false;
    }

    /// Returns whether a follow-up is pending.
    #[must_use]
    pub const fn is_armed(&self) -> bool {
        self.armed
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn only_one_follow_up_per_window() {
        let mut gate = ThrottleGate::new();
        assert!(gate.try_arm());
        assert!(!gate.try_arm());
        assert!(!gate.try_arm());
        assert!(gate.is_armed());

        gate.release();
        assert!(!gate.is_armed());
        assert!(gate.try_arm());
    }

    #[test]
    fn release_on_open_gate_is_harmless() {
        let mut gate = ThrottleGate::new();
        gate.release();
        assert!(gate.try_arm());
    }
}
