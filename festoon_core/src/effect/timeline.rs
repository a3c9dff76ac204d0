// Copyright 2026 the Festoon Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Explicit fade lifecycle for transient notices.
//!
//! The original design drove toasts and timed messages with chains of
//! fire-and-forget timers, which makes intermediate states impossible to
//! assert. [`FadeTimeline`] replaces that with an explicit state machine
//!
//! ```text
//!   Hidden ─► FadingIn ─► Visible ─► FadingOut ─► Removed
//! ```
//!
//! advanced by absolute [`HostTime`]. Drivers call
//! [`advance`](FadeTimeline::advance) when a timer fires and apply one style
//! mutation per returned transition; [`next_boundary`](FadeTimeline::next_boundary)
//! tells them exactly when to schedule the next timer.

use crate::time::{Duration, HostTime};

/// Lifecycle phase of a fading notice.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum FadePhase {
    /// Present in the document but not yet entering.
    Hidden,
    /// Transitioning in (slide/fade).
    FadingIn,
    /// Fully shown.
    Visible,
    /// Transitioning out.
    FadingOut,
    /// Finished; the element must be removed from the document.
    Removed,
}

/// Durations of each fade stage.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct FadeParams {
    /// Time spent in [`FadePhase::Hidden`] before the entrance starts.
    pub enter_delay: Duration,
    /// Length of the entrance transition.
    pub enter: Duration,
    /// How long the notice stays fully visible.
    pub hold: Duration,
    /// Length of the exit transition.
    pub exit: Duration,
}

impl FadeParams {
    /// Total time from show to removal.
    #[must_use]
    pub const fn total(self) -> Duration {
        Duration(
            self.enter_delay
                .ticks()
                .saturating_add(self.enter.ticks())
                .saturating_add(self.hold.ticks())
                .saturating_add(self.exit.ticks()),
        )
    }
}

/// A fade lifecycle anchored at the moment the notice was shown.
#[derive(Clone, Debug)]
pub struct FadeTimeline {
    params: FadeParams,
    shown_at: HostTime,
    phase: FadePhase,
}

impl FadeTimeline {
    /// Starts a timeline at `now` in [`FadePhase::Hidden`].
    #[must_use]
    pub const fn new(params: FadeParams, now: HostTime) -> Self {
        Self {
            params,
            shown_at: now,
            phase: FadePhase::Hidden,
        }
    }

    /// Returns the current phase.
    #[must_use]
    pub const fn phase(&self) -> FadePhase {
        self.phase
    }

    /// Returns the stage durations.
    #[must_use]
    pub const fn params(&self) -> FadeParams {
        self.params
    }

    /// Returns whether the element should have been removed.
    #[must_use]
    pub fn is_removed(&self) -> bool {
        self.phase == FadePhase::Removed
    }

    /// Advances to the phase `now` falls in.
    ///
    /// Returns `Some(phase)` when the phase changed (possibly skipping
    /// intermediate phases if `now` jumped past several boundaries), `None`
    /// when nothing changed. Phases never move backwards: a `now` earlier
    /// than the current phase's start is ignored.
    pub fn advance(&mut self, now: HostTime) -> Option<FadePhase> {
        let target = self.phase_at(now);
        if phase_order(target) > phase_order(self.phase) {
            self.phase = target;
            Some(target)
        } else {
            None
        }
    }

    /// Returns when the current phase ends, or `None` once removed.
    ///
    /// Drivers schedule exactly one timer per phase at this boundary.
    #[must_use]
    pub fn next_boundary(&self) -> Option<HostTime> {
        let p = self.params;
        let offset = match self.phase {
            FadePhase::Hidden => p.enter_delay,
            FadePhase::FadingIn => p.enter_delay + p.enter,
            FadePhase::Visible => p.enter_delay + p.enter + p.hold,
            FadePhase::FadingOut => p.total(),
            FadePhase::Removed => return None,
        };
        self.shown_at.checked_add(offset)
    }

    fn phase_at(&self, now: HostTime) -> FadePhase {
        let elapsed = now.saturating_duration_since(self.shown_at);
        let p = self.params;
        let enter_end = p.enter_delay + p.enter;
        let hold_end = enter_end + p.hold;
        if elapsed < p.enter_delay {
            FadePhase::Hidden
        } else if elapsed < enter_end {
            FadePhase::FadingIn
        } else if elapsed < hold_end {
            FadePhase::Visible
        } else if elapsed < hold_end + p.exit {
            FadePhase::FadingOut
        } else {
            FadePhase::Removed
        }
    }
}

const fn phase_order(p: FadePhase) -> u8 {
    match p {
        FadePhase::Hidden => 0,
        FadePhase::FadingIn => 1,
        FadePhase::Visible => 2,
        FadePhase::FadingOut => 3,
        FadePhase::Removed => 4,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const PARAMS: FadeParams = FadeParams {
        enter_delay: Duration::from_millis(100),
        enter: Duration::from_millis(300),
        hold: Duration::from_millis(2_600),
        exit: Duration::from_millis(300),
    };

    #[test]
    fn walks_every_phase_in_order() {
        let start = HostTime::from_millis(10);
        let mut tl = FadeTimeline::new(PARAMS, start);
        assert_eq!(tl.phase(), FadePhase::Hidden);

        assert_eq!(
            tl.advance(start + Duration::from_millis(100)),
            Some(FadePhase::FadingIn)
        );
        assert_eq!(
            tl.advance(start + Duration::from_millis(400)),
            Some(FadePhase::Visible)
        );
        assert_eq!(
            tl.advance(start + Duration::from_millis(3_000)),
            Some(FadePhase::FadingOut)
        );
        assert_eq!(
            tl.advance(start + Duration::from_millis(3_300)),
            Some(FadePhase::Removed)
        );
        assert!(tl.is_removed());
    }

    #[test]
    fn intermediate_state_at_deterministic_time() {
        let start = HostTime::from_millis(0);
        let mut tl = FadeTimeline::new(PARAMS, start);
        // One second in, the toast is fully visible.
        assert_eq!(
            tl.advance(HostTime::from_millis(1_000)),
            Some(FadePhase::Visible)
        );
        assert_eq!(tl.phase(), FadePhase::Visible);
    }

    #[test]
    fn total_matches_stage_sum() {
        assert_eq!(PARAMS.total(), Duration::from_millis(3_300));
    }

    #[test]
    fn advance_is_monotonic() {
        let start = HostTime::from_millis(0);
        let mut tl = FadeTimeline::new(PARAMS, start);
        assert_eq!(
            tl.advance(HostTime::from_millis(500)),
            Some(FadePhase::Visible)
        );
        // An earlier timestamp cannot move the phase backwards.
        assert_eq!(tl.advance(HostTime::from_millis(150)), None);
        assert_eq!(tl.phase(), FadePhase::Visible);
        // Same phase, no transition reported.
        assert_eq!(tl.advance(HostTime::from_millis(600)), None);
    }

    #[test]
    fn late_timer_skips_to_final_phase() {
        let start = HostTime::from_millis(0);
        let mut tl = FadeTimeline::new(PARAMS, start);
        assert_eq!(
            tl.advance(HostTime::from_millis(10_000)),
            Some(FadePhase::Removed)
        );
    }

    #[test]
    fn boundaries_line_up_with_phases() {
        let start = HostTime::from_millis(0);
        let mut tl = FadeTimeline::new(PARAMS, start);
        assert_eq!(tl.next_boundary(), Some(HostTime::from_millis(100)));

        let _ = tl.advance(HostTime::from_millis(100));
        assert_eq!(tl.next_boundary(), Some(HostTime::from_millis(400)));

        let _ = tl.advance(HostTime::from_millis(400));
        assert_eq!(tl.next_boundary(), Some(HostTime::from_millis(3_000)));

        let _ = tl.advance(HostTime::from_millis(3_000));
        assert_eq!(tl.next_boundary(), Some(HostTime::from_millis(3_300)));

        let _ = tl.advance(HostTime::from_millis(3_300));
        assert_eq!(tl.next_boundary(), None);
    }
}
