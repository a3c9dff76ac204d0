// Copyright 2026 the Festoon Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Pointer/tap ripple geometry.
//!
//! A ripple is a fixed-size circle centered on the trigger point, scaling up
//! and fading out over [`RIPPLE_DURATION`], then removing itself.
//! [`TapFilter`] decides which touch sequences count as taps (and therefore
//! spawn a ripple) rather than drags or long presses.

use kurbo::{Point, Rect, Size};

use crate::time::{Duration, HostTime};

/// Ripple circle diameter in CSS pixels.
pub const RIPPLE_DIAMETER: f64 = 50.0;

/// How long a ripple animates before removing itself.
pub const RIPPLE_DURATION: Duration = Duration::from_millis(600);

/// Touches shorter than this count as taps.
pub const TAP_MAX: Duration = Duration::from_millis(200);

/// One planned ripple.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Ripple {
    /// Untransformed bounds of the ripple element.
    pub bounds: Rect,
}

impl Ripple {
    /// Plans a ripple centered on `point` (typically the event's client
    /// coordinates).
    #[must_use]
    pub fn centered_at(point: Point) -> Self {
        Self {
            bounds: Rect::from_center_size(point, Size::new(RIPPLE_DIAMETER, RIPPLE_DIAMETER)),
        }
    }

    /// Returns the top-left corner where the element is positioned.
    #[must_use]
    pub fn origin(&self) -> Point {
        self.bounds.origin()
    }
}

/// Distinguishes taps from longer touches.
///
/// Owns the start timestamp the original design kept in an ambient global.
#[derive(Clone, Copy, Debug, Default)]
pub struct TapFilter {
    started: Option<HostTime>,
}

impl TapFilter {
    /// Creates a filter with no touch in progress.
    #[must_use]
    pub const fn new() -> Self {
        Self { started: None }
    }

    /// Records the start of a touch.
    pub fn touch_started(&mut self, now: HostTime) {
        self.started = Some(now);
    }

    /// Records the end of a touch; returns whether it was a tap.
    ///
    /// A touch end without a recorded start (e.g. the page loaded mid-touch)
    /// is not a tap.
    pub fn touch_ended(&mut self, now: HostTime) -> bool {
        let Some(started) = self.started.take() else {
            return false;
        };
        now.saturating_duration_since(started) < TAP_MAX
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ripple_is_centered_on_the_trigger_point() {
        let ripple = Ripple::centered_at(Point::new(100.0, 100.0));
        assert_eq!(ripple.origin(), Point::new(75.0, 75.0));
        assert_eq!(ripple.bounds.width(), 50.0);
        assert_eq!(ripple.bounds.height(), 50.0);
    }

    #[test]
    fn ripple_duration_is_fixed() {
        assert_eq!(RIPPLE_DURATION, Duration::from_millis(600));
    }

    #[test]
    fn short_touch_is_a_tap() {
        let mut filter = TapFilter::new();
        filter.touch_started(HostTime::from_millis(1_000));
        assert!(filter.touch_ended(HostTime::from_millis(1_150)));
    }

    #[test]
    fn long_touch_is_not_a_tap() {
        let mut filter = TapFilter::new();
        filter.touch_started(HostTime::from_millis(1_000));
        assert!(!filter.touch_ended(HostTime::from_millis(1_200)));
    }

    #[test]
    fn end_without_start_is_not_a_tap() {
        let mut filter = TapFilter::new();
        assert!(!filter.touch_ended(HostTime::from_millis(5)));

        // The start is consumed by the end; a second end has nothing to pair
        // with.
        filter.touch_started(HostTime::from_millis(10));
        assert!(filter.touch_ended(HostTime::from_millis(20)));
        assert!(!filter.touch_ended(HostTime::from_millis(30)));
    }
}
