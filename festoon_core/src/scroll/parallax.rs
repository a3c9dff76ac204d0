// Copyright 2026 the Festoon Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Parallax drift mapping for floating decorations.
//!
//! Each floating element drifts vertically with the scroll position at a
//! speed proportional to its index, so the field of decorations separates
//! into depth planes as the page scrolls.

/// Drift speed of the first floating element.
pub const BASE_DRIFT: f64 = 0.5;

/// Additional drift speed per element index.
pub const DRIFT_STEP: f64 = 0.1;

/// Returns the drift speed for the element at `index`.
#[must_use]
pub fn drift_speed(index: usize) -> f64 {
    BASE_DRIFT + index as f64 * DRIFT_STEP
}

/// Returns the vertical offset, in CSS pixels, for the element at `index`
/// when the page is scrolled to `scroll_y`.
#[must_use]
pub fn offset_for(scroll_y: f64, index: usize) -> f64 {
    scroll_y * drift_speed(index)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn speed_grows_with_index() {
        assert_eq!(drift_speed(0), 0.5);
        assert_eq!(drift_speed(1), 0.6);
        assert_eq!(drift_speed(5), 1.0);
    }

    #[test]
    fn offset_scales_with_scroll() {
        assert_eq!(offset_for(0.0, 3), 0.0);
        assert_eq!(offset_for(200.0, 0), 100.0);
        assert_eq!(offset_for(200.0, 2), 140.0);
    }
}
