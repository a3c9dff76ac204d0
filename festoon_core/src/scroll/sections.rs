// Copyright 2026 the Festoon Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Section geometry for navigation highlighting and keyboard movement.
//!
//! [`SectionTrack`] holds the document-order vertical spans of the page's
//! sections and answers two questions:
//!
//! - which section the navigation bar should highlight for a given scroll
//!   position ([`active_section`](SectionTrack::active_section)), and
//! - which section the arrow keys should move relative to
//!   ([`section_at_reference`](SectionTrack::section_at_reference)).
//!
//! Both are pure functions of scroll position, so reapplying them without a
//! scroll change trivially yields the same single answer — the idempotence
//! the highlighter needs.

use alloc::vec::Vec;

/// A section becomes nav-active once the scroll position is within this many
/// pixels above its top.
pub const NAV_ACTIVATION_OFFSET: f64 = 200.0;

/// Viewport-relative reference line used by keyboard navigation: the current
/// section is the one spanning this y coordinate.
pub const KEY_REFERENCE_Y: f64 = 100.0;

/// Document-order vertical span of one section.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SectionSpan {
    /// Distance from the document top to the section top, in CSS pixels.
    pub top: f64,
    /// Section height in CSS pixels.
    pub height: f64,
}

impl SectionSpan {
    /// Distance from the document top to the section bottom.
    #[must_use]
    pub fn bottom(self) -> f64 {
        self.top + self.height
    }
}

/// The page's sections in document order.
#[derive(Clone, Debug, Default)]
pub struct SectionTrack {
    spans: Vec<SectionSpan>,
}

impl SectionTrack {
    /// Creates a track from document-order spans.
    #[must_use]
    pub fn new(spans: Vec<SectionSpan>) -> Self {
        Self { spans }
    }

    /// Returns the number of sections.
    #[must_use]
    pub fn len(&self) -> usize {
        self.spans.len()
    }

    /// Returns whether the track has no sections.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.spans.is_empty()
    }

    /// Returns the section the navigation bar should highlight at
    /// `scroll_y`, or `None` when the page is still above the first
    /// activation boundary.
    ///
    /// The active section is the *last* one whose top is at most
    /// [`NAV_ACTIVATION_OFFSET`] below the scroll position, so later
    /// sections take precedence as they come into reach.
    #[must_use]
    pub fn active_section(&self, scroll_y: f64) -> Option<usize> {
        let mut active = None;
        for (i, span) in self.spans.iter().enumerate() {
            if scroll_y >= span.top - NAV_ACTIVATION_OFFSET {
                active = Some(i);
            }
        }
        active
    }

    /// Returns the section spanning the keyboard reference line at
    /// `scroll_y`.
    ///
    /// Falls back to the first section when none spans the line (e.g. in a
    /// gap between sections), matching where keyboard movement starts on a
    /// freshly loaded page. Returns `None` only for an empty track.
    #[must_use]
    pub fn section_at_reference(&self, scroll_y: f64) -> Option<usize> {
        if self.spans.is_empty() {
            return None;
        }
        let mut current = 0;
        for (i, span) in self.spans.iter().enumerate() {
            let rel_top = span.top - scroll_y;
            let rel_bottom = span.bottom() - scroll_y;
            if rel_top <= KEY_REFERENCE_Y && rel_bottom >= KEY_REFERENCE_Y {
                current = i;
            }
        }
        Some(current)
    }

    /// Returns the section after `index`, if any.
    #[must_use]
    pub fn next(&self, index: usize) -> Option<usize> {
        let next = index.checked_add(1)?;
        (next < self.spans.len()).then_some(next)
    }

    /// Returns the section before `index`, if any.
    #[must_use]
    pub fn prev(&self, index: usize) -> Option<usize> {
        index.checked_sub(1)
    }
}

#[cfg(test)]
mod tests {
    use alloc::vec;

    use super::*;

    fn track() -> SectionTrack {
        SectionTrack::new(vec![
            SectionSpan {
                top: 0.0,
                height: 600.0,
            },
            SectionSpan {
                top: 600.0,
                height: 800.0,
            },
            SectionSpan {
                top: 1_400.0,
                height: 500.0,
            },
        ])
    }

    #[test]
    fn active_section_follows_scroll() {
        let t = track();
        assert_eq!(t.active_section(0.0), Some(0));
        // 200px before the second section's top, it takes over.
        assert_eq!(t.active_section(399.0), Some(0));
        assert_eq!(t.active_section(400.0), Some(1));
        assert_eq!(t.active_section(1_300.0), Some(2));
    }

    #[test]
    fn active_section_is_idempotent_for_a_fixed_scroll() {
        let t = track();
        let first = t.active_section(700.0);
        for _ in 0..10 {
            assert_eq!(t.active_section(700.0), first);
        }
    }

    #[test]
    fn empty_track_has_no_active_section() {
        let t = SectionTrack::default();
        assert_eq!(t.active_section(500.0), None);
        assert_eq!(t.section_at_reference(500.0), None);
    }

    #[test]
    fn reference_line_picks_the_spanning_section() {
        let t = track();
        assert_eq!(t.section_at_reference(0.0), Some(0));
        // Scrolled to 550: section 1 occupies y=100 (rel_top 50).
        assert_eq!(t.section_at_reference(550.0), Some(1));
        assert_eq!(t.section_at_reference(1_500.0), Some(2));
    }

    #[test]
    fn reference_defaults_to_first_section_in_gaps() {
        let t = SectionTrack::new(vec![
            SectionSpan {
                top: 0.0,
                height: 100.0,
            },
            SectionSpan {
                top: 5_000.0,
                height: 100.0,
            },
        ]);
        // Nothing spans y=100 at scroll 2000; keyboard movement anchors to
        // the first section.
        assert_eq!(t.section_at_reference(2_000.0), Some(0));
    }

    #[test]
    fn next_and_prev_saturate_at_the_ends() {
        let t = track();
        assert_eq!(t.next(0), Some(1));
        assert_eq!(t.next(2), None);
        assert_eq!(t.prev(2), Some(1));
        assert_eq!(t.prev(0), None);
    }
}
