// Copyright 2026 the Festoon Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Background media resolution.
//!
//! [`MediaResolver`] chooses a background treatment for the page: the first
//! candidate video source whose probe reports success wins; if every probe
//! fails (or there is nothing to probe against), a static fallback treatment
//! is directed instead.
//!
//! The resolver is a pure state machine:
//!
//! ```text
//!   Unresolved ──begin_probing()──► Probing ──first success──► VideoActive
//!        │                            │                            │
//!        │ target_missing()           │ all probes failed          │ playback_error()
//!        ▼                            ▼                            ▼
//!   FallbackActive ◄──────────────────┴────────────────────────────┘
//! ```
//!
//! Side effects are expressed as [`Resolution`] directives returned from the
//! report methods; the web backend applies them to the DOM. Returning `None`
//! is how monotonicity is enforced: once a directive has committed, later
//! probe reports are ignored. `FallbackActive` is fully terminal;
//! `VideoActive` is terminal with respect to probe results but can still be
//! demoted by a playback error on the live element, whose error listener
//! outlives probing. No transition re-enters `Unresolved`.

use alloc::string::String;
use alloc::vec::Vec;

/// Resolution progress of the background treatment.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ResolveState {
    /// No probing has started.
    Unresolved,
    /// Candidate probes are in flight.
    Probing,
    /// A video source has been committed.
    VideoActive,
    /// The static fallback treatment has been committed.
    FallbackActive,
}

/// Why the fallback treatment was directed.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum FallbackReason {
    /// The designated video element is absent from the page.
    TargetMissing,
    /// Every candidate probe reported failure.
    AllCandidatesFailed,
    /// The live video element itself reported an error.
    PlaybackError,
}

/// A side effect the caller must apply to the page.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Resolution {
    /// Assign the candidate at `index` as the video element's source.
    SelectVideo {
        /// Index into the resolver's candidate list.
        index: u32,
    },
    /// Apply the static fallback treatment to the background container and
    /// the page body.
    ApplyFallback {
        /// What triggered the fallback.
        reason: FallbackReason,
    },
}

/// One-shot resolver for the page background treatment.
///
/// Owns the ordered candidate list and the commitment flag the original
/// design kept in ambient globals. Probe outcomes are reported by the caller
/// (concurrently, in any order); the resolver guarantees at most one
/// [`Resolution::SelectVideo`] is ever returned.
#[derive(Debug)]
pub struct MediaResolver {
    candidates: Vec<String>,
    /// Per-candidate probe outcome; `Some(true)` loadable, `Some(false)` not.
    outcomes: Vec<Option<bool>>,
    committed: Option<u32>,
    state: ResolveState,
}

impl MediaResolver {
    /// Creates a resolver over an ordered candidate list.
    #[must_use]
    pub fn new<I, S>(candidates: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let candidates: Vec<String> = candidates.into_iter().map(Into::into).collect();
        let outcomes = alloc::vec![None; candidates.len()];
        Self {
            candidates,
            outcomes,
            committed: None,
            state: ResolveState::Unresolved,
        }
    }

    /// Returns the ordered candidate list.
    #[must_use]
    pub fn candidates(&self) -> &[String] {
        &self.candidates
    }

    /// Returns the current resolution state.
    #[must_use]
    pub fn state(&self) -> ResolveState {
        self.state
    }

    /// Returns the committed video source, if resolution ended in
    /// [`ResolveState::VideoActive`].
    #[must_use]
    pub fn selected(&self) -> Option<&str> {
        match self.state {
            ResolveState::VideoActive => self
                .committed
                .and_then(|i| self.candidates.get(i as usize))
                .map(String::as_str),
            _ => None,
        }
    }

    /// Reports that the designated video element is absent.
    ///
    /// Skips probing entirely and directs the fallback. Ignored once a
    /// treatment has committed.
    pub fn target_missing(&mut self) -> Option<Resolution> {
        match self.state {
            ResolveState::Unresolved | ResolveState::Probing => {
                Some(self.fall_back(FallbackReason::TargetMissing))
            }
            ResolveState::VideoActive | ResolveState::FallbackActive => None,
        }
    }

    /// Enters the probing state.
    ///
    /// With an empty candidate list there is nothing to wait for, so this
    /// directs the fallback immediately. Calling again (or after resolution)
    /// is a no-op.
    pub fn begin_probing(&mut self) -> Option<Resolution> {
        if self.state != ResolveState::Unresolved {
            return None;
        }
        if self.candidates.is_empty() {
            return Some(self.fall_back(FallbackReason::AllCandidatesFailed));
        }
        self.state = ResolveState::Probing;
        None
    }

    /// Reports that the probe for `index` succeeded.
    ///
    /// The first success while probing wins and commits the video treatment;
    /// everything else — later successes, duplicate reports, indices out of
    /// range, reports outside the probing state — is ignored.
    pub fn probe_succeeded(&mut self, index: u32) -> Option<Resolution> {
        let Some(slot) = self.outcomes.get_mut(index as usize) else {
            return None;
        };
        *slot = Some(true);
        if self.state != ResolveState::Probing {
            return None;
        }
        self.committed = Some(index);
        self.state = ResolveState::VideoActive;
        Some(Resolution::SelectVideo { index })
    }

    /// Reports that the probe for `index` failed.
    ///
    /// Once every candidate has reported failure (and nothing has committed),
    /// directs the fallback. Duplicate reports are idempotent.
    pub fn probe_failed(&mut self, index: u32) -> Option<Resolution> {
        let Some(slot) = self.outcomes.get_mut(index as usize) else {
            return None;
        };
        *slot = Some(false);
        if self.state != ResolveState::Probing {
            return None;
        }
        let all_failed = self.outcomes.iter().all(|o| *o == Some(false));
        if all_failed {
            return Some(self.fall_back(FallbackReason::AllCandidatesFailed));
        }
        None
    }

    /// Reports an error from the live video element.
    ///
    /// Directs the fallback from any state except an already-applied
    /// fallback — including demoting a committed video.
    pub fn playback_error(&mut self) -> Option<Resolution> {
        if self.state == ResolveState::FallbackActive {
            return None;
        }
        Some(self.fall_back(FallbackReason::PlaybackError))
    }

    fn fall_back(&mut self, reason: FallbackReason) -> Resolution {
        self.state = ResolveState::FallbackActive;
        Resolution::ApplyFallback { reason }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn resolver(names: &[&str]) -> MediaResolver {
        let mut r = MediaResolver::new(names.iter().copied());
        assert_eq!(r.begin_probing(), None, "non-empty list keeps probing");
        r
    }

    #[test]
    fn first_success_wins() {
        let mut r = resolver(&["a.mp4", "b.mp4", "c.mp4"]);
        assert_eq!(
            r.probe_succeeded(0),
            Some(Resolution::SelectVideo { index: 0 })
        );
        assert_eq!(r.state(), ResolveState::VideoActive);
        assert_eq!(r.selected(), Some("a.mp4"));

        // Later successes are ignored, even for earlier-listed candidates.
        assert_eq!(r.probe_succeeded(1), None);
        assert_eq!(r.selected(), Some("a.mp4"));
    }

    #[test]
    fn first_reported_success_wins_out_of_order() {
        // Probes run concurrently; the first to *report* wins, not the first
        // in list order.
        let mut r = resolver(&["a.mp4", "b.mp4"]);
        assert_eq!(
            r.probe_succeeded(1),
            Some(Resolution::SelectVideo { index: 1 })
        );
        assert_eq!(r.probe_succeeded(0), None);
        assert_eq!(r.selected(), Some("b.mp4"));
    }

    #[test]
    fn failed_first_candidate_falls_through_to_second() {
        let mut r = resolver(&["a.mp4", "b.mp4"]);
        assert_eq!(r.probe_failed(0), None);
        assert_eq!(
            r.probe_succeeded(1),
            Some(Resolution::SelectVideo { index: 1 })
        );
        assert_eq!(r.selected(), Some("b.mp4"));
    }

    #[test]
    fn all_failures_direct_fallback_once() {
        let mut r = resolver(&["a.mp4", "b.mp4"]);
        assert_eq!(r.probe_failed(1), None);
        assert_eq!(
            r.probe_failed(0),
            Some(Resolution::ApplyFallback {
                reason: FallbackReason::AllCandidatesFailed,
            })
        );
        assert_eq!(r.state(), ResolveState::FallbackActive);

        // Duplicate reports after resolution change nothing.
        assert_eq!(r.probe_failed(0), None);
        assert_eq!(r.probe_succeeded(1), None);
        assert_eq!(r.selected(), None);
    }

    #[test]
    fn duplicate_failure_does_not_count_twice() {
        let mut r = resolver(&["a.mp4", "b.mp4"]);
        assert_eq!(r.probe_failed(0), None);
        // Same candidate failing again must not satisfy "all failed".
        assert_eq!(r.probe_failed(0), None);
        assert_eq!(r.state(), ResolveState::Probing);
    }

    #[test]
    fn missing_target_skips_probing() {
        let mut r = MediaResolver::new(["a.mp4"]);
        assert_eq!(
            r.target_missing(),
            Some(Resolution::ApplyFallback {
                reason: FallbackReason::TargetMissing,
            })
        );
        assert_eq!(r.state(), ResolveState::FallbackActive);
        assert_eq!(r.begin_probing(), None);
        assert_eq!(r.probe_succeeded(0), None);
    }

    #[test]
    fn empty_candidate_list_falls_back_immediately() {
        let mut r = MediaResolver::new(core::iter::empty::<&str>());
        assert_eq!(
            r.begin_probing(),
            Some(Resolution::ApplyFallback {
                reason: FallbackReason::AllCandidatesFailed,
            })
        );
        assert_eq!(r.state(), ResolveState::FallbackActive);
    }

    #[test]
    fn playback_error_demotes_committed_video() {
        let mut r = resolver(&["a.mp4"]);
        assert_eq!(
            r.probe_succeeded(0),
            Some(Resolution::SelectVideo { index: 0 })
        );
        assert_eq!(
            r.playback_error(),
            Some(Resolution::ApplyFallback {
                reason: FallbackReason::PlaybackError,
            })
        );
        assert_eq!(r.state(), ResolveState::FallbackActive);
        assert_eq!(r.selected(), None);

        // The fallback is fully terminal.
        assert_eq!(r.playback_error(), None);
    }

    #[test]
    fn playback_error_during_probing_resolves() {
        let mut r = resolver(&["a.mp4", "b.mp4"]);
        assert_eq!(
            r.playback_error(),
            Some(Resolution::ApplyFallback {
                reason: FallbackReason::PlaybackError,
            })
        );
        // A probe success arriving afterwards is ignored.
        assert_eq!(r.probe_succeeded(1), None);
        assert_eq!(r.state(), ResolveState::FallbackActive);
    }

    #[test]
    fn out_of_range_reports_are_ignored() {
        let mut r = resolver(&["a.mp4"]);
        assert_eq!(r.probe_succeeded(7), None);
        assert_eq!(r.probe_failed(7), None);
        assert_eq!(r.state(), ResolveState::Probing);
    }
}
