// Copyright 2026 the Festoon Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Tracing and diagnostics for page decoration.
//!
//! This module provides a [`TraceSink`] trait with per-event methods that the
//! media resolver and effect installers call as decoration proceeds. All
//! method bodies default to no-ops, so implementing only the events you care
//! about is fine.
//!
//! [`Tracer`] wraps an optional `&mut dyn TraceSink`. When the `trace`
//! feature is **off**, every `Tracer` method compiles to nothing (zero
//! overhead). When **on**, each method performs a single `Option` branch
//! before dispatching.
//!
//! # Crate features
//!
//! - `trace` — enables the `Tracer` method bodies (one branch per call).

use crate::media::Resolution;
use crate::time::HostTime;

// ---------------------------------------------------------------------------
// Enums
// ---------------------------------------------------------------------------

/// What a candidate probe reported.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ProbeOutcome {
    /// The candidate is loadable.
    Loadable,
    /// The candidate failed to load.
    Unavailable,
}

/// Which kind of ephemeral effect an event concerns.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum EffectKind {
    /// A confetti burst (many particles).
    Confetti,
    /// A pointer/tap ripple.
    Ripple,
    /// A download confirmation toast.
    Toast,
    /// The timed celebratory message.
    Celebration,
    /// The typewriter name reveal.
    Typewriter,
}

// ---------------------------------------------------------------------------
// Event structs
// ---------------------------------------------------------------------------

/// Emitted when a background candidate probe completes.
#[derive(Clone, Copy, Debug)]
pub struct ProbeEvent {
    /// Index of the candidate in the resolver's ordered list.
    pub index: u32,
    /// What the probe reported.
    pub outcome: ProbeOutcome,
    /// Host time when the report arrived.
    pub at: HostTime,
}

/// Emitted when the background media resolution commits a directive.
#[derive(Clone, Copy, Debug)]
pub struct ResolutionEvent {
    /// The directive that was applied.
    pub taken: Resolution,
    /// Host time of the commitment.
    pub at: HostTime,
}

/// Emitted when an effect instance (or burst) is spawned.
#[derive(Clone, Copy, Debug)]
pub struct EffectSpawnedEvent {
    /// Which effect.
    pub kind: EffectKind,
    /// How many DOM elements the spawn creates (particles for confetti,
    /// otherwise 1).
    pub count: u32,
    /// Host time of the spawn.
    pub at: HostTime,
}

/// Emitted when an effect instance finishes and removes itself.
#[derive(Clone, Copy, Debug)]
pub struct EffectRetiredEvent {
    /// Which effect.
    pub kind: EffectKind,
    /// Host time of the removal.
    pub at: HostTime,
}

/// Emitted when the scroll-linked navigation highlight changes.
#[derive(Clone, Copy, Debug)]
pub struct NavHighlightEvent {
    /// Index of the newly active section, if any section is active.
    pub section: Option<u32>,
}

// ---------------------------------------------------------------------------
// TraceSink trait
// ---------------------------------------------------------------------------

/// Receives trace events from the decoration pipeline.
///
/// All methods have default no-op implementations, so you only need to
/// override the events you care about.
pub trait TraceSink {
    /// Called when a candidate probe reports its outcome.
    fn on_probe(&mut self, e: &ProbeEvent) {
        _ = e;
    }

    /// Called when the media resolver commits a directive.
    fn on_resolution(&mut self, e: &ResolutionEvent) {
        _ = e;
    }

    /// Called when an effect is spawned.
    fn on_effect_spawned(&mut self, e: &EffectSpawnedEvent) {
        _ = e;
    }

    /// Called when an effect retires itself.
    fn on_effect_retired(&mut self, e: &EffectRetiredEvent) {
        _ = e;
    }

    /// Called when the navigation highlight moves.
    fn on_nav_highlight(&mut self, e: &NavHighlightEvent) {
        _ = e;
    }
}

// ---------------------------------------------------------------------------
// NoopSink
// ---------------------------------------------------------------------------

/// A [`TraceSink`] that discards all events.
#[derive(Clone, Copy, Debug, Default)]
pub struct NoopSink;

impl TraceSink for NoopSink {}

// ---------------------------------------------------------------------------
// Tracer wrapper
// ---------------------------------------------------------------------------

/// Thin wrapper around an optional [`TraceSink`].
///
/// When the `trace` feature is **off**, every method compiles to nothing.
/// When **on**, each method checks the inner `Option` (one branch) before
/// dispatching to the sink.
pub struct Tracer<'a> {
    #[cfg(feature = "trace")]
    sink: Option<&'a mut dyn TraceSink>,
    #[cfg(not(feature = "trace"))]
    _marker: core::marker::PhantomData<&'a mut dyn TraceSink>,
}

impl core::fmt::Debug for Tracer<'_> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("Tracer").finish_non_exhaustive()
    }
}

impl<'a> Tracer<'a> {
    /// Creates a tracer that dispatches to the given sink.
    #[inline]
    #[must_use]
    pub fn new(sink: &'a mut dyn TraceSink) -> Self {
        #[cfg(feature = "trace")]
        {
            Self { sink: Some(sink) }
        }
        #[cfg(not(feature = "trace"))]
        {
            _ = sink;
            Self {
                _marker: core::marker::PhantomData,
            }
        }
    }

    /// Creates a tracer that discards all events.
    #[inline]
    #[must_use]
    pub fn none() -> Self {
        #[cfg(feature = "trace")]
        {
            Self { sink: None }
        }
        #[cfg(not(feature = "trace"))]
        {
            Self {
                _marker: core::marker::PhantomData,
            }
        }
    }

    /// Emits a [`ProbeEvent`].
    #[inline]
    pub fn probe(&mut self, e: &ProbeEvent) {
        #[cfg(feature = "trace")]
        if let Some(s) = &mut self.sink {
            s.on_probe(e);
        }
        #[cfg(not(feature = "trace"))]
        {
            _ = e;
        }
    }

    /// Emits a [`ResolutionEvent`].
    #[inline]
    pub fn resolution(&mut self, e: &ResolutionEvent) {
        #[cfg(feature = "trace")]
        if let Some(s) = &mut self.sink {
            s.on_resolution(e);
        }
        #[cfg(not(feature = "trace"))]
        {
            _ = e;
        }
    }

    /// Emits an [`EffectSpawnedEvent`].
    #[inline]
    pub fn effect_spawned(&mut self, e: &EffectSpawnedEvent) {
        #[cfg(feature = "trace")]
        if let Some(s) = &mut self.sink {
            s.on_effect_spawned(e);
        }
        #[cfg(not(feature = "trace"))]
        {
            _ = e;
        }
    }

    /// Emits an [`EffectRetiredEvent`].
    #[inline]
    pub fn effect_retired(&mut self, e: &EffectRetiredEvent) {
        #[cfg(feature = "trace")]
        if let Some(s) = &mut self.sink {
            s.on_effect_retired(e);
        }
        #[cfg(not(feature = "trace"))]
        {
            _ = e;
        }
    }

    /// Emits a [`NavHighlightEvent`].
    #[inline]
    pub fn nav_highlight(&mut self, e: &NavHighlightEvent) {
        #[cfg(feature = "trace")]
        if let Some(s) = &mut self.sink {
            s.on_nav_highlight(e);
        }
        #[cfg(not(feature = "trace"))]
        {
            _ = e;
        }
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;
    use crate::media::FallbackReason;

    fn sample_probe() -> ProbeEvent {
        ProbeEvent {
            index: 2,
            outcome: ProbeOutcome::Loadable,
            at: HostTime(40_000),
        }
    }

    #[test]
    fn noop_sink_accepts_every_event() {
        let mut sink = NoopSink;
        sink.on_probe(&sample_probe());
        sink.on_resolution(&ResolutionEvent {
            taken: Resolution::ApplyFallback {
                reason: FallbackReason::AllCandidatesFailed,
            },
            at: HostTime(50_000),
        });
        sink.on_effect_spawned(&EffectSpawnedEvent {
            kind: EffectKind::Confetti,
            count: 100,
            at: HostTime(0),
        });
        sink.on_effect_retired(&EffectRetiredEvent {
            kind: EffectKind::Ripple,
            at: HostTime(600_000),
        });
        sink.on_nav_highlight(&NavHighlightEvent { section: Some(1) });
    }

    #[test]
    fn tracer_none_does_nothing() {
        let mut tracer = Tracer::none();
        tracer.probe(&sample_probe());
        tracer.nav_highlight(&NavHighlightEvent { section: None });
    }

    #[cfg(feature = "trace")]
    #[test]
    fn tracer_dispatches_to_sink() {
        use alloc::vec::Vec;

        struct RecordingSink {
            probes: Vec<u32>,
        }
        impl TraceSink for RecordingSink {
            fn on_probe(&mut self, e: &ProbeEvent) {
                self.probes.push(e.index);
            }
        }

        let mut sink = RecordingSink { probes: Vec::new() };
        let mut tracer = Tracer::new(&mut sink);
        tracer.probe(&sample_probe());
        drop(tracer);
        assert_eq!(sink.probes, &[2]);
    }
}
