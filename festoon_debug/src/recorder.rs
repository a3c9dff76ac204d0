// Copyright 2026 the Festoon Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! In-memory event recording.
//!
//! [`RecorderSink`] implements [`TraceSink`] and stores every event as a
//! typed [`RecordedEvent`], in arrival order. Festoon's event set is small
//! and `Copy`, so there is no need for a packed encoding — recordings are
//! replayed by iterating the slice.

use festoon_core::trace::{
    EffectRetiredEvent, EffectSpawnedEvent, NavHighlightEvent, ProbeEvent, ResolutionEvent,
    TraceSink,
};

/// A recorded trace event.
#[derive(Clone, Copy, Debug)]
pub enum RecordedEvent {
    /// A [`ProbeEvent`].
    Probe(ProbeEvent),
    /// A [`ResolutionEvent`].
    Resolution(ResolutionEvent),
    /// An [`EffectSpawnedEvent`].
    EffectSpawned(EffectSpawnedEvent),
    /// An [`EffectRetiredEvent`].
    EffectRetired(EffectRetiredEvent),
    /// A [`NavHighlightEvent`].
    NavHighlight(NavHighlightEvent),
}

/// A [`TraceSink`] that records every event.
#[derive(Debug, Default)]
pub struct RecorderSink {
    events: Vec<RecordedEvent>,
}

impl RecorderSink {
    /// Creates an empty recorder.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the recorded events in arrival order.
    #[must_use]
    pub fn events(&self) -> &[RecordedEvent] {
        &self.events
    }

    /// Consumes the recorder and returns the events.
    #[must_use]
    pub fn into_events(self) -> Vec<RecordedEvent> {
        self.events
    }
}

impl TraceSink for RecorderSink {
    fn on_probe(&mut self, e: &ProbeEvent) {
        self.events.push(RecordedEvent::Probe(*e));
    }

    fn on_resolution(&mut self, e: &ResolutionEvent) {
        self.events.push(RecordedEvent::Resolution(*e));
    }

    fn on_effect_spawned(&mut self, e: &EffectSpawnedEvent) {
        self.events.push(RecordedEvent::EffectSpawned(*e));
    }

    fn on_effect_retired(&mut self, e: &EffectRetiredEvent) {
        self.events.push(RecordedEvent::EffectRetired(*e));
    }

    fn on_nav_highlight(&mut self, e: &NavHighlightEvent) {
        self.events.push(RecordedEvent::NavHighlight(*e));
    }
}

#[cfg(test)]
mod tests {
    use festoon_core::media::{FallbackReason, Resolution};
    use festoon_core::time::HostTime;
    use festoon_core::trace::{EffectKind, ProbeOutcome};

    use super::*;

    #[test]
    fn records_every_event_kind_in_order() {
        let mut rec = RecorderSink::new();
        rec.on_probe(&ProbeEvent {
            index: 0,
            outcome: ProbeOutcome::Unavailable,
            at: HostTime(10_000),
        });
        rec.on_resolution(&ResolutionEvent {
            taken: Resolution::ApplyFallback {
                reason: FallbackReason::AllCandidatesFailed,
            },
            at: HostTime(20_000),
        });
        rec.on_effect_spawned(&EffectSpawnedEvent {
            kind: EffectKind::Confetti,
            count: 100,
            at: HostTime(30_000),
        });
        rec.on_effect_retired(&EffectRetiredEvent {
            kind: EffectKind::Confetti,
            at: HostTime(3_030_000),
        });
        rec.on_nav_highlight(&NavHighlightEvent { section: Some(2) });

        let events = rec.events();
        assert_eq!(events.len(), 5);
        assert!(matches!(events[0], RecordedEvent::Probe(_)));
        assert!(matches!(events[1], RecordedEvent::Resolution(_)));
        assert!(matches!(events[2], RecordedEvent::EffectSpawned(_)));
        assert!(matches!(events[3], RecordedEvent::EffectRetired(_)));
        assert!(matches!(events[4], RecordedEvent::NavHighlight(_)));
    }

    #[test]
    fn recorded_fields_survive() {
        let mut rec = RecorderSink::new();
        rec.on_probe(&ProbeEvent {
            index: 3,
            outcome: ProbeOutcome::Loadable,
            at: HostTime(42_000),
        });

        match rec.into_events().as_slice() {
            [RecordedEvent::Probe(e)] => {
                assert_eq!(e.index, 3);
                assert_eq!(e.outcome, ProbeOutcome::Loadable);
                assert_eq!(e.at, HostTime(42_000));
            }
            other => panic!("expected one probe event, got {other:?}"),
        }
    }
}
