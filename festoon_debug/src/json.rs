// Copyright 2026 the Festoon Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! JSON timeline export.
//!
//! [`export`] writes recorded events as a JSON array of timeline objects,
//! one per event, with millisecond timestamps. The output is meant for
//! ad-hoc inspection and for diffing decoration runs, not for any particular
//! viewer.

use std::io::{self, Write};

use serde_json::{Value, json};

use festoon_core::media::Resolution;
use festoon_core::time::HostTime;

use crate::recorder::RecordedEvent;

fn ms(t: HostTime) -> f64 {
    t.ticks() as f64 / 1_000.0
}

/// Exports recorded events as a JSON timeline array.
pub fn export(events: &[RecordedEvent], writer: &mut dyn Write) -> io::Result<()> {
    let mut out: Vec<Value> = Vec::with_capacity(events.len());

    for recorded in events {
        match *recorded {
            RecordedEvent::Probe(e) => {
                out.push(json!({
                    "event": "probe",
                    "ts_ms": ms(e.at),
                    "candidate": e.index,
                    "outcome": format!("{:?}", e.outcome),
                }));
            }
            RecordedEvent::Resolution(e) => match e.taken {
                Resolution::SelectVideo { index } => {
                    out.push(json!({
                        "event": "resolution",
                        "ts_ms": ms(e.at),
                        "taken": "video",
                        "candidate": index,
                    }));
                }
                Resolution::ApplyFallback { reason } => {
                    out.push(json!({
                        "event": "resolution",
                        "ts_ms": ms(e.at),
                        "taken": "fallback",
                        "reason": format!("{reason:?}"),
                    }));
                }
            },
            RecordedEvent::EffectSpawned(e) => {
                out.push(json!({
                    "event": "effect_spawned",
                    "ts_ms": ms(e.at),
                    "kind": format!("{:?}", e.kind),
                    "count": e.count,
                }));
            }
            RecordedEvent::EffectRetired(e) => {
                out.push(json!({
                    "event": "effect_retired",
                    "ts_ms": ms(e.at),
                    "kind": format!("{:?}", e.kind),
                }));
            }
            RecordedEvent::NavHighlight(e) => {
                out.push(json!({
                    "event": "nav_highlight",
                    "section": e.section,
                }));
            }
        }
    }

    serde_json::to_writer_pretty(writer, &Value::Array(out)).map_err(io::Error::other)
}

#[cfg(test)]
mod tests {
    use festoon_core::media::FallbackReason;
    use festoon_core::trace::{
        EffectKind, EffectSpawnedEvent, NavHighlightEvent, ProbeEvent, ProbeOutcome,
        ResolutionEvent,
    };

    use super::*;

    #[test]
    fn export_shapes_every_event() {
        let events = [
            RecordedEvent::Probe(ProbeEvent {
                index: 0,
                outcome: ProbeOutcome::Loadable,
                at: HostTime(12_000),
            }),
            RecordedEvent::Resolution(ResolutionEvent {
                taken: Resolution::SelectVideo { index: 0 },
                at: HostTime(12_500),
            }),
            RecordedEvent::EffectSpawned(EffectSpawnedEvent {
                kind: EffectKind::Toast,
                count: 1,
                at: HostTime(1_000_000),
            }),
            RecordedEvent::NavHighlight(NavHighlightEvent { section: Some(1) }),
        ];

        let mut buf = Vec::new();
        export(&events, &mut buf).expect("export succeeds");
        let value: Value = serde_json::from_slice(&buf).expect("valid json");

        let array = value.as_array().expect("top level is an array");
        assert_eq!(array.len(), 4);
        assert_eq!(array[0]["event"], "probe");
        assert_eq!(array[0]["ts_ms"], 12.0);
        assert_eq!(array[1]["taken"], "video");
        assert_eq!(array[1]["candidate"], 0);
        assert_eq!(array[2]["kind"], "Toast");
        assert_eq!(array[3]["section"], 1);
    }

    #[test]
    fn fallback_resolution_carries_reason() {
        let events = [RecordedEvent::Resolution(ResolutionEvent {
            taken: Resolution::ApplyFallback {
                reason: FallbackReason::AllCandidatesFailed,
            },
            at: HostTime(99_000),
        })];

        let mut buf = Vec::new();
        export(&events, &mut buf).expect("export succeeds");
        let value: Value = serde_json::from_slice(&buf).expect("valid json");
        assert_eq!(value[0]["taken"], "fallback");
        assert_eq!(value[0]["reason"], "AllCandidatesFailed");
    }

    #[test]
    fn empty_recording_exports_an_empty_array() {
        let mut buf = Vec::new();
        export(&[], &mut buf).expect("export succeeds");
        let value: Value = serde_json::from_slice(&buf).expect("valid json");
        assert_eq!(value, Value::Array(Vec::new()));
    }
}
