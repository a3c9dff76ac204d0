// Copyright 2026 the Festoon Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Human-readable trace output.
//!
//! [`PrettyPrintSink`] implements [`TraceSink`] and writes one line per event
//! to a [`Write`](std::io::Write) destination (default: stderr). Timestamps
//! are printed in milliseconds.

use std::io::Write;

use festoon_core::media::Resolution;
use festoon_core::time::HostTime;
use festoon_core::trace::{
    EffectKind, EffectRetiredEvent, EffectSpawnedEvent, NavHighlightEvent, ProbeEvent,
    ProbeOutcome, ResolutionEvent, TraceSink,
};

/// Writes human-readable trace lines to a [`Write`](std::io::Write)
/// destination.
pub struct PrettyPrintSink<W: Write = Box<dyn Write>> {
    writer: W,
}

impl<W: Write> std::fmt::Debug for PrettyPrintSink<W> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PrettyPrintSink").finish_non_exhaustive()
    }
}

impl PrettyPrintSink {
    /// Creates a sink that writes to stderr.
    #[must_use]
    pub fn stderr() -> Self {
        Self {
            writer: Box::new(std::io::stderr()),
        }
    }

    /// Creates a sink that writes to a boxed writer.
    #[must_use]
    pub fn new(writer: Box<dyn Write>) -> Self {
        Self { writer }
    }
}

impl<W: Write> PrettyPrintSink<W> {
    /// Creates a sink that writes to the given destination.
    #[must_use]
    pub fn with_writer(writer: W) -> Self {
        Self { writer }
    }
}

fn ms(t: HostTime) -> f64 {
    t.ticks() as f64 / 1_000.0
}

fn outcome_name(outcome: ProbeOutcome) -> &'static str {
    match outcome {
        ProbeOutcome::Loadable => "loadable",
        ProbeOutcome::Unavailable => "unavailable",
    }
}

fn kind_name(kind: EffectKind) -> &'static str {
    match kind {
        EffectKind::Confetti => "confetti",
        EffectKind::Ripple => "ripple",
        EffectKind::Toast => "toast",
        EffectKind::Celebration => "celebration",
        EffectKind::Typewriter => "typewriter",
    }
}

impl<W: Write> TraceSink for PrettyPrintSink<W> {
    fn on_probe(&mut self, e: &ProbeEvent) {
        let _ = writeln!(
            self.writer,
            "[probe] candidate={} {} at {:.1}ms",
            e.index,
            outcome_name(e.outcome),
            ms(e.at),
        );
    }

    fn on_resolution(&mut self, e: &ResolutionEvent) {
        match e.taken {
            Resolution::SelectVideo { index } => {
                let _ = writeln!(
                    self.writer,
                    "[resolve] video candidate={index} at {:.1}ms",
                    ms(e.at),
                );
            }
            Resolution::ApplyFallback { reason } => {
                let _ = writeln!(
                    self.writer,
                    "[resolve] fallback reason={reason:?} at {:.1}ms",
                    ms(e.at),
                );
            }
        }
    }

    fn on_effect_spawned(&mut self, e: &EffectSpawnedEvent) {
        let _ = writeln!(
            self.writer,
            "[effect:+] {} count={} at {:.1}ms",
            kind_name(e.kind),
            e.count,
            ms(e.at),
        );
    }

    fn on_effect_retired(&mut self, e: &EffectRetiredEvent) {
        let _ = writeln!(
            self.writer,
            "[effect:-] {} at {:.1}ms",
            kind_name(e.kind),
            ms(e.at),
        );
    }

    fn on_nav_highlight(&mut self, e: &NavHighlightEvent) {
        match e.section {
            Some(i) => {
                let _ = writeln!(self.writer, "[nav] section={i}");
            }
            None => {
                let _ = writeln!(self.writer, "[nav] cleared");
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use festoon_core::media::FallbackReason;

    use super::*;

    fn capture(f: impl FnOnce(&mut PrettyPrintSink<Vec<u8>>)) -> String {
        let mut sink = PrettyPrintSink::with_writer(Vec::new());
        f(&mut sink);
        String::from_utf8(sink.writer).expect("trace lines are utf-8")
    }

    #[test]
    fn probe_line_shape() {
        let out = capture(|sink| {
            sink.on_probe(&ProbeEvent {
                index: 1,
                outcome: ProbeOutcome::Unavailable,
                at: HostTime(48_500),
            });
        });
        assert_eq!(out, "[probe] candidate=1 unavailable at 48.5ms\n");
    }

    #[test]
    fn resolution_lines() {
        let out = capture(|sink| {
            sink.on_resolution(&ResolutionEvent {
                taken: Resolution::SelectVideo { index: 2 },
                at: HostTime(60_000),
            });
            sink.on_resolution(&ResolutionEvent {
                taken: Resolution::ApplyFallback {
                    reason: FallbackReason::PlaybackError,
                },
                at: HostTime(61_000),
            });
        });
        assert_eq!(
            out,
            "[resolve] video candidate=2 at 60.0ms\n\
             [resolve] fallback reason=PlaybackError at 61.0ms\n"
        );
    }

    #[test]
    fn effect_and_nav_lines() {
        let out = capture(|sink| {
            sink.on_effect_spawned(&EffectSpawnedEvent {
                kind: EffectKind::Ripple,
                count: 1,
                at: HostTime(1_000),
            });
            sink.on_effect_retired(&EffectRetiredEvent {
                kind: EffectKind::Ripple,
                at: HostTime(601_000),
            });
            sink.on_nav_highlight(&NavHighlightEvent { section: None });
        });
        assert_eq!(
            out,
            "[effect:+] ripple count=1 at 1.0ms\n\
             [effect:-] ripple at 601.0ms\n\
             [nav] cleared\n"
        );
    }
}
