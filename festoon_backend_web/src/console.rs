// Copyright 2026 the Festoon Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Browser-console trace sink.

use alloc::format;
use alloc::string::String;

use wasm_bindgen::JsValue;

use festoon_core::media::Resolution;
use festoon_core::trace::{
    EffectRetiredEvent, EffectSpawnedEvent, NavHighlightEvent, ProbeEvent, ProbeOutcome,
    ResolutionEvent, TraceSink,
};

/// A [`TraceSink`] that writes one console line per event.
#[derive(Clone, Copy, Debug, Default)]
pub struct ConsoleSink;

fn log(msg: &str) {
    web_sys::console::log_1(&JsValue::from_str(msg));
}

fn outcome_label(outcome: ProbeOutcome) -> &'static str {
    match outcome {
        ProbeOutcome::Loadable => "loadable",
        ProbeOutcome::Unavailable => "unavailable",
    }
}

impl TraceSink for ConsoleSink {
    fn on_probe(&mut self, e: &ProbeEvent) {
        log(&format!(
            "festoon: background candidate {} {}",
            e.index,
            outcome_label(e.outcome)
        ));
    }

    fn on_resolution(&mut self, e: &ResolutionEvent) {
        let msg: String = match e.taken {
            Resolution::SelectVideo { index } => {
                format!("festoon: background video committed (candidate {index})")
            }
            Resolution::ApplyFallback { reason } => {
                format!("festoon: fallback background applied ({reason:?})")
            }
        };
        log(&msg);
    }

    fn on_effect_spawned(&mut self, e: &EffectSpawnedEvent) {
        log(&format!(
            "festoon: {:?} spawned (count {})",
            e.kind, e.count
        ));
    }

    fn on_effect_retired(&mut self, e: &EffectRetiredEvent) {
        log(&format!("festoon: {:?} retired", e.kind));
    }

    fn on_nav_highlight(&mut self, e: &NavHighlightEvent) {
        match e.section {
            Some(i) => log(&format!("festoon: nav highlight moved to section {i}")),
            None => log("festoon: nav highlight cleared"),
        }
    }
}
