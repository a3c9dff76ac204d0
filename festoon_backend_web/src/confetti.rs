// Copyright 2026 the Festoon Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Confetti burst spawning.

use alloc::format;
use alloc::rc::Rc;
use core::cell::RefCell;

use wasm_bindgen::JsValue;
use web_sys::Document;

use festoon_core::effect::confetti::{ConfettiPlanner, ParticleSpec};
use festoon_core::trace::{EffectKind, EffectSpawnedEvent};

use crate::timer::Timeout;
use crate::{SharedSink, animate, dom, now, with_tracer};

struct RigState {
    planner: ConfettiPlanner,
    document: Document,
    sink: SharedSink,
}

/// Spawns confetti bursts on demand.
///
/// The rig owns its particle planner (and thus the random state), so every
/// burst is independent of any other decoration on the page.
#[derive(Clone)]
pub struct ConfettiRig {
    state: Rc<RefCell<RigState>>,
}

impl ConfettiRig {
    /// Creates a rig for `doc`, seeding the planner with `seed`.
    pub fn new(doc: &Document, seed: u64, sink: SharedSink) -> Result<Self, JsValue> {
        animate::ensure_stylesheet(doc)?;
        Ok(Self {
            state: Rc::new(RefCell::new(RigState {
                planner: ConfettiPlanner::new(seed),
                document: doc.clone(),
                sink,
            })),
        })
    }

    /// Launches one burst: plans the particles, then schedules each spawn at
    /// its launch delay. Particles remove themselves when their fall
    /// animation ends.
    pub fn burst(&self) {
        let (specs, document, sink) = {
            let mut s = self.state.borrow_mut();
            let width = dom::viewport_width();
            (
                s.planner.burst(width),
                s.document.clone(),
                Rc::clone(&s.sink),
            )
        };

        #[expect(
            clippy::cast_possible_truncation,
            reason = "burst size is a small constant"
        )]
        let count = specs.len() as u32;
        with_tracer(&sink, |tracer| {
            tracer.effect_spawned(&EffectSpawnedEvent {
                kind: EffectKind::Confetti,
                count,
                at: now(),
            });
        });

        for spec in specs {
            let doc = document.clone();
            let sink = Rc::clone(&sink);
            Timeout::fire_and_forget(spec.delay, move || {
                let _ = spawn_particle(&doc, &spec, sink);
            });
        }
    }
}

impl core::fmt::Debug for ConfettiRig {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("ConfettiRig").finish_non_exhaustive()
    }
}

fn spawn_particle(doc: &Document, spec: &ParticleSpec, sink: SharedSink) -> Result<(), JsValue> {
    let Some(body) = doc.body() else {
        return Ok(());
    };
    let particle = dom::create(doc, "div")?;
    dom::style(
        &particle,
        &format!(
            "position: fixed; width: {size}; height: {size}; \
             background-color: {color}; left: {x}; top: -10px; \
             border-radius: 50%; pointer-events: none; z-index: 1000; \
             opacity: 0.8;",
            size = dom::px(spec.size),
            color = spec.color,
            x = dom::px(spec.x),
        ),
    )?;
    body.append_child(&particle)?;
    animate::run_and_remove(
        &particle,
        &animate::animation_css(
            "festoon-fall",
            spec.fall,
            "cubic-bezier(0.25, 0.46, 0.45, 0.94)",
        ),
        sink,
        EffectKind::Confetti,
    )
}
