// Copyright 2026 the Festoon Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Typewriter reveal for the hero name.

use alloc::rc::Rc;
use alloc::string::String;
use core::cell::{Cell, RefCell};

use wasm_bindgen::JsValue;
use web_sys::Document;

use festoon_core::effect::typewriter::{TYPE_TICK, Typewriter};
use festoon_core::trace::{EffectKind, EffectSpawnedEvent};

use crate::timer::{Interval, clear_interval_id};
use crate::{SharedSink, animate, dom, now, with_tracer};

const GLOW_ANIMATION: &str = "festoon-glow 2s ease-in-out infinite alternate";

/// Starts revealing the text of the element matching `selector`, one
/// character per tick; switches the element to the looping glow when done.
///
/// Runs once per page load; a page without the target is left untouched.
pub fn install_typewriter(doc: &Document, selector: &str, sink: SharedSink) -> Result<(), JsValue> {
    let Some(el) = dom::query(doc, selector) else {
        return Ok(());
    };
    animate::ensure_stylesheet(doc)?;

    let text = el.text_content().unwrap_or_default();
    el.set_text_content(Some(""));

    with_tracer(&sink, |tracer| {
        tracer.effect_spawned(&EffectSpawnedEvent {
            kind: EffectKind::Typewriter,
            count: 1,
            at: now(),
        });
    });

    let machine = Rc::new(RefCell::new(Typewriter::new(text)));
    // The callback stops its own interval on completion; it records the id
    // here because the handle does not exist until after construction.
    let interval_id = Rc::new(Cell::new(None::<i32>));

    let tick_machine = Rc::clone(&machine);
    let tick_id = Rc::clone(&interval_id);
    let interval = Interval::every(TYPE_TICK, move || {
        let next = tick_machine.borrow_mut().tick().map(String::from);
        match next {
            Some(prefix) => el.set_text_content(Some(&prefix)),
            None => {
                if let Some(id) = tick_id.get() {
                    clear_interval_id(id);
                }
                let _ = el.style().set_property("animation", GLOW_ANIMATION);
            }
        }
    });
    interval_id.set(Some(interval.id()));
    interval.forget();
    Ok(())
}
