// Copyright 2026 the Festoon Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Pointer and tap ripples.

use alloc::format;
use alloc::rc::Rc;
use core::cell::RefCell;

use kurbo::Point;
use wasm_bindgen::{JsCast as _, JsValue};
use web_sys::{Document, MouseEvent, TouchEvent};

use festoon_core::effect::ripple::{RIPPLE_DURATION, Ripple, TapFilter};
use festoon_core::trace::{EffectKind, EffectSpawnedEvent};

use crate::listen::EventBinding;
use crate::{SharedSink, animate, dom, now, with_tracer};

/// Page-wide ripple wiring: clicks and short taps spawn a ripple at the
/// event point.
#[derive(Debug)]
pub struct RippleLayer;

impl RippleLayer {
    /// Installs the click and touch listeners on the document.
    pub fn install(doc: &Document, sink: SharedSink) -> Result<Self, JsValue> {
        animate::ensure_stylesheet(doc)?;

        let on_click_doc = doc.clone();
        let on_click_sink = Rc::clone(&sink);
        EventBinding::bind(doc, "click", move |event| {
            // Bound to "click", so the event is a MouseEvent.
            let mouse: &MouseEvent = event.unchecked_ref();
            let point = Point::new(f64::from(mouse.client_x()), f64::from(mouse.client_y()));
            let _ = spawn_ripple(&on_click_doc, point, Rc::clone(&on_click_sink));
        })?
        .forget();

        // The tap filter is owned by this installer, shared only between the
        // two touch listeners.
        let filter = Rc::new(RefCell::new(TapFilter::new()));

        let on_start = Rc::clone(&filter);
        EventBinding::bind(doc, "touchstart", move |_| {
            on_start.borrow_mut().touch_started(now());
        })?
        .forget();

        let on_end_doc = doc.clone();
        let on_end_sink = Rc::clone(&sink);
        EventBinding::bind(doc, "touchend", move |event| {
            if !filter.borrow_mut().touch_ended(now()) {
                return;
            }
            let touch_event: &TouchEvent = event.unchecked_ref();
            let Some(touch) = touch_event.changed_touches().get(0) else {
                return;
            };
            let point = Point::new(f64::from(touch.client_x()), f64::from(touch.client_y()));
            let _ = spawn_ripple(&on_end_doc, point, Rc::clone(&on_end_sink));
        })?
        .forget();

        Ok(Self)
    }
}

fn spawn_ripple(doc: &Document, point: Point, sink: SharedSink) -> Result<(), JsValue> {
    let Some(body) = doc.body() else {
        return Ok(());
    };
    let ripple = Ripple::centered_at(point);
    let origin = ripple.origin();

    let el = dom::create(doc, "div")?;
    dom::style(
        &el,
        &format!(
            "position: fixed; left: {left}; top: {top}; \
             width: {size}; height: {size}; border: 3px solid #0066b1; \
             border-radius: 50%; pointer-events: none; z-index: 1000; \
             opacity: 0.8;",
            left = dom::px(origin.x),
            top = dom::px(origin.y),
            size = dom::px(ripple.bounds.width()),
        ),
    )?;
    body.append_child(&el)?;

    with_tracer(&sink, |tracer| {
        tracer.effect_spawned(&EffectSpawnedEvent {
            kind: EffectKind::Ripple,
            count: 1,
            at: now(),
        });
    });

    animate::run_and_remove(
        &el,
        &animate::animation_css("festoon-ripple", RIPPLE_DURATION, "ease-out"),
        sink,
        EffectKind::Ripple,
    )
}
