// Copyright 2026 the Festoon Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Transient notice presentation: download toast and celebratory message.
//!
//! Both notices are driven by a [`FadeTimeline`]: one timer is scheduled per
//! phase boundary, each firing advances the timeline, and each reported
//! transition applies exactly one style mutation. The CSS transition
//! durations match the timeline's `enter`/`exit` stages, so the visual fade
//! and the state machine stay in lockstep.

use alloc::boxed::Box;
use alloc::rc::Rc;
use alloc::string::String;
use core::cell::RefCell;

use wasm_bindgen::JsValue;
use web_sys::{Document, HtmlElement};

use festoon_core::effect::notice::{CELEBRATION_APPEAR_DELAY, CelebrationMessage, DownloadToast};
use festoon_core::effect::timeline::{FadePhase, FadeTimeline};
use festoon_core::trace::{EffectKind, EffectRetiredEvent, EffectSpawnedEvent};

use crate::timer::Timeout;
use crate::{SharedSink, dom, now, with_tracer};

const TOAST_STYLE: &str = "\
position: fixed; top: 20px; right: 20px; \
background: rgba(0, 102, 177, 0.9); color: white; \
padding: 15px 20px; border-radius: 10px; font-weight: 600; \
z-index: 10000; transform: translateX(110%); \
transition: transform 300ms ease; backdrop-filter: blur(10px);";

const CELEBRATION_STYLE: &str = "\
position: fixed; top: 50%; left: 50%; transform: translate(-50%, -50%); \
background: rgba(0, 102, 177, 0.95); color: white; \
padding: 25px 35px; border-radius: 15px; font-size: 1.3rem; \
font-weight: bold; z-index: 2000; opacity: 0; \
transition: opacity 500ms ease; backdrop-filter: blur(10px); \
box-shadow: 0 10px 30px rgba(0, 0, 0, 0.3);";

struct NoticeDriver {
    el: HtmlElement,
    timeline: RefCell<FadeTimeline>,
    apply: Box<dyn Fn(&HtmlElement, FadePhase)>,
    sink: SharedSink,
    kind: EffectKind,
}

/// Schedules one timer at the current phase's end boundary.
fn schedule(driver: Rc<NoticeDriver>) {
    let Some(boundary) = driver.timeline.borrow().next_boundary() else {
        return;
    };
    let delay = boundary.saturating_duration_since(now());
    let next = Rc::clone(&driver);
    Timeout::fire_and_forget(delay, move || step(&next));
}

fn step(driver: &Rc<NoticeDriver>) {
    let changed = driver.timeline.borrow_mut().advance(now());
    if let Some(phase) = changed {
        if phase == FadePhase::Removed {
            driver.el.remove();
            with_tracer(&driver.sink, |tracer| {
                tracer.effect_retired(&EffectRetiredEvent {
                    kind: driver.kind,
                    at: now(),
                });
            });
            return;
        }
        (driver.apply)(&driver.el, phase);
    }
    // A timer can fire a hair before its boundary; re-arming from the (maybe
    // unchanged) current phase converges either way.
    schedule(Rc::clone(driver));
}

fn present(
    doc: &Document,
    text: &str,
    base_style: &str,
    timeline: FadeTimeline,
    apply: impl Fn(&HtmlElement, FadePhase) + 'static,
    sink: SharedSink,
    kind: EffectKind,
) -> Result<(), JsValue> {
    let Some(body) = doc.body() else {
        return Ok(());
    };
    let el = dom::create(doc, "div")?;
    dom::style(&el, base_style)?;
    el.set_text_content(Some(text));
    body.append_child(&el)?;

    with_tracer(&sink, |tracer| {
        tracer.effect_spawned(&EffectSpawnedEvent {
            kind,
            count: 1,
            at: now(),
        });
    });

    schedule(Rc::new(NoticeDriver {
        el,
        timeline: RefCell::new(timeline),
        apply: Box::new(apply),
        sink,
        kind,
    }));
    Ok(())
}

/// Shows the download confirmation toast for `filename` (~3.3 s on screen).
pub fn show_download_toast(
    doc: &Document,
    filename: &str,
    sink: SharedSink,
) -> Result<(), JsValue> {
    let toast = DownloadToast::new(filename, now());
    present(
        doc,
        toast.text(),
        TOAST_STYLE,
        toast.timeline().clone(),
        |el, phase| {
            let slid = match phase {
                FadePhase::FadingIn | FadePhase::Visible => "translateX(0)",
                _ => "translateX(110%)",
            };
            let _ = el.style().set_property("transform", slid);
        },
        sink,
        EffectKind::Toast,
    )
}

/// Schedules the celebratory message to appear 2 s after the call, fade in,
/// hold, and remove itself.
pub fn schedule_celebration(doc: &Document, text: String, sink: SharedSink) {
    let doc = doc.clone();
    Timeout::fire_and_forget(CELEBRATION_APPEAR_DELAY, move || {
        let message = CelebrationMessage::new(text, now());
        let _ = present(
            &doc,
            message.text(),
            CELEBRATION_STYLE,
            message.timeline().clone(),
            |el, phase| {
                let opacity = match phase {
                    FadePhase::FadingIn | FadePhase::Visible => "1",
                    _ => "0",
                };
                let _ = el.style().set_property("opacity", opacity);
            },
            sink,
            EffectKind::Celebration,
        );
    });
}
