// Copyright 2026 the Festoon Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Scroll-linked and keyboard decoration: navigation highlighting, parallax
//! drift, smooth in-page scrolling, and section keys.
//!
//! One scroll subscription owns a [`ThrottleGate`]; a burst of scroll events
//! schedules at most one follow-up per [`SCROLL_COALESCE`] window, and that
//! follow-up re-measures the sections, moves the nav highlight, and updates
//! the parallax field. Section geometry is measured fresh on every pass so
//! layout changes (images loading, viewport resizes) never leave stale
//! offsets behind.

use alloc::format;
use alloc::rc::Rc;
use alloc::string::String;
use alloc::vec::Vec;
use core::cell::RefCell;

use wasm_bindgen::{JsCast as _, JsValue};
use web_sys::{
    Document, HtmlElement, KeyboardEvent, ScrollBehavior, ScrollIntoViewOptions,
    ScrollLogicalPosition,
};

use festoon_core::scroll::parallax::offset_for;
use festoon_core::scroll::sections::{SectionSpan, SectionTrack};
use festoon_core::scroll::throttle::{SCROLL_COALESCE, ThrottleGate};
use festoon_core::trace::NavHighlightEvent;

use crate::confetti::ConfettiRig;
use crate::listen::EventBinding;
use crate::timer::Timeout;
use crate::{SharedSink, dom, with_tracer};

struct ScrollState {
    document: Document,
    gate: ThrottleGate,
    /// Last highlight reported to the tracer; `None` until the first pass.
    last_active: Option<Option<u32>>,
    sink: SharedSink,
    section_selector: String,
    nav_selector: String,
    floating_selector: String,
}

/// Scroll and keyboard wiring for the whole page.
pub struct ScrollEffects {
    state: Rc<RefCell<ScrollState>>,
}

impl ScrollEffects {
    /// Installs the scroll listener, smooth-scroll click handlers, and the
    /// keyboard handler (arrow-key section movement, Enter/Space confetti).
    pub fn install(
        doc: &Document,
        section_selector: &str,
        nav_selector: &str,
        floating_selector: &str,
        confetti: ConfettiRig,
        sink: SharedSink,
    ) -> Result<Self, JsValue> {
        let state = Rc::new(RefCell::new(ScrollState {
            document: doc.clone(),
            gate: ThrottleGate::new(),
            last_active: None,
            sink,
            section_selector: String::from(section_selector),
            nav_selector: String::from(nav_selector),
            floating_selector: String::from(floating_selector),
        }));

        if let Some(window) = web_sys::window() {
            let on_scroll = Rc::clone(&state);
            EventBinding::bind(&window, "scroll", move |_| {
                if on_scroll.borrow_mut().gate.try_arm() {
                    let pass = Rc::clone(&on_scroll);
                    Timeout::fire_and_forget(SCROLL_COALESCE, move || run_scroll_pass(&pass));
                }
            })?
            .forget();
        }

        install_smooth_anchors(doc)?;
        install_keyboard(doc, Rc::clone(&state), confetti)?;

        Ok(Self { state })
    }
}

impl core::fmt::Debug for ScrollEffects {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("ScrollEffects")
            .field("gate_armed", &self.state.borrow().gate.is_armed())
            .finish_non_exhaustive()
    }
}

/// The coalesced follow-up: highlight the active nav link and drift the
/// parallax field.
fn run_scroll_pass(state: &Rc<RefCell<ScrollState>>) {
    let (document, section_sel, nav_sel, float_sel) = {
        let mut s = state.borrow_mut();
        s.gate.release();
        (
            s.document.clone(),
            s.section_selector.clone(),
            s.nav_selector.clone(),
            s.floating_selector.clone(),
        )
    };

    let scroll_y = dom::scroll_y();
    let (track, _sections, ids) = measure_sections(&document, &section_sel);
    let active = track.active_section(scroll_y);

    // Exactly one (or zero) link carries the class after every pass, so
    // repeating a pass with no scroll change is idempotent.
    let active_href = active
        .and_then(|i| ids.get(i).cloned().flatten())
        .map(|id| format!("#{id}"));
    for link in dom::query_all(&document, &nav_sel) {
        let _ = link.class_list().remove_1("active");
        if let (Some(href), Some(target)) = (link.get_attribute("href"), active_href.as_ref())
            && href == *target
        {
            let _ = link.class_list().add_1("active");
        }
    }

    #[expect(
        clippy::cast_possible_truncation,
        reason = "pages have a handful of sections"
    )]
    let active_index = active.map(|i| i as u32);
    let changed_to = {
        let mut s = state.borrow_mut();
        if s.last_active == Some(active_index) {
            None
        } else {
            s.last_active = Some(active_index);
            Some(Rc::clone(&s.sink))
        }
    };
    if let Some(sink) = changed_to {
        with_tracer(&sink, |tracer| {
            tracer.nav_highlight(&NavHighlightEvent {
                section: active_index,
            });
        });
    }

    for (i, el) in dom::query_all(&document, &float_sel).iter().enumerate() {
        let _ = el.style().set_property(
            "transform",
            &format!("translateY({}px)", offset_for(scroll_y, i)),
        );
    }
}

/// Reads the live section geometry in document order.
fn measure_sections(
    doc: &Document,
    selector: &str,
) -> (SectionTrack, Vec<HtmlElement>, Vec<Option<String>>) {
    let els = dom::query_all(doc, selector);
    let spans = els
        .iter()
        .map(|el| SectionSpan {
            top: f64::from(el.offset_top()),
            height: f64::from(el.client_height()),
        })
        .collect();
    let ids = els.iter().map(|el| el.get_attribute("id")).collect();
    (SectionTrack::new(spans), els, ids)
}

/// Intercepts clicks on same-page anchors (navigation links included) and
/// scrolls smoothly instead of jumping.
fn install_smooth_anchors(doc: &Document) -> Result<(), JsValue> {
    for anchor in dom::query_all(doc, "a[href^='#']") {
        let target_doc = doc.clone();
        let link = anchor.clone();
        EventBinding::bind(&anchor, "click", move |event| {
            event.prevent_default();
            let Some(href) = link.get_attribute("href") else {
                return;
            };
            // A bare "#" points nowhere.
            if href.len() <= 1 {
                return;
            }
            if let Some(target) = dom::query(&target_doc, &href) {
                smooth_scroll_to(&target);
            }
        })?
        .forget();
    }
    Ok(())
}

fn install_keyboard(
    doc: &Document,
    state: Rc<RefCell<ScrollState>>,
    confetti: ConfettiRig,
) -> Result<(), JsValue> {
    let key_doc = doc.clone();
    EventBinding::bind(doc, "keydown", move |event| {
        // Bound to "keydown", so the event is a KeyboardEvent.
        let key_event: &KeyboardEvent = event.unchecked_ref();
        let key = key_event.key();
        match key.as_str() {
            "Enter" | " " => confetti.burst(),
            "ArrowDown" | "ArrowUp" => {
                event.prevent_default();
                let section_sel = state.borrow().section_selector.clone();
                let (track, sections, _ids) = measure_sections(&key_doc, &section_sel);
                let Some(current) = track.section_at_reference(dom::scroll_y()) else {
                    return;
                };
                let dest = if key == "ArrowDown" {
                    track.next(current)
                } else {
                    track.prev(current)
                };
                if let Some(dest) = dest
                    && let Some(section) = sections.get(dest)
                {
                    smooth_scroll_to(section);
                }
            }
            _ => {}
        }
    })?
    .forget();
    Ok(())
}

fn smooth_scroll_to(el: &HtmlElement) {
    let opts = ScrollIntoViewOptions::new();
    opts.set_behavior(ScrollBehavior::Smooth);
    opts.set_block(ScrollLogicalPosition::Start);
    el.scroll_into_view_with_scroll_into_view_options(&opts);
}
