// Copyright 2026 the Festoon Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Background media resolution against the live page.
//!
//! [`VideoBackground`] drives a [`MediaResolver`] with real probe results:
//! each candidate is loaded by a detached, muted `<video preload="metadata">`
//! element whose `canplaythrough`/`error` events feed the resolver. The
//! first committed directive either assigns the live element's source or
//! applies the static gradient fallback to the background container and the
//! page body.
//!
//! Probing is concurrent and the resolver is monotonic, so a late success
//! after a commitment changes nothing. The live element's own `error`
//! listener stays armed after commitment and demotes to the fallback if
//! playback breaks.

use alloc::rc::Rc;
use alloc::string::String;
use alloc::vec::Vec;
use core::cell::RefCell;

use wasm_bindgen::{JsCast as _, JsValue};
use web_sys::{Document, HtmlElement, HtmlVideoElement};

use festoon_core::media::{MediaResolver, Resolution, ResolveState};
use festoon_core::trace::{ProbeEvent, ProbeOutcome, ResolutionEvent};

use crate::listen::EventBinding;
use crate::{SharedSink, dom, now, with_tracer};

/// Static gradient applied when no video candidate is usable.
pub const FALLBACK_GRADIENT: &str =
    "linear-gradient(135deg, #1a1a1a 0%, #2d2d2d 50%, #1a1a1a 100%)";

struct BackgroundState {
    resolver: MediaResolver,
    video: Option<HtmlVideoElement>,
    container: Option<HtmlElement>,
    document: Document,
    sink: SharedSink,
}

/// One-shot background treatment installer.
#[derive(Clone)]
pub struct VideoBackground {
    state: Rc<RefCell<BackgroundState>>,
}

impl VideoBackground {
    /// Resolves the page background.
    ///
    /// Looks up the live video element by `video_id` and the background
    /// container by `container_selector`. A missing video element skips
    /// probing and applies the fallback immediately; a missing container
    /// only narrows the fallback to the page body.
    pub fn install<I, S>(
        doc: &Document,
        video_id: &str,
        container_selector: &str,
        candidates: I,
        sink: SharedSink,
    ) -> Result<Self, JsValue>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let video = doc
            .get_element_by_id(video_id)
            .and_then(|el| el.dyn_into::<HtmlVideoElement>().ok());
        let container = dom::query(doc, container_selector);

        let state = Rc::new(RefCell::new(BackgroundState {
            resolver: MediaResolver::new(candidates),
            video,
            container,
            document: doc.clone(),
            sink,
        }));
        let this = Self { state };
        this.resolve()?;
        Ok(this)
    }

    /// Returns the resolver's current state.
    #[must_use]
    pub fn state(&self) -> ResolveState {
        self.state.borrow().resolver.state()
    }

    fn resolve(&self) -> Result<(), JsValue> {
        let (directive, video) = {
            let mut s = self.state.borrow_mut();
            if s.video.is_none() {
                (s.resolver.target_missing(), None)
            } else {
                (s.resolver.begin_probing(), s.video.clone())
            }
        };
        if let Some(directive) = directive {
            apply(&self.state, directive);
            return Ok(());
        }
        let Some(video) = video else {
            return Ok(());
        };

        // Live-element listeners outlive probing: a playback error after
        // commitment still demotes to the fallback.
        let on_error = Rc::clone(&self.state);
        EventBinding::bind(&video, "error", move |_| {
            let directive = on_error.borrow_mut().resolver.playback_error();
            if let Some(directive) = directive {
                apply(&on_error, directive);
            }
        })?
        .forget();

        let shown = video.clone();
        EventBinding::bind(&video, "loadeddata", move |_| {
            let _ = shown.style().set_property("display", "block");
        })?
        .forget();

        let (document, candidates) = {
            let s = self.state.borrow();
            (s.document.clone(), s.resolver.candidates().to_vec())
        };
        for (index, src) in candidates.iter().enumerate() {
            #[expect(
                clippy::cast_possible_truncation,
                reason = "candidate lists are a handful of entries"
            )]
            spawn_probe(&document, index as u32, src, Rc::clone(&self.state))?;
        }
        Ok(())
    }
}

impl core::fmt::Debug for VideoBackground {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("VideoBackground")
            .field("state", &self.state.borrow().resolver.state())
            .finish_non_exhaustive()
    }
}

/// Loads `src` in a detached probe element and reports the outcome.
fn spawn_probe(
    doc: &Document,
    index: u32,
    src: &str,
    state: Rc<RefCell<BackgroundState>>,
) -> Result<(), JsValue> {
    let probe: HtmlVideoElement = doc.create_element("video")?.unchecked_into();
    probe.set_preload("metadata");
    probe.set_muted(true);

    let on_ready = Rc::clone(&state);
    EventBinding::bind(&probe, "canplaythrough", move |_| {
        report(&on_ready, index, ProbeOutcome::Loadable);
    })?
    .forget();

    let on_error = Rc::clone(&state);
    EventBinding::bind(&probe, "error", move |_| {
        report(&on_error, index, ProbeOutcome::Unavailable);
    })?
    .forget();

    // Assign the source last so no event can fire before both listeners are
    // armed.
    probe.set_src(src);
    Ok(())
}

fn report(state: &Rc<RefCell<BackgroundState>>, index: u32, outcome: ProbeOutcome) {
    let sink = Rc::clone(&state.borrow().sink);
    with_tracer(&sink, |tracer| {
        tracer.probe(&ProbeEvent {
            index,
            outcome,
            at: now(),
        });
    });

    let directive = {
        let mut s = state.borrow_mut();
        match outcome {
            ProbeOutcome::Loadable => s.resolver.probe_succeeded(index),
            ProbeOutcome::Unavailable => s.resolver.probe_failed(index),
        }
    };
    if let Some(directive) = directive {
        apply(state, directive);
    }
}

/// Applies a committed [`Resolution`] to the page. Style failures degrade to
/// no-ops; by this point the directive itself is already the degraded path.
fn apply(state: &Rc<RefCell<BackgroundState>>, directive: Resolution) {
    let (video, container, document, sink) = {
        let s = state.borrow();
        (
            s.video.clone(),
            s.container.clone(),
            s.document.clone(),
            Rc::clone(&s.sink),
        )
    };

    match directive {
        Resolution::SelectVideo { index } => {
            let src = {
                let s = state.borrow();
                s.resolver.candidates().get(index as usize).cloned()
            };
            if let (Some(video), Some(src)) = (video, src) {
                video.set_src(&src);
            }
        }
        Resolution::ApplyFallback { .. } => {
            if let Some(container) = container {
                let _ = container.style().set_property("background", FALLBACK_GRADIENT);
            }
            if let Some(body) = document.body() {
                let _ = body.style().set_property("background", FALLBACK_GRADIENT);
            }
        }
    }

    with_tracer(&sink, |tracer| {
        tracer.resolution(&ResolutionEvent {
            taken: directive,
            at: now(),
        });
    });
}
