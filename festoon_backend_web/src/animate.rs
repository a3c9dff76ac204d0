// Copyright 2026 the Festoon Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! CSS keyframe animation for self-removing effect elements.
//!
//! Ephemeral effects animate with CSS keyframes injected once per document;
//! [`run_and_remove`] starts the animation and arms a one-shot
//! `animationend` listener that removes the element and reports the
//! retirement.

use alloc::format;
use alloc::string::String;

use wasm_bindgen::JsValue;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::prelude::*;
use web_sys::{Document, HtmlElement};

use festoon_core::trace::{EffectKind, EffectRetiredEvent};

use crate::{SharedSink, now, with_tracer};

/// Id of the injected stylesheet; used to keep injection idempotent.
const STYLESHEET_ID: &str = "festoon-keyframes";

/// Keyframes for every festoon effect animation.
///
/// `festoon-fall` drops a particle past the bottom of the viewport with two
/// full rotations; `festoon-ripple` scales a ring out while fading;
/// `festoon-glow` is the typewriter's terminal looping glow.
const KEYFRAMES_CSS: &str = "\
@keyframes festoon-fall {\
  from { transform: translateY(0) rotate(0deg); opacity: 0.8; }\
  to { transform: translateY(110vh) rotate(720deg); opacity: 0; }\
}\
@keyframes festoon-ripple {\
  from { transform: scale(0); opacity: 0.8; }\
  to { transform: scale(2); opacity: 0; }\
}\
@keyframes festoon-glow {\
  from { text-shadow: 0 0 12px rgba(255, 215, 0, 0.55); }\
  to { text-shadow: 0 0 28px rgba(255, 215, 0, 0.95); }\
}";

/// Injects festoon's keyframes into the document once.
///
/// Safe to call from every installer; only the first call mutates the
/// document.
pub fn ensure_stylesheet(doc: &Document) -> Result<(), JsValue> {
    if doc.get_element_by_id(STYLESHEET_ID).is_some() {
        return Ok(());
    }
    let style = doc.create_element("style")?;
    style.set_id(STYLESHEET_ID);
    style.set_text_content(Some(KEYFRAMES_CSS));
    if let Some(head) = doc.head() {
        head.append_child(&style)?;
    } else if let Some(body) = doc.body() {
        body.append_child(&style)?;
    }
    Ok(())
}

/// Starts `animation` on `el` and removes the element when it finishes.
///
/// The `animationend` listener is a single-invocation closure whose Rust
/// memory is freed after it fires, so bursts of short-lived elements do not
/// accumulate leaks.
pub(crate) fn run_and_remove(
    el: &HtmlElement,
    animation: &str,
    sink: SharedSink,
    kind: EffectKind,
) -> Result<(), JsValue> {
    el.style().set_property("animation", animation)?;

    let doomed = el.clone();
    let on_end = Closure::once_into_js(move || {
        doomed.remove();
        with_tracer(&sink, |tracer| {
            tracer.effect_retired(&EffectRetiredEvent { kind, at: now() });
        });
    });
    el.add_event_listener_with_callback("animationend", on_end.unchecked_ref())?;
    Ok(())
}

/// Formats an `animation` shorthand for a festoon keyframe animation.
pub(crate) fn animation_css(
    name: &str,
    duration: festoon_core::time::Duration,
    easing: &str,
) -> String {
    format!("{name} {}ms {easing} forwards", duration.as_millis_f64())
}

#[cfg(test)]
mod tests {
    use super::*;
    use festoon_core::time::Duration;

    #[test]
    fn animation_shorthand_shape() {
        let css = animation_css("festoon-ripple", Duration::from_millis(600), "ease-out");
        assert_eq!(css, "festoon-ripple 600ms ease-out forwards");
    }

    #[test]
    fn keyframes_cover_every_effect() {
        for name in ["festoon-fall", "festoon-ripple", "festoon-glow"] {
            assert!(KEYFRAMES_CSS.contains(name), "missing keyframes for {name}");
        }
    }
}
