// Copyright 2026 the Festoon Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Small DOM lookup and creation helpers.
//!
//! Lookups return `Option`/`Vec` so installers can silently no-op on pages
//! that lack their target regions.

use alloc::format;
use alloc::string::String;
use alloc::vec::Vec;

use wasm_bindgen::{JsCast as _, JsValue};
use web_sys::{Document, HtmlElement};

/// Returns the first element matching `selector`, if any.
pub(crate) fn query(doc: &Document, selector: &str) -> Option<HtmlElement> {
    doc.query_selector(selector)
        .ok()
        .flatten()
        .and_then(|el| el.dyn_into::<HtmlElement>().ok())
}

/// Returns every element matching `selector`, in document order.
pub(crate) fn query_all(doc: &Document, selector: &str) -> Vec<HtmlElement> {
    let mut out = Vec::new();
    let Ok(list) = doc.query_selector_all(selector) else {
        return out;
    };
    for i in 0..list.length() {
        if let Some(node) = list.get(i)
            && let Ok(el) = node.dyn_into::<HtmlElement>()
        {
            out.push(el);
        }
    }
    out
}

/// Creates an element of the given tag.
pub(crate) fn create(doc: &Document, tag: &str) -> Result<HtmlElement, JsValue> {
    Ok(doc.create_element(tag)?.unchecked_into())
}

/// Applies a whole inline style string.
pub(crate) fn style(el: &web_sys::Element, css: &str) -> Result<(), JsValue> {
    el.set_attribute("style", css)
}

/// Formats a CSS pixel length.
pub(crate) fn px(v: f64) -> String {
    format!("{v}px")
}

/// Returns the viewport width in CSS pixels, or `0.0` outside a browser.
pub(crate) fn viewport_width() -> f64 {
    web_sys::window()
        .and_then(|w| w.inner_width().ok())
        .and_then(|v| v.as_f64())
        .unwrap_or(0.0)
}

/// Returns the current vertical scroll position.
pub(crate) fn scroll_y() -> f64 {
    web_sys::window()
        .and_then(|w| w.page_y_offset().ok())
        .unwrap_or(0.0)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn px_formats_plain_lengths() {
        assert_eq!(px(75.0), "75px");
        assert_eq!(px(12.5), "12.5px");
    }
}
