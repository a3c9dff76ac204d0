// Copyright 2026 the Festoon Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Gallery hover scaling.

use wasm_bindgen::JsValue;
use web_sys::Document;

use crate::dom;
use crate::listen::EventBinding;

/// Scales gallery items up slightly on pointer enter and back on leave.
///
/// Purely stateless per element; a page without gallery items is left
/// untouched.
pub fn install_gallery_hover(doc: &Document, selector: &str) -> Result<(), JsValue> {
    for item in dom::query_all(doc, selector) {
        let grow = item.clone();
        EventBinding::bind(&item, "mouseenter", move |_| {
            let _ = grow.style().set_property("transform", "scale(1.02)");
        })?
        .forget();

        let shrink = item.clone();
        EventBinding::bind(&item, "mouseleave", move |_| {
            let _ = shrink.style().set_property("transform", "scale(1)");
        })?
        .forget();
    }
    Ok(())
}
