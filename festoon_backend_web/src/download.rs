// Copyright 2026 the Festoon Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Programmatic wallpaper download with confirmation toast.

use wasm_bindgen::{JsCast as _, JsValue};
use web_sys::{Document, HtmlAnchorElement};

use crate::notice::show_download_toast;
use crate::SharedSink;

/// Triggers a browser download of `src` saved as `filename`, then shows the
/// confirmation toast.
///
/// The download anchor exists only for the duration of the synthetic click.
pub fn trigger_download(
    doc: &Document,
    src: &str,
    filename: &str,
    sink: SharedSink,
) -> Result<(), JsValue> {
    let Some(body) = doc.body() else {
        return Ok(());
    };
    let link: HtmlAnchorElement = doc.create_element("a")?.unchecked_into();
    link.set_href(src);
    link.set_download(filename);
    body.append_child(&link)?;
    link.click();
    link.remove();

    show_download_toast(doc, filename, sink)
}
