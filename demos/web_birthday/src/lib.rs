// Copyright 2026 the Festoon Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Web demo: a fully festooned birthday page.
//!
//! Wires every festoon decoration to the page regions of `index.html`: the
//! background video with gradient fallback, a load-time confetti burst,
//! click/tap ripples, the typewriter hero name, parallax floaters,
//! scroll-linked navigation highlighting with smooth scrolling and section
//! keys, gallery hover scaling, the timed celebratory message, and the
//! wallpaper download buttons.
//!
//! Build with: `wasm-pack build --target web demos/web_birthday`
//!
//! Then serve `demos/web_birthday/` and open `index.html` in a browser.

#![no_std]
#![cfg_attr(
    not(target_arch = "wasm32"),
    allow(dead_code, reason = "this crate only runs in the browser")
)]

extern crate alloc;

use alloc::rc::Rc;
use alloc::string::String;

use wasm_bindgen::prelude::*;

use festoon_backend_web::{
    ConfettiRig, ConsoleSink, RippleLayer, ScrollEffects, VideoBackground, install_gallery_hover,
    install_typewriter, schedule_celebration, shared_sink, trigger_download,
};

const VIDEO_ID: &str = "bgVideo";
const VIDEO_CONTAINER: &str = ".video-background";
const NAV_LINKS: &str = ".nav-link";
const SECTIONS: &str = "section";
const FLOATING_ITEMS: &str = ".floating-item";
const GALLERY_ITEMS: &str = ".gallery-item";
const HERO_NAME: &str = ".hero-name";

const VIDEO_CANDIDATES: [&str; 4] = [
    "birthday-drive-1.mp4",
    "birthday-drive-2.mp4",
    "birthday-drive-3.mp4",
    "birthday-drive-4.mp4",
];

const CELEBRATION_TEXT: &str = "\u{1f389} Happy Birthday Ansh! \u{1f389}";

const CONFETTI_SEED: u64 = 0x8f2f_3d29_11ab_9121;

/// Entry point — called automatically by `wasm_bindgen(start)`.
#[cfg_attr(all(target_arch = "wasm32", not(test)), wasm_bindgen(start))]
pub fn main() -> Result<(), JsValue> {
    let document = web_sys::window()
        .expect("no global window")
        .document()
        .expect("no document");

    let sink = shared_sink(ConsoleSink);

    let _background = VideoBackground::install(
        &document,
        VIDEO_ID,
        VIDEO_CONTAINER,
        VIDEO_CANDIDATES,
        Rc::clone(&sink),
    )?;

    let confetti = ConfettiRig::new(&document, CONFETTI_SEED, Rc::clone(&sink))?;
    confetti.burst();

    RippleLayer::install(&document, Rc::clone(&sink))?;
    install_typewriter(&document, HERO_NAME, Rc::clone(&sink))?;
    ScrollEffects::install(
        &document,
        SECTIONS,
        NAV_LINKS,
        FLOATING_ITEMS,
        confetti.clone(),
        Rc::clone(&sink),
    )?;
    install_gallery_hover(&document, GALLERY_ITEMS)?;
    schedule_celebration(&document, String::from(CELEBRATION_TEXT), Rc::clone(&sink));

    Ok(())
}

/// Triggers a wallpaper download with a confirmation toast.
///
/// Exported for the page's download buttons.
#[wasm_bindgen]
pub fn download_wallpaper(src: &str, filename: &str) {
    let Some(document) = web_sys::window().and_then(|w| w.document()) else {
        return;
    };
    let sink = shared_sink(ConsoleSink);
    let _ = trigger_download(&document, src, filename, sink);
}
