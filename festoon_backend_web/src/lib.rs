// Copyright 2026 the Festoon Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Web backend for festoon.
//!
//! This crate wires the pure models of `festoon_core` to browser APIs:
//!
//! - [`VideoBackground`]: background media resolution against a live
//!   `<video>` element, with the static-gradient fallback
//! - [`ConfettiRig`], [`RippleLayer`], [`show_download_toast`],
//!   [`schedule_celebration`], [`install_typewriter`],
//!   [`install_gallery_hover`], [`ScrollEffects`], [`trigger_download`]:
//!   per-utility installers
//! - [`EventBinding`], [`Timeout`], [`Interval`]: explicit closure-owning
//!   subscription and timer handles
//! - [`ConsoleSink`]: a [`TraceSink`] writing to the browser console
//!
//! Every installer silently no-ops when its target element is absent; DOM
//! API failures surface as `Result<_, JsValue>` for the embedding entry
//! point to propagate.

#![no_std]

extern crate alloc;

mod animate;
mod background;
mod confetti;
mod console;
mod dom;
mod download;
mod gallery;
mod listen;
mod notice;
mod ripple;
mod scrolling;
mod timer;
mod typewriter;

pub use animate::ensure_stylesheet;
pub use background::{FALLBACK_GRADIENT, VideoBackground};
pub use confetti::ConfettiRig;
pub use console::ConsoleSink;
pub use download::trigger_download;
pub use gallery::install_gallery_hover;
pub use listen::EventBinding;
pub use notice::{schedule_celebration, show_download_toast};
pub use ripple::RippleLayer;
pub use scrolling::ScrollEffects;
pub use timer::{Interval, Timeout};
pub use typewriter::install_typewriter;

use alloc::boxed::Box;
use alloc::rc::Rc;
use core::cell::RefCell;

use festoon_core::time::HostTime;
use festoon_core::trace::{TraceSink, Tracer};

/// A trace sink shared between installers and their event closures.
pub type SharedSink = Rc<RefCell<Box<dyn TraceSink>>>;

/// Wraps a sink for sharing across installers.
#[must_use]
pub fn shared_sink(sink: impl TraceSink + 'static) -> SharedSink {
    Rc::new(RefCell::new(Box::new(sink)))
}

/// Returns the current host time from `performance.now()`.
///
/// The returned [`HostTime`] is in microsecond ticks.
#[must_use]
pub fn now() -> HostTime {
    let ms = timer::performance_now();
    #[expect(
        clippy::cast_possible_truncation,
        clippy::cast_sign_loss,
        reason = "performance.now() returns small positive f64; µs fits in u64"
    )]
    let us = (ms * 1000.0) as u64;
    HostTime(us)
}

/// Borrows the shared sink and runs `f` with a [`Tracer`] over it.
pub(crate) fn with_tracer(sink: &SharedSink, f: impl FnOnce(&mut Tracer<'_>)) {
    let mut guard = sink.borrow_mut();
    let mut tracer = Tracer::new(&mut **guard);
    f(&mut tracer);
}
