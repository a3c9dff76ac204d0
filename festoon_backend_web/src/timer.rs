// Copyright 2026 the Festoon Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Timer handles over the browser's `setTimeout`/`setInterval`.
//!
//! [`Timeout`] and [`Interval`] own the JS closure they register, cancel on
//! drop, and offer `forget()` for page-lifetime schedules.
//! [`Timeout::fire_and_forget`] is the leak-free one-shot used for
//! effect-internal scheduling: the Rust closure is deallocated after its
//! single invocation.

use alloc::boxed::Box;

use wasm_bindgen::closure::Closure;
use wasm_bindgen::prelude::*;

use festoon_core::time::Duration;

// Direct global bindings instead of `web_sys::Window` methods — avoids
// fetching (and unwrapping) the Window object on every schedule.
#[wasm_bindgen]
extern "C" {
    #[wasm_bindgen(js_namespace = performance, js_name = "now")]
    pub(crate) fn performance_now() -> f64;

    #[wasm_bindgen(js_name = "setTimeout")]
    fn set_timeout(callback: &JsValue, delay_ms: i32) -> i32;

    #[wasm_bindgen(js_name = "clearTimeout")]
    fn clear_timeout(id: i32);

    #[wasm_bindgen(js_name = "setInterval")]
    fn set_interval(callback: &JsValue, period_ms: i32) -> i32;

    #[wasm_bindgen(js_name = "clearInterval")]
    fn clear_interval(id: i32);
}

#[expect(
    clippy::cast_possible_truncation,
    reason = "effect delays are a few seconds at most; ms fits in i32"
)]
fn delay_ms(d: Duration) -> i32 {
    // Round up so a timer never fires before the tick-precise boundary it
    // was scheduled for.
    d.ticks().div_ceil(1_000) as i32
}

/// Cancels an interval by raw id; for drivers that stop themselves from
/// inside their own callback (where the handle cannot be dropped).
pub(crate) fn clear_interval_id(id: i32) {
    clear_interval(id);
}

/// An owned one-shot timer.
pub struct Timeout {
    id: i32,
    closure: Option<Closure<dyn FnMut()>>,
}

impl Timeout {
    /// Schedules `f` to run once after `delay`.
    pub fn once(delay: Duration, f: impl FnOnce() + 'static) -> Self {
        let closure: Closure<dyn FnMut()> = Closure::once(f);
        let id = set_timeout(closure.as_ref(), delay_ms(delay));
        Self {
            id,
            closure: Some(closure),
        }
    }

    /// Schedules `f` to run once after `delay`, without a handle.
    ///
    /// The closure's Rust memory is deallocated after the single invocation,
    /// so this does not accumulate leaks the way `forget()` would.
    pub fn fire_and_forget(delay: Duration, f: impl FnOnce() + 'static) {
        let callback = Closure::once_into_js(f);
        let _ = set_timeout(&callback, delay_ms(delay));
    }

    /// Leaks the closure, letting the timeout fire after the handle is gone.
    pub fn forget(mut self) {
        if let Some(closure) = self.closure.take() {
            closure.forget();
        }
    }
}

impl Drop for Timeout {
    fn drop(&mut self) {
        if let Some(closure) = self.closure.take() {
            clear_timeout(self.id);
            drop(closure);
        }
    }
}

impl core::fmt::Debug for Timeout {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("Timeout")
            .field("id", &self.id)
            .field("pending", &self.closure.is_some())
            .finish()
    }
}

/// An owned repeating timer.
pub struct Interval {
    id: i32,
    closure: Option<Closure<dyn FnMut()>>,
}

impl Interval {
    /// Schedules `f` to run every `period`.
    pub fn every(period: Duration, f: impl FnMut() + 'static) -> Self {
        let closure = Closure::wrap(Box::new(f) as Box<dyn FnMut()>);
        let id = set_interval(closure.as_ref(), delay_ms(period));
        Self {
            id,
            closure: Some(closure),
        }
    }

    /// Returns the browser's interval id.
    ///
    /// A callback that needs to stop its own interval records this id up
    /// front and clears it via the browser API; the leaked closure simply
    /// never fires again.
    #[must_use]
    pub fn id(&self) -> i32 {
        self.id
    }

    /// Stops the interval now.
    pub fn cancel(self) {
        drop(self);
    }

    /// Leaks the closure, keeping the interval running for the rest of the
    /// page's life.
    pub fn forget(mut self) {
        if let Some(closure) = self.closure.take() {
            closure.forget();
        }
    }
}

impl Drop for Interval {
    fn drop(&mut self) {
        if let Some(closure) = self.closure.take() {
            clear_interval(self.id);
            drop(closure);
        }
    }
}

impl core::fmt::Debug for Interval {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("Interval")
            .field("id", &self.id)
            .field("running", &self.closure.is_some())
            .finish()
    }
}
