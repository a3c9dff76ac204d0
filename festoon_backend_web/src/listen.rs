// Copyright 2026 the Festoon Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Explicit event subscription handles.
//!
//! [`EventBinding`] owns the JS closure backing a DOM event listener, so a
//! subscription has a clear detach point instead of an anonymous callback
//! leaked at registration. Dropping a binding unregisters the listener;
//! [`forget`](EventBinding::forget) deliberately leaks it for subscriptions
//! that live as long as the page.

use alloc::boxed::Box;

use wasm_bindgen::JsValue;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::prelude::*;
use web_sys::{Event, EventTarget};

/// An owned DOM event subscription.
pub struct EventBinding {
    target: EventTarget,
    event: &'static str,
    closure: Option<Closure<dyn FnMut(Event)>>,
}

impl EventBinding {
    /// Registers `handler` for `event` on `target`.
    pub fn bind(
        target: &EventTarget,
        event: &'static str,
        handler: impl FnMut(Event) + 'static,
    ) -> Result<Self, JsValue> {
        let closure = Closure::wrap(Box::new(handler) as Box<dyn FnMut(Event)>);
        target.add_event_listener_with_callback(event, closure.as_ref().unchecked_ref())?;
        Ok(Self {
            target: target.clone(),
            event,
            closure: Some(closure),
        })
    }

    /// Unregisters the listener now.
    pub fn detach(mut self) {
        self.remove();
    }

    /// Leaks the closure, keeping the subscription alive for the rest of the
    /// page's life. There is no graceful shutdown on the web.
    pub fn forget(mut self) {
        if let Some(closure) = self.closure.take() {
            closure.forget();
        }
    }

    fn remove(&mut self) {
        if let Some(closure) = self.closure.take() {
            let _ = self
                .target
                .remove_event_listener_with_callback(self.event, closure.as_ref().unchecked_ref());
        }
    }
}

impl Drop for EventBinding {
    fn drop(&mut self) {
        self.remove();
    }
}

impl core::fmt::Debug for EventBinding {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("EventBinding")
            .field("event", &self.event)
            .field("attached", &self.closure.is_some())
            .finish_non_exhaustive()
    }
}
