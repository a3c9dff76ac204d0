// Copyright 2026 the Festoon Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Core state machines for browser page decoration.
//!
//! `festoon_core` holds every policy decision of the decoration engine as a
//! pure, natively-testable model. It is `no_std` compatible (with `alloc`)
//! and knows nothing about the DOM: side effects are expressed as directive
//! values that the web backend applies.
//!
//! # Architecture
//!
//! Each decoration follows the same split:
//!
//! ```text
//!   browser event ──► festoon_backend_web (installer)
//!                          │ feeds
//!                          ▼
//!                  festoon_core model ──► directive / plan
//!                          │                   │
//!                          └── trace ◄─────────┤
//!                                              ▼
//!                                      DOM mutation (backend)
//! ```
//!
//! **[`media`]** — the background media resolver: ordered candidate probing
//! with monotonic first-success commitment and a static-gradient fallback
//! directive.
//!
//! **[`effect`]** — ephemeral effect models: confetti burst planning, ripple
//! geometry and tap filtering, fade timelines for transient notices, and the
//! typewriter reveal.
//!
//! **[`scroll`]** — scroll-linked behavior: parallax drift mapping, section
//! tracking for navigation highlighting and keyboard movement, and the
//! event-coalescing gate.
//!
//! **[`time`]** — monotonic microsecond [`HostTime`](time::HostTime) and
//! [`Duration`](time::Duration).
//!
//! **[`trace`]** — [`TraceSink`](trace::TraceSink) trait and event types for
//! decoration instrumentation, with the zero-overhead
//! [`Tracer`](trace::Tracer) wrapper.
//!
//! # Crate features
//!
//! - `std` (disabled by default): Enables `std` support in dependencies.
//! - `trace` (disabled by default): Enables `Tracer` method bodies (one
//!   branch per call site).

#![no_std]
#![cfg_attr(docsrs, feature(doc_auto_cfg))]

extern crate alloc;

pub mod effect;
pub mod media;
pub mod scroll;
pub mod time;
pub mod trace;
