// Copyright 2026 the Festoon Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Recording, pretty-printing, and JSON timeline export for festoon
//! diagnostics.
//!
//! This crate provides [`TraceSink`](festoon_core::trace::TraceSink)
//! implementations for development and post-mortem analysis:
//!
//! - [`pretty::PrettyPrintSink`] — human-readable one-line-per-event output.
//! - [`recorder::RecorderSink`] — in-memory event recording for tests and
//!   replay.
//! - [`json::export`] — writes a JSON timeline from recorded events.

pub mod json;
pub mod pretty;
pub mod recorder;
