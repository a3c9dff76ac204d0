// Copyright 2026 the Festoon Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Scroll-linked behavior: parallax drift, section tracking, and event
//! coalescing.

pub mod parallax;
pub mod sections;
pub mod throttle;
