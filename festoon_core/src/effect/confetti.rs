// Copyright 2026 the Festoon Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Confetti burst planning.
//!
//! A burst is planned up front as a list of [`ParticleSpec`]s — one per
//! particle, each with its own size, color, horizontal position, launch delay,
//! and fall duration. The web rig turns each spec into a short-lived DOM
//! element that falls past the bottom of the viewport with rotation, then
//! removes itself.

use alloc::vec::Vec;

use super::rand::Lcg;
use crate::time::Duration;

/// Number of particles in one burst.
pub const PARTICLE_COUNT: usize = 100;

/// Particle palette.
pub const PALETTE: [&str; 5] = ["#0066b1", "#00a0e9", "#ffd700", "#ff6b6b", "#4ecdc4"];

/// Delay between consecutive particle launches.
pub const LAUNCH_STAGGER: Duration = Duration::from_millis(50);

/// Particle size bounds in CSS pixels.
pub const SIZE_MIN: f64 = 5.0;
/// Upper (exclusive) particle size bound in CSS pixels.
pub const SIZE_MAX: f64 = 15.0;

/// Fall duration bounds in milliseconds.
pub const FALL_MIN_MS: u64 = 3_000;
/// Upper (exclusive) fall duration bound in milliseconds.
pub const FALL_MAX_MS: u64 = 5_000;

/// One planned confetti particle.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ParticleSpec {
    /// Side length in CSS pixels (particles are round, so also the diameter).
    pub size: f64,
    /// Fill color from [`PALETTE`].
    pub color: &'static str,
    /// Horizontal position in CSS pixels from the left viewport edge.
    pub x: f64,
    /// Delay before this particle launches.
    pub delay: Duration,
    /// How long the particle takes to fall past the viewport.
    pub fall: Duration,
}

/// Plans confetti bursts from an owned random source.
///
/// The random state is instance-scoped so concurrent rigs (and tests) never
/// share ambient state.
#[derive(Clone, Debug)]
pub struct ConfettiPlanner {
    rng: Lcg,
}

impl ConfettiPlanner {
    /// Creates a planner seeded with `seed`.
    #[must_use]
    pub const fn new(seed: u64) -> Self {
        Self {
            rng: Lcg::new(seed),
        }
    }

    /// Plans one burst of exactly [`PARTICLE_COUNT`] particles across a
    /// viewport `viewport_width` pixels wide.
    pub fn burst(&mut self, viewport_width: f64) -> Vec<ParticleSpec> {
        (0..PARTICLE_COUNT)
            .map(|i| {
                #[expect(
                    clippy::cast_possible_truncation,
                    clippy::cast_sign_loss,
                    reason = "fall duration is a small positive millisecond count"
                )]
                let fall_ms = self.rng.range(FALL_MIN_MS as f64, FALL_MAX_MS as f64) as u64;
                ParticleSpec {
                    size: self.rng.range(SIZE_MIN, SIZE_MAX),
                    color: PALETTE[self.rng.index(PALETTE.len())],
                    x: self.rng.range(0.0, viewport_width),
                    delay: Duration(LAUNCH_STAGGER.ticks() * i as u64),
                    fall: Duration::from_millis(fall_ms),
                }
            })
            .collect()
    }
}
