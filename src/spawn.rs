//! Spawn context for body initialization.
//!
//! Provides helper methods for the randomized placement the swarm starts
//! from: positions on a spherical shell, unit spin axes, and spin rates.
//!
//! Custom spawners receive a [`SpawnContext`] per body:
//!
//! ```ignore
//! Simulation::new()
//!     .with_spawner(|ctx| {
//!         Body::new(ctx.on_shell(80.0), ctx.random_range(5.0, 12.0))
//!             .with_spin(ctx.random_axis(), ctx.spin_rate(), ctx.spin_phase())
//!     })
//!     .build()?;
//! ```

use crate::Vec3;
use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};
use std::f32::consts::{PI, TAU};

/// Context provided to spawner functions, one per body.
///
/// The RNG is derived from the simulation seed and the body index, so a
/// fixed seed reproduces the exact same swarm.
pub struct SpawnContext {
    /// Index of the body being spawned (0 to count-1).
    pub index: usize,
    /// Total number of bodies being spawned.
    pub count: usize,
    /// Placement shell radius configured on the simulation.
    pub radius: f32,
    rng: SmallRng,
}

impl SpawnContext {
    pub(crate) fn new(index: usize, count: usize, radius: f32, seed: u64) -> Self {
        // Spread the seed per index so neighboring bodies don't correlate.
        let seed = seed ^ (index as u64).wrapping_mul(0x9E37_79B9_7F4A_7C15);
        Self {
            index,
            count,
            radius,
            rng: SmallRng::seed_from_u64(seed),
        }
    }

    /// Normalized progress through the spawn (0.0 to 1.0).
    #[inline]
    pub fn progress(&self) -> f32 {
        self.index as f32 / self.count as f32
    }

    // ========== Random primitives ==========

    /// Random f32 between 0.0 and 1.0.
    #[inline]
    pub fn random(&mut self) -> f32 {
        self.rng.gen()
    }

    /// Random f32 in the given range.
    #[inline]
    pub fn random_range(&mut self, min: f32, max: f32) -> f32 {
        self.rng.gen_range(min..max)
    }

    // ========== Placement helpers ==========

    /// Random point on the spherical shell of the given radius.
    pub fn on_shell(&mut self, radius: f32) -> Vec3 {
        let phi = self.rng.gen_range(0.0..TAU);
        let theta = self.rng.gen_range(0.0..PI);

        Vec3::new(
            radius * theta.sin() * phi.cos(),
            radius * theta.sin() * phi.sin(),
            radius * theta.cos(),
        )
    }

    /// Random point on the configured placement shell.
    ///
    /// Equivalent to `on_shell(ctx.radius)`.
    pub fn on_placement_shell(&mut self) -> Vec3 {
        let radius = self.radius;
        self.on_shell(radius)
    }

    // ========== Spin helpers ==========

    /// Random unit spin axis.
    pub fn random_axis(&mut self) -> Vec3 {
        let axis = Vec3::new(
            0.5 - self.rng.gen::<f32>(),
            0.5 - self.rng.gen::<f32>(),
            0.5 - self.rng.gen::<f32>(),
        );
        axis.try_normalize().unwrap_or(Vec3::Y)
    }

    /// Random spin rate in radians per frame (0.01 to 0.03).
    pub fn spin_rate(&mut self) -> f32 {
        0.01 + 0.02 * self.rng.gen::<f32>()
    }

    /// Random initial spin angle (0 to 2π).
    pub fn spin_phase(&mut self) -> f32 {
        TAU * self.rng.gen::<f32>()
    }
}
