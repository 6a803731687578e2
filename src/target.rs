//! Target path generation.
//!
//! Each frame the swarm seeks two time-varying points: a primary target on a
//! fixed-radius orbit around the origin and a secondary wander target on the
//! body placement shell. Both follow the same Lissajous-style composition of
//! sines and cosines at distinct frequencies, which keeps the cohesion target
//! in motion for any practical run length and prevents the swarm from
//! settling into a steady state.
//!
//! Pure functions of the time input; no state, no failure modes.

use crate::Vec3;
use std::f32::consts::{PI, TAU};

/// Both seek targets for one frame.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TargetState {
    /// Orbit target at [`TargetPath::orbit_radius`].
    pub primary: Vec3,
    /// Wander target at [`TargetPath::wander_radius`].
    pub secondary: Vec3,
}

/// Generator for the swarm's seek targets.
#[derive(Debug, Clone, Copy)]
pub struct TargetPath {
    /// Radius of the primary orbit target's path.
    pub orbit_radius: f32,
    /// Radius of the secondary wander target's path (the placement shell).
    pub wander_radius: f32,
}

impl Default for TargetPath {
    fn default() -> Self {
        Self {
            orbit_radius: 300.0,
            wander_radius: 50.0,
        }
    }
}

impl TargetPath {
    /// Unit direction of the wandering path at time `t` (seconds).
    fn direction(t: f32) -> Vec3 {
        let phi = (1.1 * t).cos() * (0.8 * t).sin() * TAU;
        let theta = (1.2 * t).cos() * (0.85 * t).sin() * PI;

        Vec3::new(
            theta.sin() * phi.cos(),
            theta.sin() * phi.sin(),
            theta.cos(),
        )
    }

    /// Primary orbit target at time `t`.
    pub fn primary(&self, t: f32) -> Vec3 {
        self.orbit_radius * Self::direction(t)
    }

    /// Secondary wander target at time `t`.
    pub fn secondary(&self, t: f32) -> Vec3 {
        self.wander_radius * Self::direction(t)
    }

    /// Both targets for the frame at time `t`.
    pub fn at(&self, t: f32) -> TargetState {
        TargetState {
            primary: self.primary(t),
            secondary: self.secondary(t),
        }
    }
}
