//! Body state for swarm members.
//!
//! A [`Body`] is one sphere in the swarm: a mutable position and smoothed
//! velocity driven by the steering pass, a fixed size chosen at spawn, and a
//! purely cosmetic spin that never feeds back into translation.

use glam::{Mat4, Quat, Vec3};

/// Smallest allowed body scale (radius-like size).
pub const MIN_SCALE: f32 = 5.0;

/// Largest allowed body scale.
pub const MAX_SCALE: f32 = 30.0;

/// One swarm member.
///
/// `position` and `velocity` are public because the steering pass owns their
/// per-frame update; everything else is fixed at creation and read-only.
#[derive(Debug, Clone)]
pub struct Body {
    /// World-space position, written once per frame by the steering pass.
    pub position: Vec3,
    /// Smoothed steering velocity (exponential filter state). Zero at creation.
    pub velocity: Vec3,
    scale: f32,
    scale_factor: f32,
    rotation_axis: Vec3,
    rotation_speed: f32,
    spin_angle: f32,
}

impl Body {
    /// Create a body at `position` with the given scale.
    ///
    /// The scale is clamped to `[MIN_SCALE, MAX_SCALE]`. The derived speed
    /// factor decreases linearly from 1 at `MIN_SCALE` toward 0, so larger
    /// bodies end up relatively slower.
    pub fn new(position: Vec3, scale: f32) -> Self {
        let scale = scale.clamp(MIN_SCALE, MAX_SCALE);
        Self {
            position,
            velocity: Vec3::ZERO,
            scale,
            scale_factor: 1.0 - (scale - MIN_SCALE) / 25.0,
            rotation_axis: Vec3::Y,
            rotation_speed: 0.0,
            spin_angle: 0.0,
        }
    }

    /// Set the cosmetic spin parameters.
    ///
    /// `axis` is normalized; a degenerate axis falls back to +Y.
    pub fn with_spin(mut self, axis: Vec3, speed: f32, phase: f32) -> Self {
        self.rotation_axis = axis.try_normalize().unwrap_or(Vec3::Y);
        self.rotation_speed = speed;
        self.spin_angle = phase;
        self
    }

    /// Advance the spin by one frame.
    pub fn spin(&mut self) {
        self.spin_angle += self.rotation_speed;
    }

    /// Radius-like size, in `[MIN_SCALE, MAX_SCALE]`.
    #[inline]
    pub fn scale(&self) -> f32 {
        self.scale
    }

    /// Speed bias in `[0, 1]`: 1 for the smallest bodies, toward 0 for the largest.
    #[inline]
    pub fn scale_factor(&self) -> f32 {
        self.scale_factor
    }

    /// Occlusion weight bound into the shading inputs (`scale²`).
    #[inline]
    pub fn weight(&self) -> f32 {
        self.scale * self.scale
    }

    /// Unit spin axis.
    #[inline]
    pub fn rotation_axis(&self) -> Vec3 {
        self.rotation_axis
    }

    /// Spin advance per frame, in radians.
    #[inline]
    pub fn rotation_speed(&self) -> f32 {
        self.rotation_speed
    }

    /// Accumulated spin angle, in radians.
    #[inline]
    pub fn spin_angle(&self) -> f32 {
        self.spin_angle
    }

    /// Current orientation from the accumulated spin.
    pub fn orientation(&self) -> Quat {
        Quat::from_axis_angle(self.rotation_axis, self.spin_angle)
    }

    /// Model matrix for transform submission (uniform scale, spin, translation).
    pub fn model_matrix(&self) -> Mat4 {
        Mat4::from_scale_rotation_translation(
            Vec3::splat(self.scale),
            self.orientation(),
            self.position,
        )
    }

    /// Map a point in the body's local unit-mesh space to world space.
    pub fn world_point(&self, local: Vec3) -> Vec3 {
        self.position + self.orientation() * (local * self.scale)
    }

    /// Map a local outward normal to a world-space unit normal.
    ///
    /// The scale is uniform, so rotating the normal is enough.
    pub fn world_normal(&self, local: Vec3) -> Vec3 {
        (self.orientation() * local).normalize_or_zero()
    }

    /// Surface-to-surface gap to another body.
    ///
    /// Negative while the two spheres overlap.
    pub fn gap(&self, other: &Body) -> f32 {
        (self.position - other.position).length() - 0.5 * self.scale - 0.5 * other.scale
    }
}
