//! Steering and integration.
//!
//! The per-frame core: every body blends its competing influences (the two
//! seek targets, cohesion toward the previous frame's centroid, pairwise
//! overlap avoidance, and the optional pointer repulsor) into a desired
//! direction, scales it by the oscillating swarm speed, damps it into the
//! body's velocity, and integrates. Bodies are processed strictly in index
//! order; the pairwise loop below depends on it.
//!
//! The pass is pure numerics with no failure modes: every normalization is
//! zero-safe (a degenerate vector contributes nothing instead of a NaN).

use crate::body::Body;
use crate::Vec3;

/// Tuning parameters for the steering pass.
///
/// Defaults reproduce the reference swarm behavior; the fields are exposed so
/// tests and demos can exaggerate or silence individual influences.
#[derive(Debug, Clone, Copy)]
pub struct SteeringParams {
    /// Gain applied to the normalized overlap-repulsion accumulator.
    pub pair_gain: f32,
    /// Gain of the inverse-square pointer repulsion.
    pub pointer_gain: f32,
    /// Exponential velocity-filter coefficient. Small values give the swarm
    /// inertia and suppress jitter from the discrete per-frame recomputation.
    pub smoothing: f32,
    /// Base of the global speed oscillation.
    pub base_speed: f32,
    /// Amplitude of the global speed oscillation.
    pub speed_amplitude: f32,
}

impl Default for SteeringParams {
    fn default() -> Self {
        Self {
            pair_gain: 2.0,
            pointer_gain: 5000.0,
            smoothing: 0.01,
            base_speed: 0.2,
            speed_amplitude: 1.8,
        }
    }
}

/// Frame-level influence points for the steering pass.
///
/// Each term is optional; a `None` simply drops that contribution. The frame
/// driver always supplies targets and centroid, and supplies the repulsor
/// only on ticks where a pointer-move pulse is pending.
#[derive(Debug, Clone, Copy, Default)]
pub struct Influences {
    /// Primary orbit target.
    pub primary: Option<Vec3>,
    /// Secondary wander target.
    pub secondary: Option<Vec3>,
    /// Previous frame's swarm centroid (cohesion).
    pub center: Option<Vec3>,
    /// Pointer repulsion point.
    pub repulsor: Option<Vec3>,
}

impl Influences {
    /// No influences at all. Bodies only spin, avoid overlap, and coast.
    pub fn none() -> Self {
        Self::default()
    }
}

/// Blend the seek influences into a unit direction.
///
/// Each present term is normalized individually before summing so distance
/// never biases the weighting, then the sum is re-normalized. Returns zero
/// when every term is absent or degenerate.
pub fn seek_blend(position: Vec3, influences: &Influences) -> Vec3 {
    let mut dir = Vec3::ZERO;

    for target in [influences.secondary, influences.primary, influences.center]
        .into_iter()
        .flatten()
    {
        dir += (target - position).normalize_or_zero();
    }

    dir.normalize_or_zero()
}

/// Normalized overlap-repulsion accumulator for body `j`.
///
/// Visits only partners with index `>= j`, so each unordered pair is touched
/// exactly once per frame and a body is only pushed by equal-or-later
/// neighbors within a single pass. The asymmetry evens out across frames
/// because the overlap relation itself is symmetric; widening the loop to the
/// full N×N changes the swarm dynamics and must not be done. The self pair is
/// inert: its separation vector is zero.
///
/// Only overlapping pairs (surface gap < 0) contribute, and they contribute
/// their raw, non-unit separation vector, so the accumulated direction leans
/// toward the deepest overlaps.
pub fn overlap_repulsion(bodies: &[Body], j: usize) -> Vec3 {
    let mut repulsion = Vec3::ZERO;
    let body = &bodies[j];

    for other in &bodies[j..] {
        let away = body.position - other.position;
        let gap = away.length() - 0.5 * body.scale() - 0.5 * other.scale();
        if gap < 0.0 {
            repulsion += away;
        }
    }

    repulsion.normalize_or_zero()
}

impl SteeringParams {
    /// Global speed oscillation at time `t`, shared by every body this frame.
    pub fn speed_scale(&self, t: f32) -> f32 {
        self.base_speed + self.speed_amplitude * (0.5 + 0.5 * t.sin())
    }

    /// Per-body speed bias: smaller bodies move faster.
    pub fn speed_bias(&self, body: &Body) -> f32 {
        2.0 * (0.8 + 0.2 * body.scale_factor())
    }

    /// Inverse-square pointer repulsion on a body at `position`.
    ///
    /// Degenerate case: a body exactly at the repulsion point receives no
    /// contribution rather than an infinite one.
    pub fn pointer_repulsion(&self, position: Vec3, repulsor: Vec3) -> Vec3 {
        let away = position - repulsor;
        let dist_sq = away.length_squared();
        if dist_sq <= f32::EPSILON {
            return Vec3::ZERO;
        }
        away.normalize_or_zero() * (self.pointer_gain / dist_sq)
    }

    /// Run one steering-and-integration pass over the swarm.
    ///
    /// `t` is the frame's monotonic time in seconds; it drives only the speed
    /// oscillation. Positions advance by the smoothed velocity once per call.
    pub fn advance(&self, bodies: &mut [Body], influences: &Influences, t: f32) {
        let speed = self.speed_scale(t);

        for j in 0..bodies.len() {
            bodies[j].spin();
            let position = bodies[j].position;

            let mut dir = seek_blend(position, influences);
            dir += overlap_repulsion(bodies, j) * self.pair_gain;

            if let Some(repulsor) = influences.repulsor {
                dir += self.pointer_repulsion(position, repulsor);
            }

            dir *= speed * self.speed_bias(&bodies[j]);

            let body = &mut bodies[j];
            body.velocity += (dir - body.velocity) * self.smoothing;
            body.position += body.velocity;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn overlapping_pair() -> Vec<Body> {
        // Surfaces at half-scale: centers 2 apart, combined half-scales 10.
        vec![
            Body::new(Vec3::new(-1.0, 0.0, 0.0), 10.0),
            Body::new(Vec3::new(1.0, 0.0, 0.0), 10.0),
        ]
    }

    #[test]
    fn test_seek_blend_is_unit_when_any_term_present() {
        let influences = Influences {
            primary: Some(Vec3::new(300.0, 0.0, 0.0)),
            secondary: Some(Vec3::new(0.0, 50.0, 0.0)),
            center: Some(Vec3::new(-10.0, -10.0, 4.0)),
            repulsor: None,
        };
        let dir = seek_blend(Vec3::new(5.0, 5.0, 5.0), &influences);
        assert!((dir.length() - 1.0).abs() < 1e-5);
    }

    #[test]
    fn test_seek_blend_zero_without_influences() {
        assert_eq!(seek_blend(Vec3::ONE, &Influences::none()), Vec3::ZERO);
    }

    #[test]
    fn test_seek_blend_ignores_coincident_target() {
        // A target sitting exactly on the body contributes the zero vector.
        let influences = Influences {
            primary: Some(Vec3::ONE),
            secondary: None,
            center: None,
            repulsor: None,
        };
        assert_eq!(seek_blend(Vec3::ONE, &influences), Vec3::ZERO);
    }

    #[test]
    fn test_overlap_repulsion_pushes_apart() {
        let bodies = overlapping_pair();
        let push = overlap_repulsion(&bodies, 0);
        assert!(push.x < 0.0);
        assert!((push.length() - 1.0).abs() < 1e-5);
    }

    #[test]
    fn test_overlap_repulsion_only_sees_later_indices() {
        // The last body's loop covers only itself, so it feels nothing
        // this frame even though the pair overlaps.
        let bodies = overlapping_pair();
        assert_eq!(overlap_repulsion(&bodies, 1), Vec3::ZERO);
    }

    #[test]
    fn test_overlap_repulsion_zero_when_separated() {
        let bodies = vec![
            Body::new(Vec3::new(-20.0, 0.0, 0.0), 10.0),
            Body::new(Vec3::new(20.0, 0.0, 0.0), 10.0),
        ];
        assert_eq!(overlap_repulsion(&bodies, 0), Vec3::ZERO);
    }

    #[test]
    fn test_overlap_resolves_over_frames() {
        // With every other influence withheld, repeated passes must
        // monotonically open the gap until the pair separates.
        let params = SteeringParams::default();
        let mut bodies = overlapping_pair();
        let mut gap = bodies[0].gap(&bodies[1]);
        assert!(gap < 0.0);

        let mut frames = 0;
        while gap < 0.0 {
            params.advance(&mut bodies, &Influences::none(), 0.0);
            let next = bodies[0].gap(&bodies[1]);
            assert!(next > gap, "gap must strictly increase while overlapping");
            gap = next;
            frames += 1;
            assert!(frames < 20_000, "pair never separated");
        }
    }

    #[test]
    fn test_pointer_repulsion_inverse_square() {
        let params = SteeringParams::default();
        let near = params.pointer_repulsion(Vec3::new(10.0, 0.0, 0.0), Vec3::ZERO);
        let far = params.pointer_repulsion(Vec3::new(20.0, 0.0, 0.0), Vec3::ZERO);

        assert!((near.length() - 5000.0 / 100.0).abs() < 1e-3);
        assert!((far.length() - 5000.0 / 400.0).abs() < 1e-3);
        assert!(near.x > 0.0);
    }

    #[test]
    fn test_pointer_repulsion_degenerate_is_zero() {
        let params = SteeringParams::default();
        assert_eq!(params.pointer_repulsion(Vec3::ONE, Vec3::ONE), Vec3::ZERO);
    }

    #[test]
    fn test_speed_scale_range() {
        let params = SteeringParams::default();
        for i in 0..100 {
            let s = params.speed_scale(i as f32 * 0.21);
            assert!(s >= params.base_speed - 1e-5);
            assert!(s <= params.base_speed + params.speed_amplitude + 1e-5);
        }
    }

    #[test]
    fn test_velocity_filter_step() {
        // One pass with a single far target: v goes from 0 to dir * smoothing.
        let params = SteeringParams::default();
        let mut bodies = vec![Body::new(Vec3::ZERO, 5.0)];
        let influences = Influences {
            primary: Some(Vec3::new(1000.0, 0.0, 0.0)),
            ..Influences::none()
        };

        params.advance(&mut bodies, &influences, 0.0);

        let expected = params.speed_scale(0.0) * params.speed_bias(&bodies[0]) * params.smoothing;
        assert!((bodies[0].velocity.x - expected).abs() < 1e-5);
        assert_eq!(bodies[0].velocity.y, 0.0);
        assert!(bodies[0].position.x > 0.0);
    }

    #[test]
    fn test_velocities_stay_finite() {
        let params = SteeringParams::default();
        let mut bodies = overlapping_pair();
        let influences = Influences {
            primary: Some(Vec3::new(300.0, 0.0, 0.0)),
            secondary: Some(Vec3::new(50.0, 0.0, 0.0)),
            center: Some(Vec3::ZERO),
            repulsor: Some(Vec3::new(-1.0, 0.0, 0.0)),
        };

        for i in 0..500 {
            params.advance(&mut bodies, &influences, i as f32 / 60.0);
        }
        for body in &bodies {
            assert!(body.velocity.is_finite());
            assert!(body.position.is_finite());
        }
    }
}
