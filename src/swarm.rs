//! The body registry.
//!
//! [`Swarm`] owns the ordered collection of bodies and the derived state both
//! per-frame consumers need: the centroid (next frame's cohesion attractor
//! and the camera follow point) and the shading-input arrays.

use crate::body::Body;
use crate::snapshot::ShadingInputs;
use crate::Vec3;

/// Ordered, fixed-cardinality collection of swarm bodies.
///
/// Bodies are created once at startup and never added or removed during a
/// run. Index order is significant: the pairwise avoidance loop and the
/// shading arrays both follow it.
#[derive(Debug, Clone)]
pub struct Swarm {
    bodies: Vec<Body>,
    center: Vec3,
}

impl Swarm {
    /// Build a swarm from spawned bodies.
    pub fn new(bodies: Vec<Body>) -> Self {
        let mut swarm = Self {
            bodies,
            center: Vec3::ZERO,
        };
        swarm.recompute_center();
        swarm
    }

    /// Number of bodies.
    #[inline]
    pub fn len(&self) -> usize {
        self.bodies.len()
    }

    /// True for a swarm with no bodies.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.bodies.is_empty()
    }

    /// Bodies in index order.
    #[inline]
    pub fn bodies(&self) -> &[Body] {
        &self.bodies
    }

    /// Mutable bodies for the steering pass.
    #[inline]
    pub fn bodies_mut(&mut self) -> &mut [Body] {
        &mut self.bodies
    }

    /// Mean of all body positions as of the last [`recompute_center`](Self::recompute_center).
    #[inline]
    pub fn center(&self) -> Vec3 {
        self.center
    }

    /// Recompute the centroid. Called after all bodies have integrated.
    pub fn recompute_center(&mut self) {
        if self.bodies.is_empty() {
            self.center = Vec3::ZERO;
            return;
        }
        let sum: Vec3 = self.bodies.iter().map(|b| b.position).sum();
        self.center = sum / self.bodies.len() as f32;
    }

    /// Publish positions and weights into the given shading-input buffer.
    pub fn write_shading_inputs(&self, out: &mut ShadingInputs) {
        out.fill(&self.bodies);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_center_is_mean_of_positions() {
        let swarm = Swarm::new(vec![
            Body::new(Vec3::new(10.0, 0.0, 0.0), 10.0),
            Body::new(Vec3::new(-10.0, 4.0, 0.0), 10.0),
        ]);
        assert_eq!(swarm.center(), Vec3::new(0.0, 2.0, 0.0));
    }

    #[test]
    fn test_center_tracks_moved_bodies() {
        let mut swarm = Swarm::new(vec![Body::new(Vec3::ZERO, 10.0)]);
        swarm.bodies_mut()[0].position = Vec3::new(6.0, 0.0, 0.0);

        // Stale until recomputed: readers only see the post-integration value.
        assert_eq!(swarm.center(), Vec3::ZERO);
        swarm.recompute_center();
        assert_eq!(swarm.center(), Vec3::new(6.0, 0.0, 0.0));
    }

    #[test]
    fn test_empty_swarm_center_is_origin() {
        let mut swarm = Swarm::new(Vec::new());
        swarm.recompute_center();
        assert_eq!(swarm.center(), Vec3::ZERO);
    }
}
