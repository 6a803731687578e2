//! Pointer input tracking.
//!
//! Two pieces of state live here. [`Pointer`] is the event side: it records
//! the latest normalized device coordinate, a one-frame "moved" pulse, and
//! pending theme-toggle clicks, all fed by the external input collaborator.
//! [`RepulsionTracker`] is the world-space side: it holds the current and
//! previous ray/plane intersection points the steering pass repels from, and
//! derives the smoothed marker transform the renderer may draw at the
//! pointer.
//!
//! The moved pulse is deliberately one-shot per event: it is set by any
//! pointer-move observation and cleared unconditionally at the end of every
//! tick, independent of whether an intersection was found that tick. With no
//! intersection available the repulsion point simply retains its previous
//! value.

use crate::{Vec2, Vec3};

/// Event-side pointer state.
#[derive(Debug, Default)]
pub struct Pointer {
    ndc: Vec2,
    moved: bool,
    clicks: u32,
}

impl Pointer {
    /// Create a pointer tracker with no pending events.
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a pointer-move event in normalized device coordinates.
    ///
    /// Sets the moved pulse for the next tick.
    pub fn pointer_moved(&mut self, ndc: Vec2) {
        self.ndc = ndc;
        self.moved = true;
    }

    /// Record a click/tap event (theme toggle).
    pub fn clicked(&mut self) {
        self.clicks += 1;
    }

    /// Latest pointer position in normalized device coordinates.
    ///
    /// The external raycaster projects this into the scene each frame.
    #[inline]
    pub fn ndc(&self) -> Vec2 {
        self.ndc
    }

    /// Whether a pointer-move event was observed since the last tick.
    #[inline]
    pub fn moved(&self) -> bool {
        self.moved
    }

    /// Drain pending clicks.
    pub(crate) fn take_clicks(&mut self) -> u32 {
        std::mem::take(&mut self.clicks)
    }

    /// Clear the one-frame moved pulse. Called at the end of every tick.
    pub(crate) fn end_frame(&mut self) {
        self.moved = false;
    }
}

/// Marker transform for the optional pointer visual.
///
/// The marker sits halfway between the previous and current repulsion points,
/// faces the previous one, and stretches along the travel direction with the
/// pointer's speed.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RepulsionMarker {
    /// Midpoint-smoothed anchor position.
    pub position: Vec3,
    /// Per-axis scale: squashed across the travel axis, stretched along it.
    pub scale: Vec3,
    /// Point the marker faces (the previous repulsion point).
    pub look_target: Vec3,
}

/// World-space repulsion point, smoothed frame to frame.
#[derive(Debug, Default, Clone, Copy)]
pub struct RepulsionTracker {
    point: Vec3,
    previous: Vec3,
}

impl RepulsionTracker {
    /// Create a tracker with both points at the origin.
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a new ray/plane intersection point.
    ///
    /// Shifts the current point into the previous slot.
    pub fn observe(&mut self, intersection: Vec3) {
        self.previous = self.point;
        self.point = intersection;
    }

    /// Current repulsion point. This is what steering repels from.
    #[inline]
    pub fn point(&self) -> Vec3 {
        self.point
    }

    /// Repulsion point of the previous observation.
    #[inline]
    pub fn previous(&self) -> Vec3 {
        self.previous
    }

    /// Smoothed marker transform for the rendering collaborator.
    pub fn marker(&self) -> RepulsionMarker {
        let anchor = self.previous.lerp(self.point, 0.5);
        let stride = (anchor - self.previous).length();

        RepulsionMarker {
            position: anchor,
            scale: Vec3::new(
                1.0 - 0.1 * stride,
                1.0 - 0.1 * stride,
                1.0 + 0.25 * stride,
            ),
            look_target: self.previous,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_moved_pulse_clears_at_end_of_frame() {
        let mut pointer = Pointer::new();
        assert!(!pointer.moved());

        pointer.pointer_moved(Vec2::new(0.25, -0.5));
        assert!(pointer.moved());
        assert_eq!(pointer.ndc(), Vec2::new(0.25, -0.5));

        pointer.end_frame();
        assert!(!pointer.moved());
        // NDC survives the pulse reset.
        assert_eq!(pointer.ndc(), Vec2::new(0.25, -0.5));
    }

    #[test]
    fn test_clicks_drain_once() {
        let mut pointer = Pointer::new();
        pointer.clicked();
        pointer.clicked();
        assert_eq!(pointer.take_clicks(), 2);
        assert_eq!(pointer.take_clicks(), 0);
    }

    #[test]
    fn test_observe_shifts_previous() {
        let mut tracker = RepulsionTracker::new();
        tracker.observe(Vec3::new(10.0, 0.0, 0.0));
        tracker.observe(Vec3::new(30.0, 0.0, 0.0));

        assert_eq!(tracker.previous(), Vec3::new(10.0, 0.0, 0.0));
        assert_eq!(tracker.point(), Vec3::new(30.0, 0.0, 0.0));
    }

    #[test]
    fn test_marker_sits_at_midpoint_and_stretches() {
        let mut tracker = RepulsionTracker::new();
        tracker.observe(Vec3::new(10.0, 0.0, 0.0));
        tracker.observe(Vec3::new(30.0, 0.0, 0.0));

        let marker = tracker.marker();
        assert_eq!(marker.position, Vec3::new(20.0, 0.0, 0.0));
        // Half-step length is 10: squashed to 0 across, stretched to 3.5 along.
        assert!((marker.scale.x - 0.0).abs() < 1e-5);
        assert!((marker.scale.z - 3.5).abs() < 1e-5);
        assert_eq!(marker.look_target, Vec3::new(10.0, 0.0, 0.0));
    }
}
