//! The frame driver.
//!
//! One [`tick`](FrameDriver::tick) runs the whole per-frame pipeline in
//! order: theme toggles, target advance, pointer tracking, steering and
//! integration, centroid recompute, and publication of the shading inputs.
//! Everything happens on the caller's thread in a single pass; the external
//! render-loop callback is expected to call `tick` once per frame and then
//! read the published state.
//!
//! The driver owns all mutable simulation state. Collaborators feed events
//! in through [`pointer_moved`](FrameDriver::pointer_moved) and
//! [`clicked`](FrameDriver::clicked), supply the ray/plane intersection for
//! the current pointer as a `tick` argument, and read body transforms,
//! shading inputs, and camera anchor back out after the tick.

use crate::body::Body;
use crate::input::{Pointer, RepulsionMarker, RepulsionTracker};
use crate::occlusion::{self, Theme};
use crate::snapshot::{ShadingBuffers, ShadingInputs};
use crate::steering::{Influences, SteeringParams};
use crate::swarm::Swarm;
use crate::target::TargetPath;
use crate::time::Clock;
use crate::{Vec2, Vec3, Vec4};

/// Radius of the camera's orbit around the swarm centroid.
pub const CAMERA_ORBIT_RADIUS: f32 = 300.0;

/// Angular rate of the camera orbit, radians per second.
pub const CAMERA_ORBIT_RATE: f32 = 0.1;

/// Owns and advances the simulation, one tick per frame.
///
/// Built by [`Simulation::build`](crate::simulation::Simulation::build).
#[derive(Debug)]
pub struct FrameDriver {
    swarm: Swarm,
    targets: TargetPath,
    params: SteeringParams,
    pointer: Pointer,
    tracker: RepulsionTracker,
    buffers: ShadingBuffers,
    theme: Theme,
    clock: Clock,
}

impl FrameDriver {
    pub(crate) fn new(
        swarm: Swarm,
        targets: TargetPath,
        params: SteeringParams,
        theme: Theme,
    ) -> Self {
        let mut buffers = ShadingBuffers::with_capacity(swarm.len());
        // Publish the spawn state so shading is valid before the first tick.
        swarm.write_shading_inputs(buffers.back_mut());
        buffers.publish();

        Self {
            swarm,
            targets,
            params,
            pointer: Pointer::new(),
            tracker: RepulsionTracker::new(),
            buffers,
            theme,
            clock: Clock::new(),
        }
    }

    // ========== Event intake ==========

    /// Record a pointer-move event in normalized device coordinates.
    pub fn pointer_moved(&mut self, ndc: Vec2) {
        self.pointer.pointer_moved(ndc);
    }

    /// Record a click/tap event. Each pending click flips the theme at the
    /// start of the next tick.
    pub fn clicked(&mut self) {
        self.pointer.clicked();
    }

    // ========== Ticking ==========

    /// Advance one frame using the internal clock.
    ///
    /// `intersection` is the world-space ray/plane hit for the current
    /// pointer, if the external raycast found one.
    pub fn tick(&mut self, intersection: Option<Vec3>) {
        let (t, _) = self.clock.update();
        self.advance(t, intersection);
    }

    /// Advance one frame at an explicit monotonic time `t` (seconds).
    ///
    /// The update order is fixed: targets, pointer tracker, steering and
    /// integration over all bodies, centroid, then publication of the
    /// shading inputs. Readers never observe a partially integrated frame.
    pub fn advance(&mut self, t: f32, intersection: Option<Vec3>) {
        for _ in 0..self.pointer.take_clicks() {
            self.theme.toggle();
        }

        let targets = self.targets.at(t);

        if let Some(point) = intersection {
            self.tracker.observe(point);
        }

        // The repulsor applies whenever a move pulse is pending, even if no
        // fresh intersection arrived this tick; it then uses the retained
        // point.
        let influences = Influences {
            primary: Some(targets.primary),
            secondary: Some(targets.secondary),
            center: Some(self.swarm.center()),
            repulsor: self.pointer.moved().then(|| self.tracker.point()),
        };

        self.params.advance(self.swarm.bodies_mut(), &influences, t);

        self.swarm.recompute_center();
        self.swarm.write_shading_inputs(self.buffers.back_mut());
        self.buffers.publish();

        self.pointer.end_frame();
    }

    // ========== Published state ==========

    /// The swarm, including per-body transforms for render submission.
    #[inline]
    pub fn swarm(&self) -> &Swarm {
        &self.swarm
    }

    /// Bodies in index order.
    #[inline]
    pub fn bodies(&self) -> &[Body] {
        self.swarm.bodies()
    }

    /// Swarm centroid as of the last tick (camera follow point).
    #[inline]
    pub fn center(&self) -> Vec3 {
        self.swarm.center()
    }

    /// The published shading inputs for the last tick.
    #[inline]
    pub fn shading_inputs(&self) -> &ShadingInputs {
        self.buffers.front()
    }

    /// Current theme.
    #[inline]
    pub fn theme(&self) -> Theme {
        self.theme
    }

    /// Latest pointer position for the external raycaster.
    #[inline]
    pub fn pointer_ndc(&self) -> Vec2 {
        self.pointer.ndc()
    }

    /// Marker transform for the optional pointer visual.
    pub fn repulsion_marker(&self) -> RepulsionMarker {
        self.tracker.marker()
    }

    /// Camera eye position at time `t`: the centroid plus a slow orbit.
    /// The camera looks at [`center`](Self::center).
    pub fn camera_eye(&self, t: f32) -> Vec3 {
        let angle = CAMERA_ORBIT_RATE * t;
        self.center() + CAMERA_ORBIT_RADIUS * Vec3::new(angle.cos(), 0.0, angle.sin())
    }

    /// Shade a world-space surface point against the published inputs.
    pub fn shade(&self, point: Vec3, normal: Vec3) -> Vec4 {
        occlusion::shade_rgba(point, normal, self.buffers.front(), self.theme)
    }

    /// The internal clock.
    #[inline]
    pub fn clock(&self) -> &Clock {
        &self.clock
    }

    /// The internal clock, for installing a fixed delta.
    #[inline]
    pub fn clock_mut(&mut self) -> &mut Clock {
        &mut self.clock
    }
}
