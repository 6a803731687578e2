//! # Shoal - swarm steering with analytic sphere occlusion
//!
//! A headless simulation core that animates a swarm of spheres seeking a
//! moving target while avoiding mutual overlap and reacting to pointer
//! input, and shades every surface point with an analytic ambient-occlusion
//! approximation summed over the whole swarm, with no rays traced.
//!
//! Rendering, windowing, and picking stay outside: the crate computes, the
//! collaborators draw.
//!
//! ## Quick Start
//!
//! ```ignore
//! use shoal::prelude::*;
//!
//! fn main() -> Result<(), SetupError> {
//!     let mut driver = Simulation::new()
//!         .with_body_count(300)
//!         .with_shading_capacity(renderer.max_shading_slots())
//!         .build()?;
//!
//!     renderer.run(move |raycaster| {
//!         driver.tick(raycaster.plane_hit(driver.pointer_ndc()));
//!
//!         for body in driver.bodies() {
//!             renderer.submit(body.model_matrix());
//!         }
//!         renderer.bind_occlusion_inputs(driver.shading_inputs().slots());
//!         renderer.set_clear_color(driver.theme().clear_color());
//!     });
//!     Ok(())
//! }
//! ```
//!
//! ## Core Concepts
//!
//! ### Bodies and the swarm
//!
//! A [`Body`] is one sphere: a steered position and smoothed velocity, a
//! fixed size in `[5, 30]` chosen at spawn, and a cosmetic spin. The
//! [`Swarm`](swarm::Swarm) keeps them in a fixed index order and derives the
//! centroid plus the per-frame shading arrays.
//!
//! ### Steering
//!
//! Each tick blends, per body: seeking toward two time-varying targets,
//! cohesion toward the previous frame's centroid, soft pairwise overlap
//! repulsion (an `O(N²/2)` index-ordered pass), and a one-frame inverse-square
//! pointer repulsor. The blend is damped into the body's velocity by an
//! exponential filter, which is what gives the swarm its inertia.
//!
//! ### Occlusion shading
//!
//! For any surface point and normal, [`occlusion::shade`] averages one
//! analytic contribution per body: closer, larger, more normal-aligned
//! bodies darken more. A [`Theme`](occlusion::Theme) remaps the mean for a
//! light (darkening) or dark (bloom) presentation.
//!
//! ### External collaborators
//!
//! The rendering side reports its shading-input capacity (the body count is
//! clamped to it, less [`RESERVED_SLOTS`](simulation::RESERVED_SLOTS)),
//! receives model matrices and packed `vec4(position, weight)` slots each
//! frame, and positions its camera at [`FrameDriver::camera_eye`]. The input
//! side feeds pointer moves, clicks, and the pointer's ray/plane intersection
//! into the driver.

pub mod body;
pub mod driver;
pub mod error;
pub mod input;
pub mod occlusion;
pub mod simulation;
pub mod snapshot;
pub mod spawn;
pub mod steering;
pub mod swarm;
pub mod target;
pub mod time;

pub use body::{Body, MAX_SCALE, MIN_SCALE};
pub use bytemuck;
pub use driver::FrameDriver;
pub use error::SetupError;
pub use glam::{Quat, Vec2, Vec3, Vec4};
pub use input::{Pointer, RepulsionMarker, RepulsionTracker};
pub use occlusion::Theme;
pub use simulation::Simulation;
pub use snapshot::{BodySlot, ShadingBuffers, ShadingInputs};
pub use spawn::SpawnContext;
pub use steering::{Influences, SteeringParams};
pub use swarm::Swarm;
pub use target::{TargetPath, TargetState};
pub use time::Clock;

/// Convenient re-exports for common usage.
///
/// ```ignore
/// use shoal::prelude::*;
/// ```
pub mod prelude {
    pub use crate::body::Body;
    pub use crate::driver::FrameDriver;
    pub use crate::error::SetupError;
    pub use crate::occlusion::{self, Theme};
    pub use crate::simulation::Simulation;
    pub use crate::snapshot::ShadingInputs;
    pub use crate::spawn::SpawnContext;
    pub use crate::steering::{Influences, SteeringParams};
    pub use crate::target::TargetPath;
    pub use crate::time::Clock;
    pub use crate::{Vec2, Vec3, Vec4};
}
