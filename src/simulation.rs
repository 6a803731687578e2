//! Simulation builder.
//!
//! Use method chaining to configure, then call `.build()` to get a
//! [`FrameDriver`]:
//!
//! ```ignore
//! let mut driver = Simulation::new()
//!     .with_body_count(300)
//!     .with_shading_capacity(renderer.max_shading_slots())
//!     .with_seed(42)
//!     .build()?;
//!
//! // In the render-loop callback:
//! driver.tick(raycaster.plane_hit(driver.pointer_ndc()));
//! ```

use crate::body::{Body, MAX_SCALE, MIN_SCALE};
use crate::driver::FrameDriver;
use crate::error::SetupError;
use crate::occlusion::Theme;
use crate::spawn::SpawnContext;
use crate::steering::SteeringParams;
use crate::swarm::Swarm;
use crate::target::TargetPath;

/// Shading slots reserved per draw for non-body uniforms (three 4×4
/// matrices plus the theme scalar). The body count is clamped so the
/// occlusion inputs and this overhead fit the collaborator's limit together.
pub const RESERVED_SLOTS: usize = 13;

/// Clamp a requested body count to the rendering collaborator's capacity.
pub fn clamp_body_count(requested: usize, shading_capacity: Option<usize>) -> usize {
    match shading_capacity {
        Some(limit) => requested.min(limit.saturating_sub(RESERVED_SLOTS)),
        None => requested,
    }
}

/// A swarm simulation builder.
pub struct Simulation {
    body_count: usize,
    shading_capacity: Option<usize>,
    spawn_radius: f32,
    scale_range: (f32, f32),
    seed: Option<u64>,
    params: SteeringParams,
    targets: TargetPath,
    theme: Theme,
    spawner: Option<Box<dyn Fn(&mut SpawnContext) -> Body>>,
}

impl Simulation {
    /// Create a simulation with default settings.
    pub fn new() -> Self {
        Self {
            body_count: 300,
            shading_capacity: None,
            spawn_radius: 50.0,
            scale_range: (MIN_SCALE, 25.0),
            seed: None,
            params: SteeringParams::default(),
            targets: TargetPath::default(),
            theme: Theme::default(),
            spawner: None,
        }
    }

    /// Set the requested number of bodies.
    ///
    /// The effective count may be lower once the shading capacity is applied.
    pub fn with_body_count(mut self, count: usize) -> Self {
        self.body_count = count;
        self
    }

    /// Set the rendering collaborator's shading-input limit.
    ///
    /// [`RESERVED_SLOTS`] are subtracted before clamping the body count.
    pub fn with_shading_capacity(mut self, limit: usize) -> Self {
        self.shading_capacity = Some(limit);
        self
    }

    /// Set the spherical-shell radius bodies are placed on.
    pub fn with_spawn_radius(mut self, radius: f32) -> Self {
        self.spawn_radius = radius;
        self
    }

    /// Set the half-open scale range bodies are drawn from.
    ///
    /// Must be non-empty and lie within `[MIN_SCALE, MAX_SCALE]`.
    pub fn with_scale_range(mut self, min: f32, max: f32) -> Self {
        self.scale_range = (min, max);
        self
    }

    /// Fix the placement seed for a reproducible run.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Override the steering parameters.
    pub fn with_steering(mut self, params: SteeringParams) -> Self {
        self.params = params;
        self
    }

    /// Override the target path configuration.
    pub fn with_targets(mut self, targets: TargetPath) -> Self {
        self.targets = targets;
        self
    }

    /// Set the initial theme.
    pub fn with_theme(mut self, theme: Theme) -> Self {
        self.theme = theme;
        self
    }

    /// Replace the default spawner.
    ///
    /// Called once per body with a seeded [`SpawnContext`].
    pub fn with_spawner<F>(mut self, spawner: F) -> Self
    where
        F: Fn(&mut SpawnContext) -> Body + 'static,
    {
        self.spawner = Some(Box::new(spawner));
        self
    }

    /// Spawn the swarm and build the frame driver.
    pub fn build(self) -> Result<FrameDriver, SetupError> {
        let (min_scale, max_scale) = self.scale_range;
        if !(min_scale < max_scale && min_scale >= MIN_SCALE && max_scale <= MAX_SCALE) {
            return Err(SetupError::InvalidScaleRange {
                min: min_scale,
                max: max_scale,
            });
        }

        let count = clamp_body_count(self.body_count, self.shading_capacity);
        if count == 0 {
            return Err(SetupError::NoBodies);
        }

        let seed = self.seed.unwrap_or_else(entropy_seed);

        let mut bodies = Vec::with_capacity(count);
        for index in 0..count {
            let mut ctx = SpawnContext::new(index, count, self.spawn_radius, seed);
            let body = match &self.spawner {
                Some(spawner) => spawner(&mut ctx),
                None => default_body(&mut ctx, self.scale_range),
            };
            bodies.push(body);
        }

        Ok(FrameDriver::new(
            Swarm::new(bodies),
            self.targets,
            self.params,
            self.theme,
        ))
    }
}

impl Default for Simulation {
    fn default() -> Self {
        Self::new()
    }
}

/// Default spawner: placement on the configured shell, random scale in the
/// configured range, random spin.
fn default_body(ctx: &mut SpawnContext, (min_scale, max_scale): (f32, f32)) -> Body {
    let position = ctx.on_placement_shell();
    let scale = ctx.random_range(min_scale, max_scale);
    Body::new(position, scale).with_spin(ctx.random_axis(), ctx.spin_rate(), ctx.spin_phase())
}

/// Seed for unseeded runs: different each execution.
fn entropy_seed() -> u64 {
    std::time::SystemTime::now()
        .duration_since(std::time::UNIX_EPOCH)
        .map(|d| d.as_nanos() as u64)
        .unwrap_or(42)
}
