//! Shared shading-input arrays.
//!
//! The steering pass publishes every body's position and occlusion weight
//! (`scale²`) into a pair of lock-step arrays once per frame. The occlusion
//! model (and, through [`ShadingInputs::slots`], an external shading stage)
//! only ever reads a finalized snapshot: the driver fills the back buffer of
//! a [`ShadingBuffers`] after all bodies have integrated, then swaps it in.
//! A partially-updated frame is never observable.

use crate::body::Body;
use crate::Vec3;
use bytemuck::{Pod, Zeroable};

/// One packed shading slot: `vec4(position, weight)`.
///
/// `#[repr(C)]` and `Pod` so a `&[BodySlot]` can be handed to a GPU upload
/// path via `bytemuck::cast_slice` without copying.
#[repr(C)]
#[derive(Debug, Copy, Clone, PartialEq, Pod, Zeroable)]
pub struct BodySlot {
    pub position: [f32; 3],
    pub weight: f32,
}

/// Positions and occlusion weights of every body, in swarm order.
#[derive(Debug, Clone, Default)]
pub struct ShadingInputs {
    positions: Vec<Vec3>,
    weights: Vec<f32>,
}

impl ShadingInputs {
    /// Create empty inputs with room for `capacity` bodies.
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            positions: Vec::with_capacity(capacity),
            weights: Vec::with_capacity(capacity),
        }
    }

    /// Number of bodies represented.
    #[inline]
    pub fn len(&self) -> usize {
        self.positions.len()
    }

    /// True when no bodies have been published.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.positions.is_empty()
    }

    /// Body positions, in swarm order.
    #[inline]
    pub fn positions(&self) -> &[Vec3] {
        &self.positions
    }

    /// Occlusion weights (`scale²`), index-aligned with [`positions`](Self::positions).
    #[inline]
    pub fn weights(&self) -> &[f32] {
        &self.weights
    }

    /// Iterate positions and weights together.
    pub fn iter(&self) -> impl Iterator<Item = (Vec3, f32)> + '_ {
        self.positions
            .iter()
            .copied()
            .zip(self.weights.iter().copied())
    }

    /// Rebuild both arrays from the swarm bodies.
    pub fn fill(&mut self, bodies: &[Body]) {
        self.positions.clear();
        self.weights.clear();
        for body in bodies {
            self.positions.push(body.position);
            self.weights.push(body.weight());
        }
    }

    /// Packed `vec4(position, weight)` slots for GPU binding.
    pub fn slots(&self) -> Vec<BodySlot> {
        self.iter()
            .map(|(position, weight)| BodySlot {
                position: position.to_array(),
                weight,
            })
            .collect()
    }
}

/// Double-buffered shading inputs.
///
/// The steering pass writes the back buffer; [`publish`](Self::publish) swaps
/// it to the front, which is what shading and the render collaborator read.
#[derive(Debug, Clone, Default)]
pub struct ShadingBuffers {
    front: ShadingInputs,
    back: ShadingInputs,
}

impl ShadingBuffers {
    /// Create buffers with room for `capacity` bodies on both sides.
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            front: ShadingInputs::with_capacity(capacity),
            back: ShadingInputs::with_capacity(capacity),
        }
    }

    /// The snapshot readers see.
    #[inline]
    pub fn front(&self) -> &ShadingInputs {
        &self.front
    }

    /// The buffer the current frame writes into.
    #[inline]
    pub fn back_mut(&mut self) -> &mut ShadingInputs {
        &mut self.back
    }

    /// Swap the finished back buffer to the front.
    pub fn publish(&mut self) {
        std::mem::swap(&mut self.front, &mut self.back);
    }
}
