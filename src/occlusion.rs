//! Analytic occlusion shading.
//!
//! For a surface point and outward normal, every body in the swarm
//! contributes one sample: bodies that are closer, larger, and more aligned
//! with the normal pull the sample below 1, and the mean over all bodies
//! approximates contact shadowing without tracing a single ray. The body the
//! point belongs to is summed like any other; at typical scale/distance
//! ratios its self term is negligible and it is not special-cased.
//!
//! The raw mean is then remapped per [`Theme`]: the light theme compresses
//! it so only strongly occluded points darken, the dark theme inverts and
//! amplifies it into an emissive-looking bloom.
//!
//! Every vertex is shaded independently from the same finalized
//! [`ShadingInputs`] snapshot, so the evaluation is safe to fan out across
//! any parallel substrate.

use crate::snapshot::ShadingInputs;
use crate::{Vec3, Vec4};

/// Binary presentation mode altering the occlusion-to-brightness mapping.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Theme {
    /// White background; occlusion darkens.
    #[default]
    Light,
    /// Black background; low occlusion glows.
    Dark,
}

impl Theme {
    /// Flip to the other theme.
    pub fn toggle(&mut self) {
        *self = self.toggled();
    }

    /// The other theme.
    pub fn toggled(self) -> Theme {
        match self {
            Theme::Light => Theme::Dark,
            Theme::Dark => Theme::Light,
        }
    }

    /// Shader-facing flag: 0 for light, 1 for dark.
    pub fn flag(self) -> u32 {
        match self {
            Theme::Light => 0,
            Theme::Dark => 1,
        }
    }

    /// Clear color the rendering collaborator should use.
    pub fn clear_color(self) -> Vec4 {
        match self {
            Theme::Light => Vec4::new(1.0, 1.0, 1.0, 1.0),
            Theme::Dark => Vec4::new(0.0, 0.0, 0.0, 1.0),
        }
    }

    /// Color for the pointer marker, contrasting with the background.
    pub fn marker_color(self) -> Vec4 {
        match self {
            Theme::Light => Vec4::new(0.0, 0.0, 0.0, 1.0),
            Theme::Dark => Vec4::new(1.0, 1.0, 1.0, 1.0),
        }
    }

    /// Remap a raw occlusion mean into a brightness value.
    ///
    /// Light: `clamp(o*4 - 3, 0, 1)`, so only strong occlusion darkens.
    /// Dark: `(1 - clamp(o, 0, 1)) * 20 + 0.25`, inverted and amplified into
    /// the `[0.25, 20.25]` range for bloom-style rendering.
    pub fn remap(self, occlusion: f32) -> f32 {
        match self {
            Theme::Light => (occlusion * 4.0 - 3.0).clamp(0.0, 1.0),
            Theme::Dark => (1.0 - occlusion.clamp(0.0, 1.0)) * 20.0 + 0.25,
        }
    }
}

/// Raw occlusion mean at a surface point.
///
/// ```text
/// occlusion = (1/N) * Σ_k [ 1 - max(0, dot(n, d̂_k)) * w_k / |d_k|² ]
/// ```
///
/// where `d_k` runs from the point to body `k` and `w_k` is its weight
/// (`scale²`). An empty snapshot or a body coincident with the point
/// contributes a fully open sample instead of a NaN.
pub fn occlusion(point: Vec3, normal: Vec3, inputs: &ShadingInputs) -> f32 {
    if inputs.is_empty() {
        return 1.0;
    }

    let mut sum = 0.0;
    for (body_position, weight) in inputs.iter() {
        let dir = body_position - point;
        let dist_sq = dir.length_squared();
        if dist_sq <= f32::EPSILON {
            sum += 1.0;
            continue;
        }
        let facing = normal.dot(dir / dist_sq.sqrt()).max(0.0);
        sum += 1.0 - facing * weight / dist_sq;
    }

    sum / inputs.len() as f32
}

/// Theme-remapped occlusion at a surface point.
pub fn shade(point: Vec3, normal: Vec3, inputs: &ShadingInputs, theme: Theme) -> f32 {
    theme.remap(occlusion(point, normal, inputs))
}

/// Grayscale shading output: the remapped value in all three color channels,
/// alpha 1.
pub fn shade_rgba(point: Vec3, normal: Vec3, inputs: &ShadingInputs, theme: Theme) -> Vec4 {
    let value = shade(point, normal, inputs, theme);
    Vec4::new(value, value, value, 1.0)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::body::Body;

    fn inputs_for(bodies: &[Body]) -> ShadingInputs {
        let mut inputs = ShadingInputs::with_capacity(bodies.len());
        inputs.fill(bodies);
        inputs
    }

    #[test]
    fn test_single_occluder_exact_value() {
        // One occluder straight along the normal: dot(n, d̂) = 1, r = 10,
        // w = 100 ⇒ raw sample 1 - 100/100 = 0, light pre-clamp -3 ⇒ 0.
        let bodies = vec![Body::new(Vec3::new(0.0, 10.0, 0.0), 10.0)];
        let inputs = inputs_for(&bodies);

        let raw = occlusion(Vec3::ZERO, Vec3::Y, &inputs);
        assert!(raw.abs() < 1e-6);

        let pre_clamp = raw * 4.0 - 3.0;
        assert!((pre_clamp - (-3.0)).abs() < 1e-5);
        assert_eq!(shade(Vec3::ZERO, Vec3::Y, &inputs, Theme::Light), 0.0);
    }

    #[test]
    fn test_occluder_behind_normal_is_open() {
        // Facing term clamps at zero for bodies behind the surface.
        let bodies = vec![Body::new(Vec3::new(0.0, -10.0, 0.0), 10.0)];
        let inputs = inputs_for(&bodies);
        assert!((occlusion(Vec3::ZERO, Vec3::Y, &inputs) - 1.0).abs() < 1e-6);
    }

    #[test]
    fn test_closer_occluder_darkens_more() {
        let near = inputs_for(&[Body::new(Vec3::new(0.0, 12.0, 0.0), 8.0)]);
        let far = inputs_for(&[Body::new(Vec3::new(0.0, 40.0, 0.0), 8.0)]);

        let near_occ = occlusion(Vec3::ZERO, Vec3::Y, &near);
        let far_occ = occlusion(Vec3::ZERO, Vec3::Y, &far);
        assert!(near_occ < far_occ);
    }

    #[test]
    fn test_light_theme_output_range() {
        let bodies: Vec<Body> = (0..12)
            .map(|i| Body::new(Vec3::new(i as f32 * 7.0 - 40.0, 10.0, 3.0), 5.0 + i as f32))
            .collect();
        let inputs = inputs_for(&bodies);

        for i in 0..50 {
            let p = Vec3::new(i as f32 - 25.0, 0.0, 0.0);
            let value = shade(p, Vec3::Y, &inputs, Theme::Light);
            assert!((0.0..=1.0).contains(&value));
        }
    }

    #[test]
    fn test_dark_theme_output_range() {
        let bodies: Vec<Body> = (0..12)
            .map(|i| Body::new(Vec3::new(i as f32 * 7.0 - 40.0, 10.0, 3.0), 5.0 + i as f32))
            .collect();
        let inputs = inputs_for(&bodies);

        for i in 0..50 {
            let p = Vec3::new(i as f32 - 25.0, 0.0, 0.0);
            let value = shade(p, Vec3::Y, &inputs, Theme::Dark);
            assert!((0.25..=20.25).contains(&value));
        }
    }

    #[test]
    fn test_degenerate_point_on_body_center() {
        let bodies = vec![Body::new(Vec3::ZERO, 10.0)];
        let inputs = inputs_for(&bodies);
        let value = occlusion(Vec3::ZERO, Vec3::Y, &inputs);
        assert!(value.is_finite());
        assert!((value - 1.0).abs() < 1e-6);
    }

    #[test]
    fn test_shade_rgba_is_grayscale_opaque() {
        let bodies = vec![Body::new(Vec3::new(0.0, 20.0, 0.0), 10.0)];
        let inputs = inputs_for(&bodies);
        let rgba = shade_rgba(Vec3::ZERO, Vec3::Y, &inputs, Theme::Dark);
        assert_eq!(rgba.x, rgba.y);
        assert_eq!(rgba.y, rgba.z);
        assert_eq!(rgba.w, 1.0);
    }

    #[test]
    fn test_theme_toggle_round_trips() {
        let mut theme = Theme::Light;
        assert_eq!(theme.flag(), 0);
        theme.toggle();
        assert_eq!(theme, Theme::Dark);
        assert_eq!(theme.flag(), 1);
        assert_eq!(theme.clear_color().x, 0.0);
        assert_eq!(theme.marker_color().x, 1.0);
        theme.toggle();
        assert_eq!(theme, Theme::Light);
    }
}
