//! Per-frame transform pipeline
//!
//! The projection matrix is computed once from configuration; the
//! model-view matrix is recomposed every frame from an accumulating
//! rotation angle. Composition order is a correctness contract:
//! `translate * rotate_y` spins the cube in place two units in front of
//! the camera, while the swapped order would make it orbit instead.

use crate::config::RendererConfig;
use crate::foundation::math::{utils, Mat4, Mat4Ext};

/// Projection and model-view matrix source for the render loop
///
/// The rotation angle only ever grows, by a fixed step per frame. The
/// step is frame-count-driven, so visual speed is coupled to the
/// display refresh rate.
#[derive(Debug, Clone)]
pub struct TransformPipeline {
    projection: Mat4,
    rotation_angle: f32,
    rotation_step: f32,
    object_distance: f32,
}

impl TransformPipeline {
    /// Build the pipeline, computing the projection matrix once
    pub fn new(config: &RendererConfig) -> Self {
        let p = &config.projection;
        let projection =
            Mat4::perspective_gl(utils::deg_to_rad(p.fov_degrees), p.aspect, p.near, p.far);

        Self {
            projection,
            rotation_angle: 0.0,
            rotation_step: config.rotation_step,
            object_distance: config.object_distance,
        }
    }

    /// The session-constant projection matrix
    pub fn projection(&self) -> &Mat4 {
        &self.projection
    }

    /// Model-view matrix for an arbitrary rotation angle
    ///
    /// `translate(0, 0, -distance) * rotate_y(angle)`: with column
    /// vectors the rotation applies to the vertex first, then the
    /// rotated cube is pushed away from the camera along -Z.
    pub fn model_view_at(&self, angle_radians: f32) -> Mat4 {
        Mat4::translation(0.0, 0.0, -self.object_distance) * Mat4::rotation_y(angle_radians)
    }

    /// Model-view matrix for the current rotation angle
    pub fn model_view(&self) -> Mat4 {
        self.model_view_at(self.rotation_angle)
    }

    /// Advance the rotation by one frame's fixed step
    pub fn advance(&mut self) {
        self.rotation_angle += self.rotation_step;
    }

    /// The accumulated rotation angle in radians
    pub fn rotation_angle(&self) -> f32 {
        self.rotation_angle
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::foundation::math::Point3;
    use approx::assert_relative_eq;

    fn pipeline() -> TransformPipeline {
        TransformPipeline::new(&RendererConfig::default())
    }

    #[test]
    fn projection_is_computed_once_from_config() {
        let p = pipeline();
        let expected = Mat4::perspective_gl(utils::deg_to_rad(90.0), 1.5, 0.1, 100.0);
        assert_relative_eq!(*p.projection(), expected, epsilon = 1e-6);
    }

    #[test]
    fn model_view_at_zero_is_translation_alone() {
        let p = pipeline();
        let expected = Mat4::translation(0.0, 0.0, -2.0);
        assert_relative_eq!(p.model_view_at(0.0), expected, epsilon = 1e-6);
    }

    #[test]
    fn quarter_turn_transforms_a_front_corner() {
        // Rotating (-0.5, -0.5, 0.5) a quarter turn about Y gives
        // (0.5, -0.5, 0.5); translating by (0, 0, -2) lands at
        // (0.5, -0.5, -1.5).
        let p = pipeline();
        let m = p.model_view_at(std::f32::consts::FRAC_PI_2);
        let out = m.transform_point(&Point3::new(-0.5, -0.5, 0.5));
        assert_relative_eq!(out.x, 0.5, epsilon = 1e-5);
        assert_relative_eq!(out.y, -0.5, epsilon = 1e-5);
        assert_relative_eq!(out.z, -1.5, epsilon = 1e-5);
    }

    #[test]
    fn rotation_order_spins_in_place_not_in_orbit() {
        // The cube's center must stay fixed at (0, 0, -2) for any angle.
        let p = pipeline();
        for angle in [0.0_f32, 0.4, 1.3, 2.9, 4.2] {
            let out = p.model_view_at(angle).transform_point(&Point3::origin());
            assert_relative_eq!(out.x, 0.0, epsilon = 1e-5);
            assert_relative_eq!(out.y, 0.0, epsilon = 1e-5);
            assert_relative_eq!(out.z, -2.0, epsilon = 1e-5);
        }
    }

    #[test]
    fn angle_accumulates_by_fixed_step() {
        let mut p = pipeline();
        for _ in 0..25 {
            p.advance();
        }
        assert_relative_eq!(p.rotation_angle(), 25.0 * 0.2, epsilon = 1e-5);
    }
}
