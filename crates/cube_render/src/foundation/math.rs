//! Math utilities and types
//!
//! Provides the fundamental math types for the transform pipeline. All
//! matrices follow the column-vector convention: transforms compose
//! right to left, so `T * R` rotates a vertex before translating it.

pub use nalgebra::{Matrix4, Vector2, Vector3, Vector4};

/// 2D vector type
pub type Vec2 = Vector2<f32>;

/// 3D vector type
pub type Vec3 = Vector3<f32>;

/// 4D vector type
pub type Vec4 = Vector4<f32>;

/// 4x4 matrix type
pub type Mat4 = Matrix4<f32>;

/// 3D point type
pub type Point3 = nalgebra::Point3<f32>;

/// Math constants
pub mod constants {
    /// Pi constant
    pub const PI: f32 = std::f32::consts::PI;

    /// 2 * Pi
    pub const TAU: f32 = 2.0 * PI;

    /// Degrees to radians conversion factor
    pub const DEG_TO_RAD: f32 = PI / 180.0;
}

/// Math utility functions
pub mod utils {
    use super::constants;

    /// Convert degrees to radians
    pub fn deg_to_rad(degrees: f32) -> f32 {
        degrees * constants::DEG_TO_RAD
    }
}

/// Extension trait for Mat4 with the transforms the renderer composes
pub trait Mat4Ext {
    /// Create a rotation matrix around the Y axis
    fn rotation_y(angle: f32) -> Mat4;

    /// Create a translation matrix
    fn translation(x: f32, y: f32, z: f32) -> Mat4;

    /// Create an OpenGL-convention perspective projection matrix
    ///
    /// Maps camera space into clip space with depth in `[-1, 1]`, the
    /// convention the fixed GL pipeline expects. The Vulkan-style
    /// `[0, 1]` depth mapping is deliberately not used here.
    fn perspective_gl(fov_y_radians: f32, aspect: f32, near: f32, far: f32) -> Mat4;
}

impl Mat4Ext for Mat4 {
    fn rotation_y(angle: f32) -> Mat4 {
        Mat4::from_axis_angle(&Vec3::y_axis(), angle)
    }

    fn translation(x: f32, y: f32, z: f32) -> Mat4 {
        Mat4::new_translation(&Vec3::new(x, y, z))
    }

    fn perspective_gl(fov_y_radians: f32, aspect: f32, near: f32, far: f32) -> Mat4 {
        // Standard perspective formula:
        // [ f/aspect  0    0                         0                       ]
        // [ 0         f    0                         0                       ]
        // [ 0         0    (far+near)/(near-far)     2*far*near/(near-far)   ]
        // [ 0         0    -1                        0                       ]
        // where f = 1 / tan(fov_y / 2).
        Mat4::new_perspective(aspect, fov_y_radians, near, far)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn perspective_matches_closed_form() {
        // fov 90 degrees, aspect 3/2, near 0.1, far 100.0
        let fov = utils::deg_to_rad(90.0);
        let m = Mat4::perspective_gl(fov, 1.5, 0.1, 100.0);

        let f = 1.0 / (fov * 0.5).tan();
        assert_relative_eq!(m[(0, 0)], f / 1.5, epsilon = 1e-5);
        assert_relative_eq!(m[(1, 1)], f, epsilon = 1e-5);
        assert_relative_eq!(m[(2, 2)], (100.0 + 0.1) / (0.1 - 100.0), epsilon = 1e-5);
        assert_relative_eq!(m[(2, 3)], 2.0 * 100.0 * 0.1 / (0.1 - 100.0), epsilon = 1e-5);
        assert_relative_eq!(m[(3, 2)], -1.0, epsilon = 1e-5);
        assert_relative_eq!(m[(3, 3)], 0.0, epsilon = 1e-5);
    }

    #[test]
    fn zero_rotation_composes_to_translation_alone() {
        let t = Mat4::translation(0.0, 0.0, -2.0);
        let composed = t * Mat4::rotation_y(0.0);
        assert_relative_eq!(composed, t, epsilon = 1e-6);
    }

    #[test]
    fn quarter_turn_maps_x_to_minus_z() {
        // A 90 degree turn about Y sends (x, y, z) to (z, y, -x).
        let r = Mat4::rotation_y(std::f32::consts::FRAC_PI_2);
        let p = r.transform_point(&Point3::new(1.0, 0.0, 0.0));
        assert_relative_eq!(p.x, 0.0, epsilon = 1e-6);
        assert_relative_eq!(p.y, 0.0, epsilon = 1e-6);
        assert_relative_eq!(p.z, -1.0, epsilon = 1e-6);
    }
}
