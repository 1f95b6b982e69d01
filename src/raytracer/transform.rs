//! Transform-matrix builders used to construct camera and shape transforms.
//!
//! Not part of the GPU-ported core (the shader only ever consumes an
//! already-built `transform_inverse`), but this is where that matrix comes
//! from on the host side, so it lives alongside the rest of the linear
//! algebra leaf.

use super::linalg::{Mat4, Vec4};

pub fn translation(x: f32, y: f32, z: f32) -> Mat4 {
    Mat4::from_rows([
        [1.0, 0.0, 0.0, x],
        [0.0, 1.0, 0.0, y],
        [0.0, 0.0, 1.0, z],
        [0.0, 0.0, 0.0, 1.0],
    ])
}

pub fn scaling(x: f32, y: f32, z: f32) -> Mat4 {
    Mat4::from_rows([
        [x, 0.0, 0.0, 0.0],
        [0.0, y, 0.0, 0.0],
        [0.0, 0.0, z, 0.0],
        [0.0, 0.0, 0.0, 1.0],
    ])
}

pub fn rotation_x(radians: f32) -> Mat4 {
    let (s, c) = radians.sin_cos();
    Mat4::from_rows([
        [1.0, 0.0, 0.0, 0.0],
        [0.0, c, -s, 0.0],
        [0.0, s, c, 0.0],
        [0.0, 0.0, 0.0, 1.0],
    ])
}

pub fn rotation_y(radians: f32) -> Mat4 {
    let (s, c) = radians.sin_cos();
    Mat4::from_rows([
        [c, 0.0, s, 0.0],
        [0.0, 1.0, 0.0, 0.0],
        [-s, 0.0, c, 0.0],
        [0.0, 0.0, 0.0, 1.0],
    ])
}

pub fn rotation_z(radians: f32) -> Mat4 {
    let (s, c) = radians.sin_cos();
    Mat4::from_rows([
        [c, -s, 0.0, 0.0],
        [s, c, 0.0, 0.0],
        [0.0, 0.0, 1.0, 0.0],
        [0.0, 0.0, 0.0, 1.0],
    ])
}

#[allow(clippy::too_many_arguments)]
pub fn shearing(xy: f32, xz: f32, yx: f32, yz: f32, zx: f32, zy: f32) -> Mat4 {
    Mat4::from_rows([
        [1.0, xy, xz, 0.0],
        [yx, 1.0, yz, 0.0],
        [zx, zy, 1.0, 0.0],
        [0.0, 0.0, 0.0, 1.0],
    ])
}

/// Builds a world-to-camera matrix from an eye point, a point the camera
/// looks at, and an "up" direction hint. Gram-Schmidt-orthogonalizes `up`
/// against the forward direction so a not-quite-vertical `up` still works.
pub fn view_transform(from: Vec4, to: Vec4, up: Vec4) -> Mat4 {
    let forward = (to - from).normalize();
    let upn = up.normalize();
    let left = forward.cross(&upn).normalize();
    let true_up = left.cross(&forward);

    let orientation = Mat4::from_rows([
        [left.x(), left.y(), left.z(), 0.0],
        [true_up.x(), true_up.y(), true_up.z(), 0.0],
        [-forward.x(), -forward.y(), -forward.z(), 0.0],
        [0.0, 0.0, 0.0, 1.0],
    ]);

    orientation * translation(-from.x(), -from.y(), -from.z())
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;
    use std::f32::consts::PI;

    #[test]
    fn multiplying_by_a_translation_matrix() {
        let transform = translation(5.0, -3.0, 2.0);
        let p = Vec4::point(-3.0, 4.0, 5.0);
        assert_abs_diff_eq!(transform * p, Vec4::point(2.0, 1.0, 7.0));
    }

    #[test]
    fn multiplying_by_the_inverse_of_a_translation_matrix() {
        let transform = translation(5.0, -3.0, 2.0);
        let inv = transform.try_inverse().unwrap();
        let p = Vec4::point(-3.0, 4.0, 5.0);
        assert_abs_diff_eq!(inv * p, Vec4::point(-8.0, 7.0, 3.0));
    }

    #[test]
    fn a_scaling_matrix_applied_to_a_vector() {
        let transform = scaling(2.0, 3.0, 4.0);
        let v = Vec4::vector(-4.0, 6.0, 8.0);
        assert_abs_diff_eq!(transform * v, Vec4::vector(-8.0, 18.0, 32.0));
    }

    #[test]
    fn rotating_a_point_around_the_x_axis() {
        let p = Vec4::point(0.0, 1.0, 0.0);
        let half_quarter = rotation_x(PI / 4.0);
        let full_quarter = rotation_x(PI / 2.0);
        assert_abs_diff_eq!(
            half_quarter * p,
            Vec4::point(0.0, 2f32.sqrt() / 2.0, 2f32.sqrt() / 2.0),
            epsilon = 1e-5
        );
        assert_abs_diff_eq!(full_quarter * p, Vec4::point(0.0, 0.0, 1.0), epsilon = 1e-5);
    }

    #[test]
    fn a_shearing_transform_moves_x_in_proportion_to_y() {
        let transform = shearing(1.0, 0.0, 0.0, 0.0, 0.0, 0.0);
        let p = Vec4::point(2.0, 3.0, 4.0);
        assert_abs_diff_eq!(transform * p, Vec4::point(5.0, 3.0, 4.0));
    }

    #[test]
    fn the_view_transform_looking_in_positive_z_direction() {
        let from = Vec4::point(0.0, 0.0, 0.0);
        let to = Vec4::point(0.0, 0.0, 1.0);
        let up = Vec4::vector(0.0, 1.0, 0.0);
        let t = view_transform(from, to, up);
        assert_abs_diff_eq!(t, scaling(-1.0, 1.0, -1.0), epsilon = 1e-5);
    }

    #[test]
    fn an_arbitrary_view_transform() {
        let from = Vec4::point(1.0, 3.0, 2.0);
        let to = Vec4::point(4.0, -2.0, 8.0);
        let up = Vec4::vector(1.0, 1.0, 0.0);
        let t = view_transform(from, to, up);
        let expected = Mat4::from_rows([
            [-0.50709, 0.50709, 0.67612, -2.36643],
            [0.76772, 0.60609, 0.12122, -2.82843],
            [-0.35857, 0.59761, -0.71714, 0.0],
            [0.0, 0.0, 0.0, 1.0],
        ]);
        assert_abs_diff_eq!(t, expected, epsilon = 1e-4);
    }
}
