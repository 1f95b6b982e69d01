//! The xz plane (y = 0).

use crate::raytracer::linalg::{Vec4, EPSILON};
use crate::raytracer::ray::{Intersections, Ray};

/// The source guards with `abs(D.y) > 0`, which admits near-grazing rays
/// with vanishingly small slope and can emit an enormous `t`. Substituting
/// the EPSILON-guarded test here, as the source explicitly allows.
pub fn intersect(ray: &Ray, shape_index: usize, out: &mut Intersections) {
    if ray.direction.y().abs() > EPSILON {
        out.add(-ray.origin.y() / ray.direction.y(), shape_index);
    }
}

pub fn normal_at() -> Vec4 {
    Vec4::vector(0.0, 1.0, 0.0)
}
