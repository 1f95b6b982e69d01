//! Unit sphere (radius 1, centered at the object-space origin).

use crate::raytracer::linalg::Vec4;
use crate::raytracer::ray::{Intersections, Ray};

pub fn intersect(ray: &Ray, shape_index: usize, out: &mut Intersections) {
    let sphere_to_ray = ray.origin - Vec4::point(0.0, 0.0, 0.0);

    let a = ray.direction.dot(&ray.direction);
    let b = 2.0 * ray.direction.dot(&sphere_to_ray);
    let c = sphere_to_ray.dot(&sphere_to_ray) - 1.0;

    let discriminant = b * b - 4.0 * a * c;
    if discriminant < 0.0 {
        return;
    }

    let sqrt_d = discriminant.sqrt();
    out.add((-b - sqrt_d) / (2.0 * a), shape_index);
    out.add((-b + sqrt_d) / (2.0 * a), shape_index);
}

pub fn normal_at(object_point: Vec4) -> Vec4 {
    object_point - Vec4::point(0.0, 0.0, 0.0)
}
