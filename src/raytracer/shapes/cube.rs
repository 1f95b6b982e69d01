//! Axis-aligned unit cube, corners at (-1,-1,-1) and (1,1,1).

use crate::raytracer::linalg::{Vec4, EPSILON};
use crate::raytracer::ray::{Intersections, Ray};

const LARGE: f32 = 1e9;

fn check_axis(origin: f32, direction: f32) -> (f32, f32) {
    let (tmin_numerator, tmax_numerator) = (-1.0 - origin, 1.0 - origin);

    let (tmin, tmax) = if direction.abs() >= EPSILON {
        (tmin_numerator / direction, tmax_numerator / direction)
    } else {
        (tmin_numerator * LARGE, tmax_numerator * LARGE)
    };

    if tmin > tmax {
        (tmax, tmin)
    } else {
        (tmin, tmax)
    }
}

pub fn intersect(ray: &Ray, shape_index: usize, out: &mut Intersections) {
    let (xtmin, xtmax) = check_axis(ray.origin.x(), ray.direction.x());
    let (ytmin, ytmax) = check_axis(ray.origin.y(), ray.direction.y());
    let (ztmin, ztmax) = check_axis(ray.origin.z(), ray.direction.z());

    let tmin = xtmin.max(ytmin).max(ztmin);
    let tmax = xtmax.min(ytmax).min(ztmax);

    if tmin <= tmax {
        out.add(tmin, shape_index);
        out.add(tmax, shape_index);
    }
}

pub fn normal_at(p: Vec4) -> Vec4 {
    let (ax, ay, az) = (p.x().abs(), p.y().abs(), p.z().abs());
    let maxc = ax.max(ay).max(az);

    if maxc == ax {
        Vec4::vector(p.x(), 0.0, 0.0)
    } else if maxc == ay {
        Vec4::vector(0.0, p.y(), 0.0)
    } else {
        Vec4::vector(0.0, 0.0, p.z())
    }
}
