//! Precomputed shading context for a chosen hit, including the refractive
//! index stack walk that supplies `n1`/`n2` for Snell's law.

use super::linalg::{Vec4, EPSILON};
use super::material::Material;
use super::ray::{Intersection, Intersections, Ray};
use super::shapes::Shape;

#[derive(Clone, Debug)]
pub struct HitContext {
    pub t: f32,
    pub shape_index: usize,
    pub material: Material,
    pub point: Vec4,
    pub eye_v: Vec4,
    pub normal_v: Vec4,
    pub inside: bool,
    pub over_point: Vec4,
    pub under_point: Vec4,
    pub reflect_v: Vec4,
    pub n1: f32,
    pub n2: f32,
}

/// Walks `xs` in t-order, tracking which shapes the ray is currently
/// "inside" of, to find the refractive indices on either side of `hit`.
///
/// Reads the index of refraction off the top of `containers`, the stack
/// this walk is building — the obviously-intended reading, and the one the
/// nested-refraction vectors below assume. See [`xs_last_refractive_indices`]
/// for the source's literal `xs.last()` reading, which this deliberately
/// does not use here.
fn refractive_indices(hit: Intersection, xs: &Intersections, shapes: &[Shape]) -> (f32, f32) {
    let mut containers = Intersections::new();
    let mut n1 = 1.0;
    let mut n2 = 1.0;

    for check in xs.as_slice() {
        let is_hit = *check == hit;

        if is_hit {
            n1 = match containers.last() {
                None => 1.0,
                Some(top) => shapes[top.shape_index].material.refractive_index,
            };
        }

        if let Some(idx) = containers.index_of(*check) {
            containers.remove(idx);
        } else {
            containers.add(check.t, check.shape_index);
        }

        if is_hit {
            n2 = match containers.last() {
                None => 1.0,
                Some(top) => shapes[top.shape_index].material.refractive_index,
            };
            break;
        }
    }

    (n1, n2)
}

/// The source's literal reading: at each hit, the index of refraction comes
/// from `shapes[xs.last().obj]`, the highest-`t` entry of the *whole*
/// intersection list, not the top of `containers`. Since `xs` is one fixed
/// list for the whole walk, this reduces to a constant lookup per call —
/// kept here, unused by `prepare_comps`, purely so the quirk is named and
/// visible rather than silently dropped. See the design notes.
#[allow(dead_code)]
fn xs_last_refractive_indices(hit: Intersection, xs: &Intersections, shapes: &[Shape]) -> (f32, f32) {
    let mut containers = Intersections::new();
    let mut n1 = 1.0;
    let mut n2 = 1.0;
    let last_shape = xs.last().map(|h| h.shape_index);

    for check in xs.as_slice() {
        let is_hit = *check == hit;

        if is_hit {
            n1 = match containers.last() {
                None => 1.0,
                Some(_) => shapes[last_shape.unwrap()].material.refractive_index,
            };
        }

        if let Some(idx) = containers.index_of(*check) {
            containers.remove(idx);
        } else {
            containers.add(check.t, check.shape_index);
        }

        if is_hit {
            n2 = match containers.last() {
                None => 1.0,
                Some(_) => shapes[last_shape.unwrap()].material.refractive_index,
            };
            break;
        }
    }

    (n1, n2)
}

pub fn prepare_comps(hit: Intersection, ray: &Ray, xs: &Intersections, shapes: &[Shape]) -> HitContext {
    let shape = &shapes[hit.shape_index];
    let t = hit.t;
    let point = ray.position(t);
    let eye_v = -ray.direction;
    let mut normal_v = shape.normal_at(point);

    let inside = normal_v.dot(&eye_v) < 0.0;
    if inside {
        normal_v = -normal_v;
    }

    let over_point = point + normal_v * EPSILON;
    let under_point = point - normal_v * EPSILON;
    let reflect_v = ray.direction.reflect(&normal_v);

    let (n1, n2) = refractive_indices(hit, xs, shapes);

    HitContext {
        t,
        shape_index: hit.shape_index,
        material: shape.material.clone(),
        point,
        eye_v,
        normal_v,
        inside,
        over_point,
        under_point,
        reflect_v,
        n1,
        n2,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::raytracer::linalg::Mat4;
    use crate::raytracer::material::Material;
    use crate::raytracer::shapes::ShapeKind;
    use approx::assert_abs_diff_eq;

    fn glass_sphere(refractive_index: f32, index: usize) -> Shape {
        let mut material = Material::default();
        material.transparency = 1.0;
        material.refractive_index = refractive_index;
        Shape::new(ShapeKind::Sphere, Mat4::identity(), material, index)
    }

    #[test]
    fn precomputing_the_state_of_an_intersection() {
        let r = Ray::new(Vec4::point(0.0, 0.0, -5.0), Vec4::vector(0.0, 0.0, 1.0));
        let shapes = vec![Shape::new(ShapeKind::Sphere, Mat4::identity(), Material::default(), 0)];
        let hit = Intersection { t: 4.0, shape_index: 0 };
        let mut xs = Intersections::new();
        xs.add(4.0, 0);
        let comps = prepare_comps(hit, &r, &xs, &shapes);
        assert_abs_diff_eq!(comps.point, Vec4::point(0.0, 0.0, -1.0));
        assert_abs_diff_eq!(comps.eye_v, Vec4::vector(0.0, 0.0, -1.0));
        assert_abs_diff_eq!(comps.normal_v, Vec4::vector(0.0, 0.0, -1.0));
        assert!(!comps.inside);
    }

    #[test]
    fn the_hit_when_an_intersection_occurs_on_the_inside() {
        let r = Ray::new(Vec4::point(0.0, 0.0, 0.0), Vec4::vector(0.0, 0.0, 1.0));
        let shapes = vec![Shape::new(ShapeKind::Sphere, Mat4::identity(), Material::default(), 0)];
        let hit = Intersection { t: 1.0, shape_index: 0 };
        let mut xs = Intersections::new();
        xs.add(1.0, 0);
        let comps = prepare_comps(hit, &r, &xs, &shapes);
        assert_abs_diff_eq!(comps.point, Vec4::point(0.0, 0.0, 1.0));
        assert!(comps.inside);
        assert_abs_diff_eq!(comps.normal_v, Vec4::vector(0.0, 0.0, -1.0));
    }

    #[test]
    fn finding_n1_and_n2_at_various_intersections() {
        let shapes = vec![
            glass_sphere(1.5, 0),
            glass_sphere(2.0, 1),
            glass_sphere(2.5, 2),
        ];
        let r = Ray::new(Vec4::point(0.0, 0.0, -4.0), Vec4::vector(0.0, 0.0, 1.0));
        let mut xs = Intersections::new();
        for (t, idx) in [(2.0, 0usize), (2.75, 1), (3.25, 2), (4.75, 1), (5.25, 2), (6.0, 0)] {
            xs.add(t, idx);
        }
        let expected = [
            (1.0, 1.5),
            (1.5, 2.0),
            (2.0, 2.5),
            (2.5, 2.5),
            (2.5, 1.5),
            (1.5, 1.0),
        ];
        for (i, (en1, en2)) in expected.iter().enumerate() {
            let hit = xs.as_slice()[i];
            let comps = prepare_comps(hit, &r, &xs, &shapes);
            assert_abs_diff_eq!(comps.n1, *en1, epsilon = 1e-5);
            assert_abs_diff_eq!(comps.n2, *en2, epsilon = 1e-5);
        }
    }

    #[test]
    fn the_literal_xs_last_reading_collapses_to_a_constant_lookup() {
        let shapes = vec![
            glass_sphere(1.5, 0),
            glass_sphere(2.0, 1),
            glass_sphere(2.5, 2),
        ];
        let mut xs = Intersections::new();
        for (t, idx) in [(2.0, 0usize), (2.75, 1), (3.25, 2), (4.75, 1), (5.25, 2), (6.0, 0)] {
            xs.add(t, idx);
        }
        // every non-trivial lookup reads shapes[xs.last().obj], i.e. shape 0
        // (t=6.0), regardless of which hit or container-stack state it's at.
        for i in 1..xs.len() {
            let hit = xs.as_slice()[i];
            let (n1, n2) = xs_last_refractive_indices(hit, &xs, &shapes);
            assert_abs_diff_eq!(n1, 1.5, epsilon = 1e-5);
            assert_abs_diff_eq!(n2, 1.5, epsilon = 1e-5);
        }
    }
}
