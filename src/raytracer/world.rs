//! The scene itself, and the iterative ray-queue driver that replaces
//! recursive `color_at` (recursion doesn't exist on the GPU fragment path).

use super::color::Color;
use super::comps::prepare_comps;
use super::light::PointLight;
use super::linalg::EPSILON;
use super::queue::RayQueue;
use super::ray::{Intersections, Ray};
use super::shapes::Shape;

pub const MAX_REFLECT_REFRACT: usize = 10;

pub struct World {
    pub shapes: Vec<Shape>,
    pub lights: Vec<PointLight>,
}

impl World {
    pub fn new(shapes: Vec<Shape>, lights: Vec<PointLight>) -> Self {
        Self { shapes, lights }
    }

    pub fn intersect(&self, ray: &Ray, out: &mut Intersections) {
        for shape in &self.shapes {
            shape.intersect(ray, out);
        }
    }

    /// Surfaces with transparency are treated as opaque for shadow
    /// purposes — there is no light attenuation by translucent shapes here.
    pub fn is_shadowed(&self, light_position: super::linalg::Vec4, over_point: super::linalg::Vec4) -> bool {
        let point_to_light = light_position - over_point;
        let distance_squared = point_to_light.length_squared();
        let direction = point_to_light.normalize();

        let ray = Ray::new(over_point, direction);
        let mut xs = Intersections::new();
        self.intersect(&ray, &mut xs);

        xs.as_slice().iter().any(|h| h.t >= 0.0 && h.t * h.t < distance_squared)
    }

    /// Direct-illumination contribution only; reflection/refraction are
    /// handled externally by `colour_at`.
    pub fn shade_hit(&self, ctx: &super::comps::HitContext) -> Color {
        let shape = &self.shapes[ctx.shape_index];
        let mut color = Color::BLACK;
        for light in &self.lights {
            let in_shadow = self.is_shadowed(light.position, ctx.over_point);
            color += ctx.material.lighting(
                &shape.transform_inverse,
                light,
                ctx.over_point,
                ctx.eye_v,
                ctx.normal_v,
                in_shadow,
            );
        }
        color
    }

    /// The central driver: an explicit work queue standing in for recursive
    /// reflection/refraction, bounded by `MAX_REFLECT_REFRACT` total rays
    /// and `MAX_RAY_QUEUE` pending rays (the latter via `RayQueue` itself).
    /// Fresnel/Schlick blending is intentionally not modeled; reflective and
    /// refractive contributions scale independently by their own weights.
    ///
    /// `hits` is cleared only after a hit round, not at the top of every
    /// iteration — a miss round leaves stale intersections to be merged with
    /// the next queued ray's results. See the ledger for why this is kept.
    pub fn colour_at(&self, ray: Ray) -> Color {
        let mut accum = Color::BLACK;
        let mut queue = RayQueue::new();
        queue.push(ray, 1.0);

        let mut hits = Intersections::new();

        for _ in 0..MAX_REFLECT_REFRACT {
            let Some(info) = queue.pop() else { break };

            self.intersect(&info.ray, &mut hits);

            if let Some(hit) = hits.get_hit() {
                let ctx = prepare_comps(hit, &info.ray, &hits, &self.shapes);
                accum += self.shade_hit(&ctx) * info.weight;

                let reflect_weight = info.weight * ctx.material.reflective;
                if reflect_weight > EPSILON {
                    queue.push(Ray::new(ctx.over_point, ctx.reflect_v), reflect_weight);
                }

                let transparency_weight = info.weight * ctx.material.transparency;
                if transparency_weight > EPSILON {
                    if let Some(refract_ray) = refract_ray(&ctx) {
                        queue.push(refract_ray, transparency_weight);
                    }
                }

                hits.clear();
            }
        }

        accum
    }
}

/// `None` under total internal reflection — no refraction ray is spawned.
fn refract_ray(ctx: &super::comps::HitContext) -> Option<Ray> {
    let n_ratio = ctx.n1 / ctx.n2;
    let cos_i = ctx.eye_v.dot(&ctx.normal_v);
    let sin2_t = n_ratio * n_ratio * (1.0 - cos_i * cos_i);

    if sin2_t >= 1.0 {
        return None;
    }

    let cos_t = (1.0 - sin2_t).sqrt();
    let direction = ctx.normal_v * (n_ratio * cos_i - cos_t) - ctx.eye_v * n_ratio;
    Some(Ray::new(ctx.under_point, direction))
}
