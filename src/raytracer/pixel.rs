//! The single per-pixel entry point the ambient render driver (and, in
//! principle, a GPU fragment stage) calls once per output pixel.

use super::camera::Camera;
use super::color::Color;
use super::world::World;

/// `x, y` are integer pixel coordinates; the 0.5 pixel-center offset is
/// added here before handing off to the camera, matching the source's
/// convention of taking the integer coordinate at the boundary and offsetting
/// once, centrally, rather than at every call site.
pub fn trace_pixel(x: u32, y: u32, camera: &Camera, world: &World) -> Color {
    let ray = camera.ray_for_pixel(x as f32 + 0.5, y as f32 + 0.5);
    world.colour_at(ray)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::raytracer::linalg::{Mat4, Vec4};
    use crate::raytracer::light::PointLight;
    use crate::raytracer::material::Material;
    use crate::raytracer::shapes::{Shape, ShapeKind};
    use crate::raytracer::transform::{scaling, view_transform};
    use approx::assert_abs_diff_eq;
    use std::f32::consts::PI;

    #[test]
    fn rendering_a_world_with_a_default_camera() {
        let mut m1 = Material::default();
        m1.color = Color::new(0.8, 1.0, 0.6);
        m1.diffuse = 0.7;
        m1.specular = 0.2;
        let s1 = Shape::new(ShapeKind::Sphere, Mat4::identity(), m1, 0);
        let s2 = Shape::new(
            ShapeKind::Sphere,
            scaling(0.5, 0.5, 0.5).try_inverse().unwrap(),
            Material::default(),
            1,
        );
        let light = PointLight::new(Vec4::point(-10.0, 10.0, -10.0), Color::new(1.0, 1.0, 1.0));
        let world = World::new(vec![s1, s2], vec![light]);

        let transform_inverse = view_transform(
            Vec4::point(0.0, 0.0, -5.0),
            Vec4::point(0.0, 0.0, 0.0),
            Vec4::vector(0.0, 1.0, 0.0),
        )
        .try_inverse()
        .unwrap();
        let camera = Camera::new(11.0, 11.0, PI / 2.0, transform_inverse);

        let color = trace_pixel(5, 5, &camera, &world);
        assert_abs_diff_eq!(color.r(), 0.38066, epsilon = 1e-3);
        assert_abs_diff_eq!(color.g(), 0.47583, epsilon = 1e-3);
        assert_abs_diff_eq!(color.b(), 0.2855, epsilon = 1e-3);
    }
}
