//! Fallible scene construction: the one place non-invertible transforms are
//! caught and surfaced as an error, instead of reaching `colour_at` as
//! silent NaN. None of this fallibility exists inside `raytracer` itself.

use anyhow::{bail, Result};

use crate::raytracer::camera::Camera;
use crate::raytracer::light::PointLight;
use crate::raytracer::linalg::Mat4;
use crate::raytracer::material::Material;
use crate::raytracer::shapes::{Shape, ShapeKind};
use crate::raytracer::world::World;

/// Builds a [`Shape`] from a forward transform, inverting it up front so the
/// core never has to. `index` must be the shape's eventual position in the
/// world's shape slice — callers assemble shapes through [`WorldBuilder`],
/// which assigns indices itself.
fn try_build_shape(kind: ShapeKind, transform: Mat4, material: Material, index: usize) -> Result<Shape> {
    let transform_inverse = match transform.try_inverse() {
        Some(inv) => inv,
        None => bail!("shape #{index} ({kind:?}) has a non-invertible transform"),
    };
    Ok(Shape::new(kind, transform_inverse, material, index))
}

/// Builds a [`Camera`] from a forward view transform (`from`/`to`/`up`
/// already folded in by the caller via `transform::view_transform`).
pub fn try_build_camera(hsize: f32, vsize: f32, field_of_view: f32, view_transform: Mat4) -> Result<Camera> {
    let transform_inverse = match view_transform.try_inverse() {
        Some(inv) => inv,
        None => bail!("camera view transform is non-invertible"),
    };
    Ok(Camera::new(hsize, vsize, field_of_view, transform_inverse))
}

/// Chainable, fallible scene builder, mirroring the teacher's
/// `Scene::add_object`/`add_light` chain.
#[derive(Default)]
pub struct WorldBuilder {
    shapes: Vec<Shape>,
    lights: Vec<PointLight>,
}

impl WorldBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add_shape(mut self, kind: ShapeKind, transform: Mat4, material: Material) -> Result<Self> {
        let index = self.shapes.len();
        self.shapes.push(try_build_shape(kind, transform, material, index)?);
        Ok(self)
    }

    pub fn add_light(mut self, light: PointLight) -> Self {
        self.lights.push(light);
        self
    }

    pub fn build(self) -> World {
        World::new(self.shapes, self.lights)
    }
}
