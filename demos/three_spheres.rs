//! Three spheres on a checkered floor, lit by a single point light —
//! the standard opening scene of the corpus this tracer descends from.

use std::f32::consts::PI;

use whitted_raytracer::raytracer::color::Color;
use whitted_raytracer::raytracer::light::PointLight;
use whitted_raytracer::raytracer::linalg::Vec4;
use whitted_raytracer::raytracer::material::Material;
use whitted_raytracer::raytracer::pattern::{Pattern, PatternKind};
use whitted_raytracer::raytracer::shapes::ShapeKind;
use whitted_raytracer::raytracer::transform::{rotation_x, scaling, translation, view_transform};
use whitted_raytracer::scene::{try_build_camera, WorldBuilder};

fn main() -> anyhow::Result<()> {
    let mut floor_material = Material::default();
    floor_material.pattern = Some(Pattern::new(PatternKind::Checker, Color::new(0.7, 0.7, 0.7), Color::new(0.2, 0.2, 0.2)));
    floor_material.specular = 0.0;

    let mut middle_material = Material::default();
    middle_material.color = Color::new(0.1, 1.0, 0.5);
    middle_material.diffuse = 0.7;
    middle_material.specular = 0.3;

    let mut right_material = Material::default();
    right_material.color = Color::new(0.5, 1.0, 0.1);
    right_material.diffuse = 0.7;
    right_material.specular = 0.3;

    let mut left_material = Material::default();
    left_material.color = Color::new(1.0, 0.8, 0.1);
    left_material.diffuse = 0.7;
    left_material.specular = 0.3;

    let world = WorldBuilder::new()
        .add_shape(ShapeKind::Plane, rotation_x(0.0), floor_material)?
        .add_shape(ShapeKind::Sphere, translation(-0.5, 1.0, 0.5), middle_material)?
        .add_shape(
            ShapeKind::Sphere,
            translation(1.5, 0.5, -0.5).mul_mat4(&scaling(0.5, 0.5, 0.5)),
            right_material,
        )?
        .add_shape(
            ShapeKind::Sphere,
            translation(-1.5, 0.33, -0.75).mul_mat4(&scaling(0.33, 0.33, 0.33)),
            left_material,
        )?
        .add_light(PointLight::new(Vec4::point(-10.0, 10.0, -10.0), Color::new(1.0, 1.0, 1.0)))
        .build();

    let view = view_transform(
        Vec4::point(0.0, 1.5, -5.0),
        Vec4::point(0.0, 1.0, 0.0),
        Vec4::vector(0.0, 1.0, 0.0),
    );
    let camera = try_build_camera(640.0, 480.0, PI / 3.0, view)?;

    whitted_raytracer::render::render_to_file(&camera, &world, "output/three_spheres.png")?;
    Ok(())
}
