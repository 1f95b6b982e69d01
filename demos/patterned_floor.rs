//! A cube and a sphere over a ring-patterned floor — exercises all three
//! primitive kinds and two of the four pattern variants in one scene.

use std::f32::consts::PI;

use whitted_raytracer::raytracer::color::Color;
use whitted_raytracer::raytracer::light::PointLight;
use whitted_raytracer::raytracer::linalg::Vec4;
use whitted_raytracer::raytracer::material::Material;
use whitted_raytracer::raytracer::pattern::{Pattern, PatternKind};
use whitted_raytracer::raytracer::shapes::ShapeKind;
use whitted_raytracer::raytracer::transform::{scaling, translation, view_transform};
use whitted_raytracer::scene::{try_build_camera, WorldBuilder};

fn main() -> anyhow::Result<()> {
    let mut floor_material = Material::default();
    floor_material.pattern = Some(
        Pattern::new(PatternKind::Ring, Color::new(0.9, 0.5, 0.5), Color::new(0.4, 0.1, 0.1))
            .with_transform_inverse(scaling(0.5, 0.5, 0.5).try_inverse().unwrap()),
    );
    floor_material.specular = 0.1;

    let mut cube_material = Material::default();
    cube_material.pattern = Some(Pattern::new(PatternKind::Gradient, Color::new(0.2, 0.4, 0.9), Color::new(0.9, 0.9, 1.0)));
    cube_material.diffuse = 0.8;

    let mut sphere_material = Material::default();
    sphere_material.color = Color::new(1.0, 0.9, 0.2);
    sphere_material.diffuse = 0.7;
    sphere_material.specular = 0.4;

    let world = WorldBuilder::new()
        .add_shape(ShapeKind::Plane, translation(0.0, 0.0, 0.0), floor_material)?
        .add_shape(
            ShapeKind::Cube,
            translation(-1.2, 1.0, 1.0).mul_mat4(&scaling(0.8, 0.8, 0.8)),
            cube_material,
        )?
        .add_shape(
            ShapeKind::Sphere,
            translation(1.2, 1.0, 0.0),
            sphere_material,
        )?
        .add_light(PointLight::new(Vec4::point(-5.0, 8.0, -8.0), Color::new(1.0, 1.0, 1.0)))
        .build();

    let view = view_transform(
        Vec4::point(0.0, 3.0, -7.0),
        Vec4::point(0.0, 0.5, 0.0),
        Vec4::vector(0.0, 1.0, 0.0),
    );
    let camera = try_build_camera(640.0, 480.0, PI / 3.0, view)?;

    whitted_raytracer::render::render_to_file(&camera, &world, "output/patterned_floor.png")?;
    Ok(())
}
