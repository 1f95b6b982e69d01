//! A glass sphere hovering over a mirrored floor inside a plain room,
//! exercising the full reflect/refract work queue in `colour_at`.

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
    let mut wall_material = Material::default();
    wall_material.pattern = Some(Pattern::new(PatternKind::Stripes, Color::new(0.9, 0.9, 0.9), Color::new(0.8, 0.8, 0.8)));
    wall_material.specular = 0.0;
    wall_material.reflective = 0.1;

    let mut floor_material = Material::default();
    floor_material.color = Color::new(0.1, 0.1, 0.1);
    floor_material.reflective = 0.6;
    floor_material.specular = 0.2;

    let mut glass_material = Material::default();
    glass_material.color = Color::new(0.1, 0.1, 0.1);
    glass_material.diffuse = 0.1;
    glass_material.specular = 1.0;
    glass_material.shininess = 300.0;
    glass_material.reflective = 0.9;
    glass_material.transparency = 0.9;
    glass_material.refractive_index = 1.5;

    let world = WorldBuilder::new()
        .add_shape(ShapeKind::Plane, translation(0.0, -1.0, 0.0), floor_material)?
        .add_shape(
            ShapeKind::Plane,
            translation(0.0, 0.0, 8.0).mul_mat4(&rotation_x(PI / 2.0)),
            wall_material,
        )?
        .add_shape(
            ShapeKind::Sphere,
            translation(0.0, 0.0, 0.0).mul_mat4(&scaling(1.2, 1.2, 1.2)),
            glass_material,
        )?
        .add_light(PointLight::new(Vec4::point(-10.0, 10.0, -10.0), Color::new(1.0, 1.0, 1.0)))
        .build();

    let view = view_transform(
        Vec4::point(0.0, 1.0, -6.0),
        Vec4::point(0.0, 0.0, 0.0),
        Vec4::vector(0.0, 1.0, 0.0),
    );
    let camera = try_build_camera(640.0, 480.0, PI / 4.0, view)?;

    whitted_raytracer::render::render_to_file(&camera, &world, "output/reflect_refract_room.png")?;
    Ok(())
}
