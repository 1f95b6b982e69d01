//! A Whitted-style recursive ray tracer, structured so the tracing core
//! (camera rays, intersection, shading, the reflect/refract driver) can run
//! unmodified as either a CPU library call or a GPU fragment-stage kernel.
//!
//! [`raytracer`] is the core: no file I/O, no threading, no fallible paths.
//! [`scene`] and [`render`] are the ambient host layer built around it.

pub mod raytracer;
pub mod render;
pub mod scene;

pub mod prelude {
    pub use crate::raytracer::{
        camera::Camera,
        color::Color,
        light::PointLight,
        linalg::{Mat4, Vec4},
        material::Material,
        pattern::{Pattern, PatternKind},
        pixel::trace_pixel,
        shapes::{Shape, ShapeKind},
        world::World,
    };
    pub use crate::scene::WorldBuilder;
}
