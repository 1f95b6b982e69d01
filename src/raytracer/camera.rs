//! Camera: builds world-space rays through each pixel of the output image.

use super::linalg::{Mat4, Vec4};
use super::ray::Ray;

#[derive(Clone, Copy, Debug)]
pub struct Camera {
    pub hsize: f32,
    pub vsize: f32,
    pub transform_inverse: Mat4,
    pub pixel_size: f32,
    pub half_width: f32,
    pub half_height: f32,
}

impl Camera {
    pub fn new(hsize: f32, vsize: f32, field_of_view: f32, transform_inverse: Mat4) -> Self {
        let half_view = (field_of_view / 2.0).tan();
        let aspect = hsize / vsize;

        let (half_width, half_height) = if aspect >= 1.0 {
            (half_view, half_view / aspect)
        } else {
            (half_view * aspect, half_view)
        };

        let pixel_size = (half_width * 2.0) / hsize;

        Self {
            hsize,
            vsize,
            transform_inverse,
            pixel_size,
            half_width,
            half_height,
        }
    }

    /// `x, y` are canvas coordinates with the pixel-center offset already
    /// applied by the caller (see `trace_pixel`, which adds 0.5 itself).
    pub fn ray_for_pixel(&self, x: f32, y: f32) -> Ray {
        let object_x = self.half_width - x * self.pixel_size;
        let object_y = self.half_height - y * self.pixel_size;

        let pixel_object_point = Vec4::point(object_x, object_y, -1.0);
        let pixel_world_point = self.transform_inverse * pixel_object_point;
        let camera_world_point = self.transform_inverse * Vec4::point(0.0, 0.0, 0.0);
        let direction = (pixel_world_point - camera_world_point).normalize();

        Ray::new(camera_world_point, direction)
    }
}
