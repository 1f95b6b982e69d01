//! Ambient host render driver: partitions an output image over pixels with
//! `rayon`, reports progress with `indicatif`, and writes the result with
//! `image`. None of this is part of the tracing core — it depends on it only
//! through [`trace_pixel`] — and this is the only place in the crate allowed
//! to touch the filesystem.

use image::{Rgb, RgbImage};
use indicatif::{ParallelProgressIterator, ProgressState, ProgressStyle};
use rayon::iter::ParallelIterator;
use rayon::prelude::*;
use std::fmt::Write as _;
use std::path::Path;

use crate::raytracer::camera::Camera;
use crate::raytracer::pixel::trace_pixel;
use crate::raytracer::world::World;

fn progress_bar_style() -> ProgressStyle {
    let text = [
        "[{bar:48.cyan/blue}] {percent}% {spinner:.green}",
        "Elapsed Time     : {elapsed_precise}",
        "ETA              : {eta}",
        "Tracing Progress : {pos}/{len} pixels",
        "Tracing Speed    : {per_sec}",
    ]
    .join("\n");

    ProgressStyle::with_template(&text)
        .unwrap()
        .with_key("per_sec", |state: &ProgressState, w: &mut dyn Write| {
            _ = write!(w, "{:.0} px/sec", state.per_sec());
        })
        .progress_chars("#>-")
}

/// Clamps a linear color channel into `[0, 255]`, matching the simple
/// clamp-don't-tonemap policy the rest of the corpus uses for 8-bit output.
fn to_u8(channel: f32) -> u8 {
    (channel.clamp(0.0, 1.0) * 255.0).round() as u8
}

pub fn render(camera: &Camera, world: &World) -> RgbImage {
    let width = camera.hsize as u32;
    let height = camera.vsize as u32;
    let mut img = RgbImage::new(width, height);

    img.par_pixels_mut()
        .progress_with_style(progress_bar_style())
        .enumerate()
        .for_each(|(idx, pixel)| {
            let x = idx as u32 % width;
            let y = idx as u32 / width;
            let color = trace_pixel(x, y, camera, world);
            *pixel = Rgb([to_u8(color.r()), to_u8(color.g()), to_u8(color.b())]);
        });

    img
}

pub fn render_to_file(camera: &Camera, world: &World, path: impl AsRef<Path>) -> image::ImageResult<()> {
    render(camera, world).save(path)
}
