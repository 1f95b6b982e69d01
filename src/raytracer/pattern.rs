//! Procedural surface-color patterns, evaluated in pattern space: world point
//! → shape's object space (via the shape's own `transform_inverse`) → pattern
//! space (via the pattern's own `transform_inverse`), independent of one
//! another so a pattern can be scaled/rotated separately from its shape.

use super::color::Color;
use super::linalg::{Mat4, Vec4};

#[derive(Clone, Copy, Debug)]
pub enum PatternKind {
    Solid,
    Stripes,
    Gradient,
    Ring,
    Checker,
}

#[derive(Clone, Debug)]
pub struct Pattern {
    pub kind: PatternKind,
    pub a: Color,
    pub b: Color,
    pub transform_inverse: Mat4,
}

impl Pattern {
    pub fn new(kind: PatternKind, a: Color, b: Color) -> Self {
        Self {
            kind,
            a,
            b,
            transform_inverse: Mat4::identity(),
        }
    }

    pub fn with_transform_inverse(mut self, transform_inverse: Mat4) -> Self {
        self.transform_inverse = transform_inverse;
        self
    }

    pub fn pattern_at(&self, object_transform_inverse: &Mat4, world_point: Vec4) -> Color {
        let object_point = *object_transform_inverse * world_point;
        let pattern_point = self.transform_inverse * object_point;
        self.color_at(pattern_point)
    }

    fn color_at(&self, p: Vec4) -> Color {
        match self.kind {
            PatternKind::Solid => self.a,
            PatternKind::Stripes => {
                if p.x().floor() as i64 % 2 == 0 {
                    self.a
                } else {
                    self.b
                }
            }
            PatternKind::Gradient => {
                let t = p.x() - p.x().floor();
                self.a.lerp(&self.b, t)
            }
            PatternKind::Ring => {
                let d = (p.x() * p.x() + p.z() * p.z()).sqrt();
                if d.floor() as i64 % 2 == 0 {
                    self.a
                } else {
                    self.b
                }
            }
            PatternKind::Checker => {
                let sum = p.x().floor() + p.y().floor() + p.z().floor();
                if (sum as i64).rem_euclid(2) == 0 {
                    self.a
                } else {
                    self.b
                }
            }
        }
    }
}
