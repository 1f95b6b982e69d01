//! Linear RGB color, kept separate from [`Vec4`](super::linalg::Vec4) since
//! colors have no point/vector w-discipline — just three channels that add,
//! scale, and multiply component-wise (Hadamard product for light × surface).

use nalgebra::Vector3;

#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Color(Vector3<f32>);

impl Color {
    pub const BLACK: Color = Color::new(0.0, 0.0, 0.0);
    pub const WHITE: Color = Color::new(1.0, 1.0, 1.0);

    pub const fn new(r: f32, g: f32, b: f32) -> Self {
        Self(Vector3::new(r, g, b))
    }

    pub fn r(&self) -> f32 {
        self.0.x
    }

    pub fn g(&self) -> f32 {
        self.0.y
    }

    pub fn b(&self) -> f32 {
        self.0.z
    }

    pub fn lerp(&self, other: &Self, t: f32) -> Self {
        Self(self.0 + (other.0 - self.0) * t)
    }

    /// `[r, g, b, a]` with `a = 1.0`, the shape `trace_pixel` returns.
    pub fn to_rgba(self) -> [f32; 4] {
        [self.r(), self.g(), self.b(), 1.0]
    }
}

impl std::ops::Add for Color {
    type Output = Color;
    fn add(self, rhs: Color) -> Color {
        Color(self.0 + rhs.0)
    }
}

impl std::ops::AddAssign for Color {
    fn add_assign(&mut self, rhs: Color) {
        self.0 += rhs.0;
    }
}

impl std::ops::Sub for Color {
    type Output = Color;
    fn sub(self, rhs: Color) -> Color {
        Color(self.0 - rhs.0)
    }
}

/// Hadamard (component-wise) product — light intensity times surface color.
impl std::ops::Mul for Color {
    type Output = Color;
    fn mul(self, rhs: Color) -> Color {
        Color(self.0.component_mul(&rhs.0))
    }
}

impl std::ops::Mul<f32> for Color {
    type Output = Color;
    fn mul(self, rhs: f32) -> Color {
        Color(self.0 * rhs)
    }
}
