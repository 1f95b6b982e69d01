//! 4-wide points/vectors and 4x4 matrices.
//!
//! Mirrors the homogeneous-coordinate discipline of the GPU shader this
//! crate is ported from: points carry `w = 1`, vectors carry `w = 0`, and
//! `dot`/`length`/`normalize` only ever look at the `x, y, z` components —
//! exactly like the shader's `float4` helpers, which call themselves out as
//! "not actually the dot product since I only use them as 3d vectors".
//!
//! Single precision throughout: the tracing core must produce bit-for-bit
//! comparable results whether it runs here or as an actual fragment shader.

use approx::{AbsDiffEq, RelativeEq};
use nalgebra::{Matrix4, Vector4};

pub const EPSILON: f32 = 0.01;

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Vec4(Vector4<f32>);

impl Vec4 {
    pub const fn raw(x: f32, y: f32, z: f32, w: f32) -> Self {
        Self(Vector4::new(x, y, z, w))
    }

    pub const fn point(x: f32, y: f32, z: f32) -> Self {
        Self::raw(x, y, z, 1.0)
    }

    pub const fn vector(x: f32, y: f32, z: f32) -> Self {
        Self::raw(x, y, z, 0.0)
    }

    pub fn x(&self) -> f32 {
        self.0.x
    }

    pub fn y(&self) -> f32 {
        self.0.y
    }

    pub fn z(&self) -> f32 {
        self.0.z
    }

    pub fn w(&self) -> f32 {
        self.0.w
    }

    pub fn is_point(&self) -> bool {
        self.0.w != 0.0
    }

    /// Dot product over x, y, z only — matches the shader's `dot(float4, float4)`.
    pub fn dot(&self, other: &Self) -> f32 {
        self.0.x * other.0.x + self.0.y * other.0.y + self.0.z * other.0.z
    }

    pub fn length_squared(&self) -> f32 {
        self.dot(self)
    }

    pub fn length(&self) -> f32 {
        self.length_squared().sqrt()
    }

    /// Divides every component (including `w`) by the xyz length, matching
    /// the source 1:1. Callers only ever normalize vectors (`w = 0`), so the
    /// `w` division is a no-op in practice.
    pub fn normalize(&self) -> Self {
        Self(self.0 / self.length())
    }

    pub fn reflect(&self, normal: &Self) -> Self {
        *self - *normal * (2.0 * self.dot(normal))
    }

    /// Cross product over x, y, z; `w` of the result is always 0 (a vector).
    pub fn cross(&self, other: &Self) -> Self {
        Self::vector(
            self.0.y * other.0.z - self.0.z * other.0.y,
            self.0.z * other.0.x - self.0.x * other.0.z,
            self.0.x * other.0.y - self.0.y * other.0.x,
        )
    }

    pub fn with_w_zero(&self) -> Self {
        Self::raw(self.0.x, self.0.y, self.0.z, 0.0)
    }

    pub fn as_slice(&self) -> &[f32] {
        self.0.as_slice()
    }
}

impl std::ops::Add for Vec4 {
    type Output = Vec4;
    fn add(self, rhs: Vec4) -> Vec4 {
        Vec4(self.0 + rhs.0)
    }
}

impl std::ops::Sub for Vec4 {
    type Output = Vec4;
    fn sub(self, rhs: Vec4) -> Vec4 {
        Vec4(self.0 - rhs.0)
    }
}

impl std::ops::Mul<f32> for Vec4 {
    type Output = Vec4;
    fn mul(self, rhs: f32) -> Vec4 {
        Vec4(self.0 * rhs)
    }
}

impl std::ops::Neg for Vec4 {
    type Output = Vec4;
    fn neg(self) -> Vec4 {
        Vec4(self.0 * -1.0)
    }
}

impl AbsDiffEq for Vec4 {
    type Epsilon = f32;

    fn default_epsilon() -> Self::Epsilon {
        1e-4
    }

    fn abs_diff_eq(&self, other: &Self, epsilon: Self::Epsilon) -> bool {
        self.0.abs_diff_eq(&other.0, epsilon)
    }
}

impl RelativeEq for Vec4 {
    fn default_max_relative() -> Self::Epsilon {
        1e-4
    }

    fn relative_eq(&self, other: &Self, epsilon: Self::Epsilon, max_relative: Self::Epsilon) -> bool {
        self.0.relative_eq(&other.0, epsilon, max_relative)
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Mat4(Matrix4<f32>);

impl Mat4 {
    pub fn identity() -> Self {
        Self(Matrix4::identity())
    }

    pub fn from_rows(rows: [[f32; 4]; 4]) -> Self {
        Self(Matrix4::new(
            rows[0][0], rows[0][1], rows[0][2], rows[0][3], rows[1][0], rows[1][1], rows[1][2],
            rows[1][3], rows[2][0], rows[2][1], rows[2][2], rows[2][3], rows[3][0], rows[3][1],
            rows[3][2], rows[3][3],
        ))
    }

    pub fn transpose(&self) -> Self {
        Self(self.0.transpose())
    }

    /// Returns `None` for a non-invertible (singular) transform. The tracing
    /// core never calls this — it only ever consumes an already-inverted
    /// `transform_inverse` — this lives here purely so scene construction
    /// can surface the failure instead of the core silently emitting NaN.
    pub fn try_inverse(&self) -> Option<Self> {
        self.0.try_inverse().map(Self)
    }

    pub fn mul_vec4(&self, v: &Vec4) -> Vec4 {
        let raw = self.0 * v.0;
        Vec4(raw)
    }

    pub fn mul_mat4(&self, other: &Self) -> Self {
        Self(self.0 * other.0)
    }
}

impl std::ops::Mul<Vec4> for Mat4 {
    type Output = Vec4;
    fn mul(self, rhs: Vec4) -> Vec4 {
        self.mul_vec4(&rhs)
    }
}

impl std::ops::Mul<Mat4> for Mat4 {
    type Output = Mat4;
    fn mul(self, rhs: Mat4) -> Mat4 {
        self.mul_mat4(&rhs)
    }
}

impl AbsDiffEq for Mat4 {
    type Epsilon = f32;

    fn default_epsilon() -> Self::Epsilon {
        1e-4
    }

    fn abs_diff_eq(&self, other: &Self, epsilon: Self::Epsilon) -> bool {
        self.0.abs_diff_eq(&other.0, epsilon)
    }
}

impl RelativeEq for Mat4 {
    fn default_max_relative() -> Self::Epsilon {
        1e-4
    }

    fn relative_eq(&self, other: &Self, epsilon: Self::Epsilon, max_relative: Self::Epsilon) -> bool {
        self.0.relative_eq(&other.0, epsilon, max_relative)
    }
}
