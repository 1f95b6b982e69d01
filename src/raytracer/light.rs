use super::color::Color;
use super::linalg::Vec4;

#[derive(Clone, Copy, Debug)]
pub struct PointLight {
    pub position: Vec4,
    pub intensity: Color,
}

impl PointLight {
    pub fn new(position: Vec4, intensity: Color) -> Self {
        Self { position, intensity }
    }
}
