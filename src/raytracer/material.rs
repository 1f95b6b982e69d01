//! Phong material and the lighting function evaluated at a shaded point.

use super::color::Color;
use super::light::PointLight;
use super::linalg::Vec4;
use super::pattern::Pattern;

#[derive(Clone, Debug)]
pub struct Material {
    pub color: Color,
    pub ambient: f32,
    pub diffuse: f32,
    pub specular: f32,
    pub shininess: f32,
    pub reflective: f32,
    pub transparency: f32,
    pub refractive_index: f32,
    pub pattern: Option<Pattern>,
}

impl Default for Material {
    fn default() -> Self {
        Self {
            color: Color::new(1.0, 1.0, 1.0),
            ambient: 0.1,
            diffuse: 0.9,
            specular: 0.9,
            shininess: 200.0,
            reflective: 0.0,
            transparency: 0.0,
            refractive_index: 1.0,
            pattern: None,
        }
    }
}

impl Material {
    /// Phong lighting at `point` under the material's own pattern or base
    /// color. `object_transform_inverse` lets a pattern be evaluated in the
    /// shape's local space before its own pattern-space transform applies.
    #[allow(clippy::too_many_arguments)]
    pub fn lighting(
        &self,
        object_transform_inverse: &super::linalg::Mat4,
        light: &PointLight,
        point: Vec4,
        eye_v: Vec4,
        normal_v: Vec4,
        in_shadow: bool,
    ) -> Color {
        let surface_color = match &self.pattern {
            Some(pattern) => pattern.pattern_at(object_transform_inverse, point),
            None => self.color,
        };

        let ambient_c = surface_color * self.ambient;

        if in_shadow {
            return ambient_c;
        }

        let effective = surface_color * light.intensity;
        let light_v = (light.position - point).normalize();
        let cos_ln = light_v.dot(&normal_v);

        let (diffuse, specular) = if cos_ln < 0.0 {
            (Color::BLACK, Color::BLACK)
        } else {
            let diffuse = effective * self.diffuse * cos_ln;

            let reflect_v = (-light_v).reflect(&normal_v);
            let cos_re = reflect_v.dot(&eye_v);
            let specular = if cos_re < 0.0 {
                Color::BLACK
            } else {
                light.intensity * self.specular * cos_re.powf(self.shininess)
            };

            (diffuse, specular)
        };

        ambient_c + diffuse + specular
    }
}
