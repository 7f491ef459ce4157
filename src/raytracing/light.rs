use super::math::{ColorRgb, Vec3};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LightType {
    Point,
    Directional,
}

#[derive(Debug, Clone, Copy)]
pub struct Light {
    pub origin: Vec3,
    pub direction: Vec3,
    pub color: ColorRgb,
    pub intensity: f64,
    pub kind: LightType,
}

impl Light {
    pub fn point(origin: Vec3, intensity: f64, color: ColorRgb) -> Light {
        Light {
            origin,
            direction: Vec3::zero(),
            color,
            intensity,
            kind: LightType::Point,
        }
    }

    pub fn directional(direction: Vec3, intensity: f64, color: ColorRgb) -> Light {
        Light {
            origin: Vec3::zero(),
            direction: direction.normalize(),
            color,
            intensity,
            kind: LightType::Directional,
        }
    }

    /// Unit direction from the target toward the light.
    pub fn direction_to(&self, target: Vec3) -> Vec3 {
        match self.kind {
            LightType::Point => (self.origin - target).normalize(),
            LightType::Directional => -self.direction,
        }
    }

    /// Distance from the target to the light, bounding its shadow ray.
    pub fn distance_to(&self, target: Vec3) -> f64 {
        match self.kind {
            LightType::Point => self.origin.distance(target),
            LightType::Directional => f64::INFINITY,
        }
    }

    /// Incident radiance at the target: inverse-square falloff for point
    /// lights, constant for directional ones.
    pub fn radiance(&self, target: Vec3) -> ColorRgb {
        match self.kind {
            LightType::Point => {
                self.color * self.intensity / self.origin.squared_distance(target)
            }
            LightType::Directional => self.color * self.intensity,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn point_light_radiance_falls_off_with_square_of_distance() {
        let light = Light::point(Vec3::zero(), 8.0, ColorRgb::white());
        let near = light.radiance(Vec3::new(0.0, 0.0, 1.0));
        let far = light.radiance(Vec3::new(0.0, 0.0, 2.0));
        assert!((near.r - 8.0).abs() < 1e-12);
        assert!((far.r - 2.0).abs() < 1e-12);
    }

    #[test]
    fn directional_light_has_constant_radiance_and_unbounded_distance() {
        let light = Light::directional(Vec3::new(0.0, -1.0, 0.0), 2.0, ColorRgb::white());
        assert_eq!(light.radiance(Vec3::zero()), light.radiance(Vec3::x_axis() * 100.0));
        assert!(light.distance_to(Vec3::zero()).is_infinite());
        assert!((light.direction_to(Vec3::zero()) - Vec3::y_axis()).len() < 1e-12);
    }
}
