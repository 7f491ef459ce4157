use super::Vec3;

/// Hits are only valid for parameters inside `[min, max]`. The lower bound
/// keeps secondary rays from re-hitting the surface they start on.
#[derive(Debug, Clone)]
pub struct Ray {
    pub origin: Vec3,
    pub direction: Vec3,
    pub min: f64,
    pub max: f64,
}

pub const RAY_MIN: f64 = 1e-4;

impl Ray {
    pub fn new(origin: Vec3, direction: Vec3) -> Ray {
        Ray {
            origin,
            direction,
            min: RAY_MIN,
            max: f64::INFINITY,
        }
    }

    pub fn with_bounds(origin: Vec3, direction: Vec3, min: f64, max: f64) -> Ray {
        Ray {
            origin,
            direction,
            min,
            max,
        }
    }

    pub fn at(&self, t: f64) -> Vec3 {
        self.origin + self.direction * t
    }
}
