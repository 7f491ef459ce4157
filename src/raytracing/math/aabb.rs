use super::{Mat4, Ray, Vec3};

/// Axis-aligned bounding box kept as min/max corners.
#[derive(Debug, Clone, Copy)]
pub struct Aabb {
    pub min: Vec3,
    pub max: Vec3,
}

impl Aabb {
    pub fn empty() -> Aabb {
        Aabb {
            min: Vec3::new(f64::INFINITY, f64::INFINITY, f64::INFINITY),
            max: Vec3::new(-f64::INFINITY, -f64::INFINITY, -f64::INFINITY),
        }
    }

    pub fn from_points<'a>(points: impl IntoIterator<Item = &'a Vec3>) -> Aabb {
        let mut aabb = Aabb::empty();
        for point in points {
            aabb.include(*point);
        }
        aabb
    }

    pub fn include(&mut self, point: Vec3) {
        self.min.x = self.min.x.min(point.x);
        self.min.y = self.min.y.min(point.y);
        self.min.z = self.min.z.min(point.z);
        self.max.x = self.max.x.max(point.x);
        self.max.y = self.max.y.max(point.y);
        self.max.z = self.max.z.max(point.z);
    }

    /// World-space box of this box under the given transform, grown from the
    /// eight transformed corners.
    pub fn transformed_by(&self, transform: &Mat4) -> Aabb {
        let mut result = Aabb::empty();
        for ix in [self.min.x, self.max.x] {
            for iy in [self.min.y, self.max.y] {
                for iz in [self.min.z, self.max.z] {
                    result.include(transform.transform_point(Vec3::new(ix, iy, iz)));
                }
            }
        }
        result
    }

    /// Slab test. True when the ray's slab interval is non-empty and not
    /// entirely behind the origin.
    pub fn slab_hit(&self, ray: &Ray) -> bool {
        let tx1 = (self.min.x - ray.origin.x) / ray.direction.x;
        let tx2 = (self.max.x - ray.origin.x) / ray.direction.x;

        let mut tmin = tx1.min(tx2);
        let mut tmax = tx1.max(tx2);

        let ty1 = (self.min.y - ray.origin.y) / ray.direction.y;
        let ty2 = (self.max.y - ray.origin.y) / ray.direction.y;

        tmin = tmin.max(ty1.min(ty2));
        tmax = tmax.min(ty1.max(ty2));

        let tz1 = (self.min.z - ray.origin.z) / ray.direction.z;
        let tz2 = (self.max.z - ray.origin.z) / ray.direction.z;

        tmin = tmin.max(tz1.min(tz2));
        tmax = tmax.min(tz1.max(tz2));

        tmax > 0.0 && tmax >= tmin
    }
}
