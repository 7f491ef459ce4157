use super::math::{Mat4, Vec3};

/// Pinhole camera with a cached field-of-view scale. The orthonormal basis is
/// rebuilt from `forward` whenever the camera-to-world matrix is requested,
/// which happens once per frame before dispatch.
#[derive(Debug, Clone)]
pub struct Camera {
    pub origin: Vec3,
    pub forward: Vec3,
    degrees: f64,
    fov_scale: f64,
}

impl Camera {
    pub fn new(origin: Vec3, fov_degrees: f64) -> Camera {
        let mut camera = Camera {
            origin,
            forward: Vec3::z_axis(),
            degrees: 0.0,
            fov_scale: 0.0,
        };
        camera.set_fov(fov_degrees);
        camera
    }

    /// Camera at `origin` with the given point at the center of the screen.
    /// The target must not sit at the origin or straight above/below it,
    /// otherwise no basis can be derived.
    pub fn look_at(origin: Vec3, target: Vec3, fov_degrees: f64) -> Camera {
        let mut camera = Camera::new(origin, fov_degrees);
        let forward = (target - origin).normalize();
        debug_assert!(
            forward.cross(Vec3::y_axis()).squared_len() > 1e-12,
            "camera forward is parallel to world up, the basis degenerates"
        );
        camera.forward = forward;
        camera
    }

    pub fn set_fov(&mut self, degrees: f64) {
        self.degrees = degrees;
        self.fov_scale = (degrees.to_radians() / 2.0).tan();
    }

    pub fn fov_degrees(&self) -> f64 {
        self.degrees
    }

    /// Precomputed `tan(fov / 2)`, the scale applied to device coordinates.
    pub fn fov_scale(&self) -> f64 {
        self.fov_scale
    }

    /// Build the camera-to-world matrix from the orthonormalized basis.
    pub fn camera_to_world(&self) -> Mat4 {
        let world_up = Vec3::y_axis();
        let right = world_up.cross(self.forward).normalize();
        let up = self.forward.cross(right).normalize();
        Mat4::from_basis(right, up, self.forward, self.origin)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ninety_degree_fov_has_unit_scale() {
        let camera = Camera::new(Vec3::zero(), 90.0);
        assert!((camera.fov_scale() - 1.0).abs() < 1e-12);
    }

    #[test]
    fn default_basis_maps_camera_z_to_world_z() {
        let camera = Camera::new(Vec3::zero(), 45.0);
        let to_world = camera.camera_to_world();
        assert!((to_world.transform_vector(Vec3::z_axis()) - Vec3::z_axis()).len() < 1e-12);
    }

    #[test]
    fn look_at_points_forward_at_the_target() {
        let camera = Camera::look_at(Vec3::new(0.0, 0.0, -5.0), Vec3::zero(), 45.0);
        assert!((camera.forward - Vec3::z_axis()).len() < 1e-12);

        let to_world = camera.camera_to_world();
        // the basis stays orthonormal after the re-derivation
        let right = to_world.transform_vector(Vec3::x_axis());
        let up = to_world.transform_vector(Vec3::y_axis());
        assert!(right.dot(up).abs() < 1e-12);
        assert!(right.dot(camera.forward).abs() < 1e-12);
    }

    #[test]
    #[should_panic(expected = "parallel to world up")]
    fn look_at_straight_up_degenerates_the_basis() {
        Camera::look_at(Vec3::zero(), Vec3::new(0.0, 5.0, 0.0), 45.0);
    }
}
