use super::Vec3;

/// Row-major 4x4 transform.
#[derive(Debug, Clone)]
pub struct Mat4 {
    value: [f64; 16],
}

impl Mat4 {
    pub fn identity() -> Mat4 {
        Mat4 {
            value: [
                1.0, 0.0, 0.0, 0.0, 0.0, 1.0, 0.0, 0.0, 0.0, 0.0, 1.0, 0.0, 0.0, 0.0, 0.0, 1.0,
            ],
        }
    }

    pub fn scale(factor: Vec3) -> Mat4 {
        Mat4 {
            value: [
                factor.x, 0.0, 0.0, 0.0, 0.0, factor.y, 0.0, 0.0, 0.0, 0.0, factor.z, 0.0, 0.0,
                0.0, 0.0, 1.0,
            ],
        }
    }

    pub fn translate(offset: Vec3) -> Mat4 {
        Mat4 {
            value: [
                1.0, 0.0, 0.0, offset.x, 0.0, 1.0, 0.0, offset.y, 0.0, 0.0, 1.0, offset.z, 0.0,
                0.0, 0.0, 1.0,
            ],
        }
    }

    pub fn rotate_y(angle: f64) -> Mat4 {
        let cos_t = angle.cos();
        let sin_t = angle.sin();
        Mat4 {
            value: [
                cos_t, 0.0, sin_t, 0.0, 0.0, 1.0, 0.0, 0.0, -sin_t, 0.0, cos_t, 0.0, 0.0, 0.0,
                0.0, 1.0,
            ],
        }
    }

    /// Build the matrix that maps camera space to world space from an
    /// orthonormal basis and the camera position.
    pub fn from_basis(right: Vec3, up: Vec3, forward: Vec3, origin: Vec3) -> Mat4 {
        Mat4 {
            value: [
                right.x, up.x, forward.x, origin.x, right.y, up.y, forward.y, origin.y, right.z,
                up.z, forward.z, origin.z, 0.0, 0.0, 0.0, 1.0,
            ],
        }
    }

    /// Compose with another transform so that `other` is applied after `self`.
    pub fn then(&self, other: &Mat4) -> Mat4 {
        // other * self
        let mut value = [0.0; 16];
        for row in 0..4 {
            for col in 0..4 {
                let mut sum = 0.0;
                for k in 0..4 {
                    sum += other.value[row * 4 + k] * self.value[k * 4 + col];
                }
                value[row * 4 + col] = sum;
            }
        }
        Mat4 { value }
    }

    /// Transform a point, translation included.
    pub fn transform_point(&self, v: Vec3) -> Vec3 {
        let x = self.value[0] * v.x + self.value[1] * v.y + self.value[2] * v.z + self.value[3];
        let y = self.value[4] * v.x + self.value[5] * v.y + self.value[6] * v.z + self.value[7];
        let z = self.value[8] * v.x + self.value[9] * v.y + self.value[10] * v.z + self.value[11];
        let w = self.value[12] * v.x + self.value[13] * v.y + self.value[14] * v.z + self.value[15];
        Vec3::new(x / w, y / w, z / w)
    }

    /// Transform a direction, ignoring the translation part.
    pub fn transform_vector(&self, v: Vec3) -> Vec3 {
        let x = self.value[0] * v.x + self.value[1] * v.y + self.value[2] * v.z;
        let y = self.value[4] * v.x + self.value[5] * v.y + self.value[6] * v.z;
        let z = self.value[8] * v.x + self.value[9] * v.y + self.value[10] * v.z;
        Vec3::new(x, y, z)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn close(a: Vec3, b: Vec3) -> bool {
        (a - b).len() < 1e-9
    }

    #[test]
    fn translate_moves_points_but_not_vectors() {
        let m = Mat4::translate(Vec3::new(1.0, 2.0, 3.0));
        assert!(close(m.transform_point(Vec3::zero()), Vec3::new(1.0, 2.0, 3.0)));
        assert!(close(m.transform_vector(Vec3::x_axis()), Vec3::x_axis()));
    }

    #[test]
    fn rotate_y_quarter_turn_sends_z_to_x() {
        let m = Mat4::rotate_y(std::f64::consts::FRAC_PI_2);
        assert!(close(m.transform_vector(Vec3::z_axis()), Vec3::x_axis()));
    }

    #[test]
    fn then_applies_transforms_in_order() {
        // scale first, then translate
        let m = Mat4::scale(Vec3::new(2.0, 2.0, 2.0)).then(&Mat4::translate(Vec3::x_axis()));
        assert!(close(
            m.transform_point(Vec3::new(1.0, 0.0, 0.0)),
            Vec3::new(3.0, 0.0, 0.0)
        ));
    }

    #[test]
    fn from_basis_maps_camera_axes_to_world_basis() {
        let right = Vec3::new(0.0, 0.0, -1.0);
        let up = Vec3::y_axis();
        let forward = Vec3::x_axis();
        let m = Mat4::from_basis(right, up, forward, Vec3::new(5.0, 0.0, 0.0));
        assert!(close(m.transform_vector(Vec3::z_axis()), forward));
        assert!(close(m.transform_point(Vec3::zero()), Vec3::new(5.0, 0.0, 0.0)));
    }
}
