use thiserror::Error;

use super::math::{Aabb, Mat4, Vec3};

const DEGENERATE_EPSILON: f64 = 1e-12;

#[derive(Debug, Error)]
pub enum GeometryError {
    #[error("triangle has zero area, cannot derive a normal")]
    ZeroAreaTriangle,
    #[error("mesh face {face} is degenerate, cannot derive a normal")]
    DegenerateFace { face: usize },
}

/// Result of an intersection query. A record with `did_hit == false` keeps
/// `t` at infinity so it can seed a running-minimum scan.
#[derive(Debug, Clone, Copy)]
pub struct HitRecord {
    pub point: Vec3,
    pub normal: Vec3,
    pub t: f64,
    pub did_hit: bool,
    pub material_index: usize,
}

impl Default for HitRecord {
    fn default() -> Self {
        HitRecord {
            point: Vec3::zero(),
            normal: Vec3::zero(),
            t: f64::INFINITY,
            did_hit: false,
            material_index: 0,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CullMode {
    FrontFaceCulling,
    BackFaceCulling,
    NoCulling,
}

#[derive(Debug, Clone, Copy)]
pub struct Sphere {
    pub origin: Vec3,
    pub radius: f64,
    pub material_index: usize,
}

impl Sphere {
    pub fn new(origin: Vec3, radius: f64, material_index: usize) -> Sphere {
        Sphere {
            origin,
            radius,
            material_index,
        }
    }
}

#[derive(Debug, Clone, Copy)]
pub struct Plane {
    pub origin: Vec3,
    pub normal: Vec3,
    pub material_index: usize,
}

impl Plane {
    pub fn new(origin: Vec3, normal: Vec3, material_index: usize) -> Plane {
        Plane {
            origin,
            normal,
            material_index,
        }
    }
}

#[derive(Debug, Clone, Copy)]
pub struct Triangle {
    pub v0: Vec3,
    pub v1: Vec3,
    pub v2: Vec3,
    pub normal: Vec3,
    pub center: Vec3,
    pub cull_mode: CullMode,
    pub material_index: usize,
}

impl Triangle {
    /// Derives the face normal and centroid from the winding order. Fails on
    /// a zero-area triangle instead of letting a NaN normal escape.
    pub fn from_vertices(v0: Vec3, v1: Vec3, v2: Vec3) -> Result<Triangle, GeometryError> {
        let normal = (v1 - v0).cross(v2 - v0);
        if normal.squared_len() < DEGENERATE_EPSILON {
            return Err(GeometryError::ZeroAreaTriangle);
        }
        Ok(Triangle {
            v0,
            v1,
            v2,
            normal: normal.normalize(),
            center: (v0 + v1 + v2) / 3.0,
            cull_mode: CullMode::NoCulling,
            material_index: 0,
        })
    }

    pub fn with_cull_mode(mut self, cull_mode: CullMode) -> Triangle {
        self.cull_mode = cull_mode;
        self
    }
}

/// Indexed triangle mesh with cached world-space state.
///
/// `transformed_positions`, `transformed_normals` and `transformed_aabb` are
/// derived from the raw geometry and the translation/rotation/scale
/// transforms. [`TriangleMesh::update_transforms`] must run after any
/// transform mutation and before the next intersection query, otherwise the
/// queries read stale world-space data.
#[derive(Debug, Clone)]
pub struct TriangleMesh {
    pub positions: Vec<Vec3>,
    /// One normal per face, in face order.
    pub normals: Vec<Vec3>,
    pub indices: Vec<usize>,
    pub cull_mode: CullMode,
    pub material_index: usize,

    translation: Mat4,
    rotation: Mat4,
    scale: Mat4,

    pub transformed_positions: Vec<Vec3>,
    pub transformed_normals: Vec<Vec3>,
    aabb: Aabb,
    pub transformed_aabb: Aabb,
}

impl TriangleMesh {
    pub fn empty(cull_mode: CullMode, material_index: usize) -> TriangleMesh {
        TriangleMesh {
            positions: Vec::new(),
            normals: Vec::new(),
            indices: Vec::new(),
            cull_mode,
            material_index,
            translation: Mat4::identity(),
            rotation: Mat4::identity(),
            scale: Mat4::identity(),
            transformed_positions: Vec::new(),
            transformed_normals: Vec::new(),
            aabb: Aabb::empty(),
            transformed_aabb: Aabb::empty(),
        }
    }

    /// Build a mesh from raw positions and a flattened index array, deriving
    /// the per-face normals from the winding.
    pub fn new(
        positions: Vec<Vec3>,
        indices: Vec<usize>,
        cull_mode: CullMode,
        material_index: usize,
    ) -> Result<TriangleMesh, GeometryError> {
        let mut mesh = TriangleMesh::empty(cull_mode, material_index);
        mesh.positions = positions;
        mesh.indices = indices;
        mesh.calculate_normals()?;
        mesh.update_aabb();
        mesh.update_transforms();
        Ok(mesh)
    }

    /// Build a mesh from pre-computed per-face normals, as supplied by the
    /// OBJ loader.
    pub fn from_parts(
        positions: Vec<Vec3>,
        normals: Vec<Vec3>,
        indices: Vec<usize>,
        cull_mode: CullMode,
        material_index: usize,
    ) -> TriangleMesh {
        let mut mesh = TriangleMesh::empty(cull_mode, material_index);
        mesh.positions = positions;
        mesh.normals = normals;
        mesh.indices = indices;
        mesh.update_aabb();
        mesh.update_transforms();
        mesh
    }

    pub fn translate(&mut self, translation: Vec3) {
        self.translation = Mat4::translate(translation);
    }

    pub fn rotate_y(&mut self, yaw: f64) {
        self.rotation = Mat4::rotate_y(yaw);
    }

    pub fn scale(&mut self, scale: Vec3) {
        self.scale = Mat4::scale(scale);
    }

    /// Append the triangle's vertices, indices and normal to the raw arrays.
    /// Pass `ignore_transform_update` when appending in bulk and call
    /// [`TriangleMesh::update_transforms`] once at the end.
    pub fn append_triangle(&mut self, triangle: &Triangle, ignore_transform_update: bool) {
        let start_index = self.positions.len();

        self.positions.push(triangle.v0);
        self.positions.push(triangle.v1);
        self.positions.push(triangle.v2);

        self.indices.push(start_index);
        self.indices.push(start_index + 1);
        self.indices.push(start_index + 2);

        self.normals.push(triangle.normal);

        if !ignore_transform_update {
            self.update_aabb();
            self.update_transforms();
        }
    }

    /// Recompute per-face normals from the winding of every indexed triangle.
    pub fn calculate_normals(&mut self) -> Result<(), GeometryError> {
        self.normals.clear();
        for (face, triangle) in self.indices.chunks_exact(3).enumerate() {
            let v0 = self.positions[triangle[0]];
            let v1 = self.positions[triangle[1]];
            let v2 = self.positions[triangle[2]];
            let normal = (v1 - v0).cross(v2 - v0);
            if normal.squared_len() < DEGENERATE_EPSILON {
                return Err(GeometryError::DegenerateFace { face });
            }
            self.normals.push(normal.normalize());
        }
        Ok(())
    }

    /// Recompute the object-space bounding box from the raw positions.
    pub fn update_aabb(&mut self) {
        self.aabb = Aabb::from_points(&self.positions);
    }

    /// Recompute the world-space positions, normals and bounding box from the
    /// composite translation * rotation * scale transform.
    pub fn update_transforms(&mut self) {
        let final_transform = self.scale.then(&self.rotation).then(&self.translation);

        self.transformed_positions.clear();
        self.transformed_positions.extend(
            self.positions
                .iter()
                .map(|position| final_transform.transform_point(*position)),
        );

        self.transformed_normals.clear();
        self.transformed_normals.extend(
            self.normals
                .iter()
                .map(|normal| final_transform.transform_vector(*normal).normalize()),
        );

        self.transformed_aabb = self.aabb.transformed_by(&final_transform);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn zero_area_triangle_is_rejected() {
        let v = Vec3::new(1.0, 2.0, 3.0);
        assert!(Triangle::from_vertices(v, v, v).is_err());
    }

    #[test]
    fn derived_normal_follows_winding() {
        let triangle = Triangle::from_vertices(
            Vec3::zero(),
            Vec3::x_axis(),
            Vec3::y_axis(),
        )
        .unwrap();
        assert!((triangle.normal - Vec3::z_axis()).len() < 1e-12);
    }

    #[test]
    fn mesh_transforms_move_positions_and_aabb() {
        let mut mesh = TriangleMesh::new(
            vec![Vec3::zero(), Vec3::x_axis(), Vec3::y_axis()],
            vec![0, 1, 2],
            CullMode::NoCulling,
            0,
        )
        .unwrap();
        mesh.translate(Vec3::new(0.0, 0.0, 5.0));
        mesh.update_transforms();

        assert!((mesh.transformed_positions[0].z - 5.0).abs() < 1e-12);
        assert!((mesh.transformed_aabb.min.z - 5.0).abs() < 1e-12);
        // normals are directions, translation leaves them alone
        assert!((mesh.transformed_normals[0] - Vec3::z_axis()).len() < 1e-12);
    }

    #[test]
    fn append_triangle_extends_index_buffer() {
        let mut mesh = TriangleMesh::empty(CullMode::BackFaceCulling, 1);
        let triangle =
            Triangle::from_vertices(Vec3::zero(), Vec3::x_axis(), Vec3::y_axis()).unwrap();
        mesh.append_triangle(&triangle, false);
        mesh.append_triangle(&triangle, false);

        assert_eq!(mesh.indices, vec![0, 1, 2, 3, 4, 5]);
        assert_eq!(mesh.normals.len(), 2);
        assert_eq!(mesh.transformed_positions.len(), 6);
    }

    #[test]
    fn degenerate_mesh_face_fails_normal_calculation() {
        let v = Vec3::x_axis();
        let result = TriangleMesh::new(vec![v, v, v], vec![0, 1, 2], CullMode::NoCulling, 0);
        assert!(matches!(
            result,
            Err(GeometryError::DegenerateFace { face: 0 })
        ));
    }
}
