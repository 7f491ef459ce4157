use std::fs::File;
use std::io::BufReader;
use std::path::Path;

use obj::{load_obj, Obj, Position};
use thiserror::Error;

use super::math::Vec3;

const DEGENERATE_EPSILON: f64 = 1e-12;

#[derive(Debug, Error)]
pub enum MeshLoadError {
    #[error("could not open {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },
    #[error("malformed OBJ file: {0}")]
    Obj(#[from] obj::ObjError),
    #[error("face {face} in the OBJ file is degenerate")]
    DegenerateFace { face: usize },
}

/// What a mesh file contributes to a [`TriangleMesh`]: positions, 0-based
/// flattened indices and one derived normal per face.
///
/// [`TriangleMesh`]: super::geometry::TriangleMesh
#[derive(Debug)]
pub struct MeshData {
    pub positions: Vec<Vec3>,
    pub normals: Vec<Vec3>,
    pub indices: Vec<usize>,
}

/// Load an OBJ file and derive per-face normals from the winding. A
/// degenerate face is a load failure rather than a NaN normal handed to the
/// shading pipeline.
pub fn load_mesh(path: &Path) -> Result<MeshData, MeshLoadError> {
    let file = File::open(path).map_err(|source| MeshLoadError::Io {
        path: path.display().to_string(),
        source,
    })?;
    let obj: Obj<Position, u32> = load_obj(BufReader::new(file))?;

    let positions: Vec<Vec3> = obj
        .vertices
        .iter()
        .map(|vertex| Vec3::from(vertex.position))
        .collect();
    let indices: Vec<usize> = obj.indices.iter().map(|index| *index as usize).collect();

    let mut normals = Vec::with_capacity(indices.len() / 3);
    for (face, triangle) in indices.chunks_exact(3).enumerate() {
        let v0 = positions[triangle[0]];
        let v1 = positions[triangle[1]];
        let v2 = positions[triangle[2]];
        let normal = (v1 - v0).cross(v2 - v0);
        if normal.squared_len() < DEGENERATE_EPSILON {
            return Err(MeshLoadError::DegenerateFace { face });
        }
        normals.push(normal.normalize());
    }

    log::debug!(
        "loaded {} ({} vertices, {} faces)",
        path.display(),
        positions.len(),
        normals.len()
    );

    Ok(MeshData {
        positions,
        normals,
        indices,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    fn write_temp_obj(name: &str, content: &str) -> std::path::PathBuf {
        let path = std::env::temp_dir().join(name);
        let mut file = File::create(&path).unwrap();
        file.write_all(content.as_bytes()).unwrap();
        path
    }

    #[test]
    fn missing_file_is_an_io_error() {
        let result = load_mesh(Path::new("/nonexistent/mesh.obj"));
        assert!(matches!(result, Err(MeshLoadError::Io { .. })));
    }

    #[test]
    fn single_face_obj_yields_adjusted_indices_and_a_normal() {
        let path = write_temp_obj(
            "whitted_loader_single_face.obj",
            "v 0 0 0\nv 1 0 0\nv 0 1 0\nf 1 2 3\n",
        );
        let mesh = load_mesh(&path).unwrap();

        assert_eq!(mesh.positions.len(), 3);
        // OBJ faces are 1-based, ours are 0-based
        assert_eq!(mesh.indices, vec![0, 1, 2]);
        assert_eq!(mesh.normals.len(), 1);
        assert!((mesh.normals[0] - Vec3::z_axis()).len() < 1e-6);
    }

    #[test]
    fn degenerate_face_fails_the_load() {
        let path = write_temp_obj(
            "whitted_loader_degenerate.obj",
            "v 0 0 0\nv 0 0 0\nv 0 0 0\nf 1 2 3\n",
        );
        let result = load_mesh(&path);
        assert!(matches!(
            result,
            Err(MeshLoadError::DegenerateFace { face: 0 })
        ));
    }
}
