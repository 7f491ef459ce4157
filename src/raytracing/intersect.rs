//! Per-primitive ray hit tests.
//!
//! Every routine takes the running-minimum hit record of the current query
//! and only overwrites it when the candidate hit improves on `record.t`, so a
//! scene scan can pass one record through every primitive. With
//! `occlusion_only` set the routines short-circuit and leave the record
//! untouched, which is what shadow rays want.

use super::geometry::{CullMode, HitRecord, Plane, Sphere, Triangle, TriangleMesh};
use super::math::{Ray, Vec3};

const EPSILON: f64 = 1e-9;

pub fn hit_sphere(
    sphere: &Sphere,
    ray: &Ray,
    record: &mut HitRecord,
    occlusion_only: bool,
) -> bool {
    let oc = ray.origin - sphere.origin;
    let a = ray.direction.dot(ray.direction);
    let b = (ray.direction * 2.0).dot(oc);
    let c = oc.dot(oc) - sphere.radius * sphere.radius;

    let discriminant = b * b - 4.0 * a * c;
    if discriminant <= 0.0 {
        return false;
    }

    // only the smaller root counts, the far side of the sphere never wins
    let t = (-b - discriminant.sqrt()) / (2.0 * a);
    if t < ray.min || t > ray.max {
        return false;
    }

    if occlusion_only {
        return true;
    }

    if t < record.t {
        let point = ray.at(t);
        record.point = point;
        record.normal = (point - sphere.origin).normalize();
        record.t = t;
        record.did_hit = true;
        record.material_index = sphere.material_index;
    }
    true
}

pub fn hit_plane(plane: &Plane, ray: &Ray, record: &mut HitRecord, occlusion_only: bool) -> bool {
    let t = (plane.origin - ray.origin).dot(plane.normal) / ray.direction.dot(plane.normal);

    // a parallel ray yields a non-finite t; with an unbounded ray.max an
    // infinite t would slip through the range check, so reject it explicitly
    if !t.is_finite() || t < ray.min || t > ray.max {
        return false;
    }

    if occlusion_only {
        return true;
    }

    if t < record.t {
        record.point = ray.at(t);
        record.normal = plane.normal;
        record.t = t;
        record.did_hit = true;
        record.material_index = plane.material_index;
    }
    true
}

pub fn hit_triangle(
    triangle: &Triangle,
    ray: &Ray,
    record: &mut HitRecord,
    occlusion_only: bool,
) -> bool {
    let dot_nv = triangle.normal.dot(ray.direction);
    if dot_nv == 0.0 {
        return false;
    }

    // The cull policy inverts for occlusion queries: a face the camera sees
    // as front-facing must still block a shadow ray arriving from behind it.
    match triangle.cull_mode {
        CullMode::BackFaceCulling => {
            if (!occlusion_only && dot_nv > 0.0) || (occlusion_only && dot_nv < 0.0) {
                return false;
            }
        }
        CullMode::FrontFaceCulling => {
            if (!occlusion_only && dot_nv < 0.0) || (occlusion_only && dot_nv > 0.0) {
                return false;
            }
        }
        CullMode::NoCulling => {}
    }

    // Moller-Trumbore
    let edge1 = triangle.v1 - triangle.v0;
    let edge2 = triangle.v2 - triangle.v0;
    let p_vec = ray.direction.cross(edge2);
    let determinant = edge1.dot(p_vec);
    if determinant.abs() < EPSILON {
        return false;
    }
    let inverse_determinant = 1.0 / determinant;

    let t_vec = ray.origin - triangle.v0;
    let u = t_vec.dot(p_vec) * inverse_determinant;
    if !(0.0..=1.0).contains(&u) {
        return false;
    }

    let q_vec = t_vec.cross(edge1);
    let v = ray.direction.dot(q_vec) * inverse_determinant;
    if v < 0.0 || u + v > 1.0 {
        return false;
    }

    let t = edge2.dot(q_vec) * inverse_determinant;
    if t < ray.min || t > ray.max {
        return false;
    }

    if occlusion_only {
        return true;
    }

    if t < record.t {
        record.point = ray.at(t);
        record.normal = triangle.normal;
        record.t = t;
        record.did_hit = true;
        record.material_index = triangle.material_index;
    }
    true
}

pub fn hit_triangle_mesh(
    mesh: &TriangleMesh,
    ray: &Ray,
    record: &mut HitRecord,
    occlusion_only: bool,
) -> bool {
    // cheap reject against the world-space box before touching any triangle
    if !mesh.transformed_aabb.slab_hit(ray) {
        return false;
    }

    let mut any_hit = false;
    for (face, indices) in mesh.indices.chunks_exact(3).enumerate() {
        let triangle = Triangle {
            v0: mesh.transformed_positions[indices[0]],
            v1: mesh.transformed_positions[indices[1]],
            v2: mesh.transformed_positions[indices[2]],
            normal: mesh.transformed_normals[face],
            center: Vec3::zero(),
            cull_mode: mesh.cull_mode,
            material_index: mesh.material_index,
        };

        if hit_triangle(&triangle, ray, record, occlusion_only) {
            if occlusion_only {
                return true;
            }
            any_hit = true;
        }
    }
    any_hit
}
