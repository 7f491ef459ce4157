use super::camera::Camera;
use super::geometry::{HitRecord, Plane, Sphere, TriangleMesh};
use super::intersect::{hit_plane, hit_sphere, hit_triangle_mesh};
use super::light::Light;
use super::material::Material;
use super::math::{ColorRgb, Ray, Vec3};

/// Owns every geometry, light and material arena plus the camera. Geometry
/// references materials by index into the scene's arena; index 0 is always a
/// solid red fallback.
pub struct Scene {
    spheres: Vec<Sphere>,
    planes: Vec<Plane>,
    meshes: Vec<TriangleMesh>,
    lights: Vec<Light>,
    materials: Vec<Material>,
    pub camera: Camera,
}

impl Scene {
    pub fn new() -> Scene {
        Scene {
            spheres: Vec::new(),
            planes: Vec::new(),
            meshes: Vec::new(),
            lights: Vec::new(),
            materials: vec![Material::solid_color(ColorRgb::new(1.0, 0.0, 0.0))],
            camera: Camera::new(Vec3::zero(), 45.0),
        }
    }

    pub fn add_sphere(&mut self, origin: Vec3, radius: f64, material_index: usize) -> usize {
        self.spheres.push(Sphere::new(origin, radius, material_index));
        self.spheres.len() - 1
    }

    pub fn add_plane(&mut self, origin: Vec3, normal: Vec3, material_index: usize) -> usize {
        self.planes.push(Plane::new(origin, normal, material_index));
        self.planes.len() - 1
    }

    pub fn add_triangle_mesh(&mut self, mesh: TriangleMesh) -> usize {
        self.meshes.push(mesh);
        self.meshes.len() - 1
    }

    pub fn add_point_light(&mut self, origin: Vec3, intensity: f64, color: ColorRgb) -> usize {
        self.lights.push(Light::point(origin, intensity, color));
        self.lights.len() - 1
    }

    pub fn add_directional_light(
        &mut self,
        direction: Vec3,
        intensity: f64,
        color: ColorRgb,
    ) -> usize {
        self.lights.push(Light::directional(direction, intensity, color));
        self.lights.len() - 1
    }

    pub fn add_material(&mut self, material: Material) -> usize {
        self.materials.push(material);
        self.materials.len() - 1
    }

    /// Look up a material by index. An out-of-range index is a broken scene
    /// invariant, not a runtime condition.
    pub fn material(&self, index: usize) -> &Material {
        assert!(
            index < self.materials.len(),
            "geometry references material {index}, but the scene only has {}",
            self.materials.len()
        );
        &self.materials[index]
    }

    pub fn lights(&self) -> &[Light] {
        &self.lights
    }

    /// Scan every primitive and keep the globally closest valid hit. The
    /// record comes back untouched (t at infinity, flag down) on a miss.
    pub fn get_closest_hit(&self, ray: &Ray) -> HitRecord {
        let mut closest = HitRecord::default();

        for plane in &self.planes {
            hit_plane(plane, ray, &mut closest, false);
        }
        for sphere in &self.spheres {
            hit_sphere(sphere, ray, &mut closest, false);
        }
        for mesh in &self.meshes {
            hit_triangle_mesh(mesh, ray, &mut closest, false);
        }

        closest
    }

    /// True when anything blocks the ray. Equivalent to
    /// `get_closest_hit(ray).did_hit` but stops at the first accepted hit.
    pub fn does_hit(&self, ray: &Ray) -> bool {
        let mut scratch = HitRecord::default();

        for plane in &self.planes {
            if hit_plane(plane, ray, &mut scratch, true) {
                return true;
            }
        }
        for sphere in &self.spheres {
            if hit_sphere(sphere, ray, &mut scratch, true) {
                return true;
            }
        }
        for mesh in &self.meshes {
            if hit_triangle_mesh(mesh, ray, &mut scratch, true) {
                return true;
            }
        }

        false
    }
}

impl Default for Scene {
    fn default() -> Self {
        Scene::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::raytracing::geometry::CullMode;
    use crate::raytracing::geometry::TriangleMesh;

    fn layered_scene() -> Scene {
        // plane behind everything, two spheres in front of it, a mesh between
        let mut scene = Scene::new();
        scene.add_plane(Vec3::new(0.0, 0.0, 100.0), Vec3::new(0.0, 0.0, -1.0), 0);
        scene.add_sphere(Vec3::new(0.0, 0.0, 40.0), 5.0, 0);
        scene.add_sphere(Vec3::new(0.0, 0.0, 20.0), 5.0, 0);
        let mesh = TriangleMesh::new(
            vec![
                Vec3::new(-10.0, -10.0, 60.0),
                Vec3::new(10.0, -10.0, 60.0),
                Vec3::new(0.0, 10.0, 60.0),
            ],
            vec![0, 1, 2],
            CullMode::NoCulling,
            0,
        )
        .unwrap();
        scene.add_triangle_mesh(mesh);
        scene
    }

    #[test]
    fn closest_hit_wins_across_primitive_types() {
        let scene = layered_scene();
        let ray = Ray::new(Vec3::zero(), Vec3::z_axis());
        let hit = scene.get_closest_hit(&ray);
        assert!(hit.did_hit);
        assert!((hit.t - 15.0).abs() < 1e-9);
    }

    #[test]
    fn removing_losing_primitives_does_not_change_the_winner() {
        let full = layered_scene();
        let ray = Ray::new(Vec3::zero(), Vec3::z_axis());
        let with_losers = full.get_closest_hit(&ray);

        // same scene with only the winning sphere
        let mut winner_only = Scene::new();
        winner_only.add_sphere(Vec3::new(0.0, 0.0, 20.0), 5.0, 0);
        let alone = winner_only.get_closest_hit(&ray);

        assert!((with_losers.t - alone.t).abs() < 1e-12);
    }

    #[test]
    fn does_hit_agrees_with_closest_hit() {
        let scene = layered_scene();
        let rays = [
            Ray::new(Vec3::zero(), Vec3::z_axis()),
            Ray::new(Vec3::zero(), Vec3::new(0.0, 0.0, -1.0)),
            Ray::new(Vec3::new(0.0, 50.0, 0.0), Vec3::z_axis()),
            Ray::new(Vec3::new(0.0, 0.0, 30.0), Vec3::z_axis()),
            Ray::with_bounds(Vec3::zero(), Vec3::z_axis(), 1e-4, 10.0),
            // parallel to the back wall, from behind it
            Ray::new(Vec3::new(0.0, 0.0, 150.0), Vec3::x_axis()),
        ];
        for ray in rays {
            assert_eq!(scene.does_hit(&ray), scene.get_closest_hit(&ray).did_hit);
        }
    }

    #[test]
    fn ray_parallel_to_the_back_wall_occludes_nothing() {
        let scene = layered_scene();
        let ray = Ray::new(Vec3::new(0.0, 0.0, 150.0), Vec3::x_axis());
        assert!(!scene.does_hit(&ray));
        assert!(!scene.get_closest_hit(&ray).did_hit);
    }

    #[test]
    fn miss_keeps_the_record_at_infinity() {
        let scene = layered_scene();
        let ray = Ray::new(Vec3::zero(), Vec3::new(0.0, 0.0, -1.0));
        let hit = scene.get_closest_hit(&ray);
        assert!(!hit.did_hit);
        assert!(hit.t.is_infinite());
    }

    #[test]
    #[should_panic(expected = "references material")]
    fn out_of_range_material_index_is_a_contract_violation() {
        let scene = Scene::new();
        scene.material(5);
    }

    #[test]
    fn material_zero_is_the_fallback() {
        let scene = Scene::new();
        // default arena starts with the solid red fallback
        let material = scene.material(0);
        assert!(matches!(
            material.kind,
            crate::raytracing::material::MaterialKind::SolidColor { .. }
        ));
    }
}
