//! Built-in demo scenes exercised by the CLI.

use std::path::Path;

use anyhow::Context;

use super::camera::Camera;
use super::geometry::{CullMode, Triangle, TriangleMesh};
use super::loader;
use super::material::Material;
use super::math::{ColorRgb, Vec3};
use super::scene::Scene;

/// Two solid-color spheres boxed in by five planes, lit by a single
/// directional light.
pub fn sphere_wall() -> Scene {
    let mut scene = Scene::new();
    scene.camera = Camera::new(Vec3::zero(), 90.0);

    // material 0 is the solid red fallback
    let blue = scene.add_material(Material::solid_color(ColorRgb::new(0.0, 0.0, 1.0)));
    let yellow = scene.add_material(Material::solid_color(ColorRgb::new(1.0, 1.0, 0.0)));
    let green = scene.add_material(Material::solid_color(ColorRgb::new(0.0, 1.0, 0.0)));
    let magenta = scene.add_material(Material::solid_color(ColorRgb::new(1.0, 0.0, 1.0)));

    scene.add_sphere(Vec3::new(-25.0, 0.0, 100.0), 50.0, 0);
    scene.add_sphere(Vec3::new(25.0, 0.0, 100.0), 50.0, blue);

    scene.add_plane(Vec3::new(-75.0, 0.0, 0.0), Vec3::new(1.0, 0.0, 0.0), green);
    scene.add_plane(Vec3::new(75.0, 0.0, 0.0), Vec3::new(-1.0, 0.0, 0.0), green);
    scene.add_plane(Vec3::new(0.0, -75.0, 0.0), Vec3::new(0.0, 1.0, 0.0), yellow);
    scene.add_plane(Vec3::new(0.0, 75.0, 0.0), Vec3::new(0.0, -1.0, 0.0), yellow);
    scene.add_plane(Vec3::new(0.0, 0.0, 125.0), Vec3::new(0.0, 0.0, -1.0), magenta);

    scene.add_directional_light(Vec3::new(0.3, -0.7, 0.6), 2.0, ColorRgb::white());

    scene
}

/// The Cook-Torrance reference scene: six spheres sweeping metal/dielectric
/// against rough/medium/smooth, a grey-blue Lambert room, one triangle per
/// cull mode, three warm/cool point lights.
pub fn reference() -> anyhow::Result<Scene> {
    let mut scene = Scene::new();
    scene.camera = Camera::new(Vec3::new(0.0, 3.0, -9.0), 45.0);

    let silver = ColorRgb::new(0.972, 0.960, 0.915);
    let grey = ColorRgb::new(0.75, 0.75, 0.75);

    let rough_metal = scene.add_material(Material::cook_torrance(silver, 1.0, 1.0));
    let medium_metal = scene.add_material(Material::cook_torrance(silver, 1.0, 0.6));
    let smooth_metal =
        scene.add_material(Material::cook_torrance(silver, 1.0, 0.1).with_reflectivity(0.6));
    let rough_plastic = scene.add_material(Material::cook_torrance(grey, 0.0, 1.0));
    let medium_plastic = scene.add_material(Material::cook_torrance(grey, 0.0, 0.6));
    let smooth_plastic =
        scene.add_material(Material::cook_torrance(grey, 0.0, 0.1).with_reflectivity(0.2));

    let grey_blue = scene.add_material(Material::lambert(ColorRgb::new(0.49, 0.57, 0.57), 1.0));
    let white = scene.add_material(Material::lambert(ColorRgb::white(), 1.0));

    scene.add_plane(Vec3::new(0.0, 0.0, 10.0), Vec3::new(0.0, 0.0, -1.0), grey_blue);
    scene.add_plane(Vec3::new(0.0, 0.0, 0.0), Vec3::new(0.0, 1.0, 0.0), grey_blue);
    scene.add_plane(Vec3::new(0.0, 10.0, 0.0), Vec3::new(0.0, -1.0, 0.0), grey_blue);
    scene.add_plane(Vec3::new(5.0, 0.0, 0.0), Vec3::new(-1.0, 0.0, 0.0), grey_blue);
    scene.add_plane(Vec3::new(-5.0, 0.0, 0.0), Vec3::new(1.0, 0.0, 0.0), grey_blue);

    scene.add_sphere(Vec3::new(-1.75, 1.0, 0.0), 0.75, rough_metal);
    scene.add_sphere(Vec3::new(0.0, 1.0, 0.0), 0.75, medium_metal);
    scene.add_sphere(Vec3::new(1.75, 1.0, 0.0), 0.75, smooth_metal);
    scene.add_sphere(Vec3::new(-1.75, 3.0, 0.0), 0.75, rough_plastic);
    scene.add_sphere(Vec3::new(0.0, 3.0, 0.0), 0.75, medium_plastic);
    scene.add_sphere(Vec3::new(1.75, 3.0, 0.0), 0.75, smooth_plastic);

    // CW winding
    let base_triangle = Triangle::from_vertices(
        Vec3::new(-0.75, 1.5, 0.0),
        Vec3::new(0.75, 0.0, 0.0),
        Vec3::new(-0.75, 0.0, 0.0),
    )
    .context("reference scene triangle")?;

    let cull_modes = [
        (CullMode::BackFaceCulling, -1.75),
        (CullMode::FrontFaceCulling, 0.0),
        (CullMode::NoCulling, 1.75),
    ];
    for (cull_mode, x) in cull_modes {
        let mut mesh = TriangleMesh::empty(cull_mode, white);
        mesh.append_triangle(&base_triangle, true);
        mesh.translate(Vec3::new(x, 4.5, 0.0));
        mesh.update_aabb();
        mesh.update_transforms();
        scene.add_triangle_mesh(mesh);
    }

    scene.add_point_light(Vec3::new(0.0, 5.0, 5.0), 50.0, ColorRgb::new(1.0, 0.61, 0.45));
    scene.add_point_light(Vec3::new(-2.5, 5.0, -5.0), 70.0, ColorRgb::new(1.0, 0.8, 0.45));
    scene.add_point_light(Vec3::new(2.5, 2.5, -5.0), 50.0, ColorRgb::new(0.34, 0.47, 0.68));

    Ok(scene)
}

/// The Lambert room around an OBJ mesh, back-face culled and scaled up.
/// A failed load aborts scene construction instead of rendering without the
/// mesh.
pub fn mesh(path: &Path) -> anyhow::Result<Scene> {
    let mut scene = Scene::new();
    scene.camera = Camera::look_at(Vec3::new(0.0, 3.0, -9.0), Vec3::new(0.0, 2.0, 0.0), 45.0);

    let grey_blue = scene.add_material(Material::lambert(ColorRgb::new(0.49, 0.57, 0.57), 1.0));
    let white = scene.add_material(Material::lambert(ColorRgb::white(), 1.0));

    scene.add_plane(Vec3::new(0.0, 0.0, 10.0), Vec3::new(0.0, 0.0, -1.0), grey_blue);
    scene.add_plane(Vec3::new(0.0, 0.0, 0.0), Vec3::new(0.0, 1.0, 0.0), grey_blue);
    scene.add_plane(Vec3::new(0.0, 10.0, 0.0), Vec3::new(0.0, -1.0, 0.0), grey_blue);
    scene.add_plane(Vec3::new(5.0, 0.0, 0.0), Vec3::new(-1.0, 0.0, 0.0), grey_blue);
    scene.add_plane(Vec3::new(-5.0, 0.0, 0.0), Vec3::new(1.0, 0.0, 0.0), grey_blue);

    let data = loader::load_mesh(path)
        .with_context(|| format!("loading mesh scene from {}", path.display()))?;
    let mut mesh = TriangleMesh::from_parts(
        data.positions,
        data.normals,
        data.indices,
        CullMode::BackFaceCulling,
        white,
    );
    mesh.scale(Vec3::new(2.0, 2.0, 2.0));
    mesh.rotate_y(45f64.to_radians());
    mesh.update_aabb();
    mesh.update_transforms();
    scene.add_triangle_mesh(mesh);

    scene.add_point_light(Vec3::new(0.0, 5.0, 5.0), 50.0, ColorRgb::new(1.0, 0.61, 0.45));
    scene.add_point_light(Vec3::new(-2.5, 5.0, -5.0), 70.0, ColorRgb::new(1.0, 0.8, 0.45));
    scene.add_point_light(Vec3::new(2.5, 2.5, -5.0), 50.0, ColorRgb::new(0.34, 0.47, 0.68));

    Ok(scene)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::raytracing::math::Ray;

    #[test]
    fn reference_scene_builds_and_sees_geometry() {
        let scene = reference().unwrap();
        // looking from the camera into the room must hit something
        let ray = Ray::new(Vec3::new(0.0, 3.0, -9.0), Vec3::z_axis());
        assert!(scene.get_closest_hit(&ray).did_hit);
    }

    #[test]
    fn mesh_scene_with_missing_file_fails() {
        assert!(mesh(Path::new("/nonexistent/bunny.obj")).is_err());
    }
}
