use clap::ValueEnum;
use rayon::prelude::*;

use super::math::{ColorRgb, Mat4, Ray, Vec3};
use super::scene::Scene;

/// Push secondary ray origins off the surface to avoid self-intersection.
const SELF_INTERSECT_OFFSET: f64 = 1e-4;

/// Reflectivity below this kills the bounce loop.
const REFLECTIVITY_EPSILON: f64 = 1e-3;

/// Fixed energy loss applied to every bounce on top of the material's own
/// reflectivity.
const REFLECTION_ATTENUATION: f64 = 0.5;

/// Which term of the lighting equation ends up on screen. Everything but
/// `Combined` exists to debug a single term in isolation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum LightingMode {
    /// Lambert cosine term only.
    ObservedArea,
    /// Incident radiance only.
    Radiance,
    /// Material reflectance only.
    Brdf,
    /// The full product.
    Combined,
}

/// Immutable per-frame render settings. Same scene and config always produce
/// the same buffer, whatever the thread count.
#[derive(Debug, Clone)]
pub struct RenderConfig {
    pub width: u32,
    pub height: u32,
    pub max_bounces: u32,
    pub shadows_enabled: bool,
    pub reflections_enabled: bool,
    pub lighting_mode: LightingMode,
}

impl RenderConfig {
    pub fn new(width: u32, height: u32) -> RenderConfig {
        RenderConfig {
            width,
            height,
            max_bounces: 3,
            shadows_enabled: true,
            reflections_enabled: true,
            lighting_mode: LightingMode::Combined,
        }
    }
}

/// Map a pixel center to a world-space camera ray: normalized device
/// coordinates in [-1, 1], scaled by aspect ratio and the fov tangent,
/// treated as a camera-space point at z = 1.
pub fn camera_ray(
    config: &RenderConfig,
    camera_to_world: &Mat4,
    origin: Vec3,
    fov_scale: f64,
    px: u32,
    py: u32,
) -> Ray {
    let width = config.width as f64;
    let height = config.height as f64;
    let aspect_ratio = width / height;

    let x = (2.0 * ((px as f64 + 0.5) / width) - 1.0) * aspect_ratio * fov_scale;
    let y = (1.0 - 2.0 * ((py as f64 + 0.5) / height)) * fov_scale;

    let direction = camera_to_world
        .transform_vector(Vec3::new(x, y, 1.0))
        .normalize();
    Ray::new(origin, direction)
}

/// Accumulate outgoing radiance along a ray: direct lighting at the nearest
/// hit, then mirror bounces while the material reflectivity and the bounce
/// budget allow. Background is black.
pub fn trace(scene: &Scene, config: &RenderConfig, ray: &Ray) -> ColorRgb {
    let mut color = ColorRgb::black();
    let mut attenuation = 1.0;
    let mut current_ray = ray.clone();

    for _bounce in 0..=config.max_bounces {
        let hit = scene.get_closest_hit(&current_ray);
        if !hit.did_hit {
            break;
        }

        let material = scene.material(hit.material_index);
        let view = -current_ray.direction.normalize();

        for light in scene.lights() {
            let light_direction = light.direction_to(hit.point);
            let light_distance = light.distance_to(hit.point);

            if config.shadows_enabled {
                let shadow_ray = Ray::with_bounds(
                    hit.point + hit.normal * SELF_INTERSECT_OFFSET,
                    light_direction,
                    SELF_INTERSECT_OFFSET,
                    light_distance,
                );
                if scene.does_hit(&shadow_ray) {
                    continue;
                }
            }

            let observed_area = hit.normal.dot(light_direction).max(0.0);
            let contribution = match config.lighting_mode {
                LightingMode::ObservedArea => ColorRgb::gray(observed_area),
                LightingMode::Radiance => light.radiance(hit.point),
                LightingMode::Brdf => material.shade(&hit, light_direction, view),
                LightingMode::Combined => {
                    light.radiance(hit.point)
                        * material.shade(&hit, light_direction, view)
                        * observed_area
                }
            };
            // the primary hit lands unscaled; attenuation only kicks in from
            // the second bounce onward
            color += contribution * attenuation;
        }

        if !config.reflections_enabled || material.reflectivity < REFLECTIVITY_EPSILON {
            break;
        }

        let reflected = current_ray.direction.reflect(hit.normal).normalize();
        current_ray = Ray::new(hit.point + hit.normal * SELF_INTERSECT_OFFSET, reflected);
        attenuation *= material.reflectivity * REFLECTION_ATTENUATION;
    }

    color
}

/// Render one pixel to a display-ready color.
pub fn render_pixel(
    scene: &Scene,
    config: &RenderConfig,
    camera_to_world: &Mat4,
    origin: Vec3,
    fov_scale: f64,
    px: u32,
    py: u32,
) -> ColorRgb {
    let ray = camera_ray(config, camera_to_world, origin, fov_scale, px, py);
    trace(scene, config, &ray).max_to_one()
}

/// Render a full frame, row-major with (0, 0) top-left. Rows are distributed
/// over the rayon pool; the scene and the camera transform are shared
/// read-only and every task writes its own disjoint row.
pub fn render(scene: &Scene, config: &RenderConfig) -> Vec<ColorRgb> {
    let camera_to_world = scene.camera.camera_to_world();
    let origin = scene.camera.origin;
    let fov_scale = scene.camera.fov_scale();

    let mut pixels = vec![ColorRgb::black(); (config.width * config.height) as usize];
    pixels
        .par_chunks_mut(config.width as usize)
        .enumerate()
        .for_each(|(py, row)| {
            for (px, pixel) in row.iter_mut().enumerate() {
                *pixel = render_pixel(
                    scene,
                    config,
                    &camera_to_world,
                    origin,
                    fov_scale,
                    px as u32,
                    py as u32,
                );
            }
        });
    pixels
}
