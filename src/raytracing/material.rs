use super::brdf;
use super::geometry::HitRecord;
use super::math::{ColorRgb, Vec3};

/// Keeps the Cook-Torrance specular denominator away from zero at grazing
/// angles.
const DENOMINATOR_EPSILON: f64 = 1e-6;

/// Base reflectivity of dielectrics at normal incidence.
const DIELECTRIC_F0: f64 = 0.04;

#[derive(Debug, Clone, Copy)]
pub enum MaterialKind {
    SolidColor {
        color: ColorRgb,
    },
    Lambert {
        color: ColorRgb,
        diffuse_reflection: f64,
    },
    LambertPhong {
        color: ColorRgb,
        diffuse_reflection: f64,
        specular_reflection: f64,
        phong_exponent: f64,
    },
    CookTorrance {
        albedo: ColorRgb,
        /// 0 for dielectrics, 1 for conductors.
        metalness: f64,
        roughness: f64,
    },
}

/// Closed material variant plus the mirror reflectivity used by the bounce
/// loop. Materials live in the scene's arena and are referenced by index.
#[derive(Debug, Clone, Copy)]
pub struct Material {
    pub kind: MaterialKind,
    /// Fraction of the bounced ray's contribution kept, in `[0, 1]`.
    pub reflectivity: f64,
}

impl Material {
    pub fn solid_color(color: ColorRgb) -> Material {
        Material {
            kind: MaterialKind::SolidColor { color },
            reflectivity: 0.0,
        }
    }

    pub fn lambert(color: ColorRgb, diffuse_reflection: f64) -> Material {
        Material {
            kind: MaterialKind::Lambert {
                color,
                diffuse_reflection,
            },
            reflectivity: 0.0,
        }
    }

    pub fn lambert_phong(
        color: ColorRgb,
        diffuse_reflection: f64,
        specular_reflection: f64,
        phong_exponent: f64,
    ) -> Material {
        Material {
            kind: MaterialKind::LambertPhong {
                color,
                diffuse_reflection,
                specular_reflection,
                phong_exponent,
            },
            reflectivity: 0.0,
        }
    }

    pub fn cook_torrance(albedo: ColorRgb, metalness: f64, roughness: f64) -> Material {
        Material {
            kind: MaterialKind::CookTorrance {
                albedo,
                metalness,
                roughness,
            },
            reflectivity: 0.0,
        }
    }

    pub fn with_reflectivity(mut self, reflectivity: f64) -> Material {
        self.reflectivity = reflectivity;
        self
    }

    /// Total outgoing reflectance for one light/view pair. `l` points from
    /// the surface toward the light and `v` toward the viewer. The integrator
    /// multiplies this by the incident radiance and the cosine term.
    pub fn shade(&self, hit: &HitRecord, l: Vec3, v: Vec3) -> ColorRgb {
        match self.kind {
            MaterialKind::SolidColor { color } => color,
            MaterialKind::Lambert {
                color,
                diffuse_reflection,
            } => brdf::lambert(diffuse_reflection, color),
            MaterialKind::LambertPhong {
                color,
                diffuse_reflection,
                specular_reflection,
                phong_exponent,
            } => {
                // phong wants the incident direction, not direction-to-light
                brdf::lambert(diffuse_reflection, color)
                    + brdf::phong(specular_reflection, phong_exponent, -l, v, hit.normal)
            }
            MaterialKind::CookTorrance {
                albedo,
                metalness,
                roughness,
            } => {
                let f0 = if metalness == 0.0 {
                    ColorRgb::gray(DIELECTRIC_F0)
                } else {
                    albedo
                };

                let h = (v + l).normalize();
                let fresnel = brdf::fresnel_schlick(h, v, f0);
                let distribution = brdf::normal_distribution_ggx(hit.normal, h, roughness);
                let geometry = brdf::geometry_smith(hit.normal, v, l, roughness);

                let n_dot_v = hit.normal.dot(v).max(0.0);
                let n_dot_l = hit.normal.dot(l).max(0.0);
                let denominator = (4.0 * n_dot_v * n_dot_l).max(DENOMINATOR_EPSILON);
                let specular = fresnel * (distribution * geometry / denominator);

                let kd = (ColorRgb::white() - fresnel) * (1.0 - metalness);
                let diffuse = brdf::lambert_color(kd, albedo);

                diffuse + specular
            }
        }
    }
}
