//! Stateless reflectance functions. Every routine returns the reflectance for
//! a single light/view pair; incident radiance and the cosine term are the
//! caller's business. Dot products that feed denominators or exponent bases
//! are clamped to zero first.

use std::f64::consts::PI;

use super::math::{ColorRgb, Vec3};

/// Lambert diffuse with a scalar diffuse reflection coefficient.
pub fn lambert(kd: f64, cd: ColorRgb) -> ColorRgb {
    (cd * kd) / PI
}

/// Lambert diffuse with a per-channel coefficient, used by Cook-Torrance
/// where the diffuse weight is `(1 - F)(1 - metalness)`.
pub fn lambert_color(kd: ColorRgb, cd: ColorRgb) -> ColorRgb {
    (cd * kd) / PI
}

/// Phong specular lobe around the mirrored light direction. `l` is the
/// incident direction, pointing from the light toward the surface.
pub fn phong(ks: f64, exponent: f64, l: Vec3, v: Vec3, n: Vec3) -> ColorRgb {
    let reflect = l.reflect(n);
    let cos_alpha = reflect.dot(v).max(0.0);
    ColorRgb::gray(ks * cos_alpha.powf(exponent))
}

/// Schlick approximation of the Fresnel term. `f0` is the base reflectivity
/// at normal incidence, grey ~0.04 for dielectrics and the albedo for metals.
pub fn fresnel_schlick(h: Vec3, v: Vec3, f0: ColorRgb) -> ColorRgb {
    let h_dot_v = h.dot(v).max(0.0);
    f0 + (ColorRgb::white() - f0) * (1.0 - h_dot_v).powi(5)
}

/// Trowbridge-Reitz GGX normal distribution, with the UE4 roughness-squared
/// remapping.
pub fn normal_distribution_ggx(n: Vec3, h: Vec3, roughness: f64) -> f64 {
    let alpha = roughness * roughness;
    let alpha_sqr = alpha * alpha;
    let n_dot_h = n.dot(h).max(0.0);
    let denominator = PI * (n_dot_h * n_dot_h * (alpha_sqr - 1.0) + 1.0).powi(2);
    alpha_sqr / denominator
}

/// Schlick-GGX masking term for one direction, with the direct-lighting
/// `k = (alpha + 1)^2 / 8` remapping.
pub fn geometry_schlick_ggx(n: Vec3, v: Vec3, roughness: f64) -> f64 {
    let alpha = roughness * roughness;
    let k = (alpha + 1.0).powi(2) / 8.0;
    let n_dot_v = n.dot(v).max(0.0);
    n_dot_v / (n_dot_v * (1.0 - k) + k)
}

/// Smith's combined masking-shadowing term for direct lighting.
pub fn geometry_smith(n: Vec3, v: Vec3, l: Vec3, roughness: f64) -> f64 {
    geometry_schlick_ggx(n, v, roughness) * geometry_schlick_ggx(n, l, roughness)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn lambert_scales_color_by_kd_over_pi() {
        let c = lambert(0.5, ColorRgb::new(1.0, 0.5, 0.0));
        assert!((c.r - 0.5 / PI).abs() < 1e-12);
        assert!((c.g - 0.25 / PI).abs() < 1e-12);
    }

    #[test]
    fn fresnel_equals_f0_at_normal_incidence() {
        let f0 = ColorRgb::new(0.95, 0.64, 0.54);
        let n = Vec3::z_axis();
        let f = fresnel_schlick(n, n, f0);
        assert!((f.r - f0.r).abs() < 1e-12);
        assert!((f.g - f0.g).abs() < 1e-12);
        assert!((f.b - f0.b).abs() < 1e-12);
    }

    #[test]
    fn fresnel_approaches_one_at_grazing_angle() {
        let f0 = ColorRgb::gray(0.04);
        let h = Vec3::z_axis();
        let v = Vec3::x_axis();
        let f = fresnel_schlick(h, v, f0);
        assert!((f.r - 1.0).abs() < 1e-9);
    }

    #[test]
    fn phong_peaks_along_the_mirror_direction() {
        let n = Vec3::y_axis();
        let incident = Vec3::new(1.0, -1.0, 0.0).normalize();
        let mirror = Vec3::new(1.0, 1.0, 0.0).normalize();
        let c = phong(0.8, 60.0, incident, mirror, n);
        assert!((c.r - 0.8).abs() < 1e-9);
    }

    #[test]
    fn phong_is_zero_when_reflection_points_away() {
        let n = Vec3::y_axis();
        let incident = Vec3::new(1.0, -1.0, 0.0).normalize();
        let away = Vec3::new(-1.0, -1.0, 0.0).normalize();
        let c = phong(1.0, 60.0, incident, away, n);
        assert_eq!(c.r, 0.0);
    }

    #[test]
    fn ggx_concentrates_around_the_normal() {
        let n = Vec3::z_axis();
        let aligned = normal_distribution_ggx(n, n, 0.3);
        let tilted = normal_distribution_ggx(
            n,
            Vec3::new(0.5, 0.0, 0.866_025_4).normalize(),
            0.3,
        );
        assert!(aligned > tilted);
    }

    #[test]
    fn ggx_normalizes_over_the_hemisphere() {
        // integrate D(h) (n.h) over the hemisphere with a theta/phi grid; the
        // distribution should account for (roughly) all microfacet area
        let n = Vec3::z_axis();
        let roughness = 0.6;
        let steps_theta = 512;
        let steps_phi = 512;
        let d_theta = (PI / 2.0) / steps_theta as f64;
        let d_phi = (2.0 * PI) / steps_phi as f64;

        let mut integral = 0.0;
        for it in 0..steps_theta {
            let theta = (it as f64 + 0.5) * d_theta;
            for ip in 0..steps_phi {
                let phi = (ip as f64 + 0.5) * d_phi;
                let h = Vec3::new(
                    theta.sin() * phi.cos(),
                    theta.sin() * phi.sin(),
                    theta.cos(),
                );
                integral +=
                    normal_distribution_ggx(n, h, roughness) * theta.cos() * theta.sin() * d_theta
                        * d_phi;
            }
        }
        assert!((integral - 1.0).abs() < 0.05, "integral was {integral}");
    }

    #[test]
    fn smith_term_stays_in_unit_interval() {
        let n = Vec3::z_axis();
        let v = Vec3::new(0.3, 0.1, 0.95).normalize();
        let l = Vec3::new(-0.4, 0.2, 0.89).normalize();
        let g = geometry_smith(n, v, l, 0.8);
        assert!(g > 0.0 && g <= 1.0);
    }
}
