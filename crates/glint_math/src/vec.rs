//! Vector helpers shared by the scattering models.

use crate::Vec3;

/// Returns true if every component's absolute value is below 1e-8.
///
/// Scatter directions this small are degenerate and must be replaced
/// before building a ray out of them.
#[inline]
pub fn near_zero(v: Vec3) -> bool {
    v.abs().max_element() < 1e-8
}

/// Reflect a vector about a normal.
#[inline]
pub fn reflect(v: Vec3, n: Vec3) -> Vec3 {
    v - 2.0 * v.dot(n) * n
}

/// Refract a vector through a surface using Snell's law.
///
/// `uv` must be a unit vector and `n` the unit normal on the incoming
/// side; `etai_over_etat` is the ratio of refractive indices across the
/// interface. The cosine is clamped so floating round-off cannot push
/// the square root out of its domain.
#[inline]
pub fn refract(uv: Vec3, n: Vec3, etai_over_etat: f64) -> Vec3 {
    let cos_theta = (-uv).dot(n).min(1.0);
    let r_out_perp = etai_over_etat * (uv + cos_theta * n);
    let r_out_parallel = -(1.0 - r_out_perp.length_squared()).abs().sqrt() * n;
    r_out_perp + r_out_parallel
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_near_zero() {
        assert!(near_zero(Vec3::ZERO));
        assert!(near_zero(Vec3::splat(1e-9)));
        assert!(!near_zero(Vec3::new(1e-9, 1e-9, 1e-7)));
        assert!(!near_zero(Vec3::X));
    }

    #[test]
    fn test_reflect() {
        // 45 degree bounce off the ground plane
        let v = Vec3::new(1.0, -1.0, 0.0);
        let n = Vec3::Y;
        assert_eq!(reflect(v, n), Vec3::new(1.0, 1.0, 0.0));

        // Head-on reflection flips the vector
        assert_eq!(reflect(-Vec3::Y, Vec3::Y), Vec3::Y);
    }

    #[test]
    fn test_refract_straight_through() {
        // Normal incidence is unchanged regardless of the index ratio
        let uv = -Vec3::Y;
        let refracted = refract(uv, Vec3::Y, 0.5);
        assert!((refracted - uv).length() < 1e-12);
    }

    #[test]
    fn test_refract_bends_toward_normal() {
        // Entering a denser medium (ratio < 1) bends the ray toward the normal
        let uv = Vec3::new(1.0, -1.0, 0.0).normalize();
        let refracted = refract(uv, Vec3::Y, 1.0 / 1.5);

        // Still unit length and still heading downward
        assert!((refracted.length() - 1.0).abs() < 1e-12);
        assert!(refracted.y < 0.0);

        // Smaller horizontal component than the incoming ray
        assert!(refracted.x.abs() < uv.x.abs());
    }
}
