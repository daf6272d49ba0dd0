//! Material trait and the three scattering models.

use crate::hittable::HitRecord;
use glint_math::{gen_f64, near_zero, random_unit_vector, reflect, refract, Ray, Vec3};
use rand::RngCore;

/// Color type alias (RGB values typically 0-1)
pub type Color = Vec3;

/// Result of a successful scatter: the attenuation to apply and the
/// outgoing ray to continue with.
#[derive(Debug, Clone, Copy)]
pub struct ScatterResult {
    pub attenuation: Color,
    pub scattered: Ray,
}

/// Trait for materials that describe how light interacts with surfaces.
pub trait Material: Send + Sync {
    /// Scatter an incoming ray.
    ///
    /// Returns Some(ScatterResult) if the ray scatters, or None if the
    /// ray is absorbed.
    fn scatter(&self, ray_in: &Ray, rec: &HitRecord, rng: &mut dyn RngCore)
        -> Option<ScatterResult>;
}

/// Lambertian (diffuse) material.
pub struct Lambertian {
    albedo: Color,
}

impl Lambertian {
    /// Create a new Lambertian material with the given albedo color.
    pub fn new(albedo: Color) -> Self {
        Self { albedo }
    }
}

impl Material for Lambertian {
    fn scatter(
        &self,
        _ray_in: &Ray,
        rec: &HitRecord,
        rng: &mut dyn RngCore,
    ) -> Option<ScatterResult> {
        let mut scatter_direction = rec.normal + random_unit_vector(rng);

        // Catch degenerate scatter direction
        if near_zero(scatter_direction) {
            scatter_direction = rec.normal;
        }

        Some(ScatterResult {
            attenuation: self.albedo,
            scattered: Ray::new(rec.p, scatter_direction),
        })
    }
}

/// Metal (specular) material.
pub struct Metal {
    albedo: Color,
    fuzz: f64,
}

impl Metal {
    /// Create a new Metal material.
    ///
    /// - `albedo`: the color of the metal
    /// - `fuzz`: roughness, 0.0 = perfect mirror, 1.0 = very rough;
    ///   clamped to [0, 1]
    pub fn new(albedo: Color, fuzz: f64) -> Self {
        Self {
            albedo,
            fuzz: fuzz.clamp(0.0, 1.0),
        }
    }
}

impl Material for Metal {
    fn scatter(
        &self,
        ray_in: &Ray,
        rec: &HitRecord,
        rng: &mut dyn RngCore,
    ) -> Option<ScatterResult> {
        let reflected = reflect(ray_in.direction.normalize(), rec.normal);
        let scattered_dir = reflected + self.fuzz * random_unit_vector(rng);

        // Only scatter if the fuzzed reflection stays above the surface
        if scattered_dir.dot(rec.normal) > 0.0 {
            Some(ScatterResult {
                attenuation: self.albedo,
                scattered: Ray::new(rec.p, scattered_dir),
            })
        } else {
            None
        }
    }
}

/// Dielectric (glass) material.
pub struct Dielectric {
    /// Index of refraction
    refraction_index: f64,
}

impl Dielectric {
    /// Create a new Dielectric material.
    ///
    /// - `refraction_index`: 1.0 = air, 1.5 = glass, 2.4 = diamond
    pub fn new(refraction_index: f64) -> Self {
        Self { refraction_index }
    }

    /// Schlick's approximation for reflectance
    fn reflectance(cosine: f64, refraction_index: f64) -> f64 {
        let r0 = ((1.0 - refraction_index) / (1.0 + refraction_index)).powi(2);
        r0 + (1.0 - r0) * (1.0 - cosine).powi(5)
    }
}

impl Material for Dielectric {
    fn scatter(
        &self,
        ray_in: &Ray,
        rec: &HitRecord,
        rng: &mut dyn RngCore,
    ) -> Option<ScatterResult> {
        // Glass attenuates nothing
        let attenuation = Color::ONE;
        let refraction_ratio = if rec.front_face {
            1.0 / self.refraction_index
        } else {
            self.refraction_index
        };

        let unit_direction = ray_in.direction.normalize();
        let cos_theta = (-unit_direction).dot(rec.normal).min(1.0);
        let sin_theta = (1.0 - cos_theta * cos_theta).sqrt();

        // Total internal reflection
        let cannot_refract = refraction_ratio * sin_theta > 1.0;

        let direction =
            if cannot_refract || Self::reflectance(cos_theta, refraction_ratio) > gen_f64(rng) {
                reflect(unit_direction, rec.normal)
            } else {
                refract(unit_direction, rec.normal, refraction_ratio)
            };

        Some(ScatterResult {
            attenuation,
            scattered: Ray::new(rec.p, direction),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use glint_math::Point3;
    use rand::rngs::StdRng;
    use rand::SeedableRng;
    use std::sync::Arc;

    fn record_at(
        p: Point3,
        outward_normal: Vec3,
        ray: &Ray,
        material: Arc<dyn Material>,
    ) -> HitRecord {
        HitRecord::new(ray, 1.0, p, outward_normal, material)
    }

    #[test]
    fn test_lambertian_attenuation_and_never_absorbs() {
        let albedo = Color::new(0.8, 0.2, 0.4);
        let mat = Arc::new(Lambertian::new(albedo));
        let ray = Ray::new(Point3::ZERO, Vec3::new(0.0, -1.0, 0.0));
        let rec = record_at(Point3::new(0.0, -1.0, 0.0), Vec3::Y, &ray, mat.clone());

        let mut rng = StdRng::seed_from_u64(5);
        for _ in 0..200 {
            let result = mat
                .scatter(&ray, &rec, &mut rng)
                .expect("lambertian never absorbs");
            assert_eq!(result.attenuation, albedo);
            // Scattered ray leaves from the hit point
            assert_eq!(result.scattered.origin, rec.p);
        }
    }

    #[test]
    fn test_metal_mirror_reflection() {
        let albedo = Color::new(0.7, 0.6, 0.5);
        let mat = Arc::new(Metal::new(albedo, 0.0));
        // 45 degree incidence onto the ground plane
        let ray = Ray::new(Point3::new(-1.0, 1.0, 0.0), Vec3::new(1.0, -1.0, 0.0));
        let rec = record_at(Point3::ZERO, Vec3::Y, &ray, mat.clone());

        let mut rng = StdRng::seed_from_u64(5);
        let result = mat.scatter(&ray, &rec, &mut rng).expect("above surface");
        assert_eq!(result.attenuation, albedo);

        let expected = Vec3::new(1.0, 1.0, 0.0).normalize();
        assert!((result.scattered.direction.normalize() - expected).length() < 1e-12);
    }

    #[test]
    fn test_metal_grazing_reflection_absorbed() {
        // A ray parallel to the surface reflects to dot(dir, n) == 0,
        // which the hemisphere check rejects.
        let mat = Arc::new(Metal::new(Color::ONE, 0.0));
        let ray = Ray::new(Point3::new(-1.0, 0.0, 0.0), Vec3::X);
        let rec = HitRecord {
            p: Point3::ZERO,
            normal: Vec3::Y,
            t: 1.0,
            front_face: true,
            material: mat.clone(),
        };

        let mut rng = StdRng::seed_from_u64(5);
        assert!(mat.scatter(&ray, &rec, &mut rng).is_none());
    }

    #[test]
    fn test_metal_fuzz_clamped() {
        // fuzz > 1 behaves as fuzz = 1: scattered direction stays within
        // one unit of the pure reflection.
        let mat = Metal::new(Color::ONE, 7.5);
        let ray = Ray::new(Point3::new(0.0, 1.0, 0.0), Vec3::new(0.0, -1.0, 0.0));
        let rec = HitRecord {
            p: Point3::ZERO,
            normal: Vec3::Y,
            t: 1.0,
            front_face: true,
            material: Arc::new(Lambertian::new(Color::ONE)),
        };

        let mut rng = StdRng::seed_from_u64(11);
        for _ in 0..200 {
            if let Some(result) = mat.scatter(&ray, &rec, &mut rng) {
                let offset = result.scattered.direction - Vec3::Y;
                assert!(offset.length() <= 1.0 + 1e-9);
            }
        }
    }

    #[test]
    fn test_dielectric_attenuation_is_white() {
        let mat = Arc::new(Dielectric::new(1.5));
        let ray = Ray::new(Point3::new(0.0, 1.0, 0.0), Vec3::new(0.3, -1.0, 0.1));
        let rec = record_at(Point3::ZERO, Vec3::Y, &ray, mat.clone());

        let mut rng = StdRng::seed_from_u64(17);
        for _ in 0..200 {
            let result = mat
                .scatter(&ray, &rec, &mut rng)
                .expect("dielectric never absorbs");
            assert_eq!(result.attenuation, Color::ONE);
        }
    }

    #[test]
    fn test_dielectric_total_internal_reflection() {
        // Exiting glass at a grazing angle: ratio * sin_theta > 1 forces
        // reflection, deterministically.
        let mat = Arc::new(Dielectric::new(1.5));
        // Back-face hit: outward normal +Y, ray arriving from below
        let ray = Ray::new(Point3::new(-1.0, -0.2, 0.0), Vec3::new(1.0, 0.2, 0.0));
        let rec = record_at(Point3::ZERO, Vec3::Y, &ray, mat.clone());
        assert!(!rec.front_face);

        let mut rng = StdRng::seed_from_u64(23);
        let result = mat.scatter(&ray, &rec, &mut rng).expect("reflects");
        // Reflected ray heads back downward off the internal surface
        assert!(result.scattered.direction.y < 0.0);
        assert!(result.scattered.direction.x > 0.0);
    }
}
