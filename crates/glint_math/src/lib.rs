// Re-export glam for convenience. The tracer works in f64 throughout,
// so DVec3 is the one vector type, used for points, directions and colors.
pub use glam::DVec3 as Vec3;

/// Alias used where a vector is semantically a position.
pub type Point3 = Vec3;

mod interval;
mod ray;
mod sample;
mod vec;

pub use interval::Interval;
pub use ray::Ray;
pub use sample::{
    gen_f64, gen_range, random_in_unit_disk, random_on_hemisphere, random_unit_vector, random_vec,
    random_vec_in,
};
pub use vec::{near_zero, reflect, refract};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_vec3_creation() {
        let v = Vec3::new(1.0, 2.0, 3.0);
        assert_eq!(v.x, 1.0);
        assert_eq!(v.y, 2.0);
        assert_eq!(v.z, 3.0);
    }

    #[test]
    fn test_vec3_operations() {
        let a = Vec3::new(1.0, 2.0, 3.0);
        let b = Vec3::new(4.0, 5.0, 6.0);
        assert_eq!(a + b, Vec3::new(5.0, 7.0, 9.0));
        assert_eq!(a * b, Vec3::new(4.0, 10.0, 18.0));
        assert_eq!(a.dot(b), 32.0);
        assert_eq!(Vec3::X.cross(Vec3::Y), Vec3::Z);
    }
}
