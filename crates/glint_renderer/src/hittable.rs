//! Hittable trait and HitRecord for ray-object intersection.

use crate::Material;
use glint_math::{Interval, Point3, Ray, Vec3};
use std::sync::Arc;

/// Record of a ray-object intersection.
#[derive(Clone)]
pub struct HitRecord {
    /// Point of intersection
    pub p: Point3,
    /// Surface normal at intersection (always points against the ray)
    pub normal: Vec3,
    /// Parameter t where the intersection occurs
    pub t: f64,
    /// Whether the ray hit the front face (outside) of the surface
    pub front_face: bool,
    /// Material at the intersection point
    pub material: Arc<dyn Material>,
}

impl HitRecord {
    /// Build a record from the outward normal of the surface.
    ///
    /// The stored normal always points against the ray direction; the
    /// front_face flag records which side was hit so materials can tell
    /// entering rays from exiting ones.
    pub fn new(
        ray: &Ray,
        t: f64,
        p: Point3,
        outward_normal: Vec3,
        material: Arc<dyn Material>,
    ) -> Self {
        let front_face = ray.direction.dot(outward_normal) < 0.0;
        let normal = if front_face {
            outward_normal
        } else {
            -outward_normal
        };

        Self {
            p,
            normal,
            t,
            front_face,
            material,
        }
    }
}

/// Trait for objects that can be hit by rays.
pub trait Hittable: Send + Sync {
    /// Test if a ray hits this object within the given interval.
    ///
    /// Returns the nearest intersection whose parameter lies strictly
    /// inside `ray_t`, or None.
    fn hit(&self, ray: &Ray, ray_t: Interval) -> Option<HitRecord>;
}

/// A list of hittable objects.
///
/// Objects are shared handles, so a primitive (and its material) may be
/// referenced from several lists. The list must not be mutated while a
/// render is reading it; add and clear between renders only.
pub struct HittableList {
    objects: Vec<Arc<dyn Hittable>>,
}

impl HittableList {
    /// Create a new empty hittable list.
    pub fn new() -> Self {
        Self {
            objects: Vec::new(),
        }
    }

    /// Add an object to the list.
    pub fn add(&mut self, object: Arc<dyn Hittable>) {
        self.objects.push(object);
    }

    /// Clear all objects from the list.
    pub fn clear(&mut self) {
        self.objects.clear();
    }

    /// Get the number of objects.
    pub fn len(&self) -> usize {
        self.objects.len()
    }

    /// Check if the list is empty.
    pub fn is_empty(&self) -> bool {
        self.objects.is_empty()
    }
}

impl Default for HittableList {
    fn default() -> Self {
        Self::new()
    }
}

impl Hittable for HittableList {
    fn hit(&self, ray: &Ray, ray_t: Interval) -> Option<HitRecord> {
        let mut closest_so_far = ray_t.max;
        let mut closest_hit = None;

        // Shrinking the upper bound as hits are found guarantees the
        // nearest hit across all children in a single pass. A later
        // child only wins with a strictly smaller t, so ties keep the
        // earliest child's result.
        for object in &self.objects {
            let interval = Interval::new(ray_t.min, closest_so_far);
            if let Some(rec) = object.hit(ray, interval) {
                closest_so_far = rec.t;
                closest_hit = Some(rec);
            }
        }

        closest_hit
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Lambertian, Sphere};
    use glint_math::Vec3;

    fn gray_sphere(center: Point3, radius: f64) -> Arc<Sphere> {
        Arc::new(Sphere::new(
            center,
            radius,
            Arc::new(Lambertian::new(Vec3::splat(0.5))),
        ))
    }

    #[test]
    fn test_list_add_clear() {
        let mut list = HittableList::new();
        assert!(list.is_empty());

        list.add(gray_sphere(Point3::new(0.0, 0.0, -1.0), 0.5));
        list.add(gray_sphere(Point3::new(0.0, 0.0, -2.0), 0.5));
        assert_eq!(list.len(), 2);

        list.clear();
        assert!(list.is_empty());
    }

    #[test]
    fn test_nearest_hit_wins() {
        // Two overlapping spheres along -z; the closer surface must win
        // regardless of insertion order.
        for flip in [false, true] {
            let near = gray_sphere(Point3::new(0.0, 0.0, -1.0), 0.5);
            let far = gray_sphere(Point3::new(0.0, 0.0, -1.5), 0.5);

            let mut list = HittableList::new();
            if flip {
                list.add(far.clone());
                list.add(near.clone());
            } else {
                list.add(near.clone());
                list.add(far.clone());
            }

            let ray = Ray::new(Point3::ZERO, Vec3::new(0.0, 0.0, -1.0));
            let rec = list
                .hit(&ray, Interval::new(0.001, f64::INFINITY))
                .expect("ray through both spheres must hit");
            assert!((rec.t - 0.5).abs() < 1e-9);
        }
    }

    #[test]
    fn test_empty_list_misses() {
        let list = HittableList::new();
        let ray = Ray::new(Point3::ZERO, Vec3::new(0.0, 0.0, -1.0));
        assert!(list.hit(&ray, Interval::new(0.001, f64::INFINITY)).is_none());
    }

    #[test]
    fn test_front_face_invariant() {
        let mut list = HittableList::new();
        list.add(gray_sphere(Point3::new(0.0, 0.0, -1.0), 0.5));
        list.add(gray_sphere(Point3::new(0.0, 0.0, -3.0), 1.0));

        // From outside and from inside the first sphere the reported
        // normal must oppose the ray.
        let rays = [
            Ray::new(Point3::ZERO, Vec3::new(0.0, 0.0, -1.0)),
            Ray::new(Point3::new(0.0, 0.0, -1.0), Vec3::new(0.0, 0.0, -1.0)),
            Ray::new(Point3::new(0.0, 5.0, -3.0), Vec3::new(0.0, -1.0, 0.0)),
        ];
        for ray in rays {
            let rec = list
                .hit(&ray, Interval::new(0.001, f64::INFINITY))
                .expect("constructed to hit");
            assert!(ray.direction.dot(rec.normal) <= 0.0);
        }
    }
}
