//! Glint - CPU path tracing over analytic spheres.
//!
//! A Monte Carlo path tracer: stochastic per-pixel sampling, bounded
//! ray bouncing through Lambertian, metal and dielectric materials,
//! and gamma-corrected PPM/PNG output. Scanlines render in parallel
//! with one private random generator per row, so a fixed seed always
//! reproduces the same image.

mod camera;
mod color;
mod hittable;
mod material;
mod renderer;
mod sphere;

pub use camera::Camera;
pub use color::{color_to_rgb8, linear_to_gamma, save_image, write_ppm, OutputError};
pub use hittable::{HitRecord, Hittable, HittableList};
pub use material::{Color, Dielectric, Lambertian, Material, Metal, ScatterResult};
pub use renderer::{ray_color, render, render_pixel, ImageBuffer};
pub use sphere::Sphere;

/// Re-export the math types used throughout the public API.
pub use glint_math::{Interval, Point3, Ray, Vec3};
