//! Core path tracing renderer.
//!
//! Drives the per-pixel sample loop and the bounce loop, and renders
//! scanlines in parallel with one private random generator per row so
//! a fixed seed reproduces the image regardless of scheduling.

use crate::{Camera, Color, Hittable};
use glint_math::{Interval, Ray};
use log::info;
use rand::rngs::StdRng;
use rand::{RngCore, SeedableRng};
use rayon::prelude::*;

/// Minimum accepted hit parameter; rejects roots produced by floating
/// round-off at the previous bounce's exit point (shadow acne).
const T_MIN: f64 = 0.001;

/// Compute the color seen by a ray.
///
/// The ray is followed through up to `max_depth` bounces, multiplying
/// the attenuation of every scatter. Absorption or an exhausted bounce
/// budget yields black; a miss yields the sky gradient. The bounce
/// recursion is written as a loop so stack use stays constant.
pub fn ray_color(
    ray: &Ray,
    world: &dyn Hittable,
    max_depth: u32,
    rng: &mut dyn RngCore,
) -> Color {
    let mut ray = *ray;
    let mut attenuation = Color::ONE;

    for _ in 0..max_depth {
        match world.hit(&ray, Interval::new(T_MIN, f64::INFINITY)) {
            Some(rec) => match rec.material.scatter(&ray, &rec, rng) {
                Some(scatter) => {
                    attenuation *= scatter.attenuation;
                    ray = scatter.scattered;
                }
                // Absorbed
                None => return Color::ZERO,
            },
            None => return attenuation * sky_gradient(&ray),
        }
    }

    // Bounce budget exhausted: no more light is gathered
    Color::ZERO
}

/// Background gradient: white at the horizon blending to light blue up.
fn sky_gradient(ray: &Ray) -> Color {
    let unit_direction = ray.direction.normalize();
    let a = 0.5 * (unit_direction.y + 1.0);
    let white = Color::new(1.0, 1.0, 1.0);
    let blue = Color::new(0.5, 0.7, 1.0);
    white * (1.0 - a) + blue * a
}

/// Render a single pixel with multi-sampling.
pub fn render_pixel(
    camera: &Camera,
    world: &dyn Hittable,
    x: u32,
    y: u32,
    rng: &mut dyn RngCore,
) -> Color {
    let mut pixel_color = Color::ZERO;

    for _ in 0..camera.samples_per_pixel {
        let ray = camera.get_ray(x, y, rng);
        pixel_color += ray_color(&ray, world, camera.max_depth, rng);
    }

    pixel_color * camera.pixel_samples_scale()
}

/// Simple image buffer for storing render output in linear color.
pub struct ImageBuffer {
    pub width: u32,
    pub height: u32,
    pub pixels: Vec<Color>,
}

impl ImageBuffer {
    /// Create a new image buffer filled with black.
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            width,
            height,
            pixels: vec![Color::ZERO; (width * height) as usize],
        }
    }

    /// Get the pixel at (x, y).
    pub fn get(&self, x: u32, y: u32) -> Color {
        self.pixels[(y * self.width + x) as usize]
    }

    /// Set the pixel at (x, y).
    pub fn set(&mut self, x: u32, y: u32, color: Color) {
        self.pixels[(y * self.width + x) as usize] = color;
    }
}

/// Render the scene to an image buffer.
///
/// Re-derives the camera state from its current configuration, then
/// renders scanlines in parallel. Each row seeds its own generator
/// from `seed` and the row index, so output is deterministic for a
/// given seed and independent of how rayon schedules the rows. The
/// world must not be mutated while this runs.
pub fn render(camera: &mut Camera, world: &dyn Hittable, seed: u64) -> ImageBuffer {
    camera.initialize();

    let width = camera.image_width;
    let height = camera.image_height();
    let mut image = ImageBuffer::new(width, height);

    info!(
        "rendering {}x{} at {} spp, depth {}, on {} threads",
        width,
        height,
        camera.samples_per_pixel,
        camera.max_depth,
        rayon::current_num_threads()
    );
    let start = std::time::Instant::now();

    let camera = &*camera;
    image
        .pixels
        .par_chunks_mut(width as usize)
        .enumerate()
        .for_each(|(y, row)| {
            let mut rng = StdRng::seed_from_u64(row_seed(seed, y as u64));
            for (x, pixel) in row.iter_mut().enumerate() {
                *pixel = render_pixel(camera, world, x as u32, y as u32, &mut rng);
            }
        });

    info!("render finished in {:.2?}", start.elapsed());
    image
}

/// Derive a per-row generator seed with disjoint streams across rows.
fn row_seed(seed: u64, row: u64) -> u64 {
    seed ^ row.wrapping_mul(0x9E37_79B9_7F4A_7C15)
}
