//! Command line front end for the glint path tracer.

use anyhow::Result;
use clap::Parser;
use glint_math::{gen_f64, gen_range, random_vec, random_vec_in, Point3, Vec3};
use glint_renderer::{
    render, save_image, Camera, Color, Dielectric, HittableList, Lambertian, Metal, Sphere,
};
use log::info;
use rand::rngs::StdRng;
use rand::{RngCore, SeedableRng};
use std::sync::Arc;

/// Command line arguments structure using clap derive macros
#[derive(Parser)]
#[command(name = "glint")]
#[command(about = "A CPU path tracer for analytic sphere scenes")]
struct Args {
    /// Image width in pixels (height follows the 16:9 aspect ratio)
    #[arg(long, default_value_t = 400)]
    width: u32,

    /// Number of samples per pixel
    #[arg(long, short = 's', default_value_t = 100)]
    samples_per_pixel: u32,

    /// Maximum number of ray bounces
    #[arg(long, default_value_t = 50)]
    max_depth: u32,

    /// Seed for scene generation and pixel sampling
    #[arg(long, default_value_t = 0)]
    seed: u64,

    /// Output file path (.ppm or .png)
    #[arg(short, long, default_value = "out.ppm")]
    output: String,

    /// Enable debug logging
    #[arg(short, long)]
    verbose: bool,
}

/// Build the classic random-sphere scene: a ground sphere, a grid of
/// small diffuse/metal/glass spheres, and three large feature spheres.
fn build_scene(rng: &mut dyn RngCore) -> HittableList {
    let mut world = HittableList::new();

    let ground = Arc::new(Lambertian::new(Color::new(0.5, 0.5, 0.5)));
    world.add(Arc::new(Sphere::new(
        Point3::new(0.0, -1000.0, 0.0),
        1000.0,
        ground,
    )));

    for a in -11..11 {
        for b in -11..11 {
            let choose_mat = gen_f64(rng);
            let center = Point3::new(
                a as f64 + 0.9 * gen_f64(rng),
                0.2,
                b as f64 + 0.9 * gen_f64(rng),
            );

            // Keep the grid clear of the large metal sphere
            if (center - Point3::new(4.0, 0.2, 0.0)).length() <= 0.9 {
                continue;
            }

            if choose_mat < 0.8 {
                // Diffuse
                let albedo = random_vec(rng) * random_vec(rng);
                world.add(Arc::new(Sphere::new(
                    center,
                    0.2,
                    Arc::new(Lambertian::new(albedo)),
                )));
            } else if choose_mat < 0.95 {
                // Metal
                let albedo = random_vec_in(rng, 0.5, 1.0);
                let fuzz = gen_range(rng, 0.0, 0.5);
                world.add(Arc::new(Sphere::new(
                    center,
                    0.2,
                    Arc::new(Metal::new(albedo, fuzz)),
                )));
            } else {
                // Glass
                world.add(Arc::new(Sphere::new(
                    center,
                    0.2,
                    Arc::new(Dielectric::new(1.5)),
                )));
            }
        }
    }

    world.add(Arc::new(Sphere::new(
        Point3::new(0.0, 1.0, 0.0),
        1.0,
        Arc::new(Dielectric::new(1.5)),
    )));
    world.add(Arc::new(Sphere::new(
        Point3::new(-4.0, 1.0, 0.0),
        1.0,
        Arc::new(Lambertian::new(Color::new(0.4, 0.2, 0.1))),
    )));
    world.add(Arc::new(Sphere::new(
        Point3::new(4.0, 1.0, 0.0),
        1.0,
        Arc::new(Metal::new(Color::new(0.7, 0.6, 0.5), 0.0)),
    )));

    world
}

fn main() -> Result<()> {
    let args = Args::parse();

    env_logger::Builder::from_default_env()
        .filter_level(if args.verbose {
            log::LevelFilter::Debug
        } else {
            log::LevelFilter::Info
        })
        .init();

    info!(
        "image width {}, {} spp, max depth {}, seed {}",
        args.width, args.samples_per_pixel, args.max_depth, args.seed
    );

    let mut scene_rng = StdRng::seed_from_u64(args.seed);
    let world = build_scene(&mut scene_rng);
    info!("scene built with {} objects", world.len());

    let mut camera = Camera::new()
        .with_image(16.0 / 9.0, args.width)
        .with_quality(args.samples_per_pixel, args.max_depth)
        .with_position(
            Point3::new(13.0, 2.0, 3.0),
            Point3::ZERO,
            Vec3::new(0.0, 1.0, 0.0),
        )
        .with_lens(20.0, 0.6, 10.0);

    let image = render(&mut camera, &world, args.seed);

    save_image(&image, &args.output)?;
    info!("wrote {}", args.output);

    Ok(())
}
