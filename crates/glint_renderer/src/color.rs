//! Color post-processing and image file output.
//!
//! Linear colors are gamma-corrected, clamped, and quantized to bytes.
//! The quantization (clamp to [0, 0.999], scale by 256, truncate) is a
//! byte-level contract of the PPM output; do not "fix" the truncation
//! to rounding.

use crate::{Color, ImageBuffer};
use glint_math::Interval;
use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::Path;
use thiserror::Error;

/// Errors from writing a rendered image to disk.
#[derive(Debug, Error)]
pub enum OutputError {
    #[error("failed to write image: {0}")]
    Io(#[from] io::Error),
    #[error("failed to encode image: {0}")]
    Encode(#[from] image::ImageError),
    #[error("unsupported output format {0:?} (expected .ppm or .png)")]
    UnsupportedFormat(String),
}

/// Apply gamma correction (gamma = 2.0).
#[inline]
pub fn linear_to_gamma(linear: f64) -> f64 {
    if linear > 0.0 {
        linear.sqrt()
    } else {
        0.0
    }
}

/// Channel intensity range before byte quantization. The upper bound of
/// 0.999 keeps 256 * intensity strictly below 256.
const INTENSITY: Interval = Interval::new(0.000, 0.999);

/// Convert a linear color to gamma-corrected 8-bit RGB.
pub fn color_to_rgb8(color: Color) -> [u8; 3] {
    let r = linear_to_gamma(color.x);
    let g = linear_to_gamma(color.y);
    let b = linear_to_gamma(color.z);

    [
        (256.0 * INTENSITY.clamp(r)) as u8,
        (256.0 * INTENSITY.clamp(g)) as u8,
        (256.0 * INTENSITY.clamp(b)) as u8,
    ]
}

/// Write the image as a plain-text PPM (P3).
///
/// Header `P3`, `<width> <height>`, `255`, then one `r g b` line per
/// pixel, row-major, top-to-bottom.
pub fn write_ppm(image: &ImageBuffer, writer: &mut dyn Write) -> io::Result<()> {
    writeln!(writer, "P3")?;
    writeln!(writer, "{} {}", image.width, image.height)?;
    writeln!(writer, "255")?;

    for y in 0..image.height {
        for x in 0..image.width {
            let [r, g, b] = color_to_rgb8(image.get(x, y));
            writeln!(writer, "{} {} {}", r, g, b)?;
        }
    }

    Ok(())
}

/// Save the image to `path`, choosing the format from the extension.
///
/// `.ppm` uses the plain-text P3 writer; `.png` encodes through the
/// `image` crate with the same gamma and quantization applied.
pub fn save_image(image: &ImageBuffer, path: impl AsRef<Path>) -> Result<(), OutputError> {
    let path = path.as_ref();
    let extension = path
        .extension()
        .map(|ext| ext.to_string_lossy().to_ascii_lowercase())
        .unwrap_or_default();

    match extension.as_str() {
        "ppm" => {
            let file = File::create(path)?;
            let mut writer = BufWriter::new(file);
            write_ppm(image, &mut writer)?;
            writer.flush()?;
            Ok(())
        }
        "png" => {
            let rgb = image::RgbImage::from_fn(image.width, image.height, |x, y| {
                image::Rgb(color_to_rgb8(image.get(x, y)))
            });
            rgb.save(path)?;
            Ok(())
        }
        other => Err(OutputError::UnsupportedFormat(other.to_string())),
    }
}
