//! Seeding a grid from a raster image.

use std::path::Path;

use image::{DynamicImage, GrayImage, Luma, imageops::FilterType};
use tracing::{debug, error};

use super::{Cell, Grid};
use crate::error::{AutomatonError, Result};

/// Every colour channel is divided by this before grayscale conversion
pub const BRIGHTNESS_DIVISOR: u8 = 2;

/// Pixels strictly brighter than this become live cells
pub const LIVE_THRESHOLD: u8 = 55;

/// Open the image at `path` and derive a `width × height` seed grid
pub fn load_seed(path: impl AsRef<Path>, width: usize, height: usize) -> Result<Grid> {
    let path = path.as_ref();
    let image = image::open(path)?;
    debug!(path = %path.display(), width = image.width(), height = image.height(), "seed image opened");
    seed_from_image(&image, width, height)
}

/// Derive a `width × height` seed grid from an in-memory image.
///
/// The image is dimmed, converted to grayscale, shrunk to fit (never
/// enlarged), centred with zero padding and thresholded.
pub fn seed_from_image(image: &DynamicImage, width: usize, height: usize) -> Result<Grid> {
    let gray = fit_within(&dimmed_grayscale(image), width, height);
    let (img_w, img_h) = (gray.width() as usize, gray.height() as usize);

    let pad_x = width.saturating_sub(img_w);
    let pad_y = height.saturating_sub(img_h);
    let (left, top) = (pad_x / 2, pad_y / 2);
    debug!(
        img_w, img_h, left, right = pad_x - left, top, bottom = pad_y - top,
        "padding seed image"
    );

    let padded = (img_w + pad_x, img_h + pad_y);
    if padded != (width, height) {
        error!(?padded, expected = ?(width, height), "seed image did not converge to grid shape");
        return Err(AutomatonError::InvariantViolation {
            expected: (width, height),
            actual: padded,
        });
    }

    Ok(Grid::from_fn(width, height, |x, y| {
        let inside = (left..left + img_w).contains(&x) && (top..top + img_h).contains(&y);
        Cell::from(inside && gray.get_pixel((x - left) as u32, (y - top) as u32)[0] > LIVE_THRESHOLD)
    }))
}

/// Scale every colour channel by half (truncating), then reduce to luma
/// with the ITU-R 601 fixed-point weights
fn dimmed_grayscale(image: &DynamicImage) -> GrayImage {
    let rgb = image.to_rgb8();
    GrayImage::from_fn(rgb.width(), rgb.height(), |x, y| {
        let [r, g, b] = rgb.get_pixel(x, y).0.map(|c| u32::from(c / BRIGHTNESS_DIVISOR));
        Luma([luma_601(r, g, b)])
    })
}

/// `0.299 R + 0.587 G + 0.114 B` in 16-bit fixed point, rounded
fn luma_601(r: u32, g: u32, b: u32) -> u8 {
    ((r * 19595 + g * 38470 + b * 7471 + 0x8000) >> 16) as u8
}

/// Target size for shrinking a `w × h` image into `max_w × max_h`, or `None`
/// when it already fits. The constrained side is filled exactly; the other
/// side takes whichever of floor/ceil keeps the aspect ratio closer.
fn thumbnail_size(w: u32, h: u32, max_w: u32, max_h: u32) -> Option<(u32, u32)> {
    if w <= max_w && h <= max_h {
        return None;
    }

    let aspect = f64::from(w) / f64::from(h);
    let (x, y) = (f64::from(max_w), f64::from(max_h));
    if x / y >= aspect {
        let new_w = round_aspect(y * aspect, |n| (aspect - n / y).abs());
        Some((new_w, max_h))
    } else {
        let new_h = round_aspect(x / aspect, |n| if n == 0.0 { 0.0 } else { (aspect - x / n).abs() });
        Some((max_w, new_h))
    }
}

/// Floor or ceil of `value`, whichever scores lower under `error`; ties go
/// to the floor. Never below 1.
fn round_aspect(value: f64, error: impl Fn(f64) -> f64) -> u32 {
    let (lo, hi) = (value.floor(), value.ceil());
    let best = if error(hi) < error(lo) { hi } else { lo };
    (best as u32).max(1)
}

/// Downscale preserving aspect ratio so the image fits in `width × height`
fn fit_within(gray: &GrayImage, width: usize, height: usize) -> GrayImage {
    let max_w = u32::try_from(width).unwrap_or(u32::MAX);
    let max_h = u32::try_from(height).unwrap_or(u32::MAX);
    if max_w == 0 || max_h == 0 {
        return GrayImage::new(0, 0);
    }
    match thumbnail_size(gray.width(), gray.height(), max_w, max_h) {
        None => gray.clone(),
        Some((new_w, new_h)) => {
            debug!(from = ?gray.dimensions(), to = ?(new_w, new_h), "downscaling seed image");
            image::imageops::resize(gray, new_w, new_h, FilterType::CatmullRom)
        }
    }
}
