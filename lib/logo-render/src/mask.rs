//! Rounded-corner clipping through a grayscale mask.
//!
//! Mask values follow the usual convention: 0 is fully transparent, 255 keeps
//! the source pixel untouched.

use crate::{Error, Result};
use image::{GrayImage, Luma, Rgba, RgbaImage};
use imageproc::{
    drawing::{draw_filled_circle_mut, draw_filled_rect_mut},
    rect::Rect,
};

/// Build a `width` x `height` mask that is opaque inside a rounded rectangle
/// covering the whole area and zero in the cut-off corners.
pub fn rounded_rect_mask(width: u32, height: u32, radius: u32) -> GrayImage {
    let mut mask = GrayImage::from_pixel(width, height, Luma([0]));
    if width == 0 || height == 0 {
        return mask;
    }

    let radius = radius.min(width / 2).min(height / 2);
    log::debug!("rounded mask {width}x{height}, corner radius {radius}");

    let opaque = Luma([255]);
    if radius == 0 {
        draw_filled_rect_mut(&mut mask, Rect::at(0, 0).of_size(width, height), opaque);
        return mask;
    }

    // horizontal and vertical bands, then the four corner arcs
    if width > 2 * radius {
        draw_filled_rect_mut(
            &mut mask,
            Rect::at(radius as i32, 0).of_size(width - 2 * radius, height),
            opaque,
        );
    }
    if height > 2 * radius {
        draw_filled_rect_mut(
            &mut mask,
            Rect::at(0, radius as i32).of_size(width, height - 2 * radius),
            opaque,
        );
    }

    let (r, right, bottom) = (radius as i32, (width - 1 - radius) as i32, (height - 1 - radius) as i32);
    for center in [(r, r), (right, r), (r, bottom), (right, bottom)] {
        draw_filled_circle_mut(&mut mask, center, r, opaque);
    }

    mask
}

/// Composite `src` onto a fully transparent canvas through `mask`.
///
/// Every channel, alpha included, is scaled by `mask / 255`.
pub fn apply_mask(src: &RgbaImage, mask: &GrayImage) -> Result<RgbaImage> {
    if src.dimensions() != mask.dimensions() {
        return Err(Error::DimensionMismatch {
            expected: src.dimensions(),
            actual: mask.dimensions(),
        });
    }

    let mut result = RgbaImage::from_pixel(src.width(), src.height(), Rgba([0, 0, 0, 0]));
    for ((out, pixel), coverage) in result.pixels_mut().zip(src.pixels()).zip(mask.pixels()) {
        *out = match coverage[0] {
            0 => continue,
            255 => *pixel,
            m => Rgba(pixel.0.map(|c| scale(c, m))),
        };
    }

    Ok(result)
}

fn scale(channel: u8, coverage: u8) -> u8 {
    ((channel as u32 * coverage as u32 + 127) / 255) as u8
}
