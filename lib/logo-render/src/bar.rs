use crate::{
    Result,
    geometry::{BarSpec, Point},
};
use image::{Rgba, RgbaImage};
use imageproc::{
    drawing::{draw_filled_circle_mut, draw_polygon_mut},
    point::Point as PixelPoint,
};

/// Draw a rotated bar with rounded ends onto `canvas`.
///
/// The rectangle body is filled first, then a circle of radius `width / 2` is
/// stamped on each of its four corners. Pixels are overwritten, not blended.
pub fn render_rounded_bar(
    canvas: &mut RgbaImage,
    center: Point,
    length: f64,
    width: f64,
    angle_degrees: f64,
    color: Rgba<u8>,
) -> Result<()> {
    let bar = BarSpec::new(center, length, width, angle_degrees, color);
    draw_bar(canvas, &bar)
}

pub fn draw_bar(canvas: &mut RgbaImage, bar: &BarSpec) -> Result<()> {
    bar.validate()?;

    let corners = bar.corners();
    log::debug!(
        "bar at {:.0} deg, corners: {:?}",
        bar.angle_degrees,
        corners.map(Point::to_pixel)
    );

    let polygon = pixel_polygon(&corners);
    if polygon.len() >= 3 {
        draw_polygon_mut(canvas, &polygon, bar.color);
    }

    let radius = bar.cap_radius().round() as i32;
    for corner in corners {
        draw_filled_circle_mut(canvas, corner.to_pixel(), radius, bar.color);
    }

    Ok(())
}

// Rounding can collapse neighbouring corners of a thin bar onto the same
// pixel, and the polygon filler rejects a closed point list.
fn pixel_polygon(corners: &[Point; 4]) -> Vec<PixelPoint<i32>> {
    let mut polygon: Vec<PixelPoint<i32>> = Vec::with_capacity(corners.len());

    for (x, y) in corners.map(Point::to_pixel) {
        let point = PixelPoint::new(x, y);
        if polygon.last() != Some(&point) {
            polygon.push(point);
        }
    }

    while polygon.len() > 1 && polygon.first() == polygon.last() {
        polygon.pop();
    }

    polygon
}
