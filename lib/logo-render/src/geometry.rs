//! Point rotation and bar outline computation.

use crate::{Error, Result};
use image::Rgba;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    pub fn translate(self, dx: f64, dy: f64) -> Self {
        Self::new(self.x + dx, self.y + dy)
    }

    /// Nearest pixel coordinate
    pub fn to_pixel(self) -> (i32, i32) {
        (self.x.round() as i32, self.y.round() as i32)
    }
}

/// Rotate `point` around the origin.
///
/// The canvas y axis points down, so a positive angle turns clockwise on screen.
pub fn rotate(point: Point, angle_degrees: f64) -> Point {
    let (sin_a, cos_a) = angle_degrees.to_radians().sin_cos();

    Point::new(
        point.x * cos_a - point.y * sin_a,
        point.x * sin_a + point.y * cos_a,
    )
}

/// One stroke of the logo: a rectangle of `width` x `length` centred on
/// `center` and rotated by `angle_degrees`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BarSpec {
    pub center: Point,
    pub length: f64,
    pub width: f64,
    pub angle_degrees: f64,
    pub color: Rgba<u8>,
}

impl BarSpec {
    pub fn new(center: Point, length: f64, width: f64, angle_degrees: f64, color: Rgba<u8>) -> Self {
        Self {
            center,
            length,
            width,
            angle_degrees,
            color,
        }
    }

    pub fn validate(&self) -> Result<()> {
        if !(self.length.is_finite() && self.length > 0.0) {
            return Err(Error::InvalidGeometry(format!(
                "bar length must be positive, got {}",
                self.length
            )));
        }

        if !(self.width.is_finite() && self.width > 0.0) {
            return Err(Error::InvalidGeometry(format!(
                "bar width must be positive, got {}",
                self.width
            )));
        }

        if !self.angle_degrees.is_finite() {
            return Err(Error::InvalidGeometry(format!(
                "bar angle must be finite, got {}",
                self.angle_degrees
            )));
        }

        if !(self.center.x.is_finite() && self.center.y.is_finite()) {
            return Err(Error::InvalidGeometry(format!(
                "bar center must be finite, got ({}, {})",
                self.center.x, self.center.y
            )));
        }

        Ok(())
    }

    /// Corners of the rotated rectangle, clockwise from the unrotated top-left.
    pub fn corners(&self) -> [Point; 4] {
        let (half_width, half_length) = (self.width / 2.0, self.length / 2.0);

        [
            Point::new(-half_width, -half_length),
            Point::new(half_width, -half_length),
            Point::new(half_width, half_length),
            Point::new(-half_width, half_length),
        ]
        .map(|p| rotate(p, self.angle_degrees).translate(self.center.x, self.center.y))
    }

    /// Radius of the circles that round off the bar ends
    pub fn cap_radius(&self) -> f64 {
        self.width / 2.0
    }
}
