use crate::{
    Error, Result,
    bar::draw_bar,
    geometry::{BarSpec, Point},
    mask::{apply_mask, rounded_rect_mask},
};
use derivative::Derivative;
use derive_setters::Setters;
use image::{Rgba, RgbaImage};
use imageproc::drawing::draw_filled_circle_mut;
use std::fmt;

pub const LOGO_SIZE: u32 = 512;
pub const LOGO_BLUE: Rgba<u8> = Rgba([0, 102, 255, 255]);
pub const BAR_ANGLES: [f64; 2] = [45.0, -45.0];

const WHITE: Rgba<u8> = Rgba([255, 255, 255, 255]);
const TRANSPARENT: Rgba<u8> = Rgba([0, 0, 0, 0]);

/// The two images produced for the logo
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogoVariant {
    /// White rounded-corner tile with the X on top
    Full,
    /// Transparent background with a smaller X, for adaptive icon foregrounds
    Foreground,
}

impl LogoVariant {
    pub fn all() -> [LogoVariant; 2] {
        [LogoVariant::Full, LogoVariant::Foreground]
    }

    pub fn config(&self) -> VariantConfig {
        match self {
            LogoVariant::Full => VariantConfig::full(),
            LogoVariant::Foreground => VariantConfig::foreground(),
        }
    }

    pub fn file_name(&self) -> &'static str {
        match self {
            LogoVariant::Full => "logo.png",
            LogoVariant::Foreground => "logo_foreground.png",
        }
    }
}

impl fmt::Display for LogoVariant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LogoVariant::Full => write!(f, "main logo"),
            LogoVariant::Foreground => write!(f, "foreground"),
        }
    }
}

/// Drawing parameters of one logo variant.
///
/// The defaults describe the full logo; see [`VariantConfig::foreground`] for
/// the transparent one.
#[derive(Debug, Clone, Derivative, Setters)]
#[derivative(Default)]
#[setters(prefix = "with_")]
#[non_exhaustive]
pub struct VariantConfig {
    /// Canvas width and height
    #[derivative(Default(value = "LOGO_SIZE"))]
    pub size: u32,

    /// Bar length, cap circles not included
    #[derivative(Default(value = "270.0"))]
    pub length: f64,

    #[derivative(Default(value = "70.0"))]
    pub width: f64,

    /// Radius of the translucent centre dot
    #[derivative(Default(value = "30"))]
    pub circle_radius: u32,

    #[derivative(Default(value = "80"))]
    pub circle_alpha: u8,

    #[derivative(Default(value = "LOGO_BLUE"))]
    pub color: Rgba<u8>,

    /// Opaque white background clipped to a rounded rectangle
    #[derivative(Default(value = "true"))]
    pub background: bool,

    #[derivative(Default(value = "80"))]
    pub corner_radius: u32,
}

impl VariantConfig {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn full() -> Self {
        Self::default()
    }

    pub fn foreground() -> Self {
        Self::default()
            .with_length(220.0)
            .with_width(60.0)
            .with_circle_radius(25)
            .with_background(false)
    }

    pub fn center(&self) -> Point {
        let half = (self.size / 2) as f64;
        Point::new(half, half)
    }

    pub fn bars(&self) -> [BarSpec; 2] {
        BAR_ANGLES.map(|angle| BarSpec::new(self.center(), self.length, self.width, angle, self.color))
    }

    pub fn circle_color(&self) -> Rgba<u8> {
        let [r, g, b, _] = self.color.0;
        Rgba([r, g, b, self.circle_alpha])
    }
}

/// Draw the crossed bars and the centre dot onto a fresh canvas.
pub fn render_logo_variant(config: &VariantConfig) -> Result<RgbaImage> {
    if config.size == 0 {
        return Err(Error::InvalidGeometry("canvas size must be positive".to_string()));
    }

    let background = if config.background { WHITE } else { TRANSPARENT };
    let mut canvas = RgbaImage::from_pixel(config.size, config.size, background);

    for bar in config.bars() {
        draw_bar(&mut canvas, &bar)?;
    }

    let center = config.center().to_pixel();
    draw_filled_circle_mut(
        &mut canvas,
        center,
        config.circle_radius as i32,
        config.circle_color(),
    );

    if !config.background {
        return Ok(canvas);
    }

    let mask = rounded_rect_mask(config.size, config.size, config.corner_radius);
    apply_mask(&canvas, &mask)
}

#[cfg(test)]
mod tests {
    use super::*;

    const CORNERS: [(u32, u32); 4] = [(0, 0), (511, 0), (0, 511), (511, 511)];

    #[test]
    fn test_presets() {
        let full = VariantConfig::full();
        assert_eq!(full.size, 512);
        assert_eq!(full.length, 270.0);
        assert_eq!(full.width, 70.0);
        assert_eq!(full.circle_radius, 30);
        assert!(full.background);

        let fg = VariantConfig::foreground();
        assert_eq!(fg.size, 512);
        assert_eq!(fg.length, 220.0);
        assert_eq!(fg.width, 60.0);
        assert_eq!(fg.circle_radius, 25);
        assert!(!fg.background);
    }

    #[test]
    fn test_bars_are_centered_and_crossed() {
        let bars = VariantConfig::full().bars();

        assert_eq!(bars[0].center, Point::new(256.0, 256.0));
        assert_eq!(bars[0].angle_degrees, 45.0);
        assert_eq!(bars[1].angle_degrees, -45.0);
    }

    #[test]
    fn test_full_variant_has_transparent_corners() {
        let img = render_logo_variant(&VariantConfig::full()).unwrap();
        assert_eq!(img.dimensions(), (512, 512));

        for (x, y) in CORNERS {
            assert_eq!(img.get_pixel(x, y)[3], 0, "corner ({x}, {y})");
        }
    }

    #[test]
    fn test_full_variant_keeps_white_inside() {
        let img = render_logo_variant(&VariantConfig::full()).unwrap();

        assert_eq!(*img.get_pixel(256, 20), WHITE);
        assert_eq!(*img.get_pixel(20, 256), WHITE);
    }

    #[test]
    fn test_foreground_variant_is_transparent_outside_the_x() {
        let img = render_logo_variant(&VariantConfig::foreground()).unwrap();

        assert_eq!(img.get_pixel(0, 0)[3], 0);
        assert_eq!(img.get_pixel(256, 20)[3], 0);
        assert_ne!(img.get_pixel(256, 256)[3], 0);
    }

    #[test]
    fn test_center_dot_replaces_bar_alpha() {
        for config in [VariantConfig::full(), VariantConfig::foreground()] {
            let img = render_logo_variant(&config).unwrap();
            assert_eq!(*img.get_pixel(256, 256), Rgba([0, 102, 255, 80]));
        }
    }

    #[test]
    fn test_bar_pixels_are_opaque_blue() {
        for config in [VariantConfig::full(), VariantConfig::foreground()] {
            let img = render_logo_variant(&config).unwrap();

            // 70px out along each diagonal: on a bar, outside the dot
            for (x, y) in [(326, 186), (186, 186), (186, 326), (326, 326)] {
                assert_eq!(*img.get_pixel(x, y), LOGO_BLUE, "({x}, {y})");
            }
        }
    }

    #[test]
    fn test_zero_size_is_rejected() {
        let config = VariantConfig::full().with_size(0);
        assert!(matches!(render_logo_variant(&config), Err(Error::InvalidGeometry(_))));
    }

    #[test]
    fn test_variant_names() {
        assert_eq!(LogoVariant::Full.file_name(), "logo.png");
        assert_eq!(LogoVariant::Foreground.file_name(), "logo_foreground.png");
        assert!(!LogoVariant::Foreground.config().background);
        assert!(LogoVariant::Full.config().background);
    }
}
