pub mod bar;
pub mod export;
pub mod geometry;
pub mod mask;
pub mod variant;

pub use bar::render_rounded_bar;
pub use export::{Progress, encode_png, export, generate_all};
pub use geometry::{BarSpec, Point};
pub use variant::{LogoVariant, VariantConfig, render_logo_variant};

pub type Result<T> = std::result::Result<T, Error>;

#[derive(thiserror::Error, Debug)]
pub enum Error {
    #[error("Invalid geometry: {0}")]
    InvalidGeometry(String),

    #[error("Mask size {actual:?} does not match canvas size {expected:?}")]
    DimensionMismatch {
        expected: (u32, u32),
        actual: (u32, u32),
    },

    #[error("Image error: {0}")]
    Image(#[from] image::ImageError),
}
