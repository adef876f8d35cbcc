use crate::{
    Result,
    variant::{LogoVariant, render_logo_variant},
};
use image::{ImageFormat, RgbaImage};
use std::{
    io::Cursor,
    path::{Path, PathBuf},
};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Progress {
    Rendering(LogoVariant),
    Written(PathBuf),
}

pub fn encode_png(canvas: &RgbaImage) -> Result<Vec<u8>> {
    let mut buf = Cursor::new(Vec::new());
    canvas.write_to(&mut buf, ImageFormat::Png)?;
    Ok(buf.into_inner())
}

/// Write `canvas` as a PNG file, replacing any existing file at `path`.
pub fn export(canvas: &RgbaImage, path: impl AsRef<Path>) -> Result<()> {
    let path = path.as_ref();
    canvas.save_with_format(path, ImageFormat::Png)?;
    log::info!("saved {}x{} png to {}", canvas.width(), canvas.height(), path.display());
    Ok(())
}

/// Render every logo variant and write each one into `dir`.
///
/// Stops at the first failure; files written before it are left in place.
pub fn generate_all(dir: impl AsRef<Path>, mut on_progress: impl FnMut(Progress)) -> Result<Vec<PathBuf>> {
    let dir = dir.as_ref();
    let mut written = Vec::with_capacity(LogoVariant::all().len());

    for variant in LogoVariant::all() {
        on_progress(Progress::Rendering(variant));

        let canvas = render_logo_variant(&variant.config())?;
        log::info!("rendered {variant}");

        let path = dir.join(variant.file_name());
        export(&canvas, &path)?;

        on_progress(Progress::Written(path.clone()));
        written.push(path);
    }

    Ok(written)
}
