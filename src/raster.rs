//! `raster`
//!
//! Turns the parsed logo into pixels.

use image::RgbaImage;
use resvg::{tiny_skia, usvg};

use crate::{design::Colour, LogoError};

/// Renders a tree onto a fresh square canvas.
///
/// # Arguments
/// * `tree`: The tree to render, drawn at its natural size.
/// * `size`: Width and height of the canvas in pixels.
/// * `base`: What pixels left fully transparent are set to.
///
/// # Returns
/// The rendered canvas, non-premultiplied.
///
/// # Errors
/// [`LogoError::FailedToAllocateCanvas`] if a canvas of `size` can't be created.
pub fn rasterise(tree: &usvg::Tree, size: u32, base: Colour) -> Result<RgbaImage, LogoError> {
    let mut pixmap =
        tiny_skia::Pixmap::new(size, size).ok_or(LogoError::FailedToAllocateCanvas { size })?;
    resvg::render(tree, tiny_skia::Transform::default(), &mut pixmap.as_mut());

    to_image(&pixmap, base)
}

/// Copies a pixmap into an image, undoing tiny-skia's premultiplied alpha.
///
/// # Arguments
/// * `pixmap`: The pixmap to copy.
/// * `base`: Colour given to fully transparent pixels, its alpha is ignored.
///
/// # Returns
/// The image.
///
/// # Errors
/// [`LogoError::FailedToAllocateCanvas`] if the pixel data doesn't fit the pixmap's dimensions.
fn to_image(pixmap: &tiny_skia::Pixmap, base: Colour) -> Result<RgbaImage, LogoError> {
    let [base_r, base_g, base_b, _] = base.0;
    let data = pixmap
        .pixels()
        .iter()
        .flat_map(|pixel| {
            if pixel.alpha() == 0 {
                [base_r, base_g, base_b, 0]
            } else {
                let colour = pixel.demultiply();
                [colour.red(), colour.green(), colour.blue(), colour.alpha()]
            }
        })
        .collect();

    RgbaImage::from_raw(pixmap.width(), pixmap.height(), data).ok_or(
        LogoError::FailedToAllocateCanvas {
            size: pixmap.width(),
        },
    )
}
