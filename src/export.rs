//! `export`
//!
//! Writes the finished canvas to disk.

use std::{
    fs::File,
    io::{self, BufWriter, Write},
    path::Path,
};

use ico::{IconDir, IconDirEntry, IconImage, ResourceType};
use image::{imageops::FilterType, ImageFormat, RgbaImage};

use crate::LogoError;

/// The frame sizes embedded in the icon, largest first.
pub const ICON_SIZES: [u32; 5] = [256, 128, 64, 32, 16];

/// Saves the canvas as a PNG, replacing any existing file.
///
/// # Arguments
/// * `image`: The canvas.
/// * `path`: Where to write the PNG.
///
/// # Errors
/// [`LogoError::FailedToWritePng`] if the file can't be encoded or written.
pub fn write_png(image: &RgbaImage, path: &Path) -> Result<(), LogoError> {
    image
        .save_with_format(path, ImageFormat::Png)
        .map_err(|source| LogoError::FailedToWritePng {
            path: path.to_path_buf(),
            source,
        })
}

/// Saves the canvas as an icon holding a frame for each of [`ICON_SIZES`], replacing any
/// existing file.
///
/// # Arguments
/// * `image`: The canvas, every frame is resampled from it.
/// * `path`: Where to write the icon.
///
/// # Errors
/// [`LogoError::FailedToWriteIcon`] if a frame can't be encoded or the file can't be written.
pub fn write_icon(image: &RgbaImage, path: &Path) -> Result<(), LogoError> {
    let wrap = |source| LogoError::FailedToWriteIcon {
        path: path.to_path_buf(),
        source,
    };

    let icon_dir = icon_dir(image, &ICON_SIZES).map_err(wrap)?;
    let mut file = BufWriter::new(File::create(path).map_err(wrap)?);
    icon_dir.write(&mut file).map_err(wrap)?;
    file.flush().map_err(wrap)
}

/// Builds an icon directory with one frame per size.
///
/// # Arguments
/// * `image`: The source image.
/// * `sizes`: The width and height of each frame.
///
/// # Returns
/// The icon directory, frames in the order of `sizes`.
///
/// # Errors
/// If a frame can't be encoded.
fn icon_dir(image: &RgbaImage, sizes: &[u32]) -> io::Result<IconDir> {
    let mut icon_dir = IconDir::new(ResourceType::Icon);
    for &size in sizes {
        let frame = resample(image, size);
        let icon_image = IconImage::from_rgba_data(size, size, frame.into_raw());
        icon_dir.add_entry(IconDirEntry::encode(&icon_image)?);
    }
    Ok(icon_dir)
}

/// Scales the image to a square frame.
///
/// # Arguments
/// * `image`: The source image.
/// * `size`: Width and height of the frame.
///
/// # Returns
/// The frame, or a copy of `image` if it is already that size.
fn resample(image: &RgbaImage, size: u32) -> RgbaImage {
    if image.dimensions() == (size, size) {
        image.clone()
    } else {
        image::imageops::resize(image, size, size, FilterType::Lanczos3)
    }
}

#[cfg(test)]
mod tests {
    use image::Rgba;

    use super::*;

    #[test]
    fn frames_follow_requested_sizes() {
        let image = RgbaImage::from_pixel(64, 64, Rgba([10, 20, 30, 255]));
        let icon_dir = icon_dir(&image, &[64, 32, 16]).expect("frames should encode");
        let sizes: Vec<(u32, u32)> = icon_dir
            .entries()
            .iter()
            .map(|entry| (entry.width(), entry.height()))
            .collect();
        assert_eq!(sizes, vec![(64, 64), (32, 32), (16, 16)]);
    }

    #[test]
    fn flat_colour_survives_resampling() {
        let image = RgbaImage::from_pixel(64, 64, Rgba([10, 20, 30, 255]));
        let frame = resample(&image, 16);
        assert_eq!(frame.dimensions(), (16, 16));
        assert_eq!(frame.get_pixel(8, 8).0, [10, 20, 30, 255]);
    }

    #[test]
    fn full_size_frame_is_untouched() {
        let mut image = RgbaImage::new(32, 32);
        image.put_pixel(3, 4, Rgba([1, 2, 3, 4]));
        assert_eq!(resample(&image, 32), image);
    }
}
