//! `studymark`
//!
//! Draws the `StudyTracker` logo and exports it as a PNG and a multi-resolution icon.

pub mod design;
mod error;
pub mod export;
pub mod fonts;
mod raster;
pub mod svg;

use std::path::{Path, PathBuf};

use image::RgbaImage;
use resvg::usvg::fontdb;

use design::{CANVAS_BASE_COLOUR, CANVAS_SIZE, LOGO_GLYPHS, LOGO_SHAPES};
pub use error::LogoError;
pub use export::{write_icon, write_png, ICON_SIZES};
pub use fonts::{resolve_font, system_font_database, ResolvedFont, NAMED_FONT_FILE};
use svg::{logo_document, parse_logo};

/// The file name the PNG is written to.
pub const LOGO_PNG_FILE_NAME: &str = "logo.png";
/// The file name the icon is written to.
pub const FAVICON_FILE_NAME: &str = "favicon.ico";

/// Where the logo files are written.
#[derive(Debug, Clone)]
pub struct OutputLocation {
    /// The directory both files are written into.
    directory: PathBuf,
}

impl OutputLocation {
    /// Creates a new [`OutputLocation`].
    ///
    /// # Arguments
    /// * `directory`: The directory to write into. It must already exist.
    ///
    /// # Returns
    /// A new [`OutputLocation`].
    pub fn new(directory: impl Into<PathBuf>) -> Self {
        Self {
            directory: directory.into(),
        }
    }

    /// Gets the directory both files are written into.
    pub fn directory(&self) -> &Path {
        &self.directory
    }

    /// Gets the path of the PNG.
    pub fn logo_png(&self) -> PathBuf {
        self.directory.join(LOGO_PNG_FILE_NAME)
    }

    /// Gets the path of the icon.
    pub fn favicon(&self) -> PathBuf {
        self.directory.join(FAVICON_FILE_NAME)
    }
}

impl Default for OutputLocation {
    /// The current working directory.
    fn default() -> Self {
        Self::new(".")
    }
}

/// A rendered logo.
pub struct RenderedLogo {
    /// The canvas.
    image: RgbaImage,
    /// The font the lettering was drawn with.
    font: ResolvedFont,
}

impl RenderedLogo {
    /// Gets the rendered canvas.
    pub fn image(&self) -> &RgbaImage {
        &self.image
    }

    /// Gets the font the lettering was drawn with.
    pub fn font(&self) -> &ResolvedFont {
        &self.font
    }

    /// Consumes the logo, returning the canvas.
    pub fn into_image(self) -> RgbaImage {
        self.image
    }
}

/// Renders the logo without touching the filesystem.
///
/// # Arguments
/// * `fontdb`: The fonts available for the lettering, usually from [`system_font_database`]. An
///   empty database is fine, the lettering is then left out.
///
/// # Returns
/// The rendered logo.
///
/// # Errors
/// A [`LogoError`] if the document can't be parsed or the canvas can't be allocated.
pub fn render_logo(mut fontdb: fontdb::Database) -> Result<RenderedLogo, LogoError> {
    let font = resolve_font(&mut fontdb, NAMED_FONT_FILE);
    let document = logo_document(&LOGO_SHAPES, &LOGO_GLYPHS, &font);
    let tree = parse_logo(&document, fontdb)?;
    let image = raster::rasterise(&tree, CANVAS_SIZE, CANVAS_BASE_COLOUR)?;

    Ok(RenderedLogo { image, font })
}

/// Renders the logo with the system's fonts and writes `logo.png` and `favicon.ico`, replacing
/// any existing files.
///
/// # Arguments
/// * `output`: Where to write the files.
///
/// # Returns
/// The paths of the PNG and the icon, in that order.
///
/// # Errors
/// A [`LogoError`] if rendering fails or either file can't be written.
pub fn create_logo(output: &OutputLocation) -> Result<(PathBuf, PathBuf), LogoError> {
    let logo = render_logo(system_font_database())?;

    let png_path = output.logo_png();
    write_png(logo.image(), &png_path)?;
    log::info!("Wrote {}", png_path.display());

    let icon_path = output.favicon();
    write_icon(logo.image(), &icon_path)?;
    log::info!("Wrote {} with frames {ICON_SIZES:?}", icon_path.display());

    Ok((png_path, icon_path))
}
