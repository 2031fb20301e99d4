//! `fonts`
//!
//! Finds the font the lettering is drawn with.

use std::{
    ffi::OsStr,
    path::{Path, PathBuf},
};

use resvg::usvg::fontdb::{self, Family, Query, Source};

/// The TrueType file we would like to draw the lettering with.
pub const NAMED_FONT_FILE: &str = "segoeui.ttf";

/// The generic family used when the named font can't be found.
const FALLBACK_FAMILY: &str = "sans-serif";

/// The font chosen for the lettering.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ResolvedFont {
    /// The named font was found.
    Named {
        /// The family name of the face loaded from the file.
        family: String,
        /// Where the face was loaded from.
        path: PathBuf,
    },
    /// The named font wasn't available, the database's sans-serif family is used instead.
    Fallback {
        /// The installed family the sans-serif generic was pointed at, if there are any fonts at all.
        family: Option<String>,
    },
}

impl ResolvedFont {
    /// Gets the value to use for the SVG `font-family` attribute.
    ///
    /// # Returns
    /// The family name of the named font, or the generic sans-serif family.
    pub fn font_family(&self) -> &str {
        match self {
            ResolvedFont::Named { family, .. } => family,
            ResolvedFont::Fallback { .. } => FALLBACK_FAMILY,
        }
    }

    /// Whether the named font could not be used.
    pub fn is_fallback(&self) -> bool {
        matches!(self, ResolvedFont::Fallback { .. })
    }
}

/// Installed families the generic sans-serif family is pointed at, in order of preference.
const PREFERRED_SANS_SERIF_FAMILIES: [&str; 6] = [
    "Arial",
    "Segoe UI",
    "Helvetica",
    "DejaVu Sans",
    "Liberation Sans",
    "Noto Sans",
];

/// Creates a font database populated with the fonts installed on this machine, plus
/// [`NAMED_FONT_FILE`] if it is in the working directory.
///
/// # Returns
/// The populated database.
pub fn system_font_database() -> fontdb::Database {
    let mut fontdb = fontdb::Database::new();
    fontdb.load_system_fonts();
    log::debug!("Loaded {} system font faces", fontdb.len());

    let local_path = Path::new(NAMED_FONT_FILE);
    if local_path.is_file() {
        if let Err(err) = fontdb.load_font_file(local_path) {
            log::debug!("Could not load {}: {err}", local_path.display());
        }
    }

    fontdb
}

/// Picks the font the lettering should be drawn with.
///
/// Looks for a face in the database that was loaded from a file called `file_name` (ignoring
/// case). Every way this can fail ends in the same fallback, which is never an error.
///
/// # Arguments
/// * `fontdb`: The fonts to choose from. May have its sans-serif family changed when falling
///   back.
/// * `file_name`: The file name of the preferred font.
///
/// # Returns
/// The chosen font.
pub fn resolve_font(fontdb: &mut fontdb::Database, file_name: &str) -> ResolvedFont {
    if let Some((family, path)) = find_face_by_file_name(fontdb, file_name) {
        log::debug!("Using {family} from {}", path.display());
        return ResolvedFont::Named { family, path };
    }

    let family = fallback_family(fontdb);
    log::debug!("{file_name} not available, falling back to {family:?}");
    ResolvedFont::Fallback { family }
}

/// Finds the first face loaded from a file called `file_name`.
///
/// # Arguments
/// * `fontdb`: The fonts to search.
/// * `file_name`: The file name to match, case insensitively.
///
/// # Returns
/// The face's family name and file path, if such a face exists.
fn find_face_by_file_name(fontdb: &fontdb::Database, file_name: &str) -> Option<(String, PathBuf)> {
    fontdb.faces().find_map(|face| {
        let path = match &face.source {
            Source::File(path) | Source::SharedFile(path, _) => path,
            Source::Binary(_) => return None,
        };

        let matches = path
            .file_name()
            .and_then(OsStr::to_str)
            .is_some_and(|name| name.eq_ignore_ascii_case(file_name));
        if !matches {
            return None;
        }

        let (family, _) = face.families.first()?;
        Some((family.clone(), path.clone()))
    })
}

/// Finds the first of [`PREFERRED_SANS_SERIF_FAMILIES`] that is installed.
///
/// # Arguments
/// * `fontdb`: The fonts to search.
///
/// # Returns
/// The family name, if any of them are installed.
fn preferred_sans_serif_family(fontdb: &fontdb::Database) -> Option<&'static str> {
    PREFERRED_SANS_SERIF_FAMILIES.into_iter().find(|&name| {
        let query = Query {
            families: &[Family::Name(name)],
            ..Query::default()
        };
        fontdb.query(&query).is_some()
    })
}

/// Points the generic sans-serif family at something installed.
///
/// The first installed family of [`PREFERRED_SANS_SERIF_FAMILIES`] wins, otherwise whatever face
/// comes first in the database.
///
/// # Arguments
/// * `fontdb`: The database to adjust.
///
/// # Returns
/// The family sans-serif now resolves to, `None` if the database holds no faces.
fn fallback_family(fontdb: &mut fontdb::Database) -> Option<String> {
    let family = match preferred_sans_serif_family(fontdb) {
        Some(name) => name.to_string(),
        None => fontdb
            .faces()
            .find_map(|face| face.families.first().map(|(name, _)| name.clone()))?,
    };
    fontdb.set_sans_serif_family(family.clone());
    Some(family)
}
