//! `error`
//!
//! Everything that can stop the logo from being produced.

use std::{fmt, io, path::PathBuf};

use resvg::usvg;

/// Errors that can occur while creating the logo.
#[derive(Debug)]
pub enum LogoError {
    /// The renderer couldn't allocate a canvas.
    FailedToAllocateCanvas {
        /// Requested width and height in pixels.
        size: u32,
    },
    /// The generated SVG document couldn't be parsed.
    ErrorParsingSvg(usvg::Error),
    /// Writing the PNG failed.
    FailedToWritePng {
        /// Where the PNG was being written.
        path: PathBuf,
        /// What went wrong.
        source: image::ImageError,
    },
    /// Writing the icon failed.
    FailedToWriteIcon {
        /// Where the icon was being written.
        path: PathBuf,
        /// What went wrong.
        source: io::Error,
    },
}

impl fmt::Display for LogoError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LogoError::FailedToAllocateCanvas { size } => {
                write!(f, "failed to allocate a {size}x{size} canvas")
            }
            LogoError::ErrorParsingSvg(err) => write!(f, "failed to parse logo SVG: {err}"),
            LogoError::FailedToWritePng { path, source } => {
                write!(f, "failed to write {}: {source}", path.display())
            }
            LogoError::FailedToWriteIcon { path, source } => {
                write!(f, "failed to write {}: {source}", path.display())
            }
        }
    }
}

impl std::error::Error for LogoError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            LogoError::FailedToAllocateCanvas { .. } => None,
            LogoError::ErrorParsingSvg(err) => Some(err),
            LogoError::FailedToWritePng { source, .. } => Some(source),
            LogoError::FailedToWriteIcon { source, .. } => Some(source),
        }
    }
}

impl From<usvg::Error> for LogoError {
    fn from(err: usvg::Error) -> Self {
        LogoError::ErrorParsingSvg(err)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn messages_name_the_file() {
        let err = LogoError::FailedToWriteIcon {
            path: PathBuf::from("out/favicon.ico"),
            source: io::Error::new(io::ErrorKind::PermissionDenied, "read-only"),
        };
        assert_eq!(err.to_string(), "failed to write out/favicon.ico: read-only");
        assert!(std::error::Error::source(&err).is_some());
    }

    #[test]
    fn canvas_message() {
        let err = LogoError::FailedToAllocateCanvas { size: 0 };
        assert_eq!(err.to_string(), "failed to allocate a 0x0 canvas");
    }
}
