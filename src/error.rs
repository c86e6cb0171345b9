use std::path::PathBuf;

/// Failures surfaced to the user. Each one terminates the current action only;
/// the session stays usable afterwards.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("failed to load image {path:?}")]
    Load {
        path: PathBuf,
        #[source]
        source: image::ImageError,
    },

    #[error("no image loaded")]
    NoImage,

    #[error("no crop area selected")]
    NoSelection,

    #[error("invalid crop area")]
    InvalidCropArea,

    #[error("no contours detected in image")]
    NothingDetected,

    #[error("failed to save image {path:?}")]
    Save {
        path: PathBuf,
        #[source]
        source: image::ImageError,
    },

    #[error("i/o error at {path:?}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("debug output directory {path:?} is not empty")]
    DebugDirNotEmpty { path: PathBuf },
}

pub type Result<T> = std::result::Result<T, Error>;
