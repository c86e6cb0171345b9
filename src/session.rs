use std::path::{Path, PathBuf};

use image::{DynamicImage, ImageReader};
use tracing::info;

use crate::detection::RoiDetector;
use crate::error::{Error, Result};
use crate::models::{BoundingBox, Rect, clamp_to_bounds};
use crate::selection::Selection;

/// Working state for one loaded photograph.
///
/// One explicit object instead of scattered "current path" / "current image" /
/// "current crop rect" fields: a host shell keeps a `Session` alive across
/// user actions and every operation checks its own preconditions. A failed
/// action leaves the session unchanged and usable.
pub struct Session {
    path: Option<PathBuf>,
    image: Option<DynamicImage>,
    pub selection: Selection,
    detector: RoiDetector,
}

impl Session {
    pub fn new() -> Self {
        Self::with_detector(RoiDetector::new())
    }

    pub fn with_detector(detector: RoiDetector) -> Self {
        Self {
            path: None,
            image: None,
            selection: Selection::Idle,
            detector,
        }
    }

    /// Load and decode an image, replacing any previous one.
    /// The selection is reset; it referred to the old image's coordinates.
    pub fn load(&mut self, path: impl AsRef<Path>) -> Result<()> {
        let path = path.as_ref();
        let image = ImageReader::open(path)
            .map_err(|e| Error::Load {
                path: path.to_path_buf(),
                source: image::ImageError::IoError(e),
            })?
            .decode()
            .map_err(|e| Error::Load {
                path: path.to_path_buf(),
                source: e,
            })?;

        info!(
            path = %path.display(),
            width = image.width(),
            height = image.height(),
            "image loaded"
        );

        self.path = Some(path.to_path_buf());
        self.image = Some(image);
        self.selection = Selection::Idle;
        Ok(())
    }

    pub fn image(&self) -> Option<&DynamicImage> {
        self.image.as_ref()
    }

    pub fn path(&self) -> Option<&Path> {
        self.path.as_deref()
    }

    /// Set the selection to an explicit rectangle, as a host shell does after
    /// a finished drag.
    pub fn select(&mut self, rect: Rect) {
        self.selection = Selection::Selected(rect);
    }

    /// The current selection clamped to the loaded image.
    pub fn selected_region(&self) -> Result<BoundingBox> {
        let image = self.image.as_ref().ok_or(Error::NoImage)?;
        let rect = self.selection.rect().ok_or(Error::NoSelection)?;
        clamp_to_bounds(image.width(), image.height(), rect).ok_or(Error::InvalidCropArea)
    }

    /// Run subject detection on the loaded image and make the located region
    /// the current selection.
    ///
    /// When nothing is found the selection is left as it was.
    pub fn auto_detect(&mut self) -> Result<BoundingBox> {
        let image = self.image.as_ref().ok_or(Error::NoImage)?;
        let region = self
            .detector
            .detect(image)?
            .ok_or(Error::NothingDetected)?;
        self.selection = Selection::Selected(region.to_rect());
        Ok(region)
    }

    /// Crop the clamped current selection out of the loaded image.
    pub fn crop_selection(&self) -> Result<DynamicImage> {
        let region = self.selected_region()?;
        let image = self.image.as_ref().ok_or(Error::NoImage)?;
        Ok(region.extract(image))
    }

    /// Crop and encode to `path`; the format follows the file extension.
    pub fn save_selection(&self, path: impl AsRef<Path>) -> Result<()> {
        let path = path.as_ref();
        let cropped = self.crop_selection()?;
        cropped.save(path).map_err(|e| Error::Save {
            path: path.to_path_buf(),
            source: e,
        })?;
        info!(path = %path.display(), "cropped image saved");
        Ok(())
    }
}

impl Default for Session {
    fn default() -> Self {
        Self::new()
    }
}
