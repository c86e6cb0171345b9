pub mod contours;
pub mod preprocessing;
pub mod stages;

use std::path::PathBuf;

use image::DynamicImage;
use tracing::{debug, info};

use crate::error::Result;
use crate::models::BoundingBox;
use crate::pipeline::Pipeline;
use self::stages::{BlurStage, GrayscaleStage, LocateRegionStage, ThresholdStage};

/// Locates the most prominent foreground subject in a photograph.
///
/// Fixed classical recipe: grayscale, Gaussian blur, global Otsu threshold,
/// external contour extraction, bounding box of the largest contour. Stateless
/// and deterministic: running it twice on the same image gives the same answer.
pub struct RoiDetector {
    pub blur_sigma: f32,
    debug_dir: Option<PathBuf>,
}

impl RoiDetector {
    pub fn new() -> Self {
        Self {
            blur_sigma: preprocessing::DEFAULT_BLUR_SIGMA,
            debug_dir: None,
        }
    }

    pub fn with_blur_sigma(mut self, sigma: f32) -> Self {
        self.blur_sigma = sigma;
        self
    }

    /// Dump each intermediate stage image into `dir` while detecting.
    /// The directory must be empty or not yet exist.
    pub fn with_debug(mut self, dir: PathBuf) -> Self {
        self.debug_dir = Some(dir);
        self
    }

    fn build_pipeline(&self) -> Result<Pipeline> {
        let mut pipeline = Pipeline::new()
            .add_stage(Box::new(GrayscaleStage))
            .add_stage(Box::new(BlurStage {
                sigma: self.blur_sigma,
            }))
            .add_stage(Box::new(ThresholdStage))
            .add_stage(Box::new(LocateRegionStage));
        if let Some(dir) = &self.debug_dir {
            pipeline = pipeline.with_debug(dir.clone())?;
        }
        Ok(pipeline)
    }

    /// Bounding box of the detected subject, or `None` when the image has no
    /// foreground region to latch onto (no contrast, or nothing darker than
    /// the global threshold).
    pub fn detect(&self, img: &DynamicImage) -> Result<Option<BoundingBox>> {
        let data = self.build_pipeline()?.run(img.clone())?;

        match data.region {
            Some(region) => info!(
                x = region.x,
                y = region.y,
                width = region.width,
                height = region.height,
                threshold = data.get_int("threshold_level"),
                contours = data.get_int("contour_count"),
                "subject located"
            ),
            None => debug!("no outer contours found"),
        }

        Ok(data.region)
    }
}

impl Default for RoiDetector {
    fn default() -> Self {
        Self::new()
    }
}
