use image::DynamicImage;

use crate::detection::{contours, preprocessing};
use crate::error::Result;
use crate::pipeline::{PipelineStage, StageData};

/// Convert the working image to grayscale.
pub struct GrayscaleStage;

impl PipelineStage for GrayscaleStage {
    fn process(&self, mut data: StageData) -> Result<StageData> {
        let gray = preprocessing::to_grayscale(&data.image);
        data.image = DynamicImage::ImageLuma8(gray);
        Ok(data)
    }

    fn name(&self) -> &str {
        "grayscale"
    }
}

/// Apply Gaussian blur.
pub struct BlurStage {
    pub sigma: f32,
}

impl PipelineStage for BlurStage {
    fn process(&self, mut data: StageData) -> Result<StageData> {
        let blurred = preprocessing::apply_blur(&data.image.to_luma8(), self.sigma);
        data.image = DynamicImage::ImageLuma8(blurred);
        Ok(data)
    }

    fn name(&self) -> &str {
        "blur"
    }
}

/// Binarize with an automatic global threshold.
pub struct ThresholdStage;

impl PipelineStage for ThresholdStage {
    fn process(&self, mut data: StageData) -> Result<StageData> {
        let (binary, level) = preprocessing::binarize(&data.image.to_luma8());
        data.record_int("threshold_level", level as i64);
        data.image = DynamicImage::ImageLuma8(binary);
        Ok(data)
    }

    fn name(&self) -> &str {
        "threshold"
    }
}

/// Pick the largest foreground region and crop the original down to it.
///
/// Leaves `region` unset when the binary image contains no outer contour;
/// the working image is then passed through unchanged.
pub struct LocateRegionStage;

impl PipelineStage for LocateRegionStage {
    fn process(&self, mut data: StageData) -> Result<StageData> {
        let binary = data.image.to_luma8();
        let outer = contours::external_contours(&binary);
        data.record_int("contour_count", outer.len() as i64);

        if let Some(largest) = contours::largest_contour(&outer) {
            data.record_float("region_area", contours::contour_area(&largest.points));
            if let Some(region) = contours::bounding_box(&largest.points) {
                data.image = region.extract(data.original.as_ref());
                data.region = Some(region);
            }
        }

        Ok(data)
    }

    fn name(&self) -> &str {
        "locate_region"
    }
}
