use image::{DynamicImage, GrayImage, Luma};
use imageproc::contrast::otsu_level;
use imageproc::filter::gaussian_blur_f32;

/// Default blur strength, the sigma implied by a 5x5 Gaussian kernel.
pub const DEFAULT_BLUR_SIGMA: f32 = 1.1;

/// Convert image to grayscale.
pub fn to_grayscale(img: &DynamicImage) -> GrayImage {
    img.to_luma8()
}

/// Apply Gaussian blur to reduce noise before thresholding.
pub fn apply_blur(img: &GrayImage, sigma: f32) -> GrayImage {
    gaussian_blur_f32(img, sigma)
}

/// Binarize with an automatically chosen global threshold.
///
/// The threshold is Otsu's level over the image histogram. Pixels at or below
/// the level (Otsu's darker class) become foreground (255), everything else
/// background (0): the tool targets photographs of a dark subject on a lighter
/// background, and the dominant light class must not be picked up as the
/// subject.
///
/// An image with a single intensity value has nothing to segment; every pixel
/// is left as background. Returns the binary image and the chosen level.
pub fn binarize(img: &GrayImage) -> (GrayImage, u8) {
    if img.width() == 0 || img.height() == 0 {
        return (img.clone(), 0);
    }

    let mut lo = u8::MAX;
    let mut hi = u8::MIN;
    for p in img.pixels() {
        lo = lo.min(p.0[0]);
        hi = hi.max(p.0[0]);
    }
    if lo == hi {
        return (
            GrayImage::from_pixel(img.width(), img.height(), Luma([0u8])),
            lo,
        );
    }

    let level = otsu_level(img);
    let mut binary = img.clone();
    for p in binary.pixels_mut() {
        *p = if p.0[0] <= level {
            Luma([255u8])
        } else {
            Luma([0u8])
        };
    }
    (binary, level)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn binarize_marks_dark_pixels_as_foreground() {
        let mut img = GrayImage::from_pixel(10, 10, Luma([220u8]));
        for y in 3..7 {
            for x in 3..7 {
                img.put_pixel(x, y, Luma([15u8]));
            }
        }

        let (binary, level) = binarize(&img);
        assert!(level >= 15 && level < 220, "level = {}", level);
        assert_eq!(binary.get_pixel(5, 5).0[0], 255);
        assert_eq!(binary.get_pixel(0, 0).0[0], 0);
    }

    #[test]
    fn binarize_flat_image_has_no_foreground() {
        let img = GrayImage::from_pixel(8, 8, Luma([128u8]));
        let (binary, level) = binarize(&img);
        assert_eq!(level, 128);
        assert!(binary.pixels().all(|p| p.0[0] == 0));
    }
}
