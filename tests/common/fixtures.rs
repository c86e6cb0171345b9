use image::{GrayImage, Luma, Rgb, RgbImage};
use tempfile::NamedTempFile;

/// Light background with one dark rectangular subject at `(x, y, w, h)`.
pub fn subject_image(width: u32, height: u32, subject: (u32, u32, u32, u32)) -> RgbImage {
    let (sx, sy, sw, sh) = subject;
    RgbImage::from_fn(width, height, |x, y| {
        if x >= sx && x < sx + sw && y >= sy && y < sy + sh {
            Rgb([20u8, 20u8, 20u8])
        } else {
            Rgb([235u8, 235u8, 235u8])
        }
    })
}

/// Single-intensity grayscale image; nothing for the detector to find.
pub fn uniform_image(width: u32, height: u32, value: u8) -> GrayImage {
    GrayImage::from_pixel(width, height, Luma([value]))
}

/// Writes the image to a temp PNG file.
/// The file is cleaned up when the returned handle is dropped.
pub fn save_png(img: &RgbImage) -> NamedTempFile {
    let file = tempfile::Builder::new()
        .suffix(".png")
        .tempfile()
        .expect("Failed to create temp image file");
    img.save_with_format(file.path(), image::ImageFormat::Png)
        .expect("Failed to save test image");
    file
}
