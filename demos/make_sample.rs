use image::{Rgb, RgbImage};

fn main() {
    let mut img = RgbImage::new(800, 600);

    // Light paper-like background with a mild horizontal gradient
    for y in 0..600 {
        for x in 0..800 {
            let shade = 210 + (x * 30 / 800) as u8;
            img.put_pixel(x, y, Rgb([shade, shade, shade - 4]));
        }
    }

    // Dark elliptical subject, off-center like a real photograph
    let (cx, cy, rx, ry) = (340.0f32, 260.0f32, 90.0f32, 60.0f32);
    for y in 0..600u32 {
        for x in 0..800u32 {
            let dx = (x as f32 - cx) / rx;
            let dy = (y as f32 - cy) / ry;
            if dx * dx + dy * dy <= 1.0 {
                img.put_pixel(x, y, Rgb([35, 30, 28]));
            }
        }
    }

    img.save("sample.png").unwrap();
    println!("Created sample.png (800x600, dark subject on light background)");
}
