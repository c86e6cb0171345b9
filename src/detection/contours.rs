use image::GrayImage;
use imageproc::contours::{BorderType, Contour, find_contours};
use imageproc::point::Point;

use crate::models::BoundingBox;

/// Outer boundaries of connected foreground regions in a binary image.
///
/// Hole borders (boundaries of gaps inside a region) are dropped; only the
/// external outline of each region is kept.
pub fn external_contours(binary: &GrayImage) -> Vec<Contour<i32>> {
    find_contours::<i32>(binary)
        .into_iter()
        .filter(|c| matches!(c.border_type, BorderType::Outer))
        .collect()
}

/// Polygon area enclosed by a closed contour, via the shoelace formula.
///
/// This is the area of the traced boundary polygon, not a pixel count, so a
/// single point or a straight run of collinear points encloses zero area.
pub fn contour_area(points: &[Point<i32>]) -> f64 {
    if points.len() < 3 {
        return 0.0;
    }
    let mut doubled: i64 = 0;
    for i in 0..points.len() {
        let p = points[i];
        let q = points[(i + 1) % points.len()];
        doubled += p.x as i64 * q.y as i64 - q.x as i64 * p.y as i64;
    }
    doubled.abs() as f64 / 2.0
}

/// Smallest axis-aligned rectangle enclosing the contour's points.
pub fn bounding_box(points: &[Point<i32>]) -> Option<BoundingBox> {
    let first = points.first()?;
    let (mut min_x, mut min_y, mut max_x, mut max_y) = (first.x, first.y, first.x, first.y);
    for p in points {
        min_x = min_x.min(p.x);
        min_y = min_y.min(p.y);
        max_x = max_x.max(p.x);
        max_y = max_y.max(p.y);
    }
    Some(BoundingBox {
        x: min_x as u32,
        y: min_y as u32,
        width: (max_x - min_x + 1) as u32,
        height: (max_y - min_y + 1) as u32,
    })
}

/// The contour enclosing the most area. Ties keep the first one found.
pub fn largest_contour<'a>(contours: &'a [Contour<i32>]) -> Option<&'a Contour<i32>> {
    let mut best: Option<(&Contour<i32>, f64)> = None;
    for contour in contours {
        let area = contour_area(&contour.points);
        match best {
            Some((_, best_area)) if area <= best_area => {}
            _ => best = Some((contour, area)),
        }
    }
    best.map(|(contour, _)| contour)
}
