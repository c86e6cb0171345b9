//! Integration tests for the crop session workflow.
//!
//! Tests cover:
//! - Loading, selecting and saving a clamped crop
//! - Drag events driving the selection
//! - Invalid and degenerate selections
//! - Auto-detection feeding the selection

mod common;

use common::*;
use roicrop::{Error, Rect, Selection, Session};

#[test]
fn manual_select_crop_save_round_trip() -> anyhow::Result<()> {
    // 1. Source image on disk
    let src = save_png(&subject_image(100, 100, (40, 40, 20, 20)));
    let out_dir = tempfile::TempDir::new()?;
    let out_path = out_dir.path().join("crop.png");

    // 2. Load, select a rectangle overhanging the top-left corner, save
    let mut session = Session::new();
    session.load(src.path())?;
    session.select(Rect::new(-10, -10, 50, 50));
    session.save_selection(&out_path)?;

    // 3. The saved crop has the clamped dimensions
    let saved = image::open(&out_path)?;
    assert_eq!(saved.width(), 40);
    assert_eq!(saved.height(), 40);

    Ok(())
}

#[test]
fn drag_events_drive_the_selection() -> anyhow::Result<()> {
    let src = save_png(&subject_image(100, 100, (40, 40, 20, 20)));
    let mut session = Session::new();
    session.load(src.path())?;

    // Bottom-right to top-left drag
    session.selection.press(60, 70);
    session.selection.drag_to(50, 50);
    session.selection.release(20, 30);

    let region = session.selected_region()?;
    assert_eq!(region.x, 20);
    assert_eq!(region.y, 30);
    assert_eq!(region.width, 40);
    assert_eq!(region.height, 40);

    Ok(())
}

#[test]
fn degenerate_drag_is_an_invalid_crop_area() -> anyhow::Result<()> {
    let src = save_png(&subject_image(100, 100, (40, 40, 20, 20)));
    let mut session = Session::new();
    session.load(src.path())?;

    // Press and release at the same pixel
    session.selection.press(30, 30);
    session.selection.release(30, 30);

    assert!(matches!(
        session.selected_region(),
        Err(Error::InvalidCropArea)
    ));
    assert!(matches!(
        session.crop_selection(),
        Err(Error::InvalidCropArea)
    ));
    Ok(())
}

#[test]
fn selection_outside_image_is_an_invalid_crop_area() -> anyhow::Result<()> {
    let src = save_png(&subject_image(100, 100, (40, 40, 20, 20)));
    let mut session = Session::new();
    session.load(src.path())?;
    session.select(Rect::new(150, 150, 30, 30));

    assert!(matches!(
        session.selected_region(),
        Err(Error::InvalidCropArea)
    ));
    Ok(())
}

#[test]
fn selection_without_image_reports_no_image() {
    let mut session = Session::new();
    session.select(Rect::new(0, 0, 10, 10));
    assert!(matches!(session.selected_region(), Err(Error::NoImage)));
}

#[test]
fn auto_detect_makes_the_region_the_selection() -> anyhow::Result<()> {
    let src = save_png(&subject_image(100, 100, (40, 40, 20, 20)));
    let mut session = Session::new();
    session.load(src.path())?;

    let region = session.auto_detect()?;
    assert_eq!(session.selection, Selection::Selected(region.to_rect()));

    let cropped = session.crop_selection()?;
    assert_eq!(cropped.width(), region.width);
    assert_eq!(cropped.height(), region.height);

    Ok(())
}

#[test]
fn blank_image_leaves_selection_untouched() -> anyhow::Result<()> {
    let blank = image::DynamicImage::ImageLuma8(uniform_image(64, 64, 180)).to_rgb8();
    let src = save_png(&blank);

    let mut session = Session::new();
    session.load(src.path())?;
    let result = session.auto_detect();

    assert!(matches!(result, Err(Error::NothingDetected)));
    assert_eq!(session.selection, Selection::Idle);
    Ok(())
}

#[test]
fn load_resets_previous_selection() -> anyhow::Result<()> {
    let first = save_png(&subject_image(100, 100, (40, 40, 20, 20)));
    let second = save_png(&subject_image(50, 50, (10, 10, 15, 15)));

    let mut session = Session::new();
    session.load(first.path())?;
    session.select(Rect::new(0, 0, 90, 90));

    session.load(second.path())?;
    assert_eq!(session.selection, Selection::Idle);
    assert!(matches!(session.selected_region(), Err(Error::NoSelection)));
    Ok(())
}
