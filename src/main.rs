use clap::Parser;
use std::path::PathBuf;
use tracing::Level;

use roicrop::detection::preprocessing::DEFAULT_BLUR_SIGMA;
use roicrop::{Rect, RoiDetector, Session};

#[derive(Parser)]
#[command(name = "roicrop")]
#[command(about = "Crop a region of interest out of a photograph")]
struct Cli {
    /// Path to input image file
    #[arg(value_name = "IMAGE")]
    image_path: PathBuf,

    /// Path to write the cropped image (format chosen by extension)
    #[arg(short, long, value_name = "FILE")]
    output: PathBuf,

    /// Crop region in pixel coordinates; may be inverted or overhang the image
    #[arg(
        long,
        num_args = 4,
        value_names = ["X", "Y", "W", "H"],
        allow_negative_numbers = true,
        required_unless_present = "auto",
        conflicts_with = "auto"
    )]
    region: Option<Vec<i32>>,

    /// Auto-detect the subject instead of giving an explicit region
    #[arg(long)]
    auto: bool,

    /// Blur strength used before thresholding in auto detection
    #[arg(long, default_value_t = DEFAULT_BLUR_SIGMA)]
    blur_sigma: f32,

    /// Enable verbose output
    #[arg(short, long)]
    verbose: bool,

    /// Save intermediate detection images to directory (must be empty)
    #[arg(long, value_name = "DIR")]
    debug_out: Option<PathBuf>,
}

fn main() -> anyhow::Result<()> {
    let args = Cli::parse();

    tracing_subscriber::fmt()
        .with_max_level(if args.verbose {
            Level::DEBUG
        } else {
            Level::WARN
        })
        .with_target(false)
        .init();

    let mut detector = RoiDetector::new().with_blur_sigma(args.blur_sigma);
    if let Some(dir) = &args.debug_out {
        detector = detector.with_debug(dir.clone());
    }

    let mut session = Session::with_detector(detector);
    session.load(&args.image_path)?;

    if args.auto {
        let region = session.auto_detect()?;
        println!(
            "Detected region at ({}, {}) size {}x{}",
            region.x, region.y, region.width, region.height
        );
    } else {
        let Some(r) = &args.region else {
            anyhow::bail!("either --auto or --region is required");
        };
        session.select(Rect::new(r[0], r[1], r[2], r[3]));
    }

    let region = session.selected_region()?;
    session.save_selection(&args.output)?;
    println!(
        "Saved {}x{} crop to {}",
        region.width,
        region.height,
        args.output.display()
    );

    Ok(())
}
