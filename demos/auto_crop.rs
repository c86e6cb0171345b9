use roicrop::Session;

fn main() -> anyhow::Result<()> {
    let mut session = Session::new();
    session.load("sample.png")?;

    println!("Detecting subject...");
    let region = session.auto_detect()?;
    println!(
        "Detected region at ({}, {}) size {}x{}",
        region.x, region.y, region.width, region.height
    );

    session.save_selection("sample_crop.png")?;
    println!("Saved sample_crop.png");

    Ok(())
}
