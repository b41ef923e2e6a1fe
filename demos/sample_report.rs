//! Print a report for a hand-built metadata record, no image needed.
//!
//! `cargo run --example sample_report`

use exif_lens::exif::Metadata;
use exif_lens::report::{write_json_report, write_text_report};

fn main() -> anyhow::Result<()> {
    println!("Image Metadata Extractor Example");
    println!("================================");
    println!();
    println!("To use with real images, run:");
    println!("  exif-lens path/to/your/image.jpg");
    println!();
    println!("Example metadata display:");

    let metadata = Metadata {
        make: Some("Canon".into()),
        model: Some("EOS 5D Mark IV".into()),
        date_time: Some("2023:12:15 14:30:20".into()),
        exposure_time: Some(1.0 / 125.0),
        f_number: Some(2.8),
        iso: Some(800),
        focal_length: Some(85.0),
        latitude: Some(37.774929),
        longitude: Some(-122.419416),
        ..Default::default()
    };

    let mut stdout = std::io::stdout().lock();
    write_text_report(&mut stdout, Some(&metadata), "example.jpg", false)?;

    println!();
    println!("Same record as JSON:");
    write_json_report(&mut stdout, "example.jpg", Some(&metadata))?;

    Ok(())
}
