//! Rendering of extracted metadata, as a text report or as JSON.

use serde::Serialize;
use std::io::{self, Write};

use crate::exif::Metadata;

/// Printed in place of the fields when extraction failed.
pub const NO_METADATA: &str = "No metadata found or error occurred";

/// Closes every text report that had metadata.
pub const SEPARATOR: &str = "---";

/// Write the human-readable report for one file.
///
/// Each line is printed only when its field is present. Zero is a real value
/// for the numeric fields: ISO 0 prints, and a flash or white balance code of
/// 0 reads as "No flash" / "Auto" rather than being skipped.
///
/// # Example
///
/// ```rust
/// use exif_lens::exif::Metadata;
/// use exif_lens::report::write_text_report;
///
/// let metadata = Metadata { make: Some("Canon".into()), ..Default::default() };
/// let mut out = Vec::new();
/// write_text_report(&mut out, Some(&metadata), "photo.jpg", false).unwrap();
///
/// let text = String::from_utf8(out).unwrap();
/// assert!(text.contains("=== Metadata for photo.jpg ==="));
/// assert!(text.contains("Camera: Canon \n"));
/// ```
pub fn write_text_report<W: Write>(
    out: &mut W,
    metadata: Option<&Metadata>,
    filename: &str,
    verbose: bool,
) -> io::Result<()> {
    writeln!(out)?;
    writeln!(out, "=== Metadata for {filename} ===")?;

    let Some(m) = metadata else {
        writeln!(out, "{NO_METADATA}")?;
        return Ok(());
    };

    if let Some(ref make) = m.make {
        writeln!(out, "Camera: {make} {}", m.model.as_deref().unwrap_or(""))?;
    }
    if let Some(ref date) = m.date_time {
        writeln!(out, "Date: {date}")?;
    }
    if let Some(exposure) = m.exposure_time {
        writeln!(out, "Exposure: {exposure}s")?;
    }
    if let Some(f_number) = m.f_number {
        writeln!(out, "Aperture: f/{f_number}")?;
    }
    if let Some(iso) = m.iso {
        writeln!(out, "ISO: {iso}")?;
    }
    if let Some(focal) = m.focal_length {
        writeln!(out, "Focal Length: {focal}mm")?;
    }
    if let (Some(lat), Some(lon)) = (m.latitude, m.longitude) {
        writeln!(out, "GPS: {lat:.6}, {lon:.6}")?;
    }

    if verbose {
        write_details(out, m)?;
    }

    writeln!(out, "{SEPARATOR}")
}

fn write_details<W: Write>(out: &mut W, m: &Metadata) -> io::Result<()> {
    writeln!(out)?;
    writeln!(out, "--- Detailed Information ---")?;

    if let (Some(w), Some(h)) = (m.image_width, m.image_height) {
        writeln!(out, "Dimensions: {w}x{h}")?;
    }
    if let Some(flash) = m.flash {
        let label = if flash == 0 { "No flash" } else { "Flash fired" };
        writeln!(out, "Flash: {label}")?;
    }
    if let Some(wb) = m.white_balance {
        let label = if wb == 0 { "Auto" } else { "Manual" };
        writeln!(out, "White Balance: {label}")?;
    }
    if let Some(color_space) = m.color_space {
        writeln!(out, "Color Space: {color_space}")?;
    }
    if let Some(ref software) = m.software {
        writeln!(out, "Software: {software}")?;
    }

    Ok(())
}

#[derive(Serialize)]
struct JsonReport<'a> {
    filename: &'a str,
    metadata: Option<&'a Metadata>,
}

/// Write `{"filename": ..., "metadata": ...}` as pretty-printed JSON.
///
/// `metadata` is `null` when extraction failed. The verbose flag has no
/// bearing here: every extracted field is always included.
pub fn write_json_report<W: Write>(
    out: &mut W,
    filename: &str,
    metadata: Option<&Metadata>,
) -> serde_json::Result<()> {
    let report = JsonReport { filename, metadata };
    serde_json::to_writer_pretty(&mut *out, &report)?;
    writeln!(out).map_err(serde_json::Error::io)
}
