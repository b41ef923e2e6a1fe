use anyhow::{Context, Result};
use nom_exif::*;
use std::path::{Path, PathBuf};

use super::metadata::{Metadata, TagValue};
use super::MetadataParser;

/// [`MetadataParser`] backed by `nom-exif`.
///
/// Parsing is blocking file I/O, so it runs on tokio's blocking pool and the
/// caller simply awaits it.
#[derive(Debug, Clone, Copy, Default)]
pub struct NomExifParser;

#[async_trait::async_trait]
impl MetadataParser for NomExifParser {
    fn name(&self) -> &str {
        "nom-exif"
    }

    async fn parse(&self, path: &Path) -> Result<Metadata> {
        let path: PathBuf = path.to_path_buf();
        tokio::task::spawn_blocking(move || read_metadata(&path))
            .await
            .context("EXIF parser task panicked")?
    }
}

/// Read EXIF metadata from an image file.
///
/// Fails when the file cannot be opened, carries no EXIF block, or is in a
/// container `nom-exif` does not understand.
pub fn read_metadata(path: &Path) -> Result<Metadata> {
    let mut parser = MediaParser::new();
    let ms = MediaSource::file_path(path).context("Failed to open image file")?;

    if !ms.has_exif() {
        anyhow::bail!("No EXIF data found");
    }

    let iter: ExifIter = parser.parse(ms).context("Failed to parse EXIF data")?;
    log::debug!("Parsing EXIF entries from {}", path.display());

    // Parse GPS info before iterating (iteration consumes the entries)
    let gps_info = iter.parse_gps_info().ok().flatten();

    let mut data = Metadata::default();
    let mut count = 0usize;

    for entry in iter {
        let Some(value) = entry.get_value() else {
            continue;
        };
        let name = match entry.tag() {
            Some(tag) => format!("{tag:?}"),
            None => format!("0x{:04x}", entry.tag_code()),
        };
        if let Some(value) = to_tag_value(value) {
            data.apply_tag(entry.tag_code(), &name, &value);
            count += 1;
        }
    }

    if let Some(gps) = gps_info {
        data.latitude = latlng_to_decimal(&gps.latitude, gps.latitude_ref);
        data.longitude = latlng_to_decimal(&gps.longitude, gps.longitude_ref);
    }

    data.finish();
    log::debug!("Read {count} tag(s) from {}", path.display());

    Ok(data)
}

/// Reduce a nom-exif value to text or a number.
///
/// Binary blobs (maker notes, thumbnails) are dropped.
fn to_tag_value(val: &EntryValue) -> Option<TagValue> {
    let value = match val {
        EntryValue::Text(s) => TagValue::Text(s.clone()),
        EntryValue::URational(r) => TagValue::Number(ratio(r.0 as f64, r.1 as f64)?),
        EntryValue::IRational(r) => TagValue::Number(ratio(r.0 as f64, r.1 as f64)?),
        EntryValue::U16(n) => TagValue::Number(f64::from(*n)),
        EntryValue::U32(n) => TagValue::Number(f64::from(*n)),
        EntryValue::Undefined(_) => return None,
        // Other scalars and dates keep their display form; numeric text still
        // converts when a typed member asks for a number.
        other => TagValue::Text(other.to_string()),
    };
    Some(value)
}

fn ratio(numerator: f64, denominator: f64) -> Option<f64> {
    if denominator == 0.0 {
        None
    } else {
        Some(numerator / denominator)
    }
}

/// Convert a nom-exif LatLng (3 URationals: deg, min, sec) to decimal degrees.
fn latlng_to_decimal(latlng: &LatLng, reference: char) -> Option<f64> {
    rationals_to_decimal(
        [
            (latlng.0.0, latlng.0.1),
            (latlng.1.0, latlng.1.1),
            (latlng.2.0, latlng.2.1),
        ],
        reference,
    )
}

/// `None` if any of the degree, minute or second rationals has a zero
/// denominator.
fn rationals_to_decimal(dms: [(u32, u32); 3], reference: char) -> Option<f64> {
    let [degrees, minutes, seconds] = dms.map(|(n, d)| ratio(f64::from(n), f64::from(d)));
    Some(dms_to_decimal(degrees?, minutes?, seconds?, reference))
}

fn dms_to_decimal(degrees: f64, minutes: f64, seconds: f64, reference: char) -> f64 {
    let coord = degrees + minutes / 60.0 + seconds / 3600.0;
    if reference == 'S' || reference == 'W' {
        -coord
    } else {
        coord
    }
}
