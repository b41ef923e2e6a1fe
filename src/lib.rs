//! # exif-lens
//!
//! Read EXIF metadata (camera, exposure settings, capture time, GPS) from image
//! files and print it as a short text report or as JSON.
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use exif_lens::exif::NomExifParser;
//! use exif_lens::pipeline::extract_metadata;
//! use exif_lens::report::write_text_report;
//! use std::path::Path;
//!
//! #[tokio::main]
//! async fn main() -> anyhow::Result<()> {
//!     let path = Path::new("photo.jpg");
//!
//!     // `None` means the file was missing, not an image, or had no readable EXIF
//!     let metadata = extract_metadata(path, &NomExifParser).await;
//!
//!     let mut stdout = std::io::stdout();
//!     write_text_report(&mut stdout, metadata.as_ref(), "photo.jpg", true)?;
//!
//!     Ok(())
//! }
//! ```
//!
//! ## Supported Formats
//!
//! Files must end in `.jpg`, `.jpeg`, `.png`, `.tif`, `.tiff`, `.webp`, `.bmp`
//! or `.gif` (any case). Decoding is done by `nom-exif`; a file it cannot read
//! is reported and skipped.
//!
//! ## Modules
//!
//! - [`exif`]: Metadata record, parser trait, and the `nom-exif` backend
//! - [`pipeline`]: File validation and extraction
//! - [`report`]: Text and JSON rendering
//! - [`args`] / [`app`]: Command-line parsing and the driver (feature `cli`)
//! - [`error`]: Error types

#[cfg(feature = "cli")]
pub mod app;
#[cfg(feature = "cli")]
pub mod args;
pub mod error;
pub mod exif;
pub mod pipeline;
pub mod report;

#[cfg(test)]
mod testkit;
