//! EXIF metadata reading.
//!
//! - [`Metadata`]: the typed, optional-field record produced for one image
//! - [`MetadataParser`]: the seam to whatever decodes the file
//! - [`NomExifParser`]: the default parser, backed by `nom-exif`

mod metadata;
mod reader;

pub use metadata::{Metadata, TagValue};
pub use reader::{NomExifParser, read_metadata};

use anyhow::Result;
use std::path::Path;

/// Something that turns an image path into [`Metadata`].
///
/// The crate never decodes EXIF itself; it hands validated paths to a parser
/// and treats any error as "no metadata for this file". Implement this trait
/// to plug in another backend or a stub in tests.
///
/// # Example
///
/// ```rust,no_run
/// use exif_lens::exif::{MetadataParser, NomExifParser};
/// use std::path::Path;
///
/// # async fn example() -> anyhow::Result<()> {
/// let metadata = NomExifParser.parse(Path::new("photo.jpg")).await?;
/// println!("Camera: {:?}", metadata.make);
/// # Ok(())
/// # }
/// ```
#[async_trait::async_trait]
pub trait MetadataParser: Send + Sync {
    /// Display name of the backend (e.g., "nom-exif").
    fn name(&self) -> &str;
    /// Parse the file at `path`. Errors carry a human-readable message.
    async fn parse(&self, path: &Path) -> Result<Metadata>;
}
