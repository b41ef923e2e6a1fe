use std::path::Path;

use crate::error::ExtractError;
use crate::exif::{Metadata, MetadataParser};

/// Supported image extensions (compared case-insensitively).
const IMAGE_EXTENSIONS: &[&str] = &["jpg", "jpeg", "png", "tiff", "tif", "webp", "bmp", "gif"];

/// Check if a file has a supported image extension.
///
/// # Example
///
/// ```rust
/// use exif_lens::pipeline::is_supported_image;
/// use std::path::Path;
///
/// assert!(is_supported_image(Path::new("IMG_0001.JPG")));
/// assert!(!is_supported_image(Path::new("notes.txt")));
/// ```
pub fn is_supported_image(path: &Path) -> bool {
    path.extension()
        .and_then(|ext| ext.to_str())
        .map(|ext| IMAGE_EXTENSIONS.contains(&ext.to_lowercase().as_str()))
        .unwrap_or(false)
}

/// Check that `path` exists, is a regular file, and looks like an image.
///
/// A directory is reported as such even when its name carries an image
/// extension, so the checks run in that order: existence, directory, extension.
pub fn validate_image_path(path: &Path) -> Result<(), ExtractError> {
    let meta = match std::fs::metadata(path) {
        Ok(meta) => meta,
        Err(_) => return Err(ExtractError::NotFound(path.to_path_buf())),
    };

    if meta.is_dir() {
        return Err(ExtractError::IsDirectory(path.to_path_buf()));
    }

    if !is_supported_image(path) {
        let ext = path
            .extension()
            .map(|e| format!(".{}", e.to_string_lossy()))
            .unwrap_or_else(|| "(none)".to_string());
        return Err(ExtractError::UnsupportedType(ext));
    }

    Ok(())
}

/// The name a file is reported under: its base name, or the whole path when
/// it has none (e.g. `..`).
pub fn display_name(path: &Path) -> String {
    path.file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_else(|| path.display().to_string())
}

/// Validate `path` and run it through `parser`.
///
/// The parser's output is returned unchanged. Use [`extract_metadata`] when a
/// failure should just be reported and skipped.
pub async fn try_extract_metadata(
    path: &Path,
    parser: &dyn MetadataParser,
) -> Result<Metadata, ExtractError> {
    validate_image_path(path)?;

    log::debug!("Reading metadata from {} with {}", path.display(), parser.name());
    parser.parse(path).await.map_err(ExtractError::Parse)
}

/// Extract metadata from one image, or `None` if that is not possible.
///
/// Every failure (missing file, directory, unsupported extension, parser
/// error) is logged as a single error line naming the file and swallowed.
///
/// # Example
///
/// ```rust,no_run
/// use exif_lens::exif::NomExifParser;
/// use exif_lens::pipeline::extract_metadata;
/// use std::path::Path;
///
/// # async fn example() {
/// match extract_metadata(Path::new("photo.jpg"), &NomExifParser).await {
///     Some(metadata) => println!("ISO: {:?}", metadata.iso),
///     None => println!("nothing to show"),
/// }
/// # }
/// ```
pub async fn extract_metadata(path: &Path, parser: &dyn MetadataParser) -> Option<Metadata> {
    match try_extract_metadata(path, parser).await {
        Ok(metadata) => Some(metadata),
        Err(e) => {
            log::error!("Error processing {}: {e}", display_name(path));
            None
        }
    }
}
