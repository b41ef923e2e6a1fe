//! The command-line driver: options in, one report per file out.

use std::ffi::OsString;
use std::io::Write;

use crate::args::{self, NAME, VERSION};
use crate::error::CliError;
use crate::exif::MetadataParser;
use crate::pipeline;
use crate::report;

/// Run one invocation.
///
/// `args` excludes the program name. They are raw OS strings, so paths that
/// are not valid UTF-8 reach the file system unchanged. Reports and usage go
/// to `out`; per-file failures are logged and reported as "no metadata"
/// without stopping the batch. An `Err` means the invocation itself was invalid (or `out` broke)
/// and the caller should exit with [`CliError::exit_code`].
///
/// # Example
///
/// ```rust,no_run
/// use exif_lens::app::run;
/// use exif_lens::exif::NomExifParser;
/// use std::ffi::OsString;
///
/// # async fn example() {
/// let args: Vec<OsString> = vec!["--json".into(), "photo.jpg".into()];
/// let mut out = Vec::new();
/// run(&args, &NomExifParser, &mut out).await.unwrap();
/// println!("{}", String::from_utf8_lossy(&out));
/// # }
/// ```
pub async fn run<W: Write>(
    args: &[OsString],
    parser: &dyn MetadataParser,
    out: &mut W,
) -> Result<(), CliError> {
    let options = args::parse_args(args.iter().cloned())?;

    if options.help || args.is_empty() {
        out.write_all(args::usage().as_bytes())?;
        return Ok(());
    }

    if options.version {
        writeln!(out, "{NAME} {VERSION}")?;
        return Ok(());
    }

    if options.files.is_empty() {
        return Err(CliError::NoFiles);
    }

    let total = options.files.len();
    for (i, path) in options.files.iter().enumerate() {
        log::debug!("[{}/{}] Processing: {}", i + 1, total, path.display());

        let metadata = pipeline::extract_metadata(path, parser).await;
        let filename = pipeline::display_name(path);

        if options.json {
            report::write_json_report(out, &filename, metadata.as_ref())?;
        } else {
            report::write_text_report(out, metadata.as_ref(), &filename, options.verbose)?;
        }
    }

    Ok(())
}
