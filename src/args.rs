//! Command-line options.

use clap::Parser;
use clap::error::{ContextKind, ContextValue};
use std::ffi::OsString;
use std::path::PathBuf;

use crate::error::CliError;

/// Binary name used in usage and version output.
pub const NAME: &str = "exif-lens";

/// Crate version.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

#[derive(Parser, Debug)]
#[command(
    name = NAME,
    disable_help_flag = true,
    disable_version_flag = true,
    args_override_self = true
)]
struct Cli {
    /// Image files to read
    #[arg(value_name = "IMAGE_PATH")]
    files: Vec<PathBuf>,

    /// Show help message
    #[arg(short, long)]
    help: bool,

    /// Show additional metadata
    #[arg(short, long)]
    verbose: bool,

    /// Output metadata in JSON format
    #[arg(long)]
    json: bool,

    /// Show version
    #[arg(short = 'V', long)]
    version: bool,
}

/// Options for one invocation, fixed once parsed.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Options {
    pub help: bool,
    pub verbose: bool,
    pub json: bool,
    pub version: bool,
    /// Image paths in the order given.
    pub files: Vec<PathBuf>,
}

/// Flag spellings accepted on the command line, exactly as typed.
const KNOWN_FLAGS: [&str; 7] = ["-h", "--help", "-v", "--verbose", "--json", "-V", "--version"];

/// Parse arguments (without the program name) into [`Options`].
///
/// Every token that starts with `-` must be one of the known spellings.
/// Anything else is rejected before clap sees it: a bare `-` or `--`,
/// combined short flags such as `-vh`, and `--flag=value` forms.
///
/// # Example
///
/// ```rust
/// use exif_lens::args::parse_args;
///
/// let options = parse_args(["--verbose", "a.jpg", "b.png"]).unwrap();
/// assert!(options.verbose);
/// assert_eq!(options.files.len(), 2);
///
/// assert!(parse_args(["--foo"]).is_err());
/// ```
pub fn parse_args<I, S>(args: I) -> Result<Options, CliError>
where
    I: IntoIterator<Item = S>,
    S: Into<OsString>,
{
    let args: Vec<OsString> = args.into_iter().map(Into::into).collect();

    if let Some(unknown) = args.iter().find_map(unknown_option) {
        return Err(CliError::UnknownOption(unknown));
    }

    let argv = std::iter::once(OsString::from(NAME)).chain(args);
    let cli = Cli::try_parse_from(argv).map_err(from_clap)?;

    Ok(Options {
        help: cli.help,
        verbose: cli.verbose,
        json: cli.json,
        version: cli.version,
        files: cli.files,
    })
}

/// The token itself when it looks like an option but is not a known flag.
fn unknown_option(arg: &OsString) -> Option<String> {
    let text = arg.to_string_lossy();
    if text.starts_with('-') && !KNOWN_FLAGS.contains(&text.as_ref()) {
        Some(text.into_owned())
    } else {
        None
    }
}

// Only known flags and plain paths reach clap, so this is a fallback.
fn from_clap(err: clap::Error) -> CliError {
    match err.get(ContextKind::InvalidArg) {
        Some(ContextValue::String(arg)) => CliError::UnknownOption(arg.clone()),
        _ => CliError::UnknownOption(format!("{:?}", err.kind())),
    }
}

/// The help text.
pub fn usage() -> String {
    format!(
        "\
Image Metadata Extractor
========================

Usage: {NAME} [options] <image_path> [image_path2] ...

Options:
  -h, --help     Show this help message
  -v, --verbose  Show additional metadata
  --json         Output metadata in JSON format
  -V, --version  Show version

Examples:
  {NAME} photo.jpg
  {NAME} --verbose image1.jpg image2.png
  {NAME} --json photo.jpg
"
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    const NONE: [&str; 0] = [];

    #[test]
    fn no_arguments() {
        let options = parse_args(NONE).unwrap();
        assert_eq!(options, Options::default());
    }

    #[test]
    fn flags_and_files_in_order() {
        let options = parse_args(["b.png", "-v", "--json", "a.jpg"]).unwrap();
        assert!(options.verbose);
        assert!(options.json);
        assert!(!options.help);
        assert_eq!(
            options.files,
            vec![PathBuf::from("b.png"), PathBuf::from("a.jpg")]
        );
    }

    #[test]
    fn short_and_long_help() {
        assert!(parse_args(["-h"]).unwrap().help);
        assert!(parse_args(["--help", "a.jpg"]).unwrap().help);
    }

    #[test]
    fn long_verbose() {
        assert!(parse_args(["--verbose"]).unwrap().verbose);
    }

    #[test]
    fn repeated_flag_is_fine() {
        assert!(parse_args(["-v", "-v", "x.jpg"]).unwrap().verbose);
    }

    #[test]
    fn version_flag() {
        assert!(parse_args(["-V"]).unwrap().version);
        assert!(parse_args(["--version"]).unwrap().version);
    }

    #[test]
    fn unknown_long_option() {
        let err = parse_args(["a.jpg", "--foo"]).unwrap_err();
        assert!(matches!(err, CliError::UnknownOption(ref arg) if arg == "--foo"));
        assert_eq!(err.to_string(), "Unknown option: --foo");
    }

    #[test]
    fn unknown_short_option() {
        let err = parse_args(["-x"]).unwrap_err();
        assert!(matches!(err, CliError::UnknownOption(_)));
        assert!(err.to_string().starts_with("Unknown option: -"));
    }

    #[test]
    fn dashed_paths_are_rejected() {
        let err = parse_args(["-"]).unwrap_err();
        assert!(matches!(err, CliError::UnknownOption(ref arg) if arg == "-"));

        let err = parse_args(["a.jpg", "-odd.jpg"]).unwrap_err();
        assert!(matches!(err, CliError::UnknownOption(ref arg) if arg == "-odd.jpg"));
    }

    // ── tokens clap would otherwise accept ──────────────────────────

    #[test]
    fn double_dash_is_unknown() {
        let err = parse_args(["--", "a.jpg"]).unwrap_err();
        assert!(matches!(err, CliError::UnknownOption(ref arg) if arg == "--"));
        assert_eq!(err.to_string(), "Unknown option: --");
    }

    #[test]
    fn combined_short_flags_are_unknown() {
        let err = parse_args(["-vh"]).unwrap_err();
        assert!(matches!(err, CliError::UnknownOption(ref arg) if arg == "-vh"));
    }

    #[test]
    fn json_takes_no_value() {
        let err = parse_args(["--json=yes", "a.jpg"]).unwrap_err();
        assert!(matches!(err, CliError::UnknownOption(ref arg) if arg == "--json=yes"));
        assert_eq!(err.to_string(), "Unknown option: --json=yes");
        assert_eq!(err.exit_code(), 1);
    }

    #[test]
    fn first_unknown_token_is_reported() {
        let err = parse_args(["a.jpg", "--bar", "-x"]).unwrap_err();
        assert_eq!(err.to_string(), "Unknown option: --bar");
    }

    #[cfg(unix)]
    #[test]
    fn non_utf8_path_is_kept() {
        use std::os::unix::ffi::OsStringExt;

        let raw = OsString::from_vec(b"caf\xff.jpg".to_vec());
        let options = parse_args([raw.clone()]).unwrap();
        assert_eq!(options.files, vec![PathBuf::from(raw)]);
    }

    #[test]
    fn usage_lists_every_flag() {
        let text = usage();
        for flag in ["-h, --help", "-v, --verbose", "--json", "-V, --version"] {
            assert!(text.contains(flag), "usage is missing {flag}");
        }
        assert!(text.contains("Usage: exif-lens [options] <image_path>"));
    }
}
