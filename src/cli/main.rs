use std::ffi::OsString;
use std::io::Write;
use std::process::ExitCode;

use exif_lens::app;
use exif_lens::args;
use exif_lens::exif::NomExifParser;

#[tokio::main(flavor = "current_thread")]
async fn main() -> ExitCode {
    // Set up logging
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn"))
        .format_timestamp(None)
        .format_target(false)
        .init();

    let argv: Vec<OsString> = std::env::args_os().skip(1).collect();

    let stdout = std::io::stdout();
    let mut out = stdout.lock();

    let code = match app::run(&argv, &NomExifParser, &mut out).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("Error: {err}");
            if err.shows_usage() {
                if let Err(e) = out.write_all(args::usage().as_bytes()) {
                    log::warn!("Failed to write usage: {e}");
                }
            }
            ExitCode::from(err.exit_code())
        }
    };

    if let Err(e) = out.flush() {
        log::warn!("Failed to flush stdout: {e}");
    }
    code
}
