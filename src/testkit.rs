use anyhow::Result;
use std::cell::RefCell;
use std::path::{Path, PathBuf};
use std::sync::{Mutex, Once};

use crate::exif::{Metadata, MetadataParser};

/// Parser double: returns a canned result and remembers every path it saw.
pub(crate) struct StubParser {
    result: std::result::Result<Metadata, String>,
    calls: Mutex<Vec<PathBuf>>,
}

impl StubParser {
    pub(crate) fn returning(metadata: Metadata) -> Self {
        Self {
            result: Ok(metadata),
            calls: Mutex::new(Vec::new()),
        }
    }

    pub(crate) fn failing(message: &str) -> Self {
        Self {
            result: Err(message.to_string()),
            calls: Mutex::new(Vec::new()),
        }
    }

    pub(crate) fn calls(&self) -> Vec<PathBuf> {
        self.calls.lock().unwrap().clone()
    }
}

#[async_trait::async_trait]
impl MetadataParser for StubParser {
    fn name(&self) -> &str {
        "stub"
    }

    async fn parse(&self, path: &Path) -> Result<Metadata> {
        self.calls.lock().unwrap().push(path.to_path_buf());
        match &self.result {
            Ok(metadata) => Ok(metadata.clone()),
            Err(message) => Err(anyhow::anyhow!(message.clone())),
        }
    }
}

// ── log capture ──────────────────────────────────────────────────────

thread_local! {
    static RECORDS: RefCell<Vec<(log::Level, String)>> = const { RefCell::new(Vec::new()) };
}

/// Records each message on the thread that logged it, so parallel tests
/// never see each other's output.
struct CaptureLogger;

impl log::Log for CaptureLogger {
    fn enabled(&self, _metadata: &log::Metadata<'_>) -> bool {
        true
    }

    fn log(&self, record: &log::Record<'_>) {
        RECORDS.with(|records| {
            records
                .borrow_mut()
                .push((record.level(), record.args().to_string()))
        });
    }

    fn flush(&self) {}
}

static LOGGER: CaptureLogger = CaptureLogger;

/// Install the capturing logger (once per test binary) and clear this
/// thread's records.
pub(crate) fn capture_logs() {
    static INSTALL: Once = Once::new();
    INSTALL.call_once(|| {
        log::set_logger(&LOGGER).expect("no other logger in unit tests");
        log::set_max_level(log::LevelFilter::Trace);
    });
    RECORDS.with(|records| records.borrow_mut().clear());
}

/// Error-level messages logged on this thread since [`capture_logs`].
pub(crate) fn logged_errors() -> Vec<String> {
    RECORDS.with(|records| {
        records
            .borrow()
            .iter()
            .filter(|(level, _)| *level == log::Level::Error)
            .map(|(_, message)| message.clone())
            .collect()
    })
}
