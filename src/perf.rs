//! Lightweight performance instrumentation.
//!
//! Two independent switches: `--perf` reports scope timings through
//! `tracing`, and `--render-debug-log` appends timestamped frame and
//! event records to a plain file.

use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{LazyLock, Mutex, MutexGuard, PoisonError};
use std::time::Instant;

static ENABLED: AtomicBool = AtomicBool::new(false);
static DEBUG_LOGGER: LazyLock<Mutex<DebugLogger>> =
    LazyLock::new(|| Mutex::new(DebugLogger::new()));

/// Times the enclosing block; reports on drop when perf logging is on.
#[derive(Debug)]
pub struct Scope {
    name: &'static str,
    start: Instant,
}

impl Drop for Scope {
    fn drop(&mut self) {
        if !is_enabled() {
            return;
        }
        let elapsed_ms = self.start.elapsed().as_secs_f64() * 1000.0;
        tracing::info!(target: "richedit::perf", scope = self.name, elapsed_ms, "scope finished");
        log_event(self.name, format!("elapsed_ms={elapsed_ms:.3}"));
    }
}

#[derive(Debug)]
struct DebugLogger {
    enabled: bool,
    start: Instant,
    writer: Option<BufWriter<File>>,
}

impl DebugLogger {
    fn new() -> Self {
        Self {
            enabled: false,
            start: Instant::now(),
            writer: None,
        }
    }
}

// A panic while holding the lock leaves the logger usable.
fn logger() -> MutexGuard<'static, DebugLogger> {
    DEBUG_LOGGER.lock().unwrap_or_else(PoisonError::into_inner)
}

pub fn set_enabled(enabled: bool) {
    ENABLED.store(enabled, Ordering::Relaxed);
}

pub fn scope(name: &'static str) -> Scope {
    Scope {
        name,
        start: Instant::now(),
    }
}

pub fn is_enabled() -> bool {
    ENABLED.load(Ordering::Relaxed)
}

/// Start writing debug events to `path`, or stop when `None`.
///
/// # Errors
///
/// Returns an error if the log file cannot be created or written.
pub fn set_debug_log_path(path: Option<&Path>) -> std::io::Result<()> {
    let mut logger = logger();
    if let Some(path) = path {
        let mut writer = BufWriter::new(File::create(path)?);
        writeln!(writer, "richedit render debug log start")?;
        writer.flush()?;
        logger.enabled = true;
        logger.start = Instant::now();
        logger.writer = Some(writer);
    } else {
        logger.enabled = false;
        logger.writer = None;
    }
    Ok(())
}

pub fn is_debug_log_enabled() -> bool {
    logger().enabled
}

pub fn log_event(name: &str, detail: impl AsRef<str>) {
    let mut logger = logger();
    if !logger.enabled {
        return;
    }
    let elapsed_ms = logger.start.elapsed().as_secs_f64() * 1000.0;
    if let Some(writer) = logger.writer.as_mut() {
        let _ = writeln!(
            writer,
            "[{elapsed_ms:>10.3} ms] {name}: {}",
            detail.as_ref()
        );
        let _ = writer.flush();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::NamedTempFile;

    #[test]
    fn test_set_enabled_toggles_runtime_flag() {
        set_enabled(true);
        assert!(is_enabled());

        set_enabled(false);
        assert!(!is_enabled());
    }

    #[test]
    fn test_debug_log_records_events_until_disabled() {
        let temp_file = NamedTempFile::new().unwrap();
        set_debug_log_path(Some(temp_file.path())).unwrap();
        assert!(is_debug_log_enabled());
        log_event("frame.draw", "frame=1 draw_ms=0.250");
        set_debug_log_path(None).unwrap();
        assert!(!is_debug_log_enabled());
        log_event("frame.draw", "frame=2 after close");

        let content = std::fs::read_to_string(temp_file.path()).unwrap();
        assert!(content.starts_with("richedit render debug log start"));
        assert!(content.contains("frame.draw: frame=1 draw_ms=0.250"));
        assert!(!content.contains("after close"));
    }

    #[test]
    fn test_debug_log_to_missing_directory_fails() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nope").join("render.log");
        assert!(set_debug_log_path(Some(&path)).is_err());
    }
}
