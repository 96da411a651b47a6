use std::fs::{self, File, OpenOptions};
use std::io::{ErrorKind, Read, Seek, SeekFrom, Write};
use std::path::Path;
use std::sync::{Arc, Mutex, MutexGuard};
use tracing_subscriber::fmt::MakeWriter;
use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

/// Log size that triggers a trim on start-up (5 MB)
const MAX_LOG_SIZE: u64 = 5 * 1024 * 1024;
/// Bytes of recent history kept after a trim (1 MB)
const KEEP_SIZE: u64 = 1024 * 1024;

const LOG_FILE_NAME: &str = "learnflow.log";
const TRIM_MARKER: &[u8] = b"--- earlier learnflow entries trimmed ---\n";

/// Drop the partial first line of a tail read from the middle of a file
fn whole_lines(tail: &[u8]) -> &[u8] {
    match tail.iter().position(|&b| b == b'\n') {
        Some(newline) => &tail[newline + 1..],
        None => tail,
    }
}

/// Cut an oversized log down to its last [`KEEP_SIZE`] bytes.
///
/// Returns `true` if the file was trimmed.
fn trim_log(log_path: &Path) -> std::io::Result<bool> {
    let len = match fs::metadata(log_path) {
        Ok(metadata) => metadata.len(),
        Err(e) if e.kind() == ErrorKind::NotFound => return Ok(false),
        Err(e) => return Err(e),
    };
    if len <= MAX_LOG_SIZE {
        return Ok(false);
    }

    let mut tail = Vec::with_capacity(KEEP_SIZE as usize);
    {
        let mut file = File::open(log_path)?;
        file.seek(SeekFrom::End(-(KEEP_SIZE as i64)))?;
        file.read_to_end(&mut tail)?;
    }

    let mut contents = TRIM_MARKER.to_vec();
    contents.extend_from_slice(whole_lines(&tail));
    fs::write(log_path, contents)?;

    Ok(true)
}

/// Log file handle shared by every writer the subscriber makes
#[derive(Clone)]
struct SharedLog(Arc<Mutex<File>>);

impl SharedLog {
    fn lock(&self) -> std::io::Result<MutexGuard<'_, File>> {
        self.0
            .lock()
            .map_err(|_| std::io::Error::other("log file mutex poisoned"))
    }
}

impl Write for SharedLog {
    fn write(&mut self, buf: &[u8]) -> std::io::Result<usize> {
        self.lock()?.write(buf)
    }

    fn flush(&mut self) -> std::io::Result<()> {
        self.lock()?.flush()
    }
}

impl<'a> MakeWriter<'a> for SharedLog {
    type Writer = SharedLog;

    fn make_writer(&'a self) -> Self::Writer {
        self.clone()
    }
}

/// Initialize logging to write to a file in the data directory.
///
/// Logs are written to `{data_dir}/learnflow.log` with size-based rotation.
/// When the log exceeds 5MB, older entries are removed keeping only the last 1MB.
/// The log level can be controlled via the `level` parameter or the `RUST_LOG` environment variable.
pub fn init_logging(data_dir: &Path, level: &str) -> color_eyre::Result<()> {
    // Ensure data directory exists
    std::fs::create_dir_all(data_dir)?;

    let log_path = data_dir.join(LOG_FILE_NAME);

    let trimmed = trim_log(&log_path);

    let file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(&log_path)?;

    let writer = SharedLog(Arc::new(Mutex::new(file)));

    // Build filter from RUST_LOG env var or use provided level
    let default_filter = format!("learnflow={level},learnflow_core=warn");
    let env_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&default_filter));

    // Build and initialize the subscriber
    tracing_subscriber::registry()
        .with(env_filter)
        .with(
            fmt::layer()
                .with_writer(writer)
                .with_ansi(false)
                .with_target(true)
                .with_thread_ids(false),
        )
        .init();

    tracing::info!(
        log_path = %log_path.display(),
        "learnflow logging initialized"
    );
    match trimmed {
        Ok(true) => tracing::info!(kept_bytes = KEEP_SIZE, "Trimmed oversized log file"),
        Ok(false) => {}
        Err(e) => tracing::warn!(error = %e, "Failed to trim log file"),
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_trim_missing_file_is_noop() {
        let temp_dir = TempDir::new().unwrap();
        assert!(!trim_log(&temp_dir.path().join(LOG_FILE_NAME)).unwrap());
    }

    #[test]
    fn test_small_log_is_untouched() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join(LOG_FILE_NAME);
        fs::write(&path, "line one\nline two\n").unwrap();

        assert!(!trim_log(&path).unwrap());
        assert_eq!(fs::read_to_string(&path).unwrap(), "line one\nline two\n");
    }

    #[test]
    fn test_whole_lines() {
        assert_eq!(whole_lines(b"ial\nnext\n"), b"next\n");
        assert_eq!(whole_lines(b"no newline"), b"no newline");
    }

    #[test]
    fn test_large_log_keeps_tail_on_line_boundary() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join(LOG_FILE_NAME);

        let line = "0123456789abcdef0123456789abcdef0123456789abcdef012345678\n";
        let lines = (MAX_LOG_SIZE as usize / line.len()) + 10;
        let mut content = line.repeat(lines);
        content.push_str("last entry\n");
        fs::write(&path, &content).unwrap();

        assert!(trim_log(&path).unwrap());

        let trimmed = fs::read_to_string(&path).unwrap();
        assert!(trimmed.as_bytes().starts_with(TRIM_MARKER));
        assert!(trimmed.ends_with("last entry\n"));
        assert!((trimmed.len() as u64) <= KEEP_SIZE + TRIM_MARKER.len() as u64);
        assert!(trimmed.lines().skip(1).all(|l| l == line.trim_end() || l == "last entry"));
    }
}
