//! Rotating file writer with size-based rotation and backup retention.
//!
//! [`FileWriter`] is a `tracing_subscriber` [`MakeWriter`]: every formatted
//! event is appended to the log file, which is rotated once it grows past a
//! size threshold. A fixed number of backups is kept.

use std::fs::{self, File, OpenOptions};
use std::io::{self, Write};
use std::path::PathBuf;
use std::sync::Mutex;
use std::time::{Duration, SystemTime, UNIX_EPOCH};
use tracing_subscriber::fmt::MakeWriter;

/// Maximum file size before rotation (10 MB).
pub const MAX_FILE_SIZE_BYTES: u64 = 10 * 1024 * 1024;

/// Number of backup files to retain after rotation.
pub const MAX_BACKUP_FILES: usize = 3;

/// Thread-safe rotating log file writer.
///
/// # Rotation Strategy
///
/// 1. Check file size before each write
/// 2. If size > threshold, rotate:
///    - Rename current file to `<name>.<unix_millis>`
///    - Reopen an empty file on the next write
///    - Remove the oldest backups beyond [`MAX_BACKUP_FILES`]
///
/// # Example
///
/// ```rust
/// use searchpanel::observability::FileWriter;
/// use tracing_subscriber::fmt;
///
/// let dir = tempfile::tempdir()?;
/// let layer = fmt::layer::<tracing_subscriber::Registry>().with_ansi(false).with_writer(FileWriter::new(dir.path().join("panel.log")));
/// # drop(layer);
/// # Ok::<(), std::io::Error>(())
/// ```
pub struct FileWriter {
    file_path: PathBuf,
    max_size: u64,
    /// Opened on first write.
    file: Mutex<Option<File>>,
}

impl FileWriter {
    /// Creates a writer rotating at [`MAX_FILE_SIZE_BYTES`].
    ///
    /// The file is not opened until the first write, so construction succeeds
    /// even if the file cannot be opened yet.
    #[must_use]
    pub const fn new(file_path: PathBuf) -> Self {
        Self::with_max_size(file_path, MAX_FILE_SIZE_BYTES)
    }

    #[must_use]
    pub const fn with_max_size(file_path: PathBuf, max_size: u64) -> Self {
        Self {
            file_path,
            max_size,
            file: Mutex::new(None),
        }
    }

    /// Appends `buf` to the log file, rotating first if necessary.
    ///
    /// # Errors
    ///
    /// Fails on filesystem errors or if another thread panicked while writing.
    pub fn append(&self, buf: &[u8]) -> io::Result<()> {
        let mut file = self
            .file
            .lock()
            .map_err(|e| io::Error::new(io::ErrorKind::Other, format!("Mutex poisoned: {e}")))?;

        self.check_and_rotate(&mut file)?;

        if file.is_none() {
            *file = Some(
                OpenOptions::new()
                    .create(true)
                    .append(true)
                    .open(&self.file_path)?,
            );
        }

        let handle = file
            .as_mut()
            .ok_or_else(|| io::Error::new(io::ErrorKind::Other, "No file available"))?;

        handle.write_all(buf)?;
        handle.flush()
    }

    fn check_and_rotate(&self, file: &mut Option<File>) -> io::Result<()> {
        if let Ok(metadata) = fs::metadata(&self.file_path) {
            if metadata.len() > self.max_size {
                *file = None;
                self.rotate_files()?;
            }
        }
        Ok(())
    }

    fn rotate_files(&self) -> io::Result<()> {
        let timestamp = SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .unwrap_or(Duration::ZERO)
            .as_millis();

        let mut backup_name = self.file_path.as_os_str().to_owned();
        backup_name.push(format!(".{timestamp}"));

        if self.file_path.exists() {
            fs::rename(&self.file_path, PathBuf::from(backup_name))?;
        }

        self.cleanup_old_backups()
    }

    /// Keeps the newest [`MAX_BACKUP_FILES`] backups, ignoring removal errors.
    fn cleanup_old_backups(&self) -> io::Result<()> {
        let parent_dir = match self.file_path.parent() {
            Some(dir) if !dir.as_os_str().is_empty() => dir.to_path_buf(),
            _ => PathBuf::from("."),
        };

        let prefix = self
            .file_path
            .file_name()
            .and_then(|s| s.to_str())
            .map(|name| format!("{name}."))
            .ok_or_else(|| io::Error::new(io::ErrorKind::Other, "Invalid file name"))?;

        let mut backups: Vec<PathBuf> = fs::read_dir(parent_dir)?
            .filter_map(std::result::Result::ok)
            .map(|entry| entry.path())
            .filter(|path| {
                path.file_name()
                    .and_then(|name| name.to_str())
                    .and_then(|name| name.strip_prefix(prefix.as_str()))
                    .is_some_and(|suffix| !suffix.is_empty() && suffix.bytes().all(|b| b.is_ascii_digit()))
            })
            .collect();

        // Timestamps have a fixed width for centuries, so lexical order is age order.
        backups.sort_unstable_by(|a, b| b.cmp(a));

        for old_backup in backups.iter().skip(MAX_BACKUP_FILES) {
            let _ = fs::remove_file(old_backup);
        }

        Ok(())
    }
}

impl std::fmt::Debug for FileWriter {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("FileWriter")
            .field("file_path", &self.file_path)
            .field("max_size", &self.max_size)
            .finish_non_exhaustive()
    }
}

/// Per-event handle returned by [`FileWriter::make_writer`].
#[derive(Debug)]
pub struct FileWriterHandle<'a> {
    writer: &'a FileWriter,
}

impl Write for FileWriterHandle<'_> {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.writer.append(buf)?;
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

impl<'a> MakeWriter<'a> for FileWriter {
    type Writer = FileWriterHandle<'a>;

    fn make_writer(&'a self) -> Self::Writer {
        FileWriterHandle { writer: self }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn backups(dir: &std::path::Path) -> usize {
        fs::read_dir(dir)
            .unwrap()
            .filter_map(std::result::Result::ok)
            .filter(|entry| entry.file_name().to_string_lossy().starts_with("panel.log."))
            .count()
    }

    #[test]
    fn appends_lines() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("panel.log");
        let writer = FileWriter::new(path.clone());

        writer.make_writer().write_all(b"first\n").unwrap();
        writer.make_writer().write_all(b"second\n").unwrap();

        assert_eq!(fs::read_to_string(path).unwrap(), "first\nsecond\n");
        assert_eq!(backups(dir.path()), 0);
    }

    #[test]
    fn rotates_past_threshold() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("panel.log");
        let writer = FileWriter::with_max_size(path.clone(), 8);

        writer.append(b"0123456789\n").unwrap();
        writer.append(b"next\n").unwrap();

        assert_eq!(fs::read_to_string(&path).unwrap(), "next\n");
        assert_eq!(backups(dir.path()), 1);
    }

    #[test]
    fn keeps_bounded_backups() {
        let dir = tempfile::tempdir().unwrap();
        for stamp in ["1000", "1001", "1002", "1003", "1004"] {
            fs::write(dir.path().join(format!("panel.log.{stamp}")), "old").unwrap();
        }
        fs::write(dir.path().join("unrelated.log.1"), "keep").unwrap();
        let writer = FileWriter::new(dir.path().join("panel.log"));

        writer.cleanup_old_backups().unwrap();

        assert_eq!(backups(dir.path()), MAX_BACKUP_FILES);
        assert!(!dir.path().join("panel.log.1000").exists());
        assert!(dir.path().join("panel.log.1004").exists());
        assert!(dir.path().join("unrelated.log.1").exists());
    }
}
