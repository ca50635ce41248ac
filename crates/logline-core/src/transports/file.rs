//! File transport
//!
//! Appends each formatted line to a file. The file is opened in append mode
//! for every call and closed again, so there is no handle to flush or close
//! and external tools may move or truncate the file between calls.

use std::fs::{self, OpenOptions};
use std::io::Write;
use std::path::{Path, PathBuf};

use parking_lot::Mutex;

use super::traits::Transport;
use crate::diagnostics;
use crate::error::TransportResult;
use crate::types::{LogLevel, LogMeta};

/// A transport that appends lines to a file
pub struct FileTransport {
    path: PathBuf,
    /// Serializes appends so concurrent callers never interleave mid-line
    write_lock: Mutex<()>,
}

impl FileTransport {
    /// Create a file transport for `path`
    ///
    /// Relative paths are resolved against the current working directory.
    /// Missing parent directories are created; if that fails the error is
    /// ignored here and surfaces on the first append instead.
    pub fn new(path: impl AsRef<Path>) -> Self {
        let path = resolve(path.as_ref());
        if let Some(parent) = path.parent() {
            let _ = fs::create_dir_all(parent);
        }
        Self {
            path,
            write_lock: Mutex::new(()),
        }
    }

    /// Absolute path of the target file
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Append `message` plus a newline, returning any IO error
    pub fn append(&self, message: &str) -> TransportResult<()> {
        let mut line = String::with_capacity(message.len() + 1);
        line.push_str(message);
        line.push('\n');

        let _guard = self.write_lock.lock();
        let mut file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(&self.path)?;
        file.write_all(line.as_bytes())?;
        Ok(())
    }
}

fn resolve(path: &Path) -> PathBuf {
    if path.is_absolute() {
        return path.to_path_buf();
    }
    std::env::current_dir()
        .map(|cwd| cwd.join(path))
        .unwrap_or_else(|_| path.to_path_buf())
}

impl Transport for FileTransport {
    fn log(&self, _level: LogLevel, message: &str, _meta: Option<&LogMeta>) -> TransportResult<()> {
        if let Err(err) = self.append(message) {
            diagnostics::report("File transport write error", &err);
        }
        Ok(())
    }
}

impl std::fmt::Debug for FileTransport {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("FileTransport")
            .field("path", &self.path)
            .finish()
    }
}
