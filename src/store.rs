// Copyright 2024 FastLabs Developers
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//     http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

//! The log file.

use std::fs;
use std::fs::OpenOptions;
use std::io;
use std::io::Write;
use std::path::Path;
use std::path::PathBuf;
use std::sync::Mutex;
use std::sync::MutexGuard;
use std::sync::PoisonError;

use crate::Error;
use crate::layout::PersistedRecord;

/// File name of the log file under the host supplied base directory.
pub const LOG_FILE_NAME: &str = "logger.log";

/// Owner of the single append-only log file.
///
/// Appends, reads and clears are serialized by one lock, so a read never observes a half
/// written record. Every append opens the file in append mode, writes one whole line and
/// closes it again.
#[derive(Debug)]
pub struct LogStore {
    path: PathBuf,
    lock: Mutex<()>,
}

impl LogStore {
    /// Creates a store for `<base_dir>/logger.log`. Does not touch the file system.
    pub fn new(base_dir: impl AsRef<Path>) -> Self {
        Self::with_path(base_dir.as_ref().join(LOG_FILE_NAME))
    }

    /// Creates a store for an explicit file path. Does not touch the file system.
    pub fn with_path(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            lock: Mutex::new(()),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn guard(&self) -> MutexGuard<'_, ()> {
        self.lock.lock().unwrap_or_else(PoisonError::into_inner)
    }

    /// Creates the log file and its parent directories if absent. Existing content is kept.
    ///
    /// # Errors
    ///
    /// Returns an error if the directory or the file cannot be created.
    pub fn ensure_exists(&self) -> Result<(), Error> {
        let _guard = self.guard();
        self.create_if_missing()
    }

    fn create_if_missing(&self) -> Result<(), Error> {
        if let Some(dir) = self.path.parent() {
            fs::create_dir_all(dir).map_err(|err| {
                Error::new("failed to create log directory")
                    .with_context("path", dir.display())
                    .with_source(err)
            })?;
        }
        OpenOptions::new()
            .append(true)
            .create(true)
            .open(&self.path)
            .map_err(|err| self.error("failed to create log file", err))?;
        Ok(())
    }

    /// Appends one record as a single line.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be opened or written. Content written before is
    /// never truncated.
    pub fn append(&self, record: &PersistedRecord) -> Result<(), Error> {
        let line = record.to_line();
        let _guard = self.guard();
        let mut file = OpenOptions::new()
            .append(true)
            .create(true)
            .open(&self.path)
            .map_err(|err| self.error("failed to open log file", err))?;
        file.write_all(line.as_bytes())
            .map_err(|err| self.error("failed to append log record", err))?;
        Ok(())
    }

    /// Returns the raw content of the log file.
    ///
    /// A missing file is not an error: the file is created again and an empty buffer returned.
    ///
    /// # Errors
    ///
    /// Returns an error if the file exists but cannot be read, or if re-creating it fails.
    pub fn read_all(&self) -> Result<Vec<u8>, Error> {
        let _guard = self.guard();
        match fs::read(&self.path) {
            Ok(bytes) => Ok(bytes),
            Err(err) if err.kind() == io::ErrorKind::NotFound => {
                self.create_if_missing()?;
                Ok(Vec::new())
            }
            Err(err) => Err(self.error("failed to read log file", err)),
        }
    }

    /// Parses every line of the log file into a [`PersistedRecord`].
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or a line is malformed.
    pub fn records(&self) -> Result<Vec<PersistedRecord>, Error> {
        let bytes = self.read_all()?;
        String::from_utf8_lossy(&bytes)
            .lines()
            .map(str::parse)
            .collect()
    }

    /// Truncates the log file to zero length. Clearing an empty file is a no-op.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be opened for writing.
    pub fn clear(&self) -> Result<(), Error> {
        let _guard = self.guard();
        OpenOptions::new()
            .write(true)
            .create(true)
            .truncate(true)
            .open(&self.path)
            .map_err(|err| self.error("failed to clear log file", err))?;
        Ok(())
    }

    fn error(&self, message: &str, err: io::Error) -> Error {
        Error::new(message)
            .with_context("path", self.path.display())
            .with_source(err)
    }
}
