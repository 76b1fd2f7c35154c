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

use std::sync::Arc;

use crate::Error;
use crate::EventLogger;
use crate::event::LogEvent;
use crate::severity::Severity;

/// Forwards `log` records; the record target becomes the event source.
impl log::Log for EventLogger {
    fn enabled(&self, metadata: &log::Metadata) -> bool {
        EventLogger::enabled(self, &Severity::from(metadata.level()))
    }

    fn log(&self, record: &log::Record) {
        let event = LogEvent::new(record.args().to_string(), record.level(), record.target());
        self.on_event(&event);
    }

    fn flush(&self) {
        EventLogger::flush(self);
    }
}

struct LogCrateLogger(Arc<EventLogger>);

impl log::Log for LogCrateLogger {
    fn enabled(&self, metadata: &log::Metadata) -> bool {
        log::Log::enabled(self.0.as_ref(), metadata)
    }

    fn log(&self, record: &log::Record) {
        log::Log::log(self.0.as_ref(), record);
    }

    fn flush(&self) {
        log::Log::flush(self.0.as_ref());
    }
}

/// Set up the log crate global logger.
///
/// All records of the log crate are forwarded to `logger` as events. The global maximum level
/// is set to `Trace`, because the threshold is re-read from the logger's config on every record.
///
/// # Errors
///
/// Return an error if the log crate global logger has already been set.
///
/// # Examples
///
/// ```
/// use std::sync::Arc;
///
/// use eventlog::EventLogger;
///
/// let dir = tempfile::tempdir().unwrap();
/// let logger = Arc::new(EventLogger::builder(dir.path()).build().unwrap());
/// eventlog::bridge::try_setup_log_crate(logger.clone()).unwrap();
///
/// log::info!(target: "volume-manager", "disk mounted");
/// ```
pub fn try_setup_log_crate(logger: Arc<EventLogger>) -> Result<(), Error> {
    log::set_boxed_logger(Box::new(LogCrateLogger(logger)))
        .map_err(|err| Error::new("failed to set up log crate logger").with_source(err))?;
    log::set_max_level(log::LevelFilter::Trace);
    Ok(())
}

/// Set up the log crate global logger.
///
/// # Panics
///
/// Panic if the log crate global logger has already been set.
pub fn setup_log_crate(logger: Arc<EventLogger>) {
    try_setup_log_crate(logger).expect(
        "eventlog::bridge::setup_log_crate must be called before the log crate global logger initialized",
    )
}
