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

use crate::append::Append;
use crate::config::SharedConfig;
use crate::event::Extras;
use crate::event::LogEvent;
use crate::layout::ConsoleLayout;
use crate::layout::RecordLayout;
use crate::severity::Severity;
use crate::severity::should_log;
use crate::store::LogStore;
use crate::trap::Trap;

mod builder;
pub use self::builder::LoggerBuilder;

/// The event logger: filters events by the configured threshold, shows accepted events on the
/// console and appends them to the log file.
///
/// Construct it with [`EventLogger::builder`]. Building creates the log file, so every later
/// operation can assume it exists.
#[derive(Debug)]
pub struct EventLogger {
    config: SharedConfig,
    store: Arc<LogStore>,
    console: Box<dyn Append>,
    console_layout: ConsoleLayout,
    record_layout: RecordLayout,
    trap: Box<dyn Trap>,
}

impl EventLogger {
    /// Creates a builder for a logger whose file lives under `base_dir`.
    pub fn builder(base_dir: impl Into<std::path::PathBuf>) -> LoggerBuilder {
        LoggerBuilder::new(base_dir)
    }

    /// The config handle this logger reads on every event.
    pub fn config(&self) -> &SharedConfig {
        &self.config
    }

    /// The log file this logger appends to.
    pub fn store(&self) -> &Arc<LogStore> {
        &self.store
    }

    /// The trap failures are reported to.
    pub fn trap(&self) -> &dyn Trap {
        self.trap.as_ref()
    }

    /// Returns whether an event of `severity` would currently be accepted.
    pub fn enabled(&self, severity: &Severity) -> bool {
        should_log(self.config.load().log_level, severity)
    }

    /// Handles one event from the host.
    ///
    /// Rejected events are dropped silently. Accepted events always reach the console; they are
    /// appended to the log file when `saveToFile` is on. Failures are sent to the trap and never
    /// returned.
    pub fn on_event(&self, event: &LogEvent) {
        let config = self.config.load();
        if !should_log(config.log_level, &event.severity) {
            return;
        }

        let line = self.console_layout.format(event);
        if let Err(err) = self.console.append(&line) {
            self.trap.trap(&err);
        }

        if config.save_to_file {
            let record = self.record_layout.format(event);
            if let Err(err) = self.store.append(&record) {
                self.trap.trap(&err);
            }
        }
    }

    /// Handles an event given in the host's calling convention.
    pub fn log(&self, message: &str, severity: &str, source: &str, extras: Option<&Extras>) {
        let mut event = LogEvent::new(message, severity, source);
        if let Some(extras) = extras {
            event = event.with_extras(extras);
        }
        self.on_event(&event);
    }

    /// Flush the console appender.
    pub fn flush(&self) {
        if let Err(err) = self.console.flush() {
            self.trap.trap(&err);
        }
    }
}
