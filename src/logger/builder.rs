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

use std::path::PathBuf;
use std::sync::Arc;

use crate::Error;
use crate::EventLogger;
use crate::append::Append;
use crate::append::Stdout;
use crate::clock::Clock;
use crate::config::SharedConfig;
use crate::event::LogEvent;
use crate::layout::ConsoleLayout;
use crate::layout::RecordLayout;
use crate::severity::Severity;
use crate::store::LogStore;
use crate::trap::DefaultTrap;
use crate::trap::Trap;

/// A builder for [`EventLogger`].
///
/// ## Examples
///
/// ```
/// use eventlog::Config;
/// use eventlog::EventLogger;
/// use eventlog::append::Stdout;
///
/// let dir = tempfile::tempdir().unwrap();
/// let logger = EventLogger::builder(dir.path())
///     .config(Config::default())
///     .console(Stdout::default().no_color())
///     .build()
///     .unwrap();
///
/// logger.log("disk mounted", "info", "volume-manager", None);
/// ```
#[must_use = "call `build` to create the log file and get the logger"]
#[derive(Debug)]
pub struct LoggerBuilder {
    base_dir: PathBuf,
    config: SharedConfig,
    console: Box<dyn Append>,
    trap: Box<dyn Trap>,
    clock: Clock,
}

impl LoggerBuilder {
    pub(crate) fn new(base_dir: impl Into<PathBuf>) -> Self {
        Self {
            base_dir: base_dir.into(),
            config: SharedConfig::default(),
            console: Box::new(Stdout::default()),
            trap: Box::new(DefaultTrap::default()),
            clock: Clock::default(),
        }
    }

    /// Sets the config, or a [`SharedConfig`] handle the host keeps updating.
    pub fn config(mut self, config: impl Into<SharedConfig>) -> Self {
        self.config = config.into();
        self
    }

    /// Sets the console appender.
    ///
    /// Default to a colorized [`Stdout`].
    pub fn console(mut self, console: impl Into<Box<dyn Append>>) -> Self {
        self.console = console.into();
        self
    }

    /// Sets the trap for failures that cannot be returned.
    ///
    /// Default to [`DefaultTrap`].
    pub fn trap(mut self, trap: impl Into<Box<dyn Trap>>) -> Self {
        self.trap = trap.into();
        self
    }

    #[cfg(test)]
    pub(crate) fn clock(mut self, clock: Clock) -> Self {
        self.clock = clock;
        self
    }

    /// Creates the log file if absent and returns the logger.
    ///
    /// # Errors
    ///
    /// Returns an error if the log directory or file cannot be created.
    pub fn build(self) -> Result<EventLogger, Error> {
        let LoggerBuilder {
            base_dir,
            config,
            console,
            trap,
            clock,
        } = self;

        let store = LogStore::new(base_dir);
        store.ensure_exists()?;

        let logger = EventLogger {
            config,
            store: Arc::new(store),
            console,
            console_layout: ConsoleLayout::new(clock.clone()),
            record_layout: RecordLayout::new(clock),
            trap,
        };
        let setup = LogEvent::new("Setting up logger", Severity::Diag, "logger");
        logger.on_event(&setup);
        Ok(logger)
    }
}
