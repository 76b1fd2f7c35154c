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

//! Host owned settings of the logger.

use std::sync::Arc;

use arc_swap::ArcSwap;
use serde::Deserialize;
use serde::Serialize;

use crate::Error;
use crate::severity::LogLevel;

/// Settings the host supplies.
///
/// Field names follow the host's settings document:
///
/// ```json
/// { "loglevel": "warn", "saveToFile": true }
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Severity threshold.
    #[serde(rename = "loglevel", alias = "logLevel")]
    pub log_level: LogLevel,
    /// Whether accepted events are written to the log file. Console output does not depend on
    /// this flag.
    #[serde(rename = "saveToFile")]
    pub save_to_file: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            log_level: LogLevel::Info,
            save_to_file: true,
        }
    }
}

impl Config {
    /// Parses the host's JSON settings. Missing fields take their defaults.
    ///
    /// # Errors
    ///
    /// Returns an error if the input is not a JSON object of the expected shape.
    pub fn from_json(json: &str) -> Result<Self, Error> {
        serde_json::from_str(json)
            .map_err(|err| Error::new("failed to parse logger settings").with_source(err))
    }
}

/// A handle to the current [`Config`], shared between the host and the logger.
///
/// The logger loads the config once per event; the host may store a new one at any time.
/// Clones observe the same config.
#[derive(Debug, Clone, Default)]
pub struct SharedConfig(Arc<ArcSwap<Config>>);

impl SharedConfig {
    pub fn new(config: Config) -> Self {
        Self(Arc::new(ArcSwap::from_pointee(config)))
    }

    /// Returns a snapshot of the current config.
    pub fn load(&self) -> Arc<Config> {
        self.0.load_full()
    }

    /// Replaces the current config.
    pub fn store(&self, config: Config) {
        self.0.store(Arc::new(config));
    }
}

impl From<Config> for SharedConfig {
    fn from(config: Config) -> Self {
        SharedConfig::new(config)
    }
}
