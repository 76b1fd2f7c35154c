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

//! Severities of events and the threshold policy deciding which of them are accepted.

use std::fmt;

use serde::Deserialize;
use serde::Serialize;

/// The severity tag an event is emitted with.
///
/// Besides the five log severities, hosts emit a handful of status tags (`connect`, `success`,
/// `add`, `remove`) that only affect coloring. Anything else is kept verbatim in
/// [`Severity::Other`].
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Severity {
    Error,
    Warn,
    Info,
    Debug,
    Diag,
    Connect,
    Success,
    Add,
    Remove,
    Other(String),
}

impl Severity {
    /// Returns the tag as the host spells it.
    pub fn as_str(&self) -> &str {
        match self {
            Severity::Error => "error",
            Severity::Warn => "warn",
            Severity::Info => "info",
            Severity::Debug => "debug",
            Severity::Diag => "diag",
            Severity::Connect => "connect",
            Severity::Success => "success",
            Severity::Add => "add",
            Severity::Remove => "remove",
            Severity::Other(tag) => tag,
        }
    }
}

impl From<&str> for Severity {
    fn from(tag: &str) -> Self {
        match tag {
            "error" => Severity::Error,
            "warn" => Severity::Warn,
            "info" => Severity::Info,
            "debug" => Severity::Debug,
            "diag" => Severity::Diag,
            "connect" => Severity::Connect,
            "success" => Severity::Success,
            "add" => Severity::Add,
            "remove" => Severity::Remove,
            other => Severity::Other(other.to_string()),
        }
    }
}

impl From<String> for Severity {
    fn from(tag: String) -> Self {
        Severity::from(tag.as_str())
    }
}

impl From<log::Level> for Severity {
    fn from(level: log::Level) -> Self {
        match level {
            log::Level::Error => Severity::Error,
            log::Level::Warn => Severity::Warn,
            log::Level::Info => Severity::Info,
            log::Level::Debug => Severity::Debug,
            log::Level::Trace => Severity::Diag,
        }
    }
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// The configured threshold.
///
/// From most to least restrictive, the levels are:
///
/// - `Error`: accepts only `error`.
/// - `Warn`: accepts `error` and `warn`.
/// - `Info`: accepts everything except `debug` and `diag`.
/// - `Debug`: accepts everything except `diag`.
/// - `Diag`: accepts everything.
///
/// Parsing never fails: an unrecognized level becomes `Diag`.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase", from = "String")]
pub enum LogLevel {
    Error,
    Warn,
    #[default]
    Info,
    Debug,
    Diag,
}

impl LogLevel {
    /// Returns whether an event of `severity` passes this threshold.
    pub fn accepts(self, severity: &Severity) -> bool {
        should_log(self, severity)
    }

    /// Returns the level name as the host configures it.
    pub fn as_str(self) -> &'static str {
        match self {
            LogLevel::Error => "error",
            LogLevel::Warn => "warn",
            LogLevel::Info => "info",
            LogLevel::Debug => "debug",
            LogLevel::Diag => "diag",
        }
    }

    /// Returns the most verbose [`log::LevelFilter`] that this threshold lets through.
    pub fn to_level_filter(self) -> log::LevelFilter {
        match self {
            LogLevel::Error => log::LevelFilter::Error,
            LogLevel::Warn => log::LevelFilter::Warn,
            LogLevel::Info => log::LevelFilter::Info,
            LogLevel::Debug => log::LevelFilter::Debug,
            LogLevel::Diag => log::LevelFilter::Trace,
        }
    }
}

impl From<&str> for LogLevel {
    fn from(level: &str) -> Self {
        match level {
            "error" => LogLevel::Error,
            "warn" => LogLevel::Warn,
            "info" => LogLevel::Info,
            "debug" => LogLevel::Debug,
            _ => LogLevel::Diag,
        }
    }
}

impl From<String> for LogLevel {
    fn from(level: String) -> Self {
        LogLevel::from(level.as_str())
    }
}

impl fmt::Display for LogLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Decides whether an event of `severity` is recorded under `threshold`.
///
/// Status tags and unknown severities are not matched by any restrictive case: they pass
/// `Info`, `Debug` and `Diag`, and are rejected by `Error` and `Warn`.
pub fn should_log(threshold: LogLevel, severity: &Severity) -> bool {
    match threshold {
        LogLevel::Error => matches!(severity, Severity::Error),
        LogLevel::Warn => matches!(severity, Severity::Error | Severity::Warn),
        LogLevel::Info => !matches!(severity, Severity::Debug | Severity::Diag),
        LogLevel::Debug => !matches!(severity, Severity::Diag),
        LogLevel::Diag => true,
    }
}
