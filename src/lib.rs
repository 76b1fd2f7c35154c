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

//! Eventlog is an in-process event logger. It receives events from a host application, drops the
//! ones below the configured threshold, shows the rest on the console with a color per severity,
//! and appends them to a single log file that can be fetched or cleared on demand.
//!
//! # Overview
//!
//! An [`EventLogger`] is the context object the host constructs once and then calls for every
//! event. It reads the host owned [`Config`] on each event, so threshold and persistence can be
//! changed at runtime through a [`SharedConfig`] handle. The log file is owned by a
//! [`LogStore`](store::LogStore), which the [`retrieval`] handlers read and truncate.
//!
//! # Examples
//!
//! ```
//! use eventlog::Config;
//! use eventlog::EventLogger;
//! use eventlog::LogLevel;
//!
//! let dir = tempfile::tempdir().unwrap();
//! let logger = EventLogger::builder(dir.path())
//!     .config(Config {
//!         log_level: LogLevel::Warn,
//!         save_to_file: true,
//!     })
//!     .build()
//!     .unwrap();
//!
//! logger.log("disk almost full", "warn", "volume-manager", None);
//! logger.log("mounted /data", "info", "volume-manager", None);
//!
//! let trap = eventlog::trap::DefaultTrap::default();
//! let response = eventlog::retrieval::get_log(logger.store(), &trap);
//! assert_eq!(response.body.lines().count(), 1);
//! ```

#![cfg_attr(docsrs, feature(doc_auto_cfg))]

pub mod append;
pub mod bridge;
pub mod color;
pub mod config;
pub mod event;
#[cfg(feature = "http")]
pub mod http;
pub mod layout;
pub mod retrieval;
pub mod severity;
pub mod store;
pub mod trap;

mod clock;
mod error;
mod logger;

pub use self::clock::TIMESTAMP_FORMAT;
pub use self::config::Config;
pub use self::config::SharedConfig;
pub use self::error::Error;
pub use self::event::Extras;
pub use self::event::LogEvent;
pub use self::logger::EventLogger;
pub use self::logger::LoggerBuilder;
pub use self::severity::LogLevel;
pub use self::severity::Severity;
pub use self::severity::should_log;
