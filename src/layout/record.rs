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

use std::fmt;
use std::str::FromStr;

use crate::Error;
use crate::clock::Clock;
use crate::color::Color;
use crate::event::LogEvent;
use crate::layout::display_color;

/// The durable form of an accepted event: one line of the log file.
///
/// Line format, without escaping:
///
/// ```text
/// blue;3/7/2025, 4:05:09 PM;[volume-manager] disk mounted
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PersistedRecord {
    pub color: Color,
    pub timestamp: String,
    /// `[source] message`, source kept as emitted.
    pub message: String,
}

impl PersistedRecord {
    /// The record as written to the log file, newline included.
    pub fn to_line(&self) -> String {
        format!("{self}\n")
    }
}

impl fmt::Display for PersistedRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{};{};{}", self.color, self.timestamp, self.message)
    }
}

/// Parses one line of the log file.
///
/// Only the first two `;` separate fields, so a message may contain semicolons. A message that
/// contained a newline was split across lines when written and cannot be recovered.
impl FromStr for PersistedRecord {
    type Err = Error;

    fn from_str(line: &str) -> Result<Self, Self::Err> {
        let line = line.strip_suffix('\n').unwrap_or(line);
        let mut fields = line.splitn(3, ';');
        let (Some(color), Some(timestamp), Some(message)) =
            (fields.next(), fields.next(), fields.next())
        else {
            return Err(Error::new("malformed log record").with_context("line", line));
        };

        Ok(PersistedRecord {
            color: color.parse()?,
            timestamp: timestamp.to_string(),
            message: message.to_string(),
        })
    }
}

/// A layout that renders events into [`PersistedRecord`]s.
///
/// The timestamp is taken when the record is built, so it may differ slightly from the console
/// timestamp of the same event.
#[derive(Debug, Default)]
pub struct RecordLayout {
    clock: Clock,
}

impl RecordLayout {
    pub(crate) fn new(clock: Clock) -> Self {
        Self { clock }
    }

    pub fn format(&self, event: &LogEvent) -> PersistedRecord {
        PersistedRecord {
            color: display_color(event),
            timestamp: self.clock.timestamp(),
            message: format!("[{}] {}", event.source, event.message),
        }
    }
}

#[cfg(test)]
mod tests {
    use std::str::FromStr;

    use jiff::Zoned;

    use super::*;
    use crate::clock::ManualClock;

    fn layout() -> RecordLayout {
        let now = Zoned::from_str("2025-03-07T16:05:09+08[+08]").unwrap();
        RecordLayout::new(Clock::ManualClock(ManualClock::new(now)))
    }

    #[test]
    fn test_format_keeps_source_case() {
        let event = LogEvent::new("disk full", "warn", "Volume-Manager");
        let record = layout().format(&event);
        assert_eq!(
            record.to_line(),
            "orange;3/7/2025, 4:05:09 PM;[Volume-Manager] disk full\n"
        );
    }

    #[test]
    fn test_parse_line_with_semicolons() {
        let record: PersistedRecord = "red;3/7/2025, 4:05:09 PM;[db] a;b;c\n".parse().unwrap();
        assert_eq!(record.color, Color::Red);
        assert_eq!(record.timestamp, "3/7/2025, 4:05:09 PM");
        assert_eq!(record.message, "[db] a;b;c");
    }

    #[test]
    fn test_parse_malformed() {
        let err = "no separators here".parse::<PersistedRecord>().unwrap_err();
        assert_eq!(err.message(), "malformed log record");
        assert!("purple;now;[x] y".parse::<PersistedRecord>().is_err());
    }
}
