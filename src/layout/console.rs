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

use crate::clock::Clock;
use crate::color::Color;
use crate::event::LogEvent;
use crate::layout::display_color;

/// A line ready for the console, together with the color it should be shown in.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConsoleLine {
    pub color: Color,
    pub text: String,
}

impl fmt::Display for ConsoleLine {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.text)
    }
}

/// A layout that renders events for the console.
///
/// Output format:
///
/// ```text
/// [3/7/2025, 4:05:09 PM] [volume-manager] disk mounted
/// [3/7/2025, 4:05:10 PM] [scheduler] job 42 failed
/// ```
///
/// The source is lowercased. The color is the event's override if present, or the severity
/// color otherwise.
#[derive(Debug, Default)]
pub struct ConsoleLayout {
    clock: Clock,
}

impl ConsoleLayout {
    pub(crate) fn new(clock: Clock) -> Self {
        Self { clock }
    }

    pub fn format(&self, event: &LogEvent) -> ConsoleLine {
        let time = self.clock.timestamp();
        let source = event.source.to_lowercase();
        let message = &event.message;
        ConsoleLine {
            color: display_color(event),
            text: format!("[{time}] [{source}] {message}"),
        }
    }
}
