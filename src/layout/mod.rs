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

//! Layouts for rendering events.
//!
//! An accepted event is rendered twice: once as a [`ConsoleLine`] for the console appender, and
//! once as a [`PersistedRecord`] for the log file.

mod console;
mod record;

pub use self::console::ConsoleLayout;
pub use self::console::ConsoleLine;
pub use self::record::PersistedRecord;
pub use self::record::RecordLayout;

use crate::color::Color;
use crate::color::color_for;
use crate::event::LogEvent;

/// The color an event is displayed and stored with.
pub(crate) fn display_color(event: &LogEvent) -> Color {
    event
        .color_override
        .unwrap_or_else(|| color_for(&event.severity))
}
