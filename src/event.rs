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

use serde::Deserialize;
use serde::Serialize;

use crate::color::Color;
use crate::severity::Severity;

/// Optional extras a host may attach to an event.
#[derive(Debug, Default, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Extras {
    /// Name of a color that replaces the severity color, e.g. `"green"`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub color: Option<String>,
}

/// An event emitted by the host application.
///
/// Events are transient: they are filtered, rendered and (maybe) persisted right away.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LogEvent {
    pub message: String,
    pub severity: Severity,
    /// Name of the emitting component.
    pub source: String,
    pub color_override: Option<Color>,
}

impl LogEvent {
    pub fn new(
        message: impl Into<String>,
        severity: impl Into<Severity>,
        source: impl Into<String>,
    ) -> Self {
        Self {
            message: message.into(),
            severity: severity.into(),
            source: source.into(),
            color_override: None,
        }
    }

    /// Apply the host extras. Unknown color names are ignored.
    pub fn with_extras(mut self, extras: &Extras) -> Self {
        if let Some(color) = extras.color.as_deref() {
            self.color_override = color.parse().ok();
        }
        self
    }

    pub fn with_color(mut self, color: Color) -> Self {
        self.color_override = Some(color);
        self
    }
}
