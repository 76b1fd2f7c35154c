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

//! Color utilities.
//!
//! [`Color`] is the abstract tag attached to every event. It is what the log file stores. The
//! translation into terminal escape codes lives in [`Color::paint`] and is only used by the
//! console appender.

use std::fmt;
use std::str::FromStr;

use colored::ColoredString;
use colored::Colorize;

use crate::Error;
use crate::severity::Severity;

/// Display color of an event.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Color {
    Red,
    Orange,
    Blue,
    Cyan,
    Gray,
    Green,
    White,
}

impl Color {
    /// Returns the color name used in the log file.
    pub fn name(self) -> &'static str {
        match self {
            Color::Red => "red",
            Color::Orange => "orange",
            Color::Blue => "blue",
            Color::Cyan => "cyan",
            Color::Gray => "gray",
            Color::Green => "green",
            Color::White => "white",
        }
    }

    /// Colorize the text for a terminal.
    pub fn paint(self, text: &str) -> ColoredString {
        text.color(colored::Color::from(self))
    }
}

impl From<Color> for colored::Color {
    fn from(color: Color) -> Self {
        match color {
            Color::Red => colored::Color::Red,
            Color::Orange => colored::Color::TrueColor {
                r: 255,
                g: 165,
                b: 0,
            },
            Color::Blue => colored::Color::Blue,
            Color::Cyan => colored::Color::Cyan,
            Color::Gray => colored::Color::BrightBlack,
            Color::Green => colored::Color::Green,
            Color::White => colored::Color::White,
        }
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Color {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "red" => Ok(Color::Red),
            "orange" => Ok(Color::Orange),
            "blue" => Ok(Color::Blue),
            "cyan" => Ok(Color::Cyan),
            "gray" | "grey" => Ok(Color::Gray),
            "green" => Ok(Color::Green),
            "white" => Ok(Color::White),
            _ => Err(Error::new("unknown color name").with_context("color", s)),
        }
    }
}

/// Maps a severity to its display color. Purely cosmetic.
pub fn color_for(severity: &Severity) -> Color {
    match severity {
        Severity::Error | Severity::Remove => Color::Red,
        Severity::Warn => Color::Orange,
        Severity::Info => Color::Blue,
        Severity::Debug => Color::Cyan,
        Severity::Diag => Color::Gray,
        Severity::Connect | Severity::Success | Severity::Add => Color::Green,
        Severity::Other(_) => Color::White,
    }
}
