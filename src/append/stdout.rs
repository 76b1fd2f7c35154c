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

use std::io::Write;

use crate::Error;
use crate::append::Append;
use crate::layout::ConsoleLine;

/// An appender that prints colorized console lines to stdout.
///
/// # Examples
///
/// ```
/// use eventlog::append::Stdout;
///
/// let stdout_appender = Stdout::default().no_color();
/// ```
#[derive(Debug, Default)]
pub struct Stdout {
    no_color: bool,
}

impl Stdout {
    /// Print lines without terminal escape codes.
    pub fn no_color(mut self) -> Self {
        self.no_color = true;
        self
    }

    fn render(&self, line: &ConsoleLine) -> String {
        if self.no_color {
            line.text.clone()
        } else {
            line.color.paint(&line.text).to_string()
        }
    }

    fn write_line(&self, writer: &mut impl Write, line: &ConsoleLine) -> Result<(), Error> {
        let rendered = self.render(line);
        writeln!(writer, "{rendered}")
            .map_err(|err| Error::new("failed to write console line").with_source(err))
    }
}

impl Append for Stdout {
    fn append(&self, line: &ConsoleLine) -> Result<(), Error> {
        self.write_line(&mut std::io::stdout().lock(), line)
    }

    fn flush(&self) -> Result<(), Error> {
        std::io::stdout()
            .flush()
            .map_err(|err| Error::new("failed to flush console").with_source(err))
    }
}
