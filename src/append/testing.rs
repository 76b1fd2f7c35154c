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

use std::sync::Arc;
use std::sync::Mutex;
use std::sync::PoisonError;

use crate::Error;
use crate::append::Append;
use crate::layout::ConsoleLine;

/// An appender that records console lines in memory instead of printing them.
///
/// Clones share the same buffer, so keep one clone to inspect what the logger showed.
///
/// # Examples
///
/// ```
/// use eventlog::append::Testing;
///
/// let console = Testing::default();
/// assert!(console.lines().is_empty());
/// ```
#[derive(Debug, Default, Clone)]
pub struct Testing {
    lines: Arc<Mutex<Vec<ConsoleLine>>>,
}

impl Testing {
    /// Returns the lines appended so far, in order.
    pub fn lines(&self) -> Vec<ConsoleLine> {
        self.lines
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }
}

impl Append for Testing {
    fn append(&self, line: &ConsoleLine) -> Result<(), Error> {
        self.lines
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .push(line.clone());
        Ok(())
    }
}
