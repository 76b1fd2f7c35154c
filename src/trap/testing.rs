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
use crate::trap::Trap;

/// A trap that keeps the rendered errors in memory, so that tests and embedders can inspect
/// what went wrong.
///
/// Clones share the same buffer.
///
/// # Examples
///
/// ```
/// use eventlog::trap::CollectTrap;
///
/// let trap = CollectTrap::default();
/// assert!(trap.errors().is_empty());
/// ```
#[derive(Debug, Default, Clone)]
pub struct CollectTrap {
    errors: Arc<Mutex<Vec<String>>>,
}

impl CollectTrap {
    /// Returns the errors trapped so far, in order.
    pub fn errors(&self) -> Vec<String> {
        self.errors
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }
}

impl Trap for CollectTrap {
    fn trap(&self, err: &Error) {
        self.errors
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .push(err.to_string());
    }
}
