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

//! Request handlers for reading and clearing the log file.
//!
//! The handlers know nothing about the transport; [`crate::http`] wires them into a router.

use crate::store::LogStore;
use crate::trap::Trap;

/// The answer to a retrieval request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LogResponse {
    pub status: u16,
    pub body: String,
}

impl LogResponse {
    fn ok(body: String) -> Self {
        Self { status: 200, body }
    }

    fn internal_error(body: String) -> Self {
        Self { status: 500, body }
    }
}

/// `GET log`: the raw content of the log file, possibly empty.
pub fn get_log(store: &LogStore, trap: &dyn Trap) -> LogResponse {
    match store.read_all() {
        Ok(bytes) => LogResponse::ok(String::from_utf8_lossy(&bytes).into_owned()),
        Err(err) => {
            trap.trap(&err);
            LogResponse::internal_error(err.to_string())
        }
    }
}

/// `DELETE log`: truncates the log file and answers with an empty body.
pub fn delete_log(store: &LogStore, trap: &dyn Trap) -> LogResponse {
    match store.clear() {
        Ok(()) => LogResponse::ok(String::new()),
        Err(err) => {
            trap.trap(&err);
            LogResponse::internal_error(err.to_string())
        }
    }
}

#[cfg(test)]
mod tests {
    use tempfile::TempDir;

    use super::*;
    use crate::color::Color;
    use crate::layout::PersistedRecord;
    use crate::trap::CollectTrap;

    fn store(temp_dir: &TempDir) -> LogStore {
        let store = LogStore::new(temp_dir.path());
        store.ensure_exists().unwrap();
        store
    }

    #[test]
    fn test_get_then_delete() {
        let temp_dir = TempDir::new().expect("failed to create a temporary directory");
        let store = store(&temp_dir);
        let trap = CollectTrap::default();
        store
            .append(&PersistedRecord {
                color: Color::Red,
                timestamp: "1/1/2025, 1:00:00 AM".to_string(),
                message: "[ups] on battery".to_string(),
            })
            .unwrap();

        let response = get_log(&store, &trap);
        assert_eq!(response.status, 200);
        assert_eq!(response.body, "red;1/1/2025, 1:00:00 AM;[ups] on battery\n");

        assert_eq!(delete_log(&store, &trap), LogResponse::ok(String::new()));
        assert_eq!(delete_log(&store, &trap), LogResponse::ok(String::new()));
        assert_eq!(get_log(&store, &trap), LogResponse::ok(String::new()));
        assert!(trap.errors().is_empty());
    }

    #[test]
    fn test_get_missing_file_is_empty() {
        let temp_dir = TempDir::new().expect("failed to create a temporary directory");
        let store = LogStore::new(temp_dir.path());
        let trap = CollectTrap::default();

        assert_eq!(get_log(&store, &trap), LogResponse::ok(String::new()));
        assert!(store.path().is_file());
    }

    #[test]
    fn test_clear_failure_is_trapped() {
        let temp_dir = TempDir::new().expect("failed to create a temporary directory");
        // a directory in place of the log file cannot be truncated
        let store = LogStore::with_path(temp_dir.path());
        let trap = CollectTrap::default();

        let response = delete_log(&store, &trap);
        assert_eq!(response.status, 500);
        assert!(response.body.starts_with("failed to clear log file"));
        assert_eq!(trap.errors().len(), 1);
    }

    #[test]
    fn test_read_failure_is_trapped() {
        let temp_dir = TempDir::new().expect("failed to create a temporary directory");
        let store = LogStore::with_path(temp_dir.path());
        let trap = CollectTrap::default();

        let response = get_log(&store, &trap);
        assert_eq!(response.status, 500);
        assert!(response.body.starts_with("failed to read log file"));
        assert_eq!(trap.errors().len(), 1);
    }
}
