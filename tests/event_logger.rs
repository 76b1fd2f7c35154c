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

use eventlog::Config;
use eventlog::EventLogger;
use eventlog::LogLevel;
use eventlog::append::Testing;
use eventlog::color::Color;
use eventlog::layout::PersistedRecord;
use tempfile::TempDir;

fn logger(temp_dir: &TempDir, log_level: LogLevel, save_to_file: bool) -> (EventLogger, Testing) {
    let console = Testing::default();
    let logger = EventLogger::builder(temp_dir.path())
        .config(Config {
            log_level,
            save_to_file,
        })
        .console(console.clone())
        .build()
        .unwrap();
    (logger, console)
}

fn read_log(logger: &EventLogger) -> String {
    String::from_utf8(logger.store().read_all().unwrap()).unwrap()
}

#[test]
fn test_disk_mounted() {
    let temp_dir = TempDir::new().expect("failed to create a temporary directory");
    let (logger, console) = logger(&temp_dir, LogLevel::Info, true);

    logger.log("disk mounted", "info", "volume-manager", None);

    let lines = console.lines();
    assert_eq!(lines.len(), 1);
    assert_eq!(lines[0].color, Color::Blue);
    assert!(lines[0].text.ends_with("] [volume-manager] disk mounted"));

    let log = read_log(&logger);
    assert_eq!(log.lines().count(), 1);
    let record: PersistedRecord = log.lines().next().unwrap().parse().unwrap();
    assert_eq!(record.color, Color::Blue);
    assert_eq!(record.message, "[volume-manager] disk mounted");
    assert!(!record.timestamp.is_empty());
}

#[test]
fn test_threshold_gates_persistence() {
    let temp_dir = TempDir::new().expect("failed to create a temporary directory");
    let (logger, console) = logger(&temp_dir, LogLevel::Warn, true);

    logger.log("cache warmed", "info", "cache", None);
    logger.log("cache corrupted", "error", "cache", None);

    assert_eq!(console.lines().len(), 1);
    let records = logger.store().records().unwrap();
    assert_eq!(records.len(), 1);
    assert_eq!(records[0].color, Color::Red);
    assert_eq!(records[0].message, "[cache] cache corrupted");
}

#[test]
fn test_console_without_file() {
    let temp_dir = TempDir::new().expect("failed to create a temporary directory");
    let (logger, console) = logger(&temp_dir, LogLevel::Info, false);

    logger.log("link down", "error", "Network", None);

    let lines = console.lines();
    assert_eq!(lines.len(), 1);
    assert!(lines[0].text.ends_with("] [network] link down"));
    assert_eq!(read_log(&logger), "");
}

#[test]
fn test_records_keep_submission_order() {
    let temp_dir = TempDir::new().expect("failed to create a temporary directory");
    let (logger, _) = logger(&temp_dir, LogLevel::Diag, true);

    let severities = [
        "error", "warn", "info", "debug", "diag", "success", "custom",
    ];
    for (i, severity) in severities.iter().enumerate() {
        logger.log(&format!("event {i}"), severity, "seq", None);
    }

    let records = logger.store().records().unwrap();
    // the diag threshold also lets the setup event through
    assert_eq!(records[0].message, "[logger] Setting up logger");
    let records = &records[1..];
    assert_eq!(records.len(), severities.len());
    for (i, record) in records.iter().enumerate() {
        assert_eq!(record.message, format!("[seq] event {i}"));
    }
    let colors = records.iter().map(|r| r.color).collect::<Vec<_>>();
    assert_eq!(
        colors,
        [
            Color::Red,
            Color::Orange,
            Color::Blue,
            Color::Cyan,
            Color::Gray,
            Color::Green,
            Color::White,
        ]
    );
}

#[test]
fn test_clear_then_read() {
    let temp_dir = TempDir::new().expect("failed to create a temporary directory");
    let (logger, _) = logger(&temp_dir, LogLevel::Info, true);

    logger.log("one", "info", "a", None);
    logger.log("two", "info", "a", None);
    logger.store().clear().unwrap();
    assert_eq!(read_log(&logger), "");
    logger.store().clear().unwrap();
    assert_eq!(read_log(&logger), "");

    logger.log("three", "info", "a", None);
    assert_eq!(logger.store().records().unwrap().len(), 1);
}

#[test]
fn test_restart_keeps_log() {
    let temp_dir = TempDir::new().expect("failed to create a temporary directory");
    let (original, _) = logger(&temp_dir, LogLevel::Info, true);
    original.log("persisted", "warn", "boot", None);
    let before = read_log(&original);
    drop(original);

    let (first, _) = logger(&temp_dir, LogLevel::Info, true);
    let (second, _) = logger(&temp_dir, LogLevel::Info, true);
    assert_eq!(read_log(&first), before);
    assert_eq!(read_log(&second), before);
}
