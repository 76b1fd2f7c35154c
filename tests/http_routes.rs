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

use axum::body::Body;
use axum::http::Request;
use axum::http::StatusCode;
use eventlog::Config;
use eventlog::EventLogger;
use eventlog::append::Testing;
use tempfile::TempDir;
use tower::ServiceExt;

fn logger(temp_dir: &TempDir) -> Arc<EventLogger> {
    let logger = EventLogger::builder(temp_dir.path())
        .config(Config::default())
        .console(Testing::default())
        .build()
        .unwrap();
    Arc::new(logger)
}

async fn send(logger: Arc<EventLogger>, method: &str) -> (StatusCode, String) {
    let request = Request::builder()
        .method(method)
        .uri("/log")
        .body(Body::empty())
        .unwrap();
    let app = eventlog::http::router(logger);
    let response = app.oneshot(request).await.unwrap();
    let status = response.status();
    let body = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    (status, String::from_utf8(body.to_vec()).unwrap())
}

#[tokio::test]
async fn test_get_log() {
    let temp_dir = TempDir::new().expect("failed to create a temporary directory");
    let logger = logger(&temp_dir);

    let (status, body) = send(logger.clone(), "GET").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, "");

    logger.log("backup finished", "info", "Backup", None);
    let (status, body) = send(logger.clone(), "GET").await;
    assert_eq!(status, StatusCode::OK);
    assert!(body.starts_with("blue;"));
    assert!(body.ends_with(";[Backup] backup finished\n"));
}

#[tokio::test]
async fn test_delete_log() {
    let temp_dir = TempDir::new().expect("failed to create a temporary directory");
    let logger = logger(&temp_dir);
    logger.log("backup failed", "error", "backup", None);

    let (status, body) = send(logger.clone(), "DELETE").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, "");
    assert!(logger.store().read_all().unwrap().is_empty());

    let (status, _) = send(logger.clone(), "DELETE").await;
    assert_eq!(status, StatusCode::OK);
}

#[tokio::test]
async fn test_other_methods_rejected() {
    let temp_dir = TempDir::new().expect("failed to create a temporary directory");
    let (status, _) = send(logger(&temp_dir), "POST").await;
    assert_eq!(status, StatusCode::METHOD_NOT_ALLOWED);
}

#[tokio::test]
async fn test_start_and_shutdown() {
    let temp_dir = TempDir::new().expect("failed to create a temporary directory");
    let addr = std::net::SocketAddr::from(([127, 0, 0, 1], 0));
    let app_logger = logger(&temp_dir);
    let handle = eventlog::http::start(addr, app_logger).await.unwrap();
    assert_ne!(handle.addr().port(), 0);
    handle.shutdown();
}
