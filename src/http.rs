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

//! HTTP routes for the retrieval handlers.
//!
//! * `GET /log` answers with the raw log file.
//! * `DELETE /log` truncates it.
//!
//! # Examples
//!
//! ```no_run
//! # async fn run() -> Result<(), eventlog::Error> {
//! use std::net::SocketAddr;
//! use std::sync::Arc;
//!
//! use eventlog::EventLogger;
//!
//! let logger = Arc::new(EventLogger::builder("/var/lib/app").build()?);
//! let handle = eventlog::http::start(SocketAddr::from(([127, 0, 0, 1], 8080)), logger).await?;
//! println!("serving logs on {}", handle.addr());
//! # Ok(())
//! # }
//! ```

use std::net::SocketAddr;
use std::sync::Arc;

use axum::Router;
use axum::extract::State;
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::response::Response;
use axum::routing::get;
use tokio::sync::oneshot;

use crate::Error;
use crate::EventLogger;
use crate::retrieval;
use crate::retrieval::LogResponse;
use crate::trap::Trap;

impl IntoResponse for LogResponse {
    fn into_response(self) -> Response {
        let status = StatusCode::from_u16(self.status).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR);
        (status, self.body).into_response()
    }
}

/// Builds a router serving the log file of `logger`.
pub fn router(logger: Arc<EventLogger>) -> Router {
    Router::new()
        .route("/log", get(get_log).delete(delete_log))
        .with_state(logger)
}

async fn get_log(State(logger): State<Arc<EventLogger>>) -> LogResponse {
    run_blocking(logger, |logger| {
        retrieval::get_log(logger.store(), logger.trap())
    })
    .await
}

async fn delete_log(State(logger): State<Arc<EventLogger>>) -> LogResponse {
    run_blocking(logger, |logger| {
        retrieval::delete_log(logger.store(), logger.trap())
    })
    .await
}

// file I/O must not stall the async runtime
async fn run_blocking<F>(logger: Arc<EventLogger>, f: F) -> LogResponse
where
    F: FnOnce(&EventLogger) -> LogResponse + Send + 'static,
{
    match tokio::task::spawn_blocking(move || f(logger.as_ref())).await {
        Ok(response) => response,
        Err(err) => LogResponse {
            status: 500,
            body: format!("retrieval task failed: {err}"),
        },
    }
}

/// Handle to control a running server.
#[derive(Debug)]
pub struct ServerHandle {
    shutdown_tx: Option<oneshot::Sender<()>>,
    addr: SocketAddr,
}

impl ServerHandle {
    /// The address the server is listening on.
    pub fn addr(&self) -> SocketAddr {
        self.addr
    }

    /// Shut the server down gracefully.
    pub fn shutdown(mut self) {
        if let Some(tx) = self.shutdown_tx.take() {
            let _ = tx.send(());
        }
    }
}

/// Binds `addr` and serves [`router`] in a background task.
///
/// # Errors
///
/// Returns an error if the address cannot be bound.
pub async fn start(addr: SocketAddr, logger: Arc<EventLogger>) -> Result<ServerHandle, Error> {
    let app = router(logger.clone());
    let listener = tokio::net::TcpListener::bind(addr).await.map_err(|err| {
        Error::new("failed to bind log server")
            .with_context("addr", addr)
            .with_source(err)
    })?;
    let addr = listener.local_addr()?;

    let (shutdown_tx, shutdown_rx) = oneshot::channel::<()>();
    tokio::spawn(async move {
        let result = axum::serve(listener, app)
            .with_graceful_shutdown(async {
                shutdown_rx.await.ok();
            })
            .await;
        trap_server_error(logger.trap(), addr, result);
    });

    Ok(ServerHandle {
        shutdown_tx: Some(shutdown_tx),
        addr,
    })
}

fn trap_server_error(trap: &dyn Trap, addr: SocketAddr, result: std::io::Result<()>) {
    if let Err(err) = result {
        let err = Error::new("log server failed")
            .with_context("addr", addr)
            .with_source(err);
        trap.trap(&err);
    }
}
