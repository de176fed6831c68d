// Copyright 2026 The pos-colorizer Authors
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//     http://www.apache.org/licenses/LICENSE-2.0
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

//! # HTTP service
//! Serves the interactive page and the tagging endpoint:
//!
//! | Route | Response |
//! |---|---|
//! | `GET /` | HTML page with the live colorizer and the legend |
//! | `POST /tag` | `[{"text": ..., "pos": ..., "color": ...}, ...]` for a `{"text": ...}` body |
//! | `GET /colors` | `{"colors": {...}, "fallback": "#bbbbbb"}` |
//! | `GET /healthz` | `ok` |
//!
//! ```no_run
//! # async fn run() -> anyhow::Result<()> {
//! use pos_colorizer::pipelines::pos_coloring::POSColoringPipeline;
//! use pos_colorizer::server::{serve, AppState, ServerConfig};
//! use std::sync::Arc;
//!
//! let pipeline = POSColoringPipeline::new(Default::default())?;
//! let state = Arc::new(AppState::new(pipeline)?);
//! serve(ServerConfig::default(), state).await?;
//! # Ok(())
//! # }
//! ```

mod error;
mod handlers;
mod page;

pub use error::ApiError;
pub use page::render_index;

use crate::common::error::TaggerError;
use crate::pipelines::common::MAX_TEXT_BYTES;
use crate::pipelines::pos_coloring::POSColoringPipeline;
use axum::extract::DefaultBodyLimit;
use axum::routing::{get, post};
use axum::Router;
use std::net::SocketAddr;
use std::sync::Arc;
use tokio::net::TcpListener;
use tokio::signal;
use tower_http::trace::{DefaultMakeSpan, DefaultOnResponse, TraceLayer};
use tracing::{info, Level};

/// Request bodies above this size are rejected with `413`
pub const DEFAULT_MAX_BODY_BYTES: usize = 2 * 1024 * 1024;

pub type SharedState = Arc<AppState>;

/// # Service state, shared read-only by all requests
pub struct AppState {
    pub pipeline: POSColoringPipeline,
    index_page: String,
}

impl AppState {
    /// Wraps a pipeline and renders the index page for its color table
    pub fn new(pipeline: POSColoringPipeline) -> Result<AppState, TaggerError> {
        let index_page = render_index(pipeline.color_map())?;
        Ok(AppState {
            pipeline,
            index_page,
        })
    }
}

#[derive(Debug, Clone)]
/// # Listener settings
pub struct ServerConfig {
    pub addr: SocketAddr,
    pub max_body_bytes: usize,
}

impl ServerConfig {
    /// Validated listener settings
    ///
    /// # Arguments
    ///
    /// * `addr` - address to bind
    /// * `max_body_bytes` - request body size limit, at most `MAX_TEXT_BYTES`
    pub fn new(addr: SocketAddr, max_body_bytes: usize) -> Result<ServerConfig, TaggerError> {
        if max_body_bytes > MAX_TEXT_BYTES {
            return Err(TaggerError::InvalidConfigurationError(format!(
                "max body size {max_body_bytes} exceeds the {MAX_TEXT_BYTES} bytes text limit"
            )));
        }
        Ok(ServerConfig {
            addr,
            max_body_bytes,
        })
    }
}

impl Default for ServerConfig {
    fn default() -> Self {
        ServerConfig {
            addr: SocketAddr::from(([127, 0, 0, 1], 5050)),
            max_body_bytes: DEFAULT_MAX_BODY_BYTES,
        }
    }
}

/// Builds the service routes on top of a shared state
///
/// # Arguments
///
/// * `state` - tagging pipeline and rendered page
/// * `max_body_bytes` - request body size limit
pub fn build_router(state: SharedState, max_body_bytes: usize) -> Router {
    Router::new()
        .route("/", get(handlers::index))
        .route("/tag", post(handlers::tag))
        .route("/colors", get(handlers::colors))
        .route("/healthz", get(handlers::health))
        .with_state(state)
        .layer(DefaultBodyLimit::max(max_body_bytes))
        .layer(
            TraceLayer::new_for_http()
                .make_span_with(DefaultMakeSpan::new().level(Level::INFO))
                .on_response(DefaultOnResponse::new().level(Level::INFO)),
        )
}

/// Binds the listener and serves until Ctrl-C or SIGTERM
pub async fn serve(config: ServerConfig, state: SharedState) -> std::io::Result<()> {
    let router = build_router(state, config.max_body_bytes);
    let listener = TcpListener::bind(config.addr).await?;
    info!(
        addr = %listener.local_addr()?,
        max_body_bytes = config.max_body_bytes,
        "listening"
    );
    axum::serve(listener, router)
        .with_graceful_shutdown(shutdown_signal())
        .await?;
    info!("server stopped");
    Ok(())
}

async fn shutdown_signal() {
    let ctrl_c = async {
        let _ = signal::ctrl_c().await;
    };
    #[cfg(unix)]
    let terminate = async {
        use tokio::signal::unix::{signal, SignalKind};
        if let Ok(mut stream) = signal(SignalKind::terminate()) {
            let _ = stream.recv().await;
        }
    };
    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }
    info!("shutdown signal received");
}
