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

use crate::common::error::TaggerError;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde_json::json;
use thiserror::Error;
use tracing::{error, warn};

/// # Request-level failure
/// Rendered as `{"error": "<message>"}` with the matching status code.
#[derive(Error, Debug)]
pub enum ApiError {
    /// Malformed request (400)
    #[error("{0}")]
    BadRequest(String),

    /// The tagger failed or panicked while processing the request (500)
    #[error("{0}")]
    ModelFault(String),
}

impl ApiError {
    pub fn status(&self) -> StatusCode {
        match self {
            ApiError::BadRequest(_) => StatusCode::BAD_REQUEST,
            ApiError::ModelFault(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl From<TaggerError> for ApiError {
    fn from(error: TaggerError) -> Self {
        match error {
            TaggerError::ValueError(_) => ApiError::BadRequest(error.to_string()),
            _ => ApiError::ModelFault(error.to_string()),
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        match &self {
            ApiError::BadRequest(message) => warn!(%message, "rejected request"),
            ApiError::ModelFault(message) => error!(%message, "tagging failed"),
        }
        let payload = json!({ "error": self.to_string() });
        (self.status(), Json(payload)).into_response()
    }
}
