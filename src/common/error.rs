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

use thiserror::Error;

#[derive(Error, Debug)]
pub enum TaggerError {
    #[error("IO error: {0}")]
    IOError(String),

    #[error("Invalid configuration error: {0}")]
    InvalidConfigurationError(String),

    #[error("Tagging model error: {0}")]
    ModelError(String),

    #[error("Value error: {0}")]
    ValueError(String),
}

impl From<std::io::Error> for TaggerError {
    fn from(error: std::io::Error) -> Self {
        TaggerError::IOError(error.to_string())
    }
}

impl From<serde_json::Error> for TaggerError {
    fn from(error: serde_json::Error) -> Self {
        TaggerError::InvalidConfigurationError(error.to_string())
    }
}

#[cfg(feature = "bert")]
impl From<rust_bert::RustBertError> for TaggerError {
    fn from(error: rust_bert::RustBertError) -> Self {
        TaggerError::ModelError(error.to_string())
    }
}
