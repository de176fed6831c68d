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

//! # Resource definitions for lexicons and color tables
//! This crate relies on files (user lexicons, color tables) that live on the local file system.
//! They are referenced through the `ResourceProvider` trait so that a configuration can be
//! built before the files are actually read.
//!
//! - LocalResource: points to a local file

mod local;

use crate::common::error::TaggerError;
pub use local::LocalResource;
use std::fmt::Debug;
use std::path::PathBuf;

pub trait ResourceProvider: Debug + Send + Sync {
    /// Provides the local path for a resource.
    ///
    /// # Returns
    ///
    /// * `PathBuf` pointing to the resource file
    ///
    /// # Example
    ///
    /// ```no_run
    /// use pos_colorizer::resources::{LocalResource, ResourceProvider};
    /// use std::path::PathBuf;
    /// let lexicon_resource = LocalResource {
    ///     local_path: PathBuf::from("path/to/lexicon.json"),
    /// };
    /// let lexicon_path = lexicon_resource.get_local_path();
    /// ```
    fn get_local_path(&self) -> Result<PathBuf, TaggerError>;
}
