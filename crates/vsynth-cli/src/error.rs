// VSynth - Synthetic vSphere Inventory Generator
//
// Copyright (c) 2025 VSynth contributors.
//
// SPDX-License-Identifier: Apache-2.0
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License in the LICENSE file at the
// root of this repository or at: http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

//! Structured error types for the VSynth CLI.
//!
//! All command execution returns `Result<(), CliError>`; the binary prints
//! the error and exits nonzero. Configuration and generation errors pass
//! through unchanged so the offending key or reference stays visible.

use std::path::PathBuf;
use thiserror::Error;
use vsynth_config::ConfigError;
use vsynth_csv::CsvError;
use vsynth_gen::GenError;
use vsynth_parquet::ParquetError;

/// The main error type for CLI operations.
#[derive(Debug, Error)]
pub enum CliError {
    /// A fatal configuration error (missing section, invalid size key,
    /// non-normalized weights, duplicate network prefix, unreadable file).
    #[error(transparent)]
    Config(#[from] ConfigError),

    /// A fatal generation error (internal consistency violation).
    #[error(transparent)]
    Gen(#[from] GenError),

    /// CSV artifact writing failed.
    #[error(transparent)]
    Csv(#[from] CsvError),

    /// Parquet artifact writing failed.
    #[error(transparent)]
    Parquet(#[from] ParquetError),

    /// Output staging or publishing failed.
    #[error("I/O error for '{path}': {message}")]
    Io {
        /// The path that caused the error.
        path: PathBuf,
        /// The underlying error message.
        message: String,
    },
}

impl CliError {
    /// Create a [`CliError::Io`] with path context.
    pub fn io_error(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            message: source.to_string(),
        }
    }
}
