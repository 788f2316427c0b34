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

//! Error types for CSV export.

use std::path::PathBuf;
use thiserror::Error;

/// Result alias for CSV export operations.
pub type Result<T> = std::result::Result<T, CsvError>;

/// CSV export error types.
#[derive(Debug, Error)]
pub enum CsvError {
    /// A row's field count did not match the table schema.
    ///
    /// Tables enforce arity at construction, so hitting this means the
    /// table was assembled outside [`vsynth_core::Table::push_row`].
    #[error("table '{table}': row has {actual} fields, header declares {expected}")]
    Shape {
        /// The offending table.
        table: String,
        /// Columns the header declares.
        expected: usize,
        /// Fields the row carried.
        actual: usize,
    },

    /// The underlying CSV writer failed.
    #[error("failed to write CSV for table '{table}': {message}")]
    Write {
        /// The table being written.
        table: String,
        /// The underlying error message.
        message: String,
    },

    /// The output file could not be created or written.
    #[error("I/O error for '{path}': {message}")]
    Io {
        /// The file path that caused the error.
        path: PathBuf,
        /// The underlying error message.
        message: String,
    },
}

impl CsvError {
    /// Create a [`CsvError::Write`] with table context.
    pub fn write(table: impl Into<String>, source: impl std::fmt::Display) -> Self {
        Self::Write {
            table: table.into(),
            message: source.to_string(),
        }
    }

    /// Create a [`CsvError::Io`] with file path context.
    pub fn io_error(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            message: source.to_string(),
        }
    }
}
