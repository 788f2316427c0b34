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

//! Staged, atomically published output.
//!
//! Artifacts are written into a staging directory created beside the
//! target, then the target is swapped in via rename. A half-written run is
//! never observable under the target name, and stale files from a prior
//! run never survive a re-run (clean-slate guarantee).

use crate::error::CliError;
use clap::ValueEnum;
use std::path::Path;
use vsynth_core::Table;

/// Artifact output format.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// Comma-separated values, one file per entity kind.
    Csv,
    /// Parquet, one file per entity kind.
    Parquet,
}

impl OutputFormat {
    /// File extension for this format.
    pub fn extension(self) -> &'static str {
        match self {
            OutputFormat::Csv => "csv",
            OutputFormat::Parquet => "parquet",
        }
    }
}

fn write_artifact(table: &Table, path: &Path, format: OutputFormat) -> Result<(), CliError> {
    match format {
        OutputFormat::Csv => vsynth_csv::write_table(table, path)?,
        OutputFormat::Parquet => vsynth_parquet::write_table(table, path)?,
    }
    Ok(())
}

fn parent_of(target: &Path) -> &Path {
    match target.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent,
        _ => Path::new("."),
    }
}

/// Write every table into a fresh copy of `target`, replacing whatever the
/// directory held before.
///
/// `on_artifact` is called with the artifact file name and row count after
/// each table is written.
///
/// # Errors
///
/// Any staging, writer, or publish failure; on failure the previous
/// `target` contents are left as they were unless publishing had already
/// begun.
pub fn publish_tables(
    tables: &[Table],
    target: &Path,
    format: OutputFormat,
    mut on_artifact: impl FnMut(&str, usize),
) -> Result<(), CliError> {
    let parent = parent_of(target);
    std::fs::create_dir_all(parent).map_err(|e| CliError::io_error(parent, e))?;

    let staging = tempfile::Builder::new()
        .prefix(".vsynth-staging-")
        .tempdir_in(parent)
        .map_err(|e| CliError::io_error(parent, e))?;

    for table in tables {
        let filename = format!("{}.{}", table.name(), format.extension());
        write_artifact(table, &staging.path().join(&filename), format)?;
        on_artifact(&filename, table.len());
    }

    // Clean slate: drop whatever a previous run left behind, then swap the
    // staging directory in with a rename.
    if target.exists() {
        std::fs::remove_dir_all(target).map_err(|e| CliError::io_error(target, e))?;
    }
    let staged = staging.into_path();
    std::fs::rename(&staged, target).map_err(|e| CliError::io_error(target, e))?;
    Ok(())
}

/// Write a single table to `target`, via a temporary file in the same
/// directory published with an atomic rename.
pub fn publish_file(table: &Table, target: &Path, format: OutputFormat) -> Result<(), CliError> {
    let parent = parent_of(target);
    std::fs::create_dir_all(parent).map_err(|e| CliError::io_error(parent, e))?;

    let staged = tempfile::Builder::new()
        .prefix(".vsynth-")
        .tempfile_in(parent)
        .map_err(|e| CliError::io_error(parent, e))?;
    write_artifact(table, staged.path(), format)?;
    staged
        .persist(target)
        .map_err(|e| CliError::io_error(target, e.error))?;
    Ok(())
}
