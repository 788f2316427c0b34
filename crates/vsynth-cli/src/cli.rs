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

//! CLI command definitions and argument parsing.

use crate::commands;
use crate::error::CliError;
use crate::output::OutputFormat;
use clap::{Args, Subcommand};
use std::path::PathBuf;
use vsynth_gen::DEFAULT_SALES_RECORDS;

/// Top-level CLI commands.
#[derive(Subcommand)]
pub enum Commands {
    /// Generate the full synthetic inventory dataset
    Generate(GenerateArgs),
    /// Validate a configuration and report derived per-region counts
    Validate(ValidateArgs),
    /// Generate the standalone sample-sales dataset
    Sales(SalesArgs),
}

impl Commands {
    /// Execute the selected command.
    ///
    /// # Errors
    ///
    /// Any configuration, generation, or export error; the binary reports
    /// it and exits nonzero.
    pub fn execute(self) -> Result<(), CliError> {
        match self {
            Commands::Generate(args) => commands::generate::run(args),
            Commands::Validate(args) => commands::validate::run(args),
            Commands::Sales(args) => commands::sales::run(args),
        }
    }
}

/// Arguments for `vsynth generate`.
#[derive(Args)]
pub struct GenerateArgs {
    /// Path to the YAML configuration
    #[arg(short, long)]
    pub config: PathBuf,

    /// Output directory; recreated from scratch on every run
    #[arg(short, long, default_value = "vsphere-data")]
    pub output: PathBuf,

    /// Artifact format
    #[arg(short, long, value_enum, default_value = "csv")]
    pub format: OutputFormat,

    /// Seed the random source for reproducible output
    #[arg(long)]
    pub seed: Option<u64>,
}

/// Arguments for `vsynth validate`.
#[derive(Args)]
pub struct ValidateArgs {
    /// Path to the YAML configuration
    #[arg(short, long)]
    pub config: PathBuf,
}

/// Arguments for `vsynth sales`.
#[derive(Args)]
pub struct SalesArgs {
    /// Output file path
    #[arg(short, long, default_value = "sample_customer_sales.parquet")]
    pub output: PathBuf,

    /// Number of sales records to generate
    #[arg(short, long, default_value_t = DEFAULT_SALES_RECORDS)]
    pub records: usize,

    /// Artifact format
    #[arg(short, long, value_enum, default_value = "parquet")]
    pub format: OutputFormat,

    /// Seed the random source for reproducible output
    #[arg(long)]
    pub seed: Option<u64>,
}
