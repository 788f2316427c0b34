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

//! VSynth command line interface.

use clap::Parser;
use std::process::ExitCode;
use vsynth_cli::cli::Commands;

/// VSynth - synthetic vSphere inventory generator
///
/// Generates a referentially consistent fake vSphere topology from a YAML
/// configuration and exports one tabular artifact per entity kind.
///
/// # Examples
///
/// ```bash
/// # Validate a configuration and show derived counts
/// vsynth validate --config config.yaml
///
/// # Generate the full dataset as CSV
/// vsynth generate --config config.yaml --output vsphere-data
///
/// # Generate Parquet artifacts with a fixed seed
/// vsynth generate --config config.yaml --format parquet --seed 42
///
/// # Generate the standalone sample-sales dataset
/// vsynth sales --output sample_customer_sales.parquet
/// ```
#[derive(Parser)]
#[command(name = "vsynth")]
#[command(author, version, about = "VSynth - synthetic vSphere inventory generator", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    match cli.command.execute() {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {}", e);
            ExitCode::FAILURE
        }
    }
}
