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

//! Sales command - standalone sample-sales dataset.

use super::rng_from_seed;
use crate::cli::SalesArgs;
use crate::error::CliError;
use crate::output::publish_file;
use colored::Colorize;
use vsynth_core::Table;
use vsynth_gen::{generate_sales, GenError};

/// Generate the sample-sales dataset and publish it as a single artifact.
///
/// # Errors
///
/// Any export error; the target file is only replaced once the artifact
/// is fully written.
pub fn run(args: SalesArgs) -> Result<(), CliError> {
    let mut rng = rng_from_seed(args.seed);
    let sales = generate_sales(&mut rng, args.records);
    let table = Table::from_slice(&sales).map_err(GenError::from)?;

    publish_file(&table, &args.output, args.format)?;
    println!(
        "{} {} ({} records)",
        "✓".green().bold(),
        args.output.display(),
        table.len()
    );
    Ok(())
}
