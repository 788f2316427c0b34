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

//! Generate command - full topology generation and export.

use super::rng_from_seed;
use crate::cli::GenerateArgs;
use crate::error::CliError;
use crate::output::publish_tables;
use colored::Colorize;
use vsynth_gen::TopologyGenerator;

/// Generate the full synthetic inventory and publish one artifact per
/// entity kind into a freshly recreated output directory.
///
/// # Errors
///
/// Any configuration, generation, or export error. Nothing is published
/// unless every artifact was staged successfully.
pub fn run(args: GenerateArgs) -> Result<(), CliError> {
    let config = vsynth_config::load_path(&args.config)?;
    println!(
        "{} {} (size profile: {})",
        "Loaded".green().bold(),
        args.config.display(),
        config.size
    );
    for region in &config.regions {
        println!(
            "  {}: {} hosts across {} clusters",
            region.name, region.calculated_hosts, region.calculated_clusters
        );
    }

    let mut rng = rng_from_seed(args.seed);
    let ctx = TopologyGenerator::new(&config, &mut rng)
        .generate_with(|phase| println!("  {} {}", "▸".cyan(), phase))?;
    let tables = ctx.tables()?;

    println!("{} {}", "Exporting to".green().bold(), args.output.display());
    publish_tables(&tables, &args.output, args.format, |artifact, rows| {
        println!("  {} {} ({} rows)", "✓".green().bold(), artifact, rows);
    })?;

    println!(
        "{} {} entities across {} artifacts",
        "Done:".green().bold(),
        ctx.total_entities(),
        tables.len()
    );
    Ok(())
}
