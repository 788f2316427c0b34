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

//! Validate command - configuration validation and derived-count report.

use crate::cli::ValidateArgs;
use crate::error::CliError;
use colored::Colorize;

/// Validate a configuration file and report the derived per-region
/// host and cluster counts without generating anything.
///
/// # Errors
///
/// Any configuration error: missing section, invalid size key,
/// non-normalized weights, duplicate network prefix, or unreadable file.
pub fn run(args: ValidateArgs) -> Result<(), CliError> {
    match vsynth_config::load_path(&args.config) {
        Ok(resolved) => {
            println!("{} {}", "✓".green().bold(), args.config.display());
            println!(
                "  Size profile: {} ({} VMs targeted)",
                resolved.size, resolved.profile.total_vms
            );
            for region in &resolved.regions {
                println!(
                    "  {}: weight {:.2}, prefix {}, {} hosts across {} clusters{}",
                    region.name,
                    region.weight,
                    region.network_prefix,
                    region.calculated_hosts,
                    region.calculated_clusters,
                    if region.headquarters { " (HQ)" } else { "" },
                );
            }
            Ok(())
        }
        Err(e) => {
            println!("{} {}", "✗".red().bold(), args.config.display());
            Err(e.into())
        }
    }
}
