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

//! YAML configuration loading and resolution.
//!
//! The configuration document supplies the scale profile, the region table
//! (weights, network prefixes, cluster-size distribution references), the
//! host hardware catalog, the VM OS/purpose catalogs, and the storage
//! catalog. Loading happens in three steps:
//!
//! 1. Parse the raw YAML and check that every required top-level section is
//!    present, so a missing section is reported by name rather than as a
//!    deserializer message.
//! 2. Deserialize into the typed [`Config`] model.
//! 3. [`Config::resolve`]: validate weight sums (1.0 ± 0.01), the selected
//!    size key, cluster-size distribution references, and network-prefix
//!    uniqueness, then derive the per-region host and cluster counts that
//!    drive all downstream generation.
//!
//! # Examples
//!
//! ```no_run
//! use vsynth_config::load_path;
//!
//! let resolved = load_path("config.yaml").unwrap();
//! for region in &resolved.regions {
//!     println!(
//!         "{}: {} hosts across {} clusters",
//!         region.name, region.calculated_hosts, region.calculated_clusters
//!     );
//! }
//! ```

mod error;
mod model;
mod resolve;

pub use error::ConfigError;
pub use model::{
    ClusterSizeBand, Config, DensityRange, HostModel, OsProfile, PurposeWeight, SizeProfile,
    StorageArray, StorageSection,
};
pub use resolve::{
    load_path, resolve_str, RegionPlan, ResolvedConfig, REQUIRED_SECTIONS, WEIGHT_TOLERANCE,
};
