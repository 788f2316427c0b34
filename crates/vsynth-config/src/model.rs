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

//! Typed model of the YAML configuration document.

use serde::Deserialize;
use std::collections::BTreeMap;
use std::num::NonZeroU32;

/// The full configuration document, as deserialized.
///
/// Field names mirror the YAML section names; see `config.example.yaml`
/// at the repository root for a complete document.
#[derive(Debug, Clone, Deserialize)]
pub struct Config {
    /// Target size selection and named size profiles.
    pub scale: ScaleSection,
    /// Deployment regions: weight share, network prefix, distribution ref.
    pub regions: BTreeMap<String, RegionSection>,
    /// Named cluster-size distributions.
    pub clusters: ClustersSection,
    /// Host hardware catalog and VM-density buckets.
    pub hosts: HostsSection,
    /// VM OS and purpose catalogs.
    pub virtual_machines: VirtualMachinesSection,
    /// Datastore size catalog and storage array catalog.
    pub storage: StorageSection,
}

/// The `scale` section.
#[derive(Debug, Clone, Deserialize)]
pub struct ScaleSection {
    /// The selected size profile key.
    pub size: String,
    /// Named size profiles.
    pub sizes: BTreeMap<String, SizeProfile>,
}

/// A named size profile.
///
/// `avg_vms_per_host` and `max_hosts_per_cluster` are divisors in the
/// derivation, so zero is rejected at deserialization time.
#[derive(Debug, Clone, Copy, Deserialize)]
pub struct SizeProfile {
    /// Target VM count across all regions.
    pub total_vms: u32,
    /// Average VM consolidation ratio per host.
    pub avg_vms_per_host: NonZeroU32,
    /// Upper bound on hosts per cluster.
    pub max_hosts_per_cluster: NonZeroU32,
}

/// One entry in the `regions` section.
#[derive(Debug, Clone, Deserialize)]
pub struct RegionSection {
    /// Share of the global VM target placed in this region.
    pub weight: f64,
    /// Two-octet network prefix, e.g. `"10.10"`. Must be unique per region.
    pub network_prefix: String,
    /// Headquarters regions get a second (DR) datacenter.
    #[serde(default)]
    pub headquarters: bool,
    /// Name of a distribution in `clusters.size_distributions`.
    pub cluster_sizes: String,
}

/// The `clusters` section.
#[derive(Debug, Clone, Deserialize)]
pub struct ClustersSection {
    /// Named cluster-size distributions referenced by regions.
    pub size_distributions: BTreeMap<String, Vec<ClusterSizeBand>>,
}

/// One weighted band of a cluster-size distribution.
#[derive(Debug, Clone, Deserialize)]
pub struct ClusterSizeBand {
    /// Category name (e.g. `small`), keyed into `hosts.vm_density`.
    pub category: String,
    /// Probability weight of this band.
    pub weight: f64,
    /// Minimum hosts for clusters in this band (inclusive).
    pub min_hosts: u32,
    /// Maximum hosts for clusters in this band (inclusive).
    pub max_hosts: u32,
}

/// The `hosts` section.
#[derive(Debug, Clone, Deserialize)]
pub struct HostsSection {
    /// Weighted hardware model catalog.
    pub models: Vec<HostModel>,
    /// Per-size-category VM capacity ranges.
    pub vm_density: BTreeMap<String, DensityRange>,
}

/// One entry of the host hardware catalog.
#[derive(Debug, Clone, Deserialize)]
pub struct HostModel {
    /// Model name, e.g. `PowerEdge R750`.
    pub name: String,
    /// Vendor name, e.g. `Dell`.
    pub vendor: String,
    /// Selection weight (need not be normalized).
    pub weight: f64,
    /// Physical core count.
    pub cpu_cores: u32,
    /// Installed memory in GB.
    pub memory_gb: u32,
    /// Physical NIC count.
    pub nic_count: u32,
}

/// An inclusive integer range, used for VM density per cluster size.
#[derive(Debug, Clone, Copy, Deserialize)]
pub struct DensityRange {
    /// Lower bound (inclusive).
    pub min: u32,
    /// Upper bound (inclusive).
    pub max: u32,
}

/// The `virtual_machines` section.
#[derive(Debug, Clone, Deserialize)]
pub struct VirtualMachinesSection {
    /// Weighted guest OS catalog.
    pub os_types: Vec<OsProfile>,
    /// Weighted workload purpose catalog.
    pub purposes: Vec<PurposeWeight>,
}

/// One guest OS profile with its typical sizing choices.
#[derive(Debug, Clone, Deserialize)]
pub struct OsProfile {
    /// Full guest OS name.
    pub name: String,
    /// Probability weight; the table must sum to 1.0.
    pub weight: f64,
    /// vCPU counts typical for this OS.
    pub cpu_choices: Vec<u32>,
    /// Memory sizes (GB) typical for this OS.
    pub memory_gb_choices: Vec<u32>,
}

/// One weighted workload purpose (WEB, APP, DB, ...).
#[derive(Debug, Clone, Deserialize)]
pub struct PurposeWeight {
    /// Purpose tag carried on generated VMs.
    pub name: String,
    /// Probability weight; the table must sum to 1.0.
    pub weight: f64,
}

/// The `storage` section.
#[derive(Debug, Clone, Deserialize)]
pub struct StorageSection {
    /// Datastore capacity catalog in GB.
    pub datastore_sizes_gb: Vec<u32>,
    /// Weighted storage array catalog.
    pub arrays: Vec<StorageArray>,
}

/// One entry of the storage array catalog.
#[derive(Debug, Clone, Deserialize)]
pub struct StorageArray {
    /// Array family name, e.g. `PowerStore`.
    pub name: String,
    /// Concrete model, e.g. `PowerStore T1000`.
    pub model: String,
    /// Selection weight (need not be normalized).
    pub weight: f64,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn size_profile_rejects_zero_divisors() {
        let err = serde_yaml::from_str::<SizeProfile>(
            "{ total_vms: 100, avg_vms_per_host: 0, max_hosts_per_cluster: 10 }",
        )
        .unwrap_err();
        assert!(err.to_string().contains("nonzero"));
    }

    #[test]
    fn region_headquarters_defaults_to_false() {
        let region: RegionSection = serde_yaml::from_str(
            "{ weight: 0.5, network_prefix: '10.30', cluster_sizes: default }",
        )
        .unwrap();
        assert!(!region.headquarters);
    }
}
