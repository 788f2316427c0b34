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

//! Configuration validation and derivation.

use crate::error::ConfigError;
use crate::model::{
    ClusterSizeBand, Config, DensityRange, HostModel, OsProfile, PurposeWeight, SizeProfile,
    StorageSection,
};
use std::collections::{BTreeMap, HashMap};
use std::path::Path;

/// Top-level sections that must be present in every configuration.
pub const REQUIRED_SECTIONS: &[&str] = &[
    "scale",
    "regions",
    "clusters",
    "hosts",
    "virtual_machines",
    "storage",
];

/// Allowed deviation of a weighted table's sum from 1.0.
pub const WEIGHT_TOLERANCE: f64 = 0.01;

/// A region with its validated inputs and derived generation counts.
#[derive(Debug, Clone)]
pub struct RegionPlan {
    /// Region name, e.g. `HQ-A`.
    pub name: String,
    /// Share of the global VM target.
    pub weight: f64,
    /// Two-octet network prefix, unique across regions.
    pub network_prefix: String,
    /// Headquarters regions get PROD + DR datacenters.
    pub headquarters: bool,
    /// The resolved cluster-size distribution.
    pub cluster_sizes: Vec<ClusterSizeBand>,
    /// `ceil(total_vms / avg_vms_per_host * weight)`.
    pub calculated_hosts: u32,
    /// `ceil(calculated_hosts / max_hosts_per_cluster)`.
    pub calculated_clusters: u32,
}

/// A fully validated configuration with derived per-region counts.
///
/// This is the single source of truth for "how many of X to generate";
/// no generator hardcodes a count.
#[derive(Debug, Clone)]
pub struct ResolvedConfig {
    /// The selected size profile key.
    pub size: String,
    /// The selected size profile.
    pub profile: SizeProfile,
    /// Regions in document (sorted-key) order.
    pub regions: Vec<RegionPlan>,
    /// Weighted host hardware catalog.
    pub host_models: Vec<HostModel>,
    /// VM capacity ranges keyed by cluster size category.
    pub vm_density: BTreeMap<String, DensityRange>,
    /// Weighted guest OS catalog.
    pub os_types: Vec<OsProfile>,
    /// Weighted workload purpose catalog.
    pub purposes: Vec<PurposeWeight>,
    /// Datastore size and storage array catalogs.
    pub storage: StorageSection,
}

/// Load and resolve a configuration file.
///
/// # Errors
///
/// Returns [`ConfigError::Io`] if the file cannot be read, and any
/// validation error [`resolve_str`] produces.
pub fn load_path(path: impl AsRef<Path>) -> Result<ResolvedConfig, ConfigError> {
    let path = path.as_ref();
    let content =
        std::fs::read_to_string(path).map_err(|e| ConfigError::io_error(path, e))?;
    resolve_str(&content)
}

/// Parse and resolve a configuration document.
///
/// Section presence is checked against the raw document first, so an
/// absent section is reported as [`ConfigError::MissingSection`] naming
/// the section rather than as a deserializer message.
///
/// # Errors
///
/// Any of the configuration-time errors: missing section, invalid size
/// key, non-normalized weights, duplicate network prefix, or a document
/// that fails typed deserialization.
pub fn resolve_str(yaml: &str) -> Result<ResolvedConfig, ConfigError> {
    let raw: serde_yaml::Value = serde_yaml::from_str(yaml)?;

    let mapping = raw
        .as_mapping()
        .ok_or_else(|| ConfigError::Parse("document root is not a mapping".to_string()))?;
    for section in REQUIRED_SECTIONS {
        if !mapping.contains_key(&serde_yaml::Value::from(*section)) {
            return Err(ConfigError::missing_section(*section));
        }
    }

    let config: Config = serde_yaml::from_value(raw)?;
    config.resolve()
}

impl Config {
    /// Validate the document and derive per-region generation counts.
    ///
    /// # Errors
    ///
    /// - [`ConfigError::InvalidSize`] if `scale.size` names no profile, a
    ///   region references an undefined cluster-size distribution, or a
    ///   size category has no `hosts.vm_density` bucket
    /// - [`ConfigError::InvalidWeights`] if any of the region, purpose,
    ///   OS, or cluster-size tables does not sum to 1.0 within
    ///   [`WEIGHT_TOLERANCE`]
    /// - [`ConfigError::DuplicateNetworkPrefix`] if two regions share a
    ///   network prefix
    pub fn resolve(self) -> Result<ResolvedConfig, ConfigError> {
        let profile = *self
            .scale
            .sizes
            .get(&self.scale.size)
            .ok_or_else(|| {
                ConfigError::invalid_size(self.scale.size.as_str(), self.scale.sizes.keys())
            })?;

        check_weights("regions", self.regions.values().map(|r| r.weight))?;
        check_weights(
            "virtual_machines.purposes",
            self.virtual_machines.purposes.iter().map(|p| p.weight),
        )?;
        check_weights(
            "virtual_machines.os_types",
            self.virtual_machines.os_types.iter().map(|o| o.weight),
        )?;
        for (name, bands) in &self.clusters.size_distributions {
            check_weights(
                format!("clusters.size_distributions.{}", name),
                bands.iter().map(|b| b.weight),
            )?;
        }

        // Every size category named by a distribution must have a density
        // bucket, otherwise host generation would dead-end mid-run.
        for bands in self.clusters.size_distributions.values() {
            for band in bands {
                if !self.hosts.vm_density.contains_key(&band.category) {
                    return Err(ConfigError::invalid_size(
                        band.category.as_str(),
                        self.hosts.vm_density.keys(),
                    ));
                }
            }
        }

        let mut seen_prefixes: HashMap<&str, &str> = HashMap::new();
        for (name, region) in &self.regions {
            if let Some(first) = seen_prefixes.insert(&region.network_prefix, name) {
                return Err(ConfigError::DuplicateNetworkPrefix {
                    prefix: region.network_prefix.clone(),
                    first: first.to_string(),
                    second: name.clone(),
                });
            }
        }

        let mut regions = Vec::with_capacity(self.regions.len());
        for (name, region) in &self.regions {
            let cluster_sizes = self
                .clusters
                .size_distributions
                .get(&region.cluster_sizes)
                .ok_or_else(|| {
                    ConfigError::invalid_size(
                        region.cluster_sizes.as_str(),
                        self.clusters.size_distributions.keys(),
                    )
                })?
                .clone();

            let calculated_hosts = derived_hosts(&profile, region.weight);
            let max_per_cluster = profile.max_hosts_per_cluster.get();
            let calculated_clusters =
                (calculated_hosts + max_per_cluster - 1) / max_per_cluster;

            regions.push(RegionPlan {
                name: name.clone(),
                weight: region.weight,
                network_prefix: region.network_prefix.clone(),
                headquarters: region.headquarters,
                cluster_sizes,
                calculated_hosts,
                calculated_clusters,
            });
        }

        Ok(ResolvedConfig {
            size: self.scale.size,
            profile,
            regions,
            host_models: self.hosts.models,
            vm_density: self.hosts.vm_density,
            os_types: self.virtual_machines.os_types,
            purposes: self.virtual_machines.purposes,
            storage: self.storage,
        })
    }
}

/// `ceil(total_vms / avg_vms_per_host * weight)`.
fn derived_hosts(profile: &SizeProfile, weight: f64) -> u32 {
    let hosts =
        f64::from(profile.total_vms) / f64::from(profile.avg_vms_per_host.get()) * weight;
    hosts.ceil() as u32
}

fn check_weights(
    table: impl Into<String>,
    weights: impl Iterator<Item = f64>,
) -> Result<(), ConfigError> {
    let sum: f64 = weights.sum();
    if (sum - 1.0).abs() > WEIGHT_TOLERANCE {
        return Err(ConfigError::invalid_weights(table, sum));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn fixture() -> String {
        r#"
scale:
  size: small
  sizes:
    small:
      total_vms: 1000
      avg_vms_per_host: 20
      max_hosts_per_cluster: 10

regions:
  HQ-A:
    weight: 1.0
    network_prefix: "10.10"
    headquarters: true
    cluster_sizes: default

clusters:
  size_distributions:
    default:
      - { category: small, weight: 0.5, min_hosts: 2, max_hosts: 4 }
      - { category: large, weight: 0.5, min_hosts: 4, max_hosts: 8 }

hosts:
  models:
    - { name: PowerEdge R750, vendor: Dell, weight: 0.7, cpu_cores: 48, memory_gb: 384, nic_count: 8 }
    - { name: ProLiant DL380 Gen10, vendor: HPE, weight: 0.3, cpu_cores: 40, memory_gb: 256, nic_count: 6 }
  vm_density:
    small: { min: 4, max: 8 }
    large: { min: 8, max: 16 }

virtual_machines:
  os_types:
    - { name: Windows Server 2019 Standard, weight: 0.6, cpu_choices: [2, 4, 8], memory_gb_choices: [8, 16, 32] }
    - { name: Ubuntu 20.04 LTS, weight: 0.4, cpu_choices: [2, 4], memory_gb_choices: [4, 8, 16] }
  purposes:
    - { name: WEB, weight: 0.5 }
    - { name: DB, weight: 0.5 }

storage:
  datastore_sizes_gb: [2048, 4096]
  arrays:
    - { name: PowerStore, model: PowerStore T1000, weight: 0.6 }
    - { name: Unity XT, model: Unity XT 880, weight: 0.4 }
"#
        .to_string()
    }

    #[test]
    fn resolves_fixture() {
        let resolved = resolve_str(&fixture()).unwrap();
        assert_eq!(resolved.size, "small");
        assert_eq!(resolved.regions.len(), 1);
        assert_eq!(resolved.host_models.len(), 2);
        assert_eq!(resolved.os_types.len(), 2);
    }

    #[test]
    fn derives_hosts_and_clusters() {
        // 1000 VMs / 20 per host * 1.0 = 50 hosts; ceil(50 / 10) = 5.
        let resolved = resolve_str(&fixture()).unwrap();
        let region = &resolved.regions[0];
        assert_eq!(region.calculated_hosts, 50);
        assert_eq!(region.calculated_clusters, 5);
    }

    #[test]
    fn derivation_scales_with_weight() {
        let yaml = fixture().replace("weight: 1.0", "weight: 0.99");
        // Weight 0.99 stays within tolerance; 49.5 hosts rounds up to 50.
        let resolved = resolve_str(&yaml).unwrap();
        assert_eq!(resolved.regions[0].calculated_hosts, 50);
    }

    #[test]
    fn missing_section_is_named() {
        let yaml = fixture().replace("storage:", "storage_x:");
        let err = resolve_str(&yaml).unwrap_err();
        match err {
            ConfigError::MissingSection { section } => assert_eq!(section, "storage"),
            other => panic!("expected MissingSection, got {other}"),
        }
    }

    #[test]
    fn unknown_size_lists_valid_options() {
        let yaml = fixture().replace("size: small", "size: enormous");
        let err = resolve_str(&yaml).unwrap_err();
        match err {
            ConfigError::InvalidSize { size, valid } => {
                assert_eq!(size, "enormous");
                assert!(valid.contains("small"));
            }
            other => panic!("expected InvalidSize, got {other}"),
        }
    }

    #[test]
    fn region_weights_summing_low_are_rejected() {
        let yaml = fixture().replace("weight: 1.0", "weight: 0.9");
        let err = resolve_str(&yaml).unwrap_err();
        match err {
            ConfigError::InvalidWeights { table, sum } => {
                assert_eq!(table, "regions");
                assert!((sum - 0.9).abs() < 1e-9);
            }
            other => panic!("expected InvalidWeights, got {other}"),
        }
    }

    #[test]
    fn os_weights_are_checked() {
        let yaml = fixture().replace("weight: 0.6, cpu_choices", "weight: 0.2, cpu_choices");
        let err = resolve_str(&yaml).unwrap_err();
        assert!(matches!(
            err,
            ConfigError::InvalidWeights { ref table, .. } if table == "virtual_machines.os_types"
        ));
    }

    #[test]
    fn distribution_weights_are_checked() {
        let yaml = fixture().replace(
            "{ category: small, weight: 0.5, min_hosts: 2, max_hosts: 4 }",
            "{ category: small, weight: 0.1, min_hosts: 2, max_hosts: 4 }",
        );
        let err = resolve_str(&yaml).unwrap_err();
        assert!(matches!(
            err,
            ConfigError::InvalidWeights { ref table, .. }
                if table == "clusters.size_distributions.default"
        ));
    }

    #[test]
    fn duplicate_network_prefix_is_rejected() {
        let yaml = fixture().replace(
            "cluster_sizes: default\n",
            "cluster_sizes: default\n  NA:\n    weight: 0.0\n    network_prefix: \"10.10\"\n    cluster_sizes: default\n",
        );
        let err = resolve_str(&yaml).unwrap_err();
        assert!(matches!(err, ConfigError::DuplicateNetworkPrefix { .. }));
    }

    #[test]
    fn dangling_distribution_reference_is_rejected() {
        let yaml = fixture().replace("cluster_sizes: default", "cluster_sizes: nope");
        let err = resolve_str(&yaml).unwrap_err();
        assert!(matches!(
            err,
            ConfigError::InvalidSize { ref size, .. } if size == "nope"
        ));
    }

    #[test]
    fn category_without_density_bucket_is_rejected() {
        let yaml = fixture().replace("large: { min: 8, max: 16 }", "");
        let err = resolve_str(&yaml).unwrap_err();
        assert!(matches!(
            err,
            ConfigError::InvalidSize { ref size, .. } if size == "large"
        ));
    }

    #[test]
    fn weights_at_exact_tolerance_boundary_pass() {
        let yaml = fixture().replace("- { name: WEB, weight: 0.5 }", "- { name: WEB, weight: 0.505 }");
        assert!(resolve_str(&yaml).is_ok());
    }
}
