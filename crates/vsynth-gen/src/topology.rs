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

//! The topology generator: dependency-ordered entity creation.
//!
//! Entities are created strictly top-down (vCenters, datacenters,
//! clusters, hosts with NICs, VMs with guest details, datastores with
//! datastore clusters, switches, networks with port groups, tags), so
//! every child's parent reference points at an already-issued identifier. Aggregate
//! fields on clusters are populated by two post-passes once the dependent
//! collections are complete; the exporter never sees partial roll-ups.
//!
//! A parent lookup that misses indicates a violated invariant in an
//! earlier phase and aborts the run (no orphaned records).
//!
//! # Examples
//!
//! ```no_run
//! use rand::rngs::StdRng;
//! use rand::SeedableRng;
//! use vsynth_config::load_path;
//! use vsynth_gen::TopologyGenerator;
//!
//! let config = load_path("config.yaml").unwrap();
//! let mut rng = StdRng::from_entropy();
//! let ctx = TopologyGenerator::new(&config, &mut rng).generate().unwrap();
//! println!("{} entities", ctx.total_entities());
//! ```

use crate::context::GenerationContext;
use crate::entities::{
    Cluster, Datacenter, Datastore, DatastoreCluster, Host, HostNic, Network, NsxTag, PortGroup,
    PowerState, VCenter, VirtualSwitch, Vm, VmGuestDetail,
};
use crate::error::GenError;
use crate::sampler::{choose, float_range, int_range, mac_address, pick, random_date, round2};
use chrono::{NaiveDate, Utc};
use rand::Rng;
use std::collections::HashMap;
use vsynth_config::{RegionPlan, ResolvedConfig};
use vsynth_core::{MorefAllocator, MorefKind};

/// vCenter version stamped on every generated vCenter.
pub const VCENTER_VERSION: &str = "7.0.3g";
/// vCenter build stamped on every generated vCenter.
pub const VCENTER_BUILD: &str = "20150588";

/// Network purposes; crossed with [`NETWORK_SEGMENTS`] per region.
pub const NETWORK_PURPOSES: [&str; 4] = ["PROD", "DEV", "DMZ", "MGMT"];
/// Network segments; crossed with [`NETWORK_PURPOSES`] per region.
pub const NETWORK_SEGMENTS: [&str; 3] = ["WEB", "APP", "DB"];
/// NSX tag categories; each tags a 25% VM sample.
pub const TAG_CATEGORIES: [&str; 4] = ["Environment", "Application", "Security", "Compliance"];

/// Maximum VMs listed on a network's `associated_vms`.
pub const ASSOCIATED_VM_CAP: usize = 5;

/// Builds a full topology from a resolved configuration and a random
/// source.
///
/// The generator is single-threaded and synchronous; one call to
/// [`generate`](Self::generate) produces one immutable
/// [`GenerationContext`].
pub struct TopologyGenerator<'a, R: Rng> {
    config: &'a ResolvedConfig,
    rng: &'a mut R,
    today: NaiveDate,
    created_from: NaiveDate,
}

impl<'a, R: Rng> TopologyGenerator<'a, R> {
    /// Create a generator over a resolved configuration.
    pub fn new(config: &'a ResolvedConfig, rng: &'a mut R) -> Self {
        Self {
            config,
            rng,
            today: Utc::now().date_naive(),
            created_from: NaiveDate::from_ymd_opt(2019, 1, 1).expect("2019-01-01 is a valid date"),
        }
    }

    /// Run all phases and return the populated context.
    ///
    /// # Errors
    ///
    /// [`GenError::InternalConsistency`] if a parent lookup misses: a
    /// violated invariant in an earlier phase, never a recoverable state.
    pub fn generate(self) -> Result<GenerationContext, GenError> {
        self.generate_with(|_| {})
    }

    /// Run all phases, reporting each phase name to `progress` before it
    /// starts.
    ///
    /// # Errors
    ///
    /// Same as [`generate`](Self::generate).
    pub fn generate_with(
        mut self,
        mut progress: impl FnMut(&str),
    ) -> Result<GenerationContext, GenError> {
        let mut ctx = GenerationContext::new();

        progress("vCenters");
        self.generate_vcenters(&mut ctx);
        progress("Datacenters");
        self.generate_datacenters(&mut ctx)?;
        progress("Clusters");
        self.generate_clusters(&mut ctx)?;
        progress("ESXi hosts and NICs");
        self.generate_hosts(&mut ctx)?;
        progress("Cluster capacity roll-up");
        roll_up_cluster_capacity(&mut ctx);
        progress("Virtual machines");
        self.generate_vms(&mut ctx)?;
        progress("Cluster VM roll-up");
        roll_up_cluster_vms(&mut ctx);
        progress("Datastores and datastore clusters");
        self.generate_datastores(&mut ctx)?;
        progress("Virtual switches");
        self.generate_virtual_switches(&mut ctx);
        progress("Networks and port groups");
        self.generate_networks(&mut ctx)?;
        progress("NSX tags");
        self.generate_nsx_tags(&mut ctx);

        Ok(ctx)
    }

    fn region(&self, name: &str) -> Result<&'a RegionPlan, GenError> {
        self.config
            .regions
            .iter()
            .find(|r| r.name == name)
            .ok_or_else(|| GenError::consistency("region", name))
    }

    fn generate_vcenters(&mut self, ctx: &mut GenerationContext) {
        for region in &self.config.regions {
            ctx.vcenters.push(VCenter {
                name: format!("{}-VC-01", region.name),
                moref: MorefAllocator::opaque("vc"),
                region: region.name.clone(),
                version: VCENTER_VERSION.to_string(),
                build: VCENTER_BUILD.to_string(),
                url: format!("https://{}-vc-01.vsphere.local", region.name.to_lowercase()),
                description: format!("{} vCenter, deployed 2021", region.name),
            });
        }
    }

    fn generate_datacenters(&mut self, ctx: &mut GenerationContext) -> Result<(), GenError> {
        let parents: Vec<(String, String)> = ctx
            .vcenters
            .iter()
            .map(|vc| (vc.moref.clone(), vc.region.clone()))
            .collect();

        for (vc_moref, region_name) in parents {
            let plan = self.region(&region_name)?;
            // Headquarters regions carry a DR site alongside PROD.
            let purposes: &[&str] = if plan.headquarters {
                &["PROD", "DR"]
            } else {
                &["PROD"]
            };
            for purpose in purposes {
                ctx.datacenters.push(Datacenter {
                    name: format!("{}-DC-{}", region_name, purpose),
                    moref: MorefAllocator::opaque("datacenter"),
                    parent_vcenter: vc_moref.clone(),
                    description: format!("{} datacenter for {}", purpose, region_name),
                    status: "Available".to_string(),
                });
            }
        }
        Ok(())
    }

    fn generate_clusters(&mut self, ctx: &mut GenerationContext) -> Result<(), GenError> {
        let parents: Vec<(String, String)> = ctx
            .datacenters
            .iter()
            .map(|dc| (dc.moref.clone(), dc.parent_vcenter.clone()))
            .collect();

        // Display names are numbered per region so PROD and DR datacenters
        // of the same region cannot mint colliding names.
        let mut region_counters: HashMap<String, u32> = HashMap::new();

        for (dc_moref, vc_moref) in parents {
            let region_name = ctx.vcenter(&vc_moref)?.region.clone();
            let plan = self.region(&region_name)?;

            for _ in 0..plan.calculated_clusters {
                let band = pick(self.rng, &plan.cluster_sizes);
                let total_hosts = int_range(self.rng, band.min_hosts, band.max_hosts);
                let number = region_counters.entry(region_name.clone()).or_insert(0);
                *number += 1;
                let name = format!("{}-CL-{:02}", region_name, number);
                let moref = ctx.morefs.next(MorefKind::Cluster);

                ctx.clusters.push(Cluster {
                    name,
                    moref,
                    parent_datacenter: dc_moref.clone(),
                    parent_vcenter: vc_moref.clone(),
                    size_category: band.category.clone(),
                    total_hosts,
                    total_vms: 0,
                    total_cpu_cores: 0,
                    total_memory_gb: 0,
                    ha_enabled: true,
                    drs_enabled: true,
                    notes: format!("Cluster for {} workloads", region_name),
                });
            }
        }
        Ok(())
    }

    fn generate_hosts(&mut self, ctx: &mut GenerationContext) -> Result<(), GenError> {
        let parents: Vec<(String, String, String, u32, String)> = ctx
            .clusters
            .iter()
            .map(|cl| {
                (
                    cl.moref.clone(),
                    cl.name.clone(),
                    cl.parent_vcenter.clone(),
                    cl.total_hosts,
                    cl.size_category.clone(),
                )
            })
            .collect();

        for (cluster_moref, cluster_name, vc_moref, total_hosts, size_category) in parents {
            let density = self
                .config
                .vm_density
                .get(&size_category)
                .ok_or_else(|| GenError::consistency("vm_density bucket", size_category.as_str()))?;

            for i in 0..total_hosts {
                let model = pick(self.rng, &self.config.host_models);
                let moref = ctx.morefs.next(MorefKind::Host);
                let serial = format!(
                    "{}{}",
                    vendor_serial_prefix(&model.vendor),
                    int_range(self.rng, 100_000, 999_999)
                );

                let host = Host {
                    name: format!("{}-{:02}", cluster_name.replace("-CL-", "-ESX-"), i + 1),
                    moref,
                    parent_cluster: cluster_moref.clone(),
                    vcenter_moref: vc_moref.clone(),
                    cpu_cores: model.cpu_cores,
                    memory_gb: model.memory_gb,
                    nic_count: model.nic_count,
                    vm_capacity: int_range(self.rng, density.min, density.max),
                    // Filled in once this cluster's datastores exist.
                    datastores_count: 0,
                    status: if self.rng.gen_bool(0.95) {
                        "Connected"
                    } else {
                        "Maintenance"
                    }
                    .to_string(),
                    model: model.name.clone(),
                    vendor: model.vendor.clone(),
                    serial,
                    uptime: round2(float_range(self.rng, 100.0, 400.0)),
                };
                self.generate_host_nics(ctx, &host);
                ctx.hosts.push(host);
            }
        }
        Ok(())
    }

    fn generate_host_nics(&mut self, ctx: &mut GenerationContext, host: &Host) {
        for i in 0..host.nic_count {
            ctx.host_nics.push(HostNic {
                name: format!("vmnic{}", i),
                moref: format!("nic-{}-{}", host.moref, i),
                parent_host: host.moref.clone(),
                mac_address: mac_address(self.rng),
                link_status: if self.rng.gen_bool(0.95) { "Up" } else { "Down" }.to_string(),
                speed_mbps: *choose(self.rng, &[10_000, 25_000, 40_000]),
                duplex: "Full".to_string(),
                driver: "vmxnet3".to_string(),
                firmware: format!(
                    "1.{}.{}",
                    int_range(self.rng, 1, 9),
                    int_range(self.rng, 0, 9)
                ),
                pci_address: format!("0000:{:02}:00.{}", int_range(self.rng, 0, 99), i),
                notes: format!("NIC {} for host {}", i + 1, host.name),
            });
        }
    }

    fn generate_vms(&mut self, ctx: &mut GenerationContext) -> Result<(), GenError> {
        let parents: Vec<(String, String, String, u32)> = ctx
            .hosts
            .iter()
            .map(|h| {
                (
                    h.moref.clone(),
                    h.parent_cluster.clone(),
                    h.vcenter_moref.clone(),
                    h.vm_capacity,
                )
            })
            .collect();

        for (host_moref, cluster_moref, vc_moref, vm_capacity) in parents {
            let region_name = ctx.vcenter(&vc_moref)?.region.clone();
            let plan = self.region(&region_name)?;

            for _ in 0..vm_capacity {
                let purpose = pick(self.rng, &self.config.purposes).name.clone();
                let os = pick(self.rng, &self.config.os_types);
                let seq = ctx.morefs.reserve(MorefKind::Vm);
                let power_state = if self.rng.gen_bool(0.9) {
                    PowerState::PoweredOn
                } else {
                    PowerState::PoweredOff
                };

                let vm = Vm {
                    name: format!("{}-VM-{}-{:04}", region_name, purpose, seq),
                    moref: MorefKind::Vm.format(seq),
                    parent_host: host_moref.clone(),
                    cluster_moref: cluster_moref.clone(),
                    vcenter_moref: vc_moref.clone(),
                    guest_os: os.name.clone(),
                    purpose: purpose.clone(),
                    vm_version: format!("v{}", int_range(self.rng, 14, 19)),
                    cpu_count: *choose(self.rng, &os.cpu_choices),
                    memory_gb: *choose(self.rng, &os.memory_gb_choices),
                    disk_count: int_range(self.rng, 1, 4),
                    nic_count: int_range(self.rng, 1, 4),
                    // Two random octets under the region prefix; duplicate
                    // IPs across VMs are an accepted relaxation.
                    ip_addresses: format!(
                        "{}.{}.{}",
                        plan.network_prefix,
                        int_range(self.rng, 1, 254),
                        int_range(self.rng, 1, 254)
                    ),
                    power_state,
                    created_date: random_date(self.rng, self.created_from, self.today),
                    notes: format!("{} workload", purpose),
                };
                self.generate_guest_detail(ctx, &vm);
                ctx.vms.push(vm);
            }
        }
        Ok(())
    }

    fn generate_guest_detail(&mut self, ctx: &mut GenerationContext, vm: &Vm) {
        let on = vm.power_state.is_on();
        ctx.vm_guest_details.push(VmGuestDetail {
            vm_moref: vm.moref.clone(),
            guest_os_full: vm.guest_os.clone(),
            ip_addresses: vm.ip_addresses.clone(),
            hostname: vm.name.to_lowercase(),
            uptime: if on {
                round2(float_range(self.rng, 1.0, 400.0))
            } else {
                0.0
            },
            tools_status: if on { "Running Current" } else { "Not running" }.to_string(),
            tools_version: "12365".to_string(),
            guest_state: if on { "Running" } else { "Stopped" }.to_string(),
            cpu_usage: if on { int_range(self.rng, 20, 80) } else { 0 },
            memory_usage: if on { int_range(self.rng, 40, 90) } else { 0 },
            notes: vm.notes.clone(),
        });
    }

    fn generate_datastores(&mut self, ctx: &mut GenerationContext) -> Result<(), GenError> {
        let parents: Vec<(String, String)> = ctx
            .clusters
            .iter()
            .map(|cl| (cl.moref.clone(), cl.name.clone()))
            .collect();

        for (cluster_moref, cluster_name) in parents {
            let dsc_name = format!("DSC-{}-01", cluster_name);
            let count = int_range(self.rng, 4, 8);
            let mut total_capacity: u64 = 0;
            let mut total_free: u64 = 0;

            for i in 0..count {
                let capacity = *choose(self.rng, &self.config.storage.datastore_sizes_gb);
                let free = (f64::from(capacity) * float_range(self.rng, 0.2, 0.4)) as u32;
                let provisioned = (f64::from(capacity) * float_range(self.rng, 0.7, 0.9)) as u32;
                let array = pick(self.rng, &self.config.storage.arrays);
                let moref = ctx.morefs.next(MorefKind::Datastore);
                total_capacity += u64::from(capacity);
                total_free += u64::from(free);

                ctx.datastores.push(Datastore {
                    name: format!("{}-{:02}", cluster_name.replace("-CL-", "-DS-"), i + 1),
                    moref,
                    parent_cluster: cluster_moref.clone(),
                    ds_type: if self.rng.gen_bool(0.8) { "VMFS-6" } else { "NFS" }.to_string(),
                    capacity_gb: capacity,
                    free_space_gb: free,
                    provisioned_space_gb: provisioned,
                    datastore_cluster: dsc_name.clone(),
                    storage_array: array.name.clone(),
                    storage_model: array.model.clone(),
                    storage_serial: format!(
                        "{}{}",
                        array_serial_prefix(&array.name),
                        int_range(self.rng, 10_000, 99_999)
                    ),
                });
            }

            // Aggregate once, immediately after this cluster's datastores
            // exist; the running sums are never revisited.
            let moref = ctx.morefs.next(MorefKind::DatastoreCluster);
            ctx.datastore_clusters.push(DatastoreCluster {
                name: dsc_name,
                moref,
                parent_cluster: cluster_moref.clone(),
                total_capacity_gb: total_capacity,
                free_space_gb: total_free,
                total_datastores: count,
                sdrs_enabled: true,
                automation_level: choose(self.rng, &["Fully Automated", "Manual"]).to_string(),
                space_threshold: int_range(self.rng, 75, 85),
            });

            for host in ctx
                .hosts
                .iter_mut()
                .filter(|h| h.parent_cluster == cluster_moref)
            {
                host.datastores_count = count;
            }
        }
        Ok(())
    }

    fn generate_virtual_switches(&mut self, ctx: &mut GenerationContext) {
        let regions: Vec<String> = ctx.vcenters.iter().map(|vc| vc.region.clone()).collect();
        for region in regions {
            let moref = ctx.morefs.next(MorefKind::VirtualSwitch);
            ctx.virtual_switches.push(VirtualSwitch {
                name: format!("{}-DVS-01", region),
                moref,
                region: region.clone(),
                switch_type: "Distributed".to_string(),
                uplinks: 4,
                port_groups: 0,
                mtu: 9000,
                load_balancing: "Route based on physical NIC load".to_string(),
                notes: format!("Main distributed switch for {}", region),
            });
        }
    }

    fn generate_networks(&mut self, ctx: &mut GenerationContext) -> Result<(), GenError> {
        let regions: Vec<String> = ctx.vcenters.iter().map(|vc| vc.region.clone()).collect();

        for region_name in regions {
            let plan = self.region(&region_name)?;
            let switch_idx = ctx.switch_index_for_region(&region_name)?;
            let switch_moref = ctx.virtual_switches[switch_idx].moref.clone();

            for purpose in NETWORK_PURPOSES {
                for segment in NETWORK_SEGMENTS {
                    let seq = ctx.morefs.reserve(MorefKind::Network);
                    let third_octet = seq % 255;
                    let associated: Vec<String> = ctx
                        .vms
                        .iter()
                        .filter(|vm| vm.purpose == segment)
                        .take(ASSOCIATED_VM_CAP)
                        .map(|vm| vm.moref.clone())
                        .collect();
                    let associated = associated.join(",");
                    let name = format!("{}-NET-{}-{}", region_name, purpose, segment);
                    let notes = format!("{} {} network", purpose, segment);

                    ctx.networks.push(Network {
                        name: name.clone(),
                        moref: MorefKind::Network.format(seq),
                        parent_vswitch: switch_moref.clone(),
                        ip_range: format!("{}.{}.0/24", plan.network_prefix, third_octet),
                        subnet_mask: "255.255.255.0".to_string(),
                        gateway: format!("{}.{}.1", plan.network_prefix, third_octet),
                        associated_vms: associated.clone(),
                        purpose: purpose.to_string(),
                        segment: segment.to_string(),
                        vlan_id: seq,
                        notes: notes.clone(),
                    });

                    let pg_moref = ctx.morefs.next(MorefKind::PortGroup);
                    ctx.port_groups.push(PortGroup {
                        name: format!("PG-{}", name),
                        moref: pg_moref,
                        parent_vswitch: switch_moref.clone(),
                        vlan_id: seq,
                        associated_vms: associated,
                        security_policy: "Promiscuous:Reject;Forged:Reject".to_string(),
                        traffic_shaping: "Disabled".to_string(),
                        teaming_policy: "Active:uplink1,uplink2;Standby:uplink3,uplink4"
                            .to_string(),
                        notes,
                    });
                    ctx.virtual_switches[switch_idx].port_groups += 1;
                }
            }
        }
        Ok(())
    }

    fn generate_nsx_tags(&mut self, ctx: &mut GenerationContext) {
        for category in TAG_CATEGORIES {
            // 25% sample per category, without replacement; a VM may be
            // tagged by several categories but at most once per category.
            let sample_size = ctx.vms.len() / 4;
            let indices = rand::seq::index::sample(self.rng, ctx.vms.len(), sample_size);

            for idx in indices {
                let vm = &ctx.vms[idx];
                let (vm_moref, vm_name, vm_purpose, vm_created) = (
                    vm.moref.clone(),
                    vm.name.clone(),
                    vm.purpose.clone(),
                    vm.created_date,
                );
                let seq = ctx.morefs.reserve(MorefKind::Tag);
                ctx.nsx_tags.push(NsxTag {
                    name: format!("TAG-{}-{}", category, seq),
                    moref: MorefKind::Tag.format(seq),
                    object_type: "VM".to_string(),
                    object_moref: vm_moref,
                    category: category.to_string(),
                    value: vm_purpose,
                    created_date: vm_created,
                    modified_date: self.today,
                    notes: format!("{} tag for {}", category, vm_name),
                });
            }
        }
    }
}

/// Post-pass A: recompute each cluster's host count and cpu/memory totals
/// from the hosts whose parent reference matches.
fn roll_up_cluster_capacity(ctx: &mut GenerationContext) {
    let mut totals: HashMap<&str, (u32, u32, u32)> = HashMap::new();
    for host in &ctx.hosts {
        let entry = totals.entry(host.parent_cluster.as_str()).or_default();
        entry.0 += 1;
        entry.1 += host.cpu_cores;
        entry.2 += host.memory_gb;
    }
    for cluster in &mut ctx.clusters {
        let (hosts, cpu, memory) = totals
            .get(cluster.moref.as_str())
            .copied()
            .unwrap_or_default();
        cluster.total_hosts = hosts;
        cluster.total_cpu_cores = cpu;
        cluster.total_memory_gb = memory;
    }
}

/// Post-pass B: recompute each cluster's VM count from the VMs whose
/// cluster reference matches.
fn roll_up_cluster_vms(ctx: &mut GenerationContext) {
    let mut counts: HashMap<&str, u32> = HashMap::new();
    for vm in &ctx.vms {
        *counts.entry(vm.cluster_moref.as_str()).or_default() += 1;
    }
    for cluster in &mut ctx.clusters {
        cluster.total_vms = counts.get(cluster.moref.as_str()).copied().unwrap_or(0);
    }
}

fn vendor_serial_prefix(vendor: &str) -> String {
    vendor
        .chars()
        .filter(|c| c.is_ascii_alphanumeric())
        .take(4)
        .collect::<String>()
        .to_uppercase()
}

fn array_serial_prefix(array: &str) -> String {
    array
        .chars()
        .filter(|c| c.is_ascii_alphanumeric())
        .take(2)
        .collect::<String>()
        .to_uppercase()
}
