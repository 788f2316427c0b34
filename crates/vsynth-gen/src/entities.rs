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

//! Typed inventory entities and their export schemas.
//!
//! Each entity kind is a plain struct with a [`Tabular`] impl declaring the
//! artifact name and fixed column list. Parent references are plain moref
//! strings; referential integrity is guaranteed by generation order, not by
//! the types here.
//!
//! Fields that exist for generation bookkeeping but are not part of the
//! exported shape (e.g. a vCenter's `region`) are simply absent from the
//! schema.

use chrono::NaiveDate;
use vsynth_core::{Tabular, Value};

fn date_str(date: NaiveDate) -> String {
    date.format("%Y-%m-%d").to_string()
}

/// VM power state, as exported in platform spelling.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PowerState {
    /// The VM is running.
    PoweredOn,
    /// The VM is shut down.
    PoweredOff,
}

impl PowerState {
    /// Platform spelling, e.g. `poweredOn`.
    pub fn as_str(self) -> &'static str {
        match self {
            PowerState::PoweredOn => "poweredOn",
            PowerState::PoweredOff => "poweredOff",
        }
    }

    /// Whether the VM is running.
    pub fn is_on(self) -> bool {
        matches!(self, PowerState::PoweredOn)
    }
}

/// A vCenter server, one per region.
#[derive(Debug, Clone)]
pub struct VCenter {
    pub name: String,
    pub moref: String,
    /// Region this vCenter serves. Bookkeeping only, not exported.
    pub region: String,
    pub version: String,
    pub build: String,
    pub url: String,
    pub description: String,
}

impl Tabular for VCenter {
    const TABLE: &'static str = "vCenters";

    fn schema() -> &'static [&'static str] {
        &["name", "moref", "version", "build", "url", "description"]
    }

    fn to_row(&self) -> Vec<Value> {
        vec![
            self.name.clone().into(),
            self.moref.clone().into(),
            self.version.clone().into(),
            self.build.clone().into(),
            self.url.clone().into(),
            self.description.clone().into(),
        ]
    }
}

/// A datacenter under a vCenter; headquarters regions get PROD + DR.
#[derive(Debug, Clone)]
pub struct Datacenter {
    pub name: String,
    pub moref: String,
    pub parent_vcenter: String,
    pub description: String,
    pub status: String,
}

impl Tabular for Datacenter {
    const TABLE: &'static str = "Datacenters";

    fn schema() -> &'static [&'static str] {
        &["name", "moref", "parent_vcenter", "description", "status"]
    }

    fn to_row(&self) -> Vec<Value> {
        vec![
            self.name.clone().into(),
            self.moref.clone().into(),
            self.parent_vcenter.clone().into(),
            self.description.clone().into(),
            self.status.clone().into(),
        ]
    }
}

/// A compute cluster. Aggregate fields are populated by post-passes once
/// the dependent child collections exist.
#[derive(Debug, Clone)]
pub struct Cluster {
    pub name: String,
    pub moref: String,
    pub parent_datacenter: String,
    pub parent_vcenter: String,
    /// Size category drawn from the region's cluster-size distribution.
    pub size_category: String,
    pub total_hosts: u32,
    pub total_vms: u32,
    pub total_cpu_cores: u32,
    pub total_memory_gb: u32,
    pub ha_enabled: bool,
    pub drs_enabled: bool,
    pub notes: String,
}

impl Tabular for Cluster {
    const TABLE: &'static str = "Clusters";

    fn schema() -> &'static [&'static str] {
        &[
            "name",
            "moref",
            "parent_datacenter",
            "parent_vcenter",
            "size_category",
            "total_hosts",
            "total_vms",
            "total_cpu_cores",
            "total_memory",
            "ha_enabled",
            "drs_enabled",
            "notes",
        ]
    }

    fn to_row(&self) -> Vec<Value> {
        vec![
            self.name.clone().into(),
            self.moref.clone().into(),
            self.parent_datacenter.clone().into(),
            self.parent_vcenter.clone().into(),
            self.size_category.clone().into(),
            self.total_hosts.into(),
            self.total_vms.into(),
            self.total_cpu_cores.into(),
            self.total_memory_gb.into(),
            self.ha_enabled.into(),
            self.drs_enabled.into(),
            self.notes.clone().into(),
        ]
    }
}

/// An ESXi host. `vm_capacity` bounds how many VMs the host receives.
#[derive(Debug, Clone)]
pub struct Host {
    pub name: String,
    pub moref: String,
    pub parent_cluster: String,
    pub vcenter_moref: String,
    pub cpu_cores: u32,
    pub memory_gb: u32,
    pub nic_count: u32,
    pub vm_capacity: u32,
    pub datastores_count: u32,
    pub status: String,
    pub model: String,
    pub vendor: String,
    pub serial: String,
    pub uptime: f64,
}

impl Tabular for Host {
    const TABLE: &'static str = "ESXiHosts";

    fn schema() -> &'static [&'static str] {
        &[
            "name",
            "moref",
            "parent_cluster",
            "vcenter_moref",
            "cpu_cores",
            "memory_gb",
            "nic_count",
            "vm_capacity",
            "datastores_count",
            "status",
            "model",
            "vendor",
            "serial",
            "uptime",
        ]
    }

    fn to_row(&self) -> Vec<Value> {
        vec![
            self.name.clone().into(),
            self.moref.clone().into(),
            self.parent_cluster.clone().into(),
            self.vcenter_moref.clone().into(),
            self.cpu_cores.into(),
            self.memory_gb.into(),
            self.nic_count.into(),
            self.vm_capacity.into(),
            self.datastores_count.into(),
            self.status.clone().into(),
            self.model.clone().into(),
            self.vendor.clone().into(),
            self.serial.clone().into(),
            self.uptime.into(),
        ]
    }
}

/// A physical NIC on a host; count always equals the host's `nic_count`.
#[derive(Debug, Clone)]
pub struct HostNic {
    pub name: String,
    pub moref: String,
    pub parent_host: String,
    pub mac_address: String,
    pub link_status: String,
    pub speed_mbps: u32,
    pub duplex: String,
    pub driver: String,
    pub firmware: String,
    pub pci_address: String,
    pub notes: String,
}

impl Tabular for HostNic {
    const TABLE: &'static str = "HostNICs";

    fn schema() -> &'static [&'static str] {
        &[
            "name",
            "moref",
            "parent_host",
            "mac_address",
            "link_status",
            "speed",
            "duplex",
            "driver",
            "firmware",
            "pci_address",
            "notes",
        ]
    }

    fn to_row(&self) -> Vec<Value> {
        vec![
            self.name.clone().into(),
            self.moref.clone().into(),
            self.parent_host.clone().into(),
            self.mac_address.clone().into(),
            self.link_status.clone().into(),
            self.speed_mbps.into(),
            self.duplex.clone().into(),
            self.driver.clone().into(),
            self.firmware.clone().into(),
            self.pci_address.clone().into(),
            self.notes.clone().into(),
        ]
    }
}

/// A virtual machine. `purpose` is carried as a first-class field so
/// network association never parses it back out of the display name.
#[derive(Debug, Clone)]
pub struct Vm {
    pub name: String,
    pub moref: String,
    pub parent_host: String,
    pub cluster_moref: String,
    pub vcenter_moref: String,
    pub guest_os: String,
    pub purpose: String,
    pub vm_version: String,
    pub cpu_count: u32,
    pub memory_gb: u32,
    pub disk_count: u32,
    pub nic_count: u32,
    pub ip_addresses: String,
    pub power_state: PowerState,
    pub created_date: NaiveDate,
    pub notes: String,
}

impl Tabular for Vm {
    const TABLE: &'static str = "VirtualMachines";

    fn schema() -> &'static [&'static str] {
        &[
            "name",
            "moref",
            "parent_host",
            "cluster_moref",
            "vcenter_moref",
            "guest_os",
            "purpose",
            "vm_version",
            "cpu_count",
            "memory_gb",
            "disk_count",
            "nic_count",
            "ip_addresses",
            "power_state",
            "created_date",
            "notes",
        ]
    }

    fn to_row(&self) -> Vec<Value> {
        vec![
            self.name.clone().into(),
            self.moref.clone().into(),
            self.parent_host.clone().into(),
            self.cluster_moref.clone().into(),
            self.vcenter_moref.clone().into(),
            self.guest_os.clone().into(),
            self.purpose.clone().into(),
            self.vm_version.clone().into(),
            self.cpu_count.into(),
            self.memory_gb.into(),
            self.disk_count.into(),
            self.nic_count.into(),
            self.ip_addresses.clone().into(),
            self.power_state.as_str().into(),
            date_str(self.created_date).into(),
            self.notes.clone().into(),
        ]
    }
}

/// Guest-level detail accompanying every VM. Telemetry fields are zeroed
/// and "stopped"-flavored when the VM is powered off.
#[derive(Debug, Clone)]
pub struct VmGuestDetail {
    pub vm_moref: String,
    pub guest_os_full: String,
    pub ip_addresses: String,
    pub hostname: String,
    pub uptime: f64,
    pub tools_status: String,
    pub tools_version: String,
    pub guest_state: String,
    pub cpu_usage: u32,
    pub memory_usage: u32,
    pub notes: String,
}

impl Tabular for VmGuestDetail {
    const TABLE: &'static str = "VMGuestDetails";

    fn schema() -> &'static [&'static str] {
        &[
            "vm_moref",
            "guest_os_full",
            "ip_addresses",
            "hostname",
            "uptime",
            "tools_status",
            "tools_version",
            "guest_state",
            "cpu_usage",
            "memory_usage",
            "notes",
        ]
    }

    fn to_row(&self) -> Vec<Value> {
        vec![
            self.vm_moref.clone().into(),
            self.guest_os_full.clone().into(),
            self.ip_addresses.clone().into(),
            self.hostname.clone().into(),
            self.uptime.into(),
            self.tools_status.clone().into(),
            self.tools_version.clone().into(),
            self.guest_state.clone().into(),
            self.cpu_usage.into(),
            self.memory_usage.into(),
            self.notes.clone().into(),
        ]
    }
}

/// A datastore attached to a cluster.
#[derive(Debug, Clone)]
pub struct Datastore {
    pub name: String,
    pub moref: String,
    pub parent_cluster: String,
    pub ds_type: String,
    pub capacity_gb: u32,
    pub free_space_gb: u32,
    pub provisioned_space_gb: u32,
    /// Display name of the datastore cluster this belongs to.
    pub datastore_cluster: String,
    pub storage_array: String,
    pub storage_model: String,
    pub storage_serial: String,
}

impl Tabular for Datastore {
    const TABLE: &'static str = "Datastores";

    fn schema() -> &'static [&'static str] {
        &[
            "name",
            "moref",
            "parent_cluster",
            "type",
            "capacity_gb",
            "free_space_gb",
            "provisioned_space_gb",
            "datastore_cluster",
            "storage_array",
            "storage_model",
            "storage_serial",
        ]
    }

    fn to_row(&self) -> Vec<Value> {
        vec![
            self.name.clone().into(),
            self.moref.clone().into(),
            self.parent_cluster.clone().into(),
            self.ds_type.clone().into(),
            self.capacity_gb.into(),
            self.free_space_gb.into(),
            self.provisioned_space_gb.into(),
            self.datastore_cluster.clone().into(),
            self.storage_array.clone().into(),
            self.storage_model.clone().into(),
            self.storage_serial.clone().into(),
        ]
    }
}

/// A datastore cluster aggregating one compute cluster's datastores.
#[derive(Debug, Clone)]
pub struct DatastoreCluster {
    pub name: String,
    pub moref: String,
    pub parent_cluster: String,
    pub total_capacity_gb: u64,
    pub free_space_gb: u64,
    pub total_datastores: u32,
    pub sdrs_enabled: bool,
    pub automation_level: String,
    pub space_threshold: u32,
}

impl Tabular for DatastoreCluster {
    const TABLE: &'static str = "DatastoreClusters";

    fn schema() -> &'static [&'static str] {
        &[
            "name",
            "moref",
            "parent_cluster",
            "total_capacity_gb",
            "free_space_gb",
            "total_datastores",
            "sdrs_enabled",
            "automation_level",
            "space_threshold",
        ]
    }

    fn to_row(&self) -> Vec<Value> {
        vec![
            self.name.clone().into(),
            self.moref.clone().into(),
            self.parent_cluster.clone().into(),
            self.total_capacity_gb.into(),
            self.free_space_gb.into(),
            self.total_datastores.into(),
            self.sdrs_enabled.into(),
            self.automation_level.clone().into(),
            self.space_threshold.into(),
        ]
    }
}

/// A distributed virtual switch, one per vCenter/region.
#[derive(Debug, Clone)]
pub struct VirtualSwitch {
    pub name: String,
    pub moref: String,
    /// Region this switch serves. Bookkeeping only, not exported.
    pub region: String,
    pub switch_type: String,
    pub uplinks: u32,
    pub port_groups: u32,
    pub mtu: u32,
    pub load_balancing: String,
    pub notes: String,
}

impl Tabular for VirtualSwitch {
    const TABLE: &'static str = "VirtualSwitches";

    fn schema() -> &'static [&'static str] {
        &[
            "name",
            "moref",
            "type",
            "uplinks",
            "port_groups",
            "mtu",
            "load_balancing",
            "notes",
        ]
    }

    fn to_row(&self) -> Vec<Value> {
        vec![
            self.name.clone().into(),
            self.moref.clone().into(),
            self.switch_type.clone().into(),
            self.uplinks.into(),
            self.port_groups.into(),
            self.mtu.into(),
            self.load_balancing.clone().into(),
            self.notes.clone().into(),
        ]
    }
}

/// A network segment on a region's switch.
#[derive(Debug, Clone)]
pub struct Network {
    pub name: String,
    pub moref: String,
    pub parent_vswitch: String,
    pub ip_range: String,
    pub subnet_mask: String,
    pub gateway: String,
    /// Comma-joined morefs of up to five associated VMs.
    pub associated_vms: String,
    pub purpose: String,
    pub segment: String,
    pub vlan_id: u64,
    pub notes: String,
}

impl Tabular for Network {
    const TABLE: &'static str = "Networks";

    fn schema() -> &'static [&'static str] {
        &[
            "name",
            "moref",
            "parent_vswitch",
            "ip_range",
            "subnet_mask",
            "gateway",
            "associated_vms",
            "purpose",
            "segment",
            "vlan_id",
            "notes",
        ]
    }

    fn to_row(&self) -> Vec<Value> {
        vec![
            self.name.clone().into(),
            self.moref.clone().into(),
            self.parent_vswitch.clone().into(),
            self.ip_range.clone().into(),
            self.subnet_mask.clone().into(),
            self.gateway.clone().into(),
            self.associated_vms.clone().into(),
            self.purpose.clone().into(),
            self.segment.clone().into(),
            self.vlan_id.into(),
            self.notes.clone().into(),
        ]
    }
}

/// The port group backing a network, one per network.
#[derive(Debug, Clone)]
pub struct PortGroup {
    pub name: String,
    pub moref: String,
    pub parent_vswitch: String,
    pub vlan_id: u64,
    pub associated_vms: String,
    pub security_policy: String,
    pub traffic_shaping: String,
    pub teaming_policy: String,
    pub notes: String,
}

impl Tabular for PortGroup {
    const TABLE: &'static str = "PortGroups";

    fn schema() -> &'static [&'static str] {
        &[
            "name",
            "moref",
            "parent_vswitch",
            "vlan_id",
            "associated_vms",
            "security_policy",
            "traffic_shaping",
            "teaming_policy",
            "notes",
        ]
    }

    fn to_row(&self) -> Vec<Value> {
        vec![
            self.name.clone().into(),
            self.moref.clone().into(),
            self.parent_vswitch.clone().into(),
            self.vlan_id.into(),
            self.associated_vms.clone().into(),
            self.security_policy.clone().into(),
            self.traffic_shaping.clone().into(),
            self.teaming_policy.clone().into(),
            self.notes.clone().into(),
        ]
    }
}

/// An NSX security/compliance tag attached to a VM.
#[derive(Debug, Clone)]
pub struct NsxTag {
    pub name: String,
    pub moref: String,
    pub object_type: String,
    pub object_moref: String,
    pub category: String,
    pub value: String,
    pub created_date: NaiveDate,
    pub modified_date: NaiveDate,
    pub notes: String,
}

impl Tabular for NsxTag {
    const TABLE: &'static str = "NSXTags";

    fn schema() -> &'static [&'static str] {
        &[
            "name",
            "moref",
            "object_type",
            "object_moref",
            "category",
            "value",
            "created_date",
            "modified_date",
            "notes",
        ]
    }

    fn to_row(&self) -> Vec<Value> {
        vec![
            self.name.clone().into(),
            self.moref.clone().into(),
            self.object_type.clone().into(),
            self.object_moref.clone().into(),
            self.category.clone().into(),
            self.value.clone().into(),
            date_str(self.created_date).into(),
            date_str(self.modified_date).into(),
            self.notes.clone().into(),
        ]
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use vsynth_core::Table;

    #[test]
    fn power_state_spelling() {
        assert_eq!(PowerState::PoweredOn.as_str(), "poweredOn");
        assert_eq!(PowerState::PoweredOff.as_str(), "poweredOff");
        assert!(PowerState::PoweredOn.is_on());
        assert!(!PowerState::PoweredOff.is_on());
    }

    #[test]
    fn vm_row_matches_schema_arity() {
        let vm = Vm {
            name: "HQ-A-VM-WEB-1000".to_string(),
            moref: "vm-1000".to_string(),
            parent_host: "host-1000".to_string(),
            cluster_moref: "domain-c1000".to_string(),
            vcenter_moref: "vc-abcd1234".to_string(),
            guest_os: "Ubuntu 20.04 LTS".to_string(),
            purpose: "WEB".to_string(),
            vm_version: "v17".to_string(),
            cpu_count: 4,
            memory_gb: 16,
            disk_count: 2,
            nic_count: 1,
            ip_addresses: "10.10.4.17".to_string(),
            power_state: PowerState::PoweredOn,
            created_date: NaiveDate::from_ymd_opt(2021, 3, 14).unwrap(),
            notes: "WEB workload".to_string(),
        };
        let table = Table::from_slice(std::slice::from_ref(&vm)).unwrap();
        assert_eq!(table.name(), "VirtualMachines");
        assert_eq!(table.rows()[0].len(), Vm::schema().len());
        assert_eq!(table.rows()[0][14].as_str(), Some("2021-03-14"));
    }

    #[test]
    fn every_schema_has_distinct_columns() {
        fn assert_distinct(schema: &[&str]) {
            let mut cols: Vec<&str> = schema.to_vec();
            cols.sort_unstable();
            cols.dedup();
            assert_eq!(cols.len(), schema.len());
        }
        assert_distinct(VCenter::schema());
        assert_distinct(Datacenter::schema());
        assert_distinct(Cluster::schema());
        assert_distinct(Host::schema());
        assert_distinct(HostNic::schema());
        assert_distinct(Vm::schema());
        assert_distinct(VmGuestDetail::schema());
        assert_distinct(Datastore::schema());
        assert_distinct(DatastoreCluster::schema());
        assert_distinct(VirtualSwitch::schema());
        assert_distinct(Network::schema());
        assert_distinct(PortGroup::schema());
        assert_distinct(NsxTag::schema());
    }
}
