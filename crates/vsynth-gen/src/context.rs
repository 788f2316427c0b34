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

//! The generation context: every entity collection of one run.
//!
//! All collections live on this one object, which the generator threads
//! through each phase. The pipeline is a function of (config, random
//! source) → context; nothing is stashed in globals, and the context is
//! discarded wholesale when the run ends.

use crate::entities::{
    Cluster, Datacenter, Datastore, DatastoreCluster, Host, HostNic, Network, NsxTag, PortGroup,
    VCenter, VirtualSwitch, Vm, VmGuestDetail,
};
use crate::error::GenError;
use vsynth_core::{MorefAllocator, Table};

/// Owns every entity collection of a single generation run.
///
/// Collections are append-only during generation; insertion order is
/// generation order and is preserved through export.
#[derive(Debug, Default)]
pub struct GenerationContext {
    /// Identifier allocator shared by all phases.
    pub morefs: MorefAllocator,
    pub vcenters: Vec<VCenter>,
    pub datacenters: Vec<Datacenter>,
    pub clusters: Vec<Cluster>,
    pub hosts: Vec<Host>,
    pub host_nics: Vec<HostNic>,
    pub vms: Vec<Vm>,
    pub vm_guest_details: Vec<VmGuestDetail>,
    pub datastores: Vec<Datastore>,
    pub datastore_clusters: Vec<DatastoreCluster>,
    pub virtual_switches: Vec<VirtualSwitch>,
    pub networks: Vec<Network>,
    pub port_groups: Vec<PortGroup>,
    pub nsx_tags: Vec<NsxTag>,
}

impl GenerationContext {
    /// Create an empty context.
    pub fn new() -> Self {
        Self::default()
    }

    /// Look up a vCenter by moref.
    ///
    /// # Errors
    ///
    /// [`GenError::InternalConsistency`] if no vCenter carries the moref;
    /// a prior phase violated its invariant.
    pub fn vcenter(&self, moref: &str) -> Result<&VCenter, GenError> {
        self.vcenters
            .iter()
            .find(|vc| vc.moref == moref)
            .ok_or_else(|| GenError::consistency("vcenter", moref))
    }

    /// Look up a datacenter by moref.
    ///
    /// # Errors
    ///
    /// [`GenError::InternalConsistency`] if the moref does not resolve.
    pub fn datacenter(&self, moref: &str) -> Result<&Datacenter, GenError> {
        self.datacenters
            .iter()
            .find(|dc| dc.moref == moref)
            .ok_or_else(|| GenError::consistency("datacenter", moref))
    }

    /// Look up a cluster by moref.
    ///
    /// # Errors
    ///
    /// [`GenError::InternalConsistency`] if the moref does not resolve.
    pub fn cluster(&self, moref: &str) -> Result<&Cluster, GenError> {
        self.clusters
            .iter()
            .find(|cl| cl.moref == moref)
            .ok_or_else(|| GenError::consistency("cluster", moref))
    }

    /// Find the index of a region's virtual switch.
    ///
    /// # Errors
    ///
    /// [`GenError::InternalConsistency`] if the region has no switch.
    pub fn switch_index_for_region(&self, region: &str) -> Result<usize, GenError> {
        self.virtual_switches
            .iter()
            .position(|sw| sw.region == region)
            .ok_or_else(|| GenError::consistency("virtual switch", region))
    }

    /// Total number of generated entities across all kinds.
    pub fn total_entities(&self) -> usize {
        self.vcenters.len()
            + self.datacenters.len()
            + self.clusters.len()
            + self.hosts.len()
            + self.host_nics.len()
            + self.vms.len()
            + self.vm_guest_details.len()
            + self.datastores.len()
            + self.datastore_clusters.len()
            + self.virtual_switches.len()
            + self.networks.len()
            + self.port_groups.len()
            + self.nsx_tags.len()
    }

    /// Flatten every collection into export tables, one per entity kind,
    /// in the fixed artifact order.
    ///
    /// # Errors
    ///
    /// [`GenError::Table`] if any entity produces a row that does not
    /// match its declared schema.
    pub fn tables(&self) -> Result<Vec<Table>, GenError> {
        Ok(vec![
            Table::from_slice(&self.vcenters)?,
            Table::from_slice(&self.datacenters)?,
            Table::from_slice(&self.clusters)?,
            Table::from_slice(&self.hosts)?,
            Table::from_slice(&self.vms)?,
            Table::from_slice(&self.vm_guest_details)?,
            Table::from_slice(&self.datastores)?,
            Table::from_slice(&self.datastore_clusters)?,
            Table::from_slice(&self.virtual_switches)?,
            Table::from_slice(&self.networks)?,
            Table::from_slice(&self.port_groups)?,
            Table::from_slice(&self.nsx_tags)?,
            Table::from_slice(&self.host_nics)?,
        ])
    }
}
