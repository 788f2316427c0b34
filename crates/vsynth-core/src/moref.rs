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

//! Managed-object-reference style identifier allocation.
//!
//! Two flavors of identifier are issued, mirroring how the platform being
//! imitated exposes references:
//!
//! - **Sequential morefs** for capacity-bound kinds (clusters, hosts, VMs,
//!   datastores, networks, tags): a per-kind counter seeded at
//!   [`MOREF_BASE`], formatted as `{prefix}-{n}`.
//! - **Opaque references** for vCenters and datacenters: a short
//!   UUID-derived hex suffix, via [`MorefAllocator::opaque`].
//!
//! Within one allocator, no two identifiers of the same kind are ever
//! equal.

use std::collections::HashMap;
use uuid::Uuid;

/// First sequence number issued for every sequential kind.
pub const MOREF_BASE: u64 = 1000;

/// Entity kinds that draw from sequential counters.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MorefKind {
    /// Compute cluster (`domain-c1000`).
    Cluster,
    /// ESXi host (`host-1000`).
    Host,
    /// Virtual machine (`vm-1000`).
    Vm,
    /// Datastore (`datastore-1000`).
    Datastore,
    /// Datastore cluster (`dsc-1000`).
    DatastoreCluster,
    /// Distributed virtual switch (`dvs-1000`).
    VirtualSwitch,
    /// Network (`network-1000`).
    Network,
    /// Port group (`pg-1000`).
    PortGroup,
    /// NSX tag (`tag-1000`).
    Tag,
}

impl MorefKind {
    /// Format a sequence number as this kind's moref string.
    pub fn format(self, seq: u64) -> String {
        match self {
            // Cluster morefs have no separator, matching the platform's
            // `domain-cNNNN` convention.
            MorefKind::Cluster => format!("domain-c{}", seq),
            MorefKind::Host => format!("host-{}", seq),
            MorefKind::Vm => format!("vm-{}", seq),
            MorefKind::Datastore => format!("datastore-{}", seq),
            MorefKind::DatastoreCluster => format!("dsc-{}", seq),
            MorefKind::VirtualSwitch => format!("dvs-{}", seq),
            MorefKind::Network => format!("network-{}", seq),
            MorefKind::PortGroup => format!("pg-{}", seq),
            MorefKind::Tag => format!("tag-{}", seq),
        }
    }
}

/// Per-kind monotone identifier allocator.
///
/// # Examples
///
/// ```
/// use vsynth_core::{MorefAllocator, MorefKind};
///
/// let mut morefs = MorefAllocator::new();
/// assert_eq!(morefs.next(MorefKind::Host), "host-1000");
/// assert_eq!(morefs.next(MorefKind::Host), "host-1001");
/// assert_eq!(morefs.next(MorefKind::Vm), "vm-1000");
/// ```
#[derive(Debug, Default)]
pub struct MorefAllocator {
    counters: HashMap<MorefKind, u64>,
}

impl MorefAllocator {
    /// Create an allocator with all counters at [`MOREF_BASE`].
    pub fn new() -> Self {
        Self::default()
    }

    /// Reserve the next sequence number for a kind, incrementing after
    /// issuance.
    pub fn reserve(&mut self, kind: MorefKind) -> u64 {
        let counter = self.counters.entry(kind).or_insert(MOREF_BASE);
        let seq = *counter;
        *counter += 1;
        seq
    }

    /// Reserve and format the next moref for a kind.
    pub fn next(&mut self, kind: MorefKind) -> String {
        let seq = self.reserve(kind);
        kind.format(seq)
    }

    /// How many identifiers of a kind have been issued so far.
    pub fn issued(&self, kind: MorefKind) -> u64 {
        self.counters.get(&kind).map_or(0, |c| c - MOREF_BASE)
    }

    /// Produce an opaque platform-style reference: `{prefix}-{8 hex}`.
    ///
    /// Used for vCenters and datacenters, whose identifiers on the real
    /// platform are not small sequential integers.
    pub fn opaque(prefix: &str) -> String {
        let hex = Uuid::new_v4().simple().to_string();
        format!("{}-{}", prefix, &hex[..8])
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn counters_start_at_base_and_increment() {
        let mut morefs = MorefAllocator::new();
        assert_eq!(morefs.next(MorefKind::Cluster), "domain-c1000");
        assert_eq!(morefs.next(MorefKind::Cluster), "domain-c1001");
        assert_eq!(morefs.issued(MorefKind::Cluster), 2);
    }

    #[test]
    fn kinds_are_independent() {
        let mut morefs = MorefAllocator::new();
        morefs.next(MorefKind::Host);
        assert_eq!(morefs.next(MorefKind::Vm), "vm-1000");
        assert_eq!(morefs.issued(MorefKind::Datastore), 0);
    }

    #[test]
    fn no_reuse_within_kind() {
        let mut morefs = MorefAllocator::new();
        let mut seen = HashSet::new();
        for _ in 0..500 {
            assert!(seen.insert(morefs.next(MorefKind::Vm)));
        }
    }

    #[test]
    fn format_prefixes() {
        assert_eq!(MorefKind::Cluster.format(1234), "domain-c1234");
        assert_eq!(MorefKind::DatastoreCluster.format(1000), "dsc-1000");
        assert_eq!(MorefKind::VirtualSwitch.format(1000), "dvs-1000");
        assert_eq!(MorefKind::PortGroup.format(1007), "pg-1007");
    }

    #[test]
    fn opaque_refs_carry_prefix_and_hex_suffix() {
        let moref = MorefAllocator::opaque("vc");
        assert!(moref.starts_with("vc-"));
        let suffix = &moref["vc-".len()..];
        assert_eq!(suffix.len(), 8);
        assert!(suffix.chars().all(|c| c.is_ascii_hexdigit()));
    }

    #[test]
    fn opaque_refs_differ() {
        assert_ne!(
            MorefAllocator::opaque("datacenter"),
            MorefAllocator::opaque("datacenter")
        );
    }
}
