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

//! Hierarchical synthetic-topology generation.
//!
//! This crate derives a referentially consistent fake vSphere topology
//! (vCenter → Datacenter → Cluster → Host → VM → Network) from a resolved
//! configuration, plus a small unrelated sample-sales dataset.
//!
//! Control flows strictly downward through the phases of
//! [`TopologyGenerator`]; aggregate fields on clusters are populated by
//! post-passes after their child collections are complete. Everything a
//! run produces lives on one [`GenerationContext`], making the pipeline a
//! function of (config, random source) → context.
//!
//! Generators are parameterized over [`rand::Rng`], so callers decide
//! whether a run is seeded (`StdRng::seed_from_u64`) or drawn from
//! entropy.

pub mod context;
pub mod entities;
mod error;
pub mod sales;
pub mod sampler;
mod topology;

pub use context::GenerationContext;
pub use error::GenError;
pub use sales::{generate_sales, SalesRecord, DEFAULT_SALES_RECORDS};
pub use topology::{
    TopologyGenerator, ASSOCIATED_VM_CAP, NETWORK_PURPOSES, NETWORK_SEGMENTS, TAG_CATEGORIES,
    VCENTER_BUILD, VCENTER_VERSION,
};
