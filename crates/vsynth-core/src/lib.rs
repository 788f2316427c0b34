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

//! Core tabular data model for VSynth.
//!
//! This crate provides the building blocks shared by every other VSynth
//! crate:
//!
//! - [`Value`]: the scalar cell type carried by every exported column
//! - [`Table`]: a named, schema'd, arity-checked row collection, the unit
//!   handed to the CSV and Parquet writers
//! - [`Tabular`]: the trait an entity type implements to declare its export
//!   schema and flatten itself into a row
//! - [`MorefAllocator`] / [`MorefKind`]: managed-object-reference style
//!   identifier allocation (per-kind monotone counters plus UUID-derived
//!   opaque references)
//!
//! # Examples
//!
//! ```
//! use vsynth_core::{Table, Value};
//!
//! let mut table = Table::new("Widgets", &["name", "count"]);
//! table.push_row(vec![Value::from("sprocket"), Value::from(3)]).unwrap();
//!
//! assert_eq!(table.len(), 1);
//! assert!(table.push_row(vec![Value::from("short row")]).is_err());
//! ```

mod error;
mod moref;
mod table;
mod value;

pub use error::TableError;
pub use moref::{MorefAllocator, MorefKind, MOREF_BASE};
pub use table::{Table, Tabular};
pub use value::Value;
