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

//! Table → CSV artifact writing.
//!
//! One artifact per entity kind: a fixed header row matching the table's
//! schema, then one record per row. Quoting is applied as needed and the
//! delimiter is configurable via [`ToCsvConfig`].

mod error;
mod to_csv;

pub use error::{CsvError, Result};
pub use to_csv::{
    to_csv_string, to_csv_string_with_config, to_csv_writer, to_csv_writer_with_config,
    write_table, write_table_with_config, ToCsvConfig,
};
