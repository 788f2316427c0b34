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

//! Table → Parquet artifact writing.
//!
//! One Parquet file per entity kind, with column types inferred from the
//! table contents (Utf8/Int64/Float64/Boolean), SNAPPY compression by
//! default, and the table name stored in the file's key-value metadata.

mod error;
mod to_parquet;

pub use error::{ParquetError, Result};
pub use to_parquet::{
    to_parquet_bytes, to_parquet_bytes_with_config, write_table, write_table_with_config,
    ToParquetConfig,
};
