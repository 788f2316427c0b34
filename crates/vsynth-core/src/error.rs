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

//! Error types for the tabular model.

use thiserror::Error;

/// Errors raised while assembling tables.
#[derive(Debug, Clone, Error)]
pub enum TableError {
    /// A row's field count does not match the declared schema.
    ///
    /// Every record must supply every declared field, so a short or long
    /// row is rejected at insertion time rather than surfacing as a
    /// malformed artifact.
    #[error("table '{table}': row has {actual} fields, schema declares {expected}")]
    Shape {
        /// The table the row was pushed into.
        table: String,
        /// Number of columns the schema declares.
        expected: usize,
        /// Number of fields the offending row carried.
        actual: usize,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn shape_display_names_table_and_counts() {
        let err = TableError::Shape {
            table: "Clusters".to_string(),
            expected: 11,
            actual: 9,
        };
        let msg = err.to_string();
        assert!(msg.contains("Clusters"));
        assert!(msg.contains("9 fields"));
        assert!(msg.contains("declares 11"));
    }
}
