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

//! Named, schema'd row collections.

use crate::error::TableError;
use crate::value::Value;

/// An entity type that can flatten itself into export rows.
///
/// Implementors declare a fixed table name and column list; `to_row` must
/// produce exactly one value per declared column, in declaration order.
/// [`Table::from_slice`] enforces the arity.
pub trait Tabular {
    /// The artifact name for this entity kind (e.g. `"ESXiHosts"`).
    const TABLE: &'static str;

    /// Ordered column names.
    fn schema() -> &'static [&'static str];

    /// Flatten one entity into a row aligned with [`Self::schema`].
    fn to_row(&self) -> Vec<Value>;
}

/// A named table: ordered column names plus rows of [`Value`] cells.
///
/// Rows are kept in insertion order (generation order), which is what makes
/// exported artifacts deterministic in their ordering even though the cell
/// contents are random.
#[derive(Debug, Clone, PartialEq)]
pub struct Table {
    name: String,
    schema: Vec<String>,
    rows: Vec<Vec<Value>>,
}

impl Table {
    /// Create an empty table with the given name and column list.
    pub fn new(name: impl Into<String>, schema: &[&str]) -> Self {
        Self {
            name: name.into(),
            schema: schema.iter().map(|s| s.to_string()).collect(),
            rows: Vec::new(),
        }
    }

    /// Flatten a slice of entities into a table.
    ///
    /// # Errors
    ///
    /// Returns [`TableError::Shape`] if any entity produces a row whose
    /// field count differs from the declared schema.
    pub fn from_slice<T: Tabular>(items: &[T]) -> Result<Table, TableError> {
        let mut table = Table::new(T::TABLE, T::schema());
        table.rows.reserve(items.len());
        for item in items {
            table.push_row(item.to_row())?;
        }
        Ok(table)
    }

    /// Append a row, enforcing that it supplies every declared field.
    ///
    /// # Errors
    ///
    /// Returns [`TableError::Shape`] on a field-count mismatch.
    pub fn push_row(&mut self, row: Vec<Value>) -> Result<(), TableError> {
        if row.len() != self.schema.len() {
            return Err(TableError::Shape {
                table: self.name.clone(),
                expected: self.schema.len(),
                actual: row.len(),
            });
        }
        self.rows.push(row);
        Ok(())
    }

    /// The table (artifact) name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Ordered column names.
    pub fn schema(&self) -> &[String] {
        &self.schema
    }

    /// All rows, in insertion order.
    pub fn rows(&self) -> &[Vec<Value>] {
        &self.rows
    }

    /// Number of rows.
    pub fn len(&self) -> usize {
        self.rows.len()
    }

    /// Whether the table has no rows.
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Number of columns.
    pub fn column_count(&self) -> usize {
        self.schema.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct Widget {
        name: &'static str,
        count: u32,
    }

    impl Tabular for Widget {
        const TABLE: &'static str = "Widgets";

        fn schema() -> &'static [&'static str] {
            &["name", "count"]
        }

        fn to_row(&self) -> Vec<Value> {
            vec![Value::from(self.name), Value::from(self.count)]
        }
    }

    #[test]
    fn push_row_accepts_matching_arity() {
        let mut table = Table::new("T", &["a", "b"]);
        table
            .push_row(vec![Value::from("x"), Value::from(1u32)])
            .unwrap();
        assert_eq!(table.len(), 1);
        assert!(!table.is_empty());
    }

    #[test]
    fn push_row_rejects_short_row() {
        let mut table = Table::new("T", &["a", "b"]);
        let err = table.push_row(vec![Value::from("x")]).unwrap_err();
        assert!(matches!(
            err,
            TableError::Shape {
                expected: 2,
                actual: 1,
                ..
            }
        ));
    }

    #[test]
    fn push_row_rejects_long_row() {
        let mut table = Table::new("T", &["a"]);
        let err = table
            .push_row(vec![Value::from("x"), Value::from("y")])
            .unwrap_err();
        assert!(matches!(err, TableError::Shape { actual: 2, .. }));
    }

    #[test]
    fn from_slice_preserves_insertion_order() {
        let widgets = [
            Widget {
                name: "alpha",
                count: 1,
            },
            Widget {
                name: "bravo",
                count: 2,
            },
        ];
        let table = Table::from_slice(&widgets).unwrap();
        assert_eq!(table.name(), "Widgets");
        assert_eq!(table.schema(), &["name".to_string(), "count".to_string()]);
        assert_eq!(table.rows()[0][0], Value::from("alpha"));
        assert_eq!(table.rows()[1][0], Value::from("bravo"));
    }

    #[test]
    fn empty_table() {
        let widgets: [Widget; 0] = [];
        let table = Table::from_slice(&widgets).unwrap();
        assert!(table.is_empty());
        assert_eq!(table.column_count(), 2);
    }
}
