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

//! Write tables as Parquet artifacts.
//!
//! Row order is preserved: table row `i` becomes Parquet row `i`. Column
//! types (Utf8/Int64/Float64/Boolean) are inferred from the first row;
//! generated tables are type-uniform per column by construction, and any
//! deviation is reported rather than coerced.

use std::path::Path;
use std::sync::Arc;

use arrow::array::{ArrayRef, BooleanArray, Float64Array, Int64Array, StringArray};
use arrow::datatypes::{DataType, Field, Schema};
use arrow::record_batch::RecordBatch;
use parquet::arrow::ArrowWriter;
use parquet::basic::Compression;
use parquet::file::metadata::KeyValue;
use parquet::file::properties::{WriterProperties, WriterVersion};

use crate::error::{ParquetError, Result};
use vsynth_core::{Table, Value};

/// Configuration for Parquet writing.
#[derive(Debug, Clone)]
pub struct ToParquetConfig {
    /// Compression algorithm to use (default: SNAPPY).
    pub compression: Compression,
    /// Writer version (default: 2.0).
    pub writer_version: WriterVersion,
}

impl Default for ToParquetConfig {
    fn default() -> Self {
        Self {
            compression: Compression::SNAPPY,
            writer_version: WriterVersion::PARQUET_2_0,
        }
    }
}

/// Write a table as a Parquet file.
///
/// # Errors
///
/// Returns [`ParquetError::Io`] if the file cannot be written, and any
/// conversion error [`to_parquet_bytes`] produces.
pub fn write_table(table: &Table, path: &Path) -> Result<()> {
    write_table_with_config(table, path, &ToParquetConfig::default())
}

/// Write a table as a Parquet file with custom configuration.
pub fn write_table_with_config(
    table: &Table,
    path: &Path,
    config: &ToParquetConfig,
) -> Result<()> {
    let bytes = to_parquet_bytes_with_config(table, config)?;
    std::fs::write(path, bytes).map_err(|e| ParquetError::io_error(path, e))
}

/// Convert a table to Parquet bytes.
///
/// # Example
///
/// ```
/// use vsynth_core::{Table, Value};
/// use vsynth_parquet::to_parquet_bytes;
///
/// let mut table = Table::new("Widgets", &["name", "count"]);
/// table.push_row(vec![Value::from("sprocket"), Value::from(3)]).unwrap();
/// let bytes = to_parquet_bytes(&table).unwrap();
/// assert!(!bytes.is_empty());
/// ```
pub fn to_parquet_bytes(table: &Table) -> Result<Vec<u8>> {
    to_parquet_bytes_with_config(table, &ToParquetConfig::default())
}

/// Convert a table to Parquet bytes with custom configuration.
pub fn to_parquet_bytes_with_config(table: &Table, config: &ToParquetConfig) -> Result<Vec<u8>> {
    let schema = build_schema(table)?;
    let batch = build_record_batch(table, Arc::clone(&schema))?;

    let props = WriterProperties::builder()
        .set_compression(config.compression)
        .set_writer_version(config.writer_version)
        .set_key_value_metadata(Some(vec![KeyValue::new(
            "vsynth:table".to_string(),
            table.name().to_string(),
        )]))
        .build();

    // Parquet header/footer and metadata need a few KB even for tiny tables.
    let mut buffer = Vec::with_capacity(16 * 1024);
    let mut writer = ArrowWriter::try_new(&mut buffer, schema, Some(props))
        .map_err(|e| ParquetError::write(table.name(), e))?;
    writer
        .write(&batch)
        .map_err(|e| ParquetError::write(table.name(), e))?;
    writer
        .close()
        .map_err(|e| ParquetError::write(table.name(), e))?;

    Ok(buffer)
}

/// Infer the Arrow schema from the table's first row.
///
/// An empty table gets all-Utf8 columns so a valid (schema-only) artifact
/// is still produced.
fn build_schema(table: &Table) -> Result<Arc<Schema>> {
    let first = table.rows().first();
    let mut fields = Vec::with_capacity(table.column_count());
    for (idx, column) in table.schema().iter().enumerate() {
        let data_type = match first.map(|row| &row[idx]) {
            Some(Value::Bool(_)) => DataType::Boolean,
            Some(Value::Int(_)) => DataType::Int64,
            Some(Value::Float(_)) => DataType::Float64,
            Some(Value::String(_)) | None => DataType::Utf8,
        };
        fields.push(Field::new(column.clone(), data_type, false));
    }
    Ok(Arc::new(Schema::new(fields)))
}

fn build_record_batch(table: &Table, schema: Arc<Schema>) -> Result<RecordBatch> {
    for row in table.rows() {
        if row.len() != table.column_count() {
            return Err(ParquetError::Shape {
                table: table.name().to_string(),
                expected: table.column_count(),
                actual: row.len(),
            });
        }
    }

    let mut columns: Vec<ArrayRef> = Vec::with_capacity(table.column_count());
    for (idx, field) in schema.fields().iter().enumerate() {
        let array: ArrayRef = match field.data_type() {
            DataType::Boolean => {
                Arc::new(BooleanArray::from(collect_column(table, idx, |v| {
                    v.as_bool()
                })?))
            }
            DataType::Int64 => Arc::new(Int64Array::from(collect_column(table, idx, |v| {
                v.as_int()
            })?)),
            DataType::Float64 => {
                Arc::new(Float64Array::from(collect_column(table, idx, |v| {
                    v.as_float()
                })?))
            }
            _ => Arc::new(StringArray::from(collect_column(table, idx, |v| {
                v.as_str().map(str::to_string)
            })?)),
        };
        columns.push(array);
    }

    RecordBatch::try_new(schema, columns).map_err(|e| ParquetError::write(table.name(), e))
}

fn collect_column<T>(
    table: &Table,
    idx: usize,
    extract: impl Fn(&Value) -> Option<T>,
) -> Result<Vec<T>> {
    let mut out = Vec::with_capacity(table.len());
    for row in table.rows() {
        let value = &row[idx];
        out.push(extract(value).ok_or_else(|| ParquetError::TypeMismatch {
            table: table.name().to_string(),
            column: table.schema()[idx].clone(),
            expected: table
                .rows()
                .first()
                .map(|r| r[idx].type_name())
                .unwrap_or("string"),
            actual: value.type_name(),
        })?);
    }
    Ok(out)
}

#[cfg(test)]
mod tests {
    use super::*;
    use bytes::Bytes;
    use parquet::arrow::arrow_reader::ParquetRecordBatchReaderBuilder;

    fn sample_table() -> Table {
        let mut table = Table::new("Widgets", &["name", "count", "ratio", "active"]);
        table
            .push_row(vec![
                Value::from("sprocket"),
                Value::from(3u32),
                Value::from(0.25),
                Value::from(true),
            ])
            .unwrap();
        table
            .push_row(vec![
                Value::from("cog"),
                Value::from(7u32),
                Value::from(1.5),
                Value::from(false),
            ])
            .unwrap();
        table
    }

    #[test]
    fn round_trips_through_arrow_reader() {
        let bytes = to_parquet_bytes(&sample_table()).unwrap();
        let reader = ParquetRecordBatchReaderBuilder::try_new(Bytes::from(bytes))
            .unwrap()
            .build()
            .unwrap();
        let batches: Vec<_> = reader.map(|b| b.unwrap()).collect();
        let rows: usize = batches.iter().map(|b| b.num_rows()).sum();
        assert_eq!(rows, 2);

        let schema = batches[0].schema();
        let names: Vec<&str> = schema.fields().iter().map(|f| f.name().as_str()).collect();
        assert_eq!(names, ["name", "count", "ratio", "active"]);
        assert_eq!(schema.field(1).data_type(), &DataType::Int64);
        assert_eq!(schema.field(2).data_type(), &DataType::Float64);
        assert_eq!(schema.field(3).data_type(), &DataType::Boolean);
    }

    #[test]
    fn table_name_is_stored_in_metadata() {
        let bytes = to_parquet_bytes(&sample_table()).unwrap();
        let builder = ParquetRecordBatchReaderBuilder::try_new(Bytes::from(bytes)).unwrap();
        let metadata = builder.metadata().file_metadata().key_value_metadata();
        let entry = metadata
            .and_then(|kv| kv.iter().find(|kv| kv.key == "vsynth:table"))
            .expect("metadata entry present");
        assert_eq!(entry.value.as_deref(), Some("Widgets"));
    }

    #[test]
    fn empty_table_produces_valid_artifact() {
        let table = Table::new("Empty", &["a", "b"]);
        let bytes = to_parquet_bytes(&table).unwrap();
        let reader = ParquetRecordBatchReaderBuilder::try_new(Bytes::from(bytes))
            .unwrap()
            .build()
            .unwrap();
        let rows: usize = reader.map(|b| b.unwrap().num_rows()).sum();
        assert_eq!(rows, 0);
    }

    #[test]
    fn mixed_column_types_are_rejected() {
        let mut table = Table::new("Bad", &["v"]);
        table.push_row(vec![Value::from(1i64)]).unwrap();
        table.push_row(vec![Value::from("two")]).unwrap();
        let err = to_parquet_bytes(&table).unwrap_err();
        assert!(matches!(err, ParquetError::TypeMismatch { .. }));
    }

    #[test]
    fn writes_to_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("Widgets.parquet");
        write_table(&sample_table(), &path).unwrap();
        let file = std::fs::File::open(&path).unwrap();
        let reader = ParquetRecordBatchReaderBuilder::try_new(file)
            .unwrap()
            .build()
            .unwrap();
        let rows: usize = reader.map(|b| b.unwrap().num_rows()).sum();
        assert_eq!(rows, 2);
    }
}
