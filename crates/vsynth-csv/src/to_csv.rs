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

//! Write tables as CSV artifacts.

use crate::error::{CsvError, Result};
use std::io::Write;
use std::path::Path;
use vsynth_core::{Table, Value};

/// Configuration for CSV output.
#[derive(Debug, Clone)]
pub struct ToCsvConfig {
    /// Field delimiter (default: ',').
    pub delimiter: u8,
    /// Include the header row (default: true).
    pub include_headers: bool,
    /// Quote style for fields (default: necessary).
    pub quote_style: csv::QuoteStyle,
}

impl Default for ToCsvConfig {
    fn default() -> Self {
        Self {
            delimiter: b',',
            include_headers: true,
            quote_style: csv::QuoteStyle::Necessary,
        }
    }
}

/// Render a table to a CSV string.
///
/// # Example
///
/// ```
/// use vsynth_core::{Table, Value};
/// use vsynth_csv::to_csv_string;
///
/// let mut table = Table::new("Widgets", &["name", "count"]);
/// table.push_row(vec![Value::from("sprocket"), Value::from(3)]).unwrap();
///
/// assert_eq!(to_csv_string(&table).unwrap(), "name,count\nsprocket,3\n");
/// ```
pub fn to_csv_string(table: &Table) -> Result<String> {
    to_csv_string_with_config(table, ToCsvConfig::default())
}

/// Render a table to a CSV string with custom configuration.
pub fn to_csv_string_with_config(table: &Table, config: ToCsvConfig) -> Result<String> {
    // Rough pre-allocation: 16 bytes per cell plus the header.
    let estimated = table.len() * table.column_count() * 16 + 256;
    let mut buffer = Vec::with_capacity(estimated);
    to_csv_writer_with_config(table, &mut buffer, config)?;
    String::from_utf8(buffer).map_err(|e| CsvError::write(table.name(), e))
}

/// Write a table as a CSV file.
///
/// # Errors
///
/// Returns [`CsvError::Io`] if the file cannot be created, and any writer
/// error [`to_csv_writer`] produces.
pub fn write_table(table: &Table, path: &Path) -> Result<()> {
    write_table_with_config(table, path, ToCsvConfig::default())
}

/// Write a table as a CSV file with custom configuration.
pub fn write_table_with_config(table: &Table, path: &Path, config: ToCsvConfig) -> Result<()> {
    let file = std::fs::File::create(path).map_err(|e| CsvError::io_error(path, e))?;
    to_csv_writer_with_config(table, file, config)
}

/// Write a table in CSV format to any writer.
pub fn to_csv_writer<W: Write>(table: &Table, writer: W) -> Result<()> {
    to_csv_writer_with_config(table, writer, ToCsvConfig::default())
}

/// Write a table in CSV format to any writer, with custom configuration.
///
/// Every row's arity is re-checked against the header; missing fields are
/// forbidden in artifacts.
pub fn to_csv_writer_with_config<W: Write>(
    table: &Table,
    writer: W,
    config: ToCsvConfig,
) -> Result<()> {
    let mut wtr = csv::WriterBuilder::new()
        .delimiter(config.delimiter)
        .quote_style(config.quote_style)
        .from_writer(writer);

    if config.include_headers {
        wtr.write_record(table.schema())
            .map_err(|e| CsvError::write(table.name(), e))?;
    }

    for row in table.rows() {
        if row.len() != table.column_count() {
            return Err(CsvError::Shape {
                table: table.name().to_string(),
                expected: table.column_count(),
                actual: row.len(),
            });
        }
        let record: Vec<String> = row.iter().map(value_to_field).collect();
        wtr.write_record(&record)
            .map_err(|e| CsvError::write(table.name(), e))?;
    }

    wtr.flush().map_err(|e| CsvError::write(table.name(), e))
}

/// Render one cell for CSV; the writer handles quoting.
fn value_to_field(value: &Value) -> String {
    match value {
        Value::Bool(b) => b.to_string(),
        Value::Int(n) => n.to_string(),
        Value::Float(f) => f.to_string(),
        Value::String(s) => s.clone(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

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
                Value::from("cog, large"),
                Value::from(7u32),
                Value::from(1.5),
                Value::from(false),
            ])
            .unwrap();
        table
    }

    #[test]
    fn renders_header_and_rows() {
        let csv = to_csv_string(&sample_table()).unwrap();
        let expected = "name,count,ratio,active\n\
                        sprocket,3,0.25,true\n\
                        \"cog, large\",7,1.5,false\n";
        assert_eq!(csv, expected);
    }

    #[test]
    fn headers_can_be_suppressed() {
        let config = ToCsvConfig {
            include_headers: false,
            ..Default::default()
        };
        let csv = to_csv_string_with_config(&sample_table(), config).unwrap();
        assert!(!csv.contains("name,count"));
        assert!(csv.starts_with("sprocket"));
    }

    #[test]
    fn custom_delimiter() {
        let config = ToCsvConfig {
            delimiter: b';',
            ..Default::default()
        };
        let csv = to_csv_string_with_config(&sample_table(), config).unwrap();
        assert!(csv.starts_with("name;count;ratio;active\n"));
    }

    #[test]
    fn empty_table_renders_header_only() {
        let table = Table::new("Empty", &["a", "b"]);
        assert_eq!(to_csv_string(&table).unwrap(), "a,b\n");
    }

    #[test]
    fn fields_with_commas_are_quoted() {
        let csv = to_csv_string(&sample_table()).unwrap();
        assert!(csv.contains("\"cog, large\""));
    }

    #[test]
    fn writes_to_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("Widgets.csv");
        write_table(&sample_table(), &path).unwrap();
        let content = std::fs::read_to_string(&path).unwrap();
        assert!(content.starts_with("name,count"));
        assert_eq!(content.lines().count(), 3);
    }

    #[test]
    fn io_error_reports_path() {
        let err = write_table(
            &sample_table(),
            Path::new("/nonexistent-dir/Widgets.csv"),
        )
        .unwrap_err();
        assert!(matches!(err, CsvError::Io { .. }));
        assert!(err.to_string().contains("nonexistent-dir"));
    }
}
