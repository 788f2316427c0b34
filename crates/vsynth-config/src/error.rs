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

//! Configuration error types.
//!
//! All variants are fatal and reported before any generation begins; none
//! are retried or recoverable mid-run.

use std::path::PathBuf;
use thiserror::Error;

/// A fatal configuration error.
///
/// # Examples
///
/// ```
/// use vsynth_config::ConfigError;
///
/// let err = ConfigError::missing_section("regions");
/// assert_eq!(err.to_string(), "missing required section 'regions'");
/// ```
#[derive(Debug, Error)]
pub enum ConfigError {
    /// A required top-level section is absent from the document.
    #[error("missing required section '{section}'")]
    MissingSection {
        /// Name of the absent section.
        section: String,
    },

    /// A size key does not name any defined option.
    ///
    /// Covers both the selected `scale.size` profile and cluster-size
    /// lookups (a region's `cluster_sizes` distribution reference, or a
    /// size category with no `hosts.vm_density` bucket): the same class
    /// of "selected key not among defined options".
    #[error("invalid size key '{size}': valid options are {valid}")]
    InvalidSize {
        /// The offending key.
        size: String,
        /// Comma-separated list of defined options.
        valid: String,
    },

    /// A weighted-distribution table does not sum to 1.0 within tolerance.
    #[error("weights in '{table}' sum to {sum:.3}, expected 1.0 \u{b1} 0.01")]
    InvalidWeights {
        /// Dotted path of the offending table.
        table: String,
        /// The actual sum.
        sum: f64,
    },

    /// Two regions share a network prefix, which would produce colliding
    /// IP ranges.
    #[error("network prefix '{prefix}' is shared by regions '{first}' and '{second}'")]
    DuplicateNetworkPrefix {
        /// The shared prefix.
        prefix: String,
        /// Region that declared the prefix first.
        first: String,
        /// Region that re-declared it.
        second: String,
    },

    /// The configuration file could not be read.
    #[error("I/O error for '{path}': {message}")]
    Io {
        /// The file path that caused the error.
        path: PathBuf,
        /// The underlying error message.
        message: String,
    },

    /// The document is not valid YAML, or does not match the typed model.
    #[error("YAML parse error: {0}")]
    Parse(String),
}

impl ConfigError {
    /// Create a [`ConfigError::MissingSection`].
    pub fn missing_section(section: impl Into<String>) -> Self {
        Self::MissingSection {
            section: section.into(),
        }
    }

    /// Create a [`ConfigError::InvalidSize`] from the offending key and
    /// the defined options.
    pub fn invalid_size<I, S>(size: impl Into<String>, valid: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut options: Vec<String> = valid.into_iter().map(|s| s.as_ref().to_string()).collect();
        options.sort();
        Self::InvalidSize {
            size: size.into(),
            valid: options.join(", "),
        }
    }

    /// Create a [`ConfigError::InvalidWeights`].
    pub fn invalid_weights(table: impl Into<String>, sum: f64) -> Self {
        Self::InvalidWeights {
            table: table.into(),
            sum,
        }
    }

    /// Create a [`ConfigError::Io`] with file path context.
    pub fn io_error(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            message: source.to_string(),
        }
    }
}

impl From<serde_yaml::Error> for ConfigError {
    fn from(source: serde_yaml::Error) -> Self {
        Self::Parse(source.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn invalid_size_sorts_and_joins_options() {
        let err = ConfigError::invalid_size("huge", ["small", "medium", "large"]);
        assert_eq!(
            err.to_string(),
            "invalid size key 'huge': valid options are large, medium, small"
        );
    }

    #[test]
    fn invalid_weights_shows_sum() {
        let err = ConfigError::invalid_weights("regions", 0.9);
        let msg = err.to_string();
        assert!(msg.contains("regions"));
        assert!(msg.contains("0.900"));
    }

    #[test]
    fn duplicate_prefix_names_both_regions() {
        let err = ConfigError::DuplicateNetworkPrefix {
            prefix: "10.10".to_string(),
            first: "HQ-A".to_string(),
            second: "NA".to_string(),
        };
        let msg = err.to_string();
        assert!(msg.contains("10.10"));
        assert!(msg.contains("HQ-A"));
        assert!(msg.contains("NA"));
    }

    #[test]
    fn yaml_errors_convert_to_parse() {
        let yaml_err = serde_yaml::from_str::<serde_yaml::Value>(": : :").unwrap_err();
        let err: ConfigError = yaml_err.into();
        assert!(matches!(err, ConfigError::Parse(_)));
    }
}
