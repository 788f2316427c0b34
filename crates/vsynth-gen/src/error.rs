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

//! Generation error types.

use thiserror::Error;
use vsynth_core::TableError;

/// A fatal generation-time error.
///
/// Generation either completes or aborts; no error here is recoverable
/// mid-run and no partial topology is handed to the exporter.
#[derive(Debug, Error)]
pub enum GenError {
    /// A referenced parent entity does not exist.
    ///
    /// Entities are created in strict dependency order, so a failed parent
    /// lookup means an earlier phase violated its invariant. Producing an
    /// orphaned record would be worse than aborting.
    #[error("internal consistency error: {kind} reference '{reference}' does not resolve")]
    InternalConsistency {
        /// The kind of reference that failed to resolve.
        kind: &'static str,
        /// The unresolved reference value.
        reference: String,
    },

    /// Flattening an entity collection produced a malformed row.
    #[error(transparent)]
    Table(#[from] TableError),
}

impl GenError {
    /// Create an [`GenError::InternalConsistency`] for an unresolved
    /// reference.
    pub fn consistency(kind: &'static str, reference: impl Into<String>) -> Self {
        Self::InternalConsistency {
            kind,
            reference: reference.into(),
        }
    }
}
