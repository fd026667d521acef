// Copyright 2025 Developers of the pvac-hfhe project.
//
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

use std::fmt;
use std::fmt::Display;

/// An error from a ciphertext operation.
///
/// All variants are terminal for the current operation; the caller keeps
/// its inputs untouched.
#[derive(Clone, Debug, PartialEq, Eq)]
#[non_exhaustive]
pub enum CipherError {
    /// The edge count exceeded the budget after an operation.
    BudgetExceeded {
        op: &'static str,
        edges: usize,
        budget: usize,
    },
    /// An edge references a layer outside the layer vector.
    EdgeLayerOutOfRange {
        edge: usize,
        layer_id: u32,
        layer_count: usize,
    },
    /// An edge index lies outside `[0, B)`.
    EdgeIndexOutOfRange { edge: usize, idx: u16, b: u32 },
    /// A PROD layer references a position at or after itself, which is the
    /// only way a cycle can be expressed in the arena encoding.
    ProdReferencesLaterLayer { layer: usize, pa: u32, pb: u32 },
}

impl Display for CipherError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CipherError::BudgetExceeded { op, edges, budget } => {
                write!(f, "edge budget exceeded in {op}: {edges} edges > {budget}")
            }
            CipherError::EdgeLayerOutOfRange {
                edge,
                layer_id,
                layer_count,
            } => {
                write!(
                    f,
                    "edge {edge} references layer {layer_id} of {layer_count}"
                )
            }
            CipherError::EdgeIndexOutOfRange { edge, idx, b } => {
                write!(f, "edge {edge} has index {idx} outside [0, {b})")
            }
            CipherError::ProdReferencesLaterLayer { layer, pa, pb } => {
                write!(
                    f,
                    "product layer {layer} references a non-earlier layer ({pa}, {pb})"
                )
            }
        }
    }
}

impl std::error::Error for CipherError {}
