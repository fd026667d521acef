// Copyright 2025 Developers of the pvac-hfhe project.
//
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Structural invariants, the edge budget, and canonicalising compaction.

use super::error::CipherError;
use super::types::{Cipher, Edge, EdgeSign, Layer, PubKey};
use crate::bits::BitVec;
use crate::field::Fp;
use std::collections::BTreeMap;

/// Checks the structural invariants of a ciphertext against `pk`.
pub fn validate(pk: &PubKey, c: &Cipher) -> Result<(), CipherError> {
    for (i, layer) in c.layers.iter().enumerate() {
        if let Layer::Prod { pa, pb } = layer {
            if *pa as usize >= i || *pb as usize >= i {
                return Err(CipherError::ProdReferencesLaterLayer {
                    layer: i,
                    pa: *pa,
                    pb: *pb,
                });
            }
        }
    }

    for (i, e) in c.edges.iter().enumerate() {
        if e.layer_id as usize >= c.layers.len() {
            return Err(CipherError::EdgeLayerOutOfRange {
                edge: i,
                layer_id: e.layer_id,
                layer_count: c.layers.len(),
            });
        }
        if e.idx as u32 >= pk.prm.b {
            return Err(CipherError::EdgeIndexOutOfRange {
                edge: i,
                idx: e.idx,
                b: pk.prm.b,
            });
        }
    }

    Ok(())
}

/// Rejects a ciphertext whose edge count exceeds the budget.
///
/// Breaching the budget is fatal at this layer; recryption exists to keep
/// ciphertexts below it.
pub fn guard_budget(pk: &PubKey, c: &Cipher, op: &'static str) -> Result<(), CipherError> {
    if c.edges.len() > pk.prm.edge_budget {
        return Err(CipherError::BudgetExceeded {
            op,
            edges: c.edges.len(),
            budget: pk.prm.edge_budget,
        });
    }
    Ok(())
}

/// Coalesces edges with identical (layer_id, idx, ch), summing weights and
/// XOR-ing carriers, and drops edges whose coalesced weight is zero.
///
/// A pure function of (c, pk): the output edge order is the sorted key
/// order, so equal multisets compact to equal ciphertexts. Decryption is
/// preserved because the fold is linear in the weights.
pub fn compact_edges(pk: &PubKey, c: &Cipher) -> Cipher {
    let mut slots: BTreeMap<(u32, u16, EdgeSign), (Fp, BitVec)> = BTreeMap::new();

    for e in &c.edges {
        let slot = slots
            .entry((e.layer_id, e.idx, e.ch))
            .or_insert_with(|| (Fp::zero(), BitVec::make(pk.prm.m_bits)));
        slot.0 = slot.0 + e.w;
        slot.1.xor_with(&e.s);
    }

    let edges = slots
        .into_iter()
        .filter(|(_, (w, _))| !w.is_zero())
        .map(|((layer_id, idx, ch), (w, s))| Edge {
            layer_id,
            idx,
            ch,
            w,
            s,
        })
        .collect();

    Cipher {
        layers: c.layers.clone(),
        edges,
    }
}

/// Mean density of set carrier bits over all edges; 0.5 for an edgeless
/// ciphertext.
pub fn sigma_density(pk: &PubKey, c: &Cipher) -> f64 {
    if c.edges.is_empty() || pk.prm.m_bits == 0 {
        return 0.5;
    }

    let set: usize = c.edges.iter().map(|e| e.s.popcnt()).sum();
    set as f64 / (c.edges.len() * pk.prm.m_bits) as f64
}
