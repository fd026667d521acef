// Copyright 2025 Developers of the pvac-hfhe project.
//
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Homomorphic evaluation on ciphertexts.
//!
//! Addition concatenates layer vectors and re-homes edges; multiplication
//! appends a Cartesian block of product layers and aggregates edge-pair
//! contributions per (layer pair, index sum mod B, sign).

use crate::bits::BitVec;
use crate::cipher::{guard_budget, Cipher, CipherError, Edge, EdgeSign, Layer, PubKey};
use crate::field::Fp;
use std::collections::BTreeMap;

// Above this many aggregator slots ct_mul switches from the dense array
// to a sorted map; the emitted edge sequence is identical either way.
const DENSE_SLOT_LIMIT: usize = 1 << 16;

// Appends `src`'s layers to `dst`, rewriting PROD references by `off`.
fn append_layers(dst: &mut Vec<Layer>, src: &[Layer], off: u32) {
    for layer in src {
        dst.push(match layer {
            Layer::Base { seed } => Layer::Base { seed: *seed },
            Layer::Prod { pa, pb } => Layer::Prod {
                pa: pa + off,
                pb: pb + off,
            },
        });
    }
}

/// Adds two ciphertexts.
pub fn ct_add(pk: &PubKey, a: &Cipher, b: &Cipher) -> Result<Cipher, CipherError> {
    let mut layers = Vec::with_capacity(a.layers.len() + b.layers.len());
    layers.extend_from_slice(&a.layers);
    let off_b = a.layers.len() as u32;
    append_layers(&mut layers, &b.layers, off_b);

    let mut edges = Vec::with_capacity(a.edges.len() + b.edges.len());
    edges.extend_from_slice(&a.edges);
    for e in &b.edges {
        let mut e = e.clone();
        e.layer_id += off_b;
        edges.push(e);
    }

    let c = Cipher { layers, edges };
    guard_budget(pk, &c, "add")?;
    Ok(c)
}

/// Multiplies every edge weight by `s`.
pub fn ct_scale(_pk: &PubKey, a: &Cipher, s: Fp) -> Cipher {
    let mut c = a.clone();
    for e in &mut c.edges {
        e.w = e.w * s;
    }
    c
}

pub fn ct_neg(pk: &PubKey, a: &Cipher) -> Cipher {
    ct_scale(pk, a, -Fp::one())
}

pub fn ct_sub(pk: &PubKey, a: &Cipher, b: &Cipher) -> Result<Cipher, CipherError> {
    ct_add(pk, a, &ct_neg(pk, b))
}

/// Scales by the inverse of `k`. Undefined on k = 0.
pub fn ct_div_const(pk: &PubKey, a: &Cipher, k: Fp) -> Cipher {
    ct_scale(pk, a, k.inv())
}

/// Multiplies two ciphertexts.
///
/// The result carries both operands' layers followed by the Cartesian
/// PROD block in row-major (la outer, lb inner) order; that ordering, and
/// the slot-order edge emission below, keep the commitment deterministic.
pub fn ct_mul(pk: &PubKey, a: &Cipher, b: &Cipher) -> Result<Cipher, CipherError> {
    let la_count = a.layers.len();
    let lb_count = b.layers.len();

    let mut layers = Vec::with_capacity(la_count + lb_count + la_count * lb_count);
    layers.extend_from_slice(&a.layers);
    let off_b = la_count as u32;
    append_layers(&mut layers, &b.layers, off_b);

    for la in 0..la_count as u32 {
        for lb in 0..lb_count as u32 {
            layers.push(Layer::Prod {
                pa: la,
                pb: off_b + lb,
            });
        }
    }

    let base_count = (la_count + lb_count) as u32;
    let bn = pk.prm.b as usize;
    let l_prod = la_count * lb_count;

    // Aggregate w_a * w_b and the carrier XOR per
    // (la * LB + lb, (idx_a + idx_b) mod B, sign product).
    let edges = if l_prod.saturating_mul(bn) <= DENSE_SLOT_LIMIT {
        mul_aggregate_dense(pk, a, b, lb_count, base_count, bn, l_prod)
    } else {
        mul_aggregate_sparse(pk, a, b, lb_count, base_count)
    };

    let c = Cipher { layers, edges };
    guard_budget(pk, &c, "mul")?;
    Ok(c)
}

struct AggSlot {
    w: Fp,
    s: BitVec,
}

impl AggSlot {
    fn new(m_bits: usize) -> AggSlot {
        AggSlot {
            w: Fp::zero(),
            s: BitVec::make(m_bits),
        }
    }

    fn accumulate(&mut self, ea: &Edge, eb: &Edge) {
        self.w = self.w + ea.w * eb.w;
        self.s.xor_with(&ea.s);
        self.s.xor_with(&eb.s);
    }
}

fn mul_sign(ea: &Edge, eb: &Edge) -> EdgeSign {
    if ea.ch == eb.ch {
        EdgeSign::P
    } else {
        EdgeSign::M
    }
}

fn mul_aggregate_dense(
    pk: &PubKey,
    a: &Cipher,
    b: &Cipher,
    lb_count: usize,
    base_count: u32,
    bn: usize,
    l_prod: usize,
) -> Vec<Edge> {
    // Touched slots are lazily initialised; the untouched ones cost only
    // the two Option words.
    let mut acc: Vec<[Option<AggSlot>; 2]> = Vec::new();
    acc.resize_with(l_prod * bn, || [None, None]);

    for ea in &a.edges {
        for eb in &b.edges {
            let lid_idx = ea.layer_id as usize * lb_count + eb.layer_id as usize;
            let k = (ea.idx as usize + eb.idx as usize) % bn;
            let ch = mul_sign(ea, eb);

            let slot = &mut acc[lid_idx * bn + k][ch as usize];
            slot.get_or_insert_with(|| AggSlot::new(pk.prm.m_bits))
                .accumulate(ea, eb);
        }
    }

    let mut edges = Vec::new();
    for (cell, slots) in acc.into_iter().enumerate() {
        let lid_idx = cell / bn;
        let k = cell % bn;
        for (sign, slot) in slots.into_iter().enumerate() {
            if let Some(slot) = slot {
                edges.push(Edge {
                    layer_id: base_count + lid_idx as u32,
                    idx: k as u16,
                    ch: if sign == 0 { EdgeSign::P } else { EdgeSign::M },
                    w: slot.w,
                    s: slot.s,
                });
            }
        }
    }
    edges
}

fn mul_aggregate_sparse(
    pk: &PubKey,
    a: &Cipher,
    b: &Cipher,
    lb_count: usize,
    base_count: u32,
) -> Vec<Edge> {
    let bn = pk.prm.b as usize;
    let mut acc: BTreeMap<(u32, u16, EdgeSign), AggSlot> = BTreeMap::new();

    for ea in &a.edges {
        for eb in &b.edges {
            let lid_idx = ea.layer_id * lb_count as u32 + eb.layer_id;
            let k = (ea.idx as usize + eb.idx as usize) % bn;
            let ch = mul_sign(ea, eb);

            acc.entry((lid_idx, k as u16, ch))
                .or_insert_with(|| AggSlot::new(pk.prm.m_bits))
                .accumulate(ea, eb);
        }
    }

    // The sorted key order coincides with the dense emission order.
    acc.into_iter()
        .map(|((lid_idx, k, ch), slot)| Edge {
            layer_id: base_count + lid_idx,
            idx: k,
            ch,
            w: slot.w,
            s: slot.s,
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ops::{dec_value, enc_value, keygen};
    use crate::testing_tools::reduced_params;

    #[test]
    fn test_ct_add_layout() {
        let (pk, sk) = keygen(reduced_params());
        let a = enc_value(&pk, &sk, 1).unwrap();
        let b = enc_value(&pk, &sk, 2).unwrap();
        let c = ct_add(&pk, &a, &b).unwrap();

        assert_eq!(c.layers.len(), 2);
        assert_eq!(c.edges.len(), a.edges.len() + b.edges.len());
        // B's edges are re-homed past A's layers.
        for e in &c.edges[a.edges.len()..] {
            assert_eq!(e.layer_id, 1);
        }
    }

    #[test]
    fn test_ct_mul_prod_block_row_major() {
        let (pk, sk) = keygen(reduced_params());
        let a0 = enc_value(&pk, &sk, 2).unwrap();
        let a1 = enc_value(&pk, &sk, 3).unwrap();
        let a = ct_add(&pk, &a0, &a1).unwrap();
        let b = enc_value(&pk, &sk, 5).unwrap();
        let c = ct_mul(&pk, &a, &b).unwrap();

        // 2 + 1 operand layers, then a 2x1 product block.
        assert_eq!(c.layers.len(), 5);
        assert_eq!(c.layers[3], Layer::Prod { pa: 0, pb: 2 });
        assert_eq!(c.layers[4], Layer::Prod { pa: 1, pb: 2 });
        assert_eq!(dec_value(&pk, &sk, &c).unwrap().lo, 25);
    }

    #[test]
    fn test_ct_mul_dense_and_sparse_agree() {
        let (pk, sk) = keygen(reduced_params());
        let a = enc_value(&pk, &sk, 11).unwrap();
        let b = enc_value(&pk, &sk, 13).unwrap();

        let bn = pk.prm.b as usize;
        let dense = mul_aggregate_dense(&pk, &a, &b, b.layers.len(), 2, bn, 1);
        let sparse = mul_aggregate_sparse(&pk, &a, &b, b.layers.len(), 2);
        assert_eq!(dense, sparse);
    }

    #[test]
    fn test_ct_scale_and_div_const() {
        let (pk, sk) = keygen(reduced_params());
        let a = enc_value(&pk, &sk, 10).unwrap();

        let scaled = ct_scale(&pk, &a, Fp::from(4));
        assert_eq!(dec_value(&pk, &sk, &scaled).unwrap().lo, 40);

        let back = ct_div_const(&pk, &scaled, Fp::from(4));
        assert_eq!(dec_value(&pk, &sk, &back).unwrap().lo, 10);
    }

    #[test]
    fn test_ct_neg_and_sub() {
        let (pk, sk) = keygen(reduced_params());
        let a = enc_value(&pk, &sk, 9).unwrap();

        let z = ct_add(&pk, &a, &ct_neg(&pk, &a)).unwrap();
        assert!(dec_value(&pk, &sk, &z).unwrap().is_zero());

        let s = ct_sub(&pk, &a, &a).unwrap();
        assert!(dec_value(&pk, &sk, &s).unwrap().is_zero());
    }

    #[test]
    fn test_budget_exceeded_on_add() {
        let (mut pk, sk) = keygen(reduced_params());
        let a = enc_value(&pk, &sk, 1).unwrap();
        let b = enc_value(&pk, &sk, 2).unwrap();

        pk.prm.edge_budget = a.edges.len() + b.edges.len() - 1;
        assert!(matches!(
            ct_add(&pk, &a, &b),
            Err(CipherError::BudgetExceeded { op: "add", .. })
        ));
    }
}
