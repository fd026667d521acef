// Copyright 2025 Developers of the pvac-hfhe project.
//
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Encryption: one fresh BASE layer whose signed edge fold equals the
//! plaintext times the layer mask.

use crate::bits::BitVec;
use crate::cipher::{
    guard_budget, Cipher, CipherError, Edge, EdgeSign, Layer, Nonce128, PubKey, RSeed, SecKey,
};
use crate::crypto::hash::XofShake;
use crate::crypto::{domains, prf_r};
use crate::field::Fp;
use crate::random::{csprng_below, csprng_u64, rand_fp_nonzero};

// Noise edges per fresh ciphertext, in addition to the balance edge.
// Kept at one: per-slot aggregation caps the output of a squaring chain
// at 2B edges per active layer pair, and wider fresh ciphertexts would
// saturate that cap two squarings in.
const FRESH_NOISE_EDGES: usize = 1;

// The layer tag is bound to the key instance and the nonce rather than
// drawn independently, so a seed is fully determined by its nonce.
fn derive_ztag(pk: &PubKey, nonce: &Nonce128) -> u64 {
    XofShake::init(domains::ZTAG, &[pk.canon_tag, nonce.lo, nonce.hi]).take_u64()
}

/// Encrypts the field element `m`.
pub fn enc_fp(pk: &PubKey, sk: &SecKey, m: Fp) -> Result<Cipher, CipherError> {
    enc_with_noise(pk, sk, m, FRESH_NOISE_EDGES)
}

/// Encrypts the integer `v`.
pub fn enc_value(pk: &PubKey, sk: &SecKey, v: u64) -> Result<Cipher, CipherError> {
    enc_fp(pk, sk, Fp::from(v))
}

/// Encrypts zero with `extra` additional noise edges, for the recryption
/// zero pool.
pub fn enc_zero_depth(pk: &PubKey, sk: &SecKey, extra: usize) -> Result<Cipher, CipherError> {
    enc_with_noise(pk, sk, Fp::zero(), FRESH_NOISE_EDGES + extra)
}

fn enc_with_noise(
    pk: &PubKey,
    sk: &SecKey,
    m: Fp,
    noise_edges: usize,
) -> Result<Cipher, CipherError> {
    let nonce = Nonce128::fresh();
    let seed = RSeed {
        ztag: derive_ztag(pk, &nonce),
        nonce,
    };
    let r = prf_r(pk, sk, &seed);

    let b = pk.prm.b;
    let mut edges = Vec::with_capacity(noise_edges + 1);

    // Noise edges: uniform index, sign, and nonzero weight. Their signed
    // g-weighted sum is tracked so the balance edge can cancel it.
    let mut partial = Fp::zero();
    for _ in 0..noise_edges {
        let idx = csprng_below(b as u64) as u16;
        let ch = if csprng_u64() & 1 == 0 {
            EdgeSign::P
        } else {
            EdgeSign::M
        };
        let w = rand_fp_nonzero();

        let term = w * pk.powg_b[idx as usize];
        partial = match ch {
            EdgeSign::P => partial + term,
            EdgeSign::M => partial - term,
        };

        edges.push(Edge {
            layer_id: 0,
            idx,
            ch,
            w,
            s: BitVec::random(pk.prm.m_bits),
        });
    }

    // Balance edge: w * g^idx closes the fold to m * R, so decryption
    // recovers exactly m after the mask inversion. Its index avoids the
    // noise indices, keeping the fresh index set full size.
    let idx = loop {
        let idx = csprng_below(b as u64) as u16;
        if noise_edges >= b as usize || !edges.iter().any(|e| e.idx == idx) {
            break idx;
        }
    };
    let g_inv = pk.powg_b[((b - idx as u32) % b) as usize];
    let w = (m * r - partial) * g_inv;
    edges.push(Edge {
        layer_id: 0,
        idx,
        ch: EdgeSign::P,
        w,
        s: BitVec::random(pk.prm.m_bits),
    });

    let c = Cipher {
        layers: vec![Layer::Base { seed }],
        edges,
    };
    guard_budget(pk, &c, "enc")?;
    Ok(c)
}
