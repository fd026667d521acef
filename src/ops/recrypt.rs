// Copyright 2025 Developers of the pvac-hfhe project.
//
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Recryption: noise-density rebalancing through a zero pool.
//!
//! Adding an encryption of zero changes a ciphertext's carrier statistics
//! without changing its value; the carrier-bit permutation decorrelates
//! repeated applications.

use super::arithmetic::ct_add;
use super::encrypt::{enc_value, enc_zero_depth};
use crate::bits::BitVec;
use crate::cipher::{
    compact_edges, guard_budget, sigma_density, Cipher, CipherError, EvalKey, PubKey, SecKey,
};
use crate::config::debug_level;
use crate::random::csprng_below;

// Acceptable carrier density window and the rebalancing iteration cap.
const DENSITY_LO: f64 = 0.47;
const DENSITY_HI: f64 = 0.53;
const RECRYPT_ITERS: usize = 4;

/// Builds an evaluation key: `zero_pool` encryptions of zero carrying
/// `depth_hint` extra noise edges each, plus an encryption of one.
pub fn make_evalkey(
    pk: &PubKey,
    sk: &SecKey,
    zero_pool: usize,
    depth_hint: usize,
) -> Result<EvalKey, CipherError> {
    let mut pool = Vec::with_capacity(zero_pool);
    for _ in 0..zero_pool {
        pool.push(enc_zero_depth(pk, sk, depth_hint)?);
    }

    Ok(EvalKey {
        zero_pool: pool,
        enc_one: enc_value(pk, sk, 1)?,
    })
}

/// Permutes every edge's carrier bits by `pk.ubk.perm`, in place.
pub fn ubk_apply(pk: &PubKey, c: &mut Cipher) {
    for e in &mut c.edges {
        let mut permuted = BitVec::make(e.s.nbits);
        for i in 0..e.s.nbits {
            if e.s.bit(i) {
                permuted.set_bit(pk.ubk.perm[i] as usize);
            }
        }
        e.s = permuted;
    }
}

/// Rebalances `c` until its carrier density falls inside the target
/// window, then compacts. Decryption is unchanged: only encryptions of
/// zero are folded in.
pub fn ct_recrypt(pk: &PubKey, ek: &EvalKey, c: &Cipher) -> Result<Cipher, CipherError> {
    if ek.zero_pool.is_empty() {
        return Ok(c.clone());
    }

    let mut r = c.clone();
    for it in 0..RECRYPT_ITERS {
        let density = sigma_density(pk, &r);
        if (DENSITY_LO..=DENSITY_HI).contains(&density) {
            break;
        }
        if debug_level() >= 2 {
            eprintln!("recrypt[{it}]: density {density:.4}, mixing zero");
        }

        let z = &ek.zero_pool[csprng_below(ek.zero_pool.len() as u64) as usize];
        r = ct_add(pk, &r, z)?;
        ubk_apply(pk, &mut r);
        guard_budget(pk, &r, "recrypt")?;
    }

    Ok(compact_edges(pk, &r))
}
