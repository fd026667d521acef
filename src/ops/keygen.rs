// Copyright 2025 Developers of the pvac-hfhe project.
//
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Key generation.
//!
//! The core's homomorphic correctness depends only on the invariants
//! established here: a fresh `canon_tag`, uniform secret material, a
//! digest binding the public masking matrix, a carrier-bit permutation
//! with its inverse, and a primitive B-th root of unity with its power
//! table.

use crate::bits::BitVec;
use crate::cipher::{Params, PubKey, SecKey, Ubk};
use crate::crypto::domains;
use crate::crypto::hash::{sha256_acc_u64, Sha256, XofShake};
use crate::field::Fp;
use crate::random::{csprng_below, csprng_u64};

/// Produces a key pair for `prm`.
///
/// Panics if `prm.b` does not divide p - 1; the default B = 127 divides
/// 2^127 - 2 because 127 = 2^7 - 1 divides 2^126 - 1.
pub fn keygen(prm: Params) -> (PubKey, SecKey) {
    let p_minus_1: u128 = (1 << 127) - 2;
    assert!(
        prm.b > 0 && p_minus_1 % prm.b as u128 == 0,
        "B must divide p - 1"
    );

    let canon_tag = csprng_u64();

    let prf_k = [csprng_u64(), csprng_u64(), csprng_u64(), csprng_u64()];
    let s_words = (prm.lpn_n + 63) / 64;
    let mut lpn_s_bits: Vec<u64> = (0..s_words).map(|_| csprng_u64()).collect();
    let tail = prm.lpn_n & 63;
    if tail != 0 {
        lpn_s_bits[s_words - 1] &= (1 << tail) - 1;
    }

    let h_rows = gen_h_rows(canon_tag, prm.h_col_wt, prm.m_bits);
    let h_digest = digest_h_rows(&h_rows);

    let ubk = gen_ubk(prm.m_bits);

    let omega_b = find_omega(prm.b, p_minus_1);
    let mut powg_b = Vec::with_capacity(prm.b as usize);
    let mut acc = Fp::one();
    for _ in 0..prm.b {
        powg_b.push(acc);
        acc = acc * omega_b;
    }

    let pk = PubKey {
        prm,
        canon_tag,
        h_rows,
        ubk,
        h_digest,
        omega_b,
        powg_b,
    };
    let sk = SecKey { prf_k, lpn_s_bits };

    (pk, sk)
}

// The masking matrix rows, derived from the instance tag so the matrix is
// reconstructible from the public key alone.
fn gen_h_rows(canon_tag: u64, rows: usize, m_bits: usize) -> Vec<BitVec> {
    let mut xof = XofShake::init(domains::H_GEN, &[canon_tag]);
    let words = (m_bits + 63) / 64;

    (0..rows)
        .map(|_| {
            let mut row = BitVec {
                nbits: m_bits,
                w: (0..words).map(|_| xof.take_u64()).collect(),
            };
            row.mask_tail();
            row
        })
        .collect()
}

fn digest_h_rows(rows: &[BitVec]) -> [u8; 32] {
    let mut s = Sha256::new();
    for row in rows {
        for &word in &row.w {
            sha256_acc_u64(&mut s, word);
        }
    }
    s.finish()
}

// A uniform permutation of the carrier bit positions, Fisher-Yates over
// the CSPRNG, together with its inverse.
fn gen_ubk(m_bits: usize) -> Ubk {
    let mut perm: Vec<u32> = (0..m_bits as u32).collect();
    for i in (1..m_bits).rev() {
        let j = csprng_below(i as u64 + 1) as usize;
        perm.swap(i, j);
    }

    let mut inv = vec![0_u32; m_bits];
    for (i, &p) in perm.iter().enumerate() {
        inv[p as usize] = i as u32;
    }

    Ubk { perm, inv }
}

// The smallest c >= 2 with c^((p-1)/B) != 1 yields an element of order
// exactly B, since B is prime in all supported parameter sets.
fn find_omega(b: u32, p_minus_1: u128) -> Fp {
    let exp = p_minus_1 / b as u128;
    let mut c = 2_u64;
    loop {
        let omega = Fp::from(c).pow_u128(exp);
        if omega != Fp::one() {
            return omega;
        }
        c += 1;
    }
}
