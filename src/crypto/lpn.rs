// Copyright 2025 Developers of the pvac-hfhe project.
//
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! The LPN-based pseudorandom mask R(seed).
//!
//! Each layer seed is expanded into lpn_t noisy parity samples of the
//! secret, compressed through a seed-dependent Toeplitz extractor, and
//! mapped into the nonzero part of the field. Three domain-separated cores
//! are multiplied to broaden the output distribution.

use super::domains;
use super::hash::XofShake;
use super::toeplitz::{hash_to_fp_nonzero, toep_127};
use crate::bits::parity64;
use crate::cipher::{PubKey, RSeed, SecKey};
use crate::field::Fp;

// Attempts at drawing a Toeplitz top row before giving up on avoiding the
// multiplicative identity.
const TOEPLITZ_ATTEMPTS: usize = 16;

// prf_k || canon_tag || ztag || nonce: the key stream fed to every XOF
// involved in one mask computation.
fn key_stream(pk: &PubKey, sk: &SecKey, seed: &RSeed) -> [u64; 8] {
    [
        sk.prf_k[0],
        sk.prf_k[1],
        sk.prf_k[2],
        sk.prf_k[3],
        pk.canon_tag,
        seed.ztag,
        seed.nonce.lo,
        seed.nonce.hi,
    ]
}

// y[r] = <row_r, s> xor e_r, with row_r drawn from the XOF and e_r a
// Bernoulli(tau) error bit. The result is packed little-endian with the
// tail above lpn_t left zero.
fn lpn_ybits(pk: &PubKey, sk: &SecKey, seed: &RSeed, dom: &str) -> Vec<u64> {
    let t = pk.prm.lpn_t;
    let s_words = (pk.prm.lpn_n + 63) / 64;
    debug_assert!(sk.lpn_s_bits.len() >= s_words);

    let mut xof = XofShake::init(dom, &key_stream(pk, sk, seed));
    let mut ybits = vec![0_u64; (t + 63) / 64];

    for r in 0..t {
        let mut dot = 0;
        for wi in 0..s_words {
            let row = xof.take_u64();
            dot ^= parity64(row & sk.lpn_s_bits[wi]);
        }

        let e = (xof.bounded(pk.prm.lpn_tau_den) < pk.prm.lpn_tau_num) as u64;
        ybits[r >> 6] ^= (dot ^ e) << (r & 63);
    }

    ybits
}

/// One PRF core: LPN samples under `dom`, then Toeplitz compression under
/// the TOEP domain with the same key stream.
///
/// The identity element is rejected for up to 16 fresh top rows; the
/// fallback to 1 after that is a documented negligible-probability
/// compromise.
pub(crate) fn prf_r_core(pk: &PubKey, sk: &SecKey, seed: &RSeed, dom: &str) -> Fp {
    let ybits = lpn_ybits(pk, sk, seed, dom);

    let t = pk.prm.lpn_t;
    let top_words = (t + 127 + 63) / 64;
    let mut xof = XofShake::init(domains::TOEP, &key_stream(pk, sk, seed));

    for _ in 0..TOEPLITZ_ATTEMPTS {
        let top: Vec<u64> = (0..top_words).map(|_| xof.take_u64()).collect();
        let (lo, hi) = toep_127(&top, &ybits, t);
        let r = hash_to_fp_nonzero(lo, hi);
        if r != Fp::one() {
            return r;
        }
    }

    Fp::one()
}

/// The layer mask: the product of three domain-separated cores.
///
/// Deterministic in (pk.canon_tag, sk, seed) and never zero.
pub fn prf_r(pk: &PubKey, sk: &SecKey, seed: &RSeed) -> Fp {
    let r1 = prf_r_core(pk, sk, seed, domains::PRF_R1);
    let r2 = prf_r_core(pk, sk, seed, domains::PRF_R2);
    let r3 = prf_r_core(pk, sk, seed, domains::PRF_R3);
    r1 * r2 * r3
}
