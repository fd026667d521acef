// Copyright 2025 Developers of the pvac-hfhe project.
//
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! The Toeplitz extractor: a universal hash compressing a bit string to a
//! 127-bit field element.

use crate::bits::parity64;
use crate::field::{Fp, MASK63};

/// Compresses the `t_bits`-bit string `y` through the Toeplitz matrix whose
/// top row is `top`.
///
/// Output bit k is the inner product of `top[k .. k + t_bits)` with `y`,
/// mod 2, for k in 0..127. `top` must hold at least `t_bits + 127` bits;
/// bits of `y` at positions >= `t_bits` must be zero.
pub(crate) fn toep_127(top: &[u64], y: &[u64], t_bits: usize) -> (u64, u64) {
    debug_assert!(top.len() * 64 >= t_bits + 127);
    debug_assert!(y.len() * 64 >= t_bits);

    let y_words = (t_bits + 63) / 64;
    let mut lo = 0_u64;
    let mut hi = 0_u64;

    for k in 0..127 {
        let base = k >> 6;
        let shift = k & 63;

        let mut dot = 0_u64;
        for j in 0..y_words {
            // Bits top[k + 64j .. k + 64j + 64), assembled from the two
            // straddling words.
            let window = if shift == 0 {
                top[base + j]
            } else {
                (top[base + j] >> shift) | (top[base + j + 1] << (64 - shift))
            };
            dot ^= parity64(window & y[j]);
        }

        if k < 64 {
            lo |= dot << k;
        } else {
            hi |= dot << (k - 64);
        }
    }

    (lo, hi)
}

/// Maps a 128-bit hash output into the nonzero part of the field.
///
/// The pair is canonicalised first (top bit masked, then reduced), and the
/// zero class alone is replaced by 1, so both pre-images of zero — (0, 0)
/// and the bit pattern of p itself — land on the same substitute.
pub fn hash_to_fp_nonzero(lo: u64, hi: u64) -> Fp {
    let r = Fp::from_words(lo, hi & MASK63);
    if r.is_zero() {
        Fp::one()
    } else {
        r
    }
}
