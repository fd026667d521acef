// Copyright 2025 Developers of the pvac-hfhe project.
//
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! The ciphertext commitment: a SHA-256 over a canonical byte stream.

use crate::cipher::{Cipher, EdgeSign, Layer, PubKey};
use crate::crypto::domains;
use crate::crypto::hash::{sha256_acc_u64, Sha256};
use crate::field::MASK63;

/// Commits to `c` under `pk`.
///
/// The stream covers the key digest, the instance tag, every layer in
/// order, and every edge in order, so any observable difference separates
/// the hashes. Stability across implementation-dependent edge orderings
/// holds only after canonicalising compaction.
pub fn commit_ct(pk: &PubKey, c: &Cipher) -> [u8; 32] {
    let mut s = Sha256::new();
    s.update(domains::COMMIT);
    s.update(pk.h_digest);
    sha256_acc_u64(&mut s, pk.canon_tag);

    for layer in &c.layers {
        match layer {
            Layer::Base { seed } => {
                s.update([0_u8]);
                sha256_acc_u64(&mut s, seed.ztag);
                sha256_acc_u64(&mut s, seed.nonce.lo);
                sha256_acc_u64(&mut s, seed.nonce.hi);
            }
            Layer::Prod { pa, pb } => {
                s.update([1_u8]);
                sha256_acc_u64(&mut s, *pa as u64);
                sha256_acc_u64(&mut s, *pb as u64);
            }
        }
    }

    for e in &c.edges {
        sha256_acc_u64(&mut s, e.layer_id as u64);
        sha256_acc_u64(&mut s, e.idx as u64);
        s.update([e.ch as u8]);

        s.update(e.w.lo.to_le_bytes());
        s.update((e.w.hi & MASK63).to_le_bytes());

        // The carrier as ceil(nbits / 8) bytes, little-endian words with
        // the final partial byte packed low-to-high.
        let mut remaining = (e.s.nbits + 7) / 8;
        for &word in &e.s.w {
            let take = remaining.min(8);
            s.update(&word.to_le_bytes()[..take]);
            remaining -= take;
            if remaining == 0 {
                break;
            }
        }
    }

    s.finish()
}
