// Copyright 2025 Developers of the pvac-hfhe project.
//
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Decryption: resolve every layer's mask through the DAG, then fold the
//! edges with the mask inverses.

use crate::cipher::{validate, Cipher, CipherError, EdgeSign, Layer, PubKey, SecKey};
use crate::crypto::prf_r;
use crate::field::Fp;
use std::collections::HashMap;

/// Decrypts `c` to a field element.
///
/// Validation runs first, so the layer vector is known to be in
/// topological order and a single forward pass resolves every mask:
/// BASE layers through the PRF (memoised per seed — concatenation during
/// evaluation duplicates seeds freely and the PRF is deterministic in
/// them), PROD layers as the product of their children's masks. Inverses
/// are only taken for layers an edge actually references.
pub fn dec_value(pk: &PubKey, sk: &SecKey, c: &Cipher) -> Result<Fp, CipherError> {
    validate(pk, c)?;

    let n = c.layers.len();
    let mut r = Vec::with_capacity(n);
    let mut seed_cache: HashMap<(u64, u64, u64), Fp> = HashMap::new();

    for layer in &c.layers {
        let mask = match layer {
            Layer::Base { seed } => *seed_cache
                .entry((seed.ztag, seed.nonce.lo, seed.nonce.hi))
                .or_insert_with(|| prf_r(pk, sk, seed)),
            Layer::Prod { pa, pb } => r[*pa as usize] * r[*pb as usize],
        };
        r.push(mask);
    }

    let mut referenced = vec![false; n];
    for e in &c.edges {
        referenced[e.layer_id as usize] = true;
    }

    let mut r_inv = vec![Fp::zero(); n];
    for lid in 0..n {
        if referenced[lid] {
            r_inv[lid] = r[lid].inv();
        }
    }

    let mut acc = Fp::zero();
    for e in &c.edges {
        let term = e.w * pk.powg_b[e.idx as usize] * r_inv[e.layer_id as usize];
        acc = match e.ch {
            EdgeSign::P => acc + term,
            EdgeSign::M => acc - term,
        };
    }

    Ok(acc)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cipher::{Edge, Nonce128, RSeed};
    use crate::bits::BitVec;
    use crate::ops::{ct_add, ct_mul, enc_value, keygen};
    use crate::testing_tools::reduced_params;

    #[test]
    fn test_dec_rejects_malformed() {
        let (pk, sk) = keygen(reduced_params());

        let c = Cipher {
            layers: vec![Layer::Prod { pa: 0, pb: 0 }],
            edges: vec![],
        };
        assert!(matches!(
            dec_value(&pk, &sk, &c),
            Err(CipherError::ProdReferencesLaterLayer { .. })
        ));

        let c = Cipher {
            layers: vec![Layer::Base {
                seed: RSeed {
                    ztag: 1,
                    nonce: Nonce128 { lo: 2, hi: 3 },
                },
            }],
            edges: vec![Edge {
                layer_id: 9,
                idx: 0,
                ch: EdgeSign::P,
                w: Fp::one(),
                s: BitVec::make(pk.prm.m_bits),
            }],
        };
        assert!(matches!(
            dec_value(&pk, &sk, &c),
            Err(CipherError::EdgeLayerOutOfRange { .. })
        ));
    }

    #[test]
    fn test_dec_empty_cipher_is_zero() {
        let (pk, sk) = keygen(reduced_params());
        assert_eq!(dec_value(&pk, &sk, &Cipher::default()).unwrap(), Fp::zero());
    }

    #[test]
    fn test_dec_after_ops() {
        let (pk, sk) = keygen(reduced_params());
        let a = enc_value(&pk, &sk, 42).unwrap();
        let b = enc_value(&pk, &sk, 17).unwrap();

        let sum = ct_add(&pk, &a, &b).unwrap();
        assert_eq!(dec_value(&pk, &sk, &sum).unwrap().lo, 59);

        let prod = ct_mul(&pk, &a, &b).unwrap();
        assert_eq!(dec_value(&pk, &sk, &prod).unwrap().lo, 714);
    }
}
