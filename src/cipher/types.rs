// Copyright 2025 Developers of the pvac-hfhe project.
//
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! The ciphertext data model: a layer DAG plus an edge multiset.

use super::params::Params;
use crate::bits::BitVec;
use crate::field::Fp;
use crate::random::csprng_u64;

/// A 128-bit nonce drawn at every BASE-layer creation.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Nonce128 {
    pub lo: u64,
    pub hi: u64,
}

impl Nonce128 {
    pub fn fresh() -> Nonce128 {
        Nonce128 {
            lo: csprng_u64(),
            hi: csprng_u64(),
        }
    }
}

/// Uniquely identifies the mask of a BASE layer.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct RSeed {
    pub ztag: u64,
    pub nonce: Nonce128,
}

/// A ciphertext layer.
///
/// Layers live in a single append-only vector; `Prod` references earlier
/// positions by index, so the DAG is topologically ordered by construction
/// and owning cycles cannot be expressed.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Layer {
    /// Mask drawn fresh from the LPN PRF at encryption time.
    Base { seed: RSeed },
    /// Mask equal to the product of two earlier layers' masks.
    Prod { pa: u32, pb: u32 },
}

/// The sign channel of an edge.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord)]
pub enum EdgeSign {
    P = 0,
    M = 1,
}

impl EdgeSign {
    pub fn from_byte(b: u8) -> Option<EdgeSign> {
        match b {
            0 => Some(EdgeSign::P),
            1 => Some(EdgeSign::M),
            _ => None,
        }
    }
}

/// A signed, weighted, masked contribution to the decrypted sum.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Edge {
    pub layer_id: u32,
    /// Plaintext index in `[0, B)`.
    pub idx: u16,
    pub ch: EdgeSign,
    /// Weight in the field.
    pub w: Fp,
    /// Carrier bit string of `m_bits` bits.
    pub s: BitVec,
}

/// A ciphertext: layers plus edges.
///
/// Edges within one layer may repeat an (idx, ch) pair; decryption sums
/// them.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Cipher {
    pub layers: Vec<Layer>,
    pub edges: Vec<Edge>,
}

/// A permutation of the carrier bit positions and its inverse.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Ubk {
    pub perm: Vec<u32>,
    pub inv: Vec<u32>,
}

#[derive(Clone, Debug, PartialEq)]
pub struct PubKey {
    pub prm: Params,
    /// Binds the key instance; mixed into every mask computation.
    pub canon_tag: u64,
    pub h_rows: Vec<BitVec>,
    pub ubk: Ubk,
    pub h_digest: [u8; 32],
    /// A primitive B-th root of unity.
    pub omega_b: Fp,
    /// `powg_b[k] = omega_b^k`, length B.
    pub powg_b: Vec<Fp>,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SecKey {
    pub prf_k: [u64; 4],
    /// The LPN secret, at least `lpn_n` bits packed little-endian.
    pub lpn_s_bits: Vec<u64>,
}

/// Evaluation key for recryption: a pool of encryptions of zero plus an
/// encryption of one.
#[derive(Clone, Debug)]
pub struct EvalKey {
    pub zero_pool: Vec<Cipher>,
    pub enc_one: Cipher,
}
