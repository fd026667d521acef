// Copyright 2025 Developers of the pvac-hfhe project.
//
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

use super::{IoError, FORMAT_VERSION, MAGIC_CT, MAGIC_PK, MAGIC_SK};
use crate::bits::BitVec;
use crate::cipher::{Cipher, Edge, Layer, PubKey, SecKey};
use crate::field::Fp;
use std::io::Write;

fn put32<W: Write>(w: &mut W, x: u32) -> Result<(), IoError> {
    w.write_all(&x.to_le_bytes())?;
    Ok(())
}

fn put64<W: Write>(w: &mut W, x: u64) -> Result<(), IoError> {
    w.write_all(&x.to_le_bytes())?;
    Ok(())
}

fn put_f64<W: Write>(w: &mut W, x: f64) -> Result<(), IoError> {
    w.write_all(&x.to_bits().to_le_bytes())?;
    Ok(())
}

fn put_fp<W: Write>(w: &mut W, x: Fp) -> Result<(), IoError> {
    put64(w, x.lo)?;
    put64(w, x.hi)
}

fn put_bitvec<W: Write>(w: &mut W, v: &BitVec) -> Result<(), IoError> {
    put32(w, v.nbits as u32)?;
    for &word in &v.w {
        put64(w, word)?;
    }
    Ok(())
}

fn put_header<W: Write>(w: &mut W, magic: u32) -> Result<(), IoError> {
    put32(w, magic)?;
    put32(w, FORMAT_VERSION)
}

fn put_layer<W: Write>(w: &mut W, layer: &Layer) -> Result<(), IoError> {
    match layer {
        Layer::Base { seed } => {
            w.write_all(&[0])?;
            put64(w, seed.ztag)?;
            put64(w, seed.nonce.lo)?;
            put64(w, seed.nonce.hi)
        }
        Layer::Prod { pa, pb } => {
            w.write_all(&[1])?;
            put32(w, *pa)?;
            put32(w, *pb)
        }
    }
}

fn put_edge<W: Write>(w: &mut W, e: &Edge) -> Result<(), IoError> {
    put32(w, e.layer_id)?;
    w.write_all(&e.idx.to_le_bytes())?;
    w.write_all(&[e.ch as u8, 0])?;
    put_fp(w, e.w)?;
    put_bitvec(w, &e.s)
}

fn put_cipher<W: Write>(w: &mut W, c: &Cipher) -> Result<(), IoError> {
    put32(w, c.layers.len() as u32)?;
    put32(w, c.edges.len() as u32)?;
    for layer in &c.layers {
        put_layer(w, layer)?;
    }
    for e in &c.edges {
        put_edge(w, e)?;
    }
    Ok(())
}

/// Writes a ciphertext sequence under the CT header.
pub fn write_ciphers<W: Write>(w: &mut W, cts: &[Cipher]) -> Result<(), IoError> {
    put_header(w, MAGIC_CT)?;
    put64(w, cts.len() as u64)?;
    for c in cts {
        put_cipher(w, c)?;
    }
    Ok(())
}

/// Writes a secret key under the SK header.
pub fn write_seckey<W: Write>(w: &mut W, sk: &SecKey) -> Result<(), IoError> {
    put_header(w, MAGIC_SK)?;
    for &word in &sk.prf_k {
        put64(w, word)?;
    }
    put64(w, sk.lpn_s_bits.len() as u64)?;
    for &word in &sk.lpn_s_bits {
        put64(w, word)?;
    }
    Ok(())
}

/// Writes a public key under the PK header.
///
/// Parameter fields appear in `Params` declaration order; widths follow
/// the field types, so nothing is truncated on the way through.
pub fn write_pubkey<W: Write>(w: &mut W, pk: &PubKey) -> Result<(), IoError> {
    put_header(w, MAGIC_PK)?;

    let prm = &pk.prm;
    put32(w, prm.b)?;
    put32(w, prm.m_bits as u32)?;
    put32(w, prm.n_bits as u32)?;
    put32(w, prm.h_col_wt as u32)?;
    put32(w, prm.x_col_wt as u32)?;
    put32(w, prm.err_wt as u32)?;
    put_f64(w, prm.noise_entropy_bits)?;
    put_f64(w, prm.tuple2_fraction)?;
    put_f64(w, prm.depth_slope_bits)?;
    put64(w, prm.edge_budget as u64)?;
    put32(w, prm.lpn_n as u32)?;
    put32(w, prm.lpn_t as u32)?;
    put64(w, prm.lpn_tau_num)?;
    put64(w, prm.lpn_tau_den)?;

    put64(w, pk.canon_tag)?;
    w.write_all(&pk.h_digest)?;

    put64(w, pk.h_rows.len() as u64)?;
    for row in &pk.h_rows {
        put_bitvec(w, row)?;
    }

    put64(w, pk.ubk.perm.len() as u64)?;
    for &v in &pk.ubk.perm {
        put32(w, v)?;
    }
    put64(w, pk.ubk.inv.len() as u64)?;
    for &v in &pk.ubk.inv {
        put32(w, v)?;
    }

    put_fp(w, pk.omega_b)?;
    put64(w, pk.powg_b.len() as u64)?;
    for &x in &pk.powg_b {
        put_fp(w, x)?;
    }

    Ok(())
}
