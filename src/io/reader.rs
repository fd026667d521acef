// Copyright 2025 Developers of the pvac-hfhe project.
//
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

use super::{IoError, FORMAT_VERSION, MAGIC_CT, MAGIC_PK, MAGIC_SK};
use crate::bits::BitVec;
use crate::cipher::{Cipher, Edge, EdgeSign, Layer, Nonce128, Params, PubKey, RSeed, SecKey, Ubk};
use crate::field::Fp;
use std::io::Read;

fn get32<R: Read>(r: &mut R) -> Result<u32, IoError> {
    let mut b = [0; 4];
    r.read_exact(&mut b)?;
    Ok(u32::from_le_bytes(b))
}

fn get64<R: Read>(r: &mut R) -> Result<u64, IoError> {
    let mut b = [0; 8];
    r.read_exact(&mut b)?;
    Ok(u64::from_le_bytes(b))
}

fn get_f64<R: Read>(r: &mut R) -> Result<f64, IoError> {
    Ok(f64::from_bits(get64(r)?))
}

fn get_byte<R: Read>(r: &mut R) -> Result<u8, IoError> {
    let mut b = [0];
    r.read_exact(&mut b)?;
    Ok(b[0])
}

// Field elements are re-canonicalised on the way in, so a tampered
// stream cannot smuggle a non-canonical representative.
fn get_fp<R: Read>(r: &mut R) -> Result<Fp, IoError> {
    let lo = get64(r)?;
    let hi = get64(r)?;
    Ok(Fp::from_words(lo, hi))
}

fn get_bitvec<R: Read>(r: &mut R) -> Result<BitVec, IoError> {
    let nbits = get32(r)? as usize;
    let mut v = BitVec {
        nbits,
        w: Vec::new(),
    };
    for _ in 0..(nbits + 63) / 64 {
        v.w.push(get64(r)?);
    }
    // Tail bits above nbits are zero everywhere in this crate.
    v.mask_tail();
    Ok(v)
}

fn expect_header<R: Read>(r: &mut R, magic: u32) -> Result<(), IoError> {
    let found = get32(r)?;
    if found != magic {
        return Err(IoError::BadMagic {
            expected: magic,
            found,
        });
    }
    let version = get32(r)?;
    if version != FORMAT_VERSION {
        return Err(IoError::BadVersion(version));
    }
    Ok(())
}

fn get_layer<R: Read>(r: &mut R) -> Result<Layer, IoError> {
    match get_byte(r)? {
        0 => Ok(Layer::Base {
            seed: RSeed {
                ztag: get64(r)?,
                nonce: Nonce128 {
                    lo: get64(r)?,
                    hi: get64(r)?,
                },
            },
        }),
        1 => Ok(Layer::Prod {
            pa: get32(r)?,
            pb: get32(r)?,
        }),
        _ => Err(IoError::Malformed("unknown layer rule")),
    }
}

fn get_edge<R: Read>(r: &mut R) -> Result<Edge, IoError> {
    let layer_id = get32(r)?;
    let mut idx = [0; 2];
    r.read_exact(&mut idx)?;
    let ch = EdgeSign::from_byte(get_byte(r)?).ok_or(IoError::Malformed("unknown edge sign"))?;
    get_byte(r)?; // pad

    Ok(Edge {
        layer_id,
        idx: u16::from_le_bytes(idx),
        ch,
        w: get_fp(r)?,
        s: get_bitvec(r)?,
    })
}

fn get_cipher<R: Read>(r: &mut R) -> Result<Cipher, IoError> {
    let layer_count = get32(r)?;
    let edge_count = get32(r)?;

    let mut layers = Vec::new();
    for _ in 0..layer_count {
        layers.push(get_layer(r)?);
    }
    let mut edges = Vec::new();
    for _ in 0..edge_count {
        edges.push(get_edge(r)?);
    }

    Ok(Cipher { layers, edges })
}

/// Reads a ciphertext sequence written by [`write_ciphers`](super::write_ciphers).
pub fn read_ciphers<R: Read>(r: &mut R) -> Result<Vec<Cipher>, IoError> {
    expect_header(r, MAGIC_CT)?;
    let count = get64(r)?;

    let mut cts = Vec::new();
    for _ in 0..count {
        cts.push(get_cipher(r)?);
    }
    Ok(cts)
}

/// Reads a secret key written by [`write_seckey`](super::write_seckey).
pub fn read_seckey<R: Read>(r: &mut R) -> Result<SecKey, IoError> {
    expect_header(r, MAGIC_SK)?;

    let mut prf_k = [0; 4];
    for word in &mut prf_k {
        *word = get64(r)?;
    }

    let count = get64(r)?;
    let mut lpn_s_bits = Vec::new();
    for _ in 0..count {
        lpn_s_bits.push(get64(r)?);
    }

    Ok(SecKey { prf_k, lpn_s_bits })
}

/// Reads a public key written by [`write_pubkey`](super::write_pubkey).
pub fn read_pubkey<R: Read>(r: &mut R) -> Result<PubKey, IoError> {
    expect_header(r, MAGIC_PK)?;

    let prm = Params {
        b: get32(r)?,
        m_bits: get32(r)? as usize,
        n_bits: get32(r)? as usize,
        h_col_wt: get32(r)? as usize,
        x_col_wt: get32(r)? as usize,
        err_wt: get32(r)? as usize,
        noise_entropy_bits: get_f64(r)?,
        tuple2_fraction: get_f64(r)?,
        depth_slope_bits: get_f64(r)?,
        edge_budget: get64(r)? as usize,
        lpn_n: get32(r)? as usize,
        lpn_t: get32(r)? as usize,
        lpn_tau_num: get64(r)?,
        lpn_tau_den: get64(r)?,
    };

    let canon_tag = get64(r)?;
    let mut h_digest = [0; 32];
    r.read_exact(&mut h_digest)?;

    let row_count = get64(r)?;
    let mut h_rows = Vec::new();
    for _ in 0..row_count {
        h_rows.push(get_bitvec(r)?);
    }

    let perm_count = get64(r)?;
    let mut perm = Vec::new();
    for _ in 0..perm_count {
        perm.push(get32(r)?);
    }
    let inv_count = get64(r)?;
    let mut inv = Vec::new();
    for _ in 0..inv_count {
        inv.push(get32(r)?);
    }

    let omega_b = get_fp(r)?;
    let powg_count = get64(r)?;
    let mut powg_b = Vec::new();
    for _ in 0..powg_count {
        powg_b.push(get_fp(r)?);
    }

    Ok(PubKey {
        prm,
        canon_tag,
        h_rows,
        ubk: Ubk { perm, inv },
        h_digest,
        omega_b,
        powg_b,
    })
}
