// Copyright 2025 Developers of the pvac-hfhe project.
//
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Text encryption: strings packed 15 bytes per field element.
//!
//! Ciphertext 0 carries the byte length; each following ciphertext packs
//! one 15-byte block little-endian (bytes 0..8 into `lo`, 8..15 into
//! `hi`), which keeps every block value below 2^120 < p.

use crate::cipher::{Cipher, CipherError, PubKey, SecKey};
use crate::field::Fp;
use crate::ops::{dec_value, enc_fp, enc_value};
use std::fmt;
use std::fmt::Display;
use std::string::FromUtf8Error;

const BLOCK_BYTES: usize = 15;

#[derive(Debug)]
#[non_exhaustive]
pub enum TextError {
    Cipher(CipherError),
    /// The decrypted length does not match the decrypted blocks.
    LengthMismatch { expected: u64, available: usize },
    InvalidUtf8(FromUtf8Error),
}

impl Display for TextError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TextError::Cipher(err) => write!(f, "cipher operation failed: {err}"),
            TextError::LengthMismatch {
                expected,
                available,
            } => {
                write!(
                    f,
                    "length block claims {expected} bytes but {available} decoded"
                )
            }
            TextError::InvalidUtf8(err) => write!(f, "decrypted bytes are not UTF-8: {err}"),
        }
    }
}

impl std::error::Error for TextError {}

impl From<CipherError> for TextError {
    fn from(err: CipherError) -> TextError {
        TextError::Cipher(err)
    }
}

/// Encrypts `text` as a length ciphertext followed by one ciphertext per
/// 15-byte block.
pub fn enc_text(pk: &PubKey, sk: &SecKey, text: &str) -> Result<Vec<Cipher>, TextError> {
    let bytes = text.as_bytes();
    let mut cts = Vec::with_capacity(1 + (bytes.len() + BLOCK_BYTES - 1) / BLOCK_BYTES);

    cts.push(enc_value(pk, sk, bytes.len() as u64)?);
    for block in bytes.chunks(BLOCK_BYTES) {
        cts.push(enc_fp(pk, sk, pack_block(block))?);
    }

    Ok(cts)
}

/// Decrypts a sequence produced by [`enc_text`].
pub fn dec_text(pk: &PubKey, sk: &SecKey, cts: &[Cipher]) -> Result<String, TextError> {
    if cts.is_empty() {
        return Err(TextError::LengthMismatch {
            expected: 0,
            available: 0,
        });
    }

    let len_fp = dec_value(pk, sk, &cts[0])?;
    let expected = len_fp.lo;

    let mut bytes = Vec::with_capacity((cts.len() - 1) * BLOCK_BYTES);
    for ct in &cts[1..] {
        let block = dec_value(pk, sk, ct)?;
        bytes.extend_from_slice(&unpack_block(block));
    }

    if len_fp.hi != 0 || expected as usize > bytes.len() {
        return Err(TextError::LengthMismatch {
            expected,
            available: bytes.len(),
        });
    }
    bytes.truncate(expected as usize);

    String::from_utf8(bytes).map_err(TextError::InvalidUtf8)
}

fn pack_block(block: &[u8]) -> Fp {
    debug_assert!(block.len() <= BLOCK_BYTES);

    let mut lo = [0_u8; 8];
    let mut hi = [0_u8; 8];
    for (i, &byte) in block.iter().enumerate() {
        if i < 8 {
            lo[i] = byte;
        } else {
            hi[i - 8] = byte;
        }
    }
    Fp {
        lo: u64::from_le_bytes(lo),
        hi: u64::from_le_bytes(hi),
    }
}

fn unpack_block(block: Fp) -> [u8; BLOCK_BYTES] {
    let lo = block.lo.to_le_bytes();
    let hi = block.hi.to_le_bytes();

    let mut out = [0_u8; BLOCK_BYTES];
    out[..8].copy_from_slice(&lo);
    out[8..].copy_from_slice(&hi[..7]);
    out
}
