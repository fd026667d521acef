// Copyright 2025 Developers of the pvac-hfhe project.
//
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! The process-wide CSPRNG surface used by key generation and encryption.
//!
//! Entropy failure has no user-visible recovery: the process prints the
//! underlying error and aborts.

use super::generator::get_os_random_bytes;
use crate::field::{Fp, MASK63};

/// Returns `len` uniform bytes, aborting the process on entropy failure.
pub fn csprng_bytes(len: usize) -> Vec<u8> {
    let len = u32::try_from(len).expect("csprng request too large");
    match get_os_random_bytes(len) {
        Ok(bytes) => bytes,
        Err(err) => {
            eprintln!("csprng failure: {err}");
            std::process::abort();
        }
    }
}

/// Returns a uniform 64-bit word.
pub fn csprng_u64() -> u64 {
    let bytes = csprng_bytes(8);
    u64::from_le_bytes(bytes.try_into().unwrap())
}

/// Returns a uniform value in `[0, m)` by rejection sampling.
pub fn csprng_below(m: u64) -> u64 {
    if m <= 1 {
        return 0;
    }

    let lim = u64::MAX - (u64::MAX % m);
    loop {
        let x = csprng_u64();
        if x < lim {
            return x % m;
        }
    }
}

/// Returns a uniform nonzero field element.
pub fn rand_fp_nonzero() -> Fp {
    loop {
        let x = Fp::from_words(csprng_u64(), csprng_u64() & MASK63);
        if !x.is_zero() {
            return x;
        }
    }
}
