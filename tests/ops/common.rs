// Copyright 2025 Developers of the pvac-hfhe project.
//
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

use pvac_hfhe::cipher::{Cipher, Params, PubKey, SecKey};
use pvac_hfhe::ops::{dec_value, enc_value, keygen};

/// A key pair on the full default parameters.
pub fn setup() -> (PubKey, SecKey) {
    keygen(Params::default())
}

pub fn enc(pk: &PubKey, sk: &SecKey, v: u64) -> Cipher {
    enc_value(pk, sk, v).unwrap()
}

pub fn dec(pk: &PubKey, sk: &SecKey, c: &Cipher) -> u64 {
    let x = dec_value(pk, sk, c).unwrap();
    assert_eq!(x.hi, 0, "plaintext exceeds 64 bits");
    x.lo
}
