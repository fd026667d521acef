// Copyright 2025 Developers of the pvac-hfhe project.
//
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

use pvac_hfhe::cipher::Params;
use pvac_hfhe::ops::keygen;
use pvac_hfhe::text::{dec_text, enc_text};

#[test]
fn utf8_round_trip() {
    let (pk, sk) = keygen(Params::default());
    let text = "hello world 123";
    assert_eq!(dec_text(&pk, &sk, &enc_text(&pk, &sk, text).unwrap()).unwrap(), text);
}

#[test]
fn ascii_round_trip() {
    let (pk, sk) = keygen(Params::default());
    let text = "ABCDEFGHIJKLMNOPQRSTUVWXYZabcdefghijklmnopqrstuvwxyz0123456789";
    assert_eq!(dec_text(&pk, &sk, &enc_text(&pk, &sk, text).unwrap()).unwrap(), text);
}

#[test]
fn special_characters_round_trip() {
    let (pk, sk) = keygen(Params::default());
    let text = "!@#$%^&*()_+-=[]{}|;':\",./<>?`~";
    assert_eq!(dec_text(&pk, &sk, &enc_text(&pk, &sk, text).unwrap()).unwrap(), text);
}

#[test]
fn empty_round_trip() {
    let (pk, sk) = keygen(Params::default());
    let cts = enc_text(&pk, &sk, "").unwrap();
    assert_eq!(cts.len(), 1);
    assert_eq!(dec_text(&pk, &sk, &cts).unwrap(), "");
}
