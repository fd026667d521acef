// Copyright 2025 Developers of the pvac-hfhe project.
//
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Serialized material must decrypt identically after reload.

use pvac_hfhe::cipher::Params;
use pvac_hfhe::io::{
    read_ciphers, read_pubkey, read_seckey, write_ciphers, write_pubkey, write_seckey,
};
use pvac_hfhe::ops::{ct_mul, dec_value, enc_value, keygen};
use pvac_hfhe::text::{dec_text, enc_text};
use std::fs::File;

#[test]
fn decryption_survives_a_reload() {
    let (pk, sk) = keygen(Params::default());
    let a = enc_value(&pk, &sk, 41).unwrap();
    let b = enc_value(&pk, &sk, 2).unwrap();
    let prod = ct_mul(&pk, &a, &b).unwrap();
    let cts = vec![a, b, prod];

    let mut ct_buf = Vec::new();
    write_ciphers(&mut ct_buf, &cts).unwrap();
    let mut pk_buf = Vec::new();
    write_pubkey(&mut pk_buf, &pk).unwrap();
    let mut sk_buf = Vec::new();
    write_seckey(&mut sk_buf, &sk).unwrap();

    let cts2 = read_ciphers(&mut ct_buf.as_slice()).unwrap();
    let pk2 = read_pubkey(&mut pk_buf.as_slice()).unwrap();
    let sk2 = read_seckey(&mut sk_buf.as_slice()).unwrap();

    assert_eq!(dec_value(&pk2, &sk2, &cts2[0]).unwrap().lo, 41);
    assert_eq!(dec_value(&pk2, &sk2, &cts2[1]).unwrap().lo, 2);
    assert_eq!(dec_value(&pk2, &sk2, &cts2[2]).unwrap().lo, 82);
}

#[test]
fn text_survives_files_on_disk() {
    let (pk, sk) = keygen(Params::default());
    let cts = enc_text(&pk, &sk, "hello world 123").unwrap();

    let dir = std::env::temp_dir().join(format!("pvac_io_test_{}", std::process::id()));
    std::fs::create_dir_all(&dir).unwrap();
    let ct_path = dir.join("seed.ct");
    let pk_path = dir.join("pk.bin");
    let sk_path = dir.join("sk.bin");

    write_ciphers(&mut File::create(&ct_path).unwrap(), &cts).unwrap();
    write_pubkey(&mut File::create(&pk_path).unwrap(), &pk).unwrap();
    write_seckey(&mut File::create(&sk_path).unwrap(), &sk).unwrap();

    let cts2 = read_ciphers(&mut File::open(&ct_path).unwrap()).unwrap();
    let pk2 = read_pubkey(&mut File::open(&pk_path).unwrap()).unwrap();
    let sk2 = read_seckey(&mut File::open(&sk_path).unwrap()).unwrap();

    assert_eq!(dec_text(&pk2, &sk2, &cts2).unwrap(), "hello world 123");

    std::fs::remove_dir_all(&dir).unwrap();
}
