// Copyright 2025 Developers of the pvac-hfhe project.
//
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! An offline ciphertext decoder for auditing dumped material.
//!
//! Reads `seed.ct`, `pk.bin`, and `sk.bin` from a directory (default
//! `bounty_data`), decrypts what it can, and prints the recovered bytes
//! as hex and printable text.

use pvac_hfhe::field::Fp;
use pvac_hfhe::io::{read_ciphers, read_pubkey, read_seckey, IoError};
use pvac_hfhe::ops::dec_value;
use std::fs::File;
use std::path::Path;
use std::process::ExitCode;

const BLOCK_BYTES: usize = 15;

fn hexdump(data: &[u8], max: usize) {
    for (i, byte) in data.iter().take(max).enumerate() {
        print!("{byte:02x}");
        if (i + 1) % 16 == 0 {
            println!();
        } else if (i + 1) % 8 == 0 {
            print!("  ");
        } else {
            print!(" ");
        }
    }
    if data.len() > max {
        print!("... [{} bytes total]", data.len());
    }
    println!();
}

fn printable(bytes: &[u8]) -> String {
    bytes
        .iter()
        .map(|&b| if (32..127).contains(&b) { b as char } else { '.' })
        .collect()
}

fn block_bytes(val: Fp) -> [u8; BLOCK_BYTES] {
    let lo = val.lo.to_le_bytes();
    let hi = val.hi.to_le_bytes();
    let mut out = [0; BLOCK_BYTES];
    out[..8].copy_from_slice(&lo);
    out[8..].copy_from_slice(&hi[..7]);
    out
}

fn main() -> ExitCode {
    let dir = std::env::args().nth(1).unwrap_or_else(|| "bounty_data".to_string());
    let dir = Path::new(&dir);

    println!("- decode_ct -");
    println!("dir: {}\n", dir.display());

    let ct_path = dir.join("seed.ct");
    let pk_path = dir.join("pk.bin");
    let sk_path = dir.join("sk.bin");

    println!("seed.ct: {}", if ct_path.exists() { "yes" } else { "no" });
    println!("pk.bin:  {}", if pk_path.exists() { "yes" } else { "no" });
    println!("sk.bin:  {}\n", if sk_path.exists() { "yes" } else { "no" });

    let cts = match File::open(&ct_path)
        .map_err(IoError::from)
        .and_then(|mut f| read_ciphers(&mut f))
    {
        Ok(cts) => {
            println!("loaded {} CTs", cts.len());
            cts
        }
        Err(err) => {
            println!("ct load failed: {err}");
            return ExitCode::FAILURE;
        }
    };

    let pk = match File::open(&pk_path)
        .map_err(IoError::from)
        .and_then(|mut f| read_pubkey(&mut f))
    {
        Ok(pk) => {
            println!("pk.B = {}, pk.H = {}", pk.prm.b, pk.h_rows.len());
            pk
        }
        Err(err) => {
            println!("pk load failed: {err} - cannot dec");
            return ExitCode::FAILURE;
        }
    };

    let sk = match File::open(&sk_path)
        .map_err(IoError::from)
        .and_then(|mut f| read_seckey(&mut f))
    {
        Ok(sk) => {
            println!("sk.s = {} words\n", sk.lpn_s_bits.len());
            sk
        }
        Err(err) => {
            println!("no usable sk ({err}) - ct info only:");
            for (i, c) in cts.iter().take(5).enumerate() {
                println!("  ct[{i}]: L = {}, E = {}", c.layers.len(), c.edges.len());
            }
            return ExitCode::SUCCESS;
        }
    };

    println!("- decode -\n");

    let mut raw_fps = Vec::new();
    let mut raw_bytes = Vec::new();
    for (i, c) in cts.iter().enumerate() {
        let val = match dec_value(&pk, &sk, c) {
            Ok(val) => val,
            Err(err) => {
                println!("ct[{i}]: dec failed: {err}");
                Fp::zero()
            }
        };
        raw_fps.push(val);

        if i == 0 {
            println!("ct[0]: lo = {}, hi = {}", val.lo, val.hi);
        } else {
            raw_bytes.extend_from_slice(&block_bytes(val));
        }
    }

    println!("\nraw Fp values:");
    for (i, val) in raw_fps.iter().take(8).enumerate() {
        println!("[{i}] lo = {:#x}, hi = {:#x}", val.lo, val.hi);
    }

    let expected_len = raw_fps.first().map(|v| v.lo).unwrap_or(0);
    let actual_len = (expected_len as usize).min(raw_bytes.len());

    println!("\nexpected len: {expected_len}");
    println!("raw bytes: {}", raw_bytes.len());
    println!("using len: {actual_len}\n");

    println!("hex dump:");
    hexdump(&raw_bytes[..actual_len], 64);

    println!("\nprintable:");
    println!("{}", printable(&raw_bytes[..actual_len]));

    ExitCode::SUCCESS
}
