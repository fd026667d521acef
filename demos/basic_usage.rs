// Copyright 2025 Developers of the pvac-hfhe project.
//
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! A self-test walkthrough of the whole scheme on default parameters.
//!
//! Exits 0 if every check passes, 1 otherwise.

use pvac_hfhe::cipher::{Cipher, Params, PubKey, SecKey};
use pvac_hfhe::metrics::dump_metrics;
use pvac_hfhe::ops::{
    commit_ct, ct_add, ct_mul, ct_recrypt, ct_sub, dec_value, enc_value, keygen, make_evalkey,
};
use pvac_hfhe::random::csprng_below;
use pvac_hfhe::text::{dec_text, enc_text};
use std::time::Instant;

struct Harness {
    test_num: usize,
    pass: usize,
    fail: usize,
}

impl Harness {
    fn section(&mut self, name: &str) {
        self.test_num += 1;
        println!("\n - {}. {} - ", self.test_num, name);
    }

    fn check(&mut self, cond: bool, msg: &str) {
        if cond {
            println!("   ok: {msg}");
            self.pass += 1;
        } else {
            println!("   FAIL: {msg}");
            self.fail += 1;
        }
    }
}

fn enc(pk: &PubKey, sk: &SecKey, v: u64) -> Cipher {
    enc_value(pk, sk, v).expect("edge budget")
}

fn dec(pk: &PubKey, sk: &SecKey, c: &Cipher) -> u64 {
    dec_value(pk, sk, c).expect("well-formed cipher").lo
}

fn hex8(bytes: &[u8]) -> String {
    bytes.iter().take(8).map(|b| format!("{b:02x}")).collect()
}

fn main() {
    let mut h = Harness {
        test_num: 0,
        pass: 0,
        fail: 0,
    };

    h.section("keygen");
    let (pk, sk) = keygen(Params::default());
    println!("   H = 0x{}", hex8(&pk.h_digest));
    println!(
        "   m = {}, B = {}, lpn = {}x{}",
        pk.prm.m_bits, pk.prm.b, pk.prm.lpn_t, pk.prm.lpn_n
    );
    println!("   prf_k[0] = {:#018x}", sk.prf_k[0]);

    h.section("enc / dec");
    let ca = enc(&pk, &sk, 42);
    let cb = enc(&pk, &sk, 17);
    h.check(dec(&pk, &sk, &ca) == 42, "dec(42) = 42");
    h.check(dec(&pk, &sk, &cb) == 17, "dec(17) = 17");

    h.section("zero / one");
    let c0 = enc(&pk, &sk, 0);
    let c1 = enc(&pk, &sk, 1);
    h.check(dec(&pk, &sk, &c0) == 0, "dec(0) = 0");
    h.check(dec(&pk, &sk, &c1) == 1, "dec(1) = 1");

    h.section("identities");
    h.check(
        dec(&pk, &sk, &ct_add(&pk, &ca, &c0).unwrap()) == 42,
        "42 + 0 = 42",
    );
    h.check(
        dec(&pk, &sk, &ct_mul(&pk, &ca, &c1).unwrap()) == 42,
        "42 * 1 = 42",
    );
    h.check(
        dec(&pk, &sk, &ct_mul(&pk, &ca, &c0).unwrap()) == 0,
        "42 * 0 = 0",
    );
    h.check(
        dec(&pk, &sk, &ct_sub(&pk, &ca, &ca).unwrap()) == 0,
        "42 - 42 = 0",
    );

    h.section("commutativity");
    h.check(
        dec(&pk, &sk, &ct_add(&pk, &ca, &cb).unwrap())
            == dec(&pk, &sk, &ct_add(&pk, &cb, &ca).unwrap()),
        "a + b = b + a",
    );
    h.check(
        dec(&pk, &sk, &ct_mul(&pk, &ca, &cb).unwrap())
            == dec(&pk, &sk, &ct_mul(&pk, &cb, &ca).unwrap()),
        "a * b = b * a",
    );

    h.section("distributivity");
    let cc = enc(&pk, &sk, 7);
    let left = ct_mul(&pk, &ca, &ct_add(&pk, &cb, &cc).unwrap()).unwrap();
    let right = ct_add(
        &pk,
        &ct_mul(&pk, &ca, &cb).unwrap(),
        &ct_mul(&pk, &ca, &cc).unwrap(),
    )
    .unwrap();
    h.check(
        dec(&pk, &sk, &left) == dec(&pk, &sk, &right),
        "a * (b + c) = a*b + a*c",
    );

    h.section("poly f(x) = x^3 + 2x^2 + 3x + 4");
    let x = 5_u64;
    let cx = enc(&pk, &sk, x);
    let cx2 = ct_mul(&pk, &cx, &cx).unwrap();
    let cx3 = ct_mul(&pk, &cx2, &cx).unwrap();
    let poly = ct_add(
        &pk,
        &ct_add(
            &pk,
            &ct_add(&pk, &cx3, &ct_mul(&pk, &enc(&pk, &sk, 2), &cx2).unwrap()).unwrap(),
            &ct_mul(&pk, &enc(&pk, &sk, 3), &cx).unwrap(),
        )
        .unwrap(),
        &enc(&pk, &sk, 4),
    )
    .unwrap();
    let expected = x * x * x + 2 * x * x + 3 * x + 4;
    h.check(dec(&pk, &sk, &poly) == expected, "f(5) = 194");

    h.section("depth x^16");
    let d1 = enc(&pk, &sk, 2);
    let d2 = ct_mul(&pk, &d1, &d1).unwrap();
    let d4 = ct_mul(&pk, &d2, &d2).unwrap();
    let d8 = ct_mul(&pk, &d4, &d4).unwrap();
    let d16 = ct_mul(&pk, &d8, &d8).unwrap();
    h.check(dec(&pk, &sk, &d8) == 256, "2^8 = 256");
    h.check(dec(&pk, &sk, &d16) == 65536, "2^16 = 65536");
    println!(
        "   edges: x^2 = {}, x^4 = {}, x^8 = {}, x^16 = {} (layers = {})",
        d2.edges.len(),
        d4.edges.len(),
        d8.edges.len(),
        d16.edges.len(),
        d16.layers.len()
    );

    h.section("random pairs");
    for i in 0..10 {
        let r1 = csprng_below(1000);
        let r2 = csprng_below(1000);
        let cr1 = enc(&pk, &sk, r1);
        let cr2 = enc(&pk, &sk, r2);
        let sum = dec(&pk, &sk, &ct_add(&pk, &cr1, &cr2).unwrap());
        let prod = dec(&pk, &sk, &ct_mul(&pk, &cr1, &cr2).unwrap());
        let ok = sum == r1 + r2 && prod == r1 * r2;
        h.check(ok, &format!("[{i}] {r1} + {r2} = {sum}, {r1} * {r2} = {prod}"));
    }

    h.section("fib(10)");
    let mut fib_p = enc(&pk, &sk, 0);
    let mut fib_c = enc(&pk, &sk, 1);
    for _ in 2..=10 {
        let next = ct_add(&pk, &fib_p, &fib_c).unwrap();
        fib_p = fib_c;
        fib_c = next;
    }
    h.check(dec(&pk, &sk, &fib_c) == 55, "fib(10) = 55");

    h.section("6!");
    let mut fact = enc(&pk, &sk, 1);
    for i in 2..=6 {
        fact = ct_mul(&pk, &fact, &enc(&pk, &sk, i)).unwrap();
    }
    h.check(dec(&pk, &sk, &fact) == 720, "6! = 720");

    h.section("nested ((3 + 5) * 7 - 3) * 5");
    let va = enc(&pk, &sk, 3);
    let vb = enc(&pk, &sk, 5);
    let vc = enc(&pk, &sk, 7);
    let nested = ct_mul(
        &pk,
        &ct_sub(&pk, &ct_mul(&pk, &ct_add(&pk, &va, &vb).unwrap(), &vc).unwrap(), &va).unwrap(),
        &vb,
    )
    .unwrap();
    h.check(dec(&pk, &sk, &nested) == 265, "((3 + 5) * 7 - 3) * 5 = 265");

    h.section("diff ct same val");
    let ca1 = enc(&pk, &sk, 100);
    let ca2 = enc(&pk, &sk, 100);
    h.check(
        dec(&pk, &sk, &ca1) == 100 && dec(&pk, &sk, &ca2) == 100,
        "both = 100",
    );
    h.check(ca1.edges[0].w != ca2.edges[0].w, "different edge weights");

    h.section("commit uniq");
    let cm1 = commit_ct(&pk, &ca1);
    let cm2 = commit_ct(&pk, &ca2);
    h.check(cm1 != cm2, "different ct -> different commit");
    println!("   c1 = 0x{}", hex8(&cm1));
    println!("   c2 = 0x{}", hex8(&cm2));

    h.section("recrypt");
    let ek = make_evalkey(&pk, &sk, 4, 2).unwrap();
    let rc = ct_recrypt(&pk, &ek, &fact).unwrap();
    h.check(dec(&pk, &sk, &rc) == 720, "recrypt keeps 6! = 720");

    h.section("text");
    for text in [
        "ABCDEFGHIJKLMNOPQRSTUVWXYZabcdefghijklmnopqrstuvwxyz0123456789",
        "!@#$%^&*()_+-=[]{}|;':\",./<>?`~",
        "hello world 123",
        "",
    ] {
        let round = dec_text(&pk, &sk, &enc_text(&pk, &sk, text).unwrap()).unwrap();
        h.check(round == text, &format!("roundtrip {:?}", text));
    }

    h.section("perf 100 adds");
    let t0 = Instant::now();
    let mut sum = enc(&pk, &sk, 0);
    for i in 0..100 {
        sum = ct_add(&pk, &sum, &enc(&pk, &sk, i)).unwrap();
    }
    h.check(dec(&pk, &sk, &sum) == 4950, "sum(0..99) = 4950");
    println!(
        "   time = {} ms, edges = {}",
        t0.elapsed().as_millis(),
        sum.edges.len()
    );
    dump_metrics(&pk, "adds100", &sum, dec_value(&pk, &sk, &sum).unwrap());

    h.section("perf 10 muls");
    let t0 = Instant::now();
    let mut prod = enc(&pk, &sk, 1);
    for _ in 0..10 {
        prod = ct_mul(&pk, &prod, &enc(&pk, &sk, 2)).unwrap();
    }
    h.check(dec(&pk, &sk, &prod) == 1024, "2^10 = 1024");
    println!(
        "   time = {} ms, edges = {}, layers = {}",
        t0.elapsed().as_millis(),
        prod.edges.len(),
        prod.layers.len()
    );
    dump_metrics(&pk, "muls10", &prod, dec_value(&pk, &sk, &prod).unwrap());

    h.section("large val");
    let large = 123_456_789_u64;
    h.check(
        dec(&pk, &sk, &enc(&pk, &sk, large)) == large,
        "enc / dec 123456789",
    );

    println!("\n___________________");
    println!("results: {} passed, {} failed", h.pass, h.fail);

    std::process::exit(if h.fail > 0 { 1 } else { 0 });
}
