// Copyright 2025 Developers of the pvac-hfhe project.
//
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! End-to-end evaluation scenarios.

use crate::common::{dec, enc, setup};
use pvac_hfhe::cipher::{validate, Layer};
use pvac_hfhe::ops::{ct_add, ct_mul, ct_sub};

#[test]
fn add_and_mul_of_42_and_17() {
    let (pk, sk) = setup();
    let a = enc(&pk, &sk, 42);
    let b = enc(&pk, &sk, 17);

    assert_eq!(dec(&pk, &sk, &ct_add(&pk, &a, &b).unwrap()), 59);
    assert_eq!(dec(&pk, &sk, &ct_mul(&pk, &a, &b).unwrap()), 714);
}

#[test]
fn cubic_polynomial_at_five() {
    let (pk, sk) = setup();

    // f(x) = x^3 + 2x^2 + 3x + 4 at x = 5.
    let x = enc(&pk, &sk, 5);
    let c2 = enc(&pk, &sk, 2);
    let c3 = enc(&pk, &sk, 3);
    let c4 = enc(&pk, &sk, 4);

    let x2 = ct_mul(&pk, &x, &x).unwrap();
    let x3 = ct_mul(&pk, &x2, &x).unwrap();
    let poly = ct_add(
        &pk,
        &ct_add(
            &pk,
            &ct_add(&pk, &x3, &ct_mul(&pk, &c2, &x2).unwrap()).unwrap(),
            &ct_mul(&pk, &c3, &x).unwrap(),
        )
        .unwrap(),
        &c4,
    )
    .unwrap();

    assert_eq!(dec(&pk, &sk, &poly), 194);
}

#[test]
fn nested_expression() {
    let (pk, sk) = setup();

    // ((3 + 5) * 7 - 3) * 5 = 265
    let a = enc(&pk, &sk, 3);
    let b = enc(&pk, &sk, 5);
    let c = enc(&pk, &sk, 7);

    let nested = ct_mul(
        &pk,
        &ct_sub(&pk, &ct_mul(&pk, &ct_add(&pk, &a, &b).unwrap(), &c).unwrap(), &a).unwrap(),
        &b,
    )
    .unwrap();

    assert_eq!(dec(&pk, &sk, &nested), 265);
}

#[test]
fn sum_of_first_hundred() {
    let (pk, sk) = setup();

    let mut sum = enc(&pk, &sk, 0);
    for i in 1..100 {
        sum = ct_add(&pk, &sum, &enc(&pk, &sk, i)).unwrap();
    }

    assert_eq!(dec(&pk, &sk, &sum), 4950);
}

#[test]
fn invariants_hold_through_an_op_chain() {
    let (pk, sk) = setup();

    let a = enc(&pk, &sk, 12);
    let b = enc(&pk, &sk, 34);
    let c = ct_mul(
        &pk,
        &ct_add(&pk, &a, &b).unwrap(),
        &ct_sub(&pk, &a, &b).unwrap(),
    )
    .unwrap();
    let d = ct_mul(&pk, &c, &c).unwrap();

    for ct in [&a, &b, &c, &d] {
        validate(&pk, ct).unwrap();
        for e in &ct.edges {
            assert!((e.layer_id as usize) < ct.layers.len());
        }
        for (i, layer) in ct.layers.iter().enumerate() {
            if let Layer::Prod { pa, pb } = layer {
                assert!((*pa as usize) < i && (*pb as usize) < i);
            }
        }
    }

    // (12 + 34)(12 - 34) squared: the negative intermediate squares back
    // to a positive integer.
    let expected = (46_u64 * 22).pow(2);
    assert_eq!(dec(&pk, &sk, &d), expected);
}
