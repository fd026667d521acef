// Copyright 2025 Developers of the pvac-hfhe project.
//
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Ring laws over plaintexts, evaluated homomorphically.

use crate::common::{dec, enc, setup};
use pvac_hfhe::ops::{ct_add, ct_mul, ct_sub};

#[test]
fn additive_identity() {
    let (pk, sk) = setup();
    let a = enc(&pk, &sk, 42);
    let zero = enc(&pk, &sk, 0);

    let sum = ct_add(&pk, &a, &zero).unwrap();
    assert_eq!(dec(&pk, &sk, &sum), 42);
}

#[test]
fn multiplicative_absorber_and_identity() {
    let (pk, sk) = setup();
    let a = enc(&pk, &sk, 42);
    let zero = enc(&pk, &sk, 0);
    let one = enc(&pk, &sk, 1);

    assert_eq!(dec(&pk, &sk, &ct_mul(&pk, &a, &zero).unwrap()), 0);
    assert_eq!(dec(&pk, &sk, &ct_mul(&pk, &a, &one).unwrap()), 42);
}

#[test]
fn self_subtraction() {
    let (pk, sk) = setup();
    let a = enc(&pk, &sk, 42);

    assert_eq!(dec(&pk, &sk, &ct_sub(&pk, &a, &a).unwrap()), 0);
}

#[test]
fn commutativity() {
    let (pk, sk) = setup();
    let a = enc(&pk, &sk, 42);
    let b = enc(&pk, &sk, 17);

    let ab = dec(&pk, &sk, &ct_add(&pk, &a, &b).unwrap());
    let ba = dec(&pk, &sk, &ct_add(&pk, &b, &a).unwrap());
    assert_eq!(ab, ba);
    assert_eq!(ab, 59);

    let ab = dec(&pk, &sk, &ct_mul(&pk, &a, &b).unwrap());
    let ba = dec(&pk, &sk, &ct_mul(&pk, &b, &a).unwrap());
    assert_eq!(ab, ba);
    assert_eq!(ab, 714);
}

#[test]
fn associativity() {
    let (pk, sk) = setup();
    let a = enc(&pk, &sk, 42);
    let b = enc(&pk, &sk, 17);
    let c = enc(&pk, &sk, 7);

    let left = ct_add(&pk, &ct_add(&pk, &a, &b).unwrap(), &c).unwrap();
    let right = ct_add(&pk, &a, &ct_add(&pk, &b, &c).unwrap()).unwrap();
    assert_eq!(dec(&pk, &sk, &left), dec(&pk, &sk, &right));

    let left = ct_mul(&pk, &ct_mul(&pk, &a, &b).unwrap(), &c).unwrap();
    let right = ct_mul(&pk, &a, &ct_mul(&pk, &b, &c).unwrap()).unwrap();
    assert_eq!(dec(&pk, &sk, &left), dec(&pk, &sk, &right));
    assert_eq!(dec(&pk, &sk, &left), 42 * 17 * 7);
}

#[test]
fn distributivity() {
    let (pk, sk) = setup();
    let a = enc(&pk, &sk, 42);
    let b = enc(&pk, &sk, 17);
    let c = enc(&pk, &sk, 7);

    let left = ct_mul(&pk, &a, &ct_add(&pk, &b, &c).unwrap()).unwrap();
    let right = ct_add(
        &pk,
        &ct_mul(&pk, &a, &b).unwrap(),
        &ct_mul(&pk, &a, &c).unwrap(),
    )
    .unwrap();
    assert_eq!(dec(&pk, &sk, &left), dec(&pk, &sk, &right));
    assert_eq!(dec(&pk, &sk, &left), 42 * (17 + 7));
}

#[test]
fn binomial_square() {
    let (pk, sk) = setup();
    let a = enc(&pk, &sk, 42);
    let b = enc(&pk, &sk, 17);

    let a_plus_b = ct_add(&pk, &a, &b).unwrap();
    let lhs = ct_mul(&pk, &a_plus_b, &a_plus_b).unwrap();

    let a_sq = ct_mul(&pk, &a, &a).unwrap();
    let b_sq = ct_mul(&pk, &b, &b).unwrap();
    let ab = ct_mul(&pk, &a, &b).unwrap();
    let two_ab = ct_add(&pk, &ab, &ab).unwrap();
    let rhs = ct_add(&pk, &ct_add(&pk, &a_sq, &two_ab).unwrap(), &b_sq).unwrap();

    let expected = (42 + 17) * (42 + 17);
    assert_eq!(dec(&pk, &sk, &lhs), expected);
    assert_eq!(dec(&pk, &sk, &rhs), expected);
}

#[test]
fn difference_of_squares() {
    let (pk, sk) = setup();
    let a = enc(&pk, &sk, 42);
    let b = enc(&pk, &sk, 17);

    let a_minus_b = ct_sub(&pk, &a, &b).unwrap();
    let a_plus_b = ct_add(&pk, &a, &b).unwrap();
    let lhs = ct_mul(&pk, &a_minus_b, &a_plus_b).unwrap();

    let a_sq = ct_mul(&pk, &a, &a).unwrap();
    let b_sq = ct_mul(&pk, &b, &b).unwrap();
    let rhs = ct_sub(&pk, &a_sq, &b_sq).unwrap();

    let expected = 42 * 42 - 17 * 17;
    assert_eq!(dec(&pk, &sk, &lhs), expected);
    assert_eq!(dec(&pk, &sk, &rhs), expected);
}
