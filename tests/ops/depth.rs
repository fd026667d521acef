// Copyright 2025 Developers of the pvac-hfhe project.
//
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Deep evaluation: repeated squaring and small iterative programs.

use crate::common::{dec, enc, setup};
use pvac_hfhe::cipher::validate;
use pvac_hfhe::ops::{ct_add, ct_mul};

#[test]
fn repeated_squaring_of_two() {
    let (pk, sk) = setup();

    // enc(2)^(2^k) for k = 1..4, squaring each previous power.
    let mut power = enc(&pk, &sk, 2);
    let mut expected: u64 = 2;
    let mut edge_counts = vec![power.edges.len()];

    for _ in 1..=4 {
        power = ct_mul(&pk, &power, &power).unwrap();
        expected = expected * expected;
        edge_counts.push(power.edges.len());

        validate(&pk, &power).unwrap();
        assert_eq!(dec(&pk, &sk, &power), expected);
    }
    assert_eq!(expected, 65536);

    // Edge growth is strictly monotone across the squarings.
    for pair in edge_counts.windows(2) {
        assert!(
            pair[0] < pair[1],
            "edge counts not strictly monotone: {edge_counts:?}"
        );
    }
}

#[test]
fn fibonacci_ten() {
    let (pk, sk) = setup();

    let mut prev = enc(&pk, &sk, 0);
    let mut cur = enc(&pk, &sk, 1);
    for _ in 2..=10 {
        let next = ct_add(&pk, &prev, &cur).unwrap();
        prev = cur;
        cur = next;
    }

    assert_eq!(dec(&pk, &sk, &cur), 55);
}

#[test]
fn factorial_six() {
    let (pk, sk) = setup();

    let mut fact = enc(&pk, &sk, 1);
    for i in 2..=6 {
        fact = ct_mul(&pk, &fact, &enc(&pk, &sk, i)).unwrap();
    }

    assert_eq!(dec(&pk, &sk, &fact), 720);
}

#[test]
fn sum_of_squares_one_to_five() {
    let (pk, sk) = setup();

    let mut sum = enc(&pk, &sk, 0);
    for i in 1..=5 {
        let ci = enc(&pk, &sk, i);
        let sq = ct_mul(&pk, &ci, &ci).unwrap();
        sum = ct_add(&pk, &sum, &sq).unwrap();
    }

    assert_eq!(dec(&pk, &sk, &sum), 55);
}
