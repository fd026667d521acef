// Copyright 2025 Developers of the pvac-hfhe project.
//
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! The edge budget is a hard ceiling, not a retryable condition.

use pvac_hfhe::cipher::{CipherError, Params};
use pvac_hfhe::ops::{ct_add, ct_mul, enc_value, keygen};

#[test]
fn budget_exceeded_fires_and_operands_survive() {
    let mut prm = Params::default();
    prm.edge_budget = 6;
    let (pk, sk) = keygen(prm);

    let mut acc = enc_value(&pk, &sk, 1).unwrap();
    let step = enc_value(&pk, &sk, 1).unwrap();

    // Keep adding until the projected edge count crosses the ceiling.
    let err = loop {
        match ct_add(&pk, &acc, &step) {
            Ok(next) => {
                assert!(next.edges.len() <= pk.prm.edge_budget);
                acc = next;
            }
            Err(err) => break err,
        }
    };

    assert!(matches!(
        err,
        CipherError::BudgetExceeded { op: "add", .. }
    ));
    // Value semantics: the failed operation left its inputs usable.
    assert_eq!(
        pvac_hfhe::ops::dec_value(&pk, &sk, &acc).unwrap().lo,
        acc.edges.len() as u64 / 2
    );
}

#[test]
fn mul_respects_the_budget() {
    let mut prm = Params::default();
    prm.edge_budget = 2;
    let (pk, sk) = keygen(prm);

    let a = enc_value(&pk, &sk, 2).unwrap();
    let b = enc_value(&pk, &sk, 3).unwrap();

    // 2 x 2 edge pairs aggregate to three edges, one over the ceiling.
    assert!(matches!(
        ct_mul(&pk, &a, &b),
        Err(CipherError::BudgetExceeded { op: "mul", .. })
    ));
}
