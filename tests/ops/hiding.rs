// Copyright 2025 Developers of the pvac-hfhe project.
//
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Hiding: repeated encryption must not repeat observable ciphertext bits.

use crate::common::{dec, enc, setup};
use pvac_hfhe::ops::commit_ct;

#[test]
fn same_plaintext_encrypts_differently() {
    let (pk, sk) = setup();
    let c1 = enc(&pk, &sk, 100);
    let c2 = enc(&pk, &sk, 100);

    assert_ne!(c1.edges[0].w, c2.edges[0].w);
    assert_eq!(dec(&pk, &sk, &c1), 100);
    assert_eq!(dec(&pk, &sk, &c2), 100);
}

#[test]
fn commitments_of_independent_encryptions_differ() {
    let (pk, sk) = setup();
    let c1 = enc(&pk, &sk, 100);
    let c2 = enc(&pk, &sk, 100);

    assert_ne!(commit_ct(&pk, &c1), commit_ct(&pk, &c2));
}
