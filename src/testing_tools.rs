// Copyright 2025 Developers of the pvac-hfhe project.
//
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Helpers shared by the unit tests.

use crate::cipher::Params;
use crate::field::Fp;
use quickcheck::{Arbitrary, Gen};

/// Parameters scaled down for fast unit tests.
///
/// The homomorphic identities hold uniformly in the parameters; only the
/// security margins shrink. B keeps its default so index arithmetic is
/// exercised at full width.
pub(crate) fn reduced_params() -> Params {
    Params {
        m_bits: 256,
        h_col_wt: 16,
        lpn_n: 256,
        lpn_t: 512,
        edge_budget: 100_000,
        ..Params::default()
    }
}

/// A uniformly distributed field element for quickcheck properties.
#[derive(Clone, Debug)]
pub(crate) struct ArbitraryFp(pub(crate) Fp);

impl Arbitrary for ArbitraryFp {
    fn arbitrary(g: &mut Gen) -> Self {
        ArbitraryFp(Fp::from_words(u64::arbitrary(g), u64::arbitrary(g)))
    }
}
