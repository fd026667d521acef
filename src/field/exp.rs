// Copyright 2025 Developers of the pvac-hfhe project.
//
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Exponentiation and inversion in GF(2^127 - 1).

use super::fp::Fp;

// Window width of the inversion exponent walk.
const INV_WINDOW: u32 = 5;

impl Fp {
    /// Raises `self` to the power of `e`, right-to-left binary.
    pub fn pow_u64(self, e: u64) -> Fp {
        self.pow_u128(e as u128)
    }

    pub fn pow_u128(self, mut e: u128) -> Fp {
        let mut base = self;
        let mut r = Fp::one();

        while e != 0 {
            if e & 1 == 1 {
                r = r * base;
            }
            base = base * base;
            e >>= 1;
        }

        r
    }

    /// Returns the multiplicative inverse `self^(p - 2)`.
    ///
    /// The exponent e = 2^127 - 3 is scanned from bit 126 down with a
    /// width-5 window over a table of the first 32 powers. The result for
    /// a zero input is unspecified; callers must pass a nonzero element.
    pub fn inv(self) -> Fp {
        let mut tbl = [Fp::one(); 1 << INV_WINDOW];
        tbl[1] = self;
        for i in 2..tbl.len() {
            tbl[i] = tbl[i - 1] * self;
        }

        let e: u128 = (1 << 127) - 3;
        let mut r = Fp::one();
        let mut pos: i32 = 126;

        while pos >= 0 {
            if (e >> pos) & 1 == 0 {
                r = r * r;
                pos -= 1;
                continue;
            }

            let mut l = (pos - INV_WINDOW as i32 + 1).max(0);
            let mut k = ((e >> l) & ((1 << (pos - l + 1)) - 1)) as usize;

            while k >= tbl.len() {
                k >>= 1;
                l += 1;
            }

            for _ in 0..(pos - l + 1) {
                r = r * r;
            }
            r = r * tbl[k];
            pos = l - 1;
        }

        r
    }
}
