// Copyright 2025 Developers of the pvac-hfhe project.
//
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

mod arithmetic;
mod commit;
mod decrypt;
mod encrypt;
mod keygen;
mod recrypt;

pub use arithmetic::{ct_add, ct_div_const, ct_mul, ct_neg, ct_scale, ct_sub};
pub use commit::commit_ct;
pub use decrypt::dec_value;
pub use encrypt::{enc_fp, enc_value, enc_zero_depth};
pub use keygen::keygen;
pub use recrypt::{ct_recrypt, make_evalkey, ubk_apply};
