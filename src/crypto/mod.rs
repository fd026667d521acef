// Copyright 2025 Developers of the pvac-hfhe project.
//
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

pub mod domains;
pub mod hash;
pub mod lpn;
pub mod toeplitz;

pub use lpn::prf_r;
pub use toeplitz::hash_to_fp_nonzero;
