// Copyright 2025 Developers of the pvac-hfhe project.
//
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

mod sha256;
mod shake256;

pub use sha256::{sha256_acc_u64, sha256_bytes, Sha256};
pub use shake256::{Shake256, XofShake};
