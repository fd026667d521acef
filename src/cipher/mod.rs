// Copyright 2025 Developers of the pvac-hfhe project.
//
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

mod checks;
mod error;
mod params;
mod types;

pub use checks::{compact_edges, guard_budget, sigma_density, validate};
pub use error::CipherError;
pub use params::Params;
pub use types::{Cipher, Edge, EdgeSign, EvalKey, Layer, Nonce128, PubKey, RSeed, SecKey, Ubk};
