// Copyright 2025 Developers of the pvac-hfhe project.
//
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

#[cfg(target_os = "macos")]
mod apple;
#[cfg(target_os = "linux")]
mod linux;
#[cfg(target_os = "windows")]
mod windows;

mod csprng;
mod error;
mod os_random;

pub use csprng::{csprng_below, csprng_bytes, csprng_u64, rand_fp_nonzero};
pub use error::GetOsRandomBytesError;
pub use os_random::generator;
