// Copyright 2025 Developers of the pvac-hfhe project.
//
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Implementation for iOS and macOS.

use super::error::GetOsRandomBytesError;
use crate::os::apple::sec_random_copy_bytes;

/// Returns cryptographically secure random bytes with the specified `len`.
pub(crate) fn get_os_random_bytes_impl(len: u32) -> Result<Vec<u8>, GetOsRandomBytesError> {
    let mut bytes = vec![0u8; len as usize];

    let ret = sec_random_copy_bytes(&mut bytes);
    if ret == 0 {
        Ok(bytes)
    } else {
        Err(GetOsRandomBytesError::AppleSecRandom(ret))
    }
}
