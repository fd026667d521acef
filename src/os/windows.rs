// Copyright 2025 Developers of the pvac-hfhe project.
//
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Implements system-call wrappers for Windows.

use super::NtStatus;

mod bcrypt {
    use crate::os::NtStatus;
    use std::ffi::c_void;

    #[link(name = "bcrypt")]
    extern "system" {
        // NTSTATUS BCryptGenRandom(BCRYPT_ALG_HANDLE hAlgorithm,
        //                          PUCHAR pbBuffer, ULONG cbBuffer,
        //                          ULONG dwFlags);
        #[allow(non_snake_case)]
        pub(crate) fn BCryptGenRandom(
            hAlgorithm: *mut c_void,
            pBuffer: *mut u8,
            cbBuffer: u32,
            dwFlags: u32,
        ) -> NtStatus;
    }
}

/// Fills `dest` with random bytes from the system-preferred generator.
pub(crate) fn bcrypt_gen_random(dest: &mut [u8]) -> NtStatus {
    use std::ptr::null_mut;

    const BCRYPT_USE_SYSTEM_PREFERRED_RNG: u32 = 0x0000_0002;
    // hAlgorithm must be NULL when the system-preferred RNG flag is set.
    unsafe {
        bcrypt::BCryptGenRandom(
            null_mut(),
            dest.as_mut_ptr(),
            dest.len() as u32,
            BCRYPT_USE_SYSTEM_PREFERRED_RNG,
        )
    }
}
