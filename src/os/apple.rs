// Copyright 2025 Developers of the pvac-hfhe project.
//
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Implements system-call wrappers for iOS and macOS.

use super::SecOsStatus;

mod security {
    use crate::os::SecOsStatus;
    use std::ffi::c_void;

    #[link(name = "Security", kind = "framework")]
    extern "C" {
        // int SecRandomCopyBytes(SecRandomRef rnd, size_t count, void *bytes);
        #[allow(non_snake_case)]
        pub(crate) fn SecRandomCopyBytes(
            rnd: *const c_void,
            count: usize,
            bytes: *mut u8,
        ) -> SecOsStatus;
    }
}

/// Fills `dest` with random bytes.
///
/// Returns 0 on success. The NULL generator argument selects
/// `kSecRandomDefault`.
pub(crate) fn sec_random_copy_bytes(dest: &mut [u8]) -> SecOsStatus {
    use std::ptr::null;

    unsafe { security::SecRandomCopyBytes(null(), dest.len(), dest.as_mut_ptr()) }
}
