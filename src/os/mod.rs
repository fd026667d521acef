// Copyright 2025 Developers of the pvac-hfhe project.
//
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

use std::os::raw::c_int;

/// Type represents `OSStatus` from the Apple Security framework.
pub type SecOsStatus = c_int;

/// Type represents "errno" of libc.
pub type LibcErrno = c_int;

/// Type represents `NTSTATUS` (Windows error code).
pub type NtStatus = u32;

#[cfg(target_os = "macos")]
pub(crate) mod apple;
#[cfg(target_os = "linux")]
pub(crate) mod linux;
#[cfg(target_os = "windows")]
pub(crate) mod windows;
