// Copyright 2025 Developers of the pvac-hfhe project.
//
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

use crate::os::{LibcErrno, NtStatus, SecOsStatus};
use std::fmt;
use std::fmt::Display;

/// An error returned by [`get_os_random_bytes`](super::generator::get_os_random_bytes).
#[derive(Clone, Debug, PartialEq, Eq)]
#[non_exhaustive]
pub enum GetOsRandomBytesError {
    LinuxGetRandom(LibcErrno),
    LinuxGetRandomCopiedNumberLessThanRequested,
    AppleSecRandom(SecOsStatus),
    WindowsBCryptGenRandom(NtStatus),
}

impl Display for GetOsRandomBytesError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GetOsRandomBytesError::LinuxGetRandom(errno) => {
                write!(f, "getrandom failed with errno {errno}")
            }
            GetOsRandomBytesError::LinuxGetRandomCopiedNumberLessThanRequested => {
                write!(f, "getrandom copied fewer bytes than requested")
            }
            GetOsRandomBytesError::AppleSecRandom(status) => {
                write!(f, "SecRandomCopyBytes failed with result {status}")
            }
            GetOsRandomBytesError::WindowsBCryptGenRandom(status) => {
                write!(f, "BCryptGenRandom failed with status {status:#x}")
            }
        }
    }
}

impl std::error::Error for GetOsRandomBytesError {}
