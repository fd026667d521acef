// Copyright 2025 Developers of the pvac-hfhe project.
//
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Implementation for Linux.

use super::error::GetOsRandomBytesError;
use crate::os::LibcErrno;

#[cfg(test)]
use mockall::automock;

/// The syscall seam, separated so the chunking logic can be exercised
/// against a mock source.
#[cfg_attr(test, automock)]
pub(crate) trait EntropySyscall {
    fn fill(&self, dest: &mut [u8]) -> Result<isize, LibcErrno>;
}

struct GetRandom;

impl EntropySyscall for GetRandom {
    fn fill(&self, dest: &mut [u8]) -> Result<isize, LibcErrno> {
        crate::os::linux::getrandom(dest)
    }
}

/// Returns cryptographically secure random bytes with the specified `len`.
pub(crate) fn get_os_random_bytes_impl(len: u32) -> Result<Vec<u8>, GetOsRandomBytesError> {
    get_os_random_bytes_from(len, &GetRandom)
}

fn get_os_random_bytes_from(
    len: u32,
    source: &dyn EntropySyscall,
) -> Result<Vec<u8>, GetOsRandomBytesError> {
    // `man getrandom`:
    //
    // If the urandom source has been initialized, reads of up to 256
    // bytes will always return as many bytes as requested and will not
    // be interrupted by signals. No such guarantees apply for larger
    // buffer sizes.
    const CHUNK_BYTES_LEN: usize = 256;

    let mut bytes = vec![0u8; len as usize];
    for chunk in bytes.chunks_mut(CHUNK_BYTES_LEN) {
        match source.fill(chunk) {
            Ok(copied) => {
                if usize::try_from(copied).unwrap() != chunk.len() {
                    return Err(
                        GetOsRandomBytesError::LinuxGetRandomCopiedNumberLessThanRequested,
                    );
                }
            }
            Err(errno) => return Err(GetOsRandomBytesError::LinuxGetRandom(errno)),
        }
    }

    Ok(bytes)
}
