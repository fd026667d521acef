// Copyright 2025 Developers of the pvac-hfhe project.
//
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Binary serialization of ciphertexts and keys.
//!
//! Every stream opens with LE32(magic) then LE32(version). Integer
//! fields are little-endian throughout; the three floating parameters
//! are stored as IEEE-754 bit patterns, so loading is lossless.

mod reader;
mod writer;

pub use reader::{read_ciphers, read_pubkey, read_seckey};
pub use writer::{write_ciphers, write_pubkey, write_seckey};

use std::fmt;
use std::fmt::Display;

pub const MAGIC_CT: u32 = 0x6669_9666;
pub const MAGIC_SK: u32 = 0x6666_6999;
pub const MAGIC_PK: u32 = 0x0666_0666;
pub const FORMAT_VERSION: u32 = 1;

/// An error from reading or writing the binary formats.
#[derive(Debug)]
#[non_exhaustive]
pub enum IoError {
    Io(std::io::Error),
    BadMagic { expected: u32, found: u32 },
    BadVersion(u32),
    Malformed(&'static str),
}

impl Display for IoError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            IoError::Io(err) => write!(f, "i/o failure: {err}"),
            IoError::BadMagic { expected, found } => {
                write!(f, "bad magic: expected {expected:#010x}, found {found:#010x}")
            }
            IoError::BadVersion(version) => write!(f, "unsupported format version {version}"),
            IoError::Malformed(what) => write!(f, "malformed stream: {what}"),
        }
    }
}

impl std::error::Error for IoError {}

impl From<std::io::Error> for IoError {
    fn from(err: std::io::Error) -> IoError {
        IoError::Io(err)
    }
}
