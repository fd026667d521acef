// Copyright 2025 Developers of the pvac-hfhe project.
//
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Domain-separation labels.
//!
//! Each label keys a distinct hash/XOF context; the strings themselves are
//! opaque and must never collide across uses.

pub const H_GEN: &str = "hf|h";
pub const X_SEED: &str = "hf|sx";
pub const NOISE: &str = "hf|sn";
pub const PRF_LPN: &str = "hf|pr";
pub const PRF_R1: &str = "hf|p1";
pub const PRF_R2: &str = "hf|p2";
pub const PRF_R3: &str = "hf|p3";
pub const TOEP: &str = "hf|tp";
pub const ZTAG: &str = "hf|zt";
pub const COMMIT: &str = "hf|cm";
