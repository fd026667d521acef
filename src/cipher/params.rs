// Copyright 2025 Developers of the pvac-hfhe project.
//
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

/// The public scheme parameters, fixed at key generation.
#[derive(Clone, Debug, PartialEq)]
pub struct Params {
    /// Modulus for edge indices and the plaintext range.
    pub b: u32,
    /// Width of the per-edge carrier vector.
    pub m_bits: usize,
    /// Reserved for the key-generation collaborator; unused by the core.
    pub n_bits: usize,
    pub h_col_wt: usize,
    pub x_col_wt: usize,
    pub err_wt: usize,
    pub noise_entropy_bits: f64,
    pub tuple2_fraction: f64,
    pub depth_slope_bits: f64,
    /// Upper bound on the edge count of any ciphertext.
    pub edge_budget: usize,
    /// LPN secret bit length.
    pub lpn_n: usize,
    /// LPN sample count per PRF core.
    pub lpn_t: usize,
    pub lpn_tau_num: u64,
    pub lpn_tau_den: u64,
}

impl Default for Params {
    fn default() -> Self {
        Params {
            b: 127,
            m_bits: 8192,
            n_bits: 16384,
            h_col_wt: 192,
            x_col_wt: 128,
            err_wt: 128,
            noise_entropy_bits: 80.0,
            tuple2_fraction: 0.55,
            depth_slope_bits: 10.0,
            edge_budget: 800_000,
            lpn_n: 2048,
            lpn_t: 4096,
            lpn_tau_num: 1,
            lpn_tau_den: 8,
        }
    }
}
