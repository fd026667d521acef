// Copyright 2025 Developers of the pvac-hfhe project.
//
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! CSV telemetry and audit folds.

use crate::cipher::{sigma_density, Cipher, EdgeSign, PubKey};
use crate::config::debug_level;
use crate::field::Fp;
use std::fs::{File, OpenOptions};
use std::io::Write;
use std::sync::Mutex;
use std::sync::OnceLock;

const METRICS_PATH: &str = "pvac_metrics.csv";
const METRICS_HEADER: &str = "tag,edges,layers,sigma_density,value_lo,value_hi\n";

static METRICS_FILE: OnceLock<Mutex<Option<File>>> = OnceLock::new();

/// Appends one row of ciphertext statistics to `pvac_metrics.csv`.
///
/// The header is written once per process. Disabled at debug level 0;
/// I/O failures are swallowed — telemetry never affects the operation
/// being measured.
pub fn dump_metrics(pk: &PubKey, tag: &str, c: &Cipher, val: Fp) {
    if debug_level() < 1 {
        return;
    }

    let file = METRICS_FILE.get_or_init(|| {
        let opened = OpenOptions::new()
            .create(true)
            .append(true)
            .open(METRICS_PATH)
            .and_then(|mut f| f.write_all(METRICS_HEADER.as_bytes()).map(|_| f));
        Mutex::new(opened.ok())
    });

    let mut guard = match file.lock() {
        Ok(guard) => guard,
        Err(_) => return,
    };
    if let Some(f) = guard.as_mut() {
        let density = sigma_density(pk, c);
        let _ = writeln!(
            f,
            "{},{},{},{:.6},{},{}",
            tag,
            c.edges.len(),
            c.layers.len(),
            density,
            val.lo,
            val.hi
        );
    }
}

/// The signed g-weighted edge sum of one layer, before mask inversion.
pub fn agg_layer_gsum(pk: &PubKey, c: &Cipher, lid: u32) -> Fp {
    let mut sum = Fp::zero();
    for e in &c.edges {
        if e.layer_id != lid {
            continue;
        }
        let term = e.w * pk.powg_b[e.idx as usize];
        sum = match e.ch {
            EdgeSign::P => sum + term,
            EdgeSign::M => sum - term,
        };
    }
    sum
}

/// Audits a multiplication: every product layer's edge sum must equal the
/// product of the two operand layers' edge sums.
pub fn check_mul_gsum_all(pk: &PubKey, a: &Cipher, b: &Cipher, c: &Cipher) -> bool {
    let base_count = (a.layers.len() + b.layers.len()) as u32;
    let lb_count = b.layers.len() as u32;

    for la in 0..a.layers.len() as u32 {
        for lb in 0..lb_count {
            let lc = base_count + la * lb_count + lb;

            let aa = agg_layer_gsum(pk, a, la);
            let bb = agg_layer_gsum(pk, b, lb);
            let cc = agg_layer_gsum(pk, c, lc);
            if cc != aa * bb {
                return false;
            }
        }
    }

    true
}
