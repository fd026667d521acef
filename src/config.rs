// Copyright 2025 Developers of the pvac-hfhe project.
//
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Process-wide debug verbosity.
//!
//! The level is an integer in `[0, 2]`, read once from the environment
//! (`PVAC_DBG`, falling back to `HFHE_DBG`) and adjustable at runtime.
//! Level 1 (the default) enables CSV telemetry, level 2 additionally
//! enables stderr diagnostics.

use std::sync::atomic::{AtomicI32, Ordering};

const UNSET: i32 = -1;

static LEVEL: AtomicI32 = AtomicI32::new(UNSET);

/// Returns the current debug level in `[0, 2]`.
pub fn debug_level() -> i32 {
    let level = LEVEL.load(Ordering::Relaxed);
    if level != UNSET {
        return level;
    }

    let level = level_from_env();
    LEVEL.store(level, Ordering::Relaxed);
    level
}

/// Overrides the debug level. Values outside `[0, 2]` are clamped.
pub fn set_debug_level(level: i32) {
    LEVEL.store(level.clamp(0, 2), Ordering::Relaxed);
}

fn level_from_env() -> i32 {
    let value = std::env::var("PVAC_DBG").or_else(|_| std::env::var("HFHE_DBG"));
    match value {
        Ok(s) => s.trim().parse::<i32>().unwrap_or(1).clamp(0, 2),
        Err(_) => 1,
    }
}
