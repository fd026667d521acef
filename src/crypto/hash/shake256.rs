// Copyright 2025 Developers of the pvac-hfhe project.
//
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

///! Implements SHAKE-256 (FIPS PUB 202)
///
/// A byte-oriented sponge over Keccak-f[1600]: rate 136 bytes, domain
/// separator 0x1F, final bit 0x80 at position rate - 1.

type KeccakfState = [u64; 25];

const KECCAKF_ROUNDS: usize = 24;
const RATE: usize = 136;
const DELIMITER_SUFFIX_SHAKE: u8 = 0x1f;

/// A SHAKE-256 sponge.
///
/// `absorb` may be called any number of times before the first `squeeze`;
/// absorbing after squeezing has begun is a caller bug and panics.
pub struct Shake256 {
    st: KeccakfState,
    pos: usize,
    squeezing: bool,
}

impl Shake256 {
    pub fn new() -> Shake256 {
        Shake256 {
            st: [0; 25],
            pos: 0,
            squeezing: false,
        }
    }

    pub fn absorb(&mut self, data: &[u8]) {
        assert!(!self.squeezing, "absorb after squeeze");

        for &byte in data {
            if self.pos == RATE {
                keccakf(&mut self.st);
                self.pos = 0;
            }
            self.st[self.pos / 8] ^= (byte as u64) << ((self.pos % 8) * 8);
            self.pos += 1;
        }
    }

    /// Applies the SHAKE padding and switches the sponge to squeezing.
    pub fn pad(&mut self) {
        self.st[self.pos / 8] ^= (DELIMITER_SUFFIX_SHAKE as u64) << ((self.pos % 8) * 8);
        self.st[(RATE - 1) / 8] ^= 0x80_u64 << (((RATE - 1) % 8) * 8);
        keccakf(&mut self.st);
        self.pos = 0;
        self.squeezing = true;
    }

    pub fn squeeze(&mut self, out: &mut [u8]) {
        if !self.squeezing {
            self.pad();
        }

        for byte in out.iter_mut() {
            if self.pos == RATE {
                keccakf(&mut self.st);
                self.pos = 0;
            }
            *byte = (self.st[self.pos / 8] >> ((self.pos % 8) * 8)) as u8;
            self.pos += 1;
        }
    }

    pub fn next_u64(&mut self) -> u64 {
        if !self.squeezing {
            self.pad();
        }

        // The rate is word-aligned, so a stream of u64 draws stays on word
        // boundaries and can read a state lane directly.
        if self.pos % 8 == 0 {
            if self.pos == RATE {
                keccakf(&mut self.st);
                self.pos = 0;
            }
            // A lane already holds its bytes in stream order: byte j of
            // the output is (lane >> 8j) & 0xff on every platform.
            let x = self.st[self.pos / 8];
            self.pos += 8;
            return x;
        }

        let mut b = [0; 8];
        self.squeeze(&mut b);
        u64::from_le_bytes(b)
    }
}

impl Default for Shake256 {
    fn default() -> Self {
        Self::new()
    }
}

fn keccakf(st: &mut KeccakfState) {
    let mut bc = [0_u64; 5];

    for r in 0..KECCAKF_ROUNDS {
        // Theta
        for i in 0..5 {
            bc[i] = st[i] ^ st[i + 5] ^ st[i + 10] ^ st[i + 15] ^ st[i + 20];
        }
        for i in 0..5 {
            let t = bc[(i + 4) % 5] ^ bc[(i + 1) % 5].rotate_left(1);
            for j in (0..25).step_by(5) {
                st[j + i] ^= t;
            }
        }

        // Rho Pi
        let mut t = st[1];
        for i in 0..24 {
            let j = KECCAKF_PILN[i];
            bc[0] = st[j];
            st[j] = t.rotate_left(KECCAKF_ROTC[i]);
            t = bc[0];
        }

        // Chi
        for j in (0..25).step_by(5) {
            bc.copy_from_slice(&st[j..j + 5]);
            for i in 0..5 {
                st[j + i] ^= (!bc[(i + 1) % 5]) & bc[(i + 2) % 5];
            }
        }

        // Iota
        st[0] ^= KECCAKF_RNDC[r];
    }
}

#[rustfmt::skip]
static KECCAKF_RNDC: [u64; 24] = [
    0x0000000000000001, 0x0000000000008082, 0x800000000000808a, 0x8000000080008000,
    0x000000000000808b, 0x0000000080000001, 0x8000000080008081, 0x8000000000008009,
    0x000000000000008a, 0x0000000000000088, 0x0000000080008009, 0x000000008000000a,
    0x000000008000808b, 0x800000000000008b, 0x8000000000008089, 0x8000000000008003,
    0x8000000000008002, 0x8000000000000080, 0x000000000000800a, 0x800000008000000a,
    0x8000000080008081, 0x8000000000008080, 0x0000000080000001, 0x8000000080008008,
];

static KECCAKF_ROTC: [u32; 24] = [
    1, 3, 6, 10, 15, 21, 28, 36, 45, 55, 2, 14, 27, 41, 56, 8, 25, 43, 62, 18, 39, 61, 20, 44,
];

static KECCAKF_PILN: [usize; 24] = [
    10, 7, 11, 17, 18, 3, 5, 16, 8, 21, 24, 4, 15, 23, 19, 13, 12, 2, 20, 14, 22, 9, 6, 1,
];

/// A labelled, seeded XOF stream.
///
/// The label provides domain separation; the seed words are absorbed in
/// little-endian order after it. After `init` the stream only squeezes.
pub struct XofShake {
    sh: Shake256,
}

impl XofShake {
    pub fn init(label: &str, seed: &[u64]) -> XofShake {
        let mut sh = Shake256::new();
        sh.absorb(label.as_bytes());
        for &word in seed {
            sh.absorb(&word.to_le_bytes());
        }
        sh.pad();
        XofShake { sh }
    }

    pub fn take_u64(&mut self) -> u64 {
        self.sh.next_u64()
    }

    /// Draws a uniform value in `[0, m)` by rejection sampling, so the
    /// result carries no modular bias.
    pub fn bounded(&mut self, m: u64) -> u64 {
        if m <= 1 {
            return 0;
        }

        let lim = u64::MAX - (u64::MAX % m);
        loop {
            let x = self.take_u64();
            if x < lim {
                return x % m;
            }
        }
    }
}
