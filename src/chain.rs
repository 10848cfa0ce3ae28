//! Length chains and their keyspace arithmetic.
//!
//! A chain is one ordered decomposition of an output length into part
//! lengths, e.g. 4 = 1+2+1. Chains are enumerated deterministically from a
//! bit index: reading the index bits from low to high, a set bit closes the
//! running part and a clear bit extends it by one. Index `i` of length `L`
//! therefore covers every composition of `L` exactly once for
//! `i` in `[0, 2^(L-1))`, and the enumeration is reproducible across runs.

use num_bigint::BigUint;
use num_traits::{One, ToPrimitive, Zero};

use crate::words::WordDb;

/// One ordered decomposition of an output length, together with its
/// keyspace size and the cursor of the next candidate to emit.
#[derive(Debug, Clone)]
pub struct Chain {
    parts: Vec<u8>,
    /// Number of candidates this chain can produce.
    pub ks_cnt: BigUint,
    /// Cursor into `[0, ks_cnt)`; the chain is drained when it reaches
    /// `ks_cnt`.
    pub ks_pos: BigUint,
}

impl Chain {
    /// Decode composition `idx` of `pw_len`.
    ///
    /// `idx` must lie in `[0, 2^(pw_len-1))`.
    pub fn from_index(pw_len: usize, idx: u32) -> Self {
        let mut parts = Vec::new();
        let mut part = 1u8;

        for shr in 0..pw_len - 1 {
            if (idx >> shr) & 1 == 1 {
                parts.push(part);
                part = 1;
            } else {
                part += 1;
            }
        }
        parts.push(part);

        Self {
            parts,
            ks_cnt: BigUint::zero(),
            ks_pos: BigUint::zero(),
        }
    }

    /// The part lengths in output order.
    pub fn parts(&self) -> &[u8] {
        &self.parts
    }

    /// Number of elements in the chain.
    pub fn elem_cnt(&self) -> usize {
        self.parts.len()
    }

    /// True when every part length has at least one word to draw from.
    pub fn buckets_populated(&self, db: &WordDb) -> bool {
        self.parts.iter().all(|&part| db.bucket_len(part as usize) > 0)
    }

    /// Product of the bucket sizes of all parts.
    pub fn keyspace(&self, db: &WordDb) -> BigUint {
        let mut ks_cnt = BigUint::one();
        for &part in &self.parts {
            ks_cnt *= db.bucket_len(part as usize);
        }
        ks_cnt
    }

    /// Write the candidate at offset `ks_pos` into `pw_buf`.
    ///
    /// The offset is read as a mixed-radix number whose radices are the
    /// bucket sizes in part order, least significant digit first. The head
    /// part therefore cycles fastest: adjacent offsets share their tail and
    /// differ in the head. `pw_buf` must be exactly the chain's output
    /// length.
    pub fn materialize(&self, db: &WordDb, ks_pos: &BigUint, pw_buf: &mut [u8]) {
        let mut ks_pos = ks_pos.clone();
        let mut off = 0;

        for &part in &self.parts {
            let len = part as usize;
            let words_cnt = db.bucket_len(len);

            let words_idx = (&ks_pos % words_cnt)
                .to_u64()
                .expect("mixed-radix digit is below a u64 radix");

            pw_buf[off..off + len].copy_from_slice(db.word(len, words_idx));
            off += len;

            ks_pos /= words_cnt;
        }
    }
}
