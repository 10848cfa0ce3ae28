//! The emission driver: chain admission, per-length ordering and the
//! interleaved keyspace walk.

use std::io::Write;

use num_bigint::BigUint;
use num_traits::{ToPrimitive, Zero};

use crate::chain::Chain;
use crate::config::Config;
use crate::dist::wordlen_distribution;
use crate::error::PrinceError;
use crate::output::Sink;
use crate::words::WordDb;
use crate::IN_LEN_MAX;

/// All admitted chains for one output length, drained front to back.
#[derive(Debug)]
struct LengthGroup {
    pw_len: usize,
    chains: Vec<Chain>,
    /// Index of the chain currently being drained; the group is finished
    /// when it reaches `chains.len()`.
    elems_pos: usize,
}

#[derive(Debug)]
pub struct Generator {
    db: WordDb,
    groups: Vec<LengthGroup>,
    /// Visit order over `groups`, fixed for the whole run.
    order: Vec<usize>,
    dist: [u64; IN_LEN_MAX + 1],
    total_ks_cnt: BigUint,
    skip: BigUint,
}

impl Generator {
    /// Enumerate and admit chains for every length in the configured range,
    /// compute their keyspaces and freeze the run's orderings.
    ///
    /// Chains within a length are sorted ascending by keyspace with a
    /// stable sort, so chains of equal keyspace keep enumeration order.
    /// Lengths are visited in descending bucket-size order, again stable,
    /// so equally common lengths run shortest first.
    pub fn new(db: WordDb, config: &Config) -> Self {
        let mut groups = Vec::new();
        let mut total_ks_cnt = BigUint::zero();

        for pw_len in config.pw_min..=config.pw_max {
            let mut chains = Vec::new();

            for elems_idx in 0..(1u32 << (pw_len - 1)) {
                let mut chain = Chain::from_index(pw_len, elems_idx);

                if !chain.buckets_populated(&db) {
                    continue;
                }

                let elem_cnt = chain.elem_cnt();
                if elem_cnt < config.elem_cnt_min || elem_cnt > config.elem_cnt_max {
                    continue;
                }

                chain.ks_cnt = chain.keyspace(&db);
                total_ks_cnt += &chain.ks_cnt;

                chains.push(chain);
            }

            chains.sort_by(|a, b| a.ks_cnt.cmp(&b.ks_cnt));

            groups.push(LengthGroup {
                pw_len,
                chains,
                elems_pos: 0,
            });
        }

        let mut order: Vec<usize> = (0..groups.len()).collect();
        order.sort_by(|&a, &b| {
            let cnt_a = db.bucket_len(groups[a].pw_len);
            let cnt_b = db.bucket_len(groups[b].pw_len);
            cnt_b.cmp(&cnt_a)
        });

        let dist = wordlen_distribution(&db, config.wl_dist_len);

        Self {
            db,
            groups,
            order,
            dist,
            total_ks_cnt,
            skip: BigUint::zero(),
        }
    }

    /// Total number of candidates over all admitted chains, before any
    /// skip/limit truncation.
    pub fn keyspace(&self) -> &BigUint {
        &self.total_ks_cnt
    }

    /// Set the emission window. A zero `skip` starts at the beginning; a
    /// zero `limit` runs to the end of the keyspace.
    ///
    /// Violations are reported before any output is produced.
    pub fn set_range(&mut self, skip: &BigUint, limit: &BigUint) -> Result<(), PrinceError> {
        if !skip.is_zero() && skip > &self.total_ks_cnt {
            return Err(PrinceError::Usage(
                "Value of --skip must be smaller than total keyspace".into(),
            ));
        }

        if !limit.is_zero() {
            if limit > &self.total_ks_cnt {
                return Err(PrinceError::Usage(
                    "Value of --limit must be smaller than total keyspace".into(),
                ));
            }

            let bound = skip + limit;
            if bound > self.total_ks_cnt {
                return Err(PrinceError::Usage(
                    "Value of --skip + --limit must be smaller than total keyspace".into(),
                ));
            }

            // The window end becomes the driver's stop condition.
            self.total_ks_cnt = bound;
        }

        self.skip = skip.clone();

        Ok(())
    }

    /// Walk the whole (possibly truncated) keyspace once, pushing every
    /// selected candidate plus a LF terminator into `sink`.
    ///
    /// Each pass over the schedule gives the active chain of every
    /// unfinished length one bounded batch, so lengths advance in
    /// proportion to their distribution weight instead of draining one
    /// chain to completion.
    pub fn run<W: Write>(&mut self, sink: &mut Sink<W>) -> Result<(), PrinceError> {
        let mut total_ks_pos = BigUint::zero();
        let mut pw_buf = [0u8; IN_LEN_MAX + 1];

        while total_ks_pos < self.total_ks_cnt {
            for &group_idx in &self.order {
                let group = &mut self.groups[group_idx];
                let pw_len = group.pw_len;

                if group.elems_pos == group.chains.len() {
                    continue;
                }

                let chain = &mut group.chains[group.elems_pos];

                let mut iter_max = &chain.ks_cnt - &chain.ks_pos;

                let batch = self.dist[pw_len];
                if iter_max > BigUint::from(batch) {
                    iter_max = BigUint::from(batch);
                }

                let total_ks_left = &self.total_ks_cnt - &total_ks_pos;
                if total_ks_left < iter_max {
                    iter_max = total_ks_left;
                }

                let iter_max = iter_max
                    .to_u64()
                    .expect("batch size is capped by a u64 weight");

                pw_buf[pw_len] = b'\n';

                for iter_pos in 0..iter_max {
                    if total_ks_pos >= self.skip {
                        let ks_pos = &chain.ks_pos + iter_pos;
                        chain.materialize(&self.db, &ks_pos, &mut pw_buf[..pw_len]);

                        sink.push(&pw_buf[..pw_len + 1])?;
                    }

                    total_ks_pos += 1u32;
                }

                sink.flush()?;

                chain.ks_pos += iter_max;

                if chain.ks_pos == chain.ks_cnt {
                    chain.ks_pos = BigUint::zero();
                    group.elems_pos += 1;
                }

                if total_ks_pos == self.total_ks_cnt {
                    break;
                }
            }
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    fn load(words: &[&str]) -> WordDb {
        let joined = words.join("\n") + "\n";
        WordDb::load(Cursor::new(joined.into_bytes())).unwrap()
    }

    fn config(pw_min: usize, pw_max: usize) -> Config {
        Config {
            pw_min,
            pw_max,
            ..Config::default()
        }
    }

    #[test]
    fn keyspace_sums_admitted_chains() {
        // L=1: (1) ks 1; L=2: (2) ks 1, (1,1) ks 1
        let generator = Generator::new(load(&["a", "bb"]), &config(1, 2));
        assert_eq!(generator.keyspace(), &BigUint::from(3u32));
    }

    #[test]
    fn elem_bounds_filter_chains() {
        let cfg = Config {
            pw_min: 2,
            pw_max: 2,
            elem_cnt_min: 2,
            ..Config::default()
        };
        let generator = Generator::new(load(&["a", "b", "xy"]), &cfg);
        // only (1,1) survives; (2) has a single element
        assert_eq!(generator.keyspace(), &BigUint::from(4u32));
    }

    #[test]
    fn chains_with_empty_buckets_are_dropped() {
        // no 2-byte words: L=3 admits (3), (1,1,1) but not (1,2)/(2,1)
        let generator = Generator::new(load(&["a", "b", "abc"]), &config(3, 3));
        assert_eq!(generator.keyspace(), &BigUint::from(9u32));
    }

    #[test]
    fn empty_range_has_zero_keyspace() {
        let generator = Generator::new(load(&["abcd"]), &config(1, 2));
        assert_eq!(generator.keyspace(), &BigUint::zero());
    }

    #[test]
    fn skip_beyond_keyspace_is_rejected() {
        let mut generator = Generator::new(load(&["a"]), &config(1, 1));
        let err = generator
            .set_range(&BigUint::from(2u32), &BigUint::zero())
            .unwrap_err();
        assert!(err.to_string().contains("--skip"));
    }

    #[test]
    fn limit_truncates_the_stop_condition() {
        let mut generator = Generator::new(load(&["a", "b"]), &config(1, 1));
        generator
            .set_range(&BigUint::zero(), &BigUint::from(1u32))
            .unwrap();

        let mut out = Vec::new();
        let mut sink = Sink::new(&mut out);
        generator.run(&mut sink).unwrap();
        drop(sink);
        assert_eq!(out, b"a\n");
    }

    #[test]
    fn skip_plus_limit_must_fit() {
        let mut generator = Generator::new(load(&["a", "b"]), &config(1, 1));
        let err = generator
            .set_range(&BigUint::from(1u32), &BigUint::from(2u32))
            .unwrap_err();
        assert!(err.to_string().contains("--skip + --limit"));
    }
}
