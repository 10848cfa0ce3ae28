//! Per-length batch weights for the emission schedule.

use crate::words::WordDb;
use crate::{IN_LEN_MAX, IN_LEN_MIN};

/// Candidate-length distribution observed over the first 1,000,000 entries
/// of rockyou.txt, indexed by output length.
const DEFAULT_WORDLEN_DIST: [u64; 25] = [
    0, 15, 56, 350, 3315, 43721, 276252, 201748, 226412, 119885, 75075, 26323,
    13373, 6353, 3540, 1877, 972, 311, 151, 81, 66, 21, 16, 13, 13,
];

/// Batch weight per output length, indexed by length; index 0 is unused.
///
/// With `wl_dist_len` the weights are the observed bucket sizes, otherwise
/// the built-in table (lengths past the table get weight 1). Weights are
/// clamped to at least 1 so every batch makes progress.
pub fn wordlen_distribution(db: &WordDb, wl_dist_len: bool) -> [u64; IN_LEN_MAX + 1] {
    let mut dist = [0u64; IN_LEN_MAX + 1];

    for pw_len in IN_LEN_MIN..=IN_LEN_MAX {
        let weight = if wl_dist_len {
            db.bucket_len(pw_len)
        } else {
            DEFAULT_WORDLEN_DIST.get(pw_len).copied().unwrap_or(1)
        };

        dist[pw_len] = weight.max(1);
    }

    dist
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    #[test]
    fn built_in_table_is_used_by_default() {
        let db = WordDb::new();
        let dist = wordlen_distribution(&db, false);
        assert_eq!(dist[1], 15);
        assert_eq!(dist[8], 226412);
        assert_eq!(dist[16], 972);
    }

    #[test]
    fn observed_mode_uses_bucket_sizes() {
        let db = WordDb::load(Cursor::new(b"a\nb\nc\nde\n".to_vec())).unwrap();
        let dist = wordlen_distribution(&db, true);
        assert_eq!(dist[1], 3);
        assert_eq!(dist[2], 1);
    }

    #[test]
    fn weights_never_drop_to_zero() {
        let db = WordDb::new();
        let dist = wordlen_distribution(&db, true);
        for pw_len in IN_LEN_MIN..=IN_LEN_MAX {
            assert_eq!(dist[pw_len], 1);
        }
    }
}
