use crate::error::PrinceError;
use crate::{IN_LEN_MAX, IN_LEN_MIN};

/// Runtime parameters for a generator run.
///
/// The defaults mirror the classic tool: candidate lengths 1..=16, chains of
/// 1..=8 elements, batch weights taken from the built-in distribution table.
#[derive(Debug, Clone)]
pub struct Config {
    /// Minimum candidate length in bytes.
    pub pw_min: usize,
    /// Maximum candidate length in bytes.
    pub pw_max: usize,
    /// Minimum number of elements per chain.
    pub elem_cnt_min: usize,
    /// Maximum number of elements per chain.
    pub elem_cnt_max: usize,
    /// Derive batch weights from the loaded word list instead of the
    /// built-in distribution table.
    pub wl_dist_len: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            pw_min: IN_LEN_MIN,
            pw_max: IN_LEN_MAX,
            elem_cnt_min: 1,
            elem_cnt_max: 8,
            wl_dist_len: false,
        }
    }
}

impl Config {
    /// Validate raw (possibly negative) argument values and build a config.
    ///
    /// Checks run in a fixed order so the first offending flag is the one
    /// reported.
    pub fn new(
        pw_min: i64,
        pw_max: i64,
        elem_cnt_min: i64,
        elem_cnt_max: i64,
        wl_dist_len: bool,
    ) -> Result<Self, PrinceError> {
        if pw_min <= 0 {
            return Err(usage(format!(
                "Value of --pw-min ({pw_min}) must be greater than 0"
            )));
        }

        if pw_max <= 0 {
            return Err(usage(format!(
                "Value of --pw-max ({pw_max}) must be greater than 0"
            )));
        }

        if elem_cnt_min <= 0 {
            return Err(usage(format!(
                "Value of --elem-cnt-min ({elem_cnt_min}) must be greater than 0"
            )));
        }

        if elem_cnt_max <= 0 {
            return Err(usage(format!(
                "Value of --elem-cnt-max ({elem_cnt_max}) must be greater than 0"
            )));
        }

        if pw_min > pw_max {
            return Err(usage(format!(
                "Value of --pw-min ({pw_min}) must be smaller or equal than value of --pw-max ({pw_max})"
            )));
        }

        if elem_cnt_min > elem_cnt_max {
            return Err(usage(format!(
                "Value of --elem-cnt-min ({elem_cnt_min}) must be smaller or equal than value of --elem-cnt-max ({elem_cnt_max})"
            )));
        }

        if (pw_min as usize) < IN_LEN_MIN {
            return Err(usage(format!(
                "Value of --pw-min ({pw_min}) must be greater or equal than {IN_LEN_MIN}"
            )));
        }

        if pw_max as usize > IN_LEN_MAX {
            return Err(usage(format!(
                "Value of --pw-max ({pw_max}) must be smaller or equal than {IN_LEN_MAX}"
            )));
        }

        Ok(Self {
            pw_min: pw_min as usize,
            pw_max: pw_max as usize,
            elem_cnt_min: elem_cnt_min as usize,
            elem_cnt_max: elem_cnt_max as usize,
            wl_dist_len,
        })
    }
}

fn usage(msg: String) -> PrinceError {
    PrinceError::Usage(msg)
}
