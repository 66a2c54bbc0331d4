use std::path::PathBuf;

use crate::{
    cli::gen::GenArgs,
    error::{Error, Result},
    keys::KeySpace,
};

/// Rows needed for one GiB of values.
pub const ROWS_PER_GIB: u64 = crate::ONE_GIB / crate::VALUE_LEN as u64;

/// Number of rows that make up `size_gb` gigabytes of values, or `None` on
/// overflow. Key digits, the delimiter and the newline are not counted.
pub fn rows_for_size(size_gb: u64) -> Option<u64> {
    ROWS_PER_GIB
        .checked_mul(size_gb)
        .filter(|&rows| rows <= i64::MAX as u64)
}

/// A validated description of one output file.
#[derive(Debug, Clone)]
pub struct GenerationRequest {
    pub output: PathBuf,
    pub size_gb: u64,
    pub keys: KeySpace,
    pub skew: f64,
    pub seed: Option<u64>,
    rows: u64,
}

impl GenerationRequest {
    pub fn new(
        output: PathBuf,
        size_gb: u64,
        keys: i64,
        skew: f64,
        seed: Option<u64>,
    ) -> Result<Self> {
        if size_gb == 0 {
            return Err(Error::invalid("size", size_gb));
        }
        let rows = rows_for_size(size_gb).ok_or_else(|| Error::invalid("size", size_gb))?;
        let keys = KeySpace::from_flag(keys)?;
        if !skew.is_finite() || skew < 0.0 {
            return Err(Error::invalid("skewness", skew));
        }
        Ok(Self {
            output,
            size_gb,
            keys,
            skew,
            seed,
            rows,
        })
    }

    pub fn rows(&self) -> u64 {
        self.rows
    }
}

impl TryFrom<&GenArgs> for GenerationRequest {
    type Error = Error;

    fn try_from(args: &GenArgs) -> Result<Self> {
        GenerationRequest::new(
            args.data_dir.clone(),
            args.size,
            args.keys,
            args.skewness,
            args.seed,
        )
    }
}
