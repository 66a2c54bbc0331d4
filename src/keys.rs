use rand::Rng;
use rand_distr::StandardNormal;

use crate::error::{Error, Result};

/// Exponent of the fixed bias term `e^1.0` in the skew transform.
const BIAS_EXPONENT: f64 = 1.0;

/// The set of keys rows are drawn from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeySpace {
    /// Every row gets its own index as key (`--keys -1`).
    RowIndex,
    /// Keys are drawn from `[0, n)`.
    Bounded(i64),
}

impl KeySpace {
    pub fn from_flag(keys: i64) -> Result<Self> {
        match keys {
            -1 => Ok(KeySpace::RowIndex),
            n if n > 0 => Ok(KeySpace::Bounded(n)),
            n => Err(Error::invalid("keys", n)),
        }
    }
}

/// Produces the key column, one row at a time.
#[derive(Debug, Clone, Copy)]
pub struct KeyGenerator {
    space: KeySpace,
    skew: f64,
}

impl KeyGenerator {
    pub fn new(space: KeySpace, skew: f64) -> Self {
        Self { space, skew }
    }

    pub fn key<R: Rng + ?Sized>(&self, row: u64, rng: &mut R) -> i64 {
        match self.space {
            // Row counts are capped at i64::MAX when the request is built.
            KeySpace::RowIndex => row as i64,
            KeySpace::Bounded(n) if self.skew == 0.0 => rng.gen_range(0..n),
            KeySpace::Bounded(n) => skewed_bounded_int(0, n, self.skew, rng),
        }
    }
}

/// Draw an integer around the middle of `[min, max)` by pushing a standard
/// normal sample through a logistic curve. The result is not clamped.
pub fn skewed_bounded_int<R: Rng + ?Sized>(min: i64, max: i64, skew: f64, rng: &mut R) -> i64 {
    let g: f64 = rng.sample(StandardNormal);
    skew_transform(min, max, skew, g)
}

/// `mid + range * (b / (b + e^(-g/skew)) - 0.5)`, truncated toward zero.
pub fn skew_transform(min: i64, max: i64, skew: f64, g: f64) -> i64 {
    let range = max - min;
    let mid = min + range / 2;
    let bias = BIAS_EXPONENT.exp();
    let warped = bias / (bias + (-g / skew).exp()) - 0.5;
    (mid as f64 + range as f64 * warped) as i64
}
