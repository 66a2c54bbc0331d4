use log::{debug, info};
use rand::distributions::{DistString, Distribution};
use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};
use std::fmt::Write as _;
use std::fs::{self, File};
use std::io::{self, BufWriter, Write};
use std::path::Path;

use crate::error::{Error, Result};
use crate::keys::KeyGenerator;
use crate::request::GenerationRequest;

/// Rows between two progress log lines.
const PROGRESS_EVERY: u64 = 1 << 16;

const WRITE_BUF_SIZE: usize = 1 << 20;

const CHARSET: &[u8] = b"ABCDEFGHIJKLMNOPQRSTUVWXYZabcdefghijklmnopqrstuvwxyz";

/// Samples `[A-Za-z]` uniformly.
#[derive(Debug, Clone, Copy)]
pub struct Alphabetic;

impl Distribution<u8> for Alphabetic {
    fn sample<R: Rng + ?Sized>(&self, rng: &mut R) -> u8 {
        CHARSET[rng.gen_range(0..CHARSET.len())]
    }
}

impl DistString for Alphabetic {
    fn append_string<R: Rng + ?Sized>(&self, rng: &mut R, string: &mut String, len: usize) {
        string.extend((0..len).map(|_| char::from(self.sample(rng))));
    }
}

/// What ended up on disk.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Summary {
    pub rows: u64,
    pub bytes: u64,
}

/// Write the file described by `req`.
pub fn generate_data(req: &GenerationRequest) -> Result<Summary> {
    let rng = match req.seed {
        Some(seed) => SmallRng::seed_from_u64(seed),
        None => SmallRng::from_entropy(),
    };
    let keys = KeyGenerator::new(req.keys, req.skew);
    write_file(&req.output, req.rows(), &keys, rng)
}

/// Create `path` (and its parents) and fill it with `rows` rows.
pub fn write_file(
    path: &Path,
    rows: u64,
    keys: &KeyGenerator,
    mut rng: SmallRng,
) -> Result<Summary> {
    if let Some(dir) = path.parent().filter(|d| !d.as_os_str().is_empty()) {
        fs::create_dir_all(dir).map_err(|e| Error::io(dir, e))?;
        debug!("Output directory {:?} ready", dir);
    }
    let file = File::create(path).map_err(|e| Error::io(path, e))?;
    debug!("Opened {:?} for writing", path);

    let mut writer = BufWriter::with_capacity(WRITE_BUF_SIZE, file);
    let summary =
        write_rows(&mut writer, rows, keys, &mut rng).map_err(|e| Error::io(path, e))?;
    debug!("Closed {:?}", path);
    info!(
        "Wrote {} rows ({}B) to {:?}",
        summary.rows, summary.bytes, path
    );
    Ok(summary)
}

/// Write `rows` lines of `<key>|<value>\n` into `out` and flush it. Each line
/// is fully formatted before it reaches the writer.
pub fn write_rows<W: Write, R: Rng + ?Sized>(
    out: &mut W,
    rows: u64,
    keys: &KeyGenerator,
    rng: &mut R,
) -> io::Result<Summary> {
    let mut line = String::with_capacity(crate::VALUE_LEN + 24);
    let mut bytes = 0;
    for row in 0..rows {
        let key = keys.key(row, rng);
        line.clear();
        // Formatting into a String cannot fail.
        let _ = write!(line, "{key}|");
        Alphabetic.append_string(rng, &mut line, crate::VALUE_LEN);
        line.push('\n');

        out.write_all(line.as_bytes())?;
        bytes += line.len() as u64;
        if (row + 1) % PROGRESS_EVERY == 0 {
            info!("Wrote {} of {} rows", row + 1, rows);
        }
    }
    out.flush()?;
    Ok(Summary { rows, bytes })
}
