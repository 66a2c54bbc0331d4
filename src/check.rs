use std::{
    fs::File,
    io::{BufRead, BufReader},
    path::Path,
};

use log::{debug, info};

use crate::{
    cli::check::CheckArgs,
    error::{Error, Result},
    generate::Summary,
    keys::KeySpace,
    request::rows_for_size,
};

/// Constraints a checked file must satisfy beyond the row format.
#[derive(Debug, Clone, Copy, Default)]
pub struct Expectations {
    /// `RowIndex` requires keys `0, 1, 2, ...`; `Bounded(n)` requires `[0, n)`.
    pub keys: Option<KeySpace>,
    pub rows: Option<u64>,
}

impl TryFrom<&CheckArgs> for Expectations {
    type Error = Error;

    fn try_from(args: &CheckArgs) -> Result<Self> {
        let keys = match args.keys.map(KeySpace::from_flag).transpose()? {
            Some(KeySpace::Bounded(_)) if !args.strict_range => None,
            keys => keys,
        };
        let rows = match args.size {
            Some(size) => {
                Some(rows_for_size(size).ok_or_else(|| Error::invalid("size", size))?)
            }
            None => None,
        };
        Ok(Self { keys, rows })
    }
}

pub fn check(file: &Path, expect: Expectations) -> Result<Summary> {
    debug!("Checking file {:?}", file);
    let f = File::open(file).map_err(|e| Error::io(file, e))?;
    let summary = check_rows(BufReader::new(f), expect, file)?;
    info!(
        "{:?} holds {} well-formed rows ({}B)",
        file, summary.rows, summary.bytes
    );
    Ok(summary)
}

/// Validate every line read from `reader`, stopping at the first bad one.
/// `origin` only labels I/O errors.
pub fn check_rows<R: BufRead>(
    mut reader: R,
    expect: Expectations,
    origin: &Path,
) -> Result<Summary> {
    let mut buf = Vec::with_capacity(crate::VALUE_LEN + 24);
    let mut rows = 0u64;
    let mut bytes = 0u64;
    loop {
        buf.clear();
        let n = reader
            .read_until(b'\n', &mut buf)
            .map_err(|e| Error::io(origin, e))?;
        if n == 0 {
            break;
        }
        let line = rows + 1;
        let Some(body) = buf.strip_suffix(b"\n") else {
            return Err(Error::malformed(line, "missing trailing newline"));
        };
        let key = check_row(body, line)?;
        match expect.keys {
            Some(KeySpace::RowIndex) if key != rows as i64 => {
                return Err(Error::malformed(
                    line,
                    format!("key {key} out of order, expected {rows}"),
                ));
            }
            Some(KeySpace::Bounded(n)) if !(0..n).contains(&key) => {
                return Err(Error::malformed(
                    line,
                    format!("key {key} outside [0, {n})"),
                ));
            }
            _ => {}
        }
        rows += 1;
        bytes += n as u64;
    }
    if let Some(want) = expect.rows {
        if rows != want {
            return Err(Error::malformed(
                rows,
                format!("found {rows} rows, expected {want}"),
            ));
        }
    }
    Ok(Summary { rows, bytes })
}

fn check_row(body: &[u8], line: u64) -> Result<i64> {
    let text = std::str::from_utf8(body).map_err(|_| Error::malformed(line, "not UTF-8"))?;
    let (key, value) = text
        .split_once('|')
        .ok_or_else(|| Error::malformed(line, "missing '|' delimiter"))?;
    let key: i64 = key
        .parse()
        .map_err(|_| Error::malformed(line, format!("key '{key}' is not an integer")))?;
    if value.len() != crate::VALUE_LEN {
        return Err(Error::malformed(
            line,
            format!("value is {}B, expected {}B", value.len(), crate::VALUE_LEN),
        ));
    }
    if let Some(c) = value.chars().find(|c| !c.is_ascii_alphabetic()) {
        return Err(Error::malformed(line, format!("unexpected character {c:?}")));
    }
    Ok(key)
}
