use std::{
    fs::File,
    io::{BufRead, BufReader},
    path::Path,
};

use crate::{
    error::{Error, Result},
    wheel::{letter_index, Lock, Wheel},
};

/// Reads a wheel configuration file from disk.
pub fn load_lock(path: &Path) -> Result<Lock> {
    let file = File::open(path).map_err(Error::WheelFile)?;
    read_lock(BufReader::new(file))
}

/// Parses a wheel configuration: the wheel count and the letters per wheel as
/// the first two tokens, then one row of letters per wheel.
///
/// Rows are checked byte by byte, so a stray non-ASCII byte is reported as a
/// non-alphabetical character rather than a read failure.
pub fn read_lock<R: BufRead>(reader: R) -> Result<Lock> {
    let mut lines = reader.split(b'\n');

    let mut tokens: Vec<String> = Vec::with_capacity(2);
    while tokens.len() < 2 {
        let Some(line) = lines.next() else {
            break;
        };
        let line = line.map_err(Error::WheelFile)?;
        tokens.extend(
            String::from_utf8_lossy(&line)
                .split_whitespace()
                .map(str::to_owned),
        );
    }

    let wheel_count = parse_count(tokens.first())
        .ok_or_else(|| Error::InvalidWheelCount(tokens.first().cloned().unwrap_or_default()))?;
    let letters_per_wheel = parse_count(tokens.get(1))
        .ok_or_else(|| Error::InvalidLettersPerWheel(tokens.get(1).cloned().unwrap_or_default()))?;
    if let Some(extra) = tokens.get(2) {
        return Err(Error::UnexpectedHeaderToken(extra.to_owned()));
    }

    let mut wheels = Vec::new();
    for idx in 0..wheel_count {
        let row = match lines.next() {
            Some(line) => line.map_err(Error::WheelFile)?,
            None => {
                return Err(Error::MissingWheels {
                    expected: wheel_count,
                    found: idx,
                })
            }
        };
        wheels.push(parse_row(&row, letters_per_wheel, idx + 1)?);
    }

    Ok(Lock::new(wheels, letters_per_wheel))
}

fn parse_count(token: Option<&String>) -> Option<usize> {
    token?.parse::<usize>().ok().filter(|&count| count > 0)
}

/// `wheel` is the 1-based wheel number used in error messages.
fn parse_row(row: &[u8], letters_per_wheel: usize, wheel: usize) -> Result<Wheel> {
    let row = row.strip_suffix(b"\r").unwrap_or(row);
    if row.len() > letters_per_wheel {
        return Err(Error::TooManyLetters { wheel });
    }

    let mut result = Wheel::new();
    for idx in 0..letters_per_wheel {
        let Some(&byte) = row.get(idx) else {
            return Err(Error::InsufficientLetters { wheel });
        };
        // Bytes past ASCII show up as their Latin-1 character.
        let c = byte as char;
        if letter_index(c).is_none() {
            return Err(Error::NonAlphabetic { wheel, found: c });
        }
        result.add(c);
    }

    Ok(result)
}
