use std::{
    fs::File,
    io::{BufRead, BufReader, Read},
    path::Path,
};

use crate::{
    config::MAX_WORD_LENGTH,
    error::{Error, Result},
};

/// Most bytes pulled from the reader for one line: the longest word plus a
/// `\r\n` terminator.
const LINE_LIMIT: usize = MAX_WORD_LENGTH + 2;

/// Streams candidate words out of a word list, one per line.
///
/// Words are lower-cased. Lines that could never be spelled on the lock are
/// skipped: empty lines, lines with anything other than ASCII letters, and
/// words longer than the lock has wheels. A line over [`MAX_WORD_LENGTH`]
/// bytes ends the scan with [`Error::WordTooLong`], without reading the rest
/// of that line.
pub struct Dictionary<R> {
    reader: R,
    wheel_count: usize,
    line: usize,
    done: bool,
}

impl Dictionary<BufReader<File>> {
    pub fn open(path: &Path, wheel_count: usize) -> Result<Self> {
        let file = File::open(path).map_err(Error::DictionaryFile)?;
        Ok(Dictionary::new(BufReader::new(file), wheel_count))
    }
}

impl<R: BufRead> Dictionary<R> {
    pub fn new(reader: R, wheel_count: usize) -> Self {
        Dictionary {
            reader,
            wheel_count,
            line: 0,
            done: false,
        }
    }

    /// Reads the next line, capped at [`LINE_LIMIT`] bytes. `Ok(None)` at the
    /// end of input.
    fn read_line(&mut self) -> Result<Option<Vec<u8>>> {
        let mut line = Vec::with_capacity(LINE_LIMIT);
        let read = self
            .reader
            .by_ref()
            .take(LINE_LIMIT as u64)
            .read_until(b'\n', &mut line)
            .map_err(Error::DictionaryFile)?;
        if read == 0 {
            return Ok(None);
        }
        self.line += 1;

        if line.last() == Some(&b'\n') {
            line.pop();
        } else if line.len() == LINE_LIMIT {
            return Err(self.too_long());
        }

        Ok(Some(line))
    }

    fn too_long(&self) -> Error {
        Error::WordTooLong {
            line: self.line,
            max: MAX_WORD_LENGTH,
        }
    }

    fn candidate(&self, mut line: Vec<u8>) -> Result<Option<String>> {
        if line.last() == Some(&b'\r') {
            line.pop();
        }

        if line.len() > MAX_WORD_LENGTH {
            return Err(self.too_long());
        }

        if line.is_empty()
            || line.len() > self.wheel_count
            || !line.iter().all(u8::is_ascii_alphabetic)
        {
            return Ok(None);
        }

        line.make_ascii_lowercase();
        // Only ASCII letters remain.
        Ok(String::from_utf8(line).ok())
    }
}

impl<R: BufRead> Iterator for Dictionary<R> {
    type Item = Result<String>;

    fn next(&mut self) -> Option<Self::Item> {
        while !self.done {
            let word = self
                .read_line()
                .and_then(|line| line.map_or(Ok(None), |line| self.candidate(line).map(Some)));

            match word {
                Ok(Some(Some(word))) => return Some(Ok(word)),
                Ok(Some(None)) => continue,
                Ok(None) => self.done = true,
                Err(err) => {
                    self.done = true;
                    return Some(Err(err));
                }
            }
        }

        None
    }
}
