use std::{fmt::Display, io::Write};

use indicatif::ProgressBar;

use crate::{
    error::{Error, Result},
    matcher::alignments,
    wheel::Lock,
};

/// Tally of the words found on the lock. The words themselves are written
/// out by [`run`] as they are found.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct Report {
    distinct: usize,
    total: usize,
}

impl Report {
    pub fn new() -> Self {
        Report::default()
    }

    /// Records the alignment count of one word. Words that never align are
    /// not counted.
    pub fn record(&mut self, alignments: usize) {
        if alignments == 0 {
            return;
        }
        self.total += alignments;
        self.distinct += 1;
    }

    /// Sum of the alignment counts of every recorded word.
    pub fn total(&self) -> usize {
        self.total
    }

    /// Number of distinct lines that matched at least once.
    pub fn distinct(&self) -> usize {
        self.distinct
    }
}

/// The summary line. The count is the alignment total, not the number of
/// words.
impl Display for Report {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Found {} words.", self.total)
    }
}

/// Matches every word against the lock, writing each word that aligns at
/// least once to `out` as soon as it is found.
///
/// Stops at the first error. Words already written are left in place.
pub fn run<I, W>(lock: &Lock, words: I, out: &mut W, progress: &ProgressBar) -> Result<Report>
where
    I: IntoIterator<Item = Result<String>>,
    W: Write,
{
    let mut report = Report::new();

    for word in words {
        let word = word?;
        progress.inc(1);

        let count = alignments(lock, &word);
        if count > 0 {
            writeln!(out, "{}", word).map_err(Error::Output)?;
            report.record(count);
        }
    }

    Ok(report)
}
