use std::path::PathBuf;

/// Number of distinct letters a wheel can carry.
pub const ALPHABET_LENGTH: usize = 26;

/// Longest dictionary line accepted, in bytes.
pub const MAX_WORD_LENGTH: usize = 255;

pub const WHEELS_FILE: &str = "wheels.txt";
pub const DICTIONARY_FILE: &str = "dictionary.txt";

/// Locations of the two input files, relative to the working directory.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub wheels: PathBuf,
    pub dictionary: PathBuf,
}

impl Config {
    pub fn new(wheels: impl Into<PathBuf>, dictionary: impl Into<PathBuf>) -> Self {
        Config {
            wheels: wheels.into(),
            dictionary: dictionary.into(),
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Config::new(WHEELS_FILE, DICTIONARY_FILE)
    }
}
